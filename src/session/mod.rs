//! Session-facing entry points.
//!
//! `GameRegistry` owns every active game and exposes the synchronous
//! operations the HTTP/session layer calls: create, join, arrange, move,
//! attack, and army views.

pub mod registry;

pub use registry::GameRegistry;
