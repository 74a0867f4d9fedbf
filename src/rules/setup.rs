//! Setup validation and automatic arrangement.
//!
//! A setup is the list of `{kind, position}` descriptors a side submits
//! before play. Its composition must match the game's `Composition` exactly:
//! same total, same count for every kind, no kinds outside the table.
//!
//! Cell checks (on the board, empty, no duplicates) need the board and are
//! done by the engine; see `Game::check_setup`.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::ops::Range;

use crate::board::Board;
use crate::core::{Composition, Coordinate, GameRng, RuleError};
use crate::pieces::PieceKind;

/// One piece of a submitted setup.
///
/// Deserializes from the boundary form `{"kind": "scout", "position": "6_6"}`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PieceDescriptor {
    pub kind: PieceKind,
    pub position: Coordinate,
}

impl PieceDescriptor {
    #[must_use]
    pub fn new(kind: PieceKind, position: Coordinate) -> Self {
        Self { kind, position }
    }
}

/// Check the per-kind counts of a setup against `expected`.
pub fn validate_composition(
    descriptors: &[PieceDescriptor],
    expected: &Composition,
) -> Result<(), RuleError> {
    if descriptors.len() != expected.total() {
        return Err(RuleError::SetupSize {
            expected: expected.total(),
            actual: descriptors.len(),
        });
    }

    let mut actual: FxHashMap<PieceKind, usize> = FxHashMap::default();
    for descriptor in descriptors {
        *actual.entry(descriptor.kind).or_insert(0) += 1;
    }

    for kind in PieceKind::ALL {
        let have = actual.get(&kind).copied().unwrap_or(0);
        let want = expected.count(kind);
        if have != want {
            return Err(RuleError::SetupComposition {
                kind,
                expected: want,
                actual: have,
            });
        }
    }

    Ok(())
}

/// Draw a random setup onto the empty cells of `rows`.
///
/// Fails with `SetupSize` if the rows do not have enough empty cells for the
/// whole composition.
pub fn random_setup(
    board: &Board,
    rows: Range<i32>,
    composition: &Composition,
    rng: &mut GameRng,
) -> Result<Vec<PieceDescriptor>, RuleError> {
    let cells: Vec<Coordinate> = rows
        .flat_map(|row| (0..board.cols()).map(move |col| Coordinate::new(row, col)))
        .filter(|&at| board.is_empty(at))
        .collect();

    let kinds = composition.kinds();
    if cells.len() < kinds.len() {
        return Err(RuleError::SetupSize {
            expected: kinds.len(),
            actual: cells.len(),
        });
    }

    let picked = rng.sample(&cells, kinds.len());
    Ok(kinds
        .into_iter()
        .zip(picked)
        .map(|(kind, position)| PieceDescriptor { kind, position })
        .collect())
}
