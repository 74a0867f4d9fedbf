//! Board occupancy index.
//!
//! The board maps every cell to `Empty`, `Lake`, or the public face of the
//! piece standing there. It is an index kept in step with the armies by the
//! engine: the armies are the source of truth for pieces, the board answers
//! "what is on this cell" in O(1).
//!
//! Lakes are stamped once and are never cleared, so they are never `Empty`
//! and never accept a piece.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::{Coordinate, Side};
use crate::pieces::PieceKind;

/// What the board shows for a piece: who owns it and what it is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Occupant {
    pub side: Side,
    pub kind: PieceKind,
}

/// Contents of a board cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    Lake,
    Occupied(Occupant),
}

impl Cell {
    #[must_use]
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    #[must_use]
    pub fn occupant(self) -> Option<Occupant> {
        match self {
            Cell::Occupied(occupant) => Some(occupant),
            _ => None,
        }
    }
}

/// The playing grid.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    rows: i32,
    cols: i32,
    cells: FxHashMap<Coordinate, Cell>,
}

impl Board {
    /// Allocate an empty `rows` × `cols` grid and stamp the lakes.
    ///
    /// Lakes outside the grid are ignored.
    #[must_use]
    pub fn new(rows: i32, cols: i32, lakes: &[Coordinate]) -> Self {
        let mut cells = FxHashMap::default();
        for row in 0..rows {
            for col in 0..cols {
                cells.insert(Coordinate::new(row, col), Cell::Empty);
            }
        }
        for lake in lakes {
            if let Some(cell) = cells.get_mut(lake) {
                *cell = Cell::Lake;
            }
        }

        Self { rows, cols, cells }
    }

    #[must_use]
    pub fn rows(&self) -> i32 {
        self.rows
    }

    #[must_use]
    pub fn cols(&self) -> i32 {
        self.cols
    }

    #[must_use]
    pub fn contains(&self, at: Coordinate) -> bool {
        at.within_bounds(self.rows, self.cols)
    }

    /// Contents of a cell, or `None` off the board.
    #[must_use]
    pub fn cell(&self, at: Coordinate) -> Option<Cell> {
        self.cells.get(&at).copied()
    }

    /// Check a cell is on the board and empty.
    #[must_use]
    pub fn is_empty(&self, at: Coordinate) -> bool {
        self.cell(at) == Some(Cell::Empty)
    }

    #[must_use]
    pub fn occupant(&self, at: Coordinate) -> Option<Occupant> {
        self.cell(at).and_then(Cell::occupant)
    }

    /// First non-empty cell strictly between `from` and `to`, if any.
    #[must_use]
    pub fn first_obstacle(&self, from: Coordinate, to: Coordinate) -> Option<Coordinate> {
        from.cells_between(to)
            .into_iter()
            .find(|&at| !self.is_empty(at))
    }

    /// Put an occupant on an empty cell. Returns false if the cell is off the
    /// board or not empty.
    pub fn place(&mut self, at: Coordinate, occupant: Occupant) -> bool {
        match self.cells.get_mut(&at) {
            Some(cell) if cell.is_empty() => {
                *cell = Cell::Occupied(occupant);
                true
            }
            _ => false,
        }
    }

    /// Remove the occupant of a cell, returning it. Lakes are untouched.
    pub fn vacate(&mut self, at: Coordinate) -> Option<Occupant> {
        let cell = self.cells.get_mut(&at)?;
        let occupant = cell.occupant()?;
        *cell = Cell::Empty;
        Some(occupant)
    }

    /// Move the occupant of `from` onto `to`, leaving `from` empty.
    ///
    /// Does nothing and returns false unless `from` is occupied and `to` is
    /// empty.
    pub fn relocate(&mut self, from: Coordinate, to: Coordinate) -> bool {
        let Some(occupant) = self.occupant(from) else {
            return false;
        };
        if !self.place(to, occupant) {
            return false;
        }
        self.vacate(from);
        true
    }

    /// Every occupied cell in row-major order.
    pub fn occupied(&self) -> impl Iterator<Item = (Coordinate, Occupant)> + '_ {
        (0..self.rows)
            .flat_map(move |row| (0..self.cols).map(move |col| Coordinate::new(row, col)))
            .filter_map(|at| self.occupant(at).map(|o| (at, o)))
    }
}
