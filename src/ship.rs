//! Ship type: a contiguous run of cells in one orientation.

use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use crate::common::PlaceError;
use crate::grid::Grid;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl FromStr for Orientation {
    type Err = PlaceError;

    /// Parse the external "H"/"V" orientation token (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "H" | "h" => Ok(Orientation::Horizontal),
            "V" | "v" => Ok(Orientation::Vertical),
            _ => Err(PlaceError::InvalidOrientation),
        }
    }
}

/// A ship placed on an n×n board.
///
/// Cells are materialized at construction, ordered from the origin along the
/// orientation. Hits are not stored here; sunk status is derived from the
/// opposing shot history on every query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ship {
    origin: (usize, usize),
    length: usize,
    orientation: Orientation,
    cells: Vec<(usize, usize)>,
}

impl Ship {
    /// Build a ship at `origin` with `orientation` on a board of side `n`.
    ///
    /// Rejects zero-length ships and any run that leaves the board.
    pub fn new(
        n: usize,
        origin: (usize, usize),
        length: usize,
        orientation: Orientation,
    ) -> Result<Self, PlaceError> {
        let (row, col) = origin;
        if length == 0 || row >= n || col >= n {
            return Err(PlaceError::OutOfBounds);
        }
        match orientation {
            Orientation::Horizontal => {
                if col + length > n {
                    return Err(PlaceError::OutOfBounds);
                }
            }
            Orientation::Vertical => {
                if row + length > n {
                    return Err(PlaceError::OutOfBounds);
                }
            }
        }
        let cells = (0..length)
            .map(|i| match orientation {
                Orientation::Horizontal => (row, col + i),
                Orientation::Vertical => (row + i, col),
            })
            .collect();
        Ok(Ship {
            origin,
            length,
            orientation,
            cells,
        })
    }

    /// Cells occupied by the ship, in run order from the origin.
    pub fn cells(&self) -> &[(usize, usize)] {
        &self.cells
    }

    /// Returns true if (row, col) is one of the ship's cells.
    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.cells.iter().any(|&cell| cell == (row, col))
    }

    /// Derived sunk status: every cell appears in the fired-shot mask.
    pub fn is_sunk(&self, fired: &Grid) -> bool {
        self.cells
            .iter()
            .all(|&(r, c)| fired.get(r, c).unwrap_or(false))
    }

    /// Origin of the ship (row, col).
    pub fn origin(&self) -> (usize, usize) {
        self.origin
    }

    /// Ship's length in cells.
    pub fn length(&self) -> usize {
        self.length
    }

    /// Orientation of the ship.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }
}

impl fmt::Display for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "length {} at ({}, {}) {:?}",
            self.length, self.origin.0, self.origin.1, self.orientation
        )
    }
}
