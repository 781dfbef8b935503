//! Shot history and shot resolution.

use alloc::vec::Vec;

use crate::board::Board;
use crate::common::ShotOutcome;
use crate::grid::{Grid, GridError};

/// Chronological record of distinct coordinates fired at one board.
///
/// Order is kept for display and replay; a grid mask backs the duplicate
/// check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShotHistory {
    order: Vec<(usize, usize)>,
    fired: Grid,
}

impl ShotHistory {
    /// Empty history for a board of side `n`.
    pub fn new(n: usize) -> Self {
        ShotHistory {
            order: Vec::new(),
            fired: Grid::new(n),
        }
    }

    /// Returns true if (row, col) was already fired at.
    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.fired.get(row, col).unwrap_or(false)
    }

    /// Shots in chronological order.
    pub fn shots(&self) -> &[(usize, usize)] {
        &self.order
    }

    /// Number of distinct shots fired.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns true if no shots were fired yet.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Mask of all fired coordinates.
    pub fn fired(&self) -> &Grid {
        &self.fired
    }

    fn record(&mut self, row: usize, col: usize) -> Result<(), GridError> {
        self.fired.set(row, col)?;
        self.order.push((row, col));
        Ok(())
    }
}

/// Resolve a shot at (row, col) against `board`, updating `history`.
///
/// A repeat coordinate classifies as `Duplicate` with no mutation; every
/// distinct coordinate is appended to the history exactly once, hit or miss.
/// A hit that completes coverage of its ship classifies as `Sunk` with the
/// ship's fleet index. Classification depends only on fleet membership and
/// history contents, so a recorded shot sequence replays exactly.
pub fn resolve(
    board: &Board,
    history: &mut ShotHistory,
    row: usize,
    col: usize,
) -> Result<ShotOutcome, GridError> {
    if history.fired.get(row, col)? {
        return Ok(ShotOutcome::Duplicate);
    }
    history.record(row, col)?;
    for (idx, ship) in board.ships().iter().enumerate() {
        if ship.contains(row, col) {
            return Ok(if ship.is_sunk(&history.fired) {
                ShotOutcome::Sunk(idx)
            } else {
                ShotOutcome::Hit
            });
        }
    }
    Ok(ShotOutcome::Miss)
}
