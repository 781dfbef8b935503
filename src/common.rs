//! Common types for the game core: shot outcomes and error taxonomy.

use core::fmt;

use crate::grid::GridError;

/// Classification of a resolved shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotOutcome {
    /// Coordinate was already fired at; nothing changed.
    Duplicate,
    /// Shot landed on open water.
    Miss,
    /// Shot hit a ship that still has unhit cells.
    Hit,
    /// Shot completed coverage of a ship, carrying its fleet index.
    Sunk(usize),
}

/// Rejections reported by placement operations.
///
/// All variants are recoverable decision outcomes: the caller retries with a
/// new candidate (random sampling) or re-prompts (manual placement).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceError {
    /// Origin or run exceeds the board bounds.
    OutOfBounds,
    /// Run overlaps a previously placed ship.
    Occupied,
    /// Orientation token was neither "H" nor "V".
    InvalidOrientation,
    /// Random sampling exhausted its retry budget without finding room.
    Infeasible,
    /// Underlying grid error.
    Grid(GridError),
}

impl From<GridError> for PlaceError {
    fn from(err: GridError) -> Self {
        PlaceError::Grid(err)
    }
}

impl fmt::Display for PlaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlaceError::OutOfBounds => write!(f, "Placement is out of bounds"),
            PlaceError::Occupied => write!(f, "Placement overlaps another ship"),
            PlaceError::InvalidOrientation => write!(f, "Orientation must be H or V"),
            PlaceError::Infeasible => write!(f, "Unable to place ship on this board"),
            PlaceError::Grid(e) => write!(f, "Grid error: {}", e),
        }
    }
}

/// Errors returned by a game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionError {
    /// The session already reached a terminal state; no further shots.
    GameOver,
    /// Shot coordinate fell outside the board.
    Grid(GridError),
}

impl From<GridError> for SessionError {
    fn from(err: GridError) -> Self {
        SessionError::Grid(err)
    }
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::GameOver => write!(f, "Game is over; no further shots accepted"),
            SessionError::Grid(e) => write!(f, "Grid error: {}", e),
        }
    }
}
