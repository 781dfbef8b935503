//! Board state: occupancy grid plus the fleet placed on it.
//!
//! Occupancy is committed once per ship and never cleared afterwards; hits
//! live in the opposing shot history, so "is this a ship cell" stays
//! answerable for the life of the board.

use alloc::vec::Vec;
use rand::Rng;

use crate::common::PlaceError;
use crate::fleet;
use crate::grid::Grid;
use crate::ship::{Orientation, Ship};

/// Retry cap for random placement sampling. Exhausting it reports
/// `PlaceError::Infeasible` rather than looping forever on a board too small
/// for its planned fleet.
const MAX_PLACEMENT_ATTEMPTS: usize = 100;

/// One player's board: n×n occupancy plus the committed fleet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    n: usize,
    occupied: Grid,
    ships: Vec<Ship>,
}

impl Board {
    /// Create an empty board of side `n` with no ships placed.
    pub fn new(n: usize) -> Self {
        Board {
            n,
            occupied: Grid::new(n),
            ships: Vec::new(),
        }
    }

    /// Side length of the board.
    pub fn size(&self) -> usize {
        self.n
    }

    /// Occupancy mask of all committed ships.
    pub fn occupancy(&self) -> &Grid {
        &self.occupied
    }

    /// Committed fleet, in placement order.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Decide whether a candidate placement is acceptable.
    ///
    /// Pure decision: checks bounds and overlap against current occupancy and
    /// returns the would-be ship without mutating the board. Callers retry
    /// with a new candidate on rejection.
    pub fn validate(
        &self,
        origin: (usize, usize),
        length: usize,
        orientation: Orientation,
    ) -> Result<Ship, PlaceError> {
        let ship = Ship::new(self.n, origin, length, orientation)?;
        for &(r, c) in ship.cells() {
            if self.occupied.get(r, c)? {
                return Err(PlaceError::Occupied);
            }
        }
        Ok(ship)
    }

    /// Validate a placement and commit it to the board.
    pub fn place(
        &mut self,
        origin: (usize, usize),
        length: usize,
        orientation: Orientation,
    ) -> Result<(), PlaceError> {
        let ship = self.validate(origin, length, orientation)?;
        for &(r, c) in ship.cells() {
            self.occupied.set(r, c)?;
        }
        log::debug!("placed ship: {}", ship);
        self.ships.push(ship);
        Ok(())
    }

    /// Sample a non-overlapping placement for a ship of `length`.
    ///
    /// Draws uniform origins and orientations until one validates, up to the
    /// retry cap. Does not mutate the board; commit via [`Board::place`].
    pub fn random_placement<R: Rng>(
        &self,
        rng: &mut R,
        length: usize,
    ) -> Result<Ship, PlaceError> {
        if length == 0 || length > self.n {
            return Err(PlaceError::Infeasible);
        }
        for _ in 0..MAX_PLACEMENT_ATTEMPTS {
            let orientation = if rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            let (max_r, max_c) = match orientation {
                Orientation::Horizontal => (self.n - 1, self.n - length),
                Orientation::Vertical => (self.n - length, self.n - 1),
            };
            let row = rng.random_range(0..=max_r);
            let col = rng.random_range(0..=max_c);
            match self.validate((row, col), length, orientation) {
                Ok(ship) => return Ok(ship),
                Err(PlaceError::Occupied) => continue,
                Err(e) => return Err(e),
            }
        }
        Err(PlaceError::Infeasible)
    }

    /// Generate a full board: plan the fleet for side `n`, then randomly
    /// place each planned ship in order.
    pub fn generate<R: Rng>(n: usize, rng: &mut R) -> Result<Self, PlaceError> {
        let mut board = Board::new(n);
        let plan = fleet::plan_fleet(n, rng);
        log::debug!("planned fleet for n={}: {:?}", n, plan);
        for length in plan {
            let ship = board.random_placement(rng, length)?;
            board.place(ship.origin(), ship.length(), ship.orientation())?;
        }
        Ok(board)
    }

    /// Fleet index of the ship occupying (row, col), if any.
    pub fn ship_at(&self, row: usize, col: usize) -> Option<usize> {
        self.ships.iter().position(|s| s.contains(row, col))
    }
}
