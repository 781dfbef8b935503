//! Fleet planning: choose the ship lengths to place for a board size.

use alloc::vec::Vec;
use rand::Rng;

/// Shortest ship length in the default size policy.
pub const MIN_SHIP_LEN: usize = 1;
/// Longest ship length in the default size policy.
pub const MAX_SHIP_LEN: usize = 3;

/// Total ship cells allotted to a board of side `n`.
pub fn cell_budget(n: usize) -> usize {
    n * n / 3
}

/// Plan the fleet for a board of side `n`.
///
/// Greedily draws random lengths, clamped to what still fits in the cell
/// budget, until the budget is exhausted. Returns the lengths in planning
/// order; the plan is empty when the budget is zero (n < 2).
pub fn plan_fleet<R: Rng>(n: usize, rng: &mut R) -> Vec<usize> {
    let budget = cell_budget(n);
    let mut lengths = Vec::new();
    let mut used = 0;
    while used < budget {
        let cap = MAX_SHIP_LEN.min(budget - used);
        let len = rng.random_range(MIN_SHIP_LEN..=cap);
        lengths.push(len);
        used += len;
    }
    lengths
}
