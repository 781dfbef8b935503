#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod board;
mod common;
mod fleet;
mod grid;
#[cfg(feature = "std")]
mod logging;
mod session;
mod ship;
mod shot;

pub use board::*;
pub use common::*;
pub use fleet::*;
pub use grid::{BitGrid, Grid, GridError, SetBits};
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use session::*;
pub use ship::*;
pub use shot::*;
