//! Terminal snake on a fixed grid.
//!
//! The game core (snake, apple placement, grid, controller) is pure and
//! deterministic once seeded; terminal I/O lives in [`term`] and the paced
//! loop in the binary.

pub mod apple;
pub mod config;
pub mod game;
pub mod grid;
pub mod snake;
pub mod term;

/// Signed so that off-grid head candidates are representable.
pub type Coord = i16;
pub type Position = (Coord, Coord);
