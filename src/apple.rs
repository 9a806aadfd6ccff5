//! Apple placement.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::config::GameConfig;
use crate::snake::Snake;
use crate::Position;

/// Draws a uniformly random unoccupied cell, or `None` when the snake
/// covers the whole board. Collecting the free cells first keeps the draw
/// uniform and always terminates, unlike resampling until a miss.
pub fn spawn(rng: &mut impl Rng, config: &GameConfig, snake: &Snake) -> Option<Position> {
    let free: Vec<Position> = config.cells().filter(|pos| !snake.occupies(*pos)).collect();
    free.choose(rng).copied()
}
