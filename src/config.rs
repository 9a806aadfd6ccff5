use crate::{Coord, Position};
use anyhow::{ensure, Result};

/// Everything that parameterizes a game: board size, starting snake,
/// pacing and the symbols the grid is drawn with.
#[derive(Debug, Clone)]
pub struct GameConfig {
    pub cols: Coord,
    pub rows: Coord,
    pub initial_len: usize,
    pub tick_ms: u64,
    pub empty_char: char,
    pub apple_char: char,
    pub head_char: char,
    pub body_char: char,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            cols: 8,
            rows: 16,
            initial_len: 2,
            tick_ms: 600,
            empty_char: '.',
            apple_char: '*',
            head_char: '@',
            body_char: 'o',
        }
    }
}

impl GameConfig {
    pub fn new(cols: Coord, rows: Coord) -> Self {
        GameConfig { cols, rows, ..Default::default() }
    }

    /// Small board for tests.
    pub fn small() -> Self {
        Self::new(6, 4)
    }

    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.0 >= 0 && pos.0 < self.cols && pos.1 >= 0 && pos.1 < self.rows
    }

    pub fn cell_count(&self) -> usize {
        self.cols as usize * self.rows as usize
    }

    /// All board cells, row by row.
    pub fn cells(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.rows).flat_map(move |y| (0..self.cols).map(move |x| (x, y)))
    }

    pub fn center(&self) -> Position {
        (self.cols / 2, self.rows / 2)
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(self.cols >= 2 && self.rows >= 2, "board must be at least 2x2");
        ensure!(self.initial_len >= 2, "snake must start with at least 2 segments");
        // The snake starts centered heading left, trailing to the right
        let trail_end = self.center().0 + self.initial_len as Coord - 1;
        ensure!(
            trail_end < self.cols,
            "initial snake of length {} does not fit on a {}-column board",
            self.initial_len,
            self.cols
        );
        ensure!(self.tick_ms > 0, "tick interval must be positive");
        Ok(())
    }
}
