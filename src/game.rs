use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

use crate::apple;
use crate::config::GameConfig;
use crate::grid::Grid;
use crate::snake::{Direction, Snake};
use crate::Position;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Status {
    Running,
    GameOver,
    Win,
}

/// What a key press asks the driver to do.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Command {
    Turn(Direction),
    Quit,
}

pub struct Game {
    pub config: GameConfig,
    pub snake: Snake,
    pub apple: Position,
    pub status: Status,
    rng: StdRng,
}

impl Game {
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Fixed seed for reproducible apple placement.
    pub fn new_seeded(config: GameConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: GameConfig, mut rng: StdRng) -> Self {
        let snake = Snake::new(config.center(), Direction::Left, config.initial_len);
        let apple = apple::spawn(&mut rng, &config, &snake)
            .expect("a validated board has room for the first apple");
        Game { config, snake, apple, status: Status::Running, rng }
    }

    /// Advances the game by one step: apply the turn, move, then evaluate
    /// wall / self / win in that order. Terminal states stick; the caller
    /// decides how to report them.
    pub fn tick(&mut self, turn: Option<Direction>) -> Status {
        if self.status != Status::Running {
            return self.status;
        }

        if let Some(dir) = turn {
            self.snake.set_heading(dir);
        }

        let next = self.snake.next_head();
        if !self.config.in_bounds(next) {
            // Wall hit: the snake stays exactly as it was
            debug!(?next, "hit the wall");
            self.status = Status::GameOver;
            return self.status;
        }

        let ate = next == self.apple;
        self.snake.advance(ate);

        if self.snake.is_self_collision() {
            debug!(?next, "ran into itself");
            self.status = Status::GameOver;
            return self.status;
        }

        if self.snake.len() == self.config.cell_count() {
            self.status = Status::Win;
            return self.status;
        }

        if ate {
            // The win check did not fire, so a free cell exists
            if let Some(pos) = apple::spawn(&mut self.rng, &self.config, &self.snake) {
                debug!(?pos, len = self.snake.len(), "apple eaten, spawned a new one");
                self.apple = pos;
            }
        }

        Status::Running
    }

    pub fn grid(&self) -> Grid {
        Grid::from_state(&self.config, &self.snake, self.apple)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_game_starts_centered_and_running() {
        let game = Game::new_seeded(GameConfig::default(), 7);
        assert_eq!(game.status, Status::Running);
        assert_eq!(game.snake.head(), (4, 8));
        assert_eq!(game.snake.len(), 2);
        assert!(!game.snake.occupies(game.apple));
    }

    #[test]
    fn wall_hit_ends_the_game_without_moving_the_snake() {
        let mut game = Game::new_seeded(GameConfig::small(), 7);
        game.snake = Snake::new((0, 1), Direction::Left, 2);
        game.apple = (4, 3);

        let status = game.tick(None);
        assert_eq!(status, Status::GameOver);
        assert_eq!(game.snake.head(), (0, 1));
        assert_eq!(game.snake.len(), 2);
        assert!(game.snake.occupies((1, 1)));
    }

    #[test]
    fn eating_grows_by_one_and_respawns_the_apple() {
        let mut game = Game::new_seeded(GameConfig::small(), 7);
        game.snake = Snake::new((3, 2), Direction::Left, 2);
        game.apple = (2, 2);

        let status = game.tick(None);
        assert_eq!(status, Status::Running);
        assert_eq!(game.snake.len(), 3);
        assert_eq!(game.snake.head(), (2, 2));
        assert_ne!(game.apple, (2, 2));
        assert!(!game.snake.occupies(game.apple));
    }

    #[test]
    fn opposite_input_does_not_turn_the_snake() {
        let mut game = Game::new_seeded(GameConfig::small(), 7);
        game.apple = (0, 0);

        let head_before = game.snake.head();
        game.tick(Some(Direction::Right)); // heading is Left
        assert_eq!(game.snake.head(), (head_before.0 - 1, head_before.1));
    }

    #[test]
    fn self_collision_ends_the_game() {
        let mut game = Game::new_seeded(GameConfig::new(8, 8), 7);
        game.snake = Snake::new((4, 4), Direction::Right, 5);
        game.apple = (0, 0);

        game.tick(Some(Direction::Down));
        game.tick(Some(Direction::Left));
        let status = game.tick(Some(Direction::Up));
        assert_eq!(status, Status::GameOver);
    }

    #[test]
    fn win_triggers_exactly_on_a_full_board() {
        let mut game = Game::new_seeded(GameConfig::new(2, 2), 7);
        game.snake = Snake::new((0, 0), Direction::Left, 2);
        game.apple = (0, 1);

        assert_eq!(game.tick(Some(Direction::Down)), Status::Running);
        assert_eq!(game.snake.len(), 3);
        assert_eq!(game.apple, (1, 1)); // only free cell left

        assert_eq!(game.tick(Some(Direction::Right)), Status::Win);
        assert_eq!(game.snake.len(), 4);
    }

    #[test]
    fn terminal_status_sticks() {
        let mut game = Game::new_seeded(GameConfig::small(), 7);
        game.snake = Snake::new((0, 1), Direction::Left, 2);
        game.apple = (4, 3);

        assert_eq!(game.tick(None), Status::GameOver);
        let len = game.snake.len();
        assert_eq!(game.tick(Some(Direction::Down)), Status::GameOver);
        assert_eq!(game.snake.len(), len);
    }

    #[test]
    fn length_changes_by_at_most_one_per_tick() {
        let mut game = Game::new_seeded(GameConfig::small(), 11);
        let turns = [
            Some(Direction::Down),
            None,
            Some(Direction::Right),
            None,
            Some(Direction::Up),
            Some(Direction::Left),
        ];

        let mut len = game.snake.len();
        for turn in turns.iter().cycle().take(60) {
            let status = game.tick(*turn);
            let new_len = game.snake.len();
            assert!(new_len >= len && new_len - len <= 1);
            len = new_len;
            if status != Status::Running {
                break;
            }
        }
    }
}
