use std::thread::sleep;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use gridsnake::config::GameConfig;
use gridsnake::game::{Command, Game, Status};
use gridsnake::term::TermManager;
use gridsnake::Coord;

#[derive(Parser)]
#[command(name = "gridsnake")]
#[command(version, about = "Snake on a fixed character grid")]
struct Cli {
    /// Board width in cells
    #[arg(long, default_value_t = 8)]
    cols: Coord,

    /// Board height in cells
    #[arg(long, default_value_t = 16)]
    rows: Coord,

    /// Milliseconds between game ticks
    #[arg(long, default_value_t = 600)]
    tick_ms: u64,

    /// Starting snake length
    #[arg(long, default_value_t = 2)]
    length: usize,

    /// Fix the RNG seed for reproducible apple placement
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let mut config = GameConfig::new(cli.cols, cli.rows);
    config.tick_ms = cli.tick_ms;
    config.initial_len = cli.length;
    config.validate()?;

    info!(cols = config.cols, rows = config.rows, tick_ms = config.tick_ms, "starting");

    let game = match cli.seed {
        Some(seed) => Game::new_seeded(config, seed),
        None => Game::new(config),
    };

    let mut term = TermManager::new();
    term.setup()?;
    let outcome = run(&mut term, game);
    term.restore()?;

    match outcome? {
        Some(Status::GameOver) => println!("Game Over!"),
        Some(Status::Win) => println!("You Win!"),
        _ => {} // user quit
    }

    Ok(())
}

fn run(term: &mut TermManager, mut game: Game) -> Result<Option<Status>> {
    term.clear()?;
    term.render(&game.grid())?;

    loop {
        sleep(Duration::from_millis(game.config.tick_ms));

        let turn = match term.poll_command()? {
            Some(Command::Quit) => return Ok(None),
            Some(Command::Turn(dir)) => Some(dir),
            None => None,
        };

        let status = game.tick(turn);
        term.render(&game.grid())?;

        if status != Status::Running {
            return Ok(Some(status));
        }
    }
}
