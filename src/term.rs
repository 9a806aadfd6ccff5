use std::io::{stdout, Stdout, Write};
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{poll, read, Event, KeyCode, KeyEvent, KeyModifiers};
use crossterm::terminal::{self, ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{cursor, execute, queue, style};

use crate::game::Command;
use crate::grid::Grid;
use crate::snake::Direction;

/// Thin wrapper over crossterm: screen setup/teardown, non-blocking input
/// and frame drawing. Holds no game state.
pub struct TermManager {
    stdout: Stdout,
}

impl TermManager {
    pub fn new() -> Self {
        TermManager { stdout: stdout() }
    }

    pub fn setup(&mut self) -> Result<()> {
        execute!(self.stdout, EnterAlternateScreen).context("entering alternate screen")?;
        terminal::enable_raw_mode().context("enabling raw mode")?;
        execute!(self.stdout, cursor::Hide).context("hiding cursor")?;
        Ok(())
    }

    pub fn restore(&mut self) -> Result<()> {
        execute!(self.stdout, cursor::Show).context("showing cursor")?;
        terminal::disable_raw_mode().context("disabling raw mode")?;
        execute!(self.stdout, LeaveAlternateScreen).context("leaving alternate screen")?;
        Ok(())
    }

    pub fn clear(&mut self) -> Result<()> {
        execute!(self.stdout, terminal::Clear(ClearType::All)).context("clearing screen")?;
        Ok(())
    }

    /// Drains all pending key events without blocking. A quit key wins
    /// immediately; otherwise the last direction pressed this tick is kept.
    pub fn poll_command(&self) -> Result<Option<Command>> {
        let mut command = None;

        while poll(Duration::from_millis(1))? {
            if let Event::Key(ev) = read()? {
                match command_for(&ev) {
                    Some(Command::Quit) => return Ok(Some(Command::Quit)),
                    Some(turn) => command = Some(turn),
                    None => {}
                }
            }
        }

        Ok(command)
    }

    /// Draws the whole frame, one row per line from the top-left corner.
    pub fn render(&mut self, grid: &Grid) -> Result<()> {
        for (y, line) in grid.lines().enumerate() {
            queue!(self.stdout, cursor::MoveTo(0, y as u16), style::Print(line))?;
        }
        self.stdout.flush().context("flushing frame")?;
        Ok(())
    }
}

impl Default for TermManager {
    fn default() -> Self {
        Self::new()
    }
}

fn command_for(ev: &KeyEvent) -> Option<Command> {
    if is_ctrl_c(ev) {
        return Some(Command::Quit);
    }

    match ev.code {
        KeyCode::Char('w') | KeyCode::Up => Some(Command::Turn(Direction::Up)),
        KeyCode::Char('a') | KeyCode::Left => Some(Command::Turn(Direction::Left)),
        KeyCode::Char('s') | KeyCode::Down => Some(Command::Turn(Direction::Down)),
        KeyCode::Char('d') | KeyCode::Right => Some(Command::Turn(Direction::Right)),
        KeyCode::Char('q') | KeyCode::Esc => Some(Command::Quit),
        _ => None,
    }
}

fn is_ctrl_c(ev: &KeyEvent) -> bool {
    matches!(ev, KeyEvent { code: KeyCode::Char('c'), modifiers: KeyModifiers::CONTROL })
}
