//! ctutor - terminal preview pane for the tic-tac-toe exercise.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    cursor,
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ctutor::{App, Cli, Command, Control, ShellConfig, replay, ui};
use ctutor_tictactoe::{GameState, reset};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::sync::Mutex;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = ShellConfig::load(cli.config.as_deref())?;

    match cli.command {
        Command::Play => run_play(config),
        Command::Replay {
            moves,
            board,
            to_move,
            json,
        } => {
            init_stderr_tracing(&config);
            let start = match board {
                Some(board) => GameState::from_board(board, to_move),
                None => reset(),
            };
            let report = replay(start, &moves);
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("{}", report.render_text());
            }
            Ok(())
        }
    }
}

fn env_filter(config: &ShellConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.log_filter()))
}

fn init_stderr_tracing(config: &ShellConfig) {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(io::stderr)
        .init();
}

/// Run the interactive board
fn run_play(config: ShellConfig) -> Result<()> {
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(config.log_file())
        .with_context(|| format!("Failed to open log file {}", config.log_file().display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(&config))
        .with_writer(Mutex::new(log_file))
        .with_ansi(false)
        .init();

    info!("Starting ctutor board");

    enable_raw_mode()?;
    let res = with_restore(|| run_board(App::new(config)), restore_terminal);

    if let Err(err) = &res {
        tracing::error!(error = %err, "Board loop failed");
    }
    info!("ctutor board closed");
    res
}

/// Runs `body`, then `restore` whether or not `body` failed.
///
/// An error from `body` is reported over one from `restore`.
fn with_restore<T>(
    body: impl FnOnce() -> Result<T>,
    restore: impl FnOnce() -> Result<()>,
) -> Result<T> {
    let res = body();
    let restored = restore();
    let value = res?;
    restored?;
    Ok(value)
}

fn run_board(app: App) -> Result<()> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    run_app(&mut terminal, app)
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, cursor::Show)?;
    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        if !event::poll(Duration::from_millis(250))? {
            continue;
        }
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press && app.handle_key(key.code) == Control::Quit {
                return Ok(());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_restore_runs_when_setup_fails() {
        let restored = Cell::new(false);
        let res: Result<()> = with_restore(
            || anyhow::bail!("no terminal"),
            || {
                restored.set(true);
                Ok(())
            },
        );
        assert!(restored.get());
        assert_eq!(res.unwrap_err().to_string(), "no terminal");
    }

    #[test]
    fn test_restore_runs_after_clean_exit() {
        let restored = Cell::new(false);
        let res = with_restore(
            || Ok(7),
            || {
                restored.set(true);
                Ok(())
            },
        );
        assert!(restored.get());
        assert_eq!(res.unwrap(), 7);
    }

    #[test]
    fn test_restore_error_surfaces_after_clean_exit() {
        let res = with_restore(|| Ok(()), || anyhow::bail!("raw mode stuck"));
        assert_eq!(res.unwrap_err().to_string(), "raw mode stuck");
    }

    #[test]
    fn test_body_error_wins_over_restore_error() {
        let res: Result<()> = with_restore(
            || anyhow::bail!("draw failed"),
            || anyhow::bail!("raw mode stuck"),
        );
        assert_eq!(res.unwrap_err().to_string(), "draw failed");
    }
}
