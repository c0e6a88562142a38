//! Terminal shell around the tic-tac-toe rule engine.
//!
//! Plays the part of the tutorial's preview pane: it owns the single
//! [`ctutor_tictactoe::GameState`], feeds it clicks (key presses) and resets,
//! and renders what comes back.
//!
//! - **app**: session state and key handling
//! - **ui**: ratatui rendering
//! - **replay**: non-interactive move sequences
//! - **config**: `ctutor.toml` settings

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod config;
mod input;
mod replay;

pub mod ui;

pub use app::{App, Control};
pub use cli::{Cli, Command};
pub use config::{ConfigError, ShellConfig, DEFAULT_CONFIG_FILE};
pub use input::move_cursor;
pub use replay::{replay, ReplayReport};
