//! Terminal client for the dungeon: crossterm input, ratatui rendering,
//! and a small built-in scenario wired to `game-core`.
pub mod app;
pub mod config;
pub mod content;
pub mod input;
pub mod logging;
pub mod presentation;

pub use app::CliApp;
pub use config::{CliConfig, UiConfig};
