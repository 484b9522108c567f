//! TUI module for terminal user interface using Ratatui
//!
//! Renders the landing screen and its chat panel.

pub mod screens;
mod terminal;
pub mod theme;

pub use screens::run_landing;
pub use terminal::{Tui, init_terminal, restore_terminal};
