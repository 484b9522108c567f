//! Landing screen with the chat panel
//!
//! - state.rs: headline animations, panel and cursor state
//! - ui.rs: rendering
//! - input.rs: key handling and panel commands
//! - runner.rs: event loop

mod input;
mod runner;
mod state;
mod ui;

// Re-exports
pub use input::{CommandResult, InputAction, handle_input, parse_command};
pub use runner::run_landing;
pub use state::{Headline, LandingState};
pub use ui::LandingUI;
