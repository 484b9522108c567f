//! Chat panel module
//!
//! - message.rs: transcript entries
//! - diagnostics.rs: where generation failures are reported
//! - panel.rs: panel state and the submit flow

mod diagnostics;
mod message;
mod panel;

// Re-exports
pub use diagnostics::{DiagnosticSink, TracingSink};
pub use message::{ChatMessage, Speaker, Transcript};
pub use panel::{ChatPanel, PendingTurn, TurnId, TurnOutcome, Visibility};
