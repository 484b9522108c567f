use super::panel::TurnId;
use crate::infrastructure::model::GenerationError;
use tracing::error;

/// Receives generation failures; never shown in the transcript.
pub trait DiagnosticSink: Send + Sync {
    fn report(&self, turn: TurnId, error: &GenerationError);
}

/// Default sink: one `error` event per failure
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&self, turn: TurnId, error: &GenerationError) {
        error!(turn = turn.get(), error = %error, "Generation request failed");
    }
}
