//! Model traits

use super::types::GenerationError;
use async_trait::async_trait;

/// Turns a prompt into a completion.
///
/// This is the only contract the chat panel needs, so any backend that
/// implements it can be swapped in.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError>;
}
