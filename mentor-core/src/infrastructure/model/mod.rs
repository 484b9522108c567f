//! Model infrastructure module
//!
//! Provides text generation backends behind a single-method trait.
//!
//! # Structure
//! - `types` - Error type
//! - `traits` - TextGenerator trait
//! - `factory` - Provider factory for creating clients
//! - `clients` - Individual client implementations

pub mod clients;
pub mod factory;
pub mod traits;
pub mod types;

// Re-exports for convenience
pub use factory::ProviderFactory;
pub use traits::TextGenerator;
pub use types::GenerationError;
