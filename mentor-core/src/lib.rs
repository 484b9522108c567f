pub mod animation;
pub mod application;
pub mod config;
pub mod constants;
pub mod infrastructure;

pub use animation::{DecryptAnimator, DecryptConfig, DecryptText, ScheduledTask, TickControl};
pub use application::chat;
pub use application::chat::{ChatMessage, ChatPanel, Speaker, Transcript};
pub use config::{AppConfig, ConfigError};
pub use infrastructure::model;
pub use infrastructure::model::{GenerationError, ProviderFactory, TextGenerator};
