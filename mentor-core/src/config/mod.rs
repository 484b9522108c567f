pub mod app;
pub mod error;
pub mod loader;
pub mod provider;

pub use crate::constants::CONFIG_PATH;
pub use app::{AppConfig, ChatConfig, HeadlineConfig};
pub use error::ConfigError;
pub use provider::ProviderConfig;
