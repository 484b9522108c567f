use super::error::ConfigError;
use super::provider::ProviderConfig;
use crate::animation::{DecryptConfig, DecryptText};
use crate::constants::{DEFAULT_CHAT_TITLE, DEFAULT_PROMPT_PREFIX};
use std::path::Path;
use std::time::Duration;

/// Chat panel settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatConfig {
    pub title: String,
    pub prompt_prefix: String,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_CHAT_TITLE.to_string(),
            prompt_prefix: DEFAULT_PROMPT_PREFIX.to_string(),
        }
    }
}

/// A landing headline revealed with the decrypt animation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadlineConfig {
    pub text: String,
    pub delay: Duration,
}

impl HeadlineConfig {
    pub fn new(text: impl Into<String>, delay: Duration) -> Self {
        Self {
            text: text.into(),
            delay,
        }
    }

    /// Build the animation for this headline
    pub fn to_decrypt(&self, config: DecryptConfig) -> DecryptText {
        DecryptText::new(self.text.clone())
            .with_delay(self.delay)
            .with_config(config)
    }
}

/// Application configuration loaded from mentor.toml
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub provider: ProviderConfig,
    pub chat: ChatConfig,
    pub animation: DecryptConfig,
    pub headlines: Vec<HeadlineConfig>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            provider: ProviderConfig::default(),
            chat: ChatConfig::default(),
            animation: DecryptConfig::default(),
            headlines: default_headlines(),
        }
    }
}

pub(super) fn default_headlines() -> Vec<HeadlineConfig> {
    vec![
        HeadlineConfig::new("Breaking Point", Duration::ZERO),
        HeadlineConfig::new("ver 1.0", Duration::from_millis(250)),
    ]
}

impl AppConfig {
    /// Load configuration from a file path (or default path if None)
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        super::loader::load_config(path)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        super::loader::parse_config(content, Path::new("<inline>"))
    }
}
