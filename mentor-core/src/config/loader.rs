use super::app::{AppConfig, ChatConfig, HeadlineConfig, default_headlines};
use super::error::ConfigError;
use super::provider::{ProviderConfig, RawProviderConfig};
use crate::animation::DecryptConfig;
use crate::constants::{CONFIG_PATH, ENV_PATH};
use dotenvy::from_filename;
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::Path;
use std::sync::Once;
use std::time::Duration;
use tracing::debug;

static ENV_LOADER: Once = Once::new();

/// Raw configuration structure for deserialization from TOML
#[derive(Debug, Deserialize, Default)]
struct RawConfig {
    #[serde(default)]
    provider: RawProviderConfig,
    #[serde(default)]
    chat: RawChatConfig,
    #[serde(default)]
    animation: RawAnimationConfig,
    headlines: Option<Vec<RawHeadline>>,
}

#[derive(Debug, Deserialize, Default)]
struct RawChatConfig {
    title: Option<String>,
    prompt_prefix: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
struct RawAnimationConfig {
    tick_ms: Option<u64>,
    iterations_per_char: Option<usize>,
}

#[derive(Debug, Deserialize)]
struct RawHeadline {
    text: String,
    #[serde(default)]
    delay_ms: u64,
}

/// Ensures environment variables are loaded from config/.env and .env
pub fn ensure_env_loaded() {
    ENV_LOADER.call_once(|| {
        let _ = from_filename(ENV_PATH);
        let _ = dotenvy::dotenv();
    });
}

/// Load and validate configuration from a file path.
///
/// An explicit path must exist. Without one, a missing default file
/// yields the built-in defaults.
pub fn load_config(path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    ensure_env_loaded();
    match path {
        Some(path) => read_config(path),
        None => {
            let default_path = Path::new(CONFIG_PATH);
            if default_path.exists() {
                read_config(default_path)
            } else {
                debug!(path = CONFIG_PATH, "No configuration file, using defaults");
                Ok(AppConfig::default())
            }
        }
    }
}

fn read_config(path: &Path) -> Result<AppConfig, ConfigError> {
    debug!(path = %path.display(), "Reading configuration file");

    let content = fs::read_to_string(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            ConfigError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            ConfigError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    parse_config(&content, path)
}

pub(super) fn parse_config(content: &str, path: &Path) -> Result<AppConfig, ConfigError> {
    let parsed: RawConfig = toml::from_str(content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    validate_and_build(parsed)
}

fn validate_and_build(parsed: RawConfig) -> Result<AppConfig, ConfigError> {
    let provider = ProviderConfig::from(parsed.provider);
    if !provider.is_gemini() && !provider.is_ollama() {
        return Err(ConfigError::UnsupportedProvider {
            provider: provider.id,
            provider_type: provider.provider_type,
        });
    }
    if provider.endpoint.trim().is_empty() {
        return Err(ConfigError::MissingEndpoint {
            provider: provider.id,
        });
    }
    if provider.model.trim().is_empty() {
        return Err(ConfigError::MissingModel {
            provider: provider.id,
        });
    }

    let defaults = DecryptConfig::default();
    let tick_interval = match parsed.animation.tick_ms {
        Some(0) => {
            return Err(ConfigError::InvalidAnimation {
                reason: "tick_ms must be greater than zero",
            });
        }
        Some(ms) => Duration::from_millis(ms),
        None => defaults.tick_interval,
    };
    let iterations_per_char = match parsed.animation.iterations_per_char {
        Some(0) => {
            return Err(ConfigError::InvalidAnimation {
                reason: "iterations_per_char must be at least 1",
            });
        }
        Some(n) => n,
        None => defaults.iterations_per_char,
    };

    let chat_defaults = ChatConfig::default();
    let chat = ChatConfig {
        title: parsed.chat.title.unwrap_or(chat_defaults.title),
        prompt_prefix: parsed.chat.prompt_prefix.unwrap_or(chat_defaults.prompt_prefix),
    };

    let headlines = match parsed.headlines {
        Some(raw) => raw
            .into_iter()
            .map(|h| HeadlineConfig::new(h.text, Duration::from_millis(h.delay_ms)))
            .collect(),
        None => default_headlines(),
    };

    Ok(AppConfig {
        provider,
        chat,
        animation: DecryptConfig {
            tick_interval,
            iterations_per_char,
        },
        headlines,
    })
}
