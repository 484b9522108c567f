//! Application constants
//!
//! Single source of truth for paths and other constants.

/// Default configuration file path
pub const CONFIG_PATH: &str = "config/mentor.toml";

/// Default environment file path
pub const ENV_PATH: &str = "config/.env";

/// Environment variable holding the Gemini API key unless configured otherwise
pub const DEFAULT_API_KEY_ENV: &str = "GOOGLE_API_KEY";

/// Default provider settings
pub const DEFAULT_PROVIDER_ID: &str = "gemini";
pub const DEFAULT_GEMINI_ENDPOINT: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_GEMINI_API_PATH: &str = "v1beta/models";
pub const DEFAULT_MODEL: &str = "gemini-pro";
pub const DEFAULT_OLLAMA_ENDPOINT: &str = "http://127.0.0.1:11434";
pub const DEFAULT_OLLAMA_MODEL: &str = "llama3";

/// Chat panel title
pub const DEFAULT_CHAT_TITLE: &str = "PTSD mentor";

/// Prepended to every user message before it reaches the model
pub const DEFAULT_PROMPT_PREFIX: &str = "\n\nUser: ";

/// Bot reply shown whenever generation fails
pub const FALLBACK_MESSAGE: &str =
    "I apologize, but I encountered an error. Please try again in a moment.";

/// Characters used while a position is still scrambled
pub const SCRAMBLE_ALPHABET: &str =
    "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789!@#$%^&*()";

/// Ticks spent on each position before it is revealed
pub const ITERATIONS_PER_CHAR: usize = 2;

/// Delay between animation ticks, in milliseconds
pub const TICK_INTERVAL_MS: u64 = 30;
