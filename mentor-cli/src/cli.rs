use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(
    name = "mentor",
    version,
    about = "Landing page with a decrypt-animated hero and an AI chat panel"
)]
pub struct Cli {
    /// Path to mentor.toml (defaults to config/mentor.toml, if present)
    #[arg(long)]
    pub config: Option<PathBuf>,
    #[arg(long, short, value_enum, default_value_t = RunMode::Tui)]
    pub mode: RunMode,
    /// Write logs here; in TUI mode logging is otherwise off
    #[arg(long)]
    pub log_file: Option<PathBuf>,
    /// Start delay for reveal mode
    #[arg(long, default_value_t = 0)]
    pub delay_ms: u64,
    /// Message for ask mode, or text for reveal mode
    pub text: Vec<String>,
}

impl Cli {
    pub fn joined_text(&self) -> String {
        self.text.join(" ")
    }
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum RunMode {
    /// Interactive landing screen with chat panel
    Tui,
    /// Send one message and print the reply
    Ask,
    /// Play the decrypt animation on stdout
    Reveal,
}
