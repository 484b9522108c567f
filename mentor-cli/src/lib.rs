pub mod cli;
pub mod reveal;
pub mod tui;

pub use cli::{Cli, RunMode};

use mentor_core::{AppConfig, ChatPanel, ProviderFactory};
use std::error::Error;
use std::fs::OpenOptions;
use std::io;
use std::path::Path;
use std::sync::Mutex;
use std::time::Duration;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, fmt};

pub async fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let quiet_mode = matches!(cli.mode, RunMode::Tui | RunMode::Reveal);
    init_tracing(quiet_mode, cli.log_file.as_deref())?;
    info!("Starting mentor");
    debug!(mode = ?cli.mode, config = ?cli.config, "CLI arguments parsed");

    let config = AppConfig::load(cli.config.as_deref())?;
    if let Some(path) = cli.config.as_deref() {
        info!(path = %path.display(), "Loaded configuration from file");
    } else {
        info!("Loaded configuration from default path or defaults");
    }

    info!(mode = ?cli.mode, "Running in selected mode");
    match cli.mode {
        RunMode::Tui => {
            let generator = ProviderFactory::create(&config.provider);
            tui::run_landing(&config, generator).await?;
        }
        RunMode::Ask => {
            let text = cli.joined_text();
            if text.trim().is_empty() {
                return Err("ask mode needs a message".into());
            }
            let generator = ProviderFactory::create(&config.provider);
            let mut panel =
                ChatPanel::new(generator).with_prompt_prefix(config.chat.prompt_prefix.clone());
            panel.update_input(text);
            panel.submit().await;
            if let Some(reply) = panel.transcript().last() {
                println!("{}", reply.text());
            }
        }
        RunMode::Reveal => {
            let text = cli.joined_text();
            if text.is_empty() {
                reveal::play_headlines(&config.headlines, config.animation).await?;
            } else {
                let delay = Duration::from_millis(cli.delay_ms);
                reveal::play(&text, delay, config.animation).await?;
            }
        }
    }
    info!("Execution finished");
    Ok(())
}

/// Logs go to stderr, or to `log_file` when given. Quiet modes log nothing
/// without a file since stdout belongs to the animation.
fn init_tracing(quiet: bool, log_file: Option<&Path>) -> io::Result<()> {
    static INIT: std::sync::Once = std::sync::Once::new();
    let file = match log_file {
        Some(path) => Some(OpenOptions::new().create(true).append(true).open(path)?),
        None => None,
    };

    INIT.call_once(|| {
        let filter = if quiet && file.is_none() {
            EnvFilter::new("off")
        } else {
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
        };
        let builder = fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_level(true);
        match file {
            Some(file) => builder.with_ansi(false).with_writer(Mutex::new(file)).init(),
            None => builder.with_writer(io::stderr).init(),
        }
    });
    Ok(())
}
