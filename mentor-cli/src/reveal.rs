//! Headless decrypt animation on stdout

use mentor_core::animation::{DecryptConfig, DecryptText};
use mentor_core::config::HeadlineConfig;
use std::io::{self, Write};
use std::time::Duration;

/// Animate `text` on a single terminal line until it is fully revealed.
pub async fn play(text: &str, delay: Duration, config: DecryptConfig) -> io::Result<()> {
    let decrypt = DecryptText::new(text)
        .with_delay(delay)
        .with_config(config);
    render(decrypt).await
}

/// Animate each configured headline on its own line, in order.
pub async fn play_headlines(headlines: &[HeadlineConfig], config: DecryptConfig) -> io::Result<()> {
    for headline in headlines {
        render(headline.to_decrypt(config)).await?;
    }
    Ok(())
}

async fn render(decrypt: DecryptText) -> io::Result<()> {
    let (mut display, _task) = decrypt.spawn();
    let mut stdout = io::stdout();

    // The sender lives inside the task; the loop ends once it finishes.
    while display.changed().await.is_ok() {
        let frame = display.borrow_and_update().clone();
        write!(stdout, "\r{frame}")?;
        stdout.flush()?;
    }
    writeln!(stdout)?;
    Ok(())
}
