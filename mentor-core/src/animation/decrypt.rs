//! Decrypt-style text reveal
//!
//! Positions left of the cursor show the target text, spaces stay spaces,
//! and everything else flickers through random alphabet characters. The
//! cursor advances one position every `iterations_per_char` ticks.

use super::scheduler::{ScheduledTask, TickControl};
use crate::constants::{ITERATIONS_PER_CHAR, SCRAMBLE_ALPHABET, TICK_INTERVAL_MS};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Duration;
use tokio::sync::watch;
use tracing::debug;

/// Timing of the reveal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecryptConfig {
    pub tick_interval: Duration,
    pub iterations_per_char: usize,
}

impl Default for DecryptConfig {
    fn default() -> Self {
        Self {
            tick_interval: Duration::from_millis(TICK_INTERVAL_MS),
            iterations_per_char: ITERATIONS_PER_CHAR,
        }
    }
}

/// One published display value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub text: String,
    pub finished: bool,
}

/// Pure reveal state; time and randomness are supplied by the caller.
#[derive(Debug, Clone)]
pub struct DecryptAnimator {
    target: Vec<char>,
    revealed: usize,
    iteration: usize,
    iterations_per_char: usize,
}

impl DecryptAnimator {
    pub fn new(text: &str, iterations_per_char: usize) -> Self {
        Self {
            target: text.chars().collect(),
            revealed: 0,
            iteration: 0,
            iterations_per_char: iterations_per_char.max(1),
        }
    }

    /// Number of leading characters already shown verbatim
    pub fn revealed(&self) -> usize {
        self.revealed
    }

    /// Target length in characters
    pub fn len(&self) -> usize {
        self.target.len()
    }

    pub fn is_empty(&self) -> bool {
        self.target.is_empty()
    }

    pub fn is_finished(&self) -> bool {
        self.revealed == self.target.len()
    }

    pub fn target(&self) -> String {
        self.target.iter().collect()
    }

    /// Advance by one tick and return the value to display.
    ///
    /// The tick that reveals the last character returns the exact target
    /// with `finished` set; so does any tick after that.
    pub fn tick<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Frame {
        if self.is_finished() {
            return self.final_frame();
        }

        let shown = self.revealed;
        self.iteration += 1;
        if self.iteration >= self.iterations_per_char {
            self.iteration = 0;
            self.revealed += 1;
        }

        if self.is_finished() {
            return self.final_frame();
        }

        Frame {
            text: self.scramble(shown, rng),
            finished: false,
        }
    }

    fn scramble<R: Rng + ?Sized>(&self, shown: usize, rng: &mut R) -> String {
        self.target
            .iter()
            .enumerate()
            .map(|(idx, &c)| {
                if idx < shown {
                    c
                } else if c == ' ' {
                    ' '
                } else {
                    random_char(rng)
                }
            })
            .collect()
    }

    fn final_frame(&self) -> Frame {
        Frame {
            text: self.target(),
            finished: true,
        }
    }
}

/// Uniform pick from [`SCRAMBLE_ALPHABET`]
pub fn random_char<R: Rng + ?Sized>(rng: &mut R) -> char {
    let alphabet = SCRAMBLE_ALPHABET.as_bytes();
    alphabet[rng.random_range(0..alphabet.len())] as char
}

/// A target string plus its start delay, ready to be animated.
#[derive(Debug, Clone)]
pub struct DecryptText {
    text: String,
    delay: Duration,
    config: DecryptConfig,
}

impl DecryptText {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            delay: Duration::ZERO,
            config: DecryptConfig::default(),
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_config(mut self, config: DecryptConfig) -> Self {
        self.config = config;
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Start animating. The receiver holds an empty string until the first tick.
    pub fn spawn(self) -> (watch::Receiver<String>, ScheduledTask) {
        let (tx, rx) = watch::channel(String::new());
        let task = self.spawn_into(tx);
        (rx, task)
    }

    /// Start animating into an existing display channel.
    pub fn spawn_into(self, display: watch::Sender<String>) -> ScheduledTask {
        let mut animator = DecryptAnimator::new(&self.text, self.config.iterations_per_char);
        let mut rng = StdRng::from_os_rng();

        debug!(
            chars = animator.len(),
            delay_ms = self.delay.as_millis() as u64,
            "Starting decrypt animation"
        );

        ScheduledTask::repeating(self.delay, self.config.tick_interval, move || {
            let frame = animator.tick(&mut rng);
            display.send_replace(frame.text);
            if frame.finished {
                TickControl::Stop
            } else {
                TickControl::Continue
            }
        })
    }
}
