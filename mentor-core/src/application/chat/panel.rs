//! Chat panel state and the submit flow
//!
//! A submission is split into three steps so a UI loop can keep drawing
//! while the request is in flight:
//!
//! 1. [`ChatPanel::begin_submit`] checks the input, sets `loading` and
//!    appends the user message.
//! 2. [`PendingTurn::resolve`] makes the single generation call.
//! 3. [`ChatPanel::complete`] appends the bot message, clears the input and
//!    resets `loading`.
//!
//! [`ChatPanel::submit`] runs all three in sequence.
//!
//! Turns are not serialized. If a second turn begins before the first
//! completes, bot replies are appended in completion order and `loading`
//! drops as soon as any turn completes.

use super::diagnostics::{DiagnosticSink, TracingSink};
use super::message::{ChatMessage, Transcript};
use crate::constants::{DEFAULT_PROMPT_PREFIX, FALLBACK_MESSAGE};
use crate::infrastructure::model::{GenerationError, TextGenerator};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info};

/// Whether the panel is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Closed,
    Open,
}

/// Sequence number of an accepted submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TurnId(u64);

impl TurnId {
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for TurnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A submission waiting on the generator
pub struct PendingTurn {
    id: TurnId,
    prompt: String,
    generator: Arc<dyn TextGenerator>,
}

impl fmt::Debug for PendingTurn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PendingTurn")
            .field("id", &self.id)
            .field("prompt", &self.prompt)
            .finish_non_exhaustive()
    }
}

impl PendingTurn {
    pub fn id(&self) -> TurnId {
        self.id
    }

    /// Full prompt sent to the generator (prefix + raw input)
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Issue the generation call
    pub async fn resolve(self) -> TurnOutcome {
        debug!(turn = self.id.get(), "Resolving chat turn");
        let result = self.generator.generate(&self.prompt).await;
        TurnOutcome {
            id: self.id,
            result,
        }
    }
}

/// Result of one turn, fed back into [`ChatPanel::complete`]
#[derive(Debug)]
pub struct TurnOutcome {
    pub id: TurnId,
    pub result: Result<String, GenerationError>,
}

impl TurnOutcome {
    /// Outcome for a turn whose task died before producing a result
    pub fn interrupted(id: TurnId, reason: impl Into<String>) -> Self {
        Self {
            id,
            result: Err(GenerationError::interrupted(reason)),
        }
    }
}

/// Chat panel: visibility, input buffer, transcript and loading flag
pub struct ChatPanel {
    generator: Arc<dyn TextGenerator>,
    diagnostics: Arc<dyn DiagnosticSink>,
    prompt_prefix: String,
    visibility: Visibility,
    input: String,
    transcript: Transcript,
    loading: bool,
    next_turn: u64,
}

impl fmt::Debug for ChatPanel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChatPanel")
            .field("visibility", &self.visibility)
            .field("input", &self.input)
            .field("transcript", &self.transcript)
            .field("loading", &self.loading)
            .finish_non_exhaustive()
    }
}

impl ChatPanel {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self {
            generator,
            diagnostics: Arc::new(TracingSink),
            prompt_prefix: DEFAULT_PROMPT_PREFIX.to_string(),
            visibility: Visibility::Closed,
            input: String::new(),
            transcript: Transcript::new(),
            loading: false,
            next_turn: 0,
        }
    }

    pub fn with_diagnostics(mut self, sink: Arc<dyn DiagnosticSink>) -> Self {
        self.diagnostics = sink;
        self
    }

    pub fn with_prompt_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prompt_prefix = prefix.into();
        self
    }

    pub fn open(&mut self) {
        self.visibility = Visibility::Open;
    }

    pub fn close(&mut self) {
        self.visibility = Visibility::Closed;
    }

    pub fn toggle(&mut self) {
        self.visibility = match self.visibility {
            Visibility::Open => Visibility::Closed,
            Visibility::Closed => Visibility::Open,
        };
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn is_open(&self) -> bool {
        self.visibility == Visibility::Open
    }

    /// Replace the input buffer verbatim
    pub fn update_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn prompt_prefix(&self) -> &str {
        &self.prompt_prefix
    }

    /// Drop the transcript. Visibility, input and in-flight turns are untouched.
    pub fn reset(&mut self) {
        self.transcript = Transcript::new();
        info!("Chat transcript reset");
    }

    /// Accept the current input as a new turn.
    ///
    /// Returns `None` without touching any state when the input is empty
    /// or whitespace only.
    pub fn begin_submit(&mut self) -> Option<PendingTurn> {
        if self.input.trim().is_empty() {
            return None;
        }

        self.loading = true;
        self.transcript.push(ChatMessage::user(self.input.clone()));

        let id = TurnId(self.next_turn);
        self.next_turn += 1;
        debug!(turn = id.get(), chars = self.input.chars().count(), "Chat turn started");

        Some(PendingTurn {
            id,
            prompt: format!("{}{}", self.prompt_prefix, self.input),
            generator: self.generator.clone(),
        })
    }

    /// Record the outcome of a turn.
    pub fn complete(&mut self, outcome: TurnOutcome) {
        let reply = match outcome.result {
            Ok(text) => {
                debug!(turn = outcome.id.get(), "Chat turn succeeded");
                text
            }
            Err(err) => {
                self.diagnostics.report(outcome.id, &err);
                FALLBACK_MESSAGE.to_string()
            }
        };

        self.transcript.push(ChatMessage::bot(reply));
        self.input.clear();
        self.loading = false;
    }

    /// Run one full turn. Returns the turn id, or `None` if the input was blank.
    pub async fn submit(&mut self) -> Option<TurnId> {
        let turn = self.begin_submit()?;
        let id = turn.id();
        let outcome = turn.resolve().await;
        self.complete(outcome);
        Some(id)
    }
}
