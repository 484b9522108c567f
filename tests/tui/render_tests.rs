//! Rendering into ratatui's test backend

use crate::support::ScriptedGenerator;
use mentor_cli::tui::screens::landing::{LandingState, LandingUI};
use mentor_core::config::HeadlineConfig;
use mentor_core::constants::FALLBACK_MESSAGE;
use mentor_core::{DecryptConfig, GenerationError};
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use std::sync::Arc;
use std::time::Duration;

fn draw(state: &LandingState) -> String {
    let backend = TestBackend::new(100, 24);
    let mut terminal = Terminal::new(backend).expect("terminal");
    terminal
        .draw(|frame| LandingUI::render(frame, state))
        .expect("draw");

    let buffer = terminal.backend().buffer();
    let mut out = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            out.push_str(buffer[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}

#[tokio::test(start_paused = true)]
async fn closed_panel_shows_settled_headlines_and_hint() {
    let generator = Arc::new(ScriptedGenerator::new());
    let mut state = LandingState::with_generator(generator, "PTSD mentor");
    state.start_headlines(
        &[
            HeadlineConfig::new("Breaking Point", Duration::ZERO),
            HeadlineConfig::new("ver 1.0", Duration::from_millis(250)),
        ],
        DecryptConfig::default(),
    );

    tokio::time::sleep(Duration::from_secs(2)).await;
    assert!(state.headlines.iter().all(|h| h.is_finished()));

    let screen = draw(&state);
    assert!(screen.contains("Breaking Point"));
    assert!(screen.contains("ver 1.0"));
    assert!(screen.contains(": chat"));
    assert!(!screen.contains("PTSD mentor"));
}

#[tokio::test]
async fn open_panel_shows_title_and_transcript() {
    let generator = Arc::new(
        ScriptedGenerator::new()
            .reply("Hi there")
            .fail(GenerationError::empty_response("scripted")),
    );
    let mut state = LandingState::with_generator(generator, "PTSD mentor");
    state.panel.open();
    state.panel.update_input("Hello");
    state.panel.submit().await;
    state.panel.update_input("Again");
    state.panel.submit().await;

    let screen = draw(&state);
    assert!(screen.contains("PTSD mentor"));
    assert!(screen.contains("You: Hello"));
    assert!(screen.contains("Mentor: Hi there"));
    assert!(screen.contains("Mentor: I apologize"));
    assert!(FALLBACK_MESSAGE.starts_with("I apologize"));
    assert!(screen.contains("Type your message..."));
}

#[tokio::test]
async fn loading_panel_shows_thinking() {
    let generator = Arc::new(ScriptedGenerator::new());
    let mut state = LandingState::with_generator(generator, "PTSD mentor");
    state.panel.open();
    state.panel.update_input("Hello");
    let _turn = state.panel.begin_submit().expect("turn");

    let screen = draw(&state);
    assert!(screen.contains("Thinking..."));
    assert!(screen.contains("Waiting for response..."));
}

#[test]
fn status_message_replaces_help_bar() {
    let mut state = LandingState::with_generator(Arc::new(ScriptedGenerator::new()), "Mentor");
    state.panel.open();
    state.status_message = Some("/help  /reset  /close  /exit".to_string());

    let screen = draw(&state);
    assert!(screen.contains("/reset  /close"));
}
