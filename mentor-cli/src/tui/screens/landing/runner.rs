//! Landing runner - main event loop coordinator

use super::input::{CommandResult, InputAction, handle_input, parse_command};
use super::state::LandingState;
use super::ui::LandingUI;
use crate::tui::terminal::{Tui, init_terminal, restore_terminal};
use crossterm::event;
use mentor_core::chat::TurnOutcome;
use mentor_core::{AppConfig, ChatPanel, TextGenerator};
use std::error::Error;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, info};

const HELP_TEXT: &str = "/help  /reset  /close  /exit";

/// Run the landing screen until the user quits
pub async fn run_landing(
    config: &AppConfig,
    generator: Arc<dyn TextGenerator>,
) -> Result<(), Box<dyn Error>> {
    let panel = ChatPanel::new(generator).with_prompt_prefix(config.chat.prompt_prefix.clone());
    let mut state = LandingState::new(panel, config.chat.title.clone());
    state.start_headlines(&config.headlines, config.animation);

    let mut terminal = init_terminal()?;
    let result = run_landing_loop(&mut terminal, &mut state).await;
    restore_terminal()?;
    result
}

async fn run_landing_loop(terminal: &mut Tui, state: &mut LandingState) -> Result<(), Box<dyn Error>> {
    let (outcome_tx, mut outcome_rx) = mpsc::channel::<TurnOutcome>(10);

    loop {
        terminal.draw(|frame| LandingUI::render(frame, state))?;

        while let Ok(outcome) = outcome_rx.try_recv() {
            debug!(turn = outcome.id.get(), "Chat turn completed");
            state.panel.complete(outcome);
            state.cursor_pos = 0;
            state.scroll_to_bottom();
        }

        // Headlines animate every 30ms by default, so redraw at least that often.
        let timeout = Duration::from_millis(30);
        if event::poll(timeout)? {
            let event = event::read()?;
            match handle_input(state, event) {
                InputAction::Exit => {
                    info!("Leaving landing screen");
                    return Ok(());
                }
                InputAction::Submit => submit(state, &outcome_tx),
                InputAction::Command(cmd) => {
                    if handle_command(state, &cmd) {
                        return Ok(());
                    }
                }
                InputAction::ScrollUp => state.scroll_up(),
                InputAction::ScrollDown => state.scroll_down(1000),
                InputAction::ScrollTop => state.scroll_offset = 0,
                InputAction::ScrollBottom => state.scroll_to_bottom(),
                InputAction::None => {}
            }
        } else {
            state.tick_loading();
        }
    }
}

fn submit(state: &mut LandingState, outcome_tx: &mpsc::Sender<TurnOutcome>) {
    let Some(turn) = state.panel.begin_submit() else {
        return;
    };
    state.status_message = None;
    state.scroll_to_bottom();

    let id = turn.id();
    let tx = outcome_tx.clone();
    tokio::spawn(async move {
        // A panicking generator still produces an outcome, so the panel always completes.
        let outcome = match tokio::spawn(turn.resolve()).await {
            Ok(outcome) => outcome,
            Err(err) => TurnOutcome::interrupted(id, err.to_string()),
        };
        let _ = tx.send(outcome).await;
    });
}

/// Returns true when the command asks to exit
fn handle_command(state: &mut LandingState, input: &str) -> bool {
    match parse_command(input) {
        CommandResult::None => {}
        CommandResult::ShowHelp => {
            state.status_message = Some(HELP_TEXT.to_string());
        }
        CommandResult::Reset => {
            state.panel.reset();
            state.scroll_offset = 0;
            state.status_message = Some("Conversation cleared".to_string());
        }
        CommandResult::Close => {
            state.panel.close();
        }
        CommandResult::Exit => return true,
        CommandResult::Unknown(cmd) => {
            state.status_message = Some(format!(
                "Unknown command: {cmd}. Type /help for available commands."
            ));
        }
    }
    false
}
