//! Landing UI rendering

use super::state::LandingState;
use crate::tui::theme;
use mentor_core::Speaker;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

const SPINNER: [&str; 4] = ["⠋", "⠙", "⠹", "⠸"];

/// Main landing renderer
pub struct LandingUI;

impl LandingUI {
    pub fn render(frame: &mut Frame, state: &LandingState) {
        let area = frame.area();

        if state.panel.is_open() {
            let halves = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
                .split(area);
            Self::render_hero(frame, halves[0], state);
            Self::render_panel(frame, halves[1], state);
        } else {
            Self::render_hero(frame, area, state);
        }
    }

    fn render_hero(frame: &mut Frame, area: Rect, state: &LandingState) {
        let content_height = state.headlines.len() as u16 * 2 + 2;
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(content_height),
                Constraint::Min(0),
            ])
            .split(area);

        let mut lines: Vec<Line> = Vec::new();
        for (idx, headline) in state.headlines.iter().enumerate() {
            let style = if idx == 0 {
                theme::headline()
            } else {
                theme::subtitle()
            };
            lines.push(Line::from(Span::styled(headline.display(), style)));
            lines.push(Line::from(""));
        }

        let hint = if state.panel.is_open() {
            Line::from(Span::styled("Esc: close chat", theme::footer()))
        } else {
            Line::from(vec![
                Span::styled("c", theme::key_hint()),
                Span::styled(": chat │ ", theme::footer()),
                Span::styled("q", theme::key_hint()),
                Span::styled(": quit", theme::footer()),
            ])
        };
        lines.push(hint);

        let para = Paragraph::new(lines).alignment(Alignment::Center);
        frame.render_widget(para, vertical[1]);
    }

    fn render_panel(frame: &mut Frame, area: Rect, state: &LandingState) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme::border())
            .title(Span::styled(format!(" {} ", state.title), theme::title()));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(3),    // Messages
                Constraint::Length(3), // Input
                Constraint::Length(1), // Help bar
            ])
            .split(inner);

        Self::render_messages(frame, chunks[0], state);
        Self::render_input(frame, chunks[1], state);
        Self::render_help_bar(frame, chunks[2], state);
    }

    fn render_messages(frame: &mut Frame, area: Rect, state: &LandingState) {
        let mut lines: Vec<Line> = Vec::new();

        for msg in state.panel.transcript() {
            let (prefix, style) = match msg.speaker() {
                Speaker::User => ("You: ", theme::user_prefix()),
                Speaker::Bot => ("Mentor: ", theme::bot_prefix()),
            };

            let mut content_lines = msg.text().lines();
            let first = content_lines.next().unwrap_or("");
            lines.push(Line::from(vec![
                Span::styled(prefix, style),
                Span::styled(first.to_string(), theme::text()),
            ]));
            let indent = " ".repeat(prefix.len());
            for line in content_lines {
                lines.push(Line::from(format!("{indent}{line}")));
            }
            lines.push(Line::from(""));
        }

        if state.panel.is_loading() {
            lines.push(Line::from(Span::styled(
                format!("Mentor: {} Thinking...", SPINNER[state.loading_frame % SPINNER.len()]),
                theme::loading(),
            )));
        }

        // Counts logical lines only; long wrapped replies may scroll short.
        let max_scroll = lines.len().saturating_sub(area.height as usize) as u16;
        let scroll = state.scroll_offset.min(max_scroll);

        let para = Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((scroll, 0));
        frame.render_widget(para, area);
    }

    fn render_input(frame: &mut Frame, area: Rect, state: &LandingState) {
        let loading = state.panel.is_loading();
        let input = state.panel.input();

        let (display, style) = if loading {
            ("Waiting for response...".to_string(), theme::footer())
        } else if input.is_empty() {
            ("Type your message...".to_string(), theme::footer())
        } else {
            let mut chars: Vec<char> = input.chars().collect();
            if state.cursor_pos >= chars.len() {
                chars.push('_');
            } else {
                chars.insert(state.cursor_pos, '|');
            }
            (chars.into_iter().collect(), theme::text())
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(if loading {
                theme::border()
            } else {
                theme::border_active()
            })
            .title(if state.is_command() {
                " Command "
            } else {
                " Message "
            });

        let line = Line::from(vec![
            Span::styled("> ", theme::title()),
            Span::styled(display, style),
        ]);
        frame.render_widget(Paragraph::new(line).block(block), area);
    }

    fn render_help_bar(frame: &mut Frame, area: Rect, state: &LandingState) {
        let line = if let Some(status) = &state.status_message {
            Line::from(Span::styled(format!(" {status}"), theme::footer()))
        } else if state.panel.is_loading() {
            Line::from(Span::styled(" Processing... Please wait ", theme::loading()))
        } else {
            Line::from(vec![
                Span::styled(" Enter", theme::key_hint()),
                Span::styled(": Send │ ", theme::footer()),
                Span::styled("/help", theme::key_hint()),
                Span::styled(": Commands │ ", theme::footer()),
                Span::styled("Esc", theme::key_hint()),
                Span::styled(": Close │ ", theme::footer()),
                Span::styled("Ctrl+Q", theme::key_hint()),
                Span::styled(": Quit ", theme::footer()),
            ])
        };
        frame.render_widget(Paragraph::new(line), area);
    }
}
