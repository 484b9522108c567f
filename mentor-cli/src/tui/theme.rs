//! TUI Theme
//!
//! Dark hero on the left, light accents for the chat panel.

use ratatui::style::{Color, Modifier, Style};

/// Primary accent color - chat button blue
pub const ACCENT: Color = Color::Rgb(59, 130, 246);

/// Bot bubble tint
pub const BOT: Color = Color::Rgb(147, 197, 253);

/// Warm amber for loading and hints
pub const HIGHLIGHT: Color = Color::Rgb(255, 200, 100);

/// Muted text - for secondary information
pub const MUTED: Color = Color::Rgb(100, 100, 110);

/// Border color - subtle gray
pub const BORDER: Color = Color::Rgb(70, 75, 85);

/// Hero headline style
pub fn headline() -> Style {
    Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
}

/// Secondary hero line style
pub fn subtitle() -> Style {
    Style::default().fg(MUTED)
}

/// Panel title style
pub fn title() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

/// Normal text style
pub fn text() -> Style {
    Style::default().fg(Color::White)
}

/// Border style
pub fn border() -> Style {
    Style::default().fg(BORDER)
}

/// Active border style
pub fn border_active() -> Style {
    Style::default().fg(ACCENT)
}

/// Footer/help text style
pub fn footer() -> Style {
    Style::default().fg(MUTED)
}

/// Loading indicator style
pub fn loading() -> Style {
    Style::default().fg(HIGHLIGHT)
}

/// User message prefix style
pub fn user_prefix() -> Style {
    Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD)
}

/// Bot message prefix style
pub fn bot_prefix() -> Style {
    Style::default().fg(BOT).add_modifier(Modifier::BOLD)
}

/// Key hint style for help text
pub fn key_hint() -> Style {
    Style::default().fg(ACCENT)
}
