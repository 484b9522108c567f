//! Landing screen state

use mentor_core::animation::{DecryptConfig, ScheduledTask};
use mentor_core::config::HeadlineConfig;
use mentor_core::{ChatPanel, TextGenerator};
use std::sync::Arc;
use tokio::sync::watch;

/// A hero line and the animation writing to it
pub struct Headline {
    display: watch::Receiver<String>,
    task: ScheduledTask,
}

impl Headline {
    /// Start animating. Must be called inside a tokio runtime.
    pub fn start(config: &HeadlineConfig, animation: DecryptConfig) -> Self {
        let (display, task) = config.to_decrypt(animation).spawn();
        Self { display, task }
    }

    /// Current display value
    pub fn display(&self) -> String {
        self.display.borrow().clone()
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

/// Landing screen state
pub struct LandingState {
    pub headlines: Vec<Headline>,
    pub panel: ChatPanel,
    pub title: String,
    /// Cursor position in input, in characters
    pub cursor_pos: usize,
    /// Scroll offset for messages
    pub scroll_offset: u16,
    /// Loading animation frame
    pub loading_frame: usize,
    /// Status message
    pub status_message: Option<String>,
}

impl LandingState {
    pub fn new(panel: ChatPanel, title: impl Into<String>) -> Self {
        Self {
            headlines: Vec::new(),
            panel,
            title: title.into(),
            cursor_pos: 0,
            scroll_offset: 0,
            loading_frame: 0,
            status_message: None,
        }
    }

    pub fn with_generator(generator: Arc<dyn TextGenerator>, title: impl Into<String>) -> Self {
        Self::new(ChatPanel::new(generator), title)
    }

    /// Restart every headline animation; previous ones are cancelled on drop.
    pub fn start_headlines(&mut self, headlines: &[HeadlineConfig], animation: DecryptConfig) {
        self.headlines = headlines
            .iter()
            .map(|config| Headline::start(config, animation))
            .collect();
    }

    fn input_len(&self) -> usize {
        self.panel.input().chars().count()
    }

    fn edit_input(&mut self, edit: impl FnOnce(&mut Vec<char>, &mut usize)) {
        let mut chars: Vec<char> = self.panel.input().chars().collect();
        let mut cursor = self.cursor_pos.min(chars.len());
        edit(&mut chars, &mut cursor);
        self.cursor_pos = cursor;
        self.panel.update_input(chars.into_iter().collect::<String>());
    }

    /// Insert character at cursor position
    pub fn insert_char(&mut self, c: char) {
        self.edit_input(|chars, cursor| {
            chars.insert(*cursor, c);
            *cursor += 1;
        });
    }

    /// Delete character before cursor (backspace)
    pub fn delete_char(&mut self) {
        self.edit_input(|chars, cursor| {
            if *cursor > 0 {
                chars.remove(*cursor - 1);
                *cursor -= 1;
            }
        });
    }

    /// Delete character at cursor (delete key)
    pub fn delete_char_forward(&mut self) {
        self.edit_input(|chars, cursor| {
            if *cursor < chars.len() {
                chars.remove(*cursor);
            }
        });
    }

    pub fn clear_input(&mut self) {
        self.panel.update_input("");
        self.cursor_pos = 0;
    }

    /// Get the current input and clear it
    pub fn take_input(&mut self) -> String {
        let input = self.panel.input().to_string();
        self.clear_input();
        input
    }

    pub fn move_cursor_left(&mut self) {
        self.cursor_pos = self.cursor_pos.saturating_sub(1);
    }

    pub fn move_cursor_right(&mut self) {
        if self.cursor_pos < self.input_len() {
            self.cursor_pos += 1;
        }
    }

    pub fn move_cursor_home(&mut self) {
        self.cursor_pos = 0;
    }

    pub fn move_cursor_end(&mut self) {
        self.cursor_pos = self.input_len();
    }

    pub fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    pub fn scroll_down(&mut self, max_scroll: u16) {
        if self.scroll_offset < max_scroll {
            self.scroll_offset += 1;
        }
    }

    /// Scroll to bottom of messages
    pub fn scroll_to_bottom(&mut self) {
        // Clamped during render once the content height is known
        self.scroll_offset = u16::MAX;
    }

    pub fn tick_loading(&mut self) {
        if self.panel.is_loading() {
            self.loading_frame = (self.loading_frame + 1) % 4;
        }
    }

    /// Check if input is a command
    pub fn is_command(&self) -> bool {
        self.panel.input().starts_with('/')
    }
}
