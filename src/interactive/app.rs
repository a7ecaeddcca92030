//! TUI application state and logic

use crate::config::ConfiguredGame;
use crate::core::ValidationOutcome;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::warn;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App {
    pub game: ConfiguredGame,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub should_quit: bool,
    pub input_mode: InputMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Typing a word
    Editing,
    /// A rejection alert is on screen and must be dismissed
    Alert,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl App {
    #[must_use]
    pub fn new(game: ConfiguredGame) -> Self {
        let mut app = Self {
            game,
            input_buffer: String::new(),
            messages: Vec::new(),
            should_quit: false,
            input_mode: InputMode::Editing,
        };
        app.add_message(
            "Welcome! Make words from the letters of the root word.",
            MessageStyle::Info,
        );
        app
    }

    /// Submit the input line
    ///
    /// The line is cleared only when the word is accepted, so a rejected word
    /// can be corrected in place.
    pub fn submit(&mut self) {
        let input = self.input_buffer.clone();
        match self.game.submit(&input) {
            ValidationOutcome::Accepted(word) => {
                self.input_buffer.clear();
                self.add_message(
                    &format!("+{} {}", crate::core::letter_count(&word), word),
                    MessageStyle::Success,
                );
            }
            ValidationOutcome::Rejected(rejection) => {
                if !rejection.is_silent() {
                    self.input_mode = InputMode::Alert;
                }
            }
        }
    }

    pub fn dismiss_alert(&mut self) {
        self.game.dismiss_alert();
        self.input_mode = InputMode::Editing;
    }

    /// Start a new round with a new root word
    pub fn restart(&mut self) {
        match self.game.restart().map(|round| round.root_word().to_uppercase()) {
            Ok(root) => {
                self.input_buffer.clear();
                self.input_mode = InputMode::Editing;
                self.add_message(&format!("New round: {root}"), MessageStyle::Info);
            }
            Err(err) => {
                warn!("Restart failed: {err}");
                self.add_message(&err.to_string(), MessageStyle::Error);
            }
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 8 messages
        if self.messages.len() > 8 {
            self.messages.remove(0);
        }
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Only process key press events (fixes Windows double-input bug)
        if key.kind != KeyEventKind::Press {
            return;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('c' | 'q') => self.should_quit = true,
                KeyCode::Char('r' | 'n') => self.restart(),
                _ => {}
            }
            return;
        }

        match self.input_mode {
            InputMode::Alert => {
                // Any of the "OK" keys closes the alert
                if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
                    self.dismiss_alert();
                }
            }
            InputMode::Editing => match key.code {
                KeyCode::Esc => self.should_quit = true,
                KeyCode::Enter => self.submit(),
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Char(c) => self.input_buffer.push(c),
                _ => {}
            },
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;

    fn app() -> App {
        let config = GameConfig {
            seed: Some(5),
            ..GameConfig::default()
        };
        App::new(config.build_game().unwrap())
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_word(app: &mut App, word: &str) {
        for c in word.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    /// First dictionary word playable against the current root
    fn playable_word(app: &App) -> String {
        crate::commands::playable_words(
            app.game.round().root_word(),
            app.game.dictionary(),
            app.game.validator(),
        )
        .unwrap()
        .words
        .into_iter()
        .next()
        .unwrap()
    }

    #[test]
    fn typing_fills_input_buffer() {
        let mut app = app();
        type_word(&mut app, "abc");
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.input_buffer, "ab");
    }

    #[test]
    fn accepted_word_clears_input() {
        let mut app = app();
        let word = playable_word(&app);
        type_word(&mut app, &word);
        press(&mut app, KeyCode::Enter);

        assert!(app.input_buffer.is_empty());
        assert_eq!(app.game.round().used_words(), &[word]);
        assert_eq!(app.input_mode, InputMode::Editing);
    }

    #[test]
    fn rejection_opens_alert_and_keeps_input() {
        let mut app = app();
        type_word(&mut app, "qqqq");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.input_mode, InputMode::Alert);
        assert_eq!(app.input_buffer, "qqqq");
        assert!(app.game.last_alert().is_some());

        // Typing is ignored while the alert is up
        press(&mut app, KeyCode::Char('x'));
        assert_eq!(app.input_buffer, "qqqq");

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.input_mode, InputMode::Editing);
        assert!(app.game.last_alert().is_none());
    }

    #[test]
    fn silent_rejection_opens_no_alert() {
        let mut app = app();
        type_word(&mut app, "ab");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.input_mode, InputMode::Editing);
        assert_eq!(app.input_buffer, "ab");
    }

    #[test]
    fn ctrl_r_restarts() {
        let mut app = app();
        let word = playable_word(&app);
        type_word(&mut app, &word);
        press(&mut app, KeyCode::Enter);

        app.handle_key(KeyEvent::new(KeyCode::Char('r'), KeyModifiers::CONTROL));
        assert!(app.game.round().is_fresh());
        assert_eq!(app.game.rounds_played(), 2);
    }

    #[test]
    fn esc_quits() {
        let mut app = app();
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);
    }

    #[test]
    fn messages_are_capped() {
        let mut app = app();
        for i in 0..20 {
            app.add_message(&format!("message {i}"), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), 8);
        assert_eq!(app.messages.last().unwrap().text, "message 19");
    }
}
