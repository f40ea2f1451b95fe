//! TUI application state and logic

use crate::core::{GuessWord, Status};
use crate::solver::{Analysis, Assistant};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<'a> {
    pub assistant: &'a Assistant<'a>,
    pub guesses: Vec<GuessWord>,
    pub analysis: Analysis<'a>,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(assistant: &'a Assistant<'a>) -> Self {
        let rules = assistant.rules();
        let analysis = assistant.analyze(&[]);

        Self {
            assistant,
            guesses: Vec::new(),
            analysis,
            input_buffer: String::new(),
            messages: vec![
                Message {
                    text: "Welcome! Type each word you played with its feedback.".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: format!(
                        "'{}' after a green letter, '{}' after a yellow one (e.g. a{}bou{}t)",
                        rules.correct_marker(),
                        rules.present_marker(),
                        rules.present_marker(),
                        rules.correct_marker()
                    ),
                    style: MessageStyle::Info,
                },
            ],
            should_quit: false,
        }
    }

    fn refresh(&mut self) {
        self.analysis = self.assistant.analyze(&self.guesses);
    }

    /// Parse the input buffer as a guess token and add it to the board
    pub fn submit_input(&mut self) {
        let token = self.input_buffer.trim().to_string();
        if token.is_empty() {
            return;
        }

        match self.assistant.parse_guess(&token) {
            Ok(guess) => {
                if !self.assistant.knows(&guess.word()) {
                    self.add_message(
                        &format!("Note: '{}' is not in the dictionary", guess.word()),
                        MessageStyle::Info,
                    );
                }
                self.guesses.push(guess);
                self.refresh();
                self.input_buffer.clear();
                self.report_candidates();
            }
            Err(e) => self.add_message(&format!("Invalid guess: {e}"), MessageStyle::Error),
        }
    }

    fn report_candidates(&mut self) {
        let (text, style) = match self.analysis.candidates.as_slice() {
            [] => (
                "No candidates remain - feedback may be wrong. Ctrl-U to undo.".to_string(),
                MessageStyle::Error,
            ),
            [answer] => (
                format!("🎯 The answer must be {}", answer.text().to_uppercase()),
                MessageStyle::Success,
            ),
            candidates => (
                format!("{} candidates remaining", candidates.len()),
                MessageStyle::Info,
            ),
        };
        self.add_message(&text, style);
    }

    pub fn new_game(&mut self) {
        self.guesses.clear();
        self.input_buffer.clear();
        self.messages.clear();
        self.refresh();
        self.add_message("New game started!", MessageStyle::Info);
    }

    pub fn undo_last(&mut self) {
        if let Some(removed) = self.guesses.pop() {
            self.refresh();
            self.add_message(&format!("Removed {}", removed.raw()), MessageStyle::Info);
        } else {
            self.add_message("Nothing to undo!", MessageStyle::Error);
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Letters typed so far with the color their markers give them
    ///
    /// Lenient version of guess parsing: unknown characters and leading
    /// markers are ignored so the preview never fails mid-typing.
    #[must_use]
    pub fn input_preview(&self) -> Vec<(char, Status)> {
        let rules = self.assistant.rules();
        let mut preview: Vec<(char, Status)> = Vec::new();

        for ch in self.input_buffer.chars() {
            if ch == rules.correct_marker() || ch == rules.present_marker() {
                if let Some(last) = preview.last_mut() {
                    last.1 = if ch == rules.correct_marker() {
                        Status::Correct
                    } else {
                        Status::Present
                    };
                }
            } else if ch.is_ascii_lowercase() {
                preview.push((ch, Status::Absent));
            }
        }

        preview
    }

    /// Apply one key press
    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        let control = modifiers.contains(KeyModifiers::CONTROL);

        match code {
            KeyCode::Char('c') if control => self.should_quit = true,
            KeyCode::Char('n') if control => self.new_game(),
            KeyCode::Char('u') if control => self.undo_last(),
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char(c) => self.input_buffer.push(c),
            KeyCode::Backspace => {
                self.input_buffer.pop();
            }
            KeyCode::Enter => self.submit_input(),
            _ => {}
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
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            app.handle_key(key.code, key.modifiers);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
