//! TUI (Terminal User Interface) module for the Wordle game
//!
//! This module provides an interactive terminal interface using Ratatui.
//!
//! # State Machine
//! The UI follows these state transitions:
//! - `EnteringGuess` → `RoundOver` once the engine reports a win or loss
//! - `RoundOver` → `EnteringGuess` when a new round starts

use crate::cli::KEYBOARD_ROWS;
use crate::engine::GuessError;
use crate::evaluator::{Guess, WORD_LENGTH};
use crate::game_state::{GameInterface, RoundOutcome, UserAction};
use crate::letter::{LetterHints, LetterStatus};
use crate::{debug_log, info_log};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use std::io;
use std::ops::Range;
use std::time::Duration;

const EVENT_POLL_TIMEOUT_MS: u64 = 100;
const ROW_SPACING: u16 = 2;

// Style constants for consistent UI
const HEADER_STYLE: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);
const ERROR_STYLE: Style = Style::new().fg(Color::Red);
const MESSAGE_STYLE: Style = Style::new().fg(Color::Cyan);

/// Background and foreground for a tile; `None` is a letter with no feedback yet.
fn tile_colors(status: Option<LetterStatus>) -> (Color, Color) {
    match status {
        None => (Color::DarkGray, Color::White),
        Some(LetterStatus::Correct) => (Color::Green, Color::Black),
        Some(LetterStatus::Present) => (Color::Yellow, Color::Black),
        Some(LetterStatus::Absent) => (Color::Gray, Color::White),
    }
}

fn tile(letter: char, status: Option<LetterStatus>) -> Span<'static> {
    let (bg, fg) = tile_colors(status);
    Span::styled(format!(" {letter} "), Style::default().fg(fg).bg(bg))
}

/// Which of `total` board rows fit in `available` lines. The first `active`
/// rows (played guesses plus the input row) take priority over empty ones,
/// newest first.
fn visible_rows(total: usize, active: usize, available: usize) -> Range<usize> {
    let end = active.max(available).min(total);
    end.saturating_sub(available)..end
}

#[derive(Debug, PartialEq, Eq)]
enum TuiState {
    EnteringGuess,
    /// Round finished - outcome stored in interface.message
    RoundOver,
}

/// Context for rendering the UI - groups related parameters to avoid too many function arguments.
struct RenderContext<'a> {
    guesses: &'a [Guess],
    max_guesses: usize,
    current_input: &'a str,
    state: &'a TuiState,
    hints: &'a LetterHints,
    message: &'a str,
    error_message: &'a str,
    status: &'a str,
}

/// Main TUI interface component.
///
/// Manages terminal rendering, input handling, and game state display.
pub struct TuiInterface {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    guesses: Vec<Guess>,
    max_guesses: usize,
    current_input: String,
    state: TuiState,
    hints: LetterHints,
    message: String,
    error_message: String,
    status: String,
}

impl TuiInterface {
    pub fn new() -> Result<Self, io::Error> {
        info_log!("TuiInterface::new() - Initializing TUI");
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, cursor::Hide)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        info_log!("Terminal backend created");

        Ok(Self {
            terminal,
            guesses: Vec::new(),
            max_guesses: 0,
            current_input: String::new(),
            state: TuiState::EnteringGuess,
            hints: LetterHints::new(),
            message: String::new(),
            error_message: String::new(),
            status: "Ready to start".to_string(),
        })
    }

    pub fn cleanup(&mut self) -> Result<(), io::Error> {
        disable_raw_mode()?;
        execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            cursor::Show
        )?;
        Ok(())
    }

    /// Draw the current UI state to the terminal.
    fn draw(&mut self) -> Result<(), io::Error> {
        let ctx = RenderContext {
            guesses: &self.guesses,
            max_guesses: self.max_guesses,
            current_input: &self.current_input,
            state: &self.state,
            hints: &self.hints,
            message: &self.message,
            error_message: &self.error_message,
            status: &self.status,
        };

        self.terminal.draw(|f| {
            Self::render_static(f, &ctx);
        })?;
        Ok(())
    }

    fn draw_or_log(&mut self) {
        if let Err(e) = self.draw() {
            debug_log!("Draw error: {}", e);
        }
    }

    fn render_static(f: &mut Frame, ctx: &RenderContext) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),  // Title
                Constraint::Min(6),     // Game board
                Constraint::Length(5),  // Keyboard
                Constraint::Length(4),  // Messages
                Constraint::Length(3),  // Status line
                Constraint::Length(3),  // Instructions
            ])
            .split(f.area());

        Self::render_title(f, chunks[0]);
        Self::render_board(f, chunks[1], ctx);
        Self::render_keyboard(f, chunks[2], ctx.hints);
        Self::render_messages(f, chunks[3], ctx.message, ctx.error_message);
        Self::render_status(f, chunks[4], ctx.status);
        Self::render_instructions(f, chunks[5], ctx.state);
    }

    fn render_title(f: &mut Frame, area: Rect) {
        let title = Paragraph::new("WORDLE")
            .style(HEADER_STYLE)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(title, area);
    }

    #[allow(clippy::cast_possible_truncation)]
    fn render_board(f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let block = Block::default()
            .title(format!("Guesses ({}/{})", ctx.guesses.len(), ctx.max_guesses))
            .borders(Borders::ALL);
        let inner = block.inner(area);
        f.render_widget(block, area);

        let mut rows: Vec<Vec<Span>> = ctx
            .guesses
            .iter()
            .map(|guess| {
                guess
                    .letters()
                    .iter()
                    .map(|l| tile(l.letter, Some(l.status)))
                    .collect()
            })
            .collect();

        let entering = *ctx.state == TuiState::EnteringGuess && rows.len() < ctx.max_guesses;
        if entering {
            let mut letters = ctx.current_input.chars();
            rows.push(
                (0..WORD_LENGTH)
                    .map(|_| tile(letters.next().unwrap_or(' '), None))
                    .collect(),
            );
        }
        while rows.len() < ctx.max_guesses {
            rows.push((0..WORD_LENGTH).map(|_| tile(' ', None)).collect());
        }

        let available = (inner.height / ROW_SPACING).max(1) as usize;
        let active = ctx.guesses.len() + usize::from(entering);
        let range = visible_rows(rows.len(), active, available);
        for (display_index, tiles) in rows[range].iter().enumerate() {
            let y = inner.y + display_index as u16 * ROW_SPACING;
            if y >= inner.y + inner.height {
                break;
            }
            let mut spans = vec![Span::raw("  ")];
            for t in tiles {
                spans.push(t.clone());
                spans.push(Span::raw(" "));
            }
            Self::render_line(f, inner, y, spans);
        }
    }

    fn render_line(f: &mut Frame, area: Rect, y: u16, spans: Vec<Span>) {
        let paragraph = Paragraph::new(Line::from(spans));
        f.render_widget(
            paragraph,
            Rect {
                x: area.x,
                y,
                width: area.width,
                height: 1,
            },
        );
    }

    fn render_keyboard(f: &mut Frame, area: Rect, hints: &LetterHints) {
        let lines: Vec<Line> = KEYBOARD_ROWS
            .iter()
            .enumerate()
            .map(|(i, row)| {
                let mut spans = vec![Span::raw(" ".repeat(i * 2))];
                for c in row.chars() {
                    spans.push(tile(c, hints.get(&c).copied()));
                    spans.push(Span::raw(" "));
                }
                Line::from(spans)
            })
            .collect();

        let paragraph =
            Paragraph::new(lines).block(Block::default().title("Keyboard").borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    fn render_messages(f: &mut Frame, area: Rect, message: &str, error_message: &str) {
        let mut lines = Vec::new();
        if !message.is_empty() {
            lines.push(Line::from(vec![Span::styled(message, MESSAGE_STYLE)]));
        }
        if !error_message.is_empty() {
            lines.push(Line::from(vec![Span::styled(error_message, ERROR_STYLE)]));
        }

        let paragraph = Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL))
            .wrap(Wrap { trim: true });
        f.render_widget(paragraph, area);
    }

    fn render_instructions(f: &mut Frame, area: Rect, state: &TuiState) {
        let text = match state {
            TuiState::EnteringGuess => "Type your 5-letter guess | ENTER: Submit | ESC: Quit",
            TuiState::RoundOver => "N: New Game | ESC: Quit",
        };

        let paragraph = Paragraph::new(text)
            .style(Style::default().fg(Color::Gray))
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    fn render_status(f: &mut Frame, area: Rect, status: &str) {
        let status_text = if status.is_empty() { "Ready" } else { status };
        let paragraph = Paragraph::new(status_text)
            .style(HEADER_STYLE)
            .block(Block::default().borders(Borders::ALL).title("Status"));
        f.render_widget(paragraph, area);
    }

    fn handle_input(&mut self) -> Result<Option<UserAction>, io::Error> {
        if !event::poll(Duration::from_millis(EVENT_POLL_TIMEOUT_MS))? {
            return Ok(None);
        }

        let Event::Key(key) = event::read()? else {
            debug_log!("handle_input() - Ignoring non-key event");
            return Ok(None);
        };

        // Only process Press events, ignore Release and Repeat to avoid double input
        if key.kind != KeyEventKind::Press {
            return Ok(None);
        }

        Ok(match self.state {
            TuiState::EnteringGuess => self.handle_guess_input(key),
            TuiState::RoundOver => Self::handle_round_over_input(key),
        })
    }

    fn has_modifier_keys(key: &KeyEvent) -> bool {
        key.modifiers.contains(KeyModifiers::ALT) || key.modifiers.contains(KeyModifiers::CONTROL)
    }

    fn handle_guess_input(&mut self, key: KeyEvent) -> Option<UserAction> {
        match key.code {
            KeyCode::Esc => {
                info_log!("handle_guess_input() - ESC pressed, returning Exit");
                return Some(UserAction::Exit);
            }
            KeyCode::Char(c)
                if c.is_ascii_alphabetic()
                    && !Self::has_modifier_keys(&key)
                    && self.current_input.len() < WORD_LENGTH =>
            {
                self.error_message.clear();
                self.current_input.push(c.to_ascii_uppercase());
            }
            KeyCode::Char(c) if !c.is_ascii_alphabetic() => {
                self.error_message = format!("Only letters are allowed! ('{c}' is not a letter)");
            }
            KeyCode::Backspace => {
                self.error_message.clear();
                self.current_input.pop();
            }
            KeyCode::Enter if !self.current_input.is_empty() => {
                // The input row stays until the engine accepts or rejects the word
                let guess = self.current_input.clone();
                info_log!("handle_guess_input() - Submitting '{}'", guess);
                return Some(UserAction::Guess(guess));
            }
            _ => {
                debug_log!("handle_guess_input() - Ignoring key: {:?}", key.code);
            }
        }
        None
    }

    fn handle_round_over_input(key: KeyEvent) -> Option<UserAction> {
        match key.code {
            KeyCode::Char('n' | 'N') => Some(UserAction::NewGame),
            KeyCode::Esc | KeyCode::Char('q' | 'Q') => Some(UserAction::Exit),
            _ => None,
        }
    }
}

impl GameInterface for TuiInterface {
    fn start_round(&mut self, max_guesses: usize) {
        self.guesses.clear();
        self.hints.clear();
        self.current_input.clear();
        self.error_message.clear();
        self.max_guesses = max_guesses;
        self.state = TuiState::EnteringGuess;
        self.message = format!("New round - you have {max_guesses} guesses.");
        self.status = "Enter your first guess".to_string();
        self.draw_or_log();
    }

    fn read_guess(&mut self) -> Option<UserAction> {
        loop {
            if self.draw().is_err() {
                info_log!("read_guess() - Draw failed, returning Exit");
                return Some(UserAction::Exit);
            }

            match self.handle_input() {
                Ok(Some(action)) => return Some(action),
                Ok(None) => {}
                Err(e) => {
                    info_log!("read_guess() - Error handling input: {}", e);
                    return Some(UserAction::Exit);
                }
            }
        }
    }

    fn display_guess(&mut self, guess: &Guess, hints: &LetterHints, remaining: usize) {
        self.guesses.push(guess.clone());
        self.hints.clone_from(hints);
        self.current_input.clear();
        self.error_message.clear();
        self.message.clear();
        self.status = format!("Guesses remaining: {remaining}");
        self.draw_or_log();
    }

    fn display_rejection(&mut self, error: &GuessError) {
        self.error_message = error.to_string();
        self.draw_or_log();
    }

    fn display_outcome(&mut self, outcome: &RoundOutcome) {
        self.state = TuiState::RoundOver;
        match outcome {
            RoundOutcome::Won { guesses_used } => {
                self.message = format!("✓ Solved in {guesses_used}/{}!", self.max_guesses);
                self.status = "Game Over - You won".to_string();
            }
            RoundOutcome::Lost { target } => {
                self.message = format!("The word was {target}.");
                self.status = "Game Over - Out of guesses".to_string();
            }
        }
        self.draw_or_log();
    }

    fn display_exit_message(&mut self) {
        self.message = "Exiting...".to_string();
        self.status = "Exiting application...".to_string();
        self.draw_or_log();
    }
}

impl Drop for TuiInterface {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}
