use crate::debug_log;
use crate::engine::{DEFAULT_MAX_GUESSES, GuessError};
use crate::evaluator::{Guess, WORD_LENGTH};
use crate::game_state::{GameInterface, RoundOutcome, UserAction};
use crate::letter::{LetterHints, LetterStatus};
use clap::Parser;
use crossterm::style::{StyledContent, Stylize};
use std::io::BufRead;
use std::path::PathBuf;

/// On-screen keyboard layout shared by the front ends.
pub const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Wordle CLI options
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a newline-delimited wordbank file
    #[arg(short = 'i', long = "input")]
    pub wordbank_path: Option<PathBuf>,

    /// Number of guesses allowed per round (1 to 20)
    #[arg(short = 'g', long = "max-guesses", default_value_t = DEFAULT_MAX_GUESSES)]
    pub max_guesses: usize,

    /// Play against this word instead of a random one
    #[arg(short = 'w', long = "word")]
    pub word: Option<String>,

    /// Use the full-screen terminal interface
    #[arg(long)]
    pub tui: bool,
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

// UI Input/Output functions

#[derive(Debug, PartialEq, Eq)]
pub enum GuessInput {
    Valid(String),
    Invalid,
    Exit,
    NewGame,
}

/// Interpret one line typed at the guess prompt. Case, length and
/// dictionary checks are left to the engine so its errors reach the player.
#[must_use]
pub fn parse_guess_input(line: &str) -> GuessInput {
    let input = line.trim();
    if input.is_empty() {
        GuessInput::Invalid
    } else if input.eq_ignore_ascii_case("exit") {
        GuessInput::Exit
    } else if input.eq_ignore_ascii_case("next") {
        GuessInput::NewGame
    } else {
        GuessInput::Valid(input.to_string())
    }
}

pub fn read_guess<R: BufRead>(reader: &mut R) -> GuessInput {
    println!(
        "\nEnter your guess ({WORD_LENGTH} letters, or 'exit' to quit, or 'next' to start a new game):"
    );
    let mut input = String::new();
    match reader.read_line(&mut input) {
        // End of input ends the session
        Ok(0) => GuessInput::Exit,
        Ok(_) => {
            let parsed = parse_guess_input(&input);
            if parsed == GuessInput::Invalid {
                println!("Please type a word.");
            }
            parsed
        }
        Err(e) => {
            debug_log!("read_guess() - Failed to read input: {}", e);
            GuessInput::Exit
        }
    }
}

/// G/Y/X notation for a guess, e.g. `GYXXG`.
#[must_use]
pub fn feedback_string(guess: &Guess) -> String {
    guess
        .letters()
        .iter()
        .map(|l| match l.status {
            LetterStatus::Correct => 'G',
            LetterStatus::Present => 'Y',
            LetterStatus::Absent => 'X',
        })
        .collect()
}

fn tile(letter: char, status: Option<LetterStatus>) -> StyledContent<String> {
    let text = format!(" {letter} ");
    match status {
        Some(LetterStatus::Correct) => text.black().on_green(),
        Some(LetterStatus::Present) => text.black().on_yellow(),
        Some(LetterStatus::Absent) => text.white().on_dark_grey(),
        None => text.stylize(),
    }
}

#[must_use]
pub fn render_guess(guess: &Guess) -> String {
    guess
        .letters()
        .iter()
        .map(|l| tile(l.letter, Some(l.status)).to_string())
        .collect()
}

#[must_use]
pub fn render_keyboard(hints: &LetterHints) -> Vec<String> {
    KEYBOARD_ROWS
        .iter()
        .map(|row| {
            row.chars()
                .map(|c| tile(c, hints.get(&c).copied()).to_string())
                .collect()
        })
        .collect()
}

pub fn display_new_round_message(max_guesses: usize) {
    println!("New round started. You have {max_guesses} guesses.");
}

pub fn display_guess(guess: &Guess, hints: &LetterHints, remaining: usize) {
    println!("{}  {}", render_guess(guess), feedback_string(guess));
    for row in render_keyboard(hints) {
        println!("  {row}");
    }
    println!("Guesses remaining: {remaining}");
}

pub fn display_rejection(error: &GuessError) {
    match error {
        GuessError::NoGuessesRemaining => {
            println!("This round is over. Type 'next' to play again or 'exit' to quit.");
        }
        _ => println!("{error}. Try again."),
    }
}

pub fn display_outcome(outcome: &RoundOutcome) {
    match outcome {
        RoundOutcome::Won { guesses_used: 1 } => println!("Solved in 1 guess!"),
        RoundOutcome::Won { guesses_used } => println!("Solved in {guesses_used} guesses!"),
        RoundOutcome::Lost { target } => println!("Out of guesses. The word was {target}."),
    }
    println!("Type 'next' to play again or 'exit' to quit.");
}

pub fn display_exit_message() {
    println!("Exiting.");
}

/// CLI implementation of the GameInterface trait
/// This struct wraps a BufRead reader and implements the game interface for CLI interaction
pub struct CliInterface<R: BufRead> {
    reader: R,
}

impl<R: BufRead> CliInterface<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> GameInterface for CliInterface<R> {
    fn start_round(&mut self, max_guesses: usize) {
        display_new_round_message(max_guesses);
    }

    fn read_guess(&mut self) -> Option<UserAction> {
        match read_guess(&mut self.reader) {
            GuessInput::Valid(guess) => Some(UserAction::Guess(guess)),
            GuessInput::Exit => Some(UserAction::Exit),
            GuessInput::NewGame => Some(UserAction::NewGame),
            GuessInput::Invalid => None,
        }
    }

    fn display_guess(&mut self, guess: &Guess, hints: &LetterHints, remaining: usize) {
        display_guess(guess, hints, remaining);
    }

    fn display_rejection(&mut self, error: &GuessError) {
        display_rejection(error);
    }

    fn display_outcome(&mut self, outcome: &RoundOutcome) {
        display_outcome(outcome);
    }

    fn display_exit_message(&mut self) {
        display_exit_message();
    }
}
