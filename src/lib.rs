// Library interface for wordle-engine
// The binary and the integration tests both go through these modules

pub mod cli;
pub mod engine;
pub mod evaluator;
pub mod game_state;
pub mod letter;
pub mod logging;
pub mod tui;
pub mod wordbank;

// Re-export commonly used items for easier testing
pub use engine::{DEFAULT_MAX_GUESSES, Game, GameError, GameStatus, GuessError, MAX_GUESSES_LIMIT};
pub use evaluator::{Guess, WORD_LENGTH, evaluate};
pub use game_state::{GameInterface, RoundOutcome, UserAction, game_loop};
pub use letter::{Letter, LetterHints, LetterStatus, build_letter};
pub use wordbank::{
    FixedTarget, WordBank, WordBankError, WordProvider, load_wordbank_from_file,
    load_wordbank_from_str,
};
