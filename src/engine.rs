//! Game engine: owns the target word and guess history for one round.
//!
//! # State Machine
//! - `InProgress` → `Won` when an accepted guess equals the target
//! - `InProgress` → `Lost` when the last guess slot is used without a win
//!
//! `Won` and `Lost` are terminal. `submit_guess` is the only mutator and
//! leaves the game untouched when it rejects a word.

use crate::evaluator::{Guess, WORD_LENGTH, evaluate};
use crate::letter::{LetterHints, merge_hint};
use crate::wordbank::WordProvider;
use crate::{debug_log, info_log};
use thiserror::Error;

pub const DEFAULT_MAX_GUESSES: usize = 6;
/// Largest budget a round accepts; every slot is allocated up front.
pub const MAX_GUESSES_LIMIT: usize = 20;

/// Reasons a submission is refused. The game state is unchanged in every case.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuessError {
    #[error("No guesses remaining")]
    NoGuessesRemaining,
    #[error("Guess must be exactly {expected} letters (got {actual})")]
    InvalidLength { expected: usize, actual: usize },
    #[error("{0} is not in the word list")]
    NotAWord(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("max guesses must be between 1 and {max}", max = MAX_GUESSES_LIMIT)]
    InvalidMaxGuesses,
    #[error("target word {0:?} must be exactly 5 letters")]
    InvalidTargetWord(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

#[derive(Debug)]
pub struct Game<P: WordProvider> {
    provider: P,
    target_word: String,
    max_guesses: usize,
    guesses: Vec<Option<Guess>>,
    current_guess_index: usize,
}

impl<P: WordProvider> Game<P> {
    /// Start a round with the default budget of six guesses.
    pub fn new(provider: P) -> Result<Self, GameError> {
        Self::with_max_guesses(provider, DEFAULT_MAX_GUESSES)
    }

    pub fn with_max_guesses(provider: P, max_guesses: usize) -> Result<Self, GameError> {
        if !(1..=MAX_GUESSES_LIMIT).contains(&max_guesses) {
            return Err(GameError::InvalidMaxGuesses);
        }

        let target_word = uppercase_letters(&provider.target_word());
        if target_word.chars().count() != WORD_LENGTH {
            return Err(GameError::InvalidTargetWord(target_word));
        }

        info_log!("Game::with_max_guesses() - New round with {} guesses", max_guesses);
        Ok(Self {
            provider,
            target_word,
            max_guesses,
            guesses: vec![None; max_guesses],
            current_guess_index: 0,
        })
    }

    /// Evaluate and record `word` in the next free slot.
    ///
    /// Checks run in order: game already over, wrong length, not a word.
    /// The first failing check is reported.
    pub fn submit_guess(&mut self, word: &str) -> Result<&Guess, GuessError> {
        let word = uppercase_letters(word);

        if self.status() != GameStatus::InProgress {
            debug_log!("submit_guess() - Rejected '{}': game is over", word);
            return Err(GuessError::NoGuessesRemaining);
        }

        let actual = word.chars().count();
        if actual != WORD_LENGTH {
            debug_log!("submit_guess() - Rejected '{}': length {}", word, actual);
            return Err(GuessError::InvalidLength {
                expected: WORD_LENGTH,
                actual,
            });
        }

        if !self.provider.is_valid_word(&word) {
            debug_log!("submit_guess() - Rejected '{}': not a word", word);
            return Err(GuessError::NotAWord(word));
        }

        let guess = evaluate(&word, &self.target_word);
        let slot = self.current_guess_index;
        self.current_guess_index += 1;
        info_log!(
            "submit_guess() - Accepted '{}' as guess {}/{}",
            word,
            self.current_guess_index,
            self.max_guesses
        );

        let guess: &Guess = self.guesses[slot].insert(guess);
        Ok(guess)
    }

    /// True when the most recent guess matches the target.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.current_guess_index
            .checked_sub(1)
            .and_then(|last| self.guesses[last].as_ref())
            .is_some_and(|guess| guess.word() == self.target_word)
    }

    #[must_use]
    pub fn should_end_game(&self) -> bool {
        self.is_solved() || self.current_guess_index == self.max_guesses
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        if self.is_solved() {
            GameStatus::Won
        } else if self.current_guess_index == self.max_guesses {
            GameStatus::Lost
        } else {
            GameStatus::InProgress
        }
    }

    #[must_use]
    pub fn target_word(&self) -> &str {
        &self.target_word
    }

    #[must_use]
    pub fn max_guesses(&self) -> usize {
        self.max_guesses
    }

    #[must_use]
    pub fn current_guess_index(&self) -> usize {
        self.current_guess_index
    }

    #[must_use]
    pub fn remaining_guesses(&self) -> usize {
        self.max_guesses - self.current_guess_index
    }

    /// All `max_guesses` slots, filled ones first.
    #[must_use]
    pub fn guesses(&self) -> &[Option<Guess>] {
        &self.guesses
    }

    pub fn submitted_guesses(&self) -> impl Iterator<Item = &Guess> {
        self.guesses.iter().flatten()
    }

    #[must_use]
    pub fn letter_hints(&self) -> LetterHints {
        let mut hints = LetterHints::new();
        for guess in self.submitted_guesses() {
            for &letter in guess.letters() {
                merge_hint(&mut hints, letter);
            }
        }
        hints
    }
}

/// Uppercase one character at a time so the word keeps its length. A letter
/// whose uppercase form is several characters (`ß`) is left as it is.
fn uppercase_letters(word: &str) -> String {
    word.chars()
        .map(|c| {
            let mut upper = c.to_uppercase();
            match (upper.next(), upper.next()) {
                (Some(u), None) => u,
                _ => c,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::letter::{LetterStatus, build_letter};
    use std::cell::Cell;

    /// Always targets APPLE and accepts every word unless told to reject the next one.
    #[derive(Debug)]
    struct MockWords {
        target: &'static str,
        reject_next: Cell<bool>,
        lookups: Cell<usize>,
    }

    impl MockWords {
        fn new() -> Self {
            Self::with_target("APPLE")
        }

        fn with_target(target: &'static str) -> Self {
            Self {
                target,
                reject_next: Cell::new(false),
                lookups: Cell::new(0),
            }
        }

        fn reject_next_word(&self) {
            self.reject_next.set(true);
        }
    }

    impl WordProvider for MockWords {
        fn target_word(&self) -> String {
            self.target.to_string()
        }

        fn is_valid_word(&self, _candidate: &str) -> bool {
            self.lookups.set(self.lookups.get() + 1);
            !self.reject_next.replace(false)
        }
    }

    fn filled_slots<P: WordProvider>(game: &Game<P>) -> usize {
        game.guesses().iter().filter(|g| g.is_some()).count()
    }

    #[test]
    fn test_target_word_from_provider() {
        let game = Game::new(MockWords::new()).unwrap();
        assert_eq!(game.target_word(), "APPLE");
    }

    #[test]
    fn test_target_word_uppercased() {
        let game = Game::new(MockWords::with_target("apple")).unwrap();
        assert_eq!(game.target_word(), "APPLE");
    }

    #[test]
    fn test_default_max_guesses() {
        let game = Game::new(MockWords::new()).unwrap();
        assert_eq!(game.max_guesses(), 6);
        assert_eq!(game.guesses().len(), 6);
        assert_eq!(game.current_guess_index(), 0);
        assert_eq!(game.status(), GameStatus::InProgress);
    }

    #[test]
    fn test_custom_max_guesses() {
        let game = Game::with_max_guesses(MockWords::new(), 10).unwrap();
        assert_eq!(game.max_guesses(), 10);
        assert_eq!(game.guesses().len(), 10);
        assert!(game.guesses().iter().all(Option::is_none));
    }

    #[test]
    fn test_zero_max_guesses_rejected() {
        assert_eq!(
            Game::with_max_guesses(MockWords::new(), 0).unwrap_err(),
            GameError::InvalidMaxGuesses
        );
    }

    #[test]
    fn test_oversized_max_guesses_rejected() {
        for budget in [MAX_GUESSES_LIMIT + 1, 1_000_000, usize::MAX] {
            assert_eq!(
                Game::with_max_guesses(MockWords::new(), budget).unwrap_err(),
                GameError::InvalidMaxGuesses,
                "budget {budget}"
            );
        }
        let game = Game::with_max_guesses(MockWords::new(), MAX_GUESSES_LIMIT).unwrap();
        assert_eq!(game.guesses().len(), MAX_GUESSES_LIMIT);
    }

    #[test]
    fn test_bad_target_length_rejected() {
        assert_eq!(
            Game::new(MockWords::with_target("APPLES")).unwrap_err(),
            GameError::InvalidTargetWord("APPLES".to_string())
        );
    }

    #[test]
    fn test_submit_returns_evaluated_guess() {
        let mut game = Game::new(MockWords::new()).unwrap();
        let guess = game.submit_guess("A____").unwrap();
        assert_eq!(guess[0], build_letter('A', LetterStatus::Correct));

        let guess = game.submit_guess("E____").unwrap();
        assert_eq!(guess[0], build_letter('E', LetterStatus::Present));

        let guess = game.submit_guess("Z____").unwrap();
        assert_eq!(guess[0], build_letter('Z', LetterStatus::Absent));
    }

    #[test]
    fn test_submit_increments_index() {
        let mut game = Game::new(MockWords::new()).unwrap();
        game.submit_guess("GUESS").unwrap();
        assert_eq!(game.current_guess_index(), 1);
        assert_eq!(filled_slots(&game), 1);
        assert_eq!(game.remaining_guesses(), 5);
        assert_eq!(game.guesses()[0].as_ref().unwrap().word(), "GUESS");
    }

    #[test]
    fn test_submit_uppercases_word() {
        let mut game = Game::new(MockWords::new()).unwrap();
        let guess = game.submit_guess("apple").unwrap();
        assert_eq!(guess.word(), "APPLE");
        assert!(game.is_solved());
    }

    #[test]
    fn test_length_counts_submitted_characters() {
        let mut game = Game::new(MockWords::new()).unwrap();
        let guess = game.submit_guess("straß").unwrap();
        assert_eq!(guess.word(), "STRAß");
        assert_eq!(guess.len(), 5);

        assert_eq!(
            game.submit_guess("straße").unwrap_err(),
            GuessError::InvalidLength {
                expected: 5,
                actual: 6
            }
        );
    }

    #[test]
    fn test_no_guesses_remaining() {
        let mut game = Game::with_max_guesses(MockWords::new(), 1).unwrap();
        game.submit_guess("GUESS").unwrap();
        assert_eq!(
            game.submit_guess("ANOTHERGUESS").unwrap_err(),
            GuessError::NoGuessesRemaining
        );
        assert_eq!(game.current_guess_index(), 1);
    }

    #[test]
    fn test_invalid_length() {
        let mut game = Game::new(MockWords::new()).unwrap();
        assert_eq!(
            game.submit_guess("LONGESTGUESSEVER").unwrap_err(),
            GuessError::InvalidLength {
                expected: 5,
                actual: 16
            }
        );
        assert_eq!(
            game.submit_guess("").unwrap_err(),
            GuessError::InvalidLength {
                expected: 5,
                actual: 0
            }
        );
    }

    #[test]
    fn test_invalid_length_never_mutates() {
        let mut game = Game::new(MockWords::new()).unwrap();
        game.submit_guess("GUESS").unwrap();
        let before = game.guesses().to_vec();
        for _ in 0..3 {
            assert!(game.submit_guess("TOOLONG").is_err());
            assert!(game.submit_guess("ABC").is_err());
        }
        assert_eq!(game.current_guess_index(), 1);
        assert_eq!(game.guesses(), before.as_slice());
    }

    #[test]
    fn test_not_a_word() {
        let words = MockWords::new();
        let mut game = Game::new(&words).unwrap();
        words.reject_next_word();
        assert_eq!(
            game.submit_guess("guess").unwrap_err(),
            GuessError::NotAWord("GUESS".to_string())
        );
        assert_eq!(game.current_guess_index(), 0);
        assert_eq!(filled_slots(&game), 0);

        // The rejection does not consume a slot, so a retry is accepted
        game.submit_guess("GUESS").unwrap();
        assert_eq!(game.current_guess_index(), 1);
    }

    #[test]
    fn test_validation_order() {
        let words = MockWords::new();
        let mut game = Game::with_max_guesses(&words, 1).unwrap();

        // Length is checked before the dictionary is consulted
        assert!(matches!(
            game.submit_guess("TOOLONG"),
            Err(GuessError::InvalidLength { .. })
        ));
        assert_eq!(words.lookups.get(), 0);

        game.submit_guess("GUESS").unwrap();
        assert_eq!(words.lookups.get(), 1);

        // Once over, neither length nor dictionary is checked
        words.reject_next_word();
        assert_eq!(
            game.submit_guess("TOOLONG").unwrap_err(),
            GuessError::NoGuessesRemaining
        );
        assert_eq!(words.lookups.get(), 1);
    }

    #[test]
    fn test_is_solved_true_for_target() {
        let mut game = Game::new(MockWords::new()).unwrap();
        game.submit_guess("APPLE").unwrap();
        assert!(game.is_solved());
        assert!(game.should_end_game());
        assert_eq!(game.status(), GameStatus::Won);
        assert_eq!(game.current_guess_index(), 1);
    }

    #[test]
    fn test_is_solved_false_for_other_word() {
        let mut game = Game::new(MockWords::new()).unwrap();
        game.submit_guess("GUESS").unwrap();
        assert!(!game.is_solved());
    }

    #[test]
    fn test_is_solved_false_without_guesses() {
        let game = Game::new(MockWords::new()).unwrap();
        assert!(!game.is_solved());
    }

    #[test]
    fn test_should_end_game_false_initially() {
        let game = Game::new(MockWords::new()).unwrap();
        assert!(!game.should_end_game());
    }

    #[test]
    fn test_should_end_game_false_with_guesses_left() {
        let mut game = Game::new(MockWords::new()).unwrap();
        for i in 1..6 {
            game.submit_guess("GUESS").unwrap();
            assert!(!game.should_end_game(), "after guess {i}");
        }
        game.submit_guess("GUESS").unwrap();
        assert!(game.should_end_game());
        assert_eq!(game.status(), GameStatus::Lost);
    }

    #[test]
    fn test_should_end_game_when_out_of_guesses() {
        let mut game = Game::with_max_guesses(MockWords::new(), 1).unwrap();
        game.submit_guess("GUESS").unwrap();
        assert!(game.should_end_game());
        assert_eq!(game.remaining_guesses(), 0);
    }

    #[test]
    fn test_win_on_last_guess_is_won() {
        let mut game = Game::with_max_guesses(MockWords::new(), 2).unwrap();
        game.submit_guess("GUESS").unwrap();
        game.submit_guess("APPLE").unwrap();
        assert_eq!(game.status(), GameStatus::Won);
    }

    #[test]
    fn test_won_game_refuses_more_guesses() {
        let mut game = Game::new(MockWords::new()).unwrap();
        game.submit_guess("APPLE").unwrap();
        assert_eq!(
            game.submit_guess("GUESS").unwrap_err(),
            GuessError::NoGuessesRemaining
        );
        assert_eq!(game.current_guess_index(), 1);
        assert_eq!(game.status(), GameStatus::Won);
    }

    #[test]
    fn test_index_matches_filled_slots() {
        let words = MockWords::new();
        let mut game = Game::new(&words).unwrap();
        for word in ["GUESS", "TOOLONG", "CRANE", "XX", "SLATE"] {
            let _ = game.submit_guess(word);
            assert_eq!(game.current_guess_index(), filled_slots(&game));
        }
        assert_eq!(game.current_guess_index(), 3);
        let submitted: Vec<String> = game.submitted_guesses().map(Guess::word).collect();
        assert_eq!(submitted, vec!["GUESS", "CRANE", "SLATE"]);
    }

    #[test]
    fn test_letter_hints_keep_best_status() {
        let mut game = Game::new(MockWords::new()).unwrap();
        game.submit_guess("PLXXX").unwrap();
        game.submit_guess("APXXX").unwrap();
        let hints = game.letter_hints();
        assert_eq!(hints[&'P'], LetterStatus::Correct);
        assert_eq!(hints[&'L'], LetterStatus::Present);
        assert_eq!(hints[&'A'], LetterStatus::Correct);
        assert_eq!(hints[&'X'], LetterStatus::Absent);
        assert!(!hints.contains_key(&'E'));
    }
}
