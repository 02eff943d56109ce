use crate::engine::{Game, GameError, GameStatus, GuessError};
use crate::evaluator::Guess;
use crate::letter::LetterHints;
use crate::wordbank::WordProvider;
use crate::{debug_log, info_log};

/// What the player asked for at the prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserAction {
    Guess(String),
    NewGame,
    Exit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundOutcome {
    Won { guesses_used: usize },
    Lost { target: String },
}

/// Front end driven by `game_loop`.
///
/// `read_guess` returns `None` when the input could not be turned into an
/// action; the loop simply asks again.
pub trait GameInterface {
    fn start_round(&mut self, max_guesses: usize);
    fn read_guess(&mut self) -> Option<UserAction>;
    fn display_guess(&mut self, guess: &Guess, hints: &LetterHints, remaining: usize);
    fn display_rejection(&mut self, error: &GuessError);
    fn display_outcome(&mut self, outcome: &RoundOutcome);
    fn display_exit_message(&mut self);
}

/// Play rounds against `provider` until the player exits.
///
/// A fresh `Game` is built for every round; nothing carries over.
pub fn game_loop<P, I>(provider: &P, max_guesses: usize, interface: &mut I) -> Result<(), GameError>
where
    P: WordProvider,
    I: GameInterface + ?Sized,
{
    let mut game = start_round(provider, max_guesses, interface)?;

    loop {
        let Some(action) = interface.read_guess() else {
            continue;
        };

        match action {
            UserAction::Exit => {
                info_log!("game_loop() - Exit requested");
                interface.display_exit_message();
                return Ok(());
            }
            UserAction::NewGame => {
                game = start_round(provider, max_guesses, interface)?;
            }
            UserAction::Guess(word) => play_turn(&mut game, &word, interface),
        }
    }
}

fn start_round<'p, P, I>(
    provider: &'p P,
    max_guesses: usize,
    interface: &mut I,
) -> Result<Game<&'p P>, GameError>
where
    P: WordProvider,
    I: GameInterface + ?Sized,
{
    let game = Game::with_max_guesses(provider, max_guesses)?;
    debug_log!("start_round() - Target chosen: {}", game.target_word());
    interface.start_round(game.max_guesses());
    Ok(game)
}

fn play_turn<P, I>(game: &mut Game<P>, word: &str, interface: &mut I)
where
    P: WordProvider,
    I: GameInterface + ?Sized,
{
    let guess = match game.submit_guess(word) {
        Ok(guess) => guess.clone(),
        Err(e) => {
            interface.display_rejection(&e);
            return;
        }
    };

    interface.display_guess(&guess, &game.letter_hints(), game.remaining_guesses());

    if let Some(outcome) = round_outcome(game) {
        info_log!("play_turn() - Round over: {:?}", outcome);
        interface.display_outcome(&outcome);
    }
}

/// `None` while the round is still being played.
pub fn round_outcome<P: WordProvider>(game: &Game<P>) -> Option<RoundOutcome> {
    match game.status() {
        GameStatus::InProgress => None,
        GameStatus::Won => Some(RoundOutcome::Won {
            guesses_used: game.current_guess_index(),
        }),
        GameStatus::Lost => Some(RoundOutcome::Lost {
            target: game.target_word().to_string(),
        }),
    }
}
