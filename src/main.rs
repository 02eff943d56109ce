use std::error::Error;
use std::io;
use std::process::ExitCode;
use wordle_engine::cli::{CliInterface, parse_cli};
use wordle_engine::logging::{LogTarget, init_logging};
use wordle_engine::tui::TuiInterface;
use wordle_engine::{FixedTarget, WordBank, WordProvider, game_loop, info_log};

fn main() -> ExitCode {
    let cli = parse_cli();

    let log_target = if cli.tui {
        LogTarget::File
    } else {
        LogTarget::Stderr
    };
    match init_logging(log_target) {
        Ok(Some(path)) => info_log!("Logging to {}", path.display()),
        Ok(None) => {}
        Err(e) => eprintln!("Failed to set up logging: {e}"),
    }

    let wordbank = match WordBank::resolve(cli.wordbank_path.as_deref()) {
        Ok(bank) => bank,
        Err(e) => {
            eprintln!("Failed to load word bank: {e}");
            return ExitCode::FAILURE;
        }
    };
    println!("Loaded {} words.", wordbank.len());

    let result = match &cli.word {
        Some(word) => run(&FixedTarget::new(word.as_str(), &wordbank), cli.max_guesses, cli.tui),
        None => run(&wordbank, cli.max_guesses, cli.tui),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run<P: WordProvider>(provider: &P, max_guesses: usize, tui: bool) -> Result<(), Box<dyn Error>> {
    if tui {
        let mut interface = TuiInterface::new()?;
        game_loop(provider, max_guesses, &mut interface)?;
    } else {
        let mut interface = CliInterface::new(io::stdin().lock());
        game_loop(provider, max_guesses, &mut interface)?;
    }
    Ok(())
}
