use crate::evaluator::WORD_LENGTH;
use crate::info_log;
use rand::Rng;
use std::collections::HashSet;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const EMBEDDED_WORDBANK: &str = include_str!("resources/wordbank.txt");

const APP_DIR: &str = "wordle-engine";
const WORDBANK_FILE: &str = "wordbank.txt";

/// Source of target words and dictionary for a game.
pub trait WordProvider {
    /// A word of length `WORD_LENGTH` to use as the secret for one round.
    fn target_word(&self) -> String;

    fn is_valid_word(&self, candidate: &str) -> bool;
}

impl<P: WordProvider + ?Sized> WordProvider for &P {
    fn target_word(&self) -> String {
        (**self).target_word()
    }

    fn is_valid_word(&self, candidate: &str) -> bool {
        (**self).is_valid_word(candidate)
    }
}

#[derive(Debug, Error)]
pub enum WordBankError {
    #[error("failed to read word bank: {0}")]
    Io(#[from] io::Error),
    #[error("word bank contains no 5-letter words")]
    Empty,
}

fn normalize(line: &str) -> Option<String> {
    let word = line.trim().to_uppercase();
    (word.len() == WORD_LENGTH && word.chars().all(|c| c.is_ascii_alphabetic())).then_some(word)
}

#[must_use]
pub fn load_wordbank_from_str(data: &str) -> Vec<String> {
    data.lines().filter_map(normalize).collect()
}

pub fn load_wordbank_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut words = Vec::new();
    for line in reader.lines() {
        if let Some(word) = normalize(&line?) {
            words.push(word);
        }
    }
    Ok(words)
}

/// Per-user word bank location, used when no path is given on the command line.
#[must_use]
pub fn get_user_wordbank_path() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join(APP_DIR).join(WORDBANK_FILE))
}

/// Dictionary and random target source backed by a word list.
#[derive(Clone, Debug)]
pub struct WordBank {
    words: Vec<String>,
    lookup: HashSet<String>,
}

impl WordBank {
    /// Build from already-normalized words. Duplicates are dropped, first
    /// occurrence wins.
    pub fn from_words(words: Vec<String>) -> Result<Self, WordBankError> {
        let mut lookup = HashSet::with_capacity(words.len());
        let words: Vec<String> = words
            .into_iter()
            .filter(|w| lookup.insert(w.clone()))
            .collect();
        if words.is_empty() {
            return Err(WordBankError::Empty);
        }
        Ok(Self { words, lookup })
    }

    pub fn embedded() -> Result<Self, WordBankError> {
        Self::from_words(load_wordbank_from_str(EMBEDDED_WORDBANK))
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, WordBankError> {
        Self::from_words(load_wordbank_from_file(path)?)
    }

    /// Load `path` if given, otherwise the per-user word bank if present,
    /// otherwise the embedded list.
    pub fn resolve(path: Option<&Path>) -> Result<Self, WordBankError> {
        if let Some(path) = path {
            info_log!("Loading word bank from {}", path.display());
            return Self::from_file(path);
        }
        if let Some(user_path) = get_user_wordbank_path()
            && user_path.is_file()
        {
            info_log!("Loading user word bank from {}", user_path.display());
            return Self::from_file(user_path);
        }
        info_log!("Using embedded word bank");
        Self::embedded()
    }

    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl WordProvider for WordBank {
    fn target_word(&self) -> String {
        let index = rand::rng().random_range(0..self.words.len());
        self.words[index].clone()
    }

    fn is_valid_word(&self, candidate: &str) -> bool {
        self.lookup.contains(&candidate.to_uppercase())
    }
}

/// Always hands out the same target; dictionary checks go to `dictionary`.
#[derive(Clone, Debug)]
pub struct FixedTarget<P> {
    target: String,
    dictionary: P,
}

impl<P: WordProvider> FixedTarget<P> {
    pub fn new(target: impl Into<String>, dictionary: P) -> Self {
        Self {
            target: target.into().to_uppercase(),
            dictionary,
        }
    }
}

impl<P: WordProvider> WordProvider for FixedTarget<P> {
    fn target_word(&self) -> String {
        self.target.clone()
    }

    fn is_valid_word(&self, candidate: &str) -> bool {
        self.dictionary.is_valid_word(candidate)
    }
}
