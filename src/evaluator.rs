use crate::letter::{Letter, LetterStatus, build_letter};
use std::collections::HashMap;

/// Length of every target word and accepted guess.
pub const WORD_LENGTH: usize = 5;

/// One evaluated submission, aligned with the submitted word's characters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Guess {
    letters: Vec<Letter>,
}

impl Guess {
    #[must_use]
    pub fn letters(&self) -> &[Letter] {
        &self.letters
    }

    #[must_use]
    pub fn word(&self) -> String {
        self.letters.iter().map(|l| l.letter).collect()
    }

    #[must_use]
    pub fn is_correct(&self) -> bool {
        self.letters
            .iter()
            .all(|l| l.status == LetterStatus::Correct)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }
}

impl std::ops::Index<usize> for Guess {
    type Output = Letter;

    fn index(&self, index: usize) -> &Letter {
        &self.letters[index]
    }
}

/// Evaluate `submitted` against `target`.
///
/// Exact matches are assigned first and consume their letter, so a letter
/// that appears once in the target is reported at most once across the guess,
/// and a `Correct` position is never downgraded by a later `Present` search.
#[must_use]
pub fn evaluate(submitted: &str, target: &str) -> Guess {
    let guess_chars: Vec<char> = submitted.chars().collect();
    let target_chars: Vec<char> = target.chars().collect();

    let mut remaining: HashMap<char, usize> = HashMap::new();
    for &c in &target_chars {
        *remaining.entry(c).or_insert(0) += 1;
    }

    // First pass: exact positions
    let mut statuses = vec![LetterStatus::Absent; guess_chars.len()];
    for (i, &g) in guess_chars.iter().enumerate() {
        if target_chars.get(i) == Some(&g) {
            statuses[i] = LetterStatus::Correct;
            if let Some(count) = remaining.get_mut(&g) {
                *count -= 1;
            }
        }
    }

    // Second pass: wrong positions, limited by what is left
    for (i, &g) in guess_chars.iter().enumerate() {
        if statuses[i] == LetterStatus::Correct {
            continue;
        }
        if let Some(count) = remaining.get_mut(&g)
            && *count > 0
        {
            *count -= 1;
            statuses[i] = LetterStatus::Present;
        }
    }

    Guess {
        letters: guess_chars
            .into_iter()
            .zip(statuses)
            .map(|(c, s)| build_letter(c, s))
            .collect(),
    }
}
