use std::collections::BTreeMap;
use std::fmt;

/// Per-letter feedback for a guess.
///
/// Variants are ordered by strength (`Absent < Present < Correct`) so the
/// best status a letter has received can be found with `max`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LetterStatus {
    /// Gray - letter not in the target, or all its occurrences already used
    Absent,
    /// Yellow - letter in the target at a different position
    Present,
    /// Green - letter at the same position in the target
    Correct,
}

impl LetterStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Correct => "CORRECT",
            Self::Present => "PRESENT",
            Self::Absent => "ABSENT",
        }
    }
}

impl fmt::Display for LetterStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Letter {
    pub letter: char,
    pub status: LetterStatus,
}

#[must_use]
pub const fn build_letter(letter: char, status: LetterStatus) -> Letter {
    Letter { letter, status }
}

/// Strongest status seen so far for each guessed letter.
pub type LetterHints = BTreeMap<char, LetterStatus>;

/// Record `letter` in `hints`, upgrading but never downgrading its status.
pub fn merge_hint(hints: &mut LetterHints, letter: Letter) {
    hints
        .entry(letter.letter)
        .and_modify(|status| *status = (*status).max(letter.status))
        .or_insert(letter.status);
}
