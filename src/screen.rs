use std::borrow::Cow;

use regex::Regex;
use tracing::debug;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use crate::error::{GuessError, Result};
use crate::lexicon::normalize;

/// Shape checks a guess must pass before it is looked up: one word, letters
/// only, with hyphens allowed between letters for clitic forms.
#[derive(Debug, Clone)]
pub struct GuessScreen {
    word: Regex,
}

impl GuessScreen {
    pub fn new() -> Result<Self> {
        Ok(Self {
            word: Regex::new(r"^\p{L}+(?:-\p{L}+)*$")?,
        })
    }

    /// Returns the normalized guess when its shape is acceptable.
    pub fn check<'a>(&self, raw: &'a str) -> std::result::Result<Cow<'a, str>, GuessError> {
        let word = normalize(raw);
        let rejection = if word.is_empty() {
            GuessError::Empty
        } else if word.chars().any(char::is_whitespace) {
            GuessError::MultipleWords
        } else if !self.word.is_match(&word) {
            GuessError::InvalidCharacters
        } else {
            return Ok(word);
        };
        debug!(guess = raw, %rejection, "guess rejected");
        Err(rejection)
    }
}

/// Lowercase a word and drop its diacritics: `Programação` becomes `programacao`.
pub fn fold_accents(word: &str) -> String {
    word.trim()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Whether two words are the same once case and accents are ignored.
pub fn same_word(a: &str, b: &str) -> bool {
    fold_accents(a) == fold_accents(b)
}
