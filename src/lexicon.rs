use std::borrow::Cow;
use std::collections::HashSet;
use std::path::Path;

use tracing::{info, warn};
use unicode_normalization::{UnicodeNormalization, is_nfc};

use crate::data;
use crate::error::Result;

/// Trim, compose (NFC) and lowercase a word, borrowing when it is already in
/// that shape.
pub fn normalize(word: &str) -> Cow<'_, str> {
    let trimmed = word.trim();
    let composed = is_nfc(trimmed);
    if composed && !trimmed.chars().any(char::is_uppercase) {
        return Cow::Borrowed(trimmed);
    }
    if composed {
        Cow::Owned(trimmed.to_lowercase())
    } else {
        Cow::Owned(trimmed.nfc().collect::<String>().to_lowercase())
    }
}

/// Sorted, deduplicated list of canonical lowercase words.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: Vec<String>,
}

impl Dictionary {
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut words: Vec<String> = words
            .into_iter()
            .map(|w| normalize(w.as_ref()).into_owned())
            .filter(|w| !w.is_empty())
            .collect();
        // `str` ordering is byte order, the same order `get` searches with.
        words.sort_unstable();
        words.dedup();
        Self { words }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let dictionary = Self::from_words(data::read_word_list(path)?);
        info!(path = %path.display(), words = dictionary.len(), "loaded dictionary");
        Ok(dictionary)
    }

    /// Like [`Dictionary::load`], but a missing or unreadable file leaves the
    /// dictionary empty so every lookup reports unknown.
    pub fn load_or_empty(path: &Path) -> Self {
        match Self::load(path) {
            Ok(dictionary) => dictionary,
            Err(e) => {
                warn!(error = %e, "dictionary unavailable, every word will be reported unknown");
                Self::default()
            }
        }
    }

    pub fn get(&self, word: &str) -> Option<&str> {
        self.words
            .binary_search_by(|probe| probe.as_str().cmp(word))
            .ok()
            .map(|idx| self.words[idx].as_str())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

/// Domain vocabulary that counts as known even when the dictionary lacks it.
#[derive(Debug, Clone, Default)]
pub struct DomainTerms {
    terms: HashSet<String>,
}

impl DomainTerms {
    pub fn from_terms<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let terms = terms
            .into_iter()
            .map(|t| normalize(t.as_ref()).into_owned())
            .filter(|t| !t.is_empty())
            .collect();
        Self { terms }
    }

    pub fn builtin() -> Self {
        Self::from_terms(data::builtin_domain_terms())
    }

    pub fn load(path: &Path) -> Result<Self> {
        let terms = Self::from_terms(data::read_word_list(path)?);
        info!(path = %path.display(), terms = terms.len(), "loaded domain terms");
        Ok(terms)
    }

    /// Merge another term set into this one.
    pub fn extend(&mut self, other: DomainTerms) {
        self.terms.extend(other.terms);
    }

    pub fn get(&self, term: &str) -> Option<&str> {
        self.terms.get(term).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

/// The membership oracle every reduction stage validates its candidates with.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    dictionary: Dictionary,
    domain_terms: DomainTerms,
}

impl Lexicon {
    pub fn new(dictionary: Dictionary, domain_terms: DomainTerms) -> Self {
        Self {
            dictionary,
            domain_terms,
        }
    }

    /// Look a word up, returning the stored entry it matched.
    ///
    /// The word is trimmed and lowercased first. Domain terms are consulted
    /// before the dictionary. An empty dictionary knows nothing, domain terms
    /// included.
    pub fn exists(&self, word: &str) -> Option<&str> {
        if self.dictionary.is_empty() {
            return None;
        }
        let word = normalize(word);
        if word.is_empty() {
            return None;
        }
        self.domain_terms
            .get(&word)
            .or_else(|| self.dictionary.get(&word))
    }

    pub fn is_known(&self, word: &str) -> bool {
        self.exists(word).is_some()
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    pub fn domain_terms(&self) -> &DomainTerms {
        &self.domain_terms
    }
}
