//! The five reduction stages and the rule table they are written in.
//!
//! Every stage is a fixed, ordered list of suffix rules. A rule fires on words
//! ending in one of its suffixes, cuts that suffix off and proposes candidates
//! built from the remaining stem. The first candidate the [`Lexicon`] knows is
//! the stage's answer; when none is known the word passes through unchanged.

use tracing::trace;

use crate::lexicon::Lexicon;
use crate::token::Stage;

pub mod degree;
pub mod derivation;
pub mod gender;
pub mod plural;
pub mod verb;

pub use degree::Degree;
pub use derivation::Derivation;
pub use gender::Gender;
pub use plural::Plural;
pub use verb::Verb;

pub trait Reducer: Send + Sync {
    fn stage(&self) -> Stage;

    /// Reduce an already normalized word. `None` means no rule produced a
    /// known candidate and the word should pass through unchanged.
    fn reduce(&self, word: &str, lexicon: &Lexicon) -> Option<String>;
}

/// The stages in the order the pipeline runs them.
pub const PIPELINE: [&dyn Reducer; 5] = [&Plural, &Gender, &Degree, &Verb, &Derivation];

pub fn reducer(stage: Stage) -> &'static dyn Reducer {
    match stage {
        Stage::Plural => &Plural,
        Stage::Gender => &Gender,
        Stage::Degree => &Degree,
        Stage::Verb => &Verb,
        Stage::Derivation => &Derivation,
    }
}

/// How a rule turns a stem into candidates.
#[derive(Clone, Copy)]
pub(crate) enum Candidates {
    /// The stem with each ending appended, in order. `""` is the bare stem.
    Endings(&'static [&'static str]),
    /// Rule-specific rewrites of the stem, in order.
    With(fn(&str) -> Vec<String>),
}

#[derive(Clone, Copy)]
pub(crate) struct SuffixRule {
    suffixes: &'static [&'static str],
    candidates: Candidates,
}

impl SuffixRule {
    pub(crate) const fn endings(
        suffixes: &'static [&'static str],
        endings: &'static [&'static str],
    ) -> Self {
        Self {
            suffixes,
            candidates: Candidates::Endings(endings),
        }
    }

    pub(crate) const fn with(
        suffixes: &'static [&'static str],
        candidates: fn(&str) -> Vec<String>,
    ) -> Self {
        Self {
            suffixes,
            candidates: Candidates::With(candidates),
        }
    }

    /// The stem left after cutting the first listed suffix the word ends in.
    pub(crate) fn stem<'w>(&self, word: &'w str) -> Option<&'w str> {
        self.suffixes.iter().find_map(|s| word.strip_suffix(s))
    }

    pub(crate) fn apply(&self, word: &str, lexicon: &Lexicon) -> Option<String> {
        let stem = self.stem(word)?;
        match self.candidates {
            Candidates::Endings(endings) => {
                first_known(lexicon, endings.iter().map(|e| format!("{stem}{e}")))
            }
            Candidates::With(rewrite) => first_known(lexicon, rewrite(stem)),
        }
    }
}

/// Try each rule in order, returning the first known candidate.
pub(crate) fn apply_rules(rules: &[SuffixRule], word: &str, lexicon: &Lexicon) -> Option<String> {
    rules.iter().find_map(|rule| rule.apply(word, lexicon))
}

pub(crate) fn first_known<I>(lexicon: &Lexicon, candidates: I) -> Option<String>
where
    I: IntoIterator<Item = String>,
{
    candidates.into_iter().find_map(|candidate| {
        let known = lexicon.exists(&candidate).map(str::to_owned);
        if known.is_none() {
            trace!(%candidate, "candidate rejected");
        }
        known
    })
}

/// Split off the last character of a word.
pub(crate) fn split_last(word: &str) -> Option<(&str, char)> {
    let last = word.chars().next_back()?;
    Some((&word[..word.len() - last.len_utf8()], last))
}

pub(crate) fn char_len(word: &str) -> usize {
    word.chars().count()
}

/// The root with its final a/e/o carrying an acute, then a circumflex accent,
/// then the bare root itself.
pub(crate) fn accented_root(root: &str) -> Vec<String> {
    let mut candidates = Vec::with_capacity(3);
    if let Some((head, last)) = split_last(root) {
        let accents = match last {
            'a' => Some(('á', 'â')),
            'e' => Some(('é', 'ê')),
            'o' => Some(('ó', 'ô')),
            _ => None,
        };
        if let Some((acute, circumflex)) = accents {
            candidates.push(format!("{head}{acute}"));
            candidates.push(format!("{head}{circumflex}"));
        }
    }
    candidates.push(root.to_string());
    candidates
}
