use tracing::{debug, warn};

use crate::config::NormalizerConfig;
use crate::error::{GuessError, Result};
use crate::lexicon::{Dictionary, DomainTerms, Lexicon, normalize};
use crate::screen::GuessScreen;
use crate::stages::{PIPELINE, reducer};
use crate::token::{Canonical, Stage};

/// Reduces guesses to their canonical dictionary form.
///
/// Holds the only copy of the word lists; it is `Send + Sync` and meant to be
/// shared by reference across request handlers.
pub struct Normalizer {
    lexicon: Lexicon,
    screen: GuessScreen,
    require_known: bool,
}

impl Normalizer {
    pub fn new(lexicon: Lexicon) -> Result<Self> {
        Ok(Self {
            lexicon,
            screen: GuessScreen::new()?,
            require_known: true,
        })
    }

    pub fn from_config(config: &NormalizerConfig) -> Result<Self> {
        let dictionary = match &config.dictionary_path {
            Some(path) => Dictionary::load_or_empty(path),
            None => {
                warn!("no dictionary configured, every word will be reported unknown");
                Dictionary::default()
            }
        };

        let mut domain_terms = if config.builtin_domain_terms {
            DomainTerms::builtin()
        } else {
            DomainTerms::default()
        };
        if let Some(path) = &config.domain_terms_path {
            match DomainTerms::load(path) {
                Ok(extra) => domain_terms.extend(extra),
                Err(e) => warn!(error = %e, "domain terms unavailable"),
            }
        }

        let mut normalizer = Self::new(Lexicon::new(dictionary, domain_terms))?;
        normalizer.require_known = config.require_known;
        Ok(normalizer)
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn exists(&self, word: &str) -> Option<&str> {
        self.lexicon.exists(word)
    }

    /// Run a word through every stage. With `require_known`, a word the
    /// lexicon does not know is rejected with `None` before any reduction.
    pub fn canonicalize(&self, word: &str, require_known: bool) -> Option<String> {
        self.canonicalize_traced(word, require_known)
            .map(|canonical| canonical.output)
    }

    /// Like [`Normalizer::canonicalize`], keeping the rewrite each stage made.
    pub fn canonicalize_traced(&self, word: &str, require_known: bool) -> Option<Canonical> {
        let word = normalize(word);
        if require_known && !self.lexicon.is_known(&word) {
            debug!(word = %word, "unknown word");
            return None;
        }

        let mut canonical = Canonical::new(word.into_owned());
        for stage in PIPELINE {
            let Some(next) = stage.reduce(&canonical.output, &self.lexicon) else {
                continue;
            };
            if next != canonical.output {
                debug!(stage = %stage.stage(), from = %canonical.output, to = %next, "rewrite");
                canonical.push(stage.stage(), next);
            }
        }
        Some(canonical)
    }

    /// Apply a single stage, returning the normalized word when it does not fire.
    pub fn reduce(&self, stage: Stage, word: &str) -> String {
        let word = normalize(word);
        reducer(stage)
            .reduce(&word, &self.lexicon)
            .unwrap_or_else(|| word.into_owned())
    }

    /// Validate a raw guess and reduce it, the way a request handler would
    /// before scoring it.
    pub fn screen(&self, raw: &str) -> std::result::Result<String, GuessError> {
        let word = self.screen.check(raw)?;
        self.canonicalize(&word, self.require_known).ok_or_else(|| {
            debug!(guess = %word, "guess rejected");
            GuessError::UnknownWord(word.into_owned())
        })
    }
}
