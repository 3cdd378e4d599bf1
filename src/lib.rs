pub mod config;
pub mod data;
pub mod error;
pub mod lexicon;
pub mod pipeline;
pub mod screen;
pub mod stages;
pub mod token;

#[cfg(test)]
mod test_utils;

pub use config::NormalizerConfig;
pub use error::{Error, GuessError, Result};
pub use lexicon::{Dictionary, DomainTerms, Lexicon};
pub use pipeline::Normalizer;
pub use screen::{fold_accents, same_word};
pub use token::{Canonical, Rewrite, Stage};
