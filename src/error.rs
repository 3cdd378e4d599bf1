use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid configuration: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid pattern: {0}")]
    Pattern(#[from] regex::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Why a submitted guess was rejected before scoring.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", content = "word", rename_all = "snake_case")]
pub enum GuessError {
    #[error("no word was given")]
    Empty,

    #[error("only single words are accepted")]
    MultipleWords,

    #[error("use letters only, no digits or symbols")]
    InvalidCharacters,

    #[error("unknown word: {0}")]
    UnknownWord(String),
}
