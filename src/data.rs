use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// Technology vocabulary and short acronyms accepted even when the generic
/// word list does not carry them.
pub fn builtin_domain_terms() -> impl Iterator<Item = &'static str> {
    let data = include_str!("resources/domain_terms.txt");
    data.lines().map(str::trim).filter(|line| !line.is_empty())
}

/// Read a newline-delimited word list, one entry per non-blank line.
pub fn read_word_list(path: &Path) -> Result<Vec<String>> {
    let data = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(data
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect())
}
