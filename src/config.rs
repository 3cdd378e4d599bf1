use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub const DICTIONARY_ENV: &str = "RAIZ_DICTIONARY";
pub const DOMAIN_TERMS_ENV: &str = "RAIZ_DOMAIN_TERMS";
pub const REQUIRE_KNOWN_ENV: &str = "RAIZ_REQUIRE_KNOWN";

/// Where the word lists come from and how guesses are gated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizerConfig {
    /// Newline-delimited dictionary. A missing file degrades to an empty
    /// dictionary.
    pub dictionary_path: Option<PathBuf>,
    /// Extra domain terms, merged with the built-in list when that is enabled.
    pub domain_terms_path: Option<PathBuf>,
    pub builtin_domain_terms: bool,
    /// Reject guesses the dictionary does not know before reducing them.
    pub require_known: bool,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            dictionary_path: None,
            domain_terms_path: None,
            builtin_domain_terms: true,
            require_known: true,
        }
    }
}

impl NormalizerConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Defaults overridden by `RAIZ_DICTIONARY`, `RAIZ_DOMAIN_TERMS` and
    /// `RAIZ_REQUIRE_KNOWN`.
    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(path) = var(DICTIONARY_ENV) {
            config.dictionary_path = Some(PathBuf::from(path));
        }
        if let Some(path) = var(DOMAIN_TERMS_ENV) {
            config.domain_terms_path = Some(PathBuf::from(path));
        }
        if let Some(flag) = var(REQUIRE_KNOWN_ENV) {
            config.require_known = !matches!(flag.trim(), "0" | "false" | "no");
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults_fill_missing_fields() {
        let config = NormalizerConfig::from_json(r#"{"dictionary_path": "base/com_acento.txt"}"#)
            .unwrap();
        assert_eq!(config.dictionary_path, Some(PathBuf::from("base/com_acento.txt")));
        assert!(config.builtin_domain_terms);
        assert!(config.require_known);
    }

    #[test]
    fn test_invalid_json() {
        let err = NormalizerConfig::from_json("{not json").unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn test_from_vars() {
        let vars: HashMap<&str, &str> = [
            (DICTIONARY_ENV, "/srv/palavras.txt"),
            (REQUIRE_KNOWN_ENV, "false"),
        ]
        .into_iter()
        .collect();
        let config = NormalizerConfig::from_vars(|k| vars.get(k).map(|v| v.to_string()));
        assert_eq!(config.dictionary_path, Some(PathBuf::from("/srv/palavras.txt")));
        assert_eq!(config.domain_terms_path, None);
        assert!(!config.require_known);
    }

    #[test]
    fn test_from_file() {
        let file = tempfile::NamedTempFile::new().unwrap();
        fs::write(file.path(), r#"{"builtin_domain_terms": false}"#).unwrap();
        let config = NormalizerConfig::from_file(file.path()).unwrap();
        assert!(!config.builtin_domain_terms);
    }
}
