use std::fmt;

use serde::{Deserialize, Serialize};

/// One reduction stage, listed in pipeline order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    Plural,
    Gender,
    Degree,
    Verb,
    Derivation,
}

impl Stage {
    pub const ALL: [Stage; 5] = [
        Stage::Plural,
        Stage::Gender,
        Stage::Degree,
        Stage::Verb,
        Stage::Derivation,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Plural => "plural",
            Stage::Gender => "gender",
            Stage::Degree => "degree",
            Stage::Verb => "verb",
            Stage::Derivation => "derivation",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A stage that changed the token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rewrite {
    pub stage: Stage,
    pub from: String,
    pub to: String,
}

/// Result of running a token through the whole pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Canonical {
    pub input: String,
    pub output: String,
    pub rewrites: Vec<Rewrite>,
}

impl Canonical {
    pub fn new(input: String) -> Self {
        Self {
            output: input.clone(),
            input,
            rewrites: Vec::new(),
        }
    }

    pub fn push(&mut self, stage: Stage, to: String) {
        let from = std::mem::replace(&mut self.output, to.clone());
        self.rewrites.push(Rewrite { stage, from, to });
    }

    pub fn is_unchanged(&self) -> bool {
        self.rewrites.is_empty()
    }

    /// The rewrite a given stage made, if any.
    pub fn rewrite(&self, stage: Stage) -> Option<&Rewrite> {
        self.rewrites.iter().find(|r| r.stage == stage)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_threads_output() {
        let mut canonical = Canonical::new("gatinhas".to_string());
        canonical.push(Stage::Plural, "gatinha".to_string());
        canonical.push(Stage::Degree, "gato".to_string());
        assert_eq!(canonical.output, "gato");
        assert_eq!(canonical.rewrites[1].from, "gatinha");
        assert_eq!(canonical.rewrite(Stage::Plural).map(|r| r.to.as_str()), Some("gatinha"));
        assert!(canonical.rewrite(Stage::Verb).is_none());
    }

    #[test]
    fn test_stage_serializes_lowercase() {
        let json = serde_json::to_string(&Stage::Derivation).unwrap();
        assert_eq!(json, "\"derivation\"");
        assert_eq!(Stage::ALL.map(|s| s.to_string())[2], "degree");
    }
}
