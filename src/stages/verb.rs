use super::{Reducer, SuffixRule, apply_rules, first_known, split_last};
use crate::lexicon::Lexicon;
use crate::token::Stage;

/// Conjugated endings back to the infinitive. Irregular verbs are never guessed.
const RULES: &[SuffixRule] = &[
    // gerund
    SuffixRule::endings(&["ando"], &["ar"]),
    SuffixRule::endings(&["endo"], &["er"]),
    SuffixRule::endings(&["indo"], &["ir"]),
    // participle
    SuffixRule::endings(&["ado"], &["ar"]),
    SuffixRule::endings(&["ido"], &["er", "ir"]),
    // preterite, third person plural
    SuffixRule::endings(&["aram"], &["ar"]),
    SuffixRule::endings(&["eram"], &["er"]),
    SuffixRule::endings(&["iram"], &["ir"]),
    // imperfect
    SuffixRule::endings(&["ava"], &["ar"]),
    SuffixRule::endings(&["ia"], &["er", "ir"]),
    SuffixRule::endings(&["avam"], &["ar"]),
    SuffixRule::endings(&["iam"], &["er", "ir"]),
    // preterite, third person singular
    SuffixRule::endings(&["ou"], &["ar"]),
    SuffixRule::endings(&["eu"], &["er"]),
    SuffixRule::endings(&["iu"], &["ir"]),
    // preterite, first person singular
    SuffixRule::endings(&["ei"], &["ar"]),
    // future
    SuffixRule::endings(&["arão"], &["ar"]),
    SuffixRule::endings(&["ão"], &["r"]),
];

pub struct Verb;

impl Reducer for Verb {
    fn stage(&self) -> Stage {
        Stage::Verb
    }

    fn reduce(&self, word: &str, lexicon: &Lexicon) -> Option<String> {
        clitic_host(word, lexicon).or_else(|| apply_rules(RULES, word, lexicon))
    }
}

/// Recover the verb a clitic pronoun is attached to: mandar-lhe, amá-lo,
/// vendê-lo, falar-lhe-ei.
fn clitic_host(word: &str, lexicon: &Lexicon) -> Option<String> {
    let (host, _) = word.split_once('-')?;
    let (head, last) = split_last(host)?;
    let infinitive = match last {
        'á' => Some("ar"),
        'é' | 'ê' => Some("er"),
        'í' => Some("ir"),
        'ô' => Some("or"),
        _ => None,
    };
    let restored = match infinitive {
        Some(ending) => format!("{head}{ending}"),
        None => format!("{host}r"),
    };
    first_known(lexicon, [host.to_string(), restored])
}
