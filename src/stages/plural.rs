use super::{Reducer, SuffixRule, apply_rules};
use crate::lexicon::Lexicon;
use crate::token::Stage;

/// Plural to singular, most specific ending first.
const RULES: &[SuffixRule] = &[
    // nuvens -> nuvem
    SuffixRule::endings(&["ns"], &["m"]),
    // corações, pães, mãos -> -ão
    SuffixRule::endings(&["ões"], &["ão"]),
    SuffixRule::endings(&["ães"], &["ão"]),
    SuffixRule::endings(&["ãos"], &["ão"]),
    // animais, papéis, anzóis, barris
    SuffixRule::endings(&["ais"], &["al"]),
    SuffixRule::endings(&["éis"], &["el"]),
    SuffixRule::endings(&["óis"], &["ol"]),
    SuffixRule::endings(&["is"], &["il"]),
    // flores, luzes
    SuffixRule::endings(&["es"], &[""]),
    SuffixRule::endings(&["s"], &[""]),
];

pub struct Plural;

impl Reducer for Plural {
    fn stage(&self) -> Stage {
        Stage::Plural
    }

    fn reduce(&self, word: &str, lexicon: &Lexicon) -> Option<String> {
        if !word.ends_with('s') {
            return None;
        }
        apply_rules(RULES, word, lexicon)
    }
}
