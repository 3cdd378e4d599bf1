use super::{Reducer, SuffixRule, accented_root, apply_rules, char_len};
use crate::lexicon::Lexicon;
use crate::token::Stage;

const MIN_LEN: usize = 4;

const RULES: &[SuffixRule] = &[
    // pezinho -> pé, florzinha -> flor
    SuffixRule::with(&["zinho", "zinha"], accented_root),
    // gatinho -> gato, casinha -> casa, pastorinho -> pastor
    SuffixRule::endings(&["inho", "inha"], &["o", "a", "e", ""]),
    // pezão -> pé, cafezão -> café
    SuffixRule::with(&["zão", "zona"], accented_root),
    // gatão -> gato, mulherão -> mulher
    SuffixRule::endings(&["ão"], &["o", ""]),
    // gatona -> gata
    SuffixRule::endings(&["ona"], &["a", ""]),
    // livrito -> livro
    SuffixRule::endings(&["ito", "ita"], &["o", "a"]),
];

/// Strips diminutive and augmentative suffixes.
pub struct Degree;

impl Reducer for Degree {
    fn stage(&self) -> Stage {
        Stage::Degree
    }

    fn reduce(&self, word: &str, lexicon: &Lexicon) -> Option<String> {
        if char_len(word) < MIN_LEN {
            return None;
        }
        apply_rules(RULES, word, lexicon)
    }
}
