use super::{Reducer, SuffixRule, apply_rules, char_len, first_known, split_last};
use crate::lexicon::Lexicon;
use crate::token::Stage;

/// Feminine nouns that have no masculine counterpart, or whose `-o` form is a
/// different word altogether.
pub const PROTECTED: &[&str] = &[
    "casa",   // caso
    "bola",   // bolo
    "mala",   // malo
    "fala",   // falo
    "bota",   // boto
    "cola",   // colo
    "mola",   // molo
    "sola",   // solo
    "lata",   // lato
    "mata",   // mato
    "vela",   // velo
    "pipa",   // pipo
    "rosa",   // roso
    "palha",  // palho
    "folha",  // folho
    "caixa",  // caixo
    "cabra",  // cabro
    "fera",   // fero
    "brasa",  // braso
    "tropa",  // tropo
    "prata",  // prato
    "cama",   // camo
    "lama",   // lamo
    "grama",  // gramo
    "dama",   // damo
    "baleia", // baleio
    "aranha", // aranho
    "faca",   // faco
    "mesa",   // meso
];

const RULES: &[SuffixRule] = &[
    // portuguesa -> português
    SuffixRule::endings(&["esa"], &["ês"]),
    // condessa -> conde
    SuffixRule::endings(&["essa"], &["e"]),
    // valentona -> valentão
    SuffixRule::endings(&["ona"], &["ão"]),
    // irmã -> irmão
    SuffixRule::endings(&["ã"], &["ão"]),
    // menina -> menino
    SuffixRule::endings(&["a"], &["o"]),
];

pub struct Gender;

impl Reducer for Gender {
    fn stage(&self) -> Stage {
        Stage::Gender
    }

    fn reduce(&self, word: &str, lexicon: &Lexicon) -> Option<String> {
        if !(word.ends_with('a') || word.ends_with('ã')) || PROTECTED.contains(&word) {
            return None;
        }
        apply_rules(RULES, word, lexicon).or_else(|| {
            // professora -> professor
            let (stem, _) = split_last(word)?;
            if char_len(stem) > 2 {
                first_known(lexicon, [stem.to_string()])
            } else {
                None
            }
        })
    }
}
