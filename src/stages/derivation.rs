use super::{Reducer, SuffixRule, apply_rules, char_len, first_known, split_last};
use crate::lexicon::Lexicon;
use crate::token::Stage;

const MIN_LEN: usize = 4;

/// Nouns ending in -ão that only look derived. Cutting the suffix would land
/// on an unrelated word.
pub const PROTECTED: &[&str] = &[
    "coração",  // corar
    "nação",    // nar
    "ração",    // rar
    "fração",   // frar
    "canção",   // cancar
    "feijão",   // feijo
    "violão",   // viola
    "avião",    // avio
    "verão",    // vero
    "melão",    // melo
    "leão",     // leo
    "camaleão", // camaleo
    "furacão",  // furar
    "tubarão",  // tubaro
];

const RULES: &[SuffixRule] = &[
    // casamento -> casar, monitoramento -> monitor
    SuffixRule::endings(&["mento"], &["r", ""]),
    // felizmente -> feliz, rapidamente -> rapido
    SuffixRule::with(&["mente"], adverb_base),
    // pedreiro -> pedra, limoeiro -> limão
    SuffixRule::with(&["eiro", "eira"], tree_or_agent_base),
    // jornalista -> jornal
    SuffixRule::endings(&["ista"], &["", "a", "o"]),
    // beleza -> belo
    SuffixRule::endings(&["eza", "ez"], &["o", ""]),
    // felicidade -> feliz, bondade -> bom, lealdade -> leal
    SuffixRule::with(&["dade"], quality_base),
    SuffixRule::endings(&["ismo"], &["", "o"]),
    // altura -> alto
    SuffixRule::endings(&["ura"], &["o", "e"]),
    // famoso -> fama
    SuffixRule::endings(&["oso", "osa"], &["o", "a"]),
    // central -> centro
    SuffixRule::endings(&["al"], &["o"]),
    // amável -> amar
    SuffixRule::with(&["vel"], verbal_base),
];

/// Strips nominal and adjectival derivation suffixes.
pub struct Derivation;

impl Reducer for Derivation {
    fn stage(&self) -> Stage {
        Stage::Derivation
    }

    fn reduce(&self, word: &str, lexicon: &Lexicon) -> Option<String> {
        if char_len(word) < MIN_LEN {
            return None;
        }
        if let Some(stem) = word.strip_suffix("ão") {
            return augmentative_or_action(word, stem, lexicon);
        }
        apply_rules(RULES, word, lexicon)
    }
}

/// -ão words never fall through to the other families, and never reduce to
/// the bare stem.
fn augmentative_or_action(word: &str, stem: &str, lexicon: &Lexicon) -> Option<String> {
    if PROTECTED.contains(&word) {
        return None;
    }
    let mut candidates = vec![format!("{stem}o"), format!("{stem}a")];
    // criação -> criar, navegação -> navegar
    if let Some(root) = word.strip_suffix("ção") {
        candidates.push(format!("{root}r"));
        candidates.push(format!("{root}ar"));
    }
    first_known(lexicon, candidates)
}

fn adverb_base(stem: &str) -> Vec<String> {
    let mut candidates = vec![stem.to_string()];
    if let Some(head) = stem.strip_suffix('a') {
        candidates.push(format!("{head}o"));
    }
    candidates
}

fn tree_or_agent_base(stem: &str) -> Vec<String> {
    let mut candidates = vec![format!("{stem}a"), format!("{stem}o"), format!("{stem}e")];
    if let Some(head) = stem.strip_suffix('o') {
        candidates.push(format!("{head}ão"));
    }
    candidates
}

fn quality_base(stem: &str) -> Vec<String> {
    let mut candidates = Vec::with_capacity(3);
    if let Some(head) = stem.strip_suffix("ci") {
        candidates.push(format!("{head}z"));
    }
    if let Some(head) = stem.strip_suffix('n') {
        candidates.push(format!("{head}m"));
    }
    candidates.push(stem.to_string());
    // civilidade -> civil
    if let Some(head) = stem.strip_suffix("ili") {
        candidates.push(format!("{head}il"));
    }
    candidates
}

fn verbal_base(stem: &str) -> Vec<String> {
    let Some((head, last)) = split_last(stem) else {
        return Vec::new();
    };
    let plain = match last {
        'á' | 'a' => 'a',
        'é' | 'e' => 'e',
        'í' | 'i' => 'i',
        _ => return Vec::new(),
    };
    vec![format!("{head}{plain}r"), format!("{head}{plain}er")]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::{Dictionary, DomainTerms};
    use crate::test_utils::fixture_lexicon;

    fn root(word: &str) -> String {
        Derivation
            .reduce(word, &fixture_lexicon())
            .unwrap_or_else(|| word.to_string())
    }

    #[test]
    fn test_derivation_rules() {
        let cases = [
            ("felicidade", "feliz"),
            ("bondade", "bom"),
            ("lealdade", "leal"),
            ("criação", "criar"),
            ("navegação", "navegar"),
            ("casamento", "casar"),
            ("felizmente", "feliz"),
            ("pedreiro", "pedra"),
            ("limoeiro", "limão"),
            ("jornalista", "jornal"),
            ("beleza", "belo"),
            ("altura", "alto"),
            ("famoso", "fama"),
            ("central", "centro"),
            ("amável", "amar"),
        ];
        for (word, expected) in cases {
            assert_eq!(root(word), expected, "{word}");
        }
    }

    #[test]
    fn test_unrelated_words_pass_through() {
        for word in ["coração", "dentista", "valentão", "limão", "pão", "feliz", "jornal"] {
            assert_eq!(root(word), word);
        }
    }

    #[test]
    fn test_protected_words_are_untouched() {
        let targets = [
            "corar", "nar", "rar", "frar", "cancar", "feijo", "viola", "avio", "vero", "melo",
            "leo", "camaleo", "furar", "tubaro",
        ];
        let lexicon = Lexicon::new(Dictionary::from_words(targets), DomainTerms::default());
        for word in PROTECTED {
            assert!(word.ends_with("ão") && char_len(word) >= MIN_LEN, "{word}");
            assert_eq!(Derivation.reduce(word, &lexicon), None, "{word}");
        }
        // the same shape outside the list does reduce
        assert_eq!(Derivation.reduce("coroação", &lexicon), None);
        let lexicon = Lexicon::new(Dictionary::from_words(["coroar"]), DomainTerms::default());
        assert_eq!(Derivation.reduce("coroação", &lexicon), Some("coroar".to_string()));
    }

    #[test]
    fn test_ao_candidate_order() {
        let lexicon = Lexicon::new(Dictionary::from_words(["porto", "porta"]), DomainTerms::default());
        assert_eq!(Derivation.reduce("portão", &lexicon), Some("porto".to_string()));

        let lexicon = Lexicon::new(
            Dictionary::from_words(["criaça", "criar", "criaar"]),
            DomainTerms::default(),
        );
        assert_eq!(Derivation.reduce("criação", &lexicon), Some("criaça".to_string()));

        let lexicon = Lexicon::new(Dictionary::from_words(["criar", "criaar"]), DomainTerms::default());
        assert_eq!(Derivation.reduce("criação", &lexicon), Some("criar".to_string()));
    }

    #[test]
    fn test_family_candidate_order() {
        let lexicon = Lexicon::new(
            Dictionary::from_words(["pedra", "pedro", "pedre"]),
            DomainTerms::default(),
        );
        assert_eq!(Derivation.reduce("pedreiro", &lexicon), Some("pedra".to_string()));

        let lexicon = Lexicon::new(Dictionary::from_words(["belo", "bel"]), DomainTerms::default());
        assert_eq!(Derivation.reduce("beleza", &lexicon), Some("belo".to_string()));
    }

    #[test]
    fn test_ao_never_falls_back_to_bare_stem() {
        let lexicon = Lexicon::new(Dictionary::from_words(["bal", "balão"]), DomainTerms::default());
        assert_eq!(Derivation.reduce("balão", &lexicon), None);
    }

    #[test]
    fn test_ilidade() {
        let lexicon = Lexicon::new(Dictionary::from_words(["civil"]), DomainTerms::default());
        assert_eq!(Derivation.reduce("civilidade", &lexicon), Some("civil".to_string()));
    }

    #[test]
    fn test_adverb_to_masculine() {
        let lexicon = Lexicon::new(Dictionary::from_words(["rapido"]), DomainTerms::default());
        assert_eq!(Derivation.reduce("rapidamente", &lexicon), Some("rapido".to_string()));
    }
}
