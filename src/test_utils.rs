use crate::lexicon::{Dictionary, DomainTerms, Lexicon};

pub const FIXTURE_WORDS: &[&str] = &[
    // plural
    "nuvem", "nuvens", "jardim", "jardins", "coração", "corações", "pão", "pães", "mão", "mãos",
    "animal", "animais", "papel", "papéis", "anzol", "anzóis", "barril", "barris", "flor",
    "flores", "luz", "luzes", "colher", "colheres", "casa", "casas", "livro", "livros", "ônibus",
    "lápis", "tênis", "vírus", "computador",
    // gender
    "português", "portuguesa", "camponês", "camponesa", "valentão", "valentona", "solteirão",
    "solteirona", "conde", "condessa", "irmão", "irmã", "menino", "menina", "gato", "gata",
    "médico", "médica", "professor", "professora", "cantor", "cantora", "mesa", "cadeira",
    "pessoa", "abelha", "bola", "bolo",
    // degree
    "pé", "café", "coelho", "pastor", "mulher", "vizinho", "rainha", "cão", "gatinha", "gatinhas",
    "casinha",
    // verb
    "mandar", "amar", "vender", "cantar", "correr", "sorrir", "parar", "comer", "partir", "falar",
    "beber", "abrir", "sonhar", "olhar", "mover", "sair", "bando", "lindo", "dia", "museu",
    "cantando", "falaram", "amava", "amavam", "corria",
    // derivation
    "feliz", "felicidade", "felizmente", "criar", "criação", "navegar", "navegação", "casar",
    "casamento", "pedra", "pedreiro", "limão", "limoeiro", "jornal", "jornalista", "dentista",
    "belo", "beleza", "bom", "bondade", "leal", "lealdade", "alto", "altura", "fama", "famoso",
    "centro", "central", "amável", "corar",
];

pub const FIXTURE_DOMAIN_TERMS: &[&str] = &["api", "cookie", "python", "kernel"];

pub fn fixture_lexicon() -> Lexicon {
    Lexicon::new(
        Dictionary::from_words(FIXTURE_WORDS),
        DomainTerms::from_terms(FIXTURE_DOMAIN_TERMS),
    )
}
