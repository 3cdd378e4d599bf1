use raiz_rs::{Normalizer, NormalizerConfig, same_word};
use tracing_subscriber::EnvFilter;

fn main() -> raiz_rs::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // RAIZ_DICTIONARY=palavras.txt cargo run --example screen_guess -- programação Programacoes
    let mut args = std::env::args().skip(1);
    let secret = args.next().unwrap_or_else(|| "programação".to_string());
    let normalizer = Normalizer::from_config(&NormalizerConfig::from_env())?;

    for guess in args {
        match normalizer.screen(&guess) {
            Ok(word) => {
                let won = same_word(&word, &secret);
                println!("{guess} -> {word} (match: {won})");
            }
            Err(e) => {
                let body = serde_json::to_string(&e)?;
                println!("{guess} rejected: {e} {body}");
            }
        }
    }
    Ok(())
}
