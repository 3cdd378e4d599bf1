use std::path::PathBuf;

use raiz_rs::{Normalizer, NormalizerConfig};
use tracing_subscriber::EnvFilter;

fn main() -> raiz_rs::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // cargo run --example canonicalize_words -- palavras.txt gatinhas corações amá-lo
    let mut args = std::env::args().skip(1);
    let mut config = NormalizerConfig::from_env();
    if let Some(path) = args.next() {
        config.dictionary_path = Some(PathBuf::from(path));
    }
    let normalizer = Normalizer::from_config(&config)?;

    println!("=== Canonical forms ===");
    for word in args {
        match normalizer.canonicalize_traced(&word, false) {
            Some(canonical) => {
                let steps: Vec<String> = canonical
                    .rewrites
                    .iter()
                    .map(|r| format!("{}: {} -> {}", r.stage, r.from, r.to))
                    .collect();
                println!("{word}: {} [{}]", canonical.output, steps.join(", "));
            }
            None => println!("{word}: unknown"),
        }
    }
    Ok(())
}
