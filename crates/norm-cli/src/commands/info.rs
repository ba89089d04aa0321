//! Info command implementation.

/// Run the info command.
pub fn run() {
    println!("Speakable Text Normalizer");
    println!("=========================");
    println!();
    println!("Version: {}", env!("CARGO_PKG_VERSION"));
    println!("Rust version: {}", env!("CARGO_PKG_RUST_VERSION"));
    println!();
    println!("Locales: en, tr");
    println!();
    println!("Crates:");
    println!("  norm-core: Core types, traits, errors, and config");
    println!("  text-normalizer: Numeric cascade and cleaner pipelines (EN/TR)");
    println!("  norm-cli: This CLI tool");
}
