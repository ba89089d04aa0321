//! Cleaners command implementation.

use norm_core::CleanerKind;
use text_normalizer::{Stage, cleaners::stages};

/// Run the cleaners command.
pub fn run() {
    for kind in CleanerKind::ALL {
        let locale = kind
            .locale()
            .map_or_else(|| "any".to_string(), |l| l.to_string());
        println!("{} (locale: {locale})", kind.name());

        let names: Vec<_> = stages(kind).iter().map(Stage::name).collect();
        println!("  {}", names.join(" -> "));
    }
}
