//! Normalize command implementation.

use anyhow::{Context, Result};
use norm_core::{CleanerConfig, TextNormalizer};
use std::io::{BufRead, Write};
use text_normalizer::Cleaner;
use tracing::debug;

/// Where the text to normalize comes from.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Source<'a> {
    Literal(&'a str),
    File(&'a str),
    Stdin,
}

impl<'a> Source<'a> {
    pub(crate) fn parse(input: &'a str) -> Self {
        if input == "-" {
            Source::Stdin
        } else if let Some(path) = input.strip_prefix('@') {
            Source::File(path)
        } else {
            Source::Literal(input)
        }
    }
}

/// Resolve the cleaner: explicit names win over the config file.
fn resolve_cleaner(cleaners: Option<&str>, config: &CleanerConfig) -> Result<Cleaner> {
    let cleaner = match cleaners {
        Some(names) => Cleaner::from_names(names),
        None => Cleaner::from_config(config),
    }
    .context("failed to resolve cleaners")?;

    debug!(stages = ?cleaner.stage_names(), "cleaner ready");
    Ok(cleaner)
}

/// Read the input named by `input`, transform it, and print the result.
pub(crate) fn transform_input(input: &str, transform: impl Fn(&str) -> String) -> Result<()> {
    match Source::parse(input) {
        Source::Literal(text) => println!("{}", transform(text)),
        Source::File(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {path}"))?;
            println!("{}", transform(&text));
        }
        Source::Stdin => {
            let stdin = std::io::stdin();
            let mut stdout = std::io::stdout().lock();
            for line in stdin.lock().lines() {
                let line = line.context("failed to read stdin")?;
                writeln!(stdout, "{}", transform(&line))?;
            }
        }
    }

    Ok(())
}

/// Run the normalize command.
pub fn run(input: &str, cleaners: Option<&str>, config: &CleanerConfig) -> Result<()> {
    let cleaner = resolve_cleaner(cleaners, config)?;
    transform_input(input, |text| cleaner.normalize(text))
}
