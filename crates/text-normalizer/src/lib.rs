//! # text-normalizer
//!
//! Text normalization for speech synthesis front ends.
//!
//! This crate turns free-form English or Turkish text into a speakable form:
//! - Numbers (cardinal, ordinal, year-style readings)
//! - Decimal points
//! - Currency amounts
//! - Abbreviations
//! - ASCII transliteration, case folding, and whitespace collapse
//!
//! The numeric work is an ordered [`PatternTable`] of [`Rule`]s per locale.
//! Named cleaner pipelines chain it with the plain text stages.
//!
//! # Example
//!
//! ```
//! use text_normalizer::Cleaner;
//! use norm_core::TextNormalizer;
//!
//! let cleaner = Cleaner::from_names("english_cleaners").unwrap();
//! assert_eq!(cleaner.normalize("It cost $1.50"), "it cost one dollar, fifty cents");
//! ```

pub mod abbreviations;
pub mod amount;
pub mod cleaners;
pub mod locale;
pub mod num2words;
mod rules;

pub use abbreviations::AbbreviationTable;
pub use amount::{Amount, Currency, CurrencyUnit, UnitName};
pub use cleaners::{
    Cleaner, Stage, basic_cleaners, english_cleaners, transliteration_cleaners, turkish_cleaners,
};
pub use locale::{CurrencySymbol, English, LocaleStrategy, Rendering, Turkish, strategy_for};
pub use rules::{
    CommaRule, CurrencyRule, DecimalRule, NumberRule, OrdinalRule, PatternTable, Rule,
    normalize_numbers, pattern_table,
};
