//! Cleaner pipelines.
//!
//! A cleaner is a named, fixed sequence of stages. Cleaners can be chained by
//! passing a comma-delimited list of names, e.g. `"english_cleaners"` or
//! `"basic,transliteration"`.

use norm_core::{CleanerConfig, CleanerKind, Locale, NormError, NormResult, TextNormalizer};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, instrument, trace};

use crate::locale::strategy_for;
use crate::rules::pattern_table;

static WHITESPACE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

/// One text-transform step of a cleaner pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Best-effort ASCII transliteration.
    Transliterate,
    /// Unicode lowercasing.
    Lowercase,
    /// Numeric cascade for a locale.
    ExpandNumbers(Locale),
    /// Abbreviation table for a locale.
    ExpandAbbreviations(Locale),
    /// Turkish-specific letters to ASCII placeholder letters.
    TurkishLetters,
    /// Runs of whitespace to a single space.
    CollapseWhitespace,
}

impl Stage {
    /// Stage name.
    pub fn name(&self) -> &'static str {
        match self {
            Stage::Transliterate => "transliterate",
            Stage::Lowercase => "lowercase",
            Stage::ExpandNumbers(Locale::En) => "expand_numbers_en",
            Stage::ExpandNumbers(Locale::Tr) => "expand_numbers_tr",
            Stage::ExpandAbbreviations(Locale::En) => "expand_abbreviations_en",
            Stage::ExpandAbbreviations(Locale::Tr) => "expand_abbreviations_tr",
            Stage::TurkishLetters => "turkish_letters",
            Stage::CollapseWhitespace => "collapse_whitespace",
        }
    }

    /// Apply the stage to a string.
    pub fn apply(&self, input: &str) -> String {
        match self {
            Stage::Transliterate => convert_to_ascii(input),
            Stage::Lowercase => lowercase(input),
            Stage::ExpandNumbers(locale) => pattern_table(*locale).apply(input),
            Stage::ExpandAbbreviations(locale) => {
                strategy_for(*locale).abbreviations().expand(input)
            }
            Stage::TurkishLetters => turkish_letters(input),
            Stage::CollapseWhitespace => collapse_whitespace(input),
        }
    }
}

const BASIC_STAGES: &[Stage] = &[Stage::Lowercase, Stage::CollapseWhitespace];

const TRANSLITERATION_STAGES: &[Stage] = &[
    Stage::Transliterate,
    Stage::Lowercase,
    Stage::CollapseWhitespace,
];

const ENGLISH_STAGES: &[Stage] = &[
    Stage::Transliterate,
    Stage::Lowercase,
    Stage::ExpandNumbers(Locale::En),
    Stage::ExpandAbbreviations(Locale::En),
    Stage::CollapseWhitespace,
];

const TURKISH_STAGES: &[Stage] = &[
    Stage::ExpandNumbers(Locale::Tr),
    Stage::ExpandAbbreviations(Locale::Tr),
    Stage::TurkishLetters,
    Stage::Transliterate,
    Stage::Lowercase,
    Stage::CollapseWhitespace,
];

/// Stages of a named pipeline, in order.
pub fn stages(kind: CleanerKind) -> &'static [Stage] {
    match kind {
        CleanerKind::Basic => BASIC_STAGES,
        CleanerKind::Transliteration => TRANSLITERATION_STAGES,
        CleanerKind::English => ENGLISH_STAGES,
        CleanerKind::Turkish => TURKISH_STAGES,
    }
}

fn run_stages(stages: &[Stage], input: &str) -> String {
    let mut text = input.to_string();
    for stage in stages {
        trace!(stage = stage.name(), "applying stage");
        text = stage.apply(&text);
    }
    text
}

/// Lowercase the text.
pub fn lowercase(text: &str) -> String {
    text.to_lowercase()
}

/// Replace every run of whitespace with a single space. Leading and trailing
/// whitespace is collapsed, not trimmed.
pub fn collapse_whitespace(text: &str) -> String {
    WHITESPACE_RE.replace_all(text, " ").into_owned()
}

/// Best-effort ASCII rendering of any script.
pub fn convert_to_ascii(text: &str) -> String {
    unidecode::unidecode(text)
}

/// Map Turkish letters without an ASCII counterpart to placeholder letters.
pub fn turkish_letters(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            'ı' | 'I' => 'w',
            'ü' | 'Ü' => 'q',
            'ş' | 'Ş' => 'x',
            'ç' | 'Ç' => 'j',
            other => other,
        })
        .collect()
}

/// Lowercase and collapse whitespace, without transliteration.
pub fn basic_cleaners(text: &str) -> String {
    run_stages(BASIC_STAGES, text)
}

/// Transliterate to ASCII, lowercase, and collapse whitespace.
pub fn transliteration_cleaners(text: &str) -> String {
    run_stages(TRANSLITERATION_STAGES, text)
}

/// English pipeline with number and abbreviation expansion.
pub fn english_cleaners(text: &str) -> String {
    run_stages(ENGLISH_STAGES, text)
}

/// Turkish pipeline with number and abbreviation expansion and letter
/// substitution.
pub fn turkish_cleaners(text: &str) -> String {
    run_stages(TURKISH_STAGES, text)
}

/// A resolved chain of cleaner pipelines.
///
/// Immutable once built; one instance can be shared across threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cleaner {
    kinds: Vec<CleanerKind>,
}

impl Default for Cleaner {
    fn default() -> Self {
        Self::new(CleanerKind::English)
    }
}

impl Cleaner {
    /// Create a cleaner running a single pipeline.
    pub fn new(kind: CleanerKind) -> Self {
        Self { kinds: vec![kind] }
    }

    /// Resolve a comma-delimited list of pipeline names.
    pub fn from_names(names: &str) -> NormResult<Self> {
        let kinds = names
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::parse::<CleanerKind>)
            .collect::<NormResult<Vec<_>>>()?;

        if kinds.is_empty() {
            return Err(NormError::config("empty cleaner list"));
        }

        debug!(cleaners = names, "resolved cleaner pipeline");
        Ok(Self { kinds })
    }

    /// Resolve the pipelines named in a configuration.
    pub fn from_config(config: &CleanerConfig) -> NormResult<Self> {
        config.validate()?;
        Self::from_names(&config.cleaner_list())
    }

    /// Pipelines in application order.
    pub fn kinds(&self) -> &[CleanerKind] {
        &self.kinds
    }

    /// Names of every stage that runs, in order.
    pub fn stage_names(&self) -> Vec<&'static str> {
        self.kinds
            .iter()
            .flat_map(|kind| stages(*kind))
            .map(Stage::name)
            .collect()
    }

    /// Run every pipeline over the text.
    #[instrument(skip_all, fields(input_len = input.len()))]
    pub fn clean(&self, input: &str) -> String {
        let mut text = input.to_string();
        for kind in &self.kinds {
            trace!(cleaner = kind.name(), "applying cleaner");
            text = run_stages(stages(*kind), &text);
        }
        text
    }
}

impl TextNormalizer for Cleaner {
    fn normalize(&self, input: &str) -> String {
        self.clean(input)
    }
}
