//! Core data types shared across the workspace.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::NormError;

/// Supported normalization locales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// English.
    #[default]
    En,
    /// Turkish.
    Tr,
}

impl Locale {
    /// All supported locales.
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Tr];
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Locale::En => write!(f, "en"),
            Locale::Tr => write!(f, "tr"),
        }
    }
}

impl FromStr for Locale {
    type Err = NormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" | "english" => Ok(Self::En),
            "tr" | "turkish" => Ok(Self::Tr),
            _ => Err(NormError::unknown_locale(s)),
        }
    }
}

/// Named cleaner pipelines.
///
/// Each variant is a fixed sequence of text-transform stages. Names accept
/// both the short form (`english`) and the `_cleaners` form
/// (`english_cleaners`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CleanerKind {
    /// Lowercase and collapse whitespace, no transliteration.
    Basic,
    /// Transliterate to ASCII, lowercase, collapse whitespace.
    Transliteration,
    /// English numbers and abbreviations.
    English,
    /// Turkish numbers, abbreviations, and letter substitution.
    Turkish,
}

impl CleanerKind {
    /// All known pipelines.
    pub const ALL: [CleanerKind; 4] = [
        CleanerKind::Basic,
        CleanerKind::Transliteration,
        CleanerKind::English,
        CleanerKind::Turkish,
    ];

    /// Canonical pipeline name.
    pub fn name(&self) -> &'static str {
        match self {
            CleanerKind::Basic => "basic_cleaners",
            CleanerKind::Transliteration => "transliteration_cleaners",
            CleanerKind::English => "english_cleaners",
            CleanerKind::Turkish => "turkish_cleaners",
        }
    }

    /// Locale whose numeric rules this pipeline runs, if any.
    pub fn locale(&self) -> Option<Locale> {
        match self {
            CleanerKind::Basic | CleanerKind::Transliteration => None,
            CleanerKind::English => Some(Locale::En),
            CleanerKind::Turkish => Some(Locale::Tr),
        }
    }
}

impl std::fmt::Display for CleanerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CleanerKind {
    type Err = NormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        let short = lower.strip_suffix("_cleaners").unwrap_or(&lower);
        match short {
            "basic" => Ok(Self::Basic),
            "transliteration" => Ok(Self::Transliteration),
            "english" => Ok(Self::English),
            "turkish" => Ok(Self::Turkish),
            _ => Err(NormError::unknown_cleaner(s.trim())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_parsing() {
        assert_eq!("en".parse::<Locale>().unwrap(), Locale::En);
        assert_eq!("Turkish".parse::<Locale>().unwrap(), Locale::Tr);
        assert!(matches!(
            "ru".parse::<Locale>(),
            Err(NormError::UnknownLocale(_))
        ));
    }

    #[test]
    fn test_locale_display() {
        assert_eq!(Locale::En.to_string(), "en");
        assert_eq!(Locale::Tr.to_string(), "tr");
    }

    #[test]
    fn test_cleaner_kind_parsing() {
        assert_eq!(
            "english_cleaners".parse::<CleanerKind>().unwrap(),
            CleanerKind::English
        );
        assert_eq!(" basic ".parse::<CleanerKind>().unwrap(), CleanerKind::Basic);
        assert_eq!(
            "Transliteration_Cleaners".parse::<CleanerKind>().unwrap(),
            CleanerKind::Transliteration
        );
        assert!(matches!(
            "french_cleaners".parse::<CleanerKind>(),
            Err(NormError::UnknownCleaner(name)) if name == "french_cleaners"
        ));
    }

    #[test]
    fn test_cleaner_kind_names_round_trip() {
        for kind in CleanerKind::ALL {
            assert_eq!(kind.name().parse::<CleanerKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_cleaner_kind_locale() {
        assert_eq!(CleanerKind::Basic.locale(), None);
        assert_eq!(CleanerKind::English.locale(), Some(Locale::En));
        assert_eq!(CleanerKind::Turkish.locale(), Some(Locale::Tr));
    }
}
