//! Per-locale behavior of the numeric cascade.
//!
//! Each supported locale implements [`LocaleStrategy`]. The pattern table for
//! a locale is built only from its own strategy, so English and Turkish rules
//! never mix.

use norm_core::Locale;

use crate::abbreviations::{self, AbbreviationTable};
use crate::amount::{Currency, DOLLARS_EN, DOLLARS_TR, LIRA_TR};
use crate::num2words;

/// How a currency symbol's amount is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rendering {
    /// Append a unit name to the digits ("10 pounds"). Periods are not part
    /// of the amount.
    Append(&'static str),
    /// Full amount expansion with main and minor units.
    Amount(Currency),
}

/// A currency symbol recognized by a locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrencySymbol {
    /// Short rule name.
    pub name: &'static str,
    /// The symbol preceding the amount.
    pub symbol: char,
    /// How the amount is rendered.
    pub rendering: Rendering,
}

impl CurrencySymbol {
    /// Regex matching the symbol and capturing its amount.
    pub fn pattern(&self) -> String {
        let symbol = regex::escape(&self.symbol.to_string());
        match self.rendering {
            Rendering::Append(_) => format!("{symbol}([0-9,]*[0-9]+)"),
            Rendering::Amount(_) => format!(r"{symbol}([0-9.,]*[0-9]+)"),
        }
    }

    /// Render a captured amount.
    pub fn render(&self, captured: &str) -> String {
        match &self.rendering {
            Rendering::Append(unit) => format!("{captured} {unit}"),
            Rendering::Amount(currency) => currency.expand(captured),
        }
    }
}

/// Locale-specific operations used by the numeric cascade and the cleaners.
pub trait LocaleStrategy: Send + Sync + std::fmt::Debug {
    /// The locale this strategy implements.
    fn locale(&self) -> Locale;

    /// Spell a cardinal number as it is read in running text.
    fn spell_cardinal(&self, num: u64) -> String;

    /// Spell an ordinal number.
    fn spell_ordinal(&self, num: u64) -> String;

    /// Currency symbols, in the order their rules run.
    fn currencies(&self) -> &'static [CurrencySymbol];

    /// Word that replaces the decimal point.
    fn decimal_word(&self) -> &'static str;

    /// Suffixes that mark a digit run as an ordinal.
    fn ordinal_suffixes(&self) -> &'static [&'static str];

    /// Abbreviation dictionary.
    fn abbreviations(&self) -> &'static AbbreviationTable;

    /// Render the amount captured after `symbol`, if the locale knows it.
    fn expand_amount(&self, symbol: char, captured: &str) -> Option<String> {
        self.currencies()
            .iter()
            .find(|c| c.symbol == symbol)
            .map(|c| c.render(captured))
    }

    /// Spell a digit run too long for `u64`, one digit at a time.
    fn spell_digits(&self, digits: &str) -> String {
        digits
            .chars()
            .filter_map(|c| c.to_digit(10))
            .map(|d| self.spell_cardinal(u64::from(d)))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// English strategy.
#[derive(Debug, Clone, Copy, Default)]
pub struct English;

const ENGLISH_CURRENCIES: &[CurrencySymbol] = &[
    CurrencySymbol {
        name: "pounds",
        symbol: '£',
        rendering: Rendering::Append("pounds"),
    },
    CurrencySymbol {
        name: "dollars",
        symbol: '$',
        rendering: Rendering::Amount(DOLLARS_EN),
    },
];

impl LocaleStrategy for English {
    fn locale(&self) -> Locale {
        Locale::En
    }

    fn spell_cardinal(&self, num: u64) -> String {
        num2words::spoken_number_en(num)
    }

    fn spell_ordinal(&self, num: u64) -> String {
        num2words::ordinal_to_words_en(num)
    }

    fn currencies(&self) -> &'static [CurrencySymbol] {
        ENGLISH_CURRENCIES
    }

    fn decimal_word(&self) -> &'static str {
        "point"
    }

    fn ordinal_suffixes(&self) -> &'static [&'static str] {
        &["st", "nd", "rd", "th"]
    }

    fn abbreviations(&self) -> &'static AbbreviationTable {
        &abbreviations::ENGLISH
    }
}

/// Turkish strategy.
#[derive(Debug, Clone, Copy, Default)]
pub struct Turkish;

const TURKISH_CURRENCIES: &[CurrencySymbol] = &[
    CurrencySymbol {
        name: "sterlin",
        symbol: '£',
        rendering: Rendering::Append("sterlin"),
    },
    CurrencySymbol {
        name: "dolar",
        symbol: '$',
        rendering: Rendering::Amount(DOLLARS_TR),
    },
    CurrencySymbol {
        name: "lira",
        symbol: '₺',
        rendering: Rendering::Amount(LIRA_TR),
    },
];

impl LocaleStrategy for Turkish {
    fn locale(&self) -> Locale {
        Locale::Tr
    }

    fn spell_cardinal(&self, num: u64) -> String {
        num2words::num_to_words_tr(num)
    }

    fn spell_ordinal(&self, num: u64) -> String {
        num2words::ordinal_to_words_tr(num)
    }

    fn currencies(&self) -> &'static [CurrencySymbol] {
        TURKISH_CURRENCIES
    }

    fn decimal_word(&self) -> &'static str {
        "nokta"
    }

    fn ordinal_suffixes(&self) -> &'static [&'static str] {
        &["ıncı", "inci", "nci", "üncü", "uncu"]
    }

    fn abbreviations(&self) -> &'static AbbreviationTable {
        &abbreviations::TURKISH
    }
}

/// Strategy for a locale.
pub fn strategy_for(locale: Locale) -> &'static dyn LocaleStrategy {
    match locale {
        Locale::En => &English,
        Locale::Tr => &Turkish,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategy_for_locale() {
        for locale in Locale::ALL {
            assert_eq!(strategy_for(locale).locale(), locale);
        }
    }

    #[test]
    fn test_currency_patterns() {
        let pounds = ENGLISH_CURRENCIES[0];
        assert_eq!(pounds.pattern(), "£([0-9,]*[0-9]+)");

        let dollars = ENGLISH_CURRENCIES[1];
        assert_eq!(dollars.pattern(), r"\$([0-9.,]*[0-9]+)");
    }

    #[test]
    fn test_expand_amount() {
        assert_eq!(
            English.expand_amount('$', "1.50").as_deref(),
            Some("1 dollar, 50 cents")
        );
        assert_eq!(English.expand_amount('£', "10").as_deref(), Some("10 pounds"));
        assert_eq!(English.expand_amount('₺', "10"), None);
        assert_eq!(
            Turkish.expand_amount('₺', "10").as_deref(),
            Some("10 lira")
        );
        assert_eq!(Turkish.expand_amount('£', "3").as_deref(), Some("3 sterlin"));
    }

    #[test]
    fn test_spell_digits() {
        assert_eq!(English.spell_digits("1203"), "one two zero three");
        assert_eq!(Turkish.spell_digits("40"), "dört sıfır");
    }

    #[test]
    fn test_english_cardinal_uses_year_band() {
        assert_eq!(English.spell_cardinal(1900), "nineteen hundred");
        assert_eq!(Turkish.spell_cardinal(1900), "bin dokuz yüz");
    }
}
