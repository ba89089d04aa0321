//! Numeric normalization rules and the ordered pattern table.
//!
//! The table runs its rules in a fixed order, and each rule depends on the
//! ones before it:
//!
//! 1. comma removal, so every later rule sees contiguous digit runs;
//! 2. currency symbols, before their digits are taken by the generic rules;
//! 3. decimal points;
//! 4. ordinals, before their digits are taken as cardinals;
//! 5. remaining digit runs as cardinals.
//!
//! Every rule replaces all non-overlapping matches left to right in one pass
//! over the output of the previous rule.

use std::borrow::Cow;

use norm_core::Locale;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use tracing::trace;

use crate::locale::{CurrencySymbol, LocaleStrategy, strategy_for};

/// A text normalization rule.
pub trait Rule: Send + Sync + std::fmt::Debug {
    /// Get the rule name.
    fn name(&self) -> &str;

    /// Apply the rule to the input text. Text the rule does not match is
    /// returned unchanged.
    fn apply<'a>(&self, input: &'a str) -> Cow<'a, str>;
}

static COMMA_NUMBER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[0-9][0-9,]+[0-9]").expect("comma pattern is valid"));
static DECIMAL_NUMBER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[0-9]+\.[0-9]+").expect("decimal pattern is valid"));
static NUMBER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[0-9]+").expect("number pattern is valid"));

/// Strip thousands separators inside digit runs ("1,234" -> "1234").
#[derive(Debug, Clone, Copy, Default)]
pub struct CommaRule;

impl Rule for CommaRule {
    fn name(&self) -> &str {
        "comma"
    }

    fn apply<'a>(&self, input: &'a str) -> Cow<'a, str> {
        COMMA_NUMBER_RE.replace_all(input, |caps: &Captures| caps[0].replace(',', ""))
    }
}

/// Expand one currency symbol and its amount.
///
/// The phrase comes from the locale strategy, so a table only ever renders
/// its own locale's unit names.
#[derive(Debug)]
pub struct CurrencyRule {
    name: String,
    symbol: char,
    strategy: &'static dyn LocaleStrategy,
    pattern: Regex,
}

impl CurrencyRule {
    /// Build the rule for one of the strategy's currency symbols.
    pub fn new(strategy: &'static dyn LocaleStrategy, currency: &CurrencySymbol) -> Self {
        let pattern = Regex::new(&currency.pattern()).expect("currency pattern is valid");
        Self {
            name: format!("currency_{}", currency.name),
            symbol: currency.symbol,
            strategy,
            pattern,
        }
    }
}

impl Rule for CurrencyRule {
    fn name(&self) -> &str {
        &self.name
    }

    fn apply<'a>(&self, input: &'a str) -> Cow<'a, str> {
        self.pattern.replace_all(input, |caps: &Captures| {
            self.strategy
                .expand_amount(self.symbol, &caps[1])
                .unwrap_or_else(|| caps[0].to_string())
        })
    }
}

/// Replace the period in a decimal number with the spoken word.
///
/// The digit groups on either side are left as digits for [`NumberRule`].
#[derive(Debug, Clone)]
pub struct DecimalRule {
    replacement: String,
}

impl DecimalRule {
    /// Build the rule with the locale's word for the decimal point.
    pub fn new(word: &str) -> Self {
        Self {
            replacement: format!(" {word} "),
        }
    }
}

impl Rule for DecimalRule {
    fn name(&self) -> &str {
        "decimal"
    }

    fn apply<'a>(&self, input: &'a str) -> Cow<'a, str> {
        DECIMAL_NUMBER_RE.replace_all(input, |caps: &Captures| {
            caps[0].replacen('.', &self.replacement, 1)
        })
    }
}

/// Spell a digit run followed by an ordinal suffix as an ordinal.
#[derive(Debug)]
pub struct OrdinalRule {
    strategy: &'static dyn LocaleStrategy,
    pattern: Regex,
}

impl OrdinalRule {
    /// Build the rule from the locale's ordinal suffixes.
    pub fn new(strategy: &'static dyn LocaleStrategy) -> Self {
        let suffixes = strategy
            .ordinal_suffixes()
            .iter()
            .map(|s| regex::escape(s))
            .collect::<Vec<_>>()
            .join("|");
        let pattern =
            Regex::new(&format!("([0-9]+)(?:{suffixes})")).expect("ordinal pattern is valid");
        Self { strategy, pattern }
    }
}

impl Rule for OrdinalRule {
    fn name(&self) -> &str {
        "ordinal"
    }

    fn apply<'a>(&self, input: &'a str) -> Cow<'a, str> {
        self.pattern.replace_all(input, |caps: &Captures| {
            match caps[1].parse::<u64>() {
                Ok(num) => self.strategy.spell_ordinal(num),
                // Too large for an ordinal; the cardinal rule reads the digits.
                Err(_) => caps[0].to_string(),
            }
        })
    }
}

/// Spell every remaining digit run as a cardinal.
#[derive(Debug)]
pub struct NumberRule {
    strategy: &'static dyn LocaleStrategy,
}

impl NumberRule {
    /// Build the rule for a locale strategy.
    pub fn new(strategy: &'static dyn LocaleStrategy) -> Self {
        Self { strategy }
    }
}

impl Rule for NumberRule {
    fn name(&self) -> &str {
        "number"
    }

    fn apply<'a>(&self, input: &'a str) -> Cow<'a, str> {
        NUMBER_RE.replace_all(input, |caps: &Captures| {
            let digits = &caps[0];
            match digits.parse::<u64>() {
                Ok(num) => self.strategy.spell_cardinal(num),
                Err(_) => self.strategy.spell_digits(digits),
            }
        })
    }
}

/// Ordered numeric rules for one locale.
#[derive(Debug)]
pub struct PatternTable {
    locale: Locale,
    rules: Vec<Box<dyn Rule>>,
}

impl PatternTable {
    /// Build the table for a locale, in cascade order.
    pub fn for_locale(locale: Locale) -> Self {
        let strategy = strategy_for(locale);

        let mut rules: Vec<Box<dyn Rule>> = vec![Box::new(CommaRule)];
        for currency in strategy.currencies() {
            rules.push(Box::new(CurrencyRule::new(strategy, currency)));
        }
        rules.push(Box::new(DecimalRule::new(strategy.decimal_word())));
        rules.push(Box::new(OrdinalRule::new(strategy)));
        rules.push(Box::new(NumberRule::new(strategy)));

        Self { locale, rules }
    }

    /// Locale of this table.
    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Rule names in execution order.
    pub fn rule_names(&self) -> Vec<&str> {
        self.rules.iter().map(|rule| rule.name()).collect()
    }

    /// Apply every rule in order.
    pub fn apply(&self, input: &str) -> String {
        let mut text = input.to_string();
        for rule in &self.rules {
            trace!(rule = rule.name(), locale = %self.locale, "applying rule");
            text = rule.apply(&text).into_owned();
        }
        text
    }
}

static ENGLISH_TABLE: Lazy<PatternTable> = Lazy::new(|| PatternTable::for_locale(Locale::En));
static TURKISH_TABLE: Lazy<PatternTable> = Lazy::new(|| PatternTable::for_locale(Locale::Tr));

/// Shared, lazily compiled table for a locale.
pub fn pattern_table(locale: Locale) -> &'static PatternTable {
    match locale {
        Locale::En => &ENGLISH_TABLE,
        Locale::Tr => &TURKISH_TABLE,
    }
}

/// Run the numeric cascade over a string.
pub fn normalize_numbers(text: &str, locale: Locale) -> String {
    pattern_table(locale).apply(text)
}
