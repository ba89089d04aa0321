//! Numbers command implementation.

use anyhow::Result;
use norm_core::Locale;
use text_normalizer::pattern_table;
use tracing::debug;

use super::normalize::transform_input;

/// Run the numbers command: the numeric cascade alone, without cleaning.
pub fn run(input: &str, locale: Locale) -> Result<()> {
    let table = pattern_table(locale);
    debug!(%locale, rules = ?table.rule_names(), "pattern table ready");
    transform_input(input, |text| table.apply(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_flag_values() {
        assert_eq!("tr".parse::<Locale>().unwrap(), Locale::Tr);
        assert_eq!("English".parse::<Locale>().unwrap(), Locale::En);
        assert!("fr".parse::<Locale>().is_err());
    }

    #[test]
    fn test_table_follows_locale() {
        let table = pattern_table("tr".parse().unwrap());
        assert_eq!(table.apply("$5"), "beş dolar");
        assert_eq!(pattern_table(Locale::En).apply("$5"), "five dollars");
    }
}
