//! Currency amount expansion.
//!
//! Turns the digits captured after a currency symbol into a phrase such as
//! "1 dollar, 50 cents". The numbers stay as digits; the cardinal rule later
//! in the cascade spells them out.

/// Which unit of a currency a count refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurrencyUnit {
    /// The main unit (dollar, lira).
    Primary,
    /// The hundredth unit (cent, kuruş).
    Minor,
}

/// Singular and plural spelling of a unit name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitName {
    pub singular: &'static str,
    pub plural: &'static str,
}

impl UnitName {
    /// Unit name that never changes with the count.
    pub const fn invariant(name: &'static str) -> Self {
        Self {
            singular: name,
            plural: name,
        }
    }

    /// Pick the spelling for a count given as trimmed digits.
    pub fn for_count(&self, count: &str) -> &'static str {
        if count == "1" { self.singular } else { self.plural }
    }
}

/// A parsed `integer[.fraction]` amount.
///
/// Both parts are digit strings with leading zeros removed, so an empty part
/// is zero. Parts may be longer than any integer type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Amount<'a> {
    pub integer: &'a str,
    pub fraction: &'a str,
}

impl<'a> Amount<'a> {
    /// Parse a captured amount.
    ///
    /// Returns `None` when there is more than one period or a part holds
    /// anything besides ASCII digits.
    pub fn parse(text: &'a str) -> Option<Self> {
        let mut parts = text.split('.');
        let integer = parse_part(parts.next().unwrap_or(""))?;
        let fraction = parse_part(parts.next().unwrap_or(""))?;
        if parts.next().is_some() {
            return None;
        }
        Some(Self { integer, fraction })
    }
}

fn parse_part(part: &str) -> Option<&str> {
    part.bytes()
        .all(|b| b.is_ascii_digit())
        .then(|| part.trim_start_matches('0'))
}

/// Naming rules for a currency with a main and a minor unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Currency {
    /// Main unit name.
    pub unit: UnitName,
    /// Minor unit name.
    pub subunit: UnitName,
    /// Phrase used when both parts are zero.
    pub zero: &'static str,
    /// Bare name appended to amounts that cannot be parsed.
    pub fallback: &'static str,
}

impl Currency {
    /// Unit name for a count of the given unit.
    pub fn name(&self, unit: CurrencyUnit, count: &str) -> &'static str {
        match unit {
            CurrencyUnit::Primary => self.unit.for_count(count),
            CurrencyUnit::Minor => self.subunit.for_count(count),
        }
    }

    /// Render a captured amount as a phrase.
    pub fn expand(&self, captured: &str) -> String {
        let Some(amount) = Amount::parse(captured) else {
            return format!("{captured} {}", self.fallback);
        };

        match (amount.integer, amount.fraction) {
            ("", "") => self.zero.to_string(),
            (integer, "") => format!("{integer} {}", self.name(CurrencyUnit::Primary, integer)),
            ("", fraction) => format!("{fraction} {}", self.name(CurrencyUnit::Minor, fraction)),
            (integer, fraction) => format!(
                "{integer} {}, {fraction} {}",
                self.name(CurrencyUnit::Primary, integer),
                self.name(CurrencyUnit::Minor, fraction)
            ),
        }
    }
}

/// US dollars, English names.
pub const DOLLARS_EN: Currency = Currency {
    unit: UnitName {
        singular: "dollar",
        plural: "dollars",
    },
    subunit: UnitName {
        singular: "cent",
        plural: "cents",
    },
    zero: "zero dollars",
    fallback: "dollars",
};

/// US dollars, Turkish names. Turkish nouns stay singular after a numeral.
pub const DOLLARS_TR: Currency = Currency {
    unit: UnitName::invariant("dolar"),
    subunit: UnitName::invariant("sent"),
    zero: "sıfır dolar",
    fallback: "dolar",
};

/// Turkish lira.
pub const LIRA_TR: Currency = Currency {
    unit: UnitName::invariant("lira"),
    subunit: UnitName::invariant("kuruş"),
    zero: "sıfır lira",
    fallback: "lira",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amount_parse() {
        assert_eq!(
            Amount::parse("1.50"),
            Some(Amount {
                integer: "1",
                fraction: "50"
            })
        );
        assert_eq!(
            Amount::parse("012"),
            Some(Amount {
                integer: "12",
                fraction: ""
            })
        );
        assert_eq!(
            Amount::parse(".05"),
            Some(Amount {
                integer: "",
                fraction: "5"
            })
        );
        assert_eq!(
            Amount::parse("7."),
            Some(Amount {
                integer: "7",
                fraction: ""
            })
        );
    }

    #[test]
    fn test_amount_parse_malformed() {
        assert_eq!(Amount::parse("1.2.3"), None);
        assert_eq!(Amount::parse(",5"), None);
    }

    #[test]
    fn test_amount_parse_beyond_u64() {
        assert_eq!(
            Amount::parse("99999999999999999999.50"),
            Some(Amount {
                integer: "99999999999999999999",
                fraction: "50"
            })
        );
        assert_eq!(
            DOLLARS_EN.expand("99999999999999999999.50"),
            "99999999999999999999 dollars, 50 cents"
        );
        assert_eq!(
            DOLLARS_TR.expand("00000000000000000000001"),
            "1 dolar"
        );
    }

    #[test]
    fn test_dollars_en() {
        assert_eq!(DOLLARS_EN.expand("1.50"), "1 dollar, 50 cents");
        assert_eq!(DOLLARS_EN.expand("2.01"), "2 dollars, 1 cent");
        assert_eq!(DOLLARS_EN.expand("5"), "5 dollars");
        assert_eq!(DOLLARS_EN.expand("1"), "1 dollar");
        assert_eq!(DOLLARS_EN.expand("0.01"), "1 cent");
        assert_eq!(DOLLARS_EN.expand("0.00"), "zero dollars");
        assert_eq!(DOLLARS_EN.expand("05"), "5 dollars");
    }

    #[test]
    fn test_dollars_en_fallback() {
        assert_eq!(DOLLARS_EN.expand("1.2.3"), "1.2.3 dollars");
    }

    #[test]
    fn test_turkish_units_stay_singular() {
        assert_eq!(DOLLARS_TR.expand("1"), "1 dolar");
        assert_eq!(DOLLARS_TR.expand("5.25"), "5 dolar, 25 sent");
        assert_eq!(LIRA_TR.expand("5.50"), "5 lira, 50 kuruş");
        assert_eq!(LIRA_TR.expand("0.75"), "75 kuruş");
        assert_eq!(LIRA_TR.expand("0"), "sıfır lira");
        assert_eq!(LIRA_TR.expand("1.2.3"), "1.2.3 lira");
    }

    #[test]
    fn test_currency_unit_names() {
        assert_eq!(DOLLARS_EN.name(CurrencyUnit::Primary, "1"), "dollar");
        assert_eq!(DOLLARS_EN.name(CurrencyUnit::Minor, "2"), "cents");
        assert_eq!(DOLLARS_EN.name(CurrencyUnit::Primary, "11"), "dollars");
        assert_eq!(LIRA_TR.name(CurrencyUnit::Minor, "2"), "kuruş");
    }
}
