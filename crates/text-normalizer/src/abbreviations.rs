//! Abbreviation dictionaries.
//!
//! An abbreviation matches case-insensitively at a word boundary and must be
//! followed directly by a period, which is consumed with it.

use once_cell::sync::Lazy;
use regex::{NoExpand, Regex};

/// Compiled abbreviation table, applied entry by entry in table order.
#[derive(Debug)]
pub struct AbbreviationTable {
    entries: Vec<(Regex, &'static str)>,
}

impl AbbreviationTable {
    /// Compile a table from (abbreviation, expansion) pairs.
    pub fn new(pairs: &[(&str, &'static str)]) -> Self {
        let entries = pairs
            .iter()
            .map(|(abbr, expansion)| {
                let pattern = format!(r"(?i)\b{}\.", regex::escape(abbr));
                let regex = Regex::new(&pattern).expect("abbreviation pattern is valid");
                (regex, *expansion)
            })
            .collect();
        Self { entries }
    }

    /// Expand every abbreviation in the text.
    pub fn expand(&self, input: &str) -> String {
        let mut text = input.to_string();
        for (regex, expansion) in &self.entries {
            text = regex.replace_all(&text, NoExpand(expansion)).into_owned();
        }
        text
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

const ENGLISH_PAIRS: &[(&str, &str)] = &[
    ("mrs", "misess"),
    ("mr", "mister"),
    ("dr", "doctor"),
    ("st", "saint"),
    ("co", "company"),
    ("jr", "junior"),
    ("maj", "major"),
    ("gen", "general"),
    ("drs", "doctors"),
    ("rev", "reverend"),
    ("lt", "lieutenant"),
    ("hon", "honorable"),
    ("sgt", "sergeant"),
    ("capt", "captain"),
    ("esq", "esquire"),
    ("ltd", "limited"),
    ("col", "colonel"),
    ("ft", "fort"),
];

const TURKISH_PAIRS: &[(&str, &str)] = &[
    ("vb", "vebenzeri"),
    ("vs", "vesaire"),
    ("dr", "doktor"),
    ("av", "avukat"),
    ("MÖ", "milattan önce"),
    ("MS", "milattan sonra"),
    ("TBMM", "Türkiye Büyük Millet Meclisi"),
    ("TDK", "Türk Dil Kurumu"),
    ("TC", "Türkiye Cumhuriyeti"),
    ("mm", "milimetre"),
    ("kg", "kilogram"),
    ("km", "kilometre"),
    ("mg", "miligram"),
    ("Prof", "Profesör"),
    ("haz", "hazırlayan"),
    ("çev", "çeviren"),
    ("Alb", "Albay"),
    ("Müh", "Mühendis"),
    ("no", "Numara"),
    ("Opr", "Operatör"),
    ("Org", "Orgeneral"),
    ("Uzm", "Uzman"),
    ("Yrd", "Yardımcı"),
    ("Doç", "Doçent"),
    ("Yzb", "Yüzbaşı"),
    ("mah", "Mahallesi"),
    ("cad", "Caddesi"),
    ("sok", "Sokak"),
    ("Apt", "Apartman"),
    ("Ecz", "Eczane"),
    ("THY", "Türk Hava Yolları"),
    ("MEB", "Milli Eğitim Bakanlığı"),
    ("bkz", "bakınız"),
    ("bul", "Bulvarı"),
    ("gön", "gönderen"),
    ("lt", "litre"),
    ("yy", "yüzyıl"),
];

/// English titles and address words.
pub static ENGLISH: Lazy<AbbreviationTable> = Lazy::new(|| AbbreviationTable::new(ENGLISH_PAIRS));

/// Turkish titles, units, institutions, and address words.
pub static TURKISH: Lazy<AbbreviationTable> = Lazy::new(|| AbbreviationTable::new(TURKISH_PAIRS));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_compile() {
        assert_eq!(ENGLISH.len(), ENGLISH_PAIRS.len());
        assert_eq!(TURKISH.len(), TURKISH_PAIRS.len());
        assert!(!ENGLISH.is_empty());
    }

    #[test]
    fn test_english_expansion() {
        assert_eq!(ENGLISH.expand("dr. smith"), "doctor smith");
        assert_eq!(ENGLISH.expand("Mr. and Mrs. Jones"), "mister and misess Jones");
        assert_eq!(ENGLISH.expand("capt. hook, esq."), "captain hook, esquire");
    }

    #[test]
    fn test_requires_trailing_period() {
        assert_eq!(ENGLISH.expand("dr smith"), "dr smith");
        assert_eq!(ENGLISH.expand("drive."), "drive.");
    }

    #[test]
    fn test_requires_word_boundary() {
        // "gen." inside "oxygen." is not at a word start.
        assert_eq!(ENGLISH.expand("oxygen."), "oxygen.");
    }

    #[test]
    fn test_turkish_expansion() {
        assert_eq!(TURKISH.expand("Prof. Dr. Ayşe"), "Profesör doktor Ayşe");
        assert_eq!(TURKISH.expand("5 kg. un"), "5 kilogram un");
        assert_eq!(TURKISH.expand("TBMM. toplandı"), "Türkiye Büyük Millet Meclisi toplandı");
    }

    #[test]
    fn test_turkish_case_insensitive_non_ascii() {
        assert_eq!(TURKISH.expand("mö. 300"), "milattan önce 300");
        assert_eq!(TURKISH.expand("Doç. Ali"), "Doçent Ali");
    }
}
