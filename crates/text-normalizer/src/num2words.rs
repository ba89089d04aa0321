//! Number to words conversion for English and Turkish.
//!
//! English output has no commas between groups and no "and"
//! ("one thousand two hundred thirty-four"). Turkish output separates words
//! with spaces ("iki bin yirmi dört") rather than writing them as one word.

// ============================================================================
// English number conversion
// ============================================================================

const EN_ONES: [&str; 20] = [
    "",
    "one",
    "two",
    "three",
    "four",
    "five",
    "six",
    "seven",
    "eight",
    "nine",
    "ten",
    "eleven",
    "twelve",
    "thirteen",
    "fourteen",
    "fifteen",
    "sixteen",
    "seventeen",
    "eighteen",
    "nineteen",
];

const EN_TENS: [&str; 10] = [
    "", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

/// Magnitude names, one per group of three digits.
const EN_SCALES: [&str; 7] = [
    "",
    "thousand",
    "million",
    "billion",
    "trillion",
    "quadrillion",
    "quintillion",
];

/// Convert 1-99 to English words ("twenty-one").
fn tens_to_words_en(n: usize) -> String {
    if n < 20 {
        return EN_ONES[n].to_string();
    }
    let tens = n / 10;
    let ones = n % 10;
    if ones > 0 {
        format!("{}-{}", EN_TENS[tens], EN_ONES[ones])
    } else {
        EN_TENS[tens].to_string()
    }
}

/// Convert hundreds part (0-999) to English words.
fn hundreds_to_words_en(n: usize) -> String {
    if n == 0 {
        return String::new();
    }

    let mut parts = Vec::new();

    let h = n / 100;
    if h > 0 {
        parts.push(format!("{} hundred", EN_ONES[h]));
    }

    let remainder = n % 100;
    if remainder > 0 {
        parts.push(tens_to_words_en(remainder));
    }

    parts.join(" ")
}

/// Split a number into groups of three digits, lowest group first.
fn thousand_groups(mut n: u64) -> Vec<usize> {
    let mut groups = Vec::new();
    while n > 0 {
        groups.push((n % 1000) as usize);
        n /= 1000;
    }
    groups
}

/// Convert a number to English words, without any "and".
pub fn num_to_words_en(num: u64) -> String {
    if num == 0 {
        return "zero".to_string();
    }

    let mut parts = Vec::new();
    for (scale, group) in thousand_groups(num).into_iter().enumerate().rev() {
        if group == 0 {
            continue;
        }
        parts.push(hundreds_to_words_en(group));
        if scale > 0 {
            parts.push(EN_SCALES[scale].to_string());
        }
    }

    parts.join(" ")
}

/// Convert a number to English words the way it is read aloud in running
/// text.
///
/// Values strictly between 1000 and 3000 read as years: "nineteen hundred",
/// "two thousand five", "nineteen oh five", "twenty fifteen". Everything else
/// uses [`num_to_words_en`].
pub fn spoken_number_en(num: u64) -> String {
    if num <= 1000 || num >= 3000 {
        return num_to_words_en(num);
    }

    if num == 2000 {
        return "two thousand".to_string();
    }
    if num > 2000 && num < 2010 {
        return format!("two thousand {}", num_to_words_en(num % 100));
    }

    let high = (num / 100) as usize;
    let low = (num % 100) as usize;
    if low == 0 {
        return format!("{} hundred", tens_to_words_en(high));
    }
    if low < 10 {
        format!("{} oh {}", tens_to_words_en(high), EN_ONES[low])
    } else {
        format!("{} {}", tens_to_words_en(high), tens_to_words_en(low))
    }
}

/// Ordinal form of a single English number word.
fn ordinal_word_en(word: &str) -> String {
    match word {
        "one" => "first".to_string(),
        "two" => "second".to_string(),
        "three" => "third".to_string(),
        "five" => "fifth".to_string(),
        "eight" => "eighth".to_string(),
        "nine" => "ninth".to_string(),
        "twelve" => "twelfth".to_string(),
        w if w.ends_with('y') => format!("{}ieth", &w[..w.len() - 1]),
        w => format!("{w}th"),
    }
}

/// English ordinal conversion ("twenty-first", "one hundredth").
///
/// Only the last word of the cardinal form changes.
pub fn ordinal_to_words_en(num: u64) -> String {
    let base = num_to_words_en(num);
    let split = base.rfind(['-', ' ']).map_or(0, |i| i + 1);
    let (prefix, last) = base.split_at(split);
    format!("{prefix}{}", ordinal_word_en(last))
}

// ============================================================================
// Turkish number conversion
// ============================================================================

const TR_ONES: [&str; 10] = [
    "", "bir", "iki", "üç", "dört", "beş", "altı", "yedi", "sekiz", "dokuz",
];

const TR_TENS: [&str; 10] = [
    "", "on", "yirmi", "otuz", "kırk", "elli", "altmış", "yetmiş", "seksen", "doksan",
];

const TR_SCALES: [&str; 7] = [
    "",
    "bin",
    "milyon",
    "milyar",
    "trilyon",
    "katrilyon",
    "kentilyon",
];

/// Convert hundreds part (0-999) to Turkish words.
///
/// A lone hundred is "yüz", never "bir yüz".
fn hundreds_to_words_tr(n: usize) -> String {
    let mut parts = Vec::new();

    match n / 100 {
        0 => {}
        1 => parts.push("yüz".to_string()),
        h => parts.push(format!("{} yüz", TR_ONES[h])),
    }

    let tens = (n % 100) / 10;
    if tens > 0 {
        parts.push(TR_TENS[tens].to_string());
    }

    let ones = n % 10;
    if ones > 0 {
        parts.push(TR_ONES[ones].to_string());
    }

    parts.join(" ")
}

/// Convert a number to Turkish words.
pub fn num_to_words_tr(num: u64) -> String {
    if num == 0 {
        return "sıfır".to_string();
    }

    let mut parts = Vec::new();
    for (scale, group) in thousand_groups(num).into_iter().enumerate().rev() {
        if group == 0 {
            continue;
        }
        // "bin", not "bir bin"; larger scales keep the "bir".
        if !(scale == 1 && group == 1) {
            parts.push(hundreds_to_words_tr(group));
        }
        if scale > 0 {
            parts.push(TR_SCALES[scale].to_string());
        }
    }

    parts.join(" ")
}

/// Vowel of the ordinal suffix, chosen by the word's last vowel.
fn harmony_vowel(word: &str) -> char {
    match word.chars().rev().find(|c| "aeıioöuü".contains(*c)) {
        Some('a' | 'ı') => 'ı',
        Some('o' | 'u') => 'u',
        Some('ö' | 'ü') => 'ü',
        _ => 'i',
    }
}

/// Ordinal form of a single Turkish number word.
fn ordinal_word_tr(word: &str) -> String {
    let vowel = harmony_vowel(word);
    // Final "t" softens before a vowel suffix.
    let stem = if word == "dört" { "dörd" } else { word };
    let ends_in_vowel = stem.chars().last().is_some_and(|c| "aeıioöuü".contains(c));
    if ends_in_vowel {
        format!("{stem}nc{vowel}")
    } else {
        format!("{stem}{vowel}nc{vowel}")
    }
}

/// Turkish ordinal conversion ("birinci", "yirmi dördüncü").
pub fn ordinal_to_words_tr(num: u64) -> String {
    let base = num_to_words_tr(num);
    let split = base.rfind(' ').map_or(0, |i| i + 1);
    let (prefix, last) = base.split_at(split);
    format!("{prefix}{}", ordinal_word_tr(last))
}
