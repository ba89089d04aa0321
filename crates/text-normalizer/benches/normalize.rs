use criterion::{Criterion, criterion_group, criterion_main};
use norm_core::{CleanerKind, Locale, TextNormalizer};
use std::hint::black_box;
use text_normalizer::{Cleaner, normalize_numbers};

const ENGLISH_TEXT: &str = "On March 21st, 1999, Dr. Smith paid $1,234.56 for 3.5 acres \
                            near St. Louis; by 2005 the land was worth $2,000,000.";

const TURKISH_TEXT: &str = "Prof. Dr. Ayşe 2024 yılında ₺1.250,75 ödedi ve 3üncü kez \
                            5 kg. un aldı.";

fn bench_numeric_cascade(c: &mut Criterion) {
    let mut group = c.benchmark_group("numeric_cascade");

    group.bench_function("english", |b| {
        b.iter(|| normalize_numbers(black_box(ENGLISH_TEXT), Locale::En))
    });
    group.bench_function("turkish", |b| {
        b.iter(|| normalize_numbers(black_box(TURKISH_TEXT), Locale::Tr))
    });

    group.finish();
}

fn bench_cleaners(c: &mut Criterion) {
    let mut group = c.benchmark_group("cleaners");

    for (kind, text) in [
        (CleanerKind::Basic, ENGLISH_TEXT),
        (CleanerKind::Transliteration, TURKISH_TEXT),
        (CleanerKind::English, ENGLISH_TEXT),
        (CleanerKind::Turkish, TURKISH_TEXT),
    ] {
        let cleaner = Cleaner::new(kind);
        group.bench_function(kind.name(), |b| b.iter(|| cleaner.normalize(black_box(text))));
    }

    group.finish();
}

criterion_group!(benches, bench_numeric_cascade, bench_cleaners);
criterion_main!(benches);
