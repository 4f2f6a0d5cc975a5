// Criterion benchmarks for kokbul-tr.
//
// Runs entirely from an embedded lexicon; no external data needed.
//
// Run:
//   cargo bench -p kokbul-tr

use criterion::{Criterion, criterion_group, criterion_main};

use kokbul_tr::{TurkishAnalyzer, TurkishLexicon};

fn analyzer() -> TurkishAnalyzer {
    let nouns = [
        "kitap", "ev", "göz", "tuz", "burun", "alın", "yol", "kapı", "okul", "diş", "el",
        "söz", "gün", "iş", "su", "dağ", "taş", "ağaç", "deniz", "şehir",
    ];
    let verbs = [
        "gel", "git", "sev", "bil", "ver", "oku", "yaz", "gör", "bekle", "al", "dur",
        "koş", "uyu", "iç",
    ];
    TurkishAnalyzer::new(TurkishLexicon::from_words(nouns, verbs))
}

// Inflected and derived forms of the embedded roots, plus a few words the
// analyzer rejects, so the benchmark covers both outcomes.
const WORDS: &[&str] = &[
    "kitaplar",
    "kitabı",
    "kitaplıklarda",
    "evinde",
    "evlerimizden",
    "evdeki",
    "gözlükçü",
    "gözlerim",
    "tuzladı",
    "tuzsuzluk",
    "burnu",
    "alnım",
    "yollarda",
    "kapıların",
    "okuldan",
    "dişçi",
    "günlerde",
    "işimiz",
    "geldim",
    "gitti",
    "seviyor",
    "bekliyor",
    "bilmiyor",
    "verdiler",
    "okuyacak",
    "yazarlar",
    "görmüş",
    "zürafa",
    "telefon",
    "masalar",
];

/// Analyze every benchmark word once per iteration.
fn bench_analyze_words(c: &mut Criterion) {
    let analyzer = analyzer();
    c.bench_function("analyze_30_words", |b| {
        b.iter(|| {
            for word in WORDS {
                std::hint::black_box(analyzer.analyze(word));
            }
        });
    });
}

/// A single long word with many layered suffixes; stresses backtracking.
fn bench_analyze_long_word(c: &mut Criterion) {
    let analyzer = analyzer();
    c.bench_function("analyze_long_word", |b| {
        b.iter(|| {
            std::hint::black_box(analyzer.analyze("evlerimizdekiler"));
        });
    });
}

/// Analyzer construction from the built-in tables.
fn bench_build_analyzer(c: &mut Criterion) {
    c.bench_function("build_analyzer", |b| {
        b.iter(|| {
            std::hint::black_box(analyzer());
        });
    });
}

criterion_group!(
    benches,
    bench_analyze_words,
    bench_analyze_long_word,
    bench_build_analyzer,
);
criterion_main!(benches);
