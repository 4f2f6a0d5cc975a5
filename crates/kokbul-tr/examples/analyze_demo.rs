// Analyze a handful of Turkish words with a small embedded lexicon.
//
// Run: cargo run -p kokbul-tr --example analyze_demo

use kokbul_tr::{TurkishAnalyzer, TurkishLexicon};

fn main() {
    let lexicon = TurkishLexicon::from_words(
        ["kitap", "ev", "göz", "tuz", "burun"],
        ["gel", "sev", "bekle"],
    );
    let analyzer = TurkishAnalyzer::new(lexicon);

    for word in [
        "kitaplar",
        "kitabı",
        "evlerimizde",
        "gözlükçü",
        "tuzladı",
        "burnu",
        "bekliyor",
        "masa",
    ] {
        let analysis = analyzer.analyze(word);
        if analysis.is_empty() {
            println!("{word}: (no analysis)");
            continue;
        }
        println!("{word}:");
        for candidate in analysis.candidates() {
            if candidate.is_bare() {
                println!("  {}", candidate.root());
            } else {
                println!("  {} {}", candidate.root(), candidate.suffixes());
            }
        }
    }
}
