// kokbul-root: Print the dictionary roots of words.
//
// Reads words from stdin (one per line) and prints the distinct roots
// each word can be reduced to, space-separated on one line per word.
//
// Usage:
//   kokbul-root [-d LEXICON_PATH] [WORD...]
//
// Options:
//   -d, --lexicon-path PATH   Directory containing nouns.txt and verbs.txt
//   -h, --help                Print help

use std::io::{self, BufRead, Write};

use kokbul_tr::TurkishAnalyzer;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (lexicon_path, args) = kokbul_cli::parse_lexicon_path(&args);

    if kokbul_cli::wants_help(&args) {
        println!("kokbul-root: Reduce Turkish words to their dictionary roots.");
        println!();
        println!("Usage: kokbul-root [-d LEXICON_PATH] [WORD...]");
        println!();
        println!("If WORD arguments are given, prints the roots of each word.");
        println!("Otherwise reads words from stdin (one per line).");
        println!();
        println!("Options:");
        println!("  -d, --lexicon-path PATH   Directory containing nouns.txt and verbs.txt");
        println!("  -h, --help                Print this help");
        return;
    }

    let words: Vec<String> = args.iter().filter(|a| !a.starts_with('-')).cloned().collect();

    let analyzer =
        kokbul_cli::load_analyzer(lexicon_path.as_deref()).unwrap_or_else(|e| kokbul_cli::fatal(&e));

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    let print_roots =
        |word: &str, analyzer: &TurkishAnalyzer, out: &mut io::BufWriter<io::StdoutLock<'_>>| {
            let roots = analyzer.roots(word);
            if roots.is_empty() {
                let _ = writeln!(out, "{word}: (no root)");
            } else {
                let _ = writeln!(out, "{word}: {}", roots.join(" "));
            }
        };

    if words.is_empty() {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(l) => l,
                Err(e) => {
                    eprintln!("error reading stdin: {e}");
                    break;
                }
            };
            let word = line.trim();
            if word.is_empty() {
                continue;
            }
            print_roots(word, &analyzer, &mut out);
        }
    } else {
        for word in &words {
            print_roots(word, &analyzer, &mut out);
        }
    }
}
