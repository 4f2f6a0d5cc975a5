// kokbul-cli: shared utilities for CLI tools.

use std::path::PathBuf;
use std::process;

use kokbul_core::category::WordCategory;
use kokbul_tr::{TurkishAnalyzer, TurkishLexicon};

/// Noun word-list file name.
const NOUNS_TXT: &str = "nouns.txt";

/// Verb word-list file name.
const VERBS_TXT: &str = "verbs.txt";

/// Search for the lexicon word lists and build a TurkishAnalyzer.
///
/// Search order:
/// 1. `lexicon_path` argument (if provided)
/// 2. `KOKBUL_LEXICON_PATH` environment variable
/// 3. `~/.kokbul`
/// 4. Current working directory
///
/// A directory qualifies when it contains both `nouns.txt` and `verbs.txt`.
pub fn load_analyzer(lexicon_path: Option<&str>) -> Result<TurkishAnalyzer, String> {
    let search_paths = build_search_paths(lexicon_path);

    for dir in &search_paths {
        let nouns_path = dir.join(NOUNS_TXT);
        let verbs_path = dir.join(VERBS_TXT);
        if nouns_path.is_file() && verbs_path.is_file() {
            let nouns = std::fs::read_to_string(&nouns_path)
                .map_err(|e| format!("failed to read {}: {}", nouns_path.display(), e))?;
            let verbs = std::fs::read_to_string(&verbs_path)
                .map_err(|e| format!("failed to read {}: {}", verbs_path.display(), e))?;

            let mut lexicon = TurkishLexicon::new();
            lexicon
                .add_from_text(&nouns, WordCategory::Noun)
                .map_err(|e| format!("{}: {}", nouns_path.display(), e))?;
            lexicon
                .add_from_text(&verbs, WordCategory::Verb)
                .map_err(|e| format!("{}: {}", verbs_path.display(), e))?;

            return Ok(TurkishAnalyzer::new(lexicon));
        }
    }

    Err(format!(
        "could not find {} and {} in any of the search paths:\n{}",
        NOUNS_TXT,
        VERBS_TXT,
        search_paths
            .iter()
            .map(|p| format!("  - {}", p.display()))
            .collect::<Vec<_>>()
            .join("\n")
    ))
}

/// Build the list of directories to search for the word lists.
fn build_search_paths(lexicon_path: Option<&str>) -> Vec<PathBuf> {
    let mut paths = Vec::new();

    // 1. Explicit path from argument
    if let Some(p) = lexicon_path {
        paths.push(PathBuf::from(p));
    }

    // 2. KOKBUL_LEXICON_PATH environment variable
    if let Ok(env_path) = std::env::var("KOKBUL_LEXICON_PATH") {
        paths.push(PathBuf::from(env_path));
    }

    // 3. Home directory
    if let Some(home) = home_dir() {
        paths.push(home.join(".kokbul"));
    }

    // 4. Current directory (fallback for local development)
    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd);
    }

    paths
}

/// Get the user's home directory.
fn home_dir() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(PathBuf::from)
}

/// Parse a `--lexicon-path=PATH` or `-d PATH` argument from command line args.
///
/// Returns `(lexicon_path, remaining_args)`.
pub fn parse_lexicon_path(args: &[String]) -> (Option<String>, Vec<String>) {
    let mut lexicon_path = None;
    let mut remaining = Vec::new();
    let mut skip_next = false;

    for (i, arg) in args.iter().enumerate() {
        if skip_next {
            skip_next = false;
            continue;
        }
        if let Some(val) = arg.strip_prefix("--lexicon-path=") {
            lexicon_path = Some(val.to_string());
        } else if arg == "--lexicon-path" || arg == "-d" {
            if i + 1 < args.len() {
                lexicon_path = Some(args[i + 1].clone());
                skip_next = true;
            } else {
                eprintln!("error: {} requires a value", arg);
                process::exit(1);
            }
        } else {
            remaining.push(arg.clone());
        }
    }

    (lexicon_path, remaining)
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}
