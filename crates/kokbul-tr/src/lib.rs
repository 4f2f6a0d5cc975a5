//! Turkish language module: lexicon, suffix tables, and the analyzer
//! composition root.
//!
//! - [`lexicon`] -- noun/verb root sets and word-list loading
//! - [`tables`] -- built-in Turkish suffix tables and table-file parsing
//! - [`analyzer`] -- the public `analyze(word)` entry point

pub mod analyzer;
pub mod lexicon;
pub mod tables;

pub use analyzer::TurkishAnalyzer;
pub use lexicon::TurkishLexicon;
