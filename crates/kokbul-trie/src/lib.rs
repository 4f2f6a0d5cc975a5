//! Suffix-trie decomposition engine.
//!
//! This crate implements the backtracking suffix-stripping core of the
//! analyzer: two reversed-suffix tries built once from priority-annotated
//! suffix tables, traversed from the end of a word under morphotactic
//! ordering constraints, with phonological repair applied at each candidate
//! stem boundary.
//!
//! # Architecture
//!
//! - [`table`] -- suffix table records and construction-time validation
//! - [`rules`] -- phonological repair rules (devoicing, narrowing, elision)
//! - [`inflection`] -- three-root inflectional trie and priority-gated search
//! - [`derivation`] -- derivational trie with input/output category chaining
//!
//! Tries are immutable after construction; every search only reads shared
//! state and accumulates into its own result set, so one trie may serve
//! concurrent queries without locking.

pub mod derivation;
pub mod inflection;
pub mod rules;
pub mod table;

pub use derivation::DerivationTrie;
pub use inflection::InflectionTrie;

use kokbul_core::category::WordCategory;

/// Error type for suffix table validation and trie construction.
///
/// Construction errors are fatal: no partially built trie is ever returned,
/// so no query can run against incomplete state.
#[derive(Debug, thiserror::Error)]
pub enum TrieError {
    #[error("suffix table record {index} has an empty suffix")]
    EmptySuffix { index: usize },
    #[error("suffix {suffix:?} contains a character outside the Turkish alphabet: {ch:?}")]
    NonAlphabetic { suffix: String, ch: char },
    #[error("suffix {suffix:?} applies to neither nouns nor verbs")]
    NoCategory { suffix: String },
    #[error("suffix {suffix:?} has priority {value} above the lattice maximum {max}")]
    PriorityOutOfRange { suffix: String, value: u8, max: u8 },
}

/// Minimum number of characters a stem may be reduced to.
///
/// Traversal never strips a word below this floor, which both prevents
/// degenerate analyses (a word decomposed to nothing) and bounds recursion.
pub const MIN_STEM_CHARS: usize = 2;

/// Largest meaningful priority class in the morphotactic ordering lattice.
///
/// The initial search ceiling is one above this, so class values greater
/// than the maximum could never match and are rejected at construction.
pub const MAX_PRIORITY: u8 = 8;

/// Membership oracle over the root lexicon.
///
/// The engine validates candidate roots through this trait only; it never
/// builds or mutates a lexicon itself. Implementations must be consistent
/// for the lifetime of the trie queries using them.
pub trait Lexicon {
    /// Whether `word` is a known root of the given category.
    fn contains(&self, word: &str, category: WordCategory) -> bool;

    /// Whether `word` is a known root of any category.
    fn contains_any(&self, word: &str) -> bool {
        self.contains(word, WordCategory::Noun) || self.contains(word, WordCategory::Verb)
    }
}
