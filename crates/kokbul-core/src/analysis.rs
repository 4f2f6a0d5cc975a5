// Decomposition candidates and the deterministic result set returned by
// `analyze`.

use std::collections::BTreeSet;

/// One decomposition of a surface word: a root plus its suffix chain.
///
/// The chain lists segments in root-to-surface order, each prefixed with a
/// dash (e.g. `-la-dı` for a derivational `-la` followed by a past-tense
/// `-dı`). A bare dictionary root has an empty chain.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Candidate {
    root: String,
    suffixes: String,
}

impl Candidate {
    pub fn new(root: impl Into<String>, suffixes: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            suffixes: suffixes.into(),
        }
    }

    pub fn root(&self) -> &str {
        &self.root
    }

    pub fn suffixes(&self) -> &str {
        &self.suffixes
    }

    /// Whether this candidate is the word itself with no suffixes stripped.
    pub fn is_bare(&self) -> bool {
        self.suffixes.is_empty()
    }
}

/// The full result of analyzing one word: every dictionary-validated
/// decomposition plus the set of distinct roots found.
///
/// Both members are ordered sets so that repeated calls with unchanged
/// tables and lexicon produce identical, deterministically iterable output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnalysisSet {
    candidates: BTreeSet<Candidate>,
    roots: BTreeSet<String>,
}

impl AnalysisSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a candidate; its root is added to the root set as well.
    pub fn insert(&mut self, candidate: Candidate) {
        self.roots.insert(candidate.root.clone());
        self.candidates.insert(candidate);
    }

    /// Union another result set into this one.
    pub fn extend(&mut self, other: AnalysisSet) {
        self.roots.extend(other.roots);
        self.candidates.extend(other.candidates);
    }

    pub fn candidates(&self) -> &BTreeSet<Candidate> {
        &self.candidates
    }

    pub fn roots(&self) -> &BTreeSet<String> {
        &self.roots
    }

    pub fn contains(&self, root: &str, suffixes: &str) -> bool {
        self.candidates
            .contains(&Candidate::new(root, suffixes))
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}
