// Analyzer composition root: normalizes input, runs the inflectional
// search, and validates every stripped stem through the derivational
// layer against the lexicon.

use kokbul_core::alphabet;
use kokbul_core::analysis::{AnalysisSet, Candidate};
use kokbul_trie::table::{DerivationRecord, InflectionRecord};
use kokbul_trie::{DerivationTrie, InflectionTrie, MIN_STEM_CHARS, TrieError};

use crate::lexicon::TurkishLexicon;
use crate::tables;

/// A fully assembled Turkish analyzer.
///
/// Holds its own lexicon and tries; there is no shared or global state, so
/// independent analyzers may coexist (say, one per dialect lexicon) and a
/// single analyzer may serve concurrent queries through `&self`.
#[derive(Debug)]
pub struct TurkishAnalyzer {
    lexicon: TurkishLexicon,
    inflections: InflectionTrie,
    derivations: DerivationTrie,
}

impl TurkishAnalyzer {
    /// Build an analyzer over `lexicon` with the built-in suffix tables.
    pub fn new(lexicon: TurkishLexicon) -> Self {
        Self::with_tables(
            lexicon,
            &tables::default_inflection_records(),
            &tables::default_derivation_records(),
        )
        .expect("built-in suffix tables are valid")
    }

    /// Build an analyzer with caller-supplied suffix tables.
    pub fn with_tables(
        lexicon: TurkishLexicon,
        inflections: &[InflectionRecord],
        derivations: &[DerivationRecord],
    ) -> Result<Self, TrieError> {
        Ok(Self {
            lexicon,
            inflections: InflectionTrie::from_records(inflections)?,
            derivations: DerivationTrie::from_records(derivations)?,
        })
    }

    pub fn lexicon(&self) -> &TurkishLexicon {
        &self.lexicon
    }

    /// Analyze one word.
    ///
    /// The word is Turkish-lowercased first. Words shorter than the stem
    /// floor or containing characters outside the Turkish alphabet are not
    /// decomposed; they come back as a single bare candidate so that a
    /// caller segmenting running text still gets one entry per token.
    ///
    /// For analyzable words the result holds every decomposition whose root
    /// survives lexicon validation, and may be empty. Candidates and roots
    /// iterate in lexicographic order regardless of discovery order.
    pub fn analyze(&self, word: &str) -> AnalysisSet {
        let lowered: String = word.chars().map(alphabet::turkish_lower).collect();
        let chars: Vec<char> = lowered.chars().collect();
        if chars.len() < MIN_STEM_CHARS || chars.iter().any(|&c| !alphabet::is_turkish_letter(c)) {
            let mut out = AnalysisSet::new();
            out.insert(Candidate::new(&lowered, ""));
            return out;
        }

        let mut out = AnalysisSet::new();
        for (stem, chain) in self.inflections.search(&lowered) {
            out.extend(self.derivations.search(&self.lexicon, &stem, &chain));
        }
        out
    }

    /// The distinct dictionary roots reachable from `word`.
    pub fn roots(&self, word: &str) -> Vec<String> {
        self.analyze(word).roots().iter().cloned().collect()
    }
}
