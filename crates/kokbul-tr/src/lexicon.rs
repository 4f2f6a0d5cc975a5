// Root lexicon: two membership sets fed by an external word-list extraction
// step. The analyzer only ever asks "is this a known noun/verb", so plain
// hash sets suffice; ordering never leaks into results.

use std::collections::HashSet;

use kokbul_core::alphabet;
use kokbul_core::category::WordCategory;
use kokbul_trie::Lexicon;

/// Error type for word-list loading.
///
/// Malformed dictionary input is a configuration error and aborts loading;
/// no partially validated lexicon is returned.
#[derive(Debug, thiserror::Error)]
pub enum LexiconError {
    #[error("line {line}: word {word:?} contains a character outside the Turkish alphabet")]
    NonAlphabetic { line: usize, word: String },
}

/// The Turkish root lexicon: known noun roots and verb roots.
///
/// Immutable once loading completes; all queries go through the
/// [`Lexicon`] membership trait.
#[derive(Debug, Default, Clone)]
pub struct TurkishLexicon {
    nouns: HashSet<String>,
    verbs: HashSet<String>,
}

impl TurkishLexicon {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a lexicon from in-memory word lists. Words are lowercased but
    /// not validated; intended for programmatic construction and tests.
    pub fn from_words<N, V>(nouns: N, verbs: V) -> Self
    where
        N: IntoIterator,
        N::Item: AsRef<str>,
        V: IntoIterator,
        V::Item: AsRef<str>,
    {
        let mut lexicon = Self::new();
        for word in nouns {
            lexicon.add(word.as_ref(), WordCategory::Noun);
        }
        for word in verbs {
            lexicon.add(word.as_ref(), WordCategory::Verb);
        }
        lexicon
    }

    /// Build a lexicon from two word-list texts (one word per line).
    pub fn from_text(nouns: &str, verbs: &str) -> Result<Self, LexiconError> {
        let mut lexicon = Self::new();
        lexicon.add_from_text(nouns, WordCategory::Noun)?;
        lexicon.add_from_text(verbs, WordCategory::Verb)?;
        Ok(lexicon)
    }

    /// Add a single root; the word is Turkish-lowercased first.
    pub fn add(&mut self, word: &str, category: WordCategory) {
        let lowered: String = word.chars().map(alphabet::turkish_lower).collect();
        match category {
            WordCategory::Noun => self.nouns.insert(lowered),
            WordCategory::Verb => self.verbs.insert(lowered),
        };
    }

    /// Load a word-list text: one word per line, blank lines and `#`
    /// comments skipped, every word Turkish-lowercased and validated
    /// against the alphabet. Returns the number of words added.
    pub fn add_from_text(
        &mut self,
        text: &str,
        category: WordCategory,
    ) -> Result<usize, LexiconError> {
        let mut added = 0;
        for (idx, line) in text.lines().enumerate() {
            let word = line.trim();
            if word.is_empty() || word.starts_with('#') {
                continue;
            }
            let lowered: String = word.chars().map(alphabet::turkish_lower).collect();
            if lowered.chars().any(|c| !alphabet::is_turkish_letter(c)) {
                return Err(LexiconError::NonAlphabetic {
                    line: idx + 1,
                    word: word.to_string(),
                });
            }
            match category {
                WordCategory::Noun => self.nouns.insert(lowered),
                WordCategory::Verb => self.verbs.insert(lowered),
            };
            added += 1;
        }
        Ok(added)
    }

    pub fn noun_count(&self) -> usize {
        self.nouns.len()
    }

    pub fn verb_count(&self) -> usize {
        self.verbs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nouns.is_empty() && self.verbs.is_empty()
    }
}

impl Lexicon for TurkishLexicon {
    fn contains(&self, word: &str, category: WordCategory) -> bool {
        match category {
            WordCategory::Noun => self.nouns.contains(word),
            WordCategory::Verb => self.verbs.contains(word),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn membership_is_per_category() {
        let lexicon = TurkishLexicon::from_words(["kitap"], ["gel"]);
        assert!(lexicon.contains("kitap", WordCategory::Noun));
        assert!(!lexicon.contains("kitap", WordCategory::Verb));
        assert!(lexicon.contains("gel", WordCategory::Verb));
        assert!(lexicon.contains_any("gel"));
        assert!(!lexicon.contains_any("masa"));
    }

    #[test]
    fn words_are_turkish_lowercased() {
        let lexicon = TurkishLexicon::from_words(["KITAP", "\u{0130}\u{015E}"], [] as [&str; 0]);
        // I -> ı, İ -> i
        assert!(lexicon.contains("k\u{0131}tap", WordCategory::Noun));
        assert!(lexicon.contains("i\u{015F}", WordCategory::Noun));
    }

    #[test]
    fn text_loader_skips_blanks_and_comments() {
        let mut lexicon = TurkishLexicon::new();
        let added = lexicon
            .add_from_text("# nouns\nkitap\n\n  ev  \n", WordCategory::Noun)
            .unwrap();
        assert_eq!(added, 2);
        assert!(lexicon.contains("ev", WordCategory::Noun));
        assert_eq!(lexicon.noun_count(), 2);
    }

    #[test]
    fn text_loader_rejects_foreign_characters() {
        let mut lexicon = TurkishLexicon::new();
        let err = lexicon
            .add_from_text("kitap\ntaxi\n", WordCategory::Noun)
            .unwrap_err();
        match err {
            LexiconError::NonAlphabetic { line, word } => {
                assert_eq!(line, 2);
                assert_eq!(word, "taxi");
            }
        }
    }

    #[test]
    fn duplicates_collapse() {
        let lexicon = TurkishLexicon::from_words(["ev", "ev", "Ev"], [] as [&str; 0]);
        assert_eq!(lexicon.noun_count(), 1);
    }
}
