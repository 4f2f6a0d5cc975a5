// Suffix table records consumed at trie-construction time.
//
// Records are input data only: the tries copy what they need during
// construction and the records are discarded afterwards.

use kokbul_core::alphabet;
use kokbul_core::category::WordCategory;

use crate::{MAX_PRIORITY, TrieError};

/// One row of the inflectional suffix table.
///
/// Priorities are morphotactic slot classes: lower numbers sit closer to the
/// root. `compare_*` is the class the suffix itself occupies; `transit_*` is
/// the ceiling it imposes on the next suffix inward.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InflectionRecord {
    pub suffix: String,
    pub applies_to_noun: bool,
    pub applies_to_verb: bool,
    pub compare_noun_priority: u8,
    pub transit_noun_priority: u8,
    pub compare_verb_priority: u8,
    pub transit_verb_priority: u8,
}

impl InflectionRecord {
    /// A noun-only suffix.
    pub fn noun(suffix: &str, compare: u8, transit: u8) -> Self {
        Self {
            suffix: suffix.to_string(),
            applies_to_noun: true,
            applies_to_verb: false,
            compare_noun_priority: compare,
            transit_noun_priority: transit,
            compare_verb_priority: 0,
            transit_verb_priority: 0,
        }
    }

    /// A verb-only suffix.
    pub fn verb(suffix: &str, compare: u8, transit: u8) -> Self {
        Self {
            suffix: suffix.to_string(),
            applies_to_noun: false,
            applies_to_verb: true,
            compare_noun_priority: 0,
            transit_noun_priority: 0,
            compare_verb_priority: compare,
            transit_verb_priority: transit,
        }
    }

    /// Add verb applicability to a noun record (or vice versa).
    pub fn with_verb(mut self, compare: u8, transit: u8) -> Self {
        self.applies_to_verb = true;
        self.compare_verb_priority = compare;
        self.transit_verb_priority = transit;
        self
    }

    pub(crate) fn validate(&self, index: usize) -> Result<(), TrieError> {
        validate_suffix(&self.suffix, index)?;
        if !self.applies_to_noun && !self.applies_to_verb {
            return Err(TrieError::NoCategory {
                suffix: self.suffix.clone(),
            });
        }
        for value in [
            self.compare_noun_priority,
            self.transit_noun_priority,
            self.compare_verb_priority,
            self.transit_verb_priority,
        ] {
            if value > MAX_PRIORITY {
                return Err(TrieError::PriorityOutOfRange {
                    suffix: self.suffix.clone(),
                    value,
                    max: MAX_PRIORITY,
                });
            }
        }
        Ok(())
    }
}

/// One row of the derivational suffix table: the category the suffix
/// attaches to and the category of the stem it produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivationRecord {
    pub suffix: String,
    pub input: WordCategory,
    pub output: WordCategory,
}

impl DerivationRecord {
    pub fn new(suffix: &str, input: WordCategory, output: WordCategory) -> Self {
        Self {
            suffix: suffix.to_string(),
            input,
            output,
        }
    }

    pub(crate) fn validate(&self, index: usize) -> Result<(), TrieError> {
        validate_suffix(&self.suffix, index)
    }
}

fn validate_suffix(suffix: &str, index: usize) -> Result<(), TrieError> {
    if suffix.is_empty() {
        return Err(TrieError::EmptySuffix { index });
    }
    for ch in suffix.chars() {
        if !alphabet::is_turkish_letter(ch) {
            return Err(TrieError::NonAlphabetic {
                suffix: suffix.to_string(),
                ch,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn noun_constructor_sets_flags() {
        let rec = InflectionRecord::noun("lar", 1, 1);
        assert!(rec.applies_to_noun);
        assert!(!rec.applies_to_verb);
        assert_eq!(rec.compare_noun_priority, 1);
        assert_eq!(rec.transit_noun_priority, 1);
    }

    #[test]
    fn with_verb_extends_applicability() {
        let rec = InflectionRecord::noun("lar", 1, 1).with_verb(3, 3);
        assert!(rec.applies_to_noun);
        assert!(rec.applies_to_verb);
        assert_eq!(rec.transit_verb_priority, 3);
    }

    #[test]
    fn empty_suffix_is_rejected() {
        let rec = InflectionRecord::noun("", 1, 1);
        assert!(matches!(
            rec.validate(7),
            Err(TrieError::EmptySuffix { index: 7 })
        ));
    }

    #[test]
    fn non_alphabetic_suffix_is_rejected() {
        let rec = InflectionRecord::noun("l4r", 1, 1);
        assert!(matches!(
            rec.validate(0),
            Err(TrieError::NonAlphabetic { ch: '4', .. })
        ));
    }

    #[test]
    fn uncategorized_record_is_rejected() {
        let mut rec = InflectionRecord::noun("lar", 1, 1);
        rec.applies_to_noun = false;
        assert!(matches!(rec.validate(0), Err(TrieError::NoCategory { .. })));
    }

    #[test]
    fn priority_above_lattice_maximum_is_rejected() {
        let rec = InflectionRecord::noun("lar", 9, 1);
        assert!(matches!(
            rec.validate(0),
            Err(TrieError::PriorityOutOfRange { value: 9, .. })
        ));
    }

    #[test]
    fn derivation_record_validates_alphabet() {
        let ok = DerivationRecord::new("l\u{0131}k", WordCategory::Noun, WordCategory::Noun);
        assert!(ok.validate(0).is_ok());
        let bad = DerivationRecord::new("xyz", WordCategory::Noun, WordCategory::Noun);
        assert!(matches!(
            bad.validate(0),
            Err(TrieError::NonAlphabetic { ch: 'x', .. })
        ));
    }
}
