// Built-in Turkish suffix tables and the tab-separated table-file parsers.
//
// The built-in tables cover the productive core of Turkish inflection and
// derivation; applications with larger inventories can load their own
// tables with `parse_inflection_table` / `parse_derivation_table` and pass
// them to `TurkishAnalyzer::with_tables`.

use kokbul_core::category::WordCategory;
use kokbul_trie::table::{DerivationRecord, InflectionRecord};

/// Error type for suffix table files.
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    #[error("line {line}: expected {expected} tab-separated fields, got {got}")]
    FieldCount {
        line: usize,
        expected: usize,
        got: usize,
    },
    #[error("line {line}: flag field must be 0 or 1, got {value:?}")]
    Flag { line: usize, value: String },
    #[error("line {line}: priority field {value:?} is not a number")]
    Priority { line: usize, value: String },
    #[error("line {line}: unknown word category {value:?}")]
    Category { line: usize, value: String },
}

/// The built-in inflectional suffix table.
///
/// Priorities encode attachment order: lower classes sit closer to the
/// root. Class 1 is number, class 2 possession, class 3 case, and the
/// copular and person endings occupy the outer classes. Buffer-consonant
/// variants (y-, n-, s-) are listed as separate surface forms.
pub fn default_inflection_records() -> Vec<InflectionRecord> {
    let mut records = Vec::new();

    // Plural: innermost on nouns, a person marker on finite verbs.
    for s in ["lar", "ler"] {
        records.push(InflectionRecord::noun(s, 1, 1).with_verb(3, 3));
    }

    // Possessive, first person singular; doubles as a verb person ending.
    for s in ["ım", "im", "um", "üm"] {
        records.push(InflectionRecord::noun(s, 2, 2).with_verb(3, 3));
    }
    // Remaining possessives.
    for s in [
        "ın", "in", "un", "ün", // 2sg
        "ı", "i", "u", "ü", // 3sg after consonant
        "sı", "si", "su", "sü", // 3sg after vowel
        "ımız", "imiz", "umuz", "ümüz", // 1pl
        "ınız", "iniz", "unuz", "ünüz", // 2pl
        "ları", "leri", // 3pl
    ] {
        records.push(InflectionRecord::noun(s, 2, 2));
    }

    // Case endings, including the buffered forms used after possessives.
    for s in [
        "a", "e", "ya", "ye", // dative
        "yı", "yi", "yu", "yü", // accusative after vowel
        "da", "de", "ta", "te", "nda", "nde", // locative
        "dan", "den", "tan", "ten", "ndan", "nden", // ablative
        "nın", "nin", "nun", "nün", // genitive
        "nı", "ni", "nu", "nü", // accusative after possessive
        "na", "ne", // dative after possessive
        "la", "le", "yla", "yle", // instrumental
    ] {
        records.push(InflectionRecord::noun(s, 3, 3));
    }

    // Relativizer -ki sits outside case.
    records.push(InflectionRecord::noun("ki", 4, 4));

    // Copular -DIr: outermost, and it may follow any nominal layer.
    for s in ["dır", "dir", "dur", "dür", "tır", "tir", "tur", "tür"] {
        records.push(InflectionRecord::noun(s, 7, 7));
    }

    // Nominal person endings ("evdeyim", "öğrencisin").
    for s in [
        "sın", "sin", "sun", "sün", // 2sg
        "yım", "yim", "yum", "yüm", // 1sg after vowel
        "yız", "yiz", "yuz", "yüz", // 1pl
        "sınız", "siniz", "sunuz", "sünüz", // 2pl
    ] {
        records.push(InflectionRecord::noun(s, 6, 6));
    }

    // Conditional -sA attaches to nominals and to tensed verb forms.
    for s in ["sa", "se"] {
        records.push(InflectionRecord::noun(s, 6, 6).with_verb(3, 3));
    }

    // Verb person endings after tense; shared across tense classes.
    for s in ["m", "n", "k", "nız", "niz", "nuz", "nüz"] {
        records.push(InflectionRecord::verb(s, 3, 3));
    }

    // Verbal negation is innermost.
    for s in ["ma", "me"] {
        records.push(InflectionRecord::verb(s, 1, 1));
    }

    // Progressive -(I)yor: the narrowing-triggering tense.
    records.push(InflectionRecord::verb("yor", 1, 2));
    for s in ["ıyor", "iyor", "uyor", "üyor"] {
        records.push(InflectionRecord::verb(s, 1, 2));
    }

    // Simple tenses and moods.
    for s in [
        "dı", "di", "du", "dü", "tı", "ti", "tu", "tü", // past
        "mış", "miş", "muş", "müş", // evidential
        "acak", "ecek", "yacak", "yecek", // future
        "ar", "er", "ır", "ir", "ur", "ür", // aorist
        "maz", "mez", // negative aorist
        "malı", "meli", // necessitative
    ] {
        records.push(InflectionRecord::verb(s, 2, 2));
    }

    // Infinitive -mAk closes the verb form.
    for s in ["mak", "mek"] {
        records.push(InflectionRecord::verb(s, 4, 2));
    }

    records
}

/// The built-in derivational suffix table.
pub fn default_derivation_records() -> Vec<DerivationRecord> {
    use WordCategory::{Noun, Verb};

    let mut records = Vec::new();

    // Noun-to-noun.
    for s in ["lı", "li", "lu", "lü"] {
        records.push(DerivationRecord::new(s, Noun, Noun)); // "with"
    }
    for s in ["sız", "siz", "suz", "süz"] {
        records.push(DerivationRecord::new(s, Noun, Noun)); // "without"
    }
    for s in ["lık", "lik", "luk", "lük"] {
        records.push(DerivationRecord::new(s, Noun, Noun)); // abstraction
    }
    for s in ["cı", "ci", "cu", "cü", "çı", "çi", "çu", "çü"] {
        records.push(DerivationRecord::new(s, Noun, Noun)); // agent
    }
    for s in ["cık", "cik", "cuk", "cük"] {
        records.push(DerivationRecord::new(s, Noun, Noun)); // diminutive
    }
    for s in ["ca", "ce", "ça", "çe"] {
        records.push(DerivationRecord::new(s, Noun, Noun)); // adverbial
    }

    // Noun-to-verb.
    for s in ["la", "le"] {
        records.push(DerivationRecord::new(s, Noun, Verb));
    }
    for s in ["lan", "len", "laş", "leş"] {
        records.push(DerivationRecord::new(s, Noun, Verb));
    }

    // Verb-to-noun.
    for s in ["gı", "gi", "gu", "gü"] {
        records.push(DerivationRecord::new(s, Verb, Noun));
    }
    for s in ["gın", "gin", "gun", "gün"] {
        records.push(DerivationRecord::new(s, Verb, Noun));
    }
    for s in ["ım", "im", "um", "üm"] {
        records.push(DerivationRecord::new(s, Verb, Noun));
    }
    for s in ["ış", "iş", "uş", "üş"] {
        records.push(DerivationRecord::new(s, Verb, Noun));
    }
    for s in ["ıcı", "ici", "ucu", "ücü"] {
        records.push(DerivationRecord::new(s, Verb, Noun));
    }
    for s in ["ıntı", "inti", "untu", "üntü"] {
        records.push(DerivationRecord::new(s, Verb, Noun));
    }

    // Verb-to-verb voice suffixes.
    for s in ["dır", "dir", "dur", "dür", "tır", "tir", "tur", "tür"] {
        records.push(DerivationRecord::new(s, Verb, Verb)); // causative
    }
    for s in ["ıl", "il", "ul", "ül"] {
        records.push(DerivationRecord::new(s, Verb, Verb)); // passive
    }

    records
}

// --- Table-file parsing ---------------------------------------------------

fn split_fields(line: &str) -> Vec<&str> {
    line.split('\t').map(str::trim).collect()
}

fn parse_flag(field: &str, line: usize) -> Result<bool, TableError> {
    match field {
        "0" => Ok(false),
        "1" => Ok(true),
        _ => Err(TableError::Flag {
            line,
            value: field.to_string(),
        }),
    }
}

fn parse_priority(field: &str, line: usize) -> Result<u8, TableError> {
    field.parse().map_err(|_| TableError::Priority {
        line,
        value: field.to_string(),
    })
}

fn parse_category(field: &str, line: usize) -> Result<WordCategory, TableError> {
    WordCategory::from_str_opt(field).ok_or_else(|| TableError::Category {
        line,
        value: field.to_string(),
    })
}

/// Parse an inflectional suffix table.
///
/// One record per line, seven tab-separated fields:
/// `suffix  noun-flag  verb-flag  compare-noun  transit-noun
/// compare-verb  transit-verb`. Blank lines and `#` comments are skipped.
/// Suffix and priority semantics are validated later, when the records are
/// turned into a trie.
pub fn parse_inflection_table(text: &str) -> Result<Vec<InflectionRecord>, TableError> {
    let mut records = Vec::new();
    for (idx, raw) in text.lines().enumerate() {
        let line = idx + 1;
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let fields = split_fields(trimmed);
        if fields.len() != 7 {
            return Err(TableError::FieldCount {
                line,
                expected: 7,
                got: fields.len(),
            });
        }
        records.push(InflectionRecord {
            suffix: fields[0].to_string(),
            applies_to_noun: parse_flag(fields[1], line)?,
            applies_to_verb: parse_flag(fields[2], line)?,
            compare_noun_priority: parse_priority(fields[3], line)?,
            transit_noun_priority: parse_priority(fields[4], line)?,
            compare_verb_priority: parse_priority(fields[5], line)?,
            transit_verb_priority: parse_priority(fields[6], line)?,
        });
    }
    Ok(records)
}

/// Parse a derivational suffix table.
///
/// One record per line, three tab-separated fields:
/// `suffix  input-category  output-category`.
pub fn parse_derivation_table(text: &str) -> Result<Vec<DerivationRecord>, TableError> {
    let mut records = Vec::new();
    for (idx, raw) in text.lines().enumerate() {
        let line = idx + 1;
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let fields = split_fields(trimmed);
        if fields.len() != 3 {
            return Err(TableError::FieldCount {
                line,
                expected: 3,
                got: fields.len(),
            });
        }
        records.push(DerivationRecord::new(
            fields[0],
            parse_category(fields[1], line)?,
            parse_category(fields[2], line)?,
        ));
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use kokbul_trie::{DerivationTrie, InflectionTrie};

    #[test]
    fn default_tables_build_cleanly() {
        InflectionTrie::from_records(&default_inflection_records()).unwrap();
        DerivationTrie::from_records(&default_derivation_records()).unwrap();
    }

    #[test]
    fn default_inflections_cover_all_harmony_variants() {
        let records = default_inflection_records();
        let has = |s: &str| records.iter().any(|r| r.suffix == s);
        for s in ["lar", "ler", "da", "de", "ta", "te", "dı", "tü", "müş"] {
            assert!(has(s), "missing suffix {s:?}");
        }
    }

    #[test]
    fn parse_inflection_roundtrip() {
        let text = "# plural\nlar\t1\t1\t1\t1\t3\t3\n\nde\t1\t0\t3\t3\t0\t0\n";
        let records = parse_inflection_table(text).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].suffix, "lar");
        assert!(records[0].applies_to_verb);
        assert_eq!(records[0].compare_verb_priority, 3);
        assert!(!records[1].applies_to_verb);
    }

    #[test]
    fn parse_inflection_rejects_short_lines() {
        let err = parse_inflection_table("lar\t1\t1\t1\n").unwrap_err();
        match err {
            TableError::FieldCount {
                line,
                expected,
                got,
            } => {
                assert_eq!(line, 1);
                assert_eq!(expected, 7);
                assert_eq!(got, 4);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn parse_inflection_rejects_bad_flag() {
        let err = parse_inflection_table("lar\t2\t1\t1\t1\t3\t3\n").unwrap_err();
        assert!(matches!(err, TableError::Flag { line: 1, .. }));
    }

    #[test]
    fn parse_derivation_roundtrip() {
        let text = "lık\tnoun\tnoun\ngi\tverb\tnoun\n";
        let records = parse_derivation_table(text).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].input, WordCategory::Verb);
        assert_eq!(records[1].output, WordCategory::Noun);
    }

    #[test]
    fn parse_derivation_rejects_unknown_category() {
        let err = parse_derivation_table("lık\tnoun\tadjective\n").unwrap_err();
        assert!(matches!(err, TableError::Category { line: 1, .. }));
    }
}
