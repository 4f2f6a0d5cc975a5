// Lexical category tags shared by the lexicon and the suffix tables.

/// Grammatical category of a root or stem.
///
/// The lexicon is partitioned into these two sets, and derivational suffixes
/// are tagged with the category they attach to and the category they produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WordCategory {
    Noun,
    Verb,
}

impl WordCategory {
    /// Stable lowercase name, used in table files and CLI output.
    pub fn as_str(self) -> &'static str {
        match self {
            WordCategory::Noun => "noun",
            WordCategory::Verb => "verb",
        }
    }

    /// Parse a category name as written in derivational table files.
    pub fn from_str_opt(s: &str) -> Option<Self> {
        match s {
            "noun" => Some(WordCategory::Noun),
            "verb" => Some(WordCategory::Verb),
            _ => None,
        }
    }
}

impl std::fmt::Display for WordCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
