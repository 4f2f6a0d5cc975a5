// Derivational suffix trie: a single reversed-suffix tree whose terminal
// nodes carry input/output category tags, searched with a deepest-match-first
// traversal that validates every boundary against the lexicon.

use hashbrown::HashMap;

use kokbul_core::analysis::{AnalysisSet, Candidate};
use kokbul_core::category::WordCategory;

use crate::rules;
use crate::table::DerivationRecord;
use crate::{Lexicon, MIN_STEM_CHARS, TrieError};

/// One character position in a reversed derivational suffix. `forms` is
/// `Some((input, output))` exactly on terminal nodes.
#[derive(Debug)]
struct Node {
    children: HashMap<char, Node>,
    forms: Option<(WordCategory, WordCategory)>,
}

impl Node {
    fn new() -> Self {
        Self {
            children: HashMap::new(),
            forms: None,
        }
    }

    fn insert(&mut self, suffix: &[char], input: WordCategory, output: WordCategory) {
        let mut node = self;
        for &ch in suffix.iter().rev() {
            node = node.children.entry(ch).or_insert_with(Node::new);
        }
        node.forms = Some((input, output));
    }
}

/// The derivational trie: built once from the derivational suffix table,
/// immutable afterwards.
#[derive(Debug)]
pub struct DerivationTrie {
    root: Node,
}

impl DerivationTrie {
    pub fn from_records(records: &[DerivationRecord]) -> Result<Self, TrieError> {
        let mut root = Node::new();
        for (index, rec) in records.iter().enumerate() {
            rec.validate(index)?;
            let chars: Vec<char> = rec.suffix.chars().collect();
            root.insert(&chars, rec.input, rec.output);
        }
        Ok(Self { root })
    }

    /// Strip zero or more derivational suffixes from `stem`, which arrives
    /// with the inflectional chain already accumulated in `chain`.
    ///
    /// The result contains only dictionary-validated decompositions: the
    /// stem itself when it is a known root, plus every boundary whose
    /// (possibly devoicing-repaired) remainder is a root of the category
    /// the suffix attaches to. Consecutive derivational layers must agree:
    /// an inner suffix's output category must match the outer suffix's
    /// input category.
    pub fn search<L: Lexicon>(&self, lexicon: &L, stem: &str, chain: &str) -> AnalysisSet {
        let mut out = AnalysisSet::new();
        if lexicon.contains_any(stem) {
            out.insert(Candidate::new(stem, chain));
        }
        let chars: Vec<char> = stem.chars().collect();
        if chars.len() >= MIN_STEM_CHARS {
            let n = chars.len();
            self.traverse(lexicon, &chars, &self.root, n, n, None, chain, &mut out);
        }
        out
    }

    /// Recursive traversal of one suffix segment.
    ///
    /// Returns whether a valid decomposition was found at this node or
    /// deeper; a deeper (longer-suffix) match subsumes the shorter boundary,
    /// which is then neither recorded nor restarted. Depth is bounded by the
    /// word length, so call-stack recursion is safe here.
    #[allow(clippy::too_many_arguments)]
    fn traverse<L: Lexicon>(
        &self,
        lexicon: &L,
        word: &[char],
        node: &Node,
        pos: usize,
        seg_end: usize,
        required: Option<WordCategory>,
        chain: &str,
        out: &mut AnalysisSet,
    ) -> bool {
        // Longer suffixes first; the stem may not shrink below the floor.
        let mut deeper = false;
        if pos > MIN_STEM_CHARS {
            if let Some(child) = node.children.get(&word[pos - 1]) {
                deeper = self.traverse(lexicon, word, child, pos - 1, seg_end, required, chain, out);
            }
        }

        let Some((input, output)) = node.forms else {
            return deeper;
        };
        if let Some(required) = required {
            if output != required {
                return deeper;
            }
        }
        if deeper {
            return true;
        }

        // Boundary: the segment matched so far is a complete suffix.
        let stem = &word[..pos];
        let stem_str: String = stem.iter().collect();
        let segment: String = word[pos..seg_end].iter().collect();
        let boundary_chain = format!("-{}{}", segment, chain);

        let root_form = if lexicon.contains(&stem_str, input) {
            Some(stem_str)
        } else {
            rules::devoicing_repair(stem).filter(|repaired| lexicon.contains(repaired, input))
        };
        let recorded = root_form.is_some();
        if let Some(root) = root_form {
            out.insert(Candidate::new(root, &boundary_chain));
        }

        // Stack another derivational layer: the stem beneath this suffix
        // must produce the category this suffix attaches to.
        let restarted = self.traverse(
            lexicon,
            word,
            &self.root,
            pos,
            pos,
            Some(input),
            &boundary_chain,
            out,
        );
        recorded || restarted
    }
}
