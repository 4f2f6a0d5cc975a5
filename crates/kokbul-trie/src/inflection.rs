// Inflectional suffix trie: three reversed-suffix trees (noun, verb,
// category-neutral) and the priority-gated backtracking search that strips
// zero or more inflectional suffixes from the end of a word.

use std::collections::BTreeSet;

use hashbrown::HashMap;

use kokbul_core::alphabet::{self, Harmony};

use crate::rules::{self, NARROWING_PRIORITY_CEILING};
use crate::table::InflectionRecord;
use crate::{MIN_STEM_CHARS, TrieError};

/// Initial priority ceiling for the neutral and noun passes.
const OUTER_CEILING: u8 = 8;

/// Initial priority ceiling for the verb pass.
const VERB_CEILING: u8 = 5;

/// Transit ceiling for insertion into the noun tree.
const NOUN_TRANSIT_CEILING: u8 = 6;

/// Transit ceiling for insertion into the verb tree; records above it are
/// category-neutral and go to the common tree instead.
const VERB_TRANSIT_CEILING: u8 = 2;

/// Pinned priority class for category-neutral suffixes.
const NEUTRAL_PRIORITY: u8 = 6;

/// Pinned priority class for the outermost category-neutral suffixes.
const NEUTRAL_OUTERMOST_PRIORITY: u8 = 7;

/// One character position in a reversed suffix.
///
/// Priority values and applicability flags are meaningful only on terminal
/// nodes. `harmony` is set when the suffix begins with a vowel and selects
/// the epenthesis vowels for elision repair.
#[derive(Debug)]
struct Node {
    children: HashMap<char, Node>,
    terminal: bool,
    applies_to_noun: bool,
    applies_to_verb: bool,
    compare_priority: u8,
    transit_priority: u8,
    harmony: Option<Harmony>,
}

impl Node {
    fn new() -> Self {
        Self {
            children: HashMap::new(),
            terminal: false,
            applies_to_noun: false,
            applies_to_verb: false,
            compare_priority: 0,
            transit_priority: 0,
            harmony: None,
        }
    }

    /// Insert `suffix` below this root in reverse character order and mark
    /// the terminal node. A later record with the same surface merges its
    /// applicability flags and overwrites the priorities (ordered load,
    /// last record wins).
    fn insert(&mut self, suffix: &[char], noun: bool, verb: bool, compare: u8, transit: u8) {
        let mut node = self;
        for &ch in suffix.iter().rev() {
            node = node.children.entry(ch).or_insert_with(Node::new);
        }
        node.terminal = true;
        node.applies_to_noun |= noun;
        node.applies_to_verb |= verb;
        node.compare_priority = compare;
        node.transit_priority = transit;
        node.harmony = alphabet::vowel_harmony(suffix[0]);
    }
}

/// A pending traversal state: one node of one tree, a position in the word,
/// and the ordering context accumulated so far.
struct Frame<'t> {
    node: &'t Node,
    /// Number of word characters still unconsumed; the candidate stem at
    /// this frame is `word[..pos]`.
    pos: usize,
    /// Word index (exclusive) where the suffix segment being matched ends.
    seg_end: usize,
    /// Active priority ceiling; only suffixes strictly below it may match.
    ceiling: u8,
    /// Suffix chain stripped outward of the current segment.
    chain: String,
}

/// The inflectional trie: independent noun, verb, and category-neutral
/// trees built once from the suffix table and immutable afterwards.
#[derive(Debug)]
pub struct InflectionTrie {
    noun: Node,
    verb: Node,
    common: Node,
}

impl InflectionTrie {
    /// Build the three trees from an ordered suffix table.
    ///
    /// Bucketing rules:
    /// - noun tree: noun-applicable records whose transit class is within
    ///   the noun ceiling (or whose compare class is below it); the stored
    ///   transit is capped at the ceiling;
    /// - verb tree: verb-applicable records with transit class ≤ 2;
    /// - common tree: records whose noun class reaches the neutral class, or
    ///   whose verb transit exceeds the verb ceiling, re-inserted with both
    ///   applicability flags and priority pinned to 6 (7 for the outermost
    ///   class). These are the suffixes that may follow a fully inflected
    ///   stem of either category.
    pub fn from_records(records: &[InflectionRecord]) -> Result<Self, TrieError> {
        let mut trie = Self {
            noun: Node::new(),
            verb: Node::new(),
            common: Node::new(),
        };
        for (index, rec) in records.iter().enumerate() {
            rec.validate(index)?;
            let chars: Vec<char> = rec.suffix.chars().collect();

            if rec.applies_to_noun
                && (rec.transit_noun_priority <= NOUN_TRANSIT_CEILING
                    || rec.compare_noun_priority < NOUN_TRANSIT_CEILING)
            {
                let transit = rec.transit_noun_priority.min(NOUN_TRANSIT_CEILING);
                trie.noun
                    .insert(&chars, true, false, rec.compare_noun_priority, transit);
            }

            if rec.applies_to_verb && rec.transit_verb_priority <= VERB_TRANSIT_CEILING {
                trie.verb.insert(
                    &chars,
                    false,
                    true,
                    rec.compare_verb_priority,
                    rec.transit_verb_priority,
                );
            }

            let neutral_as_noun = rec.applies_to_noun && rec.compare_noun_priority >= NEUTRAL_PRIORITY;
            let neutral_as_verb = rec.applies_to_verb && rec.transit_verb_priority > VERB_TRANSIT_CEILING;
            if neutral_as_noun || neutral_as_verb {
                let pinned = if rec.compare_noun_priority >= NEUTRAL_OUTERMOST_PRIORITY {
                    NEUTRAL_OUTERMOST_PRIORITY
                } else {
                    NEUTRAL_PRIORITY
                };
                trie.common.insert(&chars, true, true, pinned, pinned);
            }
        }
        Ok(trie)
    }

    /// Strip zero or more inflectional suffixes from `word`.
    ///
    /// Returns every (stem, suffix-chain) pair reachable under the priority
    /// ordering, including the zero-suffix pair and every phonological
    /// repair variant. Stems are not dictionary-validated here; the
    /// derivational stage performs all lexicon lookups.
    pub fn search(&self, word: &str) -> BTreeSet<(String, String)> {
        let chars: Vec<char> = word.chars().collect();

        // Outer pass: category-neutral suffixes first. The preprocessed set
        // (seeded with the word itself) feeds the category-specific passes
        // and is part of the result.
        let mut preprocessed: Vec<(String, String)> = vec![(word.to_string(), String::new())];
        traverse(&self.common, &chars, "", OUTER_CEILING, &mut preprocessed);

        let mut results: BTreeSet<(String, String)> = BTreeSet::new();
        for (stem, chain) in preprocessed {
            let stem_chars: Vec<char> = stem.chars().collect();
            let mut sink = Vec::new();
            traverse(&self.noun, &stem_chars, &chain, OUTER_CEILING, &mut sink);
            traverse(&self.verb, &stem_chars, &chain, VERB_CEILING, &mut sink);
            results.insert((stem, chain));
            results.extend(sink);
        }
        results
    }
}

/// Priority-gated backtracking traversal over one tree.
///
/// Modeled as an explicit work-list of frames instead of call-stack
/// recursion: each frame either extends its suffix segment by one tail
/// character, or (on a qualifying terminal node) emits the candidate stem
/// with its repairs and pushes a single restart frame at the tree root with
/// a non-increasing ceiling. Every restart consumes at least one character
/// since the last one and never raises the ceiling, so the work-list drains.
fn traverse(
    root: &Node,
    word: &[char],
    outer_chain: &str,
    ceiling: u8,
    sink: &mut Vec<(String, String)>,
) {
    let mut stack = vec![Frame {
        node: root,
        pos: word.len(),
        seg_end: word.len(),
        ceiling,
        chain: outer_chain.to_string(),
    }];

    while let Some(frame) = stack.pop() {
        // Minimum stem floor: never strip the word below two characters.
        if frame.pos < MIN_STEM_CHARS {
            continue;
        }

        if frame.node.terminal && frame.node.compare_priority < frame.ceiling {
            let stem = &word[..frame.pos];
            let segment: String = word[frame.pos..frame.seg_end].iter().collect();
            let chain = format!("-{}{}", segment, frame.chain);

            sink.push((stem.iter().collect(), chain.clone()));
            for variant in boundary_repairs(frame.node, stem) {
                sink.push((variant, chain.clone()));
            }

            // Chain boundary: one restart from the root for the next suffix
            // inward. The ceiling passed down is the transit class, except
            // that a transit at or above the active ceiling falls back to
            // the compare class (when positive) so the ordering stays
            // non-increasing across chained suffixes.
            let next_ceiling = if frame.node.transit_priority >= frame.ceiling
                && frame.node.compare_priority > 0
            {
                frame.node.compare_priority
            } else {
                frame.node.transit_priority
            };
            stack.push(Frame {
                node: root,
                pos: frame.pos,
                seg_end: frame.pos,
                ceiling: next_ceiling,
                chain,
            });
        }

        // Extend the current segment by the next character of the tail.
        if let Some(child) = frame.node.children.get(&word[frame.pos - 1]) {
            stack.push(Frame {
                node: child,
                pos: frame.pos - 1,
                seg_end: frame.seg_end,
                ceiling: frame.ceiling,
                chain: frame.chain,
            });
        }
    }
}

/// Phonological repair variants for a stem at a suffix boundary, per the
/// matched suffix's applicability.
fn boundary_repairs(node: &Node, stem: &[char]) -> Vec<String> {
    let mut variants = Vec::new();
    if node.applies_to_noun {
        if let Some(devoiced) = rules::devoicing_repair(stem) {
            variants.push(devoiced);
        }
        if let Some(harmony) = node.harmony {
            variants.extend(rules::elision_repairs(stem, harmony));
        }
    }
    if node.applies_to_verb && node.compare_priority <= NARROWING_PRIORITY_CEILING {
        if let Some(widened) = rules::narrowing_repair(stem) {
            variants.push(widened);
        }
    }
    variants
}
