//! Prefix tree over phoneme sequences.
//!
//! Each node that ends a dictionary pronunciation carries the homophones
//! sharing that exact sequence, so a single forward walk from any offset of
//! a phrase finds every dictionary word that starts there.

use std::collections::HashMap;

use crate::types::Pronunciation;

#[derive(Debug, Clone, Default)]
struct TrieNode {
    children: HashMap<String, TrieNode>,
    /// Words pronounced exactly as the path to this node, in insertion order
    words: Vec<String>,
}

impl TrieNode {
    fn count(&self) -> usize {
        1 + self.children.values().map(TrieNode::count).sum::<usize>()
    }

    fn merge(&mut self, other: TrieNode) {
        for word in other.words {
            if !self.words.contains(&word) {
                self.words.push(word);
            }
        }
        for (phoneme, child) in other.children {
            self.children.entry(phoneme).or_default().merge(child);
        }
    }
}

/// A dictionary word ending `len` phonemes after the probe offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrieMatch<'a> {
    pub len: usize,
    pub words: &'a [String],
}

#[derive(Debug, Clone, Default)]
pub struct PhoneticTrie {
    root: TrieNode,
}

impl PhoneticTrie {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `word` to the homophone set at the end of `pronunciation`.
    ///
    /// An empty pronunciation has no node of its own and is ignored.
    pub fn insert(&mut self, pronunciation: &Pronunciation, word: &str) {
        if pronunciation.is_empty() {
            return;
        }
        let mut node = &mut self.root;
        for phoneme in pronunciation.phonemes() {
            node = node.children.entry(phoneme.clone()).or_default();
        }
        if !node.words.iter().any(|w| w == word) {
            node.words.push(word.to_string());
        }
    }

    /// Every dictionary pronunciation that is a prefix of `sequence[start..]`,
    /// shortest first.
    pub fn matches_from<'a, S: AsRef<str>>(&'a self, sequence: &[S], start: usize) -> Vec<TrieMatch<'a>> {
        let mut matches = Vec::new();
        let Some(rest) = sequence.get(start..) else {
            return matches;
        };

        let mut node = &self.root;
        for (i, phoneme) in rest.iter().enumerate() {
            match node.children.get(phoneme.as_ref()) {
                Some(child) => node = child,
                None => break,
            }
            if !node.words.is_empty() {
                matches.push(TrieMatch {
                    len: i + 1,
                    words: &node.words,
                });
            }
        }
        matches
    }

    /// Homophones of exactly `pronunciation`; empty if none.
    pub fn homophones(&self, pronunciation: &Pronunciation) -> &[String] {
        let mut node = &self.root;
        for phoneme in pronunciation.phonemes() {
            match node.children.get(phoneme) {
                Some(child) => node = child,
                None => return &[],
            }
        }
        &node.words
    }

    /// Fold another partial trie into this one, appending its homophones
    /// after ours.
    pub fn merge(&mut self, other: PhoneticTrie) {
        self.root.merge(other.root);
    }

    /// Number of nodes, root included.
    pub fn node_count(&self) -> usize {
        self.root.count()
    }
}
