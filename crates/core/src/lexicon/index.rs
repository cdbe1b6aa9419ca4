//! Word -> pronunciations lookup.

use std::collections::HashMap;

use crate::types::Pronunciation;

/// Every distinct pronunciation of every dictionary word.
///
/// Pronunciations are kept in dictionary order. Two entries that collapse to
/// the same phoneme sequence once stress is stripped are stored once.
#[derive(Debug, Clone, Default)]
pub struct PronunciationIndex {
    words: HashMap<String, Vec<Pronunciation>>,
}

impl PronunciationIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, word: &str, pronunciation: &Pronunciation) {
        match self.words.get_mut(word) {
            Some(existing) => {
                if !existing.contains(pronunciation) {
                    existing.push(pronunciation.clone());
                }
            }
            None => {
                self.words.insert(word.to_string(), vec![pronunciation.clone()]);
            }
        }
    }

    /// All pronunciations of `word`; empty if the word is unknown.
    pub fn lookup(&self, word: &str) -> &[Pronunciation] {
        self.words.get(word).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains_key(word)
    }

    /// Fold another partial index into this one. `other`'s pronunciations
    /// land after ours, so merging shards in order matches a sequential build.
    pub fn merge(&mut self, other: PronunciationIndex) {
        for (word, pronunciations) in other.words {
            for p in &pronunciations {
                self.insert(&word, p);
            }
        }
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    pub fn pronunciation_count(&self) -> usize {
        self.words.values().map(Vec::len).sum()
    }
}
