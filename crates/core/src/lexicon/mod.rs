//! The immutable lexicon every query runs against.
//!
//! A [`Lexicon`] pairs the word -> pronunciation index with the phonetic trie.
//! It is built once per dictionary snapshot and only read afterwards, so it
//! can be shared between threads behind a plain `&` or an `Arc`.

pub mod index;
pub mod trie;

use rayon::prelude::*;
use serde::Serialize;

use crate::error::ParseError;
use crate::language::dictionary;
use crate::types::DictionaryEntry;

pub use index::PronunciationIndex;
pub use trie::{PhoneticTrie, TrieMatch};

#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    index: PronunciationIndex,
    trie: PhoneticTrie,
}

/// Size summary, for logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LexiconStats {
    pub words: usize,
    pub pronunciations: usize,
    pub trie_nodes: usize,
}

impl Lexicon {
    /// Parse dictionary text and build a lexicon from the lines that parsed.
    pub fn parse(text: &str) -> (Lexicon, Vec<ParseError>) {
        let parsed = dictionary::parse(text);
        (Lexicon::from_entries(&parsed.entries), parsed.diagnostics)
    }

    pub fn from_entries(entries: &[DictionaryEntry]) -> Lexicon {
        let mut lexicon = Lexicon::default();
        for entry in entries {
            lexicon.insert(entry);
        }
        lexicon
    }

    /// Build partial lexicons over `shards` chunks in parallel and merge them.
    ///
    /// Chunks are merged left to right, so the result is identical to
    /// [`Lexicon::from_entries`] on the same entries.
    pub fn from_entries_parallel(entries: &[DictionaryEntry], shards: usize) -> Lexicon {
        if entries.is_empty() {
            return Lexicon::default();
        }
        let chunk_size = entries.len().div_ceil(shards.max(1));
        entries
            .par_chunks(chunk_size)
            .map(Lexicon::from_entries)
            .reduce(Lexicon::default, |mut left, right| {
                left.merge(right);
                left
            })
    }

    fn insert(&mut self, entry: &DictionaryEntry) {
        self.index.insert(&entry.word, &entry.pronunciation);
        self.trie.insert(&entry.pronunciation, &entry.word);
    }

    pub fn merge(&mut self, other: Lexicon) {
        self.index.merge(other.index);
        self.trie.merge(other.trie);
    }

    pub fn index(&self) -> &PronunciationIndex {
        &self.index
    }

    pub fn trie(&self) -> &PhoneticTrie {
        &self.trie
    }

    pub fn stats(&self) -> LexiconStats {
        LexiconStats {
            words: self.index.word_count(),
            pronunciations: self.index.pronunciation_count(),
            trie_nodes: self.trie.node_count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Pronunciation;

    const DICT: &str = "\
sow S AW1
sow(2) S OW1
sew S OW1
so S OW1
a AH0
a(2) EY1
maze M EY1 Z
maize M EY1 Z
amaze AH0 M EY1 Z
broken
";

    #[test]
    fn test_parse_builds_both_halves() {
        let (lexicon, diagnostics) = Lexicon::parse(DICT);
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(lexicon.index().lookup("sow").len(), 2);
        let so: Pronunciation = "S OW".parse().unwrap();
        assert_eq!(lexicon.trie().homophones(&so), ["sow", "sew", "so"]);
    }

    #[test]
    fn test_stress_variants_collapse() {
        let (lexicon, _) = Lexicon::parse("either IY1 DH ER0\neither(2) IY0 DH ER0\n");
        assert_eq!(lexicon.index().lookup("either").len(), 1);
    }

    #[test]
    fn test_stats() {
        let (lexicon, _) = Lexicon::parse(DICT);
        let stats = lexicon.stats();
        assert_eq!(stats.words, 7);
        assert_eq!(stats.pronunciations, 9);
        assert!(stats.trie_nodes > 1);
    }

    #[test]
    fn test_parallel_build_matches_sequential() {
        let parsed = dictionary::parse(DICT);
        let sequential = Lexicon::from_entries(&parsed.entries);
        for shards in [1, 2, 3, 16] {
            let parallel = Lexicon::from_entries_parallel(&parsed.entries, shards);
            assert_eq!(parallel.stats(), sequential.stats());
            for word in ["sow", "a", "maze", "amaze"] {
                assert_eq!(parallel.index().lookup(word), sequential.index().lookup(word));
            }
            let so: Pronunciation = "S OW".parse().unwrap();
            assert_eq!(parallel.trie().homophones(&so), sequential.trie().homophones(&so));
        }
    }

    #[test]
    fn test_parallel_build_empty() {
        let lexicon = Lexicon::from_entries_parallel(&[], 4);
        assert_eq!(lexicon.stats().words, 0);
    }
}
