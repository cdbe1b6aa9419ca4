//! Segmentation map: every dictionary word span reachable from the start of
//! a phoneme sequence.
//!
//! Breakdown of `AH M EY Z IH NG` ("amazing"):
//!
//! ```text
//! offset 0: len 1 -> [a, uh]   len 4 -> [amaze]
//! offset 1: len 3 -> [maze, maize]
//! offset 4: len 2 -> [ing]
//! ```

use std::collections::{BTreeMap, BTreeSet};

use crate::lexicon::{PhoneticTrie, TrieMatch};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentationMap<'a> {
    len: usize,
    /// Offset -> matches starting there, shortest first. Offsets that were
    /// reached but had no match are present with an empty list.
    spans: BTreeMap<usize, Vec<TrieMatch<'a>>>,
}

impl<'a> SegmentationMap<'a> {
    /// Probe the trie at offset 0 and then at every offset where a match
    /// ends, each offset at most once.
    pub fn build<S: AsRef<str>>(trie: &'a PhoneticTrie, sequence: &[S]) -> SegmentationMap<'a> {
        let len = sequence.len();
        let mut spans = BTreeMap::new();
        if len == 0 {
            return SegmentationMap { len, spans };
        }

        let mut pending = BTreeSet::from([0usize]);
        while let Some(offset) = pending.pop_first() {
            let matches = trie.matches_from(sequence, offset);
            for m in &matches {
                let end = offset + m.len;
                if end < len && !spans.contains_key(&end) {
                    pending.insert(end);
                }
            }
            spans.insert(offset, matches);
        }

        log::debug!(
            "Segmented {} phonemes: {} reachable offsets, {} spans",
            len,
            spans.len(),
            spans.values().map(Vec::len).sum::<usize>()
        );
        SegmentationMap { len, spans }
    }

    /// Length of the segmented sequence.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Matches starting at `offset`; empty for dead ends and unreached offsets.
    pub fn spans_at(&self, offset: usize) -> &[TrieMatch<'a>] {
        self.spans.get(&offset).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Reached offsets in increasing order.
    pub fn offsets(&self) -> impl Iterator<Item = usize> + '_ {
        self.spans.keys().copied()
    }

    /// For each offset `0..=len`, whether some chain of matches from it ends
    /// exactly at `len`.
    pub fn completable(&self) -> Vec<bool> {
        let mut done = vec![false; self.len + 1];
        done[self.len] = true;
        for (&offset, matches) in self.spans.iter().rev() {
            done[offset] = matches.iter().any(|m| done[offset + m.len]);
        }
        done
    }

    /// Whether at least one heterograph covers the whole sequence.
    pub fn is_complete(&self) -> bool {
        self.len > 0 && self.completable()[0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Pronunciation;

    fn trie(entries: &[(&str, &str)]) -> PhoneticTrie {
        let mut trie = PhoneticTrie::new();
        for (word, pron) in entries {
            let pron: Pronunciation = pron.parse().unwrap();
            trie.insert(&pron, word);
        }
        trie
    }

    fn seq(s: &str) -> Vec<&str> {
        s.split_whitespace().collect()
    }

    fn lens(map: &SegmentationMap<'_>, offset: usize) -> Vec<usize> {
        map.spans_at(offset).iter().map(|m| m.len).collect()
    }

    #[test]
    fn test_amaze_segmentation() {
        let trie = trie(&[("a", "AH"), ("maze", "M EY Z"), ("amaze", "AH M EY Z")]);
        let sequence = seq("AH M EY Z");
        let map = SegmentationMap::build(&trie, &sequence);

        assert_eq!(lens(&map, 0), vec![1, 4]);
        assert_eq!(map.spans_at(0)[0].words, ["a"]);
        assert_eq!(map.spans_at(0)[1].words, ["amaze"]);
        assert_eq!(lens(&map, 1), vec![3]);
        assert_eq!(map.spans_at(1)[0].words, ["maze"]);
        assert_eq!(map.offsets().collect::<Vec<_>>(), vec![0, 1]);
        assert!(map.is_complete());
    }

    #[test]
    fn test_only_reachable_offsets() {
        let trie = trie(&[("a", "AH"), ("eh", "EY"), ("z", "Z")]);
        // offset 2 ("EY") would match but is not reachable from 0
        let sequence = seq("AH M EY Z");
        let map = SegmentationMap::build(&trie, &sequence);
        assert_eq!(map.offsets().collect::<Vec<_>>(), vec![0, 1]);
        assert!(map.spans_at(1).is_empty());
        assert!(map.spans_at(2).is_empty());
        assert!(!map.is_complete());
    }

    #[test]
    fn test_offsets_visited_once() {
        let trie = trie(&[("a", "AH"), ("ah", "AH AH")]);
        let sequence = seq("AH AH AH AH");
        let map = SegmentationMap::build(&trie, &sequence);
        assert_eq!(map.offsets().collect::<Vec<_>>(), vec![0, 1, 2, 3]);
        assert_eq!(lens(&map, 2), vec![1, 2]);
        assert_eq!(lens(&map, 3), vec![1]);
    }

    #[test]
    fn test_completable() {
        let trie = trie(&[("a", "AH"), ("am", "AH M"), ("maze", "M EY Z")]);
        let sequence = seq("AH M EY Z");
        let map = SegmentationMap::build(&trie, &sequence);
        // "am" leads to offset 2, a dead end
        assert_eq!(map.completable(), vec![true, true, false, false, true]);
    }

    #[test]
    fn test_empty_sequence() {
        let trie = trie(&[("a", "AH")]);
        let sequence: Vec<&str> = Vec::new();
        let map = SegmentationMap::build(&trie, &sequence);
        assert!(map.is_empty());
        assert_eq!(map.offsets().count(), 0);
        assert!(!map.is_complete());
    }
}
