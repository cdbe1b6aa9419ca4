//! Heterograph search: phrase -> pronunciations -> segmentation -> phrases.

pub mod enumerate;
pub mod phrase;
pub mod segment;

use rayon::prelude::*;
use serde::Serialize;

use crate::error::Result;
use crate::lexicon::Lexicon;
use crate::types::{Pronunciation, QueryLimits};

pub use enumerate::{enumerate_heterographs, Heterographs};
pub use phrase::{phrase_pronunciations, PhrasePronunciations};
pub use segment::SegmentationMap;

/// Heterographs of one full-phrase pronunciation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeterographSet {
    pub pronunciation: Pronunciation,
    pub heterographs: Vec<String>,
}

/// Result of a whole-phrase query.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct QueryResult {
    pub words: Vec<String>,
    /// Every full-phrase pronunciation, whether or not it was searched
    pub pronunciations: Vec<Pronunciation>,
    pub sets: Vec<HeterographSet>,
    /// Non-leading words missing from the dictionary
    pub unknown_words: Vec<String>,
}

/// Heterographs of a single phoneme sequence.
pub fn heterographs_of(lexicon: &Lexicon, sequence: &Pronunciation, limit: usize) -> Result<Vec<String>> {
    let map = SegmentationMap::build(lexicon.trie(), sequence.phonemes());
    enumerate_heterographs(&map, limit)
}

/// Run the full pipeline for an already-tokenized phrase.
///
/// Only the first pronunciation is searched unless `all_pronunciations` is
/// set; then every candidate is searched in parallel.
pub fn find_heterographs<S: AsRef<str>>(
    lexicon: &Lexicon,
    words: &[S],
    limits: &QueryLimits,
    all_pronunciations: bool,
) -> Result<QueryResult> {
    let PhrasePronunciations {
        candidates,
        unknown_words,
    } = phrase_pronunciations(lexicon.index(), words, limits)?;

    let targets = if all_pronunciations {
        &candidates[..]
    } else {
        &candidates[..candidates.len().min(1)]
    };

    let sets = targets
        .par_iter()
        .map(|pronunciation| {
            let heterographs = heterographs_of(lexicon, pronunciation, limits.max_heterographs)?;
            log::debug!("{}: {} heterograph(s)", pronunciation, heterographs.len());
            Ok(HeterographSet {
                pronunciation: pronunciation.clone(),
                heterographs,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(QueryResult {
        words: words.iter().map(|w| w.as_ref().to_string()).collect(),
        pronunciations: candidates,
        sets,
        unknown_words,
    })
}
