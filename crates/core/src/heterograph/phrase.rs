//! Expand a phrase into every full-phrase pronunciation.

use serde::Serialize;

use crate::error::{HeterographError, Result, Stage};
use crate::lexicon::PronunciationIndex;
use crate::types::{Pronunciation, QueryLimits};

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PhrasePronunciations {
    /// One entry per combination of per-word pronunciations
    pub candidates: Vec<Pronunciation>,
    /// Words after the first that were not in the dictionary. Each one
    /// contributed no phonemes, so its neighbours run together.
    pub unknown_words: Vec<String>,
}

/// Cross-product of the pronunciations of `words`, in phrase order.
///
/// The leading word must be known. Later unknown words contribute nothing
/// and are reported in `unknown_words`. Fails with `CapacityExceeded`
/// before building anything if the product exceeds `limits.max_candidates`.
pub fn phrase_pronunciations<S: AsRef<str>>(
    index: &PronunciationIndex,
    words: &[S],
    limits: &QueryLimits,
) -> Result<PhrasePronunciations> {
    let (first, rest) = words.split_first().ok_or(HeterographError::EmptyPhrase)?;
    let first = first.as_ref();

    let seed = index.lookup(first);
    if seed.is_empty() {
        return Err(HeterographError::UnknownWord(first.to_string()));
    }

    let empty = [Pronunciation::default()];
    let mut unknown_words = Vec::new();
    let mut per_word: Vec<&[Pronunciation]> = Vec::with_capacity(words.len());
    per_word.push(seed);
    for word in rest {
        let word = word.as_ref();
        let prons = index.lookup(word);
        if prons.is_empty() {
            log::warn!("'{}' is not in the dictionary; treating it as silent", word);
            unknown_words.push(word.to_string());
            per_word.push(&empty);
        } else {
            per_word.push(prons);
        }
    }

    let total = per_word
        .iter()
        .try_fold(1usize, |acc, prons| acc.checked_mul(prons.len()));
    match total {
        Some(n) if n <= limits.max_candidates => {}
        other => {
            return Err(HeterographError::CapacityExceeded {
                stage: Stage::Candidates,
                limit: limits.max_candidates,
                reached: other.unwrap_or(usize::MAX),
            });
        }
    }

    let mut candidates: Vec<Pronunciation> = seed.to_vec();
    for prons in &per_word[1..] {
        candidates = candidates
            .iter()
            .flat_map(|prefix| prons.iter().map(move |p| prefix.concat(p)))
            .collect();
    }

    log::info!(
        "{} pronunciation(s) for {} word(s)",
        candidates.len(),
        words.len()
    );
    Ok(PhrasePronunciations {
        candidates,
        unknown_words,
    })
}
