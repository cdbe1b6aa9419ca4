//! Heterograph search over the CMU Pronouncing Dictionary.
//!
//! Given a phrase, find every other sequence of dictionary words that sounds
//! exactly the same ("a maze" / "amaze", "sow" / "sew" / "so").
//!
//! Pipeline: dictionary text -> [`language::dictionary`] -> [`Lexicon`]
//! (pronunciation index + phonetic trie), then per phrase:
//! [`heterograph::phrase_pronunciations`] -> [`heterograph::SegmentationMap`]
//! -> [`heterograph::Heterographs`].

pub mod cache;
pub mod error;
pub mod heterograph;
pub mod language;
pub mod lexicon;
pub mod source;
pub mod types;

pub use error::{HeterographError, ParseError};
pub use lexicon::Lexicon;
pub use types::{DictionaryEntry, Pronunciation, QueryLimits};
