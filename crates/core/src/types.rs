use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One way of saying a word: an ordered list of stress-free ARPABET phonemes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pronunciation(pub Vec<String>);

impl Pronunciation {
    pub fn new<S: Into<String>>(phonemes: impl IntoIterator<Item = S>) -> Self {
        Self(phonemes.into_iter().map(Into::into).collect())
    }

    pub fn phonemes(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Append another pronunciation, as when two words are spoken in a row.
    pub fn concat(&self, other: &Pronunciation) -> Pronunciation {
        let mut phonemes = Vec::with_capacity(self.len() + other.len());
        phonemes.extend_from_slice(&self.0);
        phonemes.extend_from_slice(&other.0);
        Pronunciation(phonemes)
    }
}

impl fmt::Display for Pronunciation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(" "))
    }
}

impl FromStr for Pronunciation {
    type Err = std::convert::Infallible;

    /// Parse a space-separated phoneme string such as `"S OW"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Pronunciation::new(s.split_whitespace()))
    }
}

/// A single normalized dictionary line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictionaryEntry {
    /// Canonical word with any `(N)` variant marker removed
    pub word: String,
    pub pronunciation: Pronunciation,
}

impl DictionaryEntry {
    pub fn new(word: impl Into<String>, pronunciation: Pronunciation) -> Self {
        Self {
            word: word.into(),
            pronunciation,
        }
    }
}

/// Resource budget for the two combinatorial stages of a query.
///
/// Both limits bound a single stage run: candidate generation once per
/// phrase, enumeration once per full-phrase pronunciation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryLimits {
    /// Maximum number of full-phrase pronunciations generated per phrase
    pub max_candidates: usize,
    /// Maximum number of distinct heterographs enumerated for each
    /// pronunciation. It is not a query-wide total: searching every
    /// pronunciation of a phrase may return up to
    /// `max_candidates * max_heterographs` phrases.
    pub max_heterographs: usize,
}

impl Default for QueryLimits {
    fn default() -> Self {
        Self {
            max_candidates: 10_000,
            max_heterographs: 10_000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pronunciation_display() {
        let p = Pronunciation::new(["S", "OW"]);
        assert_eq!(p.to_string(), "S OW");
        assert_eq!(Pronunciation::default().to_string(), "");
    }

    #[test]
    fn test_pronunciation_from_str() {
        let p: Pronunciation = "AH  M EY Z".parse().unwrap();
        assert_eq!(p.phonemes(), ["AH", "M", "EY", "Z"]);
        let empty: Pronunciation = "".parse().unwrap();
        assert!(empty.is_empty());
    }

    #[test]
    fn test_pronunciation_concat() {
        let a = Pronunciation::new(["AH"]);
        let maze = Pronunciation::new(["M", "EY", "Z"]);
        assert_eq!(a.concat(&maze), Pronunciation::new(["AH", "M", "EY", "Z"]));
        assert_eq!(a.concat(&Pronunciation::default()), a);
    }

    #[test]
    fn test_pronunciation_serializes_as_list() {
        let p = Pronunciation::new(["S", "OW"]);
        let json = serde_json::to_string(&p).unwrap();
        assert_eq!(json, r#"["S","OW"]"#);
    }

    #[test]
    fn test_query_limits_partial_json() {
        let limits: QueryLimits = serde_json::from_str(r#"{"max_candidates": 5}"#).unwrap();
        assert_eq!(limits.max_candidates, 5);
        assert_eq!(limits.max_heterographs, QueryLimits::default().max_heterographs);
    }
}
