//! Parser for CMU Pronouncing Dictionary text.
//!
//! Format: one entry per line, `WORD[(N)] PH1 PH2 ... PHk[ #comment]`.
//! Alternate pronunciations repeat the word with a `(2)`, `(3)`, ... marker.
//! Vowel phonemes carry a stress digit (0, 1 or 2) which is discarded here,
//! since two words sound alike regardless of where the emphasis falls.

use crate::error::{ParseError, Result};
use crate::types::{DictionaryEntry, Pronunciation};

/// Entries parsed from a dictionary, plus the lines that were skipped.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedDictionary {
    pub entries: Vec<DictionaryEntry>,
    pub diagnostics: Vec<ParseError>,
}

/// Parse dictionary text, skipping malformed lines.
///
/// Blank and comment-only lines are ignored silently. A line that names a
/// word but has no phonemes is recorded in `diagnostics` and logged.
pub fn parse(text: &str) -> ParsedDictionary {
    let mut parsed = ParsedDictionary::default();

    for (i, line) in text.lines().enumerate() {
        match parse_line(i + 1, line) {
            Ok(Some(entry)) => parsed.entries.push(entry),
            Ok(None) => {}
            Err(e) => {
                log::warn!("Skipping {}", e);
                parsed.diagnostics.push(e);
            }
        }
    }

    log::info!(
        "Parsed {} dictionary entries ({} lines skipped)",
        parsed.entries.len(),
        parsed.diagnostics.len()
    );
    parsed
}

/// Parse dictionary text, failing on the first malformed line.
pub fn parse_strict(text: &str) -> Result<Vec<DictionaryEntry>> {
    let mut entries = Vec::new();
    for (i, line) in text.lines().enumerate() {
        if let Some(entry) = parse_line(i + 1, line)? {
            entries.push(entry);
        }
    }
    Ok(entries)
}

/// Parse one line. `Ok(None)` means there was nothing on it.
pub fn parse_line(
    line_no: usize,
    line: &str,
) -> std::result::Result<Option<DictionaryEntry>, ParseError> {
    let content = match line.find('#') {
        Some(idx) => &line[..idx],
        None => line,
    };

    let mut tokens = content.split_whitespace();
    let Some(word_raw) = tokens.next() else {
        return Ok(None);
    };

    let phonemes: Vec<String> = tokens.map(|t| strip_stress(t).to_string()).collect();
    if phonemes.is_empty() {
        return Err(ParseError {
            line: line_no,
            text: line.to_string(),
            reason: "no phonemes".to_string(),
        });
    }

    Ok(Some(DictionaryEntry {
        word: canonical_word(word_raw),
        pronunciation: Pronunciation(phonemes),
    }))
}

/// Strip the alternate-pronunciation marker: `sow(2)` -> `sow`.
///
/// Words are lowercased so that lookups match tokenized phrases.
pub fn canonical_word(raw: &str) -> String {
    let word = raw
        .strip_suffix(')')
        .and_then(|rest| rest.rsplit_once('('))
        .filter(|(stem, n)| {
            !stem.is_empty() && !n.is_empty() && n.chars().all(|c| c.is_ascii_digit())
        })
        .map(|(stem, _)| stem)
        .unwrap_or(raw);
    word.to_lowercase()
}

/// Strip a trailing stress marker from an ARPABET phoneme: `AW1` -> `AW`.
pub fn strip_stress(phoneme: &str) -> &str {
    match phoneme.strip_suffix(['0', '1', '2']) {
        Some(base) if !base.is_empty() => base,
        _ => phoneme,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HeterographError;

    const SAMPLE: &str = "\
sow S AW1
sow(2) S OW1
a AH0
a(2) EY1
achill AE1 K IH0 L # place, irish
";

    #[test]
    fn test_strip_stress() {
        assert_eq!(strip_stress("AW1"), "AW");
        assert_eq!(strip_stress("IY0"), "IY");
        assert_eq!(strip_stress("EH2"), "EH");
        assert_eq!(strip_stress("S"), "S");
        assert_eq!(strip_stress("1"), "1");
    }

    #[test]
    fn test_canonical_word() {
        assert_eq!(canonical_word("sow(2)"), "sow");
        assert_eq!(canonical_word("sow"), "sow");
        assert_eq!(canonical_word("ABBOTT(12)"), "abbott");
        assert_eq!(canonical_word("let's"), "let's");
        assert_eq!(canonical_word("(paren"), "(paren");
        assert_eq!(canonical_word("odd(x)"), "odd(x)");
    }

    #[test]
    fn test_parse_sample() {
        let parsed = parse(SAMPLE);
        assert!(parsed.diagnostics.is_empty());
        assert_eq!(parsed.entries.len(), 5);
        assert_eq!(parsed.entries[0].word, "sow");
        assert_eq!(parsed.entries[0].pronunciation.phonemes(), ["S", "AW"]);
        assert_eq!(parsed.entries[1].word, "sow");
        assert_eq!(parsed.entries[1].pronunciation.phonemes(), ["S", "OW"]);
        assert_eq!(parsed.entries[4].pronunciation.phonemes(), ["AE", "K", "IH", "L"]);
    }

    #[test]
    fn test_parse_is_pure() {
        assert_eq!(parse(SAMPLE), parse(SAMPLE));
    }

    #[test]
    fn test_parse_skips_malformed_lines() {
        let text = "cat K AE1 T\norphan\n\n# just a comment\ndog D AO1 G\n";
        let parsed = parse(text);
        assert_eq!(parsed.entries.len(), 2);
        assert_eq!(parsed.diagnostics.len(), 1);
        assert_eq!(parsed.diagnostics[0].line, 2);
        assert_eq!(parsed.diagnostics[0].text, "orphan");
    }

    #[test]
    fn test_parse_word_with_comment_only() {
        let parsed = parse("lonely # no phonemes here\n");
        assert!(parsed.entries.is_empty());
        assert_eq!(parsed.diagnostics.len(), 1);
    }

    #[test]
    fn test_parse_crlf_and_tabs() {
        let parsed = parse("so\tS OW1\r\nsew S  OW1\r\n");
        assert_eq!(parsed.entries.len(), 2);
        assert_eq!(parsed.entries[1].pronunciation.phonemes(), ["S", "OW"]);
    }

    #[test]
    fn test_parse_strict() {
        assert_eq!(parse_strict(SAMPLE).unwrap().len(), 5);
        let err = parse_strict("cat K AE1 T\norphan\n").unwrap_err();
        match err {
            HeterographError::Parse(e) => {
                assert_eq!(e.line, 2);
                assert_eq!(e.reason, "no phonemes");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
