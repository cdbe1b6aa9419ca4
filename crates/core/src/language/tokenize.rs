//! Split a free-form phrase into dictionary lookup keys.

/// Characters that stay inside a token. Dashes and periods are trimmed
/// afterwards depending on where they sit; apostrophes are part of
/// dictionary words such as `let's` and `'twas`.
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '-' | '.' | '\'')
}

/// Abbreviations such as `u.s.a.` split into more than three
/// period-separated segments (the trailing period yields an empty one).
fn is_abbreviation(token: &str) -> bool {
    token.split('.').count() > 3
}

/// Lowercase `phrase` and split it into words.
///
/// Leading/trailing dashes are removed, and a trailing period is removed
/// unless the token looks like an abbreviation. Empty tokens are dropped.
pub fn words(phrase: &str) -> Vec<String> {
    let lower = phrase.to_lowercase();
    lower
        .split(|c: char| !is_word_char(c))
        .filter_map(|raw| {
            let mut token = raw.trim_matches('-');
            if token.ends_with('.') && !is_abbreviation(token) {
                token = token.trim_end_matches('.').trim_end_matches('-');
            }
            if token.is_empty() {
                None
            } else {
                Some(token.to_string())
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_words_basic() {
        assert_eq!(words("Hello, World!"), vec!["hello", "world"]);
        assert_eq!(words("  a   maze  "), vec!["a", "maze"]);
    }

    #[test]
    fn test_words_empty() {
        assert!(words("").is_empty());
        assert!(words("  ?! ").is_empty());
    }

    #[test]
    fn test_words_dashes() {
        assert_eq!(words("well-known"), vec!["well-known"]);
        assert_eq!(words("so- -so"), vec!["so", "so"]);
        assert_eq!(words("wait --"), vec!["wait"]);
    }

    #[test]
    fn test_words_periods() {
        assert_eq!(words("The end."), vec!["the", "end"]);
        assert_eq!(words("visit the u.s.a. today"), vec!["visit", "the", "u.s.a.", "today"]);
        assert_eq!(words("a.m. start"), vec!["a.m", "start"]);
        assert_eq!(words("3.5 miles"), vec!["3.5", "miles"]);
    }

    #[test]
    fn test_words_apostrophes() {
        assert_eq!(words("Let's go"), vec!["let's", "go"]);
    }
}
