//! Glossary-driven term substitution.
//!
//! Rewrites jargon as plain language. Terms are applied longest first so that
//! multi-word terms ("rheumatoid arthritis") win over the shorter terms they
//! contain ("arthritis"). Each pass runs over the output of the previous one,
//! so a phrase inserted by a long term can still be rewritten by a shorter
//! term later on.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use super::glossary::{GlossaryEntry, GLOSSARY};

/// A compiled whole-word matcher for one glossary term.
struct TermMatcher {
    regex: Regex,
    phrase: &'static str,
}

/// Matchers sorted by descending term length (stable for equal lengths).
static MATCHERS: LazyLock<Vec<TermMatcher>> = LazyLock::new(|| {
    let mut entries: Vec<&GlossaryEntry> = GLOSSARY.iter().collect();
    entries.sort_by(|a, b| b.term.chars().count().cmp(&a.term.chars().count()));

    entries
        .into_iter()
        .map(|entry| TermMatcher {
            regex: Regex::new(&format!(r"(?i)\b{}\b", regex::escape(entry.term)))
                .expect("Invalid glossary term pattern"),
            phrase: entry.phrase,
        })
        .collect()
});

/// Replace every glossary term in `text` with its plain-language phrase.
pub fn substitute(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let mut simplified = text.to_string();
    for matcher in MATCHERS.iter() {
        if !matcher.regex.is_match(&simplified) {
            continue;
        }
        simplified = matcher
            .regex
            .replace_all(&simplified, |caps: &Captures| {
                if starts_uppercase(&caps[0]) {
                    capitalize_first(matcher.phrase)
                } else {
                    matcher.phrase.to_string()
                }
            })
            .into_owned();
    }

    simplified
}

fn starts_uppercase(s: &str) -> bool {
    s.chars().next().is_some_and(char::is_uppercase)
}

fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert_eq!(substitute(""), "");
    }

    #[test]
    fn test_whole_word_replacement() {
        assert_eq!(
            substitute("Patient has hypertension."),
            "Patient has high blood pressure."
        );
    }

    #[test]
    fn test_capitalization_preserved() {
        assert_eq!(substitute("Hypertension noted"), "High blood pressure noted");
        assert_eq!(substitute("HYPERTENSION noted"), "High blood pressure noted");
        assert_eq!(substitute("BP elevated"), "Blood pressure elevated");
    }

    #[test]
    fn test_no_match_inside_longer_word() {
        // "ast" and "alt" are glossary terms; "last" and "salty" are not.
        assert_eq!(substitute("The last salty meal"), "The last salty meal");
    }

    #[test]
    fn test_longest_term_wins() {
        assert_eq!(
            substitute("rheumatoid arthritis"),
            "immune system attacking joints"
        );
        assert_eq!(substitute("arthritis"), "joint pain and swelling");
    }

    #[test]
    fn test_escaped_terms() {
        assert_eq!(substitute("h/o asthma"), "history of breathing difficulty (airway tightening)");
    }

    #[test]
    fn test_inserted_phrase_is_resubstituted() {
        // "vitamin d3" runs first; its phrase contains "vitamin D", which the
        // shorter "vitamin d" term then rewrites.
        assert_eq!(
            substitute("Vitamin D3 weekly"),
            "Vitamin D3 (vitamin D level supplement) weekly"
        );
    }

    #[test]
    fn test_capitalize_first() {
        assert_eq!(capitalize_first("abc"), "Abc");
        assert_eq!(capitalize_first(""), "");
    }
}
