//! Prescription parsing.
//!
//! Handles:
//! - Segment splitting (newlines and semicolons)
//! - Medication name lookup against the glossary
//! - Purpose classification from the glossary phrase
//! - Dose amount, frequency and meal timing extraction

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use super::glossary::{self, GlossaryEntry, FALLBACK_MEDICATION_KEYWORDS};
use crate::models::Medication;

/// Purpose used when no keyword matches, and for every fallback-scan hit.
pub const DEFAULT_PURPOSE: &str = "As prescribed by your doctor";

/// Dosage used when a segment has no amount, frequency, or timing.
pub const DEFAULT_DOSAGE: &str = "As directed by your doctor";

/// Dosage used for every fallback-scan hit.
pub const FALLBACK_DOSAGE: &str = "Follow your doctor's instructions";

/// Purpose keywords, checked in order against the lowercased glossary phrase.
const PURPOSE_RULES: &[(&[&str], &str)] = &[
    (&["blood pressure"], "To control blood pressure"),
    (&["diabetes", "blood sugar"], "To control blood sugar levels"),
    (&["antibiotic"], "To fight bacterial infection"),
    (&["pain"], "To relieve pain"),
    (&["fever"], "To reduce fever and pain"),
    (&["cholesterol"], "To lower cholesterol levels"),
    (&["stomach acid"], "To reduce stomach acid"),
    (&["thyroid"], "To regulate thyroid hormone"),
    (&["allergy"], "To relieve allergy symptoms"),
    (&["breathing", "inhaler"], "To help with breathing"),
    (&["blood thinner"], "To prevent blood clots"),
    (&["antidepressant"], "To improve mood and treat depression"),
    (&["anxiety"], "To reduce anxiety"),
    (&["supplement", "vitamin"], "To supplement nutritional deficiency"),
    (&["iron"], "To treat iron deficiency"),
    (&["anti-nausea"], "To prevent nausea and vomiting"),
    (&["water pill"], "To reduce fluid retention and swelling"),
    (&["nerve pain"], "To relieve nerve pain"),
    (&["steroid"], "To reduce inflammation"),
];

/// Frequency phrases. First key contained in the segment wins.
///
/// "od" sits last: it also occurs inside ordinary words ("food",
/// "amlodipine") and would otherwise shadow every later key.
pub const FREQUENCY_TABLE: &[(&str, &str)] = &[
    ("once daily", "once daily"),
    ("once a day", "once daily"),
    ("bd", "twice daily"),
    ("bid", "twice daily"),
    ("twice daily", "twice daily"),
    ("twice a day", "twice daily"),
    ("tds", "three times daily"),
    ("tid", "three times daily"),
    ("three times", "three times daily"),
    ("qid", "four times daily"),
    ("four times", "four times daily"),
    ("sos", "when needed"),
    ("prn", "when needed"),
    ("when needed", "when needed"),
    ("as needed", "when needed"),
    ("at night", "at bedtime"),
    ("hs", "at bedtime"),
    ("bedtime", "at bedtime"),
    ("morning", "in the morning"),
    ("evening", "in the evening"),
    ("od", "once daily"),
];

/// Meal timing phrases. First key contained in the segment wins.
pub const TIMING_TABLE: &[(&str, &str)] = &[
    ("ac", "before meals"),
    ("before food", "before meals"),
    ("before meal", "before meals"),
    ("pc", "after meals"),
    ("after food", "after meals"),
    ("after meal", "after meals"),
    ("with food", "with food"),
    ("empty stomach", "on an empty stomach"),
];

/// Dose amount patterns in priority order, with their output unit label.
static DOSE_PATTERNS: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    [
        (r"(?i)\b(\d+)\s*mg\b", "mg"),
        (r"(?i)\b(\d+)\s*mcg\b", "mcg"),
        (r"(?i)\b(\d+)\s*ml\b", "ml"),
        (r"(?i)\b(\d+)\s*g\b", "g"),
    ]
    .into_iter()
    .map(|(pattern, label)| {
        (
            Regex::new(pattern).expect("Invalid dose regex pattern"),
            label,
        )
    })
    .collect()
});

/// Per-call parse state: glossary terms already turned into a medication.
#[derive(Debug, Default)]
struct ParseSession {
    claimed: HashSet<&'static str>,
}

impl ParseSession {
    /// Claim a term. Returns false if it was already claimed in this call.
    fn claim(&mut self, term: &'static str) -> bool {
        self.claimed.insert(term)
    }

    fn is_claimed(&self, term: &str) -> bool {
        self.claimed.contains(term)
    }
}

/// Parse prescription text into medication records.
pub fn extract_medications(prescription_text: &str) -> Vec<Medication> {
    if prescription_text.trim().is_empty() {
        return Vec::new();
    }

    let candidates: Vec<&'static GlossaryEntry> = glossary::medication_entries().collect();
    let mut session = ParseSession::default();
    let mut medications = Vec::new();

    for segment in split_segments(prescription_text) {
        if let Some(medication) = parse_segment(segment, &candidates, &mut session) {
            medications.push(medication);
        }
    }

    if medications.is_empty() {
        medications = scan_words(prescription_text, &mut session);
    }

    tracing::debug!(
        segments = split_segments(prescription_text).count(),
        medications = medications.len(),
        "Parsed prescription text"
    );

    medications
}

/// Split on newlines and semicolons, trimming and dropping empty segments.
fn split_segments(text: &str) -> impl Iterator<Item = &str> {
    text.split(['\n', ';'])
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
}

fn parse_segment(
    segment: &str,
    candidates: &[&'static GlossaryEntry],
    session: &mut ParseSession,
) -> Option<Medication> {
    let lower = segment.to_lowercase();

    let entry = candidates
        .iter()
        .find(|entry| lower.contains(entry.term) && !session.is_claimed(entry.term))?;
    session.claim(entry.term);

    let parts: Vec<String> = [
        dose_amount(segment),
        lookup_contained(&lower, FREQUENCY_TABLE).map(str::to_string),
        lookup_contained(&lower, TIMING_TABLE).map(str::to_string),
    ]
    .into_iter()
    .flatten()
    .collect();

    let dosage = if parts.is_empty() {
        DEFAULT_DOSAGE.to_string()
    } else {
        parts.join(", ")
    };

    Some(Medication {
        name: entry.phrase.to_string(),
        purpose: classify_purpose(entry.phrase).to_string(),
        dosage,
    })
}

/// Whole-text scan used when no segment produced a medication.
fn scan_words(text: &str, session: &mut ParseSession) -> Vec<Medication> {
    let mut medications = Vec::new();

    for word in text.split_whitespace() {
        let letters: String = word
            .chars()
            .filter(char::is_ascii_alphabetic)
            .collect::<String>()
            .to_lowercase();

        let Some(entry) = glossary::lookup(&letters) else {
            continue;
        };
        if !glossary::phrase_mentions(entry.phrase, FALLBACK_MEDICATION_KEYWORDS) {
            continue;
        }
        if !session.claim(entry.term) {
            continue;
        }

        medications.push(Medication {
            name: entry.phrase.to_string(),
            purpose: DEFAULT_PURPOSE.to_string(),
            dosage: FALLBACK_DOSAGE.to_string(),
        });
    }

    medications
}

/// Classify a medication's purpose from its glossary phrase.
pub fn classify_purpose(phrase: &str) -> &'static str {
    let lower = phrase.to_lowercase();
    PURPOSE_RULES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|keyword| lower.contains(keyword)))
        .map(|(_, purpose)| *purpose)
        .unwrap_or(DEFAULT_PURPOSE)
}

/// First dose amount in the segment, as "<amount> <unit>".
pub fn dose_amount(segment: &str) -> Option<String> {
    DOSE_PATTERNS.iter().find_map(|(pattern, label)| {
        pattern
            .captures(segment)
            .map(|caps| format!("{} {}", &caps[1], label))
    })
}

/// First table value whose key is contained in `lower`, in table order.
pub fn lookup_contained(lower: &str, table: &[(&str, &'static str)]) -> Option<&'static str> {
    table
        .iter()
        .find(|(key, _)| lower.contains(key))
        .map(|(_, value)| *value)
}
