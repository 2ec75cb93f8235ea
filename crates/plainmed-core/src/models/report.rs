//! Stored report models.

use serde::{Deserialize, Serialize};

use super::summary::SimplifiedSummary;

/// Default excerpt length shown in history.
pub const DEFAULT_EXCERPT_CHARS: usize = 100;

/// Excerpt shown when a report has no usable text.
pub const EMPTY_EXCERPT: &str = "No summary available";

/// A submitted report with its original texts and simplified summary.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReportRecord {
    /// Unique report ID (UUID v4)
    pub report_id: String,
    /// Original report text as pasted
    pub report_text: String,
    /// Original prescription text as pasted
    pub prescription_text: String,
    /// Simplifier output, computed before submission
    pub summary: SimplifiedSummary,
    /// Bookmark flag
    pub bookmarked: bool,
    /// Submission timestamp (RFC 3339)
    pub created_at: String,
}

impl ReportRecord {
    /// Create a new record with a fresh ID and timestamp.
    pub fn new(report_text: String, prescription_text: String, summary: SimplifiedSummary) -> Self {
        Self {
            report_id: uuid::Uuid::new_v4().to_string(),
            report_text,
            prescription_text,
            summary,
            bookmarked: false,
            created_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// Text the history excerpt is built from.
    pub fn excerpt_source(&self) -> &str {
        excerpt_source(&self.report_text, &self.prescription_text)
    }
}

/// The report text, or the prescription text when the report is blank.
pub fn excerpt_source<'a>(report_text: &'a str, prescription_text: &'a str) -> &'a str {
    if report_text.trim().is_empty() {
        prescription_text
    } else {
        report_text
    }
}

/// One row of the history listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HistoryEntry {
    pub created_at: String,
    pub excerpt: String,
    pub report_id: String,
    pub bookmarked: bool,
}

/// Options for listing history.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryOptions {
    /// Maximum excerpt length in characters (before the trailing "...")
    pub excerpt_max_chars: usize,
    /// Maximum number of entries, newest first
    pub limit: Option<usize>,
    /// Only list bookmarked reports
    pub bookmarked_only: bool,
}

impl Default for HistoryOptions {
    fn default() -> Self {
        Self {
            excerpt_max_chars: DEFAULT_EXCERPT_CHARS,
            limit: None,
            bookmarked_only: false,
        }
    }
}

/// Build a history excerpt: pictographs removed, trimmed, and cut to
/// `max_chars` characters with a trailing "...".
pub fn make_excerpt(text: &str, max_chars: usize) -> String {
    let cleaned: String = text.chars().filter(|c| !is_pictograph(*c)).collect();
    let cleaned = cleaned.trim();

    if cleaned.is_empty() {
        return EMPTY_EXCERPT.to_string();
    }
    if cleaned.chars().count() <= max_chars {
        return cleaned.to_string();
    }

    let truncated: String = cleaned.chars().take(max_chars).collect();
    format!("{}...", truncated.trim_end())
}

/// Emoji, symbols, and the joiners/selectors that attach to them.
fn is_pictograph(c: char) -> bool {
    matches!(
        c as u32,
        0x1F000..=0x1FAFF   // emoji and pictographs
            | 0x2600..=0x27BF   // misc symbols, dingbats
            | 0x2B00..=0x2BFF   // arrows, stars
            | 0xFE00..=0xFE0F   // variation selectors
            | 0x200D            // zero width joiner
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_record() {
        let record = ReportRecord::new("report".into(), "".into(), SimplifiedSummary::default());
        assert_eq!(record.report_id.len(), 36); // UUID format
        assert!(!record.bookmarked);
        assert!(chrono::DateTime::parse_from_rfc3339(&record.created_at).is_ok());
    }

    #[test]
    fn test_excerpt_source() {
        let record = ReportRecord::new("  ".into(), "Metformin".into(), SimplifiedSummary::default());
        assert_eq!(record.excerpt_source(), "Metformin");

        let record = ReportRecord::new("CBC normal".into(), "Metformin".into(), SimplifiedSummary::default());
        assert_eq!(record.excerpt_source(), "CBC normal");
    }

    #[test]
    fn test_excerpt_short_text() {
        assert_eq!(make_excerpt("  CBC normal  ", 100), "CBC normal");
    }

    #[test]
    fn test_excerpt_truncated() {
        let text = "a".repeat(150);
        let excerpt = make_excerpt(&text, 100);
        assert_eq!(excerpt, format!("{}...", "a".repeat(100)));
    }

    #[test]
    fn test_excerpt_strips_pictographs() {
        assert_eq!(make_excerpt("💊 Take medicines", 100), "Take medicines");
        assert_eq!(make_excerpt("☀️ Sunlight", 100), "Sunlight");
    }

    #[test]
    fn test_excerpt_empty() {
        assert_eq!(make_excerpt("", 100), EMPTY_EXCERPT);
        assert_eq!(make_excerpt("🚨", 100), EMPTY_EXCERPT);
    }

    #[test]
    fn test_excerpt_counts_characters_not_bytes() {
        let text = "é".repeat(10);
        assert_eq!(make_excerpt(&text, 4), "éééé...");
    }
}
