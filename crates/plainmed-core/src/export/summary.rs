//! Summary export for sharing and copying.

use serde::{Deserialize, Serialize};

use crate::models::{ReportRecord, SimplifiedSummary};

/// Section headings used in the plain-text export.
pub const KEY_FINDINGS_HEADING: &str = "Key Findings";
pub const MEDICATIONS_HEADING: &str = "Medications";
pub const NEXT_STEPS_HEADING: &str = "What To Do Next";

/// Shareable export of one stored report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryExport {
    /// Report ID for traceability
    pub report_id: String,
    /// Submission timestamp
    pub submitted_at: String,
    /// Export timestamp
    pub exported_at: String,
    /// The simplified summary
    pub summary: SimplifiedSummary,
}

impl SummaryExport {
    /// Create an export from a stored report.
    pub fn from_record(record: &ReportRecord) -> Self {
        Self {
            report_id: record.report_id.clone(),
            submitted_at: record.created_at.clone(),
            exported_at: chrono::Utc::now().to_rfc3339(),
            summary: record.summary.clone(),
        }
    }

    /// Export to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Export to plain text.
    pub fn to_text(&self) -> String {
        to_plain_text(&self.summary)
    }
}

/// Render a summary as bulleted plain text with one section per list.
pub fn to_plain_text(summary: &SimplifiedSummary) -> String {
    let mut lines = Vec::new();

    lines.push(heading(KEY_FINDINGS_HEADING));
    lines.extend(summary.key_findings.iter().map(|f| format!("• {}", f)));
    lines.push(String::new());

    lines.push(heading(MEDICATIONS_HEADING));
    lines.extend(
        summary
            .medications
            .iter()
            .map(|m| format!("• {}: {} ({})", m.name, m.purpose, m.dosage)),
    );
    lines.push(String::new());

    lines.push(heading(NEXT_STEPS_HEADING));
    lines.extend(summary.action_steps.iter().map(|s| format!("• {}", s.description)));

    lines.join("\n")
}

fn heading(title: &str) -> String {
    format!("=== {} ===", title)
}
