//! Rule-based report simplifier.
//!
//! Pipeline: Report + Prescription → Findings | Medications | Action Steps
//!
//! Every stage is a pure function of its input strings. Rule tables are
//! compiled once and shared; per-call state (claimed medication terms) never
//! leaves the call that created it.

mod actions;
mod findings;
pub mod glossary;
mod medications;
mod substitution;

pub use actions::*;
pub use findings::*;
pub use glossary::{GlossaryEntry, GLOSSARY};
pub use medications::*;
pub use substitution::*;

use crate::models::SimplifiedSummary;

/// Run the full pipeline over a report and its prescription.
pub fn simplify(report_text: &str, prescription_text: &str) -> SimplifiedSummary {
    let summary = SimplifiedSummary {
        key_findings: extract_findings(report_text, prescription_text),
        medications: extract_medications(prescription_text),
        action_steps: generate_action_steps(report_text, prescription_text),
    };

    tracing::debug!(
        findings = summary.key_findings.len(),
        medications = summary.medications.len(),
        action_steps = summary.action_steps.len(),
        "Simplified report"
    );

    summary
}

/// Both inputs joined by a space and lowercased, for pattern matching only.
fn combined_text(report_text: &str, prescription_text: &str) -> String {
    format!("{} {}", report_text, prescription_text).to_lowercase()
}
