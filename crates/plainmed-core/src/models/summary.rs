//! Simplified summary models.

use serde::{Deserialize, Serialize};

/// A medication parsed from prescription text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Medication {
    /// Plain-language name (e.g., "Metformin (diabetes medicine)")
    pub name: String,
    /// What the medicine is for
    pub purpose: String,
    /// Amount, frequency and timing joined with ", "
    pub dosage: String,
}

/// A single piece of advice for the patient.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ActionStep {
    pub description: String,
}

impl ActionStep {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// Full simplifier output for one report.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SimplifiedSummary {
    /// Canned sentences for detected conditions, closing advisory last
    pub key_findings: Vec<String>,
    /// Medications in prescription order
    pub medications: Vec<Medication>,
    /// Advice steps, urgent warning first when present
    pub action_steps: Vec<ActionStep>,
}

impl SimplifiedSummary {
    /// Check whether the summary starts with an urgent warning.
    pub fn is_urgent(&self) -> bool {
        self.action_steps
            .first()
            .is_some_and(|step| step.description.starts_with("🚨"))
    }
}
