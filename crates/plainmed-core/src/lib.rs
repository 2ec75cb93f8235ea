//! Plainmed Core Library
//!
//! Local-first medical report simplifier. Turns a pasted report and
//! prescription into plain-language findings, medications and next steps.
//!
//! # Architecture
//!
//! ```text
//! Report text ─┐
//!              ├──► Simplifier ──────────────────────────────┐
//! Prescription ┘        │                                    │
//!                       ├── Findings      (ordered rules)    │
//!                       ├── Medications   (glossary + dose)  │
//!                       └── Action Steps  (condition rules)  │
//!                                                            ▼
//!                                                  ┌───────────────────┐
//!                                                  │   Report Store    │
//!                                                  │  submit / get     │
//!                                                  │  history          │
//!                                                  │  bookmark/delete  │
//!                                                  └─────────┬─────────┘
//!                                                            │
//!                                                  Plain text / JSON
//!                                                         Export
//! ```
//!
//! # Core Principle
//!
//! **The simplifier is deterministic.** The same texts always produce the
//! same summary; only the store assigns IDs and timestamps.
//!
//! # Modules
//!
//! - [`simplifier`]: Glossary substitution and rule-based extraction
//! - [`models`]: Domain types (SimplifiedSummary, ReportRecord, etc.)
//! - [`db`]: SQLite persistence for submitted reports
//! - [`store`]: Submission, retrieval, history and bookmarks
//! - [`export`]: Plain-text and JSON summary export

pub mod db;
pub mod export;
pub mod models;
pub mod simplifier;
pub mod store;

// Re-export commonly used types
pub use db::Database;
pub use models::{
    ActionStep, HistoryEntry, HistoryOptions, Medication, ReportRecord, SimplifiedSummary,
};
pub use simplifier::{
    extract_findings, extract_medications, generate_action_steps, simplify, substitute,
};
pub use store::{ProcessedReport, ReportStore};

// UniFFI setup - using proc macros
uniffi::setup_scaffolding!();

use std::sync::{Arc, Mutex};

// =========================================================================
// FFI Error Type
// =========================================================================

#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum PlainMedError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<db::DbError> for PlainMedError {
    fn from(e: db::DbError) -> Self {
        match e {
            db::DbError::NotFound(id) => PlainMedError::NotFound(id),
            other => PlainMedError::DatabaseError(other.to_string()),
        }
    }
}

impl From<store::StoreError> for PlainMedError {
    fn from(e: store::StoreError) -> Self {
        match e {
            store::StoreError::Database(db_error) => db_error.into(),
            store::StoreError::InvalidInput(message) => PlainMedError::InvalidInput(message),
        }
    }
}

impl From<serde_json::Error> for PlainMedError {
    fn from(e: serde_json::Error) -> Self {
        PlainMedError::SerializationError(e.to_string())
    }
}

impl<T> From<std::sync::PoisonError<T>> for PlainMedError {
    fn from(e: std::sync::PoisonError<T>) -> Self {
        PlainMedError::DatabaseError(format!("Lock poisoned: {}", e))
    }
}

// =========================================================================
// Factory Functions (exported to FFI)
// =========================================================================

/// Open or create a database at the given path.
#[uniffi::export]
pub fn open_database(path: String) -> Result<Arc<PlainMedCore>, PlainMedError> {
    let db = Database::open(&path)?;
    Ok(Arc::new(PlainMedCore {
        db: Arc::new(Mutex::new(db)),
    }))
}

/// Create an in-memory database (for testing).
#[uniffi::export]
pub fn open_database_in_memory() -> Result<Arc<PlainMedCore>, PlainMedError> {
    let db = Database::open_in_memory()?;
    Ok(Arc::new(PlainMedCore {
        db: Arc::new(Mutex::new(db)),
    }))
}

/// Simplify a report without storing it.
#[uniffi::export]
pub fn simplify_report(report_text: String, prescription_text: String) -> FfiSimplifiedSummary {
    simplify(&report_text, &prescription_text).into()
}

/// Replace medical terms in free text with their plain-language phrases.
#[uniffi::export]
pub fn substitute_terms(text: String) -> String {
    substitute(&text)
}

// =========================================================================
// Main API Object
// =========================================================================

/// Thread-safe database wrapper for FFI.
#[derive(uniffi::Object)]
pub struct PlainMedCore {
    db: Arc<Mutex<Database>>,
}

#[uniffi::export]
impl PlainMedCore {
    // =========================================================================
    // Submission
    // =========================================================================

    /// Store a computed summary with its original texts. Returns the report ID.
    pub fn submit_report(
        &self,
        report_text: String,
        prescription_text: String,
        summary: FfiSimplifiedSummary,
    ) -> Result<String, PlainMedError> {
        let db = self.db.lock()?;
        let store = ReportStore::new(&db);
        Ok(store.submit(&report_text, &prescription_text, summary.into())?)
    }

    /// Simplify and store in one call.
    pub fn process_report(
        &self,
        report_text: String,
        prescription_text: String,
    ) -> Result<FfiProcessedReport, PlainMedError> {
        let db = self.db.lock()?;
        let store = ReportStore::new(&db);
        let processed = store.process(&report_text, &prescription_text)?;
        Ok(processed.into())
    }

    // =========================================================================
    // Retrieval
    // =========================================================================

    /// Get the stored summary for a report.
    pub fn get_summary(&self, report_id: String) -> Result<FfiSimplifiedSummary, PlainMedError> {
        let db = self.db.lock()?;
        let store = ReportStore::new(&db);
        Ok(store.summary(&report_id)?.into())
    }

    /// Get a stored report with its original texts.
    pub fn get_report(&self, report_id: String) -> Result<Option<FfiReportRecord>, PlainMedError> {
        let db = self.db.lock()?;
        let store = ReportStore::new(&db);
        Ok(store.get(&report_id)?.map(|r| r.into()))
    }

    /// List submitted reports, newest first.
    pub fn get_history(
        &self,
        limit: Option<u32>,
        bookmarked_only: bool,
    ) -> Result<Vec<FfiHistoryEntry>, PlainMedError> {
        let db = self.db.lock()?;
        let store = ReportStore::new(&db);
        let options = HistoryOptions {
            limit: limit.map(|l| l as usize),
            bookmarked_only,
            ..HistoryOptions::default()
        };
        let entries = store.history(&options)?;
        Ok(entries.into_iter().map(|e| e.into()).collect())
    }

    // =========================================================================
    // Bookmarks and Deletion
    // =========================================================================

    /// Flip the bookmark flag. Returns the new value.
    pub fn toggle_bookmark(&self, report_id: String) -> Result<bool, PlainMedError> {
        let db = self.db.lock()?;
        let store = ReportStore::new(&db);
        Ok(store.toggle_bookmark(&report_id)?)
    }

    /// Set the bookmark flag.
    pub fn set_bookmark(&self, report_id: String, bookmarked: bool) -> Result<(), PlainMedError> {
        let db = self.db.lock()?;
        let store = ReportStore::new(&db);
        Ok(store.set_bookmark(&report_id, bookmarked)?)
    }

    /// Delete a report.
    pub fn delete_report(&self, report_id: String) -> Result<(), PlainMedError> {
        let db = self.db.lock()?;
        let store = ReportStore::new(&db);
        Ok(store.delete(&report_id)?)
    }

    // =========================================================================
    // Export Operations
    // =========================================================================

    /// Export a stored summary as plain text.
    pub fn export_summary_text(&self, report_id: String) -> Result<String, PlainMedError> {
        let db = self.db.lock()?;
        let store = ReportStore::new(&db);
        let summary = store.summary(&report_id)?;
        Ok(export::to_plain_text(&summary))
    }

    /// Export a stored report's summary as JSON.
    pub fn export_summary_json(&self, report_id: String) -> Result<String, PlainMedError> {
        let db = self.db.lock()?;
        let store = ReportStore::new(&db);
        let record = store
            .get(&report_id)?
            .ok_or_else(|| PlainMedError::NotFound(report_id.clone()))?;
        Ok(export::SummaryExport::from_record(&record).to_json()?)
    }
}

// =========================================================================
// FFI Types
// =========================================================================

/// FFI-safe medication.
#[derive(Debug, Clone, PartialEq, uniffi::Record)]
pub struct FfiMedication {
    pub name: String,
    pub purpose: String,
    pub dosage: String,
}

impl From<Medication> for FfiMedication {
    fn from(med: Medication) -> Self {
        Self {
            name: med.name,
            purpose: med.purpose,
            dosage: med.dosage,
        }
    }
}

impl From<FfiMedication> for Medication {
    fn from(med: FfiMedication) -> Self {
        Medication {
            name: med.name,
            purpose: med.purpose,
            dosage: med.dosage,
        }
    }
}

/// FFI-safe action step.
#[derive(Debug, Clone, PartialEq, uniffi::Record)]
pub struct FfiActionStep {
    pub description: String,
}

impl From<ActionStep> for FfiActionStep {
    fn from(step: ActionStep) -> Self {
        Self {
            description: step.description,
        }
    }
}

impl From<FfiActionStep> for ActionStep {
    fn from(step: FfiActionStep) -> Self {
        ActionStep::new(step.description)
    }
}

/// FFI-safe simplified summary.
#[derive(Debug, Clone, PartialEq, uniffi::Record)]
pub struct FfiSimplifiedSummary {
    pub key_findings: Vec<String>,
    pub medications: Vec<FfiMedication>,
    pub action_steps: Vec<FfiActionStep>,
    pub urgent: bool,
}

impl From<SimplifiedSummary> for FfiSimplifiedSummary {
    fn from(summary: SimplifiedSummary) -> Self {
        let urgent = summary.is_urgent();
        Self {
            key_findings: summary.key_findings,
            medications: summary.medications.into_iter().map(|m| m.into()).collect(),
            action_steps: summary.action_steps.into_iter().map(|s| s.into()).collect(),
            urgent,
        }
    }
}

impl From<FfiSimplifiedSummary> for SimplifiedSummary {
    fn from(summary: FfiSimplifiedSummary) -> Self {
        SimplifiedSummary {
            key_findings: summary.key_findings,
            medications: summary.medications.into_iter().map(|m| m.into()).collect(),
            action_steps: summary.action_steps.into_iter().map(|s| s.into()).collect(),
        }
    }
}

/// FFI-safe stored report.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiReportRecord {
    pub report_id: String,
    pub report_text: String,
    pub prescription_text: String,
    pub summary: FfiSimplifiedSummary,
    pub bookmarked: bool,
    pub created_at: String,
}

impl From<ReportRecord> for FfiReportRecord {
    fn from(record: ReportRecord) -> Self {
        Self {
            report_id: record.report_id,
            report_text: record.report_text,
            prescription_text: record.prescription_text,
            summary: record.summary.into(),
            bookmarked: record.bookmarked,
            created_at: record.created_at,
        }
    }
}

/// FFI-safe history entry.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiHistoryEntry {
    pub report_id: String,
    pub created_at: String,
    pub excerpt: String,
    pub bookmarked: bool,
}

impl From<HistoryEntry> for FfiHistoryEntry {
    fn from(entry: HistoryEntry) -> Self {
        Self {
            report_id: entry.report_id,
            created_at: entry.created_at,
            excerpt: entry.excerpt,
            bookmarked: entry.bookmarked,
        }
    }
}

/// FFI-safe processing result.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiProcessedReport {
    pub report_id: String,
    pub summary: FfiSimplifiedSummary,
}

impl From<ProcessedReport> for FfiProcessedReport {
    fn from(processed: ProcessedReport) -> Self {
        Self {
            report_id: processed.report_id,
            summary: processed.summary.into(),
        }
    }
}
