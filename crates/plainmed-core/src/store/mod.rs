//! Report store: submission, retrieval, history and bookmarks.
//!
//! Sits between the simplifier and the database. A summary is always fully
//! computed before it reaches the store, and each write is a single statement,
//! so a failed submission leaves nothing behind.

use thiserror::Error;

use crate::db::{Database, DbError};
use crate::models::{HistoryEntry, HistoryOptions, ReportRecord, SimplifiedSummary};
use crate::simplifier;

/// Message returned when both texts are blank.
pub const EMPTY_SUBMISSION: &str = "Please enter at least one report or prescription.";

/// Store errors.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] DbError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// A stored report together with its freshly computed summary.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessedReport {
    pub report_id: String,
    pub summary: SimplifiedSummary,
}

/// Report store over a database connection.
pub struct ReportStore<'a> {
    db: &'a Database,
}

impl<'a> ReportStore<'a> {
    /// Create a new store.
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// Persist an already computed summary with its original texts.
    /// Returns the new report ID.
    pub fn submit(
        &self,
        report_text: &str,
        prescription_text: &str,
        summary: SimplifiedSummary,
    ) -> StoreResult<String> {
        if report_text.trim().is_empty() && prescription_text.trim().is_empty() {
            return Err(StoreError::InvalidInput(EMPTY_SUBMISSION.into()));
        }

        let urgent = summary.is_urgent();
        let record = ReportRecord::new(report_text.into(), prescription_text.into(), summary);
        self.db.insert_report(&record)?;

        tracing::info!(
            report_id = %record.report_id,
            medications = record.summary.medications.len(),
            urgent,
            "Stored report"
        );
        Ok(record.report_id)
    }

    /// Simplify and persist in one step.
    pub fn process(&self, report_text: &str, prescription_text: &str) -> StoreResult<ProcessedReport> {
        let summary = simplifier::simplify(report_text, prescription_text);
        let report_id = self.submit(report_text, prescription_text, summary.clone())?;
        Ok(ProcessedReport { report_id, summary })
    }

    /// Get a stored report.
    pub fn get(&self, report_id: &str) -> StoreResult<Option<ReportRecord>> {
        let record = self.db.get_report(report_id)?;
        if record.is_none() {
            tracing::warn!(report_id, "Report not found");
        }
        Ok(record)
    }

    /// Get a stored summary, failing if the report does not exist.
    pub fn summary(&self, report_id: &str) -> StoreResult<SimplifiedSummary> {
        self.get(report_id)?
            .map(|record| record.summary)
            .ok_or_else(|| DbError::NotFound(report_id.to_string()).into())
    }

    /// List history, newest first.
    pub fn history(&self, options: &HistoryOptions) -> StoreResult<Vec<HistoryEntry>> {
        Ok(self.db.list_history(options)?)
    }

    /// Flip the bookmark flag and return the new value.
    pub fn toggle_bookmark(&self, report_id: &str) -> StoreResult<bool> {
        let bookmarked = self.db.toggle_bookmark(report_id)?;
        tracing::debug!(report_id, bookmarked, "Toggled bookmark");
        Ok(bookmarked)
    }

    /// Set the bookmark flag, failing if the report does not exist.
    pub fn set_bookmark(&self, report_id: &str, bookmarked: bool) -> StoreResult<()> {
        if !self.db.set_bookmark(report_id, bookmarked)? {
            return Err(DbError::NotFound(report_id.to_string()).into());
        }
        Ok(())
    }

    /// Delete a report, failing if it does not exist.
    pub fn delete(&self, report_id: &str) -> StoreResult<()> {
        if !self.db.delete_report(report_id)? {
            tracing::warn!(report_id, "Delete requested for unknown report");
            return Err(DbError::NotFound(report_id.to_string()).into());
        }
        tracing::info!(report_id, "Deleted report");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_rejects_blank_texts() {
        let db = Database::open_in_memory().unwrap();
        let store = ReportStore::new(&db);

        let result = store.submit("  ", "\n", SimplifiedSummary::default());
        assert!(matches!(result, Err(StoreError::InvalidInput(ref m)) if m == EMPTY_SUBMISSION));
        assert_eq!(db.count_reports().unwrap(), 0);
    }

    #[test]
    fn test_process_and_summary() {
        let db = Database::open_in_memory().unwrap();
        let store = ReportStore::new(&db);

        let processed = store
            .process("Hemoglobin low", "Ferrous sulfate 200mg OD")
            .unwrap();
        let stored = store.summary(&processed.report_id).unwrap();

        assert_eq!(stored, processed.summary);
        assert_eq!(stored.medications[0].name, "Ferrous Sulfate (iron supplement)");
    }

    #[test]
    fn test_summary_not_found() {
        let db = Database::open_in_memory().unwrap();
        let store = ReportStore::new(&db);

        let result = store.summary("missing");
        assert!(matches!(
            result,
            Err(StoreError::Database(DbError::NotFound(_)))
        ));
    }

    #[test]
    fn test_delete_unknown_report() {
        let db = Database::open_in_memory().unwrap();
        let store = ReportStore::new(&db);

        assert!(store.delete("missing").is_err());
        assert!(store.set_bookmark("missing", true).is_err());
    }
}
