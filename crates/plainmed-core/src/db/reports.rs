//! Report database operations.

use rusqlite::{params, OptionalExtension};

use super::{Database, DbError, DbResult};
use crate::models::{
    excerpt_source, make_excerpt, ActionStep, HistoryEntry, HistoryOptions, Medication, ReportRecord,
    SimplifiedSummary,
};

impl Database {
    /// Insert a new report.
    pub fn insert_report(&self, record: &ReportRecord) -> DbResult<()> {
        let key_findings_json = serde_json::to_string(&record.summary.key_findings)?;
        let medications_json = serde_json::to_string(&record.summary.medications)?;
        let action_steps_json = serde_json::to_string(&record.summary.action_steps)?;

        self.conn.execute(
            r#"
            INSERT INTO reports (
                report_id, report_text, prescription_text, key_findings,
                medications, action_steps, bookmarked, created_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
            "#,
            params![
                record.report_id,
                record.report_text,
                record.prescription_text,
                key_findings_json,
                medications_json,
                action_steps_json,
                record.bookmarked,
                record.created_at,
            ],
        )?;
        Ok(())
    }

    /// Get a report by ID.
    pub fn get_report(&self, report_id: &str) -> DbResult<Option<ReportRecord>> {
        self.conn
            .query_row(
                r#"
                SELECT report_id, report_text, prescription_text, key_findings,
                       medications, action_steps, bookmarked, created_at
                FROM reports
                WHERE report_id = ?
                "#,
                [report_id],
                |row| {
                    Ok(ReportRow {
                        report_id: row.get(0)?,
                        report_text: row.get(1)?,
                        prescription_text: row.get(2)?,
                        key_findings: row.get(3)?,
                        medications: row.get(4)?,
                        action_steps: row.get(5)?,
                        bookmarked: row.get(6)?,
                        created_at: row.get(7)?,
                    })
                },
            )
            .optional()?
            .map(|row| row.try_into())
            .transpose()
    }

    /// List report history, newest first.
    pub fn list_history(&self, options: &HistoryOptions) -> DbResult<Vec<HistoryEntry>> {
        let limit = options.limit.map(|l| l as i64).unwrap_or(-1);
        let mut stmt = self.conn.prepare(
            r#"
            SELECT report_id, report_text, prescription_text, bookmarked, created_at
            FROM reports
            WHERE bookmarked = 1 OR ?1 = 0
            ORDER BY created_at DESC, rowid DESC
            LIMIT ?2
            "#,
        )?;

        let rows = stmt.query_map(params![options.bookmarked_only, limit], |row| {
            Ok(HistoryRow {
                report_id: row.get(0)?,
                report_text: row.get(1)?,
                prescription_text: row.get(2)?,
                bookmarked: row.get(3)?,
                created_at: row.get(4)?,
            })
        })?;

        let mut entries = Vec::new();
        for row in rows {
            entries.push(row?.into_entry(options.excerpt_max_chars));
        }
        Ok(entries)
    }

    /// Set the bookmark flag. Returns false if the report does not exist.
    pub fn set_bookmark(&self, report_id: &str, bookmarked: bool) -> DbResult<bool> {
        let rows_affected = self.conn.execute(
            "UPDATE reports SET bookmarked = ?2, updated_at = datetime('now') WHERE report_id = ?1",
            params![report_id, bookmarked],
        )?;
        Ok(rows_affected > 0)
    }

    /// Flip the bookmark flag and return the new value.
    pub fn toggle_bookmark(&self, report_id: &str) -> DbResult<bool> {
        self.conn
            .query_row(
                r#"
                UPDATE reports
                SET bookmarked = 1 - bookmarked, updated_at = datetime('now')
                WHERE report_id = ?
                RETURNING bookmarked
                "#,
                [report_id],
                |row| row.get(0),
            )
            .optional()?
            .ok_or_else(|| DbError::NotFound(report_id.to_string()))
    }

    /// Delete a report.
    pub fn delete_report(&self, report_id: &str) -> DbResult<bool> {
        let rows_affected = self
            .conn
            .execute("DELETE FROM reports WHERE report_id = ?", [report_id])?;
        Ok(rows_affected > 0)
    }

    /// Count stored reports.
    pub fn count_reports(&self) -> DbResult<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM reports", [], |row| row.get(0))?;
        Ok(count as usize)
    }
}

/// Intermediate row struct for database mapping.
struct ReportRow {
    report_id: String,
    report_text: String,
    prescription_text: String,
    key_findings: String,
    medications: String,
    action_steps: String,
    bookmarked: bool,
    created_at: String,
}

impl TryFrom<ReportRow> for ReportRecord {
    type Error = DbError;

    fn try_from(row: ReportRow) -> Result<Self, Self::Error> {
        let key_findings: Vec<String> = serde_json::from_str(&row.key_findings)?;
        let medications: Vec<Medication> = serde_json::from_str(&row.medications)?;
        let action_steps: Vec<ActionStep> = serde_json::from_str(&row.action_steps)?;

        Ok(ReportRecord {
            report_id: row.report_id,
            report_text: row.report_text,
            prescription_text: row.prescription_text,
            summary: SimplifiedSummary {
                key_findings,
                medications,
                action_steps,
            },
            bookmarked: row.bookmarked,
            created_at: row.created_at,
        })
    }
}

/// History row; the excerpt is built at read time.
struct HistoryRow {
    report_id: String,
    report_text: String,
    prescription_text: String,
    bookmarked: bool,
    created_at: String,
}

impl HistoryRow {
    fn into_entry(self, excerpt_max_chars: usize) -> HistoryEntry {
        let source = excerpt_source(&self.report_text, &self.prescription_text);

        HistoryEntry {
            excerpt: make_excerpt(source, excerpt_max_chars),
            created_at: self.created_at,
            report_id: self.report_id,
            bookmarked: self.bookmarked,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simplifier::simplify;

    fn make_record(report: &str, prescription: &str, created_at: &str) -> ReportRecord {
        let mut record = ReportRecord::new(
            report.into(),
            prescription.into(),
            simplify(report, prescription),
        );
        record.created_at = created_at.into();
        record
    }

    #[test]
    fn test_insert_and_get_report() {
        let db = Database::open_in_memory().unwrap();
        let record = make_record("CBC within normal limits", "Metformin 500mg BD", "2026-01-01T10:00:00+00:00");

        db.insert_report(&record).unwrap();

        let retrieved = db.get_report(&record.report_id).unwrap().unwrap();
        assert_eq!(retrieved, record);
        assert_eq!(retrieved.summary.medications.len(), 1);
    }

    #[test]
    fn test_get_missing_report() {
        let db = Database::open_in_memory().unwrap();
        assert!(db.get_report("missing").unwrap().is_none());
    }

    #[test]
    fn test_history_newest_first() {
        let db = Database::open_in_memory().unwrap();
        let older = make_record("Older report", "", "2026-01-01T10:00:00+00:00");
        let newer = make_record("Newer report", "", "2026-02-01T10:00:00+00:00");
        db.insert_report(&older).unwrap();
        db.insert_report(&newer).unwrap();

        let history = db.list_history(&HistoryOptions::default()).unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].report_id, newer.report_id);
        assert_eq!(history[0].excerpt, "Newer report");
        assert_eq!(history[1].report_id, older.report_id);
    }

    #[test]
    fn test_history_same_timestamp_uses_insert_order() {
        let db = Database::open_in_memory().unwrap();
        let first = make_record("First", "", "2026-01-01T10:00:00+00:00");
        let second = make_record("Second", "", "2026-01-01T10:00:00+00:00");
        db.insert_report(&first).unwrap();
        db.insert_report(&second).unwrap();

        let history = db.list_history(&HistoryOptions::default()).unwrap();
        assert_eq!(history[0].report_id, second.report_id);
    }

    #[test]
    fn test_history_limit_and_bookmarked_only() {
        let db = Database::open_in_memory().unwrap();
        let a = make_record("A", "", "2026-01-01T10:00:00+00:00");
        let b = make_record("B", "", "2026-01-02T10:00:00+00:00");
        let c = make_record("C", "", "2026-01-03T10:00:00+00:00");
        for record in [&a, &b, &c] {
            db.insert_report(record).unwrap();
        }
        db.set_bookmark(&a.report_id, true).unwrap();

        let options = HistoryOptions {
            limit: Some(2),
            ..HistoryOptions::default()
        };
        let history = db.list_history(&options).unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].report_id, c.report_id);

        let options = HistoryOptions {
            bookmarked_only: true,
            ..HistoryOptions::default()
        };
        let history = db.list_history(&options).unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].report_id, a.report_id);
        assert!(history[0].bookmarked);
    }

    #[test]
    fn test_history_excerpt_falls_back_to_prescription() {
        let db = Database::open_in_memory().unwrap();
        let record = make_record("", "Amlodipine 5mg OD", "2026-01-01T10:00:00+00:00");
        db.insert_report(&record).unwrap();

        let history = db.list_history(&HistoryOptions::default()).unwrap();
        assert_eq!(history[0].excerpt, "Amlodipine 5mg OD");
    }

    #[test]
    fn test_toggle_bookmark() {
        let db = Database::open_in_memory().unwrap();
        let record = make_record("Report", "", "2026-01-01T10:00:00+00:00");
        db.insert_report(&record).unwrap();

        assert!(db.toggle_bookmark(&record.report_id).unwrap());
        assert!(db.get_report(&record.report_id).unwrap().unwrap().bookmarked);
        assert!(!db.toggle_bookmark(&record.report_id).unwrap());
    }

    #[test]
    fn test_toggle_missing_bookmark() {
        let db = Database::open_in_memory().unwrap();
        let result = db.toggle_bookmark("missing");
        assert!(matches!(result, Err(DbError::NotFound(_))));
    }

    #[test]
    fn test_delete_report() {
        let db = Database::open_in_memory().unwrap();
        let record = make_record("Report", "", "2026-01-01T10:00:00+00:00");
        db.insert_report(&record).unwrap();
        assert_eq!(db.count_reports().unwrap(), 1);

        assert!(db.delete_report(&record.report_id).unwrap());
        assert!(!db.delete_report(&record.report_id).unwrap());
        assert_eq!(db.count_reports().unwrap(), 0);
    }
}
