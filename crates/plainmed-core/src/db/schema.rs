//! SQLite schema definition.

/// Complete database schema for plainmed.
pub const SCHEMA: &str = r#"
-- ============================================================================
-- Reports
-- ============================================================================

CREATE TABLE IF NOT EXISTS reports (
    report_id TEXT PRIMARY KEY,
    report_text TEXT NOT NULL DEFAULT '',
    prescription_text TEXT NOT NULL DEFAULT '',
    key_findings TEXT NOT NULL DEFAULT '[]',     -- JSON array of strings
    medications TEXT NOT NULL DEFAULT '[]',      -- JSON array of Medication
    action_steps TEXT NOT NULL DEFAULT '[]',     -- JSON array of ActionStep
    bookmarked INTEGER NOT NULL DEFAULT 0 CHECK (bookmarked IN (0, 1)),
    created_at TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%SZ', 'now')),
    updated_at TEXT NOT NULL DEFAULT (datetime('now'))
);

-- History is listed newest first
CREATE INDEX IF NOT EXISTS idx_reports_created_at ON reports(created_at);
CREATE INDEX IF NOT EXISTS idx_reports_bookmarked ON reports(bookmarked);
"#;
