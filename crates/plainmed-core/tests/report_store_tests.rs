//! Report store integration tests.

use plainmed_core::db::Database;
use plainmed_core::store::{ReportStore, StoreError, EMPTY_SUBMISSION};
use plainmed_core::{open_database, open_database_in_memory, simplify, HistoryOptions, PlainMedError};

const REPORT: &str = "Patient has hypertension. Lipid profile shows high cholesterol.";
const PRESCRIPTION: &str = "Atorvastatin 10mg at night\nAmlodipine 5mg OD";

#[test]
fn test_submit_then_retrieve() {
    let db = Database::open_in_memory().unwrap();
    let store = ReportStore::new(&db);

    let summary = simplify(REPORT, PRESCRIPTION);
    let report_id = store.submit(REPORT, PRESCRIPTION, summary.clone()).unwrap();

    let record = store.get(&report_id).unwrap().unwrap();
    assert_eq!(record.report_text, REPORT);
    assert_eq!(record.prescription_text, PRESCRIPTION);
    assert_eq!(record.summary, summary);
    assert!(!record.bookmarked);

    let meds: Vec<_> = record.summary.medications.iter().map(|m| m.dosage.as_str()).collect();
    assert_eq!(meds, vec!["10 mg, at bedtime", "5 mg, once daily"]);
}

#[test]
fn test_blank_submission_stores_nothing() {
    let db = Database::open_in_memory().unwrap();
    let store = ReportStore::new(&db);

    let result = store.process("", "   ");
    assert!(matches!(result, Err(StoreError::InvalidInput(ref m)) if m == EMPTY_SUBMISSION));
    assert!(store.history(&HistoryOptions::default()).unwrap().is_empty());
}

#[test]
fn test_history_bookmark_and_delete_flow() {
    let db = Database::open_in_memory().unwrap();
    let store = ReportStore::new(&db);

    let first = store.process("First report", "").unwrap();
    let second = store.process("", "Cetirizine 10mg at night").unwrap();

    let history = store.history(&HistoryOptions::default()).unwrap();
    assert_eq!(history.len(), 2);
    let excerpts: Vec<_> = history.iter().map(|h| h.excerpt.as_str()).collect();
    assert!(excerpts.contains(&"First report"));
    assert!(excerpts.contains(&"Cetirizine 10mg at night"));

    assert!(store.toggle_bookmark(&first.report_id).unwrap());
    let bookmarked = store
        .history(&HistoryOptions {
            bookmarked_only: true,
            ..HistoryOptions::default()
        })
        .unwrap();
    assert_eq!(bookmarked.len(), 1);
    assert_eq!(bookmarked[0].report_id, first.report_id);

    store.delete(&second.report_id).unwrap();
    assert!(store.get(&second.report_id).unwrap().is_none());
    assert_eq!(store.history(&HistoryOptions::default()).unwrap().len(), 1);
}

#[test]
fn test_reports_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("reports.db");

    let report_id = {
        let db = Database::open(&path).unwrap();
        let store = ReportStore::new(&db);
        let processed = store.process(REPORT, PRESCRIPTION).unwrap();
        store.set_bookmark(&processed.report_id, true).unwrap();
        processed.report_id
    };

    let db = Database::open(&path).unwrap();
    let store = ReportStore::new(&db);
    let record = store.get(&report_id).unwrap().unwrap();
    assert!(record.bookmarked);
    assert_eq!(record.summary, simplify(REPORT, PRESCRIPTION));
}

#[test]
fn test_ffi_process_and_export() {
    let core = open_database_in_memory().unwrap();

    let processed = core
        .process_report(REPORT.to_string(), PRESCRIPTION.to_string())
        .unwrap();
    assert!(!processed.summary.urgent);

    let fetched = core.get_summary(processed.report_id.clone()).unwrap();
    assert_eq!(fetched, processed.summary);

    let text = core.export_summary_text(processed.report_id.clone()).unwrap();
    assert!(text.starts_with("=== Key Findings ===\n• High blood pressure (hypertension) was noted."));
    assert!(text.contains(
        "• Atorvastatin (cholesterol medicine): To lower cholesterol levels (10 mg, at bedtime)"
    ));

    let json = core.export_summary_json(processed.report_id.clone()).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed["report_id"], processed.report_id.as_str());
}

#[test]
fn test_ffi_submit_precomputed_summary() {
    let core = open_database_in_memory().unwrap();

    let summary = plainmed_core::simplify_report(String::new(), "Metformin 500mg BD".to_string());
    let report_id = core
        .submit_report(String::new(), "Metformin 500mg BD".to_string(), summary.clone())
        .unwrap();

    assert_eq!(core.get_summary(report_id.clone()).unwrap(), summary);

    let history = core.get_history(Some(10), false).unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].excerpt, "Metformin 500mg BD");
}

#[test]
fn test_ffi_errors() {
    let core = open_database_in_memory().unwrap();

    assert!(matches!(
        core.get_summary("missing".to_string()),
        Err(PlainMedError::NotFound(_))
    ));
    assert!(matches!(
        core.toggle_bookmark("missing".to_string()),
        Err(PlainMedError::NotFound(_))
    ));
    assert!(matches!(
        core.delete_report("missing".to_string()),
        Err(PlainMedError::NotFound(_))
    ));
    assert!(matches!(
        core.process_report(String::new(), String::new()),
        Err(PlainMedError::InvalidInput(_))
    ));
}

#[test]
fn test_ffi_file_backed_database() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("plainmed.db").to_string_lossy().into_owned();

    let core = open_database(path.clone()).unwrap();
    let processed = core
        .process_report("Vitamin D deficient".to_string(), String::new())
        .unwrap();
    drop(core);

    let core = open_database(path).unwrap();
    let record = core.get_report(processed.report_id).unwrap().unwrap();
    assert_eq!(record.report_text, "Vitamin D deficient");
    assert_eq!(
        record.summary.key_findings[0],
        "Vitamin D deficiency was detected."
    );
}
