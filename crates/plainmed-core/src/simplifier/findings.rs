//! Key finding extraction.
//!
//! Findings are canned sentences. The input text only decides which of them
//! are shown, never what they say.

use std::sync::LazyLock;

use regex::Regex;

use super::combined_text;

/// Shown when nothing specific was found in a non-empty report.
pub const REPORT_FALLBACK: &str =
    "Your report has been processed. Please review the details with your doctor.";

/// Shown when nothing specific was found and a prescription was given.
pub const PRESCRIPTION_FALLBACK: &str =
    "A prescription has been provided. Follow the medication instructions carefully.";

/// Always the last finding.
pub const CLOSING_ADVISORY: &str =
    "Always consult your doctor to understand what these results mean for your health.";

/// A pattern over the combined lowercased text and the sentence it produces.
pub struct FindingRule {
    pub pattern: Regex,
    pub message: &'static str,
}

fn rule(pattern: &str, message: &'static str) -> FindingRule {
    FindingRule {
        pattern: Regex::new(pattern).expect("Invalid finding regex pattern"),
        message,
    }
}

/// Finding rules in output order.
pub static FINDING_RULES: LazyLock<Vec<FindingRule>> = LazyLock::new(|| {
    vec![
        rule(
            r"hypertension|high blood pressure|bp.*elevated|elevated.*bp",
            "High blood pressure (hypertension) was noted.",
        ),
        rule(
            r"diabetes|hyperglycemia|high blood sugar|hba1c.*elevated|elevated.*hba1c",
            "Elevated blood sugar levels (diabetes-related) were detected.",
        ),
        rule(
            r"anemia|low hemoglobin|hemoglobin.*low|low.*hb\b",
            "Low red blood cell levels (anemia) were found — this can cause tiredness.",
        ),
        rule(
            r"infection|bacteria|viral|fever|pyrexia|leukocytosis",
            "Signs of infection or inflammation were detected.",
        ),
        rule(
            r"cholesterol.*high|high.*cholesterol|hypercholesterolemia|ldl.*elevated|elevated.*ldl",
            "High cholesterol levels were found — this can affect heart health.",
        ),
        rule(
            r"thyroid|tsh.*elevated|tsh.*low|hypothyroid|hyperthyroid",
            "Thyroid hormone levels were abnormal.",
        ),
        rule(
            r"kidney|renal|creatinine.*elevated|elevated.*creatinine|kft.*abnormal",
            "Kidney function markers showed some abnormality.",
        ),
        rule(
            r"liver|hepatic|alt.*elevated|ast.*elevated|lft.*abnormal",
            "Liver function markers showed some abnormality.",
        ),
        rule(
            r"vitamin d.*deficient|deficient.*vitamin d|low.*vitamin d",
            "Vitamin D deficiency was detected.",
        ),
        rule(
            r"vitamin b12.*low|low.*vitamin b12|b12.*deficient",
            "Vitamin B12 deficiency was detected.",
        ),
        rule(
            r"iron.*deficient|deficient.*iron|low.*ferritin|ferritin.*low",
            "Iron deficiency was detected.",
        ),
        rule(
            r"normal|within normal|wnl|unremarkable",
            "Most test results appear to be within normal range.",
        ),
        rule(
            r"urine.*infection|uti|urinary tract",
            "A urinary tract infection (bladder/kidney infection) was detected.",
        ),
        rule(
            r"pneumonia|lung infection|chest infection",
            "A lung infection (pneumonia) was detected.",
        ),
        rule(r"fracture|broken bone", "A bone fracture (break) was identified."),
        rule(
            r"tumor|cancer|malignant|carcinoma",
            "Abnormal tissue growth was detected — further evaluation is needed.",
        ),
        rule(
            r"benign",
            "The growth or finding appears to be non-cancerous (benign).",
        ),
        rule(
            r"obesity|overweight|bmi.*elevated|elevated.*bmi",
            "Body weight is above the healthy range.",
        ),
        rule(
            r"dehydration|low fluid",
            "Signs of dehydration (low fluid levels) were noted.",
        ),
        rule(
            r"electrolyte|sodium.*low|potassium.*low|low.*sodium|low.*potassium",
            "Electrolyte (mineral) imbalance was detected.",
        ),
    ]
});

/// Extract key findings from the report and prescription text.
pub fn extract_findings(report_text: &str, prescription_text: &str) -> Vec<String> {
    let combined = combined_text(report_text, prescription_text);

    let mut findings: Vec<String> = FINDING_RULES
        .iter()
        .filter(|rule| rule.pattern.is_match(&combined))
        .map(|rule| rule.message.to_string())
        .collect();

    if findings.is_empty() {
        if !report_text.trim().is_empty() {
            findings.push(REPORT_FALLBACK.to_string());
        }
        if !prescription_text.trim().is_empty() {
            findings.push(PRESCRIPTION_FALLBACK.to_string());
        }
    }

    findings.push(CLOSING_ADVISORY.to_string());
    findings
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_inputs_only_advisory() {
        assert_eq!(extract_findings("", ""), vec![CLOSING_ADVISORY.to_string()]);
        assert_eq!(extract_findings("   ", "\n"), vec![CLOSING_ADVISORY.to_string()]);
    }

    #[test]
    fn test_fallbacks() {
        let findings = extract_findings("Seen in clinic today", "");
        assert_eq!(findings, vec![REPORT_FALLBACK, CLOSING_ADVISORY]);

        let findings = extract_findings("", "Take as advised");
        assert_eq!(findings, vec![PRESCRIPTION_FALLBACK, CLOSING_ADVISORY]);

        let findings = extract_findings("Seen in clinic today", "Take as advised");
        assert_eq!(
            findings,
            vec![REPORT_FALLBACK, PRESCRIPTION_FALLBACK, CLOSING_ADVISORY]
        );
    }

    #[test]
    fn test_rules_fire_in_table_order() {
        // Diabetes is mentioned first in the text but the table lists
        // hypertension first.
        let findings = extract_findings("Type 2 diabetes with hypertension", "");
        assert_eq!(
            findings,
            vec![
                "High blood pressure (hypertension) was noted.",
                "Elevated blood sugar levels (diabetes-related) were detected.",
                CLOSING_ADVISORY,
            ]
        );
    }

    #[test]
    fn test_rules_see_both_texts() {
        let findings = extract_findings("Renal profile done", "for fever");
        assert!(findings.contains(&"Signs of infection or inflammation were detected.".to_string()));
        assert!(findings.contains(&"Kidney function markers showed some abnormality.".to_string()));
        assert!(!findings.contains(&REPORT_FALLBACK.to_string()));
    }

    #[test]
    fn test_case_insensitive() {
        let findings = extract_findings("PNEUMONIA confirmed on X-ray", "");
        assert!(findings.contains(&"A lung infection (pneumonia) was detected.".to_string()));
    }

    #[test]
    fn test_rule_table_size() {
        assert_eq!(FINDING_RULES.len(), 20);
    }
}
