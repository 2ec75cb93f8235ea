//! Action step generation.

use std::sync::LazyLock;

use regex::Regex;

use super::combined_text;
use crate::models::ActionStep;

/// First step whenever a prescription was given.
pub const COMPLIANCE_STEP: &str =
    "💊 Take all prescribed medicines exactly as directed by your doctor. Do not skip doses.";

/// Closing steps, always present.
pub const FOLLOW_UP_STEP: &str =
    "📅 Schedule a follow-up appointment with your doctor to review these results and your progress.";
pub const QUESTIONS_STEP: &str =
    "❓ Write down any questions or new symptoms to discuss with your doctor at your next visit.";

/// Inserted at the front when the text contains an urgency keyword.
pub const URGENT_STEP: &str = "🚨 IMPORTANT: Your report contains urgent findings. Please contact your doctor or go to the emergency room immediately.";

/// A condition signal and the steps it adds.
struct ConditionSignal {
    pattern: Regex,
    steps: &'static [&'static str],
}

fn signal(pattern: &str, steps: &'static [&'static str]) -> ConditionSignal {
    ConditionSignal {
        pattern: Regex::new(pattern).expect("Invalid signal regex pattern"),
        steps,
    }
}

static URGENCY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"severe|critical|urgent|emergency|immediately").expect("Invalid urgency regex")
});

/// Condition signals in output order.
static SIGNALS: LazyLock<Vec<ConditionSignal>> = LazyLock::new(|| {
    vec![
        signal(
            r"hypertension|high blood pressure",
            &[
                "🧂 Reduce salt in your diet and avoid processed foods to help lower blood pressure.",
                "🚶 Exercise regularly (30 minutes of walking daily) to help control blood pressure.",
            ],
        ),
        signal(
            r"diabetes|blood sugar|hyperglycemia",
            &[
                "🍎 Follow a low-sugar, low-carbohydrate diet. Avoid sweets, white rice, and sugary drinks.",
                "📊 Monitor your blood sugar levels regularly as advised by your doctor.",
            ],
        ),
        signal(
            r"cholesterol|ldl|lipid",
            &["🥗 Eat a heart-healthy diet: more vegetables, fruits, and whole grains; less fried and fatty foods."],
        ),
        signal(
            r"anemia|low hemoglobin|iron deficient",
            &["🥩 Eat iron-rich foods like spinach, lentils, beans, and lean meat to help improve blood levels."],
        ),
        signal(
            r"vitamin d.*deficient|low.*vitamin d",
            &["☀️ Get 15-20 minutes of sunlight daily and take Vitamin D supplements as prescribed."],
        ),
        signal(
            r"infection|bacteria|viral|fever",
            &[
                "🛏️ Rest well and drink plenty of fluids (water, soups) to help your body fight the infection.",
                "🌡️ Monitor your temperature. If fever goes above 103°F (39.4°C), seek immediate medical attention.",
            ],
        ),
        signal(
            r"kidney|renal",
            &[
                "💧 Drink adequate water (6-8 glasses daily) to support kidney function.",
                "🚫 Avoid excessive salt, protein, and over-the-counter pain medicines that can stress the kidneys.",
            ],
        ),
        signal(
            r"liver|hepatic",
            &[
                "🚫 Avoid alcohol completely to protect your liver.",
                "🥦 Eat a balanced diet with plenty of vegetables and avoid fatty, fried foods.",
            ],
        ),
    ]
});

/// Generate ordered advice steps for the report and prescription text.
pub fn generate_action_steps(report_text: &str, prescription_text: &str) -> Vec<ActionStep> {
    let combined = combined_text(report_text, prescription_text);
    let mut steps = Vec::new();

    if !prescription_text.trim().is_empty() {
        steps.push(ActionStep::new(COMPLIANCE_STEP));
    }

    for signal in SIGNALS.iter().filter(|s| s.pattern.is_match(&combined)) {
        steps.extend(signal.steps.iter().copied().map(ActionStep::new));
    }

    steps.push(ActionStep::new(FOLLOW_UP_STEP));
    steps.push(ActionStep::new(QUESTIONS_STEP));

    if URGENCY.is_match(&combined) {
        steps.insert(0, ActionStep::new(URGENT_STEP));
    }

    steps
}
