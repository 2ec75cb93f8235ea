//! Medical glossary: jargon → plain-language phrase.
//!
//! The table is ordered. Declaration order decides which medication term wins
//! when several occur on one prescription line, so new entries go at the end of
//! their group rather than alphabetically.

/// A single glossary mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlossaryEntry {
    /// Canonical lowercase lookup key
    pub term: &'static str,
    /// Plain-language replacement, also used to classify medicines
    pub phrase: &'static str,
}

impl GlossaryEntry {
    const fn new(term: &'static str, phrase: &'static str) -> Self {
        Self { term, phrase }
    }
}

/// Keywords in a phrase that mark the entry as a medication.
pub const MEDICATION_KEYWORDS: &[&str] = &[
    "medicine",
    "antibiotic",
    "tablet",
    "injection",
    "inhaler",
    "supplement",
    "pill",
    "syrup",
];

/// Narrower keyword set for the whole-text token scan.
pub const FALLBACK_MEDICATION_KEYWORDS: &[&str] = &["medicine", "antibiotic", "supplement"];

/// The full glossary in declaration order.
pub static GLOSSARY: &[GlossaryEntry] = &[
    // Conditions
    GlossaryEntry::new("hypertension", "high blood pressure"),
    GlossaryEntry::new("hypotension", "low blood pressure"),
    GlossaryEntry::new("tachycardia", "fast heartbeat"),
    GlossaryEntry::new("bradycardia", "slow heartbeat"),
    GlossaryEntry::new("arrhythmia", "irregular heartbeat"),
    GlossaryEntry::new("myocardial infarction", "heart attack"),
    GlossaryEntry::new("angina", "chest pain from the heart"),
    GlossaryEntry::new("atherosclerosis", "hardening of the arteries"),
    GlossaryEntry::new("diabetes mellitus", "diabetes (high blood sugar)"),
    GlossaryEntry::new("hyperglycemia", "high blood sugar"),
    GlossaryEntry::new("hypoglycemia", "low blood sugar"),
    GlossaryEntry::new("anemia", "low red blood cells (tiredness, weakness)"),
    GlossaryEntry::new("leukocytosis", "high white blood cell count (possible infection)"),
    GlossaryEntry::new("leukopenia", "low white blood cell count (weak immune system)"),
    GlossaryEntry::new("thrombocytopenia", "low platelet count (bleeding risk)"),
    GlossaryEntry::new("thrombocytosis", "high platelet count"),
    GlossaryEntry::new("polycythemia", "too many red blood cells"),
    GlossaryEntry::new("hypothyroidism", "underactive thyroid (slow metabolism)"),
    GlossaryEntry::new("hyperthyroidism", "overactive thyroid (fast metabolism)"),
    GlossaryEntry::new("pneumonia", "lung infection"),
    GlossaryEntry::new("bronchitis", "airway inflammation"),
    GlossaryEntry::new("asthma", "breathing difficulty (airway tightening)"),
    GlossaryEntry::new("copd", "chronic lung disease"),
    GlossaryEntry::new("urinary tract infection", "bladder or kidney infection"),
    GlossaryEntry::new("uti", "bladder or kidney infection"),
    GlossaryEntry::new("gastritis", "stomach lining inflammation"),
    GlossaryEntry::new("hepatitis", "liver inflammation"),
    GlossaryEntry::new("cirrhosis", "liver scarring"),
    GlossaryEntry::new("nephritis", "kidney inflammation"),
    GlossaryEntry::new("renal failure", "kidney failure"),
    GlossaryEntry::new("osteoporosis", "weak and brittle bones"),
    GlossaryEntry::new("arthritis", "joint pain and swelling"),
    GlossaryEntry::new("rheumatoid arthritis", "immune system attacking joints"),
    GlossaryEntry::new("migraine", "severe headache (often with nausea)"),
    GlossaryEntry::new("epilepsy", "seizure disorder"),
    GlossaryEntry::new("depression", "persistent sadness and low mood"),
    GlossaryEntry::new("anxiety", "excessive worry and nervousness"),
    GlossaryEntry::new("insomnia", "difficulty sleeping"),
    GlossaryEntry::new("obesity", "excess body weight"),
    GlossaryEntry::new("malnutrition", "lack of proper nutrition"),
    GlossaryEntry::new("sepsis", "severe infection spreading through the blood"),
    GlossaryEntry::new("edema", "swelling from fluid buildup"),
    GlossaryEntry::new("jaundice", "yellowing of skin and eyes"),
    GlossaryEntry::new("dyspnea", "shortness of breath"),
    GlossaryEntry::new("dysphagia", "difficulty swallowing"),
    GlossaryEntry::new("nausea", "feeling sick to the stomach"),
    GlossaryEntry::new("emesis", "vomiting"),
    GlossaryEntry::new("diarrhea", "loose or watery stools"),
    GlossaryEntry::new("constipation", "difficulty passing stools"),
    GlossaryEntry::new("hematuria", "blood in urine"),
    GlossaryEntry::new("proteinuria", "protein in urine"),
    GlossaryEntry::new("albuminuria", "albumin protein in urine"),
    GlossaryEntry::new("pyrexia", "fever (high body temperature)"),
    GlossaryEntry::new("febrile", "having a fever"),
    GlossaryEntry::new("afebrile", "no fever"),
    GlossaryEntry::new("pruritus", "itching"),
    GlossaryEntry::new("erythema", "skin redness"),
    GlossaryEntry::new("cyanosis", "bluish skin color (low oxygen)"),
    GlossaryEntry::new("pallor", "pale skin"),
    GlossaryEntry::new("diaphoresis", "excessive sweating"),
    GlossaryEntry::new("vertigo", "dizziness (feeling of spinning)"),
    GlossaryEntry::new("syncope", "fainting"),
    GlossaryEntry::new("palpitations", "awareness of heartbeat"),
    GlossaryEntry::new("fatigue", "tiredness and lack of energy"),
    GlossaryEntry::new("malaise", "general feeling of being unwell"),
    GlossaryEntry::new("cachexia", "severe weight loss and muscle wasting"),
    // Lab values
    GlossaryEntry::new("hemoglobin", "red blood cell protein (carries oxygen)"),
    GlossaryEntry::new("hematocrit", "percentage of red blood cells in blood"),
    GlossaryEntry::new("wbc", "white blood cells (fight infection)"),
    GlossaryEntry::new("rbc", "red blood cells (carry oxygen)"),
    GlossaryEntry::new("platelets", "blood cells that help clotting"),
    GlossaryEntry::new("creatinine", "waste product filtered by kidneys"),
    GlossaryEntry::new("bun", "blood urea nitrogen (kidney waste marker)"),
    GlossaryEntry::new("alt", "liver enzyme (ALT)"),
    GlossaryEntry::new("ast", "liver enzyme (AST)"),
    GlossaryEntry::new("alkaline phosphatase", "liver/bone enzyme"),
    GlossaryEntry::new("bilirubin", "yellow pigment from red blood cell breakdown"),
    GlossaryEntry::new("albumin", "main protein in blood"),
    GlossaryEntry::new("glucose", "blood sugar"),
    GlossaryEntry::new("cholesterol", "fat-like substance in blood"),
    GlossaryEntry::new("triglycerides", "type of fat in blood"),
    GlossaryEntry::new("hdl", "good cholesterol"),
    GlossaryEntry::new("ldl", "bad cholesterol"),
    GlossaryEntry::new("tsh", "thyroid stimulating hormone"),
    GlossaryEntry::new("t3", "thyroid hormone (T3)"),
    GlossaryEntry::new("t4", "thyroid hormone (T4)"),
    GlossaryEntry::new("hba1c", "average blood sugar over 3 months"),
    GlossaryEntry::new("esr", "inflammation marker in blood"),
    GlossaryEntry::new("crp", "C-reactive protein (inflammation marker)"),
    GlossaryEntry::new("sodium", "salt level in blood"),
    GlossaryEntry::new("potassium", "mineral level in blood"),
    GlossaryEntry::new("calcium", "calcium level in blood"),
    GlossaryEntry::new("magnesium", "magnesium level in blood"),
    GlossaryEntry::new("phosphorus", "phosphorus level in blood"),
    GlossaryEntry::new("uric acid", "waste product (high levels cause gout)"),
    GlossaryEntry::new("ferritin", "iron storage protein"),
    GlossaryEntry::new("iron", "mineral needed for red blood cells"),
    GlossaryEntry::new("vitamin d", "vitamin D level"),
    GlossaryEntry::new("vitamin b12", "vitamin B12 level"),
    GlossaryEntry::new("folic acid", "Folic Acid (B vitamin supplement)"),
    GlossaryEntry::new("psa", "prostate specific antigen"),
    GlossaryEntry::new("inr", "blood clotting time"),
    GlossaryEntry::new("prothrombin time", "prothrombin time (clotting test)"),
    GlossaryEntry::new("aptt", "clotting test"),
    // Procedures and tests
    GlossaryEntry::new("ecg", "heart electrical activity test"),
    GlossaryEntry::new("ekg", "heart electrical activity test"),
    GlossaryEntry::new("echocardiogram", "heart ultrasound"),
    GlossaryEntry::new("mri", "magnetic resonance imaging scan"),
    GlossaryEntry::new("ct scan", "computed tomography (detailed X-ray)"),
    GlossaryEntry::new("ultrasound", "sound wave imaging"),
    GlossaryEntry::new("biopsy", "tissue sample test"),
    GlossaryEntry::new("endoscopy", "camera examination inside the body"),
    GlossaryEntry::new("colonoscopy", "camera examination of the colon"),
    GlossaryEntry::new("spirometry", "lung function test"),
    GlossaryEntry::new("urinalysis", "urine test"),
    GlossaryEntry::new("cbc", "complete blood count (full blood test)"),
    GlossaryEntry::new("lft", "liver function test"),
    GlossaryEntry::new("kft", "kidney function test"),
    GlossaryEntry::new("rft", "kidney function test"),
    GlossaryEntry::new("lipid profile", "cholesterol and fat levels test"),
    GlossaryEntry::new("thyroid profile", "thyroid hormone levels test"),
    // Medications
    GlossaryEntry::new("metformin", "Metformin (diabetes medicine)"),
    GlossaryEntry::new("insulin", "Insulin (diabetes injection)"),
    GlossaryEntry::new("amlodipine", "Amlodipine (blood pressure medicine)"),
    GlossaryEntry::new("atorvastatin", "Atorvastatin (cholesterol medicine)"),
    GlossaryEntry::new("omeprazole", "Omeprazole (stomach acid medicine)"),
    GlossaryEntry::new("pantoprazole", "Pantoprazole (stomach acid medicine)"),
    GlossaryEntry::new("amoxicillin", "Amoxicillin (antibiotic)"),
    GlossaryEntry::new("azithromycin", "Azithromycin (antibiotic)"),
    GlossaryEntry::new("ciprofloxacin", "Ciprofloxacin (antibiotic)"),
    GlossaryEntry::new("paracetamol", "Paracetamol (pain and fever medicine)"),
    GlossaryEntry::new(
        "acetaminophen",
        "Acetaminophen/Paracetamol (pain and fever medicine)",
    ),
    GlossaryEntry::new("ibuprofen", "Ibuprofen (pain and inflammation medicine)"),
    GlossaryEntry::new("aspirin", "Aspirin (pain relief and blood thinner)"),
    GlossaryEntry::new("lisinopril", "Lisinopril (blood pressure medicine)"),
    GlossaryEntry::new("losartan", "Losartan (blood pressure medicine)"),
    GlossaryEntry::new("metoprolol", "Metoprolol (heart and blood pressure medicine)"),
    GlossaryEntry::new("atenolol", "Atenolol (heart and blood pressure medicine)"),
    GlossaryEntry::new("furosemide", "Furosemide (water pill for swelling)"),
    GlossaryEntry::new(
        "hydrochlorothiazide",
        "Hydrochlorothiazide (water pill for blood pressure)",
    ),
    GlossaryEntry::new("levothyroxine", "Levothyroxine (thyroid hormone medicine)"),
    GlossaryEntry::new("prednisolone", "Prednisolone (steroid anti-inflammatory)"),
    GlossaryEntry::new("prednisone", "Prednisone (steroid anti-inflammatory)"),
    GlossaryEntry::new("cetirizine", "Cetirizine (allergy medicine)"),
    GlossaryEntry::new("loratadine", "Loratadine (allergy medicine)"),
    GlossaryEntry::new("salbutamol", "Salbutamol (inhaler for breathing)"),
    GlossaryEntry::new("albuterol", "Albuterol (inhaler for breathing)"),
    GlossaryEntry::new("warfarin", "Warfarin (blood thinner)"),
    GlossaryEntry::new("clopidogrel", "Clopidogrel (blood thinner)"),
    GlossaryEntry::new("sertraline", "Sertraline (antidepressant)"),
    GlossaryEntry::new("fluoxetine", "Fluoxetine (antidepressant)"),
    GlossaryEntry::new("diazepam", "Diazepam (anxiety/muscle relaxant)"),
    GlossaryEntry::new("alprazolam", "Alprazolam (anxiety medicine)"),
    GlossaryEntry::new("gabapentin", "Gabapentin (nerve pain medicine)"),
    GlossaryEntry::new("pregabalin", "Pregabalin (nerve pain medicine)"),
    GlossaryEntry::new("tramadol", "Tramadol (pain medicine)"),
    GlossaryEntry::new("codeine", "Codeine (pain medicine)"),
    GlossaryEntry::new("morphine", "Morphine (strong pain medicine)"),
    GlossaryEntry::new("ondansetron", "Ondansetron (anti-nausea medicine)"),
    GlossaryEntry::new("domperidone", "Domperidone (anti-nausea medicine)"),
    GlossaryEntry::new("metoclopramide", "Metoclopramide (anti-nausea medicine)"),
    GlossaryEntry::new("ranitidine", "Ranitidine (stomach acid medicine)"),
    GlossaryEntry::new("calcium carbonate", "Calcium Carbonate (calcium supplement)"),
    GlossaryEntry::new("vitamin d3", "Vitamin D3 (vitamin D supplement)"),
    GlossaryEntry::new("ferrous sulfate", "Ferrous Sulfate (iron supplement)"),
    // Prescription and chart abbreviations
    GlossaryEntry::new("od", "once daily"),
    GlossaryEntry::new("bd", "twice daily"),
    GlossaryEntry::new("tds", "three times daily"),
    GlossaryEntry::new("qid", "four times daily"),
    GlossaryEntry::new("sos", "when needed"),
    GlossaryEntry::new("prn", "when needed"),
    GlossaryEntry::new("ac", "before meals"),
    GlossaryEntry::new("pc", "after meals"),
    GlossaryEntry::new("hs", "at bedtime"),
    GlossaryEntry::new("stat", "immediately"),
    GlossaryEntry::new("po", "by mouth (oral)"),
    GlossaryEntry::new("iv", "into the vein (intravenous)"),
    GlossaryEntry::new("im", "into the muscle (intramuscular)"),
    GlossaryEntry::new("sc", "under the skin (subcutaneous)"),
    GlossaryEntry::new("sl", "under the tongue (sublingual)"),
    GlossaryEntry::new("tab", "tablet"),
    GlossaryEntry::new("cap", "capsule"),
    GlossaryEntry::new("syp", "syrup"),
    GlossaryEntry::new("inj", "injection"),
    GlossaryEntry::new("oint", "ointment"),
    GlossaryEntry::new("susp", "suspension"),
    GlossaryEntry::new("mg", "milligrams"),
    GlossaryEntry::new("mcg", "micrograms"),
    GlossaryEntry::new("ml", "milliliters"),
    GlossaryEntry::new("bp", "blood pressure"),
    GlossaryEntry::new("hr", "heart rate"),
    GlossaryEntry::new("rr", "breathing rate"),
    GlossaryEntry::new("spo2", "oxygen level in blood"),
    GlossaryEntry::new("bmi", "body mass index (weight-to-height ratio)"),
    GlossaryEntry::new("h/o", "history of"),
    GlossaryEntry::new("c/o", "complaining of"),
    GlossaryEntry::new("k/c/o", "known case of"),
    GlossaryEntry::new("dx", "diagnosis"),
    GlossaryEntry::new("rx", "prescription/treatment"),
    GlossaryEntry::new("fx", "fracture"),
    GlossaryEntry::new("hx", "history"),
    GlossaryEntry::new("sx", "symptoms"),
    GlossaryEntry::new("tx", "treatment"),
    GlossaryEntry::new("f/u", "follow-up"),
    GlossaryEntry::new("npo", "nothing by mouth (no food or drink)"),
    GlossaryEntry::new("icu", "intensive care unit"),
    GlossaryEntry::new("er", "emergency room"),
    GlossaryEntry::new("op", "outpatient"),
    GlossaryEntry::new("ip", "inpatient"),
    GlossaryEntry::new("ot", "operation theatre / occupational therapy"),
    GlossaryEntry::new("pt", "physical therapy / prothrombin time"),
    GlossaryEntry::new("rt", "respiratory therapy"),
];

/// Look up a glossary entry by term (case-insensitive).
pub fn lookup(term: &str) -> Option<&'static GlossaryEntry> {
    let lower = term.to_lowercase();
    GLOSSARY.iter().find(|entry| entry.term == lower)
}

/// Check whether a phrase mentions any of the given keywords.
pub fn phrase_mentions(phrase: &str, keywords: &[&str]) -> bool {
    let lower = phrase.to_lowercase();
    keywords.iter().any(|keyword| lower.contains(keyword))
}

/// Glossary entries that denote a medication, in declaration order.
pub fn medication_entries() -> impl Iterator<Item = &'static GlossaryEntry> {
    GLOSSARY
        .iter()
        .filter(|entry| phrase_mentions(entry.phrase, MEDICATION_KEYWORDS))
}
