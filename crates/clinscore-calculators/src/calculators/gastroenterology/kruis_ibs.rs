use clinscore_core::{Assessment, Band, Params, Result, Specialty, Tally, classify};

use crate::Calculator;

/// Kruis score: symptom points minus laboratory and examination red flags.
/// 44 or more supports a positive diagnosis of irritable bowel syndrome.
pub struct KruisIbs;

const SYMPTOMS: &[(&str, i64)] = &[
    ("symptoms_present", 34),
    ("duration_over_2_years", 16),
    ("pain_description", 23),
    ("alternating_bowel_habits", 14),
];

const RED_FLAGS: &[(&str, i64)] = &[
    ("abnormal_physical_findings", -47),
    ("esr_over_10", -13),
    ("wbc_over_10000", -50),
    ("low_hemoglobin", -98),
    ("history_blood_in_stool", -98),
];

const THRESHOLD: f64 = 44.0;

pub static BANDS: &[Band] = &[
    Band::new(
        f64::NEG_INFINITY,
        THRESHOLD,
        "Negative for IBS",
        "Score < 44 points",
        "Score below the diagnostic threshold. IBS is not supported; investigate alternative diagnoses.",
    ),
    Band::new(
        THRESHOLD,
        f64::INFINITY,
        "Positive for IBS",
        "Score ≥ 44 points",
        "Score supports a positive diagnosis of IBS without further extensive work-up, provided no red flags are present.",
    ),
];

impl Calculator for KruisIbs {
    fn id(&self) -> &'static str {
        "kruis_ibs"
    }

    fn name(&self) -> &'static str {
        "Kruis Score for Irritable Bowel Syndrome"
    }

    fn specialty(&self) -> Specialty {
        Specialty::Gastroenterology
    }

    fn parameters(&self) -> &'static [&'static str] {
        &[
            "symptoms_present",
            "duration_over_2_years",
            "pain_description",
            "alternating_bowel_habits",
            "abnormal_physical_findings",
            "esr_over_10",
            "wbc_over_10000",
            "low_hemoglobin",
            "history_blood_in_stool",
        ]
    }

    fn bands(&self) -> &'static [Band] {
        BANDS
    }

    fn calculate(&self, params: &Params) -> Result<Assessment> {
        let mut symptoms = Tally::new();
        for (field, weight) in SYMPTOMS {
            symptoms.flag(field, params.yes_no(field)?, *weight);
        }
        let mut flags = Tally::new();
        let mut present = Vec::new();
        for (field, weight) in RED_FLAGS {
            let yes = params.yes_no(field)?;
            if yes {
                present.push(*field);
            }
            flags.flag(field, yes, *weight);
        }

        let score = symptoms.total() + flags.total();
        let band = classify(BANDS, score as f64);
        let mut interpretation = format!("Kruis score {score}. {}", band.interpretation);
        if !present.is_empty() {
            interpretation.push_str(&format!(
                " Red flags present ({}): organic disease must be excluded.",
                present.join(", ")
            ));
        }
        Ok(Assessment::from_band(score, "points", band)
            .with_interpretation(interpretation)
            .with_detail("symptom_score", symptoms.total())
            .with_detail("red_flag_score", flags.total())
            .with_detail("red_flags_present", present))
    }
}
