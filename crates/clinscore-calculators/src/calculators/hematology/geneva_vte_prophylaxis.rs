use clinscore_core::{Assessment, Band, Params, Result, Specialty, Tally, classify};

use crate::Calculator;

/// Geneva risk score for VTE prophylaxis in hospitalized medical patients.
pub struct GenevaVteProphylaxis;

const MAJOR: &[&str] = &[
    "cardiac_failure",
    "respiratory_failure",
    "recent_stroke",
    "recent_myocardial_infarction",
    "acute_infectious_disease",
    "acute_rheumatic_disease",
    "active_malignancy",
    "myeloproliferative_syndrome",
    "nephrotic_syndrome",
    "prior_vte_history",
    "known_hypercoagulable_state",
];

const MINOR: &[&str] = &[
    "immobilization",
    "recent_travel",
    "age_over_60",
    "obesity",
    "chronic_venous_insufficiency",
    "pregnancy",
    "hormonal_therapy",
    "dehydration",
];

pub static BANDS: &[Band] = &[
    Band::new(
        0.0,
        3.0,
        "Low Risk",
        "Low risk for VTE",
        "Low VTE risk (about 0.6% at 3 months). Pharmacological prophylaxis is not routinely indicated; encourage early mobilization.",
    ),
    Band::new(
        3.0,
        f64::INFINITY,
        "High Risk",
        "High risk for VTE",
        "High VTE risk (about 3.2% at 3 months). Pharmacological thromboprophylaxis is recommended unless contraindicated.",
    ),
];

impl Calculator for GenevaVteProphylaxis {
    fn id(&self) -> &'static str {
        "geneva_vte_prophylaxis"
    }

    fn name(&self) -> &'static str {
        "Geneva Risk Score for VTE Prophylaxis"
    }

    fn specialty(&self) -> Specialty {
        Specialty::Hematology
    }

    fn parameters(&self) -> &'static [&'static str] {
        &[
            "cardiac_failure",
            "respiratory_failure",
            "recent_stroke",
            "recent_myocardial_infarction",
            "acute_infectious_disease",
            "acute_rheumatic_disease",
            "active_malignancy",
            "myeloproliferative_syndrome",
            "nephrotic_syndrome",
            "prior_vte_history",
            "known_hypercoagulable_state",
            "immobilization",
            "recent_travel",
            "age_over_60",
            "obesity",
            "chronic_venous_insufficiency",
            "pregnancy",
            "hormonal_therapy",
            "dehydration",
        ]
    }

    fn bands(&self) -> &'static [Band] {
        BANDS
    }

    fn calculate(&self, params: &Params) -> Result<Assessment> {
        let mut tally = Tally::new();
        for field in MAJOR {
            tally.flag(field, params.yes_no(field)?, 2);
        }
        for field in MINOR {
            tally.flag(field, params.yes_no(field)?, 1);
        }

        let score = tally.total();
        let band = classify(BANDS, score as f64);
        Ok(Assessment::from_band(score, "points", band)
            .with_interpretation(format!("Geneva risk score {score}. {}", band.interpretation))
            .with_detail("breakdown", tally.breakdown()))
    }
}
