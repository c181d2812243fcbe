use clinscore_core::{Assessment, Band, Params, Result, Specialty, Tally, classify};
use serde::{Deserialize, Serialize};

use crate::Calculator;

/// IMPEDE VTE: venous thromboembolism risk in multiple myeloma.
pub struct ImpedeVte;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dexamethasone {
    None,
    LowDose,
    HighDose,
}

impl Dexamethasone {
    pub fn points(self) -> i64 {
        match self {
            Dexamethasone::None => 0,
            Dexamethasone::LowDose => 2,
            Dexamethasone::HighDose => 4,
        }
    }
}

/// Protective factors carry negative weights.
const FACTORS: &[(&str, i64)] = &[
    ("immunomodulatory_drug", 4),
    ("bmi_25_or_greater", 1),
    ("pelvic_hip_femur_fracture", 4),
    ("erythropoiesis_stimulating_agent", 1),
    ("doxorubicin_use", 3),
    ("asian_pacific_islander", -3),
    ("history_of_vte", 5),
    ("tunneled_line_cvc", 2),
    ("therapeutic_anticoagulation", -4),
    ("prophylactic_anticoagulation", -3),
];

pub static BANDS: &[Band] = &[
    Band::new(
        f64::NEG_INFINITY,
        4.0,
        "Low Risk",
        "Score of 3 points or less",
        "Low VTE risk; 6-month cumulative incidence 3.8-5.0%. Standard monitoring and general prophylaxis measures.",
    ),
    Band::new(
        4.0,
        8.0,
        "Intermediate Risk",
        "Score of 4-7 points",
        "Intermediate VTE risk; 6-month cumulative incidence 8.8-11.1%. Consider pharmacological thromboprophylaxis.",
    ),
    Band::new(
        8.0,
        f64::INFINITY,
        "High Risk",
        "Score of 8 points or more",
        "High VTE risk; 6-month cumulative incidence 15.2-21.5%. Pharmacological thromboprophylaxis is strongly recommended.",
    ),
];

impl Calculator for ImpedeVte {
    fn id(&self) -> &'static str {
        "impede_vte"
    }

    fn name(&self) -> &'static str {
        "IMPEDE VTE Score"
    }

    fn specialty(&self) -> Specialty {
        Specialty::Hematology
    }

    fn parameters(&self) -> &'static [&'static str] {
        &[
            "immunomodulatory_drug",
            "bmi_25_or_greater",
            "pelvic_hip_femur_fracture",
            "erythropoiesis_stimulating_agent",
            "doxorubicin_use",
            "dexamethasone_use",
            "asian_pacific_islander",
            "history_of_vte",
            "tunneled_line_cvc",
            "therapeutic_anticoagulation",
            "prophylactic_anticoagulation",
        ]
    }

    fn bands(&self) -> &'static [Band] {
        BANDS
    }

    fn calculate(&self, params: &Params) -> Result<Assessment> {
        let dexamethasone: Dexamethasone = params.token("dexamethasone_use")?;

        let mut tally = Tally::new();
        for (field, weight) in FACTORS {
            tally.flag(field, params.yes_no(field)?, *weight);
        }
        tally.add("dexamethasone_use", dexamethasone.points());

        let score = tally.total();
        let band = classify(BANDS, score as f64);
        Ok(Assessment::from_band(score, "points", band)
            .with_interpretation(format!("IMPEDE VTE score {score}. {}", band.interpretation))
            .with_detail("breakdown", tally.breakdown()))
    }
}
