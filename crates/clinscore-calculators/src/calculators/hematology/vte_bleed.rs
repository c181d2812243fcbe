use clinscore_core::numeric::round_to;
use clinscore_core::{Assessment, Band, Params, Result, Specialty, classify};
use serde_json::{Map, Value};

use crate::Calculator;

/// VTE-BLEED: bleeding risk during stable anticoagulation after VTE.
pub struct VteBleed;

const CRITERIA: &[(&str, f64)] = &[
    ("age_60_or_older", 1.5),
    ("active_cancer", 2.0),
    ("male_uncontrolled_hypertension", 1.0),
    ("anemia", 1.5),
    ("history_of_bleeding", 1.5),
    ("renal_dysfunction", 1.5),
];

pub static BANDS: &[Band] = &[
    Band::new(
        0.0,
        2.0,
        "Low Risk",
        "Low bleeding risk on anticoagulation",
        "Low risk of major bleeding. Continue standard anticoagulation with routine monitoring.",
    ),
    Band::new(
        2.0,
        f64::INFINITY,
        "Elevated Risk",
        "Elevated bleeding risk on anticoagulation",
        "Elevated risk of major bleeding. Consider closer monitoring, modifiable risk factors and the duration of anticoagulation.",
    ),
];

impl Calculator for VteBleed {
    fn id(&self) -> &'static str {
        "vte_bleed"
    }

    fn name(&self) -> &'static str {
        "VTE-BLEED Score"
    }

    fn specialty(&self) -> Specialty {
        Specialty::Hematology
    }

    fn parameters(&self) -> &'static [&'static str] {
        &[
            "age_60_or_older",
            "active_cancer",
            "male_uncontrolled_hypertension",
            "anemia",
            "history_of_bleeding",
            "renal_dysfunction",
        ]
    }

    fn bands(&self) -> &'static [Band] {
        BANDS
    }

    fn calculate(&self, params: &Params) -> Result<Assessment> {
        let mut score = 0.0;
        let mut breakdown = Map::new();
        for (field, weight) in CRITERIA {
            let points = if params.yes_no(field)? { *weight } else { 0.0 };
            breakdown.insert(field.to_string(), Value::from(points));
            score += points;
        }

        let band = classify(BANDS, score);
        let score = round_to(score, 1);
        Ok(Assessment::from_band(score, "points", band)
            .with_interpretation(format!("VTE-BLEED score {score}. {}", band.interpretation))
            .with_detail("breakdown", Value::Object(breakdown)))
    }
}
