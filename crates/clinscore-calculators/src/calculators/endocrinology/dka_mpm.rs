use clinscore_core::{Assessment, Band, Params, Result, Specialty, Tally, band_index};
use serde_json::json;

use crate::Calculator;

/// DKA Mortality Prediction Model.
pub struct DkaMpm;

/// Criteria with points, in the order they become assessable.
const CRITERIA: &[(&str, i64)] = &[
    ("severe_comorbidities", 6),
    ("ph_less_than_7", 4),
    ("insulin_over_50_units", 4),
    ("glucose_over_300_at_12h", 4),
    ("depressed_mental_state_24h", 4),
    ("fever_24h", 3),
];

pub static BANDS: &[Band] = &[
    Band::new(
        0.0,
        15.0,
        "Low Risk",
        "Low risk of in-hospital mortality",
        "Standard DKA protocol on a general ward with routine laboratory monitoring every 4-6 hours.",
    ),
    Band::new(
        15.0,
        19.0,
        "High Risk",
        "High risk of in-hospital mortality",
        "Enhanced monitoring and ICU consideration; laboratory monitoring every 2-4 hours and early endocrinology input.",
    ),
    Band::new(
        19.0,
        f64::INFINITY,
        "Very High Risk",
        "Very high risk of in-hospital mortality",
        "Immediate ICU admission with aggressive management, hourly to 2-hourly labs, and early goals-of-care discussion.",
    ),
];

const MORTALITY: [&str; 3] = ["0.86%", "20.8%", "93.3%"];

impl Calculator for DkaMpm {
    fn id(&self) -> &'static str {
        "dka_mpm_score"
    }

    fn name(&self) -> &'static str {
        "DKA Mortality Prediction Model (DKA MPM)"
    }

    fn specialty(&self) -> Specialty {
        Specialty::Endocrinology
    }

    fn parameters(&self) -> &'static [&'static str] {
        &[
            "severe_comorbidities",
            "ph_less_than_7",
            "insulin_over_50_units",
            "glucose_over_300_at_12h",
            "depressed_mental_state_24h",
            "fever_24h",
        ]
    }

    fn bands(&self) -> &'static [Band] {
        BANDS
    }

    fn calculate(&self, params: &Params) -> Result<Assessment> {
        let mut tally = Tally::new();
        for &(field, points) in CRITERIA {
            tally.flag(field, params.yes_no(field)?, points);
        }
        let phase = |fields: [&str; 2]| -> i64 {
            fields.iter().map(|f| tally.points(f).unwrap_or(0)).sum()
        };
        let timing = json!({
            "presentation": phase(["severe_comorbidities", "ph_less_than_7"]),
            "12_hours": phase(["insulin_over_50_units", "glucose_over_300_at_12h"]),
            "24_hours": phase(["depressed_mental_state_24h", "fever_24h"]),
        });

        let score = tally.total();
        let index = band_index(BANDS, score as f64);
        let band = &BANDS[index];
        Ok(Assessment::from_band(score, "points", band)
            .with_interpretation(format!(
                "DKA MPM {score}/25: in-hospital mortality {}. {}",
                MORTALITY[index], band.interpretation
            ))
            .with_detail("mortality_rate", MORTALITY[index])
            .with_detail("timing", timing)
            .with_detail("breakdown", tally.breakdown()))
    }
}
