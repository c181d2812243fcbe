use clinscore_core::{Assessment, Band, Params, Result, Specialty, Tally, classify};
use serde::{Deserialize, Serialize};

use crate::Calculator;

/// HERDOO2: identifies women with a first unprovoked VTE who can safely
/// stop anticoagulation.
pub struct Herdoo2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DDimer {
    #[serde(rename = "normal")]
    Normal,
    #[serde(rename = "250_or_more")]
    Elevated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Bmi {
    #[serde(rename = "under_30")]
    Under30,
    #[serde(rename = "30_or_more")]
    AtLeast30,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Age {
    #[serde(rename = "under_65")]
    Under65,
    #[serde(rename = "65_or_more")]
    AtLeast65,
}

pub static BANDS: &[Band] = &[
    Band::new(
        0.0,
        2.0,
        "Low Risk",
        "Low risk of recurrent VTE",
        "Annual recurrence risk about 3%. Anticoagulation can be safely discontinued after completing short-term treatment.",
    ),
    Band::new(
        2.0,
        f64::INFINITY,
        "High Risk",
        "High risk of recurrent VTE",
        "Annual recurrence risk about 8%. Continue anticoagulation indefinitely if bleeding risk is acceptable.",
    ),
];

impl Calculator for Herdoo2 {
    fn id(&self) -> &'static str {
        "herdoo2"
    }

    fn name(&self) -> &'static str {
        "HERDOO2 Rule"
    }

    fn specialty(&self) -> Specialty {
        Specialty::Hematology
    }

    fn parameters(&self) -> &'static [&'static str] {
        &["hyperpigmentation_edema_redness", "d_dimer", "bmi", "age"]
    }

    fn bands(&self) -> &'static [Band] {
        BANDS
    }

    fn calculate(&self, params: &Params) -> Result<Assessment> {
        let mut tally = Tally::new();
        tally
            .flag(
                "hyperpigmentation_edema_redness",
                params.yes_no("hyperpigmentation_edema_redness")?,
                1,
            )
            .flag(
                "d_dimer",
                params.token::<DDimer>("d_dimer")? == DDimer::Elevated,
                1,
            )
            .flag("bmi", params.token::<Bmi>("bmi")? == Bmi::AtLeast30, 1)
            .flag("age", params.token::<Age>("age")? == Age::AtLeast65, 1);

        let score = tally.total();
        let band = classify(BANDS, score as f64);
        Ok(Assessment::from_band(score, "points", band)
            .with_interpretation(format!("HERDOO2 {score}/4. {}", band.interpretation))
            .with_detail("breakdown", tally.breakdown()))
    }
}
