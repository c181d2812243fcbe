use clinscore_core::{Assessment, Band, Params, Result, Specialty, Tally, classify};

use crate::Calculator;

/// MACOCHA score: predicts difficult intubation in the ICU from patient,
/// pathology and operator factors.
pub struct Macocha;

const FACTORS: &[(&str, i64)] = &[
    ("mallampati_3_or_4", 5),
    ("obstructive_sleep_apnea", 2),
    ("reduced_cervical_mobility", 1),
    ("limited_mouth_opening", 1),
    ("coma", 1),
    ("severe_hypoxemia", 1),
    ("non_anesthesiologist", 1),
];

pub static BANDS: &[Band] = &[
    Band::new(
        0.0,
        3.0,
        "Low Risk",
        "Low risk for difficult intubation",
        "Difficult intubation probability under 10%. Standard intubation preparation is appropriate.",
    ),
    Band::new(
        3.0,
        6.0,
        "Intermediate Risk",
        "Intermediate risk for difficult intubation",
        "Difficult intubation probability 10-30%. Prepare a video laryngoscope and supraglottic airway, with an experienced operator present.",
    ),
    Band::new(
        6.0,
        f64::INFINITY,
        "High Risk",
        "High risk for difficult intubation",
        "Difficult intubation probability above 30%. Most experienced operator available, full difficult airway equipment and surgical airway backup.",
    ),
];

impl Calculator for Macocha {
    fn id(&self) -> &'static str {
        "macocha"
    }

    fn name(&self) -> &'static str {
        "MACOCHA Score"
    }

    fn specialty(&self) -> Specialty {
        Specialty::CriticalCare
    }

    fn parameters(&self) -> &'static [&'static str] {
        &[
            "mallampati_3_or_4",
            "obstructive_sleep_apnea",
            "reduced_cervical_mobility",
            "limited_mouth_opening",
            "coma",
            "severe_hypoxemia",
            "non_anesthesiologist",
        ]
    }

    fn bands(&self) -> &'static [Band] {
        BANDS
    }

    fn calculate(&self, params: &Params) -> Result<Assessment> {
        let mut tally = Tally::new();
        for (field, weight) in FACTORS {
            tally.flag(field, params.yes_no(field)?, *weight);
        }

        let score = tally.total();
        let band = classify(BANDS, score as f64);
        Ok(Assessment::from_band(score, "points", band)
            .with_interpretation(format!("MACOCHA {score}/12. {}", band.interpretation))
            .with_detail("breakdown", tally.breakdown()))
    }
}
