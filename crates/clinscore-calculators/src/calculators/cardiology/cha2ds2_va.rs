use clinscore_core::{Assessment, Band, ParamRange, Params, Result, Specialty, Tally, classify};

use crate::Calculator;

/// CHA₂DS₂-VA: sex-neutral stroke risk in atrial fibrillation (2024 ESC).
pub struct Cha2ds2Va;

const AGE: ParamRange = ParamRange::integer(18.0, 120.0);

/// Annual stroke rate per 100 patient-years, indexed by score.
const STROKE_RATE: [f64; 9] = [0.5, 1.5, 2.9, 4.6, 6.7, 9.2, 11.9, 15.2, 19.5];

pub static BANDS: &[Band] = &[
    Band::new(
        0.0,
        1.0,
        "Low Risk",
        "Very low stroke risk",
        "Anticoagulation is generally not recommended.",
    ),
    Band::new(
        1.0,
        2.0,
        "Moderate Risk",
        "Low-moderate stroke risk",
        "Oral anticoagulation should be considered, weighing bleeding risk and patient preference.",
    ),
    Band::new(
        2.0,
        f64::INFINITY,
        "High Risk",
        "High stroke risk",
        "Oral anticoagulation is recommended unless contraindicated. DOACs are preferred over warfarin.",
    ),
];

fn age_points(age: i64) -> i64 {
    match age {
        ..65 => 0,
        65..75 => 1,
        _ => 2,
    }
}

impl Calculator for Cha2ds2Va {
    fn id(&self) -> &'static str {
        "cha2ds2_va"
    }

    fn name(&self) -> &'static str {
        "CHA₂DS₂-VA Score"
    }

    fn specialty(&self) -> Specialty {
        Specialty::Cardiology
    }

    fn parameters(&self) -> &'static [&'static str] {
        &[
            "age",
            "congestive_heart_failure",
            "hypertension",
            "diabetes_mellitus",
            "stroke_tia_thromboembolism",
            "vascular_disease",
        ]
    }

    fn bands(&self) -> &'static [Band] {
        BANDS
    }

    fn calculate(&self, params: &Params) -> Result<Assessment> {
        let age = AGE.check_int("age", params.integer("age")?)?;

        let mut tally = Tally::new();
        tally
            .flag(
                "congestive_heart_failure",
                params.yes_no("congestive_heart_failure")?,
                1,
            )
            .flag("hypertension", params.yes_no("hypertension")?, 1)
            .add("age", age_points(age))
            .flag("diabetes_mellitus", params.yes_no("diabetes_mellitus")?, 1)
            .flag(
                "stroke_tia_thromboembolism",
                params.yes_no("stroke_tia_thromboembolism")?,
                2,
            )
            .flag("vascular_disease", params.yes_no("vascular_disease")?, 1);

        let score = tally.total();
        let rate = STROKE_RATE[score.clamp(0, 8) as usize];
        let band = classify(BANDS, score as f64);
        let interpretation = format!(
            "CHA₂DS₂-VA Score {score}: {} ({rate} strokes per 100 patient-years). {}",
            band.description.to_lowercase(),
            band.interpretation
        );

        Ok(Assessment::from_band(score, "points", band)
            .with_interpretation(interpretation)
            .with_detail("annual_stroke_rate", rate)
            .with_detail("breakdown", tally.breakdown()))
    }
}
