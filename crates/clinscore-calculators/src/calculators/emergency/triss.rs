use clinscore_core::numeric::{fixed, logistic, round_to};
use clinscore_core::{Assessment, Band, ParamRange, Params, Result, Specialty, classify};
use serde::{Deserialize, Serialize};

use crate::Calculator;

/// Trauma and Injury Severity Score: probability of survival from the
/// Revised Trauma Score, Injury Severity Score, age and mechanism (MTOS
/// coefficients).
pub struct Triss;

const GCS: ParamRange = ParamRange::integer(3.0, 15.0);
const SYSTOLIC: ParamRange = ParamRange::integer(0.0, 300.0);
const RESPIRATORY_RATE: ParamRange = ParamRange::integer(0.0, 80.0);
const ISS: ParamRange = ParamRange::integer(1.0, 75.0);
const AGE: ParamRange = ParamRange::integer(0.0, 120.0);

pub static BANDS: &[Band] = &[
    Band::new(
        0.0,
        25.0,
        "Very Low Survival Probability",
        "Probability of survival below 25%",
        "Very poor predicted survival. Maximal resuscitation and trauma team activation.",
    ),
    Band::new(
        25.0,
        50.0,
        "Low Survival Probability",
        "Probability of survival 25-50%",
        "Poor predicted survival. Deaths in this range are rarely unexpected.",
    ),
    Band::new(
        50.0,
        75.0,
        "Moderate Survival Probability",
        "Probability of survival 50-75%",
        "Guarded prognosis. Outcomes here are used for trauma quality review.",
    ),
    Band::new(
        75.0,
        f64::INFINITY,
        "High Survival Probability",
        "Probability of survival 75% or higher",
        "Survival expected. A death in this range is unexpected and warrants peer review.",
    ),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mechanism {
    Blunt,
    Penetrating,
}

impl Mechanism {
    /// `(b0, b1 RTS, b2 ISS, b3 age index)`.
    fn coefficients(self) -> [f64; 4] {
        match self {
            Mechanism::Blunt => [-0.4499, 0.8085, -0.0835, -1.7430],
            Mechanism::Penetrating => [-2.5355, 0.9934, -0.0651, -1.1360],
        }
    }
}

fn coded_gcs(gcs: i64) -> f64 {
    match gcs {
        13..=15 => 4.0,
        9..=12 => 3.0,
        6..=8 => 2.0,
        4..=5 => 1.0,
        _ => 0.0,
    }
}

fn coded_sbp(sbp: i64) -> f64 {
    match sbp {
        90.. => 4.0,
        76..=89 => 3.0,
        50..=75 => 2.0,
        1..=49 => 1.0,
        _ => 0.0,
    }
}

fn coded_rr(rr: i64) -> f64 {
    match rr {
        10..=29 => 4.0,
        30.. => 3.0,
        6..=9 => 2.0,
        1..=5 => 1.0,
        _ => 0.0,
    }
}

/// Revised Trauma Score, 0 to 7.8408.
pub fn revised_trauma_score(gcs: i64, sbp: i64, rr: i64) -> f64 {
    0.9368 * coded_gcs(gcs) + 0.7326 * coded_sbp(sbp) + 0.2908 * coded_rr(rr)
}

impl Calculator for Triss {
    fn id(&self) -> &'static str {
        "triss"
    }

    fn name(&self) -> &'static str {
        "Trauma and Injury Severity Score (TRISS)"
    }

    fn specialty(&self) -> Specialty {
        Specialty::Emergency
    }

    fn parameters(&self) -> &'static [&'static str] {
        &[
            "glasgow_coma_scale",
            "systolic_bp",
            "respiratory_rate",
            "injury_severity_score",
            "age",
            "mechanism",
        ]
    }

    fn bands(&self) -> &'static [Band] {
        BANDS
    }

    fn calculate(&self, params: &Params) -> Result<Assessment> {
        let gcs = GCS.check_int("glasgow_coma_scale", params.integer("glasgow_coma_scale")?)?;
        let sbp = SYSTOLIC.check_int("systolic_bp", params.integer("systolic_bp")?)?;
        let rr =
            RESPIRATORY_RATE.check_int("respiratory_rate", params.integer("respiratory_rate")?)?;
        let iss = ISS.check_int("injury_severity_score", params.integer("injury_severity_score")?)?;
        let age = AGE.check_int("age", params.integer("age")?)?;
        let mechanism: Mechanism = params.token("mechanism")?;

        let rts = revised_trauma_score(gcs, sbp, rr);
        let age_index = if age >= 55 { 1.0 } else { 0.0 };
        let [b0, b1, b2, b3] = mechanism.coefficients();
        let b = b0 + b1 * rts + b2 * iss as f64 + b3 * age_index;
        let survival = logistic(b) * 100.0;

        let band = classify(BANDS, survival);
        let interpretation = format!(
            "Probability of survival {}% (RTS {}, ISS {iss}). {}",
            fixed(survival, 1),
            fixed(rts, 4),
            band.interpretation
        );

        Ok(Assessment::from_band(round_to(survival, 1), "%", band)
            .with_interpretation(interpretation)
            .with_detail("revised_trauma_score", round_to(rts, 4))
            .with_detail("age_index", age_index as i64))
    }
}
