use clinscore_core::numeric::{fixed, round_to};
use clinscore_core::{
    Assessment, Band, InvalidParameter, ParamRange, Params, Result, Specialty, classify,
};

use crate::Calculator;

/// PSA doubling time from two to five dated PSA measurements, by
/// least-squares regression of ln(PSA) against time.
pub struct PsaDoublingTime;

const PSA: ParamRange = ParamRange::above(0.0, 10_000.0);
const DAYS: ParamRange = ParamRange::integer(0.0, 36_500.0);

const DAYS_PER_MONTH: f64 = 30.44;
/// Reported when PSA is stable or falling.
const NO_DOUBLING: f64 = 999.0;

const PAIRS: [(&str, &str); 5] = [
    ("psa_1", "days_1"),
    ("psa_2", "days_2"),
    ("psa_3", "days_3"),
    ("psa_4", "days_4"),
    ("psa_5", "days_5"),
];

pub static BANDS: &[Band] = &[
    Band::new(
        0.0,
        3.0,
        "Very High Risk",
        "Rapid PSA progression",
        "Very rapid PSA doubling indicates aggressive disease with high risk of metastasis and death. Consider imaging and systemic therapy.",
    ),
    Band::new(
        3.0,
        6.0,
        "High Risk",
        "Fast PSA progression",
        "Rapid PSA doubling is associated with increased metastasis risk and reduced survival. Consider early intervention.",
    ),
    Band::new(
        6.0,
        12.0,
        "Intermediate Risk",
        "Moderate PSA progression",
        "Moderate PSA doubling time. Close monitoring and discussion of treatment options.",
    ),
    Band::new(
        12.0,
        36.0,
        "Low Risk",
        "Slow PSA progression",
        "Slow PSA doubling with lower risk of progression. Continued surveillance.",
    ),
    Band::new(
        36.0,
        f64::INFINITY,
        "Very Low Risk",
        "Very slow PSA progression",
        "Very slow or no PSA doubling. Routine monitoring.",
    ),
];

/// A PSA value and the day it was drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    pub psa: f64,
    pub day: i64,
}

fn measurements(params: &Params) -> Result<Vec<Measurement>> {
    let mut out = Vec::with_capacity(PAIRS.len());
    for (i, &(psa_field, day_field)) in PAIRS.iter().enumerate() {
        let required = i < 2;
        let psa = if required {
            Some(params.number(psa_field)?)
        } else {
            params.optional_number(psa_field)?
        };
        let day = if required {
            Some(params.integer(day_field)?)
        } else {
            params.optional_integer(day_field)?
        };
        match (psa, day) {
            (Some(psa), Some(day)) => {
                let day = DAYS.check_int(day_field, day)?;
                if out.iter().any(|earlier: &Measurement| earlier.day == day) {
                    return Err(InvalidParameter::new(
                        day_field,
                        "time points must be unique",
                    ));
                }
                out.push(Measurement {
                    psa: PSA.check(psa_field, psa)?,
                    day,
                });
            }
            (None, None) => {}
            (Some(_), None) => {
                return Err(InvalidParameter::new(
                    day_field,
                    format!("required with {psa_field}"),
                ));
            }
            (None, Some(_)) => {
                return Err(InvalidParameter::new(
                    psa_field,
                    format!("required with {day_field}"),
                ));
            }
        }
    }
    Ok(out)
}

/// Doubling time in months, capped at 999 for stable or falling PSA.
pub fn doubling_time_months(points: &[Measurement]) -> f64 {
    let n = points.len() as f64;
    let xs: Vec<f64> = points
        .iter()
        .map(|m| m.day as f64 / DAYS_PER_MONTH)
        .collect();
    let ys: Vec<f64> = points.iter().map(|m| m.psa.ln()).collect();
    let mean_x = xs.iter().sum::<f64>() / n;
    let mean_y = ys.iter().sum::<f64>() / n;

    let sxy: f64 = xs
        .iter()
        .zip(&ys)
        .map(|(x, y)| (x - mean_x) * (y - mean_y))
        .sum();
    let sxx: f64 = xs.iter().map(|x| (x - mean_x).powi(2)).sum();
    if sxx == 0.0 {
        return NO_DOUBLING;
    }
    let slope = sxy / sxx;
    if slope <= 0.0 {
        return NO_DOUBLING;
    }
    (std::f64::consts::LN_2 / slope).min(NO_DOUBLING)
}

impl Calculator for PsaDoublingTime {
    fn id(&self) -> &'static str {
        "psa_doubling_time"
    }

    fn name(&self) -> &'static str {
        "PSA Doubling Time (PSADT)"
    }

    fn specialty(&self) -> Specialty {
        Specialty::Oncology
    }

    fn parameters(&self) -> &'static [&'static str] {
        &[
            "psa_1", "days_1", "psa_2", "days_2", "psa_3", "days_3", "psa_4", "days_4", "psa_5",
            "days_5",
        ]
    }

    fn bands(&self) -> &'static [Band] {
        BANDS
    }

    fn calculate(&self, params: &Params) -> Result<Assessment> {
        let points = measurements(params)?;
        let months = doubling_time_months(&points);

        let band = classify(BANDS, months);
        Ok(Assessment::from_band(round_to(months, 1), "months", band)
            .with_interpretation(format!(
                "PSA doubling time {} months from {} measurements. {}",
                fixed(months, 1),
                points.len(),
                band.interpretation
            ))
            .with_detail("measurements", points.len()))
    }
}
