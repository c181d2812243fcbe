use clinscore_core::{Assessment, Band, ParamRange, Params, Result, Specialty, classify};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::Calculator;

/// GRACE in-hospital mortality risk for acute coronary syndrome.
pub struct GraceAcsRisk;

const AGE: ParamRange = ParamRange::integer(20.0, 100.0);
const HEART_RATE: ParamRange = ParamRange::integer(30.0, 250.0);
const SYSTOLIC: ParamRange = ParamRange::integer(50.0, 300.0);
const CREATININE: ParamRange = ParamRange::new(0.3, 15.0);

pub static BANDS: &[Band] = &[
    Band::new(
        0.0,
        88.0,
        "Very Low Risk",
        "0-2% in-hospital mortality",
        "Very low in-hospital mortality risk. Conservative management may be appropriate.",
    ),
    Band::new(
        88.0,
        129.0,
        "Low Risk",
        "3-10% in-hospital mortality",
        "Low in-hospital mortality risk. Standard ACS management.",
    ),
    Band::new(
        129.0,
        150.0,
        "Intermediate Risk",
        "10-20% in-hospital mortality",
        "Intermediate risk. Early invasive strategy within 24 hours is reasonable.",
    ),
    Band::new(
        150.0,
        174.0,
        "High Risk",
        "20-30% in-hospital mortality",
        "High risk. Early invasive strategy within 24 hours is recommended.",
    ),
    Band::new(
        174.0,
        285.0,
        "Very High Risk",
        "40-90% in-hospital mortality",
        "Very high risk. Consider immediate invasive strategy and intensive monitoring.",
    ),
    Band::new(
        285.0,
        f64::INFINITY,
        "Extremely High Risk",
        "≥99% in-hospital mortality",
        "Extremely high risk. Immediate intervention and critical care.",
    ),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KillipClass {
    #[serde(rename = "class_1")]
    I,
    #[serde(rename = "class_2")]
    II,
    #[serde(rename = "class_3")]
    III,
    #[serde(rename = "class_4")]
    IV,
}

impl KillipClass {
    pub fn points(self) -> f64 {
        match self {
            KillipClass::I => 0.0,
            KillipClass::II => 20.0,
            KillipClass::III => 39.0,
            KillipClass::IV => 59.0,
        }
    }
}

fn age_points(age: f64) -> f64 {
    if age <= 40.0 { 0.0 } else { (age - 40.0) * 2.5 }
}

fn heart_rate_points(hr: f64) -> f64 {
    match hr {
        h if h < 50.0 => 0.0,
        h if h < 70.0 => 3.0,
        h if h < 90.0 => 9.0,
        h if h < 110.0 => 15.0,
        h if h < 150.0 => 24.0,
        h if h < 200.0 => 38.0,
        _ => 46.0,
    }
}

fn systolic_points(sbp: f64) -> f64 {
    match sbp {
        s if s < 80.0 => 58.0,
        s if s < 100.0 => 53.0,
        s if s < 120.0 => 43.0,
        s if s < 140.0 => 34.0,
        s if s < 160.0 => 24.0,
        s if s < 200.0 => 10.0,
        _ => 0.0,
    }
}

fn creatinine_points(cr: f64) -> f64 {
    match cr {
        c if c < 0.4 => 1.0,
        c if c < 0.8 => 4.0,
        c if c < 1.2 => 7.0,
        c if c < 1.6 => 10.0,
        c if c < 2.0 => 13.0,
        c if c < 4.0 => 21.0,
        _ => 28.0,
    }
}

impl Calculator for GraceAcsRisk {
    fn id(&self) -> &'static str {
        "grace_acs_risk"
    }

    fn name(&self) -> &'static str {
        "GRACE ACS Risk and Mortality Calculator"
    }

    fn specialty(&self) -> Specialty {
        Specialty::Cardiology
    }

    fn parameters(&self) -> &'static [&'static str] {
        &[
            "age",
            "heart_rate",
            "systolic_bp",
            "creatinine",
            "killip_class",
            "cardiac_arrest",
            "st_deviation",
            "elevated_biomarkers",
        ]
    }

    fn bands(&self) -> &'static [Band] {
        BANDS
    }

    fn calculate(&self, params: &Params) -> Result<Assessment> {
        let age = AGE.check("age", params.number("age")?)?;
        let hr = HEART_RATE.check("heart_rate", params.number("heart_rate")?)?;
        let sbp = SYSTOLIC.check("systolic_bp", params.number("systolic_bp")?)?;
        let cr = CREATININE.check("creatinine", params.number("creatinine")?)?;
        let killip: KillipClass = params.token("killip_class")?;

        let flag = |field: &str, points: f64| -> Result<f64> {
            Ok(if params.yes_no(field)? { points } else { 0.0 })
        };

        let components = [
            ("age", age_points(age)),
            ("heart_rate", heart_rate_points(hr)),
            ("systolic_bp", systolic_points(sbp)),
            ("creatinine", creatinine_points(cr)),
            ("killip_class", killip.points()),
            ("cardiac_arrest", flag("cardiac_arrest", 39.0)?),
            ("st_deviation", flag("st_deviation", 28.0)?),
            ("elevated_biomarkers", flag("elevated_biomarkers", 14.0)?),
        ];
        let score = components.iter().map(|(_, p)| p).sum::<f64>().trunc() as i64;
        let band = classify(BANDS, score as f64);

        let breakdown: serde_json::Map<_, _> = components
            .iter()
            .map(|(k, v)| (k.to_string(), json!(v)))
            .collect();
        let interpretation = format!(
            "GRACE score {score}: {} ({}). {}",
            band.stage.to_lowercase(),
            band.description,
            band.interpretation
        );

        Ok(Assessment::from_band(score, "points", band)
            .with_interpretation(interpretation)
            .with_detail("breakdown", breakdown))
    }
}
