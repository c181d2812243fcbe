use clinscore_core::numeric::round_to;
use clinscore_core::{
    Assessment, Band, InvalidParameter, ParamRange, Params, Result, Sex, Specialty, classify,
};
use serde::{Deserialize, Serialize};

use crate::Calculator;

/// CKiD U25 eGFR for patients aged 1 to 25, from creatinine, cystatin C,
/// or the average of both.
pub struct CkidU25Egfr;

const AGE: ParamRange = ParamRange::integer(1.0, 25.0);
const HEIGHT: ParamRange = ParamRange::new(50.0, 250.0);
const CREATININE: ParamRange = ParamRange::new(0.1, 20.0);
const CYSTATIN_C: ParamRange = ParamRange::new(0.1, 10.0);

/// KDIGO GFR categories.
pub static BANDS: &[Band] = &[
    Band::new(
        0.0,
        15.0,
        "G5",
        "Kidney failure",
        "Kidney failure (CKD G5). Renal replacement therapy planning or initiation with pediatric nephrology.",
    ),
    Band::new(
        15.0,
        30.0,
        "G4",
        "Severely decreased",
        "Severe reduction in kidney function (CKD G4). Prepare for renal replacement therapy.",
    ),
    Band::new(
        30.0,
        45.0,
        "G3b",
        "Moderately to severely decreased",
        "Moderate to severe reduction in kidney function (CKD G3b). Evaluate and treat complications.",
    ),
    Band::new(
        45.0,
        60.0,
        "G3a",
        "Mild to moderately decreased",
        "Mild to moderate reduction in kidney function (CKD G3a). Evaluate for complications and progression.",
    ),
    Band::new(
        60.0,
        90.0,
        "G2",
        "Mildly decreased",
        "Mildly decreased kidney function (CKD G2 if kidney damage is present). Monitor kidney function.",
    ),
    Band::new(
        90.0,
        f64::INFINITY,
        "G1",
        "Normal or high",
        "Normal kidney function. CKD G1 only if markers of kidney damage are present.",
    ),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EquationType {
    Creatinine,
    CystatinC,
    CreatinineCystatinC,
}

/// Filtration marker inputs; each equation requires its own measurements.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Marker {
    Creatinine { height_cm: f64, creatinine: f64 },
    CystatinC { cystatin_c: f64 },
    Combined { height_cm: f64, creatinine: f64, cystatin_c: f64 },
}

impl Marker {
    pub fn from_params(params: &Params) -> Result<Self> {
        let equation: EquationType = params.token("equation_type")?;
        let creatinine_inputs = || -> Result<(f64, f64)> {
            let height = params.optional_number("height")?.ok_or_else(|| {
                InvalidParameter::new("height", "required for creatinine-based equations")
            })?;
            let creatinine = params.optional_number("serum_creatinine")?.ok_or_else(|| {
                InvalidParameter::new("serum_creatinine", "required for creatinine-based equations")
            })?;
            Ok((
                HEIGHT.check("height", height)?,
                CREATININE.check("serum_creatinine", creatinine)?,
            ))
        };
        let cystatin_input = || -> Result<f64> {
            let cystatin_c = params.optional_number("cystatin_c")?.ok_or_else(|| {
                InvalidParameter::new("cystatin_c", "required for cystatin C-based equations")
            })?;
            CYSTATIN_C.check("cystatin_c", cystatin_c)
        };

        Ok(match equation {
            EquationType::Creatinine => {
                let (height_cm, creatinine) = creatinine_inputs()?;
                Marker::Creatinine { height_cm, creatinine }
            }
            EquationType::CystatinC => Marker::CystatinC {
                cystatin_c: cystatin_input()?,
            },
            EquationType::CreatinineCystatinC => {
                let (height_cm, creatinine) = creatinine_inputs()?;
                Marker::Combined {
                    height_cm,
                    creatinine,
                    cystatin_c: cystatin_input()?,
                }
            }
        })
    }

    fn method(self) -> &'static str {
        match self {
            Marker::Creatinine { .. } => "Creatinine-based CKiD U25",
            Marker::CystatinC { .. } => "Cystatin C-based CKiD U25",
            Marker::Combined { .. } => "Combined creatinine-cystatin C CKiD U25",
        }
    }
}

/// Age- and sex-specific constant. Growth is modelled below 18 and the
/// constant is flat from 18 to 25.
fn k_value(age: i64, base: f64, under_12: f64, under_18: f64, adult: f64) -> f64 {
    if age < 12 {
        base * under_12.powi(age as i32 - 12)
    } else if age < 18 {
        base * under_18.powi(age as i32 - 12)
    } else {
        adult
    }
}

pub fn creatinine_egfr(age: i64, sex: Sex, height_cm: f64, creatinine: f64) -> f64 {
    let k = match sex {
        Sex::Male => k_value(age, 39.0, 1.008, 1.045, 50.8),
        Sex::Female => k_value(age, 36.1, 1.008, 1.023, 41.4),
    };
    round_to(k * (height_cm / 100.0) / creatinine, 1)
}

pub fn cystatin_egfr(age: i64, sex: Sex, cystatin_c: f64) -> f64 {
    let k = match sex {
        Sex::Male => k_value(age, 70.7, 0.990, 0.931, 135.0),
        Sex::Female => k_value(age, 70.7, 0.990, 0.969, 113.0),
    };
    round_to(k / cystatin_c, 1)
}

impl Calculator for CkidU25Egfr {
    fn id(&self) -> &'static str {
        "ckid_u25_egfr"
    }

    fn name(&self) -> &'static str {
        "CKiD U25 eGFR"
    }

    fn specialty(&self) -> Specialty {
        Specialty::Nephrology
    }

    fn parameters(&self) -> &'static [&'static str] {
        &["equation_type", "age", "sex", "height", "serum_creatinine", "cystatin_c"]
    }

    fn bands(&self) -> &'static [Band] {
        BANDS
    }

    fn calculate(&self, params: &Params) -> Result<Assessment> {
        let marker = Marker::from_params(params)?;
        let age = AGE.check_int("age", params.integer("age")?)?;
        let sex: Sex = params.token("sex")?;

        let egfr = match marker {
            Marker::Creatinine { height_cm, creatinine } => {
                creatinine_egfr(age, sex, height_cm, creatinine)
            }
            Marker::CystatinC { cystatin_c } => cystatin_egfr(age, sex, cystatin_c),
            Marker::Combined { height_cm, creatinine, cystatin_c } => {
                let from_creatinine = creatinine_egfr(age, sex, height_cm, creatinine);
                round_to((from_creatinine + cystatin_egfr(age, sex, cystatin_c)) / 2.0, 1)
            }
        };
        let band = classify(BANDS, egfr);
        Ok(Assessment::from_band(egfr, "mL/min/1.73m²", band)
            .with_interpretation(format!("eGFR {egfr} mL/min/1.73m². {}", band.interpretation))
            .with_detail("method", marker.method()))
    }
}
