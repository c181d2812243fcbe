use clinscore_core::numeric::{fixed, round_to};
use clinscore_core::{Assessment, ParamRange, Params, Result, Sex, Specialty};
use serde::{Deserialize, Serialize};

use crate::Calculator;

/// ESC SCORE2: 10-year fatal and non-fatal cardiovascular risk for ages
/// 40-69 without established CVD or diabetes.
pub struct Score2;

const AGE: ParamRange = ParamRange::integer(40.0, 69.0);
const SYSTOLIC: ParamRange = ParamRange::new(80.0, 250.0);
const TOTAL_CHOLESTEROL: ParamRange = ParamRange::new(2.0, 12.0);
const HDL: ParamRange = ParamRange::new(0.5, 3.5);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskRegion {
    Low,
    Moderate,
    High,
    VeryHigh,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Smoking {
    Current,
    Other,
}

struct Model {
    cage: f64,
    csbp: f64,
    ctchol: f64,
    chdl: f64,
    smoking: f64,
    cage_chdl: f64,
    cage_smoking: f64,
    baseline_survival: f64,
}

const fn model(c: [f64; 7], baseline_survival: f64) -> Model {
    Model {
        cage: c[0],
        csbp: c[1],
        ctchol: c[2],
        chdl: c[3],
        smoking: c[4],
        cage_chdl: c[5],
        cage_smoking: c[6],
        baseline_survival,
    }
}

/// Region order: low, moderate, high, very high.
const MALE: [Model; 4] = [
    model([0.3742, 0.3018, 0.2900, -0.4231, 0.6012, -0.0755, -0.0701], 0.9605),
    model([0.3744, 0.3016, 0.2898, -0.4230, 0.6014, -0.0756, -0.0700], 0.9434),
    model([0.3746, 0.3015, 0.2896, -0.4229, 0.6015, -0.0757, -0.0699], 0.9281),
    model([0.3748, 0.3014, 0.2894, -0.4228, 0.6016, -0.0758, -0.0698], 0.8954),
];

const FEMALE: [Model; 4] = [
    model([0.4648, 0.3131, 0.1471, -0.5347, 0.7744, -0.0665, -0.0790], 0.9766),
    model([0.4650, 0.3130, 0.1470, -0.5346, 0.7746, -0.0666, -0.0789], 0.9701),
    model([0.4652, 0.3129, 0.1469, -0.5345, 0.7747, -0.0667, -0.0788], 0.9634),
    model([0.4654, 0.3128, 0.1468, -0.5344, 0.7748, -0.0668, -0.0787], 0.9511),
];

impl RiskRegion {
    fn index(self) -> usize {
        match self {
            RiskRegion::Low => 0,
            RiskRegion::Moderate => 1,
            RiskRegion::High => 2,
            RiskRegion::VeryHigh => 3,
        }
    }
}

/// Risk category thresholds are age dependent: 2.5/7.5% under 50, 5/10% from 50.
fn categorize(age: i64, risk: f64) -> (&'static str, &'static str) {
    let (low, high) = if age < 50 { (2.5, 7.5) } else { (5.0, 10.0) };
    if risk < low {
        (
            "Low to Moderate Risk",
            "Risk factor treatment is generally not recommended unless individual risk modifiers are present.",
        )
    } else if risk < high {
        (
            "High Risk",
            "Risk factor treatment should be considered, taking into account risk modifiers and patient preference.",
        )
    } else {
        (
            "Very High Risk",
            "Risk factor treatment is recommended, including lipid lowering and blood pressure control.",
        )
    }
}

impl Calculator for Score2 {
    fn id(&self) -> &'static str {
        "score2"
    }

    fn name(&self) -> &'static str {
        "SCORE2"
    }

    fn specialty(&self) -> Specialty {
        Specialty::Cardiology
    }

    fn parameters(&self) -> &'static [&'static str] {
        &[
            "sex",
            "age",
            "smoking",
            "systolic_bp",
            "total_cholesterol",
            "hdl_cholesterol",
            "risk_region",
        ]
    }

    fn calculate(&self, params: &Params) -> Result<Assessment> {
        let sex: Sex = params.token("sex")?;
        let age = AGE.check_int("age", params.integer("age")?)?;
        let smoking: Smoking = params.token("smoking")?;
        let sbp = SYSTOLIC.check("systolic_bp", params.number("systolic_bp")?)?;
        let tc = TOTAL_CHOLESTEROL.check("total_cholesterol", params.number("total_cholesterol")?)?;
        let hdl = HDL.check("hdl_cholesterol", params.number("hdl_cholesterol")?)?;
        let region: RiskRegion = params.token("risk_region")?;

        let cage = (age as f64 - 60.0) / 5.0;
        let csbp = (sbp - 120.0) / 20.0;
        let ctchol = tc - 6.0;
        let chdl = (hdl - 1.3) / 0.5;
        let smoker = if smoking == Smoking::Current { 1.0 } else { 0.0 };

        let m = match sex {
            Sex::Male => &MALE[region.index()],
            Sex::Female => &FEMALE[region.index()],
        };
        let x = m.cage * cage
            + m.csbp * csbp
            + m.ctchol * ctchol
            + m.chdl * chdl
            + m.smoking * smoker
            + m.cage_chdl * cage * chdl
            + m.cage_smoking * cage * smoker;
        let risk = ((1.0 - m.baseline_survival.powf(x.exp())) * 100.0).clamp(0.0, 100.0);

        let (stage, advice) = categorize(age, risk);
        let shown = round_to(risk, 1);
        let interpretation = format!("10-year CVD risk {}%: {}", fixed(shown, 1), advice);

        Ok(Assessment::new(
            shown,
            "%",
            stage,
            format!("{}% 10-year risk", fixed(shown, 1)),
            interpretation,
        ))
    }
}
