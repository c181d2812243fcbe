use clinscore_core::numeric::{fixed, round_to};
use clinscore_core::{Assessment, Band, ParamRange, Params, Result, Specialty, Tally, classify};
use serde::{Deserialize, Serialize};

use crate::Calculator;

/// CLIF-C ACLF score for acute-on-chronic liver failure.
///
/// Six organ systems score 1 to 3 each into the CLIF-C OF score (6 to 18),
/// which is combined with age and the log of the white cell count and
/// clamped to 0..=100.
pub struct ClifCAclf;

const AGE: ParamRange = ParamRange::integer(18.0, 100.0);
const WBC: ParamRange = ParamRange::new(0.1, 100.0);
const BILIRUBIN: ParamRange = ParamRange::new(0.1, 50.0);
const CREATININE: ParamRange = ParamRange::new(0.1, 20.0);
const INR: ParamRange = ParamRange::new(0.5, 10.0);
const MAP: ParamRange = ParamRange::new(30.0, 150.0);
const RESPIRATORY_RATIO: ParamRange = ParamRange::new(50.0, 600.0);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EncephalopathyGrade {
    #[serde(rename = "grade_0")]
    None = 1,
    #[serde(rename = "grade_1_2")]
    Mild = 2,
    #[serde(rename = "grade_3_4")]
    Severe = 3,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RatioType {
    Pao2Fio2,
    Spo2Fio2,
}

pub static BANDS: &[Band] = &[
    Band::new(
        0.0,
        45.0,
        "Low Risk",
        "Lower mortality risk",
        "Lower mortality risk in ACLF. Standard supportive care with close monitoring; consider hepatology consultation.",
    ),
    Band::new(
        45.0,
        65.0,
        "Moderate Risk",
        "Moderate mortality risk",
        "Moderate mortality risk in ACLF. Consider intensive care monitoring and evaluate liver transplantation eligibility.",
    ),
    Band::new(
        65.0,
        70.0,
        "High Risk",
        "High mortality risk",
        "High mortality risk in ACLF. Urgent transplant consideration if eligible; intensive care management required.",
    ),
    Band::new(
        70.0,
        f64::INFINITY,
        "Critical Risk",
        "Critical mortality risk",
        "Scores of 70 or more have been associated with near 100% mortality at 28 days. Discuss futility of intensive measures and goals of care.",
    ),
];

fn three_step(value: f64, second: f64, third: f64) -> i64 {
    if value >= third {
        3
    } else if value >= second {
        2
    } else {
        1
    }
}

impl Calculator for ClifCAclf {
    fn id(&self) -> &'static str {
        "clif_c_aclf"
    }

    fn name(&self) -> &'static str {
        "CLIF-C ACLF Score"
    }

    fn specialty(&self) -> Specialty {
        Specialty::Gastroenterology
    }

    fn parameters(&self) -> &'static [&'static str] {
        &[
            "age",
            "white_blood_cell_count",
            "bilirubin",
            "creatinine",
            "renal_replacement_therapy",
            "hepatic_encephalopathy_grade",
            "inr",
            "mean_arterial_pressure",
            "vasopressors",
            "respiratory_ratio_type",
            "respiratory_ratio_value",
        ]
    }

    fn bands(&self) -> &'static [Band] {
        BANDS
    }

    fn calculate(&self, params: &Params) -> Result<Assessment> {
        let age = AGE.check_int("age", params.integer("age")?)?;
        let wbc = WBC.check("white_blood_cell_count", params.number("white_blood_cell_count")?)?;
        let bilirubin = BILIRUBIN.check("bilirubin", params.number("bilirubin")?)?;
        let creatinine = CREATININE.check("creatinine", params.number("creatinine")?)?;
        let on_rrt = params.yes_no("renal_replacement_therapy")?;
        let encephalopathy: EncephalopathyGrade = params.token("hepatic_encephalopathy_grade")?;
        let inr = INR.check("inr", params.number("inr")?)?;
        let map = MAP.check("mean_arterial_pressure", params.number("mean_arterial_pressure")?)?;
        let vasopressors = params.yes_no("vasopressors")?;
        let ratio_type: RatioType = params.token("respiratory_ratio_type")?;
        let ratio = RESPIRATORY_RATIO.check(
            "respiratory_ratio_value",
            params.number("respiratory_ratio_value")?,
        )?;

        let kidney = if on_rrt { 3 } else { three_step(creatinine, 2.0, 3.5) };
        let circulation = if vasopressors {
            3
        } else if map < 70.0 {
            2
        } else {
            1
        };
        // Lower ratios are worse; the cutoffs are inclusive.
        let (severe, moderate) = match ratio_type {
            RatioType::Pao2Fio2 => (200.0, 300.0),
            RatioType::Spo2Fio2 => (214.0, 357.0),
        };
        let respiration = if ratio <= severe {
            3
        } else if ratio <= moderate {
            2
        } else {
            1
        };

        let mut organs = Tally::new();
        organs
            .add("liver", three_step(bilirubin, 6.0, 12.0))
            .add("kidney", kidney)
            .add("brain", encephalopathy as i64)
            .add("coagulation", three_step(inr, 2.0, 2.5))
            .add("circulation", circulation)
            .add("respiration", respiration);
        let clif_of = organs.total();

        let raw = 10.0 * (0.33 * clif_of as f64 + 0.04 * age as f64 + 0.63 * wbc.ln() - 2.0);
        let score = raw.clamp(0.0, 100.0);
        let band = classify(BANDS, score);
        Ok(Assessment::from_band(round_to(score, 1), "points", band)
            .with_interpretation(format!(
                "CLIF-C ACLF {} (CLIF-C OF {clif_of}). {}",
                fixed(score, 1),
                band.interpretation
            ))
            .with_detail("clif_of_score", clif_of)
            .with_detail("organ_scores", organs.breakdown()))
    }
}
