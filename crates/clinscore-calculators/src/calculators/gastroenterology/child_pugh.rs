use clinscore_core::{Assessment, Band, ParamRange, Params, Result, Specialty, Tally, band_index};
use serde::{Deserialize, Serialize};

use crate::Calculator;

/// Child-Pugh score for cirrhosis severity.
pub struct ChildPugh;

const BILIRUBIN: ParamRange = ParamRange::new(0.1, 50.0);
const ALBUMIN: ParamRange = ParamRange::new(1.0, 5.0);
const INR: ParamRange = ParamRange::new(0.8, 10.0);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Ascites {
    Absent = 0,
    Slight = 1,
    Moderate = 2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Encephalopathy {
    None = 0,
    #[serde(rename = "grade_1_2")]
    Grade1To2 = 1,
    #[serde(rename = "grade_3_4")]
    Grade3To4 = 2,
}

pub static BANDS: &[Band] = &[
    Band::new(
        5.0,
        7.0,
        "Child-Pugh A",
        "Well-compensated disease",
        "Well-compensated cirrhosis. 1-year survival about 100%, 2-year 85%; suitable for major surgery.",
    ),
    Band::new(
        7.0,
        10.0,
        "Child-Pugh B",
        "Significant functional compromise",
        "Significant functional compromise. 1-year survival about 80%, 2-year 60%; operate with caution and consider transplant evaluation.",
    ),
    Band::new(
        10.0,
        f64::INFINITY,
        "Child-Pugh C",
        "Decompensated disease",
        "Decompensated cirrhosis. 1-year survival about 45%, 2-year 35%; high surgical mortality, prioritize transplant evaluation.",
    ),
];

const GRADES: [&str; 3] = ["A", "B", "C"];

fn bilirubin_points(mg_dl: f64) -> i64 {
    if mg_dl < 2.0 {
        1
    } else if mg_dl <= 3.0 {
        2
    } else {
        3
    }
}

fn albumin_points(g_dl: f64) -> i64 {
    if g_dl > 3.5 {
        1
    } else if g_dl >= 2.8 {
        2
    } else {
        3
    }
}

fn inr_points(inr: f64) -> i64 {
    if inr < 1.7 {
        1
    } else if inr <= 2.3 {
        2
    } else {
        3
    }
}

impl Calculator for ChildPugh {
    fn id(&self) -> &'static str {
        "child_pugh"
    }

    fn name(&self) -> &'static str {
        "Child-Pugh Score"
    }

    fn specialty(&self) -> Specialty {
        Specialty::Gastroenterology
    }

    fn parameters(&self) -> &'static [&'static str] {
        &["total_bilirubin", "serum_albumin", "inr", "ascites", "encephalopathy"]
    }

    fn bands(&self) -> &'static [Band] {
        BANDS
    }

    fn calculate(&self, params: &Params) -> Result<Assessment> {
        let bilirubin = BILIRUBIN.check("total_bilirubin", params.number("total_bilirubin")?)?;
        let albumin = ALBUMIN.check("serum_albumin", params.number("serum_albumin")?)?;
        let inr = INR.check("inr", params.number("inr")?)?;
        let ascites: Ascites = params.token("ascites")?;
        let encephalopathy: Encephalopathy = params.token("encephalopathy")?;

        let mut tally = Tally::new();
        tally
            .add("total_bilirubin", bilirubin_points(bilirubin))
            .add("serum_albumin", albumin_points(albumin))
            .add("inr", inr_points(inr))
            .add("ascites", ascites as i64 + 1)
            .add("encephalopathy", encephalopathy as i64 + 1);

        let score = tally.total();
        let index = band_index(BANDS, score as f64);
        let band = &BANDS[index];
        Ok(Assessment::from_band(score, "points", band)
            .with_interpretation(format!(
                "Child-Pugh Grade {} (score {score}). {}",
                GRADES[index], band.interpretation
            ))
            .with_detail("grade", GRADES[index])
            .with_detail("breakdown", tally.breakdown()))
    }
}
