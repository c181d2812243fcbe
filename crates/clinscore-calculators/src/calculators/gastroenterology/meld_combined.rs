use clinscore_core::{
    Assessment, Band, InvalidParameter, ParamRange, Params, Result, Sex, Specialty, YesNo, classify,
};
use serde::{Deserialize, Serialize};

use crate::Calculator;

/// MELD family of end-stage liver disease scores: original MELD, MELD-Na
/// and MELD 3.0, selected by `meld_version`.
pub struct MeldCombined;

const BILIRUBIN: ParamRange = ParamRange::new(0.1, 50.0);
const CREATININE: ParamRange = ParamRange::new(0.1, 15.0);
const INR: ParamRange = ParamRange::new(0.8, 10.0);
const SODIUM: ParamRange = ParamRange::new(120.0, 160.0);
const ALBUMIN: ParamRange = ParamRange::new(1.0, 6.0);
const AGE: ParamRange = ParamRange::integer(12.0, 120.0);

const MIN_SCORE: i64 = 6;
const MAX_SCORE: i64 = 40;

pub static BANDS: &[Band] = &[
    Band::new(
        6.0,
        10.0,
        "Mild Disease",
        "Lower mortality risk",
        "Mild liver disease with low 90-day mortality (<2%). Routine hepatology follow-up.",
    ),
    Band::new(
        10.0,
        15.0,
        "Moderate Disease",
        "Moderate mortality risk",
        "Moderate liver disease with intermediate 90-day mortality (6-20%). Consider referral for transplant evaluation.",
    ),
    Band::new(
        15.0,
        20.0,
        "Severe Disease",
        "High mortality risk",
        "Severe liver disease with high 90-day mortality (>20%). Transplant evaluation is strongly indicated.",
    ),
    Band::new(
        20.0,
        30.0,
        "Very Severe Disease",
        "Very high mortality risk",
        "Very severe liver disease with very high 90-day mortality (>50%). Urgent transplant listing.",
    ),
    Band::new(
        30.0,
        f64::INFINITY,
        "Critical Disease",
        "Extremely high mortality risk",
        "Critical liver disease with extremely high 90-day mortality (>80%). Highest transplant priority.",
    ),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VersionToken {
    Original,
    MeldNa,
    #[serde(rename = "meld_3_0")]
    Meld3,
}

/// Each version carries exactly the extra inputs it needs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MeldVersion {
    Original,
    MeldNa { sodium: f64 },
    Meld3 { sodium: f64, albumin: f64, age: i64, sex: Sex },
}

fn required<T>(value: Option<T>, field: &str, version: &str) -> Result<T> {
    value.ok_or_else(|| InvalidParameter::new(field, format!("required for {version}")))
}

impl MeldVersion {
    pub fn from_params(params: &Params) -> Result<Self> {
        let token: VersionToken = params.token("meld_version")?;
        let sodium = params
            .optional_number("sodium")?
            .map(|v| SODIUM.check("sodium", v))
            .transpose()?;
        Ok(match token {
            VersionToken::Original => MeldVersion::Original,
            VersionToken::MeldNa => MeldVersion::MeldNa {
                sodium: required(sodium, "sodium", "meld_na")?,
            },
            VersionToken::Meld3 => {
                let albumin = params
                    .optional_number("albumin")?
                    .map(|v| ALBUMIN.check("albumin", v))
                    .transpose()?;
                let age = params
                    .optional_integer("age")?
                    .map(|v| AGE.check_int("age", v))
                    .transpose()?;
                MeldVersion::Meld3 {
                    sodium: required(sodium, "sodium", "meld_3_0")?,
                    albumin: required(albumin, "albumin", "meld_3_0")?,
                    age: required(age, "age", "meld_3_0")?,
                    sex: required(params.optional_token("sex")?, "sex", "meld_3_0")?,
                }
            }
        })
    }

    fn label(self) -> &'static str {
        match self {
            MeldVersion::Original => "MELD",
            MeldVersion::MeldNa { .. } => "MELD-Na",
            MeldVersion::Meld3 { .. } => "MELD 3.0",
        }
    }
}

fn clamp_score(raw: f64) -> i64 {
    (raw.round() as i64).clamp(MIN_SCORE, MAX_SCORE)
}

/// Original MELD, before rounding. Dialysis twice in a week sets
/// creatinine to the cap.
pub fn original_meld(bilirubin: f64, creatinine: f64, inr: f64, dialysis: bool) -> f64 {
    let creatinine = if dialysis { 4.0 } else { creatinine.clamp(1.0, 4.0) };
    9.57 * creatinine.ln() + 3.78 * bilirubin.max(1.0).ln() + 11.2 * inr.max(1.0).ln() + 6.43
}

pub fn meld_score(
    version: MeldVersion,
    bilirubin: f64,
    creatinine: f64,
    inr: f64,
    dialysis: bool,
) -> i64 {
    match version {
        MeldVersion::Original => clamp_score(original_meld(bilirubin, creatinine, inr, dialysis)),
        MeldVersion::MeldNa { sodium } => {
            let meld = clamp_score(original_meld(bilirubin, creatinine, inr, dialysis));
            let na = sodium.clamp(125.0, 137.0);
            if meld > 11 {
                let m = meld as f64;
                clamp_score(m + 1.32 * (137.0 - na) - 0.033 * m * (137.0 - na))
            } else {
                meld
            }
        }
        MeldVersion::Meld3 { sodium, albumin, sex, .. } => {
            let bili = bilirubin.max(1.0).ln();
            let cr = if dialysis { 3.0 } else { creatinine.clamp(1.0, 3.0) }.ln();
            let na = 137.0 - sodium.clamp(125.0, 137.0);
            let alb = 3.5 - albumin.clamp(1.5, 3.5);
            let female = if sex.is_female() { 1.33 } else { 0.0 };
            clamp_score(
                female + 4.56 * bili + 0.82 * na - 0.24 * na * bili
                    + 9.09 * inr.max(1.0).ln()
                    + 11.14 * cr
                    + 1.85 * alb
                    - 1.83 * alb * cr
                    + 6.0,
            )
        }
    }
}

impl Calculator for MeldCombined {
    fn id(&self) -> &'static str {
        "meld_combined"
    }

    fn name(&self) -> &'static str {
        "MELD Score (Original, MELD-Na, MELD 3.0)"
    }

    fn specialty(&self) -> Specialty {
        Specialty::Gastroenterology
    }

    fn parameters(&self) -> &'static [&'static str] {
        &[
            "meld_version",
            "bilirubin",
            "creatinine",
            "inr",
            "sodium",
            "albumin",
            "age",
            "sex",
            "dialysis_twice_in_week",
        ]
    }

    fn bands(&self) -> &'static [Band] {
        BANDS
    }

    fn calculate(&self, params: &Params) -> Result<Assessment> {
        let version = MeldVersion::from_params(params)?;
        let bilirubin = BILIRUBIN.check("bilirubin", params.number("bilirubin")?)?;
        let creatinine = CREATININE.check("creatinine", params.number("creatinine")?)?;
        let inr = INR.check("inr", params.number("inr")?)?;
        let dialysis = params
            .optional_token::<YesNo>("dialysis_twice_in_week")?
            .is_some_and(bool::from);

        let score = meld_score(version, bilirubin, creatinine, inr, dialysis);
        let band = classify(BANDS, score as f64);
        Ok(Assessment::from_band(score, "points", band)
            .with_interpretation(format!("{} {score}. {}", version.label(), band.interpretation))
            .with_detail("meld_version", version.label()))
    }
}
