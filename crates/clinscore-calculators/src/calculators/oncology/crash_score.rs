use clinscore_core::{Assessment, Band, Params, Result, Specialty, classify};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::Calculator;

/// CRASH score: chemotherapy toxicity risk in older adults, with separate
/// hematologic and non-hematologic subscores.
pub struct CrashScore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiastolicBp {
    #[serde(rename = "lte_72")]
    AtMost72 = 0,
    #[serde(rename = "gt_72")]
    Over72 = 1,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Iadl {
    #[serde(rename = "26_to_29")]
    From26To29 = 0,
    #[serde(rename = "10_to_25")]
    From10To25 = 1,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Ldh {
    #[serde(rename = "0_to_459")]
    Normal = 0,
    #[serde(rename = "gt_459")]
    Over459 = 1,
}

/// MAX2 index of the regimen's hematologic toxicity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChemoRiskHematologic {
    #[serde(rename = "0_to_0.44")]
    Low = 0,
    #[serde(rename = "0.45_to_0.57")]
    Intermediate = 1,
    #[serde(rename = "gt_0.57")]
    High = 2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EcogPs {
    #[serde(rename = "0")]
    Zero = 0,
    #[serde(rename = "1_to_2")]
    OneToTwo = 1,
    #[serde(rename = "3_to_4")]
    ThreeToFour = 2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mmse {
    #[serde(rename = "30")]
    Perfect = 0,
    #[serde(rename = "lt_30")]
    Below30 = 1,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mna {
    #[serde(rename = "28_to_30")]
    Normal = 0,
    #[serde(rename = "lt_28")]
    Below28 = 1,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChemoRiskNonhematologic {
    #[serde(rename = "0")]
    Low = 0,
    #[serde(rename = "1")]
    Intermediate = 1,
    #[serde(rename = "2")]
    High = 2,
}

pub static BANDS: &[Band] = &[
    Band::new(
        0.0,
        4.0,
        "Low",
        "Low risk",
        "Low risk of severe chemotherapy toxicity. Standard dosing may be appropriate with routine monitoring.",
    ),
    Band::new(
        4.0,
        7.0,
        "Low-Intermediate",
        "Low-intermediate risk",
        "Low-intermediate risk of severe chemotherapy toxicity. Consider close monitoring and early intervention for toxicities.",
    ),
    Band::new(
        7.0,
        10.0,
        "Intermediate-High",
        "Intermediate-high risk",
        "Intermediate-high risk of severe chemotherapy toxicity. Consider dose reduction, prophylactic growth factors and geriatric assessment.",
    ),
    Band::new(
        10.0,
        f64::INFINITY,
        "High",
        "High risk",
        "High risk of severe chemotherapy toxicity. Strongly consider dose reduction or a less toxic regimen.",
    ),
];

static HEMATOLOGIC_BANDS: &[Band] = &[
    Band::new(
        0.0,
        2.0,
        "Low",
        "",
        "Low risk (~7%) of grade 4 hematologic toxicity",
    ),
    Band::new(
        2.0,
        4.0,
        "Low-Intermediate",
        "",
        "Low-intermediate risk (~23%) of grade 4 hematologic toxicity",
    ),
    Band::new(
        4.0,
        6.0,
        "Intermediate-High",
        "",
        "Intermediate-high risk (~54%) of grade 4 hematologic toxicity",
    ),
    Band::new(
        6.0,
        f64::INFINITY,
        "High",
        "",
        "High risk (~100%) of grade 4 hematologic toxicity",
    ),
];

static NONHEMATOLOGIC_BANDS: &[Band] = &[
    Band::new(
        0.0,
        3.0,
        "Low",
        "",
        "Low risk (~33%) of grade 3/4 nonhematologic toxicity",
    ),
    Band::new(
        3.0,
        5.0,
        "Low-Intermediate",
        "",
        "Low-intermediate risk (~46%) of grade 3/4 nonhematologic toxicity",
    ),
    Band::new(
        5.0,
        7.0,
        "Intermediate-High",
        "",
        "Intermediate-high risk (~67%) of grade 3/4 nonhematologic toxicity",
    ),
    Band::new(
        7.0,
        f64::INFINITY,
        "High",
        "",
        "High risk (~93%) of grade 3/4 nonhematologic toxicity",
    ),
];

fn subscore(score: i64, bands: &'static [Band]) -> serde_json::Value {
    let band = classify(bands, score as f64);
    json!({"score": score, "risk": band.stage, "interpretation": band.interpretation})
}

impl Calculator for CrashScore {
    fn id(&self) -> &'static str {
        "crash_score"
    }

    fn name(&self) -> &'static str {
        "CRASH Score"
    }

    fn specialty(&self) -> Specialty {
        Specialty::Oncology
    }

    fn parameters(&self) -> &'static [&'static str] {
        &[
            "diastolic_bp",
            "iadl_score",
            "ldh",
            "chemo_risk_hematologic",
            "ecog_ps",
            "mmse",
            "mna",
            "chemo_risk_nonhematologic",
        ]
    }

    fn bands(&self) -> &'static [Band] {
        BANDS
    }

    fn calculate(&self, params: &Params) -> Result<Assessment> {
        let dbp: DiastolicBp = params.token("diastolic_bp")?;
        let iadl: Iadl = params.token("iadl_score")?;
        let ldh: Ldh = params.token("ldh")?;
        let heme_chemo: ChemoRiskHematologic = params.token("chemo_risk_hematologic")?;
        let ecog: EcogPs = params.token("ecog_ps")?;
        let mmse: Mmse = params.token("mmse")?;
        let mna: Mna = params.token("mna")?;
        let nonheme_chemo: ChemoRiskNonhematologic = params.token("chemo_risk_nonhematologic")?;

        let heme_patient = dbp as i64 + iadl as i64 + 2 * ldh as i64;
        let nonheme_patient = ecog as i64 + 2 * mmse as i64 + 2 * mna as i64;

        let hematologic = heme_patient + heme_chemo as i64;
        let nonhematologic = nonheme_patient + nonheme_chemo as i64;
        // The combined score counts the regimen once, at its higher risk.
        let combined =
            heme_patient + nonheme_patient + (heme_chemo as i64).max(nonheme_chemo as i64);

        let band = classify(BANDS, combined as f64);
        Ok(Assessment::from_band(combined, "points", band)
            .with_interpretation(format!(
                "CRASH combined score {combined}. {}",
                band.interpretation
            ))
            .with_detail("hematologic", subscore(hematologic, HEMATOLOGIC_BANDS))
            .with_detail(
                "nonhematologic",
                subscore(nonhematologic, NONHEMATOLOGIC_BANDS),
            ))
    }
}
