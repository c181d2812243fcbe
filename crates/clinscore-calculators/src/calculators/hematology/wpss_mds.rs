use clinscore_core::{Assessment, Band, Params, Result, Specialty, Tally, band_index};
use serde::{Deserialize, Serialize};

use crate::Calculator;

/// WHO classification-based Prognostic Scoring System for myelodysplastic
/// syndromes.
pub struct WpssMds;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WhoCategory {
    RaRarsDel5q = 0,
    RcmdRcmdRs = 1,
    #[serde(rename = "raeb_1")]
    Raeb1 = 2,
    #[serde(rename = "raeb_2")]
    Raeb2 = 3,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Karyotype {
    Good = 0,
    Intermediate = 1,
    Poor = 2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Transfusion {
    None = 0,
    Regular = 1,
}

pub static BANDS: &[Band] = &[
    Band::new(
        0.0,
        1.0,
        "Very Low Risk",
        "Excellent prognosis",
        "Very low probability of leukemic transformation. Routine monitoring.",
    ),
    Band::new(
        1.0,
        2.0,
        "Low Risk",
        "Good prognosis",
        "Low probability of leukemic transformation. Regular monitoring with supportive care.",
    ),
    Band::new(
        2.0,
        3.0,
        "Intermediate Risk",
        "Moderate prognosis",
        "Moderate probability of leukemic transformation. Close monitoring; consider disease-modifying therapy.",
    ),
    Band::new(
        3.0,
        5.0,
        "High Risk",
        "Poor prognosis",
        "High probability of leukemic transformation. Consider hypomethylating agents and transplant evaluation.",
    ),
    Band::new(
        5.0,
        f64::INFINITY,
        "Very High Risk",
        "Very poor prognosis",
        "Very high probability of leukemic transformation. Urgent consideration of intensive treatment or transplantation.",
    ),
];

/// Median survival in months per band.
const MEDIAN_SURVIVAL_MONTHS: [i64; 5] = [141, 66, 48, 26, 9];

impl Calculator for WpssMds {
    fn id(&self) -> &'static str {
        "wpss_mds"
    }

    fn name(&self) -> &'static str {
        "WHO Prognostic Scoring System (WPSS) for MDS"
    }

    fn specialty(&self) -> Specialty {
        Specialty::Hematology
    }

    fn parameters(&self) -> &'static [&'static str] {
        &["who_category", "karyotype", "transfusion_requirement"]
    }

    fn bands(&self) -> &'static [Band] {
        BANDS
    }

    fn calculate(&self, params: &Params) -> Result<Assessment> {
        let who: WhoCategory = params.token("who_category")?;
        let karyotype: Karyotype = params.token("karyotype")?;
        let transfusion: Transfusion = params.token("transfusion_requirement")?;

        let mut tally = Tally::new();
        tally
            .add("who_category", who as i64)
            .add("karyotype", karyotype as i64)
            .add("transfusion_requirement", transfusion as i64);

        let score = tally.total();
        let index = band_index(BANDS, score as f64);
        let band = &BANDS[index];
        let months = MEDIAN_SURVIVAL_MONTHS[index];

        Ok(Assessment::from_band(score, "points", band)
            .with_interpretation(format!(
                "WPSS {score} points indicates {} MDS with median survival of about {months} months. {}",
                band.stage,
                band.interpretation
            ))
            .with_detail("median_survival_months", months)
            .with_detail("breakdown", tally.breakdown()))
    }
}
