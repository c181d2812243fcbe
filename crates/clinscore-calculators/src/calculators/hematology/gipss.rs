use clinscore_core::{Assessment, Band, Params, Result, Specialty, Tally, band_index};
use serde::{Deserialize, Serialize};

use crate::Calculator;

/// Genetically Inspired Prognostic Scoring System for primary myelofibrosis.
pub struct Gipss;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KaryotypeRisk {
    Favorable = 0,
    Unfavorable = 1,
    VeryHighRisk = 2,
}

pub static BANDS: &[Band] = &[
    Band::new(
        0.0,
        1.0,
        "Low Risk",
        "Median survival 26.4 years",
        "Low-risk primary myelofibrosis. Observation or symptom-directed therapy.",
    ),
    Band::new(
        1.0,
        2.0,
        "Intermediate-1 Risk",
        "Median survival 8.0 years",
        "Intermediate-1 risk. Symptom-directed therapy; consider clinical trials.",
    ),
    Band::new(
        2.0,
        3.0,
        "Intermediate-2 Risk",
        "Median survival 4.2 years",
        "Intermediate-2 risk. Evaluate for allogeneic stem cell transplantation.",
    ),
    Band::new(
        3.0,
        f64::INFINITY,
        "High Risk",
        "Median survival 2.0 years",
        "High-risk disease. Allogeneic stem cell transplantation should be considered in eligible patients.",
    ),
];

/// (median survival years, 5-year survival %) per band.
const SURVIVAL: [(f64, i64); 4] = [(26.4, 94), (8.0, 73), (4.2, 40), (2.0, 14)];

impl Calculator for Gipss {
    fn id(&self) -> &'static str {
        "gipss"
    }

    fn name(&self) -> &'static str {
        "GIPSS for Primary Myelofibrosis"
    }

    fn specialty(&self) -> Specialty {
        Specialty::Hematology
    }

    fn parameters(&self) -> &'static [&'static str] {
        &[
            "karyotype_risk",
            "calr_type1_mutation",
            "asxl1_mutation",
            "srsf2_mutation",
            "u2af1q157_mutation",
        ]
    }

    fn bands(&self) -> &'static [Band] {
        BANDS
    }

    fn calculate(&self, params: &Params) -> Result<Assessment> {
        let karyotype: KaryotypeRisk = params.token("karyotype_risk")?;

        let mut tally = Tally::new();
        tally
            .add("karyotype_risk", karyotype as i64)
            // Absence of a type 1/like CALR mutation is the adverse finding.
            .flag(
                "calr_type1_absent",
                !params.yes_no("calr_type1_mutation")?,
                1,
            )
            .flag("asxl1_mutation", params.yes_no("asxl1_mutation")?, 1)
            .flag("srsf2_mutation", params.yes_no("srsf2_mutation")?, 1)
            .flag(
                "u2af1q157_mutation",
                params.yes_no("u2af1q157_mutation")?,
                1,
            );

        let score = tally.total();
        let index = band_index(BANDS, score as f64);
        let band = &BANDS[index];
        let (median_years, five_year) = SURVIVAL[index];

        Ok(Assessment::from_band(score, "points", band)
            .with_interpretation(format!(
                "GIPSS {score} points: {}. 5-year survival {five_year}%. {}",
                band.stage, band.interpretation
            ))
            .with_detail("median_survival_years", median_years)
            .with_detail("five_year_survival_percent", five_year)
            .with_detail("breakdown", tally.breakdown()))
    }
}
