use clinscore_core::{Assessment, Band, ParamRange, Params, Result, Specialty, Tally, classify};
use serde::{Deserialize, Serialize};

use crate::Calculator;

/// MIPSS70 / MIPSS70+ for transplant-age primary myelofibrosis.
pub struct Mipss70;

const AGE: ParamRange = ParamRange::integer(18.0, 120.0);
const HEMOGLOBIN: ParamRange = ParamRange::new(3.0, 20.0);
const WBC: ParamRange = ParamRange::new(0.1, 500.0);
const PLATELETS: ParamRange = ParamRange::new(1.0, 2000.0);
const BLASTS: ParamRange = ParamRange::new(0.0, 100.0);

/// Very high molecular risk status; a known answer selects MIPSS70+.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VeryHighRisk {
    Yes,
    No,
    Unknown,
}

pub static BANDS: &[Band] = &[
    Band::new(
        0.0,
        3.0,
        "Low Risk",
        "Low risk primary myelofibrosis",
        "Median survival exceeds 20 years. Monitor every 3-6 months; JAK inhibitors only for symptomatic disease. Transplant not indicated.",
    ),
    Band::new(
        3.0,
        5.0,
        "Intermediate-1 Risk",
        "Intermediate-1 risk primary myelofibrosis",
        "Median survival 8-20 years. Monitor every 2-4 months; consider JAK inhibitors for symptomatic disease. Transplant generally deferred.",
    ),
    Band::new(
        5.0,
        7.0,
        "Intermediate-2 Risk",
        "Intermediate-2 risk primary myelofibrosis",
        "Median survival 4-8 years. JAK inhibitor therapy and supportive care; evaluate for allogeneic stem cell transplantation.",
    ),
    Band::new(
        7.0,
        f64::INFINITY,
        "High Risk",
        "High risk primary myelofibrosis",
        "Median survival below 4 years. Prioritize urgent transplant referral; consider clinical trials and intensive supportive care.",
    ),
];

impl Calculator for Mipss70 {
    fn id(&self) -> &'static str {
        "mipss70"
    }

    fn name(&self) -> &'static str {
        "MIPSS70 for Primary Myelofibrosis"
    }

    fn specialty(&self) -> Specialty {
        Specialty::Hematology
    }

    fn parameters(&self) -> &'static [&'static str] {
        &[
            "age_years",
            "hemoglobin",
            "white_blood_count",
            "platelet_count",
            "circulating_blasts",
            "constitutional_symptoms",
            "high_molecular_risk_mutations",
            "very_high_molecular_risk",
        ]
    }

    fn bands(&self) -> &'static [Band] {
        BANDS
    }

    fn calculate(&self, params: &Params) -> Result<Assessment> {
        let age = AGE.check_int("age_years", params.integer("age_years")?)?;
        let hemoglobin = HEMOGLOBIN.check("hemoglobin", params.number("hemoglobin")?)?;
        let wbc = WBC.check("white_blood_count", params.number("white_blood_count")?)?;
        let platelets = PLATELETS.check("platelet_count", params.number("platelet_count")?)?;
        let blasts = BLASTS.check("circulating_blasts", params.number("circulating_blasts")?)?;
        let very_high = params
            .optional_token::<VeryHighRisk>("very_high_molecular_risk")?
            .unwrap_or(VeryHighRisk::Unknown);

        let mut tally = Tally::new();
        tally
            .flag("age", age > 65, 2)
            .flag("hemoglobin", hemoglobin < 10.0, 1)
            .flag("wbc", wbc > 25.0, 2)
            .flag("platelets", platelets < 100.0, 2)
            .flag("blasts", blasts > 2.0, 1)
            .flag("symptoms", params.yes_no("constitutional_symptoms")?, 1)
            .flag(
                "high_risk_mutations",
                params.yes_no("high_molecular_risk_mutations")?,
                1,
            )
            .flag("very_high_risk", very_high == VeryHighRisk::Yes, 1);

        let version = if very_high == VeryHighRisk::Unknown { "MIPSS70" } else { "MIPSS70+" };
        let score = tally.total();
        let band = classify(BANDS, score as f64);
        Ok(Assessment::from_band(score, "points", band)
            .with_interpretation(format!("{version} score {score}. {}", band.interpretation))
            .with_detail("version", version)
            .with_detail("breakdown", tally.breakdown()))
    }
}
