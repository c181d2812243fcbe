use clinscore_core::numeric::{fixed, round_to};
use clinscore_core::{Assessment, Band, ParamRange, Params, Result, Specialty, classify};
use serde::{Deserialize, Serialize};

use crate::Calculator;

/// Mantle cell lymphoma International Prognostic Index. With a Ki-67 index
/// the biological MIPI (MIPIb) is reported instead.
pub struct Mipi;

const AGE: ParamRange = ParamRange::integer(18.0, 100.0);
const LDH: ParamRange = ParamRange::above(0.0, 10_000.0);
const LDH_ULN: ParamRange = ParamRange::above(0.0, 400.0);
const WBC: ParamRange = ParamRange::above(0.0, 500.0);
const KI67: ParamRange = ParamRange::new(0.0, 100.0);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Ecog {
    #[serde(rename = "0_to_1")]
    ZeroToOne,
    #[serde(rename = "2_to_4")]
    TwoToFour,
}

pub static BANDS: &[Band] = &[
    Band::new(
        f64::NEG_INFINITY,
        5.7,
        "Low Risk",
        "Low-risk MIPI",
        "Median overall survival not reached (5-year OS about 60%).",
    ),
    Band::new(
        5.7,
        6.2,
        "Intermediate Risk",
        "Intermediate-risk MIPI",
        "Median overall survival about 51 months.",
    ),
    Band::new(
        6.2,
        f64::INFINITY,
        "High Risk",
        "High-risk MIPI",
        "Median overall survival about 29 months. Consider intensive or investigational therapy.",
    ),
];

static BIOLOGICAL_BANDS: &[Band] = &[
    Band::new(
        f64::NEG_INFINITY,
        5.7,
        "Low Risk",
        "Low-risk MIPIb",
        "Median overall survival not reached.",
    ),
    Band::new(
        5.7,
        6.5,
        "Intermediate Risk",
        "Intermediate-risk MIPIb",
        "Median overall survival about 58 months.",
    ),
    Band::new(
        6.5,
        f64::INFINITY,
        "High Risk",
        "High-risk MIPIb",
        "Median overall survival about 37 months. Consider intensive or investigational therapy.",
    ),
];

/// WBC is entered in 10³/µL; the index uses cells per 10⁶/L.
pub fn mipi_score(age: i64, ecog: Ecog, ldh: f64, ldh_uln: f64, wbc: f64) -> f64 {
    let ecog_term = if ecog == Ecog::TwoToFour { 0.6978 } else { 0.0 };
    0.03535 * age as f64
        + ecog_term
        + 1.367 * (ldh / ldh_uln).log10()
        + 0.9393 * (wbc * 1000.0).log10()
}

impl Calculator for Mipi {
    fn id(&self) -> &'static str {
        "mipi"
    }

    fn name(&self) -> &'static str {
        "Mantle Cell Lymphoma International Prognostic Index (MIPI)"
    }

    fn specialty(&self) -> Specialty {
        Specialty::Oncology
    }

    fn parameters(&self) -> &'static [&'static str] {
        &[
            "age",
            "ecog_performance_status",
            "serum_ldh",
            "ldh_upper_limit_normal",
            "white_blood_cell_count",
            "ki67_index",
        ]
    }

    fn bands(&self) -> &'static [Band] {
        BANDS
    }

    fn calculate(&self, params: &Params) -> Result<Assessment> {
        let age = AGE.check_int("age", params.integer("age")?)?;
        let ecog: Ecog = params.token("ecog_performance_status")?;
        let ldh = LDH.check("serum_ldh", params.number("serum_ldh")?)?;
        let uln =
            LDH_ULN.check("ldh_upper_limit_normal", params.number("ldh_upper_limit_normal")?)?;
        let wbc = WBC.check("white_blood_cell_count", params.number("white_blood_cell_count")?)?;
        let ki67 = params
            .optional_number("ki67_index")?
            .map(|v| KI67.check("ki67_index", v))
            .transpose()?;

        let mipi = mipi_score(age, ecog, ldh, uln, wbc);
        let (score, label, bands) = match ki67 {
            Some(ki67) => (mipi + 0.02142 * ki67, "MIPIb", BIOLOGICAL_BANDS),
            None => (mipi, "MIPI", BANDS),
        };

        let band = classify(bands, score);
        Ok(Assessment::from_band(round_to(score, 3), "points", band)
            .with_interpretation(format!("{label} {}. {}", fixed(score, 2), band.interpretation))
            .with_detail("score_type", label)
            .with_detail("mipi_score", round_to(mipi, 3))
            .with_detail("ldh_ratio", round_to(ldh / uln, 2)))
    }
}
