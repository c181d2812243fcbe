use clinscore_core::{Assessment, Band, ParamRange, Params, Result, Specialty, Tally, band_index};
use serde::{Deserialize, Serialize};

use crate::Calculator;

/// LENT prognostic score for malignant pleural effusion: pleural fluid
/// LDH, ECOG status, neutrophil-to-lymphocyte ratio and tumor type.
pub struct LentScore;

const LDH: ParamRange = ParamRange::new(0.0, 10_000.0);
const ECOG: ParamRange = ParamRange::integer(0.0, 4.0);
const NLR: ParamRange = ParamRange::new(0.0, 100.0);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TumorType {
    MesotheliomaHematologic = 0,
    BreastGynecologicRenal = 1,
    LungOther = 2,
}

pub static BANDS: &[Band] = &[
    Band::new(
        0.0,
        2.0,
        "Low Risk",
        "Low risk of mortality",
        "Median survival about 319 days. Consider definitive pleural procedures such as indwelling catheter or pleurodesis.",
    ),
    Band::new(
        2.0,
        5.0,
        "Moderate Risk",
        "Moderate risk of mortality",
        "Median survival about 130 days. Balance procedural burden against expected benefit.",
    ),
    Band::new(
        5.0,
        f64::INFINITY,
        "High Risk",
        "High risk of mortality",
        "Median survival about 44 days. Favor the least invasive symptom-directed interventions and palliative care.",
    ),
];

const MEDIAN_SURVIVAL_DAYS: [i64; 3] = [319, 130, 44];

impl Calculator for LentScore {
    fn id(&self) -> &'static str {
        "lent_score"
    }

    fn name(&self) -> &'static str {
        "LENT Prognostic Score for Malignant Pleural Effusion"
    }

    fn specialty(&self) -> Specialty {
        Specialty::Oncology
    }

    fn parameters(&self) -> &'static [&'static str] {
        &[
            "pleural_fluid_ldh",
            "ecog_performance_status",
            "neutrophil_lymphocyte_ratio",
            "tumor_type",
        ]
    }

    fn bands(&self) -> &'static [Band] {
        BANDS
    }

    fn calculate(&self, params: &Params) -> Result<Assessment> {
        let ldh = LDH.check("pleural_fluid_ldh", params.number("pleural_fluid_ldh")?)?;
        let ecog = ECOG.check_int(
            "ecog_performance_status",
            params.integer("ecog_performance_status")?,
        )?;
        let nlr = NLR.check(
            "neutrophil_lymphocyte_ratio",
            params.number("neutrophil_lymphocyte_ratio")?,
        )?;
        let tumor: TumorType = params.token("tumor_type")?;

        let mut tally = Tally::new();
        tally
            .flag("pleural_fluid_ldh", ldh >= 1500.0, 1)
            .add("ecog_performance_status", ecog.min(3))
            .flag("neutrophil_lymphocyte_ratio", nlr >= 9.0, 1)
            .add("tumor_type", tumor as i64);

        let score = tally.total();
        let index = band_index(BANDS, score as f64);
        let band = &BANDS[index];
        Ok(Assessment::from_band(score, "points", band)
            .with_interpretation(format!("LENT score {score}. {}", band.interpretation))
            .with_detail("median_survival_days", MEDIAN_SURVIVAL_DAYS[index])
            .with_detail("breakdown", tally.breakdown()))
    }
}
