use clinscore_core::{Assessment, Band, ParamRange, Params, Result, Specialty, Tally, band_index};
use serde::{Deserialize, Serialize};

use crate::Calculator;

/// Manchester score for small cell lung cancer prognosis.
pub struct ManchesterSclc;

const SODIUM: ParamRange = ParamRange::new(110.0, 160.0);
const BICARBONATE: ParamRange = ParamRange::new(10.0, 40.0);
const KPS: ParamRange = ParamRange::integer(0.0, 100.0);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Ldh {
    Normal,
    Elevated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlkalinePhosphatase {
    #[serde(rename = "normal")]
    Normal,
    #[serde(rename = "1.1_to_1.5_times_normal")]
    MildlyElevated,
    #[serde(rename = "greater_than_1.5_times_normal")]
    Elevated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiseaseStage {
    Limited,
    Extensive,
}

pub static BANDS: &[Band] = &[
    Band::new(
        0.0,
        2.0,
        "Good Prognosis",
        "Good prognostic group with best survival outcomes",
        "2-year survival about 16%, including long-term survivors. Treat with curative intent.",
    ),
    Band::new(
        2.0,
        4.0,
        "Medium Prognosis",
        "Intermediate prognostic group with moderate survival outcomes",
        "2-year survival about 2.5%. Standard chemotherapy with close response monitoring.",
    ),
    Band::new(
        4.0,
        f64::INFINITY,
        "Poor Prognosis",
        "Poor prognostic group with worst survival outcomes",
        "2-year survival near 0%. Weigh palliative-focused treatment and early supportive care.",
    ),
];

const TWO_YEAR_SURVIVAL: [&str; 3] = ["16.2%", "2.5%", "0%"];

impl Calculator for ManchesterSclc {
    fn id(&self) -> &'static str {
        "manchester_sclc"
    }

    fn name(&self) -> &'static str {
        "Manchester Score for Small Cell Lung Cancer"
    }

    fn specialty(&self) -> Specialty {
        Specialty::Oncology
    }

    fn parameters(&self) -> &'static [&'static str] {
        &[
            "serum_ldh",
            "serum_sodium",
            "serum_alkaline_phosphatase",
            "serum_bicarbonate",
            "disease_stage",
            "karnofsky_performance_status",
        ]
    }

    fn bands(&self) -> &'static [Band] {
        BANDS
    }

    fn calculate(&self, params: &Params) -> Result<Assessment> {
        let ldh: Ldh = params.token("serum_ldh")?;
        let sodium = SODIUM.check("serum_sodium", params.number("serum_sodium")?)?;
        let alp: AlkalinePhosphatase = params.token("serum_alkaline_phosphatase")?;
        let bicarbonate =
            BICARBONATE.check("serum_bicarbonate", params.number("serum_bicarbonate")?)?;
        let stage: DiseaseStage = params.token("disease_stage")?;
        let kps = KPS.check_int(
            "karnofsky_performance_status",
            params.integer("karnofsky_performance_status")?,
        )?;

        let mut tally = Tally::new();
        tally
            .flag("serum_ldh", ldh == Ldh::Elevated, 1)
            .flag("serum_sodium", sodium < 132.0, 1)
            .flag(
                "serum_alkaline_phosphatase",
                alp == AlkalinePhosphatase::Elevated,
                1,
            )
            .flag("serum_bicarbonate", bicarbonate < 24.0, 1)
            .flag("disease_stage", stage == DiseaseStage::Extensive, 1)
            .flag("karnofsky_performance_status", kps <= 50, 1);

        let score = tally.total();
        let index = band_index(BANDS, score as f64);
        let band = &BANDS[index];
        Ok(Assessment::from_band(score, "points", band)
            .with_interpretation(format!("Manchester score {score}/6. {}", band.interpretation))
            .with_detail("two_year_survival", TWO_YEAR_SURVIVAL[index])
            .with_detail("breakdown", tally.breakdown()))
    }
}
