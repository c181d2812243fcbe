use clinscore_core::numeric::{fixed, round_to};
use clinscore_core::{Assessment, Band, ParamRange, Params, Result, Specialty, classify};

use crate::Calculator;

/// Reticulocyte Production Index: reticulocyte percentage corrected for
/// anemia and for prolonged maturation time.
pub struct ReticulocyteProductionIndex;

const RETICULOCYTES: ParamRange = ParamRange::new(0.0, 50.0);
const MEASURED_HCT: ParamRange = ParamRange::new(5.0, 65.0);
const NORMAL_HCT: ParamRange = ParamRange::new(35.0, 50.0);
const RBC_COUNT: ParamRange = ParamRange::new(1.0, 8.0);

pub static BANDS: &[Band] = &[
    Band::new(
        0.0,
        0.5,
        "Very Low Response",
        "Very decreased reticulocyte production",
        "Bone marrow failure or severe nutritional deficiency. Evaluate for aplasia, infiltration and iron, B12 or folate deficiency.",
    ),
    Band::new(
        0.5,
        2.0,
        "Inadequate Response",
        "Inadequate bone marrow response",
        "Hypoproliferative anemia. Evaluate iron stores, renal function and marrow disorders.",
    ),
    Band::new(
        2.0,
        3.0,
        "Borderline Response",
        "Borderline bone marrow response",
        "Early recovery or mild marrow dysfunction. Repeat in 1-2 weeks.",
    ),
    Band::new(
        3.0,
        f64::INFINITY,
        "Appropriate Response",
        "Appropriate bone marrow response",
        "Appropriate marrow response, suggesting hemolysis or blood loss. Evaluate for hemolysis and bleeding.",
    ),
];

/// Days a reticulocyte circulates before maturing, by hematocrit.
pub fn maturation_factor(hematocrit: f64) -> f64 {
    match hematocrit {
        h if h < 20.0 => 2.5,
        h if h < 25.0 => 2.0,
        h if h < 35.0 => 1.5,
        _ => 1.0,
    }
}

impl Calculator for ReticulocyteProductionIndex {
    fn id(&self) -> &'static str {
        "reticulocyte_production_index"
    }

    fn name(&self) -> &'static str {
        "Reticulocyte Production Index (RPI)"
    }

    fn specialty(&self) -> Specialty {
        Specialty::Hematology
    }

    fn parameters(&self) -> &'static [&'static str] {
        &[
            "reticulocyte_percentage",
            "measured_hematocrit",
            "normal_hematocrit",
            "rbc_count",
        ]
    }

    fn bands(&self) -> &'static [Band] {
        BANDS
    }

    fn calculate(&self, params: &Params) -> Result<Assessment> {
        let retic = RETICULOCYTES.check(
            "reticulocyte_percentage",
            params.number("reticulocyte_percentage")?,
        )?;
        let hct = MEASURED_HCT.check("measured_hematocrit", params.number("measured_hematocrit")?)?;
        let normal = NORMAL_HCT.check("normal_hematocrit", params.number("normal_hematocrit")?)?;
        let rbc = params
            .optional_number("rbc_count")?
            .map(|v| RBC_COUNT.check("rbc_count", v))
            .transpose()?;

        let corrected = retic * hct / normal;
        let factor = maturation_factor(hct);
        let rpi = corrected / factor;

        let band = classify(BANDS, rpi);
        let mut assessment = Assessment::from_band(round_to(rpi, 2), "index", band)
            .with_interpretation(format!("RPI {}. {}", fixed(rpi, 2), band.interpretation))
            .with_detail("corrected_reticulocyte_percentage", round_to(corrected, 2))
            .with_detail("maturation_factor", factor);
        if let Some(rbc) = rbc {
            // rbc in 10⁶/µL; absolute count per µL.
            let absolute = round_to(retic / 100.0 * rbc * 1_000_000.0, 0);
            assessment = assessment.with_detail("absolute_reticulocyte_count", absolute);
        }
        Ok(assessment)
    }
}
