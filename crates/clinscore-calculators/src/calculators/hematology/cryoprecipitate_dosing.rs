use clinscore_core::numeric::round_to;
use clinscore_core::{
    Assessment, Band, InvalidParameter, ParamRange, Params, Result, Sex, Specialty, classify,
};

use crate::Calculator;

/// Cryoprecipitate units needed to raise fibrinogen to a target level.
pub struct CryoprecipitateDosing;

const WEIGHT: ParamRange = ParamRange::new(1.0, 300.0);
const HEMATOCRIT: ParamRange = ParamRange::new(0.15, 0.65);
const CURRENT_FIBRINOGEN: ParamRange = ParamRange::new(0.0, 1000.0);
const TARGET_FIBRINOGEN: ParamRange = ParamRange::new(50.0, 500.0);
const FIBRINOGEN_PER_UNIT: ParamRange = ParamRange::new(150.0, 300.0);

const DEFAULT_FIBRINOGEN_PER_UNIT: f64 = 200.0;

pub static BANDS: &[Band] = &[
    Band::new(
        0.0,
        6.0,
        "Low Dose",
        "Small fibrinogen replacement",
        "Small replacement dose. Recheck fibrinogen 30-60 minutes after transfusion.",
    ),
    Band::new(
        6.0,
        16.0,
        "Standard Dose",
        "Typical therapeutic replacement",
        "Typical therapeutic dose, often given as pooled units. Recheck fibrinogen after transfusion.",
    ),
    Band::new(
        16.0,
        31.0,
        "High Dose",
        "Large fibrinogen replacement",
        "Large replacement dose. Consider divided doses and monitor for volume overload.",
    ),
    Band::new(
        31.0,
        f64::INFINITY,
        "Very High Dose",
        "Massive fibrinogen replacement",
        "Very large dose. Consider fibrinogen concentrate and consult transfusion medicine.",
    ),
];

/// Plasma volume in dL from weight, sex and hematocrit (fraction).
pub fn plasma_volume_dl(weight_kg: f64, sex: Sex, hematocrit: f64) -> f64 {
    let factor = if sex.is_female() { 0.065 } else { 0.07 };
    weight_kg * factor * (1.0 - hematocrit)
}

impl Calculator for CryoprecipitateDosing {
    fn id(&self) -> &'static str {
        "cryoprecipitate_dosing"
    }

    fn name(&self) -> &'static str {
        "Cryoprecipitate Dosing for Fibrinogen Replacement"
    }

    fn specialty(&self) -> Specialty {
        Specialty::Hematology
    }

    fn parameters(&self) -> &'static [&'static str] {
        &[
            "patient_weight",
            "patient_sex",
            "hematocrit",
            "current_fibrinogen",
            "target_fibrinogen",
            "fibrinogen_per_unit",
        ]
    }

    fn bands(&self) -> &'static [Band] {
        BANDS
    }

    fn calculate(&self, params: &Params) -> Result<Assessment> {
        let weight = WEIGHT.check("patient_weight", params.number("patient_weight")?)?;
        let sex: Sex = params.token("patient_sex")?;
        let hct = HEMATOCRIT.check("hematocrit", params.number("hematocrit")?)?;
        let current =
            CURRENT_FIBRINOGEN.check("current_fibrinogen", params.number("current_fibrinogen")?)?;
        let target =
            TARGET_FIBRINOGEN.check("target_fibrinogen", params.number("target_fibrinogen")?)?;
        let per_unit = params
            .optional_number("fibrinogen_per_unit")?
            .map(|v| FIBRINOGEN_PER_UNIT.check("fibrinogen_per_unit", v))
            .transpose()?
            .unwrap_or(DEFAULT_FIBRINOGEN_PER_UNIT);
        if current >= target {
            return Err(InvalidParameter::new(
                "target_fibrinogen",
                "must be higher than current_fibrinogen",
            ));
        }

        let plasma_volume = plasma_volume_dl(weight, sex, hct);
        let needed_mg = (target - current) * plasma_volume;
        let exact_units = needed_mg / per_unit;
        let units = exact_units.max(0.0).ceil() as i64;

        let band = classify(BANDS, units as f64);
        Ok(Assessment::from_band(units, "units", band)
            .with_interpretation(format!(
                "Give {units} units of cryoprecipitate to raise fibrinogen from {current} to {target} mg/dL. {}",
                band.interpretation
            ))
            .with_detail("plasma_volume_dl", round_to(plasma_volume, 1))
            .with_detail("total_fibrinogen_needed_mg", round_to(needed_mg, 0))
            .with_detail("fibrinogen_per_unit_mg", per_unit)
            .with_detail("exact_units_calculated", round_to(exact_units, 2)))
    }
}
