use clinscore_core::numeric::{fixed, round_to};
use clinscore_core::{
    Assessment, Band, InvalidParameter, ParamRange, Params, Result, Specialty, classify,
};
use serde::{Deserialize, Serialize};

use crate::Calculator;

/// Maximum allowable blood loss before transfusion, from estimated blood
/// volume and the initial and lowest acceptable hemoglobin.
pub struct MaximumAllowableBloodLoss;

const WEIGHT: ParamRange = ParamRange::new(0.5, 200.0);
const INITIAL_HB: ParamRange = ParamRange::new(3.0, 25.0);
const FINAL_HB: ParamRange = ParamRange::new(3.0, 15.0);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgeGroup {
    AdultMan,
    AdultWoman,
    Infant,
    Neonate,
    PrematureNeonate,
}

impl AgeGroup {
    /// Blood volume in mL/kg.
    pub fn blood_volume_coefficient(self) -> f64 {
        match self {
            AgeGroup::AdultMan => 75.0,
            AgeGroup::AdultWoman => 65.0,
            AgeGroup::Infant => 80.0,
            AgeGroup::Neonate => 85.0,
            AgeGroup::PrematureNeonate => 96.0,
        }
    }
}

pub static BANDS: &[Band] = &[
    Band::new(
        0.0,
        500.0,
        "Low Volume Loss",
        "Small allowable blood loss",
        "Limited tolerance for blood loss. Prepare blood products early and monitor losses closely.",
    ),
    Band::new(
        500.0,
        1500.0,
        "Moderate Volume Loss",
        "Moderate allowable blood loss",
        "Moderate tolerance for blood loss. Track cumulative losses and have blood products available.",
    ),
    Band::new(
        1500.0,
        3000.0,
        "High Volume Loss",
        "Large allowable blood loss",
        "Good tolerance for blood loss. Standard monitoring of losses and hemoglobin.",
    ),
    Band::new(
        3000.0,
        f64::INFINITY,
        "Very High Volume Loss",
        "Very large allowable blood loss",
        "High tolerance for blood loss. Estimates above 20% of blood volume lose accuracy; rely on serial hemoglobin.",
    ),
];

impl Calculator for MaximumAllowableBloodLoss {
    fn id(&self) -> &'static str {
        "maximum_allowable_blood_loss"
    }

    fn name(&self) -> &'static str {
        "Maximum Allowable Blood Loss Without Transfusion"
    }

    fn specialty(&self) -> Specialty {
        Specialty::Hematology
    }

    fn parameters(&self) -> &'static [&'static str] {
        &["age_group", "body_weight", "initial_hemoglobin", "final_hemoglobin"]
    }

    fn bands(&self) -> &'static [Band] {
        BANDS
    }

    fn calculate(&self, params: &Params) -> Result<Assessment> {
        let group: AgeGroup = params.token("age_group")?;
        let weight = WEIGHT.check("body_weight", params.number("body_weight")?)?;
        let initial = INITIAL_HB.check("initial_hemoglobin", params.number("initial_hemoglobin")?)?;
        let lowest = FINAL_HB.check("final_hemoglobin", params.number("final_hemoglobin")?)?;
        if lowest >= initial {
            return Err(InvalidParameter::new(
                "final_hemoglobin",
                "must be lower than initial_hemoglobin",
            ));
        }

        let ebv = weight * group.blood_volume_coefficient();
        let average = (initial + lowest) / 2.0;
        let abl = (ebv * (initial - lowest) / average).max(0.0);
        let percent_ebv = round_to(abl / ebv * 100.0, 1);

        let band = classify(BANDS, abl);
        Ok(Assessment::from_band(round_to(abl, 1), "mL", band)
            .with_interpretation(format!(
                "Maximum allowable blood loss {} mL ({percent_ebv}% of blood volume). {}",
                fixed(abl, 1),
                band.interpretation
            ))
            .with_detail("estimated_blood_volume_ml", round_to(ebv, 1))
            .with_detail("percentage_of_blood_volume", percent_ebv)
            .with_detail("accuracy_reliable", percent_ebv <= 20.0))
    }
}
