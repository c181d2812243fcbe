use clinscore_core::{Assessment, ParamRange, Params, Result, Specialty};
use serde::{Deserialize, Serialize};

use crate::Calculator;

/// Mangled Extremity Severity Score.
pub struct Mess;

const ISCHEMIA_HOURS: ParamRange = ParamRange::new(0.0, 24.0);
const AGE: ParamRange = ParamRange::integer(0.0, 120.0);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LimbIschemia {
    ReducedPulseNormalPerfusion,
    PulselessParesthesiasSlowCapillaryRefill,
    CoolParalyzedNumbInsensate,
}

impl LimbIschemia {
    pub fn points(self) -> i64 {
        match self {
            Self::ReducedPulseNormalPerfusion => 1,
            Self::PulselessParesthesiasSlowCapillaryRefill => 2,
            Self::CoolParalyzedNumbInsensate => 3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Shock {
    NoShockSbpGreaterThan90,
    TransientHypotension,
    PersistentHypotension,
}

impl Shock {
    pub fn points(self) -> i64 {
        match self {
            Self::NoShockSbpGreaterThan90 => 0,
            Self::TransientHypotension => 1,
            Self::PersistentHypotension => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mechanism {
    LowEnergy,
    MediumEnergy,
    HighEnergy,
    VeryHighEnergy,
}

impl Mechanism {
    pub fn points(self) -> i64 {
        match self {
            Self::LowEnergy => 1,
            Self::MediumEnergy => 2,
            Self::HighEnergy => 3,
            Self::VeryHighEnergy => 4,
        }
    }
}

impl Calculator for Mess {
    fn id(&self) -> &'static str {
        "mess"
    }

    fn name(&self) -> &'static str {
        "Mangled Extremity Severity Score (MESS)"
    }

    fn specialty(&self) -> Specialty {
        Specialty::Emergency
    }

    fn parameters(&self) -> &'static [&'static str] {
        &[
            "limb_ischemia",
            "ischemia_duration_hours",
            "patient_age",
            "shock_status",
            "injury_mechanism",
        ]
    }

    fn calculate(&self, params: &Params) -> Result<Assessment> {
        let ischemia: LimbIschemia = params.token("limb_ischemia")?;
        let hours = ISCHEMIA_HOURS.check(
            "ischemia_duration_hours",
            params.number("ischemia_duration_hours")?,
        )?;
        let age = AGE.check_int("patient_age", params.integer("patient_age")?)?;
        let shock: Shock = params.token("shock_status")?;
        let mechanism: Mechanism = params.token("injury_mechanism")?;

        // Ischemia points double beyond six hours.
        let multiplier = if hours > 6.0 { 2 } else { 1 };
        let ischemia_points = ischemia.points() * multiplier;
        let age_points = match age {
            ..30 => 0,
            30..50 => 1,
            _ => 2,
        };
        let score = ischemia_points + age_points + shock.points() + mechanism.points();

        let (stage, description, interpretation) = match score {
            ..=6 => (
                "Limb Salvage Likely",
                "Low risk for amputation with good salvage potential",
                "MESS below 7 predicts successful limb salvage. Pursue reconstruction.",
            ),
            7 => (
                "Borderline Decision",
                "Traditional threshold for amputation consideration",
                "MESS of 7 is the traditional amputation threshold. Decide with clinical judgment and multidisciplinary input.",
            ),
            _ => (
                "Amputation Likely",
                "High probability of amputation requirement",
                "MESS of 8 or more is associated with amputation. Discuss primary amputation with the multidisciplinary team.",
            ),
        };

        Ok(Assessment::new(score, "points", stage, description, interpretation)
            .with_detail("ischemia_points", ischemia_points)
            .with_detail("ischemia_multiplier", multiplier)
            .with_detail("age_points", age_points)
            .with_detail("shock_points", shock.points())
            .with_detail("mechanism_points", mechanism.points()))
    }
}
