use clinscore_core::{
    Assessment, Band, InvalidParameter, Params, Result, Specialty, Tally, classify,
};
use serde::{Deserialize, Serialize};

use crate::Calculator;

/// Critical-Care Pain Observation Tool. Four behavioural domains scored
/// 0-2; the fourth domain depends on whether the patient is intubated.
pub struct Cpot;

pub static BANDS: &[Band] = &[
    Band::new(
        0.0,
        3.0,
        "Minimal to No Pain",
        "Acceptable pain level",
        "Pain appears controlled. Continue regular reassessment and current analgesia.",
    ),
    Band::new(
        3.0,
        f64::INFINITY,
        "Unacceptable Pain",
        "Significant pain requiring intervention",
        "CPOT above 2 indicates significant pain. Give or titrate analgesia and reassess within 30 minutes.",
    ),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FacialExpression {
    RelaxedNeutral,
    Tense,
    Grimacing,
}

impl FacialExpression {
    fn points(self) -> i64 {
        match self {
            FacialExpression::RelaxedNeutral => 0,
            FacialExpression::Tense => 1,
            FacialExpression::Grimacing => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyMovements {
    AbsenceOfMovements,
    Protection,
    Restlessness,
}

impl BodyMovements {
    fn points(self) -> i64 {
        match self {
            BodyMovements::AbsenceOfMovements => 0,
            BodyMovements::Protection => 1,
            BodyMovements::Restlessness => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MuscleTension {
    Relaxed,
    TenseRigid,
    VeryTenseRigid,
}

impl MuscleTension {
    fn points(self) -> i64 {
        match self {
            MuscleTension::Relaxed => 0,
            MuscleTension::TenseRigid => 1,
            MuscleTension::VeryTenseRigid => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VentilatorCompliance {
    Tolerating,
    CoughingTolerating,
    FightingVentilator,
}

impl VentilatorCompliance {
    fn points(self) -> i64 {
        match self {
            VentilatorCompliance::Tolerating => 0,
            VentilatorCompliance::CoughingTolerating => 1,
            VentilatorCompliance::FightingVentilator => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Vocalization {
    NormalToneNoSound,
    SighingMoaning,
    CryingSobbing,
}

impl Vocalization {
    fn points(self) -> i64 {
        match self {
            Vocalization::NormalToneNoSound => 0,
            Vocalization::SighingMoaning => 1,
            Vocalization::CryingSobbing => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatientStatus {
    Intubated,
    Extubated,
}

impl Calculator for Cpot {
    fn id(&self) -> &'static str {
        "cpot"
    }

    fn name(&self) -> &'static str {
        "Critical-Care Pain Observation Tool (CPOT)"
    }

    fn specialty(&self) -> Specialty {
        Specialty::CriticalCare
    }

    fn parameters(&self) -> &'static [&'static str] {
        &[
            "facial_expression",
            "body_movements",
            "muscle_tension",
            "patient_status",
            "ventilator_compliance",
            "vocalization",
        ]
    }

    fn bands(&self) -> &'static [Band] {
        BANDS
    }

    fn calculate(&self, params: &Params) -> Result<Assessment> {
        let facial: FacialExpression = params.token("facial_expression")?;
        let movements: BodyMovements = params.token("body_movements")?;
        let tension: MuscleTension = params.token("muscle_tension")?;
        let status: PatientStatus = params.token("patient_status")?;

        let mut tally = Tally::new();
        tally
            .add("facial_expression", facial.points())
            .add("body_movements", movements.points())
            .add("muscle_tension", tension.points());

        match status {
            PatientStatus::Intubated => {
                let compliance: VentilatorCompliance =
                    params.optional_token("ventilator_compliance")?.ok_or_else(|| {
                        InvalidParameter::new(
                            "ventilator_compliance",
                            "required for intubated patients",
                        )
                    })?;
                tally.add("ventilator_compliance", compliance.points());
            }
            PatientStatus::Extubated => {
                let vocalization: Vocalization = params
                    .optional_token("vocalization")?
                    .ok_or_else(|| {
                        InvalidParameter::new("vocalization", "required for extubated patients")
                    })?;
                tally.add("vocalization", vocalization.points());
            }
        }

        let score = tally.total();
        let band = classify(BANDS, score as f64);
        let interpretation = format!("CPOT {score}/8. {}", band.interpretation);
        Ok(Assessment::from_band(score, "points", band)
            .with_interpretation(interpretation)
            .with_detail("breakdown", tally.breakdown()))
    }
}
