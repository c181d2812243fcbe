use clinscore_core::numeric::{fixed, logistic, round_to};
use clinscore_core::{Assessment, Band, ParamRange, Params, Result, Specialty, classify};
use serde::{Deserialize, Serialize};

use crate::Calculator;

/// IMPACT 6-month outcome after moderate or severe traumatic brain injury.
///
/// The core model uses age, motor score and pupils; extended adds
/// secondary insults and CT findings; lab adds glucose and hemoglobin.
pub struct ImpactScore;

const AGE: ParamRange = ParamRange::integer(14.0, 100.0);
const GLUCOSE: ParamRange = ParamRange::new(50.0, 800.0);
const HEMOGLOBIN: ParamRange = ParamRange::new(5.0, 20.0);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MotorScore {
    NoMotorResponse = 1,
    AbnormalExtension = 2,
    AbnormalFlexion = 3,
    WithdrawsFromPain = 4,
    LocalizesPain = 5,
    ObeysCommands = 6,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PupillaryReactivity {
    BothReactive = 0,
    OneReactive = 1,
    BothNonreactive = 2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarshallClass {
    DiffuseInjuryI = 1,
    DiffuseInjuryIi = 2,
    DiffuseInjuryIii = 3,
    DiffuseInjuryIv = 4,
    EvacuatedMassLesion = 5,
    NonEvacuatedMassLesion = 6,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Model {
    Core,
    Extended,
    Lab,
}

struct Coefficients {
    intercept: f64,
    age: f64,
    motor: f64,
    pupils: f64,
    hypoxia: f64,
    hypotension: f64,
    marshall: f64,
    traumatic_sah: f64,
    epidural_hematoma: f64,
    glucose: f64,
    hemoglobin: f64,
    /// Unfavorable outcome is approximated as a multiple of mortality.
    unfavorable_ratio: f64,
}

const CORE: Coefficients = Coefficients {
    intercept: -1.65,
    age: 0.032,
    motor: -0.45,
    pupils: 0.38,
    hypoxia: 0.0,
    hypotension: 0.0,
    marshall: 0.0,
    traumatic_sah: 0.0,
    epidural_hematoma: 0.0,
    glucose: 0.0,
    hemoglobin: 0.0,
    unfavorable_ratio: 1.6,
};

const EXTENDED: Coefficients = Coefficients {
    intercept: -2.12,
    age: 0.034,
    motor: -0.48,
    pupils: 0.42,
    hypoxia: 0.35,
    hypotension: 0.28,
    marshall: 0.15,
    traumatic_sah: 0.22,
    epidural_hematoma: -0.18,
    glucose: 0.0,
    hemoglobin: 0.0,
    unfavorable_ratio: 1.5,
};

const LAB: Coefficients = Coefficients {
    intercept: -2.45,
    age: 0.036,
    motor: -0.52,
    pupils: 0.45,
    hypoxia: 0.38,
    hypotension: 0.31,
    marshall: 0.18,
    traumatic_sah: 0.25,
    epidural_hematoma: -0.15,
    glucose: 0.002,
    hemoglobin: -0.08,
    unfavorable_ratio: 1.4,
};

impl Model {
    fn coefficients(self) -> &'static Coefficients {
        match self {
            Model::Core => &CORE,
            Model::Extended => &EXTENDED,
            Model::Lab => &LAB,
        }
    }

    fn label(self) -> &'static str {
        match self {
            Model::Core => "CORE",
            Model::Extended => "EXTENDED",
            Model::Lab => "LAB",
        }
    }
}

pub static BANDS: &[Band] = &[
    Band::new(
        0.0,
        10.0,
        "Very Low Risk",
        "Very low 6-month mortality",
        "Excellent prognosis. Aggressive treatment strongly indicated; good functional recovery expected.",
    ),
    Band::new(
        10.0,
        25.0,
        "Low Risk",
        "Low 6-month mortality",
        "Good prognosis. Aggressive treatment recommended; most patients regain functional independence.",
    ),
    Band::new(
        25.0,
        50.0,
        "Moderate Risk",
        "Moderate 6-month mortality",
        "Significant risk of death or severe disability. Involve the family in treatment decisions.",
    ),
    Band::new(
        50.0,
        75.0,
        "High Risk",
        "High 6-month mortality",
        "Poor prognosis. Careful goals-of-care discussion with the family; limited functional recovery expected.",
    ),
    Band::new(
        75.0,
        f64::INFINITY,
        "Very High Risk",
        "Very high 6-month mortality",
        "Very poor prognosis. Consider comfort care measures; family counselling on realistic expectations is essential.",
    ),
];

fn indicator(present: bool) -> f64 {
    if present { 1.0 } else { 0.0 }
}

impl Calculator for ImpactScore {
    fn id(&self) -> &'static str {
        "impact_score"
    }

    fn name(&self) -> &'static str {
        "IMPACT Score for Traumatic Brain Injury"
    }

    fn specialty(&self) -> Specialty {
        Specialty::Neurology
    }

    fn parameters(&self) -> &'static [&'static str] {
        &[
            "age",
            "motor_score",
            "pupillary_reactivity",
            "model_type",
            "hypoxia",
            "hypotension",
            "marshall_ct_classification",
            "traumatic_sah",
            "epidural_hematoma",
            "glucose",
            "hemoglobin",
        ]
    }

    fn bands(&self) -> &'static [Band] {
        BANDS
    }

    fn calculate(&self, params: &Params) -> Result<Assessment> {
        let age = AGE.check_int("age", params.integer("age")?)?;
        let motor: MotorScore = params.token("motor_score")?;
        let pupils: PupillaryReactivity = params.token("pupillary_reactivity")?;
        let model: Model = params.token("model_type")?;
        let c = model.coefficients();

        let mut x = c.intercept
            + c.age * age as f64
            + c.motor * motor as i64 as f64
            + c.pupils * pupils as i64 as f64;
        if model != Model::Core {
            let marshall: MarshallClass = params.token("marshall_ct_classification")?;
            x += c.hypoxia * indicator(params.yes_no("hypoxia")?)
                + c.hypotension * indicator(params.yes_no("hypotension")?)
                + c.marshall * marshall as i64 as f64
                + c.traumatic_sah * indicator(params.yes_no("traumatic_sah")?)
                + c.epidural_hematoma * indicator(params.yes_no("epidural_hematoma")?);
        }
        if model == Model::Lab {
            let glucose = GLUCOSE.check("glucose", params.number("glucose")?)?;
            let hemoglobin = HEMOGLOBIN.check("hemoglobin", params.number("hemoglobin")?)?;
            x += c.glucose * glucose + c.hemoglobin * hemoglobin;
        }

        let mortality = logistic(x) * 100.0;
        let unfavorable = (mortality * c.unfavorable_ratio).min(95.0);
        let band = classify(BANDS, mortality);
        Ok(Assessment::from_band(round_to(mortality, 1), "%", band)
            .with_interpretation(format!(
                "IMPACT {} model: mortality {}%, unfavorable outcome {}%. {}",
                model.label(),
                fixed(mortality, 1),
                fixed(unfavorable, 1),
                band.interpretation
            ))
            .with_detail("unfavorable_outcome_probability", round_to(unfavorable, 1))
            .with_detail("model_used", model.label()))
    }
}
