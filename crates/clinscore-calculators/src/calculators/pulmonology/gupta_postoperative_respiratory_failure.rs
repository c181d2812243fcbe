use clinscore_core::numeric::{fixed, logistic, round_to};
use clinscore_core::{Assessment, Band, Params, Result, Specialty, classify};
use serde::{Deserialize, Serialize};

use crate::Calculator;
use crate::calculators::cardiology::gupta_mica::{AsaClass, FunctionalStatus};
use crate::calculators::pulmonology::gupta_postoperative_pneumonia::SepsisStatus;

/// Gupta risk of ventilation beyond 48 hours or unplanned reintubation.
pub struct GuptaPostoperativeRespiratoryFailure;

const INTERCEPT: f64 = -1.7397;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProcedureType {
    Aortic,
    Brain,
    ThoracicNonCardiac,
    Cardiac,
    ForegutHepatobiliary,
    PeripheralVascular,
    Neck,
    GallbladderAppendixAdrenalsSpleen,
    Intestinal,
    Renal,
    Spine,
    OrthopedicNonSpine,
    OtherAbdomen,
    UrologyNonRenal,
    Hernia,
    GynecologicOncology,
    ObstetricGynecologic,
    OtherHematologic,
    Skin,
    ThyroidParathyroid,
    Vein,
    Breast,
}

impl ProcedureType {
    fn coefficient(self) -> f64 {
        match self {
            ProcedureType::Aortic => 1.0781,
            ProcedureType::Brain => 0.8086,
            ProcedureType::ThoracicNonCardiac => 0.7737,
            ProcedureType::Cardiac => 0.6959,
            ProcedureType::ForegutHepatobiliary => 0.4949,
            ProcedureType::PeripheralVascular => 0.3646,
            ProcedureType::Neck => 0.2701,
            ProcedureType::GallbladderAppendixAdrenalsSpleen => 0.2135,
            ProcedureType::Intestinal => 0.1964,
            ProcedureType::Renal => 0.1460,
            ProcedureType::Spine => 0.1139,
            ProcedureType::OrthopedicNonSpine => 0.0654,
            ProcedureType::OtherAbdomen => 0.0481,
            ProcedureType::UrologyNonRenal => 0.0089,
            ProcedureType::Hernia => 0.0,
            ProcedureType::GynecologicOncology => -0.0234,
            ProcedureType::ObstetricGynecologic => -0.1456,
            ProcedureType::OtherHematologic => -0.2341,
            ProcedureType::Skin => -0.3678,
            ProcedureType::ThyroidParathyroid => -0.4927,
            ProcedureType::Vein => -0.8934,
            ProcedureType::Breast => -2.6462,
        }
    }
}

pub static BANDS: &[Band] = &[
    Band::new(
        0.0,
        1.0,
        "Very Low Risk",
        "Minimal respiratory failure risk",
        "Standard perioperative respiratory care.",
    ),
    Band::new(
        1.0,
        3.0,
        "Low Risk",
        "Low respiratory failure risk",
        "Standard care with early mobilization and incentive spirometry.",
    ),
    Band::new(
        3.0,
        8.0,
        "Moderate Risk",
        "Moderate respiratory failure risk",
        "Enhanced monitoring and lung-protective ventilation; plan postoperative respiratory therapy.",
    ),
    Band::new(
        8.0,
        20.0,
        "High Risk",
        "High respiratory failure risk",
        "Preoperative optimization, lung-protective strategies and postoperative ICU or step-down monitoring.",
    ),
    Band::new(
        20.0,
        f64::INFINITY,
        "Very High Risk",
        "Very high respiratory failure risk",
        "Reconsider timing or approach where possible; plan ICU care and discuss prolonged ventilation with the patient.",
    ),
];

impl Calculator for GuptaPostoperativeRespiratoryFailure {
    fn id(&self) -> &'static str {
        "gupta_postoperative_respiratory_failure_risk"
    }

    fn name(&self) -> &'static str {
        "Gupta Postoperative Respiratory Failure Risk"
    }

    fn specialty(&self) -> Specialty {
        Specialty::Pulmonology
    }

    fn parameters(&self) -> &'static [&'static str] {
        &["functional_status", "asa_class", "sepsis_status", "emergency_case", "procedure_type"]
    }

    fn bands(&self) -> &'static [Band] {
        BANDS
    }

    fn calculate(&self, params: &Params) -> Result<Assessment> {
        let functional = match params.token::<FunctionalStatus>("functional_status")? {
            FunctionalStatus::Independent => 0.0,
            FunctionalStatus::PartiallyDependent => 0.7678,
            FunctionalStatus::TotallyDependent => 1.4046,
        };
        let asa = match params.token::<AsaClass>("asa_class")? {
            AsaClass::I => -3.5265,
            AsaClass::Ii => -2.0008,
            AsaClass::Iii => -0.6201,
            AsaClass::Iv => 0.2441,
            AsaClass::V => 0.0,
        };
        let sepsis = match params.token::<SepsisStatus>("sepsis_status")? {
            SepsisStatus::None => -0.7840,
            SepsisStatus::Sirs => 0.0,
            SepsisStatus::Sepsis => 0.2752,
            SepsisStatus::SepticShock => 0.9035,
        };
        let emergency = if params.yes_no("emergency_case")? { 0.0 } else { -0.5739 };
        let procedure: ProcedureType = params.token("procedure_type")?;

        let x = INTERCEPT + functional + asa + sepsis + emergency + procedure.coefficient();
        let risk = logistic(x) * 100.0;
        let band = classify(BANDS, risk);
        Ok(Assessment::from_band(round_to(risk, 2), "%", band).with_interpretation(format!(
            "Postoperative respiratory failure risk {}%. {}",
            fixed(risk, 2),
            band.interpretation
        )))
    }
}
