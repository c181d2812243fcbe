use clinscore_core::numeric::{fixed, logistic, round_to};
use clinscore_core::{Assessment, Band, ParamRange, Params, Result, Specialty, classify};
use serde::{Deserialize, Serialize};

use crate::Calculator;
use crate::calculators::cardiology::gupta_mica::{AsaClass, FunctionalStatus};

/// Gupta postoperative pneumonia risk from the NSQIP cohort.
pub struct GuptaPostoperativePneumonia;

const AGE: ParamRange = ParamRange::integer(18.0, 120.0);
const INTERCEPT: f64 = -2.8977;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SepsisStatus {
    None,
    Sirs,
    Sepsis,
    SepticShock,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProcedureType {
    Aortic,
    Brain,
    Cardiac,
    ThoracicNonCardiac,
    Neck,
    PeripheralVascular,
    ForegutHepatobiliary,
    GallbladderAppendixAdrenalsSpleen,
    Intestinal,
    OrthopedicNonSpine,
    Renal,
    Spine,
    UrologyNonRenal,
    Hernia,
    ObstetricGynecologic,
    Skin,
    ThyroidParathyroid,
    Vein,
    Breast,
}

impl ProcedureType {
    fn coefficient(self) -> f64 {
        match self {
            ProcedureType::Aortic => 0.7178,
            ProcedureType::Brain => 0.6405,
            ProcedureType::Cardiac => 0.4492,
            ProcedureType::ThoracicNonCardiac => 0.2806,
            ProcedureType::Neck => 0.1633,
            ProcedureType::PeripheralVascular => 0.1382,
            ProcedureType::ForegutHepatobiliary => 0.1239,
            ProcedureType::GallbladderAppendixAdrenalsSpleen => 0.0823,
            ProcedureType::Intestinal => 0.0645,
            ProcedureType::OrthopedicNonSpine => 0.0189,
            ProcedureType::Renal => -0.0234,
            ProcedureType::Spine => -0.0689,
            ProcedureType::UrologyNonRenal => -0.1347,
            ProcedureType::Hernia => -0.1456,
            ProcedureType::ObstetricGynecologic => -0.1789,
            ProcedureType::Skin => -0.3254,
            ProcedureType::ThyroidParathyroid => -0.5632,
            ProcedureType::Vein => -0.8945,
            ProcedureType::Breast => -2.3318,
        }
    }
}

pub static BANDS: &[Band] = &[
    Band::new(
        0.0,
        1.0,
        "Very Low Risk",
        "Minimal pneumonia risk",
        "Standard perioperative care with routine pulmonary hygiene and early mobilization.",
    ),
    Band::new(
        1.0,
        3.0,
        "Low Risk",
        "Low pneumonia risk",
        "Standard care with incentive spirometry, deep breathing and adequate pain control.",
    ),
    Band::new(
        3.0,
        6.0,
        "Moderate Risk",
        "Moderate pneumonia risk",
        "Enhanced pulmonary care: chest physiotherapy, aggressive incentive spirometry and closer respiratory monitoring.",
    ),
    Band::new(
        6.0,
        15.0,
        "High Risk",
        "High pneumonia risk",
        "Aggressive prevention: preoperative pulmonary rehabilitation if feasible, postoperative chest physiotherapy and respiratory therapy input.",
    ),
    Band::new(
        15.0,
        f64::INFINITY,
        "Very High Risk",
        "Very high pneumonia risk",
        "Consider postponing elective surgery for pulmonary optimization and smoking cessation; plan ICU-level monitoring.",
    ),
];

impl Calculator for GuptaPostoperativePneumonia {
    fn id(&self) -> &'static str {
        "gupta_postoperative_pneumonia_risk"
    }

    fn name(&self) -> &'static str {
        "Gupta Postoperative Pneumonia Risk"
    }

    fn specialty(&self) -> Specialty {
        Specialty::Pulmonology
    }

    fn parameters(&self) -> &'static [&'static str] {
        &[
            "age",
            "copd",
            "functional_status",
            "asa_class",
            "sepsis_status",
            "smoking",
            "procedure_type",
        ]
    }

    fn bands(&self) -> &'static [Band] {
        BANDS
    }

    fn calculate(&self, params: &Params) -> Result<Assessment> {
        let age = AGE.check_int("age", params.integer("age")?)?;
        let copd = if params.yes_no("copd")? { 0.0 } else { -0.4553 };
        let smoking = if params.yes_no("smoking")? { 0.0 } else { -0.4306 };
        let functional = match params.token::<FunctionalStatus>("functional_status")? {
            FunctionalStatus::Independent => 0.0,
            FunctionalStatus::PartiallyDependent => 0.7653,
            FunctionalStatus::TotallyDependent => 0.9400,
        };
        let asa = match params.token::<AsaClass>("asa_class")? {
            AsaClass::I => -3.0225,
            AsaClass::Ii => -1.6057,
            AsaClass::Iii => -0.4915,
            AsaClass::Iv => 0.0123,
            AsaClass::V => 0.0,
        };
        let sepsis = match params.token::<SepsisStatus>("sepsis_status")? {
            SepsisStatus::None => -0.7641,
            SepsisStatus::Sirs => 0.0,
            SepsisStatus::Sepsis => -0.0842,
            SepsisStatus::SepticShock => 0.1048,
        };
        let procedure: ProcedureType = params.token("procedure_type")?;

        let x = INTERCEPT
            + 0.0144 * age as f64
            + copd
            + functional
            + asa
            + sepsis
            + smoking
            + procedure.coefficient();
        let risk = logistic(x) * 100.0;
        let band = classify(BANDS, risk);
        Ok(Assessment::from_band(round_to(risk, 2), "%", band).with_interpretation(format!(
            "Postoperative pneumonia risk {}%. {}",
            fixed(risk, 2),
            band.interpretation
        )))
    }
}
