use clinscore_core::numeric::{fixed, logistic, round_to};
use clinscore_core::{Assessment, Band, ParamRange, Params, Result, Specialty, classify};
use serde::{Deserialize, Serialize};

use crate::Calculator;

/// Gupta perioperative risk of myocardial infarction or cardiac arrest (MICA).
pub struct GuptaMica;

const AGE: ParamRange = ParamRange::integer(18.0, 120.0);
const INTERCEPT: f64 = -5.25;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FunctionalStatus {
    Independent,
    PartiallyDependent,
    TotallyDependent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AsaClass {
    #[serde(rename = "1")]
    I,
    #[serde(rename = "2")]
    Ii,
    #[serde(rename = "3")]
    Iii,
    #[serde(rename = "4")]
    Iv,
    #[serde(rename = "5")]
    V,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CreatinineStatus {
    Normal,
    Elevated,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SurgeryType {
    Aortic,
    Brain,
    Cardiac,
    ForegutHepatobiliary,
    GallbladderAppendixAdrenalsSpleen,
    Intestinal,
    Neck,
    ObstetricGynecologic,
    OrthopedicNonSpine,
    PeripheralVascular,
    Skin,
    Spine,
    ThoracicNonCardiac,
    UrologyNonRenal,
    Renal,
    Hernia,
    ThyroidParathyroid,
    Breast,
    Eye,
    Vein,
}

impl SurgeryType {
    fn coefficient(self) -> f64 {
        match self {
            SurgeryType::Aortic => 1.60,
            SurgeryType::Brain => 1.40,
            SurgeryType::Cardiac => 1.01,
            SurgeryType::ForegutHepatobiliary => 0.82,
            SurgeryType::GallbladderAppendixAdrenalsSpleen => 0.67,
            SurgeryType::Intestinal => 0.58,
            SurgeryType::Neck => 0.40,
            SurgeryType::ObstetricGynecologic => 0.28,
            SurgeryType::OrthopedicNonSpine => 0.20,
            SurgeryType::PeripheralVascular => 0.16,
            SurgeryType::Skin => 0.12,
            SurgeryType::Spine => 0.10,
            SurgeryType::ThoracicNonCardiac => 0.06,
            SurgeryType::UrologyNonRenal => 0.04,
            SurgeryType::Renal => 0.02,
            SurgeryType::Hernia => 0.0,
            SurgeryType::ThyroidParathyroid => -0.32,
            SurgeryType::Breast => -1.61,
            SurgeryType::Eye => -1.05,
            SurgeryType::Vein => -1.09,
        }
    }
}

pub static BANDS: &[Band] = &[
    Band::new(
        0.0,
        0.5,
        "Very Low Risk",
        "Minimal perioperative cardiac risk",
        "Standard perioperative monitoring and routine postoperative care are appropriate.",
    ),
    Band::new(
        0.5,
        1.0,
        "Low Risk",
        "Low perioperative cardiac risk",
        "Standard monitoring with attention to cardiac symptoms. Continue home cardiac medications unless contraindicated.",
    ),
    Band::new(
        1.0,
        2.0,
        "Moderate Risk",
        "Moderate perioperative cardiac risk",
        "Enhanced monitoring: consider telemetry, serial troponins and cardiology input for high-risk procedures.",
    ),
    Band::new(
        2.0,
        5.0,
        "High Risk",
        "High perioperative cardiac risk",
        "Consider preoperative cardiology evaluation, continuous cardiac monitoring and postoperative ICU care.",
    ),
    Band::new(
        5.0,
        f64::INFINITY,
        "Very High Risk",
        "Very high perioperative cardiac risk",
        "Consider postponing elective surgery for cardiac optimization and a multidisciplinary approach.",
    ),
];

impl Calculator for GuptaMica {
    fn id(&self) -> &'static str {
        "gupta_mica"
    }

    fn name(&self) -> &'static str {
        "Gupta Perioperative Risk for Myocardial Infarction or Cardiac Arrest (MICA)"
    }

    fn specialty(&self) -> Specialty {
        Specialty::Cardiology
    }

    fn parameters(&self) -> &'static [&'static str] {
        &["age", "functional_status", "asa_class", "creatinine_status", "surgery_type"]
    }

    fn bands(&self) -> &'static [Band] {
        BANDS
    }

    fn calculate(&self, params: &Params) -> Result<Assessment> {
        let age = AGE.check_int("age", params.integer("age")?)?;
        let functional = match params.token::<FunctionalStatus>("functional_status")? {
            FunctionalStatus::Independent => 0.0,
            FunctionalStatus::PartiallyDependent => 0.65,
            FunctionalStatus::TotallyDependent => 1.03,
        };
        let asa = match params.token::<AsaClass>("asa_class")? {
            AsaClass::I => -5.17,
            AsaClass::Ii => -3.29,
            AsaClass::Iii => -1.92,
            AsaClass::Iv => -0.95,
            AsaClass::V => 0.0,
        };
        let creatinine = match params.token::<CreatinineStatus>("creatinine_status")? {
            CreatinineStatus::Normal => 0.0,
            CreatinineStatus::Elevated => 0.61,
            CreatinineStatus::Unknown => -0.10,
        };
        let surgery: SurgeryType = params.token("surgery_type")?;

        let x =
            INTERCEPT + 0.02 * age as f64 + functional + asa + creatinine + surgery.coefficient();
        let risk = logistic(x) * 100.0;
        let band = classify(BANDS, risk);
        Ok(Assessment::from_band(round_to(risk, 2), "%", band).with_interpretation(format!(
            "Perioperative MI or cardiac arrest risk {}%. {}",
            fixed(risk, 2),
            band.interpretation
        )))
    }
}
