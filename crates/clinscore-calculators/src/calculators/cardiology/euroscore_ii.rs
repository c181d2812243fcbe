use clinscore_core::numeric::{fixed, logistic, round_to};
use clinscore_core::{Assessment, Band, ParamRange, Params, Result, Sex, Specialty, classify};
use serde::{Deserialize, Serialize};

use crate::Calculator;

/// EuroSCORE II: predicted in-hospital mortality after cardiac surgery.
pub struct EuroscoreIi;

const AGE: ParamRange = ParamRange::integer(18.0, 110.0);
const INTERCEPT: f64 = -5.324537;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RenalFunction {
    #[serde(rename = "greater_than_85")]
    Normal,
    #[serde(rename = "51_to_85")]
    Moderate,
    #[serde(rename = "50_or_less")]
    Severe,
    #[serde(rename = "on_dialysis")]
    Dialysis,
}

impl RenalFunction {
    fn coefficient(self) -> f64 {
        match self {
            RenalFunction::Normal => 0.0,
            RenalFunction::Moderate => 0.303553,
            RenalFunction::Severe => 0.8592256,
            RenalFunction::Dialysis => 0.6421508,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NyhaClass {
    Class1,
    Class2,
    Class3,
    Class4,
}

impl NyhaClass {
    fn coefficient(self) -> f64 {
        match self {
            NyhaClass::Class1 => 0.0,
            NyhaClass::Class2 => 0.1070545,
            NyhaClass::Class3 => 0.2958358,
            NyhaClass::Class4 => 0.5597929,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LvFunction {
    #[serde(rename = "good_51_or_more")]
    Good,
    #[serde(rename = "moderate_31_to_50")]
    Moderate,
    #[serde(rename = "poor_21_to_30")]
    Poor,
    #[serde(rename = "very_poor_20_or_less")]
    VeryPoor,
}

impl LvFunction {
    fn coefficient(self) -> f64 {
        match self {
            LvFunction::Good => 0.0,
            LvFunction::Moderate => 0.3150652,
            LvFunction::Poor => 0.8084096,
            LvFunction::VeryPoor => 0.9346919,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Urgency {
    Elective,
    Urgent,
    Emergency,
    Salvage,
}

impl Urgency {
    fn coefficient(self) -> f64 {
        match self {
            Urgency::Elective => 0.0,
            Urgency::Urgent => 0.3174673,
            Urgency::Emergency => 0.7039121,
            Urgency::Salvage => 1.362947,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterventionWeight {
    SingleNonCabg,
    TwoProcedures,
    ThreeOrMoreProcedures,
}

impl InterventionWeight {
    fn coefficient(self) -> f64 {
        match self {
            InterventionWeight::SingleNonCabg => 0.0,
            InterventionWeight::TwoProcedures => 0.5521478,
            InterventionWeight::ThreeOrMoreProcedures => 0.9724533,
        }
    }
}

/// Yes/no risk factors and their coefficients.
const FACTORS: &[(&str, f64)] = &[
    ("insulin_dependent_diabetes", 0.3542749),
    ("chronic_pulmonary_dysfunction", 0.1886564),
    ("mobility_dysfunction", 0.2407181),
    ("critical_preoperative_state", 1.086517),
    ("ccs_class_4", 0.2226147),
    ("extracardiac_arteriopathy", 0.5360268),
    ("previous_cardiac_surgery", 1.118599),
    ("active_endocarditis", 0.6194522),
    ("recent_mi", 0.1528943),
    ("pulmonary_hypertension", 0.1788899),
    ("surgery_on_thoracic_aorta", 0.6527205),
];

pub static BANDS: &[Band] = &[
    Band::new(
        0.0,
        2.0,
        "Low Risk",
        "Low operative risk",
        "Low risk for cardiac surgery. Standard perioperative care and monitoring.",
    ),
    Band::new(
        2.0,
        5.0,
        "Medium Risk",
        "Medium operative risk",
        "Medium risk for cardiac surgery. Enhanced perioperative monitoring; optimize modifiable risk factors.",
    ),
    Band::new(
        5.0,
        10.0,
        "High Risk",
        "High operative risk",
        "High risk for cardiac surgery. Intensive perioperative care and a multidisciplinary risk-benefit review; consider alternative treatments.",
    ),
    Band::new(
        10.0,
        f64::INFINITY,
        "Very High Risk",
        "Very high operative risk",
        "Very high risk for cardiac surgery. Discuss risks and benefits in detail with the patient and family; consider alternative treatments and a specialized centre.",
    ),
];

impl Calculator for EuroscoreIi {
    fn id(&self) -> &'static str {
        "euroscore_ii"
    }

    fn name(&self) -> &'static str {
        "EuroSCORE II"
    }

    fn specialty(&self) -> Specialty {
        Specialty::Cardiology
    }

    fn parameters(&self) -> &'static [&'static str] {
        &[
            "age_years",
            "sex",
            "insulin_dependent_diabetes",
            "chronic_pulmonary_dysfunction",
            "mobility_dysfunction",
            "creatinine_clearance",
            "critical_preoperative_state",
            "nyha_class",
            "ccs_class_4",
            "extracardiac_arteriopathy",
            "previous_cardiac_surgery",
            "active_endocarditis",
            "left_ventricular_function",
            "recent_mi",
            "pulmonary_hypertension",
            "urgency",
            "weight_of_intervention",
            "surgery_on_thoracic_aorta",
        ]
    }

    fn bands(&self) -> &'static [Band] {
        BANDS
    }

    fn calculate(&self, params: &Params) -> Result<Assessment> {
        let age = AGE.check_int("age_years", params.integer("age_years")?)?;
        let sex: Sex = params.token("sex")?;
        let renal: RenalFunction = params.token("creatinine_clearance")?;
        let nyha: NyhaClass = params.token("nyha_class")?;
        let lv: LvFunction = params.token("left_ventricular_function")?;
        let urgency: Urgency = params.token("urgency")?;
        let weight: InterventionWeight = params.token("weight_of_intervention")?;

        let mut y = INTERCEPT;
        if age > 60 {
            y += 0.0285181 * (age - 60) as f64;
        }
        if sex.is_female() {
            y += 0.2196434;
        }
        for &(field, coefficient) in FACTORS {
            if params.yes_no(field)? {
                y += coefficient;
            }
        }
        y += renal.coefficient()
            + nyha.coefficient()
            + lv.coefficient()
            + urgency.coefficient()
            + weight.coefficient();

        let mortality = logistic(y) * 100.0;
        let band = classify(BANDS, mortality);
        Ok(Assessment::from_band(round_to(mortality, 2), "%", band)
            .with_interpretation(format!(
                "Predicted in-hospital mortality {}%. {}",
                fixed(mortality, 2),
                band.interpretation
            ))
            .with_detail("logistic_score", round_to(y, 4)))
    }
}
