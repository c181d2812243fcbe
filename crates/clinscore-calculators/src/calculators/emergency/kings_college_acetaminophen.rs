use clinscore_core::{Assessment, ParamRange, Params, Result, Specialty};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::Calculator;

/// King's College Criteria for liver transplantation in acetaminophen-induced
/// acute liver failure.
pub struct KingsCollegeAcetaminophen;

const PH: ParamRange = ParamRange::new(6.0, 8.0);
const INR: ParamRange = ParamRange::new(0.5, 20.0);
const CREATININE: ParamRange = ParamRange::new(0.1, 25.0);
const LACTATE: ParamRange = ParamRange::new(0.1, 30.0);
const PHOSPHATE: ParamRange = ParamRange::new(0.5, 15.0);

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EncephalopathyGrade {
    None,
    GradeI,
    GradeIi,
    GradeIii,
    GradeIv,
}

impl Calculator for KingsCollegeAcetaminophen {
    fn id(&self) -> &'static str {
        "kings_college_acetaminophen"
    }

    fn name(&self) -> &'static str {
        "King's College Criteria for Acetaminophen Toxicity"
    }

    fn specialty(&self) -> Specialty {
        Specialty::Emergency
    }

    fn parameters(&self) -> &'static [&'static str] {
        &[
            "arterial_ph",
            "inr",
            "creatinine",
            "hepatic_encephalopathy_grade",
            "lactate",
            "phosphate",
        ]
    }

    fn calculate(&self, params: &Params) -> Result<Assessment> {
        let ph = PH.check("arterial_ph", params.number("arterial_ph")?)?;
        let inr = INR.check("inr", params.number("inr")?)?;
        let creatinine = CREATININE.check("creatinine", params.number("creatinine")?)?;
        let grade: EncephalopathyGrade = params.token("hepatic_encephalopathy_grade")?;
        let lactate = params
            .optional_number("lactate")?
            .map(|v| LACTATE.check("lactate", v))
            .transpose()?;
        let phosphate = params
            .optional_number("phosphate")?
            .map(|v| PHOSPHATE.check("phosphate", v))
            .transpose()?;

        let ph_criterion = ph < 7.30;
        let inr_criterion = inr > 6.5;
        let creatinine_criterion = creatinine > 3.4;
        let encephalopathy_criterion = grade >= EncephalopathyGrade::GradeIii;
        let triad = inr_criterion && creatinine_criterion && encephalopathy_criterion;
        let met = ph_criterion || triad;

        let mut interpretation = if met {
            let mut text = String::from("King's College Criteria met. ");
            if ph_criterion {
                text.push_str(&format!("Arterial pH {ph:.2} is below 7.30 after resuscitation. "));
            }
            if triad {
                text.push_str(&format!(
                    "INR {inr:.1} above 6.5, creatinine {creatinine:.1} mg/dL above 3.4, and grade III-IV encephalopathy are all present. "
                ));
            }
            text.push_str("Refer urgently to a liver transplant center.");
            text
        } else {
            String::from(
                "King's College Criteria not met. Continue N-acetylcysteine, supportive care, and serial reassessment; criteria may evolve.",
            )
        };
        if let Some(lactate) = lactate
            && lactate > 3.5
        {
            interpretation.push_str(&format!(
                " Lactate {lactate:.1} mmol/L above 3.5 adds prognostic concern."
            ));
        }
        if let Some(phosphate) = phosphate
            && phosphate > 3.75
        {
            interpretation.push_str(&format!(
                " Phosphate {phosphate:.2} mg/dL above 3.75 suggests poor prognosis."
            ));
        }

        let (result, stage, description) = if met {
            (
                "criteria_met",
                "Meets Criteria",
                "Poor prognosis - liver transplant evaluation needed",
            )
        } else {
            (
                "criteria_not_met",
                "Does Not Meet Criteria",
                "Does not meet transplant criteria but requires close monitoring",
            )
        };

        Ok(Assessment::new(result, "criteria", stage, description, interpretation).with_detail(
            "criteria",
            json!({
                "ph_criterion": ph_criterion,
                "inr_criterion": inr_criterion,
                "creatinine_criterion": creatinine_criterion,
                "encephalopathy_criterion": encephalopathy_criterion,
                "combined_criterion": triad,
            }),
        ))
    }
}
