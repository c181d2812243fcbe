use clinscore_core::{Assessment, Params, Result, Specialty};

use crate::Calculator;

/// CHIP (CT in Head Injury Patients) prediction rule. Any major criterion,
/// or two minor criteria, indicates CT.
pub struct ChipRule;

const MAJOR: &[(&str, &str)] = &[
    ("pedestrian_cyclist_vehicle", "Pedestrian or cyclist struck by vehicle"),
    ("ejected_from_vehicle", "Patient ejected from vehicle during accident"),
    ("vomiting", "Post-traumatic vomiting"),
    ("amnesia_4_hours_or_more", "Post-traumatic amnesia ≥4 hours"),
    ("clinical_skull_fracture", "Clinical signs of skull fracture"),
    ("gcs_less_than_15", "Glasgow Coma Scale <15"),
    ("gcs_deterioration_2_points", "GCS deterioration ≥2 points"),
    ("anticoagulant_use", "Current anticoagulant medication use"),
    ("post_traumatic_seizure", "Post-traumatic seizure"),
    ("age_60_or_older", "Age ≥60 years"),
];

const MINOR: &[(&str, &str)] = &[
    ("fall_from_elevation", "Fall from any elevation"),
    ("anterograde_amnesia", "Persistent anterograde amnesia"),
    ("amnesia_2_to_4_hours", "Post-traumatic amnesia 2 to <4 hours"),
    ("skull_contusion", "Skull contusion present"),
    ("neurologic_deficit", "Neurologic deficit present"),
    ("loss_of_consciousness", "Loss of consciousness"),
    ("gcs_deterioration_1_point", "GCS deterioration of 1 point"),
    ("age_40_to_60", "Age 40-60 years"),
];

fn present(params: &Params, criteria: &[(&str, &'static str)]) -> Result<Vec<&'static str>> {
    let mut found = Vec::new();
    for (field, description) in criteria {
        if params.yes_no(field)? {
            found.push(*description);
        }
    }
    Ok(found)
}

impl Calculator for ChipRule {
    fn id(&self) -> &'static str {
        "chip_rule"
    }

    fn name(&self) -> &'static str {
        "CHIP Prediction Rule"
    }

    fn specialty(&self) -> Specialty {
        Specialty::Emergency
    }

    fn parameters(&self) -> &'static [&'static str] {
        &[
            "pedestrian_cyclist_vehicle",
            "ejected_from_vehicle",
            "vomiting",
            "amnesia_4_hours_or_more",
            "clinical_skull_fracture",
            "gcs_less_than_15",
            "gcs_deterioration_2_points",
            "anticoagulant_use",
            "post_traumatic_seizure",
            "age_60_or_older",
            "fall_from_elevation",
            "anterograde_amnesia",
            "amnesia_2_to_4_hours",
            "skull_contusion",
            "neurologic_deficit",
            "loss_of_consciousness",
            "gcs_deterioration_1_point",
            "age_40_to_60",
        ]
    }

    fn calculate(&self, params: &Params) -> Result<Assessment> {
        let major = present(params, MAJOR)?;
        let minor = present(params, MINOR)?;

        let (result, stage, description, interpretation) = match (major.len(), minor.len()) {
            (m, _) if m > 0 => (
                "ct_recommended",
                "CT Recommended",
                "High risk for intracranial injury",
                format!("CHIP rule: CT recommended. {m} major criterion(s) present indicating high risk for intracranial traumatic findings."),
            ),
            (_, n) if n >= 2 => (
                "ct_recommended",
                "CT Recommended",
                "Moderate to high risk for intracranial injury",
                format!("CHIP rule: CT recommended. {n} minor criteria present indicating moderate to high risk for intracranial traumatic findings."),
            ),
            (_, 1) => (
                "clinical_judgment",
                "Clinical Judgment",
                "Low to moderate risk for intracranial injury",
                "CHIP rule: one minor criterion present. Consider CT based on clinical assessment and patient factors.".to_string(),
            ),
            _ => (
                "ct_not_indicated",
                "CT Not Indicated",
                "Low risk for intracranial injury",
                "CHIP rule: no major or minor criteria. CT not indicated; continue observation and give discharge instructions.".to_string(),
            ),
        };

        Ok(Assessment::new(result, "", stage, description, interpretation)
            .with_detail("major_criteria_count", major.len())
            .with_detail("minor_criteria_count", minor.len())
            .with_detail("major_criteria_present", major)
            .with_detail("minor_criteria_present", minor))
    }
}
