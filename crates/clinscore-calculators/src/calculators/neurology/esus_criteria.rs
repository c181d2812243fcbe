use clinscore_core::{Assessment, Params, Result, Specialty};

use crate::Calculator;

/// Embolic Stroke of Undetermined Source: every clinical criterion must
/// hold and the minimum diagnostic work-up must be complete.
pub struct EsusCriteria;

const CLINICAL: &[(&str, &str)] = &[
    ("stroke_type_non_lacunar", "non-lacunar stroke on CT or MRI"),
    (
        "no_significant_atherosclerosis",
        "no ≥50% stenosis in arteries supplying the ischemic area",
    ),
    ("no_major_cardioembolic_source", "no major cardioembolic source"),
    ("no_other_specific_cause", "no other specific cause of stroke"),
];

const WORKUP: &[(&str, &str)] = &[
    ("adequate_cardiac_monitoring", "cardiac rhythm monitoring ≥24 hours"),
    ("adequate_vascular_imaging", "vascular imaging"),
    ("adequate_cardiac_imaging", "cardiac imaging"),
];

fn unmet(params: &Params, criteria: &[(&'static str, &'static str)]) -> Result<Vec<&'static str>> {
    let mut missing = Vec::new();
    for (field, label) in criteria {
        if !params.yes_no(field)? {
            missing.push(*label);
        }
    }
    Ok(missing)
}

impl Calculator for EsusCriteria {
    fn id(&self) -> &'static str {
        "esus_criteria"
    }

    fn name(&self) -> &'static str {
        "Embolic Stroke of Undetermined Source (ESUS) Criteria"
    }

    fn specialty(&self) -> Specialty {
        Specialty::Neurology
    }

    fn parameters(&self) -> &'static [&'static str] {
        &[
            "stroke_type_non_lacunar",
            "no_significant_atherosclerosis",
            "no_major_cardioembolic_source",
            "no_other_specific_cause",
            "adequate_cardiac_monitoring",
            "adequate_vascular_imaging",
            "adequate_cardiac_imaging",
        ]
    }

    fn calculate(&self, params: &Params) -> Result<Assessment> {
        let clinical_unmet = unmet(params, CLINICAL)?;
        let workup_missing = unmet(params, WORKUP)?;

        let assessment = if !workup_missing.is_empty() {
            Assessment::new(
                "inadequate_evaluation",
                "",
                "Inadequate Evaluation",
                "Insufficient diagnostic workup",
                format!(
                    "ESUS cannot be assessed until the work-up is complete (missing: {}).",
                    workup_missing.join("; ")
                ),
            )
        } else if clinical_unmet.is_empty() {
            Assessment::new(
                "esus_confirmed",
                "",
                "ESUS Diagnosis Confirmed",
                "Meets all ESUS criteria",
                "All ESUS criteria met after an adequate work-up. Antiplatelet therapy is standard; consider prolonged rhythm monitoring for occult atrial fibrillation.",
            )
        } else {
            Assessment::new(
                "esus_not_met",
                "",
                "ESUS Diagnosis Not Met",
                "Does not meet ESUS criteria",
                format!(
                    "ESUS criteria not met ({}). Classify and treat according to the identified mechanism.",
                    clinical_unmet.join("; ")
                ),
            )
        };
        Ok(assessment
            .with_detail("clinical_criteria_not_met", clinical_unmet)
            .with_detail("workup_incomplete", workup_missing))
    }
}
