use clinscore_core::{Assessment, Params, Result, Specialty};

use crate::Calculator;

/// Ottawa Knee Rule: knee radiography is indicated after acute injury when
/// any one criterion is present.
pub struct OttawaKneeRule;

const CRITERIA: &[(&str, &str)] = &[
    ("age_55_or_older", "age 55 or older"),
    ("isolated_patellar_tenderness", "isolated tenderness of the patella"),
    ("fibular_head_tenderness", "tenderness at the head of the fibula"),
    ("unable_to_flex_90", "inability to flex to 90°"),
    (
        "unable_to_bear_weight",
        "inability to bear weight for four steps both immediately and in the emergency department",
    ),
];

impl Calculator for OttawaKneeRule {
    fn id(&self) -> &'static str {
        "ottawa_knee_rule"
    }

    fn name(&self) -> &'static str {
        "Ottawa Knee Rule"
    }

    fn specialty(&self) -> Specialty {
        Specialty::Emergency
    }

    fn parameters(&self) -> &'static [&'static str] {
        &[
            "age_55_or_older",
            "isolated_patellar_tenderness",
            "fibular_head_tenderness",
            "unable_to_flex_90",
            "unable_to_bear_weight",
        ]
    }

    fn calculate(&self, params: &Params) -> Result<Assessment> {
        let mut present = Vec::new();
        for (field, label) in CRITERIA {
            if params.yes_no(field)? {
                present.push(*label);
            }
        }

        let assessment = if present.is_empty() {
            Assessment::new(
                "no_xray_needed",
                "",
                "Negative",
                "Knee radiograph not required",
                "No Ottawa Knee Rule criteria present. Knee fracture can be excluded clinically without radiography.",
            )
        } else {
            Assessment::new(
                "xray_indicated",
                "",
                "Positive",
                "Knee radiograph indicated",
                format!(
                    "Ottawa Knee Rule positive ({}). Obtain knee radiographs to exclude fracture.",
                    present.join("; ")
                ),
            )
        };
        Ok(assessment.with_detail("criteria_met", present.len()))
    }
}
