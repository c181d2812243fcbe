use clinscore_core::{Assessment, Params, Result, Specialty};

use crate::Calculator;

/// Wisconsin Criteria for maxillofacial CT after blunt facial trauma.
pub struct WisconsinMaxillofacialCt;

const CRITERIA: &[(&str, &str)] = &[
    ("high_energy_mechanism", "High-energy mechanism of injury"),
    ("facial_deformity", "Visible facial deformity or asymmetry"),
    ("malocclusion", "Dental malocclusion or inability to open mouth"),
    ("facial_numbness", "Facial numbness or altered sensation"),
    ("periorbital_swelling", "Significant periorbital swelling or hematoma"),
    ("diplopia", "Double vision or diplopia"),
    ("palpable_step_off", "Palpable step-off deformity of facial bones"),
    ("epistaxis", "Epistaxis or nasal deformity"),
];

impl Calculator for WisconsinMaxillofacialCt {
    fn id(&self) -> &'static str {
        "wisconsin_maxillofacial_ct"
    }

    fn name(&self) -> &'static str {
        "Wisconsin Criteria for Maxillofacial Trauma CT"
    }

    fn specialty(&self) -> Specialty {
        Specialty::Emergency
    }

    fn parameters(&self) -> &'static [&'static str] {
        &[
            "high_energy_mechanism",
            "facial_deformity",
            "malocclusion",
            "facial_numbness",
            "periorbital_swelling",
            "diplopia",
            "palpable_step_off",
            "epistaxis",
        ]
    }

    fn calculate(&self, params: &Params) -> Result<Assessment> {
        let mut positive = Vec::new();
        for (field, description) in CRITERIA {
            if params.yes_no(field)? {
                positive.push(*description);
            }
        }

        let assessment = if positive.is_empty() {
            Assessment::new(
                "ct_not_indicated",
                "",
                "Low Risk",
                "CT not indicated",
                "No high-risk criteria present. Maxillofacial CT is not indicated; clinical follow-up is appropriate.",
            )
        } else {
            Assessment::new(
                "ct_indicated",
                "",
                "High Risk",
                "CT indicated",
                format!(
                    "One or more high-risk criteria present: {}. Maxillofacial CT is indicated.",
                    positive.join(", ")
                ),
            )
        };
        Ok(assessment
            .with_detail("positive_criteria_count", positive.len())
            .with_detail("positive_criteria", positive))
    }
}
