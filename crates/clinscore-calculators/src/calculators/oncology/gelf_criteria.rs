use clinscore_core::{Assessment, Params, Result, Specialty};

use crate::Calculator;

/// GELF criteria for starting therapy in follicular lymphoma. Any single
/// criterion indicates high tumor burden.
pub struct GelfCriteria;

const CRITERIA: &[(&str, &str)] = &[
    ("tumor_mass_over_7cm", "tumor mass >7 cm"),
    ("three_or_more_nodal_sites", "3 or more nodal sites >3 cm"),
    ("systemic_b_symptoms", "B symptoms"),
    ("splenic_enlargement", "splenomegaly below the umbilical line"),
    ("compression_syndrome", "compression syndrome"),
    ("serous_effusion", "pleural or peritoneal effusion"),
    ("leukemic_phase", "leukemic phase >5.0×10⁹/L malignant cells"),
    ("granulocyte_count_low", "granulocytes <1.0×10⁹/L"),
    ("platelet_count_low", "platelets <100×10⁹/L"),
];

impl Calculator for GelfCriteria {
    fn id(&self) -> &'static str {
        "gelf_criteria"
    }

    fn name(&self) -> &'static str {
        "GELF Criteria for Follicular Lymphoma"
    }

    fn specialty(&self) -> Specialty {
        Specialty::Oncology
    }

    fn parameters(&self) -> &'static [&'static str] {
        &[
            "tumor_mass_over_7cm",
            "three_or_more_nodal_sites",
            "systemic_b_symptoms",
            "splenic_enlargement",
            "compression_syndrome",
            "serous_effusion",
            "leukemic_phase",
            "granulocyte_count_low",
            "platelet_count_low",
        ]
    }

    fn calculate(&self, params: &Params) -> Result<Assessment> {
        let mut met = Vec::new();
        for (field, label) in CRITERIA {
            if params.yes_no(field)? {
                met.push(*label);
            }
        }

        let assessment = if met.is_empty() {
            Assessment::new(
                "active_surveillance",
                "recommendation",
                "Low Tumor Burden",
                "No GELF criteria met - watch and wait recommended",
                "No GELF criteria are met. Low tumor burden; active surveillance is appropriate with follow-up every 3-6 months.",
            )
        } else {
            Assessment::new(
                "immediate_therapy",
                "recommendation",
                "High Tumor Burden",
                format!("{} GELF criteria met - treatment indicated", met.len()),
                format!(
                    "GELF criteria met: {}. High tumor burden; systemic therapy such as rituximab-based immunochemotherapy is indicated.",
                    met.join("; ")
                ),
            )
        };
        Ok(assessment.with_detail("criteria_met", met.len()))
    }
}
