use clinscore_core::{Assessment, Params, Result, Specialty};
use serde::{Deserialize, Serialize};

use crate::Calculator;

/// International Consensus Classification (2022) criteria for primary
/// myelofibrosis, separating prefibrotic from overt disease.
pub struct IccPmf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Finding {
    Present,
    Absent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FibrosisGrade {
    #[serde(rename = "grade_0_1")]
    Low,
    #[serde(rename = "grade_2_3")]
    High,
}

const MINOR: &[&str] = &[
    "anemia_present",
    "leukocytosis_present",
    "splenomegaly_present",
    "elevated_ldh",
];

impl Calculator for IccPmf {
    fn id(&self) -> &'static str {
        "icc_pmf_diagnostic_criteria"
    }

    fn name(&self) -> &'static str {
        "ICC Diagnostic Criteria for Primary Myelofibrosis"
    }

    fn specialty(&self) -> Specialty {
        Specialty::Hematology
    }

    fn parameters(&self) -> &'static [&'static str] {
        &[
            "bone_marrow_megakaryocytic_proliferation",
            "bone_marrow_fibrosis_grade",
            "genetic_mutation_present",
            "reactive_fibrosis_excluded",
            "other_mpn_excluded",
            "anemia_present",
            "leukocytosis_present",
            "splenomegaly_present",
            "elevated_ldh",
        ]
    }

    fn calculate(&self, params: &Params) -> Result<Assessment> {
        let megakaryocytes: Finding = params.token("bone_marrow_megakaryocytic_proliferation")?;
        let fibrosis: FibrosisGrade = params.token("bone_marrow_fibrosis_grade")?;
        let mutation = params.yes_no("genetic_mutation_present")?;
        let reactive_excluded = params.yes_no("reactive_fibrosis_excluded")?;
        let other_mpn_excluded = params.yes_no("other_mpn_excluded")?;
        let major = megakaryocytes == Finding::Present
            && mutation
            && reactive_excluded
            && other_mpn_excluded;
        let mut minor = 0;
        for field in MINOR {
            if params.yes_no(field)? {
                minor += 1;
            }
        }

        let assessment = match (major && minor >= 1, fibrosis) {
            (true, FibrosisGrade::Low) => Assessment::new(
                "Pre-PMF Diagnosed",
                "",
                "Pre-PMF Diagnosed",
                "Prefibrotic Primary Myelofibrosis",
                "Prefibrotic primary myelofibrosis: megakaryocytic proliferation with grade 0-1 fibrosis. Complete staging and prognostic scoring; close hematologic follow-up.",
            ),
            (true, FibrosisGrade::High) => Assessment::new(
                "Overt PMF Diagnosed",
                "",
                "Overt PMF Diagnosed",
                "Overt Fibrotic Primary Myelofibrosis",
                "Overt primary myelofibrosis with grade 2-3 fibrosis. Complete staging with DIPSS/MIPSS70 risk assessment to guide therapy and transplant evaluation.",
            ),
            (false, _) => Assessment::new(
                "PMF Not Diagnosed",
                "",
                "PMF Not Diagnosed",
                "Diagnostic Criteria Not Met",
                "Criteria for primary myelofibrosis are not satisfied. Consider other MPNs, myelodysplastic syndromes or reactive and secondary marrow fibrosis.",
            ),
        };
        Ok(assessment
            .with_detail("major_criteria_met", major)
            .with_detail("minor_criteria_count", minor))
    }
}
