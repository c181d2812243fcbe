use clinscore_core::{Assessment, ParamRange, Params, Result, Specialty, YesNo};
use serde::{Deserialize, Serialize};

use crate::Calculator;

/// Montreal classification of inflammatory bowel disease.
///
/// The result is a phenotype code such as `A2L3B2p` for Crohn's disease or
/// `A3E2S1` for ulcerative colitis.
pub struct MontrealIbd;

const AGE_AT_DIAGNOSIS: ParamRange = ParamRange::integer(0.0, 120.0);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiseaseType {
    CrohnsDisease,
    UlcerativeColitis,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CrohnsLocation {
    #[serde(rename = "L1_ileal")]
    Ileal,
    #[serde(rename = "L2_colonic")]
    Colonic,
    #[serde(rename = "L3_ileocolonic")]
    Ileocolonic,
    #[serde(rename = "L4_upper_gi")]
    UpperGi,
}

impl CrohnsLocation {
    fn code(self) -> (&'static str, &'static str, &'static str) {
        match self {
            CrohnsLocation::Ileal => (
                "L1",
                "Ileal (terminal ileum ± cecum)",
                "Ileal disease may need surveillance for small bowel complications and a nutritional assessment.",
            ),
            CrohnsLocation::Colonic => (
                "L2",
                "Colonic",
                "Colonic disease may present with bloody diarrhea; colonoscopic surveillance is recommended.",
            ),
            CrohnsLocation::Ileocolonic => (
                "L3",
                "Ileocolonic",
                "Ileocolonic disease carries the highest risk of surgical complications; monitor closely.",
            ),
            CrohnsLocation::UpperGi => (
                "L4",
                "Upper gastrointestinal",
                "Upper GI involvement may cause growth retardation in children; nutritional support is important.",
            ),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CrohnsBehavior {
    #[serde(rename = "B1_inflammatory")]
    Inflammatory,
    #[serde(rename = "B2_stricturing")]
    Stricturing,
    #[serde(rename = "B3_penetrating")]
    Penetrating,
}

impl CrohnsBehavior {
    fn code(self) -> (&'static str, &'static str, &'static str) {
        match self {
            CrohnsBehavior::Inflammatory => (
                "B1",
                "Inflammatory (non-stricturing, non-penetrating)",
                "Inflammatory behavior often responds to medical therapy; monitor for progression.",
            ),
            CrohnsBehavior::Stricturing => (
                "B2",
                "Stricturing",
                "Stricturing behavior may need endoscopic or surgical intervention; assess for obstruction.",
            ),
            CrohnsBehavior::Penetrating => (
                "B3",
                "Penetrating (fistula, abscess, perforation)",
                "Penetrating behavior needs aggressive management; screen for abscesses and fistulas.",
            ),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UcExtent {
    #[serde(rename = "E1_proctitis")]
    Proctitis,
    #[serde(rename = "E2_left_sided")]
    LeftSided,
    #[serde(rename = "E3_extensive")]
    Extensive,
}

impl UcExtent {
    fn code(self) -> (&'static str, &'static str, &'static str) {
        match self {
            UcExtent::Proctitis => (
                "E1",
                "Proctitis (rectum only)",
                "Proctitis has an excellent prognosis and often responds to topical therapy.",
            ),
            UcExtent::LeftSided => (
                "E2",
                "Left-sided colitis",
                "Left-sided colitis may need combined oral and topical therapy; cancer risk rises after 15-20 years.",
            ),
            UcExtent::Extensive => (
                "E3",
                "Extensive colitis",
                "Extensive colitis needs systemic therapy and surveillance colonoscopy for the highest cancer risk.",
            ),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UcSeverity {
    #[serde(rename = "S0_remission")]
    Remission,
    #[serde(rename = "S1_mild")]
    Mild,
    #[serde(rename = "S2_moderate")]
    Moderate,
    #[serde(rename = "S3_severe")]
    Severe,
}

impl UcSeverity {
    fn code(self) -> (&'static str, &'static str, &'static str) {
        match self {
            UcSeverity::Remission => (
                "S0",
                "Clinical remission",
                "Maintain remission with appropriate therapy and monitor for relapse.",
            ),
            UcSeverity::Mild => (
                "S1",
                "Mild activity",
                "Mild activity may respond to topical or mild systemic therapy.",
            ),
            UcSeverity::Moderate => (
                "S2",
                "Moderate activity",
                "Moderate activity needs systemic therapy; consider admission if response is poor.",
            ),
            UcSeverity::Severe => (
                "S3",
                "Severe activity",
                "Severe activity needs admission and intensive therapy; consider surgery if refractory.",
            ),
        }
    }
}

fn age_code(age: i64) -> (&'static str, &'static str) {
    if age <= 16 {
        ("A1", "Pediatric onset (<17 years)")
    } else if age <= 40 {
        ("A2", "Young adult onset (17-40 years)")
    } else {
        ("A3", "Older adult onset (>40 years)")
    }
}

impl Calculator for MontrealIbd {
    fn id(&self) -> &'static str {
        "montreal_classification_ibd"
    }

    fn name(&self) -> &'static str {
        "Montreal Classification for Inflammatory Bowel Disease"
    }

    fn specialty(&self) -> Specialty {
        Specialty::Gastroenterology
    }

    fn parameters(&self) -> &'static [&'static str] {
        &[
            "disease_type",
            "age_at_diagnosis",
            "crohns_location",
            "crohns_behavior",
            "perianal_disease",
            "uc_extent",
            "uc_severity",
        ]
    }

    fn calculate(&self, params: &Params) -> Result<Assessment> {
        let disease: DiseaseType = params.token("disease_type")?;
        let age =
            AGE_AT_DIAGNOSIS.check_int("age_at_diagnosis", params.integer("age_at_diagnosis")?)?;
        let (age_code, age_text) = age_code(age);

        let assessment = match disease {
            DiseaseType::CrohnsDisease => {
                let (l_code, l_text, l_advice) =
                    params.token::<CrohnsLocation>("crohns_location")?.code();
                let (b_code, b_text, b_advice) =
                    params.token::<CrohnsBehavior>("crohns_behavior")?.code();
                let perianal = params
                    .optional_token::<YesNo>("perianal_disease")?
                    .is_some_and(bool::from);
                let suffix = if perianal { "p" } else { "" };
                let mut interpretation =
                    format!("Montreal {l_code}{b_code}{suffix}. {l_advice} {b_advice}");
                if perianal {
                    interpretation.push_str(
                        " Perianal disease calls for specialised management and MRI assessment.",
                    );
                }
                Assessment::new(
                    format!("{age_code}{l_code}{b_code}{suffix}"),
                    "Montreal Classification",
                    "Crohn's Disease Classification",
                    format!(
                        "Crohn's Disease: {age_text}, {l_text}, {b_text}{}",
                        if perianal { " with perianal disease" } else { "" }
                    ),
                    interpretation,
                )
            }
            DiseaseType::UlcerativeColitis => {
                let (e_code, e_text, e_advice) = params.token::<UcExtent>("uc_extent")?.code();
                let (s_code, s_text, s_advice) = params.token::<UcSeverity>("uc_severity")?.code();
                Assessment::new(
                    format!("{age_code}{e_code}{s_code}"),
                    "Montreal Classification",
                    "Ulcerative Colitis Classification",
                    format!("Ulcerative Colitis: {age_text}, {e_text}, {s_text}"),
                    format!("Montreal {e_code}{s_code}. {e_advice} {s_advice}"),
                )
            }
        };
        Ok(assessment.with_detail("age_code", age_code))
    }
}
