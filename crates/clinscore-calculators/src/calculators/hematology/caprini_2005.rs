use clinscore_core::{Assessment, Band, Params, Result, Specialty, Tally, classify};
use serde::{Deserialize, Serialize};

use crate::Calculator;

/// Caprini 2005 VTE risk assessment for surgical patients.
pub struct Caprini2005;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AgeCategory {
    #[serde(rename = "under_41")]
    Under41 = 0,
    #[serde(rename = "41_to_60")]
    From41To60 = 1,
    #[serde(rename = "61_to_74")]
    From61To74 = 2,
    #[serde(rename = "75_or_older")]
    AtLeast75 = 3,
}

impl AgeCategory {
    pub fn points(self) -> i64 {
        self as i64
    }
}

/// Risk factors grouped by weight.
const FACTORS: &[(&str, i64)] = &[
    ("minor_surgery", 1),
    ("varicose_veins", 1),
    ("inflammatory_bowel_disease", 1),
    ("bmi_over_25", 1),
    ("current_swollen_legs", 1),
    ("central_venous_access", 1),
    ("major_surgery", 2),
    ("acute_myocardial_infarction", 2),
    ("congestive_heart_failure", 2),
    ("sepsis", 2),
    ("serious_lung_disease", 2),
    ("abnormal_pulmonary_function", 2),
    ("medical_patient_bed_rest", 2),
    ("cast_or_brace", 2),
    ("history_of_vte", 3),
    ("family_history_thrombosis", 3),
    ("factor_v_leiden", 3),
    ("prothrombin_20210a", 3),
    ("lupus_anticoagulant", 3),
    ("anticardiolipin_antibodies", 3),
    ("heparin_induced_thrombocytopenia", 3),
    ("other_congenital_thrombophilia", 3),
    ("hip_knee_arthroplasty", 5),
    ("hip_pelvis_leg_fracture", 5),
    ("acute_spinal_cord_injury", 5),
    ("malignancy", 5),
];

pub static BANDS: &[Band] = &[
    Band::new(
        0.0,
        1.0,
        "Lowest Risk",
        "Minimal risk",
        "Lowest risk of VTE. No pharmacological prophylaxis; early ambulation.",
    ),
    Band::new(
        1.0,
        3.0,
        "Low Risk",
        "Minimal risk",
        "Low risk of VTE. No pharmacological prophylaxis; early ambulation and mechanical prophylaxis may be considered.",
    ),
    Band::new(
        3.0,
        5.0,
        "Moderate Risk",
        "0.7% VTE risk",
        "Moderate risk of VTE. Consider intermittent pneumatic compression or low molecular weight heparin.",
    ),
    Band::new(
        5.0,
        7.0,
        "High Risk",
        "1.8% VTE risk",
        "High risk of VTE. Intermittent pneumatic compression and low molecular weight heparin recommended.",
    ),
    Band::new(
        7.0,
        9.0,
        "High Risk",
        "4.0% VTE risk",
        "High risk of VTE. Intermittent pneumatic compression and low molecular weight heparin strongly recommended.",
    ),
    Band::new(
        9.0,
        f64::INFINITY,
        "Highest Risk",
        "10.7% VTE risk",
        "Highest risk of VTE. Combined mechanical and pharmacological prophylaxis; consider extended-duration prophylaxis after discharge.",
    ),
];

impl Calculator for Caprini2005 {
    fn id(&self) -> &'static str {
        "caprini_2005"
    }

    fn name(&self) -> &'static str {
        "Caprini Score for VTE (2005)"
    }

    fn specialty(&self) -> Specialty {
        Specialty::Hematology
    }

    fn parameters(&self) -> &'static [&'static str] {
        &[
            "age_category",
            "minor_surgery",
            "major_surgery",
            "hip_knee_arthroplasty",
            "hip_pelvis_leg_fracture",
            "acute_spinal_cord_injury",
            "varicose_veins",
            "current_swollen_legs",
            "central_venous_access",
            "inflammatory_bowel_disease",
            "bmi_over_25",
            "acute_myocardial_infarction",
            "congestive_heart_failure",
            "sepsis",
            "serious_lung_disease",
            "abnormal_pulmonary_function",
            "medical_patient_bed_rest",
            "cast_or_brace",
            "history_of_vte",
            "family_history_thrombosis",
            "factor_v_leiden",
            "prothrombin_20210a",
            "lupus_anticoagulant",
            "anticardiolipin_antibodies",
            "heparin_induced_thrombocytopenia",
            "other_congenital_thrombophilia",
            "malignancy",
        ]
    }

    fn bands(&self) -> &'static [Band] {
        BANDS
    }

    fn calculate(&self, params: &Params) -> Result<Assessment> {
        let age: AgeCategory = params.token("age_category")?;

        let mut tally = Tally::new();
        tally.add("age_category", age.points());
        for (field, weight) in FACTORS {
            tally.flag(field, params.yes_no(field)?, *weight);
        }

        let score = tally.total();
        let band = classify(BANDS, score as f64);
        Ok(Assessment::from_band(score, "points", band)
            .with_interpretation(format!("Caprini score {score}. {}", band.interpretation))
            .with_detail("breakdown", tally.breakdown()))
    }
}
