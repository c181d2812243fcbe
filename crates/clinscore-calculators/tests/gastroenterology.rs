use clinscore_calculators::evaluate;
use clinscore_core::{Params, ScoreValue};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use serde_json::json;

fn child_pugh(bilirubin: f64, albumin: f64, inr: f64, ascites: &str, enceph: &str) -> Params {
    Params::new()
        .with("total_bilirubin", bilirubin)
        .with("serum_albumin", albumin)
        .with("inr", inr)
        .with("ascites", ascites)
        .with("encephalopathy", enceph)
}

#[test]
fn child_pugh_grades() {
    let params = child_pugh(1.0, 4.0, 1.0, "absent", "none");
    let a = evaluate("child_pugh", &params).unwrap();
    assert_eq!(a.result, ScoreValue::Integer(5));
    assert_eq!(a.stage, "Child-Pugh A");
    assert_eq!(a.detail("grade"), Some(&json!("A")));

    let c = evaluate(
        "child_pugh",
        &child_pugh(3.5, 2.5, 2.0, "moderate", "grade_3_4"),
    )
    .unwrap();
    assert_eq!(c.result, ScoreValue::Integer(14));
    assert_eq!(c.stage, "Child-Pugh C");
}

fn meld(version: &str) -> Params {
    Params::new()
        .with("meld_version", version)
        .with("bilirubin", 4.0)
        .with("creatinine", 2.0)
        .with("inr", 2.0)
}

#[test]
fn meld_original() {
    let a = evaluate("meld_combined", &meld("original")).unwrap();
    assert_eq!(a.result, ScoreValue::Integer(26));
    assert_eq!(a.stage, "Very Severe Disease");
    assert_eq!(a.detail("meld_version"), Some(&json!("MELD")));
}

#[test]
fn meld_floor_is_six() {
    let params = Params::new()
        .with("meld_version", "original")
        .with("bilirubin", 0.5)
        .with("creatinine", 0.5)
        .with("inr", 0.9);
    let a = evaluate("meld_combined", &params).unwrap();
    assert_eq!(a.result, ScoreValue::Integer(6));
}

#[test]
fn meld_na_requires_sodium() {
    let err = evaluate("meld_combined", &meld("meld_na")).unwrap_err();
    assert!(err.to_string().contains("sodium"));
}

#[test]
fn meld_3_requires_its_extra_inputs() {
    let params = meld("meld_3_0").with("sodium", 130).with("albumin", 3.0);
    let err = evaluate("meld_combined", &params).unwrap_err();
    assert!(err.to_string().contains("age"));
}

#[test]
fn meld_3_female_scores_higher() {
    let base = meld("meld_3_0")
        .with("sodium", 130)
        .with("albumin", 3.0)
        .with("age", 50);
    let params = base.clone().with("sex", "male");
    let male = evaluate("meld_combined", &params).unwrap();
    let params = base.with("sex", "female");
    let female = evaluate("meld_combined", &params).unwrap();
    assert!(female.result.as_i64() >= male.result.as_i64());
}

#[test]
fn glasgow_imrie_counts_criteria() {
    let params = Params::new()
        .with("pao2", 55)
        .with("age", 60)
        .with("wbc", 18)
        .with("calcium", 9.0)
        .with("urea", 20)
        .with("ldh", 300)
        .with("albumin", 4.0)
        .with("glucose", 120);
    let a = evaluate("glasgow_imrie", &params).unwrap();
    assert_eq!(a.result, ScoreValue::Integer(3));
    assert_eq!(a.stage, "Moderate Pancreatitis");
}

proptest! {
    #[test]
    fn meld_stays_within_bounds(
        bili in 0.1f64..50.0,
        cr in 0.1f64..15.0,
        inr in 0.8f64..10.0,
        na in 120.0f64..160.0,
    ) {
        let params = Params::new()
            .with("meld_version", "meld_na")
            .with("bilirubin", bili)
            .with("creatinine", cr)
            .with("inr", inr)
            .with("sodium", na);
        let score = evaluate("meld_combined", &params)
            .unwrap()
            .result
            .as_i64()
            .unwrap();
        prop_assert!((6..=40).contains(&score));
    }

    #[test]
    fn wexner_is_item_sum(items in proptest::collection::vec(0i64..=4, 5)) {
        let fields = [
            "incontinence_solid_stool",
            "incontinence_liquid_stool",
            "incontinence_gas",
            "wears_pad",
            "lifestyle_alteration",
        ];
        let params = fields
            .iter()
            .zip(&items)
            .fold(Params::new(), |p, (f, v)| p.with(f, *v));
        let a = evaluate("wexner_ods", &params).unwrap();
        prop_assert_eq!(a.result.as_i64(), Some(items.iter().sum::<i64>()));
    }
}

fn cdai(stools: i64, deficit: f64) -> Params {
    Params::new()
        .with("liquid_stools_week", stools)
        .with("abdominal_pain_score", "mild")
        .with("general_wellbeing_score", "slightly_under_par")
        .with("arthritis_arthralgias", "no")
        .with("iritis_uveitis", "no")
        .with("erythema_nodosum", "no")
        .with("anal_fissure_fistula", "no")
        .with("other_fistulas", "no")
        .with("fever", "yes")
        .with("antidiarrheal_use", "no")
        .with("abdominal_mass", "none")
        .with("patient_sex", "male")
        .with("observed_hematocrit", 40.0)
        .with("weight_deficit_percent", deficit)
}

#[test]
fn cdai_remission_edge_at_150() {
    // 66 + 5 + 7 + 20 + 42 + 9
    let a = evaluate("cdai_crohns", &cdai(33, 9.0)).unwrap();
    assert_eq!(a.result, ScoreValue::Integer(149));
    assert_eq!(a.stage, "Remission");

    let a = evaluate("cdai_crohns", &cdai(33, 10.0)).unwrap();
    assert_eq!(a.result, ScoreValue::Integer(150));
    assert_eq!(a.stage, "Mild Disease");
    assert_eq!(a.detail("breakdown").unwrap()["hematocrit"], json!(42.0));
}

#[test]
fn cdai_weight_from_measured_and_ideal() {
    let mut params = cdai(20, 0.0)
        .with("current_weight", 63.0)
        .with("ideal_weight", 70.0);
    params.remove("weight_deficit_percent");
    let a = evaluate("cdai_crohns", &params).unwrap();
    // 40 + 5 + 7 + 20 + 42 + 10
    assert_eq!(a.result, ScoreValue::Integer(124));

    let over = params.clone().with("current_weight", 80.0);
    let a = evaluate("cdai_crohns", &over).unwrap();
    assert_eq!(a.detail("breakdown").unwrap()["weight"], json!(0.0));
}

#[test]
fn cdai_rejects_conflicting_or_missing_weight() {
    let params = cdai(20, 10.0)
        .with("current_weight", 63.0)
        .with("ideal_weight", 70.0);
    let err = evaluate("cdai_crohns", &params).unwrap_err();
    assert!(err.to_string().contains("'weight_deficit_percent'"));

    let mut params = cdai(20, 10.0);
    params.remove("weight_deficit_percent");
    let err = evaluate("cdai_crohns", &params).unwrap_err();
    assert!(err.to_string().contains("'current_weight'"));

    assert!(evaluate("cdai_crohns", &cdai(201, 10.0)).is_err());
}

fn blatchford(bun: f64, hemoglobin: f64, systolic: i64, heart_rate: i64) -> Params {
    Params::new()
        .with("bun", bun)
        .with("hemoglobin", hemoglobin)
        .with("gender", "male")
        .with("systolic_bp", systolic)
        .with("heart_rate", heart_rate)
        .with("melena", "no")
        .with("syncope", "no")
        .with("liver_disease", "no")
        .with("heart_failure", "no")
}

#[test]
fn blatchford_zero_is_low_risk() {
    let params = blatchford(15.0, 14.0, 120, 80);
    let a = evaluate("glasgow_blatchford", &params).unwrap();
    assert_eq!(a.result, ScoreValue::Integer(0));
    assert_eq!(a.stage, "Low Risk");

    let params = blatchford(18.2, 14.0, 120, 80);
    let a = evaluate("glasgow_blatchford", &params).unwrap();
    assert_eq!(a.result, ScoreValue::Integer(2));
    assert_eq!(a.stage, "Low-Moderate Risk");
}

#[test]
fn blatchford_band_edges() {
    // 3 + 1 + 1 + 1
    let params = blatchford(25.0, 12.5, 105, 100);
    let a = evaluate("glasgow_blatchford", &params).unwrap();
    assert_eq!(a.result, ScoreValue::Integer(6));
    assert_eq!(a.stage, "Moderate Risk");

    let params = blatchford(25.0, 12.5, 105, 99);
    let a = evaluate("glasgow_blatchford", &params).unwrap();
    assert_eq!(a.result, ScoreValue::Integer(5));

    let params = blatchford(71.0, 9.0, 120, 80);
    let a = evaluate("glasgow_blatchford", &params).unwrap();
    assert_eq!(a.result, ScoreValue::Integer(12));
    assert_eq!(a.stage, "High Risk");
}

#[test]
fn blatchford_hemoglobin_thresholds_depend_on_sex() {
    let params = blatchford(15.0, 11.0, 120, 80);
    let a = evaluate("glasgow_blatchford", &params).unwrap();
    assert_eq!(a.detail("breakdown").unwrap()["hemoglobin"], json!(3));

    let params = blatchford(15.0, 11.0, 120, 80).with("gender", "female");
    let a = evaluate("glasgow_blatchford", &params).unwrap();
    assert_eq!(a.detail("breakdown").unwrap()["hemoglobin"], json!(1));

    let params = blatchford(15.0, 11.0, 120, 80).with("syncope", "yes");
    let a = evaluate("glasgow_blatchford", &params).unwrap();
    assert_eq!(a.result, ScoreValue::Integer(5));

    let params = blatchford(4.9, 14.0, 120, 80);
    assert!(evaluate("glasgow_blatchford", &params).is_err());
}

fn i_see(symptoms: &str, impaction: &str, inflammatory: &str, eosinophils: &str) -> Params {
    Params::new()
        .with("symptoms_frequency", symptoms)
        .with("food_impaction", impaction)
        .with("hospitalization_due_eoe", "no")
        .with("esophageal_perforation", "no")
        .with("malnutrition", "none")
        .with("persistent_inflammation", "none")
        .with("inflammatory_features", inflammatory)
        .with("eosinophil_count", eosinophils)
        .with("rings_strictures", "none")
}

#[test]
fn i_see_severity_bands() {
    let params = i_see("none", "none", "none", "under_15");
    let a = evaluate("i_see", &params).unwrap();
    assert_eq!(a.result, ScoreValue::Integer(0));
    assert_eq!(a.stage, "Inactive");

    let params = i_see("daily", "adult_with_er", "diffuse", "under_15");
    let a = evaluate("i_see", &params).unwrap();
    assert_eq!(a.result, ScoreValue::Integer(6));
    assert_eq!(a.stage, "Mild");

    let params = i_see("daily", "adult_with_er", "diffuse", "15_to_60");
    let a = evaluate("i_see", &params).unwrap();
    assert_eq!(a.result, ScoreValue::Integer(7));
    assert_eq!(a.stage, "Moderate");
}

#[test]
fn i_see_complications_are_severe() {
    let params = i_see("none", "none", "none", "under_15").with("esophageal_perforation", "yes");
    let a = evaluate("i_see", &params).unwrap();
    assert_eq!(a.result, ScoreValue::Integer(15));
    assert_eq!(a.stage, "Severe");

    let params = i_see("weekly", "pediatric_with_er", "localized", "over_60")
        .with("rings_strictures", "requires_dilation");
    let a = evaluate("i_see", &params).unwrap();
    // 1 + 4 + 1 + 2 + 2
    assert_eq!(a.result, ScoreValue::Integer(10));

    let params = i_see("hourly", "none", "none", "under_15");
    assert!(evaluate("i_see", &params).is_err());
}

const KRUIS_FIELDS: [&str; 9] = [
    "symptoms_present",
    "duration_over_2_years",
    "pain_description",
    "alternating_bowel_habits",
    "abnormal_physical_findings",
    "esr_over_10",
    "wbc_over_10000",
    "low_hemoglobin",
    "history_blood_in_stool",
];

fn kruis(present: &[&str]) -> Params {
    let mut params = Params::new();
    for field in KRUIS_FIELDS {
        params.insert(field, if present.contains(&field) { "yes" } else { "no" });
    }
    params
}

#[test]
fn kruis_threshold_at_44() {
    let params = kruis(&["symptoms_present", "duration_over_2_years"]);
    let a = evaluate("kruis_ibs", &params).unwrap();
    assert_eq!(a.result, ScoreValue::Integer(50));
    assert_eq!(a.stage, "Positive for IBS");

    let params = kruis(&["symptoms_present"]);
    let a = evaluate("kruis_ibs", &params).unwrap();
    assert_eq!(a.result, ScoreValue::Integer(34));
    assert_eq!(a.stage, "Negative for IBS");
}

#[test]
fn kruis_red_flags_subtract() {
    let params = kruis(&[
        "symptoms_present",
        "duration_over_2_years",
        "pain_description",
        "esr_over_10",
    ]);
    let a = evaluate("kruis_ibs", &params).unwrap();
    assert_eq!(a.result, ScoreValue::Integer(60));
    assert_eq!(a.detail("red_flag_score"), Some(&json!(-13)));
    assert_eq!(a.detail("red_flags_present"), Some(&json!(["esr_over_10"])));
    assert!(a.interpretation.contains("organic disease must be excluded"));
}

const MANNING_FIELDS: [&str; 10] = [
    "pain_onset_frequent_bowel_movements",
    "looser_stools_with_pain_onset",
    "pain_relief_with_defecation",
    "noticeable_abdominal_bloating",
    "incomplete_evacuation_sensation",
    "diarrhea_with_mucus",
    "weight_loss",
    "blood_in_stools",
    "anemia",
    "fever",
];

fn manning(criteria: usize, age: i64) -> Params {
    let mut params = Params::new().with("patient_age", age);
    for (i, &field) in MANNING_FIELDS.iter().enumerate() {
        params.insert(field, if i < criteria { "yes" } else { "no" });
    }
    params
}

#[test]
fn manning_needs_three_criteria() {
    let a = evaluate("manning_ibs", &manning(2, 30)).unwrap();
    assert_eq!(a.result, ScoreValue::Integer(2));
    assert_eq!(a.stage, "IBS Unlikely");

    let a = evaluate("manning_ibs", &manning(3, 30)).unwrap();
    assert_eq!(a.stage, "IBS Likely");
}

#[test]
fn manning_alarm_features_need_evaluation() {
    let a = evaluate("manning_ibs", &manning(4, 51)).unwrap();
    assert_eq!(a.stage, "Further Evaluation Required");
    assert_eq!(a.detail("red_flags"), Some(&json!(["age_over_50"])));

    let params = manning(4, 50).with("anemia", "yes");
    let a = evaluate("manning_ibs", &params).unwrap();
    assert_eq!(a.detail("red_flags"), Some(&json!(["anemia"])));

    assert!(evaluate("manning_ibs", &manning(4, 9)).is_err());
}

fn mumtaz(admissions: i64) -> Params {
    Params::new()
        .with("age", 60)
        .with("serum_sodium", 120)
        .with("albumin", 2.0)
        .with("length_of_stay", 10)
        .with("previous_admissions_6_months", admissions)
        .with("meld_score", 30)
        .with("hepatic_encephalopathy", "yes")
        .with("ascites", "yes")
}

#[test]
fn mumtaz_readmission_bands() {
    let a = evaluate("mumtaz_score", &mumtaz(11)).unwrap();
    assert_eq!(a.result, ScoreValue::Decimal(11.9));
    assert_eq!(a.stage, "Low Risk");

    let a = evaluate("mumtaz_score", &mumtaz(12)).unwrap();
    assert_eq!(a.result, ScoreValue::Decimal(15.4));
    assert_eq!(a.stage, "Moderate Risk");

    let a = evaluate("mumtaz_score", &mumtaz(15)).unwrap();
    assert_eq!(a.result, ScoreValue::Decimal(31.0));
    assert_eq!(a.stage, "High Risk");

    let a = evaluate("mumtaz_score", &mumtaz(18)).unwrap();
    assert_eq!(a.result, ScoreValue::Decimal(52.5));
    assert_eq!(a.stage, "Very High Risk");
}

#[test]
fn mumtaz_rejects_out_of_range() {
    assert!(evaluate("mumtaz_score", &mumtaz(21)).is_err());
    let params = mumtaz(5).with("meld_score", 41);
    assert!(evaluate("mumtaz_score", &params).is_err());
    let params = mumtaz(5).with("age", 17);
    assert!(evaluate("mumtaz_score", &params).is_err());
}

const PROCTALGIA_FIELDS: [&str; 8] = [
    "recurrent_rectal_pain_unrelated_defecation",
    "episode_duration_seconds_to_30_minutes",
    "no_anorectal_pain_between_episodes",
    "exclusion_inflammatory_causes",
    "exclusion_structural_anorectal_lesions",
    "exclusion_prostatitis",
    "exclusion_coccygodynia",
    "exclusion_pelvic_floor_alterations",
];

fn proctalgia(answer: &str) -> Params {
    let mut params = Params::new();
    for field in PROCTALGIA_FIELDS {
        params.insert(field, answer);
    }
    params
}

#[test]
fn proctalgia_fugax_requires_every_criterion() {
    let params = proctalgia("yes");
    let a = evaluate("rome_iv_proctalgia_fugax", &params).unwrap();
    assert_eq!(a.result.as_label(), Some("criteria_met"));
    assert_eq!(a.detail("criteria_met"), Some(&json!(8)));

    let params = proctalgia("yes").with("exclusion_prostatitis", "no");
    let a = evaluate("rome_iv_proctalgia_fugax", &params).unwrap();
    assert_eq!(a.result.as_label(), Some("criteria_not_met"));
    assert_eq!(a.detail("unmet_criteria"), Some(&json!(["exclusion_prostatitis"])));
    assert!(a.interpretation.starts_with("7/8"));
}

fn clif_c_aclf() -> Params {
    Params::new()
        .with("age", 50)
        .with("white_blood_cell_count", 5.0)
        .with("bilirubin", 1.0)
        .with("creatinine", 0.9)
        .with("renal_replacement_therapy", "no")
        .with("hepatic_encephalopathy_grade", "grade_0")
        .with("inr", 1.1)
        .with("mean_arterial_pressure", 85)
        .with("vasopressors", "no")
        .with("respiratory_ratio_type", "pao2_fio2")
        .with("respiratory_ratio_value", 400)
}

#[test]
fn clif_c_aclf_no_organ_failure() {
    let a = evaluate("clif_c_aclf", &clif_c_aclf()).unwrap();
    assert_eq!(a.result, ScoreValue::Decimal(29.9));
    assert_eq!(a.stage, "Low Risk");
    assert_eq!(a.detail("clif_of_score"), Some(&json!(6)));
}

#[test]
fn clif_c_aclf_multiorgan_dysfunction() {
    let params = clif_c_aclf()
        .with("age", 60)
        .with("white_blood_cell_count", 12.0)
        .with("bilirubin", 13.0)
        .with("creatinine", 2.5)
        .with("hepatic_encephalopathy_grade", "grade_1_2")
        .with("inr", 2.2)
        .with("mean_arterial_pressure", 65)
        .with("respiratory_ratio_value", 250);
    let a = evaluate("clif_c_aclf", &params).unwrap();
    assert_eq!(a.detail("clif_of_score"), Some(&json!(13)));
    assert_eq!(a.result, ScoreValue::Decimal(62.6));
    assert_eq!(a.stage, "Moderate Risk");
    assert_eq!(a.detail("organ_scores").unwrap()["liver"], json!(3));
}

#[test]
fn clif_c_aclf_dialysis_and_vasopressors_score_three() {
    let params = clif_c_aclf()
        .with("renal_replacement_therapy", "yes")
        .with("vasopressors", "yes")
        .with("respiratory_ratio_type", "spo2_fio2")
        .with("respiratory_ratio_value", 214);
    let a = evaluate("clif_c_aclf", &params).unwrap();
    let organs = a.detail("organ_scores").unwrap();
    assert_eq!(organs["kidney"], json!(3));
    assert_eq!(organs["circulation"], json!(3));
    assert_eq!(organs["respiration"], json!(3));
}

#[test]
fn clif_c_aclf_clamps_at_zero() {
    let params = clif_c_aclf()
        .with("age", 18)
        .with("white_blood_cell_count", 0.1);
    let a = evaluate("clif_c_aclf", &params).unwrap();
    assert_eq!(a.result, ScoreValue::Decimal(0.0));
    assert_eq!(a.stage, "Low Risk");
}

#[test]
fn montreal_crohns_with_perianal_disease() {
    let params = Params::new()
        .with("disease_type", "crohns_disease")
        .with("age_at_diagnosis", 25)
        .with("crohns_location", "L3_ileocolonic")
        .with("crohns_behavior", "B2_stricturing")
        .with("perianal_disease", "yes");
    let a = evaluate("montreal_classification_ibd", &params).unwrap();
    assert_eq!(a.result, ScoreValue::Label("A2L3B2p".to_string()));
    assert_eq!(a.stage, "Crohn's Disease Classification");
    assert_eq!(a.detail("age_code"), Some(&json!("A2")));
}

#[test]
fn montreal_perianal_is_optional() {
    let params = Params::new()
        .with("disease_type", "crohns_disease")
        .with("age_at_diagnosis", 16)
        .with("crohns_location", "L1_ileal")
        .with("crohns_behavior", "B1_inflammatory");
    let a = evaluate("montreal_classification_ibd", &params).unwrap();
    assert_eq!(a.result, ScoreValue::Label("A1L1B1".to_string()));
}

#[test]
fn montreal_ulcerative_colitis_ignores_crohns_fields() {
    let params = Params::new()
        .with("disease_type", "ulcerative_colitis")
        .with("age_at_diagnosis", 41)
        .with("uc_extent", "E2_left_sided")
        .with("uc_severity", "S1_mild");
    let a = evaluate("montreal_classification_ibd", &params).unwrap();
    assert_eq!(a.result, ScoreValue::Label("A3E2S1".to_string()));
    assert_eq!(a.stage, "Ulcerative Colitis Classification");
}

#[test]
fn montreal_crohns_requires_location() {
    let params = Params::new()
        .with("disease_type", "crohns_disease")
        .with("age_at_diagnosis", 30)
        .with("crohns_behavior", "B1_inflammatory");
    let err = evaluate("montreal_classification_ibd", &params).unwrap_err();
    assert!(err.to_string().contains("'crohns_location'"));
}

const RUMINATION_EXCLUSIONS: &[&str] = &[
    "exclusion_gi_bleeding",
    "exclusion_iron_deficiency_anemia",
    "exclusion_heartburn_reflux",
    "exclusion_weight_loss",
    "exclusion_abdominal_mass_lymphadenopathy",
    "exclusion_dysphagia",
    "exclusion_persistent_vomiting",
];

fn rumination(answer: &str) -> Params {
    RUMINATION_EXCLUSIONS
        .iter()
        .fold(Params::new(), |p, f| p.with(f, "yes"))
        .with("persistent_recurrent_regurgitation", answer)
        .with("regurgitation_not_preceded_by_retching", answer)
}

#[test]
fn rumination_criteria_met() {
    let a = evaluate("rome_iv_rumination_syndrome", &rumination("yes")).unwrap();
    assert_eq!(a.result, ScoreValue::Label("Positive".to_string()));
    assert_eq!(a.stage, "Criteria Met");
    assert_eq!(a.detail("exclusion_criteria_met"), Some(&json!(7)));
}

#[test]
fn rumination_alarm_feature_blocks_diagnosis() {
    let params = rumination("yes").with("exclusion_weight_loss", "no");
    let a = evaluate("rome_iv_rumination_syndrome", &params).unwrap();
    assert_eq!(a.result, ScoreValue::Label("Negative".to_string()));
    assert!(a.interpretation.contains("1 exclusion criteria not satisfied"));
}

#[test]
fn rumination_missing_positive_criteria() {
    let a = evaluate("rome_iv_rumination_syndrome", &rumination("no")).unwrap();
    assert_eq!(a.stage, "Criteria Not Met");
    assert_eq!(a.detail("positive_criteria_met"), Some(&json!(0)));
    assert!(a.interpretation.contains("2 essential positive criteria not met"));
}

const UNSPECIFIED_FBD: &[&str] = &[
    "bowel_symptoms_duration",
    "symptoms_not_organic",
    "exclusion_ibs_criteria",
    "exclusion_functional_constipation",
    "exclusion_functional_diarrhea",
    "exclusion_functional_bloating",
    "exclusion_gi_bleeding",
    "exclusion_iron_deficiency_anemia",
    "exclusion_weight_loss",
    "exclusion_abdominal_mass_lymphadenopathy",
    "exclusion_family_history_colon_cancer",
    "exclusion_age_over_50_without_screening",
    "exclusion_sudden_bowel_habit_change",
];

fn unspecified_fbd() -> Params {
    UNSPECIFIED_FBD.iter().fold(Params::new(), |p, f| p.with(f, "yes"))
}

#[test]
fn unspecified_fbd_all_criteria_met() {
    let a = evaluate("rome_iv_unspecified_functional_bowel_disorder", &unspecified_fbd()).unwrap();
    assert_eq!(a.result, ScoreValue::Label("Positive".to_string()));
    assert_eq!(a.detail("alarm_feature_exclusions_met"), Some(&json!(7)));
}

#[test]
fn unspecified_fbd_defers_to_specific_disorder() {
    let params = unspecified_fbd().with("exclusion_ibs_criteria", "no");
    let a = evaluate("rome_iv_unspecified_functional_bowel_disorder", &params).unwrap();
    assert_eq!(a.stage, "Criteria Not Met");
    assert!(a.interpretation.contains("more specific functional bowel disorder"));
}

#[test]
fn unspecified_fbd_counts_alarm_features() {
    let params = unspecified_fbd()
        .with("exclusion_weight_loss", "no")
        .with("exclusion_gi_bleeding", "no");
    let a = evaluate("rome_iv_unspecified_functional_bowel_disorder", &params).unwrap();
    assert_eq!(a.result, ScoreValue::Label("Negative".to_string()));
    assert!(a.interpretation.contains("2 alarm features present"));
}
