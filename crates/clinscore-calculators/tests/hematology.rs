use clinscore_calculators::evaluate;
use clinscore_core::{Params, ScoreValue};
use pretty_assertions::assert_eq;
use serde_json::json;

const VTE_BLEED: &[&str] = &[
    "age_60_or_older",
    "active_cancer",
    "male_uncontrolled_hypertension",
    "anemia",
    "history_of_bleeding",
    "renal_dysfunction",
];

fn vte_bleed(present: &[&str]) -> Params {
    VTE_BLEED.iter().fold(Params::new(), |p, f| {
        p.with(f, if present.contains(f) { "yes" } else { "no" })
    })
}

#[test]
fn vte_bleed_uses_fractional_weights() {
    let params = vte_bleed(&["age_60_or_older"]);
    let a = evaluate("vte_bleed", &params).unwrap();
    assert_eq!(a.result, ScoreValue::Decimal(1.5));
    assert_eq!(a.stage, "Low Risk");

    let params = vte_bleed(&["active_cancer", "anemia"]);
    let a = evaluate("vte_bleed", &params).unwrap();
    assert_eq!(a.result, ScoreValue::Decimal(3.5));
    assert_eq!(a.stage, "Elevated Risk");
}

#[test]
fn maximum_allowable_blood_loss_adult_man() {
    let params = Params::new()
        .with("age_group", "adult_man")
        .with("body_weight", 70)
        .with("initial_hemoglobin", 14)
        .with("final_hemoglobin", 10);
    let a = evaluate("maximum_allowable_blood_loss", &params).unwrap();
    assert_eq!(a.result, ScoreValue::Decimal(1750.0));
    assert_eq!(a.unit, "mL");
    assert_eq!(a.stage, "High Volume Loss");
    assert_eq!(a.detail("estimated_blood_volume_ml"), Some(&json!(5250.0)));
    assert_eq!(a.detail("accuracy_reliable"), Some(&json!(false)));
}

#[test]
fn maximum_allowable_blood_loss_requires_a_drop() {
    let params = Params::new()
        .with("age_group", "infant")
        .with("body_weight", 8)
        .with("initial_hemoglobin", 10)
        .with("final_hemoglobin", 12);
    let err = evaluate("maximum_allowable_blood_loss", &params).unwrap_err();
    assert!(err.to_string().contains("final_hemoglobin"));
}

#[test]
fn reticulocyte_production_index_corrects_for_anemia() {
    let params = Params::new()
        .with("reticulocyte_percentage", 6)
        .with("measured_hematocrit", 30)
        .with("normal_hematocrit", 45);
    let a = evaluate("reticulocyte_production_index", &params).unwrap();
    assert_eq!(a.result, ScoreValue::Decimal(2.67));
    assert_eq!(a.stage, "Borderline Response");
    assert_eq!(a.detail("maturation_factor"), Some(&json!(1.5)));
    assert!(a.detail("absolute_reticulocyte_count").is_none());
}

fn isth_bat(group: &str, gender: &str) -> Params {
    [
        "epistaxis",
        "cutaneous_bleeding",
        "minor_wounds",
        "oral_cavity",
        "gi_bleeding",
        "hematuria",
        "tooth_extraction",
        "surgery",
        "menorrhagia",
        "postpartum_hemorrhage",
        "muscle_hematomas",
        "hemarthrosis",
        "other_bleeding",
    ]
    .iter()
    .fold(
        Params::new()
            .with("age_group", group)
            .with("gender", gender)
            .with("cns_bleeding", "never"),
        |p, f| p.with(f, 0),
    )
}

#[test]
fn isth_bat_thresholds_depend_on_population() {
    let params = isth_bat("adult_female", "female").with("menorrhagia", 4);
    let a = evaluate("isth_bat", &params).unwrap();
    assert_eq!(a.result, ScoreValue::Integer(4));
    assert_eq!(a.stage, "Adult Female - Typical");

    let params = isth_bat("adult_male", "male").with("epistaxis", 4);
    let a = evaluate("isth_bat", &params).unwrap();
    assert_eq!(a.stage, "Adult Male - Atypical");
}

#[test]
fn isth_bat_rejects_contradictory_gender() {
    let params = isth_bat("adult_male", "female");
    let err = evaluate("isth_bat", &params).unwrap_err();
    assert!(err.to_string().contains("gender"));
}

const CAPRINI_FACTORS: [&str; 26] = [
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
];

fn caprini(age: &str, present: &[&str]) -> Params {
    let mut params = Params::new().with("age_category", age);
    for field in CAPRINI_FACTORS {
        params.insert(field, if present.contains(&field) { "yes" } else { "no" });
    }
    params
}

#[test]
fn caprini_age_and_surgery() {
    let a = evaluate("caprini_2005", &caprini("under_41", &[])).unwrap();
    assert_eq!(a.result, ScoreValue::Integer(0));
    assert_eq!(a.stage, "Lowest Risk");

    let a = evaluate("caprini_2005", &caprini("41_to_60", &[])).unwrap();
    assert_eq!(a.stage, "Low Risk");

    let params = caprini("41_to_60", &["major_surgery"]);
    let a = evaluate("caprini_2005", &params).unwrap();
    assert_eq!(a.result, ScoreValue::Integer(3));
    assert_eq!(a.stage, "Moderate Risk");
}

#[test]
fn caprini_high_risk_bands() {
    let params = caprini("61_to_74", &["history_of_vte"]);
    let a = evaluate("caprini_2005", &params).unwrap();
    assert_eq!(a.result, ScoreValue::Integer(5));
    assert_eq!(a.stage, "High Risk");
    assert_eq!(a.stage_description, "1.8% VTE risk");

    let params = caprini("75_or_older", &["malignancy"]);
    let a = evaluate("caprini_2005", &params).unwrap();
    assert_eq!(a.result, ScoreValue::Integer(8));
    assert_eq!(a.stage_description, "4.0% VTE risk");

    let params = caprini("75_or_older", &["malignancy", "minor_surgery"]);
    let a = evaluate("caprini_2005", &params).unwrap();
    assert_eq!(a.result, ScoreValue::Integer(9));
    assert_eq!(a.stage, "Highest Risk");

    assert!(evaluate("caprini_2005", &caprini("over_90", &[])).is_err());
}

fn cryo(weight: f64, hematocrit: f64, current: f64, target: f64) -> Params {
    Params::new()
        .with("patient_weight", weight)
        .with("patient_sex", "male")
        .with("hematocrit", hematocrit)
        .with("current_fibrinogen", current)
        .with("target_fibrinogen", target)
}

#[test]
fn cryo_rounds_units_up() {
    let params = cryo(70.0, 0.4, 100.0, 200.0);
    let a = evaluate("cryoprecipitate_dosing", &params).unwrap();
    assert_eq!(a.result, ScoreValue::Integer(2));
    assert_eq!(a.stage, "Low Dose");
    assert_eq!(a.detail("plasma_volume_dl"), Some(&json!(2.9)));
    assert_eq!(a.detail("exact_units_calculated"), Some(&json!(1.47)));
    assert_eq!(a.detail("fibrinogen_per_unit_mg"), Some(&json!(200.0)));

    // 4.9 dL * 350 mg/dL / 200 mg
    let params = cryo(100.0, 0.3, 50.0, 400.0);
    let a = evaluate("cryoprecipitate_dosing", &params).unwrap();
    assert_eq!(a.result, ScoreValue::Integer(9));
    assert_eq!(a.stage, "Standard Dose");
}

#[test]
fn cryo_unit_content_and_validation() {
    let params = cryo(300.0, 0.15, 0.0, 500.0).with("fibrinogen_per_unit", 150.0);
    let a = evaluate("cryoprecipitate_dosing", &params).unwrap();
    assert_eq!(a.result, ScoreValue::Integer(60));
    assert_eq!(a.stage, "Very High Dose");

    let params = cryo(70.0, 0.4, 200.0, 200.0);
    let err = evaluate("cryoprecipitate_dosing", &params).unwrap_err();
    assert!(err.to_string().contains("'target_fibrinogen'"));

    let params = cryo(70.0, 0.4, 100.0, 200.0).with("fibrinogen_per_unit", 301.0);
    assert!(evaluate("cryoprecipitate_dosing", &params).is_err());
    let params = cryo(70.0, 0.7, 100.0, 200.0);
    assert!(evaluate("cryoprecipitate_dosing", &params).is_err());
}

const GENEVA_FIELDS: [&str; 19] = [
    "cardiac_failure",
    "respiratory_failure",
    "recent_stroke",
    "recent_myocardial_infarction",
    "acute_infectious_disease",
    "acute_rheumatic_disease",
    "active_malignancy",
    "myeloproliferative_syndrome",
    "nephrotic_syndrome",
    "prior_vte_history",
    "known_hypercoagulable_state",
    "immobilization",
    "recent_travel",
    "age_over_60",
    "obesity",
    "chronic_venous_insufficiency",
    "pregnancy",
    "hormonal_therapy",
    "dehydration",
];

fn geneva(present: &[&str]) -> Params {
    let mut params = Params::new();
    for field in GENEVA_FIELDS {
        params.insert(field, if present.contains(&field) { "yes" } else { "no" });
    }
    params
}

#[test]
fn geneva_threshold_at_three() {
    let params = geneva(&["active_malignancy"]);
    let a = evaluate("geneva_vte_prophylaxis", &params).unwrap();
    assert_eq!(a.result, ScoreValue::Integer(2));
    assert_eq!(a.stage, "Low Risk");

    let params = geneva(&["active_malignancy", "immobilization"]);
    let a = evaluate("geneva_vte_prophylaxis", &params).unwrap();
    assert_eq!(a.result, ScoreValue::Integer(3));
    assert_eq!(a.stage, "High Risk");

    let params = geneva(&["age_over_60", "obesity", "dehydration"]);
    let a = evaluate("geneva_vte_prophylaxis", &params).unwrap();
    assert_eq!(a.result, ScoreValue::Integer(3));
}

fn gipss(karyotype: &str, calr: &str) -> Params {
    Params::new()
        .with("karyotype_risk", karyotype)
        .with("calr_type1_mutation", calr)
        .with("asxl1_mutation", "no")
        .with("srsf2_mutation", "no")
        .with("u2af1q157_mutation", "no")
}

#[test]
fn gipss_scores_missing_calr_type1() {
    let a = evaluate("gipss", &gipss("favorable", "yes")).unwrap();
    assert_eq!(a.result, ScoreValue::Integer(0));
    assert_eq!(a.stage, "Low Risk");
    assert_eq!(a.detail("five_year_survival_percent"), Some(&json!(94)));

    let a = evaluate("gipss", &gipss("favorable", "no")).unwrap();
    assert_eq!(a.stage, "Intermediate-1 Risk");
    assert_eq!(a.detail("breakdown").unwrap()["calr_type1_absent"], json!(1));
}

#[test]
fn gipss_karyotype_weights() {
    let a = evaluate("gipss", &gipss("unfavorable", "no")).unwrap();
    assert_eq!(a.result, ScoreValue::Integer(2));
    assert_eq!(a.stage, "Intermediate-2 Risk");

    let a = evaluate("gipss", &gipss("very_high_risk", "no")).unwrap();
    assert_eq!(a.result, ScoreValue::Integer(3));
    assert_eq!(a.stage, "High Risk");
    assert_eq!(a.detail("median_survival_years"), Some(&json!(2.0)));

    assert!(evaluate("gipss", &gipss("adverse", "no")).is_err());
}

const IMPEDE_FIELDS: [&str; 10] = [
    "immunomodulatory_drug",
    "bmi_25_or_greater",
    "pelvic_hip_femur_fracture",
    "erythropoiesis_stimulating_agent",
    "doxorubicin_use",
    "asian_pacific_islander",
    "history_of_vte",
    "tunneled_line_cvc",
    "therapeutic_anticoagulation",
    "prophylactic_anticoagulation",
];

fn impede(dexamethasone: &str, present: &[&str]) -> Params {
    let mut params = Params::new().with("dexamethasone_use", dexamethasone);
    for field in IMPEDE_FIELDS {
        params.insert(field, if present.contains(&field) { "yes" } else { "no" });
    }
    params
}

#[test]
fn impede_band_edges() {
    let params = impede("low_dose", &["bmi_25_or_greater"]);
    let a = evaluate("impede_vte", &params).unwrap();
    assert_eq!(a.result, ScoreValue::Integer(3));
    assert_eq!(a.stage, "Low Risk");

    let a = evaluate("impede_vte", &impede("high_dose", &[])).unwrap();
    assert_eq!(a.result, ScoreValue::Integer(4));
    assert_eq!(a.stage, "Intermediate Risk");

    let params = impede("none", &["immunomodulatory_drug", "doxorubicin_use"]);
    let a = evaluate("impede_vte", &params).unwrap();
    assert_eq!(a.result, ScoreValue::Integer(7));
    assert_eq!(a.stage, "Intermediate Risk");

    let params = impede("high_dose", &["immunomodulatory_drug"]);
    let a = evaluate("impede_vte", &params).unwrap();
    assert_eq!(a.result, ScoreValue::Integer(8));
    assert_eq!(a.stage, "High Risk");
}

#[test]
fn impede_protective_factors_go_negative() {
    let params = impede("none", &["asian_pacific_islander", "therapeutic_anticoagulation"]);
    let a = evaluate("impede_vte", &params).unwrap();
    assert_eq!(a.result, ScoreValue::Integer(-7));
    assert_eq!(a.stage, "Low Risk");
}

fn rhig(volume: f64, fetal_percent: f64) -> Params {
    Params::new()
        .with("maternal_blood_volume", volume)
        .with("fetal_cell_percentage", fetal_percent)
}

#[test]
fn rhig_vial_rounding() {
    // 10 mL: a third of a vial.
    let params = rhig(4000.0, 0.25);
    let a = evaluate("rhd_immune_globulin_dosage", &params).unwrap();
    assert_eq!(a.result, ScoreValue::Integer(1));
    assert_eq!(a.stage, "Standard Dose");

    // 15 mL: half a vial adds one.
    let params = rhig(4000.0, 0.375);
    let a = evaluate("rhd_immune_globulin_dosage", &params).unwrap();
    assert_eq!(a.result, ScoreValue::Integer(2));
    assert_eq!(a.stage, "Moderate Hemorrhage");

    // 30 mL: an exact vial also adds one.
    let params = rhig(4000.0, 0.75);
    let a = evaluate("rhd_immune_globulin_dosage", &params).unwrap();
    assert_eq!(a.result, ScoreValue::Integer(2));
    assert_eq!(a.detail("total_dose_mcg"), Some(&json!(600)));

    let params = rhig(4000.0, 0.0);
    let a = evaluate("rhd_immune_globulin_dosage", &params).unwrap();
    assert_eq!(a.result, ScoreValue::Integer(1));
}

#[test]
fn rhig_large_hemorrhage() {
    let params = rhig(4000.0, 2.5);
    let a = evaluate("rhd_immune_globulin_dosage", &params).unwrap();
    assert_eq!(a.result, ScoreValue::Integer(4));
    assert_eq!(a.stage, "Large Hemorrhage");

    let params = rhig(6000.0, 10.0);
    let a = evaluate("rhd_immune_globulin_dosage", &params).unwrap();
    assert_eq!(a.result, ScoreValue::Integer(21));
    assert_eq!(a.stage, "Massive Hemorrhage");

    let params = rhig(1999.0, 1.0);
    assert!(evaluate("rhd_immune_globulin_dosage", &params).is_err());
    let params = rhig(4000.0, 10.5);
    assert!(evaluate("rhd_immune_globulin_dosage", &params).is_err());
}

fn wpss(who: &str, karyotype: &str, transfusion: &str) -> Params {
    Params::new()
        .with("who_category", who)
        .with("karyotype", karyotype)
        .with("transfusion_requirement", transfusion)
}

#[test]
fn wpss_risk_groups() {
    let params = wpss("ra_rars_del5q", "good", "none");
    let a = evaluate("wpss_mds", &params).unwrap();
    assert_eq!(a.result, ScoreValue::Integer(0));
    assert_eq!(a.stage, "Very Low Risk");
    assert_eq!(a.detail("median_survival_months"), Some(&json!(141)));

    let params = wpss("raeb_1", "intermediate", "none");
    let a = evaluate("wpss_mds", &params).unwrap();
    assert_eq!(a.result, ScoreValue::Integer(3));
    assert_eq!(a.stage, "High Risk");

    let params = wpss("raeb_2", "poor", "regular");
    let a = evaluate("wpss_mds", &params).unwrap();
    assert_eq!(a.result, ScoreValue::Integer(6));
    assert_eq!(a.stage, "Very High Risk");
    assert_eq!(a.detail("median_survival_months"), Some(&json!(9)));

    let params = wpss("raeb_3", "poor", "regular");
    assert!(evaluate("wpss_mds", &params).is_err());
}

fn mipss70() -> Params {
    Params::new()
        .with("age_years", 55)
        .with("hemoglobin", 12.0)
        .with("white_blood_count", 8.0)
        .with("platelet_count", 250)
        .with("circulating_blasts", 1)
        .with("constitutional_symptoms", "no")
        .with("high_molecular_risk_mutations", "no")
}

#[test]
fn mipss70_without_adverse_features() {
    let a = evaluate("mipss70", &mipss70()).unwrap();
    assert_eq!(a.result, ScoreValue::Integer(0));
    assert_eq!(a.stage, "Low Risk");
    assert_eq!(a.detail("version"), Some(&json!("MIPSS70")));
}

#[test]
fn mipss70_thresholds_are_strict() {
    let params = mipss70()
        .with("age_years", 65)
        .with("hemoglobin", 10.0)
        .with("white_blood_count", 25.0)
        .with("platelet_count", 100)
        .with("circulating_blasts", 2);
    let a = evaluate("mipss70", &params).unwrap();
    assert_eq!(a.result, ScoreValue::Integer(0));
}

#[test]
fn mipss70_plus_with_known_molecular_status() {
    let params = mipss70()
        .with("age_years", 70)
        .with("platelet_count", 80)
        .with("constitutional_symptoms", "yes")
        .with("high_molecular_risk_mutations", "yes")
        .with("very_high_molecular_risk", "yes");
    let a = evaluate("mipss70", &params).unwrap();
    assert_eq!(a.result, ScoreValue::Integer(7));
    assert_eq!(a.stage, "High Risk");
    assert_eq!(a.detail("version"), Some(&json!("MIPSS70+")));

    let a = evaluate("mipss70", &params.with("very_high_molecular_risk", "no")).unwrap();
    assert_eq!(a.result, ScoreValue::Integer(6));
    assert_eq!(a.stage, "Intermediate-2 Risk");
    assert_eq!(a.detail("version"), Some(&json!("MIPSS70+")));
}

fn icc_pmf(fibrosis: &str) -> Params {
    Params::new()
        .with("bone_marrow_megakaryocytic_proliferation", "present")
        .with("bone_marrow_fibrosis_grade", fibrosis)
        .with("genetic_mutation_present", "yes")
        .with("reactive_fibrosis_excluded", "yes")
        .with("other_mpn_excluded", "yes")
        .with("anemia_present", "yes")
        .with("leukocytosis_present", "no")
        .with("splenomegaly_present", "no")
        .with("elevated_ldh", "no")
}

#[test]
fn icc_pmf_prefibrotic() {
    let a = evaluate("icc_pmf_diagnostic_criteria", &icc_pmf("grade_0_1")).unwrap();
    assert_eq!(a.result, ScoreValue::Label("Pre-PMF Diagnosed".to_string()));
    assert_eq!(a.detail("minor_criteria_count"), Some(&json!(1)));
}

#[test]
fn icc_pmf_overt() {
    let a = evaluate("icc_pmf_diagnostic_criteria", &icc_pmf("grade_2_3")).unwrap();
    assert_eq!(a.stage, "Overt PMF Diagnosed");
    assert_eq!(a.detail("major_criteria_met"), Some(&json!(true)));
}

#[test]
fn icc_pmf_needs_a_minor_criterion() {
    let params = icc_pmf("grade_2_3").with("anemia_present", "no");
    let a = evaluate("icc_pmf_diagnostic_criteria", &params).unwrap();
    assert_eq!(a.stage, "PMF Not Diagnosed");
    assert_eq!(a.detail("major_criteria_met"), Some(&json!(true)));
}

#[test]
fn icc_pmf_validates_every_major_criterion() {
    let params = icc_pmf("grade_0_1")
        .with("bone_marrow_megakaryocytic_proliferation", "absent")
        .with("other_mpn_excluded", "maybe");
    let err = evaluate("icc_pmf_diagnostic_criteria", &params).unwrap_err();
    assert!(err.to_string().contains("'other_mpn_excluded'"));
}
