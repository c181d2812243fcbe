use clinscore_calculators::evaluate;
use clinscore_core::{Params, ScoreValue};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use serde_json::json;

fn gleason(primary: i64, secondary: i64) -> Params {
    Params::new()
        .with("primary_grade", primary)
        .with("secondary_grade", secondary)
}

#[test]
fn gleason_order_sets_grade_group() {
    let a = evaluate("gleason_score", &gleason(3, 4)).unwrap();
    assert_eq!(a.result, ScoreValue::Integer(7));
    assert_eq!(a.detail("grade_group"), Some(&json!(2)));

    let b = evaluate("gleason_score", &gleason(4, 3)).unwrap();
    assert_eq!(b.result, ScoreValue::Integer(7));
    assert_eq!(b.detail("grade_group"), Some(&json!(3)));
    assert_eq!(a.stage, b.stage);
    assert_eq!(b.detail("pattern"), Some(&json!("4+3")));
}

#[test]
fn gleason_rejects_pattern_below_three() {
    assert!(evaluate("gleason_score", &gleason(2, 3)).is_err());
}

#[test]
fn psa_doubling_two_points() {
    let params = Params::new()
        .with("psa_1", 2.0)
        .with("days_1", 0)
        .with("psa_2", 4.0)
        .with("days_2", 304);
    let a = evaluate("psa_doubling_time", &params).unwrap();
    assert_eq!(a.result, ScoreValue::Decimal(10.0));
    assert_eq!(a.unit, "months");
    assert_eq!(a.stage, "Intermediate Risk");
}

#[test]
fn psa_falling_never_doubles() {
    let params = Params::new()
        .with("psa_1", 4.0)
        .with("days_1", 0)
        .with("psa_2", 3.0)
        .with("days_2", 90)
        .with("psa_3", 2.5)
        .with("days_3", 180);
    let a = evaluate("psa_doubling_time", &params).unwrap();
    assert_eq!(a.result, ScoreValue::Decimal(999.0));
    assert_eq!(a.stage, "Very Low Risk");
    assert_eq!(a.detail("measurements"), Some(&json!(3)));
}

#[test]
fn psa_rejects_unpaired_and_duplicate_points() {
    let base = Params::new()
        .with("psa_1", 2.0)
        .with("days_1", 0)
        .with("psa_2", 4.0)
        .with("days_2", 100);

    let params = base.clone().with("psa_3", 5.0);
    let err = evaluate("psa_doubling_time", &params).unwrap_err();
    assert!(err.to_string().contains("days_3"));

    let params = base.clone().with("days_3", 200);
    let err = evaluate("psa_doubling_time", &params).unwrap_err();
    assert!(err.to_string().contains("'psa_3'"));

    let err = evaluate(
        "psa_doubling_time",
        &base.clone().with("psa_4", 6.0).with("days_4", 100),
    )
    .unwrap_err();
    assert!(err.to_string().contains("'days_4'"));
    assert!(err.to_string().contains("unique"));

    let params = base.with("days_2", 0);
    let err = evaluate("psa_doubling_time", &params).unwrap_err();
    assert!(err.to_string().contains("unique"));
}

#[test]
fn lent_score_components() {
    let params = Params::new()
        .with("pleural_fluid_ldh", 1600)
        .with("ecog_performance_status", 4)
        .with("neutrophil_lymphocyte_ratio", 10)
        .with("tumor_type", "lung_other");
    let a = evaluate("lent_score", &params).unwrap();
    // ECOG 4 contributes the capped 3 points.
    assert_eq!(a.result, ScoreValue::Integer(7));
    assert_eq!(a.stage, "High Risk");
    assert_eq!(a.detail("median_survival_days"), Some(&json!(44)));
}

const GELF: &[&str] = &[
    "tumor_mass_over_7cm",
    "three_or_more_nodal_sites",
    "systemic_b_symptoms",
    "splenic_enlargement",
    "compression_syndrome",
    "serous_effusion",
    "leukemic_phase",
    "granulocyte_count_low",
    "platelet_count_low",
];

#[test]
fn gelf_any_criterion_triggers_therapy() {
    let none = GELF.iter().fold(Params::new(), |p, f| p.with(f, "no"));
    let a = evaluate("gelf_criteria", &none).unwrap();
    assert_eq!(a.result.as_label(), Some("active_surveillance"));

    let one = none.with("serous_effusion", "yes");
    let a = evaluate("gelf_criteria", &one).unwrap();
    assert_eq!(a.result.as_label(), Some("immediate_therapy"));
    assert_eq!(a.detail("criteria_met"), Some(&json!(1)));
}

proptest! {
    #[test]
    fn gleason_total_and_group_stay_in_range(p in 3i64..=5, s in 3i64..=5) {
        let a = evaluate("gleason_score", &gleason(p, s)).unwrap();
        let group = a.detail("grade_group").and_then(|g| g.as_i64()).unwrap();
        prop_assert!((1..=5).contains(&group));
        prop_assert_eq!(a.result.as_i64(), Some(p + s));
    }
}

fn crash(heme: [&str; 4], nonheme: [&str; 4]) -> Params {
    Params::new()
        .with("diastolic_bp", heme[0])
        .with("iadl_score", heme[1])
        .with("ldh", heme[2])
        .with("chemo_risk_hematologic", heme[3])
        .with("ecog_ps", nonheme[0])
        .with("mmse", nonheme[1])
        .with("mna", nonheme[2])
        .with("chemo_risk_nonhematologic", nonheme[3])
}

const CRASH_HEME_LOW: [&str; 4] = ["lte_72", "26_to_29", "0_to_459", "0_to_0.44"];
const CRASH_NONHEME_LOW: [&str; 4] = ["0", "30", "28_to_30", "0"];

#[test]
fn crash_lowest_inputs_score_zero() {
    let params = crash(CRASH_HEME_LOW, CRASH_NONHEME_LOW);
    let a = evaluate("crash_score", &params).unwrap();
    assert_eq!(a.result, ScoreValue::Integer(0));
    assert_eq!(a.stage, "Low");
    assert_eq!(a.detail("hematologic").unwrap()["risk"], json!("Low"));
    assert_eq!(a.detail("nonhematologic").unwrap()["score"], json!(0));
}

#[test]
fn crash_combined_counts_regimen_once() {
    let heme = ["gt_72", "10_to_25", "gt_459", "gt_0.57"];
    let params = crash(heme, CRASH_NONHEME_LOW);
    let a = evaluate("crash_score", &params).unwrap();
    assert_eq!(a.result, ScoreValue::Integer(6));
    assert_eq!(a.stage, "Low-Intermediate");
    assert_eq!(a.detail("hematologic").unwrap()["score"], json!(6));
    assert_eq!(a.detail("hematologic").unwrap()["risk"], json!("High"));

    let params = crash(heme, ["1_to_2", "30", "28_to_30", "0"]);
    let a = evaluate("crash_score", &params).unwrap();
    assert_eq!(a.result, ScoreValue::Integer(7));
    assert_eq!(a.stage, "Intermediate-High");
}

#[test]
fn crash_high_combined_score() {
    let heme = ["gt_72", "10_to_25", "gt_459", "gt_0.57"];
    let params = crash(heme, ["3_to_4", "lt_30", "lt_28", "2"]);
    let a = evaluate("crash_score", &params).unwrap();
    assert_eq!(a.result, ScoreValue::Integer(12));
    assert_eq!(a.stage, "High");
    assert_eq!(a.detail("nonhematologic").unwrap()["score"], json!(8));
    assert_eq!(a.detail("nonhematologic").unwrap()["risk"], json!("High"));
}

#[test]
fn crash_rejects_unknown_token() {
    let params = crash(CRASH_HEME_LOW, CRASH_NONHEME_LOW).with("ecog_ps", "5");
    assert!(evaluate("crash_score", &params).is_err());
}

fn damico(psa: f64, gleason: i64, stage: &str) -> Params {
    Params::new()
        .with("psa_level", psa)
        .with("gleason_score", gleason)
        .with("clinical_stage", stage)
}

#[test]
fn damico_low_risk() {
    let a = evaluate("damico_risk", &damico(10.0, 6, "T2a")).unwrap();
    assert_eq!(a.result, ScoreValue::Label("low".to_string()));
    assert_eq!(a.stage, "Low Risk");
    assert_eq!(a.detail("five_year_recurrence_rate"), Some(&json!("5-15%")));
    assert!(!a.interpretation.contains("watchful waiting"));
    assert_eq!(a.detail("treatment_planned"), None);
}

#[test]
fn damico_intermediate_features() {
    for params in [damico(10.1, 6, "T1c"), damico(5.0, 7, "T1c"), damico(5.0, 6, "T2b")] {
        let a = evaluate("damico_risk", &params).unwrap();
        assert_eq!(a.stage, "Intermediate Risk");
        assert_eq!(a.detail("five_year_recurrence_rate"), Some(&json!("15-45%")));
    }
}

#[test]
fn damico_any_high_feature_wins() {
    for params in [damico(20.1, 6, "T1c"), damico(5.0, 8, "T1c"), damico(5.0, 6, "T2c")] {
        let a = evaluate("damico_risk", &params).unwrap();
        assert_eq!(a.result, ScoreValue::Label("high".to_string()));
        assert_eq!(a.stage, "High Risk");
    }
    let a = evaluate("damico_risk", &damico(25.0, 7, "T2b")).unwrap();
    assert_eq!(a.detail("five_year_recurrence_rate"), Some(&json!("45-65%")));
}

#[test]
fn damico_elderly_low_risk_note_and_treatment() {
    let params = damico(4.0, 6, "T1c")
        .with("patient_age", 78)
        .with("treatment_planned", "active_surveillance");
    let a = evaluate("damico_risk", &params).unwrap();
    assert!(a.interpretation.contains("watchful waiting"));
    assert_eq!(a.detail("treatment_planned"), Some(&json!("active_surveillance")));

    let params = damico(4.0, 7, "T1c").with("patient_age", 78);
    let a = evaluate("damico_risk", &params).unwrap();
    assert!(!a.interpretation.contains("watchful waiting"));
}

#[test]
fn damico_limits() {
    assert!(evaluate("damico_risk", &damico(0.05, 6, "T1c")).is_err());
    assert!(evaluate("damico_risk", &damico(5.0, 11, "T1c")).is_err());
    assert!(evaluate("damico_risk", &damico(5.0, 6, "T5")).is_err());
    let params = damico(5.0, 6, "T1c").with("patient_age", 39);
    assert!(evaluate("damico_risk", &params).is_err());
}

fn gi_gpa(age: &str, kps: &str, extracranial: &str, brain: &str) -> Params {
    Params::new()
        .with("age_category", age)
        .with("kps", kps)
        .with("extracranial_metastases", extracranial)
        .with("number_brain_metastases", brain)
}

#[test]
fn gi_gpa_extremes() {
    let params = gi_gpa("60_or_over", "under_80", "present", "more_than_3");
    let a = evaluate("gi_gpa", &params).unwrap();
    assert_eq!(a.result, ScoreValue::Decimal(0.0));
    assert_eq!(a.stage, "Poor Prognosis");
    assert_eq!(a.detail("median_survival_months"), Some(&json!(3)));

    let params = gi_gpa("under_60", "90_to_100", "absent", "1");
    let a = evaluate("gi_gpa", &params).unwrap();
    assert_eq!(a.result, ScoreValue::Decimal(4.0));
    assert_eq!(a.stage, "Good Prognosis");
    assert_eq!(a.detail("median_survival_months"), Some(&json!(17)));
}

#[test]
fn gi_gpa_band_edges() {
    let params = gi_gpa("60_or_over", "80", "present", "more_than_3");
    let a = evaluate("gi_gpa", &params).unwrap();
    assert_eq!(a.result, ScoreValue::Decimal(1.0));
    assert_eq!(a.stage, "Poor Prognosis");

    let params = gi_gpa("60_or_over", "80", "absent", "more_than_3");
    let a = evaluate("gi_gpa", &params).unwrap();
    assert_eq!(a.result, ScoreValue::Decimal(1.5));
    assert_eq!(a.stage, "Intermediate-Poor Prognosis");

    let params = gi_gpa("under_60", "90_to_100", "absent", "more_than_3");
    let a = evaluate("gi_gpa", &params).unwrap();
    assert_eq!(a.result, ScoreValue::Decimal(3.0));
    assert_eq!(a.stage, "Intermediate Prognosis");
    assert_eq!(a.detail("median_survival_months"), Some(&json!(12)));

    let params = gi_gpa("under_60", "90_to_100", "absent", "2_to_3");
    let a = evaluate("gi_gpa", &params).unwrap();
    assert_eq!(a.result, ScoreValue::Decimal(3.5));
    assert_eq!(a.stage, "Good Prognosis");
}

#[test]
fn gi_gpa_rejects_unknown_kps() {
    let params = gi_gpa("under_60", "70", "absent", "1");
    assert!(evaluate("gi_gpa", &params).is_err());
}

fn manchester() -> Params {
    Params::new()
        .with("serum_ldh", "normal")
        .with("serum_sodium", 140.0)
        .with("serum_alkaline_phosphatase", "normal")
        .with("serum_bicarbonate", 26.0)
        .with("disease_stage", "limited")
        .with("karnofsky_performance_status", 90)
}

#[test]
fn manchester_good_prognosis() {
    let a = evaluate("manchester_sclc", &manchester()).unwrap();
    assert_eq!(a.result, ScoreValue::Integer(0));
    assert_eq!(a.stage, "Good Prognosis");
    assert_eq!(a.detail("two_year_survival"), Some(&json!("16.2%")));
}

#[test]
fn manchester_thresholds_are_strict() {
    let params = manchester()
        .with("serum_sodium", 132.0)
        .with("serum_bicarbonate", 24.0)
        .with("serum_alkaline_phosphatase", "1.1_to_1.5_times_normal")
        .with("karnofsky_performance_status", 51);
    let a = evaluate("manchester_sclc", &params).unwrap();
    assert_eq!(a.result, ScoreValue::Integer(0));

    let params = manchester()
        .with("serum_sodium", 131.9)
        .with("serum_bicarbonate", 23.9);
    let a = evaluate("manchester_sclc", &params).unwrap();
    assert_eq!(a.result, ScoreValue::Integer(2));
    assert_eq!(a.stage, "Medium Prognosis");
    assert_eq!(a.detail("two_year_survival"), Some(&json!("2.5%")));
}

#[test]
fn manchester_poor_prognosis() {
    let params = manchester()
        .with("serum_ldh", "elevated")
        .with(
            "serum_alkaline_phosphatase",
            "greater_than_1.5_times_normal",
        )
        .with("disease_stage", "extensive")
        .with("karnofsky_performance_status", 50);
    let a = evaluate("manchester_sclc", &params).unwrap();
    assert_eq!(a.result, ScoreValue::Integer(4));
    assert_eq!(a.stage, "Poor Prognosis");
    assert_eq!(a.detail("two_year_survival"), Some(&json!("0%")));
    assert_eq!(a.detail("breakdown").unwrap()["karnofsky_performance_status"], json!(1));
}

#[test]
fn manchester_limits() {
    let params = manchester().with("serum_sodium", 109.0);
    assert!(evaluate("manchester_sclc", &params).is_err());
    let params = manchester().with("karnofsky_performance_status", 101);
    assert!(evaluate("manchester_sclc", &params).is_err());
}

fn mascc() -> Params {
    Params::new()
        .with("burden_of_illness", "none_mild")
        .with("hypotension", "no")
        .with("active_copd", "no")
        .with("cancer_type", "solid_tumor_or_hematologic_no_prior_fungal")
        .with("dehydration_requiring_iv", "no")
        .with("fever_onset_status", "outpatient")
        .with("patient_age", 45)
}

#[test]
fn mascc_maximum_is_low_risk() {
    let a = evaluate("mascc", &mascc()).unwrap();
    assert_eq!(a.result, ScoreValue::Integer(26));
    assert_eq!(a.stage, "Low Risk");
}

#[test]
fn mascc_threshold_at_21() {
    let params = mascc()
        .with("burden_of_illness", "severe")
        .with("patient_age", 59);
    let a = evaluate("mascc", &params).unwrap();
    assert_eq!(a.result, ScoreValue::Integer(21));
    assert_eq!(a.stage, "Low Risk");

    let params = mascc()
        .with("burden_of_illness", "severe")
        .with("patient_age", 60);
    let a = evaluate("mascc", &params).unwrap();
    assert_eq!(a.result, ScoreValue::Integer(19));
    assert_eq!(a.stage, "High Risk");
}

#[test]
fn mascc_unfavourable_features() {
    let params = mascc()
        .with("burden_of_illness", "moderate")
        .with("hypotension", "yes")
        .with("cancer_type", "hematologic_with_prior_fungal")
        .with("fever_onset_status", "inpatient");
    let a = evaluate("mascc", &params).unwrap();
    assert_eq!(a.result, ScoreValue::Integer(12));
    assert_eq!(a.stage, "High Risk");
    assert_eq!(a.detail("breakdown").unwrap()["burden_of_illness"], json!(3));
}

#[test]
fn mascc_rejects_minor() {
    let params = mascc().with("patient_age", 17);
    assert!(evaluate("mascc", &params).is_err());
}

fn mipi(age: i64, ecog: &str, ldh: f64, wbc: f64) -> Params {
    Params::new()
        .with("age", age)
        .with("ecog_performance_status", ecog)
        .with("serum_ldh", ldh)
        .with("ldh_upper_limit_normal", 250.0)
        .with("white_blood_cell_count", wbc)
}

#[test]
fn mipi_low_risk() {
    let a = evaluate("mipi", &mipi(50, "0_to_1", 200.0, 6.0)).unwrap();
    assert_eq!(a.result, ScoreValue::Decimal(5.184));
    assert_eq!(a.stage, "Low Risk");
    assert_eq!(a.detail("score_type"), Some(&json!("MIPI")));
    assert_eq!(a.detail("ldh_ratio"), Some(&json!(0.8)));
}

#[test]
fn mipi_intermediate_and_high() {
    let a = evaluate("mipi", &mipi(60, "0_to_1", 250.0, 8.0)).unwrap();
    assert_eq!(a.result, ScoreValue::Decimal(5.787));
    assert_eq!(a.stage, "Intermediate Risk");

    let a = evaluate("mipi", &mipi(70, "2_to_4", 400.0, 12.0)).unwrap();
    assert_eq!(a.result, ScoreValue::Decimal(7.283));
    assert_eq!(a.stage, "High Risk");
}

#[test]
fn mipi_biological_uses_own_bands() {
    let params = mipi(50, "0_to_1", 200.0, 6.0).with("ki67_index", 30.0);
    let a = evaluate("mipi", &params).unwrap();
    assert_eq!(a.result, ScoreValue::Decimal(5.826));
    assert_eq!(a.stage, "Intermediate Risk");
    assert_eq!(a.detail("score_type"), Some(&json!("MIPIb")));
    assert_eq!(a.detail("mipi_score"), Some(&json!(5.184)));

    // 6.43 is high on the MIPI scale but intermediate for MIPIb.
    let params = mipi(60, "0_to_1", 250.0, 8.0).with("ki67_index", 30.0);
    let a = evaluate("mipi", &params).unwrap();
    assert_eq!(a.result, ScoreValue::Decimal(6.43));
    assert_eq!(a.stage, "Intermediate Risk");
}

#[test]
fn mipi_limits() {
    assert!(evaluate("mipi", &mipi(17, "0_to_1", 200.0, 6.0)).is_err());
    assert!(evaluate("mipi", &mipi(50, "0_to_1", 0.0, 6.0)).is_err());
    let params = mipi(50, "0_to_1", 200.0, 6.0).with("ki67_index", 101.0);
    assert!(evaluate("mipi", &params).is_err());
}
