use clinscore_calculators::evaluate;
use clinscore_core::{Params, ScoreValue};
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn winters_expected_only() {
    let params = Params::new().with("bicarbonate", 12);
    let a = evaluate("winters_formula", &params).unwrap();
    assert_eq!(a.result, ScoreValue::Decimal(26.0));
    assert_eq!(a.stage, "Expected Compensation");
    assert_eq!(a.detail("expected_range_lower"), Some(&json!(24.0)));
    assert_eq!(a.detail("expected_range_upper"), Some(&json!(28.0)));
    assert_eq!(a.detail("acidosis_severity"), Some(&json!("moderate")));
}

#[test]
fn winters_detects_undercompensation() {
    let params = Params::new()
        .with("bicarbonate", 12)
        .with("measured_pco2", 40);
    let a = evaluate("winters_formula", &params).unwrap();
    assert_eq!(a.stage, "Undercompensation");
    assert_eq!(a.detail("difference"), Some(&json!(14.0)));
}

#[test]
fn winters_within_tolerance_is_appropriate() {
    let params = Params::new()
        .with("bicarbonate", 12)
        .with("measured_pco2", 27);
    let a = evaluate("winters_formula", &params).unwrap();
    assert_eq!(a.stage, "Appropriate Compensation");
}

fn ktv(dialysis: &str) -> Params {
    Params::new()
        .with("pre_dialysis_bun", 60)
        .with("post_dialysis_bun", 18)
        .with("dialysis_time_hours", 4)
        .with("ultrafiltration_volume", 3)
        .with("post_dialysis_weight", 70)
        .with("dialysis_type", dialysis)
}

#[test]
fn ktv_daugirdas_hemodialysis() {
    let a = evaluate("ktv_dialysis", &ktv("hemodialysis")).unwrap();
    assert_eq!(a.result, ScoreValue::Decimal(1.443));
    assert_eq!(a.stage, "Target Adequate (HD)");
    assert_eq!(a.detail("urea_reduction_ratio"), Some(&json!(70.0)));
}

#[test]
fn ktv_peritoneal_target_is_higher() {
    let params = ktv("peritoneal_dialysis");
    let a = evaluate("ktv_dialysis", &params).unwrap();
    assert_eq!(a.stage, "Inadequate");
}

#[test]
fn ktv_rejects_rising_bun() {
    let params = ktv("hemodialysis").with("post_dialysis_bun", 70);
    let err = evaluate("ktv_dialysis", &params).unwrap_err();
    assert!(err.to_string().contains("post_dialysis_bun"));
}

#[test]
fn fluid_balance_missing_fields_count_as_zero() {
    let a = evaluate("body_fluid_balance", &Params::new()).unwrap();
    assert_eq!(a.result, ScoreValue::Integer(0));
    assert_eq!(a.stage, "Neutral Balance");
}

#[test]
fn fluid_balance_splits_saline_and_water() {
    let params = Params::new()
        .with("normal_saline_iv", 1000)
        .with("insensible_losses", 500);
    let a = evaluate("body_fluid_balance", &params).unwrap();
    assert_eq!(a.result, ScoreValue::Integer(500));
    assert_eq!(a.stage, "Moderate Positive Balance");
    assert_eq!(a.detail("net_saline_balance"), Some(&json!(1000)));
    assert_eq!(a.detail("net_water_balance"), Some(&json!(-500)));
}

#[test]
fn fluid_balance_boundaries_in_whole_millilitres() {
    let loss = |ml: i64| Params::new().with("oral_intake", 0).with("insensible_losses", ml);
    assert_eq!(
        evaluate("body_fluid_balance", &loss(500)).unwrap().stage,
        "Significant Negative Balance"
    );
    assert_eq!(
        evaluate("body_fluid_balance", &loss(200)).unwrap().stage,
        "Moderate Negative Balance"
    );
    assert_eq!(
        evaluate("body_fluid_balance", &loss(199)).unwrap().stage,
        "Neutral Balance"
    );
}

#[test]
fn akin_creatinine_fold_change() {
    let params = Params::new()
        .with("current_creatinine", 2.0)
        .with("baseline_creatinine", 1.0);
    let a = evaluate("akin", &params).unwrap();
    assert_eq!(a.result, ScoreValue::Integer(2));
    assert_eq!(a.stage, "Stage 2");
    assert_eq!(a.detail("criteria_met"), Some(&json!(["creatinine 2.0x baseline"])));

    let params = Params::new()
        .with("current_creatinine", 1.49)
        .with("baseline_creatinine", 1.0);
    let a = evaluate("akin", &params).unwrap();
    assert_eq!(a.stage, "No AKI");
}

#[test]
fn akin_absolute_rise() {
    let params = Params::new()
        .with("current_creatinine", 1.3)
        .with("creatinine_increase", 0.3);
    let a = evaluate("akin", &params).unwrap();
    assert_eq!(a.stage, "Stage 1");

    let params = Params::new()
        .with("current_creatinine", 4.5)
        .with("creatinine_increase", 0.5);
    let a = evaluate("akin", &params).unwrap();
    assert_eq!(a.stage, "Stage 3");
}

#[test]
fn akin_urine_output_windows() {
    // 0.42 mL/kg/h over 6 h
    let params = Params::new()
        .with("current_creatinine", 1.0)
        .with("urine_output_6h", 2.5);
    let a = evaluate("akin", &params).unwrap();
    assert_eq!(a.stage, "Stage 1");

    let params = Params::new()
        .with("current_creatinine", 1.0)
        .with("urine_output_24h", 6.0);
    let a = evaluate("akin", &params).unwrap();
    assert_eq!(a.stage, "Stage 3");

    let params = Params::new()
        .with("current_creatinine", 1.0)
        .with("anuria_12h", "yes");
    let a = evaluate("akin", &params).unwrap();
    assert_eq!(a.stage, "Stage 3");
}

#[test]
fn akin_renal_replacement_and_limits() {
    let params = Params::new()
        .with("current_creatinine", 1.0)
        .with("on_rrt", "yes");
    let a = evaluate("akin", &params).unwrap();
    assert_eq!(a.result, ScoreValue::Integer(3));
    assert_eq!(a.detail("criteria_met"), Some(&json!(["on renal replacement therapy"])));

    let params = Params::new().with("current_creatinine", 1.0);
    let a = evaluate("akin", &params).unwrap();
    assert_eq!(a.stage, "No AKI");

    let params = Params::new().with("current_creatinine", 15.1);
    assert!(evaluate("akin", &params).is_err());
    let params = Params::new()
        .with("current_creatinine", 1.0)
        .with("urine_output_6h", 51.0);
    assert!(evaluate("akin", &params).is_err());
}

fn ckid(equation: &str, age: i64, sex: &str) -> Params {
    Params::new()
        .with("equation_type", equation)
        .with("age", age)
        .with("sex", sex)
}

#[test]
fn ckid_creatinine_equation() {
    // 39.0 * 1.5 / 0.8
    let params = ckid("creatinine", 12, "male")
        .with("height", 150.0)
        .with("serum_creatinine", 0.8);
    let a = evaluate("ckid_u25_egfr", &params).unwrap();
    assert_eq!(a.result, ScoreValue::Decimal(73.1));
    assert_eq!(a.stage, "G2");
    assert_eq!(a.detail("method"), Some(&json!("Creatinine-based CKiD U25")));

    let params = ckid("creatinine", 10, "male")
        .with("height", 140.0)
        .with("serum_creatinine", 0.6);
    let a = evaluate("ckid_u25_egfr", &params).unwrap();
    assert_eq!(a.result, ScoreValue::Decimal(89.6));

    let params = ckid("creatinine", 20, "female")
        .with("height", 160.0)
        .with("serum_creatinine", 1.2);
    let a = evaluate("ckid_u25_egfr", &params).unwrap();
    assert_eq!(a.result, ScoreValue::Decimal(55.2));
    assert_eq!(a.stage, "G3a");
}

#[test]
fn ckid_cystatin_equation_g1_edge() {
    let params = ckid("cystatin_c", 20, "male").with("cystatin_c", 1.5);
    let a = evaluate("ckid_u25_egfr", &params).unwrap();
    assert_eq!(a.result, ScoreValue::Decimal(90.0));
    assert_eq!(a.stage, "G1");

    let params = ckid("cystatin_c", 20, "male").with("cystatin_c", 1.51);
    let a = evaluate("ckid_u25_egfr", &params).unwrap();
    assert_eq!(a.stage, "G2");
}

#[test]
fn ckid_combined_averages_both() {
    // (80.8 + 90.0) / 2
    let params = ckid("creatinine_cystatin_c", 20, "male")
        .with("height", 175.0)
        .with("serum_creatinine", 1.1)
        .with("cystatin_c", 1.5);
    let a = evaluate("ckid_u25_egfr", &params).unwrap();
    assert_eq!(a.result, ScoreValue::Decimal(85.4));
}

#[test]
fn ckid_requires_equation_inputs() {
    let params = ckid("creatinine", 12, "male").with("serum_creatinine", 0.8);
    let err = evaluate("ckid_u25_egfr", &params).unwrap_err();
    assert!(err.to_string().contains("'height'"));

    let params = ckid("creatinine_cystatin_c", 12, "male")
        .with("height", 150.0)
        .with("serum_creatinine", 0.8);
    let err = evaluate("ckid_u25_egfr", &params).unwrap_err();
    assert!(err.to_string().contains("'cystatin_c'"));

    let params = ckid("cystatin_c", 26, "male").with("cystatin_c", 1.0);
    assert!(evaluate("ckid_u25_egfr", &params).is_err());
}

fn kinetic(first: f64, second: f64) -> Params {
    Params::new()
        .with("age", 60)
        .with("sex", "male")
        .with("race", "non_black")
        .with("baseline_creatinine", 1.0)
        .with("creatinine_1", first)
        .with("creatinine_2", second)
        .with("time_hours", 24)
}

#[test]
fn kinetic_egfr_stable_creatinine_matches_mdrd() {
    let a = evaluate("kinetic_egfr", &kinetic(1.0, 1.0)).unwrap();
    assert_eq!(a.result, ScoreValue::Decimal(76.2));
    assert_eq!(a.stage, "Low AKI Risk");
    assert_eq!(a.detail("baseline_egfr"), Some(&json!(76.2)));
    assert_eq!(a.detail("change_in_gfr"), Some(&json!(0.0)));
}

#[test]
fn kinetic_egfr_rising_and_falling_creatinine() {
    let a = evaluate("kinetic_egfr", &kinetic(1.0, 2.0)).unwrap();
    assert_eq!(a.result, ScoreValue::Decimal(16.9));
    assert_eq!(a.stage, "High AKI Risk");
    assert_eq!(a.detail("change_in_gfr"), Some(&json!(-59.3)));

    let a = evaluate("kinetic_egfr", &kinetic(1.0, 1.3)).unwrap();
    assert_eq!(a.result, ScoreValue::Decimal(53.0));
    assert_eq!(a.stage, "Intermediate AKI Risk");

    let a = evaluate("kinetic_egfr", &kinetic(2.0, 1.5)).unwrap();
    assert_eq!(a.result, ScoreValue::Decimal(58.1));
}

#[test]
fn kinetic_egfr_floors_at_zero() {
    let a = evaluate("kinetic_egfr", &kinetic(1.0, 3.0)).unwrap();
    assert_eq!(a.result, ScoreValue::Decimal(0.0));
    assert_eq!(a.stage, "Very High AKI Risk");

    let params = kinetic(1.0, 1.2).with("sex", "female");
    let a = evaluate("kinetic_egfr", &params).unwrap();
    assert_eq!(a.result, ScoreValue::Decimal(44.6));

    let params = kinetic(1.0, 1.2).with("max_daily_creatinine_rise", 0.0);
    assert!(evaluate("kinetic_egfr", &params).is_err());
    let params = kinetic(1.0, 1.2).with("age", 17);
    assert!(evaluate("kinetic_egfr", &params).is_err());
}

fn abg(ph: f64, pco2: f64, hco3: f64) -> Params {
    Params::new()
        .with("ph", ph)
        .with("pco2", pco2)
        .with("hco3", hco3)
}

#[test]
fn abg_compensated_metabolic_acidosis() {
    let a = evaluate("abg_analyzer", &abg(7.25, 29.0, 14.0)).unwrap();
    assert_eq!(a.result, ScoreValue::Label("Metabolic Acidosis".to_string()));
    assert_eq!(a.detail("ph_status"), Some(&json!("acidemia")));
    assert_eq!(
        a.detail("compensation"),
        Some(&json!("Appropriate respiratory compensation (PCO2 29.0, expected ~29.0±2)"))
    );
    assert!(a.interpretation.contains("anion gap"));
    assert!(a.detail("oxygenation").is_none());
}

#[test]
fn abg_acute_respiratory_acidosis() {
    let a = evaluate("abg_analyzer", &abg(7.25, 60.0, 26.0)).unwrap();
    assert_eq!(a.stage, "Respiratory Acidosis");
    assert_eq!(
        a.detail("compensation"),
        Some(&json!("Acute respiratory acidosis (HCO3 26.0, expected ~26.0)"))
    );
}

#[test]
fn abg_acidemia_without_matching_driver_is_mixed() {
    let a = evaluate("abg_analyzer", &abg(7.25, 40.0, 24.0)).unwrap();
    assert_eq!(a.result, ScoreValue::Label("Mixed Acid-Base Disorder".to_string()));
    assert_eq!(a.stage, "Mixed Disorder");
}

#[test]
fn abg_normal_gas_with_hypoxemia() {
    let params = abg(7.40, 40.0, 24.0).with("po2", 55).with("fio2", 0.4);
    let a = evaluate("abg_analyzer", &params).unwrap();
    assert_eq!(a.stage, "Normal pH");
    assert_eq!(a.detail("compensation"), Some(&json!("No compensation needed")));
    let oxygenation = a.detail("oxygenation").unwrap();
    assert_eq!(oxygenation["status"], json!("Hypoxemia"));
    assert_eq!(oxygenation["severity"], json!("Severe hypoxemia"));
    assert_eq!(oxygenation["fio2"], json!(0.4));
}

#[test]
fn abg_rejects_implausible_ph() {
    let err = evaluate("abg_analyzer", &abg(8.2, 40.0, 24.0)).unwrap_err();
    assert!(err.to_string().contains("'ph'"));
}
