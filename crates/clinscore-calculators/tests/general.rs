use clinscore_calculators::evaluate;
use clinscore_core::{Params, ScoreValue};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use serde_json::json;

fn snellen(line: &str, distance: &str) -> Params {
    Params::new()
        .with("eye_tested", "right_eye")
        .with("lowest_line_read", line)
        .with("testing_distance", distance)
        .with("corrective_lenses", "no")
}

#[test]
fn snellen_normal_vision() {
    let params = snellen("line_11_20_20", "20_feet");
    let a = evaluate("snellen_visual_acuity", &params).unwrap();
    assert_eq!(a.result.as_label(), Some("20/20"));
    assert_eq!(a.stage, "Normal");
    assert_eq!(a.detail("decimal_acuity"), Some(&json!(1.0)));
    assert_eq!(a.detail("logmar"), Some(&json!(0.0)));
}

#[test]
fn snellen_legal_blindness_line() {
    let params = snellen("line_1_20_200", "6_meters");
    let a = evaluate("snellen_visual_acuity", &params).unwrap();
    assert_eq!(a.result.as_label(), Some("20/200"));
    assert_eq!(a.stage, "Severe Impairment");
    assert_eq!(a.detail("logmar"), Some(&json!(1.0)));
}

#[test]
fn snellen_off_chart_levels_have_no_logmar() {
    let params = snellen("counting_fingers", "20_feet");
    let a = evaluate("snellen_visual_acuity", &params).unwrap();
    assert_eq!(a.result.as_label(), Some("CF"));
    assert_eq!(a.stage, "Profound Impairment");
    assert_eq!(a.detail("logmar"), None);
}

#[test]
fn snellen_mobile_chart_is_marked() {
    let params = snellen("line_8_20_40", "4_feet_mobile");
    let a = evaluate("snellen_visual_acuity", &params).unwrap();
    assert_eq!(a.result.as_label(), Some("20/40 (mobile)"));
    assert_eq!(a.stage, "Mild Impairment");
    assert!(a.interpretation.contains("mobile chart"));
}

fn wound(contamination: &str, loss: &str, hours: f64, vasc: &str, location: &str) -> Params {
    Params::new()
        .with("contamination_level", contamination)
        .with("tissue_loss", loss)
        .with("time_since_injury", hours)
        .with("vascularization", vasc)
        .with("wound_location", location)
}

fn closure(params: &Params) -> String {
    let a = evaluate("wound_closure_classification", params).unwrap();
    a.result.as_label().unwrap_or_default().to_string()
}

#[test]
fn wound_clean_and_early_closes_primarily() {
    let params = wound("clean", "minimal", 6.0, "moderately_vascularized", "extremities");
    assert_eq!(closure(&params), "primary_closure");
}

#[test]
fn wound_face_extends_the_window() {
    let face = wound("clean", "minimal", 12.0, "moderately_vascularized", "face_scalp");
    assert_eq!(closure(&face), "primary_closure");

    let limb = wound("clean", "minimal", 12.0, "moderately_vascularized", "extremities");
    assert_eq!(closure(&limb), "secondary_closure");
}

#[test]
fn wound_poor_perfusion_keeps_the_short_window() {
    let params = wound("clean", "minimal", 12.0, "poorly_vascularized", "face_scalp");
    assert_eq!(closure(&params), "secondary_closure");
}

#[test]
fn wound_contamination_and_delay_call_for_tertiary() {
    let dirty = wound("contaminated", "moderate", 2.0, "well_vascularized", "trunk");
    assert_eq!(closure(&dirty), "tertiary_closure");

    let late = wound("clean", "minimal", 30.0, "well_vascularized", "trunk");
    assert_eq!(closure(&late), "tertiary_closure");
}

#[test]
fn wound_tissue_loss_takes_precedence() {
    let params = wound("grossly_contaminated", "significant", 1.0, "well_vascularized", "joints");
    let a = evaluate("wound_closure_classification", &params).unwrap();
    assert_eq!(a.stage, "Secondary Closure");
    assert_eq!(
        a.detail("rationale"),
        Some(&json!("Significant tissue loss prevents tension-free primary closure"))
    );
}

fn mme(regimen: serde_json::Value) -> Params {
    Params::new().with("opioid_medications", regimen)
}

#[test]
fn mme_single_oral_opioid() {
    let params = mme(json!([{"medication": "oxycodone", "dose": 10, "frequency_per_day": 3}]));
    let a = evaluate("mme", &params).unwrap();
    assert_eq!(a.result, ScoreValue::Decimal(45.0));
    assert_eq!(a.stage, "Low Risk");
    assert_eq!(a.unit, "mg/day morphine equivalents");
}

#[test]
fn mme_accepts_a_json_string_and_brand_names() {
    let params = Params::new().with(
        "opioid_medications",
        r#"[{"medication": "Percocet", "dose": 10, "frequency_per_day": 3},
            {"medication": "tramadol", "dose": 50, "frequency_per_day": 4}]"#,
    );
    let a = evaluate("mme", &params).unwrap();
    assert_eq!(a.result, ScoreValue::Decimal(65.0));
    assert_eq!(a.stage, "Moderate Risk");
    let meds = a.detail("medications").unwrap();
    assert_eq!(meds[0]["medication"], json!("oxycodone"));
}

#[test]
fn mme_methadone_factor_rises_with_dose() {
    let low = mme(json!([{"medication": "methadone", "dose": 5, "frequency_per_day": 4}]));
    assert_eq!(evaluate("mme", &low).unwrap().result, ScoreValue::Decimal(80.0));

    let mid = mme(json!([{"medication": "methadone", "dose": 10, "frequency_per_day": 3}]));
    let a = evaluate("mme", &mid).unwrap();
    assert_eq!(a.result, ScoreValue::Decimal(240.0));
    assert_eq!(a.stage, "High Risk");
}

#[test]
fn mme_patch_ignores_frequency() {
    let once = mme(json!([{"medication": "fentanyl_patch", "dose": 25, "frequency_per_day": 1}]));
    let thrice = mme(json!([{"medication": "duragesic", "dose": 25, "frequency_per_day": 3}]));
    assert_eq!(evaluate("mme", &once).unwrap().result, ScoreValue::Decimal(60.0));
    assert_eq!(evaluate("mme", &thrice).unwrap().result, ScoreValue::Decimal(60.0));
}

#[test]
fn mme_intravenous_route_uses_iv_factor() {
    let params = mme(json!([
        {"medication": "hydromorphone_oral", "dose": 1, "frequency_per_day": 6, "route": "IV"}
    ]));
    assert_eq!(evaluate("mme", &params).unwrap().result, ScoreValue::Decimal(120.0));
}

#[test]
fn mme_rejects_bad_regimens() {
    let unknown = mme(json!([{"medication": "aspirin", "dose": 81, "frequency_per_day": 1}]));
    let err = evaluate("mme", &unknown).unwrap_err();
    assert!(err.to_string().contains("unknown medication 'aspirin'"));

    assert!(evaluate("mme", &mme(json!([]))).is_err());
    let params = mme(json!({"medication": "oxycodone"}));
    assert!(evaluate("mme", &params).is_err());

    let zero = mme(json!([{"medication": "oxycodone", "dose": 0, "frequency_per_day": 2}]));
    assert!(evaluate("mme", &zero).is_err());

    let extra = mme(json!([
        {"medication": "oxycodone", "dose": 5, "frequency_per_day": 2, "notes": "x"}
    ]));
    assert!(evaluate("mme", &extra).is_err());
}

const EASI_REGIONS: &[&str] = &["head_neck", "upper_extremities", "trunk", "lower_extremities"];
const EASI_ITEMS: &[&str] = &["area", "erythema", "edema", "excoriation", "lichenification"];

fn easi(age: &str) -> Params {
    let mut params = Params::new().with("age_category", age);
    for region in EASI_REGIONS {
        for item in EASI_ITEMS {
            params.insert(&format!("{region}_{item}"), 0);
        }
    }
    params
}

#[test]
fn easi_clear_skin() {
    let a = evaluate("easi", &easi("adult_8_plus")).unwrap();
    assert_eq!(a.result, ScoreValue::Decimal(0.0));
    assert_eq!(a.stage, "Clear");
}

#[test]
fn easi_regional_score() {
    let params = easi("adult_8_plus")
        .with("trunk_area", 2)
        .with("trunk_erythema", 2)
        .with("trunk_edema", 1)
        .with("trunk_excoriation", 1);
    let a = evaluate("easi", &params).unwrap();
    assert_eq!(a.result, ScoreValue::Decimal(2.4));
    assert_eq!(a.stage, "Mild");
    assert_eq!(a.detail("regional_scores").unwrap()["trunk"], json!(2.4));
}

#[test]
fn easi_child_head_counts_double() {
    let head = |age: &str| {
        easi(age)
            .with("head_neck_area", 6)
            .with("head_neck_erythema", 3)
            .with("head_neck_edema", 3)
            .with("head_neck_excoriation", 3)
            .with("head_neck_lichenification", 3)
    };
    let adult = evaluate("easi", &head("adult_8_plus")).unwrap();
    let child = evaluate("easi", &head("child_0_7")).unwrap();
    assert_eq!(adult.result, ScoreValue::Decimal(7.2));
    assert_eq!(child.result, ScoreValue::Decimal(14.4));
    assert_eq!(child.stage, "Moderate");
}

#[test]
fn easi_rejects_area_grade_above_six() {
    let params = easi("child_0_7").with("trunk_area", 7);
    let err = evaluate("easi", &params).unwrap_err();
    assert!(err.to_string().contains("'trunk_area'"));
}

proptest! {
    #[test]
    fn easi_stays_within_zero_to_72(area in 0i64..=6, sign in 0i64..=3) {
        let mut params = easi("adult_8_plus");
        for region in EASI_REGIONS {
            params.insert(&format!("{region}_area"), area);
            for item in &EASI_ITEMS[1..] {
                params.insert(&format!("{region}_{item}"), sign);
            }
        }
        let a = evaluate("easi", &params).unwrap();
        let value = a.result.as_f64().unwrap();
        prop_assert!((0.0..=72.0).contains(&value));
    }
}
