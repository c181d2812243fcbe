use clinscore_calculators::evaluate;
use clinscore_core::{Params, ScoreValue};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use serde_json::json;

fn cpsss(gaze: &str, loc: &str, commands: &str, arm: &str) -> Params {
    Params::new()
        .with("conjugate_gaze_deviation", gaze)
        .with("level_of_consciousness_questions", loc)
        .with("following_commands", commands)
        .with("arm_holding_ability", arm)
}

#[test]
fn cpsss_gaze_alone_is_high_risk() {
    let params = cpsss("yes", "both_correct", "both_commands", "can_hold");
    let a = evaluate("cpsss", &params).unwrap();
    assert_eq!(a.result, ScoreValue::Integer(2));
    assert_eq!(a.stage, "High Risk");
}

#[test]
fn cpsss_maximum() {
    let a = evaluate(
        "cpsss",
        &cpsss("yes", "neither_correct", "neither_command", "cannot_hold"),
    )
    .unwrap();
    assert_eq!(a.result, ScoreValue::Integer(7));
}

#[test]
fn cpsss_single_deficit_is_low_risk() {
    let params = cpsss("no", "both_correct", "both_commands", "cannot_hold");
    let a = evaluate("cpsss", &params).unwrap();
    assert_eq!(a.result, ScoreValue::Integer(1));
    assert_eq!(a.stage, "Low Risk");
}

fn moca(education: &str) -> Params {
    Params::new()
        .with("visuospatial_executive", 4)
        .with("naming", 3)
        .with("memory_registration", 5)
        .with("attention", 5)
        .with("language", 2)
        .with("abstraction", 2)
        .with("delayed_recall", 3)
        .with("orientation", 6)
        .with("education_level", education)
}

#[test]
fn moca_education_point_crosses_threshold() {
    let a = evaluate("moca", &moca("12_or_more_years")).unwrap();
    assert_eq!(a.result, ScoreValue::Integer(25));
    assert_eq!(a.stage, "Mild Cognitive Impairment");

    let b = evaluate("moca", &moca("less_than_12_years")).unwrap();
    assert_eq!(b.result, ScoreValue::Integer(26));
    assert_eq!(b.stage, "Normal Cognition");
    assert_eq!(b.detail("raw_score"), Some(&json!(25)));
}

#[test]
fn moca_rejects_domain_above_maximum() {
    let params = moca("12_or_more_years").with("naming", 4);
    let err = evaluate("moca", &params).unwrap_err();
    assert!(err.to_string().contains("naming"));
}

const ESUS: &[&str] = &[
    "stroke_type_non_lacunar",
    "no_significant_atherosclerosis",
    "no_major_cardioembolic_source",
    "no_other_specific_cause",
    "adequate_cardiac_monitoring",
    "adequate_vascular_imaging",
    "adequate_cardiac_imaging",
];

fn esus() -> Params {
    ESUS.iter().fold(Params::new(), |p, f| p.with(f, "yes"))
}

#[test]
fn esus_all_criteria_met() {
    let a = evaluate("esus_criteria", &esus()).unwrap();
    assert_eq!(a.result.as_label(), Some("esus_confirmed"));
}

#[test]
fn esus_incomplete_workup_takes_precedence() {
    let params = esus()
        .with("adequate_cardiac_imaging", "no")
        .with("no_other_specific_cause", "no");
    let a = evaluate("esus_criteria", &params).unwrap();
    assert_eq!(a.result.as_label(), Some("inadequate_evaluation"));
    assert_eq!(a.detail("workup_incomplete"), Some(&json!(["cardiac imaging"])));
}

#[test]
fn esus_clinical_criterion_unmet() {
    let params = esus().with("stroke_type_non_lacunar", "no");
    let a = evaluate("esus_criteria", &params).unwrap();
    assert_eq!(a.result.as_label(), Some("esus_not_met"));
}

proptest! {
    #[test]
    fn moca_never_exceeds_thirty(
        vis in 0i64..=5, naming in 0i64..=3, attention in 0i64..=6, language in 0i64..=3,
        abstraction in 0i64..=2, recall in 0i64..=5, orientation in 0i64..=6,
    ) {
        let params = Params::new()
            .with("visuospatial_executive", vis)
            .with("naming", naming)
            .with("memory_registration", 0)
            .with("attention", attention)
            .with("language", language)
            .with("abstraction", abstraction)
            .with("delayed_recall", recall)
            .with("orientation", orientation)
            .with("education_level", "less_than_12_years");
        let score = evaluate("moca", &params).unwrap().result.as_i64().unwrap();
        prop_assert!(score <= 30);
    }
}

const EDSS_SYSTEMS: [&str; 7] = [
    "pyramidal",
    "cerebellar",
    "brainstem",
    "sensory",
    "bowel_bladder",
    "visual",
    "cerebral",
];

fn edss(grades: [i64; 7], ambulation: i64) -> Params {
    let mut params = Params::new().with("ambulation", ambulation);
    for (field, grade) in EDSS_SYSTEMS.into_iter().zip(grades) {
        params.insert(field, grade);
    }
    params
}

#[test]
fn edss_low_steps_follow_functional_systems() {
    let a = evaluate("edss", &edss([0; 7], 0)).unwrap();
    assert_eq!(a.result, ScoreValue::Decimal(0.0));
    assert_eq!(a.stage, "Normal");

    let a = evaluate("edss", &edss([1, 0, 0, 0, 0, 0, 0], 0)).unwrap();
    assert_eq!(a.result, ScoreValue::Decimal(1.0));
    let a = evaluate("edss", &edss([1, 1, 0, 0, 0, 0, 0], 0)).unwrap();
    assert_eq!(a.result, ScoreValue::Decimal(1.5));

    let a = evaluate("edss", &edss([2, 0, 0, 0, 0, 0, 0], 0)).unwrap();
    assert_eq!(a.result, ScoreValue::Decimal(2.0));
    assert_eq!(a.stage, "Mild Disability");
    let a = evaluate("edss", &edss([2, 2, 0, 0, 0, 0, 0], 0)).unwrap();
    assert_eq!(a.result, ScoreValue::Decimal(2.5));

    let a = evaluate("edss", &edss([3, 0, 0, 0, 0, 0, 0], 0)).unwrap();
    assert_eq!(a.result, ScoreValue::Decimal(3.0));
    assert_eq!(a.stage, "Moderate Disability");
}

#[test]
fn edss_grade_four_and_five_grade_twos() {
    let a = evaluate("edss", &edss([4, 0, 0, 0, 0, 0, 0], 0)).unwrap();
    assert_eq!(a.result, ScoreValue::Decimal(4.0));
    let a = evaluate("edss", &edss([4, 0, 0, 0, 0, 0, 0], 4)).unwrap();
    assert_eq!(a.result, ScoreValue::Decimal(4.5));

    let a = evaluate("edss", &edss([2, 2, 2, 2, 2, 0, 0], 0)).unwrap();
    assert_eq!(a.result, ScoreValue::Decimal(5.0));

    // Visual grade 6 converts to 4.
    let a = evaluate("edss", &edss([0, 0, 0, 0, 0, 6, 0], 0)).unwrap();
    assert_eq!(a.result, ScoreValue::Decimal(4.0));
}

#[test]
fn edss_ambulation_steps() {
    let a = evaluate("edss", &edss([3, 0, 0, 0, 0, 0, 0], 6)).unwrap();
    assert_eq!(a.result, ScoreValue::Decimal(6.0));
    assert_eq!(a.stage, "Assistance Required");
    let a = evaluate("edss", &edss([4, 0, 0, 0, 0, 0, 0], 6)).unwrap();
    assert_eq!(a.result, ScoreValue::Decimal(6.5));

    let a = evaluate("edss", &edss([4, 0, 0, 0, 0, 0, 0], 7)).unwrap();
    assert_eq!(a.result, ScoreValue::Decimal(7.0));
    let a = evaluate("edss", &edss([5, 0, 0, 0, 0, 0, 0], 7)).unwrap();
    assert_eq!(a.result, ScoreValue::Decimal(7.5));

    let a = evaluate("edss", &edss([5, 0, 0, 0, 0, 0, 0], 10)).unwrap();
    assert_eq!(a.result, ScoreValue::Decimal(10.0));
    assert_eq!(a.stage, "Death due to MS");
}

#[test]
fn edss_rejects_grades_above_system_maximum() {
    assert!(evaluate("edss", &edss([7, 0, 0, 0, 0, 0, 0], 0)).is_err());
    assert!(evaluate("edss", &edss([0, 6, 0, 0, 0, 0, 0], 0)).is_err());
    assert!(evaluate("edss", &edss([0; 7], 11)).is_err());
}

fn mnihss() -> Params {
    Params::new()
        .with("orientation_questions", "both_correct")
        .with("commands", "both_correct")
        .with("horizontal_eye_movements", "normal")
        .with("visual_fields", "no_visual_loss")
        .with("left_arm_motor", "no_drift")
        .with("right_arm_motor", "no_drift")
        .with("left_leg_motor", "no_drift")
        .with("right_leg_motor", "no_drift")
        .with("sensation", "normal_no_sensory_loss")
        .with("language_aphasia", "normal_no_aphasia")
        .with("extinction_neglect", "normal")
}

#[test]
fn mnihss_minor_to_moderate_edge() {
    let a = evaluate("modified_nihss", &mnihss()).unwrap();
    assert_eq!(a.result, ScoreValue::Integer(0));
    assert_eq!(a.stage, "Minor Stroke");

    let params = mnihss()
        .with("left_arm_motor", "falls_before_10_seconds")
        .with("left_leg_motor", "falls_before_10_seconds");
    let a = evaluate("modified_nihss", &params).unwrap();
    assert_eq!(a.result, ScoreValue::Integer(4));
    assert_eq!(a.stage, "Minor Stroke");

    let params = params.with("sensation", "abnormal_sensory_loss");
    let a = evaluate("modified_nihss", &params).unwrap();
    assert_eq!(a.result, ScoreValue::Integer(5));
    assert_eq!(a.stage, "Moderate Stroke");
}

#[test]
fn mnihss_maximum_is_31() {
    let mut params = Params::new()
        .with("orientation_questions", "zero_correct")
        .with("commands", "zero_correct")
        .with("horizontal_eye_movements", "total_gaze_palsy")
        .with("visual_fields", "bilateral_hemianopia")
        .with("sensation", "abnormal_sensory_loss")
        .with("language_aphasia", "mute_global_aphasia")
        .with("extinction_neglect", "severe");
    for limb in ["left_arm_motor", "right_arm_motor", "left_leg_motor", "right_leg_motor"] {
        params.insert(limb, "no_movement");
    }
    let a = evaluate("modified_nihss", &params).unwrap();
    assert_eq!(a.result, ScoreValue::Integer(31));
    assert_eq!(a.stage, "Severe Stroke");

    let params = mnihss().with("left_arm_motor", "drift");
    assert!(evaluate("modified_nihss", &params).is_err());
}

fn rankin() -> Params {
    Params::new()
        .with("symptoms_bothering", "no")
        .with("same_work", "yes")
        .with("keep_hobbies", "yes")
        .with("maintain_social_ties", "yes")
        .with("need_help_basic_tasks", "no")
        .with("need_help_shopping_travel", "no")
        .with("need_help_walking", "no")
        .with("need_help_personal_care", "no")
        .with("bedridden_nursing_care", "no")
}

#[test]
fn rankin_walks_down_from_most_severe_answer() {
    let a = evaluate("modified_rankin_9q", &rankin()).unwrap();
    assert_eq!(a.result, ScoreValue::Integer(0));
    assert_eq!(a.stage, "No Symptoms");

    let cases = [
        (rankin().with("symptoms_bothering", "yes"), 1),
        (rankin().with("keep_hobbies", "no"), 2),
        (rankin().with("need_help_shopping_travel", "yes"), 3),
        (rankin().with("need_help_walking", "yes"), 4),
        (rankin().with("need_help_walking", "yes").with("bedridden_nursing_care", "yes"), 5),
    ];
    for (params, grade) in cases {
        let a = evaluate("modified_rankin_9q", &params).unwrap();
        assert_eq!(a.result, ScoreValue::Integer(grade));
    }
}

fn tis() -> Params {
    Params::new()
        .with("static_item_1", "yes")
        .with("static_item_2", "maintains_position")
        .with("static_item_3", "crosses_without_displacement")
        .with("dynamic_item_1", "moves_actively_and_touches")
        .with("dynamic_item_2", "appropriate_shortening")
        .with("dynamic_item_3", "moves_without_compensation")
        .with("dynamic_item_4", "moves_actively_and_touches")
        .with("dynamic_item_5", "appropriate_shortening")
        .with("dynamic_item_6", "moves_without_compensation")
        .with("dynamic_item_7", "appropriate_shortening")
        .with("dynamic_item_8", "moves_without_compensation")
        .with("dynamic_item_9", "appropriate_shortening")
        .with("dynamic_item_10", "moves_without_compensation")
        .with("coordination_item_1", "symmetrical_rotation")
        .with("coordination_item_2", "symmetrical_rotation")
        .with("coordination_item_3", "symmetrical_rotation")
        .with("coordination_item_4", "symmetrical_rotation")
}

#[test]
fn tis_full_marks() {
    let a = evaluate("trunk_impairment_scale", &tis()).unwrap();
    assert_eq!(a.result, ScoreValue::Integer(23));
    assert_eq!(a.stage, "Normal/Near Normal");
    assert_eq!(a.detail("static_sitting_balance"), Some(&json!(7)));
    assert_eq!(a.detail("dynamic_sitting_balance"), Some(&json!(10)));
    assert_eq!(a.detail("coordination"), Some(&json!(6)));
}

#[test]
fn tis_failed_item_skips_rest_of_chain() {
    let params = tis().with("dynamic_item_1", "falls_needs_support_or_no_touch");
    let a = evaluate("trunk_impairment_scale", &params).unwrap();
    assert_eq!(a.result, ScoreValue::Integer(20));
    assert_eq!(a.detail("dynamic_sitting_balance"), Some(&json!(7)));

    let params = params.with("coordination_item_1", "hemiplegic_not_moved_3x");
    let a = evaluate("trunk_impairment_scale", &params).unwrap();
    assert_eq!(a.result, ScoreValue::Integer(17));
    assert_eq!(a.stage, "Mild Impairment");
}

#[test]
fn tis_stops_when_sitting_position_is_lost() {
    let params = tis().with("static_item_1", "no");
    let a = evaluate("trunk_impairment_scale", &params).unwrap();
    assert_eq!(a.result, ScoreValue::Integer(0));
    assert_eq!(a.stage_description, "Unable to maintain starting position");
}

fn impact(model: &str) -> Params {
    Params::new()
        .with("age", 40)
        .with("motor_score", "abnormal_flexion")
        .with("pupillary_reactivity", "one_reactive")
        .with("model_type", model)
        .with("hypoxia", "yes")
        .with("hypotension", "no")
        .with("marshall_ct_classification", "diffuse_injury_iii")
        .with("traumatic_sah", "yes")
        .with("epidural_hematoma", "no")
        .with("glucose", 200)
        .with("hemoglobin", 12.0)
}

#[test]
fn impact_core_model() {
    let params = Params::new()
        .with("age", 40)
        .with("motor_score", "abnormal_flexion")
        .with("pupillary_reactivity", "one_reactive")
        .with("model_type", "core");
    let a = evaluate("impact_score", &params).unwrap();
    assert_eq!(a.result, ScoreValue::Decimal(20.8));
    assert_eq!(a.stage, "Low Risk");
    assert_eq!(a.detail("unfavorable_outcome_probability"), Some(&json!(33.2)));
    assert_eq!(a.detail("model_used"), Some(&json!("CORE")));
}

#[test]
fn impact_extended_adds_ct_findings() {
    let a = evaluate("impact_score", &impact("extended")).unwrap();
    assert_eq!(a.result, ScoreValue::Decimal(31.9));
    assert_eq!(a.stage, "Moderate Risk");
    assert_eq!(a.detail("unfavorable_outcome_probability"), Some(&json!(47.8)));
}

#[test]
fn impact_lab_model() {
    let a = evaluate("impact_score", &impact("lab")).unwrap();
    assert_eq!(a.result, ScoreValue::Decimal(18.1));
    assert_eq!(a.detail("unfavorable_outcome_probability"), Some(&json!(25.3)));
    assert_eq!(a.detail("model_used"), Some(&json!("LAB")));
}

#[test]
fn impact_unfavorable_outcome_caps_at_95() {
    let params = Params::new()
        .with("age", 80)
        .with("motor_score", "no_motor_response")
        .with("pupillary_reactivity", "both_nonreactive")
        .with("model_type", "core");
    let a = evaluate("impact_score", &params).unwrap();
    assert_eq!(a.result, ScoreValue::Decimal(77.2));
    assert_eq!(a.stage, "Very High Risk");
    assert_eq!(a.detail("unfavorable_outcome_probability"), Some(&json!(95.0)));
}

#[test]
fn impact_lab_model_requires_glucose() {
    let mut params = impact("lab");
    params.remove("glucose");
    let err = evaluate("impact_score", &params).unwrap_err();
    assert!(err.to_string().contains("'glucose'"));
}

fn mcdonald(attacks: &str, evidence: &str) -> Params {
    Params::new()
        .with("clinical_attacks", attacks)
        .with("objective_clinical_evidence", evidence)
        .with("dissemination_in_space", "not_demonstrated")
        .with("dissemination_in_time", "not_demonstrated")
        .with("csf_oligoclonal_bands", "not_tested")
        .with("alternative_diagnosis", "excluded")
}

#[test]
fn mcdonald_two_attacks_two_lesions() {
    let a = evaluate(
        "mcdonald_criteria_multiple_sclerosis_2017_revision",
        &mcdonald("2_or_more", "2_or_more"),
    )
    .unwrap();
    assert_eq!(a.result, ScoreValue::Label("MS Diagnosed".to_string()));
    assert_eq!(a.detail("missing_criteria"), Some(&json!([])));
}

#[test]
fn mcdonald_oligoclonal_bands_substitute_for_dit() {
    let params = mcdonald("1", "1")
        .with("dissemination_in_space", "demonstrated")
        .with("csf_oligoclonal_bands", "present");
    let a = evaluate("mcdonald_criteria_multiple_sclerosis_2017_revision", &params).unwrap();
    assert_eq!(a.stage, "MS Diagnosed");
    assert_eq!(a.detail("dit_substituted_by_csf"), Some(&json!(true)));
}

#[test]
fn mcdonald_single_attack_lists_missing_dissemination() {
    let a = evaluate(
        "mcdonald_criteria_multiple_sclerosis_2017_revision",
        &mcdonald("1", "1").with("csf_oligoclonal_bands", "present"),
    )
    .unwrap();
    assert_eq!(a.stage, "Possible MS");
    assert_eq!(a.detail("missing_criteria"), Some(&json!(["DIS", "DIT"])));
    assert!(a.interpretation.contains("(missing DIS, DIT)"));
}

#[test]
fn mcdonald_unexcluded_alternative_overrides() {
    let params = mcdonald("2_or_more", "2_or_more").with("alternative_diagnosis", "possible");
    let a = evaluate("mcdonald_criteria_multiple_sclerosis_2017_revision", &params).unwrap();
    assert_eq!(a.stage, "MS Not Diagnosed");
}

#[test]
fn mcdonald_no_attacks_is_insufficient() {
    let a = evaluate(
        "mcdonald_criteria_multiple_sclerosis_2017_revision",
        &mcdonald("0", "2_or_more"),
    )
    .unwrap();
    assert_eq!(a.stage, "Possible MS");
}
