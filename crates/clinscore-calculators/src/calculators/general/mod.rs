pub mod easi;
pub mod mme;
pub mod snellen_visual_acuity;
pub mod wound_closure_classification;
