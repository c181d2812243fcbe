pub mod acc_aha_hf_staging;
pub mod cha2ds2_va;
pub mod chads2;
pub mod chads_65;
pub mod crusade_bleeding_risk;
pub mod ehmrg;
pub mod euroscore_ii;
pub mod framingham_risk_score;
pub mod grace_acs_risk;
pub mod gupta_mica;
pub mod gwtg_heart_failure;
pub mod ie_mortality_risk;
pub mod ldl_calculated;
pub mod maggic;
pub mod mean_arterial_pressure;
pub mod score2;
