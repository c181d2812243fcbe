pub mod abg_analyzer;
pub mod akin;
pub mod body_fluid_balance;
pub mod ckid_u25_egfr;
pub mod kinetic_egfr;
pub mod ktv_dialysis;
pub mod winters_formula;
