pub mod brue;
pub mod cheops;
pub mod glucose_infusion_rate;
pub mod phoenix_sepsis;
pub mod wat_1;
