pub mod caprini_2005;
pub mod cryoprecipitate_dosing;
pub mod geneva_vte_prophylaxis;
pub mod gipss;
pub mod herdoo2;
pub mod icc_pmf;
pub mod impede_vte;
pub mod isth_bat;
pub mod khorana_score;
pub mod maximum_allowable_blood_loss;
pub mod mipss70;
pub mod reticulocyte_production_index;
pub mod rhd_immune_globulin_dosage;
pub mod vte_bleed;
pub mod wpss_mds;
