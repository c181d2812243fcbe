pub mod bush_francis_catatonia;
pub mod ciwa_ar;
pub mod comm;
pub mod coronavirus_anxiety_scale;
pub mod cows;
pub mod epds;
pub mod gds_15;
pub mod major_depression_inventory;
pub mod qids_sr16;
pub mod wast;
