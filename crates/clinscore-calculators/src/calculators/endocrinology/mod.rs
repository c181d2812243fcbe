pub mod burch_wartofsky;
pub mod dka_mpm;
pub mod myxedema_coma;
