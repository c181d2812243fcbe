pub mod apache_ii;
pub mod cam_icu;
pub mod cerebral_perfusion_pressure;
pub mod cpot;
pub mod macocha;
pub mod mrc_icu;
