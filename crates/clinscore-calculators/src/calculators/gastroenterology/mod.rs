pub mod cdai_crohns;
pub mod child_pugh;
pub mod clif_c_aclf;
pub mod glasgow_blatchford;
pub mod glasgow_imrie;
pub mod i_see;
pub mod kruis_ibs;
pub mod manning_ibs;
pub mod meld_combined;
pub mod montreal_ibd;
pub mod mumtaz_score;
pub mod rome_iv_proctalgia_fugax;
pub mod rome_iv_rumination;
pub mod rome_iv_unspecified_fbd;
pub mod wexner_ods;
