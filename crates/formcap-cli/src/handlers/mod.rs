pub mod config_set_source;
pub mod config_show;
pub mod feedback_clear;
pub mod feedback_export;
pub mod feedback_list;
pub mod form_export;
pub mod form_import;
pub mod form_list;
pub mod form_remove;
pub mod form_render;
pub mod form_show;
pub mod guidance;
pub mod submit;
