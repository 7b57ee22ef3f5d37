pub mod config;
mod error;
mod loader;
pub mod ops;
mod source;

pub use config::{Config, SourceConfig, resolve_data_dir};
pub use error::{Error, Result};
pub use loader::{DEFAULT_FORM_ID, fallback_form, load, resolve_form};
pub use source::{DirSource, FormSource, HttpSource, source_from_config};
