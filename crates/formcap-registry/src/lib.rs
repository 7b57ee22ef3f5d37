mod catalog;
mod error;
mod registry;
mod validate;

pub use catalog::{builtin_entries, builtin_form, default_form};
pub use error::{Error, Result};
pub use registry::{FormRegistry, ImportedFormSummary};
pub use validate::{validate_descriptor, validate_shape};
