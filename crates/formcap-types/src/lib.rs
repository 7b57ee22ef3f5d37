mod error;
mod form;
mod record;

pub use error::{Error, Result};
pub use form::{FieldDescriptor, FieldKind, FormDescriptor, FormEntry, FormTheme};
pub use record::{FieldValue, SubmittedRecord};
