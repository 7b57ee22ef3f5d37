mod submit;

pub use submit::{SubmitService, extract_values, validate_answers};
