use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use std::collections::HashSet;

use crate::error::{Error, Result};
use formcap_types::FormDescriptor;

// A field id doubles as a DOM attribute and as the submitted-data key, so
// it must be a plain identifier.
static IDENTIFIER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9_-]*$").expect("identifier pattern"));

/// Shape check applied to raw JSON before typed deserialization: a form
/// must carry a non-empty `id`, a non-empty `title`, and an array `fields`.
/// Distinguishes "not a form" (validation) from "not JSON" (parse).
pub fn validate_shape(value: &Value) -> Result<()> {
    let Some(object) = value.as_object() else {
        return Err(Error::Validation("expected a JSON object".to_string()));
    };

    match object.get("id").and_then(Value::as_str) {
        Some(id) if !id.trim().is_empty() => {}
        _ => return Err(Error::Validation("missing non-empty 'id'".to_string())),
    }

    match object.get("title").and_then(Value::as_str) {
        Some(title) if !title.trim().is_empty() => {}
        _ => return Err(Error::Validation("missing non-empty 'title'".to_string())),
    }

    if !object.get("fields").is_some_and(Value::is_array) {
        return Err(Error::Validation("'fields' must be an array".to_string()));
    }

    Ok(())
}

/// Typed-descriptor invariants: form and field ids are valid identifiers,
/// and field ids are unique within the form.
pub fn validate_descriptor(form: &FormDescriptor) -> Result<()> {
    if !IDENTIFIER.is_match(&form.id) {
        return Err(Error::Validation(format!(
            "form id '{}' is not a valid identifier",
            form.id
        )));
    }

    let mut seen = HashSet::new();
    for field in &form.fields {
        if !IDENTIFIER.is_match(&field.id) {
            return Err(Error::Validation(format!(
                "field id '{}' is not a valid identifier",
                field.id
            )));
        }
        if !seen.insert(field.id.as_str()) {
            return Err(Error::Validation(format!(
                "duplicate field id '{}'",
                field.id
            )));
        }
    }

    Ok(())
}
