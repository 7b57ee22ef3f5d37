use formcap_registry::FormRegistry;
use formcap_types::{FieldDescriptor, FieldKind, FormDescriptor};

use crate::error::Result;
use crate::source::FormSource;

pub const DEFAULT_FORM_ID: &str = "default";

/// Load a descriptor by id with the three-tier degrade chain: the
/// requested id, then the source's `default` descriptor, then a hardcoded
/// minimal form. Each tier failure is a non-fatal warning; the final tier
/// cannot fail. No retries within a tier.
pub fn load(source: &dyn FormSource, form_id: &str) -> FormDescriptor {
    match source.fetch(form_id) {
        Ok(form) => form,
        Err(err) => {
            eprintln!(
                "Warning: failed to load form '{}' from {}: {}",
                form_id,
                source.describe(),
                err
            );
            load_default(source)
        }
    }
}

fn load_default(source: &dyn FormSource) -> FormDescriptor {
    match source.fetch(DEFAULT_FORM_ID) {
        Ok(form) => form,
        Err(err) => {
            eprintln!(
                "Warning: failed to load default form from {}: {}",
                source.describe(),
                err
            );
            fallback_form()
        }
    }
}

/// Resolve a form the way the shell does: registry first (imported forms
/// shadow built-ins), then the source fallback chain for ids the registry
/// does not know.
pub fn resolve_form(
    registry: &FormRegistry,
    source: &dyn FormSource,
    form_id: &str,
) -> Result<FormDescriptor> {
    if let Some(form) = registry.get(form_id)? {
        return Ok(form);
    }
    Ok(load(source, form_id))
}

/// The bottom of the degrade chain: a minimal feedback form that exists
/// without any descriptor file.
pub fn fallback_form() -> FormDescriptor {
    FormDescriptor {
        id: DEFAULT_FORM_ID.to_string(),
        title: "Feedback".to_string(),
        description: Some("Standard feedback form".to_string()),
        fields: vec![
            FieldDescriptor {
                id: "name".to_string(),
                label: "What is your name?".to_string(),
                required: true,
                placeholder: Some("Enter your name".to_string()),
                kind: FieldKind::Text,
            },
            FieldDescriptor {
                id: "message".to_string(),
                label: "Your feedback".to_string(),
                required: true,
                placeholder: Some("Tell us more...".to_string()),
                kind: FieldKind::Textarea,
            },
        ],
        theme: None,
    }
}
