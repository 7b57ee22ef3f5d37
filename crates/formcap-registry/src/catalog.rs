use formcap_types::{FieldDescriptor, FieldKind, FormDescriptor, FormEntry, FormTheme};

#[derive(Debug, Clone)]
struct BuiltinMetadata {
    id: &'static str,
    name: &'static str,
}

const BUILT_INS: &[BuiltinMetadata] = &[BuiltinMetadata {
    id: "default",
    name: "Feedback",
}];

/// Index entries for the built-in forms, in fixed catalog order.
pub fn builtin_entries() -> Vec<FormEntry> {
    BUILT_INS
        .iter()
        .map(|b| FormEntry {
            id: b.id.to_string(),
            name: b.name.to_string(),
            is_imported: false,
        })
        .collect()
}

/// Look up a built-in descriptor by id.
pub fn builtin_form(form_id: &str) -> Option<FormDescriptor> {
    match form_id {
        "default" => Some(default_form()),
        _ => None,
    }
}

fn input_field(
    id: &str,
    label: &str,
    required: bool,
    placeholder: &str,
    kind: FieldKind,
) -> FieldDescriptor {
    FieldDescriptor {
        id: id.to_string(),
        label: label.to_string(),
        required,
        placeholder: Some(placeholder.to_string()),
        kind,
    }
}

fn choice_field(id: &str, label: &str, required: bool, kind: FieldKind) -> FieldDescriptor {
    FieldDescriptor {
        id: id.to_string(),
        label: label.to_string(),
        required,
        placeholder: None,
        kind,
    }
}

/// The stock feedback form shipped with the tool. Its field set is the one
/// the CSV export columns are named after.
pub fn default_form() -> FormDescriptor {
    FormDescriptor {
        id: "default".to_string(),
        title: "Feedback".to_string(),
        description: Some("Standard feedback form".to_string()),
        fields: vec![
            input_field(
                "name",
                "What is your name?",
                true,
                "Enter your name",
                FieldKind::Text,
            ),
            input_field(
                "email",
                "Email address",
                false,
                "you@example.com",
                FieldKind::Email,
            ),
            input_field(
                "message",
                "Your feedback",
                true,
                "Tell us more...",
                FieldKind::Textarea,
            ),
            choice_field(
                "rating",
                "How would you rate us?",
                false,
                FieldKind::Rating {
                    options: vec![
                        "1".to_string(),
                        "2".to_string(),
                        "3".to_string(),
                        "4".to_string(),
                        "5".to_string(),
                    ],
                },
            ),
            choice_field(
                "features",
                "Which features do you use?",
                false,
                FieldKind::Checkbox {
                    options: vec![
                        "Ease of use".to_string(),
                        "Design".to_string(),
                        "Performance".to_string(),
                        "Documentation".to_string(),
                    ],
                },
            ),
        ],
        theme: Some(FormTheme {
            primary_color: Some("#1a73e8".to_string()),
            secondary_color: Some("#f1f3f4".to_string()),
            accent_color: Some("#202124".to_string()),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::validate_descriptor;

    #[test]
    fn test_builtin_entries_fixed_order() {
        let entries = builtin_entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].id, "default");
        assert!(!entries[0].is_imported);
    }

    #[test]
    fn test_default_form_is_valid() {
        let form = default_form();
        validate_descriptor(&form).unwrap();
        assert!(form.field("name").unwrap().required);
        assert!(form.field("message").unwrap().required);
        assert!(!form.field("email").unwrap().required);
    }

    #[test]
    fn test_builtin_lookup() {
        assert!(builtin_form("default").is_some());
        assert!(builtin_form("missing").is_none());
    }
}
