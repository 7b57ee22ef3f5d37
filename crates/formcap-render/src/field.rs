use formcap_types::{FieldDescriptor, FieldKind};

use crate::escape::escape_html;

/// Render a single field descriptor to a markup fragment.
///
/// Pure and total over every kind: unrecognized kinds yield an empty
/// fragment (silent skip), so one bad field never poisons the rest of the
/// form.
pub fn render_field(field: &FieldDescriptor) -> String {
    match &field.kind {
        FieldKind::Text => text_input(field, "text"),
        FieldKind::Email => text_input(field, "email"),
        FieldKind::Textarea => textarea(field),
        FieldKind::Rating { options } => select(field, options, "Select a rating"),
        FieldKind::Select { options } => select(field, options, "Select an option"),
        FieldKind::Radio { options } => choice_group(field, options, "radio"),
        FieldKind::Checkbox { options } => choice_group(field, options, "checkbox"),
        FieldKind::Unknown => String::new(),
    }
}

fn heading(field: &FieldDescriptor) -> String {
    let marker = if field.required && field.kind.enforces_required() {
        " *"
    } else {
        ""
    };
    format!("  <h3>{}{}</h3>\n", escape_html(&field.label), marker)
}

fn required_attr(field: &FieldDescriptor) -> &'static str {
    if field.required { " required" } else { "" }
}

fn placeholder_attr(field: &FieldDescriptor) -> String {
    escape_html(field.placeholder.as_deref().unwrap_or(""))
}

fn text_input(field: &FieldDescriptor, input_type: &str) -> String {
    let id = escape_html(&field.id);
    let mut markup = String::from("<div class=\"question\">\n");
    markup.push_str(&heading(field));
    markup.push_str(&format!(
        "  <input type=\"{}\" id=\"{}\" name=\"{}\"{} placeholder=\"{}\">\n",
        input_type,
        id,
        id,
        required_attr(field),
        placeholder_attr(field),
    ));
    markup.push_str("</div>\n");
    markup
}

fn textarea(field: &FieldDescriptor) -> String {
    let id = escape_html(&field.id);
    let mut markup = String::from("<div class=\"question\">\n");
    markup.push_str(&heading(field));
    markup.push_str(&format!(
        "  <textarea id=\"{}\" name=\"{}\"{} placeholder=\"{}\" rows=\"4\"></textarea>\n",
        id,
        id,
        required_attr(field),
        placeholder_attr(field),
    ));
    markup.push_str("</div>\n");
    markup
}

fn select(field: &FieldDescriptor, options: &[String], prompt: &str) -> String {
    let id = escape_html(&field.id);
    let mut markup = String::from("<div class=\"question\">\n");
    markup.push_str(&heading(field));
    markup.push_str(&format!(
        "  <select id=\"{}\" name=\"{}\"{}>\n",
        id,
        id,
        required_attr(field),
    ));
    markup.push_str(&format!("    <option value=\"\">{}</option>\n", prompt));
    for option in options {
        let option = escape_html(option);
        markup.push_str(&format!(
            "    <option value=\"{}\">{}</option>\n",
            option, option
        ));
    }
    markup.push_str("  </select>\n</div>\n");
    markup
}

fn choice_group(field: &FieldDescriptor, options: &[String], input_type: &str) -> String {
    let name = escape_html(&field.id);
    // Checkbox inputs never carry the required attribute: ticking none is a
    // valid submission for a multi-select group.
    let required = if input_type == "radio" {
        required_attr(field)
    } else {
        ""
    };

    let mut markup = String::from("<div class=\"question\">\n");
    markup.push_str(&heading(field));
    markup.push_str(&format!("  <div class=\"{}-group\">\n", input_type));
    for option in options {
        let option = escape_html(option);
        markup.push_str(&format!("    <label class=\"{}-option\">\n", input_type));
        markup.push_str(&format!(
            "      <input type=\"{}\" name=\"{}\" value=\"{}\"{}>\n",
            input_type, name, option, required
        ));
        markup.push_str(&format!(
            "      <span class=\"{}-custom\"></span>\n",
            input_type
        ));
        markup.push_str(&format!("      <span>{}</span>\n", option));
        markup.push_str("    </label>\n");
    }
    markup.push_str("  </div>\n</div>\n");
    markup
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(id: &str, label: &str, required: bool, kind: FieldKind) -> FieldDescriptor {
        FieldDescriptor {
            id: id.to_string(),
            label: label.to_string(),
            required,
            placeholder: None,
            kind,
        }
    }

    #[test]
    fn test_text_input_contains_id_and_label() {
        let markup = render_field(&field("name", "Your name", true, FieldKind::Text));
        assert!(markup.contains("id=\"name\""));
        assert!(markup.contains("name=\"name\""));
        assert!(markup.contains("<h3>Your name *</h3>"));
        assert!(markup.contains(" required"));
        assert!(markup.contains("type=\"text\""));
    }

    #[test]
    fn test_optional_field_has_no_marker() {
        let markup = render_field(&field("email", "Email", false, FieldKind::Email));
        assert!(markup.contains("<h3>Email</h3>"));
        assert!(!markup.contains(" required"));
        assert!(markup.contains("type=\"email\""));
    }

    #[test]
    fn test_textarea_has_rows() {
        let mut f = field("message", "Message", true, FieldKind::Textarea);
        f.placeholder = Some("Tell us more...".to_string());
        let markup = render_field(&f);
        assert!(markup.contains("rows=\"4\""));
        assert!(markup.contains("placeholder=\"Tell us more...\""));
    }

    #[test]
    fn test_rating_renders_prompt_and_options() {
        let kind = FieldKind::Rating {
            options: vec!["1".to_string(), "2".to_string()],
        };
        let markup = render_field(&field("rating", "Rating", true, kind));
        assert!(markup.contains("Select a rating"));
        assert!(markup.contains("<option value=\"1\">1</option>"));
        assert!(markup.contains("<option value=\"2\">2</option>"));
    }

    #[test]
    fn test_radio_group_structure() {
        let kind = FieldKind::Radio {
            options: vec!["Yes".to_string(), "No".to_string()],
        };
        let markup = render_field(&field("again", "Would you return?", true, kind));
        assert!(markup.contains("class=\"radio-group\""));
        assert!(markup.contains("type=\"radio\" name=\"again\" value=\"Yes\" required"));
        assert!(markup.contains("class=\"radio-custom\""));
    }

    #[test]
    fn test_checkbox_group_never_required() {
        let kind = FieldKind::Checkbox {
            options: vec!["Dark mode".to_string()],
        };
        let markup = render_field(&field("features", "Features", true, kind));
        assert!(markup.contains("class=\"checkbox-group\""));
        assert!(!markup.contains("required"));
        // no marker on the heading either
        assert!(markup.contains("<h3>Features</h3>"));
    }

    #[test]
    fn test_unknown_kind_renders_empty() {
        let markup = render_field(&field("mystery", "Mystery", true, FieldKind::Unknown));
        assert!(markup.is_empty());
    }

    #[test]
    fn test_label_is_escaped() {
        let markup = render_field(&field("q", "<script>alert(1)</script>", false, FieldKind::Text));
        assert!(markup.contains("&lt;script&gt;"));
        assert!(!markup.contains("<script>"));
    }
}
