use formcap_types::FormDescriptor;

use crate::escape::escape_html;
use crate::field::render_field;
use crate::theme::theme_css;

/// Compose the rendered fields and the submit control into a complete form
/// fragment. Field order in the descriptor is render order.
pub fn render_form(form: &FormDescriptor) -> String {
    let mut markup = String::from("<form id=\"dynamicForm\" class=\"dynamic-form\">\n");
    for field in &form.fields {
        markup.push_str(&render_field(field));
    }
    markup.push_str(
        "<button type=\"submit\" id=\"submitBtn\" class=\"submit-btn\">\n  \
         <span class=\"btn-text\">Save feedback</span>\n  \
         <span class=\"btn-loading\">Saving...</span>\n</button>\n",
    );
    markup.push_str("</form>\n");
    markup
}

/// Render a complete standalone HTML document: theme variables, title,
/// optional description, and the form fragment.
pub fn render_document(form: &FormDescriptor) -> String {
    let title = escape_html(&form.title);
    let mut page = String::from("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    page.push_str("<meta charset=\"utf-8\">\n");
    page.push_str(&format!("<title>{}</title>\n", title));
    page.push_str("<style>\n");
    page.push_str(&theme_css(form.theme.as_ref()));
    page.push_str("</style>\n</head>\n<body>\n");
    page.push_str(&format!("<h1>{}</h1>\n", title));
    if let Some(description) = &form.description {
        page.push_str(&format!("<p>{}</p>\n", escape_html(description)));
    }
    page.push_str(&render_form(form));
    page.push_str("</body>\n</html>\n");
    page
}

#[cfg(test)]
mod tests {
    use super::*;
    use formcap_types::{FieldDescriptor, FieldKind};

    fn sample_form() -> FormDescriptor {
        FormDescriptor {
            id: "default".to_string(),
            title: "Feedback".to_string(),
            description: Some("Tell us what you think".to_string()),
            fields: vec![
                FieldDescriptor {
                    id: "name".to_string(),
                    label: "Name".to_string(),
                    required: true,
                    placeholder: None,
                    kind: FieldKind::Text,
                },
                FieldDescriptor {
                    id: "mystery".to_string(),
                    label: "Mystery".to_string(),
                    required: false,
                    placeholder: None,
                    kind: FieldKind::Unknown,
                },
            ],
            theme: None,
        }
    }

    #[test]
    fn test_render_form_includes_fields_and_submit() {
        let markup = render_form(&sample_form());
        assert!(markup.contains("id=\"dynamicForm\""));
        assert!(markup.contains("id=\"name\""));
        assert!(markup.contains("id=\"submitBtn\""));
        // unknown kinds are skipped, not errored
        assert!(!markup.contains("mystery"));
    }

    #[test]
    fn test_render_document_is_standalone() {
        let page = render_document(&sample_form());
        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains("<title>Feedback</title>"));
        assert!(page.contains("Tell us what you think"));
        assert!(page.contains("--primary-color"));
        assert!(page.contains("</html>"));
    }
}
