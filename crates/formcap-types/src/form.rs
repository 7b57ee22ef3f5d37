use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Field kind, tagged by the descriptor's `type` key.
///
/// Option-bearing kinds carry their choices directly, so a rating or select
/// field without options cannot be represented. A descriptor with a `type`
/// value outside the recognized set parses as `Unknown` and is skipped by
/// the renderer and the submit pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum FieldKind {
    Text,
    Email,
    Textarea,
    Rating { options: Vec<String> },
    Select { options: Vec<String> },
    Radio { options: Vec<String> },
    Checkbox { options: Vec<String> },
    #[serde(other)]
    Unknown,
}

impl FieldKind {
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldKind::Text => "text",
            FieldKind::Email => "email",
            FieldKind::Textarea => "textarea",
            FieldKind::Rating { .. } => "rating",
            FieldKind::Select { .. } => "select",
            FieldKind::Radio { .. } => "radio",
            FieldKind::Checkbox { .. } => "checkbox",
            FieldKind::Unknown => "unknown",
        }
    }

    pub fn options(&self) -> Option<&[String]> {
        match self {
            FieldKind::Rating { options }
            | FieldKind::Select { options }
            | FieldKind::Radio { options }
            | FieldKind::Checkbox { options } => Some(options),
            _ => None,
        }
    }

    /// Whether a `required` flag on this kind participates in submit
    /// validation. Checkbox groups never block submission, and unknown
    /// kinds produce no input to fill in.
    pub fn enforces_required(&self) -> bool {
        !matches!(self, FieldKind::Checkbox { .. } | FieldKind::Unknown)
    }
}

/// One entry in a form descriptor describing a single input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(flatten)]
    pub kind: FieldKind,
}

/// Presentation channels for a rendered form. Missing channels fall back to
/// the renderer's defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormTheme {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accent_color: Option<String>,
}

/// Declarative description of a form: identity, fields in render order, and
/// an optional theme. The `id` is the registry key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormDescriptor {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub fields: Vec<FieldDescriptor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<FormTheme>,
}

impl FormDescriptor {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn field(&self, id: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.id == id)
    }
}

/// Lightweight registry index entry, distinct from the descriptor itself.
/// Lets listings avoid loading full form bodies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormEntry {
    pub id: String,
    pub name: String,
    pub is_imported: bool,
}
