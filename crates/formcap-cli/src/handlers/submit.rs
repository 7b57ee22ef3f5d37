use anyhow::{Context, Result, bail};
use formcap_registry::FormRegistry;
use formcap_runtime::{FormSource, ops::SubmitService, resolve_form};
use formcap_store::FeedbackStore;
use std::fs;
use std::path::Path;

use super::feedback_list;
use crate::ui;

pub fn handle(
    registry: &FormRegistry,
    store: &FeedbackStore,
    source: &dyn FormSource,
    form_id: &str,
    fields: &[String],
    input: Option<&Path>,
) -> Result<()> {
    let form = resolve_form(registry, source, form_id)?;

    let mut answers = Vec::new();
    if let Some(path) = input {
        answers.extend(read_answer_file(path)?);
    }
    for field in fields {
        let Some((key, value)) = field.split_once('=') else {
            bail!("Invalid --field '{}': expected ID=VALUE", field);
        };
        answers.push((key.to_string(), value.to_string()));
    }

    let service = SubmitService::new(store);
    service.submit(&form, &answers)?;

    ui::success("Feedback saved");
    println!();
    feedback_list::print_recent(store, feedback_list::DEFAULT_RECENT_LIMIT);

    Ok(())
}

/// Answers from a JSON file: an object mapping field ids to a string or an
/// array of strings (the multi-valued checkbox case).
fn read_answer_file(path: &Path) -> Result<Vec<(String, String)>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read answers: {}", path.display()))?;
    let map: serde_json::Map<String, serde_json::Value> = serde_json::from_str(&content)
        .with_context(|| format!("Answers file is not a JSON object: {}", path.display()))?;

    let mut answers = Vec::new();
    for (key, value) in map {
        match value {
            serde_json::Value::String(s) => answers.push((key, s)),
            serde_json::Value::Array(items) => {
                for item in items {
                    match item {
                        serde_json::Value::String(s) => answers.push((key.clone(), s)),
                        other => bail!("Answer '{}' contains a non-string entry: {}", key, other),
                    }
                }
            }
            other => bail!(
                "Answer '{}' must be a string or an array of strings, got: {}",
                key,
                other
            ),
        }
    }

    Ok(answers)
}
