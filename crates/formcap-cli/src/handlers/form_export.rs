use anyhow::Result;
use formcap_registry::FormRegistry;
use std::fs;
use std::path::PathBuf;

use crate::ui;

pub fn handle(registry: &FormRegistry, form_id: &str, output: Option<PathBuf>) -> Result<()> {
    let json = registry.export(form_id)?;

    let output_path = output.unwrap_or_else(|| PathBuf::from(format!("{}-form.json", form_id)));
    fs::write(&output_path, json)?;

    ui::success(&format!(
        "Exported form '{}' to {}",
        form_id,
        output_path.display()
    ));
    Ok(())
}
