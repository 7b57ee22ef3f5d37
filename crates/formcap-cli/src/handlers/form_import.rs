use anyhow::{Result, anyhow};
use formcap_registry::FormRegistry;
use std::path::Path;

use crate::ui;

pub fn handle(registry: &FormRegistry, path: &Path) -> Result<()> {
    let form = registry
        .import_file(path)
        .map_err(|err| anyhow!("Form import failed: {}", err))?;

    ui::success(&format!("Imported form '{}' ({})", form.title, form.id));
    Ok(())
}
