use anyhow::Result;
use formcap_registry::FormRegistry;
use formcap_render::render_document;
use formcap_runtime::{FormSource, resolve_form};
use std::fs;
use std::path::PathBuf;

use crate::ui;

pub fn handle(
    registry: &FormRegistry,
    source: &dyn FormSource,
    form_id: &str,
    output: Option<PathBuf>,
) -> Result<()> {
    let form = resolve_form(registry, source, form_id)?;
    let page = render_document(&form);

    let output_path = output.unwrap_or_else(|| PathBuf::from(format!("{}.html", form_id)));
    fs::write(&output_path, page)?;

    ui::success(&format!(
        "Rendered form '{}' to {}",
        form.id,
        output_path.display()
    ));
    Ok(())
}
