use anyhow::Result;
use formcap_registry::FormRegistry;

use crate::ui;

pub fn handle(registry: &FormRegistry, form_id: &str) -> Result<()> {
    if registry.remove(form_id)? {
        ui::success(&format!("Removed form '{}'", form_id));
    } else {
        ui::warning(&format!(
            "form '{}' is not imported; nothing to remove",
            form_id
        ));
    }
    Ok(())
}
