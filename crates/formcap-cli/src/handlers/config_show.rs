use anyhow::Result;
use formcap_runtime::{Config, source_from_config};
use std::path::Path;

pub fn handle(config: &Config, data_dir: &Path) -> Result<()> {
    println!("Data directory: {}", data_dir.display());

    let source = source_from_config(config, data_dir);
    let kind = if config.source.base_url.is_some() {
        "http"
    } else if config.source.forms_dir.is_some() {
        "directory"
    } else {
        "directory (default)"
    };
    println!("Form source:    {} [{}]", source.describe(), kind);

    Ok(())
}
