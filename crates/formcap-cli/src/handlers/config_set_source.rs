use anyhow::{Result, bail};
use formcap_runtime::Config;
use std::path::{Path, PathBuf};

use crate::ui;

pub fn handle(
    mut config: Config,
    data_dir: &Path,
    base_url: Option<String>,
    forms_dir: Option<PathBuf>,
) -> Result<()> {
    if base_url.is_none() && forms_dir.is_none() {
        bail!("Provide --base-url or --forms-dir");
    }

    config.source.base_url = base_url;
    config.source.forms_dir = forms_dir;
    config.save_to(&data_dir.join("config.toml"))?;

    ui::success("Form source updated");
    Ok(())
}
