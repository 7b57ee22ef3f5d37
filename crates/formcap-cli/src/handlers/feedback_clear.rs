use anyhow::{Context, Result, bail};
use formcap_store::FeedbackStore;

use crate::ui;

pub fn handle(store: &FeedbackStore, yes: bool) -> Result<()> {
    if !yes {
        if !ui::stdin_is_terminal() {
            bail!("Refusing to clear without confirmation; pass --yes");
        }
        if !ui::confirm("Delete ALL feedback? This cannot be undone.")? {
            println!("Aborted");
            return Ok(());
        }
    }

    store.clear().context("Clear failed")?;
    ui::success("All feedback deleted");
    Ok(())
}
