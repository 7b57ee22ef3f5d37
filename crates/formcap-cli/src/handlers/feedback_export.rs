use anyhow::Result;
use formcap_store::FeedbackStore;
use std::fs;
use std::path::PathBuf;

use crate::ui;

pub fn handle(store: &FeedbackStore, output: Option<PathBuf>) -> Result<()> {
    // An empty collection is a valid state, not an error.
    let Some(csv) = store.export_csv()? else {
        println!("No feedback to export");
        return Ok(());
    };

    let output_path = output.unwrap_or_else(|| PathBuf::from("feedback-export.csv"));
    fs::write(&output_path, csv)?;

    ui::success(&format!(
        "Exported {} records to {}",
        store.count(),
        output_path.display()
    ));
    Ok(())
}
