use anyhow::Result;
use formcap_store::FeedbackStore;

use crate::formatters;

pub const DEFAULT_RECENT_LIMIT: usize = 10;

pub fn handle(store: &FeedbackStore, limit: usize) -> Result<()> {
    print_recent(store, limit);
    Ok(())
}

/// Print the most recent records, oldest first. Shared between the
/// standalone listing and the post-submit refresh.
pub fn print_recent(store: &FeedbackStore, limit: usize) {
    let records = store.recent(limit);
    if records.is_empty() {
        println!("No feedback yet");
        return;
    }

    println!("Recent feedback ({} of {}):", records.len(), store.count());
    for record in records {
        let name = match record.display_value("name") {
            name if name.is_empty() => "Anonymous".to_string(),
            name => name,
        };

        let mut line = format!(
            "[{}] {}",
            formatters::format_timestamp(&record.timestamp),
            name
        );
        let message = record.display_value("message");
        if !message.is_empty() {
            line.push_str(" - ");
            line.push_str(&formatters::truncate(&message, 100));
        }
        println!("{}", line);
    }
}
