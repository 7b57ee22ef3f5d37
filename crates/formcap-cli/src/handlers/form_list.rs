use anyhow::Result;
use formcap_registry::FormRegistry;

pub fn handle(registry: &FormRegistry, imported_only: bool) -> Result<()> {
    if imported_only {
        return print_imported(registry);
    }

    let entries = registry.list();

    println!("{:<16} {:<28} SOURCE", "ID", "NAME");
    println!("{}", "-".repeat(56));
    for entry in entries {
        println!(
            "{:<16} {:<28} {}",
            entry.id,
            entry.name,
            if entry.is_imported {
                "imported"
            } else {
                "built-in"
            }
        );
    }

    Ok(())
}

fn print_imported(registry: &FormRegistry) -> Result<()> {
    let summaries = registry.imported();
    if summaries.is_empty() {
        println!("No imported forms");
        return Ok(());
    }

    println!("{:<16} {:<28} FIELDS", "ID", "TITLE");
    println!("{}", "-".repeat(52));
    for summary in summaries {
        println!(
            "{:<16} {:<28} {}",
            summary.id, summary.title, summary.field_count
        );
    }

    Ok(())
}
