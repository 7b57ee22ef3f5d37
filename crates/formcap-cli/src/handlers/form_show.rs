use anyhow::Result;
use formcap_registry::FormRegistry;

pub fn handle(registry: &FormRegistry, form_id: &str) -> Result<()> {
    let Some(form) = registry.get(form_id)? else {
        anyhow::bail!("Form not found: {}", form_id);
    };
    let imported = registry.imported_form(form_id)?.is_some();

    println!("{} ({})", form.title, form.id);
    if let Some(description) = &form.description {
        println!("{}", description);
    }
    println!(
        "Source: {}\n",
        if imported { "imported" } else { "built-in" }
    );

    println!("{:<16} {:<10} {:<9} OPTIONS", "FIELD", "TYPE", "REQUIRED");
    println!("{}", "-".repeat(48));
    for field in &form.fields {
        let options = field
            .kind
            .options()
            .map(|o| o.len().to_string())
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:<16} {:<10} {:<9} {}",
            field.id,
            field.kind.type_name(),
            if field.required { "yes" } else { "no" },
            options
        );
    }

    Ok(())
}
