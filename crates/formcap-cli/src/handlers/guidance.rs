use std::path::Path;

pub fn handle(data_dir: &Path) {
    println!("formcap - dynamic form renderer and feedback collector\n");
    println!("Data directory: {}\n", data_dir.display());
    println!("Quick commands:");
    println!("  formcap form list                  # List available forms");
    println!("  formcap form render default        # Write a form as HTML");
    println!("  formcap submit default --field name=Alice --field message=\"Great tool\"");
    println!("  formcap feedback list              # Show recent feedback");
    println!("  formcap feedback export            # Write feedback-export.csv\n");
    println!("For more commands:");
    println!("  formcap --help");
}
