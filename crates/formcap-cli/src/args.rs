use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "formcap")]
#[command(about = "Render dynamic forms and collect feedback locally", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(
        long,
        global = true,
        help = "Data directory (default: FORMCAP_PATH or the XDG data dir)"
    )]
    pub data_dir: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Manage form descriptors")]
    Form {
        #[command(subcommand)]
        command: FormCommand,
    },

    #[command(about = "Submit a feedback record for a form")]
    Submit {
        form_id: String,

        #[arg(
            long = "field",
            value_name = "ID=VALUE",
            help = "Answer for one field; repeat the flag (and a key, for multi-valued fields)"
        )]
        fields: Vec<String>,

        #[arg(long, help = "JSON file of answers: {\"field\": \"value\" or [\"a\", \"b\"]}")]
        input: Option<PathBuf>,
    },

    #[command(about = "Manage collected feedback")]
    Feedback {
        #[command(subcommand)]
        command: FeedbackCommand,
    },

    #[command(about = "Inspect or change the form source configuration")]
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    #[command(about = "Show the resolved configuration")]
    Show,

    #[command(about = "Set where form descriptors are fetched from")]
    SetSource {
        #[arg(long, help = "Fetch descriptors from <URL>/custom-forms/")]
        base_url: Option<String>,

        #[arg(long, help = "Read descriptors from a local directory")]
        forms_dir: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
pub enum FormCommand {
    #[command(about = "List available forms (built-in and imported)")]
    List {
        #[arg(long, help = "Only imported forms, with their field counts")]
        imported: bool,
    },

    #[command(about = "Show a form's fields and metadata")]
    Show { form_id: String },

    #[command(about = "Import a form descriptor from a JSON file")]
    Import { path: PathBuf },

    #[command(about = "Export a form descriptor as pretty JSON")]
    Export {
        form_id: String,

        #[arg(short, long, help = "Output path (default: <ID>-form.json)")]
        output: Option<PathBuf>,
    },

    #[command(about = "Remove an imported form")]
    Remove { form_id: String },

    #[command(about = "Render a form to a standalone HTML document")]
    Render {
        form_id: String,

        #[arg(short, long, help = "Output path (default: <ID>.html)")]
        output: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
pub enum FeedbackCommand {
    #[command(about = "List recent feedback records")]
    List {
        #[arg(long, default_value = "10")]
        limit: usize,
    },

    #[command(about = "Delete ALL collected feedback")]
    Clear {
        #[arg(long, help = "Skip the confirmation prompt")]
        yes: bool,
    },

    #[command(about = "Export all feedback as CSV")]
    Export {
        #[arg(short, long, help = "Output path (default: feedback-export.csv)")]
        output: Option<PathBuf>,
    },
}
