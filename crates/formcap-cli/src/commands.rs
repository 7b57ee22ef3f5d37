use anyhow::Result;

use formcap_registry::FormRegistry;
use formcap_runtime::{Config, resolve_data_dir, source_from_config};
use formcap_store::FeedbackStore;

use super::args::{Cli, Commands, ConfigCommand, FeedbackCommand, FormCommand};
use super::handlers;

pub fn run(cli: Cli) -> Result<()> {
    let data_dir = resolve_data_dir(cli.data_dir.as_deref())?;

    let Some(command) = cli.command else {
        handlers::guidance::handle(&data_dir);
        return Ok(());
    };

    let config = Config::load_from(&data_dir.join("config.toml"))?;

    match command {
        Commands::Form { command } => {
            let registry = FormRegistry::open(&data_dir)?;

            match command {
                FormCommand::List { imported } => handlers::form_list::handle(&registry, imported),
                FormCommand::Show { form_id } => handlers::form_show::handle(&registry, &form_id),
                FormCommand::Import { path } => handlers::form_import::handle(&registry, &path),
                FormCommand::Export { form_id, output } => {
                    handlers::form_export::handle(&registry, &form_id, output)
                }
                FormCommand::Remove { form_id } => {
                    handlers::form_remove::handle(&registry, &form_id)
                }
                FormCommand::Render { form_id, output } => {
                    let source = source_from_config(&config, &data_dir);
                    handlers::form_render::handle(&registry, source.as_ref(), &form_id, output)
                }
            }
        }

        Commands::Submit {
            form_id,
            fields,
            input,
        } => {
            let registry = FormRegistry::open(&data_dir)?;
            let store = FeedbackStore::open(&data_dir);
            let source = source_from_config(&config, &data_dir);

            handlers::submit::handle(
                &registry,
                &store,
                source.as_ref(),
                &form_id,
                &fields,
                input.as_deref(),
            )
        }

        Commands::Feedback { command } => {
            let store = FeedbackStore::open(&data_dir);

            match command {
                FeedbackCommand::List { limit } => handlers::feedback_list::handle(&store, limit),
                FeedbackCommand::Clear { yes } => handlers::feedback_clear::handle(&store, yes),
                FeedbackCommand::Export { output } => {
                    handlers::feedback_export::handle(&store, output)
                }
            }
        }

        Commands::Config { command } => match command {
            ConfigCommand::Show => handlers::config_show::handle(&config, &data_dir),
            ConfigCommand::SetSource {
                base_url,
                forms_dir,
            } => handlers::config_set_source::handle(config, &data_dir, base_url, forms_dir),
        },
    }
}
