// NOTE: formcap Architecture Rationale
//
// Why local-first (no server)?
// - Single-user feedback collection doesn't justify a backend
// - The whole record set fits one JSON array slot; a database would add
//   moving parts without adding safety at this volume
// - Trade-off: two processes appending at once can lose an update
//   (documented in formcap-store)
//
// Why registry + source chain (not one lookup path)?
// - Imported descriptors must shadow built-ins and survive a missing
//   index (rebuilt from the descriptor files on disk)
// - Unknown ids degrade through the source's "default" descriptor down to
//   a hardcoded minimal form, so rendering never hard-fails on a bad
//   source
//
// Why namespaced subcommands (form, feedback)?
// - Groups descriptor management apart from record management
// - Improves --help discoverability as commands accumulate

mod args;
mod commands;
mod formatters;
mod handlers;
mod ui;

pub use args::{Cli, Commands, ConfigCommand, FeedbackCommand, FormCommand};
pub use commands::run;
