mod error;
mod export;
mod store;

pub use error::{Error, Result};
pub use export::{CSV_COLUMNS, records_to_csv};
pub use store::FeedbackStore;
