pub mod config;
pub mod error;
pub mod format;
pub mod json;
pub mod record;
pub mod sample;
pub mod source;

pub use config::RosterConfig;
pub use error::RosterError;
pub use format::{format_optional, format_record, RecordFormatter, DEFAULT_SEPARATOR};
pub use record::{FieldValue, Record};
pub use source::{FieldSource, RenderValue};
