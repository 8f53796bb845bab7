pub mod catalog;
pub mod config;
pub mod protocol;
pub mod record;
pub mod runner;

pub use catalog::RecordSpec;
pub use record::{DerivedFields, DiffStyle, RecordOptions, ValueRecord};
pub use runner::Runner;
