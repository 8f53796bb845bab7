pub mod derived;
pub mod options;
pub mod value_record;

pub use derived::DerivedFields;
pub use options::{DiffStyle, RecordOptions};
pub use value_record::{ValueRecord, ValueRecordBuilder};
