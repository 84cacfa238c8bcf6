//! Data model for delimited-file validation.
//!
//! Holds the configuration surface ([`Options`]) and the report types the
//! validator produces. These types are plain data: the scanning logic lives
//! in `dfc-validate` and source handling in `dfc-ingest`.

pub mod options;
pub mod report;

pub use options::Options;
pub use report::{
    DuplicateSection, HeaderSection, LineSection, Report, Status, ValueSection,
};
