//! CLI library components for the delimited-file checker.

pub mod logging;
