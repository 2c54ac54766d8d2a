//! DDL script discovery

mod discovery;

pub use discovery::{collect_scripts, DEFAULT_PATTERN};
