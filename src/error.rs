//! Error types for rust-ddlparser

use std::path::PathBuf;
use thiserror::Error;

use crate::model::Ddl;

/// Errors that can occur while reading and parsing DDL scripts
#[derive(Error, Debug)]
pub enum DdlError {
    #[error("Failed to read DDL script: {path}")]
    ScriptReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse DDL script: {path}")]
    ScriptParseError {
        path: PathBuf,
        #[source]
        source: ParseError,
    },

    #[error("Invalid script pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },
}

/// Why a statement that matched its leading keyword could not be completed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Malformed {
    #[error("expected keyword {0}")]
    MissingKeyword(&'static str),

    #[error("expected {0} identifier")]
    MissingIdentifier(&'static str),

    #[error("unterminated statement, missing '{0}'")]
    Unterminated(&'static str),
}

/// The recognition step that failed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Failure {
    /// `CREATE` matched but no CREATE kind could be completed.
    #[error("Failed to parse Create Statement: {0}")]
    CreateStatement(Malformed),

    /// `ALTER` or `SET` matched but the statement could not be completed.
    #[error("Failed to parse Statement: {0}")]
    Statement(Malformed),

    /// Neither a comment nor any statement keyword starts the remaining input.
    #[error("Failed to parse Statement: unrecognized statement keyword")]
    Unrecognized,
}

/// A parse that stopped before the end of the script.
///
/// `lookahead` holds up to 75 characters of the script starting at the
/// statement that failed. `recognized` keeps the statements completed before
/// it; they are not a complete picture of the script.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Failed to parse DDL! Aborting.. {failure}; near: {lookahead}")]
pub struct ParseError {
    pub failure: Failure,
    pub lookahead: String,
    pub recognized: Ddl,
}
