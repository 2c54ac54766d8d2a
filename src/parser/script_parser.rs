//! Reading and parsing DDL script files

use std::path::{Path, PathBuf};

use anyhow::Result;
use encoding_rs::WINDOWS_1252;
use rayon::prelude::*;
use tracing::debug;

use super::ddl_parser::parse_ddl;
use crate::error::DdlError;
use crate::model::Ddl;

/// Minimum number of scripts to benefit from parallel parsing.
/// Below this threshold, sequential processing is faster due to rayon overhead.
const PARALLEL_THRESHOLD: usize = 8;

/// The statements recognized from one script file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedScript {
    pub path: PathBuf,
    pub ddl: Ddl,
}

/// Read a script as a string, trying UTF-8 first, then Windows-1252 as
/// fallback. A UTF-8 byte order mark is stripped.
pub fn read_script(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path).map_err(|e| DdlError::ScriptReadError {
        path: path.to_path_buf(),
        source: e,
    })?;

    let content = match String::from_utf8(bytes) {
        Ok(s) => s,
        Err(e) => {
            // Fall back to Windows-1252 (common for scripts exported on Windows),
            // which maps every byte
            let (decoded, _, _) = WINDOWS_1252.decode(e.as_bytes());
            decoded.into_owned()
        }
    };

    Ok(match content.strip_prefix('\u{FEFF}') {
        Some(stripped) => stripped.to_string(),
        None => content,
    })
}

/// Parse a single script file
pub fn parse_script_file(path: &Path) -> Result<ParsedScript> {
    let content = read_script(path)?;
    debug!(path = %path.display(), bytes = content.len(), "parsing script");

    let ddl = parse_ddl(&content).map_err(|e| DdlError::ScriptParseError {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(ParsedScript {
        path: path.to_path_buf(),
        ddl,
    })
}

/// Parse multiple script files, using parallel processing for larger sets.
///
/// Results keep the order of `paths`; the first failure (in that order) is
/// returned.
pub fn parse_script_files(paths: &[PathBuf]) -> Result<Vec<ParsedScript>> {
    if paths.len() >= PARALLEL_THRESHOLD {
        let results: Vec<Result<ParsedScript>> = paths
            .par_iter()
            .map(|path| parse_script_file(path))
            .collect();
        results.into_iter().collect()
    } else {
        paths.iter().map(|path| parse_script_file(path)).collect()
    }
}
