//! Resolve command-line inputs into the list of DDL scripts to parse

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::error::DdlError;

/// File-name pattern used when a directory is given as input.
pub const DEFAULT_PATTERN: &str = "*.ddl";

/// Expand `inputs` into script paths.
///
/// - a path containing `*` is expanded as a glob
/// - a directory is walked recursively, keeping files whose name matches
///   `pattern`
/// - anything else is taken as a file and must exist
///
/// Scripts found in one directory walk or glob are sorted; the order of the
/// inputs themselves is preserved and duplicates are dropped.
pub fn collect_scripts(inputs: &[PathBuf], pattern: &str) -> Result<Vec<PathBuf>> {
    let matcher = glob::Pattern::new(pattern).map_err(|e| DdlError::InvalidPattern {
        pattern: pattern.to_string(),
        message: e.to_string(),
    })?;

    let mut scripts = Vec::with_capacity(inputs.len());
    for input in inputs {
        let found = if input.to_string_lossy().contains('*') {
            expand_glob(input)?
        } else if input.is_dir() {
            walk_directory(input, &matcher)
        } else if input.is_file() {
            vec![input.clone()]
        } else {
            return Err(DdlError::ScriptReadError {
                path: input.clone(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "No such file"),
            }
            .into());
        };

        for script in found {
            if !scripts.contains(&script) {
                scripts.push(script);
            }
        }
    }

    Ok(scripts)
}

fn expand_glob(input: &Path) -> Result<Vec<PathBuf>> {
    let glob_str = input.to_string_lossy();
    let paths = glob::glob(&glob_str).map_err(|e| DdlError::InvalidPattern {
        pattern: glob_str.to_string(),
        message: e.to_string(),
    })?;

    let mut found: Vec<PathBuf> = paths
        .filter_map(|p| p.ok())
        .filter(|p| p.is_file())
        .collect();
    found.sort();
    Ok(found)
}

fn walk_directory(dir: &Path, matcher: &glob::Pattern) -> Vec<PathBuf> {
    let mut found: Vec<PathBuf> = walkdir::WalkDir::new(dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter(|e| {
            e.file_name()
                .to_str()
                .is_some_and(|name| matcher.matches(name))
        })
        .map(|e| e.into_path())
        .collect();
    found.sort();
    found
}
