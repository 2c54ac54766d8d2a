//! rust-ddlparser: structured parsing of DDL scripts
//!
//! This library turns scripts of `CREATE`, `ALTER` and `SET` statements and
//! `--` comments into an ordered sequence of statement records, for use by
//! reporting tools, migration linters and schema diff utilities.

pub mod error;
pub mod model;
pub mod parser;
pub mod report;
pub mod script;

use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;

pub use error::{DdlError, Failure, Malformed, ParseError};
pub use model::{Ddl, QualifiedName, Statement, StatementKind};
pub use parser::{parse_ddl, ParsedScript};

/// Options for dumping or checking DDL scripts
#[derive(Debug, Clone)]
pub struct DumpOptions {
    /// Script files, directories or glob patterns
    pub paths: Vec<PathBuf>,
    /// File-name pattern applied when walking directories (e.g., "*.ddl")
    pub pattern: String,
    /// Include comment statements in the dump
    pub include_comments: bool,
    /// Enable verbose output
    pub verbose: bool,
}

impl Default for DumpOptions {
    fn default() -> Self {
        Self {
            paths: Vec::new(),
            pattern: script::DEFAULT_PATTERN.to_string(),
            include_comments: false,
            verbose: false,
        }
    }
}

/// Parse every script named by `options`, stopping at the first failure.
fn parse_inputs(options: &DumpOptions) -> Result<Vec<ParsedScript>> {
    let paths = script::collect_scripts(&options.paths, &options.pattern)?;

    if options.verbose {
        eprintln!("Found {} DDL scripts", paths.len());
    }

    let scripts = parser::parse_script_files(&paths)?;

    if options.verbose {
        let statements: usize = scripts.iter().map(|s| s.ddl.len()).sum();
        eprintln!("Parsed {} statements", statements);
    }

    Ok(scripts)
}

/// Parse the scripts and write every statement to `out`, one per line.
///
/// When more than one script is dumped, each one is preceded by a
/// `-- <path>` header line.
pub fn dump_scripts<W: Write>(options: &DumpOptions, out: &mut W) -> Result<Vec<ParsedScript>> {
    let scripts = parse_inputs(options)?;
    let with_headers = scripts.len() > 1;

    for script in &scripts {
        if with_headers {
            writeln!(out, "-- {}", script.path.display())?;
        }
        out.write_all(report::render_script(&script.ddl, options.include_comments).as_bytes())?;
    }

    Ok(scripts)
}

/// Parse the scripts and write one summary line per script to `out`.
pub fn check_scripts<W: Write>(options: &DumpOptions, out: &mut W) -> Result<Vec<ParsedScript>> {
    let scripts = parse_inputs(options)?;

    for script in &scripts {
        writeln!(
            out,
            "{}: {}",
            script.path.display(),
            report::Summary::of(&script.ddl)
        )?;
    }

    Ok(scripts)
}
