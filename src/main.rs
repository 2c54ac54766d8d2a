use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use rust_ddlparser::{check_scripts, dump_scripts, DumpOptions};

#[derive(Parser)]
#[command(name = "rust-ddlparser")]
#[command(author, version, about = "Parse DDL scripts into structured statements")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print every statement of the given scripts
    Dump {
        /// Script files, directories or glob patterns
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        /// File-name pattern used when walking directories
        #[arg(short, long, default_value = rust_ddlparser::script::DEFAULT_PATTERN)]
        pattern: String,

        /// Include comments in the output
        #[arg(short, long)]
        comments: bool,

        /// Enable verbose output
        #[arg(short, long)]
        verbose: bool,
    },
    /// Parse the given scripts and print a summary per script
    Check {
        /// Script files, directories or glob patterns
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        /// File-name pattern used when walking directories
        #[arg(short, long, default_value = rust_ddlparser::script::DEFAULT_PATTERN)]
        pattern: String,

        /// Enable verbose output
        #[arg(short, long)]
        verbose: bool,
    },
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut stdout = io::stdout().lock();

    match cli.command {
        Commands::Dump {
            paths,
            pattern,
            comments,
            verbose,
        } => {
            init_logging(verbose);
            let options = DumpOptions {
                paths,
                pattern,
                include_comments: comments,
                verbose,
            };

            dump_scripts(&options, &mut stdout)?;
        }
        Commands::Check {
            paths,
            pattern,
            verbose,
        } => {
            init_logging(verbose);
            let options = DumpOptions {
                paths,
                pattern,
                include_comments: false,
                verbose,
            };

            check_scripts(&options, &mut stdout)?;
        }
    }

    Ok(())
}
