mod config;
mod diagnostics;
mod encoder;
mod error;
mod escape;
mod friendly;
mod grammar;
mod graphfile;
mod identifier;
mod info;
mod model;
mod qualified;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use regex::Regex;

use crate::identifier::SymbolIdentifiers;
use crate::model::{SymbolGraph, SymbolId};

#[derive(Parser)]
#[command(name = "docid", about = "Deterministic symbol identifiers for documentation pipelines")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Derive identifiers for every symbol and print JSON records
    Derive {
        /// Graph files or directories of *.json graphs
        #[arg(required = true)]
        paths: Vec<PathBuf>,
        /// Only derive symbols whose raw name matches this regex
        #[arg(long)]
        filter: Option<String>,
    },
    /// Validate graphs and report malformed symbols without printing records
    Check {
        /// Graph files or directories of *.json graphs
        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },
    /// Print the comprehensive reference document
    Info {
        /// Emit JSON instead of markdown
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Derive { paths, filter } => cmd_derive(&paths, filter.as_deref(), true),
        Commands::Check { paths } => cmd_derive(&paths, None, false),
        Commands::Info { json } => {
            info::run(json);
            return ExitCode::SUCCESS;
        },
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            diagnostics::print_error(&e);
            ExitCode::from(2)
        },
    }
}

/// Derive identifiers across all requested graphs.
///
/// Malformed symbols are reported and skipped — a single bad symbol never
/// blocks derivation for the rest of the graph. When `emit` is set the
/// derived records are printed as a JSON array on stdout.
///
/// # Errors
///
/// Returns errors from config loading, filter compilation, graph loading,
/// or record serialization. Per-symbol malformed-graph errors are reported
/// on stderr instead and reflected in the exit code.
fn cmd_derive(paths: &[PathBuf], filter: Option<&str>, emit: bool) -> Result<ExitCode, error::Error> {
    let root = PathBuf::from(".");
    let config = config::Config::load(&root)?;
    let filter = match filter {
        Some(expression) => Some(Regex::new(expression)?),
        None => None,
    };

    let mut records: Vec<SymbolIdentifiers> = Vec::new();
    let mut skipped = 0u32;

    for file in graphfile::discover(paths) {
        let graph = graphfile::load(&file)?;
        derive_graph(&graph, &config, filter.as_ref(), &mut records, &mut skipped);
    }

    if emit {
        let rendered = serde_json::to_string_pretty(&records).map_err(error::Error::Json)?;
        println!("{rendered}");
    }

    if skipped > 0 {
        eprintln!("{skipped} malformed symbols skipped, {} derived", records.len());
        Ok(ExitCode::from(1))
    } else {
        eprintln!("{} symbols derived", records.len());
        Ok(ExitCode::SUCCESS)
    }
}

/// Derive every selected symbol of one graph, accumulating records and
/// reporting malformed symbols.
fn derive_graph(
    graph: &SymbolGraph,
    config: &config::Config,
    filter: Option<&Regex>,
    records: &mut Vec<SymbolIdentifiers>,
    skipped: &mut u32,
) {
    for index in 0..graph.symbols.len() {
        let id = SymbolId(index);
        if !selected(graph, id, config, filter) {
            continue;
        }
        match identifier::derive(graph, id) {
            Ok(ids) => records.push(ids),
            Err(e) => {
                *skipped += 1;
                diagnostics::print_error(&e);
            },
        }
    }
}

/// Apply the namespace config and the `--filter` regex to one symbol.
/// A symbol whose chain cannot be resolved stays selected so the failure
/// is reported by derivation rather than silently filtered away.
fn selected(
    graph: &SymbolGraph,
    id: SymbolId,
    config: &config::Config,
    filter: Option<&Regex>,
) -> bool {
    if let Some(pattern) = filter {
        let matches_name = graph.symbol(id).is_some_and(|s| pattern.is_match(&s.name));
        if !matches_name {
            return false;
        }
    }

    match qualified::resolve(graph, id) {
        Ok(qualified) => config.should_derive(qualified.namespace.unwrap_or("")),
        Err(_) => true,
    }
}
