mod export;
mod printer;

use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::process;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use serde::Serialize;
use slngraph_core::{DependencyGraph, ProjectRecord, SolutionError};
use tracing_subscriber::EnvFilter;

use export::GraphFormat;

/// Output format for CLI responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    Text,
    Json,
}

/// Visual Studio solution dependency graph extractor.
#[derive(Parser)]
#[command(
    name = "slngraph",
    version,
    about = "Visual Studio solution dependency graph extractor"
)]
struct Cli {
    /// Output format (text or json)
    #[arg(long, global = true, default_value = "text", value_enum)]
    output: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    quiet: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace). RUST_LOG takes precedence.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print every project with its id and dependency names
    Print {
        /// Path to the .sln file
        file: PathBuf,
    },

    /// Export the project dependency graph
    Graph {
        /// Path to the .sln file
        file: PathBuf,
        /// Export format
        #[arg(long, default_value = "edges", value_enum)]
        format: GraphFormat,
    },

    /// Parse and resolve a solution, reporting only success or the error
    Check {
        /// Path to the .sln file
        file: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    match cli.command {
        Commands::Print { file } => cmd_print(&file, cli.output, cli.quiet),
        Commands::Graph { file, format } => cmd_graph(&file, format, cli.output, cli.quiet),
        Commands::Check { file } => cmd_check(&file, cli.output, cli.quiet),
    }
}

fn init_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        let level = match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .init();
}

/// Run the extraction pipeline, exiting with status 1 on failure.
fn load(file: &Path, output: OutputFormat, quiet: bool) -> Vec<ProjectRecord> {
    tracing::info!(file = %file.display(), "reading solution");
    match slngraph_core::extract(file) {
        Ok(records) => records,
        Err(e) => {
            report_error(&e, output, quiet);
            process::exit(1);
        }
    }
}

fn cmd_print(file: &Path, output: OutputFormat, quiet: bool) {
    let records = load(file, output, quiet);
    match output {
        OutputFormat::Text => {
            if !records.is_empty() {
                println!("{}", printer::format_records(&records));
            }
        }
        OutputFormat::Json => print_json(&records),
    }
}

fn cmd_graph(file: &Path, format: GraphFormat, output: OutputFormat, quiet: bool) {
    let records = load(file, output, quiet);
    let graph = DependencyGraph::from_records(&records);
    // --output json overrides the export format
    let format = match output {
        OutputFormat::Json => GraphFormat::Json,
        OutputFormat::Text => format,
    };
    let text = export::export(&graph, format, &display_name(file));
    if !text.is_empty() {
        println!("{}", text);
    }
}

#[derive(Serialize)]
struct CheckSummary<'a> {
    file: String,
    projects: usize,
    edges: usize,
    roots: Vec<&'a str>,
}

fn cmd_check(file: &Path, output: OutputFormat, quiet: bool) {
    let records = load(file, output, quiet);
    let graph = DependencyGraph::from_records(&records);
    let summary = CheckSummary {
        file: display_name(file),
        projects: graph.nodes.len(),
        edges: graph.edges.len(),
        roots: graph.roots(),
    };
    match output {
        OutputFormat::Json => print_json(&summary),
        OutputFormat::Text => {
            if !quiet {
                println!(
                    "{}: {} projects, {} dependencies",
                    summary.file, summary.projects, summary.edges
                );
            }
        }
    }
}

fn display_name(file: &Path) -> String {
    file.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| file.display().to_string())
}

fn print_json<T: Serialize>(value: &T) {
    let pretty = serde_json::to_string_pretty(value)
        .unwrap_or_else(|e| format!("serialization error: {}", e));
    println!("{}", pretty);
}

pub(crate) fn report_error(err: &SolutionError, output: OutputFormat, quiet: bool) {
    match output {
        OutputFormat::Json => {
            let err_json = serde_json::to_string_pretty(&err.to_json_value())
                .unwrap_or_else(|_| format!("{{\"error\": \"{:?}\"}}", err));
            eprintln!("{}", err_json);
        }
        OutputFormat::Text => {
            if !quiet {
                eprintln!("error: {}", err);
            }
        }
    }
}
