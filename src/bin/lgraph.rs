//! CLI entry point for the `lgraph` command-line tool.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use labeled_graph::cli::{commands, FilterOptions};
use labeled_graph::{GraphError, TraversalOrder};

#[derive(Parser)]
#[command(
    name = "lgraph",
    about = "Labeled graph CLI — build a graph from a JSON script and walk it"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Display vertex count, root and degrees
    Info {
        /// Path to the JSON graph script
        file: PathBuf,
    },
    /// Walk the graph from its root
    Traverse {
        /// Path to the JSON graph script
        file: PathBuf,
        /// Order: bfs or dfs
        #[arg(long, default_value = "bfs")]
        order: String,
        /// Keep values with at least this many characters
        #[arg(long)]
        min_len: Option<usize>,
        /// Keep values with at most this many characters
        #[arg(long)]
        max_len: Option<usize>,
        /// Keep values containing this substring
        #[arg(long)]
        contains: Option<String>,
        /// Keep the values the filters reject instead
        #[arg(long)]
        negate: bool,
    },
    /// Show one vertex and its incident edges
    Neighbors {
        /// Path to the JSON graph script
        file: PathBuf,
        /// Vertex index
        #[arg(allow_negative_numbers = true)]
        index: i64,
    },
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let result = match cli.command {
        Commands::Info { file } => commands::cmd_info(&file, json),
        Commands::Traverse {
            file,
            order,
            min_len,
            max_len,
            contains,
            negate,
        } => {
            let order = match TraversalOrder::from_name(&order) {
                Some(order) => order,
                None => {
                    eprintln!("Invalid traversal order: {}", order);
                    process::exit(3);
                }
            };
            let filter = FilterOptions {
                min_len,
                max_len,
                contains,
                negate,
            };
            commands::cmd_traverse(&file, order, &filter, json)
        }
        Commands::Neighbors { file, index } => commands::cmd_neighbors(&file, index, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            GraphError::Io(_) => 1,
            GraphError::Json(_) | GraphError::AnchorNotFound(_) => 2,
            GraphError::RootAlreadySet | GraphError::NegativeIndex(_) => 3,
            GraphError::VertexNotFound(_) => 4,
            GraphError::Exhausted => 5,
        };
        process::exit(code);
    }
}
