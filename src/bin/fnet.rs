//! CLI entry point for the `fnet` command-line tool.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use friend_network::cli::commands::{self, NetworkSource};
use friend_network::loader::{LoadOptions, DEFAULT_MAX_WEIGHT, DEFAULT_SEED};

#[derive(Parser)]
#[command(
    name = "fnet",
    about = "Friend Network CLI: shortest chains of mutual friends"
)]
struct Cli {
    /// Newline-delimited list of member names
    #[arg(long, default_value = "data/first-names.txt")]
    names: PathBuf,

    /// Whitespace-delimited raw id pairs, one friendship per line
    #[arg(long, default_value = "data/edges.txt")]
    edges: PathBuf,

    /// Seed for name assignment and edge weights
    #[arg(long, default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// Largest random edge weight in the weighted graph
    #[arg(long, default_value_t = DEFAULT_MAX_WEIGHT)]
    max_weight: u32,

    /// Use only the first N names of the list
    #[arg(long)]
    name_limit: Option<usize>,

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
    /// Show member and friendship counts
    Info,
    /// List every member of the network
    Members,
    /// Find the shortest chain of friends between two members
    Path {
        /// Starting member
        from: String,
        /// Target member
        to: String,
        /// Use the weighted graph (Dijkstra) instead of hop count (BFS)
        #[arg(long)]
        weighted: bool,
    },
    /// Export a bounded snapshot of the network as JSON
    Export {
        /// Maximum number of members to include
        #[arg(long, default_value = "5000")]
        max_vertices: usize,
        /// Highlight the path starting at this member (requires --to)
        #[arg(long, requires = "to")]
        from: Option<String>,
        /// Highlight the path ending at this member (requires --from)
        #[arg(long, requires = "from")]
        to: Option<String>,
        /// Export the weighted graph
        #[arg(long)]
        weighted: bool,
        /// Pretty-print JSON
        #[arg(long)]
        pretty: bool,
    },
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    let mut logger = env_logger::Builder::from_default_env();
    if cli.verbose {
        logger.filter_level(log::LevelFilter::Debug);
    }
    logger.init();

    let source = NetworkSource {
        names: &cli.names,
        edges: &cli.edges,
        options: LoadOptions {
            seed: cli.seed,
            max_weight: cli.max_weight,
            name_limit: cli.name_limit,
        },
    };

    let result = match cli.command {
        Commands::Info => commands::cmd_info(&source, json),
        Commands::Members => commands::cmd_members(&source, json),
        Commands::Path { from, to, weighted } => {
            commands::cmd_path(&source, &from, &to, weighted, json)
        }
        Commands::Export {
            max_vertices,
            from,
            to,
            weighted,
            pretty,
        } => {
            let highlight = match (&from, &to) {
                (Some(f), Some(t)) => Some((f.as_str(), t.as_str())),
                _ => None,
            };
            commands::cmd_export(&source, max_vertices, highlight, weighted, pretty)
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(commands::exit_code(&e));
    }
}
