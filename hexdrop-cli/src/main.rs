//! HEXDROP CLI - Command-line interface
//!
//! Commands:
//! - demo: Load the sample layout and walk through the board API
//! - show: Render a layout
//! - neighbor: Query the neighbors of a cell

mod demo;
mod neighbor_cmd;
mod show;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use hexdrop_core::RenderStyle;

#[derive(Parser)]
#[command(name = "hexdrop")]
#[command(about = "HEXDROP hex puzzle board inspector")]
struct Cli {
    /// Render without ANSI colors
    #[arg(long, global = true)]
    plain: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load the sample layout, print it and query a neighbor
    Demo,
    /// Render a layout
    Show(show::ShowArgs),
    /// Query the neighbors of a cell
    Neighbor(neighbor_cmd::NeighborArgs),
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let style = if cli.plain {
        RenderStyle::Plain
    } else {
        RenderStyle::Ansi
    };

    match cli.command {
        Commands::Demo => demo::run(style),
        Commands::Show(args) => show::run(args, style),
        Commands::Neighbor(args) => neighbor_cmd::run(args),
    }
}
