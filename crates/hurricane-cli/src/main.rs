//! `hurricane` - builds a spiral graph and prints its traversals.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use hurricane_core::{HurricaneConfig, HurricaneGraph};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod render;

use render::{write_demo, write_json, write_points, DemoReport, OutputFormat};

/// Hurricane - an in-memory graph laid out along a spiral
#[derive(Parser, Debug)]
#[command(name = "hurricane")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file (defaults to ./hurricane.toml when present)
    #[arg(short, long, global = true, env = "HURRICANE_CONFIG")]
    config: Option<PathBuf>,

    /// Number of nodes inserted after the center
    #[arg(short, long, global = true, default_value_t = 10)]
    nodes: usize,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
enum Commands {
    /// Print spiral order, height layers, BFS and DFS from the center
    Demo,
    /// Print the Cartesian coordinates of every node
    Points,
    /// Print the effective configuration
    Config,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_ref())?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command.unwrap_or(Commands::Demo) {
        Commands::Demo => {
            let graph = build_graph(&config, cli.nodes)?;
            let report = DemoReport::collect(&graph, config.layer_size);
            write_demo(&mut out, &report, cli.format)?;
        }
        Commands::Points => {
            let graph = build_graph(&config, cli.nodes)?;
            write_points(&mut out, &graph.all_nodes(), cli.format)?;
        }
        Commands::Config => match cli.format {
            OutputFormat::Json => write_json(&mut out, &config)?,
            OutputFormat::Text => write!(out, "{}", config.to_toml()?)?,
        },
    }

    out.flush()?;
    Ok(())
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<HurricaneConfig> {
    let config = match path {
        Some(path) => HurricaneConfig::load_from(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => HurricaneConfig::load().context("failed to load config")?,
    };
    tracing::debug!(?config, "Configuration loaded");
    Ok(config)
}

/// Builds the configured graph and inserts `n1..=nN` with payload `node i`.
fn build_graph(config: &HurricaneConfig, count: usize) -> anyhow::Result<HurricaneGraph> {
    let graph = HurricaneGraph::with_config(config)?;
    for i in 1..=count {
        graph.insert(&format!("n{i}"), &format!("node {i}"))?;
    }
    tracing::info!(nodes = graph.len(), edges = graph.edge_count(), "Graph built");
    Ok(graph)
}
