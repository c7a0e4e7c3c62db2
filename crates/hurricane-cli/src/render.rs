//! Output formatting for the `hurricane` commands.
//!
//! Every writer takes `impl Write` so the same code serves stdout and tests.

use std::io::{self, Write};

use colored::Colorize;
use hurricane_core::{HurricaneGraph, Node, NodeId};
use serde::Serialize;

/// Output format selected with `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable sections.
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// Results of every query, taken from one graph.
#[derive(Debug, Serialize)]
pub struct DemoReport {
    pub spiral_order: Vec<Node>,
    pub layers: Vec<Vec<Node>>,
    pub bfs: Vec<Node>,
    pub dfs: Vec<Node>,
}

impl DemoReport {
    /// Runs all four queries, walks starting from the center.
    pub fn collect(graph: &HurricaneGraph, layer_size: f64) -> Self {
        Self {
            spiral_order: graph.spiral_order(),
            layers: graph.layers(layer_size),
            bfs: graph.bfs(NodeId::CENTER),
            dfs: graph.dfs(NodeId::CENTER),
        }
    }
}

/// One plotted point.
#[derive(Debug, Serialize)]
pub struct Point<'a> {
    pub id: &'a str,
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl<'a> From<&'a Node> for Point<'a> {
    fn from(node: &'a Node) -> Self {
        Self {
            id: node.id(),
            x: node.x(),
            y: node.y(),
            z: node.z(),
        }
    }
}

pub fn write_demo<W: Write>(
    out: &mut W,
    report: &DemoReport,
    format: OutputFormat,
) -> io::Result<()> {
    match format {
        OutputFormat::Json => write_json(out, report),
        OutputFormat::Text => write_demo_text(out, report),
    }
}

fn write_demo_text<W: Write>(out: &mut W, report: &DemoReport) -> io::Result<()> {
    writeln!(out, "{}", "Spiral Traversal:".bold())?;
    for node in &report.spiral_order {
        writeln!(
            out,
            "ID={}, R={:.2}, Theta={:.2}, Z={:.2}",
            node.id(),
            node.r(),
            node.theta(),
            node.z()
        )?;
    }

    writeln!(out, "\n{}", "Layered Traversal:".bold())?;
    for (i, layer) in report.layers.iter().enumerate() {
        writeln!(out, "Layer {i}:")?;
        for node in layer {
            writeln!(out, "  ID={}, Z={:.2}", node.id(), node.z())?;
        }
    }

    for (title, walk) in [("BFS Traversal:", &report.bfs), ("DFS Traversal:", &report.dfs)] {
        writeln!(out, "\n{}", title.bold())?;
        for node in walk {
            writeln!(out, "ID={}", node.id())?;
        }
    }
    Ok(())
}

/// Writes one `id,x,y,z` record per node, with a header row in CSV mode.
pub fn write_points<W: Write>(
    out: &mut W,
    nodes: &[Node],
    format: OutputFormat,
) -> io::Result<()> {
    match format {
        OutputFormat::Json => {
            let points: Vec<Point<'_>> = nodes.iter().map(Point::from).collect();
            write_json(out, &points)
        }
        OutputFormat::Text => {
            let mut wtr = csv::Writer::from_writer(&mut *out);
            for node in nodes {
                wtr.serialize(Point::from(node))?;
            }
            wtr.flush()
        }
    }
}

pub fn write_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)
}
