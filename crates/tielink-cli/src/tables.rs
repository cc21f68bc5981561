//! Node and edge table loading.
//!
//! Tables are CSV with a header row. Column names match case-insensitively,
//! fields are trimmed, and blank lines are skipped.

use crate::error::{CliError, Result};
use csv::{ReaderBuilder, StringRecord, Trim};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tielink_domain::NodeId;
use tielink_graph::Graph;

/// Header and data rows of a table.
struct Table {
    headers: StringRecord,
    /// (1-based line number, record)
    rows: Vec<(usize, StringRecord)>,
}

impl Table {
    fn read<R: Read>(reader: R, path: &Path) -> Result<Self> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(Trim::All)
            .from_reader(reader);

        let headers = reader
            .headers()
            .map_err(|e| csv_error(e, path))?
            .clone();
        if headers.iter().all(|h| h.trim_start_matches('\u{feff}').is_empty()) {
            return Err(CliError::Parse {
                path: path.to_path_buf(),
                line: 1,
                message: "table is empty, expected a header row".to_string(),
            });
        }

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record.map_err(|e| csv_error(e, path))?;
            if record.iter().all(str::is_empty) {
                continue;
            }
            let line = record.position().map_or(0, |p| p.line() as usize);
            rows.push((line, record));
        }

        Ok(Self { headers, rows })
    }

    fn column(&self, name: &str) -> Option<usize> {
        self.headers
            .iter()
            .position(|h| h.trim_start_matches('\u{feff}').eq_ignore_ascii_case(name))
    }

    fn require_column(&self, name: &str, path: &Path) -> Result<usize> {
        self.column(name).ok_or_else(|| CliError::MissingColumn {
            path: path.to_path_buf(),
            column: name.to_string(),
        })
    }
}

fn csv_error(error: csv::Error, path: &Path) -> CliError {
    let line = error.position().map_or(1, |p| p.line() as usize);
    let message = error.to_string();
    match error.into_kind() {
        csv::ErrorKind::Io(err) => CliError::Io(err),
        _ => CliError::Parse {
            path: path.to_path_buf(),
            line,
            message,
        },
    }
}

fn parse_node(record: &StringRecord, column: usize, line: usize, path: &Path) -> Result<NodeId> {
    let parse_error = |message: String| CliError::Parse {
        path: path.to_path_buf(),
        line,
        message,
    };

    record
        .get(column)
        .ok_or_else(|| parse_error(format!("expected at least {} fields", column + 1)))?
        .parse::<NodeId>()
        .map_err(|message| parse_error(message))
}

/// Read an edge table with `source` and `target` columns.
pub fn read_edges<R: Read>(reader: R, path: &Path) -> Result<Vec<(NodeId, NodeId)>> {
    let table = Table::read(reader, path)?;
    let source = table.require_column("source", path)?;
    let target = table.require_column("target", path)?;

    table
        .rows
        .iter()
        .map(|(line, record)| {
            Ok((
                parse_node(record, source, *line, path)?,
                parse_node(record, target, *line, path)?,
            ))
        })
        .collect()
}

/// Read a node table from its `id` column, or its first column if there is none.
pub fn read_nodes<R: Read>(reader: R, path: &Path) -> Result<Vec<NodeId>> {
    let table = Table::read(reader, path)?;
    let id = table.column("id").unwrap_or(0);

    table
        .rows
        .iter()
        .map(|(line, record)| parse_node(record, id, *line, path))
        .collect()
}

/// Load an edge table from a file.
pub fn load_edges(path: &Path) -> Result<Vec<(NodeId, NodeId)>> {
    let file = File::open(path)?;
    read_edges(file, path)
}

/// Load a node table from a file.
pub fn load_nodes(path: &Path) -> Result<Vec<NodeId>> {
    let file = File::open(path)?;
    read_nodes(file, path)
}

/// Build a graph from an edge table and an optional node table.
///
/// Without a node table the node set is every edge endpoint.
pub fn load_graph(edges: &Path, nodes: Option<&Path>) -> Result<Graph> {
    let edge_rows = load_edges(edges)?;
    let graph = match nodes {
        Some(nodes) => Graph::from_tables(load_nodes(nodes)?, edge_rows)?,
        None => Graph::from_edges(edge_rows),
    };

    let report = graph.simplify_report();
    if report.total_dropped() > 0 {
        tracing::warn!(
            "Dropped {} self-loops, {} duplicate edges and {} duplicate nodes while loading",
            report.self_loops,
            report.duplicate_edges,
            report.duplicate_nodes
        );
    }
    tracing::info!(
        "Loaded graph with {} nodes and {} edges",
        graph.node_count(),
        graph.edge_count()
    );

    Ok(graph)
}
