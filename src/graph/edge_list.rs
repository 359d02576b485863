//! Loader for the whitespace-separated edge-list format.
//!
//! ```text
//! 3 2        <- optional header: vertex count, edge count
//! A B 12     <- undirected edge A - B with weight 12
//! B C 3
//! ```

use crate::graph::{Graph, UndirectedGraph};
use crate::{Error, Result};
use log::{debug, warn};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Graph type produced by the edge-list loader
pub type LabeledGraph = UndirectedGraph<String, u64>;

/// Counts declared by the header line, if any
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    pub vertices: usize,
    pub edges: usize,
}

/// Parses an edge list from any buffered reader
pub fn parse_edge_list<R: BufRead>(reader: R) -> Result<LabeledGraph> {
    let mut graph = UndirectedGraph::new();
    let mut header = None;

    for (index, line) in reader.lines().enumerate() {
        let line_no = index + 1;
        let line = line.map_err(|e| match e.kind() {
            io::ErrorKind::InvalidData => Error::MalformedInput {
                line: line_no,
                reason: format!("line is not valid UTF-8: {}", e),
            },
            _ => Error::Io(e),
        })?;
        let fields: Vec<&str> = line.split_whitespace().collect();

        match fields.as_slice() {
            [] => continue,
            [vertices, edges] => {
                header = Some(Header {
                    vertices: parse_count(vertices, line_no)?,
                    edges: parse_count(edges, line_no)?,
                });
            }
            [origin, destination, weight] => {
                let weight = weight.parse::<u64>().map_err(|e| Error::MalformedInput {
                    line: line_no,
                    reason: format!("invalid weight {:?}: {}", weight, e),
                })?;
                graph
                    .add_edge(origin.to_string(), destination.to_string(), weight)
                    .map_err(|e| match e {
                        Error::WeightOverflow(edge) => Error::MalformedInput {
                            line: line_no,
                            reason: format!("total edge weight overflows at edge {}", edge),
                        },
                        other => other,
                    })?;
            }
            other => {
                return Err(Error::MalformedInput {
                    line: line_no,
                    reason: format!("expected 2 or 3 fields, found {}", other.len()),
                });
            }
        }
    }

    if let Some(header) = header {
        if header.vertices != graph.vertex_count() {
            warn!(
                "Header declares {} vertices but {} were read",
                header.vertices,
                graph.vertex_count()
            );
        }
    }

    debug!(
        "Parsed edge list: {} vertices, {} edges",
        graph.vertex_count(),
        graph.edge_count()
    );
    Ok(graph)
}

/// Opens and parses an edge-list file
pub fn load_edge_list<P: AsRef<Path>>(path: P) -> Result<LabeledGraph> {
    let file = File::open(path.as_ref())?;
    parse_edge_list(BufReader::new(file))
}

fn parse_count(field: &str, line: usize) -> Result<usize> {
    field.parse().map_err(|e| Error::MalformedInput {
        line,
        reason: format!("invalid count {:?}: {}", field, e),
    })
}
