//! Loading the externally supplied target-graph set.
//!
//! The file format is blocks of exactly twelve `"v w"` edge lines separated
//! by blank lines, each block one target multigraph. The parsed set is a
//! [`GraphBag`], so any discovered graph can be tested against it directly,
//! whatever its vertex labels.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::graph::{Graph, GraphBag};

/// Edge count every target block must have.
pub const TARGET_EDGES: usize = 12;

#[derive(Debug, Error)]
pub enum TargetError {
    #[error("reading targets: {0}")]
    Io(#[from] std::io::Error),
    #[error("line {line}: expected two integer labels, got {text:?}")]
    BadEdge { line: usize, text: String },
    #[error("block ending at line {line} has {edges} edges, expected 12")]
    BadBlock { line: usize, edges: usize },
}

/// Load the target set from a file.
pub fn load_targets(path: impl AsRef<Path>) -> Result<GraphBag, TargetError> {
    parse_targets(&fs::read_to_string(path)?)
}

/// Parse the target set from in-memory text.
pub fn parse_targets(text: &str) -> Result<GraphBag, TargetError> {
    let mut bag = GraphBag::new();
    let mut edges: Vec<(i64, i64)> = Vec::new();
    // A trailing blank line flushes the final block.
    for (k, raw) in text.lines().chain(std::iter::once("")).enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            if edges.is_empty() {
                continue;
            }
            if edges.len() != TARGET_EDGES {
                return Err(TargetError::BadBlock { line: k + 1, edges: edges.len() });
            }
            let mut g: Graph<i64> = Graph::new();
            for &(v, w) in &edges {
                g.add_edge(v, w);
            }
            bag.insert(&g);
            edges.clear();
        } else {
            let mut fields = line.split_whitespace();
            let edge = match (fields.next(), fields.next(), fields.next()) {
                (Some(v), Some(w), None) => v.parse().ok().zip(w.parse().ok()),
                _ => None,
            };
            match edge {
                Some(e) => edges.push(e),
                None => {
                    return Err(TargetError::BadEdge { line: k + 1, text: line.to_string() })
                }
            }
        }
    }
    Ok(bag)
}
