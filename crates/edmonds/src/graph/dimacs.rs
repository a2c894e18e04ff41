//! DIMACS edge format.
//!
//! ```text
//! c optional comments
//! p edge <num_nodes> <num_edges>
//! e <u> <v>        (1-based ids, num_edges lines)
//! ```
//!
//! Comment and blank lines may appear anywhere before the last announced edge; anything
//! after it is ignored. Errors report the 1-based line number.

use super::Graph;
use crate::error::GraphError;
use crate::types::{Edge, NodeId};
use std::io::{BufRead, Write};

/// Lines of `input` that are neither blank nor comments, numbered from 1.
struct Lines<R> {
    inner: std::io::Lines<R>,
    line: usize,
}

impl<R: BufRead> Lines<R> {
    fn next_content(&mut self) -> Result<Option<(usize, String)>, GraphError> {
        for text in self.inner.by_ref() {
            let text = text?;
            self.line += 1;
            let trimmed = text.trim();
            if trimmed.is_empty() || trimmed.starts_with('c') {
                continue;
            }
            return Ok(Some((self.line, trimmed.to_owned())));
        }
        Ok(None)
    }
}

fn parse_count(word: Option<&str>, line: usize, what: &str) -> Result<usize, GraphError> {
    word.and_then(|w| w.parse().ok())
        .ok_or_else(|| GraphError::dimacs(line, format!("expected {what}")))
}

fn from_dimacs_id(word: Option<&str>, line: usize, num_nodes: usize) -> Result<NodeId, GraphError> {
    let id: usize = word
        .and_then(|w| w.parse().ok())
        .ok_or_else(|| GraphError::dimacs(line, "expected a vertex id"))?;
    if id == 0 {
        return Err(GraphError::dimacs(line, "non-positive vertex id"));
    }
    if id > num_nodes {
        return Err(GraphError::dimacs(
            line,
            format!("vertex id {id} exceeds the {num_nodes} announced vertices"),
        ));
    }
    Ok(id - 1)
}

pub fn read_dimacs<R: BufRead>(input: R) -> Result<Graph, GraphError> {
    let mut lines = Lines {
        inner: input.lines(),
        line: 0,
    };
    let (line, header) = lines
        .next_content()?
        .ok_or_else(|| GraphError::dimacs(lines.line + 1, "missing problem line"))?;
    let mut words = header.split_whitespace();
    if words.next() != Some("p") || words.next().is_none() {
        return Err(GraphError::dimacs(
            line,
            "expected `p <format> <nodes> <edges>`",
        ));
    }
    let num_nodes = parse_count(words.next(), line, "the vertex count")?;
    let num_edges = parse_count(words.next(), line, "the edge count")?;

    let mut graph = Graph::try_new(num_nodes)
        .map_err(|_| GraphError::dimacs(line, "vertex count too large"))?;
    for _ in 0..num_edges {
        let (line, text) = lines
            .next_content()?
            .ok_or_else(|| GraphError::dimacs(lines.line + 1, "unexpected end of input"))?;
        let mut words = text.split_whitespace();
        if words.next() != Some("e") {
            return Err(GraphError::dimacs(line, "expected `e <u> <v>`"));
        }
        let a = from_dimacs_id(words.next(), line, num_nodes)?;
        let b = from_dimacs_id(words.next(), line, num_nodes)?;
        if a == b {
            let msg = format!("loop at vertex {}", a + 1);
            return Err(GraphError::dimacs(line, msg));
        }
        graph.add_edge(a, b)?;
    }
    Ok(graph)
}

pub fn write_dimacs<W: Write>(graph: &Graph, out: W) -> Result<(), GraphError> {
    let edges: Vec<Edge> = graph.edges().collect();
    write_edges(graph.num_nodes(), &edges, out)
}

/// `p edge <num_nodes> <edges.len()>` followed by one `e` line per edge.
pub fn write_edges<W: Write>(
    num_nodes: usize,
    edges: &[Edge],
    mut out: W,
) -> Result<(), GraphError> {
    writeln!(out, "p edge {} {}", num_nodes, edges.len())?;
    for &(a, b) in edges {
        writeln!(out, "e {} {}", a + 1, b + 1)?;
    }
    out.flush()?;
    Ok(())
}
