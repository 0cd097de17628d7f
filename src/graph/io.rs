//! Binary graph files.
//!
//! All integers are big-endian:
//!
//! ```text
//! u32 vertex count | u32 edge count | edge count x (u32 from | u32 to | i32 cost)
//! ```
//!
//! Costs are widened to `i64` on load.

use crate::graph::directed::DirectedGraph;
use crate::graph::traits::Graph;
use crate::{Error, Result};
use log::{debug, warn};
use std::fs::File;
use std::io::{BufReader, BufWriter, ErrorKind, Read, Write};
use std::path::Path;

fn read_be_u32<R: Read>(reader: &mut R, what: &'static str) -> Result<u32> {
    let mut buf = [0u8; 4];
    match reader.read_exact(&mut buf) {
        Ok(()) => Ok(u32::from_be_bytes(buf)),
        Err(e) if e.kind() == ErrorKind::UnexpectedEof => Err(Error::Truncated(what)),
        Err(e) => Err(e.into()),
    }
}

/// Reads a graph in the binary format from any reader
pub fn read_graph<R: Read>(mut reader: R) -> Result<DirectedGraph<i64>> {
    let vertices = read_be_u32(&mut reader, "missing vertex count")? as usize;
    let edges = read_be_u32(&mut reader, "missing edge count")? as usize;

    // Both counts come from the file: nothing is sized from them before the edge
    // list has actually been read.
    let mut edge_list = Vec::new();
    for _ in 0..edges {
        let from = read_be_u32(&mut reader, "edge list shorter than edge count")? as usize;
        let to = read_be_u32(&mut reader, "edge list shorter than edge count")? as usize;
        let cost = read_be_u32(&mut reader, "edge list shorter than edge count")? as i32;
        if from >= vertices || to >= vertices {
            return Err(Error::InvalidEdge(from, to));
        }
        edge_list.push((from, to, i64::from(cost)));
    }

    let mut rest = [0u8; 1];
    if reader.read(&mut rest)? != 0 {
        warn!("Ignoring trailing bytes after {} edges", edges);
    }

    let graph = DirectedGraph::from_edges(vertices, edge_list)?;
    debug!("Read graph with {} vertices and {} edges", vertices, edges);
    Ok(graph)
}

/// Loads a graph file from disk
pub fn load_graph(path: impl AsRef<Path>) -> Result<DirectedGraph<i64>> {
    let file = File::open(path.as_ref())?;
    read_graph(BufReader::new(file))
}

/// Writes a graph in the binary format
///
/// Fails with [`Error::Encoding`] if a vertex id or a cost does not fit the
/// 32-bit fields of the format.
pub fn write_graph<G, W>(graph: &G, writer: &mut W) -> Result<()>
where
    G: Graph<i64>,
    W: Write,
{
    let vertices = u32::try_from(graph.vertex_count())
        .map_err(|_| Error::Encoding(format!("vertex count {}", graph.vertex_count())))?;
    let edges = u32::try_from(graph.edge_count())
        .map_err(|_| Error::Encoding(format!("edge count {}", graph.edge_count())))?;
    writer.write_all(&vertices.to_be_bytes())?;
    writer.write_all(&edges.to_be_bytes())?;

    for (from, to, weight) in graph.edges() {
        // Vertex ids are bounded by the vertex count checked above.
        writer.write_all(&(from as u32).to_be_bytes())?;
        writer.write_all(&(to as u32).to_be_bytes())?;
        let cost = i32::try_from(weight)
            .map_err(|_| Error::Encoding(format!("cost {} on edge {} -> {}", weight, from, to)))?;
        writer.write_all(&cost.to_be_bytes())?;
    }
    Ok(())
}

/// Saves a graph to a file on disk
pub fn save_graph<G: Graph<i64>>(graph: &G, path: impl AsRef<Path>) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path.as_ref())?);
    write_graph(graph, &mut writer)?;
    writer.flush()?;
    Ok(())
}
