use std::fmt::Debug;
use num_traits::{PrimInt, Signed};
use crate::graph::Graph;
use crate::{Error, Result};

/// Result of a shortest path algorithm execution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPathResult<W>
where
    W: PrimInt + Signed + Debug,
{
    /// Distances from source to each vertex, `None` when unreachable
    pub distances: Vec<Option<W>>,

    /// Predecessor vertices in the shortest path tree
    pub predecessors: Vec<Option<usize>>,

    /// Source vertex ID
    pub source: usize,
}

/// Trait for shortest path algorithms
pub trait ShortestPathAlgorithm<W, G>
where
    W: PrimInt + Signed + Debug,
    G: Graph<W>,
{
    /// Compute shortest paths from a source vertex to all other vertices
    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Get the shortest path from source to target as a sequence of vertices
    fn get_path(&self, result: &ShortestPathResult<W>, target: usize) -> Result<Vec<usize>> {
        if target >= result.distances.len() || result.distances[target].is_none() {
            return Err(Error::PathReconstruction(result.source, target));
        }
        reconstruct_path(
            &result.predecessors,
            result.source,
            target,
            result.predecessors.len(),
        )
    }
}

/// Builds the path from `source` to `target` by following predecessor links backwards
///
/// The path holds at most `bound` vertices; a longer chain, a chain that loops or one
/// that ends before reaching the source makes the linkage inconsistent.
pub fn reconstruct_path(
    predecessors: &[Option<usize>],
    source: usize,
    target: usize,
    bound: usize,
) -> Result<Vec<usize>> {
    let broken = || Error::PathReconstruction(source, target);
    if source >= predecessors.len() || target >= predecessors.len() {
        return Err(broken());
    }

    let mut path = vec![target];
    let mut current = target;
    while current != source {
        // A simple path never revisits a vertex, so the bound also catches loops.
        if path.len() >= bound {
            return Err(broken());
        }
        current = predecessors[current].ok_or_else(broken)?;
        if current >= predecessors.len() {
            return Err(broken());
        }
        path.push(current);
    }

    path.reverse();
    Ok(path)
}
