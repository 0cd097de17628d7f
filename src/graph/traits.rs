use std::fmt::Debug;
use num_traits::{PrimInt, Signed};

/// Trait representing a weighted directed graph
///
/// Weights are signed integers: negative edge costs are allowed.
pub trait Graph<W>: Debug
where
    W: PrimInt + Signed + Debug,
{
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns an iterator over all edges as `(from, to, weight)`, in insertion order
    fn edges(&self) -> Box<dyn Iterator<Item = (usize, usize, W)> + '_>;

    /// Returns an iterator over the outgoing edges from a vertex
    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_>;

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: usize) -> bool;

    /// Gets the smallest weight among the edges between two vertices, if any
    fn get_edge_weight(&self, from: usize, to: usize) -> Option<W>;
}

/// Trait for graph construction
///
/// Graphs are only mutated while being built; once handed to a pipeline they are
/// shared read-only.
pub trait MutableGraph<W>: Graph<W>
where
    W: PrimInt + Signed + Debug,
{
    /// Adds a directed edge between vertices with the given weight
    ///
    /// Parallel edges and self-loops are kept as given.
    fn add_edge(&mut self, from: usize, to: usize, weight: W) -> crate::Result<()>;
}
