use crate::graph::traits::{Graph, MutableGraph};
use crate::{Error, Result};
use num_traits::{PrimInt, Signed};
use std::fmt::Debug;

/// A directed graph stored as an edge list with a per-vertex outgoing index
#[derive(Debug, Clone)]
pub struct DirectedGraph<W>
where
    W: PrimInt + Signed + Debug,
{
    /// Number of vertices in the graph
    vertex_count: usize,

    /// All edges in insertion order: (source_vertex, target_vertex, weight)
    edges: Vec<(usize, usize, W)>,

    /// Outgoing edges for each vertex, as indices into `edges`
    outgoing: Vec<Vec<usize>>,
}

impl<W> DirectedGraph<W>
where
    W: PrimInt + Signed + Debug,
{
    /// Creates a new empty directed graph
    pub fn new() -> Self {
        DirectedGraph {
            vertex_count: 0,
            edges: Vec::new(),
            outgoing: Vec::new(),
        }
    }

    /// Creates a new directed graph with the specified number of vertices and no edges
    pub fn with_capacity(vertices: usize) -> Self {
        DirectedGraph {
            vertex_count: vertices,
            edges: Vec::new(),
            outgoing: vec![Vec::new(); vertices],
        }
    }

    /// Like [`with_capacity`](Self::with_capacity), failing with [`Error::Allocation`]
    /// instead of aborting when the per-vertex index cannot be allocated
    pub fn try_with_capacity(vertices: usize) -> Result<Self> {
        let mut outgoing = Vec::new();
        outgoing
            .try_reserve_exact(vertices)
            .map_err(|_| Error::Allocation(vertices))?;
        outgoing.resize_with(vertices, Vec::new);
        Ok(DirectedGraph {
            vertex_count: vertices,
            edges: Vec::new(),
            outgoing,
        })
    }

    /// Builds a graph from an edge list, checking every endpoint
    pub fn from_edges<I>(vertices: usize, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize, W)>,
    {
        let mut graph = Self::try_with_capacity(vertices)?;
        for (from, to, weight) in edges {
            graph.add_edge(from, to, weight)?;
        }
        Ok(graph)
    }

    /// Returns true if some edge has a negative weight
    pub fn has_negative_weights(&self) -> bool {
        self.edges.iter().any(|&(_, _, weight)| weight < W::zero())
    }
}

impl<W> Default for DirectedGraph<W>
where
    W: PrimInt + Signed + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<W> Graph<W> for DirectedGraph<W>
where
    W: PrimInt + Signed + Debug,
{
    fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    fn edge_count(&self) -> usize {
        self.edges.len()
    }

    fn edges(&self) -> Box<dyn Iterator<Item = (usize, usize, W)> + '_> {
        Box::new(self.edges.iter().copied())
    }

    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_> {
        match self.outgoing.get(vertex) {
            Some(indices) => Box::new(indices.iter().map(move |&i| {
                let (_, to, weight) = self.edges[i];
                (to, weight)
            })),
            None => Box::new(std::iter::empty()),
        }
    }

    fn has_vertex(&self, vertex: usize) -> bool {
        vertex < self.vertex_count
    }

    fn get_edge_weight(&self, from: usize, to: usize) -> Option<W> {
        self.outgoing_edges(from)
            .filter(|&(target, _)| target == to)
            .map(|(_, weight)| weight)
            .min()
    }
}

impl<W> MutableGraph<W> for DirectedGraph<W>
where
    W: PrimInt + Signed + Debug,
{
    fn add_edge(&mut self, from: usize, to: usize, weight: W) -> Result<()> {
        if !self.has_vertex(from) || !self.has_vertex(to) {
            return Err(Error::InvalidEdge(from, to));
        }
        self.outgoing[from].push(self.edges.len());
        self.edges.push((from, to, weight));
        Ok(())
    }
}
