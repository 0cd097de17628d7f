use std::fmt::Debug;
use num_traits::{PrimInt, Signed};
use rayon::prelude::*;

use crate::algorithm::eccentricity::eccentricity;
use crate::algorithm::{reconstruct_path, ShortestPathAlgorithm};
use crate::graph::Graph;
use crate::output::record::ResultRecord;
use crate::Result;

/// Computes the full record of a source: distances, eccentricity and the path to it
pub fn analyze_source<W, G, A>(algorithm: &A, graph: &G, source: usize) -> Result<ResultRecord<W>>
where
    W: PrimInt + Signed + Debug,
    G: Graph<W>,
    A: ShortestPathAlgorithm<W, G>,
{
    let distances = algorithm.compute_shortest_paths(graph, source)?;
    let eccentricity = eccentricity(&distances)?;
    let path = reconstruct_path(
        &distances.predecessors,
        source,
        eccentricity.node,
        graph.vertex_count(),
    )?;
    Ok(ResultRecord {
        source,
        eccentricity,
        path,
        distances,
    })
}

/// Analyses every source of the graph in parallel, keeping everything in memory
///
/// The returned vector is indexed by source.
pub fn analyze_all<W, G, A>(algorithm: &A, graph: &G) -> Vec<Result<ResultRecord<W>>>
where
    W: PrimInt + Signed + Debug + Send,
    G: Graph<W> + Sync,
    A: ShortestPathAlgorithm<W, G> + Sync,
{
    (0..graph.vertex_count())
        .into_par_iter()
        .map(|source| analyze_source(algorithm, graph, source))
        .collect()
}
