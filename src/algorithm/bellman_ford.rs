use std::fmt::Debug;
use num_traits::{PrimInt, Signed};

use crate::graph::Graph;
use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::{Error, Result};

/// Bellman-Ford algorithm over the edge list of the graph
///
/// Handles negative weights and fails with [`Error::NegativeCycle`] when a negative
/// cycle is reachable from the source. Cycles that the source cannot reach do not
/// affect the result. Runs in `O(n * m)`.
#[derive(Debug, Default, Clone, Copy)]
pub struct BellmanFord;

impl BellmanFord {
    /// Creates a new Bellman-Ford algorithm instance
    pub fn new() -> Self {
        BellmanFord
    }

    /// Relaxes every edge leaving a reached vertex once, returning whether any distance changed
    fn relax_all<W, G>(
        graph: &G,
        source: usize,
        distances: &mut [Option<W>],
        predecessors: &mut [Option<usize>],
    ) -> Result<bool>
    where
        W: PrimInt + Signed + Debug,
        G: Graph<W>,
    {
        let mut changed = false;
        for (from, to, weight) in graph.edges() {
            let Some(dist_from) = distances[from] else {
                continue;
            };
            let candidate = dist_from
                .checked_add(&weight)
                .ok_or(Error::CostOverflow(source))?;
            let improves = match distances[to] {
                None => true,
                Some(current) => candidate < current,
            };
            if improves {
                distances[to] = Some(candidate);
                predecessors[to] = Some(from);
                changed = true;
            }
        }
        Ok(changed)
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for BellmanFord
where
    W: PrimInt + Signed + Debug,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Bellman-Ford"
    }

    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>> {
        if !graph.has_vertex(source) {
            return Err(Error::SourceNotFound);
        }

        let n = graph.vertex_count();
        let mut distances: Vec<Option<W>> = vec![None; n];
        let mut predecessors: Vec<Option<usize>> = vec![None; n];
        distances[source] = Some(W::zero());

        // n - 1 rounds settle every shortest simple path
        let mut settled = false;
        for _ in 1..n {
            if !Self::relax_all(graph, source, &mut distances, &mut predecessors)? {
                settled = true;
                break;
            }
        }

        // Any improvement after n - 1 rounds comes from a reachable negative cycle
        if !settled && Self::relax_all(graph, source, &mut distances, &mut predecessors)? {
            return Err(Error::NegativeCycle(source));
        }

        Ok(ShortestPathResult {
            distances,
            predecessors,
            source,
        })
    }
}
