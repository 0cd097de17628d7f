use std::fmt::Debug;
use num_traits::{PrimInt, Signed};

use crate::algorithm::{Eccentricity, ShortestPathResult};

/// Everything computed for one source vertex
///
/// Built by exactly one worker and moved to the writer through the result queue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultRecord<W>
where
    W: PrimInt + Signed + Debug,
{
    /// Source vertex ID
    pub source: usize,
    /// Farthest reachable vertex and its distance
    pub eccentricity: Eccentricity<W>,
    /// Path from the source to the eccentric vertex, both included
    pub path: Vec<usize>,
    /// Full shortest path tree of the source
    pub distances: ShortestPathResult<W>,
}
