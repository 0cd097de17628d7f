use std::fmt::Debug;
use num_traits::{PrimInt, Signed};

use crate::algorithm::ShortestPathResult;
use crate::{Error, Result};

/// The farthest vertex reachable from a source, with its distance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Eccentricity<W> {
    /// The eccentric vertex
    pub node: usize,
    /// Shortest distance from the source to `node`
    pub cost: W,
}

/// Finds the reachable vertex, other than the source, at maximum distance
///
/// Ties go to the smallest vertex id. When the source reaches no other vertex the
/// eccentricity is the source itself, at its own distance (zero).
pub fn eccentricity<W>(result: &ShortestPathResult<W>) -> Result<Eccentricity<W>>
where
    W: PrimInt + Signed + Debug,
{
    let source = result.source;
    let own = result
        .distances
        .get(source)
        .copied()
        .flatten()
        .ok_or(Error::InconsistentResult(source))?;

    let mut best = Eccentricity { node: source, cost: own };
    let mut found = false;
    for (node, distance) in result.distances.iter().enumerate() {
        let Some(cost) = *distance else {
            continue;
        };
        if node != source && (!found || cost > best.cost) {
            best = Eccentricity { node, cost };
            found = true;
        }
    }
    Ok(best)
}
