use log::debug;

use crate::data_structures::{Cancellation, Producer};
use crate::pipeline::Token;
use crate::Result;

/// Pushes every source in increasing order, then one stop token per worker
///
/// Returns the number of sources dispatched.
pub(crate) fn dispatch(
    nodes: usize,
    workers: usize,
    queue: &Producer<Token>,
    cancel: &Cancellation,
) -> Result<usize> {
    for source in 0..nodes {
        queue.push(Token::Source(source), cancel)?;
    }
    debug!("Done dispatching {} nodes", nodes);

    for _ in 0..workers {
        queue.push(Token::Stop, cancel)?;
    }
    Ok(nodes)
}
