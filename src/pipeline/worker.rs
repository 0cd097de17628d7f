use std::fmt::Debug;
use std::sync::atomic::Ordering;
use log::{debug, error, warn};
use num_traits::{PrimInt, Signed};

use crate::algorithm::analysis::analyze_source;
use crate::algorithm::ShortestPathAlgorithm;
use crate::data_structures::{Cancellation, Consumer, Producer};
use crate::graph::Graph;
use crate::output::record::ResultRecord;
use crate::pipeline::{FailurePolicy, Progress, SourceFailure, Token};
use crate::Result;

/// Everything a worker borrows from the pipeline
pub(crate) struct Worker<'a, A, G> {
    pub id: usize,
    pub algorithm: &'a A,
    pub graph: &'a G,
    pub progress: &'a Progress,
    pub cancel: &'a Cancellation,
    pub policy: FailurePolicy,
}

impl<'a, A, G> Worker<'a, A, G> {
    /// Pops sources until a stop token arrives, pushing one record per analysed source
    ///
    /// Sources whose analysis fails are returned; with [`FailurePolicy::Abort`] the first
    /// such failure also cancels the run.
    pub fn run<W>(
        &self,
        tokens: Consumer<Token>,
        results: Producer<ResultRecord<W>>,
    ) -> Result<Vec<SourceFailure>>
    where
        W: PrimInt + Signed + Debug,
        G: Graph<W>,
        A: ShortestPathAlgorithm<W, G>,
    {
        let mut failures = Vec::new();
        loop {
            let source = match tokens.pop(self.cancel)? {
                Some(Token::Source(source)) => source,
                Some(Token::Stop) | None => break,
            };
            self.progress.computed.fetch_add(1, Ordering::Relaxed);

            match analyze_source(self.algorithm, self.graph, source) {
                Ok(record) => results.push(record, self.cancel)?,
                Err(error) => {
                    failures.push(SourceFailure { source, error });
                    if self.policy == FailurePolicy::Abort {
                        error!("Worker {}: failed on source {}, aborting", self.id, source);
                        self.cancel.cancel();
                        break;
                    }
                    warn!("Worker {}: failed on source {}, skipping it", self.id, source);
                }
            }
        }
        debug!("Worker {} done", self.id);
        Ok(failures)
    }
}
