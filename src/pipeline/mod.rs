//! The dispatch → compute → write pipeline.
//!
//! One dispatcher thread feeds source ids to a pool of workers through a bounded
//! queue; each worker runs a [`ShortestPathAlgorithm`], extracts the eccentricity and
//! the path to it, and hands the [`ResultRecord`] to a single writer through a second,
//! independent bounded queue. Both queues hold as many items as there are workers.
//!
//! Workers stop on a stop token (one per worker, pushed after the last source). A fatal
//! error anywhere cancels the run, waking every thread blocked on a queue.

pub mod config;
mod dispatcher;
mod worker;
mod writer;

pub use config::{FailurePolicy, PipelineConfig};

use std::fmt::Debug;
use std::io::Write;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;
use log::{debug, error, info};
use num_traits::{PrimInt, Signed};

use crate::algorithm::ShortestPathAlgorithm;
use crate::data_structures::{bounded, Cancellation};
use crate::graph::Graph;
use crate::output::record::ResultRecord;
use crate::{Error, Result};
use worker::Worker;

/// Unit of work on the dispatch queue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// Analyse this source
    Source(usize),
    /// No more work for the receiving worker
    Stop,
}

/// Shared progress counters
#[derive(Debug, Default)]
pub struct Progress {
    /// Sources popped by workers
    pub computed: AtomicUsize,
    /// Records serialized by the writer
    pub written: AtomicUsize,
}

/// A source whose analysis failed; no record was produced for it
#[derive(Debug)]
pub struct SourceFailure {
    pub source: usize,
    pub error: Error,
}

/// Outcome of a pipeline run
#[derive(Debug, Default)]
pub struct RunReport {
    /// Vertex count of the graph
    pub nodes: usize,
    /// Worker threads spawned
    pub workers: usize,
    /// Sources pushed by the dispatcher
    pub dispatched: usize,
    /// Sources picked up by workers
    pub computed: usize,
    /// Records written
    pub written: usize,
    /// Sources that produced no record
    pub failures: Vec<SourceFailure>,
    /// Fatal errors of the pipeline threads
    pub errors: Vec<Error>,
    /// Whether the run was cancelled
    pub cancelled: bool,
}

impl RunReport {
    /// True when every source was analysed and written without any error
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
            && self.errors.is_empty()
            && !self.cancelled
            && self.written == self.nodes
    }
}

/// Runs the three-stage pipeline over a graph
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    config: PipelineConfig,
}

impl Pipeline {
    /// Create a pipeline with the given configuration
    pub fn new(config: PipelineConfig) -> Self {
        Pipeline { config }
    }

    /// The configuration of this pipeline
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Analyses every source of `graph` and writes the records to `out`
    ///
    /// Only an invalid configuration is returned as an error; failures during the run
    /// are collected in the [`RunReport`].
    pub fn run<W, G, A, O>(&self, algorithm: &A, graph: &G, out: &mut O) -> Result<RunReport>
    where
        W: PrimInt + Signed + Debug + Send,
        G: Graph<W> + Sync,
        A: ShortestPathAlgorithm<W, G> + Sync,
        O: Write + Send,
    {
        self.run_with_cancellation(algorithm, graph, out, &Cancellation::new())
    }

    /// Same as [`run`](Self::run), with a cancellation signal owned by the caller
    pub fn run_with_cancellation<W, G, A, O>(
        &self,
        algorithm: &A,
        graph: &G,
        out: &mut O,
        cancel: &Cancellation,
    ) -> Result<RunReport>
    where
        W: PrimInt + Signed + Debug + Send,
        G: Graph<W> + Sync,
        A: ShortestPathAlgorithm<W, G> + Sync,
        O: Write + Send,
    {
        self.config.validate()?;
        let nodes = graph.vertex_count();
        let workers = self.config.workers_for(nodes);
        debug!("Running {} over {} nodes with {} workers", algorithm.name(), nodes, workers);

        let progress = Progress::default();
        let (token_tx, token_rx) = bounded::<Token>(workers);
        let (result_tx, result_rx) = bounded::<ResultRecord<W>>(workers);
        let mut report = RunReport {
            nodes,
            workers,
            ..Default::default()
        };

        // Fatal errors cancel the run so that no peer stays blocked on a queue.
        // Errors that merely follow a cancellation are not reported again.
        let fail = |errors: &mut Vec<Error>, error: Error| {
            let consequence = matches!(error, Error::Cancelled)
                || (cancel.is_cancelled() && matches!(error, Error::QueueClosed));
            if !consequence {
                error!("{}", error);
                cancel.cancel();
                errors.push(error);
            }
        };

        thread::scope(|scope| {
            let dispatcher = scope.spawn(move || {
                let dispatched = dispatcher::dispatch(nodes, workers, &token_tx, cancel);
                if dispatched.is_err() {
                    cancel.cancel();
                }
                dispatched
            });

            let handles: Vec<_> = (0..workers)
                .map(|id| {
                    let worker = Worker {
                        id,
                        algorithm,
                        graph,
                        progress: &progress,
                        cancel,
                        policy: self.config.failure_policy,
                    };
                    let tokens = token_rx.clone();
                    let results = result_tx.clone();
                    scope.spawn(move || {
                        let outcome = worker.run(tokens, results);
                        if matches!(outcome, Err(ref e) if !matches!(e, Error::Cancelled)) {
                            cancel.cancel();
                        }
                        outcome
                    })
                })
                .collect();
            // The queues close once the threads holding the remaining ends are done
            drop(token_rx);
            drop(result_tx);

            let print = self.config.print;
            let progress = &progress;
            let writer = scope.spawn(move || {
                let written = writer::write_records(nodes, print, result_rx, out, progress, cancel);
                if matches!(written, Err(ref e) if !matches!(e, Error::Cancelled)) {
                    cancel.cancel();
                }
                written
            });
            debug!("All threads created, waiting for workers");

            // Workers first, then the dispatcher, then the writer
            for (id, handle) in handles.into_iter().enumerate() {
                match handle.join() {
                    Ok(Ok(failures)) => report.failures.extend(failures),
                    Ok(Err(e)) => fail(&mut report.errors, e),
                    Err(_) => fail(&mut report.errors, Error::ThreadPanicked("worker")),
                }
                debug!("Worker {} joined", id);
            }
            match dispatcher.join() {
                Ok(Ok(dispatched)) => report.dispatched = dispatched,
                Ok(Err(e)) => fail(&mut report.errors, e),
                Err(_) => fail(&mut report.errors, Error::ThreadPanicked("dispatcher")),
            }
            debug!("Dispatcher joined, waiting for writer");
            match writer.join() {
                Ok(Ok(written)) => report.written = written,
                Ok(Err(e)) => fail(&mut report.errors, e),
                Err(_) => fail(&mut report.errors, Error::ThreadPanicked("writer")),
            }
        });

        report.computed = progress.computed.load(Ordering::Relaxed);
        report.written = report.written.max(progress.written.load(Ordering::Relaxed));
        report.cancelled = cancel.is_cancelled();
        for failure in &report.failures {
            error!("Source {}: {}", failure.source, failure.error);
        }
        info!(
            "{} of {} nodes fully processed ({} computed, {} failed)",
            report.written,
            nodes,
            report.computed,
            report.failures.len()
        );
        Ok(report)
    }
}
