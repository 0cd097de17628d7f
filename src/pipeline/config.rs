use crate::{Error, Result};

/// What to do when the analysis of a single source fails
/// (negative cycle, cost overflow, inconsistent predecessors)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Log the failure, produce no record for that source and keep going;
    /// the run is still reported as failed
    #[default]
    SkipSource,
    /// Cancel the whole run at the first failure
    Abort,
}

/// Settings of a pipeline run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    /// Number of worker threads; clamped to the vertex count at run time
    pub threads: usize,
    /// Print human-readable records instead of the binary format
    pub print: bool,
    /// Handling of per-source failures
    pub failure_policy: FailurePolicy,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        PipelineConfig {
            threads: 4,
            print: false,
            failure_policy: FailurePolicy::default(),
        }
    }
}

impl PipelineConfig {
    /// Create a configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of worker threads
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = threads;
        self
    }

    /// Enable or disable the human-readable output
    pub fn with_print(mut self, print: bool) -> Self {
        self.print = print;
        self
    }

    /// Set the per-source failure policy
    pub fn with_failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.failure_policy = policy;
        self
    }

    /// Checks that the configuration can run
    pub fn validate(&self) -> Result<()> {
        if self.threads == 0 {
            return Err(Error::InvalidConfig("at least one worker thread is needed".into()));
        }
        Ok(())
    }

    /// Number of workers actually spawned for a graph with `nodes` vertices
    pub fn workers_for(&self, nodes: usize) -> usize {
        self.threads.min(nodes).max(1)
    }
}
