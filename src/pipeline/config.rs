use crate::{Error, Result};

/// Work channel capacity used when none is given
pub const DEFAULT_WORK_CAPACITY: usize = 150;

/// Result channel capacity used when none is given
pub const DEFAULT_RESULT_CAPACITY: usize = 30;

/// Configuration for one pipeline run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    /// Number of worker threads
    pub workers: usize,
    /// Capacity of the bounded channel of pending source vertices
    pub work_capacity: usize,
    /// Capacity of the bounded channel of finished results
    pub result_capacity: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            workers: default_workers(),
            work_capacity: DEFAULT_WORK_CAPACITY,
            result_capacity: DEFAULT_RESULT_CAPACITY,
        }
    }
}

impl PipelineConfig {
    /// Set the number of worker threads
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    /// Set the work channel capacity. Zero makes every hand-off a rendezvous.
    pub fn with_work_capacity(mut self, capacity: usize) -> Self {
        self.work_capacity = capacity;
        self
    }

    /// Set the result channel capacity. Zero makes every hand-off a rendezvous.
    pub fn with_result_capacity(mut self, capacity: usize) -> Self {
        self.result_capacity = capacity;
        self
    }

    /// Checks that the configuration can make progress
    pub fn validate(&self) -> Result<()> {
        if self.workers == 0 {
            return Err(Error::InvalidConfig(
                "at least one worker is required".to_string(),
            ));
        }
        Ok(())
    }
}

/// Available hardware parallelism, or 1 if it cannot be determined
pub fn default_workers() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}
