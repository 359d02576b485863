use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared flag that asks a running pipeline to stop early.
///
/// Clones observe the same flag, so one clone can be handed to another thread (or a
/// signal handler) while the pipeline holds the other.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raises the flag. Workers stop claiming new sources and the dispatcher stops
    /// producing; results already computed are still delivered.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }
}
