use crossbeam_channel::Receiver;
use log::trace;

use crate::algorithm::ShortestPathResult;
use crate::graph::{EdgeWeight, VertexId};
use crate::sink::ResultSink;
use crate::Result;

/// Drains the result channel into a sink, counting deliveries
#[derive(Debug)]
pub struct ResultCollector {
    expected: usize,
    delivered: usize,
}

impl ResultCollector {
    /// Creates a collector waiting for `expected` results
    pub fn new(expected: usize) -> Self {
        ResultCollector {
            expected,
            delivered: 0,
        }
    }

    pub fn expected(&self) -> usize {
        self.expected
    }

    /// Results handed to the sink so far
    pub fn delivered(&self) -> usize {
        self.delivered
    }

    /// Receives until `expected` results were delivered or every producer is gone.
    ///
    /// Each result goes to the sink before the next one is received. Returns true if
    /// all expected results were delivered. On any error the receiver is dropped on
    /// return, which disconnects the workers still trying to send.
    pub fn collect<V, W, S>(
        &mut self,
        results: Receiver<Result<ShortestPathResult<V, W>>>,
        sink: &mut S,
    ) -> Result<bool>
    where
        V: VertexId,
        W: EdgeWeight,
        S: ResultSink<V, W> + ?Sized,
    {
        while self.delivered < self.expected {
            let result = match results.recv() {
                Ok(result) => result?,
                Err(_) => break,
            };

            trace!(
                "Collected source {:?} ({}/{})",
                result.source,
                self.delivered + 1,
                self.expected
            );
            sink.accept(result)?;
            self.delivered += 1;
        }

        sink.finish()?;
        Ok(self.delivered == self.expected)
    }
}
