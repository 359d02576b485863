//! Producer / worker pool / consumer pipeline computing one shortest path tree per
//! vertex.
//!
//! ```text
//! dispatcher --(work channel)--> workers x N --(result channel)--> collector --> sink
//! ```
//!
//! Both channels are bounded, so a slow sink throttles the workers and busy workers
//! throttle the dispatcher. Every blocking call is released when the peer drops
//! its end of the channel: the dispatcher closes the work channel when it runs out
//! of sources, workers exit on a closed channel, and the collector drops its
//! receiver when it stops early.

pub mod cancel;
pub mod collector;
pub mod config;
mod dispatcher;
mod worker;

pub use cancel::CancellationToken;
pub use collector::ResultCollector;
pub use config::PipelineConfig;

use crossbeam_channel::bounded;
use log::{info, warn};
use std::thread;
use std::time::{Duration, Instant};

use crate::algorithm::{Dijkstra, GraphResult, ShortestPathAlgorithm};
use crate::graph::Graph;
use crate::sink::ResultSink;
use crate::{Error, Result};

/// How a pipeline run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineStatus {
    /// Every source was computed and delivered
    Completed,
    /// Cancellation was requested; only part of the results were delivered
    Cancelled,
}

/// Summary of a pipeline run
#[derive(Debug, Clone)]
pub struct PipelineReport {
    pub status: PipelineStatus,
    /// Number of results the run was expected to produce (the vertex count)
    pub expected: usize,
    /// Number of results handed to the sink
    pub delivered: usize,
    /// Number of sources placed on the work channel
    pub dispatched: usize,
    /// Sources computed by each worker
    pub per_worker: Vec<usize>,
    pub elapsed: Duration,
}

/// All-sources shortest path computation over a borrowed graph
///
/// Every call to [`Pipeline::run`] creates its own channels and threads, so one
/// pipeline can be run repeatedly and several pipelines can run side by side.
#[derive(Debug)]
pub struct Pipeline<'g, G, A = Dijkstra>
where
    G: Graph,
{
    graph: &'g G,
    algorithm: A,
    config: PipelineConfig,
    cancel: CancellationToken,
}

impl<'g, G> Pipeline<'g, G, Dijkstra>
where
    G: Graph,
{
    /// Creates a pipeline running Dijkstra from every vertex of `graph`
    pub fn new(graph: &'g G, config: PipelineConfig) -> Self {
        Pipeline {
            graph,
            algorithm: Dijkstra::new(),
            config,
            cancel: CancellationToken::new(),
        }
    }
}

impl<'g, G, A> Pipeline<'g, G, A>
where
    G: Graph + Sync,
    G::Vertex: Send + Sync,
    G::Weight: Send,
    A: ShortestPathAlgorithm<G> + Sync,
{
    /// Replace the single-source algorithm
    pub fn with_algorithm<B>(self, algorithm: B) -> Pipeline<'g, G, B>
    where
        B: ShortestPathAlgorithm<G> + Sync,
    {
        Pipeline {
            graph: self.graph,
            algorithm,
            config: self.config,
            cancel: self.cancel,
        }
    }

    /// Use an externally owned cancellation token
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = token;
        self
    }

    /// Token that cancels this pipeline when raised
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Computes shortest paths from every vertex and streams the results to `sink`.
    ///
    /// Results arrive in completion order, not vertex order. Blocks until every
    /// result was delivered, the run was cancelled, or an error stopped it; all
    /// worker threads have exited when this returns.
    pub fn run<S>(&self, sink: &mut S) -> Result<PipelineReport>
    where
        S: ResultSink<G::Vertex, G::Weight> + ?Sized,
    {
        self.config.validate()?;

        let start = Instant::now();
        let vertices = self.graph.vertices();
        let expected = vertices.len();
        info!(
            "Starting {} pipeline: {} sources, {} workers, capacities {}/{}",
            self.algorithm.name(),
            expected,
            self.config.workers,
            self.config.work_capacity,
            self.config.result_capacity
        );

        let (work_tx, work_rx) = bounded::<G::Vertex>(self.config.work_capacity);
        let (result_tx, result_rx) = bounded::<Result<GraphResult<G>>>(self.config.result_capacity);
        let graph = self.graph;
        let algorithm = &self.algorithm;
        let cancel = &self.cancel;

        let mut collector = ResultCollector::new(expected);

        let (collected, dispatched, per_worker, panicked) = thread::scope(|scope| {
            let dispatcher = scope.spawn(move || dispatcher::dispatch(vertices, work_tx, cancel));

            let workers: Vec<_> = (0..self.config.workers)
                .map(|id| {
                    let work_rx = work_rx.clone();
                    let result_tx = result_tx.clone();
                    scope.spawn(move || worker::run_worker(id, graph, algorithm, work_rx, result_tx, cancel))
                })
                .collect();

            // Only the threads may hold channel ends, or closure is never observed
            drop(work_rx);
            drop(result_tx);

            let collected = collector.collect(result_rx, sink);

            let mut panicked = false;
            let dispatched = match dispatcher.join() {
                Ok(dispatched) => dispatched,
                Err(_) => {
                    panicked = true;
                    0
                }
            };
            let mut per_worker = Vec::with_capacity(workers.len());
            for handle in workers {
                match handle.join() {
                    Ok(computed) => per_worker.push(computed),
                    Err(_) => {
                        panicked = true;
                        per_worker.push(0);
                    }
                }
            }

            (collected, dispatched, per_worker, panicked)
        });

        let complete = collected?;
        if panicked {
            return Err(Error::WorkerPanicked);
        }

        let status = if complete {
            PipelineStatus::Completed
        } else if self.cancel.is_cancelled() {
            warn!(
                "Pipeline cancelled: {} of {} results delivered",
                collector.delivered(),
                expected
            );
            PipelineStatus::Cancelled
        } else {
            // Producers vanished without cancellation or panic
            return Err(Error::WorkerPanicked);
        };

        let report = PipelineReport {
            status,
            expected,
            delivered: collector.delivered(),
            dispatched,
            per_worker,
            elapsed: start.elapsed(),
        };
        info!(
            "Pipeline finished: {:?}, {}/{} results in {:?}",
            report.status, report.delivered, report.expected, report.elapsed
        );
        Ok(report)
    }
}
