use crossbeam_channel::{Receiver, Sender};
use log::debug;

use crate::algorithm::{GraphResult, ShortestPathAlgorithm};
use crate::graph::Graph;
use crate::pipeline::CancellationToken;
use crate::Result;

/// One worker of the pool.
///
/// Claims sources until the work channel is closed and empty, the collector hangs
/// up, or the pipeline is cancelled. Algorithm errors are forwarded to the
/// collector rather than handled here. Returns the number of sources computed.
pub(crate) fn run_worker<G, A>(
    id: usize,
    graph: &G,
    algorithm: &A,
    work: Receiver<G::Vertex>,
    results: Sender<Result<GraphResult<G>>>,
    cancel: &CancellationToken,
) -> usize
where
    G: Graph,
    A: ShortestPathAlgorithm<G>,
{
    let mut computed = 0;

    loop {
        if cancel.is_cancelled() {
            debug!("Worker {} cancelled", id);
            break;
        }

        let source = match work.recv() {
            Ok(source) => source,
            Err(_) => break,
        };

        let result = algorithm.compute_shortest_paths(graph, &source);
        computed += 1;

        if results.send(result).is_err() {
            debug!("Worker {}: collector is gone", id);
            break;
        }
    }

    debug!("Worker {} exiting after {} sources", id, computed);
    computed
}
