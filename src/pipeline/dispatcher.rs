use crossbeam_channel::Sender;
use log::debug;

use crate::pipeline::CancellationToken;

/// Feeds every vertex into the work channel exactly once.
///
/// Blocks while the channel is full. Dropping `work` on return closes the channel,
/// which is how workers learn that no more sources will come. Returns the number of
/// vertices sent.
pub(crate) fn dispatch<V: Clone>(vertices: &[V], work: Sender<V>, cancel: &CancellationToken) -> usize {
    let mut dispatched = 0;

    for vertex in vertices {
        if cancel.is_cancelled() {
            debug!("Dispatcher cancelled after {} of {} sources", dispatched, vertices.len());
            break;
        }
        if work.send(vertex.clone()).is_err() {
            // Every worker is gone
            debug!("Dispatcher lost all workers after {} sources", dispatched);
            break;
        }
        dispatched += 1;
    }

    debug!("Dispatcher finished: {} sources sent", dispatched);
    dispatched
}
