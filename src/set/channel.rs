//! Asynchronous delivery of a set's elements over a channel, for feeding consumer-driven
//! pipelines. Enabled by the `channel` cargo feature.
//!
//! Each producer runs on its own thread and walks a point-in-time snapshot of the set, so the set
//! is free to change (or be dropped) while the consumer drains the channel.

use std::hash::{BuildHasher, Hash};
use std::sync::mpsc::{self, Receiver};
use std::thread;

use super::MapSet;

impl<T: Hash + Eq, B: BuildHasher> MapSet<T, B> {
    /// Delivers each element of the set exactly once on the returned channel, then closes it.
    ///
    /// The elements are cloned into a snapshot up front; later mutation of the set doesn't affect
    /// what the channel delivers. The hand-off is a rendezvous: the producer thread blocks until
    /// the consumer receives each element, and dropping the [`Receiver`] is the only way to
    /// cancel it early.
    pub fn channel(&self) -> Receiver<T>
    where
        T: Clone + Send + 'static,
    {
        produce(self.iter().cloned().collect())
    }

    /// Consumes the set, delivering each element exactly once on the returned channel before
    /// closing it. Behaves as [`channel`](MapSet::channel) without cloning the elements.
    pub fn into_channel(self) -> Receiver<T>
    where
        T: Send + 'static,
    {
        produce(self.into_iter().collect())
    }
}

/// Sends each element of `snapshot` on a rendezvous channel from a spawned thread. The channel
/// closes when the snapshot is exhausted and the sender drops.
fn produce<T: Send + 'static>(snapshot: Vec<T>) -> Receiver<T> {
    let (sender, receiver) = mpsc::sync_channel(0);

    thread::spawn(move || {
        for item in snapshot {
            // A send only fails when the receiver is gone, meaning the consumer has cancelled.
            if sender.send(item).is_err() {
                break;
            }
        }
    });

    receiver
}
