//! Publish/subscribe abstraction (mechanics only).
//!
//! Publishers push a message once; every live subscription receives its own
//! copy. Views use this to learn that the data they render has changed.

use std::sync::mpsc::{Receiver, RecvError, TryRecvError};

/// A subscription to a message stream.
///
/// Designed for single-threaded consumption: the owning view drains it after
/// each user interaction.
#[derive(Debug)]
pub struct Subscription<M> {
    receiver: Receiver<M>,
}

impl<M> Subscription<M> {
    pub fn new(receiver: Receiver<M>) -> Self {
        Self { receiver }
    }

    /// Block until the next message is available.
    pub fn recv(&self) -> Result<M, RecvError> {
        self.receiver.recv()
    }

    /// Try to receive a message without blocking.
    pub fn try_recv(&self) -> Result<M, TryRecvError> {
        self.receiver.try_recv()
    }

    /// Collect every message that is already queued, without blocking.
    pub fn drain(&self) -> Vec<M> {
        self.receiver.try_iter().collect()
    }
}

/// Event bus (pub/sub abstraction).
///
/// Delivery is in publish order per subscriber. There is no persistence: a
/// subscriber only sees messages published after it subscribed.
pub trait EventBus<M>: Send + Sync {
    type Error: core::fmt::Debug + Send + Sync + 'static;

    fn publish(&self, message: M) -> Result<(), Self::Error>;

    fn subscribe(&self) -> Subscription<M>;
}
