//! The delivery capability a host session exposes to the helpers.
//!
//! Hosts implement [`Session`] once, as an adapter over whatever transport
//! they own (a websocket, an SSE channel, a test recorder). The adapter
//! decides per call whether delivery happened synchronously, must be awaited,
//! or is not available at all.

use std::fmt;
use std::future::Future;
use std::pin::Pin;

use crate::messages::ControlMessage;

/// Boxed future produced by asynchronous delivery methods.
pub type DeliveryFuture = Pin<Box<dyn Future<Output = ()> + Send + 'static>>;

/// Outcome of a single delivery attempt.
pub enum Delivery {
    /// The session has no way to deliver this message.
    Unsupported,
    /// The message was handed over synchronously.
    Sent,
    /// Delivery is underway; the future completes it.
    Deferred(DeliveryFuture),
}

impl Delivery {
    /// Wrap an async delivery into the deferred variant.
    pub fn deferred(future: impl Future<Output = ()> + Send + 'static) -> Self {
        Self::Deferred(Box::pin(future))
    }
}

impl fmt::Debug for Delivery {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unsupported => formatter.write_str("Unsupported"),
            Self::Sent => formatter.write_str("Sent"),
            Self::Deferred(_) => formatter.write_str("Deferred(..)"),
        }
    }
}

/// A live UI connection able to carry control messages to its client.
pub trait Session {
    /// Attempt to deliver one message.
    ///
    /// Implementations must not block; long-running work belongs in a
    /// [`Delivery::Deferred`] future.
    fn deliver(&self, message: &ControlMessage) -> Delivery;
}
