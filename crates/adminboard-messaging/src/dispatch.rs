//! Delivery dispatch: hand a message to a session without blocking the
//! caller and without leaking unawaited futures.

use crate::messages::ControlMessage;
use crate::session::{Delivery, DeliveryFuture, Session};

/// Deliver `message` through `session`.
///
/// Returns `true` as soon as the session accepted the message, even when the
/// underlying delivery is asynchronous and still in flight; returns `false`
/// only when the session offers no delivery method. Scheduling failures are
/// logged and swallowed so a UI helper never crashes its caller.
#[must_use]
pub fn dispatch(session: &dyn Session, message: &ControlMessage) -> bool {
    match session.deliver(message) {
        Delivery::Unsupported => {
            tracing::debug!(message = message.name(), "session offers no delivery method");
            false
        }
        Delivery::Sent => true,
        Delivery::Deferred(future) => {
            schedule(future, message.name());
            true
        }
    }
}

/// Drive a deferred delivery to completion.
///
/// With an ambient tokio runtime the future is spawned on it (safe from the
/// runtime's own threads and from foreign threads alike). Without one, the
/// future runs to completion on a throwaway current-thread runtime.
fn schedule(future: DeliveryFuture, message: &'static str) {
    if let Ok(handle) = tokio::runtime::Handle::try_current() {
        drop(handle.spawn(future));
        return;
    }
    match tokio::runtime::Builder::new_current_thread().enable_all().build() {
        Ok(runtime) => runtime.block_on(future),
        Err(error) => {
            tracing::warn!(message, %error, "deferred delivery dropped; no runtime available");
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::time::Duration;

    use serde_json::Value;

    use super::*;
    use crate::messages::PanelAction;

    struct RecordingSession {
        calls: RefCell<Vec<(String, Value)>>,
    }

    impl RecordingSession {
        fn new() -> Self {
            Self {
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    impl Session for RecordingSession {
        fn deliver(&self, message: &ControlMessage) -> Delivery {
            self.calls
                .borrow_mut()
                .push((message.name().to_string(), message.payload()));
            Delivery::Sent
        }
    }

    struct DeafSession;

    impl Session for DeafSession {
        fn deliver(&self, _message: &ControlMessage) -> Delivery {
            Delivery::Unsupported
        }
    }

    struct AsyncSession {
        delivered: Arc<AtomicBool>,
    }

    impl Session for AsyncSession {
        fn deliver(&self, _message: &ControlMessage) -> Delivery {
            let delivered = Arc::clone(&self.delivered);
            Delivery::deferred(async move {
                tokio::task::yield_now().await;
                delivered.store(true, Ordering::SeqCst);
            })
        }
    }

    fn toggle() -> ControlMessage {
        ControlMessage::Controlbar {
            action: PanelAction::Toggle,
        }
    }

    #[test]
    fn synchronous_delivery_returns_true_and_records() {
        let session = RecordingSession::new();
        assert!(dispatch(&session, &toggle()));
        let calls = session.calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "adminboard_controlbar");
        assert_eq!(calls[0].1["action"], "toggle");
    }

    #[test]
    fn sessions_without_delivery_yield_false() {
        assert!(!dispatch(&DeafSession, &toggle()));
    }

    #[test]
    fn deferred_delivery_completes_without_a_runtime() {
        let delivered = Arc::new(AtomicBool::new(false));
        let session = AsyncSession {
            delivered: Arc::clone(&delivered),
        };
        assert!(dispatch(&session, &toggle()));
        assert!(delivered.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn deferred_delivery_does_not_block_inside_a_runtime() {
        let delivered = Arc::new(AtomicBool::new(false));
        let session = AsyncSession {
            delivered: Arc::clone(&delivered),
        };

        assert!(dispatch(&session, &toggle()));

        let deadline = tokio::time::Instant::now() + Duration::from_secs(1);
        while !delivered.load(Ordering::SeqCst) {
            assert!(
                tokio::time::Instant::now() < deadline,
                "deferred delivery never completed"
            );
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
    }
}
