//! Transient user notifications with self-expiring timers.
//!
//! The same session-id idiom as the playback scheduler, on a smaller scale:
//! every `show` bumps the session and arms a dismiss timer; a timer waking
//! into a newer session is a designed no-op, so a fresh message is never
//! clipped by the timer of the one it replaced.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tracing::trace;

/// How long a notice stays up unless superseded.
pub const DISMISS_AFTER: Duration = Duration::from_secs(5);

/// A message surfaced to the user. `blocking` distinguishes a validation
/// failure ("graph must be connected") from an informational prompt
/// ("pick a vertex").
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub text: String,
    pub blocking: bool,
}

/// Publisher of the currently visible notice (if any).
///
/// Observers subscribe to a `watch` channel; `None` means no message is
/// showing.
pub struct Notifier {
    tx: watch::Sender<Option<Notice>>,
    session: Arc<AtomicU64>,
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(None);
        Self {
            tx,
            session: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<Option<Notice>> {
        self.tx.subscribe()
    }

    pub fn current(&self) -> Option<Notice> {
        self.tx.borrow().clone()
    }

    /// Publishes a notice and arms its dismiss timer.
    pub fn show(&self, text: impl Into<String>, blocking: bool) {
        let session = self.session.fetch_add(1, Ordering::SeqCst) + 1;
        self.tx.send_replace(Some(Notice {
            text: text.into(),
            blocking,
        }));

        let tx = self.tx.clone();
        let current = Arc::clone(&self.session);
        tokio::spawn(async move {
            tokio::time::sleep(DISMISS_AFTER).await;
            if current.load(Ordering::SeqCst) == session {
                tx.send_replace(None);
            } else {
                trace!(session, "stale dismiss timer, ignoring");
            }
        });
    }

    /// Dismisses the current notice immediately.
    pub fn close(&self) {
        self.session.fetch_add(1, Ordering::SeqCst);
        self.tx.send_replace(None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn notice_dismisses_itself() {
        let notifier = Notifier::new();
        notifier.show("pick a vertex", false);
        assert_eq!(
            notifier.current(),
            Some(Notice {
                text: "pick a vertex".into(),
                blocking: false
            })
        );

        tokio::time::sleep(DISMISS_AFTER + Duration::from_secs(1)).await;
        assert_eq!(notifier.current(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn newer_notice_survives_the_old_timer() {
        let notifier = Notifier::new();
        notifier.show("first", true);
        tokio::time::sleep(Duration::from_secs(3)).await;
        notifier.show("second", true);

        // the first notice's timer fires now — and must do nothing
        tokio::time::sleep(Duration::from_secs(3)).await;
        assert_eq!(notifier.current().unwrap().text, "second");

        // the second one expires on its own schedule
        tokio::time::sleep(Duration::from_secs(3)).await;
        assert_eq!(notifier.current(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn close_dismisses_immediately() {
        let notifier = Notifier::new();
        notifier.show("blocking error", true);
        notifier.close();
        assert_eq!(notifier.current(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn subscribers_observe_changes() {
        let notifier = Notifier::new();
        let mut rx = notifier.subscribe();
        notifier.show("hello", false);
        rx.changed().await.unwrap();
        assert_eq!(rx.borrow().as_ref().unwrap().text, "hello");
    }
}
