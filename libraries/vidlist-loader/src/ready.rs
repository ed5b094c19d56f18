//! Player readiness and the loading indicator.
//!
//! Starting playback shows the loading indicator and hands out a
//! [`ReadyNotifier`] for the player frame. The indicator is dismissed when
//! the notifier fires or when a bounded timeout elapses, whichever comes
//! first. Starting another video cancels the previous wait.

use std::time::Duration;
use tokio::sync::oneshot;
use tokio_util::sync::CancellationToken;

/// How long to wait for the player before dismissing the indicator anyway.
pub const READY_TIMEOUT: Duration = Duration::from_secs(5);

/// How a readiness wait ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadyOutcome {
    /// The player signalled it finished loading
    Ready,
    /// The timeout elapsed first
    TimedOut,
    /// The wait was cancelled or the player went away
    Cancelled,
}

/// Fired by the player once it has loaded.
#[derive(Debug)]
pub struct ReadyNotifier {
    tx: oneshot::Sender<()>,
}

impl ReadyNotifier {
    pub fn notify(self) {
        // Receiver gone means the wait already ended.
        let _ = self.tx.send(());
    }
}

/// Awaits the matching [`ReadyNotifier`].
#[derive(Debug)]
pub struct ReadyWaiter {
    rx: oneshot::Receiver<()>,
    cancel: CancellationToken,
}

impl ReadyWaiter {
    /// Token that aborts this wait when cancelled.
    pub fn cancel_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    /// Wait for readiness, bounded by `timeout`.
    pub async fn wait(self, timeout: Duration) -> ReadyOutcome {
        tokio::select! {
            biased;
            () = self.cancel.cancelled() => ReadyOutcome::Cancelled,
            res = self.rx => match res {
                Ok(()) => ReadyOutcome::Ready,
                Err(_) => ReadyOutcome::Cancelled,
            },
            () = tokio::time::sleep(timeout) => ReadyOutcome::TimedOut,
        }
    }
}

/// Create a connected notifier/waiter pair.
pub fn ready_signal() -> (ReadyNotifier, ReadyWaiter) {
    let (tx, rx) = oneshot::channel();
    (
        ReadyNotifier { tx },
        ReadyWaiter {
            rx,
            cancel: CancellationToken::new(),
        },
    )
}

/// Loading overlay state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadingIndicator {
    message: Option<String>,
}

impl LoadingIndicator {
    pub fn show(&mut self, message: impl Into<String>) {
        self.message = Some(message.into());
    }

    pub fn hide(&mut self) {
        self.message = None;
    }

    pub fn is_visible(&self) -> bool {
        self.message.is_some()
    }

    /// Text currently displayed, if visible.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}
