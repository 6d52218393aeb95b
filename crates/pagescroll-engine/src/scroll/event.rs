//! Completion notifications and lifecycle events

use std::fmt;

use tokio::sync::oneshot;
use uuid::Uuid;

/// Delivered once when a session reaches its destination
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollCompletion {
    pub session_id: Uuid,
    pub final_position: i64,
}

/// Callback invoked with the completion of a session
pub type CompletionCallback = Box<dyn FnOnce(ScrollCompletion)>;

/// Lifecycle events emitted by the controller to an optional listener
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScrollEvent {
    /// A session was created and is heading for `to`
    Started { session_id: Uuid, from: i64, to: i64 },
    /// A session reached its destination
    Completed(ScrollCompletion),
    /// A session was superseded or cancelled; the viewport stays at `position`
    Cancelled { session_id: Uuid, position: i64 },
    /// A session was stopped by user input
    Interrupted { session_id: Uuid, position: i64 },
}

/// Returned for every successfully started scroll
///
/// The completion arrives exactly once if the session finishes; if it is
/// cancelled the channel closes without a value.
pub struct ScrollHandle {
    session_id: Uuid,
    destination: i64,
    completion: oneshot::Receiver<ScrollCompletion>,
    /// `Some(None)` once the channel closed without a value
    outcome: Option<Option<ScrollCompletion>>,
}

impl ScrollHandle {
    pub(crate) fn new(
        session_id: Uuid,
        destination: i64,
        completion: oneshot::Receiver<ScrollCompletion>,
    ) -> Self {
        Self {
            session_id,
            destination,
            completion,
            outcome: None,
        }
    }

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    /// Resolved destination offset
    pub fn destination(&self) -> i64 {
        self.destination
    }

    fn poll_outcome(&mut self) {
        if self.outcome.is_some() {
            return;
        }
        match self.completion.try_recv() {
            Ok(completion) => self.outcome = Some(Some(completion)),
            Err(oneshot::error::TryRecvError::Closed) => self.outcome = Some(None),
            Err(oneshot::error::TryRecvError::Empty) => {}
        }
    }

    /// Non-blocking check for the completion
    pub fn try_completion(&mut self) -> Option<ScrollCompletion> {
        self.poll_outcome();
        self.outcome.flatten()
    }

    /// True once the session ended without completing
    pub fn is_cancelled(&mut self) -> bool {
        self.poll_outcome();
        matches!(self.outcome, Some(None))
    }

    /// Wait for the session to finish. `None` means it was cancelled.
    pub async fn finished(self) -> Option<ScrollCompletion> {
        match self.outcome {
            Some(outcome) => outcome,
            None => self.completion.await.ok(),
        }
    }
}

impl fmt::Debug for ScrollHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollHandle")
            .field("session_id", &self.session_id)
            .field("destination", &self.destination)
            .finish()
    }
}
