//! # Debounce Scheduler
//!
//! One cancelable timer per editor. Scheduling cancels whatever is pending,
//! so only the last request within the quiet interval ever fires.
//!
//! Every request gets a ticket. The owner hands the ticket back through
//! [`Debouncer::accept`] when the request fires; a ticket that was
//! superseded or canceled in the meantime is refused. This covers the window
//! where a timer already elapsed but its message was still in flight.

use std::time::Duration;
use tokio::time::sleep;
use tokio_util::sync::CancellationToken;

pub struct Debouncer {
    delay: Duration,
    ticket: u64,
    pending: Option<CancellationToken>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            ticket: 0,
            pending: None,
        }
    }

    /// Whether a request is scheduled and not yet accepted or canceled
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Schedule `fire` to run after the quiet interval, replacing any
    /// pending request. Must be called from within a tokio runtime.
    pub fn schedule<F>(&mut self, fire: F) -> u64
    where
        F: FnOnce(u64) + Send + 'static,
    {
        self.cancel();

        self.ticket = self.ticket.wrapping_add(1);
        let ticket = self.ticket;
        let cancel = CancellationToken::new();
        self.pending = Some(cancel.clone());

        let delay = self.delay;
        tokio::spawn(async move {
            tokio::select! {
                _ = cancel.cancelled() => return,
                _ = sleep(delay) => {}
            }
            if cancel.is_cancelled() {
                return;
            }
            fire(ticket);
        });

        ticket
    }

    /// Cancel the pending request, if any
    pub fn cancel(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.cancel();
        }
    }

    /// Claim a fired ticket. False if it is stale or was canceled.
    pub fn accept(&mut self, ticket: u64) -> bool {
        if self.pending.is_none() || ticket != self.ticket {
            return false;
        }
        self.pending = None;
        true
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}
