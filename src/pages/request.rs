//! In-flight Request Tracking
//!
//! Each kind of request a page makes (loading rooms, submitting a booking,
//! checking a price) gets its own [`RequestTracker`]. Starting a request
//! cancels the previous one of the same kind, and only the newest ticket may
//! write its result back into the page. Dropping the tracker, which happens
//! when a page is torn down, cancels whatever is still running.

use std::future::Future;

use tokio_util::sync::CancellationToken;

/// Handle for one started request
#[derive(Debug, Clone)]
pub struct Ticket {
    generation: u64,
    token: CancellationToken,
}

impl Ticket {
    /// Drive `fut` unless the ticket is cancelled first.
    ///
    /// Returns `None` when the request was superseded or the page went away;
    /// the caller must then leave page state alone.
    pub async fn run<F: Future>(&self, fut: F) -> Option<F::Output> {
        tokio::select! {
            biased;
            _ = self.token.cancelled() => None,
            output = fut => Some(output),
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Tracks the newest request of one kind
#[derive(Debug, Default)]
pub struct RequestTracker {
    generation: u64,
    in_flight: Option<CancellationToken>,
}

impl RequestTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new request, cancelling the one in flight
    pub fn begin(&mut self) -> Ticket {
        if let Some(previous) = self.in_flight.take() {
            tracing::debug!(generation = self.generation, "Superseding in-flight request");
            previous.cancel();
        }

        self.generation += 1;
        let token = CancellationToken::new();
        self.in_flight = Some(token.clone());

        Ticket {
            generation: self.generation,
            token,
        }
    }

    /// Whether `ticket` is still the newest live request
    pub fn accepts(&self, ticket: &Ticket) -> bool {
        ticket.generation == self.generation && !ticket.token.is_cancelled()
    }

    /// Retire `ticket`. Returns `false` if its result must be discarded.
    pub fn finish(&mut self, ticket: &Ticket) -> bool {
        if !self.accepts(ticket) {
            tracing::warn!(
                generation = ticket.generation,
                current = self.generation,
                "Discarding stale response"
            );
            return false;
        }
        self.in_flight = None;
        true
    }

    /// Cancel the request in flight, if any
    pub fn cancel(&mut self) {
        if let Some(token) = self.in_flight.take() {
            token.cancel();
        }
    }

    /// Whether a request is in flight
    pub fn is_busy(&self) -> bool {
        self.in_flight.is_some()
    }
}

impl Drop for RequestTracker {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newer_ticket_supersedes_older() {
        let mut tracker = RequestTracker::new();
        let first = tracker.begin();
        let second = tracker.begin();

        assert!(first.is_cancelled());
        assert!(!tracker.accepts(&first));
        assert!(tracker.accepts(&second));
        assert!(tracker.is_busy());

        assert!(!tracker.finish(&first));
        assert!(tracker.is_busy());
        assert!(tracker.finish(&second));
        assert!(!tracker.is_busy());
    }

    #[test]
    fn test_cancel_rejects_ticket() {
        let mut tracker = RequestTracker::new();
        let ticket = tracker.begin();
        tracker.cancel();

        assert!(ticket.is_cancelled());
        assert!(!tracker.finish(&ticket));
        assert!(!tracker.is_busy());
    }

    #[test]
    fn test_drop_cancels_in_flight() {
        let mut tracker = RequestTracker::new();
        let ticket = tracker.begin();
        drop(tracker);
        assert!(ticket.is_cancelled());
    }

    #[tokio::test]
    async fn test_run_completes_live_ticket() {
        let mut tracker = RequestTracker::new();
        let ticket = tracker.begin();
        assert_eq!(ticket.run(async { 42 }).await, Some(42));
    }

    #[tokio::test]
    async fn test_run_stops_on_cancellation() {
        let mut tracker = RequestTracker::new();
        let ticket = tracker.begin();
        tracker.begin();

        let output = ticket.run(std::future::pending::<u32>()).await;
        assert_eq!(output, None);
    }
}
