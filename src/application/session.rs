use crate::digest::domain::{AggregationState, ReleaseSummary};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

/// Ticket identifying one aggregation run within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunTicket(u64);

/// Session-scoped owner of the published `AggregationState`.
///
/// One logical operation at a time: starting a new run supersedes any run
/// still in flight. Each run takes a monotonic sequence number on `begin`,
/// and `commit` only publishes a result while that number is still
/// current — a superseded run's result is discarded when it arrives, so
/// consumers never observe stale data overwriting a newer run.
#[derive(Debug, Default)]
pub struct DigestSession {
    sequence: AtomicU64,
    state: Mutex<AggregationState>,
}

impl DigestSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new run: bumps the sequence number and transitions to
    /// `Loading`, discarding any previously published summaries.
    pub fn begin(&self) -> RunTicket {
        let sequence = self.sequence.fetch_add(1, Ordering::SeqCst) + 1;
        *self.lock_state() = AggregationState::Loading;
        RunTicket(sequence)
    }

    /// Publishes a run's result, unless the run has been superseded.
    ///
    /// # Returns
    /// `true` if the result was committed, `false` if it was discarded.
    pub fn commit(&self, ticket: RunTicket, summaries: Vec<ReleaseSummary>) -> bool {
        let mut state = self.lock_state();
        if ticket.0 != self.sequence.load(Ordering::SeqCst) {
            return false;
        }
        *state = AggregationState::Ready(summaries);
        true
    }

    /// The currently published state.
    pub fn snapshot(&self) -> AggregationState {
        self.lock_state().clone()
    }

    fn lock_state(&self) -> std::sync::MutexGuard<'_, AggregationState> {
        self.state
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
