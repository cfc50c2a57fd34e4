use super::release_summary::ReleaseSummary;

/// Published state of one aggregation session.
///
/// Transitions are driven exclusively by the fetch use case: `Idle` until
/// the first run, `Loading` while a request is in flight (previous
/// summaries are cleared), and `Ready` once a run resolves. Failures and
/// empty results are represented as a `Ready` state holding a single
/// synthetic Error/Info entry, so consumers only ever observe a fully
/// resolved state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AggregationState {
    #[default]
    Idle,
    Loading,
    Ready(Vec<ReleaseSummary>),
}

impl AggregationState {
    pub fn is_loading(&self) -> bool {
        matches!(self, AggregationState::Loading)
    }

    /// The resolved summaries, when the state is `Ready`.
    pub fn summaries(&self) -> Option<&[ReleaseSummary]> {
        match self {
            AggregationState::Ready(summaries) => Some(summaries),
            _ => None,
        }
    }

    /// True when the state is `Ready` and contains a synthetic Error entry.
    pub fn has_error(&self) -> bool {
        self.summaries()
            .is_some_and(|summaries| summaries.iter().any(ReleaseSummary::is_error))
    }
}
