use thiserror::Error;


pub type Result<T> = std::result::Result<T, IntervalError>;


/// Errors reported by [`IntervalSkiplist`] operations.
///
/// Only `insert` and `update` validate their arguments; every other misuse
/// (removing an unknown marker, querying an empty list, querying an empty
/// sub-range) is defined behavior and yields empty results.
///
/// [`IntervalSkiplist`]: crate::IntervalSkiplist
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IntervalError {
    /// The marker passed to `insert` already maps to a stored interval.
    #[error("marker already maps to a stored interval")]
    DuplicateMarker,
    /// The interval's start endpoint sorted strictly after its end endpoint.
    #[error("interval start sorts after its end")]
    ReversedEndpoints,
    /// An interval endpoint did not sort strictly between the sentinel
    /// bounds the list was constructed with.
    #[error("interval endpoint does not sort strictly between the sentinel bounds")]
    EndpointOutOfBounds,
    /// The edge decoration diverged from the stored intervals. Raised only by
    /// [`verify_marker_invariant`], and indicates a bug in the marker
    /// maintenance code rather than caller misuse.
    ///
    /// [`verify_marker_invariant`]: crate::IntervalSkiplist::verify_marker_invariant
    #[error("marker invariant violated: {0}")]
    InvariantViolation(String),
}

impl IntervalError {
    /// Whether this error reports a violated argument precondition, as
    /// opposed to an internal invariant failure.
    #[must_use]
    pub fn is_invalid_argument(&self) -> bool {
        !matches!(self, Self::InvariantViolation(_))
    }
}
