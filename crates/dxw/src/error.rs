//! Error type for signal validation.

/// Invalid-input errors raised before any alignment work starts.
///
/// Every variant describes a signal the aligner refuses to accept. Once a
/// [`Signal`](crate::Signal) or [`SignalView`](crate::SignalView) exists, cost
/// matrix construction and backtracking cannot fail.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DxwError {
    /// Returned when a signal has zero length.
    #[error("signal must be non-empty")]
    EmptySignal,

    /// Returned when a signal contains NaN, infinity, or negative infinity.
    #[error("signal contains non-finite value at index {index}")]
    NonFiniteValue {
        /// Position of the first non-finite value found.
        index: usize,
    },
}
