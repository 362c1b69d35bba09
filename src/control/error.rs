//! Error type for forcing deferred values.

/// Represents a failure to obtain the value of a deferred computation.
///
/// Forcing normally either returns the memoized value or runs the
/// initializer exactly once. The two cases below are the only ways that
/// can go wrong, and both are permanent for the cell involved.
///
/// # Examples
///
/// ```rust
/// use lazy_array::control::ForceError;
///
/// assert_eq!(
///     ForceError::Poisoned.to_string(),
///     "deferred value is poisoned: its initializer panicked"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ForceError {
    /// The value was requested again while its own initializer was running.
    #[error("deferred value was forced re-entrantly from its own initializer")]
    Reentrant,
    /// A previous attempt to compute the value panicked.
    #[error("deferred value is poisoned: its initializer panicked")]
    Poisoned,
}
