//! Error types for routing address computations.
//!
//! Every variant describes a violated caller contract. None of them are
//! transient, so callers should surface them rather than retry.

/// Errors raised by the routing addressing operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RoutingError {
    /// An operation was applied to a value it is not defined for,
    /// such as asking the wildcard direction for its child slot.
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    /// A value was read in a state where it has no meaning, such as the
    /// coordinate of a routing path that does not reach a leaf.
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// An operation that needs at least one element was given none.
    #[error("Empty input: {0}")]
    EmptyInput(String),

    /// A routing path specifies a lower level below an unspecified one.
    #[error("Malformed routing path: {0}")]
    MalformedPath(String),

    /// Hardware parameters are outside the supported range.
    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Convenience alias used throughout the crate.
pub type RoutingResult<T> = Result<T, RoutingError>;
