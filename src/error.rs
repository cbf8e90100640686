use crate::scalar::Kind;

/// Unified error type for the crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Two elements of different kinds were about to be compared. Raised
    /// before or during the first offending comparison, never coerced away.
    #[error("sequence elements are not uniformly comparable: {left} vs {right}")]
    TypeMismatch { left: Kind, right: Kind },

    /// Benchmark configuration rejected up front.
    #[error("invalid benchmark configuration: {0}")]
    Config(String),
}
