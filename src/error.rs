//! Typed errors for the estimator (SPEC_FULL.md §4.5, §7).

/// The concrete reason a traversal aborted.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    #[error("unknown native function: opcode {0}")]
    UnknownNativeFunction(i16),

    #[error("unknown user function: {0:?}")]
    UnknownUserFunction(String),

    #[error("unbound identifier: {0:?}")]
    UnboundIdentifier(String),

    #[error("cost accumulation overflowed i64")]
    CostOverflow,
}

/// The error returned by [`crate::estimator::Estimator::estimate`].
///
/// Wraps an [`ErrorKind`] with the `"estimation"` context the base spec
/// requires at the top-level entry point, while keeping the concrete kind
/// available via `#[source]`/`.kind()` for callers that want to match on it
/// rather than parse the rendered message.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("estimation: {kind}")]
pub struct EstimationError {
    #[source]
    kind: ErrorKind,
}

impl EstimationError {
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind }
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }
}

impl From<ErrorKind> for EstimationError {
    fn from(kind: ErrorKind) -> Self {
        Self::new(kind)
    }
}
