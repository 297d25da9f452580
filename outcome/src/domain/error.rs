//! Error types raised by the outcome core.
//!
//! Both variants describe caller mistakes that surface immediately. A fault
//! carried inside an [`Outcome`](super::Outcome) is data, not an error, and
//! never appears here.

use thiserror::Error;

use super::Status;

/// Errors returned by outcome constructors and status decoding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OutcomeError {
    /// A setter or factory received a status outside the subset it accepts.
    #[error("{operation} does not accept status {status}; expected one of {allowed}")]
    InvalidStatusKind {
        /// Name of the rejecting operation.
        operation: &'static str,
        /// The status that was supplied.
        status: Status,
        /// Human-readable list of accepted statuses.
        allowed: &'static str,
    },

    /// A status name did not match any known variant.
    #[error("unknown status name '{name}'")]
    UnknownStatusName {
        /// The token that failed to decode.
        name: String,
    },
}

impl OutcomeError {
    pub(crate) const fn invalid_kind(
        operation: &'static str,
        status: Status,
        allowed: &'static str,
    ) -> Self {
        Self::InvalidStatusKind {
            operation,
            status,
            allowed,
        }
    }
}
