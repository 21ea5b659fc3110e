//! Engine error taxonomy
//!
//! Every fallible operation in this crate returns [`EngineResult`]. The
//! variants carry enough context (the offending symbol, field, or id) for
//! a caller to build a user-facing message without re-deriving state.

use thiserror::Error;

/// Any failure the engine can report.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// A unit symbol outside the accepted set.
    #[error("unrecognized unit symbol `{symbol}`")]
    InvalidUnit { symbol: String },

    /// A magnitude outside the domain of the value being built.
    #[error("invalid {field}: `{value}` (must be positive)")]
    InvalidMagnitude {
        field: &'static str,
        value: String,
    },

    /// A stored profile holds a field no valid construction could produce.
    #[error("corrupt profile: {field} is `{value}`")]
    InvalidProfile {
        field: &'static str,
        value: String,
    },

    /// A ratio's divisor was zero.
    #[error("division by zero while computing {context}")]
    DivisionByZero { context: &'static str },

    /// The upstream store has no profile under this id.
    #[error("no profile found for `{id}`")]
    ProfileNotFound { id: String },
}

/// Crate-wide result alias.
pub type EngineResult<T> = Result<T, EngineError>;
