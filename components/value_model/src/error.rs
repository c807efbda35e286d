//! Runtime error types.
//!
//! Every error here is recoverable; the runtime never aborts the process
//! over a bad dispatch. The guarded-probe outcomes are deliberately NOT
//! errors (they are data, see the dispatcher crate); this enum only covers
//! direct dispatch outside the probe path and whatever a function body
//! reports itself.

use thiserror::Error;

/// Recoverable runtime errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    /// Direct invocation of a value that is not a function.
    #[error("{name} is not a function")]
    NotCallable {
        /// Member or binding name of the attempted callee.
        name: String,
    },

    /// Member call on a value with no member storage (nullish or primitive).
    #[error("cannot read member '{member}' of a non-object receiver")]
    ReceiverNotObject {
        /// The member that was being resolved.
        member: String,
    },

    /// Failure raised by a function body itself.
    #[error("{0}")]
    Raised(String),
}

/// Result alias used across the runtime.
pub type RtResult<T> = Result<T, RuntimeError>;
