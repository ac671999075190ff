// Error types for the edit-script engine.
//
// `DiffError` covers the core (path search, reconstruction, replay). File
// loading wraps it in `io::IoError`.

use thiserror::Error;

/// Errors reported by the path search, diff reconstruction and replay.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiffError {
    /// Inputs that cannot be diffed: a path built for other sequences, a
    /// missing input at the loading layer, and similar caller mistakes.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The search ran past D = N + M without reaching (N, M).
    ///
    /// This cannot happen for finite inputs; seeing it means the search
    /// itself is broken. Callers should fail the enclosing operation.
    #[error(
        "internal invariant violated: no edit path within old_len + new_len edits (old_len={old_len}, new_len={new_len})"
    )]
    InvariantViolation { old_len: usize, new_len: usize },

    /// An edit script does not line up with the sequence it is replayed on.
    #[error("edit script does not match old sequence at position {position}: {reason}")]
    PatchMismatch { position: usize, reason: String },
}

impl DiffError {
    /// Whether this error indicates a defect in the engine rather than bad input.
    pub fn is_internal(&self) -> bool {
        matches!(self, Self::InvariantViolation { .. })
    }
}

pub type Result<T> = std::result::Result<T, DiffError>;
