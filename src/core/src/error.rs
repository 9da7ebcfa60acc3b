//! Error types for pattern compilation

use thiserror::Error;

/// Pattern compilation errors
///
/// Translation itself is total; the only failure left is the regex engine
/// refusing an expression, which happens on resource limits.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    /// The regex engine rejected the translated expression
    #[error("Failed to compile pattern '{pattern}': {reason}")]
    Compile {
        /// Source pattern
        pattern: String,
        /// Message reported by the regex engine
        reason: String,
    },
}

/// Result type for pattern operations
pub type Result<T> = std::result::Result<T, PatternError>;
