//! Error types for the emails input control.

use std::fmt;

/// The main error type for emails input configuration and construction.
#[derive(Debug)]
pub enum InputError {
    /// The configured validation pattern failed to compile.
    ///
    /// A malformed pattern is a configuration bug: construction fails
    /// instead of silently falling back to disabled validation. Disabling
    /// validation is an explicit choice ([`PatternConfig::Disabled`]),
    /// never a fallback.
    ///
    /// [`PatternConfig::Disabled`]: crate::PatternConfig::Disabled
    InvalidPattern {
        /// The pattern string as configured.
        pattern: String,
        /// The underlying compilation error.
        source: regex::Error,
    },
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPattern { pattern, source } => {
                write!(f, "invalid validation pattern {pattern:?}: {source}")
            }
        }
    }
}

impl std::error::Error for InputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidPattern { source, .. } => Some(source),
        }
    }
}

/// A specialized Result type for emails input operations.
pub type Result<T> = std::result::Result<T, InputError>;
