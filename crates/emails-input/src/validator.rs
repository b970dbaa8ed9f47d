//! Candidate validation for the emails input control.
//!
//! Validity is computed once, when a candidate string becomes an item. The
//! collection stores the result and never re-evaluates it, so a validator is
//! consulted exactly once per item.
//!
//! # Example
//!
//! ```
//! use emails_input::{EmailValidator, Validator};
//!
//! let validator = EmailValidator::new();
//!
//! assert!(validator.validate("user@example.com"));
//! assert!(!validator.validate("not an email"));
//! ```

use std::sync::Arc;

use regex::Regex;

use crate::error::{InputError, Result};

/// The permissive email-shaped pattern used when no custom pattern is
/// configured. Intentionally loose: the control flags obviously malformed
/// entries without attempting full address-grammar compliance.
pub const DEFAULT_EMAIL_PATTERN: &str = r"[\w.+-]+@[\w.-]+\.\w{2,}";

/// Trait for candidate validators.
///
/// Validators decide whether a candidate string is acceptable as a final
/// value. The collection controller calls [`validate`](Validator::validate)
/// once per inserted item, with the candidate already trimmed.
///
/// # Thread Safety
///
/// Validators must be `Send + Sync` so a controller holding one stays
/// shareable.
pub trait Validator: Send + Sync {
    /// Validate the candidate string.
    ///
    /// Returns `true` if the candidate is acceptable as a final value.
    /// Candidates are trimmed by the caller; an empty candidate is never
    /// valid.
    fn validate(&self, candidate: &str) -> bool;
}

// Allow using Arc<dyn Validator> as a Validator
impl<V: Validator + ?Sized> Validator for Arc<V> {
    fn validate(&self, candidate: &str) -> bool {
        (**self).validate(candidate)
    }
}

// Allow using Box<dyn Validator> as a Validator
impl<V: Validator + ?Sized> Validator for Box<V> {
    fn validate(&self, candidate: &str) -> bool {
        (**self).validate(candidate)
    }
}

/// Validator that matches candidates against a regular expression.
///
/// The pattern is compiled once, at configuration time, and anchored so the
/// whole candidate must match. A missing pattern means validation is
/// disabled: every non-empty candidate is accepted.
///
/// # Example
///
/// ```
/// use emails_input::{EmailValidator, Validator};
///
/// let validator = EmailValidator::with_pattern(r"[a-z]+@work\.example").unwrap();
///
/// assert!(validator.validate("amira@work.example"));
/// assert!(!validator.validate("amira@home.example"));
/// // The match is anchored start-to-end
/// assert!(!validator.validate("xamira@work.example!"));
/// ```
#[derive(Debug, Clone)]
pub struct EmailValidator {
    pattern: Option<Regex>,
}

impl EmailValidator {
    /// Create a validator using the default email-shaped pattern.
    pub fn new() -> Self {
        Self {
            pattern: Some(
                compile_anchored(DEFAULT_EMAIL_PATTERN).expect("built-in pattern compiles"),
            ),
        }
    }

    /// Create a validator with a custom pattern.
    ///
    /// The pattern is anchored start-to-end before compilation, so it must
    /// describe the entire candidate. Compilation failure is reported as
    /// [`InputError::InvalidPattern`]; a malformed pattern never degrades to
    /// disabled validation.
    pub fn with_pattern(pattern: &str) -> Result<Self> {
        let compiled = compile_anchored(pattern).map_err(|source| InputError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;
        Ok(Self {
            pattern: Some(compiled),
        })
    }

    /// Create a validator with validation disabled.
    ///
    /// Every non-empty candidate is accepted. This is the explicit opt-out,
    /// distinct from a malformed pattern (which is a construction error).
    pub fn disabled() -> Self {
        Self { pattern: None }
    }

    /// Get the pattern string, or `None` when validation is disabled.
    pub fn pattern(&self) -> Option<&str> {
        self.pattern.as_ref().map(|re| re.as_str())
    }

    /// Whether this validator actually checks candidates.
    pub fn is_enabled(&self) -> bool {
        self.pattern.is_some()
    }
}

impl Default for EmailValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator for EmailValidator {
    fn validate(&self, candidate: &str) -> bool {
        // Empty input is never valid, pattern or not.
        if candidate.is_empty() {
            return false;
        }

        match &self.pattern {
            Some(pattern) => pattern.is_match(candidate),
            None => true,
        }
    }
}

/// Anchor a pattern so it must match the whole candidate.
fn compile_anchored(pattern: &str) -> std::result::Result<Regex, regex::Error> {
    Regex::new(&format!(r"\A(?:{pattern})\z"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_pattern_accepts_plain_addresses() {
        let validator = EmailValidator::new();
        assert!(validator.validate("ok@example.com"));
        assert!(validator.validate("first.last+tag@sub.example.org"));
    }

    #[test]
    fn test_default_pattern_rejects_malformed() {
        let validator = EmailValidator::new();
        assert!(!validator.validate("not-an-email"));
        assert!(!validator.validate("missing@tld"));
        assert!(!validator.validate("@example.com"));
        assert!(!validator.validate("two words@example.com"));
    }

    #[test]
    fn test_empty_is_never_valid() {
        assert!(!EmailValidator::new().validate(""));
        assert!(!EmailValidator::disabled().validate(""));
    }

    #[test]
    fn test_disabled_accepts_anything_non_empty() {
        let validator = EmailValidator::disabled();
        assert!(validator.validate("definitely not an email"));
        assert!(validator.validate("x"));
        assert!(!validator.is_enabled());
    }

    #[test]
    fn test_custom_pattern_is_anchored() {
        let validator = EmailValidator::with_pattern(r"\d{3}").unwrap();
        assert!(validator.validate("123"));
        assert!(!validator.validate("1234"));
        assert!(!validator.validate("a123"));
    }

    #[test]
    fn test_malformed_pattern_fails_construction() {
        let err = EmailValidator::with_pattern("(unclosed").unwrap_err();
        match err {
            InputError::InvalidPattern { pattern, .. } => assert_eq!(pattern, "(unclosed"),
        }
    }

    #[test]
    fn test_pattern_accessor() {
        let validator = EmailValidator::with_pattern("abc").unwrap();
        assert_eq!(validator.pattern(), Some(r"\A(?:abc)\z"));
        assert_eq!(EmailValidator::disabled().pattern(), None);
    }
}
