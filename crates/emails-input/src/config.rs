//! Construction-time options for the emails input control.

use crate::error::Result;
use crate::validator::EmailValidator;

/// How candidate validation is configured.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PatternConfig {
    /// The built-in permissive email-shaped pattern.
    #[default]
    Default,
    /// Validation off: every non-empty candidate is accepted. This is a
    /// deliberate mode, not the fallback for a bad pattern.
    Disabled,
    /// A caller-supplied pattern, compiled (anchored start-to-end) at
    /// construction. Compilation failure fails construction.
    Custom(String),
}

/// Options recognized when constructing an [`EmailsInput`].
///
/// Only `pattern` influences the collection controller. `max_length` is
/// enforced at the input-capture boundary (see
/// [`EmailsInput::commit_input`]); the remaining fields are presentation
/// hints stored for the view layer and never consulted by the controller.
///
/// [`EmailsInput`]: crate::EmailsInput
/// [`EmailsInput::commit_input`]: crate::EmailsInput::commit_input
///
/// # Example
///
/// ```
/// use emails_input::EmailsInputOptions;
///
/// let options = EmailsInputOptions::new()
///     .with_pattern(r"[\w.+-]+@company\.example")
///     .with_max_length(256)
///     .with_placeholder("add people…");
/// ```
#[derive(Debug, Clone, Default)]
pub struct EmailsInputOptions {
    /// Validation pattern configuration.
    pub pattern: PatternConfig,
    /// Upper bound, in characters, on a single raw input string.
    pub max_length: Option<usize>,
    /// Placeholder text shown while the entry field is empty.
    pub placeholder: Option<String>,
    /// Whether the entry field requests focus when shown.
    pub autofocus: bool,
    /// Minimum control height, in logical pixels.
    pub min_height: Option<u32>,
    /// Maximum control height, in logical pixels.
    pub max_height: Option<u32>,
}

impl EmailsInputOptions {
    /// Create options with all defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a custom validation pattern.
    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = PatternConfig::Custom(pattern.into());
        self
    }

    /// Disable validation entirely.
    pub fn without_validation(mut self) -> Self {
        self.pattern = PatternConfig::Disabled;
        self
    }

    /// Bound the length of a single raw input string.
    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }

    /// Set the placeholder text.
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Request focus when the control is shown.
    pub fn with_autofocus(mut self, autofocus: bool) -> Self {
        self.autofocus = autofocus;
        self
    }

    /// Set the minimum control height.
    pub fn with_min_height(mut self, min_height: u32) -> Self {
        self.min_height = Some(min_height);
        self
    }

    /// Set the maximum control height.
    pub fn with_max_height(mut self, max_height: u32) -> Self {
        self.max_height = Some(max_height);
        self
    }

    /// Build the validator this configuration describes.
    ///
    /// Fails fast on a malformed custom pattern.
    pub(crate) fn build_validator(&self) -> Result<EmailValidator> {
        match &self.pattern {
            PatternConfig::Default => Ok(EmailValidator::new()),
            PatternConfig::Disabled => Ok(EmailValidator::disabled()),
            PatternConfig::Custom(pattern) => EmailValidator::with_pattern(pattern),
        }
    }
}
