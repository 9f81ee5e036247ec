#![forbid(unsafe_code)]

//! Core validation types and the built-in validators.
//!
//! Validation failures are data, never exceptions: a [`ValidationError`]
//! carries a stable code for programmatic handling plus a human-readable
//! message template with `{param}` interpolation.

use std::collections::HashMap;
use std::fmt;

use crate::value::ScoreValue;

// ---------------------------------------------------------------------------
// Error codes
// ---------------------------------------------------------------------------

/// Error code for a string below its minimum length.
pub const ERROR_CODE_TOO_SHORT: &str = "too_short";
/// Error code for a value that does not parse to the expected type.
pub const ERROR_CODE_INVALID_TYPE: &str = "invalid_type";

// ---------------------------------------------------------------------------
// ValidationError
// ---------------------------------------------------------------------------

/// A single validation failure with code, message, and interpolation params.
///
/// # Example
///
/// ```rust
/// use formic_core::ValidationError;
///
/// let error = ValidationError::new("too_short", "Must be at least {min} characters")
///     .with_param("min", 5);
/// assert_eq!(error.format_message(), "Must be at least 5 characters");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Stable error code for programmatic handling.
    pub code: &'static str,
    /// Human-readable message template.
    pub message: String,
    /// Parameters for message interpolation.
    pub params: HashMap<String, String>,
}

impl ValidationError {
    /// Create a new validation error with the given code and message.
    #[must_use]
    pub fn new(code: &'static str, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            params: HashMap::new(),
        }
    }

    /// Add a parameter for message interpolation.
    #[must_use]
    pub fn with_param(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.params.insert(key.into(), value.to_string());
        self
    }

    /// Format the message, substituting `{key}` patterns with param values.
    #[must_use]
    pub fn format_message(&self) -> String {
        let mut result = self.message.clone();
        for (key, value) in &self.params {
            result = result.replace(&format!("{{{key}}}"), value);
        }
        result
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_message())
    }
}

impl std::error::Error for ValidationError {}

// ---------------------------------------------------------------------------
// ValidationResult
// ---------------------------------------------------------------------------

/// The result of validating a single value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ValidationResult {
    /// The value is valid.
    #[default]
    Valid,
    /// The value is invalid with an error.
    Invalid(ValidationError),
}

impl ValidationResult {
    /// Returns `true` if the result is `Valid`.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// Returns `true` if the result is `Invalid`.
    #[must_use]
    pub const fn is_invalid(&self) -> bool {
        matches!(self, Self::Invalid(_))
    }

    /// Returns the error if the result is `Invalid`.
    #[must_use]
    pub const fn error(&self) -> Option<&ValidationError> {
        match self {
            Self::Valid => None,
            Self::Invalid(e) => Some(e),
        }
    }

    /// Consume the result, yielding the error if any.
    #[must_use]
    pub fn into_error(self) -> Option<ValidationError> {
        match self {
            Self::Valid => None,
            Self::Invalid(e) => Some(e),
        }
    }
}

// ---------------------------------------------------------------------------
// Validator trait
// ---------------------------------------------------------------------------

/// A rule that validates values of type `T`.
///
/// Validators are total and pure: the same input always yields the same
/// result, independent of any session state.
pub trait Validator<T: ?Sized>: Send + Sync {
    /// Validate the given value.
    fn validate(&self, value: &T) -> ValidationResult;

    /// The default error message for this validator.
    fn error_message(&self) -> &str;
}

// ---------------------------------------------------------------------------
// Built-in validators
// ---------------------------------------------------------------------------

/// Requires a string of at least `min` characters.
#[derive(Debug, Clone, Copy)]
pub struct MinLength {
    /// Minimum number of characters required.
    pub min: usize,
}

impl MinLength {
    /// Create a new `MinLength` validator.
    #[must_use]
    pub const fn new(min: usize) -> Self {
        Self { min }
    }
}

impl Validator<str> for MinLength {
    fn validate(&self, value: &str) -> ValidationResult {
        let len = value.chars().count();
        if len < self.min {
            ValidationResult::Invalid(
                ValidationError::new(ERROR_CODE_TOO_SHORT, "Must be at least {min} characters")
                    .with_param("min", self.min)
                    .with_param("actual", len),
            )
        } else {
            ValidationResult::Valid
        }
    }

    fn error_message(&self) -> &str {
        "Must be at least {min} characters"
    }
}

/// Requires a well-formed integer score.
///
/// `Unset` and `Invalid` both fail with `invalid_type`; for `Invalid` the
/// raw text is carried as a param. No range check is applied.
#[derive(Debug, Clone, Copy, Default)]
pub struct IntegerValue;

impl IntegerValue {
    /// Create a new `IntegerValue` validator.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Validator<ScoreValue> for IntegerValue {
    fn validate(&self, value: &ScoreValue) -> ValidationResult {
        match value {
            ScoreValue::Int(_) => ValidationResult::Valid,
            ScoreValue::Unset => ValidationResult::Invalid(ValidationError::new(
                ERROR_CODE_INVALID_TYPE,
                "Expected a number",
            )),
            ScoreValue::Invalid(raw) => ValidationResult::Invalid(
                ValidationError::new(ERROR_CODE_INVALID_TYPE, "Expected a number, got \"{raw}\"")
                    .with_param("raw", raw),
            ),
        }
    }

    fn error_message(&self) -> &str {
        "Expected a number"
    }
}
