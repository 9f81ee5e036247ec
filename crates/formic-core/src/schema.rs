#![forbid(unsafe_code)]

//! The form schema: the complete rule set and the whole-tree validation pass.

use std::collections::BTreeMap;

use crate::path::FieldKey;
use crate::validators::{IntegerValue, MinLength, ValidationError, ValidationResult, Validator};
use crate::value::FormValue;

// ---------------------------------------------------------------------------
// ErrorMap
// ---------------------------------------------------------------------------

/// The complete set of current validation failures, keyed by [`FieldKey`].
///
/// Rebuilt from scratch on every validation pass — never incrementally
/// merged, so it can't drift from the value tree it was computed from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorMap {
    entries: BTreeMap<FieldKey, ValidationError>,
}

impl ErrorMap {
    /// `true` when no field has a validation failure.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of failing fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// The error for a field, if it is failing.
    #[must_use]
    pub fn get(&self, key: &FieldKey) -> Option<&ValidationError> {
        self.entries.get(key)
    }

    /// Whether the given field is failing.
    #[must_use]
    pub fn contains(&self, key: &FieldKey) -> bool {
        self.entries.contains_key(key)
    }

    /// Iterate failures in key order (`Flat` first, then entries by id).
    pub fn iter(&self) -> impl Iterator<Item = (&FieldKey, &ValidationError)> {
        self.entries.iter()
    }

    pub(crate) fn insert(&mut self, key: FieldKey, error: ValidationError) {
        self.entries.insert(key, error);
    }
}

// ---------------------------------------------------------------------------
// FormValidation
// ---------------------------------------------------------------------------

/// The outcome of a whole-tree validation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormValidation {
    /// Every rule passed.
    Valid,
    /// At least one rule failed.
    Invalid(ErrorMap),
}

impl FormValidation {
    /// Returns `true` if every rule passed.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// The failures, if any.
    #[must_use]
    pub const fn errors(&self) -> Option<&ErrorMap> {
        match self {
            Self::Valid => None,
            Self::Invalid(errors) => Some(errors),
        }
    }

    /// Consume the outcome, yielding the failures (empty when valid).
    #[must_use]
    pub fn into_errors(self) -> ErrorMap {
        match self {
            Self::Valid => ErrorMap::default(),
            Self::Invalid(errors) => errors,
        }
    }
}

// ---------------------------------------------------------------------------
// Schema
// ---------------------------------------------------------------------------

/// The rule set for a [`FormValue`].
///
/// Rules are evaluated independently per field; there are no cross-field
/// rules. [`Schema::validate`] is total and pure: the same input always
/// yields the same [`ErrorMap`], independent of dirty state or history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schema {
    flat_min: usize,
    handle_min: usize,
}

impl Default for Schema {
    /// The reference rule set: flat ≥ 5 characters, handle ≥ 3 characters,
    /// score must be a well-formed integer.
    fn default() -> Self {
        Self {
            flat_min: 5,
            handle_min: 3,
        }
    }
}

impl Schema {
    /// The reference rule set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the minimum length of the flat field (builder).
    #[must_use]
    pub const fn with_flat_min(mut self, min: usize) -> Self {
        self.flat_min = min;
        self
    }

    /// Override the minimum length of entry handles (builder).
    #[must_use]
    pub const fn with_handle_min(mut self, min: usize) -> Self {
        self.handle_min = min;
        self
    }

    /// Validate the whole value tree.
    ///
    /// An empty leaderboard is valid: no per-entry rules fire.
    #[must_use]
    pub fn validate(&self, value: &FormValue) -> FormValidation {
        let mut errors = ErrorMap::default();

        let flat_rule = MinLength::new(self.flat_min);
        if let ValidationResult::Invalid(err) = flat_rule.validate(value.flat.as_str()) {
            errors.insert(FieldKey::Flat, err);
        }

        let handle_rule = MinLength::new(self.handle_min);
        let score_rule = IntegerValue::new();
        for entry in &value.leaderboard {
            if let ValidationResult::Invalid(err) = handle_rule.validate(entry.handle.as_str()) {
                errors.insert(FieldKey::handle(entry.id), err);
            }
            if let ValidationResult::Invalid(err) = score_rule.validate(&entry.score) {
                errors.insert(FieldKey::score(entry.id), err);
            }
        }

        if errors.is_empty() {
            FormValidation::Valid
        } else {
            FormValidation::Invalid(errors)
        }
    }
}
