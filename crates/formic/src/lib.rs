#![forbid(unsafe_code)]

//! Headless form state: a controller that owns the live form value, tracks
//! per-field dirty and error state, and derives submit eligibility.
//!
//! The pure layer (value model, field addressing, schema) lives in
//! `formic-core` and is re-exported here, so most hosts only depend on this
//! crate.
//!
//! # Example
//!
//! ```rust
//! use formic::{EntryDraft, FieldPath, FormController};
//!
//! let mut form = FormController::new();
//! form.set_field(FieldPath::Flat, "abcde");
//! assert!(form.can_submit());
//!
//! form.append(EntryDraft::new());
//! assert!(!form.can_submit()); // blank entry fails validation
//! ```

pub mod controller;

pub use controller::{FormController, SubmitGate};
pub use formic_core::{
    ERROR_CODE_INVALID_TYPE, ERROR_CODE_TOO_SHORT, EntryDraft, EntryField, EntryId, ErrorMap,
    FieldKey, FieldPath, FormValidation, FormValue, Schema, ScoreEntry, ScoreValue,
    ValidationError,
};
