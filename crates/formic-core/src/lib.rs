#![forbid(unsafe_code)]

//! Pure form-model layer: values, field addressing, validators, and the schema.
//!
//! Nothing in this crate holds mutable session state. The one entry point
//! hosts usually care about is [`Schema::validate`], a total, pure function
//! from a candidate [`FormValue`] to either `Valid` or an [`ErrorMap`] keyed
//! by [`FieldKey`]. The stateful controller lives in the `formic` crate.

pub mod path;
pub mod schema;
pub mod validators;
pub mod value;

pub use path::{EntryField, EntryId, FieldKey, FieldPath};
pub use schema::{ErrorMap, FormValidation, Schema};
pub use validators::{
    ERROR_CODE_INVALID_TYPE, ERROR_CODE_TOO_SHORT, IntegerValue, MinLength, ValidationError,
    ValidationResult, Validator,
};
pub use value::{EntryDraft, FormValue, ScoreEntry, ScoreValue};
