#![forbid(unsafe_code)]

//! The form-state controller.
//!
//! [`FormController`] owns the live [`FormValue`], the dirty set, and the
//! current [`ErrorMap`]. Every mutation ends the same way: the whole value
//! tree is re-validated synchronously and the error map replaced wholesale.
//! Derived state (the submit gate) is computed on demand, never stored.
//!
//! The controller is exclusively owned by one logical form session. All
//! operations run to completion; none panic and none return fatal errors —
//! bad numeric input becomes a validation error, out-of-range indices are
//! reported as `false`/`None`, and the worst outcome is a blocked submit.

use std::collections::BTreeSet;

use formic_core::{
    EntryDraft, EntryField, EntryId, ErrorMap, FieldKey, FieldPath, FormValue, Schema, ScoreEntry,
    ScoreValue, ValidationError,
};

// ---------------------------------------------------------------------------
// SubmitGate
// ---------------------------------------------------------------------------

/// Whole-form submit eligibility, computed from dirty and error state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitGate {
    /// Nothing has been edited yet. A pristine form cannot be submitted
    /// even if its defaults happen to validate.
    Pristine,
    /// At least one validation error is outstanding.
    Invalid,
    /// Edited and error-free.
    Ready,
}

// ---------------------------------------------------------------------------
// FormController
// ---------------------------------------------------------------------------

/// Owns one form session: value tree, dirty set, error map, and the
/// ordered leaderboard list.
#[derive(Debug, Clone)]
pub struct FormController {
    schema: Schema,
    value: FormValue,
    /// Fields edited since creation or the last reset. Keyed by stable
    /// [`FieldKey`], so reordering entries never reassigns a flag.
    dirty: BTreeSet<FieldKey>,
    /// Failures from the most recent validation pass. Always reflects the
    /// current value tree.
    errors: ErrorMap,
    /// Set by structural list edits. Feeds the gate alongside `dirty`:
    /// adding or removing an entry counts as editing the form even though
    /// the new entry's fields start pristine.
    modified: bool,
    /// Next raw entry id. Monotone; ids are never reused within a
    /// controller's lifetime, including across `reset`.
    next_id: u64,
}

impl Default for FormController {
    fn default() -> Self {
        Self::new()
    }
}

impl FormController {
    /// Create a controller with the reference schema and an empty value.
    #[must_use]
    pub fn new() -> Self {
        Self::with_schema(Schema::default())
    }

    /// Create a controller with a custom schema.
    #[must_use]
    pub fn with_schema(schema: Schema) -> Self {
        let value = FormValue::default();
        let errors = schema.validate(&value).into_errors();
        Self {
            schema,
            value,
            dirty: BTreeSet::new(),
            errors,
            modified: false,
            next_id: 0,
        }
    }

    // --- Snapshot access ---

    /// The current value tree.
    #[must_use]
    pub fn value(&self) -> &FormValue {
        &self.value
    }

    /// Failures from the most recent validation pass.
    #[must_use]
    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    /// The error for the field at `path`, if it is failing.
    #[must_use]
    pub fn error_at(&self, path: FieldPath) -> Option<&ValidationError> {
        let key = self.resolve(path)?;
        self.errors.get(&key)
    }

    /// Whether the field at `path` has been edited since creation or the
    /// last reset. Out-of-range paths are reported as clean.
    #[must_use]
    pub fn is_dirty(&self, path: FieldPath) -> bool {
        self.resolve(path).is_some_and(|key| self.dirty.contains(&key))
    }

    /// Whether anything has been edited, including structural list edits.
    #[must_use]
    pub fn any_dirty(&self) -> bool {
        self.modified || !self.dirty.is_empty()
    }

    /// All currently dirty field keys, in key order.
    #[must_use]
    pub fn dirty_fields(&self) -> Vec<FieldKey> {
        self.dirty.iter().copied().collect()
    }

    /// Number of leaderboard entries.
    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.value.leaderboard.len()
    }

    /// Stable id of the entry currently at `index`.
    #[must_use]
    pub fn entry_id_at(&self, index: usize) -> Option<EntryId> {
        self.value.leaderboard.get(index).map(|e| e.id)
    }

    // --- Field edits ---

    /// Route a raw input string to the field at `path`.
    ///
    /// Handle and flat edits are stored verbatim; score edits go through
    /// [`ScoreValue::parse`], so malformed input is stored as a sentinel
    /// and surfaced by validation rather than dropped. Marks the field
    /// dirty and re-validates the whole tree.
    ///
    /// Returns `false` (and changes nothing) if `path` does not resolve.
    pub fn set_field(&mut self, path: FieldPath, raw: &str) -> bool {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!("set_field", path = %path).entered();

        let Some(key) = self.resolve(path) else {
            return false;
        };
        match key {
            FieldKey::Flat => {
                self.value.flat = raw.to_string();
            }
            FieldKey::Entry { id, field } => {
                let Some(entry) = self.value.entry_mut(id) else {
                    return false;
                };
                match field {
                    EntryField::Handle => entry.handle = raw.to_string(),
                    EntryField::Score => entry.score = ScoreValue::parse(raw),
                }
            }
        }
        self.dirty.insert(key);
        self.revalidate();
        true
    }

    // --- Structural list edits ---

    /// Append a new entry at the end. Returns its stable id.
    pub fn append(&mut self, draft: EntryDraft) -> EntryId {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!("append", len = self.value.leaderboard.len()).entered();

        let id = self.mint_id();
        self.value.leaderboard.push(ScoreEntry::from_draft(id, draft));
        self.modified = true;
        self.revalidate();
        id
    }

    /// Insert a new entry at the front. Returns its stable id.
    pub fn prepend(&mut self, draft: EntryDraft) -> EntryId {
        let id = self.mint_id();
        self.value
            .leaderboard
            .insert(0, ScoreEntry::from_draft(id, draft));
        self.modified = true;
        self.revalidate();
        id
    }

    /// Insert a new entry at `index` (0..=len). Returns its stable id, or
    /// `None` (and changes nothing) if the index is out of range.
    pub fn insert(&mut self, index: usize, draft: EntryDraft) -> Option<EntryId> {
        if index > self.value.leaderboard.len() {
            return None;
        }
        let id = self.mint_id();
        self.value
            .leaderboard
            .insert(index, ScoreEntry::from_draft(id, draft));
        self.modified = true;
        self.revalidate();
        Some(id)
    }

    /// Remove the entry at `index`, pruning its dirty and error state.
    /// Other entries' values and flags are untouched.
    pub fn remove(&mut self, index: usize) -> bool {
        if index >= self.value.leaderboard.len() {
            return false;
        }
        let removed = self.value.leaderboard.remove(index);

        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!("remove", id = %removed.id).entered();

        self.dirty.retain(|key| !key.is_for_entry(removed.id));
        self.modified = true;
        self.revalidate();
        true
    }

    /// Swap the entries at `i` and `j`. Dirty and error state follows each
    /// entry, because both are keyed by stable id.
    pub fn swap(&mut self, i: usize, j: usize) -> bool {
        let len = self.value.leaderboard.len();
        if i >= len || j >= len {
            return false;
        }
        self.value.leaderboard.swap(i, j);
        if i != j {
            self.modified = true;
        }
        self.revalidate();
        true
    }

    /// Move the entry at `from` so it ends up at `to`, shifting the
    /// entries in between. Dirty and error state follows the entry.
    pub fn move_entry(&mut self, from: usize, to: usize) -> bool {
        let len = self.value.leaderboard.len();
        if from >= len || to >= len {
            return false;
        }
        let entry = self.value.leaderboard.remove(from);
        self.value.leaderboard.insert(to, entry);
        if from != to {
            self.modified = true;
        }
        self.revalidate();
        true
    }

    // --- Submission ---

    /// Compute the submit gate. Pristine wins over Invalid: an untouched
    /// form reports `Pristine` even though its defaults fail validation.
    #[must_use]
    pub fn submit_gate(&self) -> SubmitGate {
        if !self.any_dirty() {
            SubmitGate::Pristine
        } else if !self.errors.is_empty() {
            SubmitGate::Invalid
        } else {
            SubmitGate::Ready
        }
    }

    /// `true` iff the form has been edited and has no validation failures.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.submit_gate() == SubmitGate::Ready
    }

    /// Run validation once more and hand the outcome to exactly one of the
    /// two callbacks. Never panics; both paths are normal termination.
    ///
    /// The dirty gate is not consulted here — gating a pristine submit is
    /// the caller's job via [`Self::can_submit`].
    pub fn submit<S, E>(&mut self, on_success: S, on_error: E)
    where
        S: FnOnce(&FormValue),
        E: FnOnce(&ErrorMap),
    {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!("submit", errors = self.errors.len()).entered();

        self.revalidate();
        if self.errors.is_empty() {
            on_success(&self.value);
        } else {
            on_error(&self.errors);
        }
    }

    /// Return to the mount state: empty value, empty dirty set, fresh
    /// validation. Entry ids are not reused.
    pub fn reset(&mut self) {
        self.value = FormValue::default();
        self.dirty.clear();
        self.modified = false;
        self.revalidate();
    }

    // --- Internal helpers ---

    /// Resolve an index-based path against the current ordering.
    fn resolve(&self, path: FieldPath) -> Option<FieldKey> {
        match path {
            FieldPath::Flat => Some(FieldKey::Flat),
            FieldPath::Entry { index, field } => self
                .value
                .leaderboard
                .get(index)
                .map(|entry| FieldKey::Entry { id: entry.id, field }),
        }
    }

    fn mint_id(&mut self) -> EntryId {
        let id = EntryId::from_raw(self.next_id);
        self.next_id += 1;
        id
    }

    fn revalidate(&mut self) {
        self.errors = self.schema.validate(&self.value).into_errors();
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
