#![forbid(unsafe_code)]

//! The form value tree: flat field, leaderboard entries, and entry drafts.

use crate::path::EntryId;

// ---------------------------------------------------------------------------
// ScoreValue
// ---------------------------------------------------------------------------

/// A leaderboard score as entered, before any coercion.
///
/// Malformed input is retained, not dropped and not coerced to 0, so the
/// schema can report it as a type error while the host still sees what the
/// user typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScoreValue {
    /// No value entered yet (or the input was cleared).
    #[default]
    Unset,
    /// Input that does not parse as an integer; the raw text is kept.
    Invalid(String),
    /// A well-formed integer score.
    Int(i64),
}

impl ScoreValue {
    /// Parse raw text input.
    ///
    /// Whitespace-only input means "no value yet" and becomes `Unset`;
    /// anything else that fails integer parsing becomes `Invalid` with the
    /// raw text preserved.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Self::Unset;
        }
        match trimmed.parse::<i64>() {
            Ok(n) => Self::Int(n),
            Err(_) => Self::Invalid(raw.to_string()),
        }
    }

    /// Returns `true` for a well-formed integer.
    #[must_use]
    pub const fn is_int(&self) -> bool {
        matches!(self, Self::Int(_))
    }

    /// The integer value, if well-formed.
    #[must_use]
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// ScoreEntry / EntryDraft
// ---------------------------------------------------------------------------

/// One leaderboard entry, carrying its stable identity.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoreEntry {
    /// Stable identity, minted at creation and never reassigned.
    pub id: EntryId,
    /// Player handle.
    pub handle: String,
    /// Score as entered.
    pub score: ScoreValue,
}

impl ScoreEntry {
    /// Materialize an entry from a draft, binding it to `id`.
    #[must_use]
    pub fn from_draft(id: EntryId, draft: EntryDraft) -> Self {
        Self {
            id,
            handle: draft.handle.unwrap_or_default(),
            score: draft.score.map_or(ScoreValue::Unset, ScoreValue::Int),
        }
    }
}

/// A partial entry used by append/prepend/insert.
///
/// Unspecified fields default to empty handle / unset score — a blank draft
/// therefore fails validation until edited.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntryDraft {
    handle: Option<String>,
    score: Option<i64>,
}

impl EntryDraft {
    /// A fully blank draft.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-fill the handle (builder).
    #[must_use]
    pub fn with_handle(mut self, handle: impl Into<String>) -> Self {
        self.handle = Some(handle.into());
        self
    }

    /// Pre-fill the score (builder).
    #[must_use]
    pub fn with_score(mut self, score: i64) -> Self {
        self.score = Some(score);
        self
    }
}

// ---------------------------------------------------------------------------
// FormValue
// ---------------------------------------------------------------------------

/// The whole form value: one flat text field plus an ordered, possibly
/// empty sequence of leaderboard entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FormValue {
    /// The flat text field.
    pub flat: String,
    /// Leaderboard entries in render order.
    pub leaderboard: Vec<ScoreEntry>,
}

impl FormValue {
    /// Look up an entry by stable id.
    #[must_use]
    pub fn entry(&self, id: EntryId) -> Option<&ScoreEntry> {
        self.leaderboard.iter().find(|e| e.id == id)
    }

    /// Look up an entry mutably by stable id.
    pub fn entry_mut(&mut self, id: EntryId) -> Option<&mut ScoreEntry> {
        self.leaderboard.iter_mut().find(|e| e.id == id)
    }

    /// Current position of the entry with the given id.
    #[must_use]
    pub fn index_of(&self, id: EntryId) -> Option<usize> {
        self.leaderboard.iter().position(|e| e.id == id)
    }
}
