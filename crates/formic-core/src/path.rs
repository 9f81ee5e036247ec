#![forbid(unsafe_code)]

//! Field addressing: stable entry identity, input paths, and tracking keys.
//!
//! Two address spaces exist on purpose. [`FieldPath`] is how the outside
//! world names a field — by render position, the only thing an input event
//! knows. [`FieldKey`] is how dirty and error state is keyed — by stable
//! [`EntryId`], so structural edits (insert/remove/move/swap) never
//! reattach one entry's tracked state to another.

use std::fmt;

/// Opaque stable identity for a leaderboard entry.
///
/// Minted by the controller when the entry is created, monotonically
/// increasing, never reused within a controller's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntryId(u64);

impl EntryId {
    /// Construct from a raw counter value.
    #[must_use]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw counter value.
    #[must_use]
    pub const fn as_raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The two editable sub-fields of a leaderboard entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EntryField {
    /// The player handle (free text).
    Handle,
    /// The numeric score.
    Score,
}

impl fmt::Display for EntryField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Handle => f.write_str("handle"),
            Self::Score => f.write_str("score"),
        }
    }
}

/// Input-side address of a single field, by current render position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FieldPath {
    /// The top-level flat text field.
    Flat,
    /// A sub-field of the leaderboard entry currently at `index`.
    Entry {
        /// Position in the current ordering.
        index: usize,
        /// Which sub-field.
        field: EntryField,
    },
}

impl FieldPath {
    /// Address the handle of the entry at `index`.
    #[must_use]
    pub const fn handle(index: usize) -> Self {
        Self::Entry {
            index,
            field: EntryField::Handle,
        }
    }

    /// Address the score of the entry at `index`.
    #[must_use]
    pub const fn score(index: usize) -> Self {
        Self::Entry {
            index,
            field: EntryField::Score,
        }
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Flat => f.write_str("flat"),
            Self::Entry { index, field } => write!(f, "leaderboard[{index}].{field}"),
        }
    }
}

/// Tracking-side key of a single field: the join key across the dirty set
/// and the error map. Entry fields are keyed by stable id, not index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FieldKey {
    /// The top-level flat text field.
    Flat,
    /// A sub-field of the entry with stable identity `id`.
    Entry {
        /// Stable identity of the entry.
        id: EntryId,
        /// Which sub-field.
        field: EntryField,
    },
}

impl FieldKey {
    /// Key for the handle of the entry with the given id.
    #[must_use]
    pub const fn handle(id: EntryId) -> Self {
        Self::Entry {
            id,
            field: EntryField::Handle,
        }
    }

    /// Key for the score of the entry with the given id.
    #[must_use]
    pub const fn score(id: EntryId) -> Self {
        Self::Entry {
            id,
            field: EntryField::Score,
        }
    }

    /// Whether this key tracks a sub-field of the given entry.
    #[must_use]
    pub const fn is_for_entry(&self, entry: EntryId) -> bool {
        matches!(self, Self::Entry { id, .. } if id.as_raw() == entry.as_raw())
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Flat => f.write_str("flat"),
            Self::Entry { id, field } => write!(f, "leaderboard[{id}].{field}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_id_roundtrip() {
        let id = EntryId::from_raw(7);
        assert_eq!(id.as_raw(), 7);
        assert_eq!(format!("{id}"), "#7");
    }

    #[test]
    fn path_display() {
        assert_eq!(format!("{}", FieldPath::Flat), "flat");
        assert_eq!(format!("{}", FieldPath::handle(2)), "leaderboard[2].handle");
        assert_eq!(format!("{}", FieldPath::score(0)), "leaderboard[0].score");
    }

    #[test]
    fn key_display() {
        let id = EntryId::from_raw(3);
        assert_eq!(format!("{}", FieldKey::Flat), "flat");
        assert_eq!(format!("{}", FieldKey::score(id)), "leaderboard[#3].score");
    }

    #[test]
    fn key_is_for_entry() {
        let a = EntryId::from_raw(1);
        let b = EntryId::from_raw(2);
        assert!(FieldKey::handle(a).is_for_entry(a));
        assert!(!FieldKey::handle(a).is_for_entry(b));
        assert!(!FieldKey::Flat.is_for_entry(a));
    }

    #[test]
    fn keys_order_flat_first() {
        // BTreeMap iteration relies on Flat sorting before entry keys.
        let id = EntryId::from_raw(0);
        assert!(FieldKey::Flat < FieldKey::handle(id));
        assert!(FieldKey::handle(id) < FieldKey::score(id));
    }
}
