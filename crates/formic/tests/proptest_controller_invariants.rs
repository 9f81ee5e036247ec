//! Property-based invariant tests for the form controller.
//!
//! These drive the controller with arbitrary operation sequences and check
//! the invariants that must hold after every mutation settles:
//!
//! 1. Lockstep: every entry-keyed error refers to a live entry.
//! 2. Lockstep: every entry-keyed dirty flag refers to a live entry.
//! 3. The stored error map always equals a fresh validation of the value.
//! 4. Entry ids are unique within the list.
//! 5. Structural ops never change surviving entries' field values.
//! 6. `can_submit` agrees with "edited and error-free".

use formic::{EntryDraft, FieldKey, FieldPath, FormController, Schema, SubmitGate};
use proptest::prelude::*;

// ── Operations ──────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
enum Op {
    SetFlat(String),
    SetHandle(usize, String),
    SetScore(usize, String),
    Append,
    Prepend,
    Insert(usize),
    Remove(usize),
    Swap(usize, usize),
    Move(usize, usize),
    Reset,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    let idx = 0usize..6;
    let text = "[a-z]{0,7}";
    let score_text = prop_oneof!["-?[0-9]{1,4}", "[a-z ]{0,4}"];
    prop_oneof![
        text.prop_map(Op::SetFlat),
        (idx.clone(), "[a-z]{0,7}").prop_map(|(i, s)| Op::SetHandle(i, s)),
        (idx.clone(), score_text).prop_map(|(i, s)| Op::SetScore(i, s)),
        Just(Op::Append),
        Just(Op::Prepend),
        idx.clone().prop_map(Op::Insert),
        idx.clone().prop_map(Op::Remove),
        (idx.clone(), idx.clone()).prop_map(|(i, j)| Op::Swap(i, j)),
        (idx.clone(), idx).prop_map(|(i, j)| Op::Move(i, j)),
        Just(Op::Reset),
    ]
}

fn apply(form: &mut FormController, op: &Op) {
    match op {
        Op::SetFlat(s) => {
            form.set_field(FieldPath::Flat, s);
        }
        Op::SetHandle(i, s) => {
            form.set_field(FieldPath::handle(*i), s);
        }
        Op::SetScore(i, s) => {
            form.set_field(FieldPath::score(*i), s);
        }
        Op::Append => {
            form.append(EntryDraft::new());
        }
        Op::Prepend => {
            form.prepend(EntryDraft::new());
        }
        Op::Insert(i) => {
            form.insert(*i, EntryDraft::new());
        }
        Op::Remove(i) => {
            form.remove(*i);
        }
        Op::Swap(i, j) => {
            form.swap(*i, *j);
        }
        Op::Move(i, j) => {
            form.move_entry(*i, *j);
        }
        Op::Reset => form.reset(),
    }
}

fn live_ids(form: &FormController) -> Vec<formic::EntryId> {
    form.value().leaderboard.iter().map(|e| e.id).collect()
}

// ═════════════════════════════════════════════════════════════════════════
// 1+2. Lockstep: tracked state only refers to live entries
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn tracked_state_refers_to_live_entries(ops in proptest::collection::vec(op_strategy(), 0..40)) {
        let mut form = FormController::new();
        for op in &ops {
            apply(&mut form, op);
            let live = live_ids(&form);
            for (key, _) in form.errors().iter() {
                if let FieldKey::Entry { id, .. } = key {
                    prop_assert!(live.contains(id), "error for dead entry {id} after {op:?}");
                }
            }
            for key in form.dirty_fields() {
                if let FieldKey::Entry { id, .. } = key {
                    prop_assert!(live.contains(&id), "dirty flag for dead entry {id} after {op:?}");
                }
            }
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Stored errors always equal a fresh validation pass
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn errors_match_fresh_validation(ops in proptest::collection::vec(op_strategy(), 0..40)) {
        let mut form = FormController::new();
        let schema = Schema::new();
        for op in &ops {
            apply(&mut form, op);
            let fresh = schema.validate(form.value()).into_errors();
            prop_assert_eq!(form.errors(), &fresh, "stale error map after {:?}", op);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Entry ids are unique
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn entry_ids_stay_unique(ops in proptest::collection::vec(op_strategy(), 0..40)) {
        let mut form = FormController::new();
        for op in &ops {
            apply(&mut form, op);
            let mut ids = live_ids(&form);
            ids.sort_unstable();
            ids.dedup();
            prop_assert_eq!(ids.len(), form.entry_count());
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Structural ops preserve surviving entries' values
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn remove_preserves_survivors(victim in 0usize..4, handles in proptest::collection::vec("[a-z]{0,6}", 4)) {
        let mut form = FormController::new();
        for (n, handle) in handles.iter().enumerate() {
            form.append(EntryDraft::new().with_handle(handle.clone()).with_score(n as i64));
        }
        let before: Vec<_> = form
            .value()
            .leaderboard
            .iter()
            .filter(|e| Some(e.id) != form.entry_id_at(victim))
            .cloned()
            .collect();

        prop_assert!(form.remove(victim));
        prop_assert_eq!(&form.value().leaderboard, &before);
    }

    #[test]
    fn reorder_permutes_without_editing(i in 0usize..4, j in 0usize..4, swap in any::<bool>()) {
        let mut form = FormController::new();
        for n in 0..4i64 {
            form.append(EntryDraft::new().with_handle(format!("p{n}")).with_score(n));
        }
        let mut before = form.value().leaderboard.clone();

        if swap {
            prop_assert!(form.swap(i, j));
            before.swap(i, j);
        } else {
            prop_assert!(form.move_entry(i, j));
            let entry = before.remove(i);
            before.insert(j, entry);
        }
        prop_assert_eq!(&form.value().leaderboard, &before);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 6. can_submit agrees with its definition
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn gate_agrees_with_dirty_and_errors(ops in proptest::collection::vec(op_strategy(), 0..40)) {
        let mut form = FormController::new();
        for op in &ops {
            apply(&mut form, op);
            let expected = match (form.any_dirty(), form.errors().is_empty()) {
                (false, _) => SubmitGate::Pristine,
                (true, false) => SubmitGate::Invalid,
                (true, true) => SubmitGate::Ready,
            };
            prop_assert_eq!(form.submit_gate(), expected);
            prop_assert_eq!(form.can_submit(), expected == SubmitGate::Ready);
        }
    }
}
