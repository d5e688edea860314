//! Selection combination semantics under modifier keys.

use hotbox_designer::{Selection, SelectionMode, ShapeId};
use proptest::prelude::*;

fn ids(count: usize) -> Vec<ShapeId> {
    (0..count).map(|_| ShapeId::new()).collect()
}

#[test]
fn replace_discards_previous_selection() {
    let shapes = ids(3);
    let mut selection = Selection::new();
    selection.set(Some(&shapes[..2]));
    selection.set(Some(&shapes[2..]));
    assert_eq!(selection.ids(), &shapes[2..]);
}

#[test]
fn add_extends_without_duplicates() {
    let shapes = ids(3);
    let mut selection = Selection::new();
    selection.set(Some(&shapes[..2]));
    selection.mode = SelectionMode::Add;
    selection.set(Some(&shapes[1..]));
    assert_eq!(selection.ids(), &shapes[..]);
}

#[test]
fn remove_only_touches_picked_shapes() {
    let shapes = ids(3);
    let mut selection = Selection::new();
    selection.set(Some(&shapes));
    selection.mode = SelectionMode::Remove;
    selection.set(Some(&shapes[1..2]));
    assert_eq!(selection.ids(), &[shapes[0], shapes[2]]);

    // Removing something not selected is a no-op.
    selection.set(Some(&[ShapeId::new()]));
    assert_eq!(selection.len(), 2);
}

#[test]
fn empty_pick_keeps_selection_in_add_mode() {
    let shapes = ids(2);
    let mut selection = Selection::new();
    selection.set(Some(&shapes));
    selection.mode = SelectionMode::Add;
    selection.set(None);
    assert_eq!(selection.ids(), &shapes[..]);
}

#[test]
fn empty_pick_keeps_selection_in_remove_mode() {
    let shapes = ids(2);
    let mut selection = Selection::new();
    selection.set(Some(&shapes));
    selection.mode = SelectionMode::Remove;
    selection.set(None);
    assert_eq!(selection.ids(), &shapes[..]);
}

#[test]
fn empty_pick_clears_in_replace_mode() {
    let shapes = ids(2);
    let mut selection = Selection::new();
    selection.set(Some(&shapes));
    selection.set(None);
    assert!(selection.is_empty());
}

#[test]
fn invert_toggles_membership() {
    let shapes = ids(3);
    let mut selection = Selection::new();
    selection.set(Some(&shapes[..2]));
    selection.mode = SelectionMode::Invert;
    selection.set(Some(&shapes[1..]));
    assert_eq!(selection.ids(), &[shapes[0], shapes[2]]);
}

proptest! {
    #[test]
    fn invert_is_self_inverse(selected in 0usize..6, picked_mask in 0u32..64) {
        let shapes = ids(6);
        let mut selection = Selection::new();
        selection.set(Some(&shapes[..selected]));
        let before: Vec<ShapeId> = selection.ids().to_vec();

        let picked: Vec<ShapeId> = shapes
            .iter()
            .enumerate()
            .filter(|(index, _)| picked_mask & (1 << index) != 0)
            .map(|(_, &id)| id)
            .collect();

        selection.mode = SelectionMode::Invert;
        selection.set(Some(&picked));
        selection.set(Some(&picked));

        let mut after: Vec<ShapeId> = selection.ids().to_vec();
        let mut expected = before;
        expected.sort();
        after.sort();
        prop_assert_eq!(after, expected);
    }
}
