//! End-to-end editing sessions: pick, drag, rubber band, clipboard and
//! undo gestures through the pointer protocol.

use hotbox_core::geometry::{Point, Rect};
use hotbox_core::{GeneralOptions, HotboxData, ShapeData};
use hotbox_designer::{templates, ShapeEditor};

fn button_at(left: f64, top: f64) -> ShapeData {
    let mut data = templates::square_button();
    data.set_rect(&Rect::new(left, top, 100.0, 50.0));
    data
}

/// Two buttons: A at (0, 0) and B at (200, 0), both 100x50.
fn editor() -> ShapeEditor {
    let data = HotboxData {
        general: GeneralOptions::default(),
        shapes: vec![button_at(0.0, 0.0), button_at(200.0, 0.0)],
    };
    ShapeEditor::new(data)
}

fn click(editor: &mut ShapeEditor, x: f64, y: f64) {
    editor.mouse_press(Point::new(x, y));
    editor.mouse_release(Point::new(x, y));
}

#[test]
fn click_selects_shape_under_cursor() {
    let mut editor = editor();
    click(&mut editor, 50.0, 25.0);
    assert_eq!(editor.selection.len(), 1);
    let rect = editor.manipulator().rect().unwrap();
    assert_eq!(rect, Rect::new(0.0, 0.0, 100.0, 50.0));
}

#[test]
fn click_on_empty_space_clears_selection() {
    let mut editor = editor();
    click(&mut editor, 50.0, 25.0);
    click(&mut editor, 500.0, 500.0);
    assert!(editor.selection.is_empty());
    assert!(editor.manipulator().rect().is_none());
}

#[test]
fn ctrl_click_on_empty_space_keeps_selection() {
    let mut editor = editor();
    click(&mut editor, 50.0, 25.0);
    editor.set_ctrl_pressed(true);
    click(&mut editor, 500.0, 500.0);
    assert_eq!(editor.selection.len(), 1);
}

#[test]
fn ctrl_click_extends_selection() {
    let mut editor = editor();
    click(&mut editor, 50.0, 25.0);
    editor.set_ctrl_pressed(true);
    click(&mut editor, 250.0, 25.0);
    assert_eq!(editor.selection.len(), 2);
    // The frame spans both buttons.
    let rect = editor.manipulator().rect().unwrap();
    assert_eq!(rect, Rect::new(0.0, 0.0, 300.0, 50.0));
}

#[test]
fn shift_click_never_grows_the_selection() {
    let mut editor = editor();
    click(&mut editor, 50.0, 25.0);
    let kept = editor.selection.ids()[0];

    // Remove mode: picking an unselected shape changes nothing.
    editor.set_shift_pressed(true);
    click(&mut editor, 250.0, 25.0);
    assert_eq!(editor.selection.ids(), &[kept]);
}

#[test]
fn rubber_band_selects_intersecting_shapes() {
    let mut editor = editor();
    editor.mouse_press(Point::new(150.0, 100.0));
    editor.mouse_move(Point::new(220.0, 20.0));
    editor.mouse_release(Point::new(220.0, 20.0));
    assert_eq!(editor.selection.len(), 1);
    let selected = editor.selection.ids()[0];
    let shape = editor
        .shapes()
        .iter()
        .find(|s| s.id == selected)
        .unwrap();
    assert_eq!(shape.data.left, 200.0);
}

#[test]
fn drag_gesture_moves_shape_and_records_one_undo_entry() {
    let mut editor = editor();
    click(&mut editor, 50.0, 25.0);
    assert!(!editor.can_undo());

    editor.mouse_press(Point::new(50.0, 25.0));
    editor.mouse_move(Point::new(60.0, 25.0));
    editor.mouse_move(Point::new(80.0, 25.0));
    editor.mouse_release(Point::new(80.0, 25.0));

    assert_eq!(editor.shapes()[0].data.left, 30.0);
    assert!(editor.can_undo());

    assert!(editor.undo());
    assert_eq!(editor.shapes()[0].data.left, 0.0);
    assert!(!editor.can_undo());

    assert!(editor.redo());
    assert_eq!(editor.shapes()[0].data.left, 30.0);
}

#[test]
fn dragging_a_selected_group_preserves_relative_positions() {
    let mut editor = editor();
    editor.select_all();

    editor.mouse_press(Point::new(150.0, 25.0));
    editor.mouse_move(Point::new(160.0, 35.0));
    editor.mouse_release(Point::new(160.0, 35.0));

    assert_eq!(editor.shapes()[0].data.left, 10.0);
    assert_eq!(editor.shapes()[0].data.top, 10.0);
    assert_eq!(editor.shapes()[1].data.left, 210.0);
    assert_eq!(editor.shapes()[1].data.top, 10.0);
}

#[test]
fn copy_paste_duplicates_on_top() {
    let mut editor = editor();
    click(&mut editor, 50.0, 25.0);
    editor.copy_selection();
    editor.paste();

    assert_eq!(editor.shapes().len(), 3);
    // The pasted copy is selected and sits at the end of the stack.
    assert_eq!(editor.selection.len(), 1);
    let top = editor.shapes().last().unwrap();
    assert!(editor.selection.contains(top.id));
    assert_eq!(top.data.rect(), Rect::new(0.0, 0.0, 100.0, 50.0));
}

#[test]
fn delete_selection_is_undoable() {
    let mut editor = editor();
    click(&mut editor, 50.0, 25.0);
    editor.delete_selection();
    assert_eq!(editor.shapes().len(), 1);
    assert!(editor.undo());
    assert_eq!(editor.shapes().len(), 2);
}

#[test]
fn background_shapes_are_created_under_everything() {
    let mut editor = editor();
    editor.create_shape(templates::background());
    assert!(!editor.shapes()[0].data.is_interactive());
    assert_eq!(editor.shapes().len(), 3);

    editor.create_shape(templates::square_button());
    assert!(editor.shapes().last().unwrap().data.is_interactive());
}

#[test]
fn z_order_moves_follow_selection() {
    let mut editor = editor();
    click(&mut editor, 50.0, 25.0);
    let selected = editor.selection.ids()[0];

    editor.move_selection_to_front();
    assert_eq!(editor.shapes().last().unwrap().id, selected);

    editor.move_selection_down();
    assert_eq!(editor.shapes()[0].id, selected);
}

#[test]
fn center_edit_gesture_is_undoable() {
    let mut editor = editor();
    editor.set_edit_center_mode(true);
    editor.mouse_press(Point::new(10.0, 10.0));
    editor.mouse_move(Point::new(100.0, 120.0));
    editor.mouse_release(Point::new(100.0, 120.0));
    editor.set_edit_center_mode(false);

    assert_eq!(editor.general().centerx, 100.0);
    assert_eq!(editor.general().centery, 120.0);

    assert!(editor.undo());
    assert_eq!(editor.general().centerx, 450.0);
    assert_eq!(editor.general().centery, 300.0);
}

#[test]
fn modified_flag_follows_saves() {
    let mut editor = editor();
    assert!(!editor.is_modified());
    click(&mut editor, 50.0, 25.0);
    editor.delete_selection();
    assert!(editor.is_modified());
    editor.mark_saved();
    assert!(!editor.is_modified());
}
