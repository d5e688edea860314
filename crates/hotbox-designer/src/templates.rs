//! Factory presets for new documents and new shapes.

use hotbox_core::{unique_name, GeneralOptions, HotboxData, ShapeData, ShapeKind};

/// A clickable button preset: bordered square with a left action armed.
pub fn square_button() -> ShapeData {
    ShapeData {
        kind: ShapeKind::Square,
        left: 0.0,
        top: 0.0,
        width: 120.0,
        height: 25.0,
        border: true,
        text_content: "Button".to_string(),
        action_left: true,
        ..ShapeData::default()
    }
}

/// A passive caption: no background, no border, no actions.
pub fn text_label() -> ShapeData {
    ShapeData {
        kind: ShapeKind::Square,
        left: 0.0,
        top: 0.0,
        width: 200.0,
        height: 25.0,
        border: false,
        bg_transparency: 255.0,
        text_content: "Text".to_string(),
        text_size: 16.0,
        action_left: false,
        action_right: false,
        ..ShapeData::default()
    }
}

/// A decorative panel placed behind interactive shapes.
pub fn background() -> ShapeData {
    ShapeData {
        kind: ShapeKind::Square,
        left: 0.0,
        top: 0.0,
        width: 400.0,
        height: 300.0,
        border: false,
        bg_color_normal: "#404040".to_string(),
        bg_color_hovered: "#404040".to_string(),
        bg_color_clicked: "#404040".to_string(),
        bg_transparency: 75.0,
        text_content: String::new(),
        action_left: false,
        action_right: false,
        ..ShapeData::default()
    }
}

/// A fresh, empty hotbox whose name does not collide with any existing
/// one.
pub fn new_hotbox(existing: &[HotboxData]) -> HotboxData {
    HotboxData {
        general: GeneralOptions {
            name: unique_name(existing, None),
            ..GeneralOptions::default()
        },
        shapes: Vec::new(),
    }
}
