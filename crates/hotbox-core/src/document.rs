//! The hotbox document model and its JSON persistence.
//!
//! A hotbox file is a JSON array of documents, each
//! `{"general": {...}, "shapes": [...]}`. Shape options are stored under the
//! historical flat dotted keys (`"bgcolor.normal"`, `"action.left.command"`,
//! ...); the serde renames below reproduce that wire format exactly while
//! exposing a typed schema. Loading performs the one-way legacy upgrade:
//! missing `submenu` and `leaveclose` fields are injected as `false`, unknown
//! keys from older schema revisions are dropped on resave.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{DataError, Result};
use crate::geometry::Rect;

/// Naming scheme for freshly created documents.
const DEFAULT_NAME: &str = "MyHotbox";

/// How a hotbox fires actions while shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Triggering {
    /// Actions fire on click release only.
    #[default]
    #[serde(rename = "click only", alias = "click")]
    ClickOnly,
    /// Hiding the hotbox also fires the hovered shape's left action.
    #[serde(rename = "click or close")]
    ClickOrClose,
}

/// The drawn outline family of a shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    #[default]
    Square,
    Round,
}

/// Horizontal text alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Halign {
    Left,
    #[default]
    Center,
    Right,
}

/// Vertical text alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Valign {
    Top,
    #[default]
    Center,
    Bottom,
}

/// Script language tag carried by an action slot. The core never interprets
/// commands; executors are host collaborators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "python")]
    Python,
    #[serde(rename = "mel")]
    Mel,
    #[serde(rename = "nuke tcl")]
    NukeTcl,
    #[serde(rename = "nuke expression")]
    NukeExpression,
    #[serde(rename = "houdini script")]
    Hscript,
}

/// Which pointer button an action slot is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
}

/// Document-level settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneralOptions {
    /// Unique among sibling documents.
    pub name: String,
    pub width: f64,
    pub height: f64,
    /// Pivot X: window placement anchor and aiming ray origin.
    pub centerx: f64,
    /// Pivot Y: window placement anchor and aiming ray origin.
    pub centery: f64,
    /// Submenus survive `hide_submenus` requests from sibling hotboxes.
    #[serde(default)]
    pub submenu: bool,
    #[serde(default)]
    pub triggering: Triggering,
    /// Resolve the active shape by ray casting from the pivot instead of
    /// direct containment.
    #[serde(default)]
    pub aiming: bool,
    /// Close the overlay when the cursor leaves it.
    #[serde(default)]
    pub leaveclose: bool,
}

impl Default for GeneralOptions {
    fn default() -> Self {
        Self {
            name: String::new(),
            width: 900.0,
            height: 600.0,
            centerx: 450.0,
            centery: 300.0,
            submenu: false,
            triggering: Triggering::default(),
            aiming: false,
            leaveclose: false,
        }
    }
}

/// A positioned, styled, optionally interactive shape.
///
/// Field names mirror the flat dotted option keys of the persisted format.
/// Z-order is the position in the owning document's shape list: later shapes
/// draw on top and hit-test first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShapeData {
    #[serde(rename = "shape")]
    pub kind: ShapeKind,
    #[serde(rename = "shape.left")]
    pub left: f64,
    #[serde(rename = "shape.top")]
    pub top: f64,
    #[serde(rename = "shape.width")]
    pub width: f64,
    #[serde(rename = "shape.height")]
    pub height: f64,

    pub border: bool,
    #[serde(rename = "bgcolor.normal")]
    pub bg_color_normal: String,
    #[serde(rename = "bgcolor.hovered")]
    pub bg_color_hovered: String,
    #[serde(rename = "bgcolor.clicked")]
    pub bg_color_clicked: String,
    #[serde(rename = "bgcolor.transparency")]
    pub bg_transparency: f64,
    #[serde(rename = "bordercolor.normal")]
    pub border_color_normal: String,
    #[serde(rename = "bordercolor.hovered")]
    pub border_color_hovered: String,
    #[serde(rename = "bordercolor.clicked")]
    pub border_color_clicked: String,
    #[serde(rename = "bordercolor.transparency")]
    pub border_transparency: f64,
    #[serde(rename = "borderwidth.normal")]
    pub border_width_normal: f64,
    #[serde(rename = "borderwidth.hovered")]
    pub border_width_hovered: f64,
    #[serde(rename = "borderwidth.clicked")]
    pub border_width_clicked: f64,

    #[serde(rename = "text.content")]
    pub text_content: String,
    #[serde(rename = "text.size")]
    pub text_size: f64,
    #[serde(rename = "text.bold")]
    pub text_bold: bool,
    #[serde(rename = "text.italic")]
    pub text_italic: bool,
    #[serde(rename = "text.color")]
    pub text_color: String,
    #[serde(rename = "text.halign")]
    pub text_halign: Halign,
    #[serde(rename = "text.valign")]
    pub text_valign: Valign,

    #[serde(rename = "image.path")]
    pub image_path: String,
    #[serde(rename = "image.fit")]
    pub image_fit: bool,
    #[serde(rename = "image.width")]
    pub image_width: f64,
    #[serde(rename = "image.height")]
    pub image_height: f64,

    #[serde(rename = "action.left")]
    pub action_left: bool,
    #[serde(rename = "action.left.command")]
    pub action_left_command: String,
    #[serde(rename = "action.left.language")]
    pub action_left_language: Language,
    #[serde(rename = "action.left.close")]
    pub action_left_close: bool,
    #[serde(rename = "action.right")]
    pub action_right: bool,
    #[serde(rename = "action.right.command")]
    pub action_right_command: String,
    #[serde(rename = "action.right.language")]
    pub action_right_language: Language,
    #[serde(rename = "action.right.close")]
    pub action_right_close: bool,
}

impl Default for ShapeData {
    fn default() -> Self {
        Self {
            kind: ShapeKind::Square,
            left: 0.0,
            top: 0.0,
            width: 120.0,
            height: 25.0,
            border: false,
            bg_color_normal: "#888888".to_string(),
            bg_color_hovered: "#AAAAAA".to_string(),
            bg_color_clicked: "#DDDDDD".to_string(),
            bg_transparency: 0.0,
            border_color_normal: "#000000".to_string(),
            border_color_hovered: "#393939".to_string(),
            border_color_clicked: "#FFFFFF".to_string(),
            border_transparency: 0.0,
            border_width_normal: 0.0,
            border_width_hovered: 0.0,
            border_width_clicked: 0.0,
            text_content: String::new(),
            text_size: 12.0,
            text_bold: false,
            text_italic: false,
            text_color: "#FFFFFF".to_string(),
            text_halign: Halign::Center,
            text_valign: Valign::Center,
            image_path: String::new(),
            image_fit: false,
            image_width: 32.0,
            image_height: 32.0,
            action_left: false,
            action_left_command: String::new(),
            action_left_language: Language::Python,
            action_left_close: false,
            action_right: false,
            action_right_command: String::new(),
            action_right_language: Language::Python,
            action_right_close: false,
        }
    }
}

impl ShapeData {
    /// The shape's rectangle in document-local coordinates.
    pub fn rect(&self) -> Rect {
        Rect::new(self.left, self.top, self.width, self.height)
    }

    /// Writes a rectangle back into the positional options.
    pub fn set_rect(&mut self, rect: &Rect) {
        self.left = rect.left;
        self.top = rect.top;
        self.width = rect.width;
        self.height = rect.height;
    }

    /// A shape is interactive when at least one action slot is enabled.
    pub fn is_interactive(&self) -> bool {
        self.action_left || self.action_right
    }

    /// Whether the given action slot is enabled.
    pub fn has_action(&self, button: MouseButton) -> bool {
        match button {
            MouseButton::Left => self.action_left,
            MouseButton::Right => self.action_right,
        }
    }

    /// The command and language of the given action slot.
    pub fn action(&self, button: MouseButton) -> (&str, Language) {
        match button {
            MouseButton::Left => (&self.action_left_command, self.action_left_language),
            MouseButton::Right => (&self.action_right_command, self.action_right_language),
        }
    }

    /// Whether executing with the given button states requests auto-close.
    pub fn autoclose(&self, left: bool, right: bool) -> bool {
        (left && self.action_left && self.action_left_close)
            || (right && self.action_right && self.action_right_close)
    }
}

/// A complete hotbox document: general settings plus the ordered shape list.
///
/// `Clone` is a full deep copy; the undo manager relies on that.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct HotboxData {
    pub general: GeneralOptions,
    pub shapes: Vec<ShapeData>,
}

/// Loads every hotbox document from `path`. A missing file yields an empty
/// list, not an error.
pub fn load_hotboxes(path: impl AsRef<Path>) -> Result<Vec<HotboxData>> {
    let path = path.as_ref();
    if !path.exists() {
        debug!("hotbox file {} does not exist, starting empty", path.display());
        return Ok(Vec::new());
    }
    let content = std::fs::read_to_string(path)?;
    let hotboxes: Vec<HotboxData> = serde_json::from_str(&content)?;
    debug!("loaded {} hotboxes from {}", hotboxes.len(), path.display());
    Ok(hotboxes)
}

/// Saves every hotbox document to `path` as pretty-printed JSON.
pub fn save_hotboxes(path: impl AsRef<Path>, hotboxes: &[HotboxData]) -> Result<()> {
    let json = serde_json::to_string_pretty(hotboxes)?;
    std::fs::write(path.as_ref(), json)?;
    Ok(())
}

/// Checks the sibling-name-uniqueness invariant over a set of documents.
pub fn validate_unique_names(hotboxes: &[HotboxData]) -> Result<()> {
    let mut seen = std::collections::HashSet::new();
    for hotbox in hotboxes {
        if !seen.insert(hotbox.general.name.as_str()) {
            return Err(DataError::DuplicateName {
                name: hotbox.general.name.clone(),
            });
        }
    }
    Ok(())
}

/// Produces a document name not used by any of `existing`.
///
/// With no proposal the `MyHotbox_NN` scheme is used; a taken proposal gets a
/// `_NN` suffix appended.
pub fn unique_name(existing: &[HotboxData], proposal: Option<&str>) -> String {
    let names: Vec<&str> = existing.iter().map(|h| h.general.name.as_str()).collect();
    let mut index = 0;
    let mut name = match proposal {
        Some(proposal) => proposal.to_string(),
        None => format!("{}_{:02}", DEFAULT_NAME, index),
    };
    while names.contains(&name.as_str()) {
        name = match proposal {
            Some(proposal) => format!("{}_{:02}", proposal, index),
            None => format!("{}_{:02}", DEFAULT_NAME, index),
        };
        index += 1;
    }
    name
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unique_name_counts_up() {
        let mut existing = vec![HotboxData::default()];
        existing[0].general.name = "MyHotbox_00".to_string();
        assert_eq!(unique_name(&existing, None), "MyHotbox_01");
        assert_eq!(unique_name(&existing, Some("Modeling")), "Modeling");
        existing[0].general.name = "Modeling".to_string();
        assert_eq!(unique_name(&existing, Some("Modeling")), "Modeling_00");
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let mut hotboxes = vec![HotboxData::default(), HotboxData::default()];
        hotboxes[0].general.name = "A".to_string();
        hotboxes[1].general.name = "A".to_string();
        assert!(validate_unique_names(&hotboxes).is_err());
        hotboxes[1].general.name = "B".to_string();
        assert!(validate_unique_names(&hotboxes).is_ok());
    }
}
