//! Registry lifecycle: initialization, lookup by name, submenu
//! shielding.

use hotbox_core::geometry::Point;
use hotbox_core::{DataError, GeneralOptions, HotboxData, Language};
use hotbox_reader::{ActionExecutor, HotboxRegistry};

#[derive(Default)]
struct NullExecutor;

impl ActionExecutor for NullExecutor {
    fn execute(&mut self, _language: Language, _command: &str) -> anyhow::Result<()> {
        Ok(())
    }
}

fn hotbox(name: &str, submenu: bool) -> HotboxData {
    HotboxData {
        general: GeneralOptions {
            name: name.to_string(),
            submenu,
            ..GeneralOptions::default()
        },
        shapes: Vec::new(),
    }
}

#[test]
fn show_places_the_pivot_under_the_cursor() {
    let mut registry = HotboxRegistry::new();
    registry.initialize(vec![hotbox("main", false)]).unwrap();

    let origin = registry.show("main", Point::new(1000.0, 800.0)).unwrap();
    // Default pivot is (450, 300).
    assert_eq!(origin.x, 550.0);
    assert_eq!(origin.y, 500.0);
    assert!(registry.get("main").unwrap().is_visible());
}

#[test]
fn unknown_names_are_reported() {
    let mut registry = HotboxRegistry::new();
    registry.initialize(vec![hotbox("main", false)]).unwrap();

    let error = registry.show("missing", Point::new(0.0, 0.0)).unwrap_err();
    assert!(matches!(error, DataError::UnknownHotbox { name } if name == "missing"));
}

#[test]
fn initialization_happens_once() {
    let mut registry = HotboxRegistry::new();
    registry.initialize(vec![hotbox("main", false)]).unwrap();
    registry.show("main", Point::new(0.0, 0.0)).unwrap();

    // A second initialize keeps the live readers untouched.
    registry
        .initialize(vec![hotbox("other", false)])
        .unwrap();
    assert!(registry.get("main").unwrap().is_visible());
    assert!(registry.get("other").is_err());
}

#[test]
fn duplicate_names_are_rejected() {
    let mut registry = HotboxRegistry::new();
    let error = registry
        .initialize(vec![hotbox("main", false), hotbox("main", true)])
        .unwrap_err();
    assert!(matches!(error, DataError::DuplicateName { .. }));
    assert!(!registry.is_initialized());
}

#[test]
fn hiding_a_root_hotbox_takes_submenus_down() {
    let mut registry = HotboxRegistry::new();
    registry
        .initialize(vec![hotbox("main", false), hotbox("tools", true)])
        .unwrap();
    registry.show("main", Point::new(0.0, 0.0)).unwrap();
    registry.show("tools", Point::new(0.0, 0.0)).unwrap();

    let mut executor = NullExecutor;
    registry.hide("main", &mut executor).unwrap();
    assert!(!registry.get("main").unwrap().is_visible());
    assert!(!registry.get("tools").unwrap().is_visible());
}

#[test]
fn hiding_a_submenu_leaves_siblings_alone() {
    let mut registry = HotboxRegistry::new();
    registry
        .initialize(vec![hotbox("main", false), hotbox("tools", true)])
        .unwrap();
    registry.show("main", Point::new(0.0, 0.0)).unwrap();
    registry.show("tools", Point::new(0.0, 0.0)).unwrap();

    let mut executor = NullExecutor;
    registry.hide("tools", &mut executor).unwrap();
    assert!(registry.get("main").unwrap().is_visible());
}

#[test]
fn switch_toggles_visibility() {
    let mut registry = HotboxRegistry::new();
    registry.initialize(vec![hotbox("main", false)]).unwrap();

    let mut executor = NullExecutor;
    let origin = registry
        .switch("main", Point::new(450.0, 300.0), &mut executor)
        .unwrap();
    assert!(origin.is_some());
    assert!(registry.get("main").unwrap().is_visible());

    let origin = registry
        .switch("main", Point::new(450.0, 300.0), &mut executor)
        .unwrap();
    assert!(origin.is_none());
    assert!(!registry.get("main").unwrap().is_visible());
}
