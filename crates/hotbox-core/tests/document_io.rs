//! Persistence: the flat dotted option format, legacy upgrades and file
//! round trips.

use hotbox_core::{
    load_hotboxes, save_hotboxes, unique_name, GeneralOptions, HotboxData, Language, ShapeData,
    ShapeKind, Triggering,
};

#[test]
fn file_round_trip_preserves_documents() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("hotboxes.json");

    let mut shape = ShapeData::default();
    shape.text_content = "Save".to_string();
    shape.action_left = true;
    shape.action_left_command = "save_scene()".to_string();
    let hotboxes = vec![HotboxData {
        general: GeneralOptions {
            name: "main".to_string(),
            aiming: true,
            ..GeneralOptions::default()
        },
        shapes: vec![shape],
    }];

    save_hotboxes(&path, &hotboxes).unwrap();
    let loaded = load_hotboxes(&path).unwrap();
    assert_eq!(loaded, hotboxes);
}

#[test]
fn missing_file_loads_as_empty() {
    let dir = tempfile::tempdir().unwrap();
    let loaded = load_hotboxes(dir.path().join("absent.json")).unwrap();
    assert!(loaded.is_empty());
}

#[test]
fn shapes_serialize_with_flat_dotted_keys() {
    let data = ShapeData::default();
    let value = serde_json::to_value(&data).unwrap();
    let object = value.as_object().unwrap();
    assert!(object.contains_key("shape.left"));
    assert!(object.contains_key("bgcolor.normal"));
    assert!(object.contains_key("action.left.command"));
    assert_eq!(object["shape"], "square");
    assert_eq!(object["action.left.language"], "python");
}

#[test]
fn legacy_documents_upgrade_on_load() {
    // Old files predate the submenu, aiming, leaveclose and triggering
    // options, use the "click" spelling, and may carry obsolete shape
    // keys. All of that loads.
    let json = r#"{
        "general": {
            "name": "legacy",
            "width": 800,
            "height": 400,
            "centerx": 400,
            "centery": 200
        },
        "shapes": [
            {
                "shape": "round",
                "shape.left": 10.0,
                "shape.top": 20.0,
                "shape.width": 60.0,
                "shape.height": 60.0,
                "action.left": true,
                "action.left.command": "hello()",
                "action.left.language": "mel",
                "touch": "obsolete"
            }
        ]
    }"#;
    let data: HotboxData = serde_json::from_str(json).unwrap();
    assert!(!data.general.submenu);
    assert!(!data.general.aiming);
    assert!(!data.general.leaveclose);
    assert_eq!(data.general.triggering, Triggering::ClickOnly);

    let shape = &data.shapes[0];
    assert_eq!(shape.kind, ShapeKind::Round);
    assert_eq!(shape.left, 10.0);
    assert_eq!(shape.action_left_language, Language::Mel);
    // Unspecified options fall back to their defaults.
    assert_eq!(shape.text_size, 12.0);

    let legacy_triggering: Triggering = serde_json::from_str("\"click\"").unwrap();
    assert_eq!(legacy_triggering, Triggering::ClickOnly);
}

#[test]
fn generated_names_never_collide() {
    let mut hotboxes = Vec::new();
    for _ in 0..3 {
        let name = unique_name(&hotboxes, None);
        hotboxes.push(HotboxData {
            general: GeneralOptions {
                name,
                ..GeneralOptions::default()
            },
            shapes: Vec::new(),
        });
    }
    let names: Vec<&str> = hotboxes.iter().map(|h| h.general.name.as_str()).collect();
    assert_eq!(names.len(), 3);
    for (index, name) in names.iter().enumerate() {
        assert!(!names[..index].contains(name));
    }
}
