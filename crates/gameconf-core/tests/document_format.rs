//! Tests of the settings file format as seen by other tools.
//!
//! The settings file is hand-editable JSON.  These tests pin the layout the
//! codec reads and writes: flat scalars at the top level and one `controls`
//! object holding `action -> slot -> { device, key }`.

use gameconf_core::codec::{decode_bindings, decode_document, encode_bindings, encode_document};
use gameconf_core::keymap::{keyboard, PointerButton};
use gameconf_core::{
    ActionBinding, BindingSlot, BindingTable, BuildFlavor, GameInputAction, KeyNamer, SettingValue,
    SettingsDefaults,
};
use serde_json::{json, Value};

const HAND_WRITTEN: &str = r#"{
    "width": 1920,
    "height": 1080,
    "fullscreen": true,
    "borderless": false,
    "sound": 0.75,
    "address": "play.example.net",
    "port": 23450,
    "lang": "fr",
    "controls": {
        "MoveForward": {
            "0": { "device": "Keyboard", "key": "Z" },
            "1": { "device": "Keyboard", "key": "Up" }
        },
        "FirePrimary": {
            "0": { "device": "Mouse", "key": "MLEFT" },
            "1": { "device": "Keyboard", "key": "Left Shift" }
        }
    }
}"#;

#[test]
fn test_hand_written_file_decodes_scalars_with_their_json_types() {
    let decoded = decode_document(HAND_WRITTEN).expect("valid document");

    assert_eq!(decoded.scalars.get("width"), Some(&SettingValue::UInt(1920)));
    assert_eq!(decoded.scalars.get("fullscreen"), Some(&SettingValue::Bool(true)));
    assert_eq!(decoded.scalars.get("sound"), Some(&SettingValue::Float(0.75)));
    assert_eq!(decoded.scalars.get("lang"), Some(&SettingValue::Str("fr".into())));
    assert!(decoded.scalars.get("controls").is_none());
    assert!(decoded.skipped.is_empty());
}

#[test]
fn test_hand_written_controls_overlay_defaults() {
    // Arrange
    let decoded = decode_document(HAND_WRITTEN).unwrap();
    let controls = decoded.controls.expect("controls present");
    let namer = KeyNamer::standard();
    let mut table = BindingTable::defaults();

    // Act
    let summary = decode_bindings(&controls, &namer, &mut table);

    // Assert
    assert_eq!(summary.decoded_actions, vec![GameInputAction::MoveForward, GameInputAction::FirePrimary]);
    assert_eq!(summary.missing_actions.len(), GameInputAction::COUNT - 2);
    assert_eq!(
        table.get(GameInputAction::FirePrimary, BindingSlot::SECONDARY),
        Some(&ActionBinding::keyboard(keyboard::KEY_LEFT_SHIFT))
    );
    assert_eq!(
        table.get(GameInputAction::FirePrimary, BindingSlot::PRIMARY),
        Some(&ActionBinding::pointer(PointerButton::Left))
    );
    assert_eq!(
        table.get(GameInputAction::MoveLeft, BindingSlot::PRIMARY),
        Some(&ActionBinding::keyboard(keyboard::KEY_A))
    );
}

#[test]
fn test_default_file_has_expected_shape() {
    // Arrange
    let defaults = SettingsDefaults::for_flavor(BuildFlavor::Release);
    let namer = KeyNamer::standard();

    // Act
    let controls = encode_bindings(&defaults.bindings, &namer);
    let text = encode_document(&defaults.settings, &controls).expect("encode");
    let written: Value = serde_json::from_str(&text).unwrap();

    // Assert
    assert_eq!(written["fullscreen"], json!(true));
    assert_eq!(written["width"], json!(0));
    assert_eq!(written["sound"], json!(1.0));
    assert_eq!(
        written["controls"]["MoveBackward"],
        json!({
            "0": { "device": "Keyboard", "key": "S" },
            "1": { "device": "Keyboard", "key": "Down" }
        })
    );
    assert_eq!(
        written["controls"]["FireSecondary"],
        json!({ "0": { "device": "Mouse", "key": "MRIGHT" } })
    );
}

#[test]
fn test_encoded_file_decodes_back_to_same_document() {
    let defaults = SettingsDefaults::for_flavor(BuildFlavor::Debug);
    let namer = KeyNamer::standard();
    let controls = encode_bindings(&defaults.bindings, &namer);
    let text = encode_document(&defaults.settings, &controls).unwrap();

    let decoded = decode_document(&text).unwrap();
    let mut table = BindingTable::new();
    let summary = decode_bindings(decoded.controls.as_ref().unwrap(), &namer, &mut table);

    assert_eq!(decoded.scalars, defaults.settings);
    assert_eq!(table, defaults.bindings);
    assert!(summary.missing_actions.is_empty());
}
