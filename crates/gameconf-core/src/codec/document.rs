//! Whole-document encoding: scalar settings plus the raw `controls` object.

use serde_json::{Map, Number, Value};
use tracing::warn;

use super::{json_type_name, CodecError, ControlsSection, CONTROLS_KEY};
use crate::domain::document::SettingsDocument;
use crate::domain::value::SettingValue;

/// Result of parsing the settings file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DecodedDocument {
    /// Every top-level scalar whose JSON type maps onto a [`SettingValue`].
    pub scalars: SettingsDocument,
    /// The `controls` object, or `None` if the key is absent or not an object.
    pub controls: Option<ControlsSection>,
    /// Top-level keys that were dropped because their JSON type is unsupported
    /// (null, array, nested object, negative integer).
    pub skipped: Vec<String>,
}

/// Parses settings-file text.
///
/// # Errors
///
/// Returns [`CodecError::Parse`] for malformed JSON (including an empty file)
/// and [`CodecError::NotAnObject`] when the root is not a JSON object.
/// Individual unsupported values never fail the decode; they are listed in
/// [`DecodedDocument::skipped`].
pub fn decode_document(text: &str) -> Result<DecodedDocument, CodecError> {
    let root: Value = serde_json::from_str(text).map_err(CodecError::Parse)?;
    let entries = match root {
        Value::Object(entries) => entries,
        other => {
            return Err(CodecError::NotAnObject {
                found: json_type_name(&other),
            })
        }
    };

    let mut decoded = DecodedDocument::default();
    for (key, value) in entries {
        if key == CONTROLS_KEY {
            match value {
                Value::Object(controls) => decoded.controls = Some(controls),
                other => warn!(
                    found = json_type_name(&other),
                    "'{CONTROLS_KEY}' is not an object; treating it as absent"
                ),
            }
            continue;
        }

        match decode_scalar(&value) {
            Some(scalar) => {
                decoded.scalars.set(key, scalar);
            }
            None => {
                warn!(key = %key, found = json_type_name(&value), "dropping setting with unsupported type");
                decoded.skipped.push(key);
            }
        }
    }
    Ok(decoded)
}

/// Renders scalars and the encoded binding table as pretty-printed JSON.
///
/// # Errors
///
/// Returns [`CodecError::NonFiniteFloat`] if any float is NaN or infinite.
pub fn encode_document(scalars: &SettingsDocument, controls: &ControlsSection) -> Result<String, CodecError> {
    let mut root = Map::new();
    for (key, value) in scalars {
        if key == CONTROLS_KEY {
            warn!("scalar setting '{CONTROLS_KEY}' collides with the binding section and is not written");
            continue;
        }
        root.insert(key.clone(), encode_scalar(key, value)?);
    }
    root.insert(CONTROLS_KEY.to_string(), Value::Object(controls.clone()));

    serde_json::to_string_pretty(&Value::Object(root)).map_err(CodecError::Serialize)
}

/// Maps a JSON value onto a [`SettingValue`] without coercion.
fn decode_scalar(value: &Value) -> Option<SettingValue> {
    match value {
        Value::Bool(b) => Some(SettingValue::Bool(*b)),
        Value::String(s) => Some(SettingValue::Str(s.clone())),
        Value::Number(n) => {
            if let Some(u) = n.as_u64() {
                Some(SettingValue::UInt(u))
            } else if n.is_f64() {
                n.as_f64().map(SettingValue::Float)
            } else {
                // Negative integers have no unsigned or float reading that
                // preserves what the user wrote.
                None
            }
        }
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

fn encode_scalar(key: &str, value: &SettingValue) -> Result<Value, CodecError> {
    Ok(match value {
        SettingValue::UInt(u) => Value::Number(Number::from(*u)),
        SettingValue::Bool(b) => Value::Bool(*b),
        SettingValue::Float(f) => Value::Number(
            Number::from_f64(*f).ok_or_else(|| CodecError::NonFiniteFloat { key: key.to_string() })?,
        ),
        SettingValue::Str(s) => Value::String(s.clone()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_maps_each_json_type_to_its_variant() {
        // Arrange
        let text = r#"{ "width": 1920, "fullscreen": true, "sound": 0.3, "lang": "de" }"#;

        // Act
        let decoded = decode_document(text).expect("valid document");

        // Assert
        assert_eq!(decoded.scalars.get("width"), Some(&SettingValue::UInt(1920)));
        assert_eq!(decoded.scalars.get("fullscreen"), Some(&SettingValue::Bool(true)));
        assert_eq!(decoded.scalars.get("sound"), Some(&SettingValue::Float(0.3)));
        assert_eq!(decoded.scalars.get("lang"), Some(&SettingValue::Str("de".into())));
        assert!(decoded.controls.is_none());
        assert!(decoded.skipped.is_empty());
    }

    #[test]
    fn test_decode_keeps_float_with_zero_fraction_as_float() {
        let decoded = decode_document(r#"{ "sound": 1.0 }"#).unwrap();
        assert_eq!(decoded.scalars.get("sound"), Some(&SettingValue::Float(1.0)));
    }

    #[test]
    fn test_decode_skips_unsupported_values_without_failing() {
        let text = r#"{ "a": null, "b": [1, 2], "c": { "x": 1 }, "d": -4, "port": 80 }"#;

        let decoded = decode_document(text).unwrap();

        assert_eq!(decoded.scalars.len(), 1);
        assert_eq!(decoded.scalars.get("port"), Some(&SettingValue::UInt(80)));
        let mut skipped = decoded.skipped.clone();
        skipped.sort();
        assert_eq!(skipped, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_decode_separates_controls_from_scalars() {
        let text = r#"{ "lang": "en", "controls": { "FireThird": {} } }"#;

        let decoded = decode_document(text).unwrap();

        assert!(!decoded.scalars.contains(CONTROLS_KEY));
        let controls = decoded.controls.expect("controls present");
        assert!(controls.contains_key("FireThird"));
    }

    #[test]
    fn test_decode_treats_non_object_controls_as_absent() {
        let decoded = decode_document(r#"{ "controls": "wasd" }"#).unwrap();
        assert!(decoded.controls.is_none());
        assert!(decoded.scalars.is_empty());
    }

    #[test]
    fn test_decode_rejects_malformed_and_empty_text() {
        assert!(matches!(decode_document("{ \"width\": "), Err(CodecError::Parse(_))));
        assert!(matches!(decode_document(""), Err(CodecError::Parse(_))));
    }

    #[test]
    fn test_decode_rejects_non_object_root() {
        let err = decode_document("[1, 2, 3]").unwrap_err();
        assert!(matches!(err, CodecError::NotAnObject { found: "array" }));
    }

    #[test]
    fn test_encode_then_decode_preserves_scalars_and_controls() {
        // Arrange
        let mut scalars = SettingsDocument::new();
        scalars.set("width", 2560u32);
        scalars.set("borderless", false);
        scalars.set("sound", 1.0);
        scalars.set("address", "10.0.0.2");
        let mut controls = ControlsSection::new();
        controls.insert("FireThird".into(), serde_json::json!({ "0": { "device": "Keyboard", "key": "Q" } }));

        // Act
        let text = encode_document(&scalars, &controls).expect("encodable");
        let decoded = decode_document(&text).expect("decodable");

        // Assert
        assert_eq!(decoded.scalars, scalars);
        assert_eq!(decoded.controls, Some(controls));
    }

    #[test]
    fn test_encode_rejects_non_finite_float() {
        let mut scalars = SettingsDocument::new();
        scalars.set("sound", f64::NAN);

        let err = encode_document(&scalars, &ControlsSection::new()).unwrap_err();

        assert!(matches!(err, CodecError::NonFiniteFloat { ref key } if key == "sound"));
    }

    #[test]
    fn test_encode_never_lets_a_scalar_shadow_controls() {
        let mut scalars = SettingsDocument::new();
        scalars.set(CONTROLS_KEY, "oops");

        let text = encode_document(&scalars, &ControlsSection::new()).unwrap();
        let decoded = decode_document(&text).unwrap();

        assert_eq!(decoded.controls, Some(ControlsSection::new()));
        assert!(decoded.scalars.is_empty());
    }
}
