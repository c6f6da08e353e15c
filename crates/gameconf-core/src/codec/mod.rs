//! Stateless JSON codec for the settings file.
//!
//! The file is a single JSON object.  Every top-level key except `controls`
//! is a scalar setting; `controls` holds the encoded binding table:
//!
//! ```json
//! {
//!   "width": 1280,
//!   "sound": 1.0,
//!   "lang": "en",
//!   "controls": {
//!     "MoveForward": {
//!       "0": { "device": "Keyboard", "key": "W" },
//!       "1": { "device": "Keyboard", "key": "Up" }
//!     }
//!   }
//! }
//! ```
//!
//! The codec never owns state.  [`decode_document`] turns text into a typed
//! [`DecodedDocument`], [`encode_document`] does the reverse, and the
//! [`bindings`] functions convert between the `controls` object and a
//! [`crate::BindingTable`].

pub mod bindings;
pub mod document;

pub use bindings::{decode_bindings, encode_bindings, DecodeSummary};
pub use document::{decode_document, encode_document, DecodedDocument};

use thiserror::Error;

/// Top-level key of the binding sub-section.
pub const CONTROLS_KEY: &str = "controls";

/// The raw `controls` object as read from or written to the file.
pub type ControlsSection = serde_json::Map<String, serde_json::Value>;

/// Errors produced while converting between JSON text and the settings model.
#[derive(Debug, Error)]
pub enum CodecError {
    /// The text is not valid JSON.
    #[error("settings file is not valid JSON: {0}")]
    Parse(#[source] serde_json::Error),

    /// The text is valid JSON but the root is not an object.
    #[error("settings root must be a JSON object, found {found}")]
    NotAnObject { found: &'static str },

    /// A float setting holds NaN or infinity, which JSON cannot represent.
    #[error("setting '{key}' holds a non-finite float and cannot be written")]
    NonFiniteFloat { key: String },

    /// The document could not be rendered to text.
    #[error("failed to serialize settings: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// Name of a JSON value's type, for diagnostics.
pub(crate) fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "bool",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
