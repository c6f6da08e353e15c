//! Dynamically-typed scalar setting values.

use std::fmt;

/// A single scalar setting.
///
/// Values are stored exactly as they were set; there is no coercion between
/// variants.  Reading a `UInt` with [`SettingValue::as_f64`] returns `None`
/// rather than silently converting.
#[derive(Debug, Clone, PartialEq)]
pub enum SettingValue {
    UInt(u64),
    Bool(bool),
    Float(f64),
    Str(String),
}

impl SettingValue {
    /// Short name of the variant, used in log output.
    pub fn type_name(&self) -> &'static str {
        match self {
            SettingValue::UInt(_) => "uint",
            SettingValue::Bool(_) => "bool",
            SettingValue::Float(_) => "float",
            SettingValue::Str(_) => "string",
        }
    }

    pub fn as_u64(&self) -> Option<u64> {
        match self {
            SettingValue::UInt(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            SettingValue::Bool(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            SettingValue::Float(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            SettingValue::Str(v) => Some(v.as_str()),
            _ => None,
        }
    }

    /// Parses free-form user input into the narrowest matching variant.
    ///
    /// Tried in order: `true`/`false`, unsigned integer, float, and finally
    /// the raw text as a string.
    pub fn parse_lenient(text: &str) -> Self {
        if let Ok(b) = text.parse::<bool>() {
            return SettingValue::Bool(b);
        }
        if let Ok(n) = text.parse::<u64>() {
            return SettingValue::UInt(n);
        }
        match text.parse::<f64>() {
            Ok(f) if f.is_finite() => SettingValue::Float(f),
            _ => SettingValue::Str(text.to_string()),
        }
    }
}

impl fmt::Display for SettingValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingValue::UInt(v) => write!(f, "{v}"),
            SettingValue::Bool(v) => write!(f, "{v}"),
            SettingValue::Float(v) => write!(f, "{v:?}"),
            SettingValue::Str(v) => write!(f, "{v:?}"),
        }
    }
}

impl From<u64> for SettingValue {
    fn from(v: u64) -> Self {
        SettingValue::UInt(v)
    }
}

impl From<u32> for SettingValue {
    fn from(v: u32) -> Self {
        SettingValue::UInt(u64::from(v))
    }
}

impl From<bool> for SettingValue {
    fn from(v: bool) -> Self {
        SettingValue::Bool(v)
    }
}

impl From<f64> for SettingValue {
    fn from(v: f64) -> Self {
        SettingValue::Float(v)
    }
}

impl From<&str> for SettingValue {
    fn from(v: &str) -> Self {
        SettingValue::Str(v.to_string())
    }
}

impl From<String> for SettingValue {
    fn from(v: String) -> Self {
        SettingValue::Str(v)
    }
}
