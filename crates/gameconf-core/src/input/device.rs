//! Physical input device classes.

use std::fmt;

/// Category of physical input source a binding refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DeviceClass {
    Keyboard,
    /// Mouse buttons.  Serialized as `"Mouse"`.
    Pointer,
    /// Sentinel for an unbound slot.
    #[default]
    NoDevice,
}

impl DeviceClass {
    /// Stable serialization name.  [`DeviceClass::NoDevice`] has none and
    /// yields an empty string.
    pub fn name(self) -> &'static str {
        match self {
            DeviceClass::Keyboard => "Keyboard",
            DeviceClass::Pointer => "Mouse",
            DeviceClass::NoDevice => "",
        }
    }

    /// Resolves a persisted device name by exact match against
    /// `"Keyboard"` and `"Mouse"`.  Anything else returns `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Keyboard" => Some(DeviceClass::Keyboard),
            "Mouse" => Some(DeviceClass::Pointer),
            _ => None,
        }
    }
}

impl fmt::Display for DeviceClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeviceClass::NoDevice => f.write_str("none"),
            other => f.write_str(other.name()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pointer_serializes_as_mouse() {
        assert_eq!(DeviceClass::Pointer.name(), "Mouse");
        assert_eq!(DeviceClass::from_name("Mouse"), Some(DeviceClass::Pointer));
    }

    #[test]
    fn test_from_name_rejects_everything_but_exact_names() {
        for bad in ["", "keyboard", "MOUSE", "Pointer", "Gamepad"] {
            assert_eq!(DeviceClass::from_name(bad), None, "'{bad}' must not resolve");
        }
    }

    #[test]
    fn test_no_device_has_empty_name_and_is_default() {
        assert_eq!(DeviceClass::NoDevice.name(), "");
        assert_eq!(DeviceClass::default(), DeviceClass::NoDevice);
    }
}
