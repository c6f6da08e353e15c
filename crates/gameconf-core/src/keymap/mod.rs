//! Translation between device-native key codes and persisted key names.
//!
//! Keyboard names come from the host platform through the [`KeyboardNaming`]
//! trait ([`StandardKeyboard`] is the built-in table).  Pointer names come from
//! the fixed vocabulary in [`pointer`].  [`KeyNamer`] combines the two behind
//! a single device-aware interface.

pub mod keyboard;
pub mod pointer;

pub use keyboard::StandardKeyboard;
pub use pointer::PointerButton;

use crate::input::binding::KeyCode;
use crate::input::device::DeviceClass;

/// Platform key-name table: a bidirectional mapping between keyboard codes
/// and their canonical names.
#[cfg_attr(test, mockall::automock)]
pub trait KeyboardNaming: Send + Sync {
    /// Canonical name of a keyboard code, or `None` if the code has no name.
    fn key_name(&self, code: KeyCode) -> Option<String>;

    /// Keyboard code for a canonical name, or `None` if the name is unknown.
    fn key_from_name(&self, name: &str) -> Option<KeyCode>;
}

/// Device-aware key naming.
///
/// Keyboard lookups are delegated to the injected [`KeyboardNaming`];
/// pointer lookups use the fixed vocabulary.
pub struct KeyNamer {
    keyboard: Box<dyn KeyboardNaming>,
}

impl KeyNamer {
    pub fn new(keyboard: Box<dyn KeyboardNaming>) -> Self {
        Self { keyboard }
    }

    /// A namer backed by the built-in [`StandardKeyboard`] table.
    pub fn standard() -> Self {
        Self::new(Box::new(StandardKeyboard))
    }

    /// Name for `code` on `device`, or `None` when the code is unnamed or the
    /// device is [`DeviceClass::NoDevice`].
    pub fn name_for_code(&self, device: DeviceClass, code: KeyCode) -> Option<String> {
        match device {
            DeviceClass::Keyboard => self.keyboard.key_name(code),
            DeviceClass::Pointer => pointer::pointer_name(code).map(str::to_string),
            DeviceClass::NoDevice => None,
        }
    }

    /// Code for `name` on `device`; [`KeyCode::UNKNOWN`] when unresolvable.
    pub fn code_for_name(&self, device: DeviceClass, name: &str) -> KeyCode {
        match device {
            DeviceClass::Keyboard => self.keyboard.key_from_name(name).unwrap_or(KeyCode::UNKNOWN),
            DeviceClass::Pointer => pointer::pointer_code(name),
            DeviceClass::NoDevice => KeyCode::UNKNOWN,
        }
    }
}

impl Default for KeyNamer {
    fn default() -> Self {
        Self::standard()
    }
}

impl std::fmt::Debug for KeyNamer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyNamer").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::predicate::eq;

    #[test]
    fn test_keyboard_lookups_are_delegated_to_platform_table() {
        // Arrange
        let mut platform = MockKeyboardNaming::new();
        platform
            .expect_key_name()
            .with(eq(KeyCode(77)))
            .times(1)
            .returning(|_| Some("Jump".to_string()));
        platform
            .expect_key_from_name()
            .withf(|name| name == "Jump")
            .times(1)
            .returning(|_| Some(KeyCode(77)));
        let namer = KeyNamer::new(Box::new(platform));

        // Act / Assert
        assert_eq!(namer.name_for_code(DeviceClass::Keyboard, KeyCode(77)), Some("Jump".into()));
        assert_eq!(namer.code_for_name(DeviceClass::Keyboard, "Jump"), KeyCode(77));
    }

    #[test]
    fn test_pointer_lookups_never_touch_platform_table() {
        // Arrange: no expectations, so any call would panic.
        let platform = MockKeyboardNaming::new();
        let namer = KeyNamer::new(Box::new(platform));

        // Act / Assert
        assert_eq!(
            namer.name_for_code(DeviceClass::Pointer, PointerButton::Right.code()),
            Some("MRIGHT".into())
        );
        assert_eq!(namer.code_for_name(DeviceClass::Pointer, "MX2"), PointerButton::X2.code());
        assert_eq!(namer.code_for_name(DeviceClass::Pointer, "MUNKNOWN"), KeyCode::UNKNOWN);
    }

    #[test]
    fn test_unknown_keyboard_name_resolves_to_unknown_code() {
        let namer = KeyNamer::standard();
        assert_eq!(namer.code_for_name(DeviceClass::Keyboard, "NoSuchKey"), KeyCode::UNKNOWN);
    }

    #[test]
    fn test_no_device_has_no_names_or_codes() {
        let namer = KeyNamer::standard();
        assert_eq!(namer.name_for_code(DeviceClass::NoDevice, keyboard::KEY_W), None);
        assert_eq!(namer.code_for_name(DeviceClass::NoDevice, "W"), KeyCode::UNKNOWN);
    }
}
