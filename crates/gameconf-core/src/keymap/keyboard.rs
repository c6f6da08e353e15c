//! Built-in keyboard naming table.
//!
//! Key codes are USB HID Usage IDs (page 0x07, Keyboard/Keypad) and key names
//! follow the SDL naming convention ("A", "Return", "Left Shift", "Keypad 5").
//! These are the names written to the `controls` section of the settings file,
//! so existing entries must never be renamed.
//!
//! # Why HID usage IDs?
//!
//! HID codes identify *physical key positions*, not characters.  The key in
//! the top-left letter position is `0x14` whether the layout labels it Q
//! (QWERTY) or A (AZERTY), so a WASD binding keeps its shape on any layout.
//!
//! Hosts with their own key-naming tables (a windowing library, an engine)
//! implement [`super::KeyboardNaming`] themselves and ignore this module.

use super::KeyboardNaming;
use crate::input::binding::KeyCode;

pub const KEY_A: KeyCode = KeyCode(0x04);
pub const KEY_D: KeyCode = KeyCode(0x07);
pub const KEY_E: KeyCode = KeyCode(0x08);
pub const KEY_J: KeyCode = KeyCode(0x0D);
pub const KEY_Q: KeyCode = KeyCode(0x14);
pub const KEY_S: KeyCode = KeyCode(0x16);
pub const KEY_W: KeyCode = KeyCode(0x1A);
pub const KEY_ESCAPE: KeyCode = KeyCode(0x29);
pub const KEY_SPACE: KeyCode = KeyCode(0x2C);
pub const KEY_RIGHT: KeyCode = KeyCode(0x4F);
pub const KEY_LEFT: KeyCode = KeyCode(0x50);
pub const KEY_DOWN: KeyCode = KeyCode(0x51);
pub const KEY_UP: KeyCode = KeyCode(0x52);
pub const KEY_LEFT_SHIFT: KeyCode = KeyCode(0xE1);

/// HID usage ID → persisted key name.
const KEY_NAMES: &[(i32, &str)] = &[
    // ── Letters (0x04–0x1D) ───────────────────────────────────────────────────
    (0x04, "A"),
    (0x05, "B"),
    (0x06, "C"),
    (0x07, "D"),
    (0x08, "E"),
    (0x09, "F"),
    (0x0A, "G"),
    (0x0B, "H"),
    (0x0C, "I"),
    (0x0D, "J"),
    (0x0E, "K"),
    (0x0F, "L"),
    (0x10, "M"),
    (0x11, "N"),
    (0x12, "O"),
    (0x13, "P"),
    (0x14, "Q"),
    (0x15, "R"),
    (0x16, "S"),
    (0x17, "T"),
    (0x18, "U"),
    (0x19, "V"),
    (0x1A, "W"),
    (0x1B, "X"),
    (0x1C, "Y"),
    (0x1D, "Z"),
    // ── Digit row (0x1E–0x27) ─────────────────────────────────────────────────
    (0x1E, "1"),
    (0x1F, "2"),
    (0x20, "3"),
    (0x21, "4"),
    (0x22, "5"),
    (0x23, "6"),
    (0x24, "7"),
    (0x25, "8"),
    (0x26, "9"),
    (0x27, "0"),
    // ── Control and punctuation (0x28–0x39) ───────────────────────────────────
    (0x28, "Return"),
    (0x29, "Escape"),
    (0x2A, "Backspace"),
    (0x2B, "Tab"),
    (0x2C, "Space"),
    (0x2D, "-"),
    (0x2E, "="),
    (0x2F, "["),
    (0x30, "]"),
    (0x31, "\\"),
    (0x33, ";"),
    (0x34, "'"),
    (0x35, "`"),
    (0x36, ","),
    (0x37, "."),
    (0x38, "/"),
    (0x39, "CapsLock"),
    // ── Function keys (0x3A–0x45) ─────────────────────────────────────────────
    (0x3A, "F1"),
    (0x3B, "F2"),
    (0x3C, "F3"),
    (0x3D, "F4"),
    (0x3E, "F5"),
    (0x3F, "F6"),
    (0x40, "F7"),
    (0x41, "F8"),
    (0x42, "F9"),
    (0x43, "F10"),
    (0x44, "F11"),
    (0x45, "F12"),
    // ── Navigation cluster (0x46–0x52) ────────────────────────────────────────
    (0x46, "PrintScreen"),
    (0x47, "ScrollLock"),
    (0x48, "Pause"),
    (0x49, "Insert"),
    (0x4A, "Home"),
    (0x4B, "PageUp"),
    (0x4C, "Delete"),
    (0x4D, "End"),
    (0x4E, "PageDown"),
    (0x4F, "Right"),
    (0x50, "Left"),
    (0x51, "Down"),
    (0x52, "Up"),
    // ── Keypad (0x53–0x63) ────────────────────────────────────────────────────
    (0x53, "Numlock"),
    (0x54, "Keypad /"),
    (0x55, "Keypad *"),
    (0x56, "Keypad -"),
    (0x57, "Keypad +"),
    (0x58, "Keypad Enter"),
    (0x59, "Keypad 1"),
    (0x5A, "Keypad 2"),
    (0x5B, "Keypad 3"),
    (0x5C, "Keypad 4"),
    (0x5D, "Keypad 5"),
    (0x5E, "Keypad 6"),
    (0x5F, "Keypad 7"),
    (0x60, "Keypad 8"),
    (0x61, "Keypad 9"),
    (0x62, "Keypad 0"),
    (0x63, "Keypad ."),
    (0x65, "Application"),
    // ── Modifiers (0xE0–0xE7) ─────────────────────────────────────────────────
    (0xE0, "Left Ctrl"),
    (0xE1, "Left Shift"),
    (0xE2, "Left Alt"),
    (0xE3, "Left GUI"),
    (0xE4, "Right Ctrl"),
    (0xE5, "Right Shift"),
    (0xE6, "Right Alt"),
    (0xE7, "Right GUI"),
];

/// The built-in [`KeyboardNaming`] implementation backed by [`KEY_NAMES`].
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardKeyboard;

impl StandardKeyboard {
    pub fn name_of(code: KeyCode) -> Option<&'static str> {
        KEY_NAMES
            .iter()
            .find(|&&(raw, _)| raw == code.0)
            .map(|&(_, name)| name)
    }

    /// Case-insensitive name lookup, so hand-edited files with `"w"` or
    /// `"escape"` still resolve.
    pub fn code_of(name: &str) -> Option<KeyCode> {
        KEY_NAMES
            .iter()
            .find(|(_, known)| known.eq_ignore_ascii_case(name))
            .map(|&(raw, _)| KeyCode(raw))
    }
}

impl KeyboardNaming for StandardKeyboard {
    fn key_name(&self, code: KeyCode) -> Option<String> {
        Self::name_of(code).map(str::to_string)
    }

    fn key_from_name(&self, name: &str) -> Option<KeyCode> {
        Self::code_of(name)
    }
}
