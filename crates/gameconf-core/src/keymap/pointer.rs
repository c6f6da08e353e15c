//! Fixed naming table for pointer (mouse) buttons.
//!
//! Unlike keyboard names, which come from the host platform, pointer button
//! names are a small closed vocabulary owned by this crate:
//!
//! | Name      | Button        | Code |
//! |-----------|---------------|------|
//! | `MLEFT`   | left          | 1    |
//! | `MMIDDLE` | middle        | 2    |
//! | `MRIGHT`  | right         | 4    |
//! | `MX1`     | extra (back)  | 8    |
//! | `MX2`     | extra (fwd)   | 16   |
//!
//! Any other name resolves to [`KeyCode::UNKNOWN`].

use crate::input::binding::KeyCode;

/// A pointer button.  The discriminant is the button's bit value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum PointerButton {
    Left = 1,
    Middle = 2,
    Right = 4,
    X1 = 8,
    X2 = 16,
}

impl PointerButton {
    pub const ALL: [PointerButton; 5] = [
        PointerButton::Left,
        PointerButton::Middle,
        PointerButton::Right,
        PointerButton::X1,
        PointerButton::X2,
    ];

    pub fn code(self) -> KeyCode {
        KeyCode(self as i32)
    }

    pub fn from_code(code: KeyCode) -> Option<Self> {
        Self::ALL.into_iter().find(|b| b.code() == code)
    }

    pub fn name(self) -> &'static str {
        match self {
            PointerButton::Left => "MLEFT",
            PointerButton::Middle => "MMIDDLE",
            PointerButton::Right => "MRIGHT",
            PointerButton::X1 => "MX1",
            PointerButton::X2 => "MX2",
        }
    }

    /// Exact, case-sensitive name lookup.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|b| b.name() == name)
    }
}

/// Persisted name for a pointer code, or `None` for codes outside the vocabulary.
pub fn pointer_name(code: KeyCode) -> Option<&'static str> {
    PointerButton::from_code(code).map(PointerButton::name)
}

/// Pointer code for a persisted name; [`KeyCode::UNKNOWN`] if the name is not
/// in the vocabulary.
pub fn pointer_code(name: &str) -> KeyCode {
    PointerButton::from_name(name)
        .map(PointerButton::code)
        .unwrap_or(KeyCode::UNKNOWN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vocabulary_names_and_codes() {
        let expected = [("MLEFT", 1), ("MMIDDLE", 2), ("MRIGHT", 4), ("MX1", 8), ("MX2", 16)];
        for (name, raw) in expected {
            assert_eq!(pointer_code(name), KeyCode(raw));
            assert_eq!(pointer_name(KeyCode(raw)), Some(name));
        }
    }

    #[test]
    fn test_unknown_name_resolves_to_unknown_code() {
        assert_eq!(pointer_code("MUNKNOWN"), KeyCode::UNKNOWN);
        assert_eq!(pointer_code("mleft"), KeyCode::UNKNOWN);
        assert_eq!(pointer_code(""), KeyCode::UNKNOWN);
    }

    #[test]
    fn test_codes_outside_vocabulary_have_no_name() {
        for raw in [0, 3, 5, 32, -1] {
            assert_eq!(pointer_name(KeyCode(raw)), None, "code {raw}");
        }
    }
}
