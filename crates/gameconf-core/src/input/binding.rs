//! The two-slot binding table.
//!
//! ```text
//! BindingTable
//!  ├─ MoveForward ─┬─ slot 0 → (Keyboard, W)
//!  │               └─ slot 1 → (Keyboard, Up)
//!  ├─ FirePrimary ─── slot 0 → (Mouse, MLEFT)
//!  └─ ...
//! ```
//!
//! The table is exclusively owned by the settings store.  Presentation code
//! reads it through shared references and changes it only through the store's
//! rebind operation.

use std::collections::btree_map::{self, BTreeMap};
use std::fmt;

use super::action::GameInputAction;
use super::device::DeviceClass;
use crate::keymap::{keyboard, pointer::PointerButton};

/// Device-native key code.
///
/// For keyboards this is whatever the injected keyboard naming table uses
/// (the built-in table uses USB HID usage IDs).  For pointers it is the
/// [`PointerButton`] bit value.  `0` is the "unknown key" sentinel for both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct KeyCode(pub i32);

impl KeyCode {
    pub const UNKNOWN: KeyCode = KeyCode(0);

    pub fn is_unknown(self) -> bool {
        self == Self::UNKNOWN
    }
}

impl fmt::Display for KeyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:02X}", self.0)
    }
}

/// Binding position for an action: 0 is primary, 1 is secondary.
///
/// Only these two values can be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BindingSlot(u8);

impl BindingSlot {
    pub const PRIMARY: BindingSlot = BindingSlot(0);
    pub const SECONDARY: BindingSlot = BindingSlot(1);

    /// Returns `None` for anything other than 0 or 1.
    pub fn new(index: u32) -> Option<Self> {
        match index {
            0 => Some(Self::PRIMARY),
            1 => Some(Self::SECONDARY),
            _ => None,
        }
    }

    pub fn index(self) -> u32 {
        u32::from(self.0)
    }

    /// The numeric-string form used as a JSON object key (`"0"` or `"1"`).
    pub fn key(self) -> &'static str {
        if self.0 == 0 {
            "0"
        } else {
            "1"
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "0" => Some(Self::PRIMARY),
            "1" => Some(Self::SECONDARY),
            _ => None,
        }
    }
}

impl fmt::Display for BindingSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// One physical binding: a device class plus a device-native key code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ActionBinding {
    pub device: DeviceClass,
    pub code: KeyCode,
}

impl ActionBinding {
    pub fn new(device: DeviceClass, code: KeyCode) -> Self {
        Self { device, code }
    }

    pub fn keyboard(code: KeyCode) -> Self {
        Self::new(DeviceClass::Keyboard, code)
    }

    pub fn pointer(button: PointerButton) -> Self {
        Self::new(DeviceClass::Pointer, button.code())
    }

    /// `(NoDevice, UNKNOWN)`.
    pub fn unbound() -> Self {
        Self::default()
    }

    pub fn is_bound(&self) -> bool {
        self.device != DeviceClass::NoDevice && !self.code.is_unknown()
    }
}

/// Mapping from action to its (at most two) slot bindings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BindingTable {
    actions: BTreeMap<GameInputAction, BTreeMap<BindingSlot, ActionBinding>>,
}

impl BindingTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// The out-of-box bindings: WASD plus arrow keys for movement, left and
    /// right mouse buttons for the two main fire actions, Q and E for the rest.
    pub fn defaults() -> Self {
        use GameInputAction::*;

        let mut table = Self::new();
        let movement = [
            (MoveForward, keyboard::KEY_W, keyboard::KEY_UP),
            (MoveBackward, keyboard::KEY_S, keyboard::KEY_DOWN),
            (MoveLeft, keyboard::KEY_A, keyboard::KEY_LEFT),
            (MoveRight, keyboard::KEY_D, keyboard::KEY_RIGHT),
        ];
        for (action, primary, secondary) in movement {
            table.set(action, BindingSlot::PRIMARY, ActionBinding::keyboard(primary));
            table.set(action, BindingSlot::SECONDARY, ActionBinding::keyboard(secondary));
        }

        table.set(FirePrimary, BindingSlot::PRIMARY, ActionBinding::pointer(PointerButton::Left));
        table.set(FireSecondary, BindingSlot::PRIMARY, ActionBinding::pointer(PointerButton::Right));
        table.set(FireThird, BindingSlot::PRIMARY, ActionBinding::keyboard(keyboard::KEY_Q));
        table.set(FireUltimate, BindingSlot::PRIMARY, ActionBinding::keyboard(keyboard::KEY_E));
        table
    }

    /// Overwrites one slot, creating the action's entry if absent.
    pub fn set(&mut self, action: GameInputAction, slot: BindingSlot, binding: ActionBinding) {
        self.actions.entry(action).or_default().insert(slot, binding);
    }

    pub fn get(&self, action: GameInputAction, slot: BindingSlot) -> Option<&ActionBinding> {
        self.actions.get(&action).and_then(|slots| slots.get(&slot))
    }

    /// Returns the slots of `action`, or `None` if the action has no entry at all.
    pub fn slots(&self, action: GameInputAction) -> Option<&BTreeMap<BindingSlot, ActionBinding>> {
        self.actions.get(&action)
    }

    pub fn contains_action(&self, action: GameInputAction) -> bool {
        self.actions.contains_key(&action)
    }

    pub fn iter(&self) -> btree_map::Iter<'_, GameInputAction, BTreeMap<BindingSlot, ActionBinding>> {
        self.actions.iter()
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}
