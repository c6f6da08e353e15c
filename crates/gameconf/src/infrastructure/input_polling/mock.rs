//! Scripted input poller for testing.
//!
//! Allows tests to press and release synthetic keys and buttons without a
//! window or an OS input backend.

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use gameconf_core::{DeviceClass, KeyCode};

use super::InputPoller;

#[derive(Debug, Default)]
struct HeldState {
    held: HashSet<(DeviceClass, KeyCode)>,
    poll_count: u32,
}

/// An [`InputPoller`] whose held keys are set by the test.
///
/// Clones share state, so a test can keep one handle after giving another
/// to the store.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInputPoller {
    state: Arc<Mutex<HeldState>>,
}

impl ScriptedInputPoller {
    /// Creates a poller with nothing held.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press_key(&self, code: KeyCode) {
        self.set_held(DeviceClass::Keyboard, code, true);
    }

    pub fn release_key(&self, code: KeyCode) {
        self.set_held(DeviceClass::Keyboard, code, false);
    }

    pub fn press_button(&self, code: KeyCode) {
        self.set_held(DeviceClass::Pointer, code, true);
    }

    pub fn release_button(&self, code: KeyCode) {
        self.set_held(DeviceClass::Pointer, code, false);
    }

    /// Releases everything.
    pub fn release_all(&self) {
        self.state.lock().expect("lock poisoned").held.clear();
    }

    /// Number of individual key/button queries answered so far.
    pub fn poll_count(&self) -> u32 {
        self.state.lock().expect("lock poisoned").poll_count
    }

    fn set_held(&self, device: DeviceClass, code: KeyCode, held: bool) {
        let mut state = self.state.lock().expect("lock poisoned");
        if held {
            state.held.insert((device, code));
        } else {
            state.held.remove(&(device, code));
        }
    }

    fn query(&self, device: DeviceClass, code: KeyCode) -> bool {
        let mut state = self.state.lock().expect("lock poisoned");
        state.poll_count += 1;
        state.held.contains(&(device, code))
    }
}

impl InputPoller for ScriptedInputPoller {
    fn is_key_down(&self, code: KeyCode) -> bool {
        self.query(DeviceClass::Keyboard, code)
    }

    fn is_pointer_button_down(&self, code: KeyCode) -> bool {
        self.query(DeviceClass::Pointer, code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pressed_key_is_down_until_released() {
        // Arrange
        let poller = ScriptedInputPoller::new();

        // Act / Assert
        poller.press_key(KeyCode(0x1A));
        assert!(poller.is_key_down(KeyCode(0x1A)));
        poller.release_key(KeyCode(0x1A));
        assert!(!poller.is_key_down(KeyCode(0x1A)));
    }

    #[test]
    fn test_keyboard_and_pointer_codes_do_not_alias() {
        // Pointer button 4 (right) and keyboard code 4 (A) are different inputs.
        let poller = ScriptedInputPoller::new();
        poller.press_button(KeyCode(4));

        assert!(poller.is_pointer_button_down(KeyCode(4)));
        assert!(!poller.is_key_down(KeyCode(4)));
    }

    #[test]
    fn test_clones_share_state_and_count_polls() {
        let poller = ScriptedInputPoller::new();
        let handle = poller.clone();

        handle.press_button(KeyCode(1));
        let _ = poller.is_pointer_button_down(KeyCode(1));
        let _ = poller.is_key_down(KeyCode(1));
        handle.release_all();

        assert!(!poller.is_pointer_button_down(KeyCode(1)));
        assert_eq!(handle.poll_count(), 3);
    }
}
