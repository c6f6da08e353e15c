//! Live input polling.
//!
//! The store answers "is this action active right now?" by asking an
//! [`InputPoller`] about each bound key.  The host application implements the
//! trait on top of its input backend (an engine's input subsystem, a window
//! library's key state); tests use [`mock::ScriptedInputPoller`].
//!
//! Polling is a read with no side effects and is expected to be called once
//! per frame per action.

pub mod mock;

use gameconf_core::KeyCode;

/// Current physical state of keyboard keys and pointer buttons.
#[cfg_attr(test, mockall::automock)]
pub trait InputPoller: Send {
    /// `true` while the keyboard key with `code` is held down.
    fn is_key_down(&self, code: KeyCode) -> bool;

    /// `true` while the pointer button with `code` is held down.
    fn is_pointer_button_down(&self, code: KeyCode) -> bool;
}
