//! # gameconf-core
//!
//! Shared library for the game settings store: the flat settings document,
//! the compiled-in default tables, the input binding table, key naming tables
//! and the JSON codec used at the persistence boundary.
//!
//! This crate has no dependencies on the file system, OS input APIs or UI
//! frameworks.  Everything that touches the outside world (reading the
//! settings file, polling the keyboard) lives in the `gameconf` crate and is
//! injected into the store through traits.
//!
//! # Architecture overview
//!
//! - **`domain`** – The settings document itself: a mapping from key name to
//!   a [`SettingValue`], plus the per-build-flavor [`SettingsDefaults`].
//!
//! - **`input`** – Logical game actions, device classes, binding slots and the
//!   [`BindingTable`] that maps each action to up to two physical keys.
//!
//! - **`keymap`** – Translation between device-native key codes and the
//!   human-readable key names stored in the settings file.
//!
//! - **`codec`** – Stateless conversion between the in-memory model and the
//!   JSON text on disk.

pub mod codec;
pub mod domain;
pub mod input;
pub mod keymap;

// Re-export the most-used types at the crate root so callers can write
// `gameconf_core::BindingTable` instead of `gameconf_core::input::binding::BindingTable`.
pub use codec::{CodecError, DecodeSummary, DecodedDocument, CONTROLS_KEY};
pub use domain::defaults::{BuildFlavor, SettingsDefaults};
pub use domain::document::SettingsDocument;
pub use domain::value::SettingValue;
pub use input::action::GameInputAction;
pub use input::binding::{ActionBinding, BindingSlot, BindingTable, KeyCode};
pub use input::device::DeviceClass;
pub use keymap::{KeyNamer, KeyboardNaming, StandardKeyboard};
