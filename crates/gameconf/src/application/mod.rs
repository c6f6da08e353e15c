//! Application layer for the settings store.
//!
//! The use case here is [`settings_store::SettingsStore`]: it owns the
//! settings document and the binding table, reconciles them against the
//! compiled-in defaults on load, and persists every change through an
//! injected [`crate::infrastructure::storage::SettingsRepository`].
//!
//! Like the rest of this layer it depends only on traits and on
//! `gameconf_core` types.  The file system and live input polling are
//! supplied by the caller at construction time.

pub mod settings_store;
