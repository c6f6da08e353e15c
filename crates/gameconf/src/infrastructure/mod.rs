//! Infrastructure layer for the settings store.
//!
//! Contains OS-facing adapters: settings file persistence and live input
//! polling.
//!
//! **Dependency rule**: this layer may depend on `gameconf_core`, but the
//! traits it exposes are what the `application` layer sees; concrete adapters
//! are only chosen in `main.rs` and in tests.

pub mod input_polling;
pub mod storage;
