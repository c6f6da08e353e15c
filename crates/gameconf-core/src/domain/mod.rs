//! Domain entities for the settings store.
//!
//! This module contains pure data types with no infrastructure dependencies:
//!
//! - **`value`** – [`value::SettingValue`], the closed sum type every scalar
//!   setting is stored as.
//! - **`document`** – [`document::SettingsDocument`], the ordered mapping from
//!   key name to value that the store owns.
//! - **`defaults`** – The compiled-in default tables, selected once per
//!   [`defaults::BuildFlavor`] and injected into the store at construction.

pub mod defaults;
pub mod document;
pub mod value;
