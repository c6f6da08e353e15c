//! SettingsStore: owns the settings document and the input binding table.
//!
//! The store is the single owner of both.  Presentation code reads them through
//! shared references ([`SettingsStore::document`], [`SettingsStore::bindings`])
//! and changes them only through [`SettingsStore::set_value`] and
//! [`SettingsStore::rebind`].
//!
//! # Load policy
//!
//! [`SettingsStore::load`] cannot fail.  Whatever is on disk, the store ends up
//! with a complete configuration:
//!
//! ```text
//! file missing / unreadable / malformed
//!   └─ every default scalar, default bindings, save
//! file parsed
//!   ├─ each default scalar key absent → insert default
//!   ├─ "controls" absent              → default bindings
//!   ├─ "controls" present             → default bindings overlaid by the file,
//!   │                                   per action and per slot
//!   └─ anything inserted              → save
//! ```
//!
//! Failures along the way are reported through `tracing` only.

use gameconf_core::codec::{self, CodecError};
use gameconf_core::{
    ActionBinding, BindingSlot, BindingTable, DeviceClass, GameInputAction, KeyCode, KeyNamer,
    SettingValue, SettingsDefaults, SettingsDocument,
};
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::infrastructure::input_polling::InputPoller;
use crate::infrastructure::storage::{SettingsRepository, StorageError};

/// Error type for store operations that persist.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The settings could not be written.  The in-memory state is unchanged.
    #[error("failed to write settings: {0}")]
    Write(#[from] StorageError),

    /// The in-memory settings could not be encoded.
    #[error("failed to encode settings: {0}")]
    Encode(#[from] CodecError),

    /// The key has no name on `device`, so it could not be written to the
    /// settings file.  The binding table is unchanged.
    #[error("{device} key {code} has no name and cannot be saved")]
    UnnamedKey { device: DeviceClass, code: KeyCode },
}

/// Why the settings file could not be used.  Never leaves [`SettingsStore::load`].
#[derive(Debug, Error)]
enum LoadFailure {
    #[error("settings file not found")]
    NotFound,
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Codec(#[from] CodecError),
}

/// Persistent settings plus the two-slot input binding table.
pub struct SettingsStore {
    repository: Box<dyn SettingsRepository>,
    defaults: SettingsDefaults,
    namer: KeyNamer,
    poller: Option<Box<dyn InputPoller>>,
    document: SettingsDocument,
    bindings: BindingTable,
    dirty: bool,
}

impl SettingsStore {
    /// Creates an empty store.  Call [`SettingsStore::load`] before use.
    pub fn new(repository: Box<dyn SettingsRepository>, defaults: SettingsDefaults, namer: KeyNamer) -> Self {
        Self {
            repository,
            defaults,
            namer,
            poller: None,
            document: SettingsDocument::new(),
            bindings: BindingTable::new(),
            dirty: false,
        }
    }

    /// Attaches the live input poller used by [`SettingsStore::is_action_active`].
    pub fn with_input_poller(mut self, poller: Box<dyn InputPoller>) -> Self {
        self.poller = Some(poller);
        self
    }

    /// Replaces or removes the live input poller.
    pub fn set_input_poller(&mut self, poller: Option<Box<dyn InputPoller>>) {
        self.poller = poller;
    }

    // ── Load / save ───────────────────────────────────────────────────────────

    /// Loads the settings, reconciling them against the defaults.
    ///
    /// On return every default scalar key is present and every default action
    /// has bindings.  If anything had to be filled in, the result is saved;
    /// a failure of that save is logged and leaves the store dirty.
    pub fn load(&mut self) {
        let needs_save = match self.read_document() {
            Ok(decoded) => self.reconcile(decoded),
            Err(LoadFailure::NotFound) => {
                info!(path = %self.path().display(), "no settings file; writing defaults");
                self.reset_to_defaults();
                true
            }
            Err(reason) => {
                warn!(path = %self.path().display(), error = %reason, "settings file unusable; resetting to defaults");
                self.reset_to_defaults();
                true
            }
        };

        self.dirty = needs_save;
        if needs_save {
            if let Err(e) = self.save() {
                warn!(path = %self.path().display(), error = %e, "failed to persist reconciled settings");
            }
        }
    }

    /// Writes the whole document (scalars and bindings), replacing the file.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Write`] if the file cannot be written and
    /// [`StoreError::Encode`] if a value cannot be represented in JSON.  In both
    /// cases the in-memory state is unchanged and the store stays dirty.
    pub fn save(&mut self) -> Result<(), StoreError> {
        let controls = codec::encode_bindings(&self.bindings, &self.namer);
        let text = codec::encode_document(&self.document, &controls)?;
        self.repository.write(&text)?;
        self.dirty = false;
        debug!(path = %self.path().display(), "settings saved");
        Ok(())
    }

    /// Discards the current state and installs the defaults in memory.
    ///
    /// Does not save.
    pub fn reset_to_defaults(&mut self) {
        self.document = self.defaults.settings.clone();
        self.bindings = self.defaults.bindings.clone();
        self.dirty = true;
    }

    fn read_document(&self) -> Result<codec::DecodedDocument, LoadFailure> {
        let text = self.repository.read()?.ok_or(LoadFailure::NotFound)?;
        Ok(codec::decode_document(&text)?)
    }

    /// Merges a parsed document with the defaults.  Returns `true` if anything
    /// was filled in.
    fn reconcile(&mut self, decoded: codec::DecodedDocument) -> bool {
        let mut filled = false;

        self.document = decoded.scalars;
        for (key, value) in &self.defaults.settings {
            if !self.document.contains(key) {
                info!(key = %key, default = %value, "settings key missing; using default");
                self.document.set(key.clone(), value.clone());
                filled = true;
            }
        }

        self.bindings = self.defaults.bindings.clone();
        match decoded.controls {
            None => {
                info!("no controls section; using default bindings");
                filled = true;
            }
            Some(controls) => {
                let summary = codec::decode_bindings(&controls, &self.namer, &mut self.bindings);
                let defaulted: Vec<_> = summary
                    .missing_actions
                    .iter()
                    .filter(|action| self.defaults.bindings.contains_action(**action))
                    .map(|action| action.name())
                    .collect();
                if !defaulted.is_empty() {
                    info!(actions = ?defaulted, "controls missing actions; using default bindings for them");
                    filled = true;
                }
                debug!(
                    decoded = summary.decoded_actions.len(),
                    unbound_slots = summary.unbound_slots,
                    "bindings decoded"
                );
            }
        }

        filled
    }

    // ── Scalar settings ───────────────────────────────────────────────────────

    /// Inserts or overwrites a setting.  Does not save.
    pub fn set_value(&mut self, key: impl Into<String>, value: impl Into<SettingValue>) {
        let key = key.into();
        if key == codec::CONTROLS_KEY {
            warn!("'{}' is reserved for bindings and will not be persisted as a setting", codec::CONTROLS_KEY);
        }
        self.document.set(key, value);
        self.dirty = true;
    }

    /// Returns the current value of `key`, or `None` if it was never set.
    pub fn get_value(&self, key: &str) -> Option<&SettingValue> {
        self.document.get(key)
    }

    // ── Bindings ──────────────────────────────────────────────────────────────

    /// Binds `slot` of `action` to `code` on `device` and saves immediately.
    ///
    /// Binding to [`DeviceClass::NoDevice`] or to [`KeyCode::UNKNOWN`] clears
    /// the slot.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::UnnamedKey`] without touching the table if the
    /// key has no name on `device`.  Otherwise returns the [`StoreError`] from
    /// the save; the new binding then stays in effect in memory and will be
    /// written by the next successful save.
    pub fn rebind(
        &mut self,
        action: GameInputAction,
        device: DeviceClass,
        code: KeyCode,
        slot: BindingSlot,
    ) -> Result<(), StoreError> {
        let binding = ActionBinding::new(device, code);
        let binding = if !binding.is_bound() {
            ActionBinding::unbound()
        } else if self.namer.name_for_code(device, code).is_none() {
            warn!(action = %action, slot = %slot, device = %device, code = %code, "refusing to bind unnamed key");
            return Err(StoreError::UnnamedKey { device, code });
        } else {
            binding
        };

        self.bindings.set(action, slot, binding);
        self.dirty = true;
        info!(action = %action, slot = %slot, device = %device, code = %code, "action rebound");
        self.save()
    }

    /// `true` if any bound slot of `action` is currently held.
    ///
    /// Returns `false` when the action has no bindings or no input poller is
    /// attached.
    pub fn is_action_active(&self, action: GameInputAction) -> bool {
        let Some(poller) = self.poller.as_deref() else {
            return false;
        };
        let Some(slots) = self.bindings.slots(action) else {
            return false;
        };

        slots
            .values()
            .filter(|binding| binding.is_bound())
            .any(|binding| match binding.device {
                DeviceClass::Keyboard => poller.is_key_down(binding.code),
                DeviceClass::Pointer => poller.is_pointer_button_down(binding.code),
                DeviceClass::NoDevice => false,
            })
    }

    /// Display label for the key bound to `slot` of `action`; empty if unbound.
    pub fn binding_label(&self, action: GameInputAction, slot: BindingSlot) -> String {
        self.bindings
            .get(action, slot)
            .and_then(|binding| self.namer.name_for_code(binding.device, binding.code))
            .unwrap_or_default()
    }

    pub fn binding(&self, action: GameInputAction, slot: BindingSlot) -> Option<ActionBinding> {
        self.bindings.get(action, slot).copied()
    }

    // ── Snapshots ─────────────────────────────────────────────────────────────

    pub fn bindings(&self) -> &BindingTable {
        &self.bindings
    }

    pub fn document(&self) -> &SettingsDocument {
        &self.document
    }

    pub fn key_namer(&self) -> &KeyNamer {
        &self.namer
    }

    pub fn path(&self) -> &Path {
        self.repository.location()
    }

    /// `true` when in-memory state has changed since the last successful
    /// load or save.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }
}

impl std::fmt::Debug for SettingsStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SettingsStore")
            .field("path", &self.path())
            .field("settings", &self.document.len())
            .field("actions", &self.bindings.len())
            .field("dirty", &self.dirty)
            .finish_non_exhaustive()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
