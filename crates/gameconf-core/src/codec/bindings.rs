//! Conversion between the `controls` object and a [`BindingTable`].
//!
//! Decoding is deliberately forgiving: a bad slot entry becomes an unbound
//! slot, a missing action keeps whatever the table already held, and nothing
//! here can fail the load as a whole.

use serde_json::{json, Map, Value};
use tracing::{debug, warn};

use super::ControlsSection;
use crate::input::action::GameInputAction;
use crate::input::binding::{ActionBinding, BindingSlot, BindingTable};
use crate::input::device::DeviceClass;
use crate::keymap::KeyNamer;

const DEVICE_FIELD: &str = "device";
const KEY_FIELD: &str = "key";

/// What [`decode_bindings`] found in the `controls` object.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecodeSummary {
    /// Actions that had an entry and were decoded.
    pub decoded_actions: Vec<GameInputAction>,
    /// Actions with no usable entry; their slots in the table were left untouched.
    pub missing_actions: Vec<GameInputAction>,
    /// Slot entries that were present but resolved to an unbound slot.
    pub unbound_slots: usize,
}

/// Overlays the bindings in `controls` onto `table`.
///
/// Actions are visited in enumeration order.  For each action with an entry,
/// each slot (`"0"`, `"1"`) with an entry is overwritten with the decoded
/// binding; slots without an entry are left as they were.  Actions without an
/// entry are left as they were and reported in [`DecodeSummary::missing_actions`].
/// Slot keys other than `"0"` and `"1"` are ignored.
pub fn decode_bindings(controls: &ControlsSection, namer: &KeyNamer, table: &mut BindingTable) -> DecodeSummary {
    let mut summary = DecodeSummary::default();

    for action in GameInputAction::ALL {
        let Some(slots) = controls.get(action.name()).and_then(Value::as_object) else {
            debug!(action = %action, "no usable controls entry for action");
            summary.missing_actions.push(action);
            continue;
        };

        for (key, entry) in slots {
            let Some(slot) = BindingSlot::from_key(key) else {
                debug!(action = %action, slot = %key, "ignoring out-of-range binding slot");
                continue;
            };
            let binding = decode_slot(action, slot, entry, namer);
            if !binding.is_bound() {
                summary.unbound_slots += 1;
            }
            table.set(action, slot, binding);
        }
        summary.decoded_actions.push(action);
    }

    for name in controls.keys() {
        if GameInputAction::from_name(name).is_none() {
            debug!(entry = %name, "ignoring controls entry for unknown action");
        }
    }

    summary
}

/// Encodes every slot of every action present in `table`.
///
/// Unbound slots are written with empty device and key names so that a
/// subsequent decode reproduces them as unbound.
pub fn encode_bindings(table: &BindingTable, namer: &KeyNamer) -> ControlsSection {
    let mut controls = ControlsSection::new();
    for (action, slots) in table.iter() {
        let mut encoded_slots = Map::new();
        for (slot, binding) in slots {
            let key_name = namer
                .name_for_code(binding.device, binding.code)
                .unwrap_or_default();
            encoded_slots.insert(
                slot.key().to_string(),
                json!({ DEVICE_FIELD: binding.device.name(), KEY_FIELD: key_name }),
            );
        }
        controls.insert(action.name().to_string(), Value::Object(encoded_slots));
    }
    controls
}

fn decode_slot(action: GameInputAction, slot: BindingSlot, entry: &Value, namer: &KeyNamer) -> ActionBinding {
    let device_name = entry.get(DEVICE_FIELD).and_then(Value::as_str);
    let key_name = entry.get(KEY_FIELD).and_then(Value::as_str);
    let (Some(device_name), Some(key_name)) = (device_name, key_name) else {
        warn!(action = %action, slot = %slot, "malformed binding entry; slot left unbound");
        return ActionBinding::unbound();
    };

    let Some(device) = DeviceClass::from_name(device_name) else {
        if !device_name.is_empty() {
            warn!(action = %action, slot = %slot, device = %device_name, "unknown device name; slot left unbound");
        }
        return ActionBinding::unbound();
    };

    let code = namer.code_for_name(device, key_name);
    if code.is_unknown() {
        warn!(action = %action, slot = %slot, device = %device, key = %key_name, "unknown key name; slot left unbound");
        return ActionBinding::unbound();
    }
    ActionBinding::new(device, code)
}
