//! gameconf: inspect and edit the persisted game settings from a terminal.
//!
//! # Usage
//!
//! ```text
//! gameconf [OPTIONS] <COMMAND>
//!
//! Commands:
//!   show                                   Print every setting and binding
//!   get    <KEY>                           Print one setting
//!   set    <KEY> <VALUE>                   Change one setting and save
//!   rebind <ACTION> <SLOT> <DEVICE> <KEY>  Rebind one slot and save
//!   reset                                  Overwrite the file with defaults
//!
//! Options:
//!   --config <PATH>    Settings file [env: GAMECONF_PATH]
//!   --flavor <FLAVOR>  debug | release, picks defaults and file name
//! ```
//!
//! Every command loads the settings first, so running any of them against a
//! missing or damaged file leaves a complete file behind.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{anyhow, bail, Context};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use gameconf::infrastructure::storage::{settings_file_path, JsonFileRepository};
use gameconf::SettingsStore;
use gameconf_core::{
    BindingSlot, BuildFlavor, DeviceClass, GameInputAction, KeyCode, KeyNamer, SettingValue,
    SettingsDefaults,
};

// ── CLI argument definitions ──────────────────────────────────────────────────

#[derive(Debug, Parser)]
#[command(name = "gameconf", about = "Inspect and edit persisted game settings", version)]
struct Cli {
    /// Settings file to use instead of the platform config location.
    #[arg(long, env = "GAMECONF_PATH")]
    config: Option<PathBuf>,

    /// Build flavor whose defaults (and default file name) apply.
    ///
    /// Defaults to the flavor this binary was compiled as.
    #[arg(long)]
    flavor: Option<BuildFlavor>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print every setting and the binding table.
    Show {
        /// Print a JSON snapshot instead of a table.
        #[arg(long)]
        json: bool,
    },
    /// Print the value of one setting.  Exits with status 1 if it is not set.
    Get { key: String },
    /// Set one setting and save.
    ///
    /// VALUE is read as a bool, then an unsigned integer, then a float, and
    /// otherwise kept as a string.
    Set { key: String, value: String },
    /// Bind one slot of an action and save.
    ///
    /// DEVICE is `Keyboard`, `Mouse` or `none` (clears the slot; KEY is
    /// ignored).  KEY is a key name such as `W`, `Space`, `Left Shift` or
    /// `MLEFT`.
    Rebind {
        action: String,
        slot: u32,
        device: String,
        key: String,
    },
    /// Discard the current settings and write the defaults.
    Reset,
}

// ── JSON snapshot ─────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct Snapshot {
    path: String,
    settings: BTreeMap<String, serde_json::Value>,
    bindings: Vec<BindingRow>,
}

#[derive(Debug, Serialize)]
struct BindingRow {
    action: &'static str,
    slot: u32,
    device: &'static str,
    key: String,
}

impl Snapshot {
    fn capture(store: &SettingsStore) -> Self {
        let settings = store
            .document()
            .iter()
            .map(|(key, value)| (key.clone(), json_value(value)))
            .collect();

        let bindings = store
            .bindings()
            .iter()
            .flat_map(|(action, slots)| {
                slots.iter().map(move |(slot, binding)| BindingRow {
                    action: action.name(),
                    slot: slot.index(),
                    device: binding.device.name(),
                    key: store.binding_label(*action, *slot),
                })
            })
            .collect();

        Self {
            path: store.path().display().to_string(),
            settings,
            bindings,
        }
    }
}

fn json_value(value: &SettingValue) -> serde_json::Value {
    match value {
        SettingValue::UInt(n) => serde_json::Value::from(*n),
        SettingValue::Bool(b) => serde_json::Value::from(*b),
        SettingValue::Float(f) => serde_json::Value::from(*f),
        SettingValue::Str(s) => serde_json::Value::from(s.as_str()),
    }
}

// ── Commands ──────────────────────────────────────────────────────────────────

fn show(store: &SettingsStore, json: bool) -> anyhow::Result<()> {
    if json {
        let text = serde_json::to_string_pretty(&Snapshot::capture(store))
            .context("failed to serialize settings snapshot")?;
        println!("{text}");
        return Ok(());
    }

    println!("# {}", store.path().display());
    for (key, value) in store.document() {
        println!("{key:<16} {value}");
    }

    println!();
    println!("{:<16} {:<16} {:<16}", "action", "slot 0", "slot 1");
    for action in GameInputAction::ALL {
        println!(
            "{:<16} {:<16} {:<16}",
            action.name(),
            store.binding_label(action, BindingSlot::PRIMARY),
            store.binding_label(action, BindingSlot::SECONDARY),
        );
    }
    Ok(())
}

fn rebind(store: &mut SettingsStore, action: &str, slot: u32, device: &str, key: &str) -> anyhow::Result<()> {
    let action = GameInputAction::from_name(action).ok_or_else(|| {
        let known: Vec<_> = GameInputAction::ALL.iter().map(|a| a.name()).collect();
        anyhow!("unknown action '{action}' (expected one of: {})", known.join(", "))
    })?;
    let slot = BindingSlot::new(slot).ok_or_else(|| anyhow!("slot must be 0 or 1, got {slot}"))?;

    let (device, code) = if device.eq_ignore_ascii_case("none") {
        (DeviceClass::NoDevice, KeyCode::UNKNOWN)
    } else {
        let device = DeviceClass::from_name(device)
            .ok_or_else(|| anyhow!("unknown device '{device}' (expected Keyboard, Mouse or none)"))?;
        let code = store.key_namer().code_for_name(device, key);
        if code.is_unknown() {
            bail!("'{key}' is not a known {device} key name");
        }
        (device, code)
    };

    store
        .rebind(action, device, code, slot)
        .with_context(|| format!("failed to save binding for {action}"))?;
    println!("{action} slot {slot} = {}", store.binding_label(action, slot));
    Ok(())
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let flavor = cli.flavor.unwrap_or_else(BuildFlavor::current);
    let path = match cli.config {
        Some(path) => path,
        None => settings_file_path(flavor).context("cannot locate settings file; pass --config")?,
    };
    info!(path = %path.display(), flavor = %flavor, "using settings file");

    let mut store = SettingsStore::new(
        Box::new(JsonFileRepository::new(path)),
        SettingsDefaults::for_flavor(flavor),
        KeyNamer::standard(),
    );
    store.load();

    match cli.command {
        Command::Show { json } => show(&store, json)?,
        Command::Get { key } => match store.get_value(&key) {
            Some(value) => println!("{value}"),
            None => {
                eprintln!("'{key}' is not set");
                return Ok(ExitCode::FAILURE);
            }
        },
        Command::Set { key, value } => {
            let value = SettingValue::parse_lenient(&value);
            println!("{key} = {value} ({})", value.type_name());
            store.set_value(key, value);
            store.save().context("failed to save settings")?;
        }
        Command::Rebind {
            action,
            slot,
            device,
            key,
        } => rebind(&mut store, &action, slot, &device, &key)?,
        Command::Reset => {
            store.reset_to_defaults();
            store.save().context("failed to save default settings")?;
            println!("settings reset to {flavor} defaults");
        }
    }

    Ok(ExitCode::SUCCESS)
}
