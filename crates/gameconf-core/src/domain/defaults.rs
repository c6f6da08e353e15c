//! Compiled-in default tables, selected per build flavor.
//!
//! The default scalar values differ between debug and release builds: a
//! debug build opens a 1280x720 window, a release build uses the desktop
//! resolution (`0 x 0`) in borderless fullscreen.  The flavor is chosen once
//! at process start and the resulting [`SettingsDefaults`] is handed to the
//! store; nothing in this crate reads a global.

use std::fmt;
use std::str::FromStr;

use super::document::SettingsDocument;
use super::value::SettingValue;
use crate::input::binding::BindingTable;

pub const KEY_WIDTH: &str = "width";
pub const KEY_HEIGHT: &str = "height";
pub const KEY_FULLSCREEN: &str = "fullscreen";
pub const KEY_BORDERLESS: &str = "borderless";
pub const KEY_SOUND: &str = "sound";
pub const KEY_ADDRESS: &str = "address";
pub const KEY_PORT: &str = "port";
pub const KEY_LANG: &str = "lang";

/// Every canonical scalar key, in the order they are documented.
pub const CANONICAL_KEYS: [&str; 8] = [
    KEY_WIDTH,
    KEY_HEIGHT,
    KEY_FULLSCREEN,
    KEY_BORDERLESS,
    KEY_SOUND,
    KEY_ADDRESS,
    KEY_PORT,
    KEY_LANG,
];

const DEFAULT_SOUND_VOLUME: f64 = 1.0;
const DEFAULT_SERVER_ADDRESS: &str = "localhost";
const DEFAULT_SERVER_PORT: u32 = 23450;
const DEFAULT_LANG: &str = "en";

/// Build configuration that selects the default tables and the file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildFlavor {
    Debug,
    Release,
}

impl BuildFlavor {
    /// Flavor of the running binary: `Debug` when compiled with debug assertions.
    pub fn current() -> Self {
        if cfg!(debug_assertions) {
            BuildFlavor::Debug
        } else {
            BuildFlavor::Release
        }
    }

    /// Name of the settings file for this flavor.
    pub fn file_name(self) -> &'static str {
        match self {
            BuildFlavor::Debug => "config_d.json",
            BuildFlavor::Release => "config.json",
        }
    }
}

impl fmt::Display for BuildFlavor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildFlavor::Debug => f.write_str("debug"),
            BuildFlavor::Release => f.write_str("release"),
        }
    }
}

impl FromStr for BuildFlavor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "debug" => Ok(BuildFlavor::Debug),
            "release" => Ok(BuildFlavor::Release),
            other => Err(format!("unknown build flavor '{other}' (expected debug or release)")),
        }
    }
}

/// The immutable default tables injected into the settings store.
#[derive(Debug, Clone, PartialEq)]
pub struct SettingsDefaults {
    /// Default value for every canonical scalar key.
    pub settings: SettingsDocument,
    /// Out-of-box input bindings.
    pub bindings: BindingTable,
}

impl SettingsDefaults {
    pub fn for_flavor(flavor: BuildFlavor) -> Self {
        let (width, height, fullscreen, borderless) = match flavor {
            BuildFlavor::Debug => (1280u32, 720u32, false, false),
            // Zero means "use the desktop resolution".
            BuildFlavor::Release => (0, 0, true, true),
        };

        let settings: SettingsDocument = [
            (KEY_WIDTH, SettingValue::from(width)),
            (KEY_HEIGHT, SettingValue::from(height)),
            (KEY_FULLSCREEN, SettingValue::from(fullscreen)),
            (KEY_BORDERLESS, SettingValue::from(borderless)),
            (KEY_SOUND, SettingValue::from(DEFAULT_SOUND_VOLUME)),
            (KEY_ADDRESS, SettingValue::from(DEFAULT_SERVER_ADDRESS)),
            (KEY_PORT, SettingValue::from(DEFAULT_SERVER_PORT)),
            (KEY_LANG, SettingValue::from(DEFAULT_LANG)),
        ]
        .into_iter()
        .collect();

        Self {
            settings,
            bindings: BindingTable::defaults(),
        }
    }
}
