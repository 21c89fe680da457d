//! Settings loaded from `config.toml`
//!
//! ```toml
//! [labels]
//! ok = "Yes"
//! cancel = "No"
//!
//! [style]
//! class_name = "compact"
//!
//! [style.classes.danger]
//! fg = "red"
//! bold = true
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use adialog_core::prelude::*;

const CONFIG_FILENAME: &str = "config.toml";
const APP_DIR: &str = "async-dialogs";

/// Global settings applied to every dialog
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub labels: Labels,
    #[serde(default)]
    pub style: StyleSettings,
}

/// Default button texts; per-call options win over these
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Labels {
    #[serde(default = "default_ok")]
    pub ok: String,
    #[serde(default = "default_cancel")]
    pub cancel: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            ok: default_ok(),
            cancel: default_cancel(),
        }
    }
}

fn default_ok() -> String {
    "OK".to_string()
}

fn default_cancel() -> String {
    "Cancel".to_string()
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StyleSettings {
    /// Class token(s) added to every dialog, before per-call ones
    #[serde(default)]
    pub class_name: Option<String>,

    /// Terminal styles for class names, layered over the built-in sheet
    #[serde(default)]
    pub classes: BTreeMap<String, ClassStyle>,
}

/// Terminal style for one class name
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClassStyle {
    /// Color name (`red`, `lightblue`) or `#rrggbb`
    #[serde(default)]
    pub fg: Option<String>,
    #[serde(default)]
    pub bg: Option<String>,
    #[serde(default)]
    pub bold: bool,
}

/// Default config location: `<config dir>/async-dialogs/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILENAME))
}

/// Load settings from `path`, or from the default location.
///
/// Never fails: a missing file gives defaults and a broken one is logged
/// and ignored.
pub fn load_settings(path: Option<&Path>) -> Settings {
    let config_path = match path {
        Some(p) => p.to_path_buf(),
        None => match default_config_path() {
            Some(p) => p,
            None => {
                debug!("No config directory on this platform, using defaults");
                return Settings::default();
            }
        },
    };

    if !config_path.exists() {
        if path.is_some() {
            warn!("Config file {:?} does not exist, using defaults", config_path);
        } else {
            debug!("No config file at {:?}, using defaults", config_path);
        }
        return Settings::default();
    }

    match load_settings_from(&config_path) {
        Ok(settings) => {
            debug!("Loaded settings from {:?}", config_path);
            settings
        }
        Err(e) => {
            warn!("{}", e);
            Settings::default()
        }
    }
}

/// Load settings from exactly this file, reporting any problem
pub fn load_settings_from(path: &Path) -> Result<Settings> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| Error::config(format!("Failed to read {:?}: {}", path, e)))?;
    toml::from_str(&content).map_err(|e| Error::config(format!("Failed to parse {:?}: {}", path, e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.labels.ok, "OK");
        assert_eq!(settings.labels.cancel, "Cancel");
        assert!(settings.style.class_name.is_none());
        assert!(settings.style.classes.is_empty());
    }

    #[test]
    fn test_load_full_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(
            &path,
            r##"
[labels]
ok = "Yes"

[style]
class_name = "compact"

[style.classes.danger]
fg = "red"
bg = "#202020"
bold = true
"##,
        )
        .unwrap();

        let settings = load_settings(Some(&path));
        assert_eq!(settings.labels.ok, "Yes");
        assert_eq!(settings.labels.cancel, "Cancel");
        assert_eq!(settings.style.class_name.as_deref(), Some("compact"));

        let danger = &settings.style.classes["danger"];
        assert_eq!(danger.fg.as_deref(), Some("red"));
        assert_eq!(danger.bg.as_deref(), Some("#202020"));
        assert!(danger.bold);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let settings = load_settings(Some(&dir.path().join("absent.toml")));
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_invalid_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "[labels\nok = ").unwrap();

        assert_eq!(load_settings(Some(&path)), Settings::default());
    }

    #[test]
    fn test_load_settings_from_reports_parse_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "labels = 3").unwrap();

        let err = load_settings_from(&path).unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }
}
