//! JSON persistence of the settings block
//!
//! The host keeps one JSON document for all of its features; the wetness
//! settings live under [`SETTINGS_KEY`] and every other key is left alone.

use std::io::ErrorKind;
use std::path::Path;

use serde_json::{Map, Value as JsonValue};

use crate::constants::settings::SETTINGS_KEY;
use crate::settings::{SettingsError, SettingsResult, WetnessSettings};

impl WetnessSettings {
    /// Read the settings block out of the host's config document
    ///
    /// Missing fields take their defaults. A missing key, or one that does
    /// not hold an object, yields the default settings.
    pub fn load(root: &JsonValue) -> SettingsResult<Self> {
        let mut settings = Self::default();
        settings.apply(root)?;
        Ok(settings)
    }

    /// Overwrite these settings with the block in the host's config document
    ///
    /// Only assigns when the key holds an object; otherwise the current
    /// values are kept. Returns whether anything was assigned.
    pub fn apply(&mut self, root: &JsonValue) -> SettingsResult<bool> {
        match root.get(SETTINGS_KEY) {
            Some(block) if block.is_object() => {
                *self = serde_json::from_value(block.clone())?;
                log::debug!("[WetnessSettings] Loaded {:?}", self);
                Ok(true)
            }
            Some(other) => {
                log::warn!(
                    "[WetnessSettings] '{}' is not an object ({}), keeping current settings",
                    SETTINGS_KEY,
                    other
                );
                Ok(false)
            }
            None => Ok(false),
        }
    }

    /// Store the settings block in the host's config document
    pub fn save(&self, root: &mut JsonValue) -> SettingsResult<()> {
        if !root.is_object() {
            *root = JsonValue::Object(Map::new());
        }
        // Through text so f32 fields stay short (0.9, not 0.8999999761581421)
        let block: JsonValue = serde_json::from_str(&serde_json::to_string(self)?)?;
        if let Some(object) = root.as_object_mut() {
            object.insert(SETTINGS_KEY.to_string(), block);
        }
        Ok(())
    }
}

/// Read the whole config document from disk, empty when the file does not exist
fn read_document(path: &Path) -> SettingsResult<JsonValue> {
    match std::fs::read_to_string(path) {
        Ok(raw) => Ok(serde_json::from_str(&raw)?),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(JsonValue::Object(Map::new())),
        Err(source) => Err(SettingsError::Read {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Load settings from a JSON config file on disk
pub fn load_from_path(path: impl AsRef<Path>) -> SettingsResult<WetnessSettings> {
    let path = path.as_ref();
    let document = read_document(path)?;
    let settings = WetnessSettings::load(&document)?;
    log::info!("[WetnessSettings] Loaded settings from {}", path.display());
    Ok(settings)
}

/// Save settings into a JSON config file on disk, keeping the other keys of the file
pub fn save_to_path(settings: &WetnessSettings, path: impl AsRef<Path>) -> SettingsResult<()> {
    let path = path.as_ref();
    let mut document = read_document(path)?;
    settings.save(&mut document)?;

    let raw = serde_json::to_string_pretty(&document)?;
    std::fs::write(path, raw).map_err(|source| SettingsError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    log::info!("[WetnessSettings] Saved settings to {}", path.display());
    Ok(())
}
