//! TOML-backed config: key bindings and the default window scale. Falls
//! back to built-in defaults (see `input::default_key_map`) when no config
//! file is found, rather than failing startup.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use sdl2::keyboard::Scancode;
use serde::{Deserialize, Serialize};

use crate::input::KeyMap;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_scale")]
    pub scale: u32,
    #[serde(default)]
    pub key_bindings: HashMap<String, String>,
}

fn default_scale() -> u32 {
    3
}

impl Default for Config {
    fn default() -> Self {
        Config {
            scale: default_scale(),
            key_bindings: HashMap::new(),
        }
    }
}

impl Config {
    /// Default config path: `$XDG_CONFIG_HOME/dmg-frontend/config.toml` (or
    /// platform equivalent via `dirs::config_dir()`).
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("dmg-frontend").join("config.toml"))
    }

    pub fn load(path: &Path) -> Config {
        match std::fs::read_to_string(path) {
            Ok(text) => toml::from_str(&text).unwrap_or_else(|e| {
                eprintln!("Warning: failed to parse config at {}: {e}", path.display());
                Config::default()
            }),
            Err(_) => Config::default(),
        }
    }

    /// Apply `key_bindings` (button name -> SDL scancode name) on top of a
    /// pre-built default map, overriding only the names present in the file.
    pub fn apply_overrides(&self, base: KeyMap, buttons: &[dmg_core::core::machine::InputButton]) -> KeyMap {
        let mut km = base;
        for button in buttons {
            if let Some(scancode_name) = self.key_bindings.get(button.name)
                && let Some(sc) = scancode_from_name(scancode_name)
            {
                km.bind(sc, button.id);
            }
        }
        km
    }
}

fn scancode_from_name(name: &str) -> Option<Scancode> {
    Scancode::from_name(name)
}
