//! Editor settings - tick rate, debounce intervals and node style.
//!
//! Settings are plain JSON. Every field has a default, so a settings file
//! only needs the values it overrides.

use crate::constants::*;
use crate::error::{SettingsError, SettingsResult};
use crate::graph::NodeTemplate;
use crate::input::Button;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, warn};

/// Per-button debounce intervals in milliseconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DebounceSettings {
    pub grab_node_ms: u64,
    pub create_node_ms: u64,
    pub delete_node_ms: u64,
    pub box_select_ms: u64,
    pub connect_ms: u64,
}

impl DebounceSettings {
    pub fn interval_ms(&self, button: Button) -> u64 {
        match button {
            Button::GrabNode => self.grab_node_ms,
            Button::CreateNode => self.create_node_ms,
            Button::DeleteNode => self.delete_node_ms,
            Button::BoxSelect => self.box_select_ms,
            Button::Connect => self.connect_ms,
        }
    }
}

impl Default for DebounceSettings {
    fn default() -> Self {
        Self {
            grab_node_ms: GRAB_DEBOUNCE_MS,
            create_node_ms: CREATE_DEBOUNCE_MS,
            delete_node_ms: DELETE_DEBOUNCE_MS,
            box_select_ms: BOX_SELECT_DEBOUNCE_MS,
            connect_ms: CONNECT_DEBOUNCE_MS,
        }
    }
}

/// How new nodes look and which ports they get.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NodeStyle {
    pub title: String,
    pub padding: f32,
    pub background: String,
    pub foreground: String,
    pub wire: String,
    pub inputs: Vec<String>,
    pub outputs: Vec<String>,
}

impl NodeStyle {
    /// Template for a node created by the "create" action.
    pub fn template(&self) -> NodeTemplate {
        NodeTemplate::new(self.title.clone())
            .with_inputs(self.inputs.iter().cloned())
            .with_outputs(self.outputs.iter().cloned())
    }
}

impl Default for NodeStyle {
    fn default() -> Self {
        Self {
            title: DEFAULT_NODE_TITLE.to_string(),
            padding: DEFAULT_NODE_PADDING,
            background: NODE_BACKGROUND.to_string(),
            foreground: NODE_FOREGROUND.to_string(),
            wire: CONNECTION_COLOR.to_string(),
            inputs: (0..DEFAULT_PORTS_PER_SIDE).map(|i| format!("in {i}")).collect(),
            outputs: (0..DEFAULT_PORTS_PER_SIDE).map(|i| format!("out {i}")).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorSettings {
    /// Logic ticks per second
    pub tick_rate_hz: u32,
    pub debounce: DebounceSettings,
    pub node: NodeStyle,
    /// Stroke color of the box-select rectangle
    pub selection_color: String,
    /// Seed for random port picks. `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            tick_rate_hz: DEFAULT_TICK_RATE_HZ,
            debounce: DebounceSettings::default(),
            node: NodeStyle::default(),
            selection_color: SELECTION_BOX_COLOR.to_string(),
            seed: None,
        }
    }
}

impl EditorSettings {
    /// Time between two logic ticks.
    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / f64::from(self.tick_rate_hz.max(1)))
    }

    pub fn validate(&self) -> SettingsResult<()> {
        if self.tick_rate_hz == 0 {
            return Err(SettingsError::Invalid("tick_rate_hz must be at least 1".into()));
        }
        if !self.node.padding.is_finite() || self.node.padding < 0.0 {
            return Err(SettingsError::Invalid(format!(
                "node padding must be a non-negative number, got {}",
                self.node.padding
            )));
        }
        Ok(())
    }

    /// Read and validate settings from a JSON file.
    pub fn load_from(path: &Path) -> SettingsResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let settings: EditorSettings = serde_json::from_str(&contents)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from the default location, falling back to defaults.
    pub fn load() -> Self {
        let Some(path) = default_settings_path() else {
            debug!("No config directory, using default settings");
            return Self::default();
        };
        if !path.exists() {
            debug!(path = %path.display(), "No settings file, using defaults");
            return Self::default();
        }
        match Self::load_from(&path) {
            Ok(settings) => settings,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Failed to load settings, using defaults");
                Self::default()
            }
        }
    }

    /// Write settings as pretty-printed JSON, creating parent directories.
    pub fn save_to(&self, path: &Path) -> SettingsResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

/// `<config dir>/wireboard/settings.json`, if the platform has a config dir.
pub fn default_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(SETTINGS_DIR_NAME).join(SETTINGS_FILE_NAME))
}
