//! Picker configuration, loadable from TOML.
//!
//! Every key is optional; missing keys fall back to [`crate::constants`].
//!
//! ```toml
//! field_width = 300.0
//! field_height = 200.0
//! copied_notice_secs = 1.5
//! ```

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants;
use crate::error::PickerError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PickerConfig {
    pub field_width: f64,
    pub field_height: f64,
    pub slider_height: f32,
    pub indicator_radius: f64,
    pub corner_radius: f64,
    pub copied_notice_secs: f64,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            field_width: constants::FIELD_WIDTH,
            field_height: constants::FIELD_HEIGHT,
            slider_height: constants::SLIDER_HEIGHT,
            indicator_radius: constants::INDICATOR_RADIUS,
            corner_radius: constants::RADIUS,
            copied_notice_secs: constants::COPIED_NOTICE_SECS,
        }
    }
}

impl PickerConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, PickerError> {
        Ok(toml::from_str(s)?)
    }

    pub fn load(path: &Path) -> Result<Self, PickerError> {
        let string = std::fs::read_to_string(path)?;
        Self::from_toml_str(&string)
    }

    /// Load from `path`, or fall back to defaults with a warning.
    #[must_use]
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Failed to load picker config {path:?}: {e}");
                Self::default()
            }
        }
    }

    /// How long the "copied" notice stays up. Negative or NaN means zero.
    pub fn copied_notice(&self) -> Duration {
        Duration::try_from_secs_f64(self.copied_notice_secs).unwrap_or(Duration::ZERO)
    }
}
