//! Render configuration
//!
//! Settings can be loaded from a TOML file; every field has a default, so a
//! file only needs the values it changes:
//!
//! ```toml
//! [light]
//! radius = 100.0
//! kr = 0.9
//!
//! [viewer]
//! width = 640
//! height = 480
//! auto_scale = true
//!
//! [shading]
//! diffuse = true
//! specular = false
//! ```
//!
//! SPDX-FileCopyrightText: 2025 `CyberDeco`
//!
//! SPDX-License-Identifier: MIT

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::light::LightPad;
use crate::render::RenderOptions;

/// Default viewer width in pixels.
pub const DEFAULT_VIEWER_WIDTH: usize = 320;

/// Default viewer height in pixels.
pub const DEFAULT_VIEWER_HEIGHT: usize = 470;

/// Output size settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub width: usize,
    pub height: usize,
    /// Fit decoded images inside `width` x `height` before rendering.
    pub auto_scale: bool,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_VIEWER_WIDTH,
            height: DEFAULT_VIEWER_HEIGHT,
            auto_scale: true,
        }
    }
}

/// Everything needed to turn a decoded image into pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub light: LightPad,
    pub viewer: ViewerConfig,
    pub shading: RenderOptions,
}

impl RenderConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| Error::ConfigParse {
            message: e.to_string(),
        })
    }

    /// Load a configuration file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!("Loaded render config from {}: {config:?}", path.as_ref().display());
        Ok(config)
    }

    /// Serialize to TOML text.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string(self).map_err(|e| Error::ConfigParse {
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let config = RenderConfig::default();
        assert_eq!(config.light, LightPad::new(100.0, 0.9));
        assert_eq!((config.viewer.width, config.viewer.height), (320, 470));
        assert!(config.viewer.auto_scale);
        assert_eq!(config.shading, RenderOptions::default());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = RenderConfig::from_toml_str("[shading]\nspecular = true\n\n[viewer]\nwidth = 64\n").unwrap();
        assert!(config.shading.specular);
        assert!(!config.shading.diffuse);
        assert_eq!(config.viewer.width, 64);
        assert_eq!(config.viewer.height, DEFAULT_VIEWER_HEIGHT);
        assert_eq!(config.light, LightPad::default());
    }

    #[test]
    fn test_round_trip_through_toml() {
        let mut config = RenderConfig::default();
        config.light.kr = 0.75;
        config.viewer.auto_scale = false;
        let text = config.to_toml_string().unwrap();
        assert_eq!(RenderConfig::from_toml_str(&text).unwrap(), config);
    }

    #[test]
    fn test_bad_toml() {
        assert!(matches!(
            RenderConfig::from_toml_str("[viewer]\nwidth = \"wide\"\n"),
            Err(Error::ConfigParse { .. })
        ));
    }
}
