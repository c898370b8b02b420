//! Game settings
//!
//! Geometry, speeds and colors for a session. Loaded from a JSON file on
//! native and from LocalStorage in the browser; scores are never persisted.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::renderer::Color;

/// Errors raised while loading or validating settings
#[derive(Debug)]
pub enum SettingsError {
    /// A field holds a value the game cannot run with
    Invalid { field: &'static str, reason: String },
    /// Settings file could not be read
    Io(std::io::Error),
    /// Settings file is not valid JSON for `Settings`
    Json(serde_json::Error),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::Invalid { field, reason } => {
                write!(f, "invalid setting `{field}`: {reason}")
            }
            SettingsError::Io(e) => write!(f, "failed to read settings: {e}"),
            SettingsError::Json(e) => write!(f, "malformed settings JSON: {e}"),
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SettingsError::Invalid { .. } => None,
            SettingsError::Io(e) => Some(e),
            SettingsError::Json(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for SettingsError {
    fn from(e: std::io::Error) -> Self {
        SettingsError::Io(e)
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(e: serde_json::Error) -> Self {
        SettingsError::Json(e)
    }
}

/// Session settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Surface ===
    pub surface_width: f32,
    pub surface_height: f32,

    // === Paddles ===
    pub paddle_width: f32,
    pub paddle_height: f32,
    /// Units per frame while a direction key is held
    pub paddle_speed: f32,

    // === Ball ===
    pub ball_radius: f32,
    /// Per-axis speed (units per frame)
    pub ball_speed: f32,

    // === Presentation ===
    /// CSS-style hex color for paddles, ball and scores
    pub foreground: String,
    /// CSS-style hex color hosts may paint behind the surface
    pub background: String,
    pub font_px: u32,

    /// Frames per second for hosts that pace themselves
    pub frame_rate: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            surface_width: SURFACE_WIDTH,
            surface_height: SURFACE_HEIGHT,

            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_speed: PADDLE_SPEED,

            ball_radius: BALL_RADIUS,
            ball_speed: BALL_SPEED,

            foreground: FOREGROUND.to_string(),
            background: BACKGROUND.to_string(),
            font_px: FONT_PX,

            frame_rate: FRAME_RATE,
        }
    }
}

fn invalid(field: &'static str, reason: impl Into<String>) -> SettingsError {
    SettingsError::Invalid {
        field,
        reason: reason.into(),
    }
}

fn require_positive(field: &'static str, value: f32) -> Result<(), SettingsError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(invalid(field, format!("must be a positive number, got {value}")))
    }
}

impl Settings {
    /// Check that a game can be laid out with these settings
    pub fn validate(&self) -> Result<(), SettingsError> {
        require_positive("surface_width", self.surface_width)?;
        require_positive("surface_height", self.surface_height)?;
        require_positive("paddle_width", self.paddle_width)?;
        require_positive("paddle_height", self.paddle_height)?;
        require_positive("paddle_speed", self.paddle_speed)?;
        require_positive("ball_radius", self.ball_radius)?;
        require_positive("ball_speed", self.ball_speed)?;

        if self.paddle_height > self.surface_height {
            return Err(invalid("paddle_height", "taller than the surface"));
        }
        if self.paddle_width * 2.0 >= self.surface_width {
            return Err(invalid("paddle_width", "paddles would overlap"));
        }
        if self.ball_radius * 2.0 >= self.surface_width.min(self.surface_height) {
            return Err(invalid("ball_radius", "ball does not fit on the surface"));
        }
        if self.font_px == 0 {
            return Err(invalid("font_px", "must be at least 1"));
        }
        if self.frame_rate == 0 {
            return Err(invalid("frame_rate", "must be at least 1"));
        }
        if Color::parse(&self.foreground).is_none() {
            return Err(invalid("foreground", format!("`{}` is not a hex color", self.foreground)));
        }
        if Color::parse(&self.background).is_none() {
            return Err(invalid("background", format!("`{}` is not a hex color", self.background)));
        }
        Ok(())
    }

    /// Parse and validate settings from JSON (missing fields take defaults)
    pub fn from_json_str(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Read settings from a JSON file
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let settings = Self::from_json_str(&json)?;
        log::info!("Loaded settings from {}", path.as_ref().display());
        Ok(settings)
    }

    /// Foreground color, falling back to white
    pub fn foreground_color(&self) -> Color {
        Color::parse(&self.foreground).unwrap_or(Color::WHITE)
    }

    /// Background color, falling back to black
    pub fn background_color(&self) -> Color {
        Color::parse(&self.background).unwrap_or(Color::BLACK)
    }

    /// Frame period for self-paced hosts
    pub fn frame_period(&self) -> std::time::Duration {
        std::time::Duration::from_secs_f64(1.0 / self.frame_rate.max(1) as f64)
    }

    /// LocalStorage key
    #[cfg(target_arch = "wasm32")]
    const STORAGE_KEY: &'static str = "canvas_pong_settings";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json_str(&json) {
                    Ok(settings) => {
                        log::info!("Loaded settings from LocalStorage");
                        return settings;
                    }
                    Err(e) => log::warn!("Ignoring stored settings: {e}"),
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Native stub; use `load_from` for file-based settings
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.surface_width, 800.0);
        assert_eq!(settings.surface_height, 400.0);
        assert_eq!(settings.ball_speed, 4.0);
        assert_eq!(settings.paddle_speed, 5.0);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings = Settings::from_json_str(r#"{ "surface_width": 640 }"#).unwrap();
        assert_eq!(settings.surface_width, 640.0);
        assert_eq!(settings.surface_height, 400.0);
        assert_eq!(settings.foreground, "#fff");
    }

    #[test]
    fn test_rejects_bad_values() {
        let err = Settings::from_json_str(r#"{ "paddle_height": 500 }"#).unwrap_err();
        assert!(matches!(err, SettingsError::Invalid { field: "paddle_height", .. }));

        let err = Settings::from_json_str(r#"{ "ball_speed": 0 }"#).unwrap_err();
        assert!(matches!(err, SettingsError::Invalid { field: "ball_speed", .. }));

        let err = Settings::from_json_str(r#"{ "foreground": "white" }"#).unwrap_err();
        assert!(matches!(err, SettingsError::Invalid { field: "foreground", .. }));

        let err = Settings::from_json_str(r#"{ "frame_rate": 0 }"#).unwrap_err();
        assert!(err.to_string().contains("frame_rate"));
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = Settings::from_json_str("{ surface_width: ").unwrap_err();
        assert!(matches!(err, SettingsError::Json(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r##"{{ "foreground": "#00ff00", "frame_rate": 30 }}"##).unwrap();

        let settings = Settings::load_from(file.path()).unwrap();
        assert_eq!(settings.foreground_color(), Color::rgb(0, 255, 0));
        assert_eq!(settings.frame_period(), std::time::Duration::from_secs_f64(1.0 / 30.0));
    }

    #[test]
    fn test_load_from_missing_file() {
        let err = Settings::load_from("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, SettingsError::Io(_)));
    }
}
