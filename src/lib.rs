//! Canvas Pong - classic two-player Pong on a 2D drawing surface
//!
//! Core modules:
//! - `sim`: Game state, per-frame update and input handling
//! - `renderer`: Drawing surface abstraction and the frame renderer
//! - `platform`: Host-facing session, frame pacing and scripted input
//! - `settings`: Data-driven geometry, speeds and colors

pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use platform::Session;
pub use settings::{Settings, SettingsError};

/// Game configuration constants
pub mod consts {
    /// Drawing surface dimensions
    pub const SURFACE_WIDTH: f32 = 800.0;
    pub const SURFACE_HEIGHT: f32 = 400.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    /// Paddle movement per frame while a key is held
    pub const PADDLE_SPEED: f32 = 5.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 10.0;
    /// Per-axis ball speed (units per frame)
    pub const BALL_SPEED: f32 = 4.0;

    /// Score text
    pub const FONT_PX: u32 = 32;

    /// Colors
    pub const FOREGROUND: &str = "#fff";
    pub const BACKGROUND: &str = "#000";

    /// Target frame rate for hosts without their own scheduler
    pub const FRAME_RATE: u32 = 60;
}
