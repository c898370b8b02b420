//! Rendering module
//!
//! The game draws through the `Surface` trait: a fixed-size 2D area with
//! rect, circle and text primitives. Hosts supply the implementation.

pub mod ascii;
#[cfg(target_arch = "wasm32")]
pub mod canvas;

pub use ascii::AsciiSurface;
#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;

use crate::settings::Settings;
use crate::sim::GameState;

/// Solid RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rgb` or `#rrggbb`
    pub fn parse(s: &str) -> Option<Color> {
        let hex = s.strip_prefix('#')?;
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |h: &str| u8::from_str_radix(h, 16).ok();
        match hex.len() {
            3 => {
                // #abc expands to #aabbcc
                let mut c = [0u8; 3];
                for (i, slot) in c.iter_mut().enumerate() {
                    *slot = channel(&hex[i..i + 1])? * 17;
                }
                Some(Color::rgb(c[0], c[1], c[2]))
            }
            6 => Some(Color::rgb(
                channel(&hex[0..2])?,
                channel(&hex[2..4])?,
                channel(&hex[4..6])?,
            )),
            _ => None,
        }
    }

    /// `#rrggbb` form for CSS-style APIs
    pub fn to_css(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// A fixed-size 2D drawing area in game coordinates
pub trait Surface {
    fn width(&self) -> f32;
    fn height(&self) -> f32;
    /// Erase the whole surface
    fn clear(&mut self);
    /// Axis-aligned rectangle with its top-left corner at (x, y)
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color);
    /// Filled circle centered at (x, y)
    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, color: Color);
    /// Text with its baseline starting at (x, y)
    fn fill_text(&mut self, text: &str, x: f32, y: f32, color: Color, font_px: u32);
}

/// Draw one frame: clear, paddles, ball, then scores
///
/// Scores are placed relative to the surface's own size.
pub fn render(state: &GameState, settings: &Settings, surface: &mut dyn Surface) {
    let color = settings.foreground_color();
    let (w, h) = (surface.width(), surface.height());

    surface.clear();

    for paddle in [&state.left, &state.right] {
        surface.fill_rect(paddle.pos.x, paddle.pos.y, paddle.size.x, paddle.size.y, color);
    }

    let ball = &state.ball;
    surface.fill_circle(ball.pos.x, ball.pos.y, ball.radius, color);

    let (p1, p2) = state.scores();
    surface.fill_text(&p1.to_string(), w / 4.0, h / 5.0, color, settings.font_px);
    surface.fill_text(&p2.to_string(), 3.0 * w / 4.0, h / 5.0, color, settings.font_px);
}
