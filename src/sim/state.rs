//! Game state and core simulation types
//!
//! Entities are created once per session; only their numeric fields change.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::settings::Settings;

/// Which side of the court a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    /// Player 1, driven by `w` / `s`
    Left,
    /// Player 2, driven by the arrow keys
    Right,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    pub fn player_number(self) -> u8 {
        match self {
            Side::Left => 1,
            Side::Right => 2,
        }
    }
}

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Paddles and ball advance every frame
    #[default]
    Running,
    /// Frame updates are skipped
    Paused,
}

impl GamePhase {
    /// Label for the pause/resume control while in this phase
    pub fn control_label(self) -> &'static str {
        match self {
            GamePhase::Running => "Pause",
            GamePhase::Paused => "Resume",
        }
    }
}

/// Something noteworthy that happened during an update
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Ball reflected off the top or bottom edge
    WallBounce,
    /// Ball reflected off a paddle
    PaddleHit,
    /// A point was scored by the given side
    Scored(Side),
}

/// A player's paddle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    pub side: Side,
    /// Top-left corner; x is fixed for the session
    pub pos: Vec2,
    /// Width and height
    pub size: Vec2,
    /// Vertical velocity set by input (zero when no key is held)
    pub dy: f32,
    /// Magnitude of `dy` while a key is held
    pub speed: f32,
    pub score: u32,
}

impl Paddle {
    /// Paddle for `side`, vertically centered on the surface
    pub fn new(side: Side, settings: &Settings) -> Self {
        let x = match side {
            Side::Left => 0.0,
            Side::Right => settings.surface_width - settings.paddle_width,
        };
        Self {
            side,
            pos: Vec2::new(x, settings.surface_height / 2.0 - settings.paddle_height / 2.0),
            size: Vec2::new(settings.paddle_width, settings.paddle_height),
            dy: 0.0,
            speed: settings.paddle_speed,
            score: 0,
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }
}

/// The ball
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    /// Center
    pub pos: Vec2,
    /// Per-frame displacement
    pub vel: Vec2,
    pub radius: f32,
    /// Per-axis speed applied on every reset
    pub speed: f32,
}

impl Ball {
    /// Ball at `center` heading down and to the right
    pub fn new(center: Vec2, settings: &Settings) -> Self {
        Self {
            pos: center,
            vel: Vec2::splat(settings.ball_speed),
            radius: settings.ball_radius,
            speed: settings.ball_speed,
        }
    }
}

/// Complete game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Serve direction RNG
    pub rng: Pcg32,
    /// Drawing surface size
    pub surface: Vec2,
    pub phase: GamePhase,
    /// Player 1
    pub left: Paddle,
    /// Player 2
    pub right: Paddle,
    pub ball: Ball,
    /// Frames advanced while running
    pub frame: u64,
    /// Events from the most recent update (cleared at the start of each)
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new game laid out from `settings`
    pub fn new(settings: &Settings, seed: u64) -> Self {
        let surface = Vec2::new(settings.surface_width, settings.surface_height);
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            surface,
            phase: GamePhase::Running,
            left: Paddle::new(Side::Left, settings),
            right: Paddle::new(Side::Right, settings),
            ball: Ball::new(surface / 2.0, settings),
            frame: 0,
            events: Vec::new(),
        }
    }

    /// Surface center
    pub fn center(&self) -> Vec2 {
        self.surface / 2.0
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    pub fn paddle_mut(&mut self, side: Side) -> &mut Paddle {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    /// Scores as (player 1, player 2)
    pub fn scores(&self) -> (u32, u32) {
        (self.left.score, self.right.score)
    }

    pub fn is_paused(&self) -> bool {
        self.phase == GamePhase::Paused
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_layout() {
        let state = GameState::new(&Settings::default(), 1);

        assert_eq!(state.left.pos, Vec2::new(0.0, 150.0));
        assert_eq!(state.right.pos, Vec2::new(790.0, 150.0));
        assert_eq!(state.left.size, Vec2::new(10.0, 100.0));
        assert_eq!(state.ball.pos, Vec2::new(400.0, 200.0));
        assert_eq!(state.ball.vel, Vec2::new(4.0, 4.0));
        assert_eq!(state.scores(), (0, 0));
        assert_eq!(state.phase, GamePhase::Running);
    }

    #[test]
    fn test_paddle_edges() {
        let state = GameState::new(&Settings::default(), 1);
        let right = state.paddle(Side::Right);
        assert_eq!(right.left(), 790.0);
        assert_eq!(right.right(), 800.0);
        assert_eq!(right.top(), 150.0);
        assert_eq!(right.bottom(), 250.0);
    }

    #[test]
    fn test_control_labels() {
        assert_eq!(GamePhase::Running.control_label(), "Pause");
        assert_eq!(GamePhase::Paused.control_label(), "Resume");
        assert_eq!(Side::Left.opponent(), Side::Right);
        assert_eq!(Side::Right.player_number(), 2);
    }

    #[test]
    fn test_state_serializes() {
        let state = GameState::new(&Settings::default(), 7);
        let json = serde_json::to_string(&state).unwrap();
        let back: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(back.seed, 7);
        assert_eq!(back.ball.pos, state.ball.pos);
    }
}
