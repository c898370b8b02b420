//! Deterministic simulation module
//!
//! All gameplay logic lives here:
//! - One update per frame, no time step
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod input;
pub mod state;
pub mod tick;

pub use collision::{crossed_goal, hits_paddle, hits_wall};
pub use input::{ControlAction, Key, KeyAction, handle_control, handle_key};
pub use state::{Ball, GameEvent, GamePhase, GameState, Paddle, Side};
pub use tick::{move_ball, move_paddles, reset_ball, reset_game, toggle_pause, update};
