//! Keyboard and control input
//!
//! Handlers only touch paddle velocity or the pause phase. They run between
//! frames and the next `update` sees whatever was written last.

use serde::{Deserialize, Serialize};

use super::state::{GamePhase, GameState, Side};
use super::tick::{reset_game, toggle_pause};

/// Keys that drive a paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    W,
    S,
    ArrowUp,
    ArrowDown,
}

impl Key {
    /// Parse a `KeyboardEvent.key` label
    pub fn from_label(label: &str) -> Option<Key> {
        match label {
            "w" => Some(Key::W),
            "s" => Some(Key::S),
            "ArrowUp" => Some(Key::ArrowUp),
            "ArrowDown" => Some(Key::ArrowDown),
            _ => None,
        }
    }

    /// Paddle this key drives
    pub fn side(self) -> Side {
        match self {
            Key::W | Key::S => Side::Left,
            Key::ArrowUp | Key::ArrowDown => Side::Right,
        }
    }

    /// -1 for up, +1 for down
    pub fn direction(self) -> f32 {
        match self {
            Key::W | Key::ArrowUp => -1.0,
            Key::S | Key::ArrowDown => 1.0,
        }
    }
}

/// Key transition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyAction {
    Down,
    Up,
}

/// Discrete actions from the control surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ControlAction {
    TogglePause,
    Reset,
}

/// Apply a key event; returns false for labels that are not bound
pub fn handle_key(state: &mut GameState, action: KeyAction, label: &str) -> bool {
    let Some(key) = Key::from_label(label) else {
        log::debug!("Ignoring key {label:?}");
        return false;
    };

    let paddle = state.paddle_mut(key.side());
    paddle.dy = match action {
        KeyAction::Down => key.direction() * paddle.speed,
        KeyAction::Up => 0.0,
    };
    true
}

/// Apply a control action, returning the phase afterwards
pub fn handle_control(state: &mut GameState, action: ControlAction) -> GamePhase {
    match action {
        ControlAction::TogglePause => toggle_pause(state),
        ControlAction::Reset => {
            reset_game(state);
            state.phase
        }
    }
}
