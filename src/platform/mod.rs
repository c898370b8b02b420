//! Platform abstraction layer
//!
//! Hosts (browser canvas, native headless loop) drive the game through a
//! `Session`: forward input events, then call `frame` once per tick.

pub mod script;

#[cfg(not(target_arch = "wasm32"))]
mod pacer;
#[cfg(not(target_arch = "wasm32"))]
pub use pacer::FramePacer;

pub use script::{InputScript, ScriptAction, ScriptError, ScriptStep};

use crate::renderer::{Surface, render};
use crate::settings::Settings;
use crate::sim::{self, ControlAction, GameEvent, GameState, KeyAction};

/// A running game plus the settings it was laid out with
#[derive(Debug, Clone)]
pub struct Session {
    settings: Settings,
    state: GameState,
}

impl Session {
    pub fn new(settings: Settings, seed: u64) -> Self {
        log::info!("New session with seed: {}", seed);
        let state = GameState::new(&settings, seed);
        Self { settings, state }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    /// Key pressed; false if the label is not bound
    pub fn key_down(&mut self, label: &str) -> bool {
        sim::handle_key(&mut self.state, KeyAction::Down, label)
    }

    /// Key released; false if the label is not bound
    pub fn key_up(&mut self, label: &str) -> bool {
        sim::handle_key(&mut self.state, KeyAction::Up, label)
    }

    /// Flip pause, returning the label the pause control should now show
    pub fn toggle_pause(&mut self) -> &'static str {
        self.control(ControlAction::TogglePause)
    }

    /// Zero scores and re-serve
    pub fn reset(&mut self) {
        self.control(ControlAction::Reset);
    }

    /// Apply a control action, returning the pause control label
    pub fn control(&mut self, action: ControlAction) -> &'static str {
        sim::handle_control(&mut self.state, action).control_label()
    }

    /// Current label for the pause control
    pub fn control_label(&self) -> &'static str {
        self.state.phase.control_label()
    }

    /// Apply one scripted action
    pub fn apply(&mut self, action: &ScriptAction) {
        match action {
            ScriptAction::KeyDown(label) => {
                self.key_down(label);
            }
            ScriptAction::KeyUp(label) => {
                self.key_up(label);
            }
            ScriptAction::TogglePause => {
                self.toggle_pause();
            }
            ScriptAction::Reset => self.reset(),
        }
    }

    /// Advance one frame without drawing
    pub fn update(&mut self) -> &[GameEvent] {
        sim::update(&mut self.state);
        &self.state.events
    }

    /// Draw the current state
    pub fn render(&self, surface: &mut dyn Surface) {
        render(&self.state, &self.settings, surface);
    }

    /// One host tick: update then render
    pub fn frame(&mut self, surface: &mut dyn Surface) -> &[GameEvent] {
        sim::update(&mut self.state);
        self.render(surface);
        &self.state.events
    }

    /// Events produced by the most recent frame
    pub fn events(&self) -> &[GameEvent] {
        &self.state.events
    }
}
