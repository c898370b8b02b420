//! Scripted input for headless runs
//!
//! A script is a JSON array of `{ "frame": N, "action": ... }` entries:
//!
//! ```json
//! [
//!   { "frame": 0,  "action": { "key_down": "w" } },
//!   { "frame": 30, "action": { "key_up": "w" } },
//!   { "frame": 90, "action": "toggle_pause" },
//!   { "frame": 95, "action": "reset" }
//! ]
//! ```
//!
//! Actions for a frame are applied before that frame's update, in file order.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Errors raised while loading a script
#[derive(Debug)]
pub enum ScriptError {
    Io(std::io::Error),
    Json(serde_json::Error),
}

impl fmt::Display for ScriptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScriptError::Io(e) => write!(f, "failed to read input script: {e}"),
            ScriptError::Json(e) => write!(f, "malformed input script: {e}"),
        }
    }
}

impl std::error::Error for ScriptError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ScriptError::Io(e) => Some(e),
            ScriptError::Json(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for ScriptError {
    fn from(e: std::io::Error) -> Self {
        ScriptError::Io(e)
    }
}

impl From<serde_json::Error> for ScriptError {
    fn from(e: serde_json::Error) -> Self {
        ScriptError::Json(e)
    }
}

/// One input event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScriptAction {
    KeyDown(String),
    KeyUp(String),
    TogglePause,
    Reset,
}

/// An action bound to the frame it fires on
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptStep {
    pub frame: u64,
    pub action: ScriptAction,
}

/// Timeline of input events, ordered by frame
#[derive(Debug, Clone, Default)]
pub struct InputScript {
    steps: Vec<ScriptStep>,
}

impl InputScript {
    pub fn new(mut steps: Vec<ScriptStep>) -> Self {
        // Stable: same-frame steps keep their file order
        steps.sort_by_key(|s| s.frame);
        Self { steps }
    }

    pub fn parse(json: &str) -> Result<Self, ScriptError> {
        let steps: Vec<ScriptStep> = serde_json::from_str(json)?;
        Ok(Self::new(steps))
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ScriptError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let script = Self::parse(&json)?;
        log::info!(
            "Loaded {} scripted inputs from {}",
            script.len(),
            path.as_ref().display()
        );
        Ok(script)
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Frame of the last scripted action
    pub fn last_frame(&self) -> Option<u64> {
        self.steps.last().map(|s| s.frame)
    }

    /// Actions scheduled for `frame`, in order
    pub fn actions_at(&self, frame: u64) -> impl Iterator<Item = &ScriptAction> {
        let start = self.steps.partition_point(|s| s.frame < frame);
        let end = self.steps.partition_point(|s| s.frame <= frame);
        self.steps[start..end].iter().map(|s| &s.action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SCRIPT: &str = r#"[
        { "frame": 30, "action": { "key_up": "w" } },
        { "frame": 0,  "action": { "key_down": "w" } },
        { "frame": 30, "action": { "key_down": "ArrowDown" } },
        { "frame": 90, "action": "toggle_pause" },
        { "frame": 95, "action": "reset" }
    ]"#;

    #[test]
    fn test_parse_and_order() {
        let script = InputScript::parse(SCRIPT).unwrap();
        assert_eq!(script.len(), 5);
        assert_eq!(script.last_frame(), Some(95));

        let at_0: Vec<_> = script.actions_at(0).collect();
        assert_eq!(at_0, vec![&ScriptAction::KeyDown("w".into())]);

        let at_30: Vec<_> = script.actions_at(30).cloned().collect();
        assert_eq!(
            at_30,
            vec![
                ScriptAction::KeyUp("w".into()),
                ScriptAction::KeyDown("ArrowDown".into()),
            ]
        );

        assert_eq!(script.actions_at(31).count(), 0);
        assert_eq!(script.actions_at(90).next(), Some(&ScriptAction::TogglePause));
        assert_eq!(script.actions_at(95).next(), Some(&ScriptAction::Reset));
    }

    #[test]
    fn test_empty_script() {
        let script = InputScript::parse("[]").unwrap();
        assert!(script.is_empty());
        assert_eq!(script.last_frame(), None);
        assert_eq!(script.actions_at(0).count(), 0);
    }

    #[test]
    fn test_rejects_unknown_action() {
        let err = InputScript::parse(r#"[{ "frame": 1, "action": "jump" }]"#).unwrap_err();
        assert!(matches!(err, ScriptError::Json(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SCRIPT.as_bytes()).unwrap();

        let script = InputScript::load(file.path()).unwrap();
        assert_eq!(script.len(), 5);
    }
}
