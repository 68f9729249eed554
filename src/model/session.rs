use serde::{Deserialize, Serialize};

use crate::model::player::PlayerState;
use crate::model::scene::Scene;

/// One completed turn, kept for display and audit. Append-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TurnRecord {
    pub action_taken: String,
    pub resulting_description: String,
}

/// The whole game in one value: what the adventure is about, where the
/// player is, what they carry, and every turn that got them there.
/// Owned by the engine and mutated only through its turn transition.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub theme: String,
    pub current_scene: Scene,
    pub player: PlayerState,
    pub history: Vec<TurnRecord>,
    /// Outcome of the most recent failed turn attempt. Transient:
    /// cleared at the start of the next attempt, not persisted.
    pub last_error: Option<String>,
}

impl Session {
    pub fn new(theme: impl Into<String>, current_scene: Scene) -> Self {
        Self {
            theme: theme.into(),
            current_scene,
            player: PlayerState::default(),
            history: Vec::new(),
            last_error: None,
        }
    }

    pub fn record_turn(&mut self, action_taken: impl Into<String>, description: impl Into<String>) {
        self.history.push(TurnRecord {
            action_taken: action_taken.into(),
            resulting_description: description.into(),
        });
    }
}
