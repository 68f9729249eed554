use serde::{Deserialize, Serialize};

use crate::model::player::PlayerState;
use crate::model::scene::Scene;
use crate::model::session::{Session, TurnRecord};

pub const SAVE_VERSION: u32 = 1;

#[derive(Debug, thiserror::Error)]
pub enum PersistError {
    #[error("save data is corrupt: {0}")]
    Corrupt(String),
    #[error("unsupported save version {found}, expected {expected}")]
    UnsupportedVersion { found: u32, expected: u32 },
}

/// Versioned on-disk form of a Session. `last_error` is transient and
/// deliberately absent from the schema.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameSave {
    pub version: u32,
    pub theme: String,
    pub scene: Scene,
    pub player: PlayerState,
    pub history: Vec<TurnRecord>,
}

/// Captures the full session as a self-describing byte stream.
pub fn serialize(session: &Session) -> Result<Vec<u8>, PersistError> {
    let save = GameSave {
        version: SAVE_VERSION,
        theme: session.theme.clone(),
        scene: session.current_scene.clone(),
        player: session.player.clone(),
        history: session.history.clone(),
    };
    serde_json::to_vec_pretty(&save).map_err(|e| PersistError::Corrupt(e.to_string()))
}

/// Rebuilds a Session from saved bytes. Corrupt streams and unknown
/// schema versions are reported as values; the caller's in-memory
/// session is untouched either way.
pub fn deserialize(bytes: &[u8]) -> Result<Session, PersistError> {
    let save: GameSave =
        serde_json::from_slice(bytes).map_err(|e| PersistError::Corrupt(e.to_string()))?;

    if save.version != SAVE_VERSION {
        return Err(PersistError::UnsupportedVersion {
            found: save.version,
            expected: SAVE_VERSION,
        });
    }

    Ok(Session {
        theme: save.theme,
        current_scene: save.scene,
        player: save.player,
        history: save.history,
        last_error: None,
    })
}
