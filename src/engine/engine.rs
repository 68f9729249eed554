use tracing::{info, warn};

use crate::engine::llm_client::{extract_content, GeneratorClient, TransportError};
use crate::engine::prompt_builder::{build_seed_prompt, build_turn_prompt};
use crate::engine::reply_parser::{parse_reply, ParseError};
use crate::model::action::PlayerAction;
use crate::model::reply::GeneratorReply;
use crate::model::save::{self, PersistError};
use crate::model::scene::Scene;
use crate::model::session::Session;

/// Why a turn attempt did not advance the session.
#[derive(Debug, thiserror::Error)]
pub enum TurnError {
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error("You don't have '{0}' in your inventory!")]
    MissingItem(String),
    #[error("the session has ended")]
    SessionStopped,
}

/// Caller-visible result of one turn attempt.
#[derive(Debug)]
pub enum TurnOutcome {
    /// Scene replaced, history appended.
    Advanced,
    /// The turn aborted; scene and history are unchanged and the
    /// failure is recorded in the session's `last_error`.
    Rejected(TurnError),
    /// The player quit. The engine is stopped; end the interaction loop.
    Quit,
}

/// Drives the turn cycle: prompt build, generator call, reply
/// validation, state apply. Owns the Session outright; one turn runs
/// at a time and only the seed/turn transitions mutate it.
pub struct SessionEngine<C: GeneratorClient> {
    client: C,
    session: Session,
    stopped: bool,
}

impl<C: GeneratorClient> SessionEngine<C> {
    /// Seeds a new session for the theme. Infallible by contract: when
    /// the generator cannot produce an opening scene the session starts
    /// in the fallback void, never without a current scene.
    pub fn start(theme: impl Into<String>, client: C) -> Self {
        let theme = theme.into();
        let prompt = build_seed_prompt(&theme);

        let mut engine = Self {
            client,
            session: Session::new(theme, Scene::fallback()),
            stopped: false,
        };

        match engine.fetch_reply(&prompt) {
            Ok(reply) => match scene_from_reply(&reply) {
                Ok(scene) => {
                    engine.session.player.apply_deltas(&reply.deltas);
                    engine.session.current_scene = scene;
                }
                Err(err) => engine.note_seed_failure(err),
            },
            Err(err) => engine.note_seed_failure(err),
        }

        let opening = engine.session.current_scene.description().to_string();
        engine.session.record_turn("start", opening);
        info!(theme = %engine.session.theme, "session seeded");

        engine
    }

    /// Resumes a saved session. A failed load is reported as a value so
    /// the caller can keep whatever session it already holds.
    pub fn load(bytes: &[u8], client: C) -> Result<Self, PersistError> {
        let session = save::deserialize(bytes)?;
        Ok(Self {
            client,
            session,
            stopped: false,
        })
    }

    pub fn save(&self) -> Result<Vec<u8>, PersistError> {
        save::serialize(&self.session)
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    /// Runs one full turn for the raw player input. Failures abort the
    /// turn without touching the scene or history; the session stays
    /// ready for another attempt.
    pub fn apply_action(&mut self, raw: &str) -> TurnOutcome {
        if self.stopped {
            return self.reject(TurnError::SessionStopped);
        }

        let action = PlayerAction::classify(raw, self.session.current_scene.options());

        match &action {
            PlayerAction::Quit => {
                self.stopped = true;
                info!("session stopped by player");
                return TurnOutcome::Quit;
            }
            PlayerAction::UseItem(item) => {
                // Precondition check happens before any network call.
                if !self.session.player.has_item(item) {
                    return self.reject(TurnError::MissingItem(item.clone()));
                }
            }
            _ => {}
        }

        self.session.last_error = None;
        let prompt = build_turn_prompt(
            &self.session.theme,
            &self.session.current_scene,
            &action,
            self.session.player.inventory(),
        );

        let reply = match self.fetch_reply(&prompt) {
            Ok(reply) => reply,
            Err(err) => return self.reject(err),
        };
        let scene = match scene_from_reply(&reply) {
            Ok(scene) => scene,
            Err(err) => return self.reject(err),
        };

        self.session.player.apply_deltas(&reply.deltas);
        self.session.record_turn(raw.trim(), reply.description);
        self.session.current_scene = scene;

        TurnOutcome::Advanced
    }

    fn fetch_reply(&self, prompt: &str) -> Result<GeneratorReply, TurnError> {
        let response = self.client.send(prompt)?;
        let content = extract_content(&response)?;
        Ok(parse_reply(&content)?)
    }

    fn reject(&mut self, err: TurnError) -> TurnOutcome {
        warn!(error = %err, "turn rejected");
        self.session.last_error = Some(err.to_string());
        TurnOutcome::Rejected(err)
    }

    fn note_seed_failure(&mut self, err: TurnError) {
        warn!(error = %err, "seed turn failed, starting in the void");
        self.session.last_error = Some(err.to_string());
    }
}

// The parser already enforces the scene invariants; a reply that still
// cannot form a Scene is reported as a contract violation.
fn scene_from_reply(reply: &GeneratorReply) -> Result<Scene, TurnError> {
    Scene::new(reply.description.clone(), reply.options.clone()).ok_or_else(|| {
        TurnError::Parse(ParseError::ContractViolation {
            field: "options",
            problem: "reply does not form a valid scene".into(),
        })
    })
}
