use std::cell::RefCell;
use std::collections::VecDeque;
use std::fs;

use lost_explorer::engine::engine::{SessionEngine, TurnOutcome};
use lost_explorer::engine::llm_client::{GeneratorClient, RawResponse, TransportError};
use lost_explorer::model::save::PersistError;

struct ScriptedClient {
    responses: RefCell<VecDeque<RawResponse>>,
}

impl ScriptedClient {
    fn new(responses: Vec<RawResponse>) -> Self {
        Self {
            responses: RefCell::new(responses.into()),
        }
    }

    fn silent() -> Self {
        Self::new(Vec::new())
    }
}

impl GeneratorClient for ScriptedClient {
    fn send(&self, _prompt: &str) -> Result<RawResponse, TransportError> {
        self.responses
            .borrow_mut()
            .pop_front()
            .ok_or_else(|| TransportError::RequestFailed("script exhausted".into()))
    }
}

fn reply(description: &str, options: &[&str], updates: &[&str]) -> RawResponse {
    let content = serde_json::json!({
        "description": description,
        "options": options,
        "inventoryUpdates": updates,
    })
    .to_string();
    RawResponse {
        status: 200,
        body: serde_json::json!({
            "choices": [{"message": {"content": content}}]
        })
        .to_string(),
    }
}

/// Plays a short session: seed plus two turns, leaving three history
/// entries and two inventory items.
fn played_engine() -> SessionEngine<ScriptedClient> {
    let client = ScriptedClient::new(vec![
        reply(
            "You drift into the docking bay.",
            &["1. Cycle the airlock", "q. Quit"],
            &["keycard"],
        ),
        reply(
            "The airlock opens onto a silent corridor.",
            &["1. Head to the bridge", "2. Search the lockers", "q. Quit"],
            &["flashlight"],
        ),
        reply(
            "The bridge consoles are dead.",
            &["1. Reroute power", "q. Quit"],
            &[],
        ),
    ]);

    let mut engine = SessionEngine::start("Space Station", client);
    assert!(matches!(
        engine.apply_action("1. Cycle the airlock"),
        TurnOutcome::Advanced
    ));
    assert!(matches!(
        engine.apply_action("1. Head to the bridge"),
        TurnOutcome::Advanced
    ));
    engine
}

#[test]
fn full_session_survives_a_file_round_trip() {
    let engine = played_engine();
    assert_eq!(engine.session().history.len(), 3);
    assert_eq!(engine.session().player.inventory().len(), 2);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("station.save");

    fs::write(&path, engine.save().unwrap()).unwrap();
    let bytes = fs::read(&path).unwrap();
    let restored = SessionEngine::load(&bytes, ScriptedClient::silent()).unwrap();

    assert_eq!(restored.session().theme, "Space Station");
    assert_eq!(restored.session().current_scene, engine.session().current_scene);
    assert_eq!(restored.session().player, engine.session().player);
    assert_eq!(restored.session().history, engine.session().history);
}

#[test]
fn saved_bytes_are_stable_for_a_given_session() {
    let engine = played_engine();
    assert_eq!(engine.save().unwrap(), engine.save().unwrap());
}

#[test]
fn a_restored_session_keeps_playing() {
    let engine = played_engine();
    let bytes = engine.save().unwrap();

    let client = ScriptedClient::new(vec![reply(
        "Power hums back to life.",
        &["1. Hail the fleet", "q. Quit"],
        &["-keycard"],
    )]);
    let mut restored = SessionEngine::load(&bytes, client).unwrap();

    assert!(matches!(
        restored.apply_action("1. Reroute power"),
        TurnOutcome::Advanced
    ));
    assert_eq!(restored.session().history.len(), 4);
    assert_eq!(
        restored.session().player.inventory(),
        &["flashlight".to_string()]
    );
    assert!(matches!(restored.apply_action("q. Quit"), TurnOutcome::Quit));
}

#[test]
fn corrupt_save_files_fail_without_a_panic() {
    let err = SessionEngine::load(b"{\"not\": \"a save\"}", ScriptedClient::silent())
        .err()
        .unwrap();
    assert!(matches!(err, PersistError::Corrupt(_)));
}
