use std::fs;
use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};

use lost_explorer::engine::config::load_config;
use lost_explorer::engine::engine::{SessionEngine, TurnOutcome};
use lost_explorer::engine::llm_client::HttpGeneratorClient;
use lost_explorer::model::session::Session;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = load_config().context("failed to load generator config")?;
    let client = HttpGeneratorClient::new(config).context("generator client setup failed")?;

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    let theme = match std::env::args().nth(1) {
        Some(theme) => theme,
        None => {
            print!("Adventure theme: ");
            io::stdout().flush()?;
            lines.next().context("no theme given")??.trim().to_string()
        }
    };

    let mut engine = SessionEngine::start(theme, client);
    print_scene(engine.session());

    while let Some(line) = lines.next() {
        let input = line?;
        let input = input.trim();
        if input.is_empty() {
            continue;
        }

        // save/load are presentation-layer commands, not game actions.
        if let Some(path) = input.strip_prefix("save ") {
            match engine.save() {
                Ok(bytes) => {
                    fs::write(path.trim(), bytes)
                        .with_context(|| format!("failed to write {}", path.trim()))?;
                    println!("Saved to {}.", path.trim());
                }
                Err(err) => println!("Save failed: {}", err),
            }
            continue;
        }
        if let Some(path) = input.strip_prefix("load ") {
            let loaded = fs::read(path.trim())
                .map_err(|e| e.to_string())
                .and_then(|bytes| {
                    let config = load_config().map_err(|e| e.to_string())?;
                    let client = HttpGeneratorClient::new(config).map_err(|e| e.to_string())?;
                    SessionEngine::load(&bytes, client).map_err(|e| e.to_string())
                });
            match loaded {
                Ok(restored) => {
                    engine = restored;
                    println!("Loaded {}.", path.trim());
                    print_scene(engine.session());
                }
                // Keep the running session when a load fails.
                Err(err) => println!("Load failed: {}", err),
            }
            continue;
        }

        match engine.apply_action(input) {
            TurnOutcome::Advanced => print_scene(engine.session()),
            TurnOutcome::Rejected(_) => {
                if let Some(error) = &engine.session().last_error {
                    println!("{}", error);
                }
            }
            TurnOutcome::Quit => {
                println!("Thanks for playing!");
                break;
            }
        }
    }

    Ok(())
}

fn print_scene(session: &Session) {
    println!();
    println!("{}", session.current_scene.description());
    for option in session.current_scene.options() {
        println!("  {}", option);
    }
    if !session.player.inventory().is_empty() {
        println!("Inventory: [{}]", session.player.inventory().join(", "));
    }
    print!("> ");
    let _ = io::stdout().flush();
}
