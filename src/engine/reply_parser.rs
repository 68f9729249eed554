use serde_json::Value;

use crate::model::reply::{GeneratorReply, ItemDelta};
use crate::model::scene::QUIT_OPTION;

/// How a raw generator reply failed validation. Both kinds abort the
/// turn the same way; the split exists so the failure is diagnosable.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("generator output is not valid JSON: {0}")]
    MalformedJson(String),
    #[error("generator reply violates the contract at '{field}': {problem}")]
    ContractViolation {
        field: &'static str,
        problem: String,
    },
}

fn violation(field: &'static str, problem: impl Into<String>) -> ParseError {
    ParseError::ContractViolation {
        field,
        problem: problem.into(),
    }
}

/// Validates raw generator text against the reply contract.
/// Pure transform: strips formatting artifacts, parses, checks every
/// field, and either yields a complete typed reply or a failure,
/// never a partial result. No Session access here.
pub fn parse_reply(raw: &str) -> Result<GeneratorReply, ParseError> {
    let cleaned = strip_code_fences(raw);

    let value: Value = serde_json::from_str(&cleaned)
        .map_err(|e| ParseError::MalformedJson(e.to_string()))?;
    let Value::Object(fields) = value else {
        return Err(ParseError::MalformedJson("expected a JSON object".into()));
    };

    let description = fields
        .get("description")
        .and_then(Value::as_str)
        .ok_or_else(|| violation("description", "missing or not a string"))?;
    if description.trim().is_empty() {
        return Err(violation("description", "must not be empty"));
    }

    let options = parse_options(fields.get("options"))?;
    let deltas = parse_deltas(fields.get("inventoryUpdates"))?;

    Ok(GeneratorReply {
        description: description.to_string(),
        options,
        deltas,
    })
}

fn parse_options(value: Option<&Value>) -> Result<Vec<String>, ParseError> {
    let entries = value
        .and_then(Value::as_array)
        .ok_or_else(|| violation("options", "missing or not an array"))?;

    if !(2..=3).contains(&entries.len()) {
        return Err(violation(
            "options",
            format!("expected 2-3 entries, got {}", entries.len()),
        ));
    }

    let mut options = Vec::with_capacity(entries.len());
    for entry in entries {
        let Some(option) = entry.as_str() else {
            return Err(violation("options", "entries must be strings"));
        };
        if option.trim().is_empty() {
            return Err(violation("options", "entries must not be empty"));
        }
        options.push(option.to_string());
    }

    if !options.iter().any(|o| o == QUIT_OPTION) {
        return Err(violation(
            "options",
            format!("must include the quit directive '{}'", QUIT_OPTION),
        ));
    }

    Ok(options)
}

// An absent inventoryUpdates field means "no changes", not an error.
fn parse_deltas(value: Option<&Value>) -> Result<Vec<ItemDelta>, ParseError> {
    let Some(value) = value else {
        return Ok(Vec::new());
    };
    if value.is_null() {
        return Ok(Vec::new());
    }

    let entries = value
        .as_array()
        .ok_or_else(|| violation("inventoryUpdates", "must be an array"))?;

    let mut deltas = Vec::with_capacity(entries.len());
    for entry in entries {
        let Some(entry) = entry.as_str() else {
            return Err(violation("inventoryUpdates", "entries must be strings"));
        };
        deltas.push(ItemDelta::from_wire(entry));
    }

    Ok(deltas)
}

/// Generators love to wrap JSON in fenced code blocks. Drop the fence
/// markers and the json language tag, keep everything else.
fn strip_code_fences(raw: &str) -> String {
    raw.replace("```json", "").replace("```", "").trim().to_string()
}
