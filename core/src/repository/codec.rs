//! On-disk document format.
//!
//! Version 1 wraps the task list in an envelope:
//! `{"version": 1, "tasks": [{"id": .., "text": .., "completed": ..}]}`.
//! A bare array (version 0) is still accepted and gets upgraded on the next save.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::error::PersistenceError;
use crate::model::task::Task;

pub const CURRENT_VERSION: u32 = 1;

#[derive(Serialize)]
struct Envelope<'a> {
    version: u32,
    tasks: &'a [Task],
}

#[derive(Deserialize)]
struct RawEnvelope {
    version: u32,
    #[serde(default)]
    tasks: Value,
}

pub fn encode(tasks: &[Task]) -> Result<String, PersistenceError> {
    let envelope = Envelope {
        version: CURRENT_VERSION,
        tasks,
    };
    serde_json::to_string_pretty(&envelope).map_err(PersistenceError::Encode)
}

pub fn decode(raw: &str) -> Result<Vec<Task>, PersistenceError> {
    let value: Value = serde_json::from_str(raw).map_err(PersistenceError::Decode)?;

    let tasks: Vec<Task> = match value {
        Value::Null => Vec::new(),
        Value::Array(items) => {
            serde_json::from_value(Value::Array(items)).map_err(PersistenceError::Decode)?
        }
        Value::Object(map) => {
            let envelope: RawEnvelope =
                serde_json::from_value(Value::Object(map)).map_err(PersistenceError::Decode)?;
            if envelope.version > CURRENT_VERSION {
                return Err(PersistenceError::UnsupportedVersion {
                    found: envelope.version,
                    supported: CURRENT_VERSION,
                });
            }
            match envelope.tasks {
                Value::Null => Vec::new(),
                tasks => serde_json::from_value(tasks).map_err(PersistenceError::Decode)?,
            }
        }
        other => {
            return Err(PersistenceError::Decode(serde::de::Error::custom(format!(
                "expected a task list, found {}",
                kind_of(&other)
            ))))
        }
    };

    Ok(dedupe(tasks))
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

// First occurrence of an id wins.
fn dedupe(tasks: Vec<Task>) -> Vec<Task> {
    let mut seen = HashSet::with_capacity(tasks.len());
    tasks
        .into_iter()
        .filter(|task| {
            let fresh = seen.insert(task.id);
            if !fresh {
                warn!(id = %task.id, "dropping stored task with duplicate id");
            }
            fresh
        })
        .collect()
}
