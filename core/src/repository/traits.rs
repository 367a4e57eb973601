use tracing::{debug, warn};

use crate::error::PersistenceError;
use crate::model::task::Task;
use crate::repository::codec;

/// Durable mirror of the task collection, stored as one serialized document.
///
/// Implementors only move raw documents in and out; encoding, versioning and
/// the fail-open load policy are shared.
pub trait TaskRepository {
    /// Returns `Ok(None)` when nothing has been stored yet.
    fn read(&self) -> Result<Option<String>, PersistenceError>;
    fn write(&mut self, document: &str) -> Result<(), PersistenceError>;

    fn try_load(&self) -> Result<Vec<Task>, PersistenceError> {
        match self.read()? {
            Some(raw) => codec::decode(&raw),
            None => Ok(Vec::new()),
        }
    }

    /// Absent or unreadable state yields an empty collection.
    fn load(&self) -> Vec<Task> {
        match self.try_load() {
            Ok(tasks) => {
                debug!(count = tasks.len(), "loaded tasks");
                tasks
            }
            Err(err) => {
                warn!(error = %err, "ignoring unreadable task storage, starting empty");
                Vec::new()
            }
        }
    }

    /// Overwrites the stored document with the whole collection.
    fn save(&mut self, tasks: &[Task]) -> Result<(), PersistenceError> {
        let document = codec::encode(tasks)?;
        self.write(&document)
    }
}
