use crate::error::PersistenceError;
use crate::repository::traits::TaskRepository;

/// Keeps the serialized document in memory. Saves can be made to fail,
/// which stands in for a full or revoked backing store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    document: Option<String>,
    failure: Option<String>,
    writes: usize,
}

impl InMemoryTaskRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_document(document: impl Into<String>) -> Self {
        Self {
            document: Some(document.into()),
            ..Self::default()
        }
    }

    pub fn document(&self) -> Option<&str> {
        self.document.as_deref()
    }

    /// Number of successful writes so far.
    pub fn writes(&self) -> usize {
        self.writes
    }

    pub fn fail_writes(&mut self, reason: impl Into<String>) {
        self.failure = Some(reason.into());
    }

    pub fn restore_writes(&mut self) {
        self.failure = None;
    }
}

impl TaskRepository for InMemoryTaskRepository {
    fn read(&self) -> Result<Option<String>, PersistenceError> {
        Ok(self.document.clone())
    }

    fn write(&mut self, document: &str) -> Result<(), PersistenceError> {
        if let Some(reason) = &self.failure {
            return Err(PersistenceError::Unavailable(reason.clone()));
        }
        self.document = Some(document.to_string());
        self.writes += 1;
        Ok(())
    }
}
