use std::collections::HashMap;

use tracing::{debug, warn};

use crate::error::{PersistenceError, TaskError};
use crate::model::task::{is_blank, Task, TaskId};
use crate::repository::TaskRepository;
use crate::service::id_sequence::{Clock, IdSequence};

/// Result of a mutation that has been applied in memory.
///
/// `persist_error` is set when the follow-up save failed. The mutation is kept
/// either way.
#[derive(Debug)]
pub struct Committed<T> {
    pub value: T,
    pub persist_error: Option<PersistenceError>,
}

impl<T> Committed<T> {
    pub fn is_durable(&self) -> bool {
        self.persist_error.is_none()
    }

    pub fn into_value(self) -> T {
        self.value
    }
}

/// Owns the task collection and is the only thing that mutates it.
/// Every successful mutation is written through `repo` before returning.
pub struct TaskStore<R: TaskRepository> {
    repo: R,
    tasks: Vec<Task>,
    index: HashMap<TaskId, usize>,
    ids: IdSequence,
}

impl<R: TaskRepository> TaskStore<R> {
    /// Loads whatever `repo` holds; unreadable state starts empty.
    pub fn open(repo: R) -> Self {
        let tasks = repo.load();
        let floor = max_id(&tasks);
        Self::from_parts(repo, tasks, IdSequence::new(floor))
    }

    pub fn open_with_clock(repo: R, clock: Clock) -> Self {
        let tasks = repo.load();
        let floor = max_id(&tasks);
        Self::from_parts(repo, tasks, IdSequence::with_clock(floor, clock))
    }

    fn from_parts(repo: R, tasks: Vec<Task>, ids: IdSequence) -> Self {
        let mut store = Self {
            repo,
            tasks,
            index: HashMap::new(),
            ids,
        };
        store.reindex();
        store
    }

    pub fn add(&mut self, raw_text: &str) -> Result<Committed<Task>, TaskError> {
        if is_blank(raw_text) {
            return Err(TaskError::EmptyText);
        }

        let id = self.ids.next_id().ok_or(TaskError::IdsExhausted)?;
        let task = Task::new(id, raw_text);
        self.index.insert(task.id, self.tasks.len());
        self.tasks.push(task.clone());
        debug!(id = %task.id, "task added");

        Ok(self.commit(task))
    }

    pub fn update_text(&mut self, id: TaskId, raw_text: &str) -> Result<Committed<Task>, TaskError> {
        if is_blank(raw_text) {
            return Err(TaskError::EmptyText);
        }

        let pos = self.position(id)?;
        let task = &mut self.tasks[pos];
        task.text = raw_text.to_string();
        let updated = task.clone();
        debug!(%id, "task text updated");

        Ok(self.commit(updated))
    }

    pub fn toggle_complete(&mut self, id: TaskId) -> Result<Committed<Task>, TaskError> {
        let pos = self.position(id)?;
        let task = &mut self.tasks[pos];
        task.completed = !task.completed;
        let toggled = task.clone();
        debug!(%id, completed = toggled.completed, "task toggled");

        Ok(self.commit(toggled))
    }

    pub fn delete(&mut self, id: TaskId) -> Result<Committed<()>, TaskError> {
        let pos = self.position(id)?;
        self.tasks.remove(pos);
        self.reindex();
        debug!(%id, "task deleted");

        Ok(self.commit(()))
    }

    /// Insertion-ordered snapshot.
    pub fn all(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.index.get(&id).map(|&pos| &self.tasks[pos])
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    pub fn repository_mut(&mut self) -> &mut R {
        &mut self.repo
    }

    fn position(&self, id: TaskId) -> Result<usize, TaskError> {
        self.index.get(&id).copied().ok_or(TaskError::NotFound(id))
    }

    fn reindex(&mut self) {
        self.index = self
            .tasks
            .iter()
            .enumerate()
            .map(|(pos, task)| (task.id, pos))
            .collect();
    }

    fn commit<T>(&mut self, value: T) -> Committed<T> {
        let persist_error = match self.repo.save(&self.tasks) {
            Ok(()) => None,
            Err(err) => {
                warn!(error = %err, "failed to persist tasks, keeping in-memory state");
                Some(err)
            }
        };
        Committed {
            value,
            persist_error,
        }
    }
}

fn max_id(tasks: &[Task]) -> u64 {
    tasks.iter().map(|t| t.id.0).max().unwrap_or(0)
}
