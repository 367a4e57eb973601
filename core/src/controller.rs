//! Headless half of the presentation layer.
//!
//! Front ends translate user actions into [`Intent`]s, hand them to
//! [`Controller::dispatch`], then redraw from [`Controller::visible`] and
//! [`Controller::notice`].

use tracing::info;

use crate::error::TaskError;
use crate::model::filter::FilterMode;
use crate::model::task::{Task, TaskId};
use crate::repository::TaskRepository;
use crate::service::projection::project;
use crate::service::task_store::{Committed, TaskStore};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    Add(String),
    Update(TaskId, String),
    Toggle(TaskId),
    Delete(TaskId),
    SetFilter(FilterMode),
}

/// Message shown to the user until the next successful operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Error(String),
    Warning(String),
}

impl Notice {
    pub fn message(&self) -> &str {
        match self {
            Notice::Error(msg) | Notice::Warning(msg) => msg,
        }
    }
}

pub struct Controller<R: TaskRepository> {
    store: TaskStore<R>,
    filter: FilterMode,
    notice: Option<Notice>,
}

impl<R: TaskRepository> Controller<R> {
    pub fn new(store: TaskStore<R>, filter: FilterMode) -> Self {
        info!(tasks = store.len(), filter = %filter, "controller ready");
        Self {
            store,
            filter,
            notice: None,
        }
    }

    /// Applies `intent` and updates the notice.
    ///
    /// Returns the affected task for add, update and toggle.
    pub fn dispatch(&mut self, intent: Intent) -> Result<Option<Task>, TaskError> {
        let result = match intent {
            Intent::Add(text) => self.store.add(&text).map(|c| Some(self.settle(c))),
            Intent::Update(id, text) => self
                .store
                .update_text(id, &text)
                .map(|c| Some(self.settle(c))),
            Intent::Toggle(id) => self.store.toggle_complete(id).map(|c| Some(self.settle(c))),
            Intent::Delete(id) => self.store.delete(id).map(|c| {
                self.settle(c);
                None
            }),
            Intent::SetFilter(mode) => {
                self.filter = mode;
                self.notice = None;
                Ok(None)
            }
        };

        match result {
            Ok(value) => Ok(value),
            Err(err) => {
                self.notice = Some(Notice::Error(err.to_string()));
                Err(err)
            }
        }
    }

    /// Tasks under the active filter, in insertion order.
    pub fn visible(&self) -> Vec<&Task> {
        project(self.store.all(), self.filter)
    }

    pub fn filter(&self) -> FilterMode {
        self.filter
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn store(&self) -> &TaskStore<R> {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut TaskStore<R> {
        &mut self.store
    }

    fn settle<T>(&mut self, committed: Committed<T>) -> T {
        self.notice = committed
            .persist_error
            .map(|err| Notice::Warning(format!("Could not save tasks: {err}")));
        committed.value
    }
}
