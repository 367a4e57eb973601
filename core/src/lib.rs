pub mod config;
pub mod controller;
pub mod error;
pub mod model;
pub mod repository;
pub mod service;

pub use config::{resolve_data_dir, Config};
pub use controller::{Controller, Intent, Notice};
pub use error::{ConfigError, PersistenceError, TaskError};
pub use model::filter::FilterMode;
pub use model::task::{Task, TaskId};
pub use repository::{FileTaskRepository, InMemoryTaskRepository, TaskRepository};
pub use service::projection::project;
pub use service::task_store::{Committed, TaskStore};
