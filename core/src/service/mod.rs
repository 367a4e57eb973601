pub mod id_sequence;
pub mod projection;
pub mod task_store;
