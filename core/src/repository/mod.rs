pub mod codec;
pub mod file;
pub mod memory;
pub mod traits;

pub use file::FileTaskRepository;
pub use memory::InMemoryTaskRepository;
pub use traits::TaskRepository;
