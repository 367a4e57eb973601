use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::PersistenceError;
use crate::repository::traits::TaskRepository;

pub const DEFAULT_FILE_NAME: &str = "tasks.json";

#[derive(Debug, Clone)]
pub struct FileTaskRepository {
    file_path: PathBuf,
}

impl FileTaskRepository {
    /// Creates `base_dir` if needed. The file itself is created on first save.
    pub fn new(base_dir: &Path, file_name: &str) -> Result<Self, PersistenceError> {
        fs::create_dir_all(base_dir).map_err(|source| PersistenceError::Io {
            path: base_dir.to_path_buf(),
            source,
        })?;
        Ok(FileTaskRepository {
            file_path: base_dir.join(file_name),
        })
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .file_path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.file_path.with_file_name(name)
    }

    fn io_error(&self, path: &Path, source: io::Error) -> PersistenceError {
        PersistenceError::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    fn write_via(&self, temp: &Path, document: &str) -> Result<(), PersistenceError> {
        let file = File::create(temp).map_err(|e| self.io_error(temp, e))?;
        let mut writer = BufWriter::new(file);
        writer
            .write_all(document.as_bytes())
            .and_then(|_| writer.flush())
            .map_err(|e| self.io_error(temp, e))?;
        writer
            .get_ref()
            .sync_all()
            .map_err(|e| self.io_error(temp, e))?;
        drop(writer);
        fs::rename(temp, &self.file_path).map_err(|e| self.io_error(&self.file_path, e))
    }
}

impl TaskRepository for FileTaskRepository {
    fn read(&self) -> Result<Option<String>, PersistenceError> {
        match fs::read_to_string(&self.file_path) {
            Ok(raw) => Ok(Some(raw)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(self.io_error(&self.file_path, err)),
        }
    }

    // Write-then-rename so an interrupted save never truncates the document.
    fn write(&mut self, document: &str) -> Result<(), PersistenceError> {
        let temp = self.temp_path();
        let result = self.write_via(&temp, document);
        if result.is_err() {
            let _ = fs::remove_file(&temp);
        }
        result
    }
}
