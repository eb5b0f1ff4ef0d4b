//! File-backed Repository
//!
//! Stands in for a file-backed repository: one JSON file per entity, named
//! after its identity, inside a root directory. I/O errors are mapped to
//! `Unavailable`, except `ErrorKind::NotFound` which maps to `NotFound` so
//! an absent file is never conflated with a transport failure.
//!
//! Performs blocking file I/O with no internal locking beyond what the
//! filesystem itself provides, so concurrent writers to the same identity
//! race at the OS level. Callers needing stronger guarantees should
//! serialize access externally.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::domain::entities::Identifiable;
use crate::domain::ports::Repository;
use crate::error::{RepositoryError, RepositoryResult};

/// A `Repository` backed by one JSON file per entity under `root`.
pub struct FileRepository<E> {
    root: PathBuf,
    _marker: std::marker::PhantomData<E>,
}

impl<E> FileRepository<E> {
    /// Use `root` as the directory holding one `<id>.json` file per entity.
    /// The directory is created if it does not already exist.
    pub fn new(root: impl Into<PathBuf>) -> io::Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self {
            root,
            _marker: std::marker::PhantomData,
        })
    }

    fn path_for(&self, id: &str) -> PathBuf {
        self.root.join(format!("{id}.json"))
    }

    fn map_io_err(err: io::Error) -> RepositoryError {
        match err.kind() {
            io::ErrorKind::NotFound => RepositoryError::NotFound,
            _ => RepositoryError::Unavailable(err.to_string()),
        }
    }
}

impl<E> Repository<E> for FileRepository<E>
where
    E: Identifiable + Serialize + DeserializeOwned,
{
    fn find(&self, id: &str) -> RepositoryResult<E> {
        let content = fs::read_to_string(self.path_for(id)).map_err(Self::map_io_err)?;
        serde_json::from_str(&content)
            .map_err(|err| RepositoryError::Unavailable(format!("corrupt record: {err}")))
    }

    fn save(&self, entity: &E) -> RepositoryResult<()> {
        let path = self.path_for(entity.id());
        if path.exists() {
            return Err(RepositoryError::Conflict(format!(
                "entity '{}' already exists",
                entity.id()
            )));
        }
        write_json(&path, entity)
    }

    fn update(&self, entity: &E) -> RepositoryResult<()> {
        let path = self.path_for(entity.id());
        if !path.exists() {
            return Err(RepositoryError::NotFound);
        }
        write_json(&path, entity)
    }

    fn delete(&self, id: &str) -> RepositoryResult<()> {
        fs::remove_file(self.path_for(id)).map_err(Self::map_io_err)
    }
}

fn write_json<E: Serialize>(path: &Path, entity: &E) -> RepositoryResult<()> {
    let content = serde_json::to_string_pretty(entity)
        .map_err(|err| RepositoryError::Unavailable(format!("failed to encode record: {err}")))?;
    fs::write(path, content).map_err(|err| RepositoryError::Unavailable(err.to_string()))
}
