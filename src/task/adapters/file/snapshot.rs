//! JSON file snapshot repository backed by a capability-scoped directory.

use async_trait::async_trait;
use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use std::io::{self, Write};
use std::sync::Arc;

use crate::task::{
    domain::StoreSnapshot,
    ports::{SnapshotRepository, SnapshotRepositoryError, SnapshotRepositoryResult},
};

/// File name used when none is configured.
pub const DEFAULT_SNAPSHOT_FILE: &str = "data.json";

const TEMP_SUFFIX: &str = ".tmp";

/// Stores the board as indented UTF-8 JSON in a single file.
///
/// Writes go to a sibling temporary file which is then renamed over the
/// snapshot, so readers see either the old or the new contents.
#[derive(Debug, Clone)]
pub struct JsonFileSnapshotRepository {
    dir: Arc<Dir>,
    file_name: String,
    temp_name: String,
}

impl JsonFileSnapshotRepository {
    /// Opens `data_dir`, creating it when absent, and stores snapshots in
    /// `file_name` inside it.
    ///
    /// # Errors
    ///
    /// Returns an I/O error when the directory cannot be created or opened.
    pub fn open(data_dir: &Utf8Path, file_name: impl Into<String>) -> io::Result<Self> {
        Dir::create_ambient_dir_all(data_dir, ambient_authority())?;
        let dir = Dir::open_ambient_dir(data_dir, ambient_authority())?;
        Ok(Self::from_dir(dir, file_name))
    }

    /// Stores snapshots in `file_name` inside an already opened directory.
    #[must_use]
    pub fn from_dir(dir: Dir, file_name: impl Into<String>) -> Self {
        let name = file_name.into();
        Self {
            dir: Arc::new(dir),
            temp_name: format!("{name}{TEMP_SUFFIX}"),
            file_name: name,
        }
    }

    /// Returns the snapshot file name.
    #[must_use]
    pub fn file_name(&self) -> &str {
        &self.file_name
    }
}

fn read_snapshot(dir: &Dir, file_name: &str) -> SnapshotRepositoryResult<Option<StoreSnapshot>> {
    let contents = match dir.read_to_string(file_name) {
        Ok(contents) => contents,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(err) => return Err(SnapshotRepositoryError::persistence(err)),
    };
    serde_json::from_str(&contents)
        .map(Some)
        .map_err(SnapshotRepositoryError::malformed)
}

fn write_snapshot(dir: &Dir, file_name: &str, temp_name: &str, contents: &str) -> io::Result<()> {
    let mut file = dir.create(temp_name)?;
    file.write_all(contents.as_bytes())?;
    file.sync_all()?;
    drop(file);
    dir.rename(temp_name, dir, file_name)
}

fn join_error(err: &tokio::task::JoinError) -> SnapshotRepositoryError {
    SnapshotRepositoryError::persistence(io::Error::other(err.to_string()))
}

#[async_trait]
impl SnapshotRepository for JsonFileSnapshotRepository {
    async fn load(&self) -> SnapshotRepositoryResult<Option<StoreSnapshot>> {
        let dir = Arc::clone(&self.dir);
        let file_name = self.file_name.clone();
        tokio::task::spawn_blocking(move || read_snapshot(&dir, &file_name))
            .await
            .map_err(|err| join_error(&err))?
    }

    async fn save(&self, snapshot: &StoreSnapshot) -> SnapshotRepositoryResult<()> {
        let contents =
            serde_json::to_string_pretty(snapshot).map_err(SnapshotRepositoryError::persistence)?;
        let dir = Arc::clone(&self.dir);
        let file_name = self.file_name.clone();
        let temp_name = self.temp_name.clone();
        tokio::task::spawn_blocking(move || {
            write_snapshot(&dir, &file_name, &temp_name, &contents)
        })
        .await
        .map_err(|err| join_error(&err))?
        .map_err(SnapshotRepositoryError::persistence)
    }
}
