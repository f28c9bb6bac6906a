use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tracing::{debug, info};

use crate::domain::snapshot::DraftSnapshot;
use crate::error::{AppError, AppResult};
use crate::services::SnapshotStore;

pub const SNAPSHOT_FILE_NAME: &str = "last_draft.json";

/// Keeps the single last-used snapshot as pretty JSON on disk.
pub struct JsonFileStore {
    file_path: PathBuf,
}

impl JsonFileStore {
    pub fn new(file_path: PathBuf) -> Self {
        Self { file_path }
    }

    pub fn in_dir(dir: &Path) -> Self {
        Self::new(dir.join(SNAPSHOT_FILE_NAME))
    }
}

#[async_trait]
impl SnapshotStore for JsonFileStore {
    async fn load(&self) -> AppResult<Option<DraftSnapshot>> {
        let contents = match fs::read_to_string(&self.file_path).await {
            Ok(contents) => contents,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.file_path.display(), "no saved snapshot");
                return Ok(None);
            }
            Err(err) => return Err(AppError::Io(err)),
        };

        let snapshot = serde_json::from_str::<DraftSnapshot>(&contents)
            .map_err(|err| AppError::Storage(format!("invalid snapshot file: {err}")))?;
        Ok(Some(snapshot))
    }

    async fn save(&self, snapshot: &DraftSnapshot) -> AppResult<()> {
        if let Some(parent) = self.file_path.parent() {
            fs::create_dir_all(parent).await?;
        }
        let data = serde_json::to_string_pretty(snapshot)
            .map_err(|err| AppError::Storage(format!("failed to encode snapshot: {err}")))?;
        fs::write(&self.file_path, data).await?;
        info!(path = %self.file_path.display(), "snapshot saved");
        Ok(())
    }
}
