use crate::traits::{PersistenceMetadata, PersistenceStore, FORMAT_VERSION};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use taskboard_core::{TaskboardError, TaskboardResult};
use taskboard_domain::Board;
use tokio::fs;
use uuid::Uuid;

/// JSON file-backed store for a single board document.
#[derive(Debug, Clone)]
pub struct BoardFileStore {
    path: PathBuf,
    instance_id: Uuid,
}

/// On-disk wrapper around the board document.
#[derive(Debug, Serialize, Deserialize)]
struct JsonEnvelope {
    version: u32,
    metadata: PersistenceMetadata,
    board: Board,
}

impl BoardFileStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            instance_id: Uuid::new_v4(),
        }
    }

    pub fn instance_id(&self) -> Uuid {
        self.instance_id
    }

    /// Write-to-temp-then-rename keeps a crash mid-write from corrupting
    /// the board file. The temp file lives in the target directory so the
    /// rename stays on one filesystem.
    async fn write_atomic(&self, data: &[u8]) -> TaskboardResult<()> {
        let parent = self.path.parent().unwrap_or_else(|| Path::new("."));
        let temp_file = tempfile::NamedTempFile::new_in(parent)?;
        let temp_path = temp_file.path().to_path_buf();

        fs::write(&temp_path, data).await?;
        fs::rename(&temp_path, &self.path).await?;

        tracing::debug!(
            "atomically wrote {} bytes to {}",
            data.len(),
            self.path.display()
        );
        Ok(())
    }
}

#[async_trait::async_trait]
impl PersistenceStore for BoardFileStore {
    async fn save(&self, board: &Board) -> TaskboardResult<PersistenceMetadata> {
        let metadata = PersistenceMetadata::new(self.instance_id);
        let envelope = JsonEnvelope {
            version: FORMAT_VERSION,
            metadata: metadata.clone(),
            board: board.clone(),
        };

        let bytes = serde_json::to_vec_pretty(&envelope)
            .map_err(|e| TaskboardError::Serialization(e.to_string()))?;
        self.write_atomic(&bytes).await?;

        tracing::info!(
            "saved board {} ({} bytes) to {}",
            board.id,
            bytes.len(),
            self.path.display()
        );
        Ok(metadata)
    }

    async fn load(&self) -> TaskboardResult<(Board, PersistenceMetadata)> {
        let bytes = fs::read(&self.path).await?;
        let envelope: JsonEnvelope = serde_json::from_slice(&bytes)
            .map_err(|e| TaskboardError::Serialization(e.to_string()))?;

        if envelope.version != FORMAT_VERSION {
            return Err(TaskboardError::Serialization(format!(
                "unsupported format version: {}",
                envelope.version
            )));
        }

        tracing::debug!(
            "loaded board {} from {}",
            envelope.board.id,
            self.path.display()
        );
        Ok((envelope.board, envelope.metadata))
    }

    async fn exists(&self) -> bool {
        self.path.exists()
    }

    fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use taskboard_domain::Task;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_save_and_load_round_trip() {
        let dir = tempdir().unwrap();
        let store = BoardFileStore::new(dir.path().join("board.json"));

        let board = Board::new("Persisted".to_string(), "kept on disk".to_string());
        let todo = board.statuses[0].id;
        let board = board.add_task(
            Task::new("Survives restarts".to_string(), String::new(), todo).unwrap(),
        );

        let metadata = store.save(&board).await.unwrap();
        assert_eq!(metadata.format_version, FORMAT_VERSION);
        assert_eq!(metadata.instance_id, store.instance_id());

        let (loaded, loaded_metadata) = store.load().await.unwrap();
        assert_eq!(loaded.id, board.id);
        assert_eq!(loaded.name, "Persisted");
        assert_eq!(loaded.tasks.len(), 1);
        assert_eq!(loaded.statuses.len(), 4);
        assert_eq!(loaded_metadata.instance_id, store.instance_id());
    }

    #[tokio::test]
    async fn test_exists_tracks_the_file() {
        let dir = tempdir().unwrap();
        let store = BoardFileStore::new(dir.path().join("missing.json"));
        assert!(!store.exists().await);

        let board = Board::new("Now present".to_string(), String::new());
        store.save(&board).await.unwrap();
        assert!(store.exists().await);
    }

    #[tokio::test]
    async fn test_save_overwrites_previous_snapshot() {
        let dir = tempdir().unwrap();
        let store = BoardFileStore::new(dir.path().join("board.json"));

        let board = Board::new("First".to_string(), String::new());
        store.save(&board).await.unwrap();

        let renamed = board.update_column(
            board.statuses[0].id,
            taskboard_domain::StatusUpdate {
                name: Some("Backlog".to_string()),
                color: None,
            },
        );
        store.save(&renamed).await.unwrap();

        let (loaded, _) = store.load().await.unwrap();
        assert_eq!(loaded.statuses[0].name, "Backlog");
    }

    #[tokio::test]
    async fn test_load_rejects_unknown_version() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("board.json");
        let store = BoardFileStore::new(&path);

        let board = Board::new("Versioned".to_string(), String::new());
        store.save(&board).await.unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        let mut value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        value["version"] = serde_json::json!(99);
        std::fs::write(&path, serde_json::to_vec(&value).unwrap()).unwrap();

        let err = store.load().await.unwrap_err();
        assert!(matches!(err, TaskboardError::Serialization(_)));
    }
}
