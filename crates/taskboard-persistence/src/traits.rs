use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;
use taskboard_core::TaskboardResult;
use taskboard_domain::Board;
use uuid::Uuid;

/// Version of the on-disk envelope.
pub const FORMAT_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersistenceMetadata {
    pub format_version: u32,
    /// Identifies which store instance performed the save.
    pub instance_id: Uuid,
    pub saved_at: DateTime<Utc>,
}

impl PersistenceMetadata {
    pub fn new(instance_id: Uuid) -> Self {
        Self {
            format_version: FORMAT_VERSION,
            instance_id,
            saved_at: Utc::now(),
        }
    }
}

/// Abstract storage for a single board document.
#[async_trait]
pub trait PersistenceStore: Send + Sync {
    /// Persist the board, returning the metadata recorded alongside it.
    async fn save(&self, board: &Board) -> TaskboardResult<PersistenceMetadata>;

    /// Load the board and the metadata of its last save.
    async fn load(&self) -> TaskboardResult<(Board, PersistenceMetadata)>;

    async fn exists(&self) -> bool;

    fn path(&self) -> &Path;
}
