use taskboard_core::{TaskboardError, TaskboardResult};
use taskboard_domain::Board;
use taskboard_persistence::{BoardFileStore, PersistenceStore};

/// Owns the load → mutate → save lifecycle around one board file. Every
/// command loads a snapshot, applies pure board operations, and persists
/// the result before exiting.
pub struct CliContext {
    pub board: Board,
    store: BoardFileStore,
}

impl CliContext {
    pub async fn load(file_path: &str) -> TaskboardResult<Self> {
        let store = BoardFileStore::new(file_path);
        if !store.exists().await {
            return Err(TaskboardError::NotFound(format!(
                "board file {file_path} does not exist; run `taskboard board init` first"
            )));
        }
        let (board, _metadata) = store.load().await?;
        Ok(Self { board, store })
    }

    /// Context for a board that does not exist on disk yet.
    pub fn create(file_path: &str, board: Board) -> Self {
        Self {
            board,
            store: BoardFileStore::new(file_path),
        }
    }

    /// Replace the working snapshot with the result of a board operation.
    pub fn apply(&mut self, next: Board) {
        self.board = next;
    }

    pub async fn save(&self) -> TaskboardResult<()> {
        self.store.save(&self.board).await?;
        Ok(())
    }
}
