use std::sync::Arc;

use kanban_db::board::{BoardService, PgBoard, ProjectStore};
use kanban_db::memory::MemoryBoard;
use kanban_db::DbPool;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Column persistence and board ordering.
    pub board: Arc<dyn BoardService>,
    /// Project lookup for the project context extractor.
    pub projects: Arc<dyn ProjectStore>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// State backed by PostgreSQL.
    pub fn postgres(pool: DbPool, config: ServerConfig) -> Self {
        let board = Arc::new(PgBoard::new(pool));
        Self {
            board: board.clone(),
            projects: board,
            config: Arc::new(config),
        }
    }

    /// State backed by an in-process board. Nothing survives a restart.
    pub fn in_memory(config: ServerConfig) -> Self {
        let board = Arc::new(MemoryBoard::new());
        Self {
            board: board.clone(),
            projects: board,
            config: Arc::new(config),
        }
    }
}
