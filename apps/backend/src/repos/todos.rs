use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// A to-do item owned by one user.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct TodoItem {
    pub id: i64,
    pub task: String,
    pub assigned_to: i64,
    pub is_complete: bool,
}

/// To-do data access.
///
/// Every operation is scoped to `assigned_to`: an item belonging to another
/// user behaves exactly like a missing one. The mutating operations return
/// whether a matching item existed, which the HTTP layer maps to not-found.
/// The in-process implementation lives in `adapters::todos_memory`; a real
/// store plugs in behind this same trait.
#[async_trait]
pub trait TodoData: Send + Sync {
    async fn get_all_assigned(&self, assigned_to: i64) -> Result<Vec<TodoItem>, AppError>;

    async fn get_assigned_by_id(
        &self,
        assigned_to: i64,
        todo_id: i64,
    ) -> Result<Option<TodoItem>, AppError>;

    async fn create(&self, assigned_to: i64, task: &str) -> Result<TodoItem, AppError>;

    async fn update_task(
        &self,
        assigned_to: i64,
        todo_id: i64,
        task: &str,
    ) -> Result<bool, AppError>;

    async fn complete(&self, assigned_to: i64, todo_id: i64) -> Result<bool, AppError>;

    async fn delete(&self, assigned_to: i64, todo_id: i64) -> Result<bool, AppError>;
}
