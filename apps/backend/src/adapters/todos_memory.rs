use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::error::AppError;
use crate::repos::todos::{TodoData, TodoItem};

/// In-process `TodoData` backed by a `HashMap`.
pub struct InMemoryTodoData {
    items: RwLock<HashMap<i64, TodoItem>>,
    next_id: AtomicI64,
}

impl InMemoryTodoData {
    pub fn new() -> Self {
        Self {
            items: RwLock::new(HashMap::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

impl Default for InMemoryTodoData {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TodoData for InMemoryTodoData {
    async fn get_all_assigned(&self, assigned_to: i64) -> Result<Vec<TodoItem>, AppError> {
        let items = self.items.read();
        let mut assigned: Vec<TodoItem> = items
            .values()
            .filter(|item| item.assigned_to == assigned_to)
            .cloned()
            .collect();
        assigned.sort_by_key(|item| item.id);
        Ok(assigned)
    }

    async fn get_assigned_by_id(
        &self,
        assigned_to: i64,
        todo_id: i64,
    ) -> Result<Option<TodoItem>, AppError> {
        let items = self.items.read();
        Ok(items
            .get(&todo_id)
            .filter(|item| item.assigned_to == assigned_to)
            .cloned())
    }

    async fn create(&self, assigned_to: i64, task: &str) -> Result<TodoItem, AppError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let item = TodoItem {
            id,
            task: task.to_string(),
            assigned_to,
            is_complete: false,
        };
        self.items.write().insert(id, item.clone());
        Ok(item)
    }

    async fn update_task(
        &self,
        assigned_to: i64,
        todo_id: i64,
        task: &str,
    ) -> Result<bool, AppError> {
        let mut items = self.items.write();
        match items
            .get_mut(&todo_id)
            .filter(|item| item.assigned_to == assigned_to)
        {
            Some(item) => {
                item.task = task.to_string();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn complete(&self, assigned_to: i64, todo_id: i64) -> Result<bool, AppError> {
        let mut items = self.items.write();
        match items
            .get_mut(&todo_id)
            .filter(|item| item.assigned_to == assigned_to)
        {
            Some(item) => {
                item.is_complete = true;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, assigned_to: i64, todo_id: i64) -> Result<bool, AppError> {
        let mut items = self.items.write();
        let owned = items
            .get(&todo_id)
            .is_some_and(|item| item.assigned_to == assigned_to);
        if owned {
            items.remove(&todo_id);
        }
        Ok(owned)
    }
}
