use taskd_model::{CreateTask, Task, TaskId, UpdateTask};
use time::OffsetDateTime;
use tracing::debug;

use crate::{error::CoreError, store::TaskStore};

/// The five task operations and their consistency rules, layered over a
/// [`TaskStore`].
///
/// Validation runs before anything reaches the store, so every task
/// reachable through this service satisfies the title constraint.
pub struct TaskService {
    store: TaskStore,
}

impl TaskService {
    pub fn new() -> Self {
        Self {
            store: TaskStore::new(),
        }
    }

    /// Build a service over an existing store handle.
    pub fn with_store(store: TaskStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    /// Create a new task from a validated payload.
    ///
    /// Mints a fresh id, sets `is_done = false`, and stamps both timestamps
    /// from a single clock read so `created_at == last_updated_at`.
    pub fn create(&self, payload: CreateTask) -> Result<Task, CoreError> {
        payload.validate()?;

        let now = OffsetDateTime::now_utc();
        let task = Task {
            id: TaskId::generate(),
            title: payload.title,
            is_done: false,
            created_at: now,
            last_updated_at: now,
        };

        self.store.insert(task.clone());
        debug!(id = %task.id, "task created");
        Ok(task)
    }

    /// Look up a task by id. No side effects.
    pub fn get(&self, id: &TaskId) -> Option<Task> {
        self.store.get(id)
    }

    /// Every task currently stored, possibly empty. No side effects.
    pub fn list(&self) -> Vec<Task> {
        self.store.list_all()
    }

    /// Partially update an existing task.
    ///
    /// Only supplied fields change; `last_updated_at` is refreshed even when
    /// the payload carries no fields at all. `id` and `created_at` are never
    /// touched.
    pub fn update(&self, id: &TaskId, payload: UpdateTask) -> Result<Task, CoreError> {
        payload.validate()?;

        let mut task = self
            .store
            .get(id)
            .ok_or_else(|| CoreError::NotFound(id.clone()))?;

        if let Some(title) = payload.title {
            task.title = title;
        }
        if let Some(is_done) = payload.is_done {
            task.is_done = is_done;
        }
        task.last_updated_at = OffsetDateTime::now_utc();

        self.store.insert(task.clone());
        debug!(id = %task.id, "task updated");
        Ok(task)
    }

    /// Remove a task permanently. A second delete of the same id is
    /// NotFound, not success.
    pub fn delete(&self, id: &TaskId) -> Result<(), CoreError> {
        match self.store.remove(id) {
            Some(_) => {
                debug!(%id, "task deleted");
                Ok(())
            }
            None => Err(CoreError::NotFound(id.clone())),
        }
    }
}

impl Default for TaskService {
    fn default() -> Self {
        Self::new()
    }
}
