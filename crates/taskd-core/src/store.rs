use std::{
    collections::HashMap,
    sync::{Arc, RwLock},
};

use taskd_model::{Task, TaskId};

/// In-memory task storage.
///
/// The authoritative set of task records for the process lifetime. Cloning
/// the handle is cheap and shares the underlying map; every access goes
/// through the lock, the raw map is never handed out. Nothing is persisted;
/// state is discarded when the process exits.
#[derive(Clone)]
pub struct TaskStore {
    inner: Arc<RwLock<HashMap<TaskId, Task>>>,
}

impl TaskStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Get a task by id, `None` if absent.
    pub fn get(&self, id: &TaskId) -> Option<Task> {
        let inner = self.inner.read().unwrap();
        inner.get(id).cloned()
    }

    /// Insert or overwrite the record under the task's own id.
    pub fn insert(&self, task: Task) {
        let mut inner = self.inner.write().unwrap();
        inner.insert(task.id.clone(), task);
    }

    /// Remove a task permanently. Returns the removed record, `None` if the
    /// id was absent.
    pub fn remove(&self, id: &TaskId) -> Option<Task> {
        let mut inner = self.inner.write().unwrap();
        inner.remove(id)
    }

    /// Every stored task. No ordering contract beyond what the underlying
    /// map yields.
    pub fn list_all(&self) -> Vec<Task> {
        let inner = self.inner.read().unwrap();
        inner.values().cloned().collect()
    }

    pub fn len(&self) -> usize {
        let inner = self.inner.read().unwrap();
        inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::OffsetDateTime;

    fn task(id: &str, title: &str) -> Task {
        let now = OffsetDateTime::now_utc();
        Task {
            id: TaskId::from(id),
            title: title.to_string(),
            is_done: false,
            created_at: now,
            last_updated_at: now,
        }
    }

    #[test]
    fn insert_and_get() {
        let store = TaskStore::new();
        store.insert(task("task-1", "first"));

        let found = store.get(&TaskId::from("task-1")).expect("task should exist");
        assert_eq!(found.title, "first");
    }

    #[test]
    fn get_missing_returns_none() {
        let store = TaskStore::new();
        assert!(store.get(&TaskId::from("nope")).is_none());
    }

    #[test]
    fn insert_overwrites_existing_record() {
        let store = TaskStore::new();
        store.insert(task("task-1", "before"));
        store.insert(task("task-1", "after"));

        assert_eq!(store.len(), 1);
        let found = store.get(&TaskId::from("task-1")).unwrap();
        assert_eq!(found.title, "after");
    }

    #[test]
    fn remove_deletes_permanently() {
        let store = TaskStore::new();
        store.insert(task("task-1", "first"));

        let removed = store.remove(&TaskId::from("task-1"));
        assert!(removed.is_some());
        assert!(store.get(&TaskId::from("task-1")).is_none());

        // Second removal of the same id finds nothing.
        assert!(store.remove(&TaskId::from("task-1")).is_none());
    }

    #[test]
    fn list_all_returns_every_task() {
        let store = TaskStore::new();
        store.insert(task("task-1", "a"));
        store.insert(task("task-2", "b"));
        store.insert(task("task-3", "c"));

        let all = store.list_all();
        assert_eq!(all.len(), 3);
    }

    #[test]
    fn empty_store_lists_empty() {
        let store = TaskStore::new();
        assert!(store.is_empty());
        assert!(store.list_all().is_empty());
    }

    #[test]
    fn clones_share_state() {
        let store = TaskStore::new();
        let clone = store.clone();

        store.insert(task("task-1", "shared"));
        assert!(clone.get(&TaskId::from("task-1")).is_some());
    }
}
