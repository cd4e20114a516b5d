mod task_id;
pub use task_id::TaskId;

mod task;
pub use task::Task;

mod payload;
pub use payload::{CreateTask, UpdateTask, ValidationError, TITLE_MAX_CHARS, TITLE_MIN_CHARS};
