mod error;
pub use error::CoreError;

mod store;
pub use store::TaskStore;

mod service;
pub use service::TaskService;
