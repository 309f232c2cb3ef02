//! Task tracking
//!
//! - `model`: the task record and its partial-update type
//! - `store`: the owned task list and its JSON file persistence

pub mod error;
pub mod model;
pub mod store;

pub use error::StoreError;
pub use model::{NewTask, Task, TaskUpdate};
pub use store::{TaskStore, View};
