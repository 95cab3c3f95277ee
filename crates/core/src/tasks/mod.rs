//! Tasks module - sub-items that always belong to a goal.

mod tasks_model;
mod tasks_service;
mod tasks_traits;

pub use tasks_model::{NewTask, Task, TaskUpdate};
pub use tasks_service::TaskService;
pub use tasks_traits::{TaskRepositoryTrait, TaskServiceTrait};
