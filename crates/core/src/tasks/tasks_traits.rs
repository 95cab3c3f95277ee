use crate::context::RequestContext;
use crate::errors::Result;
use crate::tasks::tasks_model::{NewTask, Task, TaskUpdate};
use async_trait::async_trait;

/// Trait for task repository operations
#[async_trait]
pub trait TaskRepositoryTrait: Send + Sync {
    fn load_tasks(&self, goal_id: &str) -> Result<Vec<Task>>;
    /// Loads the tasks of every goal, optionally narrowed to one client's goals.
    fn load_tasks_for_client(&self, client_id: Option<&str>) -> Result<Vec<Task>>;
    fn find_task(&self, task_id: &str) -> Result<Option<Task>>;
    async fn insert_task(&self, task: Task) -> Result<Task>;
    async fn update_task(&self, task: Task) -> Result<Task>;
    async fn delete_task(&self, task_id: String) -> Result<usize>;
}

/// Trait for task service operations. Tasks are always addressed through
/// their goal, so the goal's visibility decides the task's.
#[async_trait]
pub trait TaskServiceTrait: Send + Sync {
    fn get_tasks(&self, ctx: &RequestContext, goal_id: &str) -> Result<Vec<Task>>;
    async fn create_task(
        &self,
        ctx: &RequestContext,
        goal_id: &str,
        new_task: NewTask,
    ) -> Result<Task>;
    async fn update_task(
        &self,
        ctx: &RequestContext,
        goal_id: &str,
        task_id: &str,
        update: TaskUpdate,
    ) -> Result<Task>;
    async fn delete_task(&self, ctx: &RequestContext, goal_id: &str, task_id: &str)
        -> Result<()>;
}
