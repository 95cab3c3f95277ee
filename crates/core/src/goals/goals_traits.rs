use crate::context::RequestContext;
use crate::errors::Result;
use crate::goals::goals_model::{Goal, GoalSearch, GoalUpdate, NewGoal, TaskDeletionPolicy};
use crate::tasks::Task;
use async_trait::async_trait;

/// Trait for goal repository operations
#[async_trait]
pub trait GoalRepositoryTrait: Send + Sync {
    /// Loads goals in creation order, optionally narrowed to one client.
    fn load_goals(&self, client_id: Option<&str>) -> Result<Vec<Goal>>;
    fn find_goal(&self, goal_id: &str) -> Result<Option<Goal>>;
    async fn insert_goal(&self, goal: Goal) -> Result<Goal>;
    async fn update_goal(&self, goal: Goal) -> Result<Goal>;
    /// Deletes the goal, applying `policy` to its tasks inside the same
    /// transaction. Returns the number of goals removed.
    async fn delete_goal(&self, goal_id: String, policy: TaskDeletionPolicy) -> Result<usize>;
}

/// Trait for goal service operations
#[async_trait]
pub trait GoalServiceTrait: Send + Sync {
    fn get_goals(&self, ctx: &RequestContext, search: &GoalSearch) -> Result<Vec<Goal>>;
    fn get_goal(&self, ctx: &RequestContext, goal_id: &str) -> Result<Goal>;
    fn get_goal_tasks(&self, ctx: &RequestContext, goal_id: &str) -> Result<Vec<Task>>;
    fn new_goal(&self, ctx: &RequestContext) -> NewGoal;
    async fn create_goal(&self, ctx: &RequestContext, new_goal: NewGoal) -> Result<Goal>;
    async fn update_goal(
        &self,
        ctx: &RequestContext,
        goal_id: &str,
        update: GoalUpdate,
    ) -> Result<Goal>;
    async fn delete_goal(&self, ctx: &RequestContext, goal_id: &str) -> Result<()>;
}
