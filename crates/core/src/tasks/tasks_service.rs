use crate::context::RequestContext;
use crate::errors::{Error, Result};
use crate::goals::{find_visible_goal, GoalRepositoryTrait};
use crate::tasks::tasks_model::{NewTask, Task, TaskUpdate};
use crate::tasks::tasks_traits::{TaskRepositoryTrait, TaskServiceTrait};
use crate::utils::record_utils::{new_record_id, timestamp_now};
use async_trait::async_trait;
use log::info;
use std::sync::Arc;

pub struct TaskService {
    task_repo: Arc<dyn TaskRepositoryTrait>,
    goal_repo: Arc<dyn GoalRepositoryTrait>,
}

impl TaskService {
    pub fn new(
        task_repo: Arc<dyn TaskRepositoryTrait>,
        goal_repo: Arc<dyn GoalRepositoryTrait>,
    ) -> Self {
        TaskService {
            task_repo,
            goal_repo,
        }
    }

    /// Finds a task that belongs to a goal visible to the caller.
    fn find_task_in_goal(&self, ctx: &RequestContext, goal_id: &str, task_id: &str) -> Result<Task> {
        let goal = find_visible_goal(self.goal_repo.as_ref(), ctx, goal_id)?;
        self.task_repo
            .find_task(task_id)?
            .filter(|task| task.goal_id == goal.id)
            .ok_or_else(|| Error::not_found("Task", task_id))
    }
}

#[async_trait]
impl TaskServiceTrait for TaskService {
    fn get_tasks(&self, ctx: &RequestContext, goal_id: &str) -> Result<Vec<Task>> {
        let goal = find_visible_goal(self.goal_repo.as_ref(), ctx, goal_id)?;
        self.task_repo.load_tasks(&goal.id)
    }

    async fn create_task(
        &self,
        ctx: &RequestContext,
        goal_id: &str,
        new_task: NewTask,
    ) -> Result<Task> {
        let goal = find_visible_goal(self.goal_repo.as_ref(), ctx, goal_id)?;
        new_task.validate()?;

        let now = timestamp_now();
        let task = Task {
            id: new_record_id(),
            goal_id: goal.id,
            name: new_task.name,
            description: new_task.description,
            created_at: now,
            updated_at: now,
        };
        let task = self.task_repo.insert_task(task).await?;
        info!("Created task {} in goal {}", task.id, task.goal_id);
        Ok(task)
    }

    async fn update_task(
        &self,
        ctx: &RequestContext,
        goal_id: &str,
        task_id: &str,
        update: TaskUpdate,
    ) -> Result<Task> {
        let current = self.find_task_in_goal(ctx, goal_id, task_id)?;
        let merged = update.apply_to(current)?;
        self.task_repo.update_task(merged).await
    }

    async fn delete_task(
        &self,
        ctx: &RequestContext,
        goal_id: &str,
        task_id: &str,
    ) -> Result<()> {
        let task = self.find_task_in_goal(ctx, goal_id, task_id)?;
        if self.task_repo.delete_task(task.id.clone()).await? == 0 {
            return Err(Error::not_found("Task", task_id));
        }
        info!("Deleted task {} from goal {}", task.id, task.goal_id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::goals::{GoalService, GoalServiceTrait, NewGoal, TaskDeletionPolicy};
    use crate::test_support::MemoryStore;

    async fn setup() -> (TaskService, String, String) {
        let store = MemoryStore::new();
        store.add_client("client-1");
        store.add_client("client-2");
        let goals = GoalService::new(
            store.clone(),
            store.clone(),
            store.clone(),
            TaskDeletionPolicy::Restrict,
        );
        let ctx = RequestContext::unscoped();
        let mut ids = Vec::new();
        for client in ["client-1", "client-2"] {
            let goal = goals
                .create_goal(
                    &ctx,
                    NewGoal {
                        client_id: Some(client.to_string()),
                        name: "Goal".to_string(),
                        description: "Description".to_string(),
                    },
                )
                .await
                .unwrap();
            ids.push(goal.id);
        }
        let second = ids.pop().unwrap();
        let first = ids.pop().unwrap();
        (TaskService::new(store.clone(), store), first, second)
    }

    fn new_task(name: &str) -> NewTask {
        NewTask {
            name: name.to_string(),
            description: String::new(),
        }
    }

    #[tokio::test]
    async fn task_lifecycle_inside_a_goal() {
        let (service, goal_id, _) = setup().await;
        let ctx = RequestContext::unscoped();

        let task = service
            .create_task(&ctx, &goal_id, new_task("pandas"))
            .await
            .unwrap();
        assert_eq!(task.goal_id, goal_id);

        let renamed = service
            .update_task(
                &ctx,
                &goal_id,
                &task.id,
                TaskUpdate {
                    name: Some("numpy".to_string()),
                    description: None,
                },
            )
            .await
            .unwrap();
        assert_eq!(renamed.name, "numpy");
        assert_eq!(service.get_tasks(&ctx, &goal_id).unwrap(), vec![renamed]);

        service.delete_task(&ctx, &goal_id, &task.id).await.unwrap();
        assert!(service.get_tasks(&ctx, &goal_id).unwrap().is_empty());
    }

    #[tokio::test]
    async fn blank_task_name_is_rejected() {
        let (service, goal_id, _) = setup().await;
        let err = service
            .create_task(&RequestContext::unscoped(), &goal_id, new_task(" "))
            .await
            .unwrap_err();
        assert!(err.field_errors().unwrap().contains("name"));
    }

    #[tokio::test]
    async fn task_must_belong_to_the_addressed_goal() {
        let (service, first, second) = setup().await;
        let ctx = RequestContext::unscoped();
        let task = service
            .create_task(&ctx, &first, new_task("pandas"))
            .await
            .unwrap();

        let err = service
            .delete_task(&ctx, &second, &task.id)
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn tasks_of_hidden_goals_are_not_found() {
        let (service, _, second) = setup().await;
        let ctx = RequestContext::for_client("client-1");
        assert!(service.get_tasks(&ctx, &second).unwrap_err().is_not_found());
        assert!(service
            .create_task(&ctx, &second, new_task("pandas"))
            .await
            .unwrap_err()
            .is_not_found());
    }
}
