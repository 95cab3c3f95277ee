use crate::clients::ClientRepositoryTrait;
use crate::context::RequestContext;
use crate::errors::{DatabaseError, Error, FieldErrors, Result, ValidationError, MUST_EXIST};
use crate::goals::goals_model::{Goal, GoalSearch, GoalUpdate, NewGoal, TaskDeletionPolicy};
use crate::goals::goals_search::filter_goals;
use crate::goals::goals_traits::{GoalRepositoryTrait, GoalServiceTrait};
use crate::tasks::{Task, TaskRepositoryTrait};
use async_trait::async_trait;
use log::{debug, info};
use std::sync::Arc;

pub struct GoalService {
    goal_repo: Arc<dyn GoalRepositoryTrait>,
    task_repo: Arc<dyn TaskRepositoryTrait>,
    client_repo: Arc<dyn ClientRepositoryTrait>,
    deletion_policy: TaskDeletionPolicy,
}

impl GoalService {
    pub fn new(
        goal_repo: Arc<dyn GoalRepositoryTrait>,
        task_repo: Arc<dyn TaskRepositoryTrait>,
        client_repo: Arc<dyn ClientRepositoryTrait>,
        deletion_policy: TaskDeletionPolicy,
    ) -> Self {
        GoalService {
            goal_repo,
            task_repo,
            client_repo,
            deletion_policy,
        }
    }
}

fn client_must_exist() -> Error {
    let mut errors = FieldErrors::new();
    errors.add("client", MUST_EXIST);
    Error::Validation(ValidationError::Fields(errors))
}

/// Looks up a goal the caller is allowed to see. Goals owned by another
/// client are reported as missing.
pub(crate) fn find_visible_goal(
    goal_repo: &dyn GoalRepositoryTrait,
    ctx: &RequestContext,
    goal_id: &str,
) -> Result<Goal> {
    goal_repo
        .find_goal(goal_id)?
        .filter(|goal| ctx.can_access(&goal.client_id))
        .ok_or_else(|| Error::not_found("Goal", goal_id))
}

#[async_trait]
impl GoalServiceTrait for GoalService {
    fn get_goals(&self, ctx: &RequestContext, search: &GoalSearch) -> Result<Vec<Goal>> {
        let goals = self.goal_repo.load_goals(ctx.client_scope())?;
        let Some(query) = search.normalized_query() else {
            return Ok(goals);
        };
        if goals.is_empty() {
            return Ok(goals);
        }

        let tasks = self.task_repo.load_tasks_for_client(ctx.client_scope())?;
        let found = filter_goals(goals, tasks, query);
        debug!("Goal search '{}' matched {} goal(s)", query, found.len());
        Ok(found)
    }

    fn get_goal(&self, ctx: &RequestContext, goal_id: &str) -> Result<Goal> {
        find_visible_goal(self.goal_repo.as_ref(), ctx, goal_id)
    }

    fn get_goal_tasks(&self, ctx: &RequestContext, goal_id: &str) -> Result<Vec<Task>> {
        let goal = self.get_goal(ctx, goal_id)?;
        self.task_repo.load_tasks(&goal.id)
    }

    fn new_goal(&self, ctx: &RequestContext) -> NewGoal {
        NewGoal {
            client_id: ctx.client_id.clone(),
            ..NewGoal::default()
        }
    }

    async fn create_goal(&self, ctx: &RequestContext, mut new_goal: NewGoal) -> Result<Goal> {
        // A client-scoped caller always creates for its own client.
        if let Some(scope) = ctx.client_scope() {
            new_goal.client_id = Some(scope.to_string());
        }

        let mut errors = new_goal.field_errors();
        if let Some(client_id) = new_goal.client_id.as_deref().filter(|id| !id.trim().is_empty()) {
            if self.client_repo.find_client(client_id)?.is_none() {
                errors.add("client", MUST_EXIST);
            }
        }
        errors.into_result()?;

        // The client can vanish between the check above and the insert.
        let goal = self
            .goal_repo
            .insert_goal(new_goal.into_goal()?)
            .await
            .map_err(|err| match err {
                Error::Database(DatabaseError::ForeignKeyViolation(_)) => client_must_exist(),
                other => other,
            })?;
        info!("Created goal {} for client {}", goal.id, goal.client_id);
        Ok(goal)
    }

    async fn update_goal(
        &self,
        ctx: &RequestContext,
        goal_id: &str,
        update: GoalUpdate,
    ) -> Result<Goal> {
        let current = self.get_goal(ctx, goal_id)?;
        let merged = update.apply_to(current)?;
        let goal = self.goal_repo.update_goal(merged).await?;
        info!("Updated goal {}", goal.id);
        Ok(goal)
    }

    async fn delete_goal(&self, ctx: &RequestContext, goal_id: &str) -> Result<()> {
        let goal = self.get_goal(ctx, goal_id)?;
        let deleted = self
            .goal_repo
            .delete_goal(goal.id.clone(), self.deletion_policy)
            .await?;
        if deleted == 0 {
            return Err(Error::not_found("Goal", goal_id));
        }
        info!(
            "Deleted goal {} (task policy: {})",
            goal.id, self.deletion_policy
        );
        Ok(())
    }
}
