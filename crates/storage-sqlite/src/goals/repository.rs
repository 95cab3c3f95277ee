use goalmanager_core::goals::{Goal, GoalRepositoryTrait, TaskDeletionPolicy};
use goalmanager_core::{Error, Result};

use super::model::GoalDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::{goals, tasks};
use async_trait::async_trait;
use diesel::prelude::*;
use diesel::SqliteConnection;
use log::debug;

use std::sync::Arc;

pub struct GoalRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl GoalRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        GoalRepository { pool, writer }
    }
}

#[async_trait]
impl GoalRepositoryTrait for GoalRepository {
    fn load_goals(&self, client_id: Option<&str>) -> Result<Vec<Goal>> {
        let mut conn = get_connection(&self.pool)?;
        let mut query = goals::table.into_boxed();
        if let Some(client_id) = client_id {
            query = query.filter(goals::client_id.eq(client_id.to_string()));
        }
        let goals_db = query
            .order((goals::created_at.asc(), goals::id.asc()))
            .select(GoalDB::as_select())
            .load::<GoalDB>(&mut conn)
            .into_core()?;
        Ok(goals_db.into_iter().map(Goal::from).collect())
    }

    fn find_goal(&self, goal_id: &str) -> Result<Option<Goal>> {
        let mut conn = get_connection(&self.pool)?;
        let goal_db = goals::table
            .find(goal_id)
            .select(GoalDB::as_select())
            .first::<GoalDB>(&mut conn)
            .optional()
            .into_core()?;
        Ok(goal_db.map(Goal::from))
    }

    async fn insert_goal(&self, goal: Goal) -> Result<Goal> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Goal> {
                let goal_db: GoalDB = goal.into();
                let result_db = diesel::insert_into(goals::table)
                    .values(&goal_db)
                    .returning(GoalDB::as_returning())
                    .get_result(conn)
                    .into_core()?;
                Ok(Goal::from(result_db))
            })
            .await
    }

    async fn update_goal(&self, goal_update: Goal) -> Result<Goal> {
        let goal_id_owned = goal_update.id.clone();

        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Goal> {
                diesel::update(goals::table.find(&goal_id_owned))
                    .set((
                        goals::name.eq(goal_update.name),
                        goals::description.eq(goal_update.description),
                        goals::updated_at.eq(goal_update.updated_at),
                    ))
                    .execute(conn)
                    .into_core()?;
                let result_db = goals::table
                    .find(&goal_id_owned)
                    .select(GoalDB::as_select())
                    .first::<GoalDB>(conn)
                    .into_core()?;
                Ok(Goal::from(result_db))
            })
            .await
    }

    async fn delete_goal(&self, goal_id: String, policy: TaskDeletionPolicy) -> Result<usize> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                let task_count: i64 = tasks::table
                    .filter(tasks::goal_id.eq(&goal_id))
                    .count()
                    .get_result(conn)
                    .into_core()?;

                if task_count > 0 {
                    match policy {
                        TaskDeletionPolicy::Restrict => {
                            return Err(Error::ConstraintViolation(format!(
                                "Goal '{}' still has {} task(s)",
                                goal_id, task_count
                            )));
                        }
                        TaskDeletionPolicy::Cascade => {
                            let removed = diesel::delete(tasks::table.filter(tasks::goal_id.eq(&goal_id)))
                                .execute(conn)
                                .into_core()?;
                            debug!("Cascade removed {} task(s) of goal {}", removed, goal_id);
                        }
                    }
                }

                Ok(diesel::delete(goals::table.find(&goal_id))
                    .execute(conn)
                    .into_core()?)
            })
            .await
    }
}
