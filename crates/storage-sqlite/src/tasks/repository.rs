use goalmanager_core::tasks::{Task, TaskRepositoryTrait};
use goalmanager_core::Result;

use super::model::TaskDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::{goals, tasks};
use async_trait::async_trait;
use diesel::prelude::*;
use diesel::SqliteConnection;

use std::sync::Arc;

pub struct TaskRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl TaskRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        TaskRepository { pool, writer }
    }
}

#[async_trait]
impl TaskRepositoryTrait for TaskRepository {
    fn load_tasks(&self, goal_id: &str) -> Result<Vec<Task>> {
        let mut conn = get_connection(&self.pool)?;
        let tasks_db = tasks::table
            .filter(tasks::goal_id.eq(goal_id))
            .order((tasks::created_at.asc(), tasks::id.asc()))
            .select(TaskDB::as_select())
            .load::<TaskDB>(&mut conn)
            .into_core()?;
        Ok(tasks_db.into_iter().map(Task::from).collect())
    }

    fn load_tasks_for_client(&self, client_id: Option<&str>) -> Result<Vec<Task>> {
        let mut conn = get_connection(&self.pool)?;
        let mut query = tasks::table
            .inner_join(goals::table)
            .select(TaskDB::as_select())
            .into_boxed();
        if let Some(client_id) = client_id {
            query = query.filter(goals::client_id.eq(client_id.to_string()));
        }
        let tasks_db = query
            .order((tasks::created_at.asc(), tasks::id.asc()))
            .load::<TaskDB>(&mut conn)
            .into_core()?;
        Ok(tasks_db.into_iter().map(Task::from).collect())
    }

    fn find_task(&self, task_id: &str) -> Result<Option<Task>> {
        let mut conn = get_connection(&self.pool)?;
        let task_db = tasks::table
            .find(task_id)
            .select(TaskDB::as_select())
            .first::<TaskDB>(&mut conn)
            .optional()
            .into_core()?;
        Ok(task_db.map(Task::from))
    }

    async fn insert_task(&self, task: Task) -> Result<Task> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Task> {
                let task_db: TaskDB = task.into();
                let result_db = diesel::insert_into(tasks::table)
                    .values(&task_db)
                    .returning(TaskDB::as_returning())
                    .get_result(conn)
                    .into_core()?;
                Ok(Task::from(result_db))
            })
            .await
    }

    async fn update_task(&self, task: Task) -> Result<Task> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Task> {
                let result_db = diesel::update(tasks::table.find(&task.id))
                    .set((
                        tasks::name.eq(&task.name),
                        tasks::description.eq(&task.description),
                        tasks::updated_at.eq(task.updated_at),
                    ))
                    .returning(TaskDB::as_returning())
                    .get_result(conn)
                    .into_core()?;
                Ok(Task::from(result_db))
            })
            .await
    }

    async fn delete_task(&self, task_id: String) -> Result<usize> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                Ok(diesel::delete(tasks::table.find(task_id))
                    .execute(conn)
                    .into_core()?)
            })
            .await
    }
}
