//! In-memory repositories shared by the service tests.

use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use crate::clients::{Client, ClientRepositoryTrait};
use crate::errors::{DatabaseError, Error, Result};
use crate::goals::{Goal, GoalRepositoryTrait, TaskDeletionPolicy};
use crate::tasks::{Task, TaskRepositoryTrait};
use crate::utils::record_utils::timestamp_now;

#[derive(Default)]
pub struct MemoryStore {
    pub clients: RwLock<Vec<Client>>,
    pub goals: RwLock<Vec<Goal>>,
    pub tasks: RwLock<Vec<Task>>,
}

impl MemoryStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn add_client(&self, id: &str) -> Client {
        let now = timestamp_now();
        let client = Client {
            id: id.to_string(),
            name: format!("Client {}", id),
            created_at: now,
            updated_at: now,
        };
        self.clients.write().unwrap().push(client.clone());
        client
    }

    pub fn goal_count(&self) -> usize {
        self.goals.read().unwrap().len()
    }

    pub fn stored_goal(&self, id: &str) -> Option<Goal> {
        self.goals.read().unwrap().iter().find(|g| g.id == id).cloned()
    }
}

#[async_trait]
impl ClientRepositoryTrait for MemoryStore {
    fn load_clients(&self) -> Result<Vec<Client>> {
        Ok(self.clients.read().unwrap().clone())
    }

    fn find_client(&self, client_id: &str) -> Result<Option<Client>> {
        Ok(self
            .clients
            .read()
            .unwrap()
            .iter()
            .find(|c| c.id == client_id)
            .cloned())
    }

    async fn insert_client(&self, client: Client) -> Result<Client> {
        self.clients.write().unwrap().push(client.clone());
        Ok(client)
    }
}

#[async_trait]
impl GoalRepositoryTrait for MemoryStore {
    fn load_goals(&self, client_id: Option<&str>) -> Result<Vec<Goal>> {
        Ok(self
            .goals
            .read()
            .unwrap()
            .iter()
            .filter(|g| client_id.map_or(true, |c| g.client_id == c))
            .cloned()
            .collect())
    }

    fn find_goal(&self, goal_id: &str) -> Result<Option<Goal>> {
        Ok(self.stored_goal(goal_id))
    }

    async fn insert_goal(&self, goal: Goal) -> Result<Goal> {
        if self.find_client(&goal.client_id)?.is_none() {
            return Err(Error::Database(DatabaseError::ForeignKeyViolation(
                "FOREIGN KEY constraint failed".to_string(),
            )));
        }
        self.goals.write().unwrap().push(goal.clone());
        Ok(goal)
    }

    async fn update_goal(&self, goal: Goal) -> Result<Goal> {
        let mut goals = self.goals.write().unwrap();
        let slot = goals
            .iter_mut()
            .find(|g| g.id == goal.id)
            .ok_or_else(|| Error::not_found("Goal", &goal.id))?;
        *slot = goal.clone();
        Ok(goal)
    }

    async fn delete_goal(&self, goal_id: String, policy: TaskDeletionPolicy) -> Result<usize> {
        let mut tasks = self.tasks.write().unwrap();
        let owned = tasks.iter().filter(|t| t.goal_id == goal_id).count();
        if owned > 0 {
            match policy {
                TaskDeletionPolicy::Restrict => {
                    return Err(Error::ConstraintViolation(format!(
                        "Goal '{}' still has {} task(s)",
                        goal_id, owned
                    )))
                }
                TaskDeletionPolicy::Cascade => tasks.retain(|t| t.goal_id != goal_id),
            }
        }
        let mut goals = self.goals.write().unwrap();
        let before = goals.len();
        goals.retain(|g| g.id != goal_id);
        Ok(before - goals.len())
    }
}

#[async_trait]
impl TaskRepositoryTrait for MemoryStore {
    fn load_tasks(&self, goal_id: &str) -> Result<Vec<Task>> {
        Ok(self
            .tasks
            .read()
            .unwrap()
            .iter()
            .filter(|t| t.goal_id == goal_id)
            .cloned()
            .collect())
    }

    fn load_tasks_for_client(&self, client_id: Option<&str>) -> Result<Vec<Task>> {
        let goals = self.load_goals(client_id)?;
        Ok(self
            .tasks
            .read()
            .unwrap()
            .iter()
            .filter(|t| goals.iter().any(|g| g.id == t.goal_id))
            .cloned()
            .collect())
    }

    fn find_task(&self, task_id: &str) -> Result<Option<Task>> {
        Ok(self
            .tasks
            .read()
            .unwrap()
            .iter()
            .find(|t| t.id == task_id)
            .cloned())
    }

    async fn insert_task(&self, task: Task) -> Result<Task> {
        self.tasks.write().unwrap().push(task.clone());
        Ok(task)
    }

    async fn update_task(&self, task: Task) -> Result<Task> {
        let mut tasks = self.tasks.write().unwrap();
        let slot = tasks
            .iter_mut()
            .find(|t| t.id == task.id)
            .ok_or_else(|| Error::not_found("Task", &task.id))?;
        *slot = task.clone();
        Ok(task)
    }

    async fn delete_task(&self, task_id: String) -> Result<usize> {
        let mut tasks = self.tasks.write().unwrap();
        let before = tasks.len();
        tasks.retain(|t| t.id != task_id);
        Ok(before - tasks.len())
    }
}
