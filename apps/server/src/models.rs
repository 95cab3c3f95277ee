use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use goalmanager_core::{clients as core_clients, goals as core_goals, tasks as core_tasks};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Which page a rendered response stands for.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum View {
    Index,
    Show,
    New,
    Edit,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: String,
    pub name: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<core_clients::Client> for Client {
    fn from(c: core_clients::Client) -> Self {
        Self {
            id: c.id,
            name: c.name,
            created_at: c.created_at,
            updated_at: c.updated_at,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct NewClient {
    #[serde(default)]
    pub name: String,
}

impl From<NewClient> for core_clients::NewClient {
    fn from(c: NewClient) -> Self {
        Self { name: c.name }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: String,
    pub client_id: String,
    pub name: String,
    pub description: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<core_goals::Goal> for Goal {
    fn from(g: core_goals::Goal) -> Self {
        Self {
            id: g.id,
            client_id: g.client_id,
            name: g.name,
            description: g.description,
            created_at: g.created_at,
            updated_at: g.updated_at,
        }
    }
}

/// Submitted goal attributes, shared by create and update.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct GoalParams {
    pub client_id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
}

impl From<GoalParams> for core_goals::NewGoal {
    fn from(p: GoalParams) -> Self {
        Self {
            client_id: p.client_id,
            name: p.name.unwrap_or_default(),
            description: p.description.unwrap_or_default(),
        }
    }
}

impl From<GoalParams> for core_goals::GoalUpdate {
    fn from(p: GoalParams) -> Self {
        Self {
            name: p.name,
            description: p.description,
        }
    }
}

/// Goal attributes as shown in the new/edit form.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GoalForm {
    /// `None` for a goal that has not been saved yet.
    pub id: Option<String>,
    pub client_id: Option<String>,
    pub name: String,
    pub description: String,
}

impl From<core_goals::NewGoal> for GoalForm {
    fn from(g: core_goals::NewGoal) -> Self {
        Self {
            id: None,
            client_id: g.client_id,
            name: g.name,
            description: g.description,
        }
    }
}

impl From<core_goals::Goal> for GoalForm {
    fn from(g: core_goals::Goal) -> Self {
        Self {
            id: Some(g.id),
            client_id: Some(g.client_id),
            name: g.name,
            description: g.description,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct GoalIndexView {
    pub view: View,
    pub query: Option<String>,
    pub goals: Vec<Goal>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct GoalShowView {
    pub view: View,
    pub goal: Goal,
    pub tasks: Vec<Task>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct GoalFormView {
    pub view: View,
    pub goal: GoalForm,
    /// Field name to validation messages; empty when the form is clean.
    pub errors: BTreeMap<String, Vec<String>>,
}

impl GoalFormView {
    pub fn blank(view: View, goal: GoalForm) -> Self {
        Self {
            view,
            goal,
            errors: BTreeMap::new(),
        }
    }
}

#[derive(Deserialize, IntoParams, Debug, Default)]
#[into_params(parameter_in = Query)]
pub struct GoalIndexParams {
    /// Case-insensitive text matched against goal and task names and descriptions.
    pub q: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub goal_id: String,
    pub name: String,
    pub description: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<core_tasks::Task> for Task {
    fn from(t: core_tasks::Task) -> Self {
        Self {
            id: t.id,
            goal_id: t.goal_id,
            name: t.name,
            description: t.description,
            created_at: t.created_at,
            updated_at: t.updated_at,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct TaskParams {
    pub name: Option<String>,
    pub description: Option<String>,
}

impl From<TaskParams> for core_tasks::NewTask {
    fn from(p: TaskParams) -> Self {
        Self {
            name: p.name.unwrap_or_default(),
            description: p.description.unwrap_or_default(),
        }
    }
}

impl From<TaskParams> for core_tasks::TaskUpdate {
    fn from(p: TaskParams) -> Self {
        Self {
            name: p.name,
            description: p.description,
        }
    }
}
