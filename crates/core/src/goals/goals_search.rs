//! Free-text search over goals and their tasks.
//!
//! A goal matches when the query is a case-insensitive substring of its own
//! name or description, or of the name or description of any of its tasks.

use std::collections::HashMap;

use crate::goals::goals_model::Goal;
use crate::tasks::Task;

/// Returns true when `query` occurs in any searchable field of `goal` or `tasks`.
///
/// `tasks` must be the goal's own tasks.
pub fn matches_query(goal: &Goal, tasks: &[Task], query: &str) -> bool {
    let needle = query.to_lowercase();
    contains_folded(&goal.name, &needle)
        || contains_folded(&goal.description, &needle)
        || tasks.iter().any(|task| {
            contains_folded(&task.name, &needle) || contains_folded(&task.description, &needle)
        })
}

/// Keeps the goals matching `query`, preserving their order.
pub fn filter_goals(goals: Vec<Goal>, tasks: Vec<Task>, query: &str) -> Vec<Goal> {
    let mut tasks_by_goal: HashMap<String, Vec<Task>> = HashMap::new();
    for task in tasks {
        tasks_by_goal
            .entry(task.goal_id.clone())
            .or_default()
            .push(task);
    }

    goals
        .into_iter()
        .filter(|goal| {
            let own_tasks = tasks_by_goal
                .get(&goal.id)
                .map(Vec::as_slice)
                .unwrap_or_default();
            matches_query(goal, own_tasks, query)
        })
        .collect()
}

fn contains_folded(haystack: &str, folded_needle: &str) -> bool {
    haystack.to_lowercase().contains(folded_needle)
}
