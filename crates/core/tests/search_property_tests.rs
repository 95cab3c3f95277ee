//! Property-based tests for the goal search filter.

use chrono::NaiveDateTime;
use goalmanager_core::goals::{filter_goals, matches_query, Goal};
use goalmanager_core::tasks::Task;
use proptest::prelude::*;

// =============================================================================
// Generators
// =============================================================================

fn epoch() -> NaiveDateTime {
    NaiveDateTime::default()
}

fn arb_goal(index: usize) -> impl Strategy<Value = Goal> {
    ("[a-z ]{0,15}", "[a-z ]{0,30}").prop_map(move |(name, description)| Goal {
        id: format!("goal-{}", index),
        client_id: "client-1".to_string(),
        name,
        description,
        created_at: epoch(),
        updated_at: epoch(),
    })
}

fn arb_goals() -> impl Strategy<Value = Vec<Goal>> {
    (0usize..6).prop_flat_map(|count| (0..count).map(arb_goal).collect::<Vec<_>>())
}

/// Tasks attached to goal ids that may or may not exist in the list.
fn arb_tasks() -> impl Strategy<Value = Vec<Task>> {
    prop::collection::vec((0usize..8, "[a-z ]{0,15}", "[a-z ]{0,30}"), 0..10).prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (goal, name, description))| Task {
                id: format!("task-{}", i),
                goal_id: format!("goal-{}", goal),
                name,
                description,
                created_at: epoch(),
                updated_at: epoch(),
            })
            .collect()
    })
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    /// The filter only drops goals; survivors keep their relative order.
    #[test]
    fn filter_preserves_order(goals in arb_goals(), tasks in arb_tasks(), query in "[a-z]{1,3}") {
        let kept = filter_goals(goals.clone(), tasks, &query);
        let mut remaining = goals.iter();
        for goal in &kept {
            prop_assert!(remaining.any(|g| g.id == goal.id));
        }
    }

    /// A goal is kept exactly when it or one of its own tasks matches.
    #[test]
    fn filter_agrees_with_matches_query(
        goals in arb_goals(),
        tasks in arb_tasks(),
        query in "[a-z]{1,3}",
    ) {
        let kept: Vec<String> = filter_goals(goals.clone(), tasks.clone(), &query)
            .into_iter()
            .map(|g| g.id)
            .collect();
        for goal in &goals {
            let own: Vec<Task> = tasks.iter().filter(|t| t.goal_id == goal.id).cloned().collect();
            prop_assert_eq!(kept.contains(&goal.id), matches_query(goal, &own, &query));
        }
    }

    /// Case of the query never changes the result.
    #[test]
    fn filter_ignores_query_case(goals in arb_goals(), tasks in arb_tasks(), query in "[a-z]{1,3}") {
        let lower = filter_goals(goals.clone(), tasks.clone(), &query);
        let upper = filter_goals(goals, tasks, &query.to_uppercase());
        prop_assert_eq!(lower, upper);
    }
}
