//! Goals module - domain models, search filter, services, and traits.

mod goals_model;
mod goals_search;
mod goals_service;
mod goals_traits;


pub use goals_model::{Goal, GoalSearch, GoalUpdate, NewGoal, TaskDeletionPolicy};
pub use goals_search::{filter_goals, matches_query};
pub(crate) use goals_service::find_visible_goal;
pub use goals_service::GoalService;
pub use goals_traits::{GoalRepositoryTrait, GoalServiceTrait};
