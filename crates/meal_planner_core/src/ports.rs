//! crates/meal_planner_core/src/ports.rs
//!
//! Defines the storage contracts (traits) the planner depends on.
//! These traits form the boundary of the hexagonal architecture, allowing the core
//! to stay independent of whatever store actually holds users, recipes and plans.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::{CalorieBaseline, MealPlanRecord, Recipe, RecipeId, User, UserId};

//=========================================================================================
// Generic Port Error and Result Types
//=========================================================================================

/// A generic error type for all port operations.
/// This abstracts away the specific errors of the backing store.
#[derive(Debug, thiserror::Error)]
pub enum PortError {
    #[error("Item not found: {0}")]
    NotFound(String),
    /// A write would break a uniqueness or ownership rule of the store.
    #[error("Conflicting write: {0}")]
    Conflict(String),
    #[error("An unexpected error occurred: {0}")]
    Unexpected(String),
}

/// A convenience type alias for `Result<T, PortError>`.
pub type PortResult<T> = Result<T, PortError>;

//=========================================================================================
// Store Ports (Traits)
//=========================================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_user(&self, user_id: UserId) -> PortResult<Option<User>>;

    async fn save_user(&self, user: User) -> PortResult<()>;
}

#[async_trait]
pub trait RecipeRepository: Send + Sync {
    async fn find_recipe(&self, recipe_id: RecipeId) -> PortResult<Option<Recipe>>;
}

#[async_trait]
pub trait MealPlanRepository: Send + Sync {
    /// Returns the calorie targets the user established with their first plan.
    async fn find_baseline(&self, user_id: UserId) -> PortResult<Option<CalorieBaseline>>;

    async fn find_meal_plan(
        &self,
        user_id: UserId,
        date: NaiveDate,
    ) -> PortResult<Option<MealPlanRecord>>;

    /// All of the user's records dated on or after `from`, ordered by date.
    async fn find_meal_plans_from(
        &self,
        user_id: UserId,
        from: NaiveDate,
    ) -> PortResult<Vec<MealPlanRecord>>;

    async fn save_meal_plan(&self, record: MealPlanRecord) -> PortResult<()>;

    /// Persists the whole batch or nothing at all.
    ///
    /// Implementations must validate every record before applying any of them;
    /// an error means the store is exactly as it was before the call.
    async fn save_meal_plans(&self, records: Vec<MealPlanRecord>) -> PortResult<()>;
}
