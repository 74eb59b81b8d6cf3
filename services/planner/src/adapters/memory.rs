//! services/planner/src/adapters/memory.rs
//!
//! An in-process store that implements every storage port of the core crate.
//! All tables sit behind one lock, so a batch write is applied as a unit.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use meal_planner_core::domain::{CalorieBaseline, MealPlanRecord, Recipe, RecipeId, User, UserId};
use meal_planner_core::ports::{
    MealPlanRepository, PortError, PortResult, RecipeRepository, UserRepository,
};
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

//=========================================================================================
// The Main Adapter Struct
//=========================================================================================

#[derive(Debug, Default)]
struct Tables {
    users: HashMap<UserId, User>,
    recipes: HashMap<RecipeId, Recipe>,
    plans: HashMap<Uuid, MealPlanRecord>,
}

/// A shared, cloneable in-memory store.
#[derive(Clone, Default)]
pub struct MemoryStore {
    tables: Arc<RwLock<Tables>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store preloaded with the given rows. Later rows win on
    /// duplicate ids.
    pub fn from_parts(
        users: impl IntoIterator<Item = User>,
        recipes: impl IntoIterator<Item = Recipe>,
        plans: impl IntoIterator<Item = MealPlanRecord>,
    ) -> Self {
        let tables = Tables {
            users: users.into_iter().map(|u| (u.id, u)).collect(),
            recipes: recipes.into_iter().map(|r| (r.recipe_id, r)).collect(),
            plans: plans.into_iter().map(|p| (p.id, p)).collect(),
        };
        Self {
            tables: Arc::new(RwLock::new(tables)),
        }
    }

    /// Every stored plan, ordered by user and date.
    pub async fn meal_plans(&self) -> Vec<MealPlanRecord> {
        let tables = self.tables.read().await;
        let mut plans: Vec<MealPlanRecord> = tables.plans.values().cloned().collect();
        plans.sort_by_key(|p| (p.user_id, p.date));
        plans
    }
}

/// Checks a write batch against the current tables without touching them.
///
/// Owners must exist, a record may appear once per batch, and no two records
/// may end up sharing a (user, date) key.
fn validate_batch(tables: &Tables, batch: &[MealPlanRecord]) -> PortResult<()> {
    let batch_ids: HashSet<Uuid> = batch.iter().map(|r| r.id).collect();
    if batch_ids.len() != batch.len() {
        return Err(PortError::Conflict(
            "the same meal plan appears twice in one batch".to_string(),
        ));
    }

    let mut keys: HashMap<(UserId, NaiveDate), Uuid> = tables
        .plans
        .values()
        .filter(|r| !batch_ids.contains(&r.id))
        .map(|r| ((r.user_id, r.date), r.id))
        .collect();

    for record in batch {
        if !tables.users.contains_key(&record.user_id) {
            return Err(PortError::NotFound(format!(
                "User {} not found",
                record.user_id
            )));
        }
        if keys.insert((record.user_id, record.date), record.id).is_some() {
            return Err(PortError::Conflict(format!(
                "user {} already has a meal plan for {}",
                record.user_id, record.date
            )));
        }
    }
    Ok(())
}

//=========================================================================================
// Port Trait Implementations
//=========================================================================================

#[async_trait]
impl UserRepository for MemoryStore {
    async fn find_user(&self, user_id: UserId) -> PortResult<Option<User>> {
        Ok(self.tables.read().await.users.get(&user_id).cloned())
    }

    async fn save_user(&self, user: User) -> PortResult<()> {
        self.tables.write().await.users.insert(user.id, user);
        Ok(())
    }
}

#[async_trait]
impl RecipeRepository for MemoryStore {
    async fn find_recipe(&self, recipe_id: RecipeId) -> PortResult<Option<Recipe>> {
        Ok(self.tables.read().await.recipes.get(&recipe_id).cloned())
    }
}

#[async_trait]
impl MealPlanRepository for MemoryStore {
    async fn find_baseline(&self, user_id: UserId) -> PortResult<Option<CalorieBaseline>> {
        // The earliest plan is the one the user set their targets with.
        let tables = self.tables.read().await;
        let baseline = tables
            .plans
            .values()
            .filter(|p| p.user_id == user_id)
            .min_by_key(|p| p.date)
            .map(|p| CalorieBaseline {
                daily_calories: p.daily_calories,
                total_calories: p.total_calories,
            });
        Ok(baseline)
    }

    async fn find_meal_plan(
        &self,
        user_id: UserId,
        date: NaiveDate,
    ) -> PortResult<Option<MealPlanRecord>> {
        let tables = self.tables.read().await;
        Ok(tables
            .plans
            .values()
            .find(|p| p.user_id == user_id && p.date == date)
            .cloned())
    }

    async fn find_meal_plans_from(
        &self,
        user_id: UserId,
        from: NaiveDate,
    ) -> PortResult<Vec<MealPlanRecord>> {
        let tables = self.tables.read().await;
        let mut plans: Vec<MealPlanRecord> = tables
            .plans
            .values()
            .filter(|p| p.user_id == user_id && p.date >= from)
            .cloned()
            .collect();
        plans.sort_by_key(|p| p.date);
        Ok(plans)
    }

    async fn save_meal_plan(&self, record: MealPlanRecord) -> PortResult<()> {
        self.save_meal_plans(vec![record]).await
    }

    async fn save_meal_plans(&self, records: Vec<MealPlanRecord>) -> PortResult<()> {
        let mut tables = self.tables.write().await;
        validate_batch(&tables, &records)?;
        let count = records.len();
        for record in records {
            tables.plans.insert(record.id, record);
        }
        debug!(count, "meal plans written");
        Ok(())
    }
}
