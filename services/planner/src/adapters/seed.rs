//! services/planner/src/adapters/seed.rs
//!
//! Loads users, recipes and meal plans from a JSON file into a `MemoryStore`.
//! Recipe fields are kept in the dataset's raw encoded form.

use std::path::Path;

use chrono::NaiveDate;
use meal_planner_core::domain::{MealPlanRecord, Recipe, RecipeId, User, UserId};
use serde::Deserialize;
use uuid::Uuid;

use crate::adapters::memory::MemoryStore;
use crate::error::PlannerError;

//=========================================================================================
// "Impure" Seed Record Structs
//=========================================================================================

#[derive(Debug, Deserialize)]
struct UserRow {
    id: UserId,
    #[serde(default)]
    name: String,
    #[serde(default)]
    custom_plan: bool,
}
impl UserRow {
    fn to_domain(self) -> User {
        User {
            id: self.id,
            name: self.name,
            custom_plan: self.custom_plan,
        }
    }
}

#[derive(Debug, Deserialize)]
struct RecipeRow {
    recipe_id: RecipeId,
    name: String,
    author_name: Option<String>,
    images: Option<String>,
    total_time: Option<String>,
    #[serde(default)]
    calories: f64,
    aggregated_rating: Option<f64>,
    recipe_instructions: Option<String>,
}
impl RecipeRow {
    fn to_domain(self) -> Recipe {
        Recipe {
            recipe_id: self.recipe_id,
            name: self.name,
            author_name: self.author_name,
            images: self.images,
            total_time: self.total_time,
            calories: self.calories,
            aggregated_rating: self.aggregated_rating,
            instructions: self.recipe_instructions,
        }
    }
}

#[derive(Debug, Deserialize)]
struct MealPlanRow {
    id: Option<Uuid>,
    user_id: UserId,
    date: NaiveDate,
    breakfast: Option<RecipeId>,
    lunch: Option<RecipeId>,
    dinner: Option<RecipeId>,
    morning_snack: Option<RecipeId>,
    afternoon_snack: Option<RecipeId>,
    #[serde(default)]
    meal_count: i32,
    description: Option<String>,
    #[serde(default)]
    daily_calories: i32,
    #[serde(default)]
    total_calories: i32,
}
impl MealPlanRow {
    fn to_domain(self) -> MealPlanRecord {
        let mut record = MealPlanRecord::new(self.user_id, self.date);
        if let Some(id) = self.id {
            record.id = id;
        }
        record.breakfast = self.breakfast;
        record.lunch = self.lunch;
        record.dinner = self.dinner;
        record.morning_snack = self.morning_snack;
        record.afternoon_snack = self.afternoon_snack;
        record.meal_count = self.meal_count;
        record.description = self.description;
        record.daily_calories = self.daily_calories;
        record.total_calories = self.total_calories;
        record
    }
}

//=========================================================================================
// Seed File
//=========================================================================================

/// The contents of a seed file.
#[derive(Debug, Deserialize)]
pub struct Seed {
    #[serde(default)]
    users: Vec<UserRow>,
    #[serde(default)]
    recipes: Vec<RecipeRow>,
    #[serde(default)]
    meal_plans: Vec<MealPlanRow>,
}

impl Seed {
    pub fn from_json(json: &str) -> Result<Self, PlannerError> {
        Ok(serde_json::from_str(json)?)
    }

    pub async fn from_path(path: &Path) -> Result<Self, PlannerError> {
        let json = tokio::fs::read_to_string(path).await?;
        Self::from_json(&json)
    }

    /// Moves every row into a fresh store.
    pub fn into_store(self) -> MemoryStore {
        MemoryStore::from_parts(
            self.users.into_iter().map(UserRow::to_domain),
            self.recipes.into_iter().map(RecipeRow::to_domain),
            self.meal_plans.into_iter().map(MealPlanRow::to_domain),
        )
    }
}
