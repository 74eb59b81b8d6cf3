//! crates/meal_planner_core/src/domain.rs
//!
//! Defines the pure, core data structures for the application.
//! These structs are independent of any database or storage format.

use chrono::NaiveDate;
use uuid::Uuid;

/// Identifier of a user in the external store.
pub type UserId = i32;

/// Identifier of a recipe in the external dataset. `0` is never a valid recipe.
pub type RecipeId = i32;

/// Represents a user - only the parts the planner reads or writes.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: UserId,
    pub name: String,
    /// Set once the user has created a plan of their own.
    pub custom_plan: bool,
}

/// A recipe row as it arrives from the external dataset.
///
/// `images`, `total_time` and `instructions` keep the raw encoded text; the
/// `decode` module turns them into usable values on read.
#[derive(Debug, Clone, PartialEq)]
pub struct Recipe {
    pub recipe_id: RecipeId,
    pub name: String,
    pub author_name: Option<String>,
    pub images: Option<String>,
    pub total_time: Option<String>,
    pub calories: f64,
    pub aggregated_rating: Option<f64>,
    pub instructions: Option<String>,
}

/// One of the five recipe positions of a daily plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Dinner,
    MorningSnack,
    AfternoonSnack,
}

impl MealSlot {
    pub const ALL: [MealSlot; 5] = [
        MealSlot::Breakfast,
        MealSlot::Lunch,
        MealSlot::Dinner,
        MealSlot::MorningSnack,
        MealSlot::AfternoonSnack,
    ];
}

/// A user's plan for a single calendar day. Unique per (user_id, date).
#[derive(Debug, Clone, PartialEq)]
pub struct MealPlanRecord {
    pub id: Uuid,
    pub user_id: UserId,
    pub date: NaiveDate,
    pub breakfast: Option<RecipeId>,
    pub lunch: Option<RecipeId>,
    pub dinner: Option<RecipeId>,
    pub morning_snack: Option<RecipeId>,
    pub afternoon_snack: Option<RecipeId>,
    pub meal_count: i32,
    pub description: Option<String>,
    pub daily_calories: i32,
    pub total_calories: i32,
}

impl MealPlanRecord {
    /// Creates an empty record for `user_id` on `date` with a fresh identity.
    pub fn new(user_id: UserId, date: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            date,
            breakfast: None,
            lunch: None,
            dinner: None,
            morning_snack: None,
            afternoon_snack: None,
            meal_count: 0,
            description: None,
            daily_calories: 0,
            total_calories: 0,
        }
    }

    pub fn slot(&self, slot: MealSlot) -> Option<RecipeId> {
        match slot {
            MealSlot::Breakfast => self.breakfast,
            MealSlot::Lunch => self.lunch,
            MealSlot::Dinner => self.dinner,
            MealSlot::MorningSnack => self.morning_snack,
            MealSlot::AfternoonSnack => self.afternoon_snack,
        }
    }

    pub fn set_slot(&mut self, slot: MealSlot, recipe: Option<RecipeId>) {
        let target = match slot {
            MealSlot::Breakfast => &mut self.breakfast,
            MealSlot::Lunch => &mut self.lunch,
            MealSlot::Dinner => &mut self.dinner,
            MealSlot::MorningSnack => &mut self.morning_snack,
            MealSlot::AfternoonSnack => &mut self.afternoon_snack,
        };
        *target = recipe;
    }
}

/// A user's previously established calorie targets. Authoritative over any
/// value supplied in a later edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalorieBaseline {
    pub daily_calories: i32,
    pub total_calories: i32,
}

/// Who is asking, and what day it is for them.
///
/// Passed into every planner operation so nothing depends on ambient state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestContext {
    pub user_id: UserId,
    pub today: NaiveDate,
}

impl RequestContext {
    pub fn new(user_id: UserId, today: NaiveDate) -> Self {
        Self { user_id, today }
    }
}
