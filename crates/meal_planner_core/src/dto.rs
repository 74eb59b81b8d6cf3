//! crates/meal_planner_core/src/dto.rs
//!
//! Payloads accepted from and returned to the presentation layer.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::{MealSlot, RecipeId};
use crate::summary::RecipeSlot;

/// One partial update of a daily plan.
///
/// A slot id of `0` and a meal count of `0` mean "leave unchanged"; a missing
/// description means the same.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MealPlanInput {
    pub breakfast: RecipeId,
    pub lunch: RecipeId,
    pub dinner: RecipeId,
    pub morning_snack: RecipeId,
    pub afternoon_snack: RecipeId,
    pub date: Option<NaiveDate>,
    pub description: Option<String>,
    pub meal_count: i32,
    pub daily_calories: i32,
    pub total_calories: i32,
}

impl MealPlanInput {
    pub fn slot(&self, slot: MealSlot) -> RecipeId {
        match slot {
            MealSlot::Breakfast => self.breakfast,
            MealSlot::Lunch => self.lunch,
            MealSlot::Dinner => self.dinner,
            MealSlot::MorningSnack => self.morning_snack,
            MealSlot::AfternoonSnack => self.afternoon_snack,
        }
    }
}

/// A rendered daily plan.
///
/// Edit results carry one `RecipeSlot` per position; current plans wrap each
/// position in a list (see [`CurrentMealPlanDto`]).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MealPlanDto<S = RecipeSlot> {
    pub breakfast: S,
    pub lunch: S,
    pub dinner: S,
    pub morning_snack: S,
    pub afternoon_snack: S,
    pub date: Option<NaiveDate>,
    pub description: Option<String>,
    pub meal_count: i32,
    pub daily_calories: i32,
    pub total_calories: i32,
}

/// A stored plan as listed by `get_current_plans`: an occupied slot is a
/// one-element list, an unset slot an empty one.
pub type CurrentMealPlanDto = MealPlanDto<Vec<RecipeSlot>>;
