//! crates/meal_planner_core/src/planner.rs
//!
//! The meal plan merge engine: creates plans, merges batches of partial edits
//! into the stored per-day records, and renders plans for presentation.

use std::collections::HashSet;
use std::sync::Arc;

use tracing::{debug, info, instrument, warn};

use crate::domain::{MealPlanRecord, MealSlot, RequestContext, User, UserId};
use crate::dto::{CurrentMealPlanDto, MealPlanDto, MealPlanInput};
use crate::error::{CoreError, CoreResult};
use crate::ports::{MealPlanRepository, RecipeRepository, UserRepository};
use crate::summary::{summarize, RecipeSlot, SummaryDetail};

/// Orchestrates plan edits over the three store ports.
#[derive(Clone)]
pub struct MealPlanner {
    users: Arc<dyn UserRepository>,
    recipes: Arc<dyn RecipeRepository>,
    plans: Arc<dyn MealPlanRepository>,
}

impl MealPlanner {
    pub fn new(
        users: Arc<dyn UserRepository>,
        recipes: Arc<dyn RecipeRepository>,
        plans: Arc<dyn MealPlanRepository>,
    ) -> Self {
        Self {
            users,
            recipes,
            plans,
        }
    }

    pub fn recipes(&self) -> &dyn RecipeRepository {
        self.recipes.as_ref()
    }

    /// Creates a fresh plan dated `ctx.today` and echoes the input back.
    ///
    /// Marks the user as having a custom plan. Never merges with a record that
    /// may already exist for today.
    #[instrument(skip(self, ctx, input), fields(user_id = ctx.user_id))]
    pub async fn add_plan(
        &self,
        ctx: &RequestContext,
        input: MealPlanInput,
    ) -> CoreResult<MealPlanInput> {
        let user = self.require_user(ctx.user_id).await?;
        self.enable_custom_plan(user).await?;

        let mut record = MealPlanRecord::new(ctx.user_id, ctx.today);
        record.daily_calories = input.daily_calories;
        record.total_calories = input.total_calories;
        record.description = input.description.clone();
        record.meal_count = input.meal_count;

        self.plans.save_meal_plan(record).await?;
        info!(date = %ctx.today, "meal plan added");
        Ok(input)
    }

    /// Merges a batch of edits into the user's per-day records.
    ///
    /// The batch is validated up front (every entry needs a date, no date may
    /// repeat) and all merged records are written with a single atomic save, so
    /// any error leaves the store untouched. Calorie values always come from
    /// the user's baseline, whatever the inputs say.
    #[instrument(skip(self, ctx, inputs), fields(user_id = ctx.user_id, batch = inputs.len()))]
    pub async fn edit_plans(
        &self,
        ctx: &RequestContext,
        inputs: Vec<MealPlanInput>,
    ) -> CoreResult<Vec<MealPlanDto>> {
        if ctx.user_id <= 0 {
            return Err(CoreError::InvalidArgument(format!(
                "user id must be greater than zero, got {}",
                ctx.user_id
            )));
        }
        let user = self.require_user(ctx.user_id).await?;

        let mut seen = HashSet::with_capacity(inputs.len());
        let mut dates = Vec::with_capacity(inputs.len());
        for input in &inputs {
            let date = input.date.ok_or_else(|| {
                CoreError::InvalidArgument("every meal plan edit needs a date".to_string())
            })?;
            if !seen.insert(date) {
                warn!(%date, "duplicate date in edit batch");
                return Err(CoreError::DuplicateKey(date));
            }
            dates.push(date);
        }

        let baseline = self.plans.find_baseline(user.id).await?.ok_or_else(|| {
            CoreError::NotFound(format!("no calorie baseline for user {}", user.id))
        })?;

        let mut records = Vec::with_capacity(inputs.len());
        let mut rendered = Vec::with_capacity(inputs.len());
        for (mut input, date) in inputs.into_iter().zip(dates) {
            input.daily_calories = baseline.daily_calories;
            input.total_calories = baseline.total_calories;

            let mut record = match self.plans.find_meal_plan(user.id, date).await? {
                Some(existing) => existing,
                None => {
                    debug!(%date, "no record for date, creating one");
                    MealPlanRecord::new(user.id, date)
                }
            };
            self.merge_edit(&mut record, &input).await?;

            rendered.push(self.render_edit(&input).await?);
            records.push(record);
        }

        let saved = records.len();
        self.plans.save_meal_plans(records).await?;
        info!(saved, "meal plans merged");
        Ok(rendered)
    }

    /// Lists the user's plans from `ctx.today` onwards.
    #[instrument(skip(self, ctx), fields(user_id = ctx.user_id))]
    pub async fn get_current_plans(
        &self,
        ctx: &RequestContext,
    ) -> CoreResult<Vec<CurrentMealPlanDto>> {
        match self.users.find_user(ctx.user_id).await? {
            Some(user) if user.custom_plan => {}
            _ => {
                return Err(CoreError::NotFound(format!(
                    "user {} hasn't created a meal plan",
                    ctx.user_id
                )))
            }
        }

        let records = self
            .plans
            .find_meal_plans_from(ctx.user_id, ctx.today)
            .await?;
        debug!(count = records.len(), "current meal plans loaded");

        let mut output = Vec::with_capacity(records.len());
        for record in &records {
            output.push(self.render_current(record).await?);
        }
        Ok(output)
    }

    async fn require_user(&self, user_id: UserId) -> CoreResult<User> {
        self.users
            .find_user(user_id)
            .await?
            .ok_or_else(|| CoreError::NotFound(format!("User not found with id: {user_id}")))
    }

    async fn enable_custom_plan(&self, mut user: User) -> CoreResult<()> {
        if user.custom_plan {
            return Ok(());
        }
        user.custom_plan = true;
        let user_id = user.id;
        self.users.save_user(user).await?;
        debug!(user_id, "custom plan enabled");
        Ok(())
    }

    /// Applies one edit to `record`, field by field.
    async fn merge_edit(&self, record: &mut MealPlanRecord, input: &MealPlanInput) -> CoreResult<()> {
        for slot in MealSlot::ALL {
            let recipe_id = input.slot(slot);
            if recipe_id == 0 {
                continue;
            }
            // An unknown recipe clears the slot instead of failing the edit.
            let resolved = self
                .recipes
                .find_recipe(recipe_id)
                .await?
                .map(|recipe| recipe.recipe_id);
            if resolved.is_none() {
                debug!(?slot, recipe_id, "recipe not found, clearing slot");
            }
            record.set_slot(slot, resolved);
        }

        if let Some(date) = input.date {
            record.date = date;
        }
        if let Some(description) = &input.description {
            record.description = Some(description.clone());
        }
        if input.meal_count != 0 {
            record.meal_count = input.meal_count;
        }
        record.daily_calories = input.daily_calories;
        record.total_calories = input.total_calories;
        Ok(())
    }

    async fn render_edit(&self, input: &MealPlanInput) -> CoreResult<MealPlanDto> {
        let recipes = self.recipes.as_ref();
        Ok(MealPlanDto {
            breakfast: summarize(recipes, input.breakfast, SummaryDetail::Short).await?,
            lunch: summarize(recipes, input.lunch, SummaryDetail::Short).await?,
            dinner: summarize(recipes, input.dinner, SummaryDetail::Short).await?,
            morning_snack: summarize(recipes, input.morning_snack, SummaryDetail::Short).await?,
            afternoon_snack: summarize(recipes, input.afternoon_snack, SummaryDetail::Short).await?,
            date: input.date,
            description: input.description.clone(),
            meal_count: input.meal_count,
            daily_calories: input.daily_calories,
            total_calories: input.total_calories,
        })
    }

    async fn render_current(&self, record: &MealPlanRecord) -> CoreResult<CurrentMealPlanDto> {
        Ok(MealPlanDto {
            breakfast: self.render_stored_slot(record, MealSlot::Breakfast).await?,
            lunch: self.render_stored_slot(record, MealSlot::Lunch).await?,
            dinner: self.render_stored_slot(record, MealSlot::Dinner).await?,
            morning_snack: self.render_stored_slot(record, MealSlot::MorningSnack).await?,
            afternoon_snack: self.render_stored_slot(record, MealSlot::AfternoonSnack).await?,
            date: Some(record.date),
            description: record.description.clone(),
            meal_count: record.meal_count,
            daily_calories: record.daily_calories,
            total_calories: record.total_calories,
        })
    }

    async fn render_stored_slot(
        &self,
        record: &MealPlanRecord,
        slot: MealSlot,
    ) -> CoreResult<Vec<RecipeSlot>> {
        match record.slot(slot) {
            Some(recipe_id) => Ok(vec![
                summarize(self.recipes.as_ref(), recipe_id, SummaryDetail::Short).await?,
            ]),
            None => Ok(Vec::new()),
        }
    }
}
