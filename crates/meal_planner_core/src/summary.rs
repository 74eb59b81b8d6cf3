//! crates/meal_planner_core/src/summary.rs
//!
//! Projections of a stored recipe for presentation: the short summary embedded
//! in meal plans and the full detail view of a single recipe.

use serde::ser::{SerializeSeq, Serializer};
use serde::Serialize;

use crate::decode::{clean_duration, decode_instructions, decode_list, partition_four, CHUNK_COUNT};
use crate::domain::{Recipe, RecipeId};
use crate::error::{CoreError, CoreResult};
use crate::ports::RecipeRepository;

/// The compact view of a recipe shown inside a meal plan.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeSummary {
    pub recipe_id: RecipeId,
    pub image: String,
    pub total_time: String,
    pub calories: i64,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
}

/// A summary, or the empty marker when the reference did not resolve.
///
/// The empty marker serializes as `[]` rather than `null` so clients can tell
/// "no recipe" apart from a present-but-empty object.
#[derive(Debug, Clone, PartialEq)]
pub enum RecipeSlot {
    Summary(RecipeSummary),
    Empty,
}

impl RecipeSlot {
    pub fn is_empty(&self) -> bool {
        matches!(self, RecipeSlot::Empty)
    }

    pub fn summary(&self) -> Option<&RecipeSummary> {
        match self {
            RecipeSlot::Summary(summary) => Some(summary),
            RecipeSlot::Empty => None,
        }
    }
}

impl Serialize for RecipeSlot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            RecipeSlot::Summary(summary) => summary.serialize(serializer),
            RecipeSlot::Empty => serializer.serialize_seq(Some(0))?.end(),
        }
    }
}

/// How much of the recipe a summary carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryDetail {
    /// Id, image, time, calories and name. Used inside meal plans.
    Short,
    /// `Short` plus author name and rating.
    WithAuthor,
}

/// Builds the summary of `recipe`, or the empty marker if there is none.
///
/// Fails when the recipe has no image at all or its duration is malformed;
/// a half-filled summary is never returned.
pub fn build_summary(recipe: Option<&Recipe>, detail: SummaryDetail) -> CoreResult<RecipeSlot> {
    let Some(recipe) = recipe else {
        return Ok(RecipeSlot::Empty);
    };

    let image = decode_list(recipe.images.as_deref())
        .into_iter()
        .next()
        .ok_or_else(|| {
            CoreError::IndexOutOfRange(format!("recipe {} has no image", recipe.recipe_id))
        })?;
    let total_time = clean_duration(recipe.total_time.as_deref())?;

    let (author_name, rating) = match detail {
        SummaryDetail::Short => (None, None),
        SummaryDetail::WithAuthor => (recipe.author_name.clone(), recipe.aggregated_rating),
    };

    Ok(RecipeSlot::Summary(RecipeSummary {
        recipe_id: recipe.recipe_id,
        image,
        total_time,
        calories: round_calories(recipe.calories),
        name: recipe.name.clone(),
        author_name,
        rating,
    }))
}

/// Looks the recipe up and summarizes it. Id `0` never resolves.
pub async fn summarize(
    recipes: &dyn RecipeRepository,
    recipe_id: RecipeId,
    detail: SummaryDetail,
) -> CoreResult<RecipeSlot> {
    if recipe_id == 0 {
        return Ok(RecipeSlot::Empty);
    }
    let recipe = recipes.find_recipe(recipe_id).await?;
    build_summary(recipe.as_ref(), detail)
}

/// The full view of one recipe with every encoded field decoded.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeDetail {
    pub recipe_id: RecipeId,
    pub name: String,
    pub author_name: Option<String>,
    pub rating: Option<f64>,
    pub images: Vec<String>,
    pub total_time: String,
    pub calories: i64,
    pub instructions: Vec<String>,
    /// `instructions` grouped into pages for display.
    pub instruction_chunks: [String; CHUNK_COUNT],
}

pub fn build_detail(recipe: &Recipe) -> CoreResult<RecipeDetail> {
    let instructions = recipe
        .instructions
        .as_deref()
        .map(decode_instructions)
        .unwrap_or_default();
    let instruction_chunks = partition_four(&instructions);

    Ok(RecipeDetail {
        recipe_id: recipe.recipe_id,
        name: recipe.name.clone(),
        author_name: recipe.author_name.clone(),
        rating: recipe.aggregated_rating,
        images: decode_list(recipe.images.as_deref()),
        total_time: clean_duration(recipe.total_time.as_deref())?,
        calories: round_calories(recipe.calories),
        instructions,
        instruction_chunks,
    })
}

fn round_calories(calories: f64) -> i64 {
    calories.round() as i64
}
