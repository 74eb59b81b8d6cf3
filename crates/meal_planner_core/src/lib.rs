pub mod decode;
pub mod domain;
pub mod dto;
pub mod error;
pub mod planner;
pub mod ports;
pub mod summary;

pub use domain::{CalorieBaseline, MealPlanRecord, MealSlot, Recipe, RecipeId, RequestContext, User, UserId};
pub use dto::{CurrentMealPlanDto, MealPlanDto, MealPlanInput};
pub use error::{CoreError, CoreResult};
pub use planner::MealPlanner;
pub use ports::{MealPlanRepository, PortError, PortResult, RecipeRepository, UserRepository};
pub use summary::{build_detail, build_summary, summarize, RecipeDetail, RecipeSlot, RecipeSummary, SummaryDetail};
