//! services/planner/src/bin/planner.rs

use std::sync::Arc;

use clap::{Parser, Subcommand};
use meal_planner_core::domain::{RecipeId, UserId};
use meal_planner_core::dto::MealPlanInput;
use meal_planner_core::error::CoreError;
use meal_planner_core::ports::RecipeRepository;
use meal_planner_core::summary::build_detail;
use planner_lib::{
    adapters::{MemoryStore, Seed},
    config::Config,
    error::PlannerError,
    state::AppState,
};
use serde::Serialize;
use tokio::io::AsyncReadExt;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "planner", version, about = "Meal plan merge engine over a seeded store")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create today's plan from a JSON `MealPlanInput` read on stdin.
    Add {
        #[arg(long)]
        user: UserId,
    },
    /// Merge a JSON array of `MealPlanInput` edits read on stdin.
    Edit {
        #[arg(long)]
        user: UserId,
    },
    /// List the user's plans from today onwards.
    Current {
        #[arg(long)]
        user: UserId,
    },
    /// Show one recipe with every encoded field decoded.
    Recipe { id: RecipeId },
}

#[tokio::main]
async fn main() -> Result<(), PlannerError> {
    let cli = Cli::parse();

    // --- 1. Load Configuration & Set Up Logging ---
    let config = Arc::new(Config::from_env()?);
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(config.log_level.to_string()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
    info!("Configuration loaded.");

    // --- 2. Load the Store ---
    let store = match &config.seed_path {
        Some(path) => {
            info!(path = %path.display(), "Loading seed file...");
            Seed::from_path(path).await?.into_store()
        }
        None => MemoryStore::new(),
    };

    // --- 3. Build the Shared AppState ---
    let state = AppState::with_store(store, config.clone());

    // --- 4. Run the Command ---
    match cli.command {
        Command::Add { user } => {
            let input: MealPlanInput = serde_json::from_str(&read_stdin().await?)?;
            let echoed = state.planner.add_plan(&state.context_for(user), input).await?;
            print_json(&echoed)
        }
        Command::Edit { user } => {
            let inputs: Vec<MealPlanInput> = serde_json::from_str(&read_stdin().await?)?;
            let merged = state.planner.edit_plans(&state.context_for(user), inputs).await?;
            print_json(&merged)
        }
        Command::Current { user } => {
            let plans = state.planner.get_current_plans(&state.context_for(user)).await?;
            print_json(&plans)
        }
        Command::Recipe { id } => {
            let recipe = state
                .planner
                .recipes()
                .find_recipe(id)
                .await?
                .ok_or_else(|| CoreError::NotFound(format!("Recipe not found with id: {id}")))?;
            print_json(&build_detail(&recipe)?)
        }
    }
}

async fn read_stdin() -> Result<String, PlannerError> {
    let mut buf = String::new();
    tokio::io::stdin().read_to_string(&mut buf).await?;
    Ok(buf)
}

fn print_json<T: Serialize>(value: &T) -> Result<(), PlannerError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
