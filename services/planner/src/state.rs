//! services/planner/src/state.rs
//!
//! Defines the application state shared by every command.

use std::sync::Arc;

use meal_planner_core::domain::{RequestContext, UserId};
use meal_planner_core::planner::MealPlanner;

use crate::adapters::MemoryStore;
use crate::config::Config;

/// The shared application state, created once at startup.
#[derive(Clone)]
pub struct AppState {
    pub planner: MealPlanner,
    pub config: Arc<Config>,
}

impl AppState {
    /// Wires the planner to a single store that serves every port.
    pub fn with_store(store: MemoryStore, config: Arc<Config>) -> Self {
        let store = Arc::new(store);
        let planner = MealPlanner::new(store.clone(), store.clone(), store);
        Self { planner, config }
    }

    /// The request context for `user_id`, dated by the configured clock.
    pub fn context_for(&self, user_id: UserId) -> RequestContext {
        RequestContext::new(user_id, self.config.today())
    }
}
