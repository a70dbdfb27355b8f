pub mod cli;
pub mod error;
pub mod interface;
pub mod models;
pub mod planner;
pub mod state;

pub use error::{PlannerError, Result};
pub use models::{BodyMetrics, CalorieGoalResult, Meal, ScaledMeal};
pub use planner::{estimate_calorie_targets, scale_meal};
