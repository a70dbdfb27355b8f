pub mod goal;
pub mod meal;
pub mod metrics;
pub mod profile;

pub use goal::{CalorieGoalResult, GoalTarget, GoalTier, MacroTargets};
pub use meal::{Macros, Meal, MealLibrary, MealSlot, ScaledMeal};
pub use metrics::{ActivityLevel, BodyMetrics, MeasurementSystem, Sex, feet_inches_to_cm, pounds_to_kg};
pub use profile::{SubscriptionTier, UserProfile};
