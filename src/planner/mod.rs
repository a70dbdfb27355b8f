pub mod constants;
pub mod day_plan;
pub mod energy;
pub mod generated;
pub mod portions;

pub use day_plan::{
    DayPlan, PlannedMeal, build_day_plan, find_meal, pick_meals, refresh_day_plan, total_macros,
};
pub use energy::{
    calculate_bmr, calculate_tdee, calories_for_goal, estimate_calorie_targets, macro_targets,
    slot_calories,
};
pub use generated::{GeneratedPlan, parse_generated_plan, validate_plan_target};
pub use portions::{
    ClauseMode, Ingredient, parse_ingredient, parse_portions, render_portions, scale_meal,
    scale_meal_with,
};
