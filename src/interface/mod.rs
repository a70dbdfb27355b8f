pub mod export;
pub mod prompts;
pub mod render;

pub use export::write_day_plan_csv;
pub use prompts::{
    collect_body_metrics, prompt_activity, prompt_age, prompt_goal_tier, prompt_positive,
    prompt_sex, prompt_yes_no,
};
pub use render::{
    display_day_plan, display_generated_plan, display_goal_result, display_profile,
    display_scaled_meal,
};
