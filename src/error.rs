use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlannerError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid meal: {0}")]
    InvalidMeal(String),

    #[error("Meal not found: {0}")]
    MealNotFound(String),

    #[error("No meals available for {0}")]
    NoMeals(String),

    #[error("Unusable generated meal plan: {0}")]
    GeneratedPlan(String),

    #[error("Refresh limit reached for the {0} tier")]
    RefreshLimit(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, PlannerError>;
