use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{PlannerError, Result};
use crate::models::{Macros, Meal, MealSlot};
use crate::planner::constants::{MAX_PLAN_TARGET_KCAL, MIN_PLAN_TARGET_KCAL};
use crate::planner::day_plan::total_macros;

/// Outermost `{ ... }` span, across newlines. Completions sometimes wrap JSON in markdown.
static JSON_OBJECT: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"(?s)\{.*\}").ok());

/// A three-meal plan produced by a text completion service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedPlan {
    pub breakfast: Meal,
    pub lunch: Meal,
    pub dinner: Meal,

    /// Recomputed from the three meals; whatever the completion reported is discarded.
    pub total: Macros,
}

impl GeneratedPlan {
    pub fn meal(&self, slot: MealSlot) -> &Meal {
        match slot {
            MealSlot::Breakfast => &self.breakfast,
            MealSlot::Lunch => &self.lunch,
            MealSlot::Dinner => &self.dinner,
        }
    }
}

/// Check a daily target is inside the range generated plans are requested for.
pub fn validate_plan_target(calories: u32) -> Result<u32> {
    if (MIN_PLAN_TARGET_KCAL..=MAX_PLAN_TARGET_KCAL).contains(&calories) {
        Ok(calories)
    } else {
        Err(PlannerError::InvalidInput(format!(
            "calories must be a number between {} and {}",
            MIN_PLAN_TARGET_KCAL, MAX_PLAN_TARGET_KCAL
        )))
    }
}

/// Extract, validate and normalize a generated meal plan from completion text.
pub fn parse_generated_plan(text: &str) -> Result<GeneratedPlan> {
    let json = JSON_OBJECT
        .as_ref()
        .and_then(|re| re.find(text))
        .map(|m| m.as_str())
        .ok_or_else(|| PlannerError::GeneratedPlan("no JSON object found".to_string()))?;

    let mut plan: GeneratedPlan = serde_json::from_str(json).map_err(|e| {
        warn!(error = %e, "generated plan has an invalid structure");
        PlannerError::GeneratedPlan(format!("invalid structure: {}", e))
    })?;

    for slot in MealSlot::ALL {
        validate_generated_meal(slot, plan.meal(slot))?;
    }

    plan.total = total_macros(MealSlot::ALL.iter().map(|&slot| &plan.meal(slot).macros));
    Ok(plan)
}

fn validate_generated_meal(slot: MealSlot, meal: &Meal) -> Result<()> {
    if meal.name.trim().is_empty() {
        return Err(PlannerError::GeneratedPlan(format!("{} has no name", slot)));
    }
    if meal.portions.trim().is_empty() {
        return Err(PlannerError::GeneratedPlan(format!("{} has no portions", slot)));
    }
    if !meal.macros.is_valid() {
        return Err(PlannerError::GeneratedPlan(format!(
            "{} has negative or non-finite macros",
            slot
        )));
    }
    Ok(())
}
