use tracing::debug;

use crate::error::Result;
use crate::models::{
    ActivityLevel, BodyMetrics, CalorieGoalResult, GoalTarget, GoalTier, MacroTargets, MealSlot,
    Sex,
};
use crate::planner::constants::*;

/// Basal Metabolic Rate from the revised Harris-Benedict equation.
///
/// Male:   88.362 + 13.397 x kg + 4.799 x cm - 5.677 x age
/// Female: 447.593 + 9.247 x kg + 3.098 x cm - 4.330 x age
pub fn calculate_bmr(age: u32, sex: Sex, height_cm: f64, weight_kg: f64) -> f64 {
    let age = f64::from(age);
    match sex {
        Sex::Male => {
            MALE_BMR_BASE + MALE_WEIGHT_COEF * weight_kg + MALE_HEIGHT_COEF * height_cm
                - MALE_AGE_COEF * age
        }
        Sex::Female => {
            FEMALE_BMR_BASE + FEMALE_WEIGHT_COEF * weight_kg + FEMALE_HEIGHT_COEF * height_cm
                - FEMALE_AGE_COEF * age
        }
    }
}

/// Total Daily Energy Expenditure: BMR times the activity multiplier.
#[inline]
pub fn calculate_tdee(bmr: f64, activity_level: ActivityLevel) -> f64 {
    bmr * activity_level.multiplier()
}

/// Daily target for a goal tier.
///
/// Every tier carries the same flat -200 kcal correction.
pub fn calories_for_goal(tdee: f64, tier: GoalTier) -> i64 {
    (tdee + tier.adjustment() + GOAL_CORRECTION_KCAL).round() as i64
}

/// Compute BMR, TDEE and the four goal targets.
///
/// Fails with `InvalidInput` when a measurement is missing or non-positive;
/// no partial result is produced.
pub fn estimate_calorie_targets(metrics: &BodyMetrics) -> Result<CalorieGoalResult> {
    metrics.validate()?;

    let bmr = calculate_bmr(metrics.age, metrics.sex, metrics.height_cm, metrics.weight_kg);
    let tdee = calculate_tdee(bmr, metrics.activity_level);

    let targets = GoalTier::ALL
        .into_iter()
        .map(|tier| GoalTarget {
            tier,
            calories: calories_for_goal(tdee, tier),
        })
        .collect();

    debug!(bmr, tdee, activity = ?metrics.activity_level, "estimated energy expenditure");

    Ok(CalorieGoalResult { bmr, tdee, targets })
}

/// Macro gram targets for a daily goal (30% protein, 40% carbs, 30% fat).
pub fn macro_targets(calories: u32) -> MacroTargets {
    let kcal = f64::from(calories);
    MacroTargets {
        calories,
        protein_g: (kcal * PROTEIN_SHARE / KCAL_PER_G_PROTEIN).round() as u32,
        carbs_g: (kcal * CARBS_SHARE / KCAL_PER_G_CARBS).round() as u32,
        fat_g: (kcal * FAT_SHARE / KCAL_PER_G_FAT).round() as u32,
    }
}

/// Calories assigned to one meal slot of a daily goal.
pub fn slot_calories(daily_goal: u32, slot: MealSlot) -> u32 {
    (f64::from(daily_goal) * slot.share()).round() as u32
}
