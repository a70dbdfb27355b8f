use crate::models::{CalorieGoalResult, MacroTargets, Macros, MealSlot, ScaledMeal, UserProfile};
use crate::planner::{DayPlan, GeneratedPlan, slot_calories};

fn macro_line(macros: &Macros) -> String {
    format!(
        "{:.0} cal | P:{:.0}g C:{:.0}g F:{:.0}g",
        macros.calories, macros.protein, macros.carbs, macros.fat
    )
}

/// Display BMR, TDEE and the selectable targets.
pub fn display_goal_result(result: &CalorieGoalResult) {
    println!();
    println!("=== Calorie Targets ===");
    println!();
    println!("BMR:  {:.0} kcal/day", result.bmr);
    println!("TDEE: {:.0} kcal/day", result.tdee);
    println!();

    let width = result
        .targets
        .iter()
        .map(|t| t.tier.label().len())
        .max()
        .unwrap_or(10);

    for target in &result.targets {
        println!(
            "  {:<width$}  {:>5} calories",
            target.tier.label(),
            target.calories,
            width = width
        );
    }
    println!();
}

/// Display the stored profile and the goal's macro split.
pub fn display_profile(profile: &UserProfile, targets: Option<&MacroTargets>) {
    println!();
    match profile.calorie_goal {
        Some(goal) => println!("Calorie goal: {} kcal/day", goal),
        None => println!("Calorie goal: (not set, run `calc` or `goal set`)"),
    }
    println!("Tier: {} ({} refreshes used)", profile.tier, profile.refresh_count);

    if let Some(t) = targets {
        println!(
            "Macro targets: protein {}g, carbs {}g, fat {}g",
            t.protein_g, t.carbs_g, t.fat_g
        );
        for slot in MealSlot::ALL {
            println!("  {:<9} ~{} cal", slot.name(), slot_calories(t.calories, slot));
        }
    }
    println!();
}

/// Display one scaled meal.
pub fn display_scaled_meal(meal: &ScaledMeal) {
    println!();
    println!("=== {} (x{:.2}) ===", meal.name, meal.scale);
    if meal.portions.is_empty() {
        println!("  (no quantified ingredients)");
    } else {
        for clause in meal.portions.split(", ") {
            println!("  - {}", clause);
        }
    }
    println!("  {}", macro_line(&meal.macros));
    println!();
}

/// Display a day plan with per-slot targets and totals.
pub fn display_day_plan(plan: &DayPlan) {
    println!();
    println!("=== Meal Plan for {} calories ===", plan.daily_goal);
    println!();

    for planned in &plan.meals {
        println!(
            "{:<9} {} (target {} cal)",
            planned.slot.name(),
            planned.meal.name,
            planned.slot_calories
        );
        println!("          {}", planned.meal.portions);
        println!("          {}", macro_line(&planned.meal.macros));
    }

    println!();
    println!("--- Total ---");
    println!("{}", macro_line(&plan.total));
    println!();
}

/// Display a generated plan as parsed.
pub fn display_generated_plan(plan: &GeneratedPlan) {
    println!();
    println!("=== Generated Meal Plan ===");
    println!();

    for slot in MealSlot::ALL {
        let meal = plan.meal(slot);
        println!("{:<9} {}", slot.name(), meal.name);
        println!("          {}", meal.portions);
        println!("          {}", macro_line(&meal.macros));
    }

    println!();
    println!("--- Total ---");
    println!("{}", macro_line(&plan.total));
    println!();
}
