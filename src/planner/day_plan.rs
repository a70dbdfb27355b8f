use rand::Rng;
use rand::seq::SliceRandom;
use strsim::jaro_winkler;
use tracing::{debug, info};

use crate::error::{PlannerError, Result};
use crate::models::{Macros, Meal, MealLibrary, MealSlot, ScaledMeal};
use crate::planner::constants::FUZZY_MATCH_THRESHOLD;
use crate::planner::energy::slot_calories;
use crate::planner::portions::scale_meal;
use crate::state::GoalStore;

/// A meal scaled to one slot's share of the daily goal.
#[derive(Debug, Clone)]
pub struct PlannedMeal {
    pub slot: MealSlot,
    pub slot_calories: u32,
    pub meal: ScaledMeal,
}

/// Breakfast, lunch and dinner for one day.
#[derive(Debug, Clone)]
pub struct DayPlan {
    pub daily_goal: u32,
    pub meals: Vec<PlannedMeal>,
    pub total: Macros,
}

/// Sum calories and macros across meals.
pub fn total_macros<'a, I>(meals: I) -> Macros
where
    I: IntoIterator<Item = &'a Macros>,
{
    meals.into_iter().copied().sum()
}

/// Pick one random template per slot.
pub fn pick_meals<'a, R: Rng + ?Sized>(
    library: &'a MealLibrary,
    rng: &mut R,
) -> Result<Vec<(MealSlot, &'a Meal)>> {
    MealSlot::ALL
        .into_iter()
        .map(|slot| {
            library
                .meals(slot)
                .choose(&mut *rng)
                .map(|meal| (slot, meal))
                .ok_or_else(|| PlannerError::NoMeals(slot.to_string()))
        })
        .collect()
}

/// Pick a meal per slot and scale each to its share of `daily_goal`.
pub fn build_day_plan<R: Rng + ?Sized>(
    library: &MealLibrary,
    daily_goal: u32,
    rng: &mut R,
) -> Result<DayPlan> {
    if daily_goal == 0 {
        return Err(PlannerError::InvalidInput(
            "daily goal must be greater than zero".to_string(),
        ));
    }

    let mut meals = Vec::with_capacity(MealSlot::ALL.len());
    for (slot, template) in pick_meals(library, rng)? {
        let target = slot_calories(daily_goal, slot);
        debug!(%slot, meal = %template.name, target, "picked meal");
        meals.push(PlannedMeal {
            slot,
            slot_calories: target,
            meal: scale_meal(template, f64::from(target))?,
        });
    }

    let total = total_macros(meals.iter().map(|p| &p.meal.macros));
    info!(daily_goal, total_calories = total.calories, "built day plan");

    Ok(DayPlan {
        daily_goal,
        meals,
        total,
    })
}

/// Build a new plan and count it against the stored tier allowance.
///
/// The refresh is only recorded once the plan has been built, so a failed
/// build leaves the allowance untouched.
pub fn refresh_day_plan<S, R>(
    store: &S,
    library: &MealLibrary,
    daily_goal: u32,
    rng: &mut R,
) -> Result<DayPlan>
where
    S: GoalStore + ?Sized,
    R: Rng + ?Sized,
{
    let mut profile = store.load_profile()?;
    if !profile.can_refresh() {
        return Err(PlannerError::RefreshLimit(profile.tier.to_string()));
    }

    let plan = build_day_plan(library, daily_goal, rng)?;

    profile.record_refresh()?;
    store.save_profile(&profile)?;
    info!(refresh_count = profile.refresh_count, "recorded plan refresh");

    Ok(plan)
}

/// Find a template by name: case-insensitive exact match first, then the
/// best Jaro-Winkler match above the fuzzy threshold.
pub fn find_meal<'a>(library: &'a MealLibrary, name: &str) -> Result<&'a Meal> {
    let wanted = name.trim().to_lowercase();

    if let Some((_, meal)) = library.iter().find(|(_, m)| m.key() == wanted) {
        return Ok(meal);
    }

    library
        .iter()
        .map(|(_, m)| (m, jaro_winkler(&m.key(), &wanted)))
        .filter(|(_, score)| *score > FUZZY_MATCH_THRESHOLD)
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(meal, _)| meal)
        .ok_or_else(|| PlannerError::MealNotFound(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_total_macros() {
        let a = Macros::new(400.0, 26.0, 30.0, 22.0);
        let b = Macros::new(500.0, 42.0, 45.0, 15.0);
        assert_eq!(total_macros([&a, &b]), Macros::new(900.0, 68.0, 75.0, 37.0));
    }

    #[test]
    fn test_pick_meals_one_per_slot() {
        let library = MealLibrary::builtin();
        let mut rng = StdRng::seed_from_u64(7);
        let picked = pick_meals(&library, &mut rng).unwrap();
        let slots: Vec<MealSlot> = picked.iter().map(|(s, _)| *s).collect();
        assert_eq!(slots, MealSlot::ALL.to_vec());
        for (slot, meal) in picked {
            assert!(library.meals(slot).contains(meal));
        }
    }

    #[test]
    fn test_pick_meals_empty_category() {
        let mut library = MealLibrary::builtin();
        library.dinner.clear();
        let mut rng = StdRng::seed_from_u64(7);
        assert!(matches!(
            pick_meals(&library, &mut rng),
            Err(PlannerError::NoMeals(slot)) if slot == "dinner"
        ));
    }

    #[test]
    fn test_find_meal_exact_and_fuzzy() {
        let library = MealLibrary::builtin();
        assert_eq!(find_meal(&library, "turkey wrap").unwrap().name, "Turkey Wrap");
        assert_eq!(find_meal(&library, "Turkey Wrapp").unwrap().name, "Turkey Wrap");
        assert!(matches!(
            find_meal(&library, "zzzz"),
            Err(PlannerError::MealNotFound(_))
        ));
    }

    #[test]
    fn test_zero_goal_rejected() {
        let library = MealLibrary::builtin();
        let mut rng = StdRng::seed_from_u64(1);
        assert!(build_day_plan(&library, 0, &mut rng).is_err());
    }
}
