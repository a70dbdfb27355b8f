use rand::SeedableRng;
use rand::rngs::StdRng;

use calorie_planner_rs::PlannerError;
use calorie_planner_rs::models::{MealLibrary, MealSlot, SubscriptionTier, UserProfile};
use calorie_planner_rs::planner::{build_day_plan, refresh_day_plan, slot_calories, total_macros};
use calorie_planner_rs::state::{GoalStore, JsonGoalStore, MemoryGoalStore};

#[test]
fn test_day_plan_hits_slot_targets() {
    let library = MealLibrary::builtin();
    let mut rng = StdRng::seed_from_u64(123);
    let plan = build_day_plan(&library, 2000, &mut rng).unwrap();

    assert_eq!(plan.meals.len(), 3);
    for (planned, slot) in plan.meals.iter().zip(MealSlot::ALL) {
        assert_eq!(planned.slot, slot);
        assert_eq!(planned.slot_calories, slot_calories(2000, slot));
        assert_eq!(planned.meal.macros.calories, f64::from(planned.slot_calories));
        assert!(!planned.meal.portions.is_empty());
    }

    assert_eq!(plan.total.calories, 2000.0);
    assert_eq!(plan.total, total_macros(plan.meals.iter().map(|p| &p.meal.macros)));
}

#[test]
fn test_day_plan_is_reproducible_with_seed() {
    let library = MealLibrary::builtin();
    let a = build_day_plan(&library, 1800, &mut StdRng::seed_from_u64(9)).unwrap();
    let b = build_day_plan(&library, 1800, &mut StdRng::seed_from_u64(9)).unwrap();

    let names_a: Vec<&str> = a.meals.iter().map(|p| p.meal.name.as_str()).collect();
    let names_b: Vec<&str> = b.meals.iter().map(|p| p.meal.name.as_str()).collect();
    assert_eq!(names_a, names_b);
}

#[test]
fn test_day_plan_fails_on_empty_slot() {
    let library = MealLibrary {
        breakfast: MealLibrary::builtin().breakfast,
        ..Default::default()
    };
    let mut rng = StdRng::seed_from_u64(1);
    assert!(matches!(
        build_day_plan(&library, 2000, &mut rng),
        Err(PlannerError::NoMeals(_))
    ));
}

#[test]
fn test_goal_flows_through_json_store() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonGoalStore::new(dir.path().join("planner_state.json"));

    store.store_goal(2150).unwrap();
    let profile = store.load_profile().unwrap();
    assert_eq!(profile.calorie_goal, Some(2150));

    let library = MealLibrary::builtin();
    let mut rng = StdRng::seed_from_u64(5);
    let plan = build_day_plan(&library, profile.calorie_goal.unwrap(), &mut rng).unwrap();
    assert_eq!(plan.daily_goal, 2150);
}

#[test]
fn test_refresh_allowance_persists() {
    let store = MemoryGoalStore::new(UserProfile {
        calorie_goal: Some(2000),
        tier: SubscriptionTier::Basic,
        refresh_count: 0,
    });

    let mut profile = store.load_profile().unwrap();
    profile.record_refresh().unwrap();
    store.save_profile(&profile).unwrap();

    let mut reloaded = store.load_profile().unwrap();
    assert!(matches!(
        reloaded.record_refresh(),
        Err(PlannerError::RefreshLimit(_))
    ));
}

#[test]
fn test_failed_refresh_keeps_allowance() {
    let store = MemoryGoalStore::new(UserProfile {
        calorie_goal: Some(2000),
        tier: SubscriptionTier::Basic,
        refresh_count: 0,
    });
    let no_dinners = MealLibrary {
        dinner: Vec::new(),
        ..MealLibrary::builtin()
    };
    let mut rng = StdRng::seed_from_u64(3);

    assert!(matches!(
        refresh_day_plan(&store, &no_dinners, 2000, &mut rng),
        Err(PlannerError::NoMeals(_))
    ));
    assert_eq!(store.load_profile().unwrap().refresh_count, 0);

    let plan = refresh_day_plan(&store, &MealLibrary::builtin(), 2000, &mut rng).unwrap();
    assert_eq!(plan.total.calories, 2000.0);
    assert_eq!(store.load_profile().unwrap().refresh_count, 1);

    assert!(matches!(
        refresh_day_plan(&store, &MealLibrary::builtin(), 2000, &mut rng),
        Err(PlannerError::RefreshLimit(_))
    ));
    assert_eq!(store.load_profile().unwrap().refresh_count, 1);
}
