#[macro_use]
extern crate assert_float_eq;

use calorie_planner_rs::PlannerError;
use calorie_planner_rs::models::{ActivityLevel, BodyMetrics, GoalTier, Sex};
use calorie_planner_rs::planner::{calculate_bmr, calculate_tdee, estimate_calorie_targets};

fn male_metrics(activity: ActivityLevel) -> BodyMetrics {
    BodyMetrics::new(30, Sex::Male, 175.0, 70.0, activity)
}

#[test]
fn test_bmr_matches_harris_benedict() {
    let result = estimate_calorie_targets(&male_metrics(ActivityLevel::Sedentary)).unwrap();
    let expected = 88.362 + 13.397 * 70.0 + 4.799 * 175.0 - 5.677 * 30.0;
    assert_float_absolute_eq!(result.bmr, expected, 1e-6);
}

#[test]
fn test_tdee_uses_activity_multiplier() {
    let result = estimate_calorie_targets(&male_metrics(ActivityLevel::Moderate)).unwrap();
    assert_float_absolute_eq!(result.tdee, result.bmr * 1.55, 1e-9);
}

#[test]
fn test_tdee_increases_with_activity() {
    let bmr = calculate_bmr(30, Sex::Female, 165.0, 60.0);
    let tdees: Vec<f64> = ActivityLevel::ALL
        .iter()
        .map(|&level| calculate_tdee(bmr, level))
        .collect();

    for pair in tdees.windows(2) {
        assert!(pair[0] < pair[1], "TDEE should grow: {} -> {}", pair[0], pair[1]);
    }
}

#[test]
fn test_goal_targets_are_ordered_and_spaced() {
    for sex in [Sex::Male, Sex::Female] {
        for level in ActivityLevel::ALL {
            let metrics = BodyMetrics::new(42, sex, 168.0, 81.5, level);
            let result = estimate_calorie_targets(&metrics).unwrap();

            let loss = result.target(GoalTier::AggressiveLoss).unwrap();
            let mild = result.target(GoalTier::MildLoss).unwrap();
            let maintain = result.target(GoalTier::Maintain).unwrap();
            let gain = result.target(GoalTier::Gain).unwrap();

            assert!(loss < mild && mild < maintain && maintain < gain);
            assert_eq!(mild - loss, 250);
            assert_eq!(maintain - mild, 250);
            assert_eq!(gain - maintain, 500);
        }
    }
}

#[test]
fn test_maintenance_target_includes_correction() {
    let result = estimate_calorie_targets(&male_metrics(ActivityLevel::Light)).unwrap();
    let expected = (result.tdee - 200.0).round() as i64;
    assert_eq!(result.target(GoalTier::Maintain), Some(expected));
}

#[test]
fn test_targets_listed_in_tier_order() {
    let result = estimate_calorie_targets(&male_metrics(ActivityLevel::Very)).unwrap();
    let tiers: Vec<GoalTier> = result.targets.iter().map(|t| t.tier).collect();
    assert_eq!(tiers, GoalTier::ALL.to_vec());
}

#[test]
fn test_us_units_match_metric() {
    // 5 ft 9 in = 175.26 cm, 154 lbs = 69.853 kg
    let us = BodyMetrics::from_us(30, Sex::Male, 5.0, 9.0, 154.0, ActivityLevel::Sedentary);
    let metric = BodyMetrics::new(30, Sex::Male, 175.26, 69.853168, ActivityLevel::Sedentary);

    let a = estimate_calorie_targets(&us).unwrap();
    let b = estimate_calorie_targets(&metric).unwrap();
    assert_float_absolute_eq!(a.bmr, b.bmr, 1e-6);
}

#[test]
fn test_invalid_metrics_produce_no_result() {
    let mut metrics = male_metrics(ActivityLevel::Sedentary);
    metrics.weight_kg = 0.0;
    assert!(matches!(
        estimate_calorie_targets(&metrics),
        Err(PlannerError::InvalidInput(_))
    ));

    metrics.weight_kg = f64::INFINITY;
    assert!(estimate_calorie_targets(&metrics).is_err());
}
