use dialoguer::{Confirm, Input, Select};

use crate::cli::CalcArgs;
use crate::error::{PlannerError, Result};
use crate::models::{
    ActivityLevel, BodyMetrics, CalorieGoalResult, GoalTier, MeasurementSystem, Sex,
    feet_inches_to_cm, pounds_to_kg,
};

/// Prompt for a strictly positive number.
pub fn prompt_positive(prompt: &str) -> Result<f64> {
    let input: String = Input::new().with_prompt(prompt).interact_text()?;

    let value: f64 = input
        .trim()
        .parse()
        .map_err(|_| PlannerError::InvalidInput(format!("'{}' is not a number", input)))?;

    if !value.is_finite() || value <= 0.0 {
        return Err(PlannerError::InvalidInput(format!(
            "{} must be greater than zero",
            prompt
        )));
    }
    Ok(value)
}

/// Prompt for age in whole years.
pub fn prompt_age() -> Result<u32> {
    let input: String = Input::new()
        .with_prompt("Age in years")
        .interact_text()?;

    match input.trim().parse::<u32>() {
        Ok(age) if age > 0 => Ok(age),
        _ => Err(PlannerError::InvalidInput(format!("'{}' is not a valid age", input))),
    }
}

pub fn prompt_sex() -> Result<Sex> {
    let selection = Select::new()
        .with_prompt("Sex")
        .items(&["Male", "Female"])
        .default(0)
        .interact()?;

    Ok(if selection == 0 { Sex::Male } else { Sex::Female })
}

pub fn prompt_activity() -> Result<ActivityLevel> {
    let options: Vec<&str> = ActivityLevel::ALL.iter().map(|a| a.description()).collect();

    let selection = Select::new()
        .with_prompt("Activity level")
        .items(&options)
        .default(0)
        .interact()?;

    Ok(ActivityLevel::ALL[selection])
}

/// Prompt for inches, empty meaning zero.
fn prompt_inches() -> Result<f64> {
    let input: String = Input::new()
        .with_prompt("Height (inches)")
        .default("0".to_string())
        .interact_text()?;

    match input.trim().parse::<f64>() {
        Ok(v) if v.is_finite() && v >= 0.0 => Ok(v),
        _ => Err(PlannerError::InvalidInput(format!("'{}' is not a valid inch value", input))),
    }
}

/// Whether the flags ask for US units. Any imperial flag implies them.
fn uses_us_units(args: &CalcArgs) -> bool {
    args.system == MeasurementSystem::Us
        || args.feet.is_some()
        || args.inches.is_some()
        || args.weight_lbs.is_some()
}

/// Reject metric height/weight flags when US units are in effect.
fn check_unit_flags(args: &CalcArgs) -> Result<()> {
    if uses_us_units(args) && (args.height_cm.is_some() || args.weight_kg.is_some()) {
        return Err(PlannerError::InvalidInput(
            "--height-cm/--weight-kg cannot be combined with US units".to_string(),
        ));
    }
    Ok(())
}

/// Build body metrics from flags, prompting for whatever is missing.
pub fn collect_body_metrics(args: &CalcArgs) -> Result<BodyMetrics> {
    check_unit_flags(args)?;

    let age = match args.age {
        Some(age) => age,
        None => prompt_age()?,
    };
    let sex = match args.sex {
        Some(sex) => sex,
        None => prompt_sex()?,
    };

    let (height_cm, weight_kg) = if uses_us_units(args) {
        let feet = match args.feet {
            Some(v) => v,
            None => prompt_positive("Height (feet)")?,
        };
        let inches = match args.inches {
            Some(v) => v,
            None if args.feet.is_some() => 0.0,
            None => prompt_inches()?,
        };
        let lbs = match args.weight_lbs {
            Some(v) => v,
            None => prompt_positive("Weight (lbs)")?,
        };
        (feet_inches_to_cm(feet, inches), pounds_to_kg(lbs))
    } else {
        let height = match args.height_cm {
            Some(v) => v,
            None => prompt_positive("Height (cm)")?,
        };
        let weight = match args.weight_kg {
            Some(v) => v,
            None => prompt_positive("Weight (kg)")?,
        };
        (height, weight)
    };

    let activity = match args.activity {
        Some(a) => a,
        None => prompt_activity()?,
    };

    Ok(BodyMetrics::new(age, sex, height_cm, weight_kg, activity))
}

/// Let the user pick one of the computed targets, or none.
pub fn prompt_goal_tier(result: &CalorieGoalResult) -> Result<Option<GoalTier>> {
    let mut options: Vec<String> = result
        .targets
        .iter()
        .map(|t| format!("{} - {} calories", t.tier.label(), t.calories))
        .collect();
    options.push("Don't save a goal".to_string());

    let selection = Select::new()
        .with_prompt("Select your calorie goal")
        .items(&options)
        .default(2) // maintain
        .interact()?;

    Ok(result.targets.get(selection).map(|t| t.tier))
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
