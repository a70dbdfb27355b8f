use std::fs;
use std::path::Path;

use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing_subscriber::EnvFilter;

use calorie_planner_rs::cli::{CalcArgs, Cli, Command, GoalAction, PlanArgs, ScaleArgs};
use calorie_planner_rs::error::{PlannerError, Result};
use calorie_planner_rs::interface::{
    collect_body_metrics, display_day_plan, display_generated_plan, display_goal_result,
    display_profile, display_scaled_meal, prompt_goal_tier, prompt_yes_no, write_day_plan_csv,
};
use calorie_planner_rs::models::{Macros, Meal, MealSlot};
use calorie_planner_rs::planner::{
    ClauseMode, build_day_plan, estimate_calorie_targets, find_meal, macro_targets,
    parse_generated_plan, refresh_day_plan, scale_meal, scale_meal_with, slot_calories,
    total_macros, validate_plan_target,
};
use calorie_planner_rs::state::{GoalStore, JsonGoalStore, add_to_library, library_or_builtin};

fn main() {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(directive: &str) {
    let filter = EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let store = JsonGoalStore::new(&cli.state);
    let meals_path = cli.meals.as_deref();

    match cli.command.unwrap_or_default() {
        Command::Calc(args) => cmd_calc(&store, &args),
        Command::Goal { action } => cmd_goal(&store, action.unwrap_or(GoalAction::Show)),
        Command::Scale(args) => cmd_scale(&store, meals_path, &args),
        Command::Plan(args) => cmd_plan(&store, meals_path, &args),
        Command::Import {
            file,
            target,
            save_library,
        } => cmd_import(&file, target, save_library.as_deref()),
    }
}

/// Compute calorie targets and optionally store one as the goal.
fn cmd_calc(store: &impl GoalStore, args: &CalcArgs) -> Result<()> {
    let metrics = collect_body_metrics(args)?;
    let result = estimate_calorie_targets(&metrics)?;

    display_goal_result(&result);

    if args.no_save {
        return Ok(());
    }

    let tier = match args.save {
        Some(tier) => Some(tier),
        None => prompt_goal_tier(&result)?,
    };

    let Some(tier) = tier else {
        return Ok(());
    };

    let calories = result
        .target(tier)
        .and_then(|c| u32::try_from(c).ok())
        .filter(|&c| c > 0)
        .ok_or_else(|| {
            PlannerError::InvalidInput(format!("{} target is not a usable goal", tier.label()))
        })?;

    store.store_goal(calories)?;
    println!("Saved calorie goal: {} calories ({}).", calories, tier.label());

    Ok(())
}

/// Show or change the stored profile.
fn cmd_goal(store: &impl GoalStore, action: GoalAction) -> Result<()> {
    match action {
        GoalAction::Show => {
            let profile = store.load_profile()?;
            let targets = profile.calorie_goal.map(macro_targets);
            display_profile(&profile, targets.as_ref());
        }
        GoalAction::Set { calories } => {
            let current = store.load_profile()?.calorie_goal;
            if let Some(existing) = current.filter(|&c| c != calories) {
                let replace = prompt_yes_no(
                    &format!("Replace current goal of {} calories?", existing),
                    true,
                )?;
                if !replace {
                    return Ok(());
                }
            }
            store.store_goal(calories)?;
            println!("Saved calorie goal: {} calories.", calories);
        }
        GoalAction::Tier { tier } => {
            let mut profile = store.load_profile()?;
            profile.tier = tier;
            store.save_profile(&profile)?;
            println!("Tier set to {}.", tier);
        }
    }
    Ok(())
}

/// Scale a library or ad-hoc meal to a target.
fn cmd_scale(store: &impl GoalStore, meals_path: Option<&Path>, args: &ScaleArgs) -> Result<()> {
    let meal = match (&args.meal, &args.portions) {
        (Some(name), _) => {
            let library = library_or_builtin(meals_path)?;
            find_meal(&library, name)?.clone()
        }
        (None, Some(portions)) => Meal::new(
            args.name.clone().unwrap_or_else(|| "Custom meal".to_string()),
            portions.clone(),
            Macros::new(
                args.calories.unwrap_or(0.0),
                args.protein,
                args.carbs,
                args.fat,
            ),
        ),
        (None, None) => {
            return Err(PlannerError::InvalidInput(
                "pass --meal or --portions with --calories".to_string(),
            ));
        }
    };

    let target = match args.target {
        Some(t) => t,
        None => {
            let goal = store.load_profile()?.calorie_goal.ok_or_else(|| {
                PlannerError::InvalidInput("no --target given and no calorie goal stored".to_string())
            })?;
            let kcal = match args.slot {
                Some(slot) => slot_calories(goal, slot),
                None => goal,
            };
            f64::from(kcal)
        }
    };

    let mode = if args.strict {
        ClauseMode::Strict
    } else {
        ClauseMode::Lenient
    };

    let scaled = scale_meal_with(&meal, target, mode)?;
    display_scaled_meal(&scaled);
    Ok(())
}

/// Build a day plan for the target or stored goal.
fn cmd_plan(store: &impl GoalStore, meals_path: Option<&Path>, args: &PlanArgs) -> Result<()> {
    let profile = store.load_profile()?;

    let daily_goal = match args.target.or(profile.calorie_goal) {
        Some(goal) => goal,
        None => {
            println!("No calorie goal stored. Run `calc` or pass --target.");
            return Ok(());
        }
    };

    let library = library_or_builtin(meals_path)?;
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let plan = if args.refresh {
        refresh_day_plan(store, &library, daily_goal, &mut rng)?
    } else {
        build_day_plan(&library, daily_goal, &mut rng)?
    };
    display_day_plan(&plan);

    if let Some(path) = &args.csv {
        write_day_plan_csv(&plan, path)?;
        println!("Plan written to {}", path.display());
    }

    Ok(())
}

/// Parse a generated plan, optionally rescaling it to a daily target and
/// adding the meals to a library file.
fn cmd_import(file: &Path, target: Option<u32>, save_library: Option<&Path>) -> Result<()> {
    let text = fs::read_to_string(file)?;
    let plan = parse_generated_plan(&text)?;

    let meals: Vec<(MealSlot, Meal)> = match target {
        None => {
            display_generated_plan(&plan);
            MealSlot::ALL
                .into_iter()
                .map(|slot| (slot, plan.meal(slot).clone()))
                .collect()
        }
        Some(target) => {
            let target = validate_plan_target(target)?;
            let mut scaled = Vec::with_capacity(MealSlot::ALL.len());
            for slot in MealSlot::ALL {
                let meal = scale_meal(plan.meal(slot), f64::from(slot_calories(target, slot)))?;
                display_scaled_meal(&meal);
                scaled.push((slot, meal));
            }

            let total = total_macros(scaled.iter().map(|(_, m)| &m.macros));
            println!(
                "Total: {:.0} cal | P:{:.0}g C:{:.0}g F:{:.0}g",
                total.calories, total.protein, total.carbs, total.fat
            );
            println!();

            scaled
                .into_iter()
                .map(|(slot, meal)| (slot, Meal::from(meal)))
                .collect()
        }
    };

    if let Some(path) = save_library {
        let library = add_to_library(path, meals)?;
        println!("Added meals to {} ({} total).", path.display(), library.len());
    }

    Ok(())
}
