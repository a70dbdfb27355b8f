use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::models::{ActivityLevel, GoalTier, MealSlot, MeasurementSystem, Sex, SubscriptionTier};

/// Calorie Planner: calorie goals from body metrics, meals scaled to match.
#[derive(Parser, Debug)]
#[command(name = "calorie_planner")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the profile JSON file (calorie goal, tier, refresh usage).
    #[arg(short, long, global = true, env = "PLANNER_STATE", default_value = "planner_state.json")]
    pub state: PathBuf,

    /// Path to a meal library JSON file. The built-in library is used when absent.
    #[arg(short, long, global = true, env = "PLANNER_MEALS")]
    pub meals: Option<PathBuf>,

    /// Log filter directive, e.g. `debug` or `calorie_planner_rs=trace`.
    #[arg(long, global = true, env = "RUST_LOG", default_value = "warn")]
    pub log_level: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Estimate BMR/TDEE and daily calorie targets from body metrics.
    Calc(CalcArgs),

    /// Show or change the stored calorie goal and tier.
    Goal {
        #[command(subcommand)]
        action: Option<GoalAction>,
    },

    /// Scale a meal to a calorie target.
    Scale(ScaleArgs),

    /// Build a breakfast/lunch/dinner plan for the daily goal.
    Plan(PlanArgs),

    /// Read a generated meal plan from a text file.
    Import {
        /// File holding the completion text.
        file: PathBuf,

        /// Rescale the imported meals to this daily target (1000-5000 kcal).
        #[arg(long)]
        target: Option<u32>,

        /// Add the imported meals to this meal library file.
        #[arg(long)]
        save_library: Option<PathBuf>,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Plan(PlanArgs::default())
    }
}

/// Body metrics. Anything left out is prompted for.
#[derive(Args, Debug, Default)]
pub struct CalcArgs {
    #[arg(long)]
    pub age: Option<u32>,

    #[arg(long, value_enum)]
    pub sex: Option<Sex>,

    /// Unit system for height and weight. Imperial flags imply `us`.
    #[arg(long, value_enum, default_value_t = MeasurementSystem::Metric)]
    pub system: MeasurementSystem,

    #[arg(long, conflicts_with_all = ["feet", "inches", "weight_lbs"])]
    pub height_cm: Option<f64>,

    #[arg(long, conflicts_with_all = ["feet", "inches", "weight_lbs"])]
    pub weight_kg: Option<f64>,

    #[arg(long)]
    pub feet: Option<f64>,

    #[arg(long)]
    pub inches: Option<f64>,

    #[arg(long)]
    pub weight_lbs: Option<f64>,

    #[arg(long, value_enum)]
    pub activity: Option<ActivityLevel>,

    /// Store the target of this tier as the calorie goal without asking.
    #[arg(long, value_enum, conflicts_with = "no_save")]
    pub save: Option<GoalTier>,

    /// Print the targets only.
    #[arg(long)]
    pub no_save: bool,
}

#[derive(Subcommand, Debug)]
pub enum GoalAction {
    /// Print the stored goal and its macro split.
    Show,

    /// Store a daily calorie goal.
    Set { calories: u32 },

    /// Change the subscription tier recorded in the profile.
    Tier {
        #[arg(value_enum)]
        tier: SubscriptionTier,
    },
}

#[derive(Args, Debug, Default)]
pub struct ScaleArgs {
    /// Library meal to scale (fuzzy matched).
    #[arg(long, conflicts_with_all = ["name", "portions"])]
    pub meal: Option<String>,

    /// Ad-hoc meal name.
    #[arg(long, requires = "portions")]
    pub name: Option<String>,

    /// Ad-hoc portions, e.g. "Chicken breast (170g), Rice (185g)".
    #[arg(long, requires = "calories")]
    pub portions: Option<String>,

    #[arg(long)]
    pub calories: Option<f64>,

    #[arg(long, default_value_t = 0.0)]
    pub protein: f64,

    #[arg(long, default_value_t = 0.0)]
    pub carbs: f64,

    #[arg(long, default_value_t = 0.0)]
    pub fat: f64,

    /// Calorie target. Defaults to the stored goal (or its slot share with --slot).
    #[arg(long)]
    pub target: Option<f64>,

    /// Use this slot's share of the stored goal as the target.
    #[arg(long, value_enum, conflicts_with = "target")]
    pub slot: Option<MealSlot>,

    /// Fail on ingredient clauses without a quantity instead of dropping them.
    #[arg(long)]
    pub strict: bool,
}

#[derive(Args, Debug, Default)]
pub struct PlanArgs {
    /// Daily calorie target. Defaults to the stored goal.
    #[arg(long)]
    pub target: Option<u32>,

    /// Seed for meal selection.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Count this plan as a refresh against the tier allowance.
    #[arg(long)]
    pub refresh: bool,

    /// Also write the plan to a CSV file.
    #[arg(long)]
    pub csv: Option<PathBuf>,
}
