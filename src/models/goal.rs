use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::planner::constants::{AGGRESSIVE_LOSS_KCAL, GAIN_KCAL, MAINTAIN_KCAL, MILD_LOSS_KCAL};

/// Calorie goal category offered after a calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum GoalTier {
    AggressiveLoss,
    MildLoss,
    Maintain,
    Gain,
}

impl GoalTier {
    pub const ALL: [GoalTier; 4] = [
        GoalTier::AggressiveLoss,
        GoalTier::MildLoss,
        GoalTier::Maintain,
        GoalTier::Gain,
    ];

    /// kcal/day offset from TDEE.
    pub fn adjustment(self) -> f64 {
        match self {
            GoalTier::AggressiveLoss => AGGRESSIVE_LOSS_KCAL,
            GoalTier::MildLoss => MILD_LOSS_KCAL,
            GoalTier::Maintain => MAINTAIN_KCAL,
            GoalTier::Gain => GAIN_KCAL,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            GoalTier::AggressiveLoss => "Weight Loss (1 lb/week)",
            GoalTier::MildLoss => "Mild Loss (0.5 lb/week)",
            GoalTier::Maintain => "Maintain Weight",
            GoalTier::Gain => "Weight Gain",
        }
    }
}

impl fmt::Display for GoalTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single selectable daily calorie target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalTarget {
    pub tier: GoalTier,
    pub calories: i64,
}

/// Output of the energy expenditure estimator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalorieGoalResult {
    /// Basal Metabolic Rate in kcal/day.
    pub bmr: f64,

    /// Total Daily Energy Expenditure in kcal/day.
    pub tdee: f64,

    /// One target per tier, ordered from most aggressive loss to gain.
    pub targets: Vec<GoalTarget>,
}

impl CalorieGoalResult {
    /// Integer target for a tier.
    pub fn target(&self, tier: GoalTier) -> Option<i64> {
        self.targets
            .iter()
            .find(|t| t.tier == tier)
            .map(|t| t.calories)
    }
}

/// Daily macro gram targets derived from a calorie goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroTargets {
    pub calories: u32,
    pub protein_g: u32,
    pub carbs_g: u32,
    pub fat_g: u32,
}
