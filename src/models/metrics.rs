use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::{PlannerError, Result};
use crate::planner::constants::{
    CM_PER_FOOT, CM_PER_INCH, EXTRA_MULT, KG_PER_POUND, LIGHT_MULT, MODERATE_MULT,
    SEDENTARY_MULT, VERY_MULT,
};

/// Biological sex, selecting the BMR constant set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

/// Activity level used to turn BMR into TDEE.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ActivityLevel {
    /// Little or no exercise.
    Sedentary,
    /// 1-3 days/week.
    Light,
    /// 3-5 days/week.
    Moderate,
    /// 6-7 days/week.
    Very,
    /// Very active plus a physical job.
    Extra,
}

impl ActivityLevel {
    pub const ALL: [ActivityLevel; 5] = [
        ActivityLevel::Sedentary,
        ActivityLevel::Light,
        ActivityLevel::Moderate,
        ActivityLevel::Very,
        ActivityLevel::Extra,
    ];

    /// TDEE multiplier for this level.
    pub fn multiplier(self) -> f64 {
        match self {
            ActivityLevel::Sedentary => SEDENTARY_MULT,
            ActivityLevel::Light => LIGHT_MULT,
            ActivityLevel::Moderate => MODERATE_MULT,
            ActivityLevel::Very => VERY_MULT,
            ActivityLevel::Extra => EXTRA_MULT,
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Sedentary (little or no exercise)",
            ActivityLevel::Light => "Lightly active (1-3 days/week)",
            ActivityLevel::Moderate => "Moderately active (3-5 days/week)",
            ActivityLevel::Very => "Very active (6-7 days/week)",
            ActivityLevel::Extra => "Extra active (very active + physical job)",
        }
    }
}

/// Unit system the body measurements were entered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum MeasurementSystem {
    #[default]
    Metric,
    Us,
}

/// Body measurements for one calculation, always in metric units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyMetrics {
    pub age: u32,
    pub sex: Sex,
    pub height_cm: f64,
    pub weight_kg: f64,
    pub activity_level: ActivityLevel,
}

impl BodyMetrics {
    pub fn new(
        age: u32,
        sex: Sex,
        height_cm: f64,
        weight_kg: f64,
        activity_level: ActivityLevel,
    ) -> Self {
        Self {
            age,
            sex,
            height_cm,
            weight_kg,
            activity_level,
        }
    }

    /// Build metrics from feet/inches and pounds.
    pub fn from_us(
        age: u32,
        sex: Sex,
        feet: f64,
        inches: f64,
        weight_lbs: f64,
        activity_level: ActivityLevel,
    ) -> Self {
        Self::new(
            age,
            sex,
            feet_inches_to_cm(feet, inches),
            pounds_to_kg(weight_lbs),
            activity_level,
        )
    }

    /// Check that every measurement is a strictly positive finite number.
    pub fn validate(&self) -> Result<()> {
        if self.age == 0 {
            return Err(PlannerError::InvalidInput(
                "age must be greater than zero".to_string(),
            ));
        }
        check_positive("height", self.height_cm)?;
        check_positive("weight", self.weight_kg)?;
        Ok(())
    }
}

fn check_positive(field: &str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(PlannerError::InvalidInput(format!(
            "{} must be a positive number, got {}",
            field, value
        )))
    }
}

/// Convert a height in feet and inches to centimeters.
#[inline]
pub fn feet_inches_to_cm(feet: f64, inches: f64) -> f64 {
    feet * CM_PER_FOOT + inches * CM_PER_INCH
}

/// Convert a weight in pounds to kilograms.
#[inline]
pub fn pounds_to_kg(lbs: f64) -> f64 {
    lbs * KG_PER_POUND
}
