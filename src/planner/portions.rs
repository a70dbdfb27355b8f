use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::error::{PlannerError, Result};
use crate::models::{Meal, ScaledMeal};

/// `<name> (<amount><unit>)`: decimal amount immediately followed by a letters-only unit.
static CLAUSE_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"^(?P<name>.+?)\s*\((?P<amount>\d+(?:\.\d+)?)(?P<unit>[A-Za-z]+)\)$").ok()
});

/// How clauses that don't match the ingredient pattern are handled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ClauseMode {
    /// Drop unmatched clauses from the output.
    #[default]
    Lenient,
    /// Fail the whole call with `InvalidMeal`.
    Strict,
}

/// One quantified ingredient clause. The unit is passed through untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct Ingredient {
    pub name: String,
    pub amount: f64,
    pub unit: String,
}

impl Ingredient {
    /// Copy with the amount multiplied by `factor` and rounded.
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            name: self.name.clone(),
            amount: (self.amount * factor).round(),
            unit: self.unit.clone(),
        }
    }
}

impl fmt::Display for Ingredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}{})", self.name, self.amount, self.unit)
    }
}

/// Parse a single clause such as `Chicken breast (170g)`.
pub fn parse_ingredient(clause: &str) -> Option<Ingredient> {
    let pattern = CLAUSE_PATTERN.as_ref()?;
    let caps = pattern.captures(clause.trim())?;

    let amount: f64 = caps["amount"].parse().ok()?;
    Some(Ingredient {
        name: caps["name"].trim().to_string(),
        amount,
        unit: caps["unit"].to_string(),
    })
}

/// Parse a comma-separated portions string, preserving clause order.
///
/// Blank clauses are ignored in both modes.
pub fn parse_portions(portions: &str, mode: ClauseMode) -> Result<Vec<Ingredient>> {
    let mut ingredients = Vec::new();

    for clause in portions.split(',').map(str::trim).filter(|c| !c.is_empty()) {
        match parse_ingredient(clause) {
            Some(ingredient) => ingredients.push(ingredient),
            None if mode == ClauseMode::Strict => {
                return Err(PlannerError::InvalidMeal(format!(
                    "unquantified ingredient clause: '{}'",
                    clause
                )));
            }
            None => debug!(clause, "dropping unquantified ingredient clause"),
        }
    }

    Ok(ingredients)
}

/// Render ingredients back into a portions string.
pub fn render_portions(ingredients: &[Ingredient]) -> String {
    ingredients
        .iter()
        .map(|i| i.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Rescale a meal so its calories match `target_calories`.
///
/// Unmatched ingredient clauses are dropped. See [`scale_meal_with`].
pub fn scale_meal(meal: &Meal, target_calories: f64) -> Result<ScaledMeal> {
    scale_meal_with(meal, target_calories, ClauseMode::Lenient)
}

/// Rescale a meal by `target_calories / meal.macros.calories`.
///
/// Every ingredient amount and every macro field is multiplied by the same
/// factor and rounded on its own, so protein/carbs/fat are not re-derived
/// from the scaled calories.
pub fn scale_meal_with(meal: &Meal, target_calories: f64, mode: ClauseMode) -> Result<ScaledMeal> {
    if !meal.macros.calories.is_finite() || meal.macros.calories <= 0.0 {
        return Err(PlannerError::InvalidMeal(format!(
            "'{}' has {} calories; cannot scale",
            meal.name, meal.macros.calories
        )));
    }
    if !meal.macros.is_valid() {
        return Err(PlannerError::InvalidMeal(format!(
            "'{}' has negative or non-finite macros",
            meal.name
        )));
    }
    if !target_calories.is_finite() || target_calories <= 0.0 {
        return Err(PlannerError::InvalidInput(format!(
            "target calories must be positive, got {}",
            target_calories
        )));
    }

    let scale = target_calories / meal.macros.calories;
    if !scale.is_finite() {
        return Err(PlannerError::InvalidMeal(format!(
            "'{}' has too few calories ({}) to scale to {}",
            meal.name, meal.macros.calories, target_calories
        )));
    }

    let ingredients: Vec<Ingredient> = parse_portions(&meal.portions, mode)?
        .iter()
        .map(|i| i.scaled(scale))
        .collect();
    let macros = meal.macros.scaled_rounded(scale);

    if !macros.is_valid() || ingredients.iter().any(|i| !i.amount.is_finite()) {
        return Err(PlannerError::InvalidMeal(format!(
            "'{}' scaled by {} overflows",
            meal.name, scale
        )));
    }

    debug!(meal = %meal.name, scale, ingredients = ingredients.len(), "scaled meal");

    Ok(ScaledMeal {
        name: meal.name.clone(),
        portions: render_portions(&ingredients),
        macros,
        scale,
    })
}
