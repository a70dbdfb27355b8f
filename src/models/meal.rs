use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::planner::constants::{BREAKFAST_SHARE, DINNER_SHARE, LUNCH_SHARE};

/// Calories plus protein/carbs/fat grams for a meal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Macros {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

impl Macros {
    pub fn new(calories: f64, protein: f64, carbs: f64, fat: f64) -> Self {
        Self {
            calories,
            protein,
            carbs,
            fat,
        }
    }

    /// Multiply every field by `factor`, rounding each one independently.
    pub fn scaled_rounded(&self, factor: f64) -> Self {
        Self {
            calories: (self.calories * factor).round(),
            protein: (self.protein * factor).round(),
            carbs: (self.carbs * factor).round(),
            fat: (self.fat * factor).round(),
        }
    }

    /// All fields finite and non-negative.
    pub fn is_valid(&self) -> bool {
        [self.calories, self.protein, self.carbs, self.fat]
            .into_iter()
            .all(|v| v.is_finite() && v >= 0.0)
    }
}

impl std::ops::Add for Macros {
    type Output = Macros;

    fn add(self, other: Macros) -> Macros {
        Macros {
            calories: self.calories + other.calories,
            protein: self.protein + other.protein,
            carbs: self.carbs + other.carbs,
            fat: self.fat + other.fat,
        }
    }
}

impl std::iter::Sum for Macros {
    fn sum<I: Iterator<Item = Macros>>(iter: I) -> Self {
        iter.fold(Macros::default(), |acc, m| acc + m)
    }
}

/// A meal template: name, free-text portions and macro totals.
///
/// `portions` holds comma-separated clauses shaped like `Chicken breast (170g)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meal {
    pub name: String,
    pub portions: String,
    pub macros: Macros,
}

impl Meal {
    pub fn new(name: impl Into<String>, portions: impl Into<String>, macros: Macros) -> Self {
        Self {
            name: name.into(),
            portions: portions.into(),
            macros,
        }
    }

    /// Canonical key for lookups (lowercase name).
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }
}

/// A meal rescaled to a calorie target. Macros are whole numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScaledMeal {
    pub name: String,
    pub portions: String,
    pub macros: Macros,

    /// Factor applied to the template (target / template calories).
    #[serde(skip)]
    pub scale: f64,
}

impl From<ScaledMeal> for Meal {
    fn from(scaled: ScaledMeal) -> Self {
        Meal {
            name: scaled.name,
            portions: scaled.portions,
            macros: scaled.macros,
        }
    }
}

/// Meal slot within a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Dinner,
}

impl MealSlot {
    pub const ALL: [MealSlot; 3] = [MealSlot::Breakfast, MealSlot::Lunch, MealSlot::Dinner];

    /// Share of the daily calorie goal for this slot.
    pub fn share(self) -> f64 {
        match self {
            MealSlot::Breakfast => BREAKFAST_SHARE,
            MealSlot::Lunch => LUNCH_SHARE,
            MealSlot::Dinner => DINNER_SHARE,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            MealSlot::Breakfast => "breakfast",
            MealSlot::Lunch => "lunch",
            MealSlot::Dinner => "dinner",
        }
    }
}

impl fmt::Display for MealSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Template meals grouped by slot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MealLibrary {
    #[serde(default)]
    pub breakfast: Vec<Meal>,
    #[serde(default)]
    pub lunch: Vec<Meal>,
    #[serde(default)]
    pub dinner: Vec<Meal>,
}

impl MealLibrary {
    pub fn meals(&self, slot: MealSlot) -> &[Meal] {
        match slot {
            MealSlot::Breakfast => &self.breakfast,
            MealSlot::Lunch => &self.lunch,
            MealSlot::Dinner => &self.dinner,
        }
    }

    pub fn meals_mut(&mut self, slot: MealSlot) -> &mut Vec<Meal> {
        match slot {
            MealSlot::Breakfast => &mut self.breakfast,
            MealSlot::Lunch => &mut self.lunch,
            MealSlot::Dinner => &mut self.dinner,
        }
    }

    /// Every meal with the slot it belongs to.
    pub fn iter(&self) -> impl Iterator<Item = (MealSlot, &Meal)> {
        MealSlot::ALL
            .into_iter()
            .flat_map(move |slot| self.meals(slot).iter().map(move |m| (slot, m)))
    }

    pub fn len(&self) -> usize {
        self.breakfast.len() + self.lunch.len() + self.dinner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The library bundled with the binary.
    pub fn builtin() -> Self {
        Self {
            breakfast: vec![
                Meal::new(
                    "Eggs and Toast",
                    "3 large eggs (150g), 2 slices whole wheat bread (50g)",
                    Macros::new(400.0, 26.0, 30.0, 22.0),
                ),
                Meal::new(
                    "Oatmeal with Protein Powder",
                    "1 cup dry oats (80g), 1 scoop protein powder (30g)",
                    Macros::new(350.0, 24.0, 42.0, 8.0),
                ),
            ],
            lunch: vec![
                Meal::new(
                    "Chicken and Rice",
                    "6 oz chicken breast (170g), 1 cup cooked rice (185g)",
                    Macros::new(450.0, 45.0, 45.0, 8.0),
                ),
                Meal::new(
                    "Turkey Wrap",
                    "6 oz turkey (170g), 1 large tortilla (60g)",
                    Macros::new(400.0, 40.0, 30.0, 12.0),
                ),
            ],
            dinner: vec![
                Meal::new(
                    "Beef and Rice",
                    "6 oz lean beef (170g), 1 cup cooked rice (185g)",
                    Macros::new(500.0, 42.0, 45.0, 15.0),
                ),
                Meal::new(
                    "Chicken and Sweet Potato",
                    "6 oz chicken breast (170g), 1 medium sweet potato (150g)",
                    Macros::new(400.0, 42.0, 35.0, 8.0),
                ),
            ],
        }
    }
}
