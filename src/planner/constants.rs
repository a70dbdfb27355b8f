/// Revised Harris-Benedict coefficients (male).
pub const MALE_BMR_BASE: f64 = 88.362;
pub const MALE_WEIGHT_COEF: f64 = 13.397;
pub const MALE_HEIGHT_COEF: f64 = 4.799;
pub const MALE_AGE_COEF: f64 = 5.677;

/// Revised Harris-Benedict coefficients (female).
pub const FEMALE_BMR_BASE: f64 = 447.593;
pub const FEMALE_WEIGHT_COEF: f64 = 9.247;
pub const FEMALE_HEIGHT_COEF: f64 = 3.098;
pub const FEMALE_AGE_COEF: f64 = 4.330;

/// TDEE multipliers per activity level.
pub const SEDENTARY_MULT: f64 = 1.2;
pub const LIGHT_MULT: f64 = 1.375;
pub const MODERATE_MULT: f64 = 1.55;
pub const VERY_MULT: f64 = 1.725;
pub const EXTRA_MULT: f64 = 1.9;

/// Flat correction applied to every goal tier before rounding.
pub const GOAL_CORRECTION_KCAL: f64 = -200.0;

/// Goal adjustments relative to TDEE.
pub const AGGRESSIVE_LOSS_KCAL: f64 = -500.0;
pub const MILD_LOSS_KCAL: f64 = -250.0;
pub const MAINTAIN_KCAL: f64 = 0.0;
pub const GAIN_KCAL: f64 = 500.0;

// ─────────────────────────────────────────────────────────────────────────────
// Unit conversion
// ─────────────────────────────────────────────────────────────────────────────

pub const CM_PER_FOOT: f64 = 30.48;
pub const CM_PER_INCH: f64 = 2.54;
pub const KG_PER_POUND: f64 = 0.453592;

// ─────────────────────────────────────────────────────────────────────────────
// Daily macro split and meal slots
// ─────────────────────────────────────────────────────────────────────────────

pub const PROTEIN_SHARE: f64 = 0.30;
pub const CARBS_SHARE: f64 = 0.40;
pub const FAT_SHARE: f64 = 0.30;

/// Energy density in kcal per gram.
pub const KCAL_PER_G_PROTEIN: f64 = 4.0;
pub const KCAL_PER_G_CARBS: f64 = 4.0;
pub const KCAL_PER_G_FAT: f64 = 9.0;

/// Share of the daily goal assigned to each meal slot.
pub const BREAKFAST_SHARE: f64 = 0.25;
pub const LUNCH_SHARE: f64 = 0.35;
pub const DINNER_SHARE: f64 = 0.40;

/// Accepted daily targets for generated meal plans.
pub const MIN_PLAN_TARGET_KCAL: u32 = 1000;
pub const MAX_PLAN_TARGET_KCAL: u32 = 5000;

/// Minimum Jaro-Winkler score for a fuzzy meal name match.
pub const FUZZY_MATCH_THRESHOLD: f64 = 0.7;

/// Day plan refreshes allowed on the basic tier.
pub const BASIC_TIER_REFRESHES: u32 = 1;
