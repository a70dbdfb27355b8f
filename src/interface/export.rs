use std::path::Path;

use crate::error::Result;
use crate::planner::DayPlan;

/// Write a day plan to CSV, one row per slot plus a total row.
pub fn write_day_plan_csv(plan: &DayPlan, path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "slot",
        "meal",
        "portions",
        "target_calories",
        "calories",
        "protein",
        "carbs",
        "fat",
    ])?;

    for planned in &plan.meals {
        let m = &planned.meal.macros;
        wtr.write_record([
            planned.slot.name().to_string(),
            planned.meal.name.clone(),
            planned.meal.portions.clone(),
            planned.slot_calories.to_string(),
            format!("{:.0}", m.calories),
            format!("{:.0}", m.protein),
            format!("{:.0}", m.carbs),
            format!("{:.0}", m.fat),
        ])?;
    }

    let t = &plan.total;
    wtr.write_record([
        "total".to_string(),
        String::new(),
        String::new(),
        plan.daily_goal.to_string(),
        format!("{:.0}", t.calories),
        format!("{:.0}", t.protein),
        format!("{:.0}", t.carbs),
        format!("{:.0}", t.fat),
    ])?;

    wtr.flush()?;
    Ok(())
}
