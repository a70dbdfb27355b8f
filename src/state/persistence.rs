use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::error::Result;
use crate::models::{Meal, MealLibrary, MealSlot};

/// Load a meal library from a JSON file.
///
/// Meals with the same name within a slot are deduplicated case-insensitively
/// (last occurrence wins, keeping the first occurrence's position).
pub fn load_library<P: AsRef<Path>>(path: P) -> Result<MealLibrary> {
    let content = fs::read_to_string(path.as_ref())?;
    let mut library: MealLibrary = serde_json::from_str(&content)?;
    dedup_library(&mut library);

    debug!(path = %path.as_ref().display(), meals = library.len(), "loaded meal library");
    Ok(library)
}

/// Save a meal library to a JSON file.
pub fn save_library<P: AsRef<Path>>(path: P, library: &MealLibrary) -> Result<()> {
    let json = serde_json::to_string_pretty(library)?;
    fs::write(path, json)?;
    Ok(())
}

/// Add meals to the library file at `path`, creating it if missing.
///
/// A meal named like an existing one in the same slot replaces it.
pub fn add_to_library<P, I>(path: P, meals: I) -> Result<MealLibrary>
where
    P: AsRef<Path>,
    I: IntoIterator<Item = (MealSlot, Meal)>,
{
    let path = path.as_ref();
    let mut library = if path.exists() {
        load_library(path)?
    } else {
        MealLibrary::default()
    };

    for (slot, meal) in meals {
        library.meals_mut(slot).push(meal);
    }
    dedup_library(&mut library);

    save_library(path, &library)?;
    info!(path = %path.display(), meals = library.len(), "updated meal library");
    Ok(library)
}

fn dedup_library(library: &mut MealLibrary) {
    for slot in MealSlot::ALL {
        let meals = library.meals_mut(slot);
        let mut deduped: Vec<Meal> = Vec::with_capacity(meals.len());
        for meal in meals.drain(..) {
            match deduped.iter_mut().find(|m| m.key() == meal.key()) {
                Some(existing) => *existing = meal,
                None => deduped.push(meal),
            }
        }
        *meals = deduped;
    }
}

/// Library from `path` when given, the built-in one otherwise.
pub fn library_or_builtin(path: Option<&Path>) -> Result<MealLibrary> {
    match path {
        Some(p) => load_library(p),
        None => Ok(MealLibrary::builtin()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Macros;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_and_save_roundtrip() {
        let out_file = NamedTempFile::new().unwrap();
        save_library(out_file.path(), &MealLibrary::builtin()).unwrap();

        let reloaded = load_library(out_file.path()).unwrap();
        assert_eq!(reloaded, MealLibrary::builtin());
    }

    #[test]
    fn test_deduplication() {
        let json = r#"{
            "lunch": [
                {"name": "Soup", "portions": "Lentils (200g)", "macros": {"calories": 300, "protein": 18, "carbs": 40, "fat": 5}},
                {"name": "Wrap", "portions": "Tortilla (60g)", "macros": {"calories": 400, "protein": 20, "carbs": 45, "fat": 12}},
                {"name": "SOUP", "portions": "Lentils (250g)", "macros": {"calories": 375, "protein": 22, "carbs": 50, "fat": 6}}
            ]
        }"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let library = load_library(file.path()).unwrap();
        assert_eq!(library.lunch.len(), 2);
        // Last occurrence wins
        assert_eq!(library.lunch[0].name, "SOUP");
        assert_eq!(library.lunch[0].macros.calories, 375.0);
        assert_eq!(library.lunch[1].name, "Wrap");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_library(dir.path().join("nope.json"));
        assert!(matches!(result, Err(crate::error::PlannerError::Io(_))));
    }

    #[test]
    fn test_add_to_library_creates_and_replaces() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("meals.json");

        let soup = Meal::new("Soup", "Lentils (200g)", Macros::new(300.0, 18.0, 40.0, 5.0));
        let library = add_to_library(&path, [(MealSlot::Lunch, soup)]).unwrap();
        assert_eq!(library.len(), 1);

        let bigger = Meal::new("soup", "Lentils (300g)", Macros::new(450.0, 27.0, 60.0, 8.0));
        let oats = Meal::new("Oats", "Oats (80g)", Macros::new(300.0, 10.0, 54.0, 6.0));
        add_to_library(&path, [(MealSlot::Lunch, bigger), (MealSlot::Breakfast, oats)]).unwrap();

        let reloaded = load_library(&path).unwrap();
        assert_eq!(reloaded.len(), 2);
        assert_eq!(reloaded.lunch[0].portions, "Lentils (300g)");
        assert_eq!(reloaded.breakfast[0].name, "Oats");
    }

    #[test]
    fn test_builtin_when_no_path() {
        assert_eq!(library_or_builtin(None).unwrap(), MealLibrary::builtin());
    }
}
