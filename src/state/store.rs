use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::Result;
use crate::models::UserProfile;

/// Where the user's calorie goal and refresh usage live.
///
/// The calculators never touch a store; callers load a profile, act on it and
/// save it back.
pub trait GoalStore {
    fn load_profile(&self) -> Result<UserProfile>;
    fn save_profile(&self, profile: &UserProfile) -> Result<()>;

    /// Load, set the goal and save.
    fn store_goal(&self, calories: u32) -> Result<UserProfile> {
        let mut profile = self.load_profile()?;
        profile.set_goal(calories)?;
        self.save_profile(&profile)?;
        Ok(profile)
    }
}

/// Profile kept in a JSON file. A missing file reads as the default profile.
#[derive(Debug, Clone)]
pub struct JsonGoalStore {
    path: PathBuf,
}

impl JsonGoalStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl GoalStore for JsonGoalStore {
    fn load_profile(&self) -> Result<UserProfile> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no profile file, using defaults");
            return Ok(UserProfile::default());
        }
        let content = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&content)?)
    }

    fn save_profile(&self, profile: &UserProfile) -> Result<()> {
        let json = serde_json::to_string_pretty(profile)?;
        fs::write(&self.path, json)?;
        info!(path = %self.path.display(), goal = ?profile.calorie_goal, "saved profile");
        Ok(())
    }
}

/// In-process store, used by tests and embedders without a file system.
#[derive(Debug, Default)]
pub struct MemoryGoalStore {
    profile: RefCell<UserProfile>,
}

impl MemoryGoalStore {
    pub fn new(profile: UserProfile) -> Self {
        Self {
            profile: RefCell::new(profile),
        }
    }
}

impl GoalStore for MemoryGoalStore {
    fn load_profile(&self) -> Result<UserProfile> {
        Ok(self.profile.borrow().clone())
    }

    fn save_profile(&self, profile: &UserProfile) -> Result<()> {
        *self.profile.borrow_mut() = profile.clone();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PlannerError;
    use crate::models::SubscriptionTier;

    #[test]
    fn test_json_store_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonGoalStore::new(dir.path().join("state.json"));
        assert_eq!(store.load_profile().unwrap(), UserProfile::default());
    }

    #[test]
    fn test_json_store_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonGoalStore::new(dir.path().join("state.json"));

        let profile = UserProfile {
            calorie_goal: Some(2150),
            tier: SubscriptionTier::Premium,
            refresh_count: 3,
        };
        store.save_profile(&profile).unwrap();
        assert_eq!(store.load_profile().unwrap(), profile);
    }

    #[test]
    fn test_json_store_reads_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        fs::write(&path, r#"{"calorie_goal": 1900}"#).unwrap();

        let profile = JsonGoalStore::new(&path).load_profile().unwrap();
        assert_eq!(profile.calorie_goal, Some(1900));
        assert_eq!(profile.tier, SubscriptionTier::Basic);
        assert_eq!(profile.refresh_count, 0);
    }

    #[test]
    fn test_store_goal_rejects_zero() {
        let store = MemoryGoalStore::default();
        assert!(matches!(store.store_goal(0), Err(PlannerError::InvalidInput(_))));
        assert_eq!(store.load_profile().unwrap().calorie_goal, None);

        store.store_goal(1800).unwrap();
        assert_eq!(store.load_profile().unwrap().calorie_goal, Some(1800));
    }
}
