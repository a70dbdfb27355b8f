use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::{PlannerError, Result};
use crate::planner::constants::BASIC_TIER_REFRESHES;

/// Paid plan the user is on. Only refresh allowances depend on it here.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionTier {
    #[default]
    Basic,
    Premium,
    Pro,
}

impl SubscriptionTier {
    /// Number of day plan refreshes allowed, `None` meaning unlimited.
    pub fn refresh_allowance(self) -> Option<u32> {
        match self {
            SubscriptionTier::Basic => Some(BASIC_TIER_REFRESHES),
            SubscriptionTier::Premium | SubscriptionTier::Pro => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            SubscriptionTier::Basic => "basic",
            SubscriptionTier::Premium => "premium",
            SubscriptionTier::Pro => "pro",
        }
    }
}

impl fmt::Display for SubscriptionTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Persisted per-user state: calorie goal, tier and refresh usage.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub calorie_goal: Option<u32>,

    #[serde(default)]
    pub tier: SubscriptionTier,

    #[serde(default)]
    pub refresh_count: u32,
}

impl UserProfile {
    /// Store a new calorie goal. Zero is rejected.
    pub fn set_goal(&mut self, calories: u32) -> Result<()> {
        if calories == 0 {
            return Err(PlannerError::InvalidInput(
                "calorie goal must be greater than zero".to_string(),
            ));
        }
        self.calorie_goal = Some(calories);
        Ok(())
    }

    pub fn can_refresh(&self) -> bool {
        match self.tier.refresh_allowance() {
            Some(limit) => self.refresh_count < limit,
            None => true,
        }
    }

    /// Count one day plan refresh against the tier allowance.
    pub fn record_refresh(&mut self) -> Result<()> {
        if !self.can_refresh() {
            return Err(PlannerError::RefreshLimit(self.tier.to_string()));
        }
        self.refresh_count += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_goal_rejects_zero() {
        let mut profile = UserProfile::default();
        assert!(profile.set_goal(0).is_err());
        assert_eq!(profile.calorie_goal, None);

        profile.set_goal(2100).unwrap();
        assert_eq!(profile.calorie_goal, Some(2100));
    }

    #[test]
    fn test_basic_tier_allows_one_refresh() {
        let mut profile = UserProfile::default();
        profile.record_refresh().unwrap();
        assert!(!profile.can_refresh());
        assert!(matches!(
            profile.record_refresh(),
            Err(PlannerError::RefreshLimit(tier)) if tier == "basic"
        ));
        assert_eq!(profile.refresh_count, 1);
    }

    #[test]
    fn test_paid_tiers_refresh_freely() {
        for tier in [SubscriptionTier::Premium, SubscriptionTier::Pro] {
            let mut profile = UserProfile {
                tier,
                ..Default::default()
            };
            for _ in 0..5 {
                profile.record_refresh().unwrap();
            }
            assert_eq!(profile.refresh_count, 5);
        }
    }
}
