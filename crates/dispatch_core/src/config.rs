use serde::Deserialize;

use crate::error::{DispatchError, Result};
use crate::request::TierRequirement;
use crate::vehicle::{Tier, TierFilter};

/// Matching behavior shared by the matcher and the ECS systems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DispatchConfig {
    /// Tier handed to requests that demand the special tier.
    pub special_tier: Tier,
    /// Upper bound on commit attempts per match. If None, bounded by the size
    /// of the first candidate pool observed.
    pub max_commit_attempts: Option<usize>,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            special_tier: Tier::Premium,
            max_commit_attempts: None,
        }
    }
}

impl DispatchConfig {
    /// Parse a JSON document; missing fields fall back to defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| DispatchError::InvalidConfig(e.to_string()))?;
        if config.max_commit_attempts == Some(0) {
            return Err(DispatchError::InvalidConfig(
                "max_commit_attempts must be at least 1".to_string(),
            ));
        }
        Ok(config)
    }

    pub fn with_special_tier(mut self, tier: Tier) -> Self {
        self.special_tier = tier;
        self
    }

    pub fn with_max_commit_attempts(mut self, attempts: usize) -> Self {
        self.max_commit_attempts = Some(attempts.max(1));
        self
    }

    /// Candidate pool filter for a request with the given requirement.
    pub fn filter_for(&self, requirement: TierRequirement) -> TierFilter {
        match requirement {
            TierRequirement::Any => TierFilter::Any,
            TierRequirement::Special => TierFilter::Only(self.special_tier),
        }
    }

    /// Commit attempts allowed when the first pool held `pool_size` candidates.
    pub(crate) fn commit_attempts(&self, pool_size: usize) -> usize {
        self.max_commit_attempts.unwrap_or(pool_size).max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_use_premium_as_special_tier() {
        let config = DispatchConfig::default();
        assert_eq!(config.filter_for(TierRequirement::Any), TierFilter::Any);
        assert_eq!(
            config.filter_for(TierRequirement::Special),
            TierFilter::Only(Tier::Premium)
        );
    }

    #[test]
    fn json_overrides_and_defaults() {
        let config = DispatchConfig::from_json_str(r#"{"special_tier":"comfort"}"#).unwrap();
        assert_eq!(config.special_tier, Tier::Comfort);
        assert_eq!(config.max_commit_attempts, None);

        let config = DispatchConfig::from_json_str("{}").unwrap();
        assert_eq!(config, DispatchConfig::default());
    }

    #[test]
    fn rejects_malformed_and_zero_attempts() {
        assert!(matches!(
            DispatchConfig::from_json_str(r#"{"special_tier":"gold"}"#),
            Err(DispatchError::InvalidConfig(_))
        ));
        assert!(matches!(
            DispatchConfig::from_json_str(r#"{"max_commit_attempts":0}"#),
            Err(DispatchError::InvalidConfig(_))
        ));
    }

    #[test]
    fn commit_attempts_follow_pool_size_unless_capped() {
        let config = DispatchConfig::default();
        assert_eq!(config.commit_attempts(4), 4);
        assert_eq!(config.with_max_commit_attempts(2).commit_attempts(4), 2);
    }
}
