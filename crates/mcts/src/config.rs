use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use othello_core::Color;

use crate::error::{MctsError, Result};

/// How expansion treats positions that were already reached elsewhere
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SearchPolicy {
    /// Plain tree: every expansion creates fresh, exclusively owned children
    #[default]
    Naive,
    /// Graph search: symmetry-equivalent positions share one node
    Smart,
}

impl fmt::Display for SearchPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchPolicy::Naive => f.write_str("naive"),
            SearchPolicy::Smart => f.write_str("smart"),
        }
    }
}

impl FromStr for SearchPolicy {
    type Err = MctsError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "naive" => Ok(SearchPolicy::Naive),
            "smart" => Ok(SearchPolicy::Smart),
            _ => Err(MctsError::UnknownPolicy(s.to_string())),
        }
    }
}

/// Configuration for MCTS search
#[derive(Debug, Clone)]
pub struct MctsConfig {
    /// Expansion policy
    pub policy: SearchPolicy,

    /// Wall-clock budget per decision, indexed by [`Color::index`]
    pub time_budget: [Duration; 2],

    /// Maximum number of simulations through the root per decision
    pub simulation_ceiling: u32,

    /// UCT exploration constant C
    pub exploration: f64,

    /// Seed for the rollout RNG; `None` draws from OS entropy
    pub seed: Option<u64>,
}

impl MctsConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(mut self, policy: SearchPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Set the same time budget for both colors
    pub fn with_time_budget_ms(mut self, ms: u64) -> Self {
        self.time_budget = [Duration::from_millis(ms); 2];
        self
    }

    /// Set the time budget for one color only
    pub fn with_color_time_budget_ms(mut self, color: Color, ms: u64) -> Self {
        self.time_budget[color.index()] = Duration::from_millis(ms);
        self
    }

    pub fn with_simulation_ceiling(mut self, n: u32) -> Self {
        self.simulation_ceiling = n;
        self
    }

    pub fn with_exploration(mut self, c: f64) -> Self {
        self.exploration = c;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn time_budget_for(&self, color: Color) -> Duration {
        self.time_budget[color.index()]
    }

    /// Reject settings the UCT formula cannot work with
    pub fn validate(&self) -> Result<()> {
        if !self.exploration.is_finite() || self.exploration < 0.0 {
            return Err(MctsError::InvalidConfig(format!(
                "exploration constant must be finite and non-negative, got {}",
                self.exploration
            )));
        }
        Ok(())
    }
}

impl Default for MctsConfig {
    fn default() -> Self {
        Self {
            policy: SearchPolicy::Naive,
            time_budget: [Duration::from_millis(2000), Duration::from_millis(1000)],
            simulation_ceiling: 200_000,
            exploration: std::f64::consts::SQRT_2,
            seed: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = MctsConfig::default();
        assert_eq!(config.policy, SearchPolicy::Naive);
        assert_eq!(config.time_budget_for(Color::Black), Duration::from_millis(2000));
        assert_eq!(config.time_budget_for(Color::White), Duration::from_millis(1000));
        assert_eq!(config.simulation_ceiling, 200_000);
        assert_eq!(config.exploration, std::f64::consts::SQRT_2);
        assert!(config.seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = MctsConfig::default()
            .with_policy(SearchPolicy::Smart)
            .with_time_budget_ms(300)
            .with_color_time_budget_ms(Color::White, 50)
            .with_simulation_ceiling(1000)
            .with_exploration(0.5)
            .with_seed(42);

        assert_eq!(config.policy, SearchPolicy::Smart);
        assert_eq!(config.time_budget_for(Color::Black), Duration::from_millis(300));
        assert_eq!(config.time_budget_for(Color::White), Duration::from_millis(50));
        assert_eq!(config.simulation_ceiling, 1000);
        assert_eq!(config.exploration, 0.5);
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn test_validate_rejects_bad_exploration() {
        assert!(MctsConfig::default().with_exploration(-1.0).validate().is_err());
        assert!(
            MctsConfig::default()
                .with_exploration(f64::NAN)
                .validate()
                .is_err()
        );
        assert!(MctsConfig::default().with_exploration(0.0).validate().is_ok());
    }

    #[test]
    fn test_policy_parse() {
        assert_eq!("naive".parse::<SearchPolicy>().unwrap(), SearchPolicy::Naive);
        assert_eq!("Smart".parse::<SearchPolicy>().unwrap(), SearchPolicy::Smart);
        assert!(matches!(
            "minimax".parse::<SearchPolicy>(),
            Err(MctsError::UnknownPolicy(_))
        ));
        assert_eq!(SearchPolicy::Smart.to_string(), "smart");
    }
}
