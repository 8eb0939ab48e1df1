use super::efficiency::DEFAULT_AGE_WEIGHT;
use serde::{Deserialize, Serialize};

/// Tunables applied to every report an engine produces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Scales friction and secondary load in the efficiency calculation.
    pub age_weight: f64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            age_weight: DEFAULT_AGE_WEIGHT,
        }
    }
}
