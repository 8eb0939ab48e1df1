use super::domain::{PrimaryFactor, PrimaryScores, SecondaryFactor, SecondaryScores};
use serde::Serialize;

pub const FRICTION_COEFFICIENT: f64 = 0.4;
pub const SECONDARY_LOAD_SCALE: f64 = 0.1;
pub const EFFICIENCY_FALLBACK: f64 = 10.0;
pub const DEFAULT_AGE_WEIGHT: f64 = 1.0;

/// Secondary dynamics that drain each primary engine.
pub const FRICTION_TABLE: [(PrimaryFactor, [SecondaryFactor; 2]); 4] = [
    (
        PrimaryFactor::Drive,
        [SecondaryFactor::Perfection, SecondaryFactor::Boredom],
    ),
    (
        PrimaryFactor::Order,
        [SecondaryFactor::Stubbornness, SecondaryFactor::Distraction],
    ),
    (
        PrimaryFactor::Inquiry,
        [SecondaryFactor::Boredom, SecondaryFactor::Stubbornness],
    ),
    (
        PrimaryFactor::Relation,
        [SecondaryFactor::Dependence, SecondaryFactor::Moderation],
    ),
];

pub fn friction_sources(factor: PrimaryFactor) -> [SecondaryFactor; 2] {
    FRICTION_TABLE
        .iter()
        .find(|(primary, _)| *primary == factor)
        .map(|(_, sources)| *sources)
        .unwrap_or([SecondaryFactor::Perfection, SecondaryFactor::Boredom])
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FactorEfficiency {
    pub factor: PrimaryFactor,
    pub raw: u32,
    pub friction: f64,
    pub effective: f64,
}

/// Friction-adjusted energy for one respondent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EfficiencyMetrics {
    pub factors: Vec<FactorEfficiency>,
    pub primary_sum: u32,
    pub secondary_sum: u32,
    pub effective_sum: f64,
    pub efficiency_index: f64,
    pub age_weight: f64,
}

impl EfficiencyMetrics {
    pub fn effective(&self, factor: PrimaryFactor) -> f64 {
        self.entry(factor).map(|entry| entry.effective).unwrap_or(0.0)
    }

    pub fn friction(&self, factor: PrimaryFactor) -> f64 {
        self.entry(factor).map(|entry| entry.friction).unwrap_or(0.0)
    }

    fn entry(&self, factor: PrimaryFactor) -> Option<&FactorEfficiency> {
        self.factors.iter().find(|entry| entry.factor == factor)
    }
}

/// Deducts friction from each primary score and derives the efficiency index.
///
/// `age_weight` scales both the friction and the secondary load; callers pass
/// [`DEFAULT_AGE_WEIGHT`] unless an age-based adjustment is configured.
pub fn compute_efficiency(
    primary: &PrimaryScores,
    secondary: &SecondaryScores,
    age_weight: f64,
) -> EfficiencyMetrics {
    let factors: Vec<FactorEfficiency> = FRICTION_TABLE
        .iter()
        .map(|(factor, sources)| {
            let raw = primary.get(*factor);
            let load: u32 = sources.iter().map(|source| secondary.get(*source)).sum();
            let friction = f64::from(load) * FRICTION_COEFFICIENT * age_weight;
            let effective = (f64::from(raw) - friction).max(0.0);
            FactorEfficiency {
                factor: *factor,
                raw,
                friction,
                effective,
            }
        })
        .collect();

    let primary_sum = primary.total();
    let secondary_sum = secondary.total();
    let effective_sum = factors.iter().map(|entry| entry.effective).sum();

    EfficiencyMetrics {
        factors,
        primary_sum,
        secondary_sum,
        effective_sum,
        efficiency_index: efficiency_index(primary_sum, secondary_sum, age_weight),
        age_weight,
    }
}

fn efficiency_index(primary_sum: u32, secondary_sum: u32, age_weight: f64) -> f64 {
    if secondary_sum == 0 {
        return EFFICIENCY_FALLBACK;
    }

    let load = f64::from(secondary_sum) * SECONDARY_LOAD_SCALE * age_weight;
    let index = f64::from(primary_sum) / load;
    if load <= 0.0 || !index.is_finite() {
        return EFFICIENCY_FALLBACK;
    }

    round_to_tenth(index)
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
