use super::domain::{PrimaryFactor, PrimaryScores};
use serde::Serialize;

/// A top score at or below this marks the profile as low energy.
pub const LOW_ENERGY_CEILING: u32 = 24;
/// Lead over the runner-up that makes the top factor stand alone.
pub const SINGLE_FACTOR_GAP: u32 = 10;
/// Below this gap between 2nd and 3rd place, the 3rd joins the composite.
pub const TRIAD_GAP: u32 = 6;
pub const FALLBACK_FACTOR: PrimaryFactor = PrimaryFactor::Drive;

const SINGLE_TYPE_NAMES: [(PrimaryFactor, &str); 4] = [
    (PrimaryFactor::Drive, "Fearless Pioneer"),
    (PrimaryFactor::Order, "Meticulous Architect"),
    (PrimaryFactor::Inquiry, "Pattern Tracker"),
    (PrimaryFactor::Relation, "Warm Connector"),
];

/// Keyed by alphabetically sorted type code.
const COMPOSITE_TYPE_NAMES: [(&str, &str); 10] = [
    ("AI", "Intellectual Pioneer"),
    ("AO", "Precise Strategist"),
    ("AR", "Passionate Helper"),
    ("IO", "Cool-headed Analyst"),
    ("IR", "Insightful Mediator"),
    ("OR", "Caring Architect"),
    ("AIO", "Flawless Pioneer"),
    ("AOR", "Trusted Leader"),
    ("AIR", "Dynamic Visionary"),
    ("IOR", "Thoughtful Coordinator"),
];

/// Classification shape; drives template selection for the narrative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportShape {
    LowEnergy,
    Single,
    CompositePair,
    CompositeTriad,
}

impl ReportShape {
    pub const fn label(self) -> &'static str {
        match self {
            Self::LowEnergy => "Low Energy",
            Self::Single => "Single",
            Self::CompositePair => "Two-Factor Composite",
            Self::CompositeTriad => "Three-Factor Composite",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DominantClassification {
    /// Contributing factors in rank order; never empty.
    pub factors: Vec<PrimaryFactor>,
    pub type_code: String,
    pub type_name: &'static str,
    pub type_label: String,
    pub is_low_energy: bool,
    pub shape: ReportShape,
}

impl DominantClassification {
    pub fn lead(&self) -> PrimaryFactor {
        self.factors.first().copied().unwrap_or(FALLBACK_FACTOR)
    }

    pub fn is_single(&self) -> bool {
        self.factors.len() == 1
    }

    fn fallback() -> Self {
        Self::from_factors(vec![FALLBACK_FACTOR], true, ReportShape::LowEnergy)
    }

    fn from_factors(factors: Vec<PrimaryFactor>, is_low_energy: bool, shape: ReportShape) -> Self {
        let type_code = type_code(&factors);
        let lead = factors.first().copied().unwrap_or(FALLBACK_FACTOR);
        let type_name = type_name(&type_code, lead, factors.len() == 1);
        let type_label = type_label(&factors, &type_code);

        Self {
            factors,
            type_code,
            type_name,
            type_label,
            is_low_energy,
            shape,
        }
    }
}

/// Primary factors ordered by descending score; ties follow the fixed
/// priority I > A > R > O.
pub fn rank_factors(primary: &PrimaryScores) -> Vec<(PrimaryFactor, u32)> {
    let mut ranked: Vec<(PrimaryFactor, u32)> = primary.iter().collect();
    ranked.sort_by(|(left, left_score), (right, right_score)| {
        right_score
            .cmp(left_score)
            .then_with(|| left.tie_break_rank().cmp(&right.tie_break_rank()))
    });
    ranked
}

/// Picks the one to three factors that represent the respondent.
pub fn classify(primary: &PrimaryScores) -> DominantClassification {
    let ranked = rank_factors(primary);
    let Some(&(first, top_score)) = ranked.first() else {
        return DominantClassification::fallback();
    };

    let is_low_energy = top_score <= LOW_ENERGY_CEILING;
    let present = ranked.iter().filter(|(_, score)| *score > 0).count();
    let second = ranked.get(1).copied();
    let third = ranked.get(2).copied();
    let lead_gap = top_score.saturating_sub(second.map(|(_, score)| score).unwrap_or(0));

    let (factors, shape) = match (second, third) {
        _ if is_low_energy => (vec![first], ReportShape::LowEnergy),
        _ if present <= 1 || lead_gap >= SINGLE_FACTOR_GAP => (vec![first], ReportShape::Single),
        (Some((second, second_score)), Some((third, third_score)))
            if second_score.saturating_sub(third_score) < TRIAD_GAP =>
        {
            (vec![first, second, third], ReportShape::CompositeTriad)
        }
        (Some((second, _)), _) => (vec![first, second], ReportShape::CompositePair),
        (None, _) => (vec![first], ReportShape::Single),
    };

    DominantClassification::from_factors(factors, is_low_energy, shape)
}

/// Symbols sorted alphabetically and concatenated, e.g. `AI` or `AIR`.
pub fn type_code(factors: &[PrimaryFactor]) -> String {
    let mut symbols: Vec<char> = factors.iter().map(|factor| factor.symbol()).collect();
    symbols.sort_unstable();
    symbols.dedup();
    symbols.into_iter().collect()
}

pub fn single_type_name(factor: PrimaryFactor) -> &'static str {
    SINGLE_TYPE_NAMES
        .iter()
        .find(|(candidate, _)| *candidate == factor)
        .map(|(_, name)| *name)
        .unwrap_or("Fearless Pioneer")
}

/// Name for a classification; a composite code missing from the table falls
/// back to the lead factor's single name.
pub fn type_name(code: &str, lead: PrimaryFactor, is_single: bool) -> &'static str {
    if is_single {
        return single_type_name(lead);
    }
    composite_type_name(code).unwrap_or_else(|| single_type_name(lead))
}

pub fn composite_type_name(code: &str) -> Option<&'static str> {
    COMPOSITE_TYPE_NAMES
        .iter()
        .find(|(candidate, _)| *candidate == code)
        .map(|(_, name)| *name)
}

fn type_label(factors: &[PrimaryFactor], code: &str) -> String {
    let names: Vec<String> = factors.iter().map(|factor| factor.display_name()).collect();
    let separator = if factors.len() == 1 { "" } else { " " };
    format!("[{}, {}-type]", names.join(separator), code)
}
