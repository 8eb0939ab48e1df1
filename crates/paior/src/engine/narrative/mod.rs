//! Narrative composition: template selection by classification shape, then a
//! single placeholder pass over the chosen text.

mod placeholder;
mod templates;

pub use placeholder::{is_fully_substituted, substitute, PlaceholderValues};
pub use templates::TemplateTable;

use super::classifier::{DominantClassification, ReportShape};
use super::domain::{PrimaryScores, ScoreGrade, SecondaryFactor, SecondaryScores};
use super::key_factors::{elevated_factors, has_elevated_factor};
use serde::Serialize;
use templates::{
    CHART_TEMPLATES, CLOSING_STATEMENT, DATA_SUMMARY, GENERIC_SECONDARY_BLOCK, GUIDE_ELEVATED,
    GUIDE_NORMAL, GUIDE_PEACEFUL, HIGH_BLOCK_PREFIX, HIGH_BLOCK_SUFFIX, PATTERN_TEMPLATES,
    PEACEFUL_BLOCK, TOP_BLOCK_PREFIX,
};

/// Upper bound on dynamics described individually in a report.
pub const DYNAMICS_DETAIL_LIMIT: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateFamily {
    /// Descriptive paragraph about the primary factors.
    Pattern,
    /// Caption for the factor chart.
    Chart,
}

impl TemplateFamily {
    fn table(self) -> &'static TemplateTable {
        match self {
            Self::Pattern => &PATTERN_TEMPLATES,
            Self::Chart => &CHART_TEMPLATES,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateSource {
    LowEnergyByLead,
    SingleByLead,
    /// Composite table by type code, single table for the lead factor when absent.
    CompositeByCode,
}

const SHAPE_ROUTES: [(ReportShape, TemplateSource); 4] = [
    (ReportShape::LowEnergy, TemplateSource::LowEnergyByLead),
    (ReportShape::Single, TemplateSource::SingleByLead),
    (ReportShape::CompositePair, TemplateSource::CompositeByCode),
    (ReportShape::CompositeTriad, TemplateSource::CompositeByCode),
];

pub fn template_source(shape: ReportShape) -> TemplateSource {
    SHAPE_ROUTES
        .iter()
        .find(|(candidate, _)| *candidate == shape)
        .map(|(_, source)| *source)
        .unwrap_or(TemplateSource::SingleByLead)
}

/// Raw (unsubstituted) template for a family and classification.
pub fn select_template(family: TemplateFamily, dominant: &DominantClassification) -> &'static str {
    let table = family.table();
    let lead = dominant.lead();

    let selected = match template_source(dominant.shape) {
        TemplateSource::LowEnergyByLead => table.low_energy(lead),
        TemplateSource::SingleByLead => table.single(lead),
        TemplateSource::CompositeByCode => table
            .composite(&dominant.type_code)
            .or_else(|| table.single(lead)),
    };

    selected.unwrap_or(table.single[0].1)
}

/// Overall state of the nine dynamics, as used by the summary guidance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SecondaryState {
    /// Nothing at or above the elevated floor.
    Peaceful,
    /// At least one dynamic in the High grade; lists them highest first.
    Elevated { factors: Vec<SecondaryFactor> },
    Normal,
}

impl SecondaryState {
    pub fn from_scores(secondary: &SecondaryScores, high: &[SecondaryFactor]) -> Self {
        if !has_elevated_factor(secondary) {
            Self::Peaceful
        } else if !high.is_empty() {
            Self::Elevated {
                factors: high.to_vec(),
            }
        } else {
            Self::Normal
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Peaceful => "Peaceful",
            Self::Elevated { .. } => "Elevated",
            Self::Normal => "Normal",
        }
    }
}

/// Everything the composer reads; all of it is computed upstream.
#[derive(Debug, Clone, Copy)]
pub struct NarrativeInput<'a> {
    pub dominant: &'a DominantClassification,
    pub high: &'a [SecondaryFactor],
    pub top: &'a [SecondaryFactor],
    pub primary: &'a PrimaryScores,
    pub secondary: &'a SecondaryScores,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NarrativeReport {
    pub type_label: String,
    pub type_name: String,
    pub pattern_text: String,
    pub chart_text: String,
    pub secondary_block: String,
    pub closing: String,
    pub data_summary: String,
    pub strength_label: String,
    pub secondary_state: SecondaryState,
    pub summary: String,
}

pub fn compose(input: &NarrativeInput<'_>) -> NarrativeReport {
    let values = PlaceholderValues::from_scores(input.primary, input.secondary);
    let dominant = input.dominant;

    let pattern_text = substitute(select_template(TemplateFamily::Pattern, dominant), &values);
    let chart_text = substitute(select_template(TemplateFamily::Chart, dominant), &values);
    let secondary_block = substitute(&secondary_block(input), &values);
    let data_summary = substitute(DATA_SUMMARY, &values);

    let strength_label = strength_label(input.primary, dominant);
    let secondary_state = SecondaryState::from_scores(input.secondary, input.high);
    let summary = summary_guide(&strength_label, &secondary_state);

    NarrativeReport {
        type_label: dominant.type_label.clone(),
        type_name: dominant.type_name.to_string(),
        pattern_text,
        chart_text,
        secondary_block,
        closing: CLOSING_STATEMENT.to_string(),
        data_summary,
        strength_label,
        secondary_state,
        summary,
    }
}

fn secondary_block(input: &NarrativeInput<'_>) -> String {
    if !has_elevated_factor(input.secondary) {
        return PEACEFUL_BLOCK.to_string();
    }

    if !input.high.is_empty() {
        let listed: Vec<String> = input
            .high
            .iter()
            .map(|factor| {
                format!(
                    "**{}** ({} pts, {})",
                    factor.label(),
                    input.secondary.get(*factor),
                    ScoreGrade::High.label()
                )
            })
            .collect();
        return format!(
            "{HIGH_BLOCK_PREFIX} {} {HIGH_BLOCK_SUFFIX}",
            listed.join(", ")
        );
    }

    match input.top.first() {
        Some(factor) => format!(
            "{TOP_BLOCK_PREFIX} **{}** ({} pts), is {}",
            factor.label(),
            input.secondary.get(*factor),
            templates::reframe(*factor)
        ),
        None => GENERIC_SECONDARY_BLOCK.to_string(),
    }
}

/// Labels of the High-grade primary factors joined with `·`, or the type name
/// when none reach that grade.
pub fn strength_label(primary: &PrimaryScores, dominant: &DominantClassification) -> String {
    let strong: Vec<&str> = primary
        .iter()
        .filter(|(_, score)| ScoreGrade::from_score(*score) == ScoreGrade::High)
        .map(|(factor, _)| factor.label())
        .collect();

    if strong.is_empty() {
        dominant.type_name.to_string()
    } else {
        strong.join("·")
    }
}

fn summary_guide(strength: &str, state: &SecondaryState) -> String {
    let guide = match state {
        SecondaryState::Peaceful => GUIDE_PEACEFUL.to_string(),
        SecondaryState::Elevated { factors } => {
            let labels: Vec<&str> = factors.iter().map(|factor| factor.label()).collect();
            GUIDE_ELEVATED.replace("{dynamics}", &labels.join(", "))
        }
        SecondaryState::Normal => GUIDE_NORMAL.to_string(),
    };
    guide.replace("{strength}", strength)
}

/// One dynamic at or above the elevated floor, described on its own.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DynamicsNote {
    pub factor: SecondaryFactor,
    pub label: &'static str,
    pub slot: &'static str,
    pub score: u32,
    pub is_key: bool,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SecondaryDynamics {
    pub is_peaceful: bool,
    pub notes: Vec<DynamicsNote>,
}

/// Up to [`DYNAMICS_DETAIL_LIMIT`] elevated dynamics, highest first, each
/// flagged when it is also a key factor.
pub fn secondary_dynamics(
    secondary: &SecondaryScores,
    key: &[SecondaryFactor],
) -> SecondaryDynamics {
    let notes: Vec<DynamicsNote> = elevated_factors(secondary)
        .into_iter()
        .take(DYNAMICS_DETAIL_LIMIT)
        .map(|factor| DynamicsNote {
            factor,
            label: factor.label(),
            slot: factor.slot(),
            score: secondary.get(factor),
            is_key: key.contains(&factor),
            text: capitalize_first(templates::reframe(factor)),
        })
        .collect();

    SecondaryDynamics {
        is_peaceful: notes.is_empty(),
        notes,
    }
}

fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
