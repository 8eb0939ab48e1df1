use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use std::sync::OnceLock;

/// Highest score a factor reaches when all ten items are answered with 5.
pub const MAX_FACTOR_SCORE: u32 = 50;

/// Number of survey items contributing to each factor.
pub const ITEMS_PER_FACTOR: u32 = 10;

pub const HIGH_GRADE_FLOOR: u32 = 40;
pub const MIDDLE_GRADE_FLOOR: u32 = 25;

/// Shared behavior of the primary and secondary factor vocabularies.
pub trait Factor: Copy + Ord + std::fmt::Debug + 'static {
    /// Every factor of this kind, in canonical report order.
    fn all() -> &'static [Self];

    fn label(self) -> &'static str;

    /// Name used for `$name$` score placeholders in report templates.
    fn placeholder(self) -> &'static str;
}

/// The four temperament engines (A, O, I, R).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum PrimaryFactor {
    #[serde(rename = "A")]
    Drive,
    #[serde(rename = "O")]
    Order,
    #[serde(rename = "I")]
    Inquiry,
    #[serde(rename = "R")]
    Relation,
}

const PRIMARY_ORDER: [PrimaryFactor; 4] = [
    PrimaryFactor::Drive,
    PrimaryFactor::Order,
    PrimaryFactor::Inquiry,
    PrimaryFactor::Relation,
];

/// Tie-break ranking for equal scores, strongest claim first: I > A > R > O.
pub const TIE_BREAK_PRIORITY: [PrimaryFactor; 4] = [
    PrimaryFactor::Inquiry,
    PrimaryFactor::Drive,
    PrimaryFactor::Relation,
    PrimaryFactor::Order,
];

impl PrimaryFactor {
    pub const fn ordered() -> [Self; 4] {
        PRIMARY_ORDER
    }

    pub const fn symbol(self) -> char {
        match self {
            Self::Drive => 'A',
            Self::Order => 'O',
            Self::Inquiry => 'I',
            Self::Relation => 'R',
        }
    }

    pub const fn code(self) -> &'static str {
        match self {
            Self::Drive => "A",
            Self::Order => "O",
            Self::Inquiry => "I",
            Self::Relation => "R",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Drive => "Drive",
            Self::Order => "Order",
            Self::Inquiry => "Inquiry",
            Self::Relation => "Relation",
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Self> {
        PRIMARY_ORDER
            .into_iter()
            .find(|factor| factor.symbol() == symbol)
    }

    /// Position in [`TIE_BREAK_PRIORITY`]; lower wins a tie.
    pub fn tie_break_rank(self) -> usize {
        TIE_BREAK_PRIORITY
            .iter()
            .position(|factor| *factor == self)
            .unwrap_or(TIE_BREAK_PRIORITY.len())
    }

    /// `"Drive (A)"`, the form used in type labels.
    pub fn display_name(self) -> String {
        format!("{} ({})", self.label(), self.symbol())
    }
}

impl Factor for PrimaryFactor {
    fn all() -> &'static [Self] {
        &PRIMARY_ORDER
    }

    fn label(self) -> &'static str {
        PrimaryFactor::label(self)
    }

    fn placeholder(self) -> &'static str {
        self.code()
    }
}

/// The nine psychological dynamics, P1 through P9.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SecondaryFactor {
    Struggle,
    Rebellion,
    Perfection,
    Stubbornness,
    Distraction,
    Contentment,
    Moderation,
    Dependence,
    Boredom,
}

const SECONDARY_ORDER: [SecondaryFactor; 9] = [
    SecondaryFactor::Struggle,
    SecondaryFactor::Rebellion,
    SecondaryFactor::Perfection,
    SecondaryFactor::Stubbornness,
    SecondaryFactor::Distraction,
    SecondaryFactor::Contentment,
    SecondaryFactor::Moderation,
    SecondaryFactor::Dependence,
    SecondaryFactor::Boredom,
];

static SECONDARY_NAME_MAP: OnceLock<HashMap<String, SecondaryFactor>> = OnceLock::new();

impl SecondaryFactor {
    pub const fn ordered() -> [Self; 9] {
        SECONDARY_ORDER
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Struggle => "Struggle",
            Self::Rebellion => "Rebellion",
            Self::Perfection => "Perfection",
            Self::Stubbornness => "Stubbornness",
            Self::Distraction => "Distraction",
            Self::Contentment => "Contentment",
            Self::Moderation => "Moderation",
            Self::Dependence => "Dependence",
            Self::Boredom => "Boredom",
        }
    }

    /// Factor name as it appears in the questionnaire's item identifiers.
    pub const fn survey_key(self) -> &'static str {
        match self {
            Self::Struggle => "고군분투",
            Self::Rebellion => "반항",
            Self::Perfection => "완벽",
            Self::Stubbornness => "외고집",
            Self::Distraction => "잡념",
            Self::Contentment => "만족",
            Self::Moderation => "적당",
            Self::Dependence => "의존",
            Self::Boredom => "싫증",
        }
    }

    pub const fn slot(self) -> &'static str {
        match self {
            Self::Struggle => "P1",
            Self::Rebellion => "P2",
            Self::Perfection => "P3",
            Self::Stubbornness => "P4",
            Self::Distraction => "P5",
            Self::Contentment => "P6",
            Self::Moderation => "P7",
            Self::Dependence => "P8",
            Self::Boredom => "P9",
        }
    }

    /// Resolves a factor from its survey key or its English label
    /// (case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        secondary_name_map()
            .get(&name.trim().to_lowercase())
            .copied()
    }
}

fn secondary_name_map() -> &'static HashMap<String, SecondaryFactor> {
    SECONDARY_NAME_MAP.get_or_init(|| {
        SECONDARY_ORDER
            .iter()
            .flat_map(|factor| {
                [
                    (factor.survey_key().to_string(), *factor),
                    (factor.label().to_ascii_lowercase(), *factor),
                ]
            })
            .collect()
    })
}

impl Factor for SecondaryFactor {
    fn all() -> &'static [Self] {
        &SECONDARY_ORDER
    }

    fn label(self) -> &'static str {
        SecondaryFactor::label(self)
    }

    fn placeholder(self) -> &'static str {
        self.slot()
    }
}

/// Presentation-facing bucket derived from absolute score thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreGrade {
    High,
    Middle,
    Low,
}

impl ScoreGrade {
    pub const fn from_score(score: u32) -> Self {
        if score >= HIGH_GRADE_FLOOR {
            Self::High
        } else if score >= MIDDLE_GRADE_FLOOR {
            Self::Middle
        } else {
            Self::Low
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Middle => "Middle",
            Self::Low => "Low",
        }
    }

    /// Softened wording used on respondent-facing pages.
    pub const fn display_label(self) -> &'static str {
        match self {
            Self::Low => "Potential",
            other => other.label(),
        }
    }
}

/// Per-factor accumulators, pre-populated with every factor at zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ScoreTable<F: Factor + Serialize> {
    scores: BTreeMap<F, u32>,
}

pub type PrimaryScores = ScoreTable<PrimaryFactor>;
pub type SecondaryScores = ScoreTable<SecondaryFactor>;

impl<F: Factor + Serialize> ScoreTable<F> {
    pub fn zeroed() -> Self {
        Self {
            scores: F::all().iter().map(|factor| (*factor, 0)).collect(),
        }
    }

    /// Builds a table from explicit scores; unspecified factors stay at zero.
    pub fn from_scores<I>(scores: I) -> Self
    where
        I: IntoIterator<Item = (F, u32)>,
    {
        let mut table = Self::zeroed();
        for (factor, score) in scores {
            table.scores.insert(factor, score);
        }
        table
    }

    pub fn get(&self, factor: F) -> u32 {
        self.scores.get(&factor).copied().unwrap_or(0)
    }

    pub(crate) fn add(&mut self, factor: F, value: u32) {
        let entry = self.scores.entry(factor).or_insert(0);
        *entry = entry.saturating_add(value);
    }

    pub fn total(&self) -> u32 {
        self.scores
            .values()
            .fold(0u32, |sum, score| sum.saturating_add(*score))
    }

    /// Scores in canonical factor order.
    pub fn iter(&self) -> impl Iterator<Item = (F, u32)> + '_ {
        self.scores.iter().map(|(factor, score)| (*factor, *score))
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    pub fn grades(&self) -> BTreeMap<F, ScoreGrade> {
        self.iter()
            .map(|(factor, score)| (factor, ScoreGrade::from_score(score)))
            .collect()
    }
}

impl<F: Factor + Serialize> Default for ScoreTable<F> {
    fn default() -> Self {
        Self::zeroed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tie_break_ranks_follow_inquiry_drive_relation_order() {
        assert_eq!(PrimaryFactor::Inquiry.tie_break_rank(), 0);
        assert_eq!(PrimaryFactor::Drive.tie_break_rank(), 1);
        assert_eq!(PrimaryFactor::Relation.tie_break_rank(), 2);
        assert_eq!(PrimaryFactor::Order.tie_break_rank(), 3);
    }

    #[test]
    fn secondary_names_resolve_from_survey_key_and_label() {
        assert_eq!(
            SecondaryFactor::from_name("완벽"),
            Some(SecondaryFactor::Perfection)
        );
        assert_eq!(
            SecondaryFactor::from_name("Perfection"),
            Some(SecondaryFactor::Perfection)
        );
        assert_eq!(
            SecondaryFactor::from_name("boredom"),
            Some(SecondaryFactor::Boredom)
        );
        assert_eq!(SecondaryFactor::from_name("anxiety"), None);
    }

    #[test]
    fn grades_use_forty_and_twenty_five_floors() {
        assert_eq!(ScoreGrade::from_score(50), ScoreGrade::High);
        assert_eq!(ScoreGrade::from_score(40), ScoreGrade::High);
        assert_eq!(ScoreGrade::from_score(39), ScoreGrade::Middle);
        assert_eq!(ScoreGrade::from_score(25), ScoreGrade::Middle);
        assert_eq!(ScoreGrade::from_score(24), ScoreGrade::Low);
        assert_eq!(ScoreGrade::Low.display_label(), "Potential");
        assert_eq!(ScoreGrade::Middle.display_label(), "Middle");
    }

    #[test]
    fn score_tables_start_with_every_factor_at_zero() {
        let primary = PrimaryScores::zeroed();
        let secondary = SecondaryScores::zeroed();
        assert_eq!(primary.len(), 4);
        assert_eq!(secondary.len(), 9);
        assert_eq!(primary.total(), 0);
        assert!(secondary.iter().all(|(_, score)| score == 0));
    }

    #[test]
    fn placeholders_are_unique_across_both_vocabularies() {
        let mut names: Vec<&str> = PrimaryFactor::all()
            .iter()
            .map(|factor| Factor::placeholder(*factor))
            .chain(
                SecondaryFactor::all()
                    .iter()
                    .map(|factor| Factor::placeholder(*factor)),
            )
            .collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 13);
    }

    #[test]
    fn primary_scores_serialize_with_symbol_keys() {
        let scores = PrimaryScores::from_scores([(PrimaryFactor::Inquiry, 31)]);
        let value = serde_json::to_value(&scores).expect("serializes");
        assert_eq!(value["I"], 31);
        assert_eq!(value["A"], 0);
    }
}
