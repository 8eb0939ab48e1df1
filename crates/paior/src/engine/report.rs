use std::collections::BTreeMap;

use serde::Serialize;
use tracing::debug;

use super::answers::AnswerSet;
use super::classifier::{classify, DominantClassification};
use super::config::AnalysisConfig;
use super::domain::{
    Factor, PrimaryFactor, PrimaryScores, ScoreGrade, ScoreTable, SecondaryFactor,
    SecondaryScores, ITEMS_PER_FACTOR, MAX_FACTOR_SCORE,
};
use super::efficiency::{compute_efficiency, EfficiencyMetrics};
use super::key_factors::{detect_key_factors, high_factors, top_factors, TOP_FACTOR_LIMIT};
use super::narrative::{
    compose, secondary_dynamics, NarrativeInput, NarrativeReport, SecondaryDynamics,
};
use super::scoring::aggregate;

/// Stateless pipeline runner; one instance can serve any number of reports.
#[derive(Debug, Clone, Default)]
pub struct ReportEngine {
    config: AnalysisConfig,
}

impl ReportEngine {
    pub fn new(config: AnalysisConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    pub fn generate(&self, answers: &AnswerSet) -> AnalysisReport {
        let scores = aggregate(answers);
        let primary = scores.primary;
        let secondary = scores.secondary;

        let efficiency = compute_efficiency(&primary, &secondary, self.config.age_weight);
        let dominant = classify(&primary);
        let key_factors = detect_key_factors(&secondary);
        let high = high_factors(&secondary);
        let top = top_factors(&secondary, TOP_FACTOR_LIMIT);

        let narrative = compose(&NarrativeInput {
            dominant: &dominant,
            high: &high,
            top: &top,
            primary: &primary,
            secondary: &secondary,
        });
        let secondary_dynamics = secondary_dynamics(&secondary, &key_factors);
        let chart = chart_points(&primary, &efficiency);

        debug!(
            type_code = %dominant.type_code,
            efficiency_index = efficiency.efficiency_index,
            skipped = scores.skipped,
            "generated report"
        );

        AnalysisReport {
            primary_grades: primary.grades(),
            secondary_grades: secondary.grades(),
            primary_factors: factor_views(&primary),
            secondary_factors: factor_views(&secondary),
            type_name: narrative.type_name.clone(),
            type_label: narrative.type_label.clone(),
            summary: narrative.summary.clone(),
            skipped_answers: scores.skipped,
            primary,
            secondary,
            efficiency,
            dominant,
            key_factors,
            high_factors: high,
            top_factors: top,
            secondary_dynamics,
            chart,
            narrative,
        }
    }
}

/// Runs the pipeline with the default configuration.
pub fn generate_report(answers: &AnswerSet) -> AnalysisReport {
    ReportEngine::default().generate(answers)
}

/// Complete output for one respondent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    pub primary: PrimaryScores,
    pub secondary: SecondaryScores,
    /// Answers ignored during aggregation.
    pub skipped_answers: usize,
    pub primary_grades: BTreeMap<PrimaryFactor, ScoreGrade>,
    pub secondary_grades: BTreeMap<SecondaryFactor, ScoreGrade>,
    pub primary_factors: Vec<FactorScoreView>,
    pub secondary_factors: Vec<FactorScoreView>,
    pub efficiency: EfficiencyMetrics,
    pub dominant: DominantClassification,
    pub type_name: String,
    pub type_label: String,
    pub key_factors: Vec<SecondaryFactor>,
    pub high_factors: Vec<SecondaryFactor>,
    pub top_factors: Vec<SecondaryFactor>,
    pub secondary_dynamics: SecondaryDynamics,
    pub chart: Vec<ChartPoint>,
    pub narrative: NarrativeReport,
    pub summary: String,
}

/// Display row for a single factor score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FactorScoreView {
    pub code: &'static str,
    pub label: &'static str,
    pub score: u32,
    pub grade: ScoreGrade,
    pub grade_label: &'static str,
    pub display_grade: &'static str,
    /// Mean item response, absent when nothing was scored.
    pub average: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    pub factor: PrimaryFactor,
    pub label: &'static str,
    pub raw_percent: f64,
    pub effective_percent: f64,
    pub raw_score: u32,
    pub effective_score: u32,
}

fn factor_views<F: Factor + Serialize>(table: &ScoreTable<F>) -> Vec<FactorScoreView> {
    table
        .iter()
        .map(|(factor, score)| {
            let grade = ScoreGrade::from_score(score);
            FactorScoreView {
                code: factor.placeholder(),
                label: factor.label(),
                score,
                grade,
                grade_label: grade.label(),
                display_grade: grade.display_label(),
                average: item_average(score),
            }
        })
        .collect()
}

fn item_average(score: u32) -> Option<f64> {
    if score == 0 {
        return None;
    }
    let average = f64::from(score) / f64::from(ITEMS_PER_FACTOR);
    Some((average * 100.0).round() / 100.0)
}

fn chart_points(primary: &PrimaryScores, efficiency: &EfficiencyMetrics) -> Vec<ChartPoint> {
    primary
        .iter()
        .map(|(factor, raw_score)| {
            let effective = efficiency.effective(factor);
            ChartPoint {
                factor,
                label: factor.label(),
                raw_percent: percent_of_max(f64::from(raw_score)),
                effective_percent: percent_of_max(effective),
                raw_score,
                effective_score: effective.round() as u32,
            }
        })
        .collect()
}

fn percent_of_max(score: f64) -> f64 {
    (score / f64::from(MAX_FACTOR_SCORE) * 100.0).min(100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_average_is_rounded_and_absent_for_zero() {
        assert_eq!(item_average(0), None);
        assert_eq!(item_average(37), Some(3.7));
        assert_eq!(item_average(50), Some(5.0));
    }

    #[test]
    fn chart_percentages_are_capped() {
        assert_eq!(percent_of_max(25.0), 50.0);
        assert_eq!(percent_of_max(80.0), 100.0);
        assert_eq!(percent_of_max(0.0), 0.0);
    }

    #[test]
    fn factor_views_use_placeholder_codes() {
        let secondary = SecondaryScores::from_scores([(SecondaryFactor::Boredom, 18)]);
        let views = factor_views(&secondary);
        assert_eq!(views.len(), 9);
        let boredom = &views[8];
        assert_eq!(boredom.code, "P9");
        assert_eq!(boredom.label, "Boredom");
        assert_eq!(boredom.display_grade, "Potential");
        assert_eq!(boredom.average, Some(1.8));
    }
}
