use super::common::*;
use crate::engine::{
    AnalysisConfig, PrimaryFactor, ReportEngine, ReportShape, ScoreGrade, SecondaryFactor,
    SecondaryState,
};

#[test]
fn item_values_spread_totals_across_ten_items() {
    assert_eq!(item_values(50), vec![5; 10]);
    assert_eq!(item_values(23).iter().sum::<u32>(), 23);
    assert_eq!(item_values(0), vec![0; 10]);
}

#[test]
fn engine_reports_single_drive_profile() {
    let report = engine().generate(&primary_only(50, 10, 10, 10));

    assert_eq!(report.dominant.factors, vec![PrimaryFactor::Drive]);
    assert_eq!(report.dominant.shape, ReportShape::Single);
    assert_eq!(report.efficiency.efficiency_index, 10.0);
    assert_eq!(report.primary_grades[&PrimaryFactor::Drive], ScoreGrade::High);
    assert_eq!(report.primary_grades[&PrimaryFactor::Order], ScoreGrade::Low);
    assert_eq!(report.type_name, "Fearless Pioneer");
    assert!(report.secondary_dynamics.is_peaceful);
    assert_eq!(report.narrative.secondary_state, SecondaryState::Peaceful);
    assert_eq!(report.skipped_answers, 0);
}

#[test]
fn chart_reflects_friction() {
    let answers = answers_with(
        [
            (PrimaryFactor::Drive, 40),
            (PrimaryFactor::Order, 30),
            (PrimaryFactor::Inquiry, 20),
            (PrimaryFactor::Relation, 20),
        ],
        &[(SecondaryFactor::Perfection, 20), (SecondaryFactor::Boredom, 15)],
    );
    let report = engine().generate(&answers);

    let drive = report
        .chart
        .iter()
        .find(|point| point.factor == PrimaryFactor::Drive)
        .expect("drive point");
    // 40 - (35 * 0.4) = 26
    assert_eq!(drive.raw_score, 40);
    assert_eq!(drive.effective_score, 26);
    assert!((drive.raw_percent - 80.0).abs() < 1e-9);
    assert!((drive.effective_percent - 52.0).abs() < 1e-9);
}

#[test]
fn configured_weight_reaches_the_efficiency_index() {
    let answers = answers_with(
        [
            (PrimaryFactor::Drive, 40),
            (PrimaryFactor::Order, 0),
            (PrimaryFactor::Inquiry, 0),
            (PrimaryFactor::Relation, 0),
        ],
        &[(SecondaryFactor::Struggle, 20)],
    );

    let default_report = engine().generate(&answers);
    let weighted = ReportEngine::new(AnalysisConfig { age_weight: 2.0 }).generate(&answers);

    assert_eq!(default_report.efficiency.efficiency_index, 20.0);
    assert_eq!(weighted.efficiency.efficiency_index, 10.0);
}

#[test]
fn elevated_dynamics_flow_into_details_and_summary() {
    let answers = answers_with(
        [
            (PrimaryFactor::Drive, 30),
            (PrimaryFactor::Order, 30),
            (PrimaryFactor::Inquiry, 30),
            (PrimaryFactor::Relation, 30),
        ],
        &[(SecondaryFactor::Dependence, 46), (SecondaryFactor::Moderation, 36)],
    );
    let report = engine().generate(&answers);

    assert_eq!(report.high_factors, vec![SecondaryFactor::Dependence]);
    assert_eq!(
        report.key_factors,
        vec![SecondaryFactor::Dependence, SecondaryFactor::Moderation]
    );
    assert_eq!(report.secondary_dynamics.notes.len(), 2);
    assert!(report.secondary_dynamics.notes.iter().all(|note| note.is_key));
    assert!(report.summary.contains("(Dependence)"));
}

#[test]
fn non_numeric_and_unknown_answers_are_counted() {
    let mut answers = primary_only(20, 20, 20, 20);
    answers.insert("A11", "often");
    answers.insert("Q1", 3);
    answers.insert("P_unknown_1", 4);

    let report = engine().generate(&answers);

    assert_eq!(report.skipped_answers, 3);
    assert_eq!(report.primary.get(PrimaryFactor::Drive), 20);
}
