use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::engine::{
    report_router, AnalysisConfig, AnswerSet, PrimaryFactor, ReportEngine, SecondaryFactor,
};

/// Ten answers per factor whose sum equals `total`, spread as evenly as the
/// 1..=5 scale allows.
pub(super) fn item_values(total: u32) -> Vec<u32> {
    let total = total.min(50);
    let base = total / 10;
    let extra = total % 10;
    (0..10).map(|index| base + u32::from(index < extra)).collect()
}

pub(super) fn answers_with(
    primary: [(PrimaryFactor, u32); 4],
    secondary: &[(SecondaryFactor, u32)],
) -> AnswerSet {
    let mut answers = AnswerSet::new();
    for (factor, total) in primary {
        for (index, value) in item_values(total).into_iter().enumerate() {
            answers.insert(format!("{}{}", factor.symbol(), index + 1), value);
        }
    }
    for (factor, total) in secondary {
        for (index, value) in item_values(*total).into_iter().enumerate() {
            answers.insert(format!("P_{}_{}", factor.survey_key(), index + 1), value);
        }
    }
    answers
}

pub(super) fn primary_only(a: u32, o: u32, i: u32, r: u32) -> AnswerSet {
    answers_with(
        [
            (PrimaryFactor::Drive, a),
            (PrimaryFactor::Order, o),
            (PrimaryFactor::Inquiry, i),
            (PrimaryFactor::Relation, r),
        ],
        &[],
    )
}

pub(super) fn engine() -> ReportEngine {
    ReportEngine::new(AnalysisConfig::default())
}

pub(super) fn router() -> axum::Router {
    report_router(Arc::new(engine()))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 1 << 20)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
