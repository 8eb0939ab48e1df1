use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::answers::AnswerSet;
use super::classifier::single_type_name;
use super::domain::{
    PrimaryFactor, SecondaryFactor, HIGH_GRADE_FLOOR, MIDDLE_GRADE_FLOOR, TIE_BREAK_PRIORITY,
};
use super::report::{AnalysisReport, ReportEngine};

/// Router exposing report generation and the factor vocabulary.
pub fn report_router(engine: Arc<ReportEngine>) -> Router {
    Router::new()
        .route("/api/v1/reports", post(create_report_handler))
        .route("/api/v1/reports/reference", get(reference_handler))
        .with_state(engine)
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportRequest {
    #[serde(default)]
    pub answers: AnswerSet,
    /// Free-form audience tag echoed back to the caller.
    #[serde(default)]
    pub target: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportResponse {
    pub generated_at: DateTime<Utc>,
    pub target: Option<String>,
    pub report: AnalysisReport,
}

pub(crate) async fn create_report_handler(
    State(engine): State<Arc<ReportEngine>>,
    axum::Json(request): axum::Json<ReportRequest>,
) -> Response {
    let report = engine.generate(&request.answers);
    info!(
        answers = request.answers.len(),
        type_code = %report.dominant.type_code,
        "report generated"
    );

    let response = ReportResponse {
        generated_at: Utc::now(),
        target: request.target,
        report,
    };
    (StatusCode::OK, axum::Json(response)).into_response()
}

pub(crate) async fn reference_handler() -> Response {
    (StatusCode::OK, axum::Json(FactorReference::current())).into_response()
}

#[derive(Debug, Clone, Serialize)]
pub struct PrimaryReference {
    pub factor: PrimaryFactor,
    pub label: &'static str,
    pub placeholder: &'static str,
    pub type_name: &'static str,
    pub tie_break_rank: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct SecondaryReference {
    pub factor: SecondaryFactor,
    pub slot: &'static str,
    pub label: &'static str,
    pub survey_key: &'static str,
}

/// Static description of the questionnaire vocabulary.
#[derive(Debug, Clone, Serialize)]
pub struct FactorReference {
    pub primary: Vec<PrimaryReference>,
    pub secondary: Vec<SecondaryReference>,
    pub tie_break_order: Vec<PrimaryFactor>,
    pub high_grade_floor: u32,
    pub middle_grade_floor: u32,
}

impl FactorReference {
    pub fn current() -> Self {
        Self {
            primary: PrimaryFactor::ordered()
                .into_iter()
                .map(|factor| PrimaryReference {
                    factor,
                    label: factor.label(),
                    placeholder: factor.code(),
                    type_name: single_type_name(factor),
                    tie_break_rank: factor.tie_break_rank() + 1,
                })
                .collect(),
            secondary: SecondaryFactor::ordered()
                .into_iter()
                .map(|factor| SecondaryReference {
                    factor,
                    slot: factor.slot(),
                    label: factor.label(),
                    survey_key: factor.survey_key(),
                })
                .collect(),
            tie_break_order: TIE_BREAK_PRIORITY.to_vec(),
            high_grade_floor: HIGH_GRADE_FLOOR,
            middle_grade_floor: MIDDLE_GRADE_FLOOR,
        }
    }
}
