//! Scoring pipeline: answers, factor scores, efficiency, dominant type,
//! key dynamics and narrative, assembled by [`ReportEngine`].

pub mod answers;
pub mod classifier;
mod config;
pub mod domain;
pub mod efficiency;
pub mod key_factors;
pub mod narrative;
pub mod report;
pub mod router;
pub mod scoring;

#[cfg(test)]
mod tests;

pub use answers::{AnswerSet, AnswerSourceError};
pub use classifier::{classify, rank_factors, DominantClassification, ReportShape};
pub use config::AnalysisConfig;
pub use domain::{
    Factor, PrimaryFactor, PrimaryScores, ScoreGrade, ScoreTable, SecondaryFactor,
    SecondaryScores,
};
pub use efficiency::{compute_efficiency, EfficiencyMetrics, FactorEfficiency};
pub use key_factors::{detect_key_factors, high_factors, top_factors};
pub use narrative::{NarrativeReport, SecondaryDynamics, SecondaryState};
pub use report::{generate_report, AnalysisReport, ChartPoint, FactorScoreView, ReportEngine};
pub use router::{report_router, FactorReference, ReportRequest, ReportResponse};
pub use scoring::{aggregate, FactorScores};
