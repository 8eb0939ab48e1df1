//! PAIOR scoring and report engine.
//!
//! Turns a finished set of Likert survey answers into factor scores, an
//! energy efficiency index, a dominant temperament type, salient
//! psychological dynamics and a narrative report. The engine itself is a
//! set of pure functions; configuration, telemetry and the HTTP router are
//! thin layers around it.

pub mod config;
pub mod engine;
pub mod error;
pub mod telemetry;

pub use engine::{
    generate_report, report_router, AnalysisConfig, AnalysisReport, AnswerSet, ReportEngine,
};
