use chrono::Local;
use clap::{Args, ValueEnum};
use paior::config::AppConfig;
use paior::engine::{PrimaryFactor, SecondaryFactor};
use paior::error::AppError;
use paior::telemetry;
use paior::{AnalysisReport, AnswerSet, ReportEngine};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Args, Debug)]
pub(crate) struct ReportArgs {
    /// Answer file: a JSON object of question id to value, or a CSV with
    /// `question_id,value` headers
    #[arg(long)]
    pub(crate) answers: PathBuf,
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub(crate) format: OutputFormat,
    /// Override the configured efficiency weighting
    #[arg(long, value_parser = crate::infra::parse_age_weight_arg)]
    pub(crate) age_weight: Option<f64>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub(crate) format: OutputFormat,
}

pub(crate) fn run_report(args: ReportArgs) -> Result<(), AppError> {
    let ReportArgs {
        answers,
        format,
        age_weight,
    } = args;

    let mut analysis = cli_config()?.analysis;
    if let Some(age_weight) = age_weight {
        analysis.age_weight = age_weight;
    }

    let answer_set = AnswerSet::from_path(&answers)?;
    let report = ReportEngine::new(analysis).generate(&answer_set);

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Text => {
            print!(
                "{}",
                render_report_text(&answers.display().to_string(), &report)
            );
        }
    }

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let engine = ReportEngine::new(cli_config()?.analysis);
    let results: Vec<DemoResult> = SAMPLE_RESPONDENTS
        .iter()
        .enumerate()
        .map(|(seed, respondent)| DemoResult {
            target: respondent.target,
            detail: respondent.detail,
            report: engine.generate(&respondent.answers(seed as u32)),
        })
        .collect();

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&results)?),
        OutputFormat::Text => {
            println!(
                "PAIOR demo: {} sample respondents ({})",
                results.len(),
                Local::now().format("%Y-%m-%d")
            );
            for result in &results {
                let heading = format!("{} ({})", result.target, result.detail);
                print!("\n{}", render_report_text(&heading, &result.report));
            }
        }
    }

    Ok(())
}

/// Loads configuration and installs the stderr subscriber for one-shot
/// commands, so engine diagnostics honour `RUST_LOG` as they do when serving.
fn cli_config() -> Result<AppConfig, AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    Ok(config)
}

#[derive(Debug, Serialize)]
struct DemoResult {
    target: &'static str,
    detail: &'static str,
    report: AnalysisReport,
}

#[derive(Debug, Clone, Copy)]
enum Bias {
    Primary(PrimaryFactor, i8),
    Secondary(SecondaryFactor, i8),
}

/// Synthetic respondent whose answers lean toward the listed factors.
#[derive(Debug)]
struct SampleRespondent {
    target: &'static str,
    detail: &'static str,
    biases: &'static [Bias],
}

const SAMPLE_RESPONDENTS: [SampleRespondent; 6] = [
    SampleRespondent {
        target: "Elementary",
        detail: "grade 4",
        biases: &[
            Bias::Primary(PrimaryFactor::Drive, 1),
            Bias::Primary(PrimaryFactor::Relation, 1),
        ],
    },
    SampleRespondent {
        target: "Elementary",
        detail: "grade 6",
        biases: &[
            Bias::Primary(PrimaryFactor::Order, 1),
            Bias::Primary(PrimaryFactor::Inquiry, -1),
        ],
    },
    SampleRespondent {
        target: "Secondary school",
        detail: "year 11",
        biases: &[
            Bias::Primary(PrimaryFactor::Drive, 2),
            Bias::Secondary(SecondaryFactor::Struggle, 2),
        ],
    },
    SampleRespondent {
        target: "University",
        detail: "engineering",
        biases: &[
            Bias::Primary(PrimaryFactor::Inquiry, 2),
            Bias::Primary(PrimaryFactor::Order, 1),
        ],
    },
    SampleRespondent {
        target: "Adult",
        detail: "freelancer",
        biases: &[
            Bias::Primary(PrimaryFactor::Relation, 1),
            Bias::Secondary(SecondaryFactor::Perfection, 1),
            Bias::Secondary(SecondaryFactor::Dependence, -1),
        ],
    },
    SampleRespondent {
        target: "Adult",
        detail: "job seeking",
        biases: &[
            Bias::Primary(PrimaryFactor::Drive, -2),
            Bias::Primary(PrimaryFactor::Order, -2),
            Bias::Primary(PrimaryFactor::Inquiry, -2),
            Bias::Primary(PrimaryFactor::Relation, -2),
        ],
    },
];

impl SampleRespondent {
    /// Deterministic answers: a fixed 1..=5 pattern shifted by the biases.
    fn answers(&self, seed: u32) -> AnswerSet {
        let mut answers = AnswerSet::new();

        for (offset, factor) in PrimaryFactor::ordered().into_iter().enumerate() {
            let shift = self.primary_bias(factor);
            for item in 1..=10u32 {
                let value = biased_value(seed, offset as u32, item, shift);
                answers.insert(format!("{}{item}", factor.symbol()), value);
            }
        }

        for (offset, factor) in SecondaryFactor::ordered().into_iter().enumerate() {
            let shift = self.secondary_bias(factor);
            for item in 1..=10u32 {
                let value = biased_value(seed, offset as u32 + 4, item, shift);
                answers.insert(format!("P_{}_{item}", factor.survey_key()), value);
            }
        }

        answers
    }

    fn primary_bias(&self, factor: PrimaryFactor) -> i8 {
        self.biases
            .iter()
            .filter_map(|bias| match bias {
                Bias::Primary(candidate, shift) if *candidate == factor => Some(*shift),
                _ => None,
            })
            .sum()
    }

    fn secondary_bias(&self, factor: SecondaryFactor) -> i8 {
        self.biases
            .iter()
            .filter_map(|bias| match bias {
                Bias::Secondary(candidate, shift) if *candidate == factor => Some(*shift),
                _ => None,
            })
            .sum()
    }
}

fn biased_value(seed: u32, factor_offset: u32, item: u32, shift: i8) -> u32 {
    let base = (seed * 7 + factor_offset * 3 + item * 2) % 5 + 1;
    (i64::from(base) + i64::from(shift)).clamp(1, 5) as u32
}

pub(crate) fn render_report_text(heading: &str, report: &AnalysisReport) -> String {
    let mut out = String::new();
    let narrative = &report.narrative;

    out.push_str(&format!("== {heading} ==\n"));
    out.push_str(&format!(
        "Type: {} '{}' ({})\n",
        report.type_label,
        report.type_name,
        report.dominant.shape.label()
    ));
    let primary: Vec<String> = report
        .primary_factors
        .iter()
        .map(|view| format!("{} {} ({})", view.code, view.score, view.display_grade))
        .collect();
    out.push_str(&format!("Primary: {}\n", primary.join(" | ")));
    let secondary: Vec<String> = report
        .secondary_factors
        .iter()
        .map(|view| format!("{} {}", view.label, view.score))
        .collect();
    out.push_str(&format!("Dynamics: {}\n", secondary.join(" | ")));
    out.push_str(&format!(
        "Efficiency index: {:.1} (effective total {:.1} of {})\n",
        report.efficiency.efficiency_index,
        report.efficiency.effective_sum,
        report.efficiency.primary_sum
    ));

    let key: Vec<&str> = report
        .key_factors
        .iter()
        .map(|factor| factor.label())
        .collect();
    out.push_str(&format!(
        "Key dynamics: {}\n",
        if key.is_empty() {
            "none".to_string()
        } else {
            key.join(", ")
        }
    ));
    out.push_str(&format!("State: {}\n", narrative.secondary_state.label()));
    if report.skipped_answers > 0 {
        out.push_str(&format!("Skipped answers: {}\n", report.skipped_answers));
    }

    for paragraph in [
        &narrative.pattern_text,
        &narrative.chart_text,
        &narrative.secondary_block,
    ] {
        out.push_str(&format!("\n{paragraph}\n"));
    }
    for note in &report.secondary_dynamics.notes {
        let marker = if note.is_key { " [key]" } else { "" };
        out.push_str(&format!(
            "- {} ({} pts){marker}: {}\n",
            note.label, note.score, note.text
        ));
    }
    out.push_str(&format!(
        "\nSummary: {}\n{}\n{}\n",
        report.summary, narrative.data_summary, narrative.closing
    ));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn biased_values_stay_on_the_likert_scale() {
        for seed in 0..6 {
            for item in 1..=10 {
                for shift in [-2, 0, 2] {
                    let value = biased_value(seed, 3, item, shift);
                    assert!((1..=5).contains(&value));
                }
            }
        }
    }

    #[test]
    fn sample_answers_cover_every_item() {
        let answers = SAMPLE_RESPONDENTS[0].answers(0);
        assert_eq!(answers.len(), 130);
        assert!(answers.get("R10").is_some());
        assert!(answers.get("P_싫증_10").is_some());
    }

    #[test]
    fn positive_bias_raises_the_factor_score() {
        let engine = ReportEngine::default();
        let report = engine.generate(&SAMPLE_RESPONDENTS[2].answers(2));
        let neutral = SampleRespondent {
            target: "Control",
            detail: "neutral",
            biases: &[],
        };
        let baseline = engine.generate(&neutral.answers(2));

        assert!(
            report.primary.get(PrimaryFactor::Drive) > baseline.primary.get(PrimaryFactor::Drive)
        );
        assert!(
            report.secondary.get(SecondaryFactor::Struggle)
                > baseline.secondary.get(SecondaryFactor::Struggle)
        );
    }

    #[test]
    fn text_rendering_includes_narrative_sections() {
        let report = ReportEngine::default().generate(&SAMPLE_RESPONDENTS[3].answers(3));
        let text = render_report_text("University (engineering)", &report);

        assert!(text.starts_with("== University (engineering) =="));
        assert!(text.contains(&report.type_label));
        assert!(text.contains("Efficiency index:"));
        assert!(text.contains(&report.narrative.closing));
    }

    #[test]
    fn report_command_installs_the_log_subscriber() {
        let path = std::env::temp_dir().join(format!("paior-cli-{}.json", std::process::id()));
        std::fs::write(&path, r#"{"A1": 5, "A2": 2.5, "unknown": 3}"#).expect("write answers");

        let outcome = run_report(ReportArgs {
            answers: path.clone(),
            format: OutputFormat::Json,
            age_weight: None,
        });
        let _ = std::fs::remove_file(&path);

        outcome.expect("report command succeeds");
        assert!(tracing::dispatcher::has_been_set());
    }

    #[test]
    fn low_bias_respondent_reads_as_low_energy() {
        let report = ReportEngine::default().generate(&SAMPLE_RESPONDENTS[5].answers(5));
        assert!(report.dominant.is_low_energy);
    }
}
