use crate::infra::{parse_answer_pair, sample_respondent};
use clap::Args;
use readiness_engine::assessment::{
    AnswerLedger, AssessmentOutcome, LedgerImporter, QuestionCatalog, ReadinessEngine,
    ScoringConfig, Section,
};
use readiness_engine::config::AppConfig;
use readiness_engine::error::AppError;
use readiness_engine::telemetry;
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug, Default)]
pub(crate) struct ScoreArgs {
    /// CSV export with `Question ID,Answer` columns
    #[arg(long)]
    pub(crate) answers_csv: Option<PathBuf>,
    /// Individual answers as QUESTION_ID=ANSWER; applied after the CSV
    #[arg(long = "answer", value_parser = parse_answer_pair)]
    pub(crate) answers: Vec<(String, String)>,
    /// Reject unknown question ids and answers outside the declared options
    #[arg(long)]
    pub(crate) strict: bool,
    /// Print the outcome as JSON instead of a text report
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Print the outcome as JSON instead of a text report
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_questions() -> Result<(), AppError> {
    let catalog = QuestionCatalog::standard();
    render_catalog(&catalog);
    Ok(())
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let ScoreArgs {
        answers_csv,
        answers,
        strict,
        json,
    } = args;

    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let mut ledger = match &answers_csv {
        Some(path) => LedgerImporter::from_path(path)?,
        None => AnswerLedger::new(),
    };
    for (question_id, label) in answers {
        ledger.record(question_id, label);
    }

    let engine = ReadinessEngine::standard(ScoringConfig {
        strict_answers: strict || config.scoring.strict_answers,
    });
    let outcome = engine.evaluate(&ledger)?;
    info!(
        answered = outcome.progress.answered,
        overall = outcome.scores.overall(),
        "scored answers from command line"
    );

    print_outcome(&outcome, json)
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let engine = ReadinessEngine::default();
    let outcome = engine.score(&sample_respondent());

    if !args.json {
        println!("Career readiness demo (sample respondent)");
    }
    print_outcome(&outcome, args.json)
}

fn print_outcome(outcome: &AssessmentOutcome, json: bool) -> Result<(), AppError> {
    if json {
        let rendered = serde_json::to_string_pretty(outcome)?;
        println!("{rendered}");
    } else {
        render_outcome(outcome);
    }
    Ok(())
}

fn render_catalog(catalog: &QuestionCatalog) {
    println!("Career readiness assessment ({} questions)", catalog.len());

    for section in Section::ALL {
        println!("\n{}", section.label());
        println!("  {}", section.description());
        for question in catalog.questions_for_section(section) {
            println!("- [{}] {}", question.id, question.prompt);
            println!("    options: {}", question.options.join(" | "));
        }
    }
}

fn render_outcome(outcome: &AssessmentOutcome) {
    let scores = &outcome.scores;

    println!("\nSection scores");
    for entry in &outcome.progress.sections {
        println!(
            "- {}: {} ({}/{} answered)",
            entry.section_label,
            scores.section(entry.section),
            entry.answered,
            entry.total
        );
    }
    println!(
        "- Overall: {} ({}% of questions answered)",
        scores.overall(),
        outcome.progress.completion_pct
    );

    let recommendation = &outcome.recommendation;
    println!("\nRecommendation: {}", recommendation.title);
    println!("{}", recommendation.description);
    for (index, step) in recommendation.next_steps.iter().enumerate() {
        println!("  {}. {}", index + 1, step);
    }

    println!("\nWISCAR breakdown");
    for facet in outcome.facets.iter() {
        println!("- {}: {} ({})", facet.label, facet.score, facet.description);
    }

    println!("\nCareer role matching");
    for role in &outcome.career_matches {
        println!("- {}: {}% | {}", role.role, role.match_score, role.description);
    }
}
