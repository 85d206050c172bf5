use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::assessment::catalog::{QuestionCatalog, Section};
use crate::assessment::ledger::AnswerLedger;
use crate::assessment::router::assessment_router;
use crate::assessment::scoring::{AnswerKey, ReadinessEngine, ScoringConfig};

pub(super) fn engine() -> ReadinessEngine {
    ReadinessEngine::standard(ScoringConfig::default())
}

pub(super) fn strict_engine() -> ReadinessEngine {
    ReadinessEngine::standard(ScoringConfig {
        strict_answers: true,
    })
}

pub(super) fn section_ledger(section: Section, label: &str) -> AnswerLedger {
    QuestionCatalog::standard()
        .section_ids(section)
        .into_iter()
        .map(|id| (id, label.to_string()))
        .collect()
}

pub(super) fn correct_technical_ledger() -> AnswerLedger {
    AnswerKey::standard().iter().collect()
}

/// Top answer on every Likert question plus the keyed technical answers.
pub(super) fn best_case_ledger() -> AnswerLedger {
    let catalog = QuestionCatalog::standard();
    let key = AnswerKey::standard();
    catalog
        .questions()
        .iter()
        .map(|question| {
            let label = key
                .correct_answer(question.id)
                .or_else(|| question.options.last().copied())
                .unwrap_or_default();
            (question.id, label)
        })
        .collect()
}

pub(super) fn router() -> axum::Router {
    assessment_router(Arc::new(engine()))
}

pub(super) fn strict_router() -> axum::Router {
    assessment_router(Arc::new(strict_engine()))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
