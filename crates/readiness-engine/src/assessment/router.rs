use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::info;

use super::catalog::{Question, Section};
use super::ledger::AnswerLedger;
use super::scoring::ReadinessEngine;

#[derive(Debug, Deserialize)]
pub struct ScoreRequest {
    #[serde(default)]
    pub answers: AnswerLedger,
}

#[derive(Debug, Serialize)]
pub struct CatalogSectionView<'a> {
    pub section: Section,
    pub label: &'static str,
    pub description: &'static str,
    pub questions: Vec<&'a Question>,
}

/// Router exposing the question catalog and the scoring endpoint.
pub fn assessment_router(engine: Arc<ReadinessEngine>) -> Router {
    Router::new()
        .route("/api/v1/assessment/questions", get(catalog_handler))
        .route("/api/v1/assessment/score", post(score_handler))
        .with_state(engine)
}

pub(crate) async fn catalog_handler(State(engine): State<Arc<ReadinessEngine>>) -> Response {
    let catalog = engine.catalog();
    let sections: Vec<CatalogSectionView<'_>> = Section::ALL
        .into_iter()
        .map(|section| CatalogSectionView {
            section,
            label: section.label(),
            description: section.description(),
            questions: catalog.questions_for_section(section),
        })
        .collect();

    let payload = json!({
        "total_questions": catalog.len(),
        "sections": sections,
    });
    (StatusCode::OK, Json(payload)).into_response()
}

pub(crate) async fn score_handler(
    State(engine): State<Arc<ReadinessEngine>>,
    Json(request): Json<ScoreRequest>,
) -> Response {
    match engine.evaluate(&request.answers) {
        Ok(outcome) => {
            info!(
                overall = outcome.scores.overall(),
                tier = outcome.recommendation.tier.label(),
                "assessment scored"
            );
            (StatusCode::OK, Json(outcome)).into_response()
        }
        Err(error) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response()
        }
    }
}
