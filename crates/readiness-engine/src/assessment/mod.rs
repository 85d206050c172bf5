//! Career readiness assessment: question catalog, answer ledger, scoring and
//! recommendation.

pub mod catalog;
pub mod import;
pub mod ledger;
pub mod progress;
pub mod router;
pub mod scoring;

#[cfg(test)]
mod tests;

pub use catalog::{CatalogError, Question, QuestionCatalog, Section};
pub use import::{LedgerImportError, LedgerImporter};
pub use ledger::{AnswerLedger, AnswerValidationError};
pub use progress::{AssessmentProgress, SectionProgress};
pub use router::{assessment_router, ScoreRequest};
pub use scoring::{
    aggregate, estimate_matches, score_section, select_recommendation, AnswerKey,
    AssessmentOutcome, CareerMatch, CompositeResult, Facet, FacetBreakdown, FacetScore,
    ReadinessEngine, Recommendation, RecommendationTier, ScoringConfig, ScoringPolicy,
};
