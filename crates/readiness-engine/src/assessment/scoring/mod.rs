mod careers;
mod composite;
mod config;
mod recommendation;
mod section;

pub use careers::{estimate_matches, CareerMatch};
pub use composite::{
    aggregate, CompositeResult, Facet, FacetBreakdown, FacetScore, ScoreSeed, MAX_SCORE,
};
pub use config::ScoringConfig;
pub use recommendation::{
    select_recommendation, Recommendation, RecommendationTier, DEVELOP_THRESHOLD, READY_THRESHOLD,
};
pub use section::{score_section, AnswerKey, ScoringPolicy, CORRECT_ANSWER_POINTS, LIKERT_POINTS};

use serde::Serialize;
use tracing::debug;

use super::catalog::{CatalogError, QuestionCatalog, Section};
use super::ledger::{AnswerLedger, AnswerValidationError};
use super::progress::AssessmentProgress;

/// Stateless scorer holding the catalog, answer key and acceptance rules.
#[derive(Debug, Clone)]
pub struct ReadinessEngine {
    catalog: QuestionCatalog,
    key: AnswerKey,
    config: ScoringConfig,
}

impl ReadinessEngine {
    /// Build an engine after checking that every keyed answer is a declared
    /// option of a technical question.
    pub fn new(
        catalog: QuestionCatalog,
        key: AnswerKey,
        config: ScoringConfig,
    ) -> Result<Self, CatalogError> {
        for (question_id, answer) in key.iter() {
            let question = catalog
                .question(question_id)
                .ok_or_else(|| CatalogError::UnknownKeyedQuestion(question_id.to_string()))?;

            if question.section != Section::Technical {
                return Err(CatalogError::KeyedQuestionNotTechnical(
                    question_id.to_string(),
                ));
            }

            if question.option_index(answer).is_none() {
                return Err(CatalogError::KeyNotAnOption {
                    question_id: question_id.to_string(),
                    answer: answer.to_string(),
                });
            }
        }

        Ok(Self {
            catalog,
            key,
            config,
        })
    }

    pub fn standard(config: ScoringConfig) -> Self {
        Self {
            catalog: QuestionCatalog::standard(),
            key: AnswerKey::standard(),
            config,
        }
    }

    pub fn catalog(&self) -> &QuestionCatalog {
        &self.catalog
    }

    pub fn answer_key(&self) -> &AnswerKey {
        &self.key
    }

    pub fn config(&self) -> ScoringConfig {
        self.config
    }

    pub fn score_section(&self, section: Section, ledger: &AnswerLedger) -> u8 {
        let ids = self.catalog.section_ids(section);
        let policy = ScoringPolicy::for_section(section, &self.catalog, &self.key);
        score_section(&ids, ledger, &policy)
    }

    /// Score any ledger. Unknown ids are ignored and partial ledgers score
    /// over whatever was answered.
    pub fn score(&self, ledger: &AnswerLedger) -> AssessmentOutcome {
        let scores = aggregate(
            self.score_section(Section::Psychometric, ledger),
            self.score_section(Section::Technical, ledger),
            self.score_section(Section::WiscarProbe, ledger),
        );

        let recommendation = select_recommendation(scores.overall());
        let progress = AssessmentProgress::from_ledger(&self.catalog, ledger);

        debug!(
            psychometric = scores.psychometric(),
            technical = scores.technical(),
            wiscar = scores.wiscar(),
            overall = scores.overall(),
            tier = recommendation.tier.label(),
            answered = progress.answered,
            "scored assessment"
        );

        AssessmentOutcome {
            facets: FacetBreakdown::from_composite(&scores),
            career_matches: estimate_matches(&scores),
            scores,
            recommendation,
            progress,
        }
    }

    /// Score a ledger, validating it first when the engine runs strict.
    pub fn evaluate(&self, ledger: &AnswerLedger) -> Result<AssessmentOutcome, AnswerValidationError> {
        if self.config.strict_answers {
            ledger.validate(&self.catalog)?;
        }

        Ok(self.score(ledger))
    }
}

impl Default for ReadinessEngine {
    fn default() -> Self {
        Self::standard(ScoringConfig::default())
    }
}

/// Everything the presentation layer renders after submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssessmentOutcome {
    pub scores: CompositeResult,
    pub facets: FacetBreakdown,
    pub recommendation: Recommendation,
    pub career_matches: Vec<CareerMatch>,
    pub progress: AssessmentProgress,
}

impl AssessmentOutcome {
    pub fn summary(&self) -> String {
        format!(
            "{} (overall {}/{})",
            self.recommendation.title,
            self.scores.overall(),
            MAX_SCORE
        )
    }
}
