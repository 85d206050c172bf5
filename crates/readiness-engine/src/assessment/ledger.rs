use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::catalog::{QuestionCatalog, Section};

/// Respondent answers keyed by question id.
///
/// Re-recording a question overwrites the earlier answer; entries are never removed.
/// A blank or whitespace-only label counts as unanswered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerLedger {
    answers: BTreeMap<String, String>,
}

impl AnswerLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an answer, returning the label it replaced.
    pub fn record(
        &mut self,
        question_id: impl Into<String>,
        label: impl Into<String>,
    ) -> Option<String> {
        self.answers.insert(question_id.into(), label.into())
    }

    pub fn answer(&self, question_id: &str) -> Option<&str> {
        self.answers
            .get(question_id)
            .map(String::as_str)
            .filter(|label| !label.trim().is_empty())
    }

    /// Answered entries, skipping blank labels.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.answers
            .iter()
            .map(|(id, label)| (id.as_str(), label.as_str()))
            .filter(|(_, label)| !label.trim().is_empty())
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    pub fn answered_in(&self, catalog: &QuestionCatalog, section: Section) -> usize {
        catalog
            .questions_for_section(section)
            .iter()
            .filter(|question| self.answer(question.id).is_some())
            .count()
    }

    pub fn is_complete(&self, catalog: &QuestionCatalog) -> bool {
        catalog
            .questions()
            .iter()
            .all(|question| self.answer(question.id).is_some())
    }

    /// Strict data-contract check: every id must exist in the catalog and every
    /// label must be one of that question's declared options.
    pub fn validate(&self, catalog: &QuestionCatalog) -> Result<(), AnswerValidationError> {
        for (question_id, label) in self.iter() {
            let question =
                catalog
                    .question(question_id)
                    .ok_or_else(|| AnswerValidationError::UnknownQuestion {
                        question_id: question_id.to_string(),
                    })?;

            if question.option_index(label).is_none() {
                return Err(AnswerValidationError::UnrecognizedOption {
                    question_id: question_id.to_string(),
                    answer: label.to_string(),
                });
            }
        }

        Ok(())
    }
}

impl<K, V> FromIterator<(K, V)> for AnswerLedger
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut ledger = Self::new();
        for (question_id, label) in iter {
            ledger.record(question_id, label);
        }
        ledger
    }
}

/// Caller data-contract violations surfaced by strict validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnswerValidationError {
    #[error("unknown question id '{question_id}'")]
    UnknownQuestion { question_id: String },
    #[error("'{answer}' is not an option for question '{question_id}'")]
    UnrecognizedOption { question_id: String, answer: String },
}
