use serde::Serialize;

use super::catalog::{QuestionCatalog, Section};
use super::ledger::AnswerLedger;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionProgress {
    pub section: Section,
    pub section_label: &'static str,
    pub answered: usize,
    pub total: usize,
}

/// Answered-question counts per section, as shown beside the quiz flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssessmentProgress {
    pub sections: Vec<SectionProgress>,
    pub answered: usize,
    pub total: usize,
    pub completion_pct: u8,
}

impl AssessmentProgress {
    pub fn from_ledger(catalog: &QuestionCatalog, ledger: &AnswerLedger) -> Self {
        let sections: Vec<SectionProgress> = Section::ALL
            .into_iter()
            .map(|section| SectionProgress {
                section,
                section_label: section.label(),
                answered: ledger.answered_in(catalog, section),
                total: catalog.questions_for_section(section).len(),
            })
            .collect();

        let answered: usize = sections.iter().map(|entry| entry.answered).sum();
        let total = catalog.len();
        let completion_pct = if total == 0 {
            0
        } else {
            ((answered * 100 + total / 2) / total).min(100) as u8
        };

        Self {
            sections,
            answered,
            total,
            completion_pct,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.total > 0 && self.answered == self.total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_answers_per_section() {
        let catalog = QuestionCatalog::standard();
        let ledger: AnswerLedger = [
            ("psych1", "Agree"),
            ("psych2", "Agree"),
            ("tech3", "Engine power"),
            ("unknown", "Agree"),
        ]
        .into_iter()
        .collect();

        let progress = AssessmentProgress::from_ledger(&catalog, &ledger);

        assert_eq!(progress.sections[0].answered, 2);
        assert_eq!(progress.sections[1].answered, 1);
        assert_eq!(progress.sections[2].answered, 0);
        assert_eq!(progress.answered, 3);
        assert_eq!(progress.total, 15);
        assert_eq!(progress.completion_pct, 20);
        assert!(!progress.is_complete());
    }
}
