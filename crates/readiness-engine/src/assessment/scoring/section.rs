use std::collections::BTreeMap;

use tracing::warn;

use super::super::catalog::{Question, QuestionCatalog, Section};
use super::super::ledger::AnswerLedger;

/// Points awarded per Likert rank, lowest rank first.
pub const LIKERT_POINTS: [u32; 5] = [4, 8, 12, 16, 20];

/// Points for a technical answer matching the key.
pub const CORRECT_ANSWER_POINTS: u32 = 20;

// Checked top rank first so the longer phrase wins over its suffix.
const LIKERT_MARKERS: [(usize, &[&str]); 4] = [
    (4, &["Strongly Agree", "Always", "Very well"]),
    (3, &["Agree", "Often", "Well"]),
    (2, &["Neutral", "Sometimes", "Moderately"]),
    (1, &["Disagree", "Rarely", "Somewhat"]),
];

/// Canonical correct option per technical question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerKey {
    answers: BTreeMap<&'static str, &'static str>,
}

impl AnswerKey {
    pub fn new<I>(answers: I) -> Self
    where
        I: IntoIterator<Item = (&'static str, &'static str)>,
    {
        Self {
            answers: answers.into_iter().collect(),
        }
    }

    pub fn standard() -> Self {
        Self::new([
            ("tech1", "Centripetal force"),
            ("tech2", "SolidWorks"),
            ("tech3", "Fuel efficiency and stability"),
            ("tech4", "3D modeling"),
            ("tech5", "Absorb impact energy"),
        ])
    }

    pub fn correct_answer(&self, question_id: &str) -> Option<&'static str> {
        self.answers.get(question_id).copied()
    }

    pub fn is_correct(&self, question_id: &str, answer: &str) -> bool {
        self.correct_answer(question_id) == Some(answer)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.answers.iter().map(|(id, answer)| (*id, *answer))
    }
}

impl Default for AnswerKey {
    fn default() -> Self {
        Self::standard()
    }
}

/// How a single answered question converts to points.
#[derive(Debug, Clone, Copy)]
pub enum ScoringPolicy<'a> {
    /// Rank the answer within the question's declared scale.
    Likert(&'a QuestionCatalog),
    /// Full points for the keyed answer, nothing otherwise.
    Correctness(&'a AnswerKey),
}

impl<'a> ScoringPolicy<'a> {
    pub fn for_section(section: Section, catalog: &'a QuestionCatalog, key: &'a AnswerKey) -> Self {
        match section {
            Section::Technical => ScoringPolicy::Correctness(key),
            Section::Psychometric | Section::WiscarProbe => ScoringPolicy::Likert(catalog),
        }
    }

    pub fn points(&self, question_id: &str, answer: &str) -> u32 {
        match self {
            ScoringPolicy::Likert(catalog) => {
                LIKERT_POINTS[likert_rank(catalog.question(question_id), question_id, answer)]
            }
            ScoringPolicy::Correctness(key) => {
                if key.is_correct(question_id, answer) {
                    CORRECT_ANSWER_POINTS
                } else {
                    0
                }
            }
        }
    }
}

/// Mean points over the answered subset of `question_ids`, rounded half up.
///
/// Unanswered ids are skipped entirely; a section with no answers scores 0.
pub fn score_section(question_ids: &[&str], answers: &AnswerLedger, policy: &ScoringPolicy) -> u8 {
    let (total, answered) = question_ids
        .iter()
        .filter_map(|id| answers.answer(id).map(|label| (*id, label)))
        .fold((0u32, 0u32), |(total, answered), (id, label)| {
            (total + policy.points(id, label), answered + 1)
        });

    if answered == 0 {
        return 0;
    }

    let mean = (total + answered / 2) / answered;
    mean.min(100) as u8
}

fn likert_rank(question: Option<&Question>, question_id: &str, answer: &str) -> usize {
    let top = LIKERT_POINTS.len() - 1;

    if let Some(question) = question {
        if let Some(index) = question.option_index(answer) {
            let span = question.options.len().saturating_sub(1).max(1);
            return ((index * top + span / 2) / span).min(top);
        }
    }

    let rank = marker_rank(answer);
    warn!(
        question_id,
        answer, rank, "answer is not a declared option; ranked by marker phrase"
    );
    rank
}

fn marker_rank(answer: &str) -> usize {
    LIKERT_MARKERS
        .iter()
        .find(|(_, markers)| markers.iter().any(|marker| answer.contains(marker)))
        .map(|(rank, _)| *rank)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marker_rank_prefers_the_longer_phrase() {
        assert_eq!(marker_rank("Strongly Agree"), 4);
        assert_eq!(marker_rank("I Agree"), 3);
        assert_eq!(marker_rank("Strongly Disagree"), 1);
        assert_eq!(marker_rank("Always, obviously"), 4);
        assert_eq!(marker_rank("no idea"), 0);
    }

    #[test]
    fn declared_options_rank_by_position() {
        let catalog = QuestionCatalog::standard();
        let policy = ScoringPolicy::Likert(&catalog);

        assert_eq!(policy.points("psych1", "Strongly Disagree"), 4);
        assert_eq!(policy.points("psych1", "Neutral"), 12);
        assert_eq!(policy.points("wiscar1", "Always"), 20);
        assert_eq!(policy.points("wiscar3", "Somewhat"), 8);
        assert_eq!(policy.points("wiscar3", "Very well"), 20);
    }

    #[test]
    fn shorter_scales_project_onto_five_ranks() {
        let question = Question {
            id: "short",
            prompt: "Three point scale",
            options: vec!["Low", "Mid", "High"],
            section: Section::Psychometric,
        };

        assert_eq!(likert_rank(Some(&question), "short", "Low"), 0);
        assert_eq!(likert_rank(Some(&question), "short", "Mid"), 2);
        assert_eq!(likert_rank(Some(&question), "short", "High"), 4);
    }

    #[test]
    fn correctness_awards_all_or_nothing() {
        let key = AnswerKey::standard();
        let policy = ScoringPolicy::Correctness(&key);

        assert_eq!(policy.points("tech2", "SolidWorks"), 20);
        assert_eq!(policy.points("tech2", "AutoCAD"), 0);
        assert_eq!(policy.points("tech9", "SolidWorks"), 0);
    }

    #[test]
    fn mean_is_rounded_to_nearest_integer() {
        let key = AnswerKey::standard();
        let correctness = ScoringPolicy::Correctness(&key);
        let ids = ["tech1", "tech2", "tech3"];

        let one_right: AnswerLedger = [
            ("tech1", "Centripetal force"),
            ("tech2", "AutoCAD"),
            ("tech3", "Engine power"),
        ]
        .into_iter()
        .collect();
        // 20 / 3 = 6.67
        assert_eq!(score_section(&ids, &one_right, &correctness), 7);

        let two_right: AnswerLedger = [
            ("tech1", "Centripetal force"),
            ("tech2", "SolidWorks"),
            ("tech3", "Engine power"),
        ]
        .into_iter()
        .collect();
        // 40 / 3 = 13.33
        assert_eq!(score_section(&ids, &two_right, &correctness), 13);

        let catalog = QuestionCatalog::standard();
        let likert = ScoringPolicy::Likert(&catalog);
        let ledger: AnswerLedger = [
            ("psych1", "Strongly Agree"),
            ("psych2", "Strongly Agree"),
            ("psych3", "Agree"),
        ]
        .into_iter()
        .collect();
        // 56 / 3 = 18.67
        assert_eq!(
            score_section(&["psych1", "psych2", "psych3"], &ledger, &likert),
            19
        );
    }

    #[test]
    fn unanswered_ids_do_not_dilute_the_mean() {
        let key = AnswerKey::standard();
        let correctness = ScoringPolicy::Correctness(&key);
        let ledger: AnswerLedger = [("tech5", "Absorb impact energy")].into_iter().collect();

        let ids = ["tech1", "tech2", "tech3", "tech4", "tech5"];
        assert_eq!(score_section(&ids, &ledger, &correctness), 20);
        assert_eq!(score_section(&ids, &AnswerLedger::new(), &correctness), 0);
    }
}
