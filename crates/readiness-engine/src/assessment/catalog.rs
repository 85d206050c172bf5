use std::collections::HashSet;

use serde::Serialize;

/// Question grouping scored independently of the others.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Psychometric,
    Technical,
    WiscarProbe,
}

impl Section {
    pub const ALL: [Section; 3] = [
        Section::Psychometric,
        Section::Technical,
        Section::WiscarProbe,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Section::Psychometric => "Psychometric Analysis",
            Section::Technical => "Technical & Aptitude",
            Section::WiscarProbe => "WISCAR Framework",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Section::Psychometric => {
                "Personality fit, interests, and cognitive style using Big Five, Holland Codes, and Grit Scale"
            }
            Section::Technical => {
                "General aptitude, prerequisite knowledge, and domain-specific automotive engineering skills"
            }
            Section::WiscarProbe => {
                "Comprehensive analysis across Will, Interest, Skill, Cognitive readiness, Ability, and Real-world alignment"
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    pub id: &'static str,
    pub prompt: &'static str,
    pub options: Vec<&'static str>,
    pub section: Section,
}

impl Question {
    pub fn option_index(&self, label: &str) -> Option<usize> {
        self.options.iter().position(|option| *option == label)
    }
}

/// Raised when a catalog definition breaks the structural rules.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("question id '{0}' is defined more than once")]
    DuplicateQuestion(String),
    #[error("question '{question_id}' needs at least two options, found {found}")]
    TooFewOptions { question_id: String, found: usize },
    #[error("answer key references unknown question '{0}'")]
    UnknownKeyedQuestion(String),
    #[error("answer key for '{question_id}' names '{answer}', which is not one of its options")]
    KeyNotAnOption { question_id: String, answer: String },
    #[error("answer key covers '{0}', which is not a technical question")]
    KeyedQuestionNotTechnical(String),
}

/// Immutable, ordered set of quiz questions.
#[derive(Debug, Clone)]
pub struct QuestionCatalog {
    questions: Vec<Question>,
}

impl QuestionCatalog {
    pub fn new(questions: Vec<Question>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for question in &questions {
            if !seen.insert(question.id) {
                return Err(CatalogError::DuplicateQuestion(question.id.to_string()));
            }
            if question.options.len() < 2 {
                return Err(CatalogError::TooFewOptions {
                    question_id: question.id.to_string(),
                    found: question.options.len(),
                });
            }
        }

        Ok(Self { questions })
    }

    pub fn standard() -> Self {
        Self {
            questions: standard_questions(),
        }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn question(&self, id: &str) -> Option<&Question> {
        self.questions.iter().find(|question| question.id == id)
    }

    pub fn questions_for_section(&self, section: Section) -> Vec<&Question> {
        self.questions
            .iter()
            .filter(|question| question.section == section)
            .collect()
    }

    /// Ordered question ids belonging to `section`.
    pub fn section_ids(&self, section: Section) -> Vec<&'static str> {
        self.questions
            .iter()
            .filter(|question| question.section == section)
            .map(|question| question.id)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

impl Default for QuestionCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

const AGREEMENT: [&str; 5] = [
    "Strongly Disagree",
    "Disagree",
    "Neutral",
    "Agree",
    "Strongly Agree",
];
const FREQUENCY: [&str; 5] = ["Never", "Rarely", "Sometimes", "Often", "Always"];
const PROFICIENCY: [&str; 5] = ["Not at all", "Somewhat", "Moderately", "Well", "Very well"];

fn question(
    id: &'static str,
    prompt: &'static str,
    options: &[&'static str],
    section: Section,
) -> Question {
    Question {
        id,
        prompt,
        options: options.to_vec(),
        section,
    }
}

fn standard_questions() -> Vec<Question> {
    vec![
        question(
            "psych1",
            "I often imagine how cars could be designed better.",
            &AGREEMENT,
            Section::Psychometric,
        ),
        question(
            "psych2",
            "I enjoy solving structured engineering problems.",
            &AGREEMENT,
            Section::Psychometric,
        ),
        question(
            "psych3",
            "I prefer working with clear constraints and guidelines.",
            &AGREEMENT,
            Section::Psychometric,
        ),
        question(
            "psych4",
            "I stay committed to tasks even when they become challenging or boring.",
            &AGREEMENT,
            Section::Psychometric,
        ),
        question(
            "psych5",
            "I am naturally curious about how mechanical systems work.",
            &AGREEMENT,
            Section::Psychometric,
        ),
        question(
            "tech1",
            "What is the primary force acting on a car when it turns around a corner?",
            &[
                "Gravitational force",
                "Centripetal force",
                "Friction force",
                "Normal force",
            ],
            Section::Technical,
        ),
        question(
            "tech2",
            "Which CAD software is most commonly used in automotive design?",
            &["AutoCAD", "SolidWorks", "SketchUp", "Blender"],
            Section::Technical,
        ),
        question(
            "tech3",
            "What does aerodynamics primarily affect in vehicle design?",
            &[
                "Interior comfort",
                "Fuel efficiency and stability",
                "Engine power",
                "Brake performance",
            ],
            Section::Technical,
        ),
        question(
            "tech4",
            "In the automotive design process, what comes after concept sketching?",
            &["Manufacturing", "3D modeling", "Market research", "Testing"],
            Section::Technical,
        ),
        question(
            "tech5",
            "What is the main purpose of a crumple zone in vehicle design?",
            &[
                "Reduce weight",
                "Improve aerodynamics",
                "Absorb impact energy",
                "Enhance aesthetics",
            ],
            Section::Technical,
        ),
        question(
            "wiscar1",
            "I complete tasks even when they take longer than expected.",
            &FREQUENCY,
            Section::WiscarProbe,
        ),
        question(
            "wiscar2",
            "I enjoy designing and building mechanical objects.",
            &AGREEMENT,
            Section::WiscarProbe,
        ),
        question(
            "wiscar3",
            "I can identify basic tools used in automotive manufacturing.",
            &PROFICIENCY,
            Section::WiscarProbe,
        ),
        question(
            "wiscar4",
            "When I encounter a complex problem, I break it down into smaller parts.",
            &FREQUENCY,
            Section::WiscarProbe,
        ),
        question(
            "wiscar5",
            "Mistakes help me learn better than getting things right the first time.",
            &AGREEMENT,
            Section::WiscarProbe,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_catalog_has_five_questions_per_section() {
        let catalog = QuestionCatalog::standard();
        assert_eq!(catalog.len(), 15);
        for section in Section::ALL {
            assert_eq!(catalog.section_ids(section).len(), 5, "{section:?}");
        }
        assert_eq!(
            catalog.section_ids(Section::Technical),
            vec!["tech1", "tech2", "tech3", "tech4", "tech5"]
        );
    }

    #[test]
    fn standard_catalog_passes_structural_checks() {
        let questions = QuestionCatalog::standard().questions().to_vec();
        assert!(QuestionCatalog::new(questions).is_ok());
    }

    #[test]
    fn rejects_duplicate_ids() {
        let mut questions = standard_questions();
        questions.push(question("psych1", "again", &AGREEMENT, Section::Psychometric));

        let err = QuestionCatalog::new(questions).expect_err("duplicate rejected");
        assert_eq!(err, CatalogError::DuplicateQuestion("psych1".to_string()));
    }

    #[test]
    fn rejects_single_option_questions() {
        let questions = vec![question("solo", "Only one", &["Yes"], Section::Technical)];

        match QuestionCatalog::new(questions) {
            Err(CatalogError::TooFewOptions { question_id, found }) => {
                assert_eq!(question_id, "solo");
                assert_eq!(found, 1);
            }
            other => panic!("expected too few options, got {other:?}"),
        }
    }
}
