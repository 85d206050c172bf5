use metrics_exporter_prometheus::PrometheusHandle;
use readiness_engine::assessment::AnswerLedger;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Parse a `question_id=label` pair given on the command line.
pub(crate) fn parse_answer_pair(raw: &str) -> Result<(String, String), String> {
    let (question_id, label) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected QUESTION_ID=ANSWER, got '{raw}'"))?;

    let question_id = question_id.trim();
    let label = label.trim();
    if question_id.is_empty() || label.is_empty() {
        return Err(format!("question id and answer must be non-empty in '{raw}'"));
    }

    Ok((question_id.to_string(), label.to_string()))
}

/// A respondent with strong interest but patchy technical knowledge.
pub(crate) fn sample_respondent() -> AnswerLedger {
    [
        ("psych1", "Strongly Agree"),
        ("psych2", "Agree"),
        ("psych3", "Neutral"),
        ("psych4", "Agree"),
        ("psych5", "Strongly Agree"),
        ("tech1", "Centripetal force"),
        ("tech2", "AutoCAD"),
        ("tech3", "Fuel efficiency and stability"),
        ("tech4", "3D modeling"),
        ("tech5", "Improve aerodynamics"),
        ("wiscar1", "Often"),
        ("wiscar2", "Strongly Agree"),
        ("wiscar3", "Somewhat"),
        ("wiscar4", "Always"),
        ("wiscar5", "Agree"),
    ]
    .into_iter()
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use readiness_engine::assessment::QuestionCatalog;

    #[test]
    fn parses_answer_pairs_with_spaces() {
        let (id, label) = parse_answer_pair("tech3 = Fuel efficiency and stability").expect("parses");
        assert_eq!(id, "tech3");
        assert_eq!(label, "Fuel efficiency and stability");
    }

    #[test]
    fn rejects_pairs_without_separator_or_value() {
        assert!(parse_answer_pair("tech3").is_err());
        assert!(parse_answer_pair("tech3=").is_err());
        assert!(parse_answer_pair("=Always").is_err());
    }

    #[test]
    fn sample_respondent_answers_every_question_validly() {
        let catalog = QuestionCatalog::standard();
        let ledger = sample_respondent();
        assert!(ledger.is_complete(&catalog));
        assert!(ledger.validate(&catalog).is_ok());
    }
}
