use readiness_engine::assessment::{
    aggregate, select_recommendation, AnswerKey, AnswerLedger, CatalogError, LedgerImporter,
    Question, QuestionCatalog, ReadinessEngine, RecommendationTier, ScoringConfig, Section,
};

fn respondent_csv() -> &'static str {
    "Question ID,Answer\n\
psych1,Strongly Agree\n\
psych2,Agree\n\
psych3,Neutral\n\
psych4,Agree\n\
psych5,Strongly Agree\n\
tech1,Centripetal force\n\
tech2,AutoCAD\n\
tech3,Fuel efficiency and stability\n\
tech4,3D modeling\n\
tech5,Reduce weight\n\
wiscar1,Often\n\
wiscar2,Strongly Agree\n\
wiscar3,Moderately\n\
wiscar4,Always\n\
wiscar5,Agree\n"
}

#[test]
fn imported_ledger_scores_end_to_end() {
    let catalog = QuestionCatalog::standard();
    let ledger =
        LedgerImporter::from_reader_strict(respondent_csv().as_bytes(), &catalog).expect("imports");
    assert!(ledger.is_complete(&catalog));

    let engine = ReadinessEngine::standard(ScoringConfig {
        strict_answers: true,
    });
    let outcome = engine.evaluate(&ledger).expect("valid ledger");

    // (20 + 16 + 12 + 16 + 20) / 5 = 16.8
    assert_eq!(outcome.scores.psychometric(), 17);
    // 3 of 5 keyed answers
    assert_eq!(outcome.scores.technical(), 12);
    // (16 + 20 + 12 + 20 + 16) / 5 = 16.8
    assert_eq!(outcome.scores.wiscar(), 17);
    // (17 + 12 + 17) / 3 = 15.33
    assert_eq!(outcome.scores.overall(), 15);
    assert_eq!(outcome.recommendation.tier, RecommendationTier::Explore);
    assert_eq!(outcome.progress.completion_pct, 100);
}

#[test]
fn engine_matches_standalone_pipeline() {
    let ledger: AnswerLedger = [
        ("psych1", "Agree"),
        ("tech1", "Centripetal force"),
        ("wiscar1", "Rarely"),
    ]
    .into_iter()
    .collect();

    let engine = ReadinessEngine::default();
    let outcome = engine.score(&ledger);

    let scores = aggregate(
        engine.score_section(Section::Psychometric, &ledger),
        engine.score_section(Section::Technical, &ledger),
        engine.score_section(Section::WiscarProbe, &ledger),
    );
    assert_eq!(outcome.scores, scores);
    assert_eq!(
        outcome.recommendation,
        select_recommendation(scores.overall())
    );
}

#[test]
fn custom_catalog_requires_keyed_answers_to_be_options() {
    let questions = vec![
        Question {
            id: "tech1",
            prompt: "Which unit measures torque?",
            options: vec!["Newton metre", "Watt"],
            section: Section::Technical,
        },
        Question {
            id: "psych1",
            prompt: "I enjoy sketching vehicles.",
            options: vec!["No", "Yes"],
            section: Section::Psychometric,
        },
    ];
    let catalog = QuestionCatalog::new(questions).expect("catalog valid");

    let bad_key = AnswerKey::new([("tech1", "Joule")]);
    match ReadinessEngine::new(catalog.clone(), bad_key, ScoringConfig::default()) {
        Err(CatalogError::KeyNotAnOption {
            question_id,
            answer,
        }) => {
            assert_eq!(question_id, "tech1");
            assert_eq!(answer, "Joule");
        }
        other => panic!("expected key error, got {other:?}"),
    }

    let misplaced = AnswerKey::new([("psych1", "Yes")]);
    assert!(matches!(
        ReadinessEngine::new(catalog.clone(), misplaced, ScoringConfig::default()),
        Err(CatalogError::KeyedQuestionNotTechnical(_))
    ));

    let key = AnswerKey::new([("tech1", "Newton metre")]);
    let engine =
        ReadinessEngine::new(catalog, key, ScoringConfig::default()).expect("engine builds");
    let ledger: AnswerLedger = [("tech1", "Newton metre"), ("psych1", "Yes")]
        .into_iter()
        .collect();
    let outcome = engine.score(&ledger);

    assert_eq!(outcome.scores.technical(), 20);
    // two-point scale: "Yes" is the top rank
    assert_eq!(outcome.scores.psychometric(), 20);
    assert_eq!(outcome.scores.wiscar(), 0);
    assert_eq!(outcome.scores.overall(), 13);
}
