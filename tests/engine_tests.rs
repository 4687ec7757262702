//! Engine integration tests: selection, scoring, rejection, guess-readiness.

use film_guess::engine::{choose_best_question, filter_items, should_make_guess};
use film_guess::{AnswerValue, AttributeKey, EngineConfig, GuessEngine, Item, ItemDatabase, SessionState};

fn godfather_titanic() -> ItemDatabase {
    ItemDatabase::from_items(vec![
        Item::with_attributes("Godfather", ["country_US", "genre_crime"]),
        Item::with_attributes("Titanic", ["country_US", "genre_drama"]),
    ])
    .unwrap()
}

fn catalogue() -> ItemDatabase {
    ItemDatabase::from_items(vec![
        Item::with_attributes("The Godfather", ["country_US", "genre_crime", "mafia", "sequels", "award_Oscar"]),
        Item::with_attributes("Titanic", ["country_US", "genre_romance", "ship", "disaster", "award_Oscar"]),
        Item::with_attributes("Solaris", ["country_USSR", "genre_scifi", "space", "based_on_book"]),
        Item::with_attributes("Alien", ["country_US", "genre_scifi", "space", "genre_horror", "sequels"]),
        Item::with_attributes("Jaws", ["country_US", "genre_horror", "shark", "based_on_book", "sequels"]),
        Item::with_attributes("Amelie", ["country_France", "genre_comedy", "genre_romance"]),
    ])
    .unwrap()
}

// =============================================================================
// Scenario Tests
// =============================================================================

#[test]
fn test_godfather_beats_titanic_on_crime() {
    let db = godfather_titanic();
    let config = EngineConfig::default();
    let mut session = SessionState::new();
    session.record_answer("genre_crime", AnswerValue::Yes);

    let ranked = filter_items(&db, &session, &config);
    let godfather = ranked.iter().find(|s| s.title() == "Godfather").unwrap();
    let titanic = ranked.iter().find(|s| s.title() == "Titanic").unwrap();
    assert!(godfather.score > titanic.score);

    // genre_crime is never selected again while fresh attributes remain
    for _ in 0..2 {
        let q = choose_best_question(&db, &mut session, &config).unwrap();
        assert_ne!(q.as_str(), "genre_crime");
        session.record_answer(q, AnswerValue::Unknown);
    }
}

#[test]
fn test_rejected_leader_never_listed() {
    let db = godfather_titanic();
    let config = EngineConfig::default();
    let mut session = SessionState::new();
    session.record_answer("genre_crime", AnswerValue::Yes);

    let leader = filter_items(&db, &session, &config)[0].item.title.clone();
    assert_eq!(leader, "Godfather");

    session.reject(leader.clone());
    for _ in 0..3 {
        let ranked = filter_items(&db, &session, &config);
        assert!(ranked.iter().all(|s| s.title() != leader));
        if let Some(q) = choose_best_question(&db, &mut session, &config) {
            session.record_answer(q, AnswerValue::Yes);
        }
    }
}

#[test]
fn test_exhausted_attributes_trigger_revisit() {
    let db = godfather_titanic();
    let config = EngineConfig::default();
    let mut session = SessionState::new();
    for attr in db.attributes().to_vec() {
        session.record_answer(attr, AnswerValue::Unknown);
    }
    assert!(!should_make_guess(&filter_items(&db, &session, &config), &session, &config.thresholds));

    let q = choose_best_question(&db, &mut session, &config);
    assert!(q.is_some(), "revisit must produce a question");
    assert!(session.asked().is_empty());
    // The last answer is not asked again straight away
    assert_ne!(q.as_ref(), db.attributes().last());
}

// =============================================================================
// Scoring Properties
// =============================================================================

#[test]
fn test_full_match_beats_no_match() {
    let db = ItemDatabase::from_items(vec![
        Item::with_attributes("A", ["x", "y"]),
        Item::new("B").with_value("x", false).with_value("y", false).with_attr("z"),
    ])
    .unwrap();
    let config = EngineConfig::default();
    let mut session = SessionState::new();
    session.record_answer("x", AnswerValue::MostlyYes);
    session.record_answer("z", AnswerValue::No);

    let ranked = filter_items(&db, &session, &config);
    assert_eq!(ranked[0].title(), "A");
    assert!(ranked[0].score > ranked[1].score);
}

#[test]
fn test_scores_are_clamped() {
    let db = catalogue();
    let config = EngineConfig::default();
    let mut session = SessionState::new();
    for attr in ["country_US", "sequels", "genre_horror", "space"] {
        session.record_answer(attr, AnswerValue::Yes);
    }
    for attr in ["ship", "mafia"] {
        session.record_answer(attr, AnswerValue::No);
    }

    let ranked = filter_items(&db, &session, &config);
    assert_eq!(ranked.len(), 6);
    assert!(ranked.iter().all(|s| (0.0..=1.0).contains(&s.score)));
    assert_eq!(ranked[0].title(), "Alien");
    assert!(ranked.windows(2).all(|w| w[0].score >= w[1].score));
}

// =============================================================================
// Question Selection
// =============================================================================

#[test]
fn test_questions_follow_confirmed_attributes() {
    let db = catalogue();
    let config = EngineConfig::default();
    let mut session = SessionState::new();
    session.record_answer("genre_scifi", AnswerValue::Yes);

    let q = choose_best_question(&db, &mut session, &config).unwrap();
    // Sci-fi films share "space"; correlation outweighs entropy differences
    assert_eq!(q, AttributeKey::new("space"));
}

#[test]
fn test_selection_is_deterministic() {
    let db = catalogue();
    let config = EngineConfig::default();

    let run = || {
        let mut session = SessionState::new();
        let mut asked = Vec::new();
        while let Some(q) = choose_best_question(&db, &mut session, &config) {
            if asked.len() >= db.attributes().len() {
                break;
            }
            session.record_answer(q.clone(), AnswerValue::No);
            asked.push(q);
        }
        asked
    };

    let first = run();
    assert_eq!(first, run());
    assert_eq!(first.len(), db.attributes().len());
}

// =============================================================================
// Guess-Readiness
// =============================================================================

#[test]
fn test_no_guess_below_eight_meaningful_answers() {
    let db = catalogue();
    let config = EngineConfig::default();
    let mut session = SessionState::new();
    let alien = db.find("Alien").unwrap().1.clone();

    for attr in db.attributes().iter().take(7) {
        let value = if alien.is_set(attr.as_str()) { AnswerValue::Yes } else { AnswerValue::No };
        session.record_answer(attr.clone(), value);
    }
    for attr in db.attributes().iter().skip(7).take(5) {
        session.record_answer(attr.clone(), AnswerValue::Unknown);
    }

    let ranked = filter_items(&db, &session, &config);
    assert_eq!(session.meaningful_answers(), 7);
    assert!(!should_make_guess(&ranked, &session, &config.thresholds));
}

#[test]
fn test_empty_database_outcomes() {
    let db = ItemDatabase::new();
    let config = EngineConfig::default();
    let mut session = SessionState::new();

    assert!(choose_best_question(&db, &mut session, &config).is_none());
    assert!(filter_items(&db, &session, &config).is_empty());
    assert!(!should_make_guess(&[], &session, &config.thresholds));
}

// =============================================================================
// Facade
// =============================================================================

#[test]
fn test_engine_query_surface() {
    let mut engine = GuessEngine::with_database(catalogue());

    let q = engine.choose_best_question().unwrap();
    engine.record_answer(q.clone(), AnswerValue::Yes);
    assert_eq!(engine.session().answer_for(&q), Some(AnswerValue::Yes));

    let top = engine.top_candidates(3);
    assert!(top.len() <= 3);
    assert!(top.iter().all(|c| c.score >= engine.config().score_floor));
    let leader = top[0].title().to_string();
    assert!(!engine.should_make_guess());

    engine.reject_item(&leader);
    assert_eq!(engine.filter_items().len(), 5);

    engine.reset_session();
    assert_eq!(engine.filter_items().len(), 6);
}
