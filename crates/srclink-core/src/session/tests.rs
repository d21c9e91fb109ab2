use super::*;
use crate::links::SourceOrigin;
use crate::query::QueryError;
use crate::response::SourceRecord;

fn answer(text: &str) -> BackendAnswer {
    BackendAnswer {
        raw_text: text.to_string(),
        sources: Vec::new(),
    }
}

fn answered(query: &str, text: &str) -> Conversation {
    let mut c = Conversation::new();
    c.submit(query).unwrap();
    c.receive(&answer(text), &AnswerOptions::default()).unwrap();
    c
}

#[test]
fn submit_then_receive() {
    let mut c = Conversation::new();
    assert!(!c.is_busy());
    c.submit("  When is the exam? ").unwrap();
    assert!(c.is_busy());

    let msg = c
        .receive(
            &answer("Monday, in hall B.\nSources: https://x.test/n/1"),
            &AnswerOptions::default(),
        )
        .unwrap();
    assert_eq!(msg.role, Role::Assistant);
    assert_eq!(msg.text, "Monday, in hall B.");
    assert_eq!(msg.sources.len(), 1);
    assert_eq!(msg.sources[0].url, "https://x.test/n/1");
    assert_eq!(msg.sources[0].origin, SourceOrigin::Extracted);
    assert!(msg.sources_visible);

    assert!(!c.is_busy());
    assert_eq!(c.messages().len(), 2);
    assert_eq!(c.messages()[0].text, "When is the exam?");
}

#[test]
fn structured_sources_used_on_receive() {
    let mut c = Conversation::new();
    c.submit("q").unwrap();
    let reply = BackendAnswer {
        raw_text: "See https://ignored.test/x".to_string(),
        sources: vec![SourceRecord {
            link: Some("https://x.test/notice/3".to_string()),
            ..SourceRecord::default()
        }],
    };
    let msg = c.receive(&reply, &AnswerOptions::default()).unwrap();
    assert_eq!(msg.sources.len(), 1);
    assert_eq!(msg.sources[0].origin, SourceOrigin::Structured);
}

#[test]
fn one_request_at_a_time() {
    let mut c = Conversation::new();
    c.submit("first").unwrap();
    assert_eq!(c.submit("second").unwrap_err(), SessionError::Busy);
    assert_eq!(c.messages().len(), 1);
}

#[test]
fn empty_query_rejected() {
    let mut c = Conversation::new();
    assert_eq!(
        c.submit("   ").unwrap_err(),
        SessionError::InvalidQuery(QueryError::Empty)
    );
    assert!(!c.is_busy());
    assert!(c.messages().is_empty());
}

#[test]
fn receive_or_fail_without_pending() {
    let mut c = Conversation::new();
    assert_eq!(
        c.receive(&answer("x"), &AnswerOptions::default()).unwrap_err(),
        SessionError::NotPending
    );
    assert_eq!(c.fail("boom").unwrap_err(), SessionError::NotPending);
}

#[test]
fn fail_records_error_and_frees_session() {
    let mut c = Conversation::new();
    c.submit("q").unwrap();
    let msg = c.fail("Sorry, something went wrong.").unwrap();
    assert_eq!(msg.role, Role::Error);
    assert!(!c.is_busy());
    c.submit("again").unwrap();
}

#[test]
fn toggle_sources_only_on_answers() {
    let mut c = answered("q", "a https://x.test/a");
    assert_eq!(c.toggle_sources(1), Ok(false));
    assert_eq!(c.toggle_sources(1), Ok(true));
    assert_eq!(c.toggle_sources(0), Err(SessionError::NotAnAnswer(0)));
    assert_eq!(c.toggle_sources(9), Err(SessionError::NoSuchMessage(9)));
}

#[test]
fn hidden_sources_by_option() {
    let mut c = Conversation::new();
    c.submit("q").unwrap();
    let opts = AnswerOptions {
        show_sources: false,
        ..AnswerOptions::default()
    };
    let msg = c.receive(&answer("a https://x.test/a"), &opts).unwrap();
    assert!(!msg.sources_visible);
}

#[test]
fn feedback_flow() {
    let mut c = answered("when is the exam", "Monday.");
    assert_eq!(
        c.submit_feedback(Rating::Up, None).unwrap_err(),
        SessionError::NoFeedbackOpen
    );
    assert_eq!(c.open_feedback(0), Err(SessionError::NotAnAnswer(0)));

    c.open_feedback(1).unwrap();
    assert_eq!(c.feedback_target(), Some(1));
    let rec = c.submit_feedback(Rating::Down, Some("  wrong hall  ")).unwrap();
    assert_eq!(rec.query, "when is the exam");
    assert_eq!(rec.answer, "Monday.");
    assert_eq!(rec.rating, Rating::Down);
    assert_eq!(rec.comment.as_deref(), Some("wrong hall"));
    assert_eq!(c.feedback_target(), None);
}

#[test]
fn feedback_blank_comment_dropped_and_cancel() {
    let mut c = answered("q", "a");
    c.open_feedback(1).unwrap();
    let rec = c.submit_feedback(Rating::Up, Some("   ")).unwrap();
    assert!(rec.comment.is_none());

    c.open_feedback(1).unwrap();
    assert!(c.cancel_feedback());
    assert!(!c.cancel_feedback());
}

#[test]
fn feedback_targets_matching_query() {
    let mut c = answered("first", "one");
    c.submit("second").unwrap();
    c.receive(&answer("two"), &AnswerOptions::default()).unwrap();
    assert_eq!(c.last_answer_index(), Some(3));

    c.open_feedback(1).unwrap();
    let rec = c.submit_feedback(Rating::Up, None).unwrap();
    assert_eq!(rec.query, "first");
    assert_eq!(rec.answer, "one");
}
