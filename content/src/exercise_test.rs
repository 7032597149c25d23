use super::*;

fn sample_questions() -> Vec<Question> {
    vec![
        Question {
            prompt: "How do you greet someone in the morning?".to_owned(),
            choices: vec!["Suprabhat".to_owned(), "Shubh ratri".to_owned()],
            answer: "Suprabhat".to_owned(),
        },
        Question {
            prompt: "Which script is Kannada written in?".to_owned(),
            choices: vec!["Devanagari".to_owned(), "Kannada".to_owned()],
            answer: "Kannada".to_owned(),
        },
    ]
}

// =============================================================
// parse_questions
// =============================================================

#[test]
fn parse_accepts_a_question_array() {
    let raw = r#"[
        {"prompt": "Pick one", "choices": ["a", "b"], "answer": "b"}
    ]"#;
    let questions = parse_questions(raw).expect("valid document");
    assert_eq!(questions.len(), 1);
    assert_eq!(questions[0].answer, "b");
}

#[test]
fn parse_rejects_malformed_document() {
    assert!(matches!(
        parse_questions("not a question"),
        Err(crate::error::ApiError::Decode(_))
    ));
}

#[test]
fn parse_rejects_empty_string() {
    assert!(parse_questions("").is_err());
}

// =============================================================
// AnswerSheet
// =============================================================

#[test]
fn select_replaces_a_previous_choice() {
    let mut sheet = AnswerSheet::default();
    sheet.select(0, "a");
    sheet.select(0, "b");
    assert_eq!(sheet.answers.get(&0).map(String::as_str), Some("b"));
}

#[test]
fn is_complete_requires_every_index() {
    let mut sheet = AnswerSheet::default();
    sheet.select(0, "a");
    assert!(!sheet.is_complete(2));
    sheet.select(1, "b");
    assert!(sheet.is_complete(2));
}

#[test]
fn sheet_serializes_to_the_submit_shape() {
    let mut sheet = AnswerSheet::default();
    sheet.select(0, "Suprabhat");
    sheet.select(2, "Kannada");
    let json = serde_json::to_string(&sheet).expect("encode");
    assert_eq!(json, r#"{"answers":{"0":"Suprabhat","2":"Kannada"}}"#);
}

// =============================================================
// grade
// =============================================================

#[test]
fn grade_counts_correct_answers() {
    let questions = sample_questions();
    let mut sheet = AnswerSheet::default();
    sheet.select(0, "Suprabhat");
    sheet.select(1, "Devanagari");
    let grade = grade(&questions, &sheet);
    assert_eq!(grade.correct, 1);
    assert_eq!(grade.total, 2);
    assert_eq!(grade.per_question, vec![true, false]);
}

#[test]
fn unanswered_questions_count_as_wrong() {
    let questions = sample_questions();
    let grade = grade(&questions, &AnswerSheet::default());
    assert_eq!(grade.correct, 0);
    assert_eq!(grade.per_question, vec![false, false]);
}
