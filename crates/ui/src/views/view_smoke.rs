use dioxus::prelude::{ReadableExt, WritableExt};
use quiz_core::model::{AnswerOutcome, Category, SessionPhase};

use super::test_harness::{sample_bank, setup_view_harness};
use crate::vm::QuizIntent;

fn category(label: &str) -> Category {
    Category::new(label).expect("category")
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_lists_categories() {
    let mut harness = setup_view_harness(sample_bank());
    harness.rebuild();

    let html = harness.render();
    assert!(html.contains("Choose Your History Quiz"), "missing title in {html}");
    assert!(html.contains("Tudor History"), "missing category in {html}");
    assert!(html.contains("Mexican Revolution"), "missing category in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_shows_first_question_after_selection() {
    let mut harness = setup_view_harness(sample_bank());
    harness.rebuild();

    harness
        .handles
        .dispatch()
        .call(QuizIntent::SelectCategory(category("Tudor History")));
    harness.drive();

    let html = harness.render();
    assert!(html.contains("Question 1 of 2"), "missing progress in {html}");
    assert!(
        html.contains("Who was the first Tudor monarch?"),
        "missing prompt in {html}"
    );
    assert!(html.contains("Henry VII"), "missing option in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_shows_error_for_empty_category() {
    let mut harness = setup_view_harness(sample_bank());
    harness.rebuild();

    harness
        .handles
        .dispatch()
        .call(QuizIntent::SelectCategory(category("Ancient History")));
    harness.drive();

    let html = harness.render();
    assert!(
        html.contains("no questions for category"),
        "missing error in {html}"
    );
    assert!(html.contains("Choose Your History Quiz"), "left category list: {html}");
    assert_eq!(
        harness.handles.controller().read().phase(),
        SessionPhase::SelectingCategory
    );
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_shows_feedback_and_locks_options() {
    let mut harness = setup_view_harness(sample_bank());
    harness.rebuild();
    let dispatch = harness.handles.dispatch();

    dispatch.call(QuizIntent::SelectCategory(category("Tudor History")));
    harness.drive();
    dispatch.call(QuizIntent::Answer(0));
    harness.drive();

    let html = harness.render();
    assert!(
        html.contains("Incorrect. The answer is Henry VII."),
        "missing feedback in {html}"
    );
    assert!(html.contains("disabled"), "options not locked in {html}");
    assert_eq!(harness.handles.controller().read().answer_for(0), Some(0));
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_renders_results_and_restarts() {
    let mut harness = setup_view_harness(sample_bank());
    harness.rebuild();
    let dispatch = harness.handles.dispatch();

    dispatch.call(QuizIntent::SelectCategory(category("Mexican Revolution")));
    harness.drive();

    // Answer through the controller to get hold of the ticket instead of waiting for the timer.
    let mut controller = harness.handles.controller();
    let outcome = controller.write().select_answer(1).expect("answer");
    let AnswerOutcome::Accepted { ticket, .. } = outcome else {
        panic!("unexpected outcome {outcome:?}");
    };
    controller.write().advance(ticket);
    harness.drive();

    let html = harness.render();
    assert!(html.contains("Quiz Complete!"), "missing results title in {html}");
    assert!(html.contains("Your Score: 100%"), "missing score in {html}");
    assert!(html.contains("Your answer: 1910"), "missing review in {html}");

    dispatch.call(QuizIntent::Restart);
    harness.drive();
    let html = harness.render();
    assert!(html.contains("Choose Your History Quiz"), "did not restart: {html}");
}
