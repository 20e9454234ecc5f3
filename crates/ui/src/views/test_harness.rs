use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use quiz_core::model::{QuestionBank, QuestionDraft};
use services::{FeedbackNotifier, NoopNotifier, QuizConfig};
use storage::repository::{InMemoryQuestionRepository, QuestionRepository};

use crate::context::{UiApp, build_app_context};
use crate::views::QuizView;
use crate::views::quiz::QuizTestHandles;

#[derive(Clone)]
struct TestApp {
    questions: Arc<dyn QuestionRepository>,
}

impl UiApp for TestApp {
    fn questions(&self) -> Arc<dyn QuestionRepository> {
        Arc::clone(&self.questions)
    }

    fn notifier(&self) -> Arc<dyn FeedbackNotifier> {
        Arc::new(NoopNotifier)
    }

    fn quiz_config(&self) -> QuizConfig {
        QuizConfig::default()
    }
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    handles: QuizTestHandles,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn QuizHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.handles.clone());
    rsx! { QuizView {} }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub handles: QuizTestHandles,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub fn drive(&mut self) {
        drive_dom(&mut self.dom);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

/// Two "Tudor History" questions (correct options 1 and 2) and one "Mexican Revolution".
pub fn sample_bank() -> QuestionBank {
    QuestionBank::from_drafts(vec![
        QuestionDraft {
            id: 1,
            prompt: "Who was the first Tudor monarch?".into(),
            options: vec!["Henry VIII".into(), "Henry VII".into(), "Edward VI".into()],
            correct_option: 1,
            explanation: Some("Henry VII won at Bosworth in 1485.".into()),
            category: "Tudor History".into(),
        },
        QuestionDraft {
            id: 2,
            prompt: "How many times did Henry VIII marry?".into(),
            options: vec!["Four".into(), "Five".into(), "Six".into()],
            correct_option: 2,
            explanation: None,
            category: "Tudor History".into(),
        },
        QuestionDraft {
            id: 3,
            prompt: "In which year did the Mexican Revolution begin?".into(),
            options: vec!["1810".into(), "1910".into()],
            correct_option: 1,
            explanation: None,
            category: "Mexican Revolution".into(),
        },
    ])
    .expect("sample bank")
}

pub fn setup_view_harness(bank: QuestionBank) -> ViewHarness {
    let app = Arc::new(TestApp {
        questions: Arc::new(InMemoryQuestionRepository::new(bank)),
    });
    let handles = QuizTestHandles::default();
    let dom = VirtualDom::new_with_props(
        QuizHarness,
        ViewHarnessProps {
            app,
            handles: handles.clone(),
        },
    );
    ViewHarness { dom, handles }
}
