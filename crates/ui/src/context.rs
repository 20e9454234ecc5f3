use std::sync::Arc;

use services::{AdvanceReceiver, FeedbackNotifier, QuizConfig, QuizController};
use storage::repository::QuestionRepository;

pub trait UiApp: Send + Sync {
    fn questions(&self) -> Arc<dyn QuestionRepository>;
    fn notifier(&self) -> Arc<dyn FeedbackNotifier>;
    fn quiz_config(&self) -> QuizConfig;
}

#[derive(Clone)]
pub struct AppContext {
    questions: Arc<dyn QuestionRepository>,
    notifier: Arc<dyn FeedbackNotifier>,
    quiz_config: QuizConfig,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            questions: app.questions(),
            notifier: app.notifier(),
            quiz_config: app.quiz_config(),
        }
    }

    #[must_use]
    pub fn quiz_config(&self) -> QuizConfig {
        self.quiz_config
    }

    /// A fresh controller over the shared question source.
    #[must_use]
    pub fn new_controller(&self) -> (QuizController, AdvanceReceiver) {
        QuizController::new(
            Arc::clone(&self.questions),
            Arc::clone(&self.notifier),
            self.quiz_config,
        )
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
