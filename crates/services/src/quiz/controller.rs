use std::collections::BTreeMap;
use std::sync::Arc;

use quiz_core::model::{
    AdvanceOutcome, AdvanceTicket, AnswerFeedback, AnswerOutcome, Category, QuizQuestion,
    QuizResults, QuizSession, SessionError, SessionPhase,
};
use storage::repository::QuestionRepository;

use super::notifier::FeedbackNotifier;
use super::timer::{AdvanceReceiver, FeedbackTimer};
use crate::config::QuizConfig;

/// Owns a quiz session and drives its feedback window.
///
/// The controller is the single writer of session state. Accepted answers are
/// announced to the `FeedbackNotifier` and schedule an automatic advance; the
/// elapsed ticket comes back through the `AdvanceReceiver` returned by `new`
/// and must be passed to `advance`. Selecting a category or restarting cancels
/// whatever advance is still scheduled.
pub struct QuizController {
    questions: Arc<dyn QuestionRepository>,
    notifier: Arc<dyn FeedbackNotifier>,
    config: QuizConfig,
    session: QuizSession,
    timer: FeedbackTimer,
}

impl QuizController {
    #[must_use]
    pub fn new(
        questions: Arc<dyn QuestionRepository>,
        notifier: Arc<dyn FeedbackNotifier>,
        config: QuizConfig,
    ) -> (Self, AdvanceReceiver) {
        let (timer, advances) = FeedbackTimer::channel();
        let controller = Self {
            questions,
            notifier,
            config,
            session: QuizSession::new(),
            timer,
        };
        (controller, advances)
    }

    /// Start a quiz over every bank question in `category`.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NoQuestionsForCategory` when the bank has no
    /// question in `category`; nothing changes in that case.
    pub fn select_category(&mut self, category: &Category) -> Result<(), SessionError> {
        let questions = self.questions.questions_for(category);
        let count = questions.len();
        if let Err(err) = self.session.start(category.clone(), questions) {
            tracing::warn!(%category, "no questions for category");
            return Err(err);
        }

        if self.timer.cancel() {
            tracing::debug!("cancelled pending advance on category change");
        }
        tracing::info!(
            %category,
            questions = count,
            epoch = self.session.epoch(),
            "quiz started"
        );
        Ok(())
    }

    /// Answer the current question.
    ///
    /// While a feedback window is open, or outside `Answering`, the call is
    /// ignored and returns `AnswerOutcome::Ignored`.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InvalidOptionIndex` if `option` is not an option
    /// of the current question.
    pub fn select_answer(&mut self, option: usize) -> Result<AnswerOutcome, SessionError> {
        let outcome = self.session.select_answer(option).inspect_err(|err| {
            tracing::error!(error = %err, "rejected answer");
        })?;

        match outcome {
            AnswerOutcome::Accepted { feedback, ticket } => {
                tracing::debug!(
                    position = feedback.position,
                    chosen = feedback.chosen,
                    is_correct = feedback.is_correct,
                    "answer recorded"
                );
                self.notifier.notify(feedback.is_correct);
                self.timer.schedule(ticket, self.config.feedback_delay());
            }
            AnswerOutcome::Ignored(reason) => {
                tracing::debug!(?reason, option, "answer ignored");
            }
        }
        Ok(outcome)
    }

    /// Close the feedback window named by `ticket`.
    ///
    /// Stale tickets, and tickets arriving after a restart, are ignored.
    pub fn advance(&mut self, ticket: AdvanceTicket) -> AdvanceOutcome {
        let outcome = self.session.advance(ticket);
        match outcome {
            AdvanceOutcome::NextQuestion { position } => {
                self.timer.cancel();
                tracing::debug!(position, "advanced to next question");
            }
            AdvanceOutcome::Finished => {
                self.timer.cancel();
                let results = self.session.results();
                tracing::info!(
                    correct = results.correct_count(),
                    total = results.total(),
                    score_percent = results.score_percent(),
                    "quiz finished"
                );
            }
            AdvanceOutcome::Ignored => {
                tracing::debug!(
                    ticket_epoch = ticket.epoch(),
                    epoch = self.session.epoch(),
                    "ignored stale advance"
                );
            }
        }
        outcome
    }

    /// Score the current session. Unanswered questions count as incorrect.
    #[must_use]
    pub fn compute_results(&self) -> QuizResults {
        self.session.results()
    }

    /// Back to category selection, discarding the session.
    pub fn restart(&mut self) {
        if self.timer.cancel() {
            tracing::debug!("cancelled pending advance on restart");
        }
        self.session.restart();
        tracing::info!(epoch = self.session.epoch(), "quiz restarted");
    }

    // ─── Read access ───────────────────────────────────────────────────────────

    #[must_use]
    pub fn categories(&self) -> Vec<Category> {
        self.questions.categories()
    }

    #[must_use]
    pub fn config(&self) -> QuizConfig {
        self.config
    }

    #[must_use]
    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        self.session.phase()
    }

    #[must_use]
    pub fn selected_category(&self) -> Option<&Category> {
        self.session.selected_category()
    }

    #[must_use]
    pub fn active_questions(&self) -> &[QuizQuestion] {
        self.session.active_questions()
    }

    #[must_use]
    pub fn question_count(&self) -> usize {
        self.session.active_questions().len()
    }

    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        self.session.current_index()
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&QuizQuestion> {
        self.session.current_question()
    }

    #[must_use]
    pub fn answers(&self) -> Option<&BTreeMap<usize, usize>> {
        self.session.answers()
    }

    #[must_use]
    pub fn answer_for(&self, position: usize) -> Option<usize> {
        self.session.answer_for(position)
    }

    #[must_use]
    pub fn feedback(&self) -> Option<AnswerFeedback> {
        self.session.feedback()
    }

    #[must_use]
    pub fn is_feedback_pending(&self) -> bool {
        self.session.is_feedback_pending()
    }
}
