use std::collections::BTreeMap;

use serde::Serialize;
use thiserror::Error;

use crate::model::question::{Category, QuizQuestion};
use crate::model::results::QuizResults;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("no questions for category \"{category}\"")]
    NoQuestionsForCategory { category: Category },

    #[error("option {index} is out of range for {option_count} options")]
    InvalidOptionIndex { index: usize, option_count: usize },
}

//
// ─── PHASE & EVENTS ────────────────────────────────────────────────────────────
//

/// Coarse stage of a quiz session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SessionPhase {
    SelectingCategory,
    Answering,
    ShowingResults,
}

/// Handle for the one scheduled advance of a feedback window.
///
/// Tied to the session epoch and question position; a ticket from an earlier
/// session, or for a window that already closed, is ignored by `advance`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AdvanceTicket {
    epoch: u64,
    position: usize,
}

impl AdvanceTicket {
    #[must_use]
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }
}

/// Feedback shown for the answer currently in its feedback window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AnswerFeedback {
    pub position: usize,
    pub chosen: usize,
    pub is_correct: bool,
}

/// Why an answer was not taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    NotAnswering,
    FeedbackPending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerOutcome {
    /// Answer recorded; the caller must schedule `ticket`.
    Accepted {
        feedback: AnswerFeedback,
        ticket: AdvanceTicket,
    },
    Ignored(IgnoreReason),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvanceOutcome {
    NextQuestion { position: usize },
    Finished,
    Ignored,
}

//
// ─── STATE ─────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq)]
struct ActiveQuiz {
    category: Category,
    questions: Vec<QuizQuestion>,
    answers: BTreeMap<usize, usize>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum SessionState {
    SelectingCategory,
    Answering {
        quiz: ActiveQuiz,
        current: usize,
        feedback: Option<AnswerFeedback>,
    },
    ShowingResults {
        quiz: ActiveQuiz,
    },
}

/// Pure quiz state machine.
///
/// Holds no timer; `select_answer` hands back an `AdvanceTicket` and whoever
/// owns the session feeds it to `advance` once the feedback window elapses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSession {
    state: SessionState,
    epoch: u64,
}

impl Default for QuizSession {
    fn default() -> Self {
        Self::new()
    }
}

impl QuizSession {
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: SessionState::SelectingCategory,
            epoch: 0,
        }
    }

    /// Start answering `questions` for `category`.
    ///
    /// Allowed from any phase; any in-flight feedback window is invalidated.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NoQuestionsForCategory` if `questions` is empty.
    /// The session is left untouched in that case.
    pub fn start(
        &mut self,
        category: Category,
        questions: Vec<QuizQuestion>,
    ) -> Result<(), SessionError> {
        if questions.is_empty() {
            return Err(SessionError::NoQuestionsForCategory { category });
        }

        self.epoch = self.epoch.wrapping_add(1);
        self.state = SessionState::Answering {
            quiz: ActiveQuiz {
                category,
                questions,
                answers: BTreeMap::new(),
            },
            current: 0,
            feedback: None,
        };
        Ok(())
    }

    /// Record an answer for the current question and open its feedback window.
    ///
    /// Ignored outside `Answering` and while a feedback window is open.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InvalidOptionIndex` if `option` is not an index
    /// into the current question's options.
    pub fn select_answer(&mut self, option: usize) -> Result<AnswerOutcome, SessionError> {
        let epoch = self.epoch;
        let SessionState::Answering {
            quiz,
            current,
            feedback,
        } = &mut self.state
        else {
            return Ok(AnswerOutcome::Ignored(IgnoreReason::NotAnswering));
        };

        if feedback.is_some() {
            return Ok(AnswerOutcome::Ignored(IgnoreReason::FeedbackPending));
        }

        let question = &quiz.questions[*current];
        if option >= question.option_count() {
            return Err(SessionError::InvalidOptionIndex {
                index: option,
                option_count: question.option_count(),
            });
        }

        let answer = AnswerFeedback {
            position: *current,
            chosen: option,
            is_correct: question.is_correct(option),
        };
        quiz.answers.insert(*current, option);
        *feedback = Some(answer);

        Ok(AnswerOutcome::Accepted {
            feedback: answer,
            ticket: AdvanceTicket {
                epoch,
                position: *current,
            },
        })
    }

    /// Close the feedback window named by `ticket` and move on.
    ///
    /// No-op unless `ticket` belongs to this session and its window is still open.
    pub fn advance(&mut self, ticket: AdvanceTicket) -> AdvanceOutcome {
        if ticket.epoch != self.epoch {
            return AdvanceOutcome::Ignored;
        }

        let state = std::mem::replace(&mut self.state, SessionState::SelectingCategory);
        let (next_state, outcome) = match state {
            SessionState::Answering {
                quiz,
                current,
                feedback: Some(_),
            } if current == ticket.position => {
                if current + 1 < quiz.questions.len() {
                    let position = current + 1;
                    (
                        SessionState::Answering {
                            quiz,
                            current: position,
                            feedback: None,
                        },
                        AdvanceOutcome::NextQuestion { position },
                    )
                } else {
                    (
                        SessionState::ShowingResults { quiz },
                        AdvanceOutcome::Finished,
                    )
                }
            }
            other => (other, AdvanceOutcome::Ignored),
        };
        self.state = next_state;
        outcome
    }

    /// Back to category selection, discarding all answers.
    pub fn restart(&mut self) {
        self.epoch = self.epoch.wrapping_add(1);
        self.state = SessionState::SelectingCategory;
    }

    /// Score the active questions. Valid in any phase.
    #[must_use]
    pub fn results(&self) -> QuizResults {
        match self.quiz() {
            Some(quiz) => QuizResults::compute(&quiz.questions, &quiz.answers),
            None => QuizResults::default(),
        }
    }

    // ─── Read access ───────────────────────────────────────────────────────────

    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        match self.state {
            SessionState::SelectingCategory => SessionPhase::SelectingCategory,
            SessionState::Answering { .. } => SessionPhase::Answering,
            SessionState::ShowingResults { .. } => SessionPhase::ShowingResults,
        }
    }

    #[must_use]
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    #[must_use]
    pub fn selected_category(&self) -> Option<&Category> {
        self.quiz().map(|quiz| &quiz.category)
    }

    #[must_use]
    pub fn active_questions(&self) -> &[QuizQuestion] {
        match self.quiz() {
            Some(quiz) => &quiz.questions,
            None => &[],
        }
    }

    /// Position of the question being answered. `None` outside `Answering`.
    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        match &self.state {
            SessionState::Answering { current, .. } => Some(*current),
            _ => None,
        }
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&QuizQuestion> {
        match &self.state {
            SessionState::Answering { quiz, current, .. } => quiz.questions.get(*current),
            _ => None,
        }
    }

    #[must_use]
    pub fn answers(&self) -> Option<&BTreeMap<usize, usize>> {
        self.quiz().map(|quiz| &quiz.answers)
    }

    #[must_use]
    pub fn answer_for(&self, position: usize) -> Option<usize> {
        self.quiz()
            .and_then(|quiz| quiz.answers.get(&position).copied())
    }

    #[must_use]
    pub fn feedback(&self) -> Option<AnswerFeedback> {
        match &self.state {
            SessionState::Answering { feedback, .. } => *feedback,
            _ => None,
        }
    }

    #[must_use]
    pub fn is_feedback_pending(&self) -> bool {
        self.feedback().is_some()
    }

    fn quiz(&self) -> Option<&ActiveQuiz> {
        match &self.state {
            SessionState::SelectingCategory => None,
            SessionState::Answering { quiz, .. } | SessionState::ShowingResults { quiz } => {
                Some(quiz)
            }
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
