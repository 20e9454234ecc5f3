mod bank;
mod ids;
mod question;
mod results;
mod session;

pub use ids::{ParseIdError, QuestionId};

pub use bank::{BankError, QuestionBank};
pub use question::{Category, QuestionDraft, QuestionError, QuizQuestion};
pub use results::{AnswerReview, QuizResults};
pub use session::{
    AdvanceOutcome, AdvanceTicket, AnswerFeedback, AnswerOutcome, IgnoreReason, QuizSession,
    SessionError, SessionPhase,
};
