#![forbid(unsafe_code)]

pub mod model;

pub use model::{
    AnswerReview, BankError, Category, QuestionBank, QuestionDraft, QuestionError, QuestionId,
    QuizQuestion, QuizResults, QuizSession, SessionError, SessionPhase,
};
