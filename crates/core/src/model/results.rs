use std::collections::BTreeMap;

use serde::Serialize;

use crate::model::question::QuizQuestion;

/// How a single question was answered, for the results review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnswerReview {
    pub question: QuizQuestion,
    pub chosen: Option<usize>,
    pub is_correct: bool,
}

impl AnswerReview {
    /// Text of the chosen option, if the question was answered.
    #[must_use]
    pub fn chosen_text(&self) -> Option<&str> {
        self.chosen.and_then(|index| self.question.option(index))
    }

    /// Text of the correct option.
    #[must_use]
    pub fn correct_text(&self) -> &str {
        self.question
            .option(self.question.correct_option())
            .unwrap_or_default()
    }
}

/// Score summary over a quiz's active questions.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct QuizResults {
    correct_count: usize,
    total: usize,
    score_percent: u8,
    reviews: Vec<AnswerReview>,
}

impl QuizResults {
    /// Score `answers` (position -> chosen option) against `questions`.
    ///
    /// Unanswered positions count as incorrect. An empty question list scores 0%.
    #[must_use]
    pub fn compute(questions: &[QuizQuestion], answers: &BTreeMap<usize, usize>) -> Self {
        let reviews: Vec<AnswerReview> = questions
            .iter()
            .enumerate()
            .map(|(position, question)| {
                let chosen = answers.get(&position).copied();
                AnswerReview {
                    question: question.clone(),
                    chosen,
                    is_correct: chosen.is_some_and(|index| question.is_correct(index)),
                }
            })
            .collect();

        let correct_count = reviews.iter().filter(|r| r.is_correct).count();
        let total = questions.len();

        Self {
            correct_count,
            total,
            score_percent: percent_rounded(correct_count, total),
            reviews,
        }
    }

    #[must_use]
    pub fn correct_count(&self) -> usize {
        self.correct_count
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }

    #[must_use]
    pub fn score_percent(&self) -> u8 {
        self.score_percent
    }

    #[must_use]
    pub fn reviews(&self) -> &[AnswerReview] {
        &self.reviews
    }
}

/// `round(100 * correct / total)` with halves rounded up, in integer math.
fn percent_rounded(correct: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let percent = (200 * correct + total) / (2 * total);
    u8::try_from(percent.min(100)).unwrap_or(100)
}
