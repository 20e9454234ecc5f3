use quiz_core::model::QuizResults;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReviewItemVm {
    pub prompt: String,
    pub category: String,
    pub answer_label: String,
    pub is_correct: bool,
    pub correct_label: Option<String>,
    pub explanation: Option<String>,
}

impl ReviewItemVm {
    #[must_use]
    pub fn answer_class(&self) -> &'static str {
        if self.is_correct {
            "answer correct"
        } else {
            "answer wrong"
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultsVm {
    pub score_label: String,
    pub tally_label: String,
    pub items: Vec<ReviewItemVm>,
}

#[must_use]
pub fn map_results(results: &QuizResults) -> ResultsVm {
    let items = results
        .reviews()
        .iter()
        .map(|review| {
            let answer_label = match review.chosen_text() {
                Some(text) => format!("Your answer: {text}"),
                None => "Not answered".to_string(),
            };
            // Only spell out the right answer when the user missed it.
            let correct_label =
                (!review.is_correct).then(|| format!("Correct answer: {}", review.correct_text()));
            ReviewItemVm {
                prompt: review.question.prompt().to_string(),
                category: review.question.category().to_string(),
                answer_label,
                is_correct: review.is_correct,
                correct_label,
                explanation: review.question.explanation().map(str::to_string),
            }
        })
        .collect();

    ResultsVm {
        score_label: format!("Your Score: {}%", results.score_percent()),
        tally_label: format!("{} of {} correct", results.correct_count(), results.total()),
        items,
    }
}
