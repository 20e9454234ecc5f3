use quiz_core::model::Category;
use services::QuizController;

/// User actions the quiz view dispatches to the controller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuizIntent {
    SelectCategory(Category),
    Answer(usize),
    Restart,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptionState {
    Idle,
    ChosenCorrect,
    ChosenWrong,
    /// The right answer, highlighted after a wrong pick.
    Revealed,
}

impl OptionState {
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            OptionState::Idle => "option",
            OptionState::ChosenCorrect | OptionState::Revealed => "option correct",
            OptionState::ChosenWrong => "option wrong",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionVm {
    pub index: usize,
    pub text: String,
    pub state: OptionState,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeedbackVm {
    pub is_correct: bool,
    pub message: String,
}

impl FeedbackVm {
    #[must_use]
    pub fn class(&self) -> &'static str {
        if self.is_correct {
            "feedback correct"
        } else {
            "feedback wrong"
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionVm {
    pub progress_label: String,
    pub prompt: String,
    pub category: String,
    pub options: Vec<OptionVm>,
    pub feedback: Option<FeedbackVm>,
    /// Options are not clickable while feedback is showing.
    pub locked: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryVm {
    pub category: Category,
    pub label: String,
}

#[must_use]
pub fn map_categories(categories: &[Category]) -> Vec<CategoryVm> {
    categories
        .iter()
        .map(|category| CategoryVm {
            category: category.clone(),
            label: category.to_string(),
        })
        .collect()
}

/// View model for the question being answered; `None` outside `Answering`.
#[must_use]
pub fn map_question(controller: &QuizController) -> Option<QuestionVm> {
    let question = controller.current_question()?;
    let position = controller.current_index()?;
    let feedback = controller.feedback();

    let options = question
        .options()
        .iter()
        .enumerate()
        .map(|(index, text)| {
            let state = match feedback {
                Some(f) if f.chosen == index && f.is_correct => OptionState::ChosenCorrect,
                Some(f) if f.chosen == index => OptionState::ChosenWrong,
                Some(_) if question.is_correct(index) => OptionState::Revealed,
                _ => OptionState::Idle,
            };
            OptionVm {
                index,
                text: text.clone(),
                state,
            }
        })
        .collect();

    let feedback_vm = feedback.map(|f| {
        let message = if f.is_correct {
            "Correct!".to_string()
        } else {
            let correct = question.option(question.correct_option()).unwrap_or_default();
            format!("Incorrect. The answer is {correct}.")
        };
        FeedbackVm {
            is_correct: f.is_correct,
            message,
        }
    });

    Some(QuestionVm {
        progress_label: format!(
            "Question {} of {}",
            position + 1,
            controller.question_count()
        ),
        prompt: question.prompt().to_string(),
        category: question.category().to_string(),
        options,
        locked: feedback_vm.is_some(),
        feedback: feedback_vm,
    })
}
