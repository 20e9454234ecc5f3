mod quiz_vm;
mod results_vm;

pub use quiz_vm::{
    CategoryVm, FeedbackVm, OptionState, OptionVm, QuestionVm, QuizIntent, map_categories,
    map_question,
};
pub use results_vm::{ResultsVm, ReviewItemVm, map_results};
