mod category;
mod question;
mod quiz;
mod results;

pub use category::CategoryList;
pub use question::QuestionCard;
pub use quiz::QuizView;
pub use results::ResultsPanel;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;
