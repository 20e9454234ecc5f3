mod controller;
mod notifier;
mod timer;

// Public API of the quiz subsystem.
pub use controller::QuizController;
pub use notifier::{FeedbackNotifier, NoopNotifier, TracingNotifier};
pub use timer::{AdvanceReceiver, FeedbackTimer};
