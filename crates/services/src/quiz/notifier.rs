/// Receives right/wrong feedback for each accepted answer.
///
/// Implementations play a sound, flash the view, or do nothing. They have no
/// say over session state.
pub trait FeedbackNotifier: Send + Sync {
    fn notify(&self, is_correct: bool);
}

/// Discards feedback.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopNotifier;

impl FeedbackNotifier for NoopNotifier {
    fn notify(&self, _is_correct: bool) {}
}

/// Emits feedback as a tracing event.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl FeedbackNotifier for TracingNotifier {
    fn notify(&self, is_correct: bool) {
        tracing::info!(is_correct, "answer feedback");
    }
}
