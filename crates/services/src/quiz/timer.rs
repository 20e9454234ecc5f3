use std::time::Duration;

use quiz_core::model::AdvanceTicket;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Receiving end for tickets whose feedback window has elapsed.
///
/// The session owner drains this and hands each ticket to
/// `QuizController::advance`.
#[derive(Debug)]
pub struct AdvanceReceiver {
    rx: mpsc::UnboundedReceiver<AdvanceTicket>,
}

impl AdvanceReceiver {
    /// Wait for the next elapsed ticket.
    ///
    /// Returns `None` once the paired timer has been dropped.
    pub async fn recv(&mut self) -> Option<AdvanceTicket> {
        self.rx.recv().await
    }

    /// Non-blocking variant of `recv`.
    pub fn try_recv(&mut self) -> Option<AdvanceTicket> {
        self.rx.try_recv().ok()
    }
}

/// Schedules at most one delayed advance at a time on the tokio runtime.
///
/// Must be used from within a tokio runtime.
#[derive(Debug)]
pub struct FeedbackTimer {
    tx: mpsc::UnboundedSender<AdvanceTicket>,
    pending: Option<JoinHandle<()>>,
}

impl FeedbackTimer {
    #[must_use]
    pub fn channel() -> (Self, AdvanceReceiver) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx, pending: None }, AdvanceReceiver { rx })
    }

    /// Deliver `ticket` after `delay`, replacing anything already scheduled.
    pub fn schedule(&mut self, ticket: AdvanceTicket, delay: Duration) {
        self.cancel();
        let tx = self.tx.clone();
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // Receiver gone means nobody is driving the session any more.
            let _ = tx.send(ticket);
        }));
    }

    /// Abort the scheduled delivery, if any. Returns true if one was still running.
    pub fn cancel(&mut self) -> bool {
        match self.pending.take() {
            Some(handle) => {
                let running = !handle.is_finished();
                handle.abort();
                running
            }
            None => false,
        }
    }

    #[must_use]
    pub fn is_scheduled(&self) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }
}

impl Drop for FeedbackTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}
