//! Outbound notifications to whoever presents the exercise to the user.

use log::info;

/// Receives rep completions, progress checkpoints and advisory messages
pub trait FeedbackSink {
    /// One stand-kneel-stand cycle has completed
    fn increment_rep_count(&mut self);

    /// Estimated completion of the current rep, in [0, 1]
    fn send_progress_update(&mut self, progress: f32);

    /// User-facing advisory text
    fn send_feedback_message(&mut self, message: &str);
}

impl<S: FeedbackSink + ?Sized> FeedbackSink for &mut S {
    fn increment_rep_count(&mut self) {
        (**self).increment_rep_count();
    }

    fn send_progress_update(&mut self, progress: f32) {
        (**self).send_progress_update(progress);
    }

    fn send_feedback_message(&mut self, message: &str) {
        (**self).send_feedback_message(message);
    }
}

/// A single notification as recorded by [`EventLog`]
#[derive(Debug, Clone, PartialEq)]
pub enum FeedbackEvent {
    RepCompleted,
    Progress(f32),
    Message(String),
}

/// Sink that keeps every notification in arrival order
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Vec<FeedbackEvent>,
}

impl EventLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn events(&self) -> &[FeedbackEvent] {
        &self.events
    }

    /// Progress values only, in order
    #[must_use]
    pub fn progress_updates(&self) -> Vec<f32> {
        self.events
            .iter()
            .filter_map(|event| match event {
                FeedbackEvent::Progress(value) => Some(*value),
                _ => None,
            })
            .collect()
    }

    #[must_use]
    pub fn rep_count(&self) -> usize {
        self.events
            .iter()
            .filter(|event| matches!(event, FeedbackEvent::RepCompleted))
            .count()
    }

    /// Remove and return everything recorded so far
    pub fn drain(&mut self) -> Vec<FeedbackEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl FeedbackSink for EventLog {
    fn increment_rep_count(&mut self) {
        self.events.push(FeedbackEvent::RepCompleted);
    }

    fn send_progress_update(&mut self, progress: f32) {
        self.events.push(FeedbackEvent::Progress(progress));
    }

    fn send_feedback_message(&mut self, message: &str) {
        self.events.push(FeedbackEvent::Message(message.to_string()));
    }
}

/// Sink that reports through the `log` facade and keeps a running total
#[derive(Debug, Clone, Default)]
pub struct LogSink {
    reps: u32,
}

impl LogSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn reps(&self) -> u32 {
        self.reps
    }
}

impl FeedbackSink for LogSink {
    fn increment_rep_count(&mut self) {
        self.reps += 1;
        info!("Rep completed ({} total)", self.reps);
    }

    fn send_progress_update(&mut self, progress: f32) {
        info!("Progress {:.2}", progress);
    }

    fn send_feedback_message(&mut self, message: &str) {
        info!("{message}");
    }
}
