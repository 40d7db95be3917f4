use std::collections::HashMap;

use tokio::time::Instant;

/// Answer and timer bookkeeping for the current play session.
#[derive(Debug, Default)]
pub(crate) struct SessionState {
    answers: HashMap<String, HashMap<usize, bool>>,
    correct_answers: u32,
    started_at: Option<Instant>,
    total_time: u64,
}

impl SessionState {
    pub fn record_answer(&mut self, quiz_id: &str, question_index: usize, correct: bool) {
        self.answers
            .entry(quiz_id.to_string())
            .or_default()
            .insert(question_index, correct);

        if correct {
            self.correct_answers += 1;
        }
    }

    pub fn start_timer(&mut self, now: Instant) {
        self.started_at = Some(now);
    }

    /// Whole seconds since `start_timer`. Zero if the timer never started.
    pub fn end_timer(&mut self, now: Instant) {
        self.total_time = self
            .started_at
            .map(|start| now.saturating_duration_since(start).as_secs())
            .unwrap_or(0);
    }

    pub fn correct_answers(&self) -> u32 {
        self.correct_answers
    }

    pub fn total_time(&self) -> u64 {
        self.total_time
    }

    pub fn answer(&self, quiz_id: &str, question_index: usize) -> Option<bool> {
        self.answers.get(quiz_id)?.get(&question_index).copied()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
