//! Tunables for the quiz prefetch.

use std::ops::RangeInclusive;
use std::time::Duration;

/// How the quiz service fills its quiz list at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoaderSettings {
    /// Number of independent quiz fetches.
    pub quiz_count: usize,
    /// Fetch `i` starts `i * stagger` after the token arrives.
    pub stagger: Duration,
    /// Pause before each retry of a failed fetch.
    pub retry_delay: Duration,
    /// Retries after the first attempt before a fetch is abandoned.
    pub max_retries: u32,
    pub question_counts: RangeInclusive<u32>,
    pub categories: RangeInclusive<u32>,
}

impl Default for LoaderSettings {
    fn default() -> Self {
        Self {
            quiz_count: 10,
            stagger: Duration::from_secs(1),
            retry_delay: Duration::from_secs(1),
            max_retries: 3,
            question_counts: 5..=10,
            categories: 9..=32,
        }
    }
}

impl LoaderSettings {
    pub fn with_quiz_count(mut self, quiz_count: usize) -> Self {
        self.quiz_count = quiz_count;
        self
    }
}
