use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

/// Counts elapsed seconds on a background task until stopped or dropped.
#[derive(Debug)]
pub struct Ticker {
    seconds: Arc<AtomicU64>,
    task: Option<JoinHandle<()>>,
}

impl Ticker {
    pub const PERIOD: Duration = Duration::from_secs(1);

    pub fn start() -> Self {
        let seconds = Arc::new(AtomicU64::new(0));
        let counter = Arc::clone(&seconds);

        let task = tokio::spawn(async move {
            let mut ticks = interval_at(Instant::now() + Self::PERIOD, Self::PERIOD);
            ticks.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticks.tick().await;
                counter.fetch_add(1, Ordering::Relaxed);
            }
        });

        Self {
            seconds,
            task: Some(task),
        }
    }

    pub fn seconds(&self) -> u64 {
        self.seconds.load(Ordering::Relaxed)
    }

    pub fn is_running(&self) -> bool {
        self.task.is_some()
    }

    /// Stop counting. The value reached so far is kept.
    pub fn stop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use tokio::time::sleep;

    use super::*;

    #[tokio::test(start_paused = true)]
    async fn counts_whole_seconds() {
        let ticker = Ticker::start();
        sleep(Duration::from_millis(3_500)).await;
        assert_eq!(ticker.seconds(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn stop_freezes_the_count() {
        let mut ticker = Ticker::start();
        sleep(Duration::from_millis(2_500)).await;
        ticker.stop();
        sleep(Duration::from_secs(5)).await;

        assert_eq!(ticker.seconds(), 2);
        assert!(!ticker.is_running());
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_releases_the_task() {
        let ticker = Ticker::start();
        let seconds = Arc::clone(&ticker.seconds);
        sleep(Duration::from_millis(1_500)).await;

        drop(ticker);
        sleep(Duration::from_secs(5)).await;

        assert_eq!(seconds.load(Ordering::Relaxed), 1);
        assert_eq!(Arc::strong_count(&seconds), 1);
    }
}
