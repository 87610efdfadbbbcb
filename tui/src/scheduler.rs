//! Tokio-backed [`Scheduler`] for the running app.
//!
//! Ticks are local tasks, so they must be scheduled from inside a
//! [`tokio::task::LocalSet`] and run interleaved with the UI loop.

use countdown_core::{Clock, Scheduler, TickHandle};
use std::time::Duration;
use tokio::{
    task::JoinHandle,
    time::{Instant, MissedTickBehavior},
};

#[derive(Debug, Clone)]
pub struct LocalScheduler {
    epoch: Instant,
}

impl LocalScheduler {
    pub fn new() -> Self {
        Self {
            epoch: Instant::now(),
        }
    }
}

impl Default for LocalScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for LocalScheduler {
    fn now_ms(&self) -> u64 {
        self.epoch.elapsed().as_millis() as u64
    }
}

/// A running tick task.
pub struct LocalTick(JoinHandle<()>);

impl TickHandle for LocalTick {
    fn cancel(self) {
        // the task is never polled again once aborted
        self.0.abort();
    }
}

impl Scheduler for LocalScheduler {
    type Tick = LocalTick;

    fn schedule_repeating(&self, interval_ms: u64, mut callback: Box<dyn FnMut()>) -> LocalTick {
        let period = Duration::from_millis(interval_ms.max(1));
        let handle = tokio::task::spawn_local(async move {
            // skip the immediate first tick of a plain `interval`
            let mut interval = tokio::time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                callback();
            }
        });
        LocalTick(handle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use countdown_core::{Duration as Secs, Timer, TimerState};
    use tokio::task::LocalSet;

    #[tokio::test(flavor = "current_thread", start_paused = true)]
    async fn test_counts_down_in_real_runtime() {
        LocalSet::new()
            .run_until(async {
                let mut timer = Timer::new(LocalScheduler::new());
                timer.start(Secs::from_secs(3));

                tokio::time::sleep(Duration::from_millis(1500)).await;
                assert_eq!(timer.state(), TimerState::Running(Secs::from_secs(2)));

                tokio::time::sleep(Duration::from_millis(2000)).await;
                assert_eq!(timer.state(), TimerState::Stopped(Secs::ZERO));
                assert!(!timer.is_ticking());
            })
            .await;
    }

    #[tokio::test(flavor = "current_thread", start_paused = true)]
    async fn test_pause_cancels_task() {
        LocalSet::new()
            .run_until(async {
                let mut timer = Timer::new(LocalScheduler::new());
                timer.start(Secs::from_secs(10));

                tokio::time::sleep(Duration::from_millis(2500)).await;
                timer.pause(timer.state().duration());
                assert_eq!(timer.state(), TimerState::Paused(Secs::from_secs(8)));

                tokio::time::sleep(Duration::from_secs(30)).await;
                assert_eq!(timer.state(), TimerState::Paused(Secs::from_secs(8)));

                timer.resume();
                tokio::time::sleep(Duration::from_millis(1500)).await;
                assert_eq!(timer.state(), TimerState::Running(Secs::from_secs(7)));
            })
            .await;
    }
}
