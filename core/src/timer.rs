use crate::{Digit, Duration, Scheduler, TickHandle, TimerState};
use std::{
    cell::RefCell,
    rc::{Rc, Weak},
};
use tracing::{debug, info, trace, warn};

/// Tick period of a running countdown.
pub const TICK_INTERVAL_MS: u64 = 1000;

/// The tick sequence currently driving a `Running` state.
struct ActiveTick<T> {
    /// Identifies this sequence; stale callbacks compare against it.
    generation: u64,
    /// Clock time at which the countdown reaches zero.
    deadline_ms: u64,
    handle: T,
}

struct Session<T> {
    state: TimerState,
    tick: Option<ActiveTick<T>>,
    generation: u64,
}

impl<T: TickHandle> Session<T> {
    fn cancel_tick(&mut self) {
        if let Some(tick) = self.tick.take() {
            trace!(generation = tick.generation, "cancelling tick");
            tick.handle.cancel();
        }
    }

    fn transition(&mut self, next: TimerState) {
        if self.state != next {
            debug!(from = %self.state, to = %next, "timer transition");
        }
        self.state = next;
    }

    fn on_tick(&mut self, generation: u64, now_ms: u64) {
        let Some(tick) = self.tick.as_ref() else {
            return;
        };
        if tick.generation != generation {
            // a callback from a sequence that has since been replaced
            return;
        }

        let remaining_ms = tick.deadline_ms.saturating_sub(now_ms);
        let remaining = Duration::from_secs(remaining_ms.div_ceil(1000) as u32);
        trace!(generation, remaining_ms, "tick");

        if remaining.is_zero() {
            self.cancel_tick();
            self.transition(TimerState::Stopped(Duration::ZERO));
            info!("countdown finished");
        } else {
            self.transition(TimerState::Running(remaining));
        }
    }
}

/// A countdown session.
///
/// Starts as `Stopped(00:00)`. All mutation goes through the methods below or
/// through the tick scheduled on `S`. Dropping the timer cancels any pending
/// tick.
pub struct Timer<S: Scheduler> {
    scheduler: S,
    session: Rc<RefCell<Session<S::Tick>>>,
}

impl<S: Scheduler> Timer<S> {
    pub fn new(scheduler: S) -> Self {
        Self {
            scheduler,
            session: Rc::new(RefCell::new(Session {
                state: TimerState::default(),
                tick: None,
                generation: 0,
            })),
        }
    }

    /// Current state.
    pub fn state(&self) -> TimerState {
        self.session.borrow().state
    }

    /// Whether a tick sequence is alive.
    pub fn is_ticking(&self) -> bool {
        self.session.borrow().tick.is_some()
    }

    /// Starts counting down from `duration`.
    ///
    /// Any previous tick is cancelled first. A zero duration is ignored.
    pub fn start(&mut self, duration: Duration) {
        if duration.is_zero() {
            warn!("ignoring start with a zero duration");
            return;
        }

        let mut session = self.session.borrow_mut();
        session.cancel_tick();

        session.generation += 1;
        let generation = session.generation;
        let deadline_ms = self.scheduler.now_ms() + duration.as_millis();

        let weak: Weak<RefCell<Session<S::Tick>>> = Rc::downgrade(&self.session);
        let clock = self.scheduler.clone();
        let handle = self.scheduler.schedule_repeating(
            TICK_INTERVAL_MS,
            Box::new(move || {
                if let Some(session) = weak.upgrade() {
                    session.borrow_mut().on_tick(generation, clock.now_ms());
                }
            }),
        );

        session.tick = Some(ActiveTick {
            generation,
            deadline_ms,
            handle,
        });
        session.transition(TimerState::Running(duration));
    }

    /// Freezes the countdown at `duration`, the value currently displayed.
    pub fn pause(&mut self, duration: Duration) {
        let mut session = self.session.borrow_mut();
        session.cancel_tick();
        session.transition(TimerState::Paused(duration));
    }

    /// Continues a paused countdown from where it stopped. No-op otherwise.
    pub fn resume(&mut self) {
        let state = self.state();
        if let TimerState::Paused(remaining) = state {
            self.start(remaining);
        }
    }

    /// Cancels any tick and resets to `Stopped(00:00)`.
    pub fn stop(&mut self) {
        let mut session = self.session.borrow_mut();
        session.cancel_tick();
        session.transition(TimerState::Stopped(Duration::ZERO));
    }

    /// Shifts `digit` into the keypad entry.
    ///
    /// Returns `false`, leaving the state untouched, when not stopped or when
    /// the entry would exceed `09:59`.
    pub fn enter_digit(&mut self, digit: Digit) -> bool {
        let mut session = self.session.borrow_mut();
        let TimerState::Stopped(current) = session.state else {
            return false;
        };

        match current.push_digit(digit) {
            Some(next) => {
                session.transition(TimerState::Stopped(next));
                true
            }
            None => {
                debug!(%current, %digit, "digit rejected, entry is full");
                false
            }
        }
    }

    /// Removes the last keypad digit. Returns `false` when not stopped.
    pub fn delete_digit(&mut self) -> bool {
        let mut session = self.session.borrow_mut();
        let TimerState::Stopped(current) = session.state else {
            return false;
        };
        session.transition(TimerState::Stopped(current.pop_digit()));
        true
    }
}

impl<S: Scheduler> Drop for Timer<S> {
    fn drop(&mut self) {
        self.session.borrow_mut().cancel_tick();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ManualScheduler;

    #[test]
    fn test_stale_generation_is_ignored() {
        let scheduler = ManualScheduler::new();
        let mut timer = Timer::new(scheduler.clone());

        timer.start(Duration::from_secs(10));
        timer.start(Duration::from_secs(30));

        // only the second sequence may touch the state
        timer.session.borrow_mut().on_tick(1, 5_000);
        assert_eq!(timer.state(), TimerState::Running(Duration::from_secs(30)));
        timer.session.borrow_mut().on_tick(2, 5_000);
        assert_eq!(timer.state(), TimerState::Running(Duration::from_secs(25)));
    }

    #[test]
    fn test_tick_without_sequence_is_ignored() {
        let scheduler = ManualScheduler::new();
        let mut timer = Timer::new(scheduler.clone());

        timer.start(Duration::from_secs(3));
        timer.pause(Duration::from_secs(3));
        timer.session.borrow_mut().on_tick(1, 1_000);
        assert_eq!(timer.state(), TimerState::Paused(Duration::from_secs(3)));
    }

    #[test]
    fn test_drop_cancels_tick() {
        let scheduler = ManualScheduler::new();
        let mut timer = Timer::new(scheduler.clone());
        timer.start(Duration::from_secs(60));
        assert_eq!(scheduler.active_ticks(), 1);

        drop(timer);
        assert_eq!(scheduler.active_ticks(), 0);
        scheduler.advance(5_000);
    }
}
