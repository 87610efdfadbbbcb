//! Scheduling capability used by [`Timer`](crate::Timer) to drive its tick.
//!
//! The timer never sleeps or spawns anything itself; it asks a [`Scheduler`]
//! for a repeating callback and reads time from its [`Clock`]. The binary
//! plugs in a runtime-backed scheduler, tests use [`ManualScheduler`].

use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};

/// Monotonic time source.
pub trait Clock {
    /// Milliseconds since an arbitrary, fixed epoch.
    fn now_ms(&self) -> u64;
}

/// Cancels one repeating callback.
pub trait TickHandle {
    /// Once this returns, the callback is never invoked again.
    fn cancel(self);
}

/// Schedules repeating callbacks on the current (single) thread.
pub trait Scheduler: Clock + Clone + 'static {
    type Tick: TickHandle + 'static;

    /// Invoke `callback` every `interval_ms`, starting one interval from now.
    fn schedule_repeating(&self, interval_ms: u64, callback: Box<dyn FnMut()>) -> Self::Tick;
}

type SharedCallback = Rc<RefCell<Box<dyn FnMut()>>>;

struct ManualTask {
    interval_ms: u64,
    next_fire_ms: u64,
    cancelled: Rc<Cell<bool>>,
    callback: SharedCallback,
}

#[derive(Default)]
struct ManualInner {
    now_ms: u64,
    tasks: Vec<ManualTask>,
}

/// A simulated clock and scheduler. Time only moves when [`advance`] is called.
///
/// [`advance`]: ManualScheduler::advance
#[derive(Clone, Default)]
pub struct ManualScheduler {
    inner: Rc<RefCell<ManualInner>>,
}

/// Handle returned by [`ManualScheduler`].
pub struct ManualTick {
    cancelled: Rc<Cell<bool>>,
}

impl TickHandle for ManualTick {
    fn cancel(self) {
        self.cancelled.set(true);
    }
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves virtual time forward by `ms`, firing every callback that falls
    /// due on the way, each at its own deadline and in deadline order.
    pub fn advance(&self, ms: u64) {
        let target = self.inner.borrow().now_ms + ms;

        loop {
            // pick the earliest live task due before the target, without
            // holding the borrow while its callback runs
            let callback = {
                let mut inner = self.inner.borrow_mut();
                inner.tasks.retain(|t| !t.cancelled.get());

                let Some(task) = inner
                    .tasks
                    .iter_mut()
                    .filter(|t| t.next_fire_ms <= target)
                    .min_by_key(|t| t.next_fire_ms)
                else {
                    break;
                };

                let fire_at = task.next_fire_ms;
                task.next_fire_ms += task.interval_ms;
                let callback = Rc::clone(&task.callback);
                inner.now_ms = fire_at;
                callback
            };

            let mut fire = callback.borrow_mut();
            (*fire)();
        }

        self.inner.borrow_mut().now_ms = target;
    }

    /// Number of callbacks that have not been cancelled.
    pub fn active_ticks(&self) -> usize {
        self.inner
            .borrow()
            .tasks
            .iter()
            .filter(|t| !t.cancelled.get())
            .count()
    }
}

impl Clock for ManualScheduler {
    fn now_ms(&self) -> u64 {
        self.inner.borrow().now_ms
    }
}

impl Scheduler for ManualScheduler {
    type Tick = ManualTick;

    fn schedule_repeating(&self, interval_ms: u64, callback: Box<dyn FnMut()>) -> ManualTick {
        let cancelled = Rc::new(Cell::new(false));
        let mut inner = self.inner.borrow_mut();
        let next_fire_ms = inner.now_ms + interval_ms.max(1);
        inner.tasks.push(ManualTask {
            interval_ms: interval_ms.max(1),
            next_fire_ms,
            cancelled: Rc::clone(&cancelled),
            callback: Rc::new(RefCell::new(callback)),
        });
        ManualTick { cancelled }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counter(scheduler: &ManualScheduler, interval_ms: u64) -> (Rc<Cell<u32>>, ManualTick) {
        let count = Rc::new(Cell::new(0));
        let c = Rc::clone(&count);
        let tick = scheduler.schedule_repeating(interval_ms, Box::new(move || c.set(c.get() + 1)));
        (count, tick)
    }

    #[test]
    fn test_fires_once_per_interval() {
        let scheduler = ManualScheduler::new();
        let (count, _tick) = counter(&scheduler, 1000);

        scheduler.advance(999);
        assert_eq!(count.get(), 0);
        scheduler.advance(1);
        assert_eq!(count.get(), 1);
        scheduler.advance(3500);
        assert_eq!(count.get(), 4);
        assert_eq!(scheduler.now_ms(), 4500);
    }

    #[test]
    fn test_cancel_stops_callbacks() {
        let scheduler = ManualScheduler::new();
        let (count, tick) = counter(&scheduler, 1000);

        scheduler.advance(2000);
        assert_eq!(scheduler.active_ticks(), 1);
        tick.cancel();
        assert_eq!(scheduler.active_ticks(), 0);

        scheduler.advance(10_000);
        assert_eq!(count.get(), 2);
    }

    #[test]
    fn test_callback_sees_its_own_deadline() {
        let scheduler = ManualScheduler::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let (s, clock) = (Rc::clone(&seen), scheduler.clone());
        let _tick = scheduler.schedule_repeating(
            1000,
            Box::new(move || s.borrow_mut().push(clock.now_ms())),
        );

        scheduler.advance(3000);
        assert_eq!(*seen.borrow(), vec![1000, 2000, 3000]);
    }

    #[test]
    fn test_callback_can_cancel_itself() {
        let scheduler = ManualScheduler::new();
        let handle: Rc<RefCell<Option<ManualTick>>> = Rc::new(RefCell::new(None));
        let count = Rc::new(Cell::new(0));

        let (h, c) = (Rc::clone(&handle), Rc::clone(&count));
        let tick = scheduler.schedule_repeating(
            500,
            Box::new(move || {
                c.set(c.get() + 1);
                if c.get() == 2 {
                    if let Some(tick) = h.borrow_mut().take() {
                        tick.cancel();
                    }
                }
            }),
        );
        *handle.borrow_mut() = Some(tick);

        scheduler.advance(5000);
        assert_eq!(count.get(), 2);
        assert_eq!(scheduler.active_ticks(), 0);
    }
}
