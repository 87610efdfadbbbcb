pub mod digit;
pub mod duration;
pub mod scheduler;
pub mod state;
pub mod timer;

pub use digit::{Digit, DigitError};
pub use duration::Duration;
pub use scheduler::{Clock, ManualScheduler, ManualTick, Scheduler, TickHandle};
pub use state::TimerState;
pub use timer::{TICK_INTERVAL_MS, Timer};
