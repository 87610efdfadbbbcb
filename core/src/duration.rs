use crate::Digit;
use std::fmt;

/// A whole-second countdown value, shown as `MM:SS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Duration(u32);

impl Duration {
    pub const ZERO: Duration = Duration(0);

    /// Largest value that can be composed on the keypad, `09:59`.
    pub const MAX_ENTRY: Duration = Duration(9 * 60 + 59);

    pub const fn from_secs(secs: u32) -> Self {
        Self(secs)
    }

    pub const fn as_secs(self) -> u32 {
        self.0
    }

    pub const fn as_millis(self) -> u64 {
        self.0 as u64 * 1000
    }

    pub const fn minutes(self) -> u32 {
        self.0 / 60
    }

    pub const fn seconds(self) -> u32 {
        self.0 % 60
    }

    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Shift-register view of the keypad entry: `[m1, s0, s1]` where `m1` is
    /// the minutes ones-digit and `s0`, `s1` the seconds tens and ones digits.
    ///
    /// The minutes tens-digit is never displayed for keypad entries and is
    /// dropped here.
    pub const fn entry_digits(self) -> [u32; 3] {
        [self.minutes() % 10, self.seconds() / 10, self.seconds() % 10]
    }

    /// Pushes `digit` into the ones place of the seconds, shifting every
    /// other digit one place up.
    ///
    /// Returns `None` if the result would exceed [`Duration::MAX_ENTRY`].
    pub fn push_digit(self, digit: Digit) -> Option<Duration> {
        let [m1, s0, s1] = self.entry_digits();
        let secs = (m1 * 10 + s0) * 60 + s1 * 10 + digit.value() as u32;
        let next = Duration(secs);
        (next <= Self::MAX_ENTRY).then_some(next)
    }

    /// Drops the seconds ones-digit, shifting every other digit one place
    /// down and filling the leading place with 0.
    pub fn pop_digit(self) -> Duration {
        let [m1, s0, _] = self.entry_digits();
        Duration(m1 * 10 + s0)
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.minutes(), self.seconds())
    }
}
