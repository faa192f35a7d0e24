// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trailing-edge debounce for "gesture finished" callbacks.
//!
//! Wheel zooming produces a burst of events with no explicit end. Hosts that
//! want to run something once the burst settles (for example a "zoom
//! complete" notification) can feed every event through [`Debounce::trigger`]
//! and poll it from their timer or frame callback.
//!
//! Time is supplied by the caller as a monotonic [`Duration`] since some
//! fixed origin, so the helper works without `std` or a clock.
//!
//! ```
//! use core::time::Duration;
//! use understory_gesture_axes::debounce::{Debounce, Trigger};
//!
//! let mut done = Debounce::new(Duration::from_millis(100));
//!
//! done.trigger(Duration::from_millis(0));
//! done.trigger(Duration::from_millis(60));
//! assert!(!done.poll(Duration::from_millis(120)));
//! assert!(done.poll(Duration::from_millis(160)));
//!
//! // A zero delay runs immediately.
//! let mut now = Debounce::new(Duration::ZERO);
//! assert_eq!(now.trigger(Duration::from_millis(5)), Trigger::Immediate);
//! ```

use core::time::Duration;

/// What the caller should do after [`Debounce::trigger`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Trigger {
    /// Run the action now; the debouncer has no delay.
    Immediate,
    /// The action is pending and becomes due at this time.
    Scheduled(Duration),
}

/// Debounce state: at most one pending deadline, pushed back on every trigger.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Debounce {
    delay: Duration,
    deadline: Option<Duration>,
}

impl Debounce {
    /// Creates a debouncer with the given quiet period.
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    /// Returns the quiet period.
    #[must_use]
    pub const fn delay(&self) -> Duration {
        self.delay
    }

    /// Records an event at `now`.
    ///
    /// With a zero delay nothing is scheduled and [`Trigger::Immediate`] is
    /// returned. Otherwise any pending deadline is replaced by `now + delay`.
    pub fn trigger(&mut self, now: Duration) -> Trigger {
        if self.delay.is_zero() {
            self.deadline = None;
            return Trigger::Immediate;
        }
        let deadline = now.saturating_add(self.delay);
        self.deadline = Some(deadline);
        Trigger::Scheduled(deadline)
    }

    /// Returns `true` once when the pending deadline has been reached.
    pub fn poll(&mut self, now: Duration) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Drops any pending deadline.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// Returns `true` while a deadline is pending.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Returns the pending deadline, if any.
    #[must_use]
    pub const fn deadline(&self) -> Option<Duration> {
        self.deadline
    }
}
