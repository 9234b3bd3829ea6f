//! Defer actions on a single-threaded event loop.
//!
//! A [`Timer`] holds at most one pending action. Scheduling a new action
//! replaces the pending one, so a superseded action can never fire; the
//! widget owning the [`Timer`] polls it whenever the host reports the
//! current time (usually on [`window::Event::RedrawRequested`]).
//!
//! [`window::Event::RedrawRequested`]: crate::window::Event::RedrawRequested
use crate::time::{Duration, Instant};

/// A cancelable deferred action.
#[derive(Debug, Clone)]
pub struct Timer<T> {
    pending: Option<Pending<T>>,
}

#[derive(Debug, Clone)]
struct Pending<T> {
    deadline: Instant,
    action: T,
}

impl<T> Timer<T> {
    /// Creates an idle [`Timer`].
    pub const fn new() -> Self {
        Self { pending: None }
    }

    /// Schedules `action` to fire `delay` after `now`.
    ///
    /// Any pending action is canceled first and returned.
    pub fn schedule(&mut self, now: Instant, delay: Duration, action: T) -> Option<T> {
        let replaced = self.cancel();

        self.pending = Some(Pending {
            deadline: now + delay,
            action,
        });

        replaced
    }

    /// Cancels the pending action, returning it.
    pub fn cancel(&mut self) -> Option<T> {
        self.pending.take().map(|pending| pending.action)
    }

    /// Returns true if an action is pending.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Returns the deadline of the pending action, if any.
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|pending| pending.deadline)
    }

    /// Returns a reference to the pending action, if any.
    pub fn action(&self) -> Option<&T> {
        self.pending.as_ref().map(|pending| &pending.action)
    }

    /// Takes the pending action if its deadline has been reached.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        match &self.pending {
            Some(pending) if pending.deadline <= now => self.cancel(),
            _ => None,
        }
    }
}

impl<T> Default for Timer<T> {
    fn default() -> Self {
        Self::new()
    }
}
