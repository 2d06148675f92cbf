//! In-flight Request Tracking
//!
//! Drives the global loading indicator. A counter rather than a flag, so
//! overlapping requests keep the indicator up until the last one settles.

use std::cell::{Cell, RefCell};

#[derive(Default)]
pub struct LoadingTracker {
    in_flight: Cell<usize>,
    listener: RefCell<Option<Box<dyn Fn(bool)>>>,
}

impl LoadingTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the callback notified on every loading/idle transition
    pub fn subscribe(&self, listener: impl Fn(bool) + 'static) {
        *self.listener.borrow_mut() = Some(Box::new(listener));
    }

    #[cfg(test)]
    pub fn is_loading(&self) -> bool {
        self.in_flight.get() > 0
    }

    #[cfg(test)]
    pub fn in_flight(&self) -> usize {
        self.in_flight.get()
    }

    /// Mark a request as dispatched. The count drops again when the guard does.
    pub fn begin(&self) -> InFlight<'_> {
        let count = self.in_flight.get() + 1;
        self.in_flight.set(count);
        if count == 1 {
            self.notify(true);
        }
        InFlight { tracker: self }
    }

    fn finish(&self) {
        let count = self.in_flight.get().saturating_sub(1);
        self.in_flight.set(count);
        if count == 0 {
            self.notify(false);
        }
    }

    fn notify(&self, loading: bool) {
        if let Some(listener) = self.listener.borrow().as_ref() {
            listener(loading);
        }
    }
}

/// Guard for one outstanding request
#[must_use = "the request is only tracked while the guard is alive"]
pub struct InFlight<'a> {
    tracker: &'a LoadingTracker,
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.tracker.finish();
    }
}
