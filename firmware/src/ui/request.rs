//! Single-resolution handle connecting a secret entry screen to the code awaiting it.
use core::cell::Cell;

use embassy_sync::{blocking_mutex::raw::NoopRawMutex, signal::Signal};

/// Pending request for a value collected by a screen.
///
/// The requester owns the handle and awaits [`PendingRequest::wait`]; the
/// event handling side resolves it through a shared reference. The first
/// resolution wins and later calls are ignored, so a result is delivered at
/// most once per [`PendingRequest::begin_wait`]. Cancellation is a resolution
/// carrying `None`.
///
/// Backed by a [`NoopRawMutex`]: both sides must run on the same executor.
pub struct PendingRequest<T: Send> {
    waiting: Cell<bool>,
    slot: Signal<NoopRawMutex, Option<T>>,
}

impl<T: Send> PendingRequest<T> {
    pub const fn new() -> Self {
        Self {
            waiting: Cell::new(false),
            slot: Signal::new(),
        }
    }

    /// Arm the request, discarding any result that was not consumed.
    pub fn begin_wait(&self) {
        self.slot.reset();
        self.waiting.set(true);
    }

    pub fn is_waiting(&self) -> bool {
        self.waiting.get()
    }

    /// Deliver `value` to the awaiting side. Returns `false` if the request was not waiting.
    pub fn resolve(&self, value: T) -> bool {
        self.settle(Some(value))
    }

    /// Resolve with the cancellation sentinel.
    ///
    /// Watchdogs use this as well; the awaiting side cannot tell it from a user abort.
    pub fn cancel(&self) -> bool {
        self.settle(None)
    }

    fn settle(&self, outcome: Option<T>) -> bool {
        if !self.waiting.replace(false) {
            log::debug!("ignoring resolution of a request that is not waiting");
            return false;
        }
        self.slot.signal(outcome);
        true
    }

    /// Suspend until the request resolves and return its outcome.
    ///
    /// `None` means the user (or a watchdog) aborted the entry.
    pub async fn wait(&self) -> Option<T> {
        self.slot.wait().await
    }

    /// Non-suspending variant of [`PendingRequest::wait`] for tick driven loops.
    ///
    /// Returns `None` while unresolved or once the outcome has been taken.
    pub fn try_take(&self) -> Option<Option<T>> {
        self.slot.try_take()
    }
}

impl<T: Send> Default for PendingRequest<T> {
    fn default() -> Self {
        Self::new()
    }
}
