use std::sync::{Condvar, Mutex, MutexGuard, PoisonError};

/// Counts outstanding workers and wakes the coordinator when none remain.
///
/// The count is raised by a *parent* before its child is handed to a thread,
/// and lowered by each worker only after it has dispatched its children and
/// reported its matches. So it can only reach zero once every worker that
/// will ever exist has finished.
#[derive(Debug, Default)]
pub struct ActiveTaskTracker {
    count: Mutex<usize>,
    zero: Condvar,
}

impl ActiveTaskTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset the count to one: the root worker.
    pub fn start(&self) {
        *self.lock() = 1;
    }

    /// Account for a child about to be dispatched.
    pub fn increment(&self) {
        *self.lock() += 1;
    }

    /// Retire one worker. Returns `true` if this was the last one, in which
    /// case any waiter has been woken.
    pub fn decrement_and_check(&self) -> bool {
        let mut count = self.lock();
        debug_assert!(*count > 0, "retired more workers than were started");
        *count = count.saturating_sub(1);
        if *count == 0 {
            self.zero.notify_all();
            true
        } else {
            false
        }
    }

    /// Block until the count is observed at zero.
    pub fn wait_until_zero(&self) {
        let guard = self.lock();
        let _guard = self
            .zero
            .wait_while(guard, |count| *count > 0)
            .unwrap_or_else(PoisonError::into_inner);
    }

    /// Current number of outstanding workers.
    pub fn outstanding(&self) -> usize {
        *self.lock()
    }

    fn lock(&self) -> MutexGuard<'_, usize> {
        self.count.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
