use crossbeam_channel::{Receiver, Sender};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

/// A run-wide cancellation signal
///
/// Cancelling sets a flag and closes an internal channel that no one ever sends on;
/// every thread blocked in a [`select!`](crossbeam_channel::select) that includes
/// [`Cancellation::signal`] wakes up immediately.
#[derive(Debug)]
pub struct Cancellation {
    cancelled: AtomicBool,
    trigger: Mutex<Option<Sender<()>>>,
    signal: Receiver<()>,
}

impl Cancellation {
    /// Creates a new, not yet cancelled, signal
    pub fn new() -> Self {
        let (trigger, signal) = crossbeam_channel::bounded(0);
        Cancellation {
            cancelled: AtomicBool::new(false),
            trigger: Mutex::new(Some(trigger)),
            signal,
        }
    }

    /// Cancels the run; idempotent
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
        let mut trigger = self.trigger.lock().unwrap_or_else(|e| e.into_inner());
        // Dropping the only sender disconnects the signal
        trigger.take();
    }

    /// Returns true once [`cancel`](Self::cancel) has been called
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }

    /// A receiver that becomes ready (disconnected) on cancellation
    pub fn signal(&self) -> &Receiver<()> {
        &self.signal
    }
}

impl Default for Cancellation {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_cancel_wakes_waiters() {
        let cancel = Cancellation::new();
        std::thread::scope(|s| {
            let waiter = s.spawn(|| cancel.signal().recv().is_err());
            std::thread::sleep(Duration::from_millis(20));
            cancel.cancel();
            assert!(waiter.join().unwrap());
        });
        assert!(cancel.is_cancelled());
        // A second cancel is harmless
        cancel.cancel();
        assert!(cancel.is_cancelled());
    }
}
