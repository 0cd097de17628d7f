use crossbeam_channel::{select, Receiver, Sender, TrySendError};

use crate::data_structures::Cancellation;
use crate::{Error, Result};

/// Creates a bounded FIFO queue holding at most `capacity` items (at least one)
///
/// Both ends can be cloned. The queue closes for consumers once every [`Producer`] is
/// dropped and the remaining items have been popped, and for producers once every
/// [`Consumer`] is dropped.
pub fn bounded<T>(capacity: usize) -> (Producer<T>, Consumer<T>) {
    let (tx, rx) = crossbeam_channel::bounded(capacity.max(1));
    (Producer { tx }, Consumer { rx })
}

/// Sending end of a bounded queue
#[derive(Debug)]
pub struct Producer<T> {
    tx: Sender<T>,
}

impl<T> Clone for Producer<T> {
    fn clone(&self) -> Self {
        Producer { tx: self.tx.clone() }
    }
}

impl<T> Producer<T> {
    /// Pushes an item, blocking while the queue is full
    ///
    /// Fails with [`Error::Cancelled`] if the run is cancelled before the item fits,
    /// and with [`Error::QueueClosed`] if no consumer is left.
    pub fn push(&self, item: T, cancel: &Cancellation) -> Result<()> {
        if cancel.is_cancelled() {
            return Err(Error::Cancelled);
        }
        select! {
            send(self.tx, item) -> res => res.map_err(|_| Error::QueueClosed),
            recv(cancel.signal()) -> _ => Err(Error::Cancelled),
        }
    }

    /// Pushes an item without blocking, handing it back if the queue is full or closed
    pub fn try_push(&self, item: T) -> std::result::Result<(), T> {
        self.tx.try_send(item).map_err(|e| match e {
            TrySendError::Full(item) | TrySendError::Disconnected(item) => item,
        })
    }

    /// Maximum number of queued items
    pub fn capacity(&self) -> usize {
        // Always bounded
        self.tx.capacity().unwrap_or(0)
    }
}

/// Receiving end of a bounded queue
#[derive(Debug)]
pub struct Consumer<T> {
    rx: Receiver<T>,
}

impl<T> Clone for Consumer<T> {
    fn clone(&self) -> Self {
        Consumer { rx: self.rx.clone() }
    }
}

impl<T> Consumer<T> {
    /// Pops the oldest item, blocking while the queue is empty
    ///
    /// Returns `Ok(None)` once the queue is closed and drained, and fails with
    /// [`Error::Cancelled`] if the run is cancelled while waiting.
    pub fn pop(&self, cancel: &Cancellation) -> Result<Option<T>> {
        if cancel.is_cancelled() {
            return Err(Error::Cancelled);
        }
        select! {
            recv(self.rx) -> res => Ok(res.ok()),
            recv(cancel.signal()) -> _ => Err(Error::Cancelled),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_capacity_is_enforced() {
        let (tx, rx) = bounded(2);
        assert_eq!(tx.capacity(), 2);
        assert!(tx.try_push(1).is_ok());
        assert!(tx.try_push(2).is_ok());
        assert_eq!(tx.try_push(3), Err(3));

        let cancel = Cancellation::new();
        assert_eq!(rx.pop(&cancel).unwrap(), Some(1));
        assert!(tx.try_push(3).is_ok());
        assert_eq!(rx.pop(&cancel).unwrap(), Some(2));
        assert_eq!(rx.pop(&cancel).unwrap(), Some(3));
    }

    #[test]
    fn test_pop_returns_none_when_closed_and_drained() {
        let (tx, rx) = bounded(4);
        let cancel = Cancellation::new();
        tx.push("a", &cancel).unwrap();
        drop(tx);
        assert_eq!(rx.pop(&cancel).unwrap(), Some("a"));
        assert_eq!(rx.pop(&cancel).unwrap(), None);
    }

    #[test]
    fn test_blocked_push_resumes_after_pop() {
        let (tx, rx) = bounded(1);
        let cancel = Cancellation::new();
        tx.push(0, &cancel).unwrap();
        std::thread::scope(|s| {
            let pusher = s.spawn(|| tx.push(1, &cancel));
            std::thread::sleep(Duration::from_millis(20));
            assert_eq!(rx.pop(&cancel).unwrap(), Some(0));
            pusher.join().unwrap().unwrap();
        });
        assert_eq!(rx.pop(&cancel).unwrap(), Some(1));
    }

    #[test]
    fn test_cancel_wakes_blocked_push_and_pop() {
        let (tx, rx) = bounded(1);
        let (_other_tx, other_rx) = bounded::<u32>(1);
        let cancel = Cancellation::new();
        tx.push(0u32, &cancel).unwrap();
        std::thread::scope(|s| {
            let pusher = s.spawn(|| tx.push(1, &cancel));
            let popper = s.spawn(|| other_rx.pop(&cancel));
            std::thread::sleep(Duration::from_millis(20));
            cancel.cancel();
            assert!(matches!(pusher.join().unwrap(), Err(Error::Cancelled)));
            assert!(matches!(popper.join().unwrap(), Err(Error::Cancelled)));
        });
        drop(rx);
    }

    #[test]
    fn test_push_fails_without_consumer() {
        let (tx, rx) = bounded(1);
        drop(rx);
        let cancel = Cancellation::new();
        assert!(matches!(tx.push(7, &cancel), Err(Error::QueueClosed)));
    }
}
