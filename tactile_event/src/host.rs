// Copyright 2026 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hosted implementations of the scheduling contracts, for running the event task on a thread.
//!
//! - [`TouchSync`]: a binary semaphore an interrupt source (a simulated panel, say) signals.
//! - [`click_channel`]: a bounded multi-producer, multi-consumer queue of click payloads.
//! - [`ThreadDelay`]: sleep via [`std::thread::sleep`].

use alloc::collections::VecDeque;
use alloc::sync::Arc;
use core::time::Duration;
use std::time::Instant;

use parking_lot::{Condvar, Mutex};

use crate::error::{Error, Resource, Result};
use crate::kernel::{ClickSink, Delay, Semaphore};

/// A binary semaphore. Clones share the same signal.
#[derive(Clone, Debug, Default)]
pub struct TouchSync {
    inner: Arc<SyncInner>,
}

#[derive(Debug, Default)]
struct SyncInner {
    signalled: Mutex<bool>,
    ready: Condvar,
}

impl TouchSync {
    /// Creates an unsignalled semaphore.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if a signal is pending.
    #[must_use]
    pub fn is_signalled(&self) -> bool {
        *self.inner.signalled.lock()
    }
}

impl Semaphore for TouchSync {
    fn wait(&self, timeout: Option<Duration>) -> bool {
        // A timeout too large to represent as a deadline waits forever.
        let deadline = timeout.and_then(|t| Instant::now().checked_add(t));
        let mut signalled = self.inner.signalled.lock();
        while !*signalled {
            match deadline {
                None => self.inner.ready.wait(&mut signalled),
                Some(deadline) => {
                    if self
                        .inner
                        .ready
                        .wait_until(&mut signalled, deadline)
                        .timed_out()
                        && !*signalled
                    {
                        return false;
                    }
                }
            }
        }
        *signalled = false;
        true
    }

    fn signal(&self) -> Result<()> {
        let mut signalled = self.inner.signalled.lock();
        if *signalled {
            return Err(Error::ResourceExhausted(Resource::TouchSync));
        }
        *signalled = true;
        self.inner.ready.notify_one();
        Ok(())
    }
}

/// What a [`ClickSender`] does when the channel is full.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Overflow {
    /// Refuse the new payload with [`Error::ResourceExhausted`].
    #[default]
    Reject,
    /// Discard the oldest queued payload to make room.
    DropOldest,
}

#[derive(Debug)]
struct Queue<P> {
    items: VecDeque<P>,
    capacity: usize,
    senders: usize,
    receivers: usize,
}

#[derive(Debug)]
struct Channel<P> {
    queue: Mutex<Queue<P>>,
    available: Condvar,
}

/// Creates a bounded click channel holding at most `capacity` payloads.
///
/// Fails with [`Error::ResourceExhausted`] for a zero capacity.
///
/// ```
/// use tactile_event::{ClickSink, click_channel};
///
/// let (mut tx, rx) = click_channel::<u8>(2).unwrap();
/// tx.post(1).unwrap();
/// tx.post(2).unwrap();
/// assert!(tx.post(3).is_err());
/// assert_eq!(rx.try_recv(), Some(1));
/// ```
pub fn click_channel<P>(capacity: usize) -> Result<(ClickSender<P>, ClickReceiver<P>)> {
    if capacity == 0 {
        return Err(Error::ResourceExhausted(Resource::ClickChannel));
    }
    let channel = Arc::new(Channel {
        queue: Mutex::new(Queue {
            items: VecDeque::with_capacity(capacity),
            capacity,
            senders: 1,
            receivers: 1,
        }),
        available: Condvar::new(),
    });
    Ok((
        ClickSender {
            channel: channel.clone(),
            overflow: Overflow::default(),
        },
        ClickReceiver { channel },
    ))
}

/// The posting half of a click channel.
#[derive(Debug)]
pub struct ClickSender<P> {
    channel: Arc<Channel<P>>,
    overflow: Overflow,
}

impl<P> ClickSender<P> {
    /// Returns a sender with a different overflow policy.
    #[must_use]
    pub fn with_overflow(mut self, overflow: Overflow) -> Self {
        self.overflow = overflow;
        self
    }

    /// Returns the overflow policy.
    #[must_use]
    pub fn overflow(&self) -> Overflow {
        self.overflow
    }

    /// Enqueues `payload` without blocking.
    ///
    /// Fails with [`Error::Disconnected`] once every receiver is gone, and with
    /// [`Error::ResourceExhausted`] if the channel is full under [`Overflow::Reject`].
    pub fn try_post(&self, payload: P) -> Result<()> {
        let mut queue = self.channel.queue.lock();
        if queue.receivers == 0 {
            return Err(Error::Disconnected(Resource::ClickChannel));
        }
        if queue.items.len() >= queue.capacity {
            match self.overflow {
                Overflow::Reject => return Err(Error::ResourceExhausted(Resource::ClickChannel)),
                Overflow::DropOldest => {
                    queue.items.pop_front();
                }
            }
        }
        queue.items.push_back(payload);
        self.channel.available.notify_one();
        Ok(())
    }

    /// Returns the number of queued payloads.
    #[must_use]
    pub fn len(&self) -> usize {
        self.channel.queue.lock().items.len()
    }

    /// Returns `true` if nothing is queued.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<P> Clone for ClickSender<P> {
    fn clone(&self) -> Self {
        self.channel.queue.lock().senders += 1;
        Self {
            channel: self.channel.clone(),
            overflow: self.overflow,
        }
    }
}

impl<P> Drop for ClickSender<P> {
    fn drop(&mut self) {
        let mut queue = self.channel.queue.lock();
        queue.senders -= 1;
        if queue.senders == 0 {
            self.channel.available.notify_all();
        }
    }
}

impl<P> ClickSink<P> for ClickSender<P> {
    fn post(&mut self, payload: P) -> Result<()> {
        self.try_post(payload)
    }
}

/// The reading half of a click channel.
///
/// Clones compete for payloads: each payload is delivered to exactly one receiver.
#[derive(Debug)]
pub struct ClickReceiver<P> {
    channel: Arc<Channel<P>>,
}

impl<P> ClickReceiver<P> {
    /// Blocks until a payload arrives. Returns `None` once the channel is empty and every
    /// sender is gone.
    pub fn recv(&self) -> Option<P> {
        let mut queue = self.channel.queue.lock();
        loop {
            if let Some(payload) = queue.items.pop_front() {
                return Some(payload);
            }
            if queue.senders == 0 {
                return None;
            }
            self.channel.available.wait(&mut queue);
        }
    }

    /// Like [`recv`](Self::recv), giving up after `timeout`.
    ///
    /// A timeout too large to represent as a deadline behaves like [`recv`](Self::recv).
    pub fn recv_timeout(&self, timeout: Duration) -> Option<P> {
        let Some(deadline) = Instant::now().checked_add(timeout) else {
            return self.recv();
        };
        let mut queue = self.channel.queue.lock();
        loop {
            if let Some(payload) = queue.items.pop_front() {
                return Some(payload);
            }
            if queue.senders == 0
                || self
                    .channel
                    .available
                    .wait_until(&mut queue, deadline)
                    .timed_out()
            {
                return queue.items.pop_front();
            }
        }
    }

    /// Takes a payload if one is queued.
    pub fn try_recv(&self) -> Option<P> {
        self.channel.queue.lock().items.pop_front()
    }

    /// Returns the number of queued payloads.
    #[must_use]
    pub fn len(&self) -> usize {
        self.channel.queue.lock().items.len()
    }

    /// Returns `true` if nothing is queued.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<P> Clone for ClickReceiver<P> {
    fn clone(&self) -> Self {
        self.channel.queue.lock().receivers += 1;
        Self {
            channel: self.channel.clone(),
        }
    }
}

impl<P> Drop for ClickReceiver<P> {
    fn drop(&mut self) {
        self.channel.queue.lock().receivers -= 1;
    }
}

/// [`Delay`] backed by [`std::thread::sleep`].
#[derive(Copy, Clone, Debug, Default)]
pub struct ThreadDelay;

impl Delay for ThreadDelay {
    fn sleep(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }
}
