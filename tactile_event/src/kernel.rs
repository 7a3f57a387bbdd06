// Copyright 2026 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Contracts for the scheduling primitives the event task waits on and posts to.

use alloc::collections::VecDeque;
use alloc::vec::Vec;
use core::time::Duration;

use crate::error::Result;

/// A binary semaphore shared between an interrupt handler and the event task.
pub trait Semaphore {
    /// Blocks until the semaphore is signalled, consuming the signal.
    ///
    /// `None` waits indefinitely. Returns `false` only when a finite `timeout` elapsed first.
    fn wait(&self, timeout: Option<Duration>) -> bool;

    /// Signals the semaphore. Must be callable from interrupt context.
    ///
    /// Fails with [`ResourceExhausted`](crate::Error::ResourceExhausted) if a signal is already
    /// pending.
    fn signal(&self) -> Result<()>;
}

/// Cooperative sleep.
pub trait Delay {
    /// Suspends the caller for `duration`, letting other tasks run.
    fn sleep(&mut self, duration: Duration);
}

/// The output boundary click payloads are posted to.
///
/// How a full sink behaves (block, drop, fail) is the implementor's policy. A sink that cannot
/// accept a payload reports [`ResourceExhausted`](crate::Error::ResourceExhausted) instead of
/// discarding it silently.
pub trait ClickSink<P> {
    /// Posts one payload.
    fn post(&mut self, payload: P) -> Result<()>;
}

impl<P> ClickSink<P> for Vec<P> {
    fn post(&mut self, payload: P) -> Result<()> {
        self.push(payload);
        Ok(())
    }
}

impl<P> ClickSink<P> for VecDeque<P> {
    fn post(&mut self, payload: P) -> Result<()> {
        self.push_back(payload);
        Ok(())
    }
}

impl<P, S: ClickSink<P> + ?Sized> ClickSink<P> for &mut S {
    fn post(&mut self, payload: P) -> Result<()> {
        (**self).post(payload)
    }
}
