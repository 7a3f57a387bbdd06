// Copyright 2026 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The touch interrupt handler.

use crate::driver::InterruptLine;
use crate::error::Result;
use crate::kernel::Semaphore;

/// Body of the touch interrupt service routine.
///
/// Signals `sync` and masks the interrupt so one physical touch wakes the event task exactly
/// once. It touches neither widgets nor the region registry; the event task re-arms the line
/// after its cooldown.
///
/// The line is masked even if signalling fails.
pub fn on_touch_interrupt<S, L>(sync: &S, line: &mut L) -> Result<()>
where
    S: Semaphore + ?Sized,
    L: InterruptLine + ?Sized,
{
    let signalled = sync.signal();
    line.set_enabled(false);
    signalled
}
