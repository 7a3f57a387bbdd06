// Copyright 2026 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Failure outcomes of scheduling primitives and task start-up.

use core::fmt;

/// The primitive an [`Error`] is about.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Resource {
    /// The bounded queue click payloads are posted to.
    ClickChannel,
    /// The binary semaphore the touch interrupt signals.
    TouchSync,
    /// The event task itself.
    EventTask,
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::ClickChannel => "click channel",
            Self::TouchSync => "touch semaphore",
            Self::EventTask => "event task",
        })
    }
}

/// Errors surfaced by the event task and the primitives it drives.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A bounded primitive had no room: the click channel is full, a binary semaphore was
    /// signalled twice, or a primitive could not be created with the requested capacity.
    #[error("{0} exhausted")]
    ResourceExhausted(Resource),
    /// A one-shot start-up step ran a second time.
    #[error("{0} already initialized")]
    AlreadyInitialized(Resource),
    /// Nothing is left on the other side of the primitive.
    #[error("{0} disconnected")]
    Disconnected(Resource),
}

/// Result alias for this crate.
pub type Result<T, E = Error> = core::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn messages_name_the_resource() {
        assert_eq!(
            Error::ResourceExhausted(Resource::ClickChannel).to_string(),
            "click channel exhausted"
        );
        assert_eq!(
            Error::AlreadyInitialized(Resource::EventTask).to_string(),
            "event task already initialized"
        );
    }
}
