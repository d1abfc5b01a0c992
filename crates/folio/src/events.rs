//! # Host Event Channel
//!
//! Host callbacks may fire while the page is busy (or from a worker that
//! forwards input). They post into a bounded channel and the page drains it
//! at its next [`pump`](crate::Page::pump), in arrival order.
//!
//! ```text
//! ┌──────────────┐      ┌─────────────┐      ┌──────────────┐
//! │ host callback│─────>│   Event     │─────>│    Page      │
//! │ host callback│─────>│   Channel   │      │ (pump/drain) │
//! └──────────────┘      └─────────────┘      └──────────────┘
//! ```

use crossbeam_channel::{bounded, Receiver, Sender, TrySendError};
use folio_ui::HostEvent;

/// Default channel capacity.
pub const DEFAULT_EVENT_CAPACITY: usize = 1024;

/// Bounded host event channel.
pub struct EventQueue {
    sender: Sender<HostEvent>,
    receiver: Receiver<HostEvent>,
}

impl EventQueue {
    /// Creates a channel holding at most `capacity` undelivered events.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let (sender, receiver) = bounded(capacity);
        Self { sender, receiver }
    }

    /// Creates a new sender.
    #[must_use]
    pub fn sender(&self) -> EventSender {
        EventSender {
            sender: self.sender.clone(),
        }
    }

    /// Creates a new receiver.
    #[must_use]
    pub fn receiver(&self) -> EventReceiver {
        EventReceiver {
            receiver: self.receiver.clone(),
        }
    }
}

impl Default for EventQueue {
    fn default() -> Self {
        Self::new(DEFAULT_EVENT_CAPACITY)
    }
}

/// Posts host events. Cheap to clone; hand one to each host callback.
#[derive(Clone)]
pub struct EventSender {
    sender: Sender<HostEvent>,
}

impl EventSender {
    /// Posts an event without blocking.
    ///
    /// Returns false if the event was dropped (channel full or page gone).
    #[inline]
    pub fn send(&self, event: HostEvent) -> bool {
        match self.sender.try_send(event) {
            Ok(()) => true,
            Err(TrySendError::Full(event)) => {
                tracing::warn!(?event, "host event dropped: channel full");
                false
            }
            Err(TrySendError::Disconnected(_)) => false,
        }
    }
}

/// Receives host events.
#[derive(Clone)]
pub struct EventReceiver {
    receiver: Receiver<HostEvent>,
}

impl EventReceiver {
    /// Takes every pending event, oldest first.
    #[inline]
    pub fn drain(&self) -> Vec<HostEvent> {
        self.receiver.try_iter().collect()
    }
}
