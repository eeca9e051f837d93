// SPDX-License-Identifier: MPL-2.0
//! Diagnostics collector for aggregating and storing diagnostic events.
//!
//! The bus and surface log through a [`DiagnosticsHandle`]; the host owns
//! the [`DiagnosticsCollector`] and drains it on its own schedule.

use crossbeam_channel::{bounded, Receiver, Sender};

use super::{BufferCapacity, CircularBuffer, DiagnosticEvent, DiagnosticEventKind, RemovalReason};
use crate::notifications::{Notification, NotificationId};

/// Channel capacity between handles and the collector.
const DEFAULT_CHANNEL_CAPACITY: usize = 100;

/// Handle for sending diagnostic events to the collector.
///
/// This handle is cheap to clone. Every method is non-blocking and drops
/// the event if the internal channel is full or the collector is gone.
#[derive(Clone, Debug)]
pub struct DiagnosticsHandle {
    event_tx: Sender<DiagnosticEvent>,
}

impl DiagnosticsHandle {
    /// Logs an arbitrary event kind.
    pub fn log(&self, kind: DiagnosticEventKind) {
        let _ = self.event_tx.try_send(DiagnosticEvent::new(kind));
    }

    pub fn log_published(&self, notification: &Notification, listeners: usize) {
        self.log(DiagnosticEventKind::Published {
            id: notification.id(),
            category: notification.category(),
            listeners,
        });
    }

    pub fn log_dropped(&self, notification: &Notification) {
        self.log(DiagnosticEventKind::Dropped {
            id: notification.id(),
            category: notification.category(),
        });
    }

    pub fn log_shown(&self, notification: &Notification) {
        self.log(DiagnosticEventKind::Shown {
            id: notification.id(),
            category: notification.category(),
        });
    }

    pub fn log_removed(&self, id: NotificationId, reason: RemovalReason) {
        self.log(DiagnosticEventKind::Removed { id, reason });
    }
}

/// Central collector for diagnostic events.
///
/// Events arrive through a bounded channel and are stored in a
/// memory-bounded circular buffer.
pub struct DiagnosticsCollector {
    buffer: CircularBuffer<DiagnosticEvent>,
    evicted: usize,
    event_rx: Receiver<DiagnosticEvent>,
    event_tx: Sender<DiagnosticEvent>,
}

impl std::fmt::Debug for DiagnosticsCollector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiagnosticsCollector")
            .field("buffered", &self.buffer.len())
            .field("evicted", &self.evicted)
            .field("pending", &self.event_rx.len())
            .finish()
    }
}

impl Default for DiagnosticsCollector {
    fn default() -> Self {
        Self::new(BufferCapacity::default())
    }
}

impl DiagnosticsCollector {
    /// Creates a new diagnostics collector with the specified buffer capacity.
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> Self {
        let (event_tx, event_rx) = bounded(DEFAULT_CHANNEL_CAPACITY);

        Self {
            buffer: CircularBuffer::new(capacity),
            evicted: 0,
            event_rx,
            event_tx,
        }
    }

    /// Creates a handle for sending events to this collector.
    #[must_use]
    pub fn handle(&self) -> DiagnosticsHandle {
        DiagnosticsHandle {
            event_tx: self.event_tx.clone(),
        }
    }

    /// Drains the channel into the buffer.
    ///
    /// Call this periodically (e.g., after each update) so the channel does
    /// not fill up and start dropping events.
    pub fn process_pending(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            if self.buffer.push(event).is_some() {
                self.evicted += 1;
            }
        }
    }

    /// Returns the stored events, oldest first.
    pub fn events(&self) -> impl Iterator<Item = &DiagnosticEvent> {
        self.buffer.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Number of events pushed out of the buffer by newer ones.
    #[must_use]
    pub fn evicted_count(&self) -> usize {
        self.evicted
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.evicted = 0;
    }
}
