// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types for the notification lifecycle.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::notifications::{Category, NotificationId};

/// Why a notification left the visible list.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RemovalReason {
    /// Its countdown elapsed.
    Expired,
    /// The user dismissed it.
    Dismissed,
    /// The surface was unmounted while it was visible.
    Unmounted,
}

/// A single diagnostic event with its capture time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiagnosticEvent {
    /// Wall-clock time the event was recorded.
    pub timestamp: DateTime<Utc>,
    #[serde(flatten)]
    pub kind: DiagnosticEventKind,
}

impl DiagnosticEvent {
    /// Creates an event stamped with the current time.
    #[must_use]
    pub fn new(kind: DiagnosticEventKind) -> Self {
        Self {
            timestamp: Utc::now(),
            kind,
        }
    }
}

/// What happened.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DiagnosticEventKind {
    /// A request was published and delivered to `listeners` listeners.
    Published {
        id: NotificationId,
        category: Category,
        listeners: usize,
    },

    /// A request was published while nothing was subscribed.
    /// The producer is not told; this is the only trace of the drop.
    Dropped {
        id: NotificationId,
        category: Category,
    },

    /// A surface added the notification to its visible list.
    Shown {
        id: NotificationId,
        category: Category,
    },

    /// A surface removed the notification from its visible list.
    Removed {
        id: NotificationId,
        reason: RemovalReason,
    },
}

impl DiagnosticEventKind {
    /// Returns the notification the event refers to.
    #[must_use]
    pub fn notification_id(&self) -> NotificationId {
        match self {
            Self::Published { id, .. }
            | Self::Dropped { id, .. }
            | Self::Shown { id, .. }
            | Self::Removed { id, .. } => *id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diagnostic_event_new_uses_current_time() {
        let before = Utc::now();
        let event = DiagnosticEvent::new(DiagnosticEventKind::Dropped {
            id: NotificationId::from_raw(1),
            category: Category::Info,
        });
        let after = Utc::now();

        assert!(event.timestamp >= before);
        assert!(event.timestamp <= after);
    }

    #[test]
    fn removed_event_serializes_with_tag_and_reason() {
        let event = DiagnosticEvent::new(DiagnosticEventKind::Removed {
            id: NotificationId::from_raw(3),
            reason: RemovalReason::Dismissed,
        });

        let json = serde_json::to_string(&event).expect("serialization should succeed");
        assert!(json.contains("\"type\":\"removed\""));
        assert!(json.contains("\"reason\":\"dismissed\""));
        assert!(json.contains("\"id\":3"));
    }

    #[test]
    fn published_event_deserializes_from_json() {
        let json = r#"{"timestamp":"2026-01-01T00:00:00Z","type":"published","id":9,"category":"error","listeners":2}"#;
        let event: DiagnosticEvent =
            serde_json::from_str(json).expect("deserialization should succeed");

        match event.kind {
            DiagnosticEventKind::Published {
                id,
                category,
                listeners,
            } => {
                assert_eq!(id, NotificationId::from_raw(9));
                assert_eq!(category, Category::Error);
                assert_eq!(listeners, 2);
            }
            other => panic!("expected Published variant, got {other:?}"),
        }
    }

    #[test]
    fn notification_id_is_available_for_every_kind() {
        let id = NotificationId::from_raw(4);
        let kinds = [
            DiagnosticEventKind::Published {
                id,
                category: Category::Success,
                listeners: 1,
            },
            DiagnosticEventKind::Dropped {
                id,
                category: Category::Success,
            },
            DiagnosticEventKind::Shown {
                id,
                category: Category::Success,
            },
            DiagnosticEventKind::Removed {
                id,
                reason: RemovalReason::Expired,
            },
        ];

        assert!(kinds.iter().all(|kind| kind.notification_id() == id));
    }
}
