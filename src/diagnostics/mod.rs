// SPDX-License-Identifier: MPL-2.0
//! Diagnostics module recording the notification lifecycle.
//!
//! Publishing never reports failure to the producer, so the diagnostic log
//! is where dropped notifications and removal reasons become visible.
//!
//! # Architecture
//!
//! - [`CircularBuffer`]: Generic ring buffer with configurable capacity
//! - [`DiagnosticEvent`]: Timestamped lifecycle event
//! - [`DiagnosticsCollector`]/[`DiagnosticsHandle`]: Storage and the cheap
//!   cloneable sender handed to the bus and the surface

mod buffer;
mod collector;
mod events;

pub use buffer::{BufferCapacity, CircularBuffer};
pub use collector::{DiagnosticsCollector, DiagnosticsHandle};
pub use events::{DiagnosticEvent, DiagnosticEventKind, RemovalReason};
