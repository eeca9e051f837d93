// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! Notifications appear temporarily to confirm actions (an event was
//! created, a profile saved) or report failures, without blocking
//! interaction.
//!
//! # Components
//!
//! - [`notification`] - `ToastRequest` payload and the `Notification` record
//! - [`bus`] - `Bus` connecting producers to surfaces
//! - [`timer`] - Cancellable auto-dismiss countdowns
//! - [`surface`] - `Surface` owning the visible list
//! - [`toast`] - Toast widget rendering
//!
//! # Usage
//!
//! ```ignore
//! use toast_surface::notifications::{Bus, Surface, TaskScheduler, ToastRequest};
//!
//! let bus = Bus::new();
//! let mut surface = Surface::mount(&bus, TaskScheduler::new());
//!
//! // Anywhere a clone of the bus is reachable
//! bus.publish(ToastRequest::success("Event created"));
//!
//! // In update: hand countdowns to the runtime
//! let tasks = surface.take_tasks().map(Message::Toast);
//!
//! // In view: render the overlay
//! let overlay = surface.view().map(Message::Toast);
//! ```

pub mod bus;
pub mod notification;
pub mod surface;
pub mod timer;
pub mod toast;

pub use bus::{Bus, BusSettings, ListenerId, SubscriptionHandle};
pub use notification::{Category, Notification, NotificationId, ToastRequest};
pub use surface::{Message as SurfaceMessage, Surface};
pub use timer::{
    Countdown, ManualCountdown, ManualScheduler, Scheduler, TaskCountdown, TaskScheduler,
};
pub use toast::Toast;
