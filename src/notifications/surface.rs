// SPDX-License-Identifier: MPL-2.0
//! The notification surface: sole owner of the visible toast list.
//!
//! Mounting subscribes to a [`Bus`]; every delivered notification is
//! appended to the visible list (newest last) and gets a countdown. A
//! notification leaves the list once, either when its countdown expires or
//! when the user dismisses it, and the countdown is released on both paths.

use super::bus::{Bus, SubscriptionHandle};
use super::notification::{Notification, NotificationId};
use super::timer::{Countdown, Scheduler, TaskScheduler};
use super::toast::Toast;
use crate::diagnostics::{DiagnosticsHandle, RemovalReason};
use iced::{Element, Task};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Messages for notification state changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// The user dismissed a notification.
    Dismiss(NotificationId),
    /// A notification's countdown elapsed.
    Expired(NotificationId),
}

struct Entry<C> {
    notification: Notification,
    countdown: C,
}

struct State<S: Scheduler> {
    entries: Vec<Entry<S::Countdown>>,
    scheduler: S,
    diagnostics: Option<DiagnosticsHandle>,
}

impl<S: Scheduler> State<S> {
    fn show(&mut self, notification: Notification) {
        let id = notification.id();
        if self.entries.iter().any(|e| e.notification.id() == id) {
            return;
        }
        let countdown = self.scheduler.schedule(id, notification.lifetime());
        if let Some(handle) = &self.diagnostics {
            handle.log_shown(&notification);
        }
        self.entries.push(Entry {
            notification,
            countdown,
        });
    }

    fn remove(&mut self, id: NotificationId, reason: RemovalReason) -> bool {
        let Some(pos) = self.entries.iter().position(|e| e.notification.id() == id) else {
            return false;
        };
        let entry = self.entries.remove(pos);
        entry.countdown.cancel();
        if let Some(handle) = &self.diagnostics {
            handle.log_removed(id, reason);
        }
        true
    }

    fn clear(&mut self, reason: RemovalReason) {
        for entry in std::mem::take(&mut self.entries) {
            let id = entry.notification.id();
            entry.countdown.cancel();
            if let Some(handle) = &self.diagnostics {
                handle.log_removed(id, reason);
            }
        }
    }
}

/// Renders and owns the currently visible notifications.
///
/// ```
/// use toast_surface::notifications::{Bus, ManualScheduler, Surface, ToastRequest};
///
/// let bus = Bus::new();
/// let clock = ManualScheduler::new();
/// let mut surface = Surface::mount(&bus, clock.clone());
///
/// bus.publish(ToastRequest::success("Saved"));
/// assert_eq!(surface.visible_count(), 1);
///
/// for id in clock.advance(std::time::Duration::from_millis(4000)) {
///     surface.expire(id);
/// }
/// assert!(!surface.has_notifications());
/// ```
pub struct Surface<S: Scheduler = TaskScheduler> {
    state: Rc<RefCell<State<S>>>,
    subscription: Option<SubscriptionHandle>,
}

impl<S: Scheduler> fmt::Debug for Surface<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Surface")
            .field("mounted", &self.subscription.is_some())
            .field("visible", &self.state.borrow().entries.len())
            .finish()
    }
}

impl<S> Surface<S>
where
    S: Scheduler + 'static,
    S::Countdown: 'static,
{
    /// Mounts a surface on `bus`, using `scheduler` for countdowns.
    #[must_use]
    pub fn mount(bus: &Bus, scheduler: S) -> Self {
        let state = Rc::new(RefCell::new(State {
            entries: Vec::new(),
            scheduler,
            diagnostics: None,
        }));

        let listener_state = Rc::downgrade(&state);
        let subscription = bus.subscribe(move |notification| {
            if let Some(state) = listener_state.upgrade() {
                state.borrow_mut().show(notification.clone());
            }
        });

        Self {
            state,
            subscription: Some(subscription),
        }
    }
}

impl<S: Scheduler> Surface<S> {
    /// Attaches a diagnostics handle recording shown and removed toasts.
    #[must_use]
    pub fn with_diagnostics(self, handle: DiagnosticsHandle) -> Self {
        self.state.borrow_mut().diagnostics = Some(handle);
        self
    }

    /// Handles a notification message.
    pub fn update(&mut self, message: Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(id);
            }
            Message::Expired(id) => {
                self.expire(id);
            }
        }
    }

    /// Removes a notification at the user's request.
    ///
    /// Returns `true` if the notification was visible. Its countdown is
    /// cancelled, so no expiry follows.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        self.state.borrow_mut().remove(id, RemovalReason::Dismissed)
    }

    /// Removes a notification whose countdown elapsed.
    ///
    /// Returns `false` when the notification is already gone.
    pub fn expire(&mut self, id: NotificationId) -> bool {
        self.state.borrow_mut().remove(id, RemovalReason::Expired)
    }

    /// Unsubscribes from the bus and drops every visible notification,
    /// cancelling their countdowns. Calling it again is a no-op.
    pub fn unmount(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            subscription.unsubscribe();
        }
        self.state.borrow_mut().clear(RemovalReason::Unmounted);
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.subscription.is_some()
    }

    /// Returns the visible notifications in display order (oldest first).
    #[must_use]
    pub fn visible(&self) -> Vec<Notification> {
        self.state
            .borrow()
            .entries
            .iter()
            .map(|e| e.notification.clone())
            .collect()
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.state.borrow().entries.len()
    }

    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.state.borrow().entries.is_empty()
    }

    /// Renders the toast overlay.
    pub fn view<'a>(&self) -> Element<'a, Message> {
        let state = self.state.borrow();
        Toast::view_overlay(state.entries.iter().map(|e| &e.notification))
    }
}

impl Surface<TaskScheduler> {
    /// Returns the countdown tasks started since the last call.
    ///
    /// Hosts return this from their `update` after anything that may have
    /// published.
    pub fn take_tasks(&mut self) -> Task<Message> {
        self.state.borrow_mut().scheduler.take_tasks()
    }
}

impl<S: Scheduler> Drop for Surface<S> {
    fn drop(&mut self) {
        self.unmount();
    }
}
