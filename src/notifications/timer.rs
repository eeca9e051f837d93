// SPDX-License-Identifier: MPL-2.0
//! Auto-dismiss countdowns.
//!
//! A [`Scheduler`] starts one [`Countdown`] per visible notification. The
//! surface stores the countdown next to the record and releases it exactly
//! once, on whichever of expiry or dismissal comes first.
//!
//! - [`TaskScheduler`] runs countdowns as abortable futures inside Iced tasks.
//! - [`ManualScheduler`] runs them on a virtual clock advanced by hand,
//!   for tests and for hosts that drive time themselves.

use super::notification::NotificationId;
use super::surface::Message;
use iced::futures::future::{abortable, AbortHandle, BoxFuture, FutureExt};
use iced::Task;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::time::Duration;

/// A pending countdown.
pub trait Countdown {
    /// Stops the countdown. After this the expiry message is never produced.
    fn cancel(self);
}

/// Starts countdowns.
pub trait Scheduler {
    type Countdown: Countdown;

    /// Starts a countdown that reports `id` as expired after `after`.
    fn schedule(&mut self, id: NotificationId, after: Duration) -> Self::Countdown;
}

// =============================================================================
// Iced tasks
// =============================================================================

/// A countdown future: `Some(Expired(id))` once its delay has elapsed, or
/// `None` if it was aborted first.
pub(crate) type Expiry = BoxFuture<'static, Option<Message>>;

/// Builds the future behind one countdown and the handle that aborts it.
fn expiry(id: NotificationId, after: Duration) -> (Expiry, AbortHandle) {
    // The sleep is created lazily so it binds to the executor's timer.
    let (countdown, handle) = abortable(async move {
        tokio::time::sleep(after).await;
        Message::Expired(id)
    });
    (countdown.map(Result::ok).boxed(), handle)
}

/// Schedules countdowns as Iced tasks resolving to [`Message::Expired`].
///
/// Countdowns accumulate until the host collects them with
/// [`TaskScheduler::take_tasks`] and returns them from its `update`.
#[derive(Default)]
pub struct TaskScheduler {
    pending: Vec<Expiry>,
}

impl std::fmt::Debug for TaskScheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaskScheduler")
            .field("pending", &self.pending.len())
            .finish()
    }
}

impl TaskScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every countdown scheduled since the last call, batched.
    ///
    /// An aborted countdown completes without producing a message.
    pub fn take_tasks(&mut self) -> Task<Message> {
        Task::batch(
            self.take_expiries()
                .into_iter()
                .map(|expiry| Task::future(expiry).and_then(Task::done)),
        )
    }

    /// Number of countdowns waiting to be handed to the runtime.
    #[must_use]
    pub fn scheduled_count(&self) -> usize {
        self.pending.len()
    }

    pub(crate) fn take_expiries(&mut self) -> Vec<Expiry> {
        std::mem::take(&mut self.pending)
    }
}

/// Countdown backed by an abortable future run as an Iced task.
#[derive(Debug)]
pub struct TaskCountdown(AbortHandle);

impl Countdown for TaskCountdown {
    fn cancel(self) {
        self.0.abort();
    }
}

impl Scheduler for TaskScheduler {
    type Countdown = TaskCountdown;

    fn schedule(&mut self, id: NotificationId, after: Duration) -> TaskCountdown {
        let (countdown, handle) = expiry(id, after);
        self.pending.push(countdown);
        TaskCountdown(handle)
    }
}

// =============================================================================
// Virtual clock
// =============================================================================

#[derive(Debug)]
struct PendingTimer {
    key: u64,
    id: NotificationId,
    due: Duration,
}

#[derive(Debug, Default)]
struct ManualState {
    now: Duration,
    next_key: u64,
    pending: Vec<PendingTimer>,
}

/// Scheduler driven by a virtual clock.
///
/// Clones share one clock: hand one clone to the surface and keep another
/// to advance time.
///
/// ```
/// use std::time::Duration;
/// use toast_surface::notifications::{ManualScheduler, NotificationId, Scheduler};
///
/// let mut clock = ManualScheduler::new();
/// let _countdown = clock.schedule(NotificationId::from_raw(0), Duration::from_millis(100));
///
/// assert!(clock.advance(Duration::from_millis(99)).is_empty());
/// assert_eq!(clock.advance(Duration::from_millis(1)), vec![NotificationId::from_raw(0)]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ManualScheduler {
    state: Rc<RefCell<ManualState>>,
}

impl ManualScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Virtual time elapsed since the scheduler was created.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.state.borrow().now
    }

    /// Number of countdowns that have neither fired nor been cancelled.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.state.borrow().pending.len()
    }

    /// Moves the clock forward and returns the ids whose countdowns are now
    /// due, earliest deadline first (ties in scheduling order).
    pub fn advance(&self, by: Duration) -> Vec<NotificationId> {
        let mut state = self.state.borrow_mut();
        state.now += by;
        let now = state.now;

        let (mut due, rest): (Vec<_>, Vec<_>) = std::mem::take(&mut state.pending)
            .into_iter()
            .partition(|timer| timer.due <= now);
        state.pending = rest;

        due.sort_by_key(|timer| (timer.due, timer.key));
        due.into_iter().map(|timer| timer.id).collect()
    }
}

/// Countdown on a [`ManualScheduler`] clock.
#[derive(Debug)]
pub struct ManualCountdown {
    key: u64,
    state: Weak<RefCell<ManualState>>,
}

impl Countdown for ManualCountdown {
    fn cancel(self) {
        if let Some(state) = self.state.upgrade() {
            state
                .borrow_mut()
                .pending
                .retain(|timer| timer.key != self.key);
        }
    }
}

impl Scheduler for ManualScheduler {
    type Countdown = ManualCountdown;

    fn schedule(&mut self, id: NotificationId, after: Duration) -> ManualCountdown {
        let mut state = self.state.borrow_mut();
        let key = state.next_key;
        state.next_key += 1;
        let due = state.now + after;
        state.pending.push(PendingTimer { key, id, due });

        ManualCountdown {
            key,
            state: Rc::downgrade(&self.state),
        }
    }
}
