// SPDX-License-Identifier: MPL-2.0
//! Publish/subscribe registry connecting notification producers to surfaces.
//!
//! A [`Bus`] is an explicitly constructed value. Clones share the same
//! registry, so producers receive a clone instead of reaching for global
//! state. Delivery is synchronous and single-threaded: `publish` returns
//! after every listener has seen the notification.

use super::notification::{Notification, NotificationId, ToastRequest};
use crate::config::{NotificationsConfig, DEFAULT_LIFETIME_MS};
use crate::diagnostics::DiagnosticsHandle;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::fmt;
use std::rc::{Rc, Weak};
use std::time::Duration;

type Listener = Rc<RefCell<dyn FnMut(&Notification)>>;

/// Identifies a registered listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// Settings applied to every notification built by a bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusSettings {
    /// Lifetime for requests that carry none (or zero). Must be non-zero.
    pub default_lifetime: Duration,
}

impl Default for BusSettings {
    fn default() -> Self {
        Self {
            default_lifetime: Duration::from_millis(DEFAULT_LIFETIME_MS),
        }
    }
}

impl From<&NotificationsConfig> for BusSettings {
    fn from(config: &NotificationsConfig) -> Self {
        Self {
            default_lifetime: config.default_lifetime(),
        }
    }
}

struct Registry {
    settings: BusSettings,
    next_listener: u64,
    next_notification: u64,
    listeners: Vec<(ListenerId, Listener)>,
    /// Notifications published while a delivery round is running.
    queue: VecDeque<Notification>,
    delivering: bool,
    diagnostics: Option<DiagnosticsHandle>,
}

impl Registry {
    fn is_subscribed(&self, id: ListenerId) -> bool {
        self.listeners.iter().any(|(listener_id, _)| *listener_id == id)
    }

    fn remove(&mut self, id: ListenerId) {
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
    }
}

/// The notification bus.
#[derive(Clone)]
pub struct Bus {
    registry: Rc<RefCell<Registry>>,
}

impl fmt::Debug for Bus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let registry = self.registry.borrow();
        f.debug_struct("Bus")
            .field("settings", &registry.settings)
            .field("listeners", &registry.listeners.len())
            .field("next_notification", &registry.next_notification)
            .finish()
    }
}

impl Default for Bus {
    fn default() -> Self {
        Self::with_settings(BusSettings::default())
    }
}

impl Bus {
    /// Creates a bus with the default 4 second lifetime.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a bus with explicit settings.
    ///
    /// A zero `default_lifetime` is replaced with the built-in default so
    /// that every notification keeps a positive lifetime.
    #[must_use]
    pub fn with_settings(mut settings: BusSettings) -> Self {
        if settings.default_lifetime.is_zero() {
            settings.default_lifetime = BusSettings::default().default_lifetime;
        }
        Self {
            registry: Rc::new(RefCell::new(Registry {
                settings,
                next_listener: 0,
                next_notification: 0,
                listeners: Vec::new(),
                queue: VecDeque::new(),
                delivering: false,
                diagnostics: None,
            })),
        }
    }

    /// Attaches a diagnostics handle recording publishes and drops.
    #[must_use]
    pub fn with_diagnostics(self, handle: DiagnosticsHandle) -> Self {
        self.registry.borrow_mut().diagnostics = Some(handle);
        self
    }

    /// Publishes a notification to every registered listener.
    ///
    /// The bus assigns the id. With no listeners the notification is
    /// dropped; the producer is not told. Listeners may publish from inside
    /// their callback: such notifications are queued and delivered, in call
    /// order, once the current one has reached every listener.
    pub fn publish(&self, request: ToastRequest) {
        {
            let mut registry = self.registry.borrow_mut();
            let id = NotificationId::from_raw(registry.next_notification);
            registry.next_notification += 1;
            let notification =
                Notification::from_request(id, request, registry.settings.default_lifetime);
            registry.queue.push_back(notification);
            if registry.delivering {
                return;
            }
            registry.delivering = true;
        }

        let _round = DeliveryRound {
            registry: &self.registry,
        };
        while let Some((notification, listeners, diagnostics)) = self.next_delivery() {
            self.deliver(&notification, &listeners, diagnostics.as_ref());
        }
    }

    fn next_delivery(
        &self,
    ) -> Option<(
        Notification,
        Vec<(ListenerId, Listener)>,
        Option<DiagnosticsHandle>,
    )> {
        let mut registry = self.registry.borrow_mut();
        let notification = registry.queue.pop_front()?;
        Some((
            notification,
            registry.listeners.clone(),
            registry.diagnostics.clone(),
        ))
    }

    fn deliver(
        &self,
        notification: &Notification,
        listeners: &[(ListenerId, Listener)],
        diagnostics: Option<&DiagnosticsHandle>,
    ) {
        if listeners.is_empty() {
            if let Some(handle) = diagnostics {
                handle.log_dropped(notification);
            }
            return;
        }
        if let Some(handle) = diagnostics {
            handle.log_published(notification, listeners.len());
        }

        for (id, listener) in listeners {
            // An earlier listener in this round may have unsubscribed this one.
            if !self.registry.borrow().is_subscribed(*id) {
                continue;
            }
            (listener.borrow_mut())(notification);
        }
    }

    /// Registers `listener` for every future publish.
    ///
    /// The listener stays registered until the returned handle is
    /// unsubscribed or dropped.
    #[must_use = "dropping the handle unsubscribes the listener"]
    pub fn subscribe<F>(&self, listener: F) -> SubscriptionHandle
    where
        F: FnMut(&Notification) + 'static,
    {
        let mut registry = self.registry.borrow_mut();
        let id = ListenerId(registry.next_listener);
        registry.next_listener += 1;
        let listener: Listener = Rc::new(RefCell::new(listener));
        registry.listeners.push((id, listener));

        SubscriptionHandle {
            id,
            registry: Rc::downgrade(&self.registry),
        }
    }

    /// Removes a listener. Unknown or already removed ids are ignored.
    pub fn unsubscribe(&self, id: ListenerId) {
        self.registry.borrow_mut().remove(id);
    }

    /// Returns the number of registered listeners.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.registry.borrow().listeners.len()
    }

    #[must_use]
    pub fn settings(&self) -> BusSettings {
        self.registry.borrow().settings
    }
}

/// Clears the delivery flag when a round ends, including by unwinding.
struct DeliveryRound<'a> {
    registry: &'a RefCell<Registry>,
}

impl Drop for DeliveryRound<'_> {
    fn drop(&mut self) {
        if let Ok(mut registry) = self.registry.try_borrow_mut() {
            registry.delivering = false;
            registry.queue.clear();
        }
    }
}

/// Keeps a listener registered; unsubscribes on drop.
#[derive(Debug)]
pub struct SubscriptionHandle {
    id: ListenerId,
    registry: Weak<RefCell<Registry>>,
}

impl SubscriptionHandle {
    #[must_use]
    pub fn id(&self) -> ListenerId {
        self.id
    }

    /// Removes the listener. Calling this more than once is a no-op, as is
    /// calling it after the bus itself is gone.
    pub fn unsubscribe(&self) {
        if let Some(registry) = self.registry.upgrade() {
            registry.borrow_mut().remove(self.id);
        }
    }
}

impl Drop for SubscriptionHandle {
    fn drop(&mut self) {
        self.unsubscribe();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::{DiagnosticEventKind, DiagnosticsCollector};

    fn recorder() -> (Rc<RefCell<Vec<String>>>, impl FnMut(&Notification) + 'static) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        (seen, move |n: &Notification| {
            sink.borrow_mut().push(n.title().to_string());
        })
    }

    #[test]
    fn publish_without_listeners_is_a_no_op() {
        let bus = Bus::new();
        bus.publish(ToastRequest::info("nobody"));
        assert_eq!(bus.listener_count(), 0);
    }

    #[test]
    fn publish_fans_out_to_every_listener() {
        let bus = Bus::new();
        let (first, listener_a) = recorder();
        let (second, listener_b) = recorder();
        let _a = bus.subscribe(listener_a);
        let _b = bus.subscribe(listener_b);

        bus.publish(ToastRequest::success("Saved"));

        assert_eq!(*first.borrow(), vec!["Saved"]);
        assert_eq!(*second.borrow(), vec!["Saved"]);
    }

    #[test]
    fn ids_increase_per_publish() {
        let bus = Bus::new();
        let ids = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&ids);
        let _handle = bus.subscribe(move |n| sink.borrow_mut().push(n.id()));

        bus.publish(ToastRequest::info("a"));
        bus.publish(ToastRequest::info("b"));
        bus.publish(ToastRequest::info("c"));

        let ids = ids.borrow();
        assert_eq!(ids.len(), 3);
        assert!(ids.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn ids_keep_counting_while_nobody_listens() {
        let bus = Bus::new();
        bus.publish(ToastRequest::info("dropped"));

        let ids = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&ids);
        let _handle = bus.subscribe(move |n| sink.borrow_mut().push(n.id()));
        bus.publish(ToastRequest::info("seen"));

        assert_eq!(*ids.borrow(), vec![NotificationId::from_raw(1)]);
    }

    #[test]
    fn clones_share_one_registry() {
        let bus = Bus::new();
        let producer = bus.clone();
        let (seen, listener) = recorder();
        let _handle = bus.subscribe(listener);

        producer.publish(ToastRequest::warning("from a clone"));

        assert_eq!(*seen.borrow(), vec!["from a clone"]);
        assert_eq!(producer.listener_count(), 1);
    }

    #[test]
    fn unsubscribe_is_idempotent() {
        let bus = Bus::new();
        let (seen, listener) = recorder();
        let handle = bus.subscribe(listener);

        handle.unsubscribe();
        handle.unsubscribe();
        bus.unsubscribe(handle.id());
        bus.publish(ToastRequest::info("late"));

        assert!(seen.borrow().is_empty());
        assert_eq!(bus.listener_count(), 0);
    }

    #[test]
    fn dropping_handle_unsubscribes() {
        let bus = Bus::new();
        let (seen, listener) = recorder();
        drop(bus.subscribe(listener));

        bus.publish(ToastRequest::info("after drop"));
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn handle_outliving_bus_unsubscribes_quietly() {
        let bus = Bus::new();
        let handle = bus.subscribe(|_| {});
        drop(bus);
        handle.unsubscribe();
    }

    #[test]
    fn listener_removed_mid_round_is_not_invoked() {
        let bus = Bus::new();
        let victim: Rc<RefCell<Option<SubscriptionHandle>>> = Rc::new(RefCell::new(None));
        let slot = Rc::clone(&victim);
        let _killer = bus.subscribe(move |_| {
            if let Some(handle) = slot.borrow_mut().take() {
                handle.unsubscribe();
            }
        });
        let (seen, listener) = recorder();
        *victim.borrow_mut() = Some(bus.subscribe(listener));

        bus.publish(ToastRequest::info("first"));

        assert!(seen.borrow().is_empty());
        assert_eq!(bus.listener_count(), 1);
    }

    #[test]
    fn listener_may_publish_reentrantly() {
        let bus = Bus::new();
        let producer = bus.clone();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let _handle = bus.subscribe(move |n| {
            sink.borrow_mut().push(n.title().to_string());
            if n.title() == "outer" {
                producer.publish(ToastRequest::info("inner"));
            }
        });

        bus.publish(ToastRequest::info("outer"));
        bus.publish(ToastRequest::info("next"));

        assert_eq!(*seen.borrow(), vec!["outer", "inner", "next"]);
    }

    #[test]
    fn zero_default_lifetime_falls_back_to_builtin() {
        let bus = Bus::with_settings(BusSettings {
            default_lifetime: Duration::ZERO,
        });
        assert_eq!(bus.settings(), BusSettings::default());
    }

    #[test]
    fn settings_follow_config() {
        let config = NotificationsConfig {
            default_lifetime_ms: Some(2500),
        };
        let bus = Bus::with_settings(BusSettings::from(&config));

        let lifetimes = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&lifetimes);
        let _handle = bus.subscribe(move |n| sink.borrow_mut().push(n.lifetime()));
        bus.publish(ToastRequest::success("configured"));

        assert_eq!(*lifetimes.borrow(), vec![Duration::from_millis(2500)]);
    }

    #[test]
    fn diagnostics_record_drops_and_fan_out() {
        let mut collector = DiagnosticsCollector::default();
        let bus = Bus::new().with_diagnostics(collector.handle());

        bus.publish(ToastRequest::error("unheard"));
        let _a = bus.subscribe(|_| {});
        let _b = bus.subscribe(|_| {});
        bus.publish(ToastRequest::error("heard"));
        collector.process_pending();

        let kinds: Vec<_> = collector.events().map(|e| e.kind.clone()).collect();
        assert!(matches!(kinds[0], DiagnosticEventKind::Dropped { .. }));
        assert!(matches!(
            kinds[1],
            DiagnosticEventKind::Published { listeners: 2, .. }
        ));
    }
}
