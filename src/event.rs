//! Notifications published by the cursor, and the bus that carries them.
//!
//! Delivery is synchronous: [`EventBus::publish`] calls every matching
//! subscriber before returning. Subscribers run against a snapshot of the
//! subscriber list, so they may publish, subscribe or drop their own
//! [`Subscription`] while being called.
//!
//! Renderers that would rather drain notifications after the current turn can
//! take a [`EventBus::channel`] instead of registering a callback.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// State changes announced to renderers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Notification {
    /// At least one list was replaced, everything should be redrawn
    ListsChanged,
    /// The item at `(list, item)` is now highlighted
    ItemHighlighted {
        /// List index
        list: usize,
        /// Item index within the list
        item: usize,
    },
    /// The item at `(list, item)` is no longer highlighted
    ItemUnhighlighted {
        /// List index
        list: usize,
        /// Item index within the list
        item: usize,
    },
}

/// Kind of a [`Notification`], used to route subscriptions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Topic {
    /// See [`Notification::ListsChanged`]
    ListsChanged,
    /// See [`Notification::ItemHighlighted`]
    ItemHighlighted,
    /// See [`Notification::ItemUnhighlighted`]
    ItemUnhighlighted,
}

impl Notification {
    /// The topic this notification is published on
    pub fn topic(&self) -> Topic {
        match self {
            Notification::ListsChanged => Topic::ListsChanged,
            Notification::ItemHighlighted { .. } => Topic::ItemHighlighted,
            Notification::ItemUnhighlighted { .. } => Topic::ItemUnhighlighted,
        }
    }
}

type Callback = dyn Fn(&Notification);

struct Subscriber {
    id: u64,
    topic: Option<Topic>,
    callback: Rc<Callback>,
}

#[derive(Default)]
struct BusInner {
    next_id: u64,
    subscribers: Vec<Subscriber>,
    channels: Vec<kanal::Sender<Notification>>,
}

/// Single-threaded publish/subscribe hub.
///
/// Clones share the same subscribers.
#[derive(Clone, Default)]
pub struct EventBus {
    inner: Rc<RefCell<BusInner>>,
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("EventBus")
            .field("subscribers", &inner.subscribers.len())
            .field("channels", &inner.channels.len())
            .finish()
    }
}

impl EventBus {
    /// Creates a bus without subscribers
    pub fn new() -> Self {
        Self::default()
    }

    /// Calls `callback` for every notification on `topic` until the returned
    /// guard is dropped.
    #[must_use = "dropping the subscription unsubscribes immediately"]
    pub fn subscribe(&self, topic: Topic, callback: impl Fn(&Notification) + 'static) -> Subscription {
        self.add_subscriber(Some(topic), Rc::new(callback))
    }

    /// Calls `callback` for every notification until the returned guard is dropped.
    #[must_use = "dropping the subscription unsubscribes immediately"]
    pub fn subscribe_all(&self, callback: impl Fn(&Notification) + 'static) -> Subscription {
        self.add_subscriber(None, Rc::new(callback))
    }

    fn add_subscriber(&self, topic: Option<Topic>, callback: Rc<Callback>) -> Subscription {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.subscribers.push(Subscriber { id, topic, callback });
        trace!("subscriber {id} added for {topic:?}");
        Subscription {
            bus: Some(Rc::downgrade(&self.inner)),
            id,
        }
    }

    /// Returns a receiver that gets a copy of every notification published
    /// from now on. The bus stops feeding it once it is dropped.
    pub fn channel(&self) -> kanal::Receiver<Notification> {
        let (tx, rx) = kanal::unbounded();
        self.inner.borrow_mut().channels.push(tx);
        rx
    }

    /// Number of live callback subscriptions
    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().subscribers.len()
    }

    /// Delivers `notification` to every matching subscriber, in subscription order.
    pub fn publish(&self, notification: Notification) {
        debug!("publish {notification:?}");
        let topic = notification.topic();
        let targets: Vec<Rc<Callback>> = {
            let mut inner = self.inner.borrow_mut();
            inner.channels.retain(|tx| tx.send(notification).is_ok());
            inner
                .subscribers
                .iter()
                .filter(|sub| sub.topic.is_none_or(|t| t == topic))
                .map(|sub| sub.callback.clone())
                .collect()
        };

        for callback in targets {
            callback(&notification);
        }
    }
}

/// Keeps a subscription alive; dropping it unsubscribes.
#[must_use = "dropping the subscription unsubscribes immediately"]
pub struct Subscription {
    bus: Option<Weak<RefCell<BusInner>>>,
    id: u64,
}

impl Subscription {
    /// Keeps the subscriber registered for the lifetime of the bus
    pub fn detach(mut self) {
        self.bus = None;
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(inner) = self.bus.take().and_then(|bus| bus.upgrade()) {
            inner.borrow_mut().subscribers.retain(|sub| sub.id != self.id);
            trace!("subscriber {} removed", self.id);
        }
    }
}
