//! Per-method notification fan-out.

use std::fmt;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex, Weak};

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

use super::lock;

type Listener<P> = Arc<dyn Fn(&P) + Send + Sync>;

/// Broadcasts every inbound payload of one notification method to the
/// listeners subscribed at the time the payload arrives.
///
/// Each payload is decoded once. Listeners run in subscription order on a
/// snapshot of the listener list, so subscribing or removing listeners from
/// inside a listener only affects later payloads. A panicking listener is
/// logged and skipped. Once closed, delivery stops before the next listener.
pub struct NotificationChannel<P> {
    method: &'static str,
    listeners: Mutex<Vec<(u64, Listener<P>)>>,
    next_id: AtomicU64,
    closed: AtomicBool,
}

impl<P> NotificationChannel<P>
where
    P: DeserializeOwned + Send + Sync + 'static,
{
    pub(crate) fn new(method: &'static str) -> Arc<Self> {
        debug!(method, "notification channel created");
        Arc::new(Self {
            method,
            listeners: Mutex::new(Vec::new()),
            next_id: AtomicU64::new(0),
            closed: AtomicBool::new(false),
        })
    }

    pub fn method(&self) -> &'static str {
        self.method
    }

    pub fn subscribe<F>(self: &Arc<Self>, listener: F) -> ListenerHandle
    where
        F: Fn(&P) + Send + Sync + 'static,
    {
        if self.is_closed() {
            debug!(method = self.method, "subscribe on closed channel ignored");
            return ListenerHandle::detached();
        }
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        lock(&self.listeners).push((id, Arc::new(listener)));

        let set: Weak<dyn ListenerSet> = Arc::downgrade(self) as Weak<dyn ListenerSet>;
        ListenerHandle {
            channel: Some(set),
            id,
        }
    }

    /// Entry point for the transport: decode `payload` and fan it out.
    pub fn deliver(&self, payload: Value) {
        if self.is_closed() {
            return;
        }
        match serde_json::from_value::<P>(payload) {
            Ok(params) => self.emit(&params),
            Err(err) => {
                warn!(method = self.method, error = %err, "dropping undecodable notification");
            }
        }
    }

    pub fn emit(&self, params: &P) {
        let snapshot: Vec<Listener<P>> = lock(&self.listeners)
            .iter()
            .map(|(_, listener)| listener.clone())
            .collect();

        for listener in snapshot {
            if self.is_closed() {
                break;
            }
            if catch_unwind(AssertUnwindSafe(|| listener(params))).is_err() {
                warn!(method = self.method, "notification listener panicked");
            }
        }
    }

    pub fn listener_count(&self) -> usize {
        lock(&self.listeners).len()
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }
}

impl<P> fmt::Debug for NotificationChannel<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NotificationChannel")
            .field("method", &self.method)
            .field("closed", &self.closed.load(Ordering::SeqCst))
            .finish_non_exhaustive()
    }
}

/// Type-erased view used by listener handles and by the owning feature.
pub(crate) trait ListenerSet: Send + Sync {
    fn remove_listener(&self, id: u64);
    fn close(&self);
}

impl<P> ListenerSet for NotificationChannel<P>
where
    P: Send + Sync + 'static,
{
    fn remove_listener(&self, id: u64) {
        lock(&self.listeners).retain(|(existing, _)| *existing != id);
    }

    fn close(&self) {
        self.closed.store(true, Ordering::SeqCst);
        let released = std::mem::take(&mut *lock(&self.listeners));
        debug!(method = self.method, listeners = released.len(), "notification channel closed");
    }
}

/// Removes one listener from its channel. Dropping the handle keeps the
/// listener subscribed.
pub struct ListenerHandle {
    channel: Option<Weak<dyn ListenerSet>>,
    id: u64,
}

impl ListenerHandle {
    fn detached() -> Self {
        Self {
            channel: None,
            id: 0,
        }
    }

    pub fn remove(&mut self) {
        if let Some(channel) = self.channel.take().and_then(|weak| weak.upgrade()) {
            channel.remove_listener(self.id);
        }
    }

    pub fn is_attached(&self) -> bool {
        self.channel
            .as_ref()
            .map_or(false, |weak| weak.strong_count() > 0)
    }
}

impl fmt::Debug for ListenerHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListenerHandle")
            .field("id", &self.id)
            .field("attached", &self.is_attached())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;
    use std::sync::Mutex;

    #[derive(Debug, Deserialize)]
    struct Ping {
        n: u32,
    }

    fn recorder() -> (Arc<Mutex<Vec<String>>>, impl Fn(&str, u32) + Clone) {
        let log = Arc::new(Mutex::new(Vec::new()));
        let sink = log.clone();
        (log, move |who: &str, n: u32| {
            sink.lock().unwrap().push(format!("{who}:{n}"))
        })
    }

    #[test]
    fn fans_out_in_subscription_order() {
        let channel = NotificationChannel::<Ping>::new("test/ping");
        let (log, record) = recorder();
        let first = record.clone();
        let _a = channel.subscribe(move |p| first("a", p.n));
        let _b = channel.subscribe(move |p| record("b", p.n));

        channel.deliver(json!({ "n": 1 }));
        channel.deliver(json!({ "n": 2 }));

        assert_eq!(*log.lock().unwrap(), vec!["a:1", "b:1", "a:2", "b:2"]);
    }

    #[test]
    fn panicking_listener_does_not_stop_delivery() {
        let channel = NotificationChannel::<Ping>::new("test/ping");
        let (log, record) = recorder();
        let _a = channel.subscribe(|_| panic!("listener bug"));
        let _b = channel.subscribe(move |p| record("b", p.n));

        channel.deliver(json!({ "n": 7 }));

        assert_eq!(*log.lock().unwrap(), vec!["b:7"]);
        assert_eq!(channel.listener_count(), 2);
    }

    #[test]
    fn undecodable_payload_is_dropped() {
        let channel = NotificationChannel::<Ping>::new("test/ping");
        let (log, record) = recorder();
        let _a = channel.subscribe(move |p| record("a", p.n));

        channel.deliver(json!({ "unexpected": true }));

        assert!(log.lock().unwrap().is_empty());
    }

    #[test]
    fn removed_listener_gets_nothing_more() {
        let channel = NotificationChannel::<Ping>::new("test/ping");
        let (log, record) = recorder();
        let mut handle = channel.subscribe(move |p| record("a", p.n));

        channel.deliver(json!({ "n": 1 }));
        handle.remove();
        handle.remove();
        channel.deliver(json!({ "n": 2 }));

        assert_eq!(*log.lock().unwrap(), vec!["a:1"]);
        assert!(!handle.is_attached());
    }

    #[test]
    fn subscribing_during_delivery_applies_to_next_payload() {
        let channel = NotificationChannel::<Ping>::new("test/ping");
        let (log, record) = recorder();

        let weak = Arc::downgrade(&channel);
        let late = record.clone();
        let added = Arc::new(AtomicBool::new(false));
        let _a = channel.subscribe(move |p| {
            record("a", p.n);
            if !added.swap(true, Ordering::SeqCst) {
                if let Some(channel) = weak.upgrade() {
                    let late = late.clone();
                    let _late = channel.subscribe(move |p| late("late", p.n));
                }
            }
        });

        channel.deliver(json!({ "n": 1 }));
        channel.deliver(json!({ "n": 2 }));

        assert_eq!(*log.lock().unwrap(), vec!["a:1", "a:2", "late:2"]);
    }

    #[test]
    fn close_stops_delivery_mid_broadcast() {
        let channel = NotificationChannel::<Ping>::new("test/ping");
        let (log, record) = recorder();

        let weak = Arc::downgrade(&channel);
        let first = record.clone();
        let _a = channel.subscribe(move |p| {
            first("a", p.n);
            if let Some(channel) = weak.upgrade() {
                channel.close();
            }
        });
        let _b = channel.subscribe(move |p| record("b", p.n));

        channel.deliver(json!({ "n": 1 }));
        channel.deliver(json!({ "n": 2 }));

        assert_eq!(*log.lock().unwrap(), vec!["a:1"]);
        assert_eq!(channel.listener_count(), 0);
        assert!(!channel.subscribe(|_| {}).is_attached());
    }
}
