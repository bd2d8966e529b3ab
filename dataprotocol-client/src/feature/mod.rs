//! Capability features
//!
//! A [`CapabilityFeature`] owns one domain's message bundle, its registration
//! table and the notification channels its provider listens on. It moves
//! through `Constructed -> CapabilitiesDeclared -> Registered -> Disposed`;
//! `dispose` is reachable from every state and is idempotent.

pub mod channel;
pub mod kind;

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde::de::DeserializeOwned;
use tracing::debug;
use uuid::Uuid;

pub use channel::{ListenerHandle, NotificationChannel};
pub use kind::{FeatureKind, FeatureSpec};

use crate::client::context::ClientContext;
use crate::disposable::Disposable;
use crate::error::{ClientError, ClientResult};
use crate::protocol::{CapabilityBundle, ClientCapabilities, MessageDescriptor, NotificationType};
use crate::providers::ProviderRegistrar;
use crate::transport::NotificationHandler;
use channel::ListenerSet;

/// Lock a mutex, recovering the data if a previous holder panicked.
pub(crate) fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureState {
    Constructed,
    CapabilitiesDeclared,
    Registered,
    Disposed,
}

// One channel per method and payload type; the catalog gives every method a
// single payload type, so in practice one channel per method.
type ChannelKey = (&'static str, TypeId);

struct ChannelEntry {
    channel: Arc<dyn Any + Send + Sync>,
    control: Arc<dyn ListenerSet>,
    subscription: Disposable,
}

pub struct CapabilityFeature {
    spec: &'static FeatureSpec,
    context: Arc<ClientContext>,
    registrar: Arc<dyn ProviderRegistrar>,
    state: Mutex<FeatureState>,
    registrations: Mutex<HashMap<String, Disposable>>,
    channels: Mutex<HashMap<ChannelKey, ChannelEntry>>,
}

impl CapabilityFeature {
    pub fn new(
        kind: FeatureKind,
        context: Arc<ClientContext>,
        registrar: Arc<dyn ProviderRegistrar>,
    ) -> Self {
        Self {
            spec: kind.spec(),
            context,
            registrar,
            state: Mutex::new(FeatureState::Constructed),
            registrations: Mutex::new(HashMap::new()),
            channels: Mutex::new(HashMap::new()),
        }
    }

    pub fn kind(&self) -> FeatureKind {
        self.spec.kind
    }

    pub fn namespace(&self) -> &'static str {
        self.spec.namespace
    }

    pub fn messages(&self) -> CapabilityBundle {
        self.spec.messages
    }

    pub fn owns(&self, method: &str) -> bool {
        self.spec.messages.iter().any(|m| m.method == method)
    }

    pub fn state(&self) -> FeatureState {
        *lock(&self.state)
    }

    pub fn registration_ids(&self) -> Vec<String> {
        lock(&self.registrations).keys().cloned().collect()
    }

    pub fn channel_count(&self) -> usize {
        lock(&self.channels).len()
    }

    /// Advertise dynamic registration for this domain. Safe to repeat.
    pub fn fill_client_capabilities(&self, capabilities: &mut ClientCapabilities) {
        capabilities.enable_dynamic_registration(self.namespace());
        let mut state = lock(&self.state);
        if *state == FeatureState::Constructed {
            *state = FeatureState::CapabilitiesDeclared;
        }
    }

    /// Self-register the whole bundle under a fresh registration id.
    pub fn initialize(&self) -> ClientResult<String> {
        let id = Uuid::new_v4().to_string();
        self.register(self.spec.messages, &id)?;
        Ok(id)
    }

    /// Build the domain's provider and hand it to the host registrar.
    ///
    /// Every message in `messages` must belong to this feature's bundle;
    /// anything else is a wiring error. Re-registering an id replaces and
    /// disposes the previous handle.
    pub fn register(&self, messages: &[MessageDescriptor], id: &str) -> ClientResult<()> {
        if self.state() == FeatureState::Disposed {
            return Err(ClientError::FeatureDisposed(self.namespace().to_string()));
        }
        if let Some(foreign) = messages.iter().find(|m| !self.owns(m.method)) {
            return Err(ClientError::WrongFeature {
                requested: foreign.method.to_string(),
                feature: self.namespace().to_string(),
            });
        }

        let provider = (self.spec.build)(&FeatureScope { feature: self });
        let mut handle = self.registrar.register_provider(provider);

        let mut state = lock(&self.state);
        if *state == FeatureState::Disposed {
            // disposed while the provider was being built
            drop(state);
            handle.dispose();
            self.release_channels();
            return Err(ClientError::FeatureDisposed(self.namespace().to_string()));
        }
        *state = FeatureState::Registered;
        let previous = lock(&self.registrations).insert(id.to_string(), handle);
        drop(state);

        if let Some(mut previous) = previous {
            previous.dispose();
        }
        debug!(feature = self.namespace(), id, "provider registered");
        Ok(())
    }

    /// Register a single message of this feature's bundle.
    pub fn register_message(&self, message: MessageDescriptor, id: &str) -> ClientResult<()> {
        self.register(std::slice::from_ref(&message), id)
    }

    /// Dispose the registration `id`. Unknown ids are ignored.
    pub fn unregister(&self, id: &str) {
        let removed = lock(&self.registrations).remove(id);
        if let Some(mut handle) = removed {
            handle.dispose();
            debug!(feature = self.namespace(), id, "provider unregistered");
        }
    }

    /// Release every registration and notification channel.
    pub fn dispose(&self) {
        *lock(&self.state) = FeatureState::Disposed;

        let registrations = std::mem::take(&mut *lock(&self.registrations));
        let released = registrations.len();
        for (_, mut handle) in registrations {
            handle.dispose();
        }
        let channels = self.release_channels();

        if released > 0 || channels > 0 {
            debug!(
                feature = self.namespace(),
                registrations = released,
                channels,
                "feature disposed"
            );
        }
    }

    fn release_channels(&self) -> usize {
        let channels = std::mem::take(&mut *lock(&self.channels));
        let count = channels.len();
        for (_, mut entry) in channels {
            entry.control.close();
            entry.subscription.dispose();
        }
        count
    }

    fn channel<P>(&self, ty: NotificationType<P>) -> Arc<NotificationChannel<P>>
    where
        P: DeserializeOwned + Send + Sync + 'static,
    {
        let key = (ty.method(), TypeId::of::<P>());
        let mut channels = lock(&self.channels);
        if let Some(existing) = channels
            .get(&key)
            .and_then(|entry| entry.channel.clone().downcast::<NotificationChannel<P>>().ok())
        {
            return existing;
        }

        let channel = NotificationChannel::<P>::new(ty.method());
        let weak = Arc::downgrade(&channel);
        let handler: NotificationHandler = Arc::new(move |payload| {
            if let Some(channel) = weak.upgrade() {
                channel.deliver(payload);
            }
        });
        let subscription = self.context.transport().on_notification(ty.method(), handler);

        channels.insert(
            key,
            ChannelEntry {
                channel: channel.clone(),
                control: channel.clone(),
                subscription,
            },
        );
        channel
    }
}

impl fmt::Debug for CapabilityFeature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CapabilityFeature")
            .field("kind", &self.spec.kind)
            .field("state", &self.state())
            .finish_non_exhaustive()
    }
}

/// What a provider builder may use while a feature registers it.
pub struct FeatureScope<'a> {
    feature: &'a CapabilityFeature,
}

impl FeatureScope<'_> {
    pub fn context(&self) -> Arc<ClientContext> {
        self.feature.context.clone()
    }

    /// The feature's channel for `ty`, created and subscribed on first use.
    pub fn channel<P>(&self, ty: NotificationType<P>) -> Arc<NotificationChannel<P>>
    where
        P: DeserializeOwned + Send + Sync + 'static,
    {
        self.feature.channel(ty)
    }
}
