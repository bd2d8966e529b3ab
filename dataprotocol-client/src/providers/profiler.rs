//! XEvent profiler sessions. Control requests resolve to `true` once the
//! backend acknowledges them and reject otherwise.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::DataProvider;
use crate::client::context::{ClientContext, FailurePolicy};
use crate::error::ClientResult;
use crate::feature::{FeatureScope, ListenerHandle, NotificationChannel};
use crate::protocol::messages::profiler as msg;
use crate::protocol::RequestType;
use crate::types::{
    CreateXEventSessionParams, OwnerUriParams, ProfilerEventsAvailableParams,
    ProfilerSessionCreatedParams, ProfilerSessionEvents, ProfilerSessionStoppedParams,
    ProfilerSessionTemplate, StartProfilingParams,
};

#[derive(Debug, Clone)]
pub struct ProfilerProvider {
    context: Arc<ClientContext>,
    events_available: Arc<NotificationChannel<ProfilerEventsAvailableParams>>,
    session_stopped: Arc<NotificationChannel<ProfilerSessionStoppedParams>>,
    session_created: Arc<NotificationChannel<ProfilerSessionCreatedParams>>,
}

pub(crate) fn build(scope: &FeatureScope<'_>) -> DataProvider {
    DataProvider::Profiler(ProfilerProvider {
        context: scope.context(),
        events_available: scope.channel(msg::EVENTS_AVAILABLE),
        session_stopped: scope.channel(msg::SESSION_STOPPED),
        session_created: scope.channel(msg::SESSION_CREATED),
    })
}

impl ProfilerProvider {
    pub fn provider_id(&self) -> &str {
        self.context.provider_id()
    }

    async fn acknowledge<P, R>(&self, ty: RequestType<P, R>, params: P) -> ClientResult<bool>
    where
        P: Serialize,
        R: DeserializeOwned,
    {
        self.context
            .guarded_request(ty, params, FailurePolicy::Reject, |_| true)
            .await
    }

    pub async fn create_session(
        &self,
        owner_uri: &str,
        session_name: &str,
        template: ProfilerSessionTemplate,
    ) -> ClientResult<bool> {
        let params = CreateXEventSessionParams {
            owner_uri: owner_uri.to_string(),
            session_name: session_name.to_string(),
            template,
        };
        self.acknowledge(msg::CREATE_SESSION, params).await
    }

    pub async fn start_session(&self, owner_uri: &str, session_name: &str) -> ClientResult<bool> {
        let params = StartProfilingParams {
            owner_uri: owner_uri.to_string(),
            session_name: session_name.to_string(),
        };
        self.acknowledge(msg::START, params).await
    }

    pub async fn stop_session(&self, owner_uri: &str) -> ClientResult<bool> {
        self.acknowledge(msg::STOP, OwnerUriParams::new(owner_uri)).await
    }

    pub async fn pause_session(&self, owner_uri: &str) -> ClientResult<bool> {
        self.acknowledge(msg::PAUSE, OwnerUriParams::new(owner_uri)).await
    }

    pub async fn disconnect_session(&self, owner_uri: &str) -> ClientResult<bool> {
        self.acknowledge(msg::DISCONNECT, OwnerUriParams::new(owner_uri)).await
    }

    /// Names of the XEvent sessions available on the server.
    pub async fn get_xevent_sessions(&self, owner_uri: &str) -> ClientResult<Vec<String>> {
        self.context
            .guarded_request(
                msg::GET_SESSIONS,
                OwnerUriParams::new(owner_uri),
                FailurePolicy::Reject,
                |r| r.sessions,
            )
            .await
    }

    pub fn register_on_session_events_available<F>(&self, listener: F) -> ListenerHandle
    where
        F: Fn(&ProfilerSessionEvents) + Send + Sync + 'static,
    {
        self.events_available
            .subscribe(move |params| listener(&ProfilerSessionEvents::from(params.clone())))
    }

    pub fn register_on_session_stopped<F>(&self, listener: F) -> ListenerHandle
    where
        F: Fn(&ProfilerSessionStoppedParams) + Send + Sync + 'static,
    {
        self.session_stopped.subscribe(listener)
    }

    pub fn register_on_profiler_session_created<F>(&self, listener: F) -> ListenerHandle
    where
        F: Fn(&ProfilerSessionCreatedParams) + Send + Sync + 'static,
    {
        self.session_created.subscribe(listener)
    }
}
