use std::sync::Arc;

use super::DataProvider;
use crate::client::context::{ClientContext, FailurePolicy};
use crate::error::ClientResult;
use crate::feature::{FeatureScope, ListenerHandle, NotificationChannel};
use crate::protocol::messages::object_explorer as msg;
use crate::types::{
    CloseSessionInfo, CloseSessionResponse, ConnectionInfo, CreateSessionResponse,
    ExpandCompletedParams, ExpandNodeInfo, FindNodesInfo, FindNodesResponse, SessionCreatedParams,
    SessionDisconnectedParams,
};

#[derive(Debug, Clone)]
pub struct ObjectExplorerProvider {
    context: Arc<ClientContext>,
    session_created: Arc<NotificationChannel<SessionCreatedParams>>,
    session_disconnected: Arc<NotificationChannel<SessionDisconnectedParams>>,
    expand_completed: Arc<NotificationChannel<ExpandCompletedParams>>,
}

pub(crate) fn build(scope: &FeatureScope<'_>) -> DataProvider {
    DataProvider::ObjectExplorer(ObjectExplorerProvider {
        context: scope.context(),
        session_created: scope.channel(msg::SESSION_CREATED),
        session_disconnected: scope.channel(msg::SESSION_DISCONNECTED),
        expand_completed: scope.channel(msg::EXPAND_COMPLETED),
    })
}

impl ObjectExplorerProvider {
    pub fn provider_id(&self) -> &str {
        self.context.provider_id()
    }

    /// Open a browsing session. The root node arrives with the
    /// session-created notification.
    pub async fn create_session(
        &self,
        info: ConnectionInfo,
    ) -> ClientResult<Option<CreateSessionResponse>> {
        self.context
            .guarded_request(msg::CREATE_SESSION, info, FailurePolicy::Fallback(None), Some)
            .await
    }

    pub async fn expand_node(&self, info: ExpandNodeInfo) -> ClientResult<Option<bool>> {
        self.context
            .guarded_request(msg::EXPAND, info, FailurePolicy::Fallback(None), Some)
            .await
    }

    pub async fn refresh_node(&self, info: ExpandNodeInfo) -> ClientResult<Option<bool>> {
        self.context
            .guarded_request(msg::REFRESH, info, FailurePolicy::Fallback(None), Some)
            .await
    }

    pub async fn close_session(
        &self,
        info: CloseSessionInfo,
    ) -> ClientResult<Option<CloseSessionResponse>> {
        self.context
            .guarded_request(msg::CLOSE_SESSION, info, FailurePolicy::Fallback(None), Some)
            .await
    }

    pub async fn find_nodes(&self, info: FindNodesInfo) -> ClientResult<Option<FindNodesResponse>> {
        self.context
            .guarded_request(msg::FIND_NODES, info, FailurePolicy::Fallback(None), Some)
            .await
    }

    pub fn register_on_session_created<F>(&self, listener: F) -> ListenerHandle
    where
        F: Fn(&SessionCreatedParams) + Send + Sync + 'static,
    {
        self.session_created.subscribe(listener)
    }

    pub fn register_on_session_disconnected<F>(&self, listener: F) -> ListenerHandle
    where
        F: Fn(&SessionDisconnectedParams) + Send + Sync + 'static,
    {
        self.session_disconnected.subscribe(listener)
    }

    pub fn register_on_expand_completed<F>(&self, listener: F) -> ListenerHandle
    where
        F: Fn(&ExpandCompletedParams) + Send + Sync + 'static,
    {
        self.expand_completed.subscribe(listener)
    }
}
