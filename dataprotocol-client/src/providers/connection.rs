use std::sync::Arc;

use super::DataProvider;
use crate::client::context::{ClientContext, FailurePolicy};
use crate::error::ClientResult;
use crate::feature::{FeatureScope, ListenerHandle, NotificationChannel};
use crate::protocol::messages::connection as msg;
use crate::types::{
    ChangeDatabaseParams, ChangePasswordParams, ChangedConnectionInfo, ConnectionChangedParams,
    ConnectionCompleteParams, ConnectionInfo, GetConnectionStringParams, IntelliSenseReadyParams,
    LanguageFlavorChangedParams, ListDatabasesResult, OwnerUriParams, PasswordChangeResult,
    RebuildIntelliSenseParams,
};

#[derive(Debug, Clone)]
pub struct ConnectionProvider {
    context: Arc<ClientContext>,
    complete: Arc<NotificationChannel<ConnectionCompleteParams>>,
    changed: Arc<NotificationChannel<ConnectionChangedParams>>,
    intellisense_ready: Arc<NotificationChannel<IntelliSenseReadyParams>>,
}

pub(crate) fn build(scope: &FeatureScope<'_>) -> DataProvider {
    DataProvider::Connection(ConnectionProvider {
        context: scope.context(),
        complete: scope.channel(msg::COMPLETE),
        changed: scope.channel(msg::CHANGED),
        intellisense_ready: scope.channel(msg::INTELLISENSE_READY),
    })
}

impl ConnectionProvider {
    pub fn provider_id(&self) -> &str {
        self.context.provider_id()
    }

    /// Start connecting `owner_uri`. The outcome arrives later as a
    /// `connection/complete` notification.
    pub async fn connect(&self, owner_uri: &str, info: &ConnectionInfo) -> ClientResult<bool> {
        let params = (self.context.converters().host_to_wire.as_connection_params)(owner_uri, info);
        self.context
            .guarded_request(msg::CONNECT, params, FailurePolicy::Fallback(false), |ok| ok)
            .await
    }

    pub async fn disconnect(&self, owner_uri: &str) -> ClientResult<bool> {
        self.context
            .guarded_request(
                msg::DISCONNECT,
                OwnerUriParams::new(owner_uri),
                FailurePolicy::Fallback(false),
                |ok| ok,
            )
            .await
    }

    pub async fn cancel_connect(&self, owner_uri: &str) -> ClientResult<bool> {
        self.context
            .guarded_request(
                msg::CANCEL_CONNECT,
                OwnerUriParams::new(owner_uri),
                FailurePolicy::Fallback(false),
                |ok| ok,
            )
            .await
    }

    pub async fn change_database(&self, owner_uri: &str, new_database: &str) -> ClientResult<bool> {
        let params = ChangeDatabaseParams {
            owner_uri: owner_uri.to_string(),
            new_database: new_database.to_string(),
        };
        self.context
            .guarded_request(msg::CHANGE_DATABASE, params, FailurePolicy::Fallback(false), |ok| ok)
            .await
    }

    pub async fn change_password(
        &self,
        owner_uri: &str,
        info: &ConnectionInfo,
        new_password: &str,
    ) -> ClientResult<PasswordChangeResult> {
        let params = ChangePasswordParams {
            owner_uri: owner_uri.to_string(),
            connection: info.clone(),
            new_password: new_password.to_string(),
        };
        self.context
            .guarded_request(msg::CHANGE_PASSWORD, params, FailurePolicy::Reject, |r| r)
            .await
    }

    pub async fn list_databases(&self, owner_uri: &str) -> ClientResult<Option<ListDatabasesResult>> {
        self.context
            .guarded_request(
                msg::LIST_DATABASES,
                OwnerUriParams::new(owner_uri),
                FailurePolicy::Fallback(None),
                Some,
            )
            .await
    }

    pub async fn get_connection_string(
        &self,
        owner_uri: &str,
        include_password: bool,
    ) -> ClientResult<Option<String>> {
        let params = GetConnectionStringParams {
            owner_uri: owner_uri.to_string(),
            include_password,
        };
        self.context
            .guarded_request(msg::GET_CONNECTION_STRING, params, FailurePolicy::Fallback(None), Some)
            .await
    }

    pub async fn build_connection_info(
        &self,
        connection_string: &str,
    ) -> ClientResult<Option<ConnectionInfo>> {
        self.context
            .guarded_request(
                msg::BUILD_CONNECTION_INFO,
                connection_string.to_string(),
                FailurePolicy::Fallback(None),
                Some,
            )
            .await
    }

    /// Ask the backend to rebuild its IntelliSense cache for `owner_uri`.
    /// Completion is reported through `register_on_intellisense_cache_complete`.
    pub fn rebuild_intellisense_cache(&self, owner_uri: &str) {
        self.context.notify(
            msg::REBUILD_INTELLISENSE,
            RebuildIntelliSenseParams {
                owner_uri: owner_uri.to_string(),
            },
        );
    }

    /// Forward a host language-flavor change to the backend.
    pub fn language_flavor_changed(&self, params: LanguageFlavorChangedParams) {
        self.context.notify(msg::LANGUAGE_FLAVOR_CHANGED, params);
    }

    pub fn register_on_connection_complete<F>(&self, listener: F) -> ListenerHandle
    where
        F: Fn(&ConnectionCompleteParams) + Send + Sync + 'static,
    {
        self.complete.subscribe(listener)
    }

    /// Listeners receive only the owner URI whose cache is ready.
    pub fn register_on_intellisense_cache_complete<F>(&self, listener: F) -> ListenerHandle
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        self.intellisense_ready
            .subscribe(move |params| listener(&params.owner_uri))
    }

    pub fn register_on_connection_changed<F>(&self, listener: F) -> ListenerHandle
    where
        F: Fn(&ChangedConnectionInfo) + Send + Sync + 'static,
    {
        self.changed
            .subscribe(move |params| listener(&ChangedConnectionInfo::from(params.clone())))
    }
}
