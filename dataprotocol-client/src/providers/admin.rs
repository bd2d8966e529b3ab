use std::sync::Arc;

use super::DataProvider;
use crate::client::context::{ClientContext, FailurePolicy};
use crate::error::ClientResult;
use crate::feature::FeatureScope;
use crate::protocol::messages::admin as msg;
use crate::types::{
    CreateDatabaseParams, CreateDatabaseResponse, CreateLoginParams, CreateLoginResponse,
    DatabaseInfo, LoginInfo, OwnerUriParams,
};

#[derive(Debug, Clone)]
pub struct AdminServicesProvider {
    context: Arc<ClientContext>,
}

pub(crate) fn build(scope: &FeatureScope<'_>) -> DataProvider {
    DataProvider::AdminServices(AdminServicesProvider {
        context: scope.context(),
    })
}

impl AdminServicesProvider {
    pub fn provider_id(&self) -> &str {
        self.context.provider_id()
    }

    pub async fn create_database(
        &self,
        owner_uri: &str,
        database_info: DatabaseInfo,
    ) -> ClientResult<Option<CreateDatabaseResponse>> {
        let params = CreateDatabaseParams {
            owner_uri: owner_uri.to_string(),
            database_info,
        };
        self.context
            .guarded_request(msg::CREATE_DATABASE, params, FailurePolicy::Fallback(None), Some)
            .await
    }

    pub async fn get_default_database_info(
        &self,
        owner_uri: &str,
    ) -> ClientResult<Option<DatabaseInfo>> {
        self.context
            .guarded_request(
                msg::DEFAULT_DATABASE_INFO,
                OwnerUriParams::new(owner_uri),
                FailurePolicy::Fallback(None),
                |r| Some(r.default_database_info),
            )
            .await
    }

    /// Unlike the other admin calls, a failure here is returned to the caller.
    pub async fn get_database_info(&self, owner_uri: &str) -> ClientResult<DatabaseInfo> {
        self.context
            .guarded_request(
                msg::GET_DATABASE_INFO,
                OwnerUriParams::new(owner_uri),
                FailurePolicy::Reject,
                |r| r.database_info,
            )
            .await
    }

    pub async fn create_login(
        &self,
        owner_uri: &str,
        login_info: LoginInfo,
    ) -> ClientResult<Option<CreateLoginResponse>> {
        let params = CreateLoginParams {
            owner_uri: owner_uri.to_string(),
            login_info,
        };
        self.context
            .guarded_request(msg::CREATE_LOGIN, params, FailurePolicy::Fallback(None), Some)
            .await
    }
}
