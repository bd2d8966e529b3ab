use std::sync::Arc;

use super::DataProvider;
use crate::client::context::{ClientContext, FailurePolicy};
use crate::error::ClientResult;
use crate::feature::FeatureScope;
use crate::protocol::messages::restore as msg;
use crate::types::{
    OptionsMap, OwnerUriParams, RestoreInfo, RestoreParams, RestorePlanResponse, RestoreResponse,
};

#[derive(Debug, Clone)]
pub struct RestoreProvider {
    context: Arc<ClientContext>,
}

pub(crate) fn build(scope: &FeatureScope<'_>) -> DataProvider {
    DataProvider::Restore(RestoreProvider {
        context: scope.context(),
    })
}

impl RestoreProvider {
    pub fn provider_id(&self) -> &str {
        self.context.provider_id()
    }

    pub async fn restore(&self, owner_uri: &str, info: RestoreInfo) -> ClientResult<RestoreResponse> {
        self.context
            .guarded_request(
                msg::RESTORE,
                RestoreParams::new(owner_uri, info),
                FailurePolicy::Reject,
                |r| r,
            )
            .await
    }

    pub async fn get_restore_plan(
        &self,
        owner_uri: &str,
        info: RestoreInfo,
    ) -> ClientResult<Option<RestorePlanResponse>> {
        self.context
            .guarded_request(
                msg::PLAN,
                RestoreParams::new(owner_uri, info),
                FailurePolicy::Fallback(None),
                Some,
            )
            .await
    }

    pub async fn cancel_restore_plan(
        &self,
        owner_uri: &str,
        info: RestoreInfo,
    ) -> ClientResult<Option<bool>> {
        self.context
            .guarded_request(
                msg::CANCEL_PLAN,
                RestoreParams::new(owner_uri, info),
                FailurePolicy::Fallback(None),
                Some,
            )
            .await
    }

    pub async fn get_restore_config_info(&self, owner_uri: &str) -> ClientResult<Option<OptionsMap>> {
        self.context
            .guarded_request(
                msg::CONFIG_INFO,
                OwnerUriParams::new(owner_uri),
                FailurePolicy::Fallback(None),
                |r| Some(r.config_info),
            )
            .await
    }
}
