use std::sync::Arc;

use super::DataProvider;
use crate::client::context::{ClientContext, FailurePolicy};
use crate::error::ClientResult;
use crate::feature::FeatureScope;
use crate::protocol::messages::capabilities as msg;
use crate::types::{ClientCapabilitiesParams, ServerCapabilities};

#[derive(Debug, Clone)]
pub struct CapabilitiesProvider {
    context: Arc<ClientContext>,
}

pub(crate) fn build(scope: &FeatureScope<'_>) -> DataProvider {
    DataProvider::Capabilities(CapabilitiesProvider {
        context: scope.context(),
    })
}

impl CapabilitiesProvider {
    pub fn provider_id(&self) -> &str {
        self.context.provider_id()
    }

    /// Discover what the backend supports. A failed discovery yields `None`.
    pub async fn get_server_capabilities(
        &self,
        client: ClientCapabilitiesParams,
    ) -> ClientResult<Option<ServerCapabilities>> {
        let convert = self.context.converters().wire_to_host.as_server_capabilities;
        self.context
            .guarded_request(msg::LIST, client, FailurePolicy::Fallback(None), |result| {
                Some(convert(result))
            })
            .await
    }
}
