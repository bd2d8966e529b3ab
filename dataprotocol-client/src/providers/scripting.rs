use std::sync::Arc;

use super::DataProvider;
use crate::client::context::{ClientContext, FailurePolicy};
use crate::error::ClientResult;
use crate::feature::{FeatureScope, ListenerHandle, NotificationChannel};
use crate::protocol::messages::scripting as msg;
use crate::types::{
    ObjectMetadata, ScriptOperation, ScriptingCompleteParams, ScriptingParamDetails,
    ScriptingResult,
};

#[derive(Debug, Clone)]
pub struct ScriptingProvider {
    context: Arc<ClientContext>,
    complete: Arc<NotificationChannel<ScriptingCompleteParams>>,
}

pub(crate) fn build(scope: &FeatureScope<'_>) -> DataProvider {
    DataProvider::Scripting(ScriptingProvider {
        context: scope.context(),
        complete: scope.channel(msg::COMPLETE),
    })
}

impl ScriptingProvider {
    pub fn provider_id(&self) -> &str {
        self.context.provider_id()
    }

    pub async fn script_as_operation(
        &self,
        owner_uri: &str,
        operation: ScriptOperation,
        metadata: &ObjectMetadata,
        details: &ScriptingParamDetails,
    ) -> ClientResult<Option<ScriptingResult>> {
        let params = (self.context.converters().host_to_wire.as_scripting_params)(
            owner_uri, operation, metadata, details,
        );
        self.context
            .guarded_request(msg::SCRIPT, params, FailurePolicy::Fallback(None), Some)
            .await
    }

    pub fn register_on_scripting_complete<F>(&self, listener: F) -> ListenerHandle
    where
        F: Fn(&ScriptingCompleteParams) + Send + Sync + 'static,
    {
        self.complete.subscribe(listener)
    }
}
