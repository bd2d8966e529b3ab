use std::sync::Arc;

use super::DataProvider;
use crate::client::context::{ClientContext, FailurePolicy};
use crate::error::ClientResult;
use crate::feature::FeatureScope;
use crate::protocol::messages::backup as msg;
use crate::types::{
    BackupConfigInfo, BackupParams, BackupResponse, OptionsMap, OwnerUriParams, TaskExecutionMode,
};

#[derive(Debug, Clone)]
pub struct BackupProvider {
    context: Arc<ClientContext>,
}

pub(crate) fn build(scope: &FeatureScope<'_>) -> DataProvider {
    DataProvider::Backup(BackupProvider {
        context: scope.context(),
    })
}

impl BackupProvider {
    pub fn provider_id(&self) -> &str {
        self.context.provider_id()
    }

    pub async fn backup(
        &self,
        owner_uri: &str,
        backup_info: OptionsMap,
        task_execution_mode: TaskExecutionMode,
    ) -> ClientResult<BackupResponse> {
        let params = BackupParams {
            owner_uri: owner_uri.to_string(),
            backup_info,
            task_execution_mode,
        };
        self.context
            .guarded_request(msg::BACKUP, params, FailurePolicy::Reject, |r| r)
            .await
    }

    pub async fn get_backup_config_info(
        &self,
        owner_uri: &str,
    ) -> ClientResult<Option<BackupConfigInfo>> {
        self.context
            .guarded_request(
                msg::CONFIG_INFO,
                OwnerUriParams::new(owner_uri),
                FailurePolicy::Fallback(None),
                |r| Some(r.backup_config_info),
            )
            .await
    }
}
