use std::sync::Arc;

use super::DataProvider;
use crate::client::context::{ClientContext, FailurePolicy};
use crate::error::ClientResult;
use crate::feature::{FeatureScope, ListenerHandle, NotificationChannel};
use crate::protocol::messages::tasks as msg;
use crate::types::{CancelTaskParams, ListTasksParams, ListTasksResponse, TaskInfo, TaskProgressInfo};

#[derive(Debug, Clone)]
pub struct TaskServicesProvider {
    context: Arc<ClientContext>,
    created: Arc<NotificationChannel<TaskInfo>>,
    status_changed: Arc<NotificationChannel<TaskProgressInfo>>,
}

pub(crate) fn build(scope: &FeatureScope<'_>) -> DataProvider {
    DataProvider::TaskServices(TaskServicesProvider {
        context: scope.context(),
        created: scope.channel(msg::CREATED),
        status_changed: scope.channel(msg::STATUS_CHANGED),
    })
}

impl TaskServicesProvider {
    pub fn provider_id(&self) -> &str {
        self.context.provider_id()
    }

    pub async fn get_all_tasks(
        &self,
        list_active_tasks_only: bool,
    ) -> ClientResult<Option<ListTasksResponse>> {
        self.context
            .guarded_request(
                msg::LIST,
                ListTasksParams {
                    list_active_tasks_only,
                },
                FailurePolicy::Fallback(None),
                Some,
            )
            .await
    }

    pub async fn cancel_task(&self, task_id: &str) -> ClientResult<Option<bool>> {
        self.context
            .guarded_request(
                msg::CANCEL,
                CancelTaskParams {
                    task_id: task_id.to_string(),
                },
                FailurePolicy::Fallback(None),
                Some,
            )
            .await
    }

    pub fn register_on_task_created<F>(&self, listener: F) -> ListenerHandle
    where
        F: Fn(&TaskInfo) + Send + Sync + 'static,
    {
        self.created.subscribe(listener)
    }

    pub fn register_on_task_status_changed<F>(&self, listener: F) -> ListenerHandle
    where
        F: Fn(&TaskProgressInfo) + Send + Sync + 'static,
    {
        self.status_changed.subscribe(listener)
    }
}
