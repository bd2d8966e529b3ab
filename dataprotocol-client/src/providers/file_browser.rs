use std::sync::Arc;

use super::DataProvider;
use crate::client::context::{ClientContext, FailurePolicy};
use crate::error::ClientResult;
use crate::feature::{FeatureScope, ListenerHandle, NotificationChannel};
use crate::protocol::messages::file_browser as msg;
use crate::types::{
    FileBrowserCloseResponse, FileBrowserExpandParams, FileBrowserExpandedParams,
    FileBrowserOpenParams, FileBrowserOpenedParams, FileBrowserValidateParams,
    FileBrowserValidatedParams, OwnerUriParams,
};

#[derive(Debug, Clone)]
pub struct FileBrowserProvider {
    context: Arc<ClientContext>,
    opened: Arc<NotificationChannel<FileBrowserOpenedParams>>,
    expanded: Arc<NotificationChannel<FileBrowserExpandedParams>>,
    validated: Arc<NotificationChannel<FileBrowserValidatedParams>>,
}

pub(crate) fn build(scope: &FeatureScope<'_>) -> DataProvider {
    DataProvider::FileBrowser(FileBrowserProvider {
        context: scope.context(),
        opened: scope.channel(msg::OPENED),
        expanded: scope.channel(msg::EXPANDED),
        validated: scope.channel(msg::VALIDATED),
    })
}

impl FileBrowserProvider {
    pub fn provider_id(&self) -> &str {
        self.context.provider_id()
    }

    /// Request a file tree rooted at `expand_path`; the tree itself arrives
    /// through `register_on_file_browser_opened`.
    pub async fn open_file_browser(
        &self,
        owner_uri: &str,
        expand_path: &str,
        file_filters: Vec<String>,
        change_filter: bool,
    ) -> ClientResult<Option<bool>> {
        let params = FileBrowserOpenParams {
            owner_uri: owner_uri.to_string(),
            expand_path: expand_path.to_string(),
            file_filters,
            change_filter,
            show_folders_only: None,
        };
        self.context
            .guarded_request(msg::OPEN, params, FailurePolicy::Fallback(None), Some)
            .await
    }

    pub async fn expand_folder_node(
        &self,
        owner_uri: &str,
        expand_path: &str,
    ) -> ClientResult<Option<bool>> {
        let params = FileBrowserExpandParams {
            owner_uri: owner_uri.to_string(),
            expand_path: expand_path.to_string(),
        };
        self.context
            .guarded_request(msg::EXPAND, params, FailurePolicy::Fallback(None), Some)
            .await
    }

    pub async fn validate_file_paths(
        &self,
        owner_uri: &str,
        service_type: &str,
        selected_files: Vec<String>,
    ) -> ClientResult<Option<bool>> {
        let params = FileBrowserValidateParams {
            owner_uri: owner_uri.to_string(),
            service_type: service_type.to_string(),
            selected_files,
        };
        self.context
            .guarded_request(msg::VALIDATE, params, FailurePolicy::Fallback(None), Some)
            .await
    }

    pub async fn close_file_browser(
        &self,
        owner_uri: &str,
    ) -> ClientResult<Option<FileBrowserCloseResponse>> {
        self.context
            .guarded_request(
                msg::CLOSE,
                OwnerUriParams::new(owner_uri),
                FailurePolicy::Fallback(None),
                Some,
            )
            .await
    }

    pub fn register_on_file_browser_opened<F>(&self, listener: F) -> ListenerHandle
    where
        F: Fn(&FileBrowserOpenedParams) + Send + Sync + 'static,
    {
        self.opened.subscribe(listener)
    }

    pub fn register_on_folder_node_expanded<F>(&self, listener: F) -> ListenerHandle
    where
        F: Fn(&FileBrowserExpandedParams) + Send + Sync + 'static,
    {
        self.expanded.subscribe(listener)
    }

    pub fn register_on_file_paths_validated<F>(&self, listener: F) -> ListenerHandle
    where
        F: Fn(&FileBrowserValidatedParams) + Send + Sync + 'static,
    {
        self.validated.subscribe(listener)
    }
}
