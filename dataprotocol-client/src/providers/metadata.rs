use std::sync::Arc;

use super::DataProvider;
use crate::client::context::{ClientContext, FailurePolicy};
use crate::error::ClientResult;
use crate::feature::FeatureScope;
use crate::protocol::messages::metadata as msg;
use crate::protocol::RequestType;
use crate::types::{
    ColumnMetadata, DatabaseListing, ListDatabasesResult, ObjectMetadata, OwnerUriParams,
    ProviderMetadata, TableMetadataParams, TableMetadataResult,
};

#[derive(Debug, Clone)]
pub struct MetadataProvider {
    context: Arc<ClientContext>,
}

pub(crate) fn build(scope: &FeatureScope<'_>) -> DataProvider {
    DataProvider::Metadata(MetadataProvider {
        context: scope.context(),
    })
}

/// Prefer plain names; fall back to the detailed entries.
fn database_listing(result: ListDatabasesResult) -> Option<DatabaseListing> {
    match result {
        ListDatabasesResult {
            database_names: Some(names),
            ..
        } => Some(DatabaseListing::Names(names)),
        ListDatabasesResult {
            databases: Some(details),
            ..
        } => Some(DatabaseListing::Detailed(details)),
        _ => None,
    }
}

impl MetadataProvider {
    pub fn provider_id(&self) -> &str {
        self.context.provider_id()
    }

    pub async fn get_metadata(&self, owner_uri: &str) -> ClientResult<Option<ProviderMetadata>> {
        let convert = self.context.converters().wire_to_host.as_provider_metadata;
        self.context
            .guarded_request(
                msg::LIST,
                OwnerUriParams::new(owner_uri),
                FailurePolicy::Fallback(None),
                |result| Some(convert(result)),
            )
            .await
    }

    pub async fn get_databases(&self, owner_uri: &str) -> ClientResult<Option<DatabaseListing>> {
        self.context
            .guarded_request(
                msg::LIST_DATABASES,
                OwnerUriParams::new(owner_uri),
                FailurePolicy::Fallback(None),
                database_listing,
            )
            .await
    }

    pub async fn get_table_info(
        &self,
        owner_uri: &str,
        metadata: &ObjectMetadata,
    ) -> ClientResult<Option<Vec<ColumnMetadata>>> {
        self.columns(msg::TABLE, owner_uri, metadata).await
    }

    pub async fn get_view_info(
        &self,
        owner_uri: &str,
        metadata: &ObjectMetadata,
    ) -> ClientResult<Option<Vec<ColumnMetadata>>> {
        self.columns(msg::VIEW, owner_uri, metadata).await
    }

    async fn columns(
        &self,
        ty: RequestType<TableMetadataParams, TableMetadataResult>,
        owner_uri: &str,
        metadata: &ObjectMetadata,
    ) -> ClientResult<Option<Vec<ColumnMetadata>>> {
        let params = TableMetadataParams {
            owner_uri: owner_uri.to_string(),
            schema: metadata.schema.clone().unwrap_or_default(),
            object_name: metadata.name.clone(),
        };
        self.context
            .guarded_request(ty, params, FailurePolicy::Fallback(None), |r| Some(r.columns))
            .await
    }
}
