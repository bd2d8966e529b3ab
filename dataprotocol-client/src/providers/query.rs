//! Query execution, result paging and persistence, plus the edit-session
//! sub-protocol. Every operation here rejects on failure.

use std::sync::Arc;

use super::DataProvider;
use crate::client::context::{ClientContext, FailurePolicy};
use crate::error::{ClientError, ClientResult};
use crate::feature::{FeatureScope, ListenerHandle, NotificationChannel};
use crate::protocol::messages::query as msg;
use crate::protocol::RequestType;
use crate::types::{
    CopyResultsRequestParams, EditCellParams, EditCellResult, EditCreateRowResult,
    EditInitializeFiltering, EditInitializeParams, EditRowParams, EditSessionReadyParams,
    EditSubsetParams, EditSubsetResult, EditUpdateCellParams, ExecutionPlanOptions, OptionsMap,
    OwnerUriParams, QueryCancelResult, QueryExecuteBatchParams, QueryExecuteCompleteParams,
    QueryExecuteMessageParams, QueryExecuteParams, QueryExecuteResultSetParams,
    QueryExecuteStatementParams, QueryExecuteStringParams, QueryExecuteSubsetParams,
    QueryExecuteSubsetResult, QueryExecutionOptionsParams, SaveResultRequestResult,
    SaveResultsRequestParams, SelectionData, SimpleExecuteParams, SimpleExecuteResult,
    SyntaxParseParams, SyntaxParseResult,
};

type SaveRequest = RequestType<SaveResultsRequestParams, SaveResultRequestResult>;

/// Wire message for a save format. Formats are matched exactly.
pub fn save_results_request(result_format: &str) -> Option<SaveRequest> {
    match result_format {
        "csv" => Some(msg::SAVE_CSV),
        "json" => Some(msg::SAVE_JSON),
        "markdown" => Some(msg::SAVE_MARKDOWN),
        "excel" => Some(msg::SAVE_EXCEL),
        "xml" => Some(msg::SAVE_XML),
        _ => None,
    }
}

#[derive(Debug, Clone)]
pub struct QueryProvider {
    context: Arc<ClientContext>,
    complete: Arc<NotificationChannel<QueryExecuteCompleteParams>>,
    batch_start: Arc<NotificationChannel<QueryExecuteBatchParams>>,
    batch_complete: Arc<NotificationChannel<QueryExecuteBatchParams>>,
    result_set_available: Arc<NotificationChannel<QueryExecuteResultSetParams>>,
    result_set_updated: Arc<NotificationChannel<QueryExecuteResultSetParams>>,
    message: Arc<NotificationChannel<QueryExecuteMessageParams>>,
    edit_session_ready: Arc<NotificationChannel<EditSessionReadyParams>>,
}

pub(crate) fn build(scope: &FeatureScope<'_>) -> DataProvider {
    DataProvider::Query(QueryProvider {
        context: scope.context(),
        complete: scope.channel(msg::COMPLETE),
        batch_start: scope.channel(msg::BATCH_START),
        batch_complete: scope.channel(msg::BATCH_COMPLETE),
        result_set_available: scope.channel(msg::RESULT_SET_AVAILABLE),
        result_set_updated: scope.channel(msg::RESULT_SET_UPDATED),
        message: scope.channel(msg::MESSAGE),
        edit_session_ready: scope.channel(msg::EDIT_SESSION_READY),
    })
}

impl QueryProvider {
    pub fn provider_id(&self) -> &str {
        self.context.provider_id()
    }

    async fn run<P, R>(&self, ty: RequestType<P, R>, params: P) -> ClientResult<R>
    where
        P: serde::Serialize,
        R: serde::de::DeserializeOwned,
    {
        self.context
            .guarded_request(ty, params, FailurePolicy::Reject, |r| r)
            .await
    }

    pub async fn run_query(
        &self,
        owner_uri: &str,
        selection: SelectionData,
        plan_options: Option<&ExecutionPlanOptions>,
    ) -> ClientResult<()> {
        let params = QueryExecuteParams {
            owner_uri: owner_uri.to_string(),
            query_selection: selection,
            execution_plan_options: (self
                .context
                .converters()
                .host_to_wire
                .as_execution_plan_options)(plan_options),
        };
        self.run(msg::EXECUTE_DOCUMENT_SELECTION, params).await?;
        Ok(())
    }

    pub async fn cancel_query(&self, owner_uri: &str) -> ClientResult<QueryCancelResult> {
        self.run(msg::CANCEL, OwnerUriParams::new(owner_uri)).await
    }

    pub async fn run_query_statement(
        &self,
        owner_uri: &str,
        line: u32,
        column: Option<u32>,
    ) -> ClientResult<()> {
        let params = QueryExecuteStatementParams {
            owner_uri: owner_uri.to_string(),
            line,
            column,
        };
        self.run(msg::EXECUTE_DOCUMENT_STATEMENT, params).await?;
        Ok(())
    }

    pub async fn run_query_string(&self, owner_uri: &str, query: &str) -> ClientResult<()> {
        let params = QueryExecuteStringParams {
            owner_uri: owner_uri.to_string(),
            query: query.to_string(),
        };
        self.run(msg::EXECUTE_STRING, params).await?;
        Ok(())
    }

    /// Run `query_string` and return its rows in the response.
    pub async fn run_query_and_return(
        &self,
        owner_uri: &str,
        query_string: &str,
    ) -> ClientResult<SimpleExecuteResult> {
        let params = SimpleExecuteParams {
            owner_uri: owner_uri.to_string(),
            query_string: query_string.to_string(),
        };
        self.run(msg::SIMPLE_EXECUTE, params).await
    }

    pub async fn parse_syntax(&self, owner_uri: &str, query: &str) -> ClientResult<SyntaxParseResult> {
        let params = SyntaxParseParams {
            owner_uri: owner_uri.to_string(),
            query: query.to_string(),
        };
        self.run(msg::SYNTAX_PARSE, params).await
    }

    pub async fn get_query_rows(
        &self,
        params: QueryExecuteSubsetParams,
    ) -> ClientResult<QueryExecuteSubsetResult> {
        self.run(msg::SUBSET, params).await
    }

    pub async fn dispose_query(&self, owner_uri: &str) -> ClientResult<()> {
        self.run(msg::DISPOSE, OwnerUriParams::new(owner_uri)).await?;
        Ok(())
    }

    pub async fn set_query_execution_options(
        &self,
        owner_uri: &str,
        options: OptionsMap,
    ) -> ClientResult<()> {
        let params = QueryExecutionOptionsParams {
            owner_uri: owner_uri.to_string(),
            options,
        };
        self.run(msg::SET_EXECUTION_OPTIONS, params).await?;
        Ok(())
    }

    /// Save a result set in `params.result_format`. Unknown formats fail with
    /// `UnsupportedFormat` before anything is sent or logged.
    pub async fn save_results(
        &self,
        params: SaveResultsRequestParams,
    ) -> ClientResult<SaveResultRequestResult> {
        let Some(request) = save_results_request(&params.result_format) else {
            return Err(ClientError::UnsupportedFormat(params.result_format));
        };
        self.run(request, params).await
    }

    pub async fn copy_results(&self, params: CopyResultsRequestParams) -> ClientResult<()> {
        self.run(msg::COPY_RESULTS, params).await?;
        Ok(())
    }

    // Edit sessions

    pub async fn initialize_edit(
        &self,
        owner_uri: &str,
        schema_name: &str,
        object_name: &str,
        object_type: &str,
        row_limit: Option<u64>,
        query_string: Option<&str>,
    ) -> ClientResult<()> {
        let params = EditInitializeParams {
            owner_uri: owner_uri.to_string(),
            schema_name: schema_name.to_string(),
            object_name: object_name.to_string(),
            object_type: object_type.to_string(),
            filters: EditInitializeFiltering {
                limit_results: row_limit,
            },
            query_string: query_string.map(str::to_string),
        };
        self.run(msg::EDIT_INITIALIZE, params).await?;
        Ok(())
    }

    pub async fn commit_edit(&self, owner_uri: &str) -> ClientResult<()> {
        self.run(msg::EDIT_COMMIT, OwnerUriParams::new(owner_uri)).await?;
        Ok(())
    }

    pub async fn create_row(&self, owner_uri: &str) -> ClientResult<EditCreateRowResult> {
        self.run(msg::EDIT_CREATE_ROW, OwnerUriParams::new(owner_uri)).await
    }

    pub async fn delete_row(&self, owner_uri: &str, row_id: i64) -> ClientResult<()> {
        let params = EditRowParams {
            owner_uri: owner_uri.to_string(),
            row_id,
        };
        self.run(msg::EDIT_DELETE_ROW, params).await?;
        Ok(())
    }

    pub async fn dispose_edit(&self, owner_uri: &str) -> ClientResult<()> {
        self.run(msg::EDIT_DISPOSE, OwnerUriParams::new(owner_uri)).await?;
        Ok(())
    }

    pub async fn revert_cell(
        &self,
        owner_uri: &str,
        row_id: i64,
        column_id: i64,
    ) -> ClientResult<EditCellResult> {
        let params = EditCellParams {
            owner_uri: owner_uri.to_string(),
            row_id,
            column_id,
        };
        self.run(msg::EDIT_REVERT_CELL, params).await
    }

    pub async fn revert_row(&self, owner_uri: &str, row_id: i64) -> ClientResult<()> {
        let params = EditRowParams {
            owner_uri: owner_uri.to_string(),
            row_id,
        };
        self.run(msg::EDIT_REVERT_ROW, params).await?;
        Ok(())
    }

    pub async fn update_cell(
        &self,
        owner_uri: &str,
        row_id: i64,
        column_id: i64,
        new_value: &str,
    ) -> ClientResult<EditCellResult> {
        let params = EditUpdateCellParams {
            owner_uri: owner_uri.to_string(),
            row_id,
            column_id,
            new_value: new_value.to_string(),
        };
        self.run(msg::EDIT_UPDATE_CELL, params).await
    }

    pub async fn get_edit_rows(&self, params: EditSubsetParams) -> ClientResult<EditSubsetResult> {
        self.run(msg::EDIT_SUBSET, params).await
    }

    // Notifications

    pub fn register_on_query_complete<F>(&self, listener: F) -> ListenerHandle
    where
        F: Fn(&QueryExecuteCompleteParams) + Send + Sync + 'static,
    {
        self.complete.subscribe(listener)
    }

    pub fn register_on_batch_start<F>(&self, listener: F) -> ListenerHandle
    where
        F: Fn(&QueryExecuteBatchParams) + Send + Sync + 'static,
    {
        self.batch_start.subscribe(listener)
    }

    pub fn register_on_batch_complete<F>(&self, listener: F) -> ListenerHandle
    where
        F: Fn(&QueryExecuteBatchParams) + Send + Sync + 'static,
    {
        self.batch_complete.subscribe(listener)
    }

    pub fn register_on_result_set_available<F>(&self, listener: F) -> ListenerHandle
    where
        F: Fn(&QueryExecuteResultSetParams) + Send + Sync + 'static,
    {
        self.result_set_available.subscribe(listener)
    }

    pub fn register_on_result_set_updated<F>(&self, listener: F) -> ListenerHandle
    where
        F: Fn(&QueryExecuteResultSetParams) + Send + Sync + 'static,
    {
        self.result_set_updated.subscribe(listener)
    }

    pub fn register_on_message<F>(&self, listener: F) -> ListenerHandle
    where
        F: Fn(&QueryExecuteMessageParams) + Send + Sync + 'static,
    {
        self.message.subscribe(listener)
    }

    pub fn register_on_edit_session_ready<F>(&self, listener: F) -> ListenerHandle
    where
        F: Fn(&EditSessionReadyParams) + Send + Sync + 'static,
    {
        self.edit_session_ready.subscribe(listener)
    }
}
