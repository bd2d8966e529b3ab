use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::OptionsMap;

/// A text range inside a query document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionData {
    pub start_line: u32,
    pub start_column: u32,
    pub end_line: u32,
    pub end_column: u32,
}

/// Host-side plan display flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionPlanOptions {
    #[serde(default)]
    pub display_estimated_query_plan: Option<bool>,
    #[serde(default)]
    pub display_actual_query_plan: Option<bool>,
}

/// Wire-side plan flags. Absent flags are omitted, not sent as `false`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionPlanFlags {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_estimated_execution_plan_xml: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_actual_execution_plan_xml: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryExecuteParams {
    pub owner_uri: String,
    pub query_selection: SelectionData,
    pub execution_plan_options: ExecutionPlanFlags,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryExecuteStatementParams {
    pub owner_uri: String,
    pub line: u32,
    #[serde(default)]
    pub column: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryExecuteStringParams {
    pub owner_uri: String,
    pub query: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimpleExecuteParams {
    pub owner_uri: String,
    pub query_string: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DbCellValue {
    pub display_value: String,
    pub is_null: bool,
    #[serde(default)]
    pub invariant_culture_display_value: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimpleExecuteResult {
    pub row_count: i64,
    #[serde(default)]
    pub column_info: Vec<Value>,
    #[serde(default)]
    pub rows: Vec<Vec<DbCellValue>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyntaxParseParams {
    pub owner_uri: String,
    pub query: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyntaxParseResult {
    pub parseable: bool,
    #[serde(default)]
    pub errors: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryCancelResult {
    #[serde(default)]
    pub messages: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryExecuteSubsetParams {
    pub owner_uri: String,
    pub batch_index: u32,
    pub result_set_index: u32,
    pub rows_start_index: u64,
    pub rows_count: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultSetSubset {
    pub row_count: u64,
    #[serde(default)]
    pub rows: Vec<Vec<DbCellValue>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryExecuteSubsetResult {
    #[serde(default)]
    pub message: Option<String>,
    pub result_subset: ResultSetSubset,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryExecutionOptionsParams {
    pub owner_uri: String,
    pub options: OptionsMap,
}

/// Save request for one result set. `result_format` selects the wire message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveResultsRequestParams {
    pub result_format: String,
    pub owner_uri: String,
    pub file_path: String,
    pub batch_index: u32,
    pub result_set_index: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub row_start_index: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub row_end_index: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column_start_index: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column_end_index: Option<u64>,
    /// Format-specific settings (delimiter, encoding, headers...).
    #[serde(flatten)]
    pub format_options: OptionsMap,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveResultRequestResult {
    #[serde(default)]
    pub messages: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionRange {
    pub from_row: u64,
    pub to_row: u64,
    pub from_column: u64,
    pub to_column: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CopyResultsRequestParams {
    pub owner_uri: String,
    pub batch_index: u32,
    pub result_set_index: u32,
    pub include_headers: bool,
    pub selections: Vec<SelectionRange>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryExecuteCompleteParams {
    pub owner_uri: String,
    #[serde(default)]
    pub batch_summaries: Vec<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryExecuteBatchParams {
    pub owner_uri: String,
    pub batch_summary: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryExecuteResultSetParams {
    pub owner_uri: String,
    pub result_set_summary: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryExecuteMessageParams {
    pub owner_uri: String,
    pub message: Value,
}

// Edit sessions

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditCreateRowResult {
    #[serde(default)]
    pub default_values: Vec<Option<String>>,
    pub new_row_id: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditRowParams {
    pub owner_uri: String,
    pub row_id: i64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditInitializeFiltering {
    #[serde(rename = "LimitResults", default)]
    pub limit_results: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditInitializeParams {
    pub owner_uri: String,
    pub schema_name: String,
    pub object_name: String,
    pub object_type: String,
    pub filters: EditInitializeFiltering,
    #[serde(default)]
    pub query_string: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditCellParams {
    pub owner_uri: String,
    pub row_id: i64,
    pub column_id: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditUpdateCellParams {
    pub owner_uri: String,
    pub row_id: i64,
    pub column_id: i64,
    pub new_value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditCell {
    pub display_value: String,
    pub is_null: bool,
    pub is_dirty: bool,
}

/// Shared result of revert-cell and update-cell.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditCellResult {
    pub cell: EditCell,
    pub is_row_dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditSubsetParams {
    pub owner_uri: String,
    pub row_start_index: u64,
    pub row_count: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditRow {
    #[serde(default)]
    pub cells: Vec<EditCell>,
    pub id: i64,
    #[serde(default)]
    pub is_dirty: bool,
    #[serde(default)]
    pub state: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditSubsetResult {
    pub row_count: u64,
    #[serde(default)]
    pub subset: Vec<EditRow>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditSessionReadyParams {
    pub owner_uri: String,
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}
