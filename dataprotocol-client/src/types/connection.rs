use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::OptionsMap;

/// Connection details as supplied by the host: a flat option bag.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionInfo {
    #[serde(default)]
    pub options: OptionsMap,
}

impl ConnectionInfo {
    pub fn with_option(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.options.insert(name.into(), value.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectParams {
    pub owner_uri: String,
    pub connection: ConnectionInfo,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeDatabaseParams {
    pub owner_uri: String,
    pub new_database: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordParams {
    pub owner_uri: String,
    pub connection: ConnectionInfo,
    pub new_password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordChangeResult {
    pub result: bool,
    #[serde(default)]
    pub error_message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetConnectionStringParams {
    pub owner_uri: String,
    pub include_password: bool,
}

/// Databases on a server. Newer backends return `databases` with full details,
/// older ones only the flat `databaseNames` list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListDatabasesResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database_names: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub databases: Option<Vec<Value>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionSummary {
    pub server_name: String,
    #[serde(default)]
    pub database_name: Option<String>,
    #[serde(default)]
    pub user_name: Option<String>,
}

/// Result of an asynchronous connect, delivered as `connection/complete`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionCompleteParams {
    pub owner_uri: String,
    #[serde(default)]
    pub connection_id: Option<String>,
    #[serde(default)]
    pub messages: Option<String>,
    #[serde(default)]
    pub error_message: Option<String>,
    #[serde(default)]
    pub error_number: Option<i64>,
    #[serde(default)]
    pub server_info: Option<Value>,
    #[serde(default)]
    pub connection_summary: Option<ConnectionSummary>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionChangedParams {
    pub owner_uri: String,
    pub connection: ConnectionSummary,
}

/// Host-facing view of `connection/connectionchanged`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangedConnectionInfo {
    pub connection_uri: String,
    pub connection: ConnectionSummary,
}

impl From<ConnectionChangedParams> for ChangedConnectionInfo {
    fn from(params: ConnectionChangedParams) -> Self {
        Self {
            connection_uri: params.owner_uri,
            connection: params.connection,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntelliSenseReadyParams {
    pub owner_uri: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RebuildIntelliSenseParams {
    pub owner_uri: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageFlavorChangedParams {
    pub uri: String,
    pub language: String,
    pub flavor: String,
}
