//! Capability discovery shapes.
//!
//! The `Wire*` types mirror the backend's `capabilities/list` response, where
//! enums travel as free-form strings. The host types carry parsed enums and
//! resolved display names.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Identity of the host, sent with `capabilities/list`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientCapabilitiesParams {
    pub host_name: String,
    pub host_version: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryValue {
    #[serde(default)]
    pub display_name: Option<String>,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireServiceOption {
    pub name: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub group_name: Option<String>,
    #[serde(default)]
    pub value_type: Option<String>,
    #[serde(default)]
    pub default_value: Option<Value>,
    #[serde(default)]
    pub object_type: Option<String>,
    #[serde(default)]
    pub category_values: Option<Vec<CategoryValue>>,
    #[serde(default)]
    pub is_required: Option<bool>,
    #[serde(default)]
    pub is_array: Option<bool>,
    #[serde(default)]
    pub is_identity: Option<bool>,
    #[serde(default)]
    pub special_value_type: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireConnectionProviderOptions {
    #[serde(default)]
    pub options: Option<Vec<WireServiceOption>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireAdminServicesOptions {
    #[serde(default)]
    pub database_info_options: Option<Vec<WireServiceOption>>,
    #[serde(default)]
    pub database_file_info_options: Option<Vec<WireServiceOption>>,
    #[serde(default)]
    pub file_group_info_options: Option<Vec<WireServiceOption>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireFeatureMetadata {
    #[serde(default)]
    pub enabled: bool,
    pub feature_name: String,
    #[serde(default)]
    pub options_metadata: Option<Vec<WireServiceOption>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireServerCapabilities {
    #[serde(default)]
    pub protocol_version: String,
    #[serde(default)]
    pub provider_name: String,
    #[serde(default)]
    pub provider_display_name: String,
    #[serde(default)]
    pub connection_provider: Option<WireConnectionProviderOptions>,
    #[serde(default)]
    pub admin_services_provider: Option<WireAdminServicesOptions>,
    #[serde(default)]
    pub features: Option<Vec<WireFeatureMetadata>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CapabilitiesDiscoveryResult {
    pub capabilities: WireServerCapabilities,
}

/// Value type of a service option. Unknown wire strings parse as `String`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceOptionType {
    #[default]
    String,
    Multistring,
    Password,
    Number,
    Boolean,
    Category,
    Object,
}

impl ServiceOptionType {
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("multistring") => ServiceOptionType::Multistring,
            Some("password") => ServiceOptionType::Password,
            Some("number") => ServiceOptionType::Number,
            Some("boolean") => ServiceOptionType::Boolean,
            Some("category") => ServiceOptionType::Category,
            Some("object") => ServiceOptionType::Object,
            _ => ServiceOptionType::String,
        }
    }
}

/// Well-known role of a connection option. Unknown wire strings yield `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ConnectionOptionSpecialType {
    ServerName,
    DatabaseName,
    AuthType,
    UserName,
    Password,
    AppName,
}

impl ConnectionOptionSpecialType {
    pub fn parse(value: Option<&str>) -> Option<Self> {
        match value? {
            "serverName" => Some(ConnectionOptionSpecialType::ServerName),
            "databaseName" => Some(ConnectionOptionSpecialType::DatabaseName),
            "authType" => Some(ConnectionOptionSpecialType::AuthType),
            "userName" => Some(ConnectionOptionSpecialType::UserName),
            "password" => Some(ConnectionOptionSpecialType::Password),
            "appName" => Some(ConnectionOptionSpecialType::AppName),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceOption {
    pub name: String,
    pub display_name: String,
    pub description: Option<String>,
    pub group_name: Option<String>,
    pub default_value: Option<Value>,
    pub category_values: Option<Vec<CategoryValue>>,
    pub is_required: Option<bool>,
    pub is_array: Option<bool>,
    pub object_type: Option<String>,
    pub value_type: ServiceOptionType,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionOption {
    pub name: String,
    pub display_name: String,
    pub description: Option<String>,
    pub group_name: Option<String>,
    pub default_value: Option<Value>,
    pub category_values: Option<Vec<CategoryValue>>,
    pub is_identity: Option<bool>,
    pub is_required: Option<bool>,
    pub value_type: ServiceOptionType,
    pub special_value_type: Option<ConnectionOptionSpecialType>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionProviderOptions {
    pub options: Vec<ConnectionOption>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminServicesOptions {
    pub database_info_options: Vec<ServiceOption>,
    pub database_file_info_options: Vec<ServiceOption>,
    pub file_group_info_options: Vec<ServiceOption>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureMetadataProvider {
    pub enabled: bool,
    pub feature_name: String,
    pub options_metadata: Vec<ServiceOption>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerCapabilities {
    pub protocol_version: String,
    pub provider_name: String,
    pub provider_display_name: String,
    pub connection_provider: Option<ConnectionProviderOptions>,
    pub admin_services_provider: Option<AdminServicesOptions>,
    pub features: Vec<FeatureMetadataProvider>,
}
