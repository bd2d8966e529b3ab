use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::OptionsMap;

/// Kind of a database object as reported by the metadata service.
///
/// Travels as an integer. Kinds this crate does not know are kept in `Other`
/// so they survive a round trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "i32", into = "i32")]
pub enum MetadataType {
    Table,
    View,
    SProc,
    Function,
    Other(i32),
}

impl From<i32> for MetadataType {
    fn from(value: i32) -> Self {
        match value {
            0 => MetadataType::Table,
            1 => MetadataType::View,
            2 => MetadataType::SProc,
            3 => MetadataType::Function,
            other => MetadataType::Other(other),
        }
    }
}

impl From<MetadataType> for i32 {
    fn from(value: MetadataType) -> Self {
        match value {
            MetadataType::Table => 0,
            MetadataType::View => 1,
            MetadataType::SProc => 2,
            MetadataType::Function => 3,
            MetadataType::Other(other) => other,
        }
    }
}

/// Object entry exactly as the backend sends it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireObjectMetadata {
    pub metadata_type: MetadataType,
    #[serde(default)]
    pub metadata_type_name: Option<String>,
    #[serde(default)]
    pub urn: Option<String>,
    pub name: String,
    #[serde(default)]
    pub schema: Option<String>,
    #[serde(default)]
    pub parent_name: Option<String>,
    #[serde(default)]
    pub parent_type_name: Option<String>,
}

/// Object entry handed to the host, with a resolved type name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectMetadata {
    pub metadata_type: MetadataType,
    pub metadata_type_name: String,
    #[serde(default)]
    pub urn: Option<String>,
    pub name: String,
    #[serde(default)]
    pub schema: Option<String>,
    #[serde(default)]
    pub parent_name: Option<String>,
    #[serde(default)]
    pub parent_type_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetadataQueryResult {
    #[serde(default)]
    pub metadata: Option<Vec<WireObjectMetadata>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderMetadata {
    pub object_metadata: Vec<ObjectMetadata>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableMetadataParams {
    pub owner_uri: String,
    pub schema: String,
    pub object_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnMetadata {
    #[serde(default)]
    pub escaped_name: Option<String>,
    #[serde(default)]
    pub ordinal: Option<i64>,
    #[serde(default)]
    pub data_type_name: Option<String>,
    #[serde(default)]
    pub default_value: Option<String>,
    #[serde(default)]
    pub is_key: bool,
    #[serde(default)]
    pub is_identity: bool,
    #[serde(default)]
    pub is_computed: bool,
    /// Remaining backend-specific column attributes.
    #[serde(flatten)]
    pub extra: OptionsMap,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableMetadataResult {
    #[serde(default)]
    pub columns: Vec<ColumnMetadata>,
}

/// Databases on a server as returned to the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DatabaseListing {
    Names(Vec<String>),
    Detailed(Vec<Value>),
}
