use serde::{Deserialize, Serialize};

use super::ConnectionInfo;

/// Requested script flavour. Travels as an integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum ScriptOperation {
    Select,
    Create,
    Insert,
    Update,
    Delete,
    Execute,
    Alter,
}

impl TryFrom<u8> for ScriptOperation {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Ok(match value {
            0 => ScriptOperation::Select,
            1 => ScriptOperation::Create,
            2 => ScriptOperation::Insert,
            3 => ScriptOperation::Update,
            4 => ScriptOperation::Delete,
            5 => ScriptOperation::Execute,
            6 => ScriptOperation::Alter,
            other => return Err(format!("unknown script operation {other}")),
        })
    }
}

impl From<ScriptOperation> for u8 {
    fn from(value: ScriptOperation) -> Self {
        match value {
            ScriptOperation::Select => 0,
            ScriptOperation::Create => 1,
            ScriptOperation::Insert => 2,
            ScriptOperation::Update => 3,
            ScriptOperation::Delete => 4,
            ScriptOperation::Execute => 5,
            ScriptOperation::Alter => 6,
        }
    }
}

/// Host-supplied scripting target and overrides.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScriptingParamDetails {
    pub file_path: String,
    #[serde(default)]
    pub script_compatibility_option: Option<String>,
    #[serde(default)]
    pub target_database_engine_edition: Option<String>,
    #[serde(default)]
    pub target_database_engine_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScriptingObject {
    #[serde(rename = "type")]
    pub object_type: String,
    #[serde(default)]
    pub schema: Option<String>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_type_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScriptOptions {
    pub script_create_drop: String,
    pub type_of_data_to_script: String,
    pub script_statistics: String,
    pub target_database_engine_edition: String,
    pub target_database_engine_type: String,
    pub script_compatibility_option: String,
}

/// Wire payload of `scripting/script`.
///
/// The criteria lists, connection string, connection details and select flag
/// are sent as explicit `null` when unset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScriptingParams {
    pub file_path: String,
    pub script_destination: String,
    pub connection_string: Option<String>,
    pub scripting_objects: Vec<ScriptingObject>,
    pub include_object_criteria: Option<Vec<ScriptingObject>>,
    pub exclude_object_criteria: Option<Vec<ScriptingObject>>,
    pub include_schemas: Option<Vec<String>>,
    pub exclude_schemas: Option<Vec<String>>,
    pub include_types: Option<Vec<String>>,
    pub exclude_types: Option<Vec<String>>,
    pub script_options: ScriptOptions,
    pub connection_details: Option<ConnectionInfo>,
    #[serde(rename = "ownerURI")]
    pub owner_uri: String,
    pub select_script: Option<bool>,
    pub operation: ScriptOperation,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScriptingResult {
    pub operation_id: String,
    #[serde(default)]
    pub script: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScriptingCompleteParams {
    pub operation_id: String,
    #[serde(default)]
    pub error_details: Option<String>,
    #[serde(default)]
    pub error_message: Option<String>,
    #[serde(default)]
    pub has_error: bool,
    #[serde(default)]
    pub canceled: bool,
    #[serde(default)]
    pub success: bool,
}
