//! Backup and restore shapes. Backup info and restore options are open
//! property bags whose keys are defined by the backend.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::OptionsMap;

/// How a long-running task is run. Travels as an integer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum TaskExecutionMode {
    #[default]
    Execute,
    Script,
    ExecuteAndScript,
}

impl TryFrom<u8> for TaskExecutionMode {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(TaskExecutionMode::Execute),
            1 => Ok(TaskExecutionMode::Script),
            2 => Ok(TaskExecutionMode::ExecuteAndScript),
            other => Err(format!("unknown task execution mode {other}")),
        }
    }
}

impl From<TaskExecutionMode> for u8 {
    fn from(value: TaskExecutionMode) -> Self {
        match value {
            TaskExecutionMode::Execute => 0,
            TaskExecutionMode::Script => 1,
            TaskExecutionMode::ExecuteAndScript => 2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackupParams {
    pub owner_uri: String,
    pub backup_info: OptionsMap,
    pub task_execution_mode: TaskExecutionMode,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackupResponse {
    pub result: bool,
    #[serde(default)]
    pub task_id: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackupConfigInfo {
    #[serde(default)]
    pub recovery_model: Option<String>,
    #[serde(default)]
    pub default_backup_folder: Option<String>,
    #[serde(default)]
    pub backup_encryptors: Vec<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackupConfigInfoResponse {
    pub backup_config_info: BackupConfigInfo,
}

/// Host-side restore request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestoreInfo {
    #[serde(default)]
    pub options: OptionsMap,
    #[serde(default)]
    pub task_execution_mode: TaskExecutionMode,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestoreParams {
    pub owner_uri: String,
    pub options: OptionsMap,
    pub task_execution_mode: TaskExecutionMode,
}

impl RestoreParams {
    pub fn new(owner_uri: impl Into<String>, info: RestoreInfo) -> Self {
        Self {
            owner_uri: owner_uri.into(),
            options: info.options,
            task_execution_mode: info.task_execution_mode,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestoreResponse {
    pub result: bool,
    #[serde(default)]
    pub task_id: Option<String>,
    #[serde(default)]
    pub error_message: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestorePlanResponse {
    #[serde(default)]
    pub session_id: Option<String>,
    #[serde(default)]
    pub backup_sets_to_restore: Vec<Value>,
    #[serde(default)]
    pub can_restore: bool,
    #[serde(default)]
    pub error_message: Option<String>,
    #[serde(default)]
    pub db_files: Vec<Value>,
    #[serde(default)]
    pub database_names_from_backup_sets: Vec<String>,
    #[serde(default)]
    pub plan_details: OptionsMap,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestoreConfigInfoResponse {
    #[serde(default)]
    pub config_info: OptionsMap,
}
