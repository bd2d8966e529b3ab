use serde::{Deserialize, Serialize};

use super::OptionsMap;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfilerSessionTemplate {
    pub name: String,
    #[serde(default)]
    pub default_view: Option<String>,
    pub create_statement: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateXEventSessionParams {
    pub owner_uri: String,
    pub session_name: String,
    pub template: ProfilerSessionTemplate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartProfilingParams {
    pub owner_uri: String,
    pub session_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetXEventSessionsResponse {
    #[serde(default)]
    pub sessions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfilerEvent {
    pub name: String,
    pub timestamp: String,
    #[serde(default)]
    pub values: OptionsMap,
}

/// Wire payload of `profiler/eventsavailable`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfilerEventsAvailableParams {
    pub owner_uri: String,
    #[serde(default)]
    pub events: Vec<ProfilerEvent>,
    #[serde(default)]
    pub events_lost: bool,
}

/// Host-facing view of `profiler/eventsavailable`, keyed by session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfilerSessionEvents {
    pub session_id: String,
    pub events: Vec<ProfilerEvent>,
    pub events_lost: bool,
}

impl From<ProfilerEventsAvailableParams> for ProfilerSessionEvents {
    fn from(params: ProfilerEventsAvailableParams) -> Self {
        Self {
            session_id: params.owner_uri,
            events: params.events,
            events_lost: params.events_lost,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfilerSessionStoppedParams {
    pub owner_uri: String,
    pub session_id: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfilerSessionCreatedParams {
    pub owner_uri: String,
    pub session_name: String,
    pub template_name: String,
}
