//! Host and wire data shapes, grouped by capability domain.
//!
//! Field names follow the backend's camelCase wire vocabulary. Shapes that the
//! backend treats as open property bags (backup info, restore options, database
//! info) are kept as JSON maps rather than modelled field by field.

pub mod admin;
pub mod capabilities;
pub mod connection;
pub mod disaster_recovery;
pub mod file_browser;
pub mod metadata;
pub mod object_explorer;
pub mod profiler;
pub mod query;
pub mod scripting;
pub mod tasks;

use serde::{Deserialize, Serialize};

pub use admin::*;
pub use capabilities::*;
pub use connection::*;
pub use disaster_recovery::*;
pub use file_browser::*;
pub use metadata::*;
pub use object_explorer::*;
pub use profiler::*;
pub use query::*;
pub use scripting::*;
pub use tasks::*;

/// Property bag used for open-ended option sets.
pub type OptionsMap = serde_json::Map<String, serde_json::Value>;

/// Parameters for every request that only identifies its owner document or
/// connection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnerUriParams {
    pub owner_uri: String,
}

impl OwnerUriParams {
    pub fn new(owner_uri: impl Into<String>) -> Self {
        Self {
            owner_uri: owner_uri.into(),
        }
    }
}
