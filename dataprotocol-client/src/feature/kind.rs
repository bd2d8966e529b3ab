//! Closed registry of capability domains.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::FeatureScope;
use crate::error::ClientError;
use crate::protocol::messages;
use crate::protocol::CapabilityBundle;
use crate::providers::{self, DataProvider};

/// One capability domain. The serialized form doubles as the domain's
/// namespace in the capability-advertisement document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FeatureKind {
    Connection,
    Capabilities,
    Query,
    Metadata,
    AdminServices,
    Backup,
    Restore,
    ObjectExplorer,
    Scripting,
    TaskServices,
    FileBrowser,
    Profiler,
}

/// Static description of a domain: its bundle and how to build its provider.
pub struct FeatureSpec {
    pub kind: FeatureKind,
    pub namespace: &'static str,
    pub messages: CapabilityBundle,
    pub build: fn(&FeatureScope<'_>) -> DataProvider,
}

impl fmt::Debug for FeatureSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FeatureSpec")
            .field("kind", &self.kind)
            .field("namespace", &self.namespace)
            .field("messages", &self.messages.len())
            .finish()
    }
}

// Indexed by `FeatureKind as usize`.
static FEATURE_SPECS: [FeatureSpec; 12] = [
    FeatureSpec {
        kind: FeatureKind::Connection,
        namespace: "connection",
        messages: messages::connection::BUNDLE,
        build: providers::connection::build,
    },
    FeatureSpec {
        kind: FeatureKind::Capabilities,
        namespace: "capabilities",
        messages: messages::capabilities::BUNDLE,
        build: providers::capabilities::build,
    },
    FeatureSpec {
        kind: FeatureKind::Query,
        namespace: "query",
        messages: messages::query::BUNDLE,
        build: providers::query::build,
    },
    FeatureSpec {
        kind: FeatureKind::Metadata,
        namespace: "metadata",
        messages: messages::metadata::BUNDLE,
        build: providers::metadata::build,
    },
    FeatureSpec {
        kind: FeatureKind::AdminServices,
        namespace: "adminServices",
        messages: messages::admin::BUNDLE,
        build: providers::admin::build,
    },
    FeatureSpec {
        kind: FeatureKind::Backup,
        namespace: "backup",
        messages: messages::backup::BUNDLE,
        build: providers::backup::build,
    },
    FeatureSpec {
        kind: FeatureKind::Restore,
        namespace: "restore",
        messages: messages::restore::BUNDLE,
        build: providers::restore::build,
    },
    FeatureSpec {
        kind: FeatureKind::ObjectExplorer,
        namespace: "objectExplorer",
        messages: messages::object_explorer::BUNDLE,
        build: providers::object_explorer::build,
    },
    FeatureSpec {
        kind: FeatureKind::Scripting,
        namespace: "scripting",
        messages: messages::scripting::BUNDLE,
        build: providers::scripting::build,
    },
    FeatureSpec {
        kind: FeatureKind::TaskServices,
        namespace: "taskServices",
        messages: messages::tasks::BUNDLE,
        build: providers::task_services::build,
    },
    FeatureSpec {
        kind: FeatureKind::FileBrowser,
        namespace: "fileBrowser",
        messages: messages::file_browser::BUNDLE,
        build: providers::file_browser::build,
    },
    FeatureSpec {
        kind: FeatureKind::Profiler,
        namespace: "profiler",
        messages: messages::profiler::BUNDLE,
        build: providers::profiler::build,
    },
];

impl FeatureKind {
    /// Default feature set, in activation order.
    pub const DEFAULT: [FeatureKind; 12] = [
        FeatureKind::Connection,
        FeatureKind::Capabilities,
        FeatureKind::Query,
        FeatureKind::Metadata,
        FeatureKind::AdminServices,
        FeatureKind::Backup,
        FeatureKind::Restore,
        FeatureKind::ObjectExplorer,
        FeatureKind::Scripting,
        FeatureKind::TaskServices,
        FeatureKind::FileBrowser,
        FeatureKind::Profiler,
    ];

    pub fn spec(self) -> &'static FeatureSpec {
        &FEATURE_SPECS[self as usize]
    }

    pub fn namespace(self) -> &'static str {
        self.spec().namespace
    }

    pub fn messages(self) -> CapabilityBundle {
        self.spec().messages
    }

    pub fn owns(self, method: &str) -> bool {
        self.messages().iter().any(|m| m.method == method)
    }
}

impl fmt::Display for FeatureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.namespace())
    }
}

impl FromStr for FeatureKind {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim();
        FeatureKind::DEFAULT
            .into_iter()
            .find(|kind| kind.namespace().eq_ignore_ascii_case(tag))
            .ok_or_else(|| ClientError::InvalidConfig(format!("unknown feature '{tag}'")))
    }
}
