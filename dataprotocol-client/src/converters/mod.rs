//! Shape converters between host and wire representations.
//!
//! Both groups are plain function tables. The client builds one
//! [`ShapeConverters`] value and every feature reads it through the shared
//! client context.

pub mod code;
pub mod protocol;

use std::fmt;

use crate::types::{
    CapabilitiesDiscoveryResult, ConnectParams, ConnectionInfo, ExecutionPlanFlags,
    ExecutionPlanOptions, MetadataQueryResult, ObjectMetadata, ProviderMetadata,
    ScriptOperation, ScriptingParamDetails, ScriptingParams, ServerCapabilities,
};

/// Host to wire translations.
#[derive(Clone, Copy)]
pub struct HostToWire {
    pub as_connection_params: fn(&str, &ConnectionInfo) -> ConnectParams,
    pub as_execution_plan_options: fn(Option<&ExecutionPlanOptions>) -> ExecutionPlanFlags,
    pub as_scripting_params:
        fn(&str, ScriptOperation, &ObjectMetadata, &ScriptingParamDetails) -> ScriptingParams,
}

/// Wire to host translations.
#[derive(Clone, Copy)]
pub struct WireToHost {
    pub as_provider_metadata: fn(MetadataQueryResult) -> ProviderMetadata,
    pub as_server_capabilities: fn(CapabilitiesDiscoveryResult) -> ServerCapabilities,
}

#[derive(Clone, Copy)]
pub struct ShapeConverters {
    pub host_to_wire: HostToWire,
    pub wire_to_host: WireToHost,
}

impl ShapeConverters {
    pub const STANDARD: ShapeConverters = ShapeConverters {
        host_to_wire: HostToWire {
            as_connection_params: code::as_connection_params,
            as_execution_plan_options: code::as_execution_plan_options,
            as_scripting_params: code::as_scripting_params,
        },
        wire_to_host: WireToHost {
            as_provider_metadata: protocol::as_provider_metadata,
            as_server_capabilities: protocol::as_server_capabilities,
        },
    };
}

impl fmt::Debug for ShapeConverters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShapeConverters").finish_non_exhaustive()
    }
}

impl Default for ShapeConverters {
    fn default() -> Self {
        Self::STANDARD
    }
}
