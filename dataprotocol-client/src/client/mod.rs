//! Client façade
//!
//! [`DataProtocolClient`] owns the provider identity, the converters and the
//! set of active capability features. The host drives the handshake:
//! `fill_client_capabilities` before sending the advertisement,
//! `initialize` once the backend answered, then `register_capability` /
//! `unregister_capability` for backend-initiated registrations.

pub mod context;

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info};

use crate::config::ClientOptions;
use crate::converters::ShapeConverters;
use crate::diagnostics::{DiagnosticsSink, TracingDiagnostics};
use crate::error::{ClientError, ClientResult};
use crate::feature::{CapabilityFeature, FeatureKind, FeatureState};
use crate::protocol::{ClientCapabilities, MessageDescriptor};
use crate::providers::ProviderRegistrar;
use crate::transport::Transport;
use context::ClientContext;

pub use context::FailurePolicy;

/// A backend-initiated registration of one method.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub id: String,
    pub method: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub register_options: Option<Value>,
}

impl Registration {
    pub fn new(id: impl Into<String>, method: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            method: method.into(),
            register_options: None,
        }
    }
}

pub struct DataProtocolClient {
    context: Arc<ClientContext>,
    features: Vec<CapabilityFeature>,
}

impl DataProtocolClient {
    /// Build a client with the default diagnostics sink and converters.
    pub fn new(
        options: ClientOptions,
        transport: Arc<dyn Transport>,
        registrar: Arc<dyn ProviderRegistrar>,
    ) -> ClientResult<Self> {
        Self::with_collaborators(
            options,
            transport,
            registrar,
            Arc::new(TracingDiagnostics),
            ShapeConverters::STANDARD,
        )
    }

    pub fn with_collaborators(
        options: ClientOptions,
        transport: Arc<dyn Transport>,
        registrar: Arc<dyn ProviderRegistrar>,
        diagnostics: Arc<dyn DiagnosticsSink>,
        converters: ShapeConverters,
    ) -> ClientResult<Self> {
        if options.provider_id.trim().is_empty() {
            return Err(ClientError::MissingProviderId);
        }

        let kinds = options.feature_kinds();
        let context = Arc::new(ClientContext::new(
            options.provider_id,
            transport,
            diagnostics,
            converters,
        ));

        let mut features: Vec<CapabilityFeature> = Vec::with_capacity(kinds.len());
        for kind in kinds {
            if features.iter().any(|f| f.kind() == kind) {
                debug!(feature = %kind, "duplicate feature ignored");
                continue;
            }
            features.push(CapabilityFeature::new(kind, context.clone(), registrar.clone()));
        }

        info!(
            provider = context.provider_id(),
            features = features.len(),
            "data protocol client created"
        );
        Ok(Self { context, features })
    }

    pub fn provider_id(&self) -> &str {
        self.context.provider_id()
    }

    pub fn converters(&self) -> &ShapeConverters {
        self.context.converters()
    }

    pub fn features(&self) -> &[CapabilityFeature] {
        &self.features
    }

    pub fn feature(&self, kind: FeatureKind) -> Option<&CapabilityFeature> {
        self.features.iter().find(|f| f.kind() == kind)
    }

    /// Merge every active feature's entry into `capabilities`.
    pub fn fill_client_capabilities(&self, capabilities: &mut ClientCapabilities) {
        for feature in &self.features {
            feature.fill_client_capabilities(capabilities);
        }
    }

    /// Fresh advertisement document with every active feature declared.
    pub fn client_capabilities(&self) -> ClientCapabilities {
        let mut capabilities = ClientCapabilities::new();
        self.fill_client_capabilities(&mut capabilities);
        capabilities
    }

    /// Self-register every feature; returns the registration ids in
    /// activation order.
    pub fn initialize(&self) -> ClientResult<Vec<String>> {
        self.features.iter().map(CapabilityFeature::initialize).collect()
    }

    /// Route each registration to the first active feature owning its method.
    ///
    /// The whole batch is resolved before anything is registered, so a batch
    /// with an unroutable entry leaves no provider behind.
    pub fn register_capability(&self, registrations: &[Registration]) -> ClientResult<()> {
        let resolved = registrations
            .iter()
            .map(|registration| {
                self.route(registration)
                    .map(|(feature, descriptor)| (feature, descriptor, registration.id.as_str()))
            })
            .collect::<ClientResult<Vec<_>>>()?;

        for (feature, descriptor, id) in resolved {
            feature.register_message(descriptor, id)?;
        }
        Ok(())
    }

    fn route(
        &self,
        registration: &Registration,
    ) -> ClientResult<(&CapabilityFeature, MessageDescriptor)> {
        let (feature, descriptor) = self
            .features
            .iter()
            .find_map(|feature| {
                feature
                    .messages()
                    .iter()
                    .find(|m| m.method == registration.method)
                    .map(|descriptor| (feature, *descriptor))
            })
            .ok_or_else(|| ClientError::WrongFeature {
                requested: registration.method.clone(),
                feature: "<none>".to_string(),
            })?;
        if feature.state() == FeatureState::Disposed {
            return Err(ClientError::FeatureDisposed(feature.namespace().to_string()));
        }
        Ok((feature, descriptor))
    }

    /// Unknown ids are ignored.
    pub fn unregister_capability<I, S>(&self, ids: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for id in ids {
            for feature in &self.features {
                feature.unregister(id.as_ref());
            }
        }
    }

    pub fn dispose(&self) {
        for feature in &self.features {
            feature.dispose();
        }
    }
}

impl fmt::Debug for DataProtocolClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DataProtocolClient")
            .field("provider_id", &self.provider_id())
            .field("features", &self.features)
            .finish()
    }
}
