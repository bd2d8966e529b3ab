// Data protocol client
// Capability negotiation and message dispatch between host data providers
// and a data protocol backend.
pub mod client;
pub mod config;
pub mod converters;
pub mod diagnostics;
pub mod disposable;
pub mod error;
pub mod feature;
pub mod prelude;
pub mod protocol;
pub mod providers;
pub mod transport;
pub mod types;

// Re-export the façade and the seams an integration implements.
pub use client::{DataProtocolClient, FailurePolicy, Registration};
pub use config::ClientOptions;
pub use diagnostics::{DiagnosticsSink, TracingDiagnostics};
pub use disposable::Disposable;
pub use error::{ClientError, ClientResult, TransportError};
pub use feature::{CapabilityFeature, FeatureKind, FeatureState, ListenerHandle};
pub use protocol::{ClientCapabilities, MessageDescriptor, NotificationType, RequestType};
pub use providers::{DataProvider, ProviderRegistrar};
pub use transport::{NotificationHandler, Transport};
