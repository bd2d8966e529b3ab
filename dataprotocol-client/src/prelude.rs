//! Everything a host integration usually needs in one import.

pub use crate::client::{DataProtocolClient, Registration};
pub use crate::config::ClientOptions;
pub use crate::converters::ShapeConverters;
pub use crate::diagnostics::{DiagnosticsSink, TracingDiagnostics};
pub use crate::disposable::Disposable;
pub use crate::error::{ClientError, ClientResult, TransportError};
pub use crate::feature::{FeatureKind, FeatureState, ListenerHandle};
pub use crate::protocol::ClientCapabilities;
pub use crate::providers::{
    AdminServicesProvider, BackupProvider, CapabilitiesProvider, ConnectionProvider, DataProvider,
    FileBrowserProvider, MetadataProvider, ObjectExplorerProvider, ProfilerProvider,
    ProviderRegistrar, QueryProvider, RestoreProvider, ScriptingProvider, TaskServicesProvider,
};
pub use crate::transport::{NotificationHandler, Transport};
