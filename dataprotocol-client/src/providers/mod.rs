//! Host-facing providers, one per capability domain.
//!
//! A provider is the operation set a feature hands to the host when it
//! registers: async request functions plus `register_on_*` listener hooks.
//! Providers are cheap to clone; every clone talks to the same client context
//! and notification channels.

pub mod admin;
pub mod backup;
pub mod capabilities;
pub mod connection;
pub mod file_browser;
pub mod metadata;
pub mod object_explorer;
pub mod profiler;
pub mod query;
pub mod restore;
pub mod scripting;
pub mod task_services;

use crate::disposable::Disposable;
use crate::feature::FeatureKind;

pub use admin::AdminServicesProvider;
pub use backup::BackupProvider;
pub use capabilities::CapabilitiesProvider;
pub use connection::ConnectionProvider;
pub use file_browser::FileBrowserProvider;
pub use metadata::MetadataProvider;
pub use object_explorer::ObjectExplorerProvider;
pub use profiler::ProfilerProvider;
pub use query::QueryProvider;
pub use restore::RestoreProvider;
pub use scripting::ScriptingProvider;
pub use task_services::TaskServicesProvider;

#[derive(Debug, Clone)]
pub enum DataProvider {
    Capabilities(CapabilitiesProvider),
    Connection(ConnectionProvider),
    Query(QueryProvider),
    Metadata(MetadataProvider),
    AdminServices(AdminServicesProvider),
    Backup(BackupProvider),
    Restore(RestoreProvider),
    ObjectExplorer(ObjectExplorerProvider),
    Scripting(ScriptingProvider),
    TaskServices(TaskServicesProvider),
    FileBrowser(FileBrowserProvider),
    Profiler(ProfilerProvider),
}

impl DataProvider {
    pub fn kind(&self) -> FeatureKind {
        match self {
            DataProvider::Capabilities(_) => FeatureKind::Capabilities,
            DataProvider::Connection(_) => FeatureKind::Connection,
            DataProvider::Query(_) => FeatureKind::Query,
            DataProvider::Metadata(_) => FeatureKind::Metadata,
            DataProvider::AdminServices(_) => FeatureKind::AdminServices,
            DataProvider::Backup(_) => FeatureKind::Backup,
            DataProvider::Restore(_) => FeatureKind::Restore,
            DataProvider::ObjectExplorer(_) => FeatureKind::ObjectExplorer,
            DataProvider::Scripting(_) => FeatureKind::Scripting,
            DataProvider::TaskServices(_) => FeatureKind::TaskServices,
            DataProvider::FileBrowser(_) => FeatureKind::FileBrowser,
            DataProvider::Profiler(_) => FeatureKind::Profiler,
        }
    }

    /// Provider identity the host should file this provider under.
    pub fn provider_id(&self) -> &str {
        match self {
            DataProvider::Capabilities(p) => p.provider_id(),
            DataProvider::Connection(p) => p.provider_id(),
            DataProvider::Query(p) => p.provider_id(),
            DataProvider::Metadata(p) => p.provider_id(),
            DataProvider::AdminServices(p) => p.provider_id(),
            DataProvider::Backup(p) => p.provider_id(),
            DataProvider::Restore(p) => p.provider_id(),
            DataProvider::ObjectExplorer(p) => p.provider_id(),
            DataProvider::Scripting(p) => p.provider_id(),
            DataProvider::TaskServices(p) => p.provider_id(),
            DataProvider::FileBrowser(p) => p.provider_id(),
            DataProvider::Profiler(p) => p.provider_id(),
        }
    }
}

/// The host's plugin-registration seam. Disposing the returned handle removes
/// the provider from the host.
pub trait ProviderRegistrar: Send + Sync {
    fn register_provider(&self, provider: DataProvider) -> Disposable;
}
