#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::Value;

use dataprotocol_client::prelude::*;

type Handlers = Arc<Mutex<HashMap<String, Vec<(u64, NotificationHandler)>>>>;

/// In-memory transport: scripted responses per method, recorded traffic and
/// a notification bus the test drives with [`MemoryTransport::emit`].
#[derive(Default)]
pub struct MemoryTransport {
    responses: Mutex<HashMap<String, Result<Value, TransportError>>>,
    requests: Mutex<Vec<(String, Value)>>,
    notifications: Mutex<Vec<(String, Value)>>,
    handlers: Handlers,
    next_handler: AtomicU64,
}

impl MemoryTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Answer every later `method` request with `response`.
    pub fn respond(&self, method: &str, response: Value) {
        self.responses
            .lock()
            .unwrap()
            .insert(method.to_string(), Ok(response));
    }

    /// Fail every later `method` request with `error`.
    pub fn fail(&self, method: &str, error: TransportError) {
        self.responses
            .lock()
            .unwrap()
            .insert(method.to_string(), Err(error));
    }

    pub fn requests(&self) -> Vec<(String, Value)> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_methods(&self) -> Vec<String> {
        self.requests().into_iter().map(|(method, _)| method).collect()
    }

    pub fn last_request(&self, method: &str) -> Option<Value> {
        self.requests()
            .into_iter()
            .rev()
            .find(|(m, _)| m == method)
            .map(|(_, params)| params)
    }

    pub fn notifications(&self) -> Vec<(String, Value)> {
        self.notifications.lock().unwrap().clone()
    }

    pub fn handler_count(&self, method: &str) -> usize {
        self.handlers
            .lock()
            .unwrap()
            .get(method)
            .map_or(0, Vec::len)
    }

    /// Push a backend notification through every handler for `method`.
    pub fn emit(&self, method: &str, payload: Value) {
        let snapshot: Vec<NotificationHandler> = self
            .handlers
            .lock()
            .unwrap()
            .get(method)
            .map(|handlers| handlers.iter().map(|(_, h)| h.clone()).collect())
            .unwrap_or_default();
        for handler in snapshot {
            handler(payload.clone());
        }
    }
}

#[async_trait]
impl Transport for MemoryTransport {
    async fn send_request(&self, method: &str, params: Value) -> Result<Value, TransportError> {
        self.requests
            .lock()
            .unwrap()
            .push((method.to_string(), params));
        self.responses
            .lock()
            .unwrap()
            .get(method)
            .cloned()
            .unwrap_or(Ok(Value::Null))
    }

    fn send_notification(&self, method: &str, params: Value) -> Result<(), TransportError> {
        self.notifications
            .lock()
            .unwrap()
            .push((method.to_string(), params));
        Ok(())
    }

    fn on_notification(&self, method: &str, handler: NotificationHandler) -> Disposable {
        let id = self.next_handler.fetch_add(1, Ordering::Relaxed);
        self.handlers
            .lock()
            .unwrap()
            .entry(method.to_string())
            .or_default()
            .push((id, handler));

        let handlers = self.handlers.clone();
        let method = method.to_string();
        Disposable::new(move || {
            if let Some(list) = handlers.lock().unwrap().get_mut(&method) {
                list.retain(|(existing, _)| *existing != id);
            }
        })
    }
}

/// Host registrar that keeps every live provider.
#[derive(Default)]
pub struct RecordingRegistrar {
    live: Arc<Mutex<Vec<(u64, DataProvider)>>>,
    next_id: AtomicU64,
}

impl RecordingRegistrar {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn live_count(&self) -> usize {
        self.live.lock().unwrap().len()
    }

    pub fn kinds(&self) -> Vec<FeatureKind> {
        self.live
            .lock()
            .unwrap()
            .iter()
            .map(|(_, provider)| provider.kind())
            .collect()
    }

    fn latest(&self, kind: FeatureKind) -> Option<DataProvider> {
        self.live
            .lock()
            .unwrap()
            .iter()
            .rev()
            .find(|(_, provider)| provider.kind() == kind)
            .map(|(_, provider)| provider.clone())
    }

    pub fn connection(&self) -> ConnectionProvider {
        match self.latest(FeatureKind::Connection) {
            Some(DataProvider::Connection(p)) => p,
            other => panic!("no connection provider registered: {other:?}"),
        }
    }

    pub fn query(&self) -> QueryProvider {
        match self.latest(FeatureKind::Query) {
            Some(DataProvider::Query(p)) => p,
            other => panic!("no query provider registered: {other:?}"),
        }
    }

    pub fn metadata(&self) -> MetadataProvider {
        match self.latest(FeatureKind::Metadata) {
            Some(DataProvider::Metadata(p)) => p,
            other => panic!("no metadata provider registered: {other:?}"),
        }
    }

    pub fn capabilities(&self) -> CapabilitiesProvider {
        match self.latest(FeatureKind::Capabilities) {
            Some(DataProvider::Capabilities(p)) => p,
            other => panic!("no capabilities provider registered: {other:?}"),
        }
    }

    pub fn scripting(&self) -> ScriptingProvider {
        match self.latest(FeatureKind::Scripting) {
            Some(DataProvider::Scripting(p)) => p,
            other => panic!("no scripting provider registered: {other:?}"),
        }
    }

    pub fn profiler(&self) -> ProfilerProvider {
        match self.latest(FeatureKind::Profiler) {
            Some(DataProvider::Profiler(p)) => p,
            other => panic!("no profiler provider registered: {other:?}"),
        }
    }

    pub fn object_explorer(&self) -> ObjectExplorerProvider {
        match self.latest(FeatureKind::ObjectExplorer) {
            Some(DataProvider::ObjectExplorer(p)) => p,
            other => panic!("no object explorer provider registered: {other:?}"),
        }
    }

    pub fn backup(&self) -> BackupProvider {
        match self.latest(FeatureKind::Backup) {
            Some(DataProvider::Backup(p)) => p,
            other => panic!("no backup provider registered: {other:?}"),
        }
    }

    pub fn restore(&self) -> RestoreProvider {
        match self.latest(FeatureKind::Restore) {
            Some(DataProvider::Restore(p)) => p,
            other => panic!("no restore provider registered: {other:?}"),
        }
    }

    pub fn admin(&self) -> AdminServicesProvider {
        match self.latest(FeatureKind::AdminServices) {
            Some(DataProvider::AdminServices(p)) => p,
            other => panic!("no admin services provider registered: {other:?}"),
        }
    }

    pub fn task_services(&self) -> TaskServicesProvider {
        match self.latest(FeatureKind::TaskServices) {
            Some(DataProvider::TaskServices(p)) => p,
            other => panic!("no task services provider registered: {other:?}"),
        }
    }

    pub fn file_browser(&self) -> FileBrowserProvider {
        match self.latest(FeatureKind::FileBrowser) {
            Some(DataProvider::FileBrowser(p)) => p,
            other => panic!("no file browser provider registered: {other:?}"),
        }
    }
}

impl ProviderRegistrar for RecordingRegistrar {
    fn register_provider(&self, provider: DataProvider) -> Disposable {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        self.live.lock().unwrap().push((id, provider));
        let live = self.live.clone();
        Disposable::new(move || {
            live.lock().unwrap().retain(|(existing, _)| *existing != id);
        })
    }
}

/// Diagnostics sink remembering `(method, error)` pairs.
#[derive(Default)]
pub struct RecordingDiagnostics {
    failures: Mutex<Vec<(String, String)>>,
}

impl RecordingDiagnostics {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn methods(&self) -> Vec<String> {
        self.failures
            .lock()
            .unwrap()
            .iter()
            .map(|(method, _)| method.clone())
            .collect()
    }

    pub fn failures(&self) -> Vec<(String, String)> {
        self.failures.lock().unwrap().clone()
    }
}

impl DiagnosticsSink for RecordingDiagnostics {
    fn log_failed_request(&self, method: &str, error: &ClientError) {
        self.failures
            .lock()
            .unwrap()
            .push((method.to_string(), error.to_string()));
    }
}

pub struct Harness {
    pub client: DataProtocolClient,
    pub transport: Arc<MemoryTransport>,
    pub registrar: Arc<RecordingRegistrar>,
    pub diagnostics: Arc<RecordingDiagnostics>,
}

impl Harness {
    pub fn new(options: ClientOptions) -> Self {
        let transport = MemoryTransport::new();
        let registrar = RecordingRegistrar::new();
        let diagnostics = RecordingDiagnostics::new();
        let client = DataProtocolClient::with_collaborators(
            options,
            transport.clone(),
            registrar.clone(),
            diagnostics.clone(),
            ShapeConverters::STANDARD,
        )
        .expect("client construction");
        Self {
            client,
            transport,
            registrar,
            diagnostics,
        }
    }

    /// Default feature set, already initialized.
    pub fn initialized(provider_id: &str) -> Self {
        let harness = Self::new(ClientOptions::new(provider_id));
        harness.client.client_capabilities();
        harness.client.initialize().expect("initialize");
        harness
    }
}
