use crate::error::ClientError;

/// Receives every failed outgoing request before its recovery policy runs.
pub trait DiagnosticsSink: Send + Sync {
    fn log_failed_request(&self, method: &str, error: &ClientError);
}

/// Default sink: one `tracing` error event per failed request.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingDiagnostics;

impl DiagnosticsSink for TracingDiagnostics {
    fn log_failed_request(&self, method: &str, error: &ClientError) {
        tracing::error!(method, error = %error, "request failed");
    }
}
