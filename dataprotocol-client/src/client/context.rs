//! State shared by every feature of one client: provider identity, transport,
//! diagnostics sink and converters. Also hosts the request wrapper that logs
//! failures and applies the per-operation recovery policy.

use std::fmt;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::converters::ShapeConverters;
use crate::diagnostics::DiagnosticsSink;
use crate::error::{ClientError, ClientResult};
use crate::protocol::{NotificationType, RequestType};
use crate::transport::Transport;

/// What a failed request resolves to. Fixed per operation.
#[derive(Debug, Clone, PartialEq)]
pub enum FailurePolicy<T> {
    /// Propagate the error to the caller.
    Reject,
    /// Resolve to this value instead.
    Fallback(T),
}

pub struct ClientContext {
    provider_id: String,
    transport: Arc<dyn Transport>,
    diagnostics: Arc<dyn DiagnosticsSink>,
    converters: ShapeConverters,
}

impl ClientContext {
    pub(crate) fn new(
        provider_id: String,
        transport: Arc<dyn Transport>,
        diagnostics: Arc<dyn DiagnosticsSink>,
        converters: ShapeConverters,
    ) -> Self {
        Self {
            provider_id,
            transport,
            diagnostics,
            converters,
        }
    }

    pub fn provider_id(&self) -> &str {
        &self.provider_id
    }

    pub fn converters(&self) -> &ShapeConverters {
        &self.converters
    }

    pub fn transport(&self) -> &Arc<dyn Transport> {
        &self.transport
    }

    /// Send a request without any failure handling.
    pub async fn send_request<P, R>(&self, ty: RequestType<P, R>, params: P) -> ClientResult<R>
    where
        P: Serialize,
        R: DeserializeOwned,
    {
        let params = serde_json::to_value(params)?;
        debug!(method = ty.method(), "sending request");
        let response = self.transport.send_request(ty.method(), params).await?;
        Ok(serde_json::from_value(response)?)
    }

    /// Send a request, map the response with `on_success`, and on failure log
    /// the error under the request's method before applying `policy`.
    pub async fn guarded_request<P, R, T, F>(
        &self,
        ty: RequestType<P, R>,
        params: P,
        policy: FailurePolicy<T>,
        on_success: F,
    ) -> ClientResult<T>
    where
        P: Serialize,
        R: DeserializeOwned,
        F: FnOnce(R) -> T,
    {
        match self.send_request(ty, params).await {
            Ok(response) => Ok(on_success(response)),
            Err(err) => {
                self.log_failed_request(ty.method(), &err);
                match policy {
                    FailurePolicy::Reject => Err(err),
                    FailurePolicy::Fallback(value) => Ok(value),
                }
            }
        }
    }

    pub fn send_notification<P>(&self, ty: NotificationType<P>, params: P) -> ClientResult<()>
    where
        P: Serialize,
    {
        let params = serde_json::to_value(params)?;
        debug!(method = ty.method(), "sending notification");
        self.transport.send_notification(ty.method(), params)?;
        Ok(())
    }

    /// Fire-and-forget: a failed send is logged and otherwise ignored.
    pub fn notify<P>(&self, ty: NotificationType<P>, params: P)
    where
        P: Serialize,
    {
        if let Err(err) = self.send_notification(ty, params) {
            self.log_failed_request(ty.method(), &err);
        }
    }

    pub fn log_failed_request(&self, method: &str, error: &ClientError) {
        self.diagnostics.log_failed_request(method, error);
    }
}

impl fmt::Debug for ClientContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientContext")
            .field("provider_id", &self.provider_id)
            .finish_non_exhaustive()
    }
}
