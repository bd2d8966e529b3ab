//! Transport seam
//!
//! The channel that frames, serializes and delivers messages belongs to the
//! integration. This crate only consumes the three primitives below.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use crate::disposable::Disposable;
use crate::error::TransportError;

/// Callback invoked by the transport for every inbound notification of the
/// method it was registered for, in arrival order.
pub type NotificationHandler = Arc<dyn Fn(Value) + Send + Sync>;

#[async_trait]
pub trait Transport: Send + Sync {
    /// Send a request and wait for its response. Pairing a response with its
    /// request is the transport's job.
    async fn send_request(&self, method: &str, params: Value) -> Result<Value, TransportError>;

    /// Fire-and-forget notification to the backend.
    fn send_notification(&self, method: &str, params: Value) -> Result<(), TransportError>;

    /// Subscribe to backend notifications for `method`. Disposing the returned
    /// handle removes the subscription.
    fn on_notification(&self, method: &str, handler: NotificationHandler) -> Disposable;
}
