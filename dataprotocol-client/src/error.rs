//! Error types for the data protocol client.
//!
//! Three families live here:
//! - transport/backend failures (`TransportError`), recoverable and always logged
//! - unsupported caller input, rejected before anything reaches the transport
//! - wiring errors (wrong feature, missing provider id), returned to the
//!   integration and never recovered internally

use serde_json::Value;
use thiserror::Error;

pub type ClientResult<T> = Result<T, ClientError>;

/// Failure reported by the transport primitive.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum TransportError {
    #[error("request failed ({code}): {message}")]
    Rpc {
        code: i64,
        message: String,
        data: Option<Value>,
    },

    #[error("connection to backend closed")]
    Closed,

    #[error("transport I/O error: {0}")]
    Io(String),
}

impl TransportError {
    pub fn rpc(code: i64, message: impl Into<String>) -> Self {
        TransportError::Rpc {
            code,
            message: message.into(),
            data: None,
        }
    }
}

#[derive(Debug, Error)]
pub enum ClientError {
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("Register called on wrong feature. Requested {requested} but reached feature {feature}")]
    WrongFeature { requested: String, feature: String },

    #[error("a provider id is required to construct the client")]
    MissingProviderId,

    #[error("feature {0} has been disposed")]
    FeatureDisposed(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl ClientError {
    /// True for errors raised by the backend or the channel, as opposed to
    /// local input or wiring errors.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            ClientError::Transport(_) | ClientError::Serialization(_)
        )
    }
}

impl From<toml::de::Error> for ClientError {
    fn from(e: toml::de::Error) -> Self {
        ClientError::InvalidConfig(e.to_string())
    }
}

impl From<std::io::Error> for ClientError {
    fn from(e: std::io::Error) -> Self {
        ClientError::InvalidConfig(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_errors_are_recoverable() {
        let err: ClientError = TransportError::Closed.into();
        assert!(err.is_recoverable());

        let err = ClientError::UnsupportedFormat("pdf".to_string());
        assert!(!err.is_recoverable());
    }

    #[test]
    fn rpc_error_display_includes_code() {
        let err = TransportError::rpc(-32603, "boom");
        assert_eq!(err.to_string(), "request failed (-32603): boom");
    }
}
