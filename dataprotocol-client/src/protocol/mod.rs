//! Message catalog
//!
//! Every wire message is declared once as a typed constant (`RequestType` or
//! `NotificationType`) in [`messages`]. Capability bundles are static slices of
//! untyped [`MessageDescriptor`]s used for capability declaration and for
//! validating registration calls.

pub mod capabilities;
pub mod messages;

use std::fmt;
use std::marker::PhantomData;

pub use capabilities::ClientCapabilities;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKind {
    Request,
    Notification,
}

/// Untyped identity of one wire message. Two descriptors are the same message
/// iff their method names match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MessageDescriptor {
    pub method: &'static str,
    pub kind: MessageKind,
}

impl fmt::Display for MessageDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.method)
    }
}

/// Ordered, immutable set of messages owned by one capability domain.
pub type CapabilityBundle = &'static [MessageDescriptor];

/// A request with parameter shape `P` and response shape `R`.
pub struct RequestType<P, R> {
    method: &'static str,
    _shape: PhantomData<fn(P) -> R>,
}

impl<P, R> RequestType<P, R> {
    pub const fn new(method: &'static str) -> Self {
        Self {
            method,
            _shape: PhantomData,
        }
    }

    pub const fn method(&self) -> &'static str {
        self.method
    }

    pub const fn descriptor(&self) -> MessageDescriptor {
        MessageDescriptor {
            method: self.method,
            kind: MessageKind::Request,
        }
    }
}

impl<P, R> Clone for RequestType<P, R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P, R> Copy for RequestType<P, R> {}

impl<P, R> fmt::Debug for RequestType<P, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RequestType").field(&self.method).finish()
    }
}

/// A fire-and-forget notification with payload shape `P`.
pub struct NotificationType<P> {
    method: &'static str,
    _shape: PhantomData<fn(P)>,
}

impl<P> NotificationType<P> {
    pub const fn new(method: &'static str) -> Self {
        Self {
            method,
            _shape: PhantomData,
        }
    }

    pub const fn method(&self) -> &'static str {
        self.method
    }

    pub const fn descriptor(&self) -> MessageDescriptor {
        MessageDescriptor {
            method: self.method,
            kind: MessageKind::Notification,
        }
    }
}

impl<P> Clone for NotificationType<P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P> Copy for NotificationType<P> {}

impl<P> fmt::Debug for NotificationType<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("NotificationType").field(&self.method).finish()
    }
}
