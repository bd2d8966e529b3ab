//! Explicitly released resources (subscriptions, registered providers).

use std::fmt;

/// A one-shot release action.
///
/// `dispose` runs the action at most once; later calls are no-ops. Dropping a
/// `Disposable` without disposing it does not run the action.
pub struct Disposable {
    action: Option<Box<dyn FnOnce() + Send>>,
}

impl Disposable {
    pub fn new<F>(action: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        Self {
            action: Some(Box::new(action)),
        }
    }

    pub fn noop() -> Self {
        Self { action: None }
    }

    pub fn dispose(&mut self) {
        if let Some(action) = self.action.take() {
            action();
        }
    }

    pub fn is_disposed(&self) -> bool {
        self.action.is_none()
    }
}

impl fmt::Debug for Disposable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Disposable")
            .field("disposed", &self.is_disposed())
            .finish()
    }
}
