use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info};

use super::call::{MethodCall, MethodError};

/// Trait for components that answer a single named method
#[async_trait]
pub trait MethodHandler: Send + Sync {
    /// The method name this handler answers to.
    fn method(&self) -> &'static str;

    /// Handle one invocation of the method.
    async fn handle(&self, call: &MethodCall) -> Result<serde_json::Value, MethodError>;
}

/// Routes method calls to their registered handlers
///
/// Unrecognized method names come back as `MethodError::NotImplemented`;
/// callers match on it rather than treating it as fatal.
pub struct MethodDispatcher {
    handlers: HashMap<&'static str, Arc<dyn MethodHandler>>,
}

impl MethodDispatcher {
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Register a handler under the method name it reports.
    pub fn add_handler(&mut self, handler: Arc<dyn MethodHandler>) {
        info!(method = handler.method(), "Registering method handler");
        self.handlers.insert(handler.method(), handler);
    }

    /// Dispatch one call to its handler.
    pub async fn dispatch(&self, call: &MethodCall) -> Result<serde_json::Value, MethodError> {
        match self.handlers.get(call.method.as_str()) {
            Some(handler) => {
                debug!(method = %call.method, "Dispatching method call");
                handler.handle(call).await
            }
            None => {
                debug!(method = %call.method, "No handler for method");
                Err(MethodError::NotImplemented(call.method.clone()))
            }
        }
    }
}

impl Default for MethodDispatcher {
    fn default() -> Self {
        Self::new()
    }
}
