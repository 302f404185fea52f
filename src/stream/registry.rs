use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, info, instrument};

use super::handler::{StreamError, StreamHandler};
use super::sink::ChannelSink;

/// Registry of named event streams
///
/// Streams are registered once at startup and live for the process
/// lifetime; subscribers come and go through subscribe/unsubscribe. Each
/// stream carries at most one subscriber at a time.
pub struct StreamRegistry {
    streams: HashMap<String, Arc<dyn StreamHandler>>,
}

impl StreamRegistry {
    pub fn new() -> Self {
        Self {
            streams: HashMap::new(),
        }
    }

    /// Register a stream under its public name.
    pub fn register(&mut self, handler: Arc<dyn StreamHandler>) {
        info!(stream = handler.name(), "Registering event stream");
        self.streams.insert(handler.name().to_string(), handler);
    }

    /// Attach a subscriber to a named stream.
    ///
    /// Returns the receiving half of the subscriber's channel; the first
    /// value arrives one tick interval after this call. Subscribing to a
    /// stream that already has a subscriber replaces it.
    #[instrument(skip(self))]
    pub async fn subscribe(&self, name: &str) -> Result<mpsc::UnboundedReceiver<i64>, StreamError> {
        let handler = self.get(name)?;
        let (tx, rx) = mpsc::unbounded_channel();
        handler.on_listen(Arc::new(ChannelSink::new(tx))).await?;
        debug!(stream = name, "Subscriber attached");
        Ok(rx)
    }

    /// Detach the current subscriber from a named stream.
    #[instrument(skip(self))]
    pub async fn unsubscribe(&self, name: &str) -> Result<(), StreamError> {
        let handler = self.get(name)?;
        handler.on_cancel().await?;
        debug!(stream = name, "Subscriber detached");
        Ok(())
    }

    /// Names of all registered streams.
    pub fn stream_names(&self) -> Vec<&str> {
        self.streams.keys().map(String::as_str).collect()
    }

    fn get(&self, name: &str) -> Result<&Arc<dyn StreamHandler>, StreamError> {
        self.streams
            .get(name)
            .ok_or_else(|| StreamError::UnknownStream(name.to_string()))
    }
}

impl Default for StreamRegistry {
    fn default() -> Self {
        Self::new()
    }
}
