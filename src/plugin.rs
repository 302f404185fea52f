use std::sync::Arc;
use std::time::Duration;
use strum::IntoEnumIterator;
use strum_macros::EnumIter;
use tokio::sync::mpsc;
use tracing::info;

use crate::method::{
    HostPlatformInfo, MethodCall, MethodDispatcher, MethodError, PlatformVersionHandler,
};
use crate::stream::{PeriodicEmitter, StreamError, StreamRegistry, DEFAULT_TICK_INTERVAL};

/// Name of the plugin's method channel.
pub const METHOD_CHANNEL: &str = "randpulse";

/// The three random-number streams the plugin exposes
///
/// They behave identically and differ only in name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum StreamChannel {
    Channel1,
    Channel2,
    Channel3,
}

impl StreamChannel {
    /// Public stream name a host subscribes with.
    pub fn name(&self) -> &'static str {
        match self {
            StreamChannel::Channel1 => "randpulse.channel1",
            StreamChannel::Channel2 => "randpulse.channel2",
            StreamChannel::Channel3 => "randpulse.channel3",
        }
    }
}

/// Configuration for the plugin bridge
#[derive(Debug, Clone)]
pub struct PluginConfig {
    /// Spacing between values on every stream.
    pub tick_interval: Duration,
}

impl Default for PluginConfig {
    fn default() -> Self {
        Self {
            tick_interval: DEFAULT_TICK_INTERVAL,
        }
    }
}

/// The plugin's host-facing surface: one method channel, three streams
///
/// Construction registers everything the plugin offers; the emitters then
/// live for the lifetime of the bridge and are driven solely through
/// subscribe/unsubscribe.
pub struct PluginBridge {
    dispatcher: MethodDispatcher,
    streams: StreamRegistry,
}

impl PluginBridge {
    pub fn new() -> Self {
        Self::with_config(PluginConfig::default())
    }

    pub fn with_config(config: PluginConfig) -> Self {
        info!(
            tick_interval_ms = config.tick_interval.as_millis() as u64,
            "Setting up plugin bridge"
        );

        let mut dispatcher = MethodDispatcher::new();
        dispatcher.add_handler(Arc::new(PlatformVersionHandler::new(Arc::new(
            HostPlatformInfo,
        ))));

        let mut streams = StreamRegistry::new();
        for channel in StreamChannel::iter() {
            streams.register(Arc::new(PeriodicEmitter::with_interval(
                channel.name(),
                config.tick_interval,
            )));
        }

        Self {
            dispatcher,
            streams,
        }
    }

    /// Invoke a named method; unrecognized names return `NotImplemented`.
    pub async fn handle_method(
        &self,
        call: &MethodCall,
    ) -> Result<serde_json::Value, MethodError> {
        self.dispatcher.dispatch(call).await
    }

    /// Subscribe to one of the plugin's streams.
    pub async fn subscribe(
        &self,
        stream: &str,
    ) -> Result<mpsc::UnboundedReceiver<i64>, StreamError> {
        self.streams.subscribe(stream).await
    }

    /// Unsubscribe from one of the plugin's streams.
    pub async fn unsubscribe(&self, stream: &str) -> Result<(), StreamError> {
        self.streams.unsubscribe(stream).await
    }

    /// Names of the streams the plugin exposes.
    pub fn stream_names(&self) -> Vec<&str> {
        self.streams.stream_names()
    }
}

impl Default for PluginBridge {
    fn default() -> Self {
        Self::new()
    }
}
