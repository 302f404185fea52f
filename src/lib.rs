// Library crate for the randpulse platform bridge
// This file exposes the public API for integration tests and host embedders

pub mod method;
pub mod plugin;
pub mod stream;

// Re-export commonly used types for easier access in tests
pub use method::{MethodCall, MethodDispatcher, MethodError, GET_PLATFORM_VERSION};
pub use plugin::{PluginBridge, PluginConfig, StreamChannel, METHOD_CHANNEL};
pub use stream::{EventSink, PeriodicEmitter, StreamError, StreamHandler, StreamRegistry};
