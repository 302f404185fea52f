// Event-stream lifecycle components
//
// This module converts a subscribe/unsubscribe lifecycle into periodic
// streams of random values: a reusable emitter, the sink it delivers
// into, and the registry that names the streams for the host.

// Public API - what other modules can use
pub use emitter::{PeriodicEmitter, DEFAULT_TICK_INTERVAL};
pub use handler::{StreamError, StreamHandler};
pub use registry::StreamRegistry;
pub use sink::{ChannelSink, EventSink, SinkClosed};

// Internal modules
mod emitter;
mod handler;
mod registry;
mod sink;
