use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

use super::sink::EventSink;

/// Errors surfaced by the stream registry
#[derive(Debug, Error, PartialEq)]
pub enum StreamError {
    #[error("unknown stream: {0}")]
    UnknownStream(String),
}

/// Trait for components backing one named event stream
///
/// The host drives each stream through exactly two calls: `on_listen` when
/// a subscriber attaches and `on_cancel` when it detaches. Handlers must be
/// reusable indefinitely across listen/cancel cycles.
#[async_trait]
pub trait StreamHandler: Send + Sync {
    /// Begin emitting into `sink`.
    ///
    /// Calling this while already emitting replaces the previous run, so a
    /// handler never holds more than one live timer.
    async fn on_listen(&self, sink: Arc<dyn EventSink>) -> Result<(), StreamError>;

    /// Stop emitting. Safe to call when not emitting (no-op).
    async fn on_cancel(&self) -> Result<(), StreamError>;

    /// The public name of the stream this handler backs.
    fn name(&self) -> &str;
}
