use thiserror::Error;
use tokio::sync::mpsc;

/// The subscriber side of a stream is gone; nothing can be delivered.
#[derive(Debug, Error, PartialEq)]
#[error("event sink is closed")]
pub struct SinkClosed;

/// Destination for emitted stream values
///
/// The sink is owned by the subscriber; an emitter only holds a reference
/// to it for as long as it is running.
pub trait EventSink: Send + Sync {
    /// Deliver one value to the subscriber.
    fn send(&self, value: i64) -> Result<(), SinkClosed>;
}

/// Event sink backed by an unbounded tokio channel
pub struct ChannelSink {
    tx: mpsc::UnboundedSender<i64>,
}

impl ChannelSink {
    pub fn new(tx: mpsc::UnboundedSender<i64>) -> Self {
        Self { tx }
    }
}

impl EventSink for ChannelSink {
    fn send(&self, value: i64) -> Result<(), SinkClosed> {
        self.tx.send(value).map_err(|_| SinkClosed)
    }
}
