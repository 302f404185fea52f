use async_trait::async_trait;
use rand::Rng;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::debug;

use super::handler::{StreamError, StreamHandler};
use super::sink::EventSink;

/// Default spacing between emitted values.
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_secs(1);

enum EmitterState {
    Idle,
    Running {
        task: JoinHandle<()>,
        sink: Arc<dyn EventSink>,
    },
}

struct Inner {
    /// Bumped on every listen/cancel transition. A tick task may only
    /// deliver while the epoch it was spawned under is still current.
    epoch: u64,
    state: EmitterState,
}

/// Emits one uniformly random integer in [0, 100] per tick while running
///
/// Each emitter owns at most one timer task at a time. `on_listen` while
/// already running re-arms (the previous timer is aborted, a fresh one
/// started); `on_cancel` while idle is a no-op. Delivery happens under the
/// same lock that guards the state transition, so once `on_cancel` returns
/// no value from that run can reach the subscriber.
pub struct PeriodicEmitter {
    name: String,
    interval: Duration,
    inner: Arc<Mutex<Inner>>,
}

impl PeriodicEmitter {
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_interval(name, DEFAULT_TICK_INTERVAL)
    }

    pub fn with_interval(name: impl Into<String>, interval: Duration) -> Self {
        Self {
            name: name.into(),
            interval,
            inner: Arc::new(Mutex::new(Inner {
                epoch: 0,
                state: EmitterState::Idle,
            })),
        }
    }

    /// Whether a timer task is currently live for this emitter.
    pub async fn is_running(&self) -> bool {
        matches!(self.inner.lock().await.state, EmitterState::Running { .. })
    }
}

#[async_trait]
impl StreamHandler for PeriodicEmitter {
    async fn on_listen(&self, sink: Arc<dyn EventSink>) -> Result<(), StreamError> {
        let mut inner = self.inner.lock().await;

        if let EmitterState::Running { task, .. } =
            std::mem::replace(&mut inner.state, EmitterState::Idle)
        {
            debug!(stream = %self.name, "Listen while running, re-arming timer");
            task.abort();
        }

        inner.epoch += 1;
        let task = tokio::spawn(run_ticks(
            Arc::clone(&self.inner),
            inner.epoch,
            self.interval,
            self.name.clone(),
        ));
        inner.state = EmitterState::Running { task, sink };

        debug!(
            stream = %self.name,
            interval_ms = self.interval.as_millis() as u64,
            "Stream started"
        );
        Ok(())
    }

    async fn on_cancel(&self) -> Result<(), StreamError> {
        let mut inner = self.inner.lock().await;
        inner.epoch += 1;

        match std::mem::replace(&mut inner.state, EmitterState::Idle) {
            EmitterState::Running { task, .. } => {
                task.abort();
                debug!(stream = %self.name, "Stream stopped");
            }
            EmitterState::Idle => {
                debug!(stream = %self.name, "Cancel on idle stream, nothing to do");
            }
        }
        Ok(())
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Timer loop for one run of an emitter.
///
/// The first value goes out one full interval after the start; a stalled
/// host never receives a catch-up burst for missed ticks.
async fn run_ticks(inner: Arc<Mutex<Inner>>, epoch: u64, interval: Duration, name: String) {
    let mut ticker = interval_at(Instant::now() + interval, interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        ticker.tick().await;

        let mut inner = inner.lock().await;
        let sink = match &inner.state {
            EmitterState::Running { sink, .. } if inner.epoch == epoch => Arc::clone(sink),
            _ => break,
        };

        let value: i64 = rand::rng().random_range(0..=100);
        if sink.send(value).is_err() {
            // Subscriber is gone; treat it as an implicit cancel.
            debug!(stream = %name, "Sink closed, stopping emission");
            inner.state = EmitterState::Idle;
            break;
        }
    }
}
