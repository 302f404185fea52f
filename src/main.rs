use randpulse::{MethodCall, PluginBridge, StreamChannel, GET_PLATFORM_VERSION};
use strum::IntoEnumIterator;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "randpulse=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting randpulse demo host");

    let bridge = PluginBridge::new();

    match bridge.handle_method(&MethodCall::new(GET_PLATFORM_VERSION)).await {
        Ok(version) => info!(version = %version, "Platform version"),
        Err(e) => error!(error = %e, "Platform version query failed"),
    }

    // Attach one logging subscriber per stream
    for channel in StreamChannel::iter() {
        let mut rx = bridge
            .subscribe(channel.name())
            .await
            .expect("channels are registered at startup");
        tokio::spawn(async move {
            while let Some(value) = rx.recv().await {
                info!(stream = channel.name(), value, "Received stream value");
            }
        });
    }

    tokio::signal::ctrl_c()
        .await
        .expect("ctrl-c handler installs on every supported host");
    info!("Shutting down");

    for channel in StreamChannel::iter() {
        if let Err(e) = bridge.unsubscribe(channel.name()).await {
            error!(stream = channel.name(), error = %e, "Unsubscribe failed");
        }
    }
}
