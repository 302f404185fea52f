use randpulse::{MethodCall, MethodError, PluginBridge, StreamChannel, GET_PLATFORM_VERSION};
use std::time::Duration;
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::time::sleep;

fn drain(rx: &mut UnboundedReceiver<i64>) -> Vec<i64> {
    let mut values = Vec::new();
    while let Ok(value) = rx.try_recv() {
        values.push(value);
    }
    values
}

#[tokio::test(start_paused = true)]
async fn subscriber_receives_exactly_one_value_per_elapsed_tick() {
    let bridge = PluginBridge::new();

    let mut rx = bridge
        .subscribe(StreamChannel::Channel1.name())
        .await
        .expect("channel1 is registered");

    // 3.2 intervals cover the ticks at 1 s, 2 s and 3 s - and nothing else
    sleep(Duration::from_millis(3200)).await;

    let values = drain(&mut rx);
    assert_eq!(values.len(), 3, "expected one value per elapsed tick");
    for value in &values {
        assert!((0..=100).contains(value), "value {value} out of range");
    }

    bridge
        .unsubscribe(StreamChannel::Channel1.name())
        .await
        .expect("channel1 is registered");

    sleep(Duration::from_millis(2000)).await;
    assert!(
        drain(&mut rx).is_empty(),
        "no deliveries may follow an unsubscribe"
    );
}

#[tokio::test(start_paused = true)]
async fn resubscribing_starts_a_fresh_run() {
    let bridge = PluginBridge::new();
    let stream = StreamChannel::Channel2.name();

    let mut rx = bridge.subscribe(stream).await.unwrap();
    sleep(Duration::from_millis(1500)).await;
    assert_eq!(drain(&mut rx).len(), 1);

    bridge.unsubscribe(stream).await.unwrap();
    sleep(Duration::from_millis(4000)).await;

    // The new run owes nothing for the ticks missed while unsubscribed
    let mut rx = bridge.subscribe(stream).await.unwrap();
    sleep(Duration::from_millis(500)).await;
    assert!(drain(&mut rx).is_empty(), "no replayed or immediate values");

    sleep(Duration::from_millis(600)).await;
    assert_eq!(drain(&mut rx).len(), 1);
}

#[tokio::test(start_paused = true)]
async fn streams_run_independently() {
    let bridge = PluginBridge::new();

    let mut rx1 = bridge
        .subscribe(StreamChannel::Channel1.name())
        .await
        .unwrap();
    let mut rx3 = bridge
        .subscribe(StreamChannel::Channel3.name())
        .await
        .unwrap();

    sleep(Duration::from_millis(2500)).await;
    assert_eq!(drain(&mut rx1).len(), 2);
    assert_eq!(drain(&mut rx3).len(), 2);

    bridge
        .unsubscribe(StreamChannel::Channel1.name())
        .await
        .unwrap();

    sleep(Duration::from_millis(2000)).await;
    assert!(
        drain(&mut rx1).is_empty(),
        "cancelled stream must go quiet"
    );
    assert_eq!(
        drain(&mut rx3).len(),
        2,
        "other streams keep ticking after one is cancelled"
    );
}

#[tokio::test]
async fn platform_version_names_the_running_os() {
    let bridge = PluginBridge::new();

    let result = bridge
        .handle_method(&MethodCall::new(GET_PLATFORM_VERSION))
        .await
        .expect("getPlatformVersion is implemented");

    let version = result.as_str().expect("version is a string");
    assert!(!version.is_empty());
    assert!(
        version.contains(&os_info::get().os_type().to_string()),
        "expected an OS identifier in {version:?}"
    );
}

#[tokio::test]
async fn unrecognized_methods_come_back_as_not_implemented() {
    let bridge = PluginBridge::new();

    for method in ["", "openSettings", "getPlatformVersion2"] {
        let result = bridge.handle_method(&MethodCall::new(method)).await;

        assert_eq!(
            result,
            Err(MethodError::NotImplemented(method.to_string())),
            "method {method:?} must signal NotImplemented"
        );
    }
}
