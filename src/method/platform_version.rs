use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

use super::call::{MethodCall, MethodError};
use super::dispatcher::MethodHandler;

/// Method name answered by [`PlatformVersionHandler`].
pub const GET_PLATFORM_VERSION: &str = "getPlatformVersion";

/// Source of the host's OS identity
pub trait PlatformInfo: Send + Sync {
    /// An "<OS name> <OS version>" description of the host. Deterministic
    /// per host and side-effect free.
    fn os_description(&self) -> String;
}

/// PlatformInfo backed by the `os_info` probe
pub struct HostPlatformInfo;

impl PlatformInfo for HostPlatformInfo {
    fn os_description(&self) -> String {
        let info = os_info::get();
        format!("{} {}", info.os_type(), info.version())
    }
}

/// Answers `getPlatformVersion` with the host's OS description
pub struct PlatformVersionHandler {
    platform: Arc<dyn PlatformInfo>,
}

impl PlatformVersionHandler {
    pub fn new(platform: Arc<dyn PlatformInfo>) -> Self {
        Self { platform }
    }
}

#[async_trait]
impl MethodHandler for PlatformVersionHandler {
    fn method(&self) -> &'static str {
        GET_PLATFORM_VERSION
    }

    async fn handle(&self, _call: &MethodCall) -> Result<serde_json::Value, MethodError> {
        let description = self.platform.os_description();
        debug!(version = %description, "Answering platform version query");
        Ok(serde_json::Value::String(description))
    }
}
