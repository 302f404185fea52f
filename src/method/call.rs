use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A named method invocation from the host
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MethodCall {
    pub method: String,
    /// Argument payload; no recognized method reads it today.
    #[serde(default)]
    pub args: serde_json::Value,
}

impl MethodCall {
    pub fn new(method: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            args: serde_json::Value::Null,
        }
    }

    pub fn with_args(method: impl Into<String>, args: serde_json::Value) -> Self {
        Self {
            method: method.into(),
            args,
        }
    }
}

/// Errors returned from method dispatch
///
/// `NotImplemented` is a routing signal, not a fault: it tells the caller
/// this plugin has no handler for that method name.
#[derive(Debug, Error, PartialEq)]
pub enum MethodError {
    #[error("method not implemented: {0}")]
    NotImplemented(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_call_without_args_serializes_null_payload() {
        let call = MethodCall::new("getPlatformVersion");

        let encoded = serde_json::to_value(&call).unwrap();

        assert_eq!(
            encoded,
            json!({ "method": "getPlatformVersion", "args": null })
        );
    }

    #[test]
    fn test_args_round_trip_through_the_envelope() {
        let call = MethodCall::with_args("setRate", json!({ "hz": 1 }));

        let decoded: MethodCall =
            serde_json::from_value(serde_json::to_value(&call).unwrap()).unwrap();

        assert_eq!(decoded.method, "setRate");
        assert_eq!(decoded.args, json!({ "hz": 1 }));
    }

    #[test]
    fn test_args_default_to_null_when_absent() {
        let call: MethodCall =
            serde_json::from_value(json!({ "method": "getPlatformVersion" })).unwrap();

        assert_eq!(call.method, "getPlatformVersion");
        assert!(call.args.is_null());
    }
}
