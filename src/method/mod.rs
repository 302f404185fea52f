// Method-call dispatch
//
// The host invokes named methods against the plugin; this module routes
// each call to its handler and signals `NotImplemented` for the rest.

// Public API - what other modules can use
pub use call::{MethodCall, MethodError};
pub use dispatcher::{MethodDispatcher, MethodHandler};
pub use platform_version::{
    HostPlatformInfo, PlatformInfo, PlatformVersionHandler, GET_PLATFORM_VERSION,
};

// Internal modules
mod call;
mod dispatcher;
mod platform_version;
