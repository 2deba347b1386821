//! Compile-time build metadata for `txm version`.

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Short commit hash captured by `build.rs`, or `unknown`.
pub const GIT_COMMIT: &str = env!("TXM_BUILD_GIT_HASH");

pub const BUILD_TIMESTAMP: &str = env!("TXM_BUILD_TIMESTAMP");

/// Version block printed by `txm version`.
pub fn version_text() -> String {
    format!("txm {VERSION}\ncommit: {GIT_COMMIT}\nbuilt: {BUILD_TIMESTAMP}")
}
