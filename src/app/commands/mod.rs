//! Handlers for the verbs that do not touch a multiplexer.

/// `txm config` handlers.
pub(crate) mod config;
/// `txm uninstall`.
pub(crate) mod uninstall;
/// `txm version` and `txm update`.
pub(crate) mod version;
