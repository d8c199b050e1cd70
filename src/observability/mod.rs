//! Observability setup.
//!
//! Derivation and lifecycle code emit `tracing` spans and events throughout;
//! this module wires up a subscriber for hosts that want them on a terminal.
//! Initialization is optional: a host with its own subscriber can skip it.

pub mod init;

pub use init::init_tracing;
